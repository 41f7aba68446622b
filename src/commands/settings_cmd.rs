use clap::{Args, Subcommand, ValueEnum};

use super::{OutputFormat, Stores};

#[derive(Clone, Copy, ValueEnum)]
pub enum SettingName {
    Notification,
    Vibration,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum Switch {
    On,
    Off,
}

#[derive(Args)]
pub struct SettingsCommand {
    #[command(subcommand)]
    pub command: SettingsSubcommand,
}

#[derive(Subcommand)]
pub enum SettingsSubcommand {
    /// Show current settings
    Show {
        /// Output format
        #[arg(long, short, value_enum, default_value = "text")]
        format: OutputFormat,
    },

    /// Turn a setting on or off
    Set {
        #[arg(value_enum)]
        name: SettingName,

        #[arg(value_enum)]
        value: Switch,
    },
}

impl SettingsCommand {
    pub async fn run(&self, stores: &Stores) -> Result<(), Box<dyn std::error::Error>> {
        match &self.command {
            SettingsSubcommand::Show { format } => {
                let settings = stores.settings.read().await;
                match format {
                    OutputFormat::Json => {
                        println!("{}", serde_json::to_string_pretty(&settings)?);
                    }
                    OutputFormat::Text => {
                        println!("{}", settings);
                    }
                }
                Ok(())
            }

            SettingsSubcommand::Set { name, value } => {
                let enabled = matches!(value, Switch::On);
                let current = stores.settings.read().await;
                let settings = match name {
                    SettingName::Notification => {
                        stores.settings.set_notification(current, enabled).await
                    }
                    SettingName::Vibration => stores.settings.set_vibration(current, enabled).await,
                };
                println!("{}", settings);
                Ok(())
            }
        }
    }
}
