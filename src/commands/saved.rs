use clap::Args;

use fauna_parks::{saved_cards, CatalogProvider};

use super::{OutputFormat, Stores};

#[derive(Args)]
pub struct SavedCommand {
    /// Output format
    #[arg(long, short, value_enum, default_value = "text")]
    pub format: OutputFormat,
}

impl SavedCommand {
    pub async fn run<C: CatalogProvider>(
        &self,
        catalog: &C,
        stores: &Stores,
    ) -> Result<(), Box<dyn std::error::Error>> {
        let cards = saved_cards(&stores.bookmarks, catalog).await;

        match self.format {
            OutputFormat::Json => {
                println!("{}", serde_json::to_string_pretty(&cards)?);
            }
            OutputFormat::Text => {
                if cards.is_empty() {
                    println!("No saved locations yet");
                    return Ok(());
                }
                for card in &cards {
                    println!("{}", card);
                }
                println!("\nTotal: {} saved location(s)", cards.len());
            }
        }
        Ok(())
    }
}
