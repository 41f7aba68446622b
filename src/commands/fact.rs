use clap::Args;

use fauna_parks::share::{app_message, fact_message, share_quietly};
use fauna_parks::StaticCatalog;

use super::StdoutShare;

#[derive(Args)]
pub struct FactCommand {
    /// Print the fact as a share message
    #[arg(long)]
    pub share: bool,
}

impl FactCommand {
    pub fn run(&self, catalog: &StaticCatalog) -> Result<(), Box<dyn std::error::Error>> {
        let fact = catalog
            .random_fact(&mut rand::rng())
            .ok_or("No facts available")?;

        if self.share {
            share_quietly(&StdoutShare, &fact_message(fact));
        } else {
            println!("Did you know? {}", fact);
        }
        Ok(())
    }
}

#[derive(Args)]
pub struct ShareAppCommand {}

impl ShareAppCommand {
    pub fn run(&self) -> Result<(), Box<dyn std::error::Error>> {
        share_quietly(&StdoutShare, &app_message());
        Ok(())
    }
}
