use clap::{Args, Subcommand};

use fauna_parks::share::{location_message, share_quietly, MapDisplay};
use fauna_parks::{CatalogProvider, CategoryId, Config, DetailView, ToggleState};

use super::{OutputFormat, StdoutMap, StdoutShare, Stores};

#[derive(Args)]
pub struct LocationsCommand {
    #[command(subcommand)]
    pub command: LocationsSubcommand,
}

#[derive(Subcommand)]
pub enum LocationsSubcommand {
    /// List parks in a category
    List {
        /// Category (1, 2, 3 or iconic, remote, family); defaults to the configured one
        #[arg(long, short)]
        category: Option<CategoryId>,

        /// List every category
        #[arg(long, conflicts_with = "category")]
        all: bool,

        /// Output format
        #[arg(long, short, value_enum, default_value = "text")]
        format: OutputFormat,
    },

    /// Show a park's details and whether it is saved
    Show {
        /// Location ID (e.g. banff)
        id: String,

        /// Output format
        #[arg(long, short, value_enum, default_value = "text")]
        format: OutputFormat,

        /// Also print a map link
        #[arg(long)]
        map: bool,
    },

    /// Add a park to saved locations
    Save {
        /// Location ID
        id: String,
    },

    /// Remove a park from saved locations
    Unsave {
        /// Location ID
        id: String,
    },

    /// Flip a park's saved state
    Toggle {
        /// Location ID
        id: String,
    },

    /// Print a park's share message
    Share {
        /// Location ID
        id: String,
    },
}

impl LocationsCommand {
    pub async fn run<C: CatalogProvider>(
        &self,
        catalog: &C,
        stores: &Stores,
        config: &Config,
    ) -> Result<(), Box<dyn std::error::Error>> {
        match &self.command {
            LocationsSubcommand::List {
                category,
                all,
                format,
            } => {
                let locations: Vec<_> = if *all {
                    catalog.locations().iter().collect()
                } else {
                    let category = category.unwrap_or(config.default_category.value);
                    catalog.locations_in(category)
                };

                if locations.is_empty() {
                    println!("No locations found");
                    return Ok(());
                }

                match format {
                    OutputFormat::Json => {
                        println!("{}", serde_json::to_string_pretty(&locations)?);
                    }
                    OutputFormat::Text => {
                        println!("{:<16}  {:<36}  CAT  COORDINATES", "ID", "TITLE");
                        println!("{}", "-".repeat(80));
                        for location in &locations {
                            println!(
                                "{:<16}  {:<36}  {:<3}  {:.4}, {:.4}",
                                location.id,
                                location.title,
                                location.category.number(),
                                location.coords.lat,
                                location.coords.lng
                            );
                        }
                        println!("\nTotal: {} location(s)", locations.len());
                    }
                }
                Ok(())
            }

            LocationsSubcommand::Show { id, format, map } => {
                let view = DetailView::activate(catalog, stores.bookmarks.clone(), id).await?;
                let location = view.location();

                match format {
                    OutputFormat::Json => {
                        let mut value = serde_json::to_value(location)?;
                        value["saved"] = serde_json::Value::Bool(view.is_saved());
                        println!("{}", serde_json::to_string_pretty(&value)?);
                    }
                    OutputFormat::Text => {
                        println!("{}", location);
                        println!();
                        println!("Saved: {}", if view.is_saved() { "yes" } else { "no" });
                    }
                }

                if *map {
                    StdoutMap.show(&location.title, location.coords)?;
                }
                Ok(())
            }

            LocationsSubcommand::Save { id } => {
                let mut view = DetailView::activate(catalog, stores.bookmarks.clone(), id).await?;
                if view.is_saved() {
                    println!("{} is already saved", view.location().title);
                } else {
                    view.save().await;
                    println!("Saved {}", view.location().title);
                }
                Ok(())
            }

            LocationsSubcommand::Unsave { id } => {
                let mut view = DetailView::activate(catalog, stores.bookmarks.clone(), id).await?;
                if view.is_saved() {
                    view.unsave().await;
                    println!("Removed {} from saved locations", view.location().title);
                } else {
                    println!("{} is not saved", view.location().title);
                }
                Ok(())
            }

            LocationsSubcommand::Toggle { id } => {
                let mut view = DetailView::open(catalog, stores.bookmarks.clone(), id)?;
                match view.toggle().await {
                    ToggleState::Saved => println!("Saved {}", view.location().title),
                    _ => println!("Removed {} from saved locations", view.location().title),
                }
                Ok(())
            }

            LocationsSubcommand::Share { id } => {
                let location = catalog
                    .location(id)
                    .ok_or_else(|| format!("Location not found: {}", id))?;
                share_quietly(&StdoutShare, &location_message(location));
                Ok(())
            }
        }
    }
}
