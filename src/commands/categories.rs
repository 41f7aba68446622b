use clap::Args;

use fauna_parks::CatalogProvider;

use super::OutputFormat;

#[derive(Args)]
pub struct CategoriesCommand {
    /// Output format
    #[arg(long, short, value_enum, default_value = "text")]
    pub format: OutputFormat,
}

impl CategoriesCommand {
    pub fn run<C: CatalogProvider>(&self, catalog: &C) -> Result<(), Box<dyn std::error::Error>> {
        match self.format {
            OutputFormat::Json => {
                println!("{}", serde_json::to_string_pretty(catalog.categories())?);
            }
            OutputFormat::Text => {
                print!("{}", render_text(catalog));
            }
        }
        Ok(())
    }
}

/// One entry per category with its park count.
fn render_text<C: CatalogProvider>(catalog: &C) -> String {
    catalog
        .categories()
        .iter()
        .map(|category| {
            let count = catalog.locations_in(category.id).len();
            format!("{} ({} parks)\n", category, count)
        })
        .collect()
}
