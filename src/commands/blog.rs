use clap::{Args, Subcommand};

use fauna_parks::share::{share_quietly, story_message};
use fauna_parks::CatalogProvider;

use super::{OutputFormat, StdoutShare};

#[derive(Args)]
pub struct BlogCommand {
    #[command(subcommand)]
    pub command: BlogSubcommand,
}

#[derive(Subcommand)]
pub enum BlogSubcommand {
    /// List stories
    List {
        /// Output format
        #[arg(long, short, value_enum, default_value = "text")]
        format: OutputFormat,
    },

    /// Read a story
    Show {
        /// Story ID
        id: String,

        /// Output format
        #[arg(long, short, value_enum, default_value = "text")]
        format: OutputFormat,
    },

    /// Print a story's share message
    Share {
        /// Story ID
        id: String,
    },
}

impl BlogCommand {
    pub fn run<C: CatalogProvider>(&self, catalog: &C) -> Result<(), Box<dyn std::error::Error>> {
        match &self.command {
            BlogSubcommand::List { format } => {
                let posts = catalog.blog_posts();
                match format {
                    OutputFormat::Json => {
                        println!("{}", serde_json::to_string_pretty(posts)?);
                    }
                    OutputFormat::Text => {
                        println!("{:<4}  TITLE", "ID");
                        println!("{}", "-".repeat(50));
                        for post in posts {
                            println!("{:<4}  {}", post.id, post.title);
                        }
                    }
                }
                Ok(())
            }

            BlogSubcommand::Show { id, format } => {
                let post = catalog
                    .blog_post(id)
                    .ok_or_else(|| format!("Story not found: {}", id))?;
                match format {
                    OutputFormat::Json => {
                        println!("{}", serde_json::to_string_pretty(post)?);
                    }
                    OutputFormat::Text => {
                        println!("{}", post);
                    }
                }
                Ok(())
            }

            BlogSubcommand::Share { id } => {
                let post = catalog
                    .blog_post(id)
                    .ok_or_else(|| format!("Story not found: {}", id))?;
                share_quietly(&StdoutShare, &story_message(post));
                Ok(())
            }
        }
    }
}
