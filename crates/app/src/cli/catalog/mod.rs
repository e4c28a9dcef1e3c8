use clap::{Args, Subcommand};

use super::output::Format;

mod categories;
mod import;
mod list;

#[derive(Debug, Args)]
pub(crate) struct CatalogCommand {
    #[command(subcommand)]
    command: CatalogSubcommand,
}

#[derive(Debug, Subcommand)]
enum CatalogSubcommand {
    /// Load part documents from a YAML file
    Import(import::ImportArgs),

    /// List parts, one page at a time
    List(list::ListArgs),

    /// Categories present in the catalog
    Categories(categories::CategoriesArgs),
}

pub(crate) async fn run(command: CatalogCommand, format: Format) -> Result<(), String> {
    match command.command {
        CatalogSubcommand::Import(args) => import::run(args, format).await,
        CatalogSubcommand::List(args) => list::run(args, format).await,
        CatalogSubcommand::Categories(args) => categories::run(args, format).await,
    }
}
