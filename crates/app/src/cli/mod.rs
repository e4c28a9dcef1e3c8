use clap::{Parser, Subcommand};
use rigcheck_app::{config::LoggingConfig, context::AppContext};

mod build;
mod catalog;
mod db;
mod output;

use output::Format;

#[derive(Debug, Parser)]
#[command(name = "rigcheck-app", about = "Rigcheck CLI", long_about = None)]
pub(crate) struct Cli {
    #[command(flatten)]
    pub(crate) logging: LoggingConfig,

    /// Print JSON instead of tables
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Import and browse catalog parts
    Catalog(catalog::CatalogCommand),

    /// Inspect and edit a user's builds
    Build(build::BuildCommand),

    /// Database maintenance
    Db(db::DbCommand),
}

impl Cli {
    pub(crate) async fn run(self) -> Result<(), String> {
        let format = if self.json {
            Format::Json
        } else {
            Format::Table
        };

        match self.command {
            Commands::Catalog(command) => catalog::run(command, format).await,
            Commands::Build(command) => build::run(command, format).await,
            Commands::Db(command) => db::run(command).await,
        }
    }
}

async fn connect(database_url: &str) -> Result<AppContext, String> {
    AppContext::from_database_url(database_url)
        .await
        .map_err(|error| match std::error::Error::source(&error) {
            Some(source) => format!("{error}: {source}"),
            None => error.to_string(),
        })
}
