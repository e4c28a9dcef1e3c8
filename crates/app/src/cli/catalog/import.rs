use std::{fs, path::PathBuf};

use clap::Args;
use rigcheck::{fixtures::parse_catalog, parts::Part};
use rigcheck_app::config::DatabaseConfig;
use tracing::info;

use crate::cli::{
    connect,
    output::{self, Format},
};

#[derive(Debug, Args)]
pub(crate) struct ImportArgs {
    #[command(flatten)]
    database: DatabaseConfig,

    /// YAML file with a `parts` map of key to part document
    file: PathBuf,
}

pub(crate) async fn run(args: ImportArgs, format: Format) -> Result<(), String> {
    let contents = fs::read_to_string(&args.file)
        .map_err(|error| format!("failed to read {}: {error}", args.file.display()))?;

    let documents = parse_catalog(&contents)
        .map_err(|error| format!("failed to parse {}: {error}", args.file.display()))?;

    let ctx = connect(&args.database.database_url).await?;

    let mut imported: Vec<Part> = Vec::with_capacity(documents.len());

    for (key, part) in documents {
        let stored = ctx
            .parts
            .upsert_part(part)
            .await
            .map_err(|error| format!("failed to import part '{key}': {error}"))?;

        imported.push(stored);
    }

    info!(count = imported.len(), "imported catalog parts");

    match format {
        Format::Json => println!("{}", output::json(&imported)?),
        Format::Table => {
            println!("{}", output::parts_table(&imported));
            println!("imported {} parts", imported.len());
        }
    }

    Ok(())
}
