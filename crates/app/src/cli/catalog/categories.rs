use clap::Args;
use rigcheck_app::config::DatabaseConfig;

use crate::cli::{
    connect,
    output::{self, Format},
};

#[derive(Debug, Args)]
pub(crate) struct CategoriesArgs {
    #[command(flatten)]
    database: DatabaseConfig,
}

pub(crate) async fn run(args: CategoriesArgs, format: Format) -> Result<(), String> {
    let ctx = connect(&args.database.database_url).await?;

    let categories = ctx
        .parts
        .list_categories()
        .await
        .map_err(|error| format!("failed to list categories: {error}"))?;

    match format {
        Format::Json => println!("{}", output::json(&categories)?),
        Format::Table => println!("{}", output::categories_table(&categories)),
    }

    Ok(())
}
