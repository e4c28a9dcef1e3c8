use clap::Args;
use rigcheck::builds::UserUuid;
use rigcheck_app::config::DatabaseConfig;

use crate::cli::{
    connect,
    output::{self, Format},
};

#[derive(Debug, Args)]
pub(crate) struct ActiveArgs {
    #[command(flatten)]
    database: DatabaseConfig,

    /// Owner of the builds
    #[arg(long)]
    user: UserUuid,
}

pub(crate) async fn run(args: ActiveArgs, format: Format) -> Result<(), String> {
    let ctx = connect(&args.database.database_url).await?;

    let builds = ctx
        .builds
        .get_or_create_active(args.user)
        .await
        .map_err(|error| format!("failed to load builds: {error}"))?;

    match format {
        Format::Json => println!("{}", output::json(&builds)?),
        Format::Table => {
            println!("active build: {} ({})", builds.active.name, builds.active.uuid);
            println!("{}", output::builds_table(&builds.builds));
        }
    }

    Ok(())
}
