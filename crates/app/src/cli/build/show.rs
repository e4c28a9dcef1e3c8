use clap::Args;

use super::BuildTarget;
use crate::cli::{
    connect,
    output::{self, Format},
};

#[derive(Debug, Args)]
pub(crate) struct ShowArgs {
    #[command(flatten)]
    target: BuildTarget,
}

pub(crate) async fn run(args: ShowArgs, format: Format) -> Result<(), String> {
    let target = args.target;
    let ctx = connect(&target.database.database_url).await?;

    let hydrated = ctx
        .builds
        .get_hydrated(target.build, target.user)
        .await
        .map_err(|error| format!("failed to load build: {error}"))?;

    match format {
        Format::Json => println!("{}", output::json(&hydrated)?),
        Format::Table => println!("{}", output::hydrated_build(&hydrated)),
    }

    Ok(())
}
