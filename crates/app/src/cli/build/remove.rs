use clap::Args;
use rigcheck::parts::PartUuid;

use super::BuildTarget;
use crate::cli::{
    connect,
    output::{self, Format},
};

#[derive(Debug, Args)]
pub(crate) struct RemoveArgs {
    #[command(flatten)]
    target: BuildTarget,

    /// Part to remove
    #[arg(long)]
    part: PartUuid,
}

pub(crate) async fn run(args: RemoveArgs, format: Format) -> Result<(), String> {
    let target = args.target;
    let ctx = connect(&target.database.database_url).await?;

    let build = ctx
        .builds
        .remove_part(target.build, target.user, args.part)
        .await
        .map_err(|error| format!("failed to remove part: {error}"))?;

    match format {
        Format::Json => println!("{}", output::json(&build)?),
        Format::Table => println!("removed {}, build now has {} items", args.part, build.len()),
    }

    Ok(())
}
