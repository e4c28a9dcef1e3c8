use std::num::NonZeroU32;

use clap::Args;
use rigcheck::parts::{PartCategory, PartUuid};
use rigcheck_app::domain::builds::{BuildsServiceError, data::NewBuildItem};

use super::BuildTarget;
use crate::cli::{
    connect,
    output::{self, Format},
};

#[derive(Debug, Args)]
pub(crate) struct AddArgs {
    #[command(flatten)]
    target: BuildTarget,

    /// Catalog part to add
    #[arg(long)]
    part: PartUuid,

    /// Category the part is added under
    #[arg(long)]
    category: PartCategory,

    /// How many of the part
    #[arg(long, default_value = "1")]
    quantity: NonZeroU32,
}

pub(crate) async fn run(args: AddArgs, format: Format) -> Result<(), String> {
    let target = args.target;
    let ctx = connect(&target.database.database_url).await?;

    let item = NewBuildItem {
        part: args.part,
        category: args.category,
        quantity: args.quantity,
    };

    let build = match ctx.builds.add_part(target.build, target.user, item).await {
        Ok(build) => build,
        Err(BuildsServiceError::Incompatible(violation)) => {
            return Err(format!("incompatible ({}): {violation}", violation.rule()));
        }
        Err(error) => return Err(format!("failed to add part: {error}")),
    };

    match format {
        Format::Json => println!("{}", output::json(&build)?),
        Format::Table => println!("added {}, build now has {} items", args.part, build.len()),
    }

    Ok(())
}
