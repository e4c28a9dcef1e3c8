use clap::{Args, Subcommand};
use rigcheck::builds::{BuildUuid, UserUuid};
use rigcheck_app::config::DatabaseConfig;

use super::output::Format;

mod active;
mod add;
mod remove;
mod show;

#[derive(Debug, Args)]
pub(crate) struct BuildCommand {
    #[command(subcommand)]
    command: BuildSubcommand,
}

#[derive(Debug, Subcommand)]
enum BuildSubcommand {
    /// Show the user's draft build, creating it on first use
    Active(active::ActiveArgs),

    /// Add a part to a build if it passes the compatibility checks
    Add(add::AddArgs),

    /// Remove every item referencing a part
    Remove(remove::RemoveArgs),

    /// Show a build with prices and its compatibility report
    Show(show::ShowArgs),
}

/// Arguments shared by commands acting on one of a user's builds.
#[derive(Debug, Args)]
pub(crate) struct BuildTarget {
    #[command(flatten)]
    database: DatabaseConfig,

    /// Owner of the build
    #[arg(long)]
    user: UserUuid,

    /// Build UUID
    #[arg(long)]
    build: BuildUuid,
}

pub(crate) async fn run(command: BuildCommand, format: Format) -> Result<(), String> {
    match command.command {
        BuildSubcommand::Active(args) => active::run(args, format).await,
        BuildSubcommand::Add(args) => add::run(args, format).await,
        BuildSubcommand::Remove(args) => remove::run(args, format).await,
        BuildSubcommand::Show(args) => show::run(args, format).await,
    }
}
