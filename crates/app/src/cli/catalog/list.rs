use clap::Args;
use rigcheck::parts::PartCategory;
use rigcheck_app::{
    config::DatabaseConfig,
    domain::parts::data::{DEFAULT_LIMIT, PartsFilter, SortKey, SortOrder},
};
use rust_decimal::Decimal;

use crate::cli::{
    connect,
    output::{self, Format},
};

#[derive(Debug, Args)]
pub(crate) struct ListArgs {
    #[command(flatten)]
    database: DatabaseConfig,

    /// Only parts of this category, e.g. CPU or Motherboard
    #[arg(long)]
    category: Option<PartCategory>,

    /// Lowest price to include
    #[arg(long)]
    min_price: Option<Decimal>,

    /// Highest price to include
    #[arg(long)]
    max_price: Option<Decimal>,

    /// Sort key
    #[arg(long, value_enum, default_value_t = SortKey::Price)]
    sort_by: SortKey,

    /// Sort order
    #[arg(long, value_enum, default_value_t = SortOrder::Asc)]
    sort_order: SortOrder,

    /// Page size, clamped to 1..=100
    #[arg(long, default_value_t = DEFAULT_LIMIT)]
    limit: u32,

    /// Parts to skip
    #[arg(long, default_value_t = 0)]
    skip: u32,
}

pub(crate) async fn run(args: ListArgs, format: Format) -> Result<(), String> {
    let ctx = connect(&args.database.database_url).await?;

    let mut filter = PartsFilter::default().with_limit(args.limit);
    filter.category = args.category;
    filter.min_price = args.min_price;
    filter.max_price = args.max_price;
    filter.sort_by = args.sort_by;
    filter.sort_order = args.sort_order;
    filter.skip = args.skip;

    let parts = ctx
        .parts
        .list_parts(filter)
        .await
        .map_err(|error| format!("failed to list parts: {error}"))?;

    match format {
        Format::Json => println!("{}", output::json(&parts)?),
        Format::Table if parts.is_empty() => println!("no parts found"),
        Format::Table => println!("{}", output::parts_table(&parts)),
    }

    Ok(())
}
