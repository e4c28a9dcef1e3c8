//! Table and JSON rendering for command output.

use rigcheck::{
    builds::Build,
    compatibility::CompatibilityReport,
    hydration::HydratedBuild,
    parts::{Part, PartCategory},
    prices::as_money,
};
use rust_decimal::Decimal;
use serde::Serialize;
use tabled::{
    Table,
    builder::Builder,
    settings::{
        Alignment, Style,
        object::{Columns, Rows},
    },
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Format {
    Table,
    Json,
}

pub(crate) fn json(value: &impl Serialize) -> Result<String, String> {
    serde_json::to_string_pretty(value).map_err(|error| format!("failed to encode JSON: {error}"))
}

fn money(amount: Decimal) -> String {
    as_money(amount).to_string()
}

fn styled(builder: Builder) -> Table {
    let mut table = builder.build();

    table.with(Style::modern_rounded());
    table.modify(Rows::first(), Alignment::center());

    table
}

pub(crate) fn parts_table(parts: &[Part]) -> String {
    let mut builder = Builder::default();

    builder.push_record(["Category", "Name", "Manufacturer", "Price", "UUID"]);

    for part in parts {
        builder.push_record([
            part.category().to_string(),
            part.name.clone(),
            part.manufacturer.clone().unwrap_or_default(),
            money(part.price),
            part.uuid.to_string(),
        ]);
    }

    styled(builder)
        .modify(Columns::new(3..4), Alignment::right())
        .to_string()
}

pub(crate) fn categories_table(categories: &[PartCategory]) -> String {
    let mut builder = Builder::default();

    builder.push_record(["Category"]);

    for category in categories {
        builder.push_record([category.to_string()]);
    }

    styled(builder).to_string()
}

pub(crate) fn builds_table<'a>(builds: impl IntoIterator<Item = &'a Build>) -> String {
    let mut builder = Builder::default();

    builder.push_record(["Name", "Status", "Items", "Updated", "UUID"]);

    for build in builds {
        builder.push_record([
            build.name.clone(),
            build.status.to_string(),
            build.len().to_string(),
            build.updated_at.to_string(),
            build.uuid.to_string(),
        ]);
    }

    styled(builder)
        .modify(Columns::new(2..3), Alignment::right())
        .to_string()
}

pub(crate) fn hydrated_build(hydrated: &HydratedBuild) -> String {
    let mut builder = Builder::default();

    builder.push_record(["Category", "Part", "Qty", "Unit Price", "Line Total"]);

    for entry in &hydrated.items {
        let quantity = entry.item.quantity.get();

        let (name, unit, line) = match &entry.part {
            Some(part) => (
                part.name.clone(),
                money(part.price),
                money(part.price.saturating_mul(Decimal::from(quantity))),
            ),
            None => (
                format!("missing part {}", entry.item.part),
                "-".to_string(),
                "-".to_string(),
            ),
        };

        builder.push_record([
            entry.item.category.to_string(),
            name,
            quantity.to_string(),
            unit,
            line,
        ]);
    }

    let items = styled(builder)
        .modify(Columns::new(2..5), Alignment::right())
        .to_string();

    format!(
        "{} ({})\n{items}\nTotal: {} for {} parts, {} units\n{}",
        hydrated.build.name,
        hydrated.build.status,
        hydrated.totals.as_money(),
        hydrated.totals.count,
        hydrated.totals.units,
        report(&hydrated.compatibility),
    )
}

pub(crate) fn report(report: &CompatibilityReport) -> String {
    if report.issues.is_empty() {
        return "Compatible".to_string();
    }

    let mut builder = Builder::default();

    builder.push_record(["Severity", "Rule", "Message"]);

    for issue in &report.issues {
        builder.push_record([
            issue.severity.to_string(),
            issue.rule().to_string(),
            issue.message(),
        ]);
    }

    format!("Status: {:?}\n{}", report.status, styled(builder))
}
