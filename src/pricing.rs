//! Pricing

use rust_decimal::Decimal;
use rusty_money::{Money, iso::Currency};
use serde::Serialize;

use crate::{builds::Build, catalog::PartLookup, prices};

/// Cost and size of a build, over the items the catalog could resolve.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct BuildTotals {
    /// Sum of price times quantity
    pub price: Decimal,

    /// Number of resolved items
    pub count: usize,

    /// Sum of quantities
    pub units: u64,
}

impl BuildTotals {
    /// Total in minor currency units (paise), as payment gateways expect it.
    pub fn minor_units(&self) -> i64 {
        prices::to_minor_units(self.price)
    }

    /// Total as money in the catalog currency.
    pub fn as_money(&self) -> Money<'static, Currency> {
        prices::as_money(self.price)
    }
}

/// Calculates the totals of a build. Unresolved items contribute nothing.
pub fn build_totals(build: &Build, catalog: &impl PartLookup) -> BuildTotals {
    build
        .iter()
        .filter_map(|item| catalog.part(item.part).map(|part| (part, item.quantity.get())))
        .fold(BuildTotals::default(), |totals, (part, quantity)| BuildTotals {
            price: totals
                .price
                .saturating_add(part.price.saturating_mul(Decimal::from(quantity))),
            count: totals.count + 1,
            units: totals.units + u64::from(quantity),
        })
}

#[cfg(test)]
mod tests {
    use std::num::NonZeroU32;

    use rusty_money::iso;
    use testresult::TestResult;

    use crate::{
        builds::{BuildItem, UserUuid},
        catalog::Catalog,
        parts::{CpuSpec, Part, PartCategory, PartSpec, PartUuid, RamSpec},
    };

    use super::*;

    #[test]
    fn test_build_totals() -> TestResult {
        let cpu = Part::new("Ryzen 5 7600", Decimal::from(18_999), PartSpec::Cpu(CpuSpec::default()));
        let ram = Part::new("16GB DDR5", Decimal::new(459_950, 2), PartSpec::Ram(RamSpec::default()));

        let build = Build::with_items(
            UserUuid::new(),
            [
                BuildItem::of(&cpu),
                BuildItem::new(ram.uuid, PartCategory::Ram, NonZeroU32::new(2).ok_or("zero")?),
            ],
        );

        let catalog: Catalog = [cpu, ram].into_iter().collect();
        let totals = build_totals(&build, &catalog);

        assert_eq!(totals.price, Decimal::new(28_198, 0));
        assert_eq!(totals.count, 2);
        assert_eq!(totals.units, 3);
        assert_eq!(totals.minor_units(), 2_819_800);
        assert_eq!(totals.as_money(), Money::from_minor(2_819_800, iso::INR));

        Ok(())
    }

    #[test]
    fn test_build_totals_skips_unresolved_items() {
        let build = Build::with_items(
            UserUuid::new(),
            [BuildItem::new(PartUuid::new(), PartCategory::Gpu, NonZeroU32::MIN)],
        );

        assert_eq!(build_totals(&build, &Catalog::new()), BuildTotals::default());
    }

    #[test]
    fn test_build_totals_empty() {
        let build = Build::draft(UserUuid::new(), "Empty");

        let totals = build_totals(&build, &Catalog::new());

        assert_eq!(totals.price, Decimal::ZERO);
        assert_eq!(totals.count, 0);
    }
}
