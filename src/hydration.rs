//! Hydration
//!
//! The read-side view of a build: each item with its resolved part, the totals and a fresh
//! compatibility report.

use serde::Serialize;

use crate::{
    builds::{Build, BuildItem},
    catalog::PartLookup,
    compatibility::{CompatibilityReport, evaluate_build},
    parts::Part,
    pricing::{BuildTotals, build_totals},
};

/// A build item alongside the part it references, if the catalog still has it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HydratedItem {
    /// The stored item
    pub item: BuildItem,

    /// The resolved part
    pub part: Option<Part>,
}

/// A build with resolved parts, totals and compatibility.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HydratedBuild {
    /// The stored build
    pub build: Build,

    /// Items in build order
    pub items: Vec<HydratedItem>,

    /// Cost and size
    pub totals: BuildTotals,

    /// Compatibility of the whole build
    pub compatibility: CompatibilityReport,
}

/// Resolve every item of a build and evaluate it. Never fails: unresolved items are kept with no
/// part and reported by the compatibility check.
pub fn hydrate(build: Build, catalog: &impl PartLookup) -> HydratedBuild {
    let items = build
        .iter()
        .map(|item| HydratedItem {
            item: item.clone(),
            part: catalog.part(item.part).cloned(),
        })
        .collect();

    let totals = build_totals(&build, catalog);
    let compatibility = evaluate_build(&build, catalog);

    HydratedBuild {
        build,
        items,
        totals,
        compatibility,
    }
}
