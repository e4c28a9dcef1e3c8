//! Rigcheck prelude.
//!
//! Convenience exports for common library consumers.

pub use crate::{
    builds::{
        Build, BuildError, BuildItem, BuildOwner, BuildStatus, BuildUuid, DEFAULT_BUILD_NAME,
        UserUuid,
    },
    catalog::{Catalog, PartLookup},
    compatibility::{
        CompatibilityReport, Conflict, ConstraintViolation, Issue, ReportStatus, Rule, Severity,
        check_addition, evaluate_build,
    },
    hydration::{HydratedBuild, HydratedItem, hydrate},
    parts::{
        CaseSpec, CoolerSpec, CpuSpec, GpuSpec, MotherboardSpec, Part, PartCategory, PartDocument,
        PartDocumentError, PartSpec, PartUuid, PsuSpec, RamSpec, StorageSpec,
        SupportedFormFactors, UnknownCategory,
    },
    prices::{RawPrice, normalize_price},
    pricing::{BuildTotals, build_totals},
};
