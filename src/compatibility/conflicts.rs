//! Conflicts

use std::fmt::{Display, Formatter, Result as FmtResult};

use rust_decimal::Decimal;
use serde::Serialize;
use thiserror::Error;

use crate::parts::{PartCategory, PartUuid, SupportedFormFactors};

/// How serious an issue is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// The build will not work as selected.
    Error,

    /// The build may work but needs attention.
    Warning,
}

impl Display for Severity {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(match self {
            Self::Error => "error",
            Self::Warning => "warning",
        })
    }
}

/// The rule a conflict was raised by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Rule {
    /// An item references a part the catalog does not know.
    MissingPart,

    /// At most one part of a single-instance category.
    SingleInstance,

    /// CPU and motherboard sockets agree.
    Socket,

    /// RAM and motherboard memory generations agree.
    MemoryType,

    /// The case accepts the motherboard's form factor.
    FormFactor,

    /// The graphics card fits inside the case.
    GpuClearance,

    /// The PSU covers the summed draw plus headroom.
    PowerBudget,
}

impl Rule {
    /// Stable name of the rule.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::MissingPart => "missing_part",
            Self::SingleInstance => "single_instance",
            Self::Socket => "socket",
            Self::MemoryType => "memory_type",
            Self::FormFactor => "form_factor",
            Self::GpuClearance => "gpu_clearance",
            Self::PowerBudget => "power_budget",
        }
    }
}

impl Display for Rule {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(self.as_str())
    }
}

/// A broken constraint, carrying the values that disagree.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize)]
#[serde(tag = "conflict", rename_all = "snake_case")]
pub enum Conflict {
    /// A build item references a part that could not be resolved.
    #[error("component missing from catalog ({part})")]
    MissingPart {
        /// Referenced part
        part: PartUuid,
    },

    /// More than one part of a single-instance category.
    #[error("{count} {category} parts selected, a build holds at most one")]
    DuplicateCategory {
        /// Offending category
        category: PartCategory,

        /// Number of parts of that category
        count: usize,
    },

    /// CPU and motherboard sockets differ.
    #[error("CPU socket ({cpu}) does not match motherboard socket ({motherboard})")]
    SocketMismatch {
        /// CPU socket
        cpu: String,

        /// Motherboard socket
        motherboard: String,
    },

    /// RAM and motherboard memory generations differ.
    #[error("RAM type ({ram}) does not match motherboard memory type ({motherboard})")]
    MemoryTypeMismatch {
        /// RAM memory type
        ram: String,

        /// Motherboard memory type
        motherboard: String,
    },

    /// The case does not accept the motherboard's form factor.
    #[error("motherboard form factor ({motherboard}) is not supported by the case ({supported})")]
    FormFactorUnsupported {
        /// Motherboard form factor
        motherboard: String,

        /// Form factors the case accepts
        supported: SupportedFormFactors,
    },

    /// The graphics card is longer than the case allows.
    #[error("GPU length ({gpu_mm}mm) exceeds case clearance ({clearance_mm}mm)")]
    GpuClearance {
        /// Card length
        gpu_mm: Decimal,

        /// Case clearance
        clearance_mm: Decimal,
    },

    /// The PSU rating is below the draw plus headroom.
    #[error("PSU wattage ({wattage}W) is below the required {required}W for a {draw}W draw")]
    PowerShortfall {
        /// PSU rating
        wattage: u32,

        /// Draw with headroom applied
        required: u64,

        /// Summed draw
        draw: u64,
    },
}

impl Conflict {
    /// The rule that raised this conflict.
    pub const fn rule(&self) -> Rule {
        match self {
            Self::MissingPart { .. } => Rule::MissingPart,
            Self::DuplicateCategory { .. } => Rule::SingleInstance,
            Self::SocketMismatch { .. } => Rule::Socket,
            Self::MemoryTypeMismatch { .. } => Rule::MemoryType,
            Self::FormFactorUnsupported { .. } => Rule::FormFactor,
            Self::GpuClearance { .. } => Rule::GpuClearance,
            Self::PowerShortfall { .. } => Rule::PowerBudget,
        }
    }

    /// Severity when reported by full evaluation. Clearance only warns; everything else is an
    /// error.
    pub const fn severity(&self) -> Severity {
        match self {
            Self::GpuClearance { .. } => Severity::Warning,
            _ => Severity::Error,
        }
    }
}

/// A reported problem with a build.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Issue {
    /// Severity
    pub severity: Severity,

    /// What is wrong
    #[serde(flatten)]
    pub conflict: Conflict,
}

impl Issue {
    /// Human-readable description.
    pub fn message(&self) -> String {
        self.conflict.to_string()
    }

    /// The rule that raised the issue.
    pub const fn rule(&self) -> Rule {
        self.conflict.rule()
    }
}

impl From<Conflict> for Issue {
    fn from(conflict: Conflict) -> Self {
        Self {
            severity: conflict.severity(),
            conflict,
        }
    }
}

impl Display for Issue {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{}: {}", self.severity, self.conflict)
    }
}

/// Why the gate refused a candidate part.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("cannot add {category}: {conflict}")]
pub struct ConstraintViolation {
    /// Category of the refused candidate
    pub category: PartCategory,

    /// The first conflict found
    pub conflict: Conflict,
}

impl ConstraintViolation {
    /// The rule that refused the candidate.
    pub const fn rule(&self) -> Rule {
        self.conflict.rule()
    }
}
