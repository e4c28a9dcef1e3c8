//! Parts
//!
//! A catalog part is a category-tagged attribute payload. Only the attributes a category can
//! carry exist on its spec, and every one of them is optional: the catalog is scraped and
//! frequently incomplete, so an absent attribute means "unknown", never "zero".

use std::{
    fmt::{Display, Formatter, Result as FmtResult},
    str::FromStr,
};

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::uuids::TypedUuid;

mod document;
mod form_factors;

pub use document::{PartDocument, PartDocumentError};
pub use form_factors::SupportedFormFactors;

/// Part UUID
pub type PartUuid = TypedUuid<Part>;

/// Raised when a category name is not one the catalog knows about.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown part category: {0}")]
pub struct UnknownCategory(pub String);

/// Part category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum PartCategory {
    /// Processor
    #[serde(rename = "CPU")]
    Cpu,

    /// Motherboard
    Motherboard,

    /// Memory
    #[serde(rename = "RAM")]
    Ram,

    /// Graphics card
    #[serde(rename = "GPU")]
    Gpu,

    /// Power supply
    #[serde(rename = "PSU")]
    Psu,

    /// Chassis
    Case,

    /// Drives
    Storage,

    /// CPU cooler
    Cooler,
}

impl PartCategory {
    /// Every category, in catalog display order.
    pub const ALL: [Self; 8] = [
        Self::Cpu,
        Self::Motherboard,
        Self::Ram,
        Self::Gpu,
        Self::Psu,
        Self::Case,
        Self::Storage,
        Self::Cooler,
    ];

    /// Categories a build may hold at most one of.
    pub const SINGLE_INSTANCE: [Self; 5] =
        [Self::Cpu, Self::Motherboard, Self::Gpu, Self::Psu, Self::Case];

    /// Catalog name of the category.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Cpu => "CPU",
            Self::Motherboard => "Motherboard",
            Self::Ram => "RAM",
            Self::Gpu => "GPU",
            Self::Psu => "PSU",
            Self::Case => "Case",
            Self::Storage => "Storage",
            Self::Cooler => "Cooler",
        }
    }

    /// Whether a build may hold at most one part of this category.
    pub const fn is_single_instance(self) -> bool {
        matches!(
            self,
            Self::Cpu | Self::Motherboard | Self::Gpu | Self::Psu | Self::Case
        )
    }
}

impl Display for PartCategory {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(self.as_str())
    }
}

impl FromStr for PartCategory {
    type Err = UnknownCategory;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim();

        Self::ALL
            .into_iter()
            .find(|category| category.as_str().eq_ignore_ascii_case(name))
            .ok_or_else(|| UnknownCategory(s.to_string()))
    }
}

/// Processor attributes
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CpuSpec {
    /// Socket, e.g. `AM5` or `LGA1700`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub socket: Option<String>,

    /// Core count
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cores: Option<u32>,

    /// Thermal design power in watts
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub draw_watts: Option<u32>,
}

/// Motherboard attributes
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MotherboardSpec {
    /// CPU socket
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub socket: Option<String>,

    /// Supported memory generation, e.g. `DDR5`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub memory_type: Option<String>,

    /// Board form factor, e.g. `ATX`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub form_factor: Option<String>,

    /// Highest rated memory speed
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_memory_speed_mhz: Option<u32>,
}

/// Memory attributes
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RamSpec {
    /// Memory generation
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub memory_type: Option<String>,

    /// Rated speed
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub speed_mhz: Option<u32>,
}

/// Graphics card attributes
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GpuSpec {
    /// Card length in millimetres
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub length_mm: Option<Decimal>,

    /// Board power in watts
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub draw_watts: Option<u32>,
}

/// Power supply attributes
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PsuSpec {
    /// Rated output in watts
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub wattage: Option<u32>,
}

/// Chassis attributes
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CaseSpec {
    /// Motherboard form factors the case accepts
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub form_factors: Option<SupportedFormFactors>,

    /// Longest graphics card the case can fit, in millimetres
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_gpu_length_mm: Option<Decimal>,
}

/// Drive attributes
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StorageSpec {
    /// Power draw in watts
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub draw_watts: Option<u32>,
}

/// Cooler attributes
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CoolerSpec {
    /// Power draw in watts (pumps and fans)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub draw_watts: Option<u32>,
}

/// Category-specific part attributes. The variant is the part's category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "category")]
pub enum PartSpec {
    /// Processor
    #[serde(rename = "CPU")]
    Cpu(CpuSpec),

    /// Motherboard
    Motherboard(MotherboardSpec),

    /// Memory
    #[serde(rename = "RAM")]
    Ram(RamSpec),

    /// Graphics card
    #[serde(rename = "GPU")]
    Gpu(GpuSpec),

    /// Power supply
    #[serde(rename = "PSU")]
    Psu(PsuSpec),

    /// Chassis
    Case(CaseSpec),

    /// Drive
    Storage(StorageSpec),

    /// Cooler
    Cooler(CoolerSpec),
}

impl PartSpec {
    /// The category this spec belongs to.
    pub const fn category(&self) -> PartCategory {
        match self {
            Self::Cpu(_) => PartCategory::Cpu,
            Self::Motherboard(_) => PartCategory::Motherboard,
            Self::Ram(_) => PartCategory::Ram,
            Self::Gpu(_) => PartCategory::Gpu,
            Self::Psu(_) => PartCategory::Psu,
            Self::Case(_) => PartCategory::Case,
            Self::Storage(_) => PartCategory::Storage,
            Self::Cooler(_) => PartCategory::Cooler,
        }
    }

    /// Power the part draws, when known. Power supplies and passive parts draw nothing.
    pub const fn draw_watts(&self) -> Option<u32> {
        match self {
            Self::Cpu(CpuSpec { draw_watts, .. })
            | Self::Gpu(GpuSpec { draw_watts, .. })
            | Self::Storage(StorageSpec { draw_watts })
            | Self::Cooler(CoolerSpec { draw_watts }) => *draw_watts,
            Self::Motherboard(_) | Self::Ram(_) | Self::Psu(_) | Self::Case(_) => None,
        }
    }

    /// Processor attributes, if this is a CPU.
    pub const fn as_cpu(&self) -> Option<&CpuSpec> {
        match self {
            Self::Cpu(spec) => Some(spec),
            _ => None,
        }
    }

    /// Motherboard attributes, if this is a motherboard.
    pub const fn as_motherboard(&self) -> Option<&MotherboardSpec> {
        match self {
            Self::Motherboard(spec) => Some(spec),
            _ => None,
        }
    }

    /// Memory attributes, if this is RAM.
    pub const fn as_ram(&self) -> Option<&RamSpec> {
        match self {
            Self::Ram(spec) => Some(spec),
            _ => None,
        }
    }

    /// Graphics card attributes, if this is a GPU.
    pub const fn as_gpu(&self) -> Option<&GpuSpec> {
        match self {
            Self::Gpu(spec) => Some(spec),
            _ => None,
        }
    }

    /// Power supply attributes, if this is a PSU.
    pub const fn as_psu(&self) -> Option<&PsuSpec> {
        match self {
            Self::Psu(spec) => Some(spec),
            _ => None,
        }
    }

    /// Chassis attributes, if this is a case.
    pub const fn as_case(&self) -> Option<&CaseSpec> {
        match self {
            Self::Case(spec) => Some(spec),
            _ => None,
        }
    }
}

/// Catalog part
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Part {
    /// Part identifier
    pub uuid: PartUuid,

    /// Display name
    pub name: String,

    /// Manufacturer, when listed
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub manufacturer: Option<String>,

    /// Non-negative listing price in the catalog currency
    pub price: Decimal,

    /// Category-specific attributes
    pub spec: PartSpec,
}

impl Part {
    /// Create a part with a fresh identifier and no manufacturer.
    pub fn new(name: impl Into<String>, price: Decimal, spec: PartSpec) -> Self {
        Self {
            uuid: PartUuid::new(),
            name: name.into(),
            manufacturer: None,
            price: price.max(Decimal::ZERO),
            spec,
        }
    }

    /// Replace the identifier.
    #[must_use]
    pub fn with_uuid(mut self, uuid: PartUuid) -> Self {
        self.uuid = uuid;
        self
    }

    /// Set the manufacturer.
    #[must_use]
    pub fn with_manufacturer(mut self, manufacturer: impl Into<String>) -> Self {
        self.manufacturer = Some(manufacturer.into());
        self
    }

    /// The part's category.
    pub const fn category(&self) -> PartCategory {
        self.spec.category()
    }

    /// Power the part draws, when known.
    pub const fn draw_watts(&self) -> Option<u32> {
        self.spec.draw_watts()
    }
}
