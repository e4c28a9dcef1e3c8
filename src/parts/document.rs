//! Part Documents
//!
//! The flat record shape catalog listings arrive in: one category string and every attribute any
//! category might carry. Conversion into a [`Part`] keeps only the attributes that belong to the
//! category and normalizes the price.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{
    parts::{
        CaseSpec, CoolerSpec, CpuSpec, GpuSpec, MotherboardSpec, Part, PartCategory, PartSpec,
        PartUuid, PsuSpec, RamSpec, StorageSpec, SupportedFormFactors, UnknownCategory,
    },
    prices::RawPrice,
};

/// Errors converting a catalog document into a part.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PartDocumentError {
    /// The category string is not a known category.
    #[error(transparent)]
    UnknownCategory(#[from] UnknownCategory),

    /// The document has no usable name.
    #[error("part document has no name")]
    MissingName,
}

/// Flat catalog record.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PartDocument {
    /// Category name, e.g. `CPU`
    pub category: String,

    /// Display name
    #[serde(default)]
    pub name: String,

    /// Manufacturer
    #[serde(default)]
    pub manufacturer: Option<String>,

    /// Listing price, numeric or currency formatted
    #[serde(default)]
    pub price: RawPrice,

    /// CPU / motherboard socket
    #[serde(default)]
    pub socket: Option<String>,

    /// CPU core count
    #[serde(default)]
    pub cores: Option<u32>,

    /// RAM / motherboard memory generation
    #[serde(default)]
    pub ram_type: Option<String>,

    /// Motherboard maximum memory speed
    #[serde(default)]
    pub max_ram_speed_mhz: Option<u32>,

    /// RAM speed
    #[serde(default)]
    pub speed_mhz: Option<u32>,

    /// Motherboard form factor, or the comma-delimited list a case supports
    #[serde(default)]
    pub form_factor: Option<String>,

    /// Power draw in watts
    #[serde(default)]
    pub tdp: Option<u32>,

    /// PSU rating in watts
    #[serde(default)]
    pub wattage: Option<u32>,

    /// GPU length in millimetres
    #[serde(default)]
    pub length_mm: Option<Decimal>,

    /// Case GPU clearance in millimetres
    #[serde(default)]
    pub max_gpu_length_mm: Option<Decimal>,
}

impl PartDocument {
    /// Convert the document into a part with the given identifier.
    ///
    /// # Errors
    ///
    /// Returns [`PartDocumentError::UnknownCategory`] for an unrecognised category and
    /// [`PartDocumentError::MissingName`] for a blank name.
    pub fn into_part(self, uuid: PartUuid) -> Result<Part, PartDocumentError> {
        let category: PartCategory = self.category.parse()?;

        let name = self.name.trim().to_string();

        if name.is_empty() {
            return Err(PartDocumentError::MissingName);
        }

        let socket = known(self.socket);
        let memory_type = known(self.ram_type);
        let form_factor = known(self.form_factor);

        let spec = match category {
            PartCategory::Cpu => PartSpec::Cpu(CpuSpec {
                socket,
                cores: self.cores,
                draw_watts: self.tdp,
            }),
            PartCategory::Motherboard => PartSpec::Motherboard(MotherboardSpec {
                socket,
                memory_type,
                form_factor,
                max_memory_speed_mhz: self.max_ram_speed_mhz,
            }),
            PartCategory::Ram => PartSpec::Ram(RamSpec {
                memory_type,
                speed_mhz: self.speed_mhz,
            }),
            PartCategory::Gpu => PartSpec::Gpu(GpuSpec {
                length_mm: self.length_mm,
                draw_watts: self.tdp,
            }),
            PartCategory::Psu => PartSpec::Psu(PsuSpec {
                wattage: self.wattage,
            }),
            PartCategory::Case => PartSpec::Case(CaseSpec {
                form_factors: form_factor.map(SupportedFormFactors::new),
                max_gpu_length_mm: self.max_gpu_length_mm,
            }),
            PartCategory::Storage => PartSpec::Storage(StorageSpec {
                draw_watts: self.tdp,
            }),
            PartCategory::Cooler => PartSpec::Cooler(CoolerSpec {
                draw_watts: self.tdp,
            }),
        };

        Ok(Part {
            uuid,
            name,
            manufacturer: known(self.manufacturer),
            price: self.price.normalize(),
            spec,
        })
    }
}

/// Blank strings carry no information.
fn known(value: Option<String>) -> Option<String> {
    value
        .map(|text| text.trim().to_string())
        .filter(|text| !text.is_empty())
}
