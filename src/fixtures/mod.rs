//! Fixtures
//!
//! YAML catalogs and seeded builds for tests and the demo catalog. Parts are keyed by a short
//! string (`ryzen-5-7600`) and receive a stable identifier derived from that key, so the same file
//! imported twice yields the same parts.

use std::{fs, num::NonZeroU32, path::PathBuf};

use rustc_hash::FxHashMap;
use serde::Deserialize;
use thiserror::Error;

use crate::{
    builds::{Build, BuildItem, DEFAULT_BUILD_NAME, UserUuid},
    catalog::Catalog,
    parts::{Part, PartDocument, PartDocumentError, PartUuid},
};

/// Fixture Parsing Errors
#[derive(Debug, Error)]
pub enum FixtureError {
    /// IO error reading fixture files
    #[error("Failed to read fixture file: {0}")]
    Io(#[from] std::io::Error),

    /// YAML parsing error
    #[error("Failed to parse YAML: {0}")]
    Yaml(#[from] serde_norway::Error),

    /// A part document could not be converted
    #[error("Invalid part {key}: {source}")]
    InvalidPart {
        /// Fixture key of the part
        key: String,

        /// Conversion failure
        source: PartDocumentError,
    },

    /// Part not found
    #[error("Part not found: {0}")]
    PartNotFound(String),
}

/// Catalog file: part documents keyed by fixture key.
#[derive(Debug, Deserialize)]
pub struct CatalogFixture {
    /// Part documents
    pub parts: FxHashMap<String, PartDocument>,
}

/// Build file: items referencing catalog keys.
#[derive(Debug, Deserialize)]
pub struct BuildFixture {
    /// Build name
    #[serde(default)]
    pub name: Option<String>,

    /// Items in order
    pub items: Vec<BuildItemFixture>,
}

/// Item of a build file.
#[derive(Debug, Deserialize)]
pub struct BuildItemFixture {
    /// Catalog key of the part
    pub part: String,

    /// Quantity, one when omitted
    #[serde(default = "one")]
    pub quantity: NonZeroU32,
}

const fn one() -> NonZeroU32 {
    NonZeroU32::MIN
}

/// Parse a catalog document into parts with stable identifiers derived from their keys.
///
/// # Errors
///
/// Returns an error if the YAML cannot be parsed or a document cannot be converted into a part.
pub fn parse_catalog(contents: &str) -> Result<Vec<(String, Part)>, FixtureError> {
    let fixture: CatalogFixture = serde_norway::from_str(contents)?;

    let mut parts = fixture
        .parts
        .into_iter()
        .map(|(key, document)| {
            document
                .into_part(PartUuid::from_name(&key))
                .map(|part| (key.clone(), part))
                .map_err(|source| FixtureError::InvalidPart { key, source })
        })
        .collect::<Result<Vec<_>, _>>()?;

    parts.sort_by(|(a, _), (b, _)| a.cmp(b));

    Ok(parts)
}

/// Fixture
#[derive(Debug)]
pub struct Fixture {
    /// Base path for fixture files
    base_path: PathBuf,

    /// Loaded parts
    catalog: Catalog,

    /// Fixture key -> part identifier
    part_keys: FxHashMap<String, PartUuid>,
}

impl Default for Fixture {
    fn default() -> Self {
        Self::new()
    }
}

impl Fixture {
    /// Create a new empty fixture with default base path
    pub fn new() -> Self {
        Self::with_base_path("./fixtures")
    }

    /// Create a new empty fixture with custom base path
    pub fn with_base_path(base_path: impl Into<PathBuf>) -> Self {
        Self {
            base_path: base_path.into(),
            catalog: Catalog::new(),
            part_keys: FxHashMap::default(),
        }
    }

    /// Load parts from `catalog/<name>.yml`
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed, or a part is invalid.
    pub fn load_catalog(&mut self, name: &str) -> Result<&mut Self, FixtureError> {
        let file_path = self.base_path.join("catalog").join(format!("{name}.yml"));
        let contents = fs::read_to_string(&file_path)?;

        for (key, part) in parse_catalog(&contents)? {
            self.part_keys.insert(key, part.uuid);
            self.catalog.insert(part);
        }

        Ok(self)
    }

    /// Load a catalog fixture with the given name
    ///
    /// # Errors
    ///
    /// Returns an error if the catalog cannot be loaded.
    pub fn from_catalog(name: &str) -> Result<Self, FixtureError> {
        let mut fixture = Self::new();

        fixture.load_catalog(name)?;

        Ok(fixture)
    }

    /// Get a part by its fixture key
    ///
    /// # Errors
    ///
    /// Returns an error if the part is not found.
    pub fn part(&self, key: &str) -> Result<&Part, FixtureError> {
        self.part_keys
            .get(key)
            .and_then(|uuid| self.catalog.get(*uuid))
            .ok_or_else(|| FixtureError::PartNotFound(key.to_string()))
    }

    /// The loaded catalog
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Load `builds/<name>.yml` as a draft build owned by `owner`. Items are stored as written,
    /// without passing the addition gate, so seeded builds can hold incompatible parts.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed, or references an unknown part.
    pub fn load_build(&self, name: &str, owner: UserUuid) -> Result<Build, FixtureError> {
        let file_path = self.base_path.join("builds").join(format!("{name}.yml"));
        let contents = fs::read_to_string(&file_path)?;
        let fixture: BuildFixture = serde_norway::from_str(&contents)?;

        let items = fixture
            .items
            .iter()
            .map(|item| {
                let part = self.part(&item.part)?;

                Ok(BuildItem::new(part.uuid, part.category(), item.quantity))
            })
            .collect::<Result<Vec<_>, FixtureError>>()?;

        let mut build = Build::draft(
            owner,
            fixture.name.as_deref().unwrap_or(DEFAULT_BUILD_NAME),
        );

        build.items = items;

        Ok(build)
    }

    /// Build a draft from fixture keys, one unit each, bypassing the gate.
    ///
    /// # Errors
    ///
    /// Returns an error if a key is unknown.
    pub fn build_of(&self, owner: UserUuid, keys: &[&str]) -> Result<Build, FixtureError> {
        let items = keys
            .iter()
            .map(|key| self.part(key).map(BuildItem::of))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Build::with_items(owner, items))
    }
}
