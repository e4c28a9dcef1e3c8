//! Builds
//!
//! A build is a user's cart of parts. Items have no identity of their own: a build owns them by
//! value and keeps them in insertion order.

use std::{
    fmt::{Display, Formatter, Result as FmtResult},
    num::NonZeroU32,
    str::FromStr,
};

use jiff::Timestamp;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{
    parts::{Part, PartCategory, PartUuid},
    uuids::TypedUuid,
};

/// Name given to builds created without one.
pub const DEFAULT_BUILD_NAME: &str = "My PC Build";

/// Build UUID
pub type BuildUuid = TypedUuid<Build>;

/// Marker for the user that owns a build. Users live with the authentication collaborator.
#[derive(Debug)]
pub enum BuildOwner {}

/// Owning user UUID
pub type UserUuid = TypedUuid<BuildOwner>;

/// Errors raised while assembling a build in memory.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BuildError {
    /// The item's category disagrees with the part it references.
    #[error("item category {given} does not match part category {expected}")]
    CategoryMismatch {
        /// Category of the referenced part
        expected: PartCategory,

        /// Category supplied with the item
        given: PartCategory,
    },

    /// Unrecognised status name.
    #[error("unknown build status: {0}")]
    UnknownStatus(String),
}

/// Build lifecycle status
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BuildStatus {
    /// Being edited
    #[default]
    Draft,

    /// Kept for later
    Saved,

    /// Put away
    Archived,

    /// Paid for; only reached through payment verification
    Paid,
}

impl BuildStatus {
    /// Stored name of the status.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Draft => "Draft",
            Self::Saved => "Saved",
            Self::Archived => "Archived",
            Self::Paid => "Paid",
        }
    }
}

impl Display for BuildStatus {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(self.as_str())
    }
}

impl FromStr for BuildStatus {
    type Err = BuildError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Draft" => Ok(Self::Draft),
            "Saved" => Ok(Self::Saved),
            "Archived" => Ok(Self::Archived),
            "Paid" => Ok(Self::Paid),
            other => Err(BuildError::UnknownStatus(other.to_string())),
        }
    }
}

/// A part selection inside a build.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuildItem {
    /// Referenced catalog part
    pub part: PartUuid,

    /// Category of the part when it was added
    pub category: PartCategory,

    /// How many of the part
    pub quantity: NonZeroU32,
}

impl BuildItem {
    /// Create an item for a part.
    pub fn new(part: PartUuid, category: PartCategory, quantity: NonZeroU32) -> Self {
        Self {
            part,
            category,
            quantity,
        }
    }

    /// Create an item for a single unit of a catalog part.
    pub fn of(part: &Part) -> Self {
        Self::new(part.uuid, part.category(), NonZeroU32::MIN)
    }

    /// Create an item for a catalog part, checking the requested category against the part.
    ///
    /// # Errors
    ///
    /// Returns [`BuildError::CategoryMismatch`] if `category` is not the part's category.
    pub fn for_part(
        part: &Part,
        category: PartCategory,
        quantity: NonZeroU32,
    ) -> Result<Self, BuildError> {
        if part.category() != category {
            return Err(BuildError::CategoryMismatch {
                expected: part.category(),
                given: category,
            });
        }

        Ok(Self::new(part.uuid, category, quantity))
    }
}

/// Build
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Build {
    /// Build identifier
    pub uuid: BuildUuid,

    /// Owning user
    pub owner: UserUuid,

    /// Display name
    pub name: String,

    /// Lifecycle status
    pub status: BuildStatus,

    /// Selected parts, in insertion order
    pub items: Vec<BuildItem>,

    /// Creation time
    pub created_at: Timestamp,

    /// Last modification time
    pub updated_at: Timestamp,
}

impl Build {
    /// Create an empty draft build owned by `owner`.
    pub fn draft(owner: UserUuid, name: impl Into<String>) -> Self {
        let now = Timestamp::now();

        Self {
            uuid: BuildUuid::new(),
            owner,
            name: name.into(),
            status: BuildStatus::Draft,
            items: Vec::new(),
            created_at: now,
            updated_at: now,
        }
    }

    /// Create a draft build with the given items.
    pub fn with_items(owner: UserUuid, items: impl Into<Vec<BuildItem>>) -> Self {
        Self {
            items: items.into(),
            ..Self::draft(owner, DEFAULT_BUILD_NAME)
        }
    }

    /// Iterate over the items in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &BuildItem> {
        self.items.iter()
    }

    /// Items recorded under a category.
    pub fn items_in(&self, category: PartCategory) -> impl Iterator<Item = &BuildItem> {
        self.items
            .iter()
            .filter(move |item| item.category == category)
    }

    /// Whether any item is recorded under a category.
    pub fn has_category(&self, category: PartCategory) -> bool {
        self.items_in(category).next().is_some()
    }

    /// Whether any item references the part.
    pub fn contains_part(&self, part: PartUuid) -> bool {
        self.items.iter().any(|item| item.part == part)
    }

    /// Append an item.
    pub fn push(&mut self, item: BuildItem) {
        self.items.push(item);
        self.updated_at = Timestamp::now();
    }

    /// Drop every item referencing the part, returning how many were removed.
    pub fn remove_part(&mut self, part: PartUuid) -> usize {
        let before = self.items.len();

        self.items.retain(|item| item.part != part);
        self.updated_at = Timestamp::now();

        before - self.items.len()
    }

    /// Number of items.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the build has no items.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use rust_decimal::Decimal;
    use testresult::TestResult;

    use crate::parts::{CpuSpec, PartSpec, RamSpec};

    use super::*;

    fn cpu() -> Part {
        Part::new("Ryzen 5 7600", Decimal::from(18_999), PartSpec::Cpu(CpuSpec::default()))
    }

    fn ram() -> Part {
        Part::new("Fury Beast 16GB", Decimal::from(4_599), PartSpec::Ram(RamSpec::default()))
    }

    #[test]
    fn draft_starts_empty() {
        let build = Build::draft(UserUuid::new(), DEFAULT_BUILD_NAME);

        assert!(build.is_empty());
        assert_eq!(build.status, BuildStatus::Draft);
        assert_eq!(build.name, "My PC Build");
    }

    #[test]
    fn for_part_rejects_category_mismatch() {
        let cpu = cpu();

        let result = BuildItem::for_part(&cpu, PartCategory::Gpu, NonZeroU32::MIN);

        assert_eq!(
            result,
            Err(BuildError::CategoryMismatch {
                expected: PartCategory::Cpu,
                given: PartCategory::Gpu,
            })
        );
    }

    #[test]
    fn items_keep_insertion_order() {
        let cpu = cpu();
        let ram = ram();

        let build = Build::with_items(UserUuid::new(), [BuildItem::of(&ram), BuildItem::of(&cpu)]);

        let parts: Vec<_> = build.iter().map(|item| item.part).collect();

        assert_eq!(parts, vec![ram.uuid, cpu.uuid]);
        assert!(build.has_category(PartCategory::Cpu));
        assert!(!build.has_category(PartCategory::Gpu));
    }

    #[test]
    fn remove_part_drops_every_matching_item() -> TestResult {
        let ram = ram();
        let cpu = cpu();
        let two = NonZeroU32::new(2).ok_or("zero")?;

        let mut build = Build::with_items(
            UserUuid::new(),
            [
                BuildItem::of(&ram),
                BuildItem::of(&cpu),
                BuildItem::new(ram.uuid, PartCategory::Ram, two),
            ],
        );

        assert_eq!(build.remove_part(ram.uuid), 2);
        assert_eq!(build.len(), 1);
        assert!(build.contains_part(cpu.uuid));

        Ok(())
    }

    #[test]
    fn remove_absent_part_leaves_items_unchanged() {
        let cpu = cpu();
        let mut build = Build::with_items(UserUuid::new(), [BuildItem::of(&cpu)]);
        let before = build.items.clone();

        assert_eq!(build.remove_part(PartUuid::new()), 0);
        assert_eq!(build.items, before);
    }

    #[test]
    fn status_round_trips_through_its_name() -> TestResult {
        for status in [
            BuildStatus::Draft,
            BuildStatus::Saved,
            BuildStatus::Archived,
            BuildStatus::Paid,
        ] {
            assert_eq!(status.as_str().parse::<BuildStatus>()?, status);
        }

        Ok(())
    }
}
