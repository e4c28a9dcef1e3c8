//! Builds Data

use std::num::NonZeroU32;

use rigcheck::{
    builds::{Build, BuildUuid, UserUuid},
    parts::{PartCategory, PartUuid},
};
use serde::Serialize;

/// New Build Data
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewBuild {
    pub uuid: BuildUuid,
    pub owner: UserUuid,
    pub name: String,
}

/// Requested addition to a build.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NewBuildItem {
    pub part: PartUuid,
    pub category: PartCategory,
    pub quantity: NonZeroU32,
}

/// A user's draft build together with every build they own.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UserBuilds {
    pub active: Build,
    pub builds: Vec<Build>,
}
