//! Rigcheck
//!
//! Rigcheck is a PC-build compatibility engine: a parts catalog, user builds, and the rules that
//! decide whether a combination of parts forms a physically and electrically valid system.

pub mod builds;
pub mod catalog;
pub mod compatibility;
pub mod fixtures;
pub mod hydration;
pub mod parts;
pub mod prelude;
pub mod prices;
pub mod pricing;
pub mod uuids;
