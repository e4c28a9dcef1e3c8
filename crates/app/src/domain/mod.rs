//! Rigcheck Domain Concerns

pub mod builds;
pub mod parts;
pub mod payments;
