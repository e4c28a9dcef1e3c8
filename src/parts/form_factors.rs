//! Supported Form Factors

use std::fmt::{Display, Formatter, Result as FmtResult};

use serde::{Deserialize, Serialize};

/// The motherboard form factors a case accepts, kept in the catalog's comma-delimited encoding
/// (e.g. `"ATX, Micro-ATX, Mini-ITX"`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SupportedFormFactors(String);

impl SupportedFormFactors {
    /// Wrap a delimited form factor list.
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    /// Iterate over the individual form factors, trimmed, skipping empty tokens.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.split(',').map(str::trim).filter(|token| !token.is_empty())
    }

    /// Whether a motherboard of the given form factor fits.
    pub fn supports(&self, form_factor: &str) -> bool {
        self.iter().any(|supported| supported == form_factor.trim())
    }

    /// Whether the list names no form factor at all.
    pub fn is_empty(&self) -> bool {
        self.iter().next().is_none()
    }

    /// The delimited form as stored in the catalog.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for SupportedFormFactors {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(&self.0)
    }
}

impl From<&str> for SupportedFormFactors {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_and_trims_tokens() {
        let supported = SupportedFormFactors::new("ATX, Micro-ATX ,Mini-ITX");

        assert_eq!(
            supported.iter().collect::<Vec<_>>(),
            vec!["ATX", "Micro-ATX", "Mini-ITX"]
        );
    }

    #[test]
    fn supports_matches_whole_tokens_only() {
        let supported = SupportedFormFactors::new("Micro-ATX, Mini-ITX");

        assert!(supported.supports("Micro-ATX"));
        assert!(supported.supports(" Mini-ITX "));
        assert!(!supported.supports("ATX"));
    }

    #[test]
    fn blank_list_is_empty() {
        assert!(SupportedFormFactors::new(" , ").is_empty());
        assert!(!SupportedFormFactors::new("ATX").is_empty());
    }
}
