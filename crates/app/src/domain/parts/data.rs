//! Parts Data

use rigcheck::parts::PartCategory;
use rust_decimal::Decimal;

/// Largest page a listing returns.
pub const MAX_LIMIT: u32 = 100;

/// Page size when none is requested.
pub const DEFAULT_LIMIT: u32 = 10;

/// Field a listing is ordered by.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum SortKey {
    /// Listing price
    #[default]
    Price,

    /// Display name
    Name,
}

impl SortKey {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Price => "price",
            Self::Name => "name",
        }
    }
}

/// Direction of a listing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum SortOrder {
    /// Smallest first
    #[default]
    Asc,

    /// Largest first
    Desc,
}

impl SortOrder {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Asc => "asc",
            Self::Desc => "desc",
        }
    }
}

/// Catalog listing filter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PartsFilter {
    pub category: Option<PartCategory>,
    pub min_price: Option<Decimal>,
    pub max_price: Option<Decimal>,
    pub sort_by: SortKey,
    pub sort_order: SortOrder,
    limit: u32,
    pub skip: u32,
}

impl Default for PartsFilter {
    fn default() -> Self {
        Self {
            category: None,
            min_price: None,
            max_price: None,
            sort_by: SortKey::default(),
            sort_order: SortOrder::default(),
            limit: DEFAULT_LIMIT,
            skip: 0,
        }
    }
}

impl PartsFilter {
    /// Set the page size, clamped to `1..=MAX_LIMIT`.
    #[must_use]
    pub fn with_limit(mut self, limit: u32) -> Self {
        self.limit = limit.clamp(1, MAX_LIMIT);
        self
    }

    pub const fn limit(&self) -> u32 {
        self.limit
    }
}
