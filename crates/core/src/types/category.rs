//! Product category tags.

use serde::{Deserialize, Serialize};

/// A category tag that is not one of the fixed set.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid category: {0}")]
pub struct CategoryError(pub String);

/// The fixed set of catalog categories.
///
/// Stored as lowercase text; the `product` table has a matching `CHECK`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Electronics,
    Accessories,
    Clothing,
    Home,
    Sports,
}

impl Category {
    /// Every category.
    pub const ALL: [Self; 5] = [
        Self::Electronics,
        Self::Accessories,
        Self::Clothing,
        Self::Home,
        Self::Sports,
    ];

    /// The tag stored in the `category` column.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Electronics => "electronics",
            Self::Accessories => "accessories",
            Self::Clothing => "clothing",
            Self::Home => "home",
            Self::Sports => "sports",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Category {
    type Err = CategoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|category| category.as_str() == s)
            .ok_or_else(|| CategoryError(s.to_owned()))
    }
}
