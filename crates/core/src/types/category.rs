//! Product categories and the category filter used by listings.

use core::fmt;
use core::str::FromStr;

use serde::{Deserialize, Serialize};

/// A product category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Jewelry,
    Earbuds,
    Gadgets,
}

impl Category {
    /// All categories, in navigation order.
    pub const ALL: [Self; 3] = [Self::Jewelry, Self::Earbuds, Self::Gadgets];

    /// URL/query value of the category.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Jewelry => "jewelry",
            Self::Earbuds => "earbuds",
            Self::Gadgets => "gadgets",
        }
    }

    /// Human-readable name.
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Jewelry => "Jewelry",
            Self::Earbuds => "Earbuds",
            Self::Gadgets => "Smart Gadgets",
        }
    }

    #[must_use]
    pub const fn icon(self) -> &'static str {
        match self {
            Self::Jewelry => "💎",
            Self::Earbuds => "🎧",
            Self::Gadgets => "⚡",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "jewelry" => Ok(Self::Jewelry),
            "earbuds" => Ok(Self::Earbuds),
            "gadgets" => Ok(Self::Gadgets),
            _ => Err(format!("invalid category: {s}")),
        }
    }
}

/// Category selection for a product listing.
///
/// `all` and any unrecognised value both select the full catalog; there is
/// no "unknown category" state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(Category),
}

impl CategoryFilter {
    /// Parse a query-string value, falling back to [`CategoryFilter::All`].
    #[must_use]
    pub fn parse(value: Option<&str>) -> Self {
        value
            .and_then(|v| v.parse::<Category>().ok())
            .map_or(Self::All, Self::Only)
    }

    /// Whether a product in `category` passes this filter.
    #[must_use]
    pub fn matches(self, category: Category) -> bool {
        match self {
            Self::All => true,
            Self::Only(selected) => selected == category,
        }
    }

    /// Query value, `"all"` for the unfiltered listing.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Only(category) => category.as_str(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_roundtrip() {
        for category in Category::ALL {
            assert_eq!(category.as_str().parse::<Category>(), Ok(category));
        }
    }

    #[test]
    fn test_filter_parse_falls_back_to_all() {
        assert_eq!(CategoryFilter::parse(None), CategoryFilter::All);
        assert_eq!(CategoryFilter::parse(Some("all")), CategoryFilter::All);
        assert_eq!(CategoryFilter::parse(Some("furniture")), CategoryFilter::All);
        assert_eq!(
            CategoryFilter::parse(Some("earbuds")),
            CategoryFilter::Only(Category::Earbuds)
        );
    }

    #[test]
    fn test_filter_matches() {
        assert!(CategoryFilter::All.matches(Category::Gadgets));
        assert!(CategoryFilter::Only(Category::Gadgets).matches(Category::Gadgets));
        assert!(!CategoryFilter::Only(Category::Gadgets).matches(Category::Jewelry));
    }
}
