use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Shopping list sections, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    Running,
    Technology,
    Education,
    Health,
    Household,
    Triathlon,
    #[serde(rename = "Cart")]
    ShoppingCart,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown category '{0}'")]
pub struct ParseCategoryError(pub String);

impl Category {
    pub const ALL: [Category; 7] = [
        Category::Running,
        Category::Technology,
        Category::Education,
        Category::Health,
        Category::Household,
        Category::Triathlon,
        Category::ShoppingCart,
    ];

    pub fn raw_value(self) -> &'static str {
        match self {
            Category::Running => "Running",
            Category::Technology => "Technology",
            Category::Education => "Education",
            Category::Health => "Health",
            Category::Household => "Household",
            Category::Triathlon => "Triathlon",
            Category::ShoppingCart => "Cart",
        }
    }

    /// Section header text; the cart gets a basket prefix.
    pub fn header_title(self) -> String {
        match self {
            Category::ShoppingCart => format!("🛒{}", self.raw_value()),
            other => other.raw_value().to_string(),
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.raw_value())
    }
}

impl FromStr for Category {
    type Err = ParseCategoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Category::ALL
            .into_iter()
            .find(|c| c.raw_value().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| ParseCategoryError(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_raw_values_case_insensitively() {
        assert_eq!("running".parse::<Category>().unwrap(), Category::Running);
        assert_eq!("Cart".parse::<Category>().unwrap(), Category::ShoppingCart);
        assert!("groceries".parse::<Category>().is_err());
    }

    #[test]
    fn cart_header_has_prefix() {
        assert_eq!(Category::ShoppingCart.header_title(), "🛒Cart");
        assert_eq!(Category::Health.header_title(), "Health");
    }

    #[test]
    fn serializes_as_raw_value() {
        let json = serde_json::to_string(&Category::ShoppingCart).unwrap();
        assert_eq!(json, "\"Cart\"");
    }
}
