//! Validation of user-entered items.

use thiserror::Error;

use super::category::Category;
use super::item::Item;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DraftError {
    #[error("Item name is required")]
    MissingName,

    #[error("Item price is required")]
    MissingPrice,

    #[error("Invalid price '{value}'")]
    InvalidPrice { value: String },

    #[error("Price must not be negative: {value}")]
    NegativePrice { value: String },
}

/// Raw form input for a new item.
#[derive(Debug, Clone, Default)]
pub struct ItemDraft {
    pub name: String,
    pub price: String,
    /// Falls back to the first category when unset.
    pub category: Option<Category>,
}

impl ItemDraft {
    pub fn new(name: impl Into<String>, price: impl Into<String>, category: Category) -> Self {
        Self {
            name: name.into(),
            price: price.into(),
            category: Some(category),
        }
    }

    pub fn into_item(self) -> Result<Item, DraftError> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(DraftError::MissingName);
        }

        let price_text = self.price.trim();
        if price_text.is_empty() {
            return Err(DraftError::MissingPrice);
        }
        let price: f64 = price_text
            .parse()
            .ok()
            .filter(|p: &f64| p.is_finite())
            .ok_or_else(|| DraftError::InvalidPrice {
                value: price_text.to_string(),
            })?;
        if price < 0.0 {
            return Err(DraftError::NegativePrice {
                value: price_text.to_string(),
            });
        }

        let category = self.category.unwrap_or(Category::ALL[0]);
        Ok(Item::new(name, price, category))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_draft_builds_item() {
        let item = ItemDraft::new("  Goggles ", "19.5", Category::Triathlon)
            .into_item()
            .unwrap();
        assert_eq!(item.name, "Goggles");
        assert_eq!(item.price, 19.5);
        assert_eq!(item.category, Category::Triathlon);
    }

    #[test]
    fn missing_fields_are_rejected() {
        assert_eq!(
            ItemDraft::new("", "1", Category::Health).into_item(),
            Err(DraftError::MissingName)
        );
        assert_eq!(
            ItemDraft::new("Gauze", " ", Category::Health).into_item(),
            Err(DraftError::MissingPrice)
        );
    }

    #[test]
    fn non_numeric_price_is_rejected() {
        let err = ItemDraft::new("Gauze", "cheap", Category::Health)
            .into_item()
            .unwrap_err();
        assert!(matches!(err, DraftError::InvalidPrice { .. }));
        let err = ItemDraft::new("Gauze", "NaN", Category::Health)
            .into_item()
            .unwrap_err();
        assert!(matches!(err, DraftError::InvalidPrice { .. }));
    }

    #[test]
    fn unset_category_defaults_to_first() {
        let draft = ItemDraft {
            name: "Socks".to_string(),
            price: "4".to_string(),
            category: None,
        };
        assert_eq!(draft.into_item().unwrap().category, Category::Running);
    }
}
