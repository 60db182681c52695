//! Categorized shopping list built on [`crate::list`].

mod category;
mod draft;
mod item;
mod list;

pub use category::{Category, ParseCategoryError};
pub use draft::{DraftError, ItemDraft};
pub use item::{sample_items, Item, ItemId};
pub use list::{ShoppingChanges, ShoppingError, ShoppingList};
