use std::fmt;

use uuid::Uuid;

use super::category::Category;

/// Stable identity of a shopping item. Never reused, independent of content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ItemId(Uuid);

impl ItemId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for ItemId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Item {
    pub id: ItemId,
    pub name: String,
    pub price: f64,
    pub category: Category,
}

impl Item {
    pub fn new(name: impl Into<String>, price: f64, category: Category) -> Self {
        Self {
            id: ItemId::new(),
            name: name.into(),
            price,
            category,
        }
    }

    /// Row text: the name, then the price on its own line.
    pub fn cell_text(&self) -> String {
        format!("{}\nPrice: ${:.2}", self.name, self.price)
    }
}

/// Items the shopping list starts with.
pub fn sample_items() -> Vec<Item> {
    vec![
        Item::new("Polar Bluetooth Stride Sensor", 140.00, Category::Running),
        Item::new("DonJoy Performance POD Ankle Brace", 55.66, Category::Running),
        Item::new("Cracking the Coding Interview", 26.99, Category::Education),
        Item::new("The Pragmatic Programmer", 42.35, Category::Education),
        Item::new("Tri shoes", 120.00, Category::Triathlon),
        Item::new("Tri suit", 240.00, Category::Triathlon),
        Item::new("Towel hooks", 50.00, Category::Household),
        Item::new("Beginner Microscope STEM Kit", 39.99, Category::Education),
        Item::new("Fitbit Versa 2", 199.95, Category::Technology),
        Item::new("BISSELL Cleanview Swivel Pet", 99.99, Category::Household),
        Item::new("Ninja Professional", 89.99, Category::Household),
        Item::new("Debrox Swimmer's Ear", 7.99, Category::Health),
        Item::new("Tylenol Extra Strength", 9.47, Category::Health),
    ]
}
