//! Shopping list model: a reconciler over categories plus item payloads.

use std::collections::HashMap;

use thiserror::Error;

use crate::list::{Changeset, ListError, Reconciler, Snapshot, SnapshotObserver};

use super::category::Category;
use super::draft::{DraftError, ItemDraft};
use super::item::{sample_items, Item, ItemId};

pub type ShoppingChanges = Changeset<Category, ItemId>;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ShoppingError {
    #[error(transparent)]
    Draft(#[from] DraftError),

    #[error(transparent)]
    List(#[from] ListError),

    #[error("No item named '{name}'")]
    UnknownName { name: String },
}

pub struct ShoppingList {
    reconciler: Reconciler<Category, ItemId>,
    items: HashMap<ItemId, Item>,
}

impl Default for ShoppingList {
    fn default() -> Self {
        Self::new()
    }
}

impl ShoppingList {
    /// Empty list with every category as a section.
    pub fn new() -> Self {
        let mut snapshot = Snapshot::new();
        if let Err(err) = snapshot.append_sections(Category::ALL.to_vec()) {
            tracing::warn!(error = %err, "Failed to create category sections");
        }
        Self {
            reconciler: Reconciler::from_snapshot(snapshot),
            items: HashMap::new(),
        }
    }

    /// List seeded with the bundled sample items, grouped by category.
    pub fn sample() -> Self {
        let mut list = Self::new();
        for item in sample_items() {
            if let Err(err) = list.add_item(item) {
                tracing::warn!(error = %err, "Skipped sample item");
            }
        }
        list
    }

    pub fn add_observer(&mut self, observer: Box<dyn SnapshotObserver<Category, ItemId>>) {
        self.reconciler.add_observer(observer);
    }

    pub fn snapshot(&self) -> &Snapshot<Category, ItemId> {
        self.reconciler.snapshot()
    }

    pub fn item(&self, id: &ItemId) -> Option<&Item> {
        self.items.get(id)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// First item (in display order) whose name matches, ignoring ASCII case.
    pub fn find_by_name(&self, name: &str) -> Result<&Item, ShoppingError> {
        self.snapshot()
            .items()
            .filter_map(|id| self.items.get(id))
            .find(|item| item.name.eq_ignore_ascii_case(name.trim()))
            .ok_or_else(|| ShoppingError::UnknownName {
                name: name.to_string(),
            })
    }

    /// Items of `category` in display order.
    pub fn items_in(&self, category: Category) -> Vec<&Item> {
        self.snapshot()
            .items_in(&category)
            .unwrap_or_default()
            .iter()
            .filter_map(|id| self.items.get(id))
            .collect()
    }

    /// Appends `item` to the end of its category.
    pub fn add_item(&mut self, item: Item) -> Result<ShoppingChanges, ShoppingError> {
        let changes = self.reconciler.append_items(vec![item.id], &item.category)?;
        tracing::debug!(id = %item.id, name = %item.name, category = %item.category, "Item added");
        self.items.insert(item.id, item);
        Ok(changes)
    }

    pub fn add_draft(&mut self, draft: ItemDraft) -> Result<ShoppingChanges, ShoppingError> {
        let item = draft.into_item()?;
        self.add_item(item)
    }

    /// Removes items; unknown ids are ignored.
    pub fn remove_items(&mut self, ids: &[ItemId]) -> ShoppingChanges {
        let changes = self.reconciler.delete_items(ids);
        for id in ids {
            self.items.remove(id);
        }
        changes
    }

    /// Drag-and-drop `id` onto `onto`. The item adopts the category it lands in.
    pub fn drop_item(
        &mut self,
        id: &ItemId,
        onto: &ItemId,
    ) -> Result<ShoppingChanges, ShoppingError> {
        let changes = self.reconciler.drop_item(id, onto)?;
        self.sync_category(id);
        Ok(changes)
    }

    /// Moves `id` to the end of `category` (drop on an empty section or past the last row).
    pub fn move_to_category(
        &mut self,
        id: &ItemId,
        category: Category,
    ) -> Result<ShoppingChanges, ShoppingError> {
        let changes = self.reconciler.move_item_to_section(id, &category)?;
        self.sync_category(id);
        Ok(changes)
    }

    /// Edits an item's payload in place and reports it as an update.
    pub fn update_item<F>(&mut self, id: &ItemId, edit: F) -> Result<ShoppingChanges, ShoppingError>
    where
        F: FnOnce(&mut Item),
    {
        let Some(current) = self.items.get(id) else {
            return Err(ListError::unknown_item(id).into());
        };
        let previous = current.clone();
        let mut updated = previous.clone();
        edit(&mut updated);
        // Identity and section are owned by the list.
        updated.id = previous.id;
        updated.category = previous.category;

        let snapshot = self.snapshot();
        let changes = Changeset::between_with_payloads(
            snapshot,
            snapshot,
            |item_id| (item_id == id).then_some(&previous),
            |item_id| (item_id == id).then_some(&updated),
        );
        self.items.insert(*id, updated);
        Ok(changes)
    }

    /// Header and row texts, section by section. Empty sections are kept.
    pub fn render(&self) -> Vec<(String, Vec<String>)> {
        self.snapshot()
            .iter_sections()
            .map(|(category, ids)| {
                let rows = ids
                    .iter()
                    .filter_map(|id| self.items.get(id))
                    .map(Item::cell_text)
                    .collect();
                (category.header_title(), rows)
            })
            .collect()
    }

    fn sync_category(&mut self, id: &ItemId) {
        let section = self.reconciler.snapshot().section_of(id).copied();
        if let (Some(category), Some(item)) = (section, self.items.get_mut(id)) {
            item.category = category;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sample_groups_by_category() {
        let list = ShoppingList::sample();
        assert_eq!(list.len(), 13);
        assert_eq!(list.snapshot().section_count(), 7);
        let education: Vec<_> = list
            .items_in(Category::Education)
            .into_iter()
            .map(|i| i.name.as_str())
            .collect();
        assert_eq!(
            education,
            vec![
                "Cracking the Coding Interview",
                "The Pragmatic Programmer",
                "Beginner Microscope STEM Kit"
            ]
        );
        assert!(list.items_in(Category::ShoppingCart).is_empty());
    }

    #[test]
    fn drop_into_other_category_updates_payload() {
        let mut list = ShoppingList::sample();
        let shoes = list.find_by_name("Tri shoes").unwrap().id;
        let fitbit = list.find_by_name("Fitbit Versa 2").unwrap().id;
        list.drop_item(&shoes, &fitbit).unwrap();
        assert_eq!(list.item(&shoes).unwrap().category, Category::Technology);
        assert_eq!(list.items_in(Category::Technology)[0].id, shoes);
    }

    #[test]
    fn price_edit_is_reported_as_update() {
        let mut list = ShoppingList::sample();
        let suit = list.find_by_name("Tri suit").unwrap().id;
        let changes = list.update_item(&suit, |item| item.price = 199.0).unwrap();
        assert_eq!(changes.items_updated.len(), 1);
        assert_eq!(changes.items_updated[0].item, suit);
        assert!(changes.items_moved.is_empty());
        assert_eq!(list.item(&suit).unwrap().price, 199.0);
    }

    #[test]
    fn invalid_draft_leaves_list_untouched() {
        let mut list = ShoppingList::new();
        let err = list
            .add_draft(ItemDraft::new("Bike", "free", Category::Triathlon))
            .unwrap_err();
        assert!(matches!(err, ShoppingError::Draft(DraftError::InvalidPrice { .. })));
        assert!(list.is_empty());
    }
}
