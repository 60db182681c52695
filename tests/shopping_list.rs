use std::sync::Arc;

use parking_lot::Mutex;

use diffable_lists::list::{Changeset, Snapshot, SnapshotObserver};
use diffable_lists::shopping::{
    Category, DraftError, Item, ItemDraft, ItemId, ShoppingError, ShoppingList,
};

type Published = Arc<Mutex<Vec<Changeset<Category, ItemId>>>>;

struct Recorder(Published);

impl SnapshotObserver<Category, ItemId> for Recorder {
    fn snapshot_published(
        &mut self,
        _previous: &Snapshot<Category, ItemId>,
        _next: &Snapshot<Category, ItemId>,
        changes: &Changeset<Category, ItemId>,
    ) {
        self.0.lock().push(changes.clone());
    }
}

fn names(list: &ShoppingList, category: Category) -> Vec<String> {
    list.items_in(category)
        .into_iter()
        .map(|item| item.name.clone())
        .collect()
}

#[test]
fn test_sample_sections_follow_category_order() {
    let list = ShoppingList::sample();
    let sections: Vec<Category> = list.snapshot().sections().copied().collect();
    assert_eq!(sections, Category::ALL.to_vec());
    assert_eq!(
        names(&list, Category::Health),
        vec!["Debrox Swimmer's Ear", "Tylenol Extra Strength"]
    );
}

#[test]
fn test_added_item_lands_at_end_of_its_category() {
    let mut list = ShoppingList::sample();
    let recorded: Published = Arc::default();
    list.add_observer(Box::new(Recorder(Arc::clone(&recorded))));

    let changes = list
        .add_draft(ItemDraft::new("Running socks", "12.50", Category::Running))
        .unwrap();

    assert_eq!(names(&list, Category::Running).last().unwrap(), "Running socks");
    assert_eq!(changes.items_inserted.len(), 1);
    assert_eq!(changes.items_inserted[0].at.section, Category::Running);
    assert_eq!(changes.items_inserted[0].at.index, 2);
    assert_eq!(recorded.lock().len(), 1);
}

#[test]
fn test_duplicate_payloads_are_distinct_rows() {
    let mut list = ShoppingList::new();
    list.add_item(Item::new("Tri suit", 240.0, Category::Triathlon))
        .unwrap();
    list.add_item(Item::new("Tri suit", 240.0, Category::Triathlon))
        .unwrap();
    assert_eq!(list.items_in(Category::Triathlon).len(), 2);
}

#[test]
fn test_rejected_draft_publishes_nothing() {
    let mut list = ShoppingList::sample();
    let recorded: Published = Arc::default();
    list.add_observer(Box::new(Recorder(Arc::clone(&recorded))));

    let err = list
        .add_draft(ItemDraft::new("Helmet", "", Category::Triathlon))
        .unwrap_err();
    assert_eq!(err, ShoppingError::Draft(DraftError::MissingPrice));
    assert!(recorded.lock().is_empty());
    assert_eq!(list.len(), 13);
}

#[test]
fn test_drop_into_cart_then_remove() {
    let mut list = ShoppingList::sample();
    let fitbit = list.find_by_name("fitbit versa 2").unwrap().id;
    let changes = list.move_to_category(&fitbit, Category::ShoppingCart).unwrap();
    assert_eq!(changes.items_moved.len(), 1);
    assert_eq!(list.item(&fitbit).unwrap().category, Category::ShoppingCart);
    assert!(list.items_in(Category::Technology).is_empty());

    let changes = list.remove_items(&[fitbit]);
    assert_eq!(changes.items_deleted.len(), 1);
    assert!(list.item(&fitbit).is_none());
    assert!(list.items_in(Category::ShoppingCart).is_empty());
}

#[test]
fn test_unknown_name_lookup() {
    let list = ShoppingList::sample();
    assert!(matches!(
        list.find_by_name("Kayak"),
        Err(ShoppingError::UnknownName { .. })
    ));
}

#[test]
fn test_render_uses_header_titles_and_cell_text() {
    let mut list = ShoppingList::new();
    list.add_item(Item::new("Tote bag", 3.0, Category::ShoppingCart))
        .unwrap();
    let rendered = list.render();
    assert_eq!(rendered.len(), 7);
    let (title, rows) = rendered.last().unwrap();
    assert_eq!(title, "🛒Cart");
    assert_eq!(rows, &vec!["Tote bag\nPrice: $3.00".to_string()]);
}
