//! Ordered grouped lists with snapshot diffing, and a countdown ticker that
//! publishes its values as such a list.
//!
//! ```
//! use diffable_lists::list::{Position, Reconciler};
//!
//! let mut list: Reconciler<&str, u32> = Reconciler::new();
//! list.append_section("Running").unwrap();
//! list.append_section("Education").unwrap();
//! list.append_items(vec![1, 2], &"Running").unwrap();
//! list.append_items(vec![3], &"Education").unwrap();
//!
//! let changes = list.move_item(&2, &3, Position::Before).unwrap();
//! assert_eq!(list.snapshot().items_in(&"Education"), Some(&[2, 3][..]));
//! assert_eq!(changes.items_moved.len(), 1);
//! ```

pub mod config;
pub mod countdown;
pub mod list;
pub mod logging;
pub mod shopping;
pub mod ui;
