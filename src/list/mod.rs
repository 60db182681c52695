//! Ordered grouped lists.
//!
//! ```text
//! Edit ──→ Snapshot (copy) ──→ publish ──→ Changeset ──→ observers
//! ```
//!
//! - **Snapshot**: ordered sections, each with ordered item identities
//! - **Reconciler**: owns the current snapshot, applies edits atomically
//! - **Changeset**: minimal insert/delete/move script between two snapshots

mod diff;
mod error;
mod reconciler;
mod snapshot;

pub use diff::{Changeset, ItemChange, ItemMove};
pub use error::ListError;
pub use reconciler::{Reconciler, SnapshotObserver};
pub use snapshot::{Edit, ItemPosition, Key, Position, Snapshot};
