//! Reconciler: owns the current snapshot and publishes new ones.
//!
//! Published snapshots are shared behind `Arc` and never touched again.
//! Every edit works on a private copy; only a fully successful edit is
//! published, together with the changeset against the previous snapshot.

use std::sync::Arc;

use super::diff::Changeset;
use super::error::ListError;
use super::snapshot::{Edit, Key, Position, Snapshot};

/// Consumer of published snapshots (a rendering layer, a logger, a test spy).
pub trait SnapshotObserver<S, I> {
    fn snapshot_published(
        &mut self,
        _previous: &Snapshot<S, I>,
        _next: &Snapshot<S, I>,
        _changes: &Changeset<S, I>,
    ) {
    }
}

pub struct Reconciler<S, I> {
    current: Arc<Snapshot<S, I>>,
    observers: Vec<Box<dyn SnapshotObserver<S, I>>>,
    published: u64,
}

impl<S: Key, I: Key> Default for Reconciler<S, I> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: Key, I: Key> Reconciler<S, I> {
    pub fn new() -> Self {
        Self::from_snapshot(Snapshot::new())
    }

    pub fn from_snapshot(snapshot: Snapshot<S, I>) -> Self {
        Self {
            current: Arc::new(snapshot),
            observers: Vec::new(),
            published: 0,
        }
    }

    pub fn add_observer(&mut self, observer: Box<dyn SnapshotObserver<S, I>>) {
        self.observers.push(observer);
    }

    /// Read-only view of the current snapshot.
    pub fn snapshot(&self) -> &Snapshot<S, I> {
        &self.current
    }

    /// Shared handle to the current snapshot.
    pub fn published(&self) -> Arc<Snapshot<S, I>> {
        Arc::clone(&self.current)
    }

    /// Number of snapshots published since construction.
    pub fn publish_count(&self) -> u64 {
        self.published
    }

    pub fn append_section(&mut self, section: S) -> Result<Changeset<S, I>, ListError> {
        self.commit(|s| s.append_section(section))
    }

    pub fn append_items(
        &mut self,
        items: Vec<I>,
        section: &S,
    ) -> Result<Changeset<S, I>, ListError> {
        self.commit(|s| s.append_items(items, section))
    }

    pub fn delete_items(&mut self, items: &[I]) -> Changeset<S, I> {
        let mut next = (*self.current).clone();
        next.delete_items(items);
        self.publish(next)
    }

    pub fn move_item(
        &mut self,
        item: &I,
        anchor: &I,
        position: Position,
    ) -> Result<Changeset<S, I>, ListError> {
        self.commit(|s| s.move_item(item, anchor, position))
    }

    pub fn move_item_to_section(
        &mut self,
        item: &I,
        section: &S,
    ) -> Result<Changeset<S, I>, ListError> {
        self.commit(|s| s.move_item_to_section(item, section))
    }

    pub fn drop_item(&mut self, item: &I, onto: &I) -> Result<Changeset<S, I>, ListError> {
        self.commit(|s| s.drop_item(item, onto))
    }

    /// Applies `edits` in order as one unit: either all of them are
    /// published as a single snapshot or none is.
    pub fn apply(&mut self, edits: Vec<Edit<S, I>>) -> Result<Changeset<S, I>, ListError> {
        self.commit(|s| {
            for edit in edits {
                s.apply_edit(edit)?;
            }
            Ok(())
        })
    }

    /// Publishes a wholesale replacement snapshot.
    pub fn replace(&mut self, snapshot: Snapshot<S, I>) -> Changeset<S, I> {
        self.publish(snapshot)
    }

    fn commit<F>(&mut self, edit: F) -> Result<Changeset<S, I>, ListError>
    where
        F: FnOnce(&mut Snapshot<S, I>) -> Result<(), ListError>,
    {
        let mut next = (*self.current).clone();
        if let Err(err) = edit(&mut next) {
            tracing::debug!(error = %err, "List edit rejected");
            return Err(err);
        }
        Ok(self.publish(next))
    }

    fn publish(&mut self, next: Snapshot<S, I>) -> Changeset<S, I> {
        let changes = Changeset::between(&*self.current, &next);
        for observer in &mut self.observers {
            observer.snapshot_published(&self.current, &next, &changes);
        }
        self.current = Arc::new(next);
        self.published += 1;
        tracing::trace!(
            generation = self.published,
            inserted = changes.items_inserted.len(),
            deleted = changes.items_deleted.len(),
            moved = changes.items_moved.len(),
            "Published snapshot"
        );
        changes
    }
}
