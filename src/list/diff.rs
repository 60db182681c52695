//! Changesets between two snapshots.
//!
//! Presence is decided by identity alone. A surviving item counts as moved
//! when it changes section, or when its order relative to the other items
//! that stayed in the same section changed. Items kept in place by the
//! longest increasing run of old indices are not reported, which keeps the
//! move list minimal (deleting the first row does not "move" the rest).
//! An index shift caused only by inserts or deletes of neighbouring items is
//! therefore not reported as a move, even though its (section, index) differs.

use std::collections::{HashMap, HashSet};

use super::snapshot::{ItemPosition, Key, Snapshot};

/// An item together with where it sits.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemChange<S, I> {
    pub item: I,
    pub at: ItemPosition<S>,
}

/// An item present in both snapshots at a different place.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemMove<S, I> {
    pub item: I,
    pub from: ItemPosition<S>,
    pub to: ItemPosition<S>,
}

/// Edit script turning one snapshot into another.
///
/// Deleted positions refer to the previous snapshot; inserted, updated and
/// destination positions refer to the next one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Changeset<S, I> {
    pub sections_inserted: Vec<S>,
    pub sections_deleted: Vec<S>,
    pub sections_moved: Vec<S>,
    pub items_inserted: Vec<ItemChange<S, I>>,
    pub items_deleted: Vec<ItemChange<S, I>>,
    pub items_moved: Vec<ItemMove<S, I>>,
    pub items_updated: Vec<ItemChange<S, I>>,
}

impl<S, I> Default for Changeset<S, I> {
    fn default() -> Self {
        Self {
            sections_inserted: Vec::new(),
            sections_deleted: Vec::new(),
            sections_moved: Vec::new(),
            items_inserted: Vec::new(),
            items_deleted: Vec::new(),
            items_moved: Vec::new(),
            items_updated: Vec::new(),
        }
    }
}

impl<S: Key, I: Key> Changeset<S, I> {
    /// Structural diff from `previous` to `next`.
    pub fn between(previous: &Snapshot<S, I>, next: &Snapshot<S, I>) -> Self {
        let mut changes = Changeset::default();
        changes.diff_sections(previous, next);
        changes.diff_items(previous, next);
        changes
    }

    /// Structural diff plus in-place updates.
    ///
    /// An item present in both snapshots and not moved is reported as
    /// updated when its payload differs. Items whose payload is missing on
    /// either side are left alone.
    pub fn between_with_payloads<'p, P, F, G>(
        previous: &Snapshot<S, I>,
        next: &Snapshot<S, I>,
        previous_payload: F,
        next_payload: G,
    ) -> Self
    where
        P: PartialEq + ?Sized + 'p,
        F: Fn(&I) -> Option<&'p P>,
        G: Fn(&I) -> Option<&'p P>,
    {
        let mut changes = Self::between(previous, next);
        let moved: HashSet<&I> = changes.items_moved.iter().map(|m| &m.item).collect();

        let mut updated = Vec::new();
        for (section, items) in next.iter_sections() {
            for (index, item) in items.iter().enumerate() {
                if moved.contains(item) || !previous.contains_item(item) {
                    continue;
                }
                let changed = match (previous_payload(item), next_payload(item)) {
                    (Some(old), Some(new)) => old != new,
                    _ => false,
                };
                if changed {
                    updated.push(ItemChange {
                        item: item.clone(),
                        at: ItemPosition {
                            section: section.clone(),
                            index,
                        },
                    });
                }
            }
        }
        changes.items_updated = updated;
        changes
    }

    pub fn is_empty(&self) -> bool {
        self.sections_inserted.is_empty()
            && self.sections_deleted.is_empty()
            && self.sections_moved.is_empty()
            && self.items_inserted.is_empty()
            && self.items_deleted.is_empty()
            && self.items_moved.is_empty()
            && self.items_updated.is_empty()
    }

    fn diff_sections(&mut self, previous: &Snapshot<S, I>, next: &Snapshot<S, I>) {
        let old_order: HashMap<&S, usize> =
            previous.sections().enumerate().map(|(i, s)| (s, i)).collect();
        let new_keys: HashSet<&S> = next.sections().collect();

        self.sections_deleted = previous
            .sections()
            .filter(|s| !new_keys.contains(s))
            .cloned()
            .collect();

        let mut survivors = Vec::new();
        for section in next.sections() {
            match old_order.get(section) {
                Some(&old_index) => survivors.push((section, old_index)),
                None => self.sections_inserted.push(section.clone()),
            }
        }

        let old_indices: Vec<usize> = survivors.iter().map(|(_, i)| *i).collect();
        let keep = longest_increasing_run(&old_indices);
        self.sections_moved = survivors
            .into_iter()
            .zip(keep)
            .filter(|(_, kept)| !kept)
            .map(|((section, _), _)| section.clone())
            .collect();
    }

    fn diff_items(&mut self, previous: &Snapshot<S, I>, next: &Snapshot<S, I>) {
        let old_positions = positions(previous);
        let new_positions = positions(next);

        for (section, items) in previous.iter_sections() {
            for (index, item) in items.iter().enumerate() {
                if !new_positions.contains_key(item) {
                    self.items_deleted.push(ItemChange {
                        item: item.clone(),
                        at: ItemPosition {
                            section: section.clone(),
                            index,
                        },
                    });
                }
            }
        }

        for (section, items) in next.iter_sections() {
            // Items that were already in this same section, with their old index.
            let mut stayed: Vec<(usize, &I, usize)> = Vec::new();

            for (index, item) in items.iter().enumerate() {
                let to = ItemPosition {
                    section: section.clone(),
                    index,
                };
                match old_positions.get(item) {
                    None => self.items_inserted.push(ItemChange {
                        item: item.clone(),
                        at: to,
                    }),
                    Some(from) if &from.section != section => self.items_moved.push(ItemMove {
                        item: item.clone(),
                        from: from.clone(),
                        to,
                    }),
                    Some(from) => stayed.push((index, item, from.index)),
                }
            }

            let old_indices: Vec<usize> = stayed.iter().map(|(_, _, old)| *old).collect();
            let keep = longest_increasing_run(&old_indices);
            for ((index, item, old_index), kept) in stayed.into_iter().zip(keep) {
                if kept {
                    continue;
                }
                self.items_moved.push(ItemMove {
                    item: item.clone(),
                    from: ItemPosition {
                        section: section.clone(),
                        index: old_index,
                    },
                    to: ItemPosition {
                        section: section.clone(),
                        index,
                    },
                });
            }
        }
    }
}

fn positions<S: Key, I: Key>(snapshot: &Snapshot<S, I>) -> HashMap<&I, ItemPosition<S>> {
    let mut map = HashMap::with_capacity(snapshot.item_count());
    for (section, items) in snapshot.iter_sections() {
        for (index, item) in items.iter().enumerate() {
            map.insert(
                item,
                ItemPosition {
                    section: section.clone(),
                    index,
                },
            );
        }
    }
    map
}

/// Marks the members of one longest strictly increasing subsequence.
fn longest_increasing_run(values: &[usize]) -> Vec<bool> {
    let mut tails: Vec<usize> = Vec::new();
    let mut parent: Vec<Option<usize>> = vec![None; values.len()];

    for (i, &value) in values.iter().enumerate() {
        let slot = tails.partition_point(|&t| values[t] < value);
        if slot > 0 {
            parent[i] = Some(tails[slot - 1]);
        }
        if slot == tails.len() {
            tails.push(i);
        } else {
            tails[slot] = i;
        }
    }

    let mut keep = vec![false; values.len()];
    let mut cursor = tails.last().copied();
    while let Some(i) = cursor {
        keep[i] = true;
        cursor = parent[i];
    }
    keep
}
