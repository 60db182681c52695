//! Ordered, sectioned snapshot of item identities.
//!
//! A [`Snapshot`] holds an ordered list of sections and, for each section,
//! an ordered list of item identities. Identities are unique across the
//! whole snapshot and sections are unique by key.
//!
//! All edits validate first and mutate second, so a failed edit leaves the
//! snapshot untouched.

use std::collections::HashSet;
use std::fmt::Debug;
use std::hash::Hash;

use super::error::ListError;

/// Bound shared by section keys and item identities.
pub trait Key: Clone + Eq + Hash + Debug {}

impl<T: Clone + Eq + Hash + Debug> Key for T {}

/// Placement relative to an anchor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Position {
    Before,
    After,
}

/// Location of an item inside a snapshot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemPosition<S> {
    pub section: S,
    pub index: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct SectionEntry<S, I> {
    key: S,
    items: Vec<I>,
}

/// Ordered sections with ordered item identities.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snapshot<S, I> {
    sections: Vec<SectionEntry<S, I>>,
}

impl<S, I> Default for Snapshot<S, I> {
    fn default() -> Self {
        Self {
            sections: Vec::new(),
        }
    }
}

/// A single edit, as issued by an event layer.
#[derive(Debug, Clone, PartialEq)]
pub enum Edit<S, I> {
    AppendSections(Vec<S>),
    InsertSection {
        section: S,
        anchor: S,
        position: Position,
    },
    DeleteSections(Vec<S>),
    MoveSection {
        section: S,
        anchor: S,
        position: Position,
    },
    AppendItems {
        items: Vec<I>,
        section: S,
    },
    InsertItems {
        items: Vec<I>,
        anchor: I,
        position: Position,
    },
    DeleteItems(Vec<I>),
    MoveItem {
        item: I,
        anchor: I,
        position: Position,
    },
    MoveItemToSection {
        item: I,
        section: S,
    },
    /// Drag-and-drop move; the position comes from [`Snapshot::drop_position`].
    DropItem {
        item: I,
        onto: I,
    },
    DeleteAll,
}

impl<S: Key, I: Key> Snapshot<S, I> {
    pub fn new() -> Self {
        Self::default()
    }

    // ---- queries ----

    pub fn sections(&self) -> impl Iterator<Item = &S> + '_ {
        self.sections.iter().map(|s| &s.key)
    }

    pub fn section_count(&self) -> usize {
        self.sections.len()
    }

    pub fn item_count(&self) -> usize {
        self.sections.iter().map(|s| s.items.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    pub fn contains_section(&self, section: &S) -> bool {
        self.section_index(section).is_some()
    }

    pub fn contains_item(&self, item: &I) -> bool {
        self.locate(item).is_some()
    }

    /// Items of `section` in display order, or `None` if the section is missing.
    pub fn items_in(&self, section: &S) -> Option<&[I]> {
        self.section_index(section)
            .map(|idx| self.sections[idx].items.as_slice())
    }

    /// All items, section by section.
    pub fn items(&self) -> impl Iterator<Item = &I> + '_ {
        self.sections.iter().flat_map(|s| s.items.iter())
    }

    /// Iterate `(section, items)` pairs in display order.
    pub fn iter_sections(&self) -> impl Iterator<Item = (&S, &[I])> + '_ {
        self.sections.iter().map(|s| (&s.key, s.items.as_slice()))
    }

    pub fn section_of(&self, item: &I) -> Option<&S> {
        self.locate(item).map(|(si, _)| &self.sections[si].key)
    }

    pub fn position_of(&self, item: &I) -> Option<ItemPosition<S>> {
        self.locate(item).map(|(si, ii)| ItemPosition {
            section: self.sections[si].key.clone(),
            index: ii,
        })
    }

    /// Index of `item` in the flattened, section-by-section order.
    pub fn index_of(&self, item: &I) -> Option<usize> {
        let (si, ii) = self.locate(item)?;
        let before: usize = self.sections[..si].iter().map(|s| s.items.len()).sum();
        Some(before + ii)
    }

    fn section_index(&self, section: &S) -> Option<usize> {
        self.sections.iter().position(|s| &s.key == section)
    }

    fn locate(&self, item: &I) -> Option<(usize, usize)> {
        self.sections.iter().enumerate().find_map(|(si, s)| {
            s.items.iter().position(|i| i == item).map(|ii| (si, ii))
        })
    }

    fn require_section(&self, section: &S) -> Result<usize, ListError> {
        self.section_index(section)
            .ok_or_else(|| ListError::unknown_section(section))
    }

    fn require_item(&self, item: &I) -> Result<(usize, usize), ListError> {
        self.locate(item).ok_or_else(|| ListError::unknown_item(item))
    }

    /// Rejects identities already in the snapshot or repeated within `items`.
    fn check_new_items(&self, items: &[I]) -> Result<(), ListError> {
        let mut seen = HashSet::with_capacity(items.len());
        for item in items {
            if !seen.insert(item) || self.contains_item(item) {
                return Err(ListError::duplicate_item(item));
            }
        }
        Ok(())
    }

    // ---- section edits ----

    pub fn append_section(&mut self, section: S) -> Result<(), ListError> {
        self.append_sections(vec![section])
    }

    pub fn append_sections(&mut self, sections: Vec<S>) -> Result<(), ListError> {
        let mut seen = HashSet::with_capacity(sections.len());
        for section in &sections {
            if !seen.insert(section) || self.contains_section(section) {
                return Err(ListError::duplicate_section(section));
            }
        }
        self.sections
            .extend(sections.into_iter().map(|key| SectionEntry {
                key,
                items: Vec::new(),
            }));
        Ok(())
    }

    pub fn insert_section(
        &mut self,
        section: S,
        anchor: &S,
        position: Position,
    ) -> Result<(), ListError> {
        if self.contains_section(&section) {
            return Err(ListError::duplicate_section(&section));
        }
        let at = self.require_section(anchor)?;
        let at = match position {
            Position::Before => at,
            Position::After => at + 1,
        };
        self.sections.insert(
            at,
            SectionEntry {
                key: section,
                items: Vec::new(),
            },
        );
        Ok(())
    }

    /// Removes the sections and every item they hold. Unknown sections are ignored.
    pub fn delete_sections(&mut self, sections: &[S]) {
        self.sections.retain(|s| !sections.contains(&s.key));
    }

    pub fn move_section(
        &mut self,
        section: &S,
        anchor: &S,
        position: Position,
    ) -> Result<(), ListError> {
        if section == anchor {
            return Ok(());
        }
        let from = self.require_section(section)?;
        self.require_section(anchor)?;

        let entry = self.sections.remove(from);
        let at = self
            .section_index(anchor)
            .ok_or_else(|| ListError::unknown_section(anchor))?;
        let at = match position {
            Position::Before => at,
            Position::After => at + 1,
        };
        self.sections.insert(at, entry);
        Ok(())
    }

    // ---- item edits ----

    pub fn append_items(&mut self, items: Vec<I>, section: &S) -> Result<(), ListError> {
        let si = self.require_section(section)?;
        self.check_new_items(&items)?;
        self.sections[si].items.extend(items);
        Ok(())
    }

    pub fn insert_items(
        &mut self,
        items: Vec<I>,
        anchor: &I,
        position: Position,
    ) -> Result<(), ListError> {
        let (si, ii) = self.require_item(anchor)?;
        self.check_new_items(&items)?;
        let at = match position {
            Position::Before => ii,
            Position::After => ii + 1,
        };
        self.sections[si].items.splice(at..at, items);
        Ok(())
    }

    /// Removes the items wherever they are. Items not present are ignored.
    pub fn delete_items(&mut self, items: &[I]) {
        let doomed: HashSet<&I> = items.iter().collect();
        for section in &mut self.sections {
            section.items.retain(|i| !doomed.contains(i));
        }
    }

    /// Removes every section and item.
    pub fn delete_all(&mut self) {
        self.sections.clear();
    }

    /// Relocates `item` immediately before or after `anchor`, in the
    /// anchor's section. Moving an item relative to itself does nothing.
    pub fn move_item(&mut self, item: &I, anchor: &I, position: Position) -> Result<(), ListError> {
        if item == anchor {
            return Ok(());
        }
        let (from_section, from_index) = self.require_item(item)?;
        self.require_item(anchor)?;

        // Take the item out first so the anchor index below already accounts
        // for the vacated slot.
        let moving = self.sections[from_section].items.remove(from_index);
        let (to_section, anchor_index) = self.require_item(anchor)?;
        let at = match position {
            Position::Before => anchor_index,
            Position::After => anchor_index + 1,
        };
        self.sections[to_section].items.insert(at, moving);
        Ok(())
    }

    /// Relocates `item` to the end of `section`.
    pub fn move_item_to_section(&mut self, item: &I, section: &S) -> Result<(), ListError> {
        let to_section = self.require_section(section)?;
        let (from_section, from_index) = self.require_item(item)?;
        let moving = self.sections[from_section].items.remove(from_index);
        self.sections[to_section].items.push(moving);
        Ok(())
    }

    /// Placement a drop of `item` onto `onto` resolves to.
    ///
    /// Dragging forward within one section lands after the target; dragging
    /// backward, or into another section, lands before it. Returns `None`
    /// for a drop onto itself.
    pub fn drop_position(&self, item: &I, onto: &I) -> Result<Option<Position>, ListError> {
        if item == onto {
            return Ok(None);
        }
        let (item_section, _) = self.require_item(item)?;
        let (onto_section, _) = self.require_item(onto)?;
        let item_index = self.index_of(item).ok_or_else(|| ListError::unknown_item(item))?;
        let onto_index = self.index_of(onto).ok_or_else(|| ListError::unknown_item(onto))?;

        if item_section == onto_section && onto_index > item_index {
            Ok(Some(Position::After))
        } else {
            Ok(Some(Position::Before))
        }
    }

    /// Drag-and-drop move of `item` onto `onto`, see [`Snapshot::drop_position`].
    pub fn drop_item(&mut self, item: &I, onto: &I) -> Result<(), ListError> {
        match self.drop_position(item, onto)? {
            Some(position) => self.move_item(item, onto, position),
            None => Ok(()),
        }
    }

    /// Applies a single [`Edit`].
    pub fn apply_edit(&mut self, edit: Edit<S, I>) -> Result<(), ListError> {
        match edit {
            Edit::AppendSections(sections) => self.append_sections(sections),
            Edit::InsertSection {
                section,
                anchor,
                position,
            } => self.insert_section(section, &anchor, position),
            Edit::DeleteSections(sections) => {
                self.delete_sections(&sections);
                Ok(())
            }
            Edit::MoveSection {
                section,
                anchor,
                position,
            } => self.move_section(&section, &anchor, position),
            Edit::AppendItems { items, section } => self.append_items(items, &section),
            Edit::InsertItems {
                items,
                anchor,
                position,
            } => self.insert_items(items, &anchor, position),
            Edit::DeleteItems(items) => {
                self.delete_items(&items);
                Ok(())
            }
            Edit::MoveItem {
                item,
                anchor,
                position,
            } => self.move_item(&item, &anchor, position),
            Edit::MoveItemToSection { item, section } => self.move_item_to_section(&item, &section),
            Edit::DropItem { item, onto } => self.drop_item(&item, &onto),
            Edit::DeleteAll => {
                self.delete_all();
                Ok(())
            }
        }
    }
}
