//! Error types for list edits.

use std::fmt::Debug;

use thiserror::Error;

/// Errors raised by snapshot edits.
///
/// Every edit is atomic: when one of these is returned the snapshot is
/// exactly as it was before the call.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ListError {
    /// The edit referenced a section that is not in the snapshot
    #[error("Section {section} not found")]
    UnknownSection { section: String },

    /// The section is already part of the snapshot
    #[error("Section {section} already exists")]
    DuplicateSection { section: String },

    /// The item identity is already part of the snapshot
    #[error("Item {item} already exists")]
    DuplicateItem { item: String },

    /// The edit referenced an item (or anchor item) that is not in the snapshot
    #[error("Item {item} not found")]
    UnknownItem { item: String },
}

impl ListError {
    pub(crate) fn unknown_section(section: &impl Debug) -> Self {
        ListError::UnknownSection {
            section: format!("{:?}", section),
        }
    }

    pub(crate) fn duplicate_section(section: &impl Debug) -> Self {
        ListError::DuplicateSection {
            section: format!("{:?}", section),
        }
    }

    pub(crate) fn duplicate_item(item: &impl Debug) -> Self {
        ListError::DuplicateItem {
            item: format!("{:?}", item),
        }
    }

    pub(crate) fn unknown_item(item: &impl Debug) -> Self {
        ListError::UnknownItem {
            item: format!("{:?}", item),
        }
    }

    /// Stable machine-readable name of the error kind.
    pub fn error_type(&self) -> &'static str {
        match self {
            ListError::UnknownSection { .. } => "unknown_section",
            ListError::DuplicateSection { .. } => "duplicate_section",
            ListError::DuplicateItem { .. } => "duplicate_item",
            ListError::UnknownItem { .. } => "unknown_item",
        }
    }
}
