use serde::{Deserialize, Serialize};

pub const MAX_LIST_ID_LENGTH: usize = 255;
pub const MAX_ITEMS: usize = 10_000;
pub const MAX_ITEM_LENGTH: usize = 1_000;
pub const DEFAULT_SLICE_LENGTH: usize = 10;
pub const MAX_SLICE_LENGTH: usize = 100;

/// One stored list, in the exact shape it crosses the wire:
/// `{list_id, items, count, created_at, updated_at}`.
///
/// `count` is derived and always equals `items.len()`; `created_at` is fixed
/// at creation while `updated_at` moves on every write. Timestamps are
/// RFC 3339 UTC strings with microsecond precision and a `Z` suffix.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct StoredRecord {
    pub list_id: String,
    pub items: Vec<String>,
    pub count: usize,
    pub created_at: String,
    pub updated_at: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SliceKind {
    Head,
    Tail,
}

impl SliceKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Head => "head",
            Self::Tail => "tail",
        }
    }
}

/// Read-only projection returned by the head/tail views.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SliceView {
    pub list_id: String,
    pub operation: String,
    pub items: Vec<String>,
    pub count: usize,
    pub total_count: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ListCollection {
    pub lists: Vec<StoredRecord>,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    message: String,
}

impl ValidationError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for ValidationError {}
