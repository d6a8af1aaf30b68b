//! List operations composed over a [`RecordStore`].
//!
//! Writes are full replacements; concurrent writers to the same identifier
//! resolve last-write-wins with no locking or merge.

use chrono::{SecondsFormat, Utc};
use list_service_core::contract::{SliceView, StoredRecord};
use list_service_core::slicing::{head_slice, tail_slice};
use uuid::Uuid;

use crate::adapters::record_store::RecordStore;

pub fn fetch_record(
    store: &dyn RecordStore,
    list_id: &str,
) -> Result<Option<StoredRecord>, String> {
    store.read_record(list_id)
}

pub fn all_records(store: &dyn RecordStore) -> Result<Vec<StoredRecord>, String> {
    store.scan_records()
}

/// Stores a new record under a generated identifier.
pub fn create_record(
    store: &dyn RecordStore,
    items: Vec<String>,
) -> Result<StoredRecord, String> {
    let now = current_timestamp();
    let record = StoredRecord {
        list_id: Uuid::new_v4().to_string(),
        count: items.len(),
        items,
        created_at: now.clone(),
        updated_at: now,
    };

    store.write_record(&record)?;
    Ok(record)
}

/// Create-or-replace under a caller-supplied identifier. `created_at` is
/// preserved when the record already exists.
pub fn upsert_record(
    store: &dyn RecordStore,
    list_id: &str,
    items: Vec<String>,
) -> Result<StoredRecord, String> {
    let existing = store.read_record(list_id)?;
    let now = current_timestamp();
    let created_at = existing
        .map(|record| record.created_at)
        .unwrap_or_else(|| now.clone());

    let record = StoredRecord {
        list_id: list_id.to_string(),
        count: items.len(),
        items,
        created_at,
        updated_at: now,
    };

    store.write_record(&record)?;
    Ok(record)
}

/// Full replacement of an existing record; never creates.
pub fn replace_record(
    store: &dyn RecordStore,
    list_id: &str,
    items: Vec<String>,
) -> Result<Option<StoredRecord>, String> {
    let Some(existing) = store.read_record(list_id)? else {
        return Ok(None);
    };

    let record = StoredRecord {
        list_id: list_id.to_string(),
        count: items.len(),
        items,
        created_at: existing.created_at,
        updated_at: current_timestamp(),
    };

    store.write_record(&record)?;
    Ok(Some(record))
}

/// Removes the record if present; reports whether it existed beforehand.
pub fn delete_record(store: &dyn RecordStore, list_id: &str) -> Result<bool, String> {
    if store.read_record(list_id)?.is_none() {
        return Ok(false);
    }

    store.remove_record(list_id)?;
    Ok(true)
}

pub fn head_view(
    store: &dyn RecordStore,
    list_id: &str,
    n: usize,
) -> Result<Option<SliceView>, String> {
    Ok(store
        .read_record(list_id)?
        .map(|record| head_slice(&record, n)))
}

pub fn tail_view(
    store: &dyn RecordStore,
    list_id: &str,
    n: usize,
) -> Result<Option<SliceView>, String> {
    Ok(store
        .read_record(list_id)?
        .map(|record| tail_slice(&record, n)))
}

fn current_timestamp() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Micros, true)
}
