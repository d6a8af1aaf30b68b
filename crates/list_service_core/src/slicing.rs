use crate::contract::{SliceKind, SliceView, StoredRecord};

/// First `min(n, len)` items in original order.
pub fn head_slice(record: &StoredRecord, n: usize) -> SliceView {
    let taken = n.min(record.items.len());
    build_view(record, SliceKind::Head, record.items[..taken].to_vec())
}

/// Last `min(n, len)` items, original order preserved (not reversed).
pub fn tail_slice(record: &StoredRecord, n: usize) -> SliceView {
    let skipped = record.items.len().saturating_sub(n);
    build_view(record, SliceKind::Tail, record.items[skipped..].to_vec())
}

fn build_view(record: &StoredRecord, kind: SliceKind, items: Vec<String>) -> SliceView {
    SliceView {
        list_id: record.list_id.clone(),
        operation: kind.as_str().to_string(),
        count: items.len(),
        total_count: record.items.len(),
        items,
    }
}
