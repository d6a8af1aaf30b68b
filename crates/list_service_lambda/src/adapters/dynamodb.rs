use std::collections::HashMap;

use aws_sdk_dynamodb::types::AttributeValue;
use list_service_core::contract::StoredRecord;

use crate::adapters::record_store::RecordStore;

/// DynamoDB-backed store over a single table keyed by `list_id`.
///
/// Holds a long-lived client handle built once at startup; transport errors
/// propagate unchanged to the caller, which maps them to a 500 response.
pub struct DynamoDbRecordStore {
    table_name: String,
    client: aws_sdk_dynamodb::Client,
}

impl DynamoDbRecordStore {
    pub fn new(client: aws_sdk_dynamodb::Client, table_name: impl Into<String>) -> Self {
        Self {
            table_name: table_name.into(),
            client,
        }
    }
}

impl RecordStore for DynamoDbRecordStore {
    fn read_record(&self, list_id: &str) -> Result<Option<StoredRecord>, String> {
        let client = self.client.clone();
        let table_name = self.table_name.clone();
        let key = list_id.to_string();

        let output = tokio::task::block_in_place(|| {
            tokio::runtime::Handle::current().block_on(async move {
                client
                    .get_item()
                    .table_name(table_name)
                    .key("list_id", AttributeValue::S(key))
                    .send()
                    .await
                    .map_err(|error| format!("failed to read record from dynamodb: {error}"))
            })
        })?;

        output.item().map(item_to_record).transpose()
    }

    fn write_record(&self, record: &StoredRecord) -> Result<(), String> {
        let client = self.client.clone();
        let table_name = self.table_name.clone();
        let item = record_to_item(record);

        tokio::task::block_in_place(|| {
            tokio::runtime::Handle::current().block_on(async move {
                client
                    .put_item()
                    .table_name(table_name)
                    .set_item(Some(item))
                    .send()
                    .await
                    .map(|_| ())
                    .map_err(|error| format!("failed to write record to dynamodb: {error}"))
            })
        })
    }

    fn scan_records(&self) -> Result<Vec<StoredRecord>, String> {
        let client = self.client.clone();
        let table_name = self.table_name.clone();

        // Single scan request; list counts are expected to stay within one page.
        let output = tokio::task::block_in_place(|| {
            tokio::runtime::Handle::current().block_on(async move {
                client
                    .scan()
                    .table_name(table_name)
                    .send()
                    .await
                    .map_err(|error| format!("failed to scan records from dynamodb: {error}"))
            })
        })?;

        output.items().iter().map(item_to_record).collect()
    }

    fn remove_record(&self, list_id: &str) -> Result<(), String> {
        let client = self.client.clone();
        let table_name = self.table_name.clone();
        let key = list_id.to_string();

        tokio::task::block_in_place(|| {
            tokio::runtime::Handle::current().block_on(async move {
                client
                    .delete_item()
                    .table_name(table_name)
                    .key("list_id", AttributeValue::S(key))
                    .send()
                    .await
                    .map(|_| ())
                    .map_err(|error| format!("failed to delete record from dynamodb: {error}"))
            })
        })
    }
}

pub fn record_to_item(record: &StoredRecord) -> HashMap<String, AttributeValue> {
    let items = record
        .items
        .iter()
        .map(|item| AttributeValue::S(item.clone()))
        .collect();

    HashMap::from([
        (
            "list_id".to_string(),
            AttributeValue::S(record.list_id.clone()),
        ),
        ("items".to_string(), AttributeValue::L(items)),
        (
            "count".to_string(),
            AttributeValue::N(record.count.to_string()),
        ),
        (
            "created_at".to_string(),
            AttributeValue::S(record.created_at.clone()),
        ),
        (
            "updated_at".to_string(),
            AttributeValue::S(record.updated_at.clone()),
        ),
    ])
}

pub fn item_to_record(item: &HashMap<String, AttributeValue>) -> Result<StoredRecord, String> {
    let list_id = string_attribute(item, "list_id")?;
    let created_at = string_attribute(item, "created_at")?;
    let updated_at = string_attribute(item, "updated_at")?;

    let count = item
        .get("count")
        .and_then(|value| value.as_n().ok())
        .ok_or_else(|| "stored item is missing a numeric 'count' attribute".to_string())?
        .parse::<usize>()
        .map_err(|error| format!("stored 'count' attribute is not a valid integer: {error}"))?;

    let entries = item
        .get("items")
        .and_then(|value| value.as_l().ok())
        .ok_or_else(|| "stored item is missing an 'items' list attribute".to_string())?;

    let mut items = Vec::with_capacity(entries.len());
    for entry in entries {
        let text = entry
            .as_s()
            .map_err(|_| "stored 'items' entries must be strings".to_string())?;
        items.push(text.clone());
    }

    Ok(StoredRecord {
        list_id,
        items,
        count,
        created_at,
        updated_at,
    })
}

fn string_attribute(item: &HashMap<String, AttributeValue>, name: &str) -> Result<String, String> {
    item.get(name)
        .and_then(|value| value.as_s().ok())
        .cloned()
        .ok_or_else(|| format!("stored item is missing a string '{name}' attribute"))
}
