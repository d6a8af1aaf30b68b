use serde_json::Value;

use crate::contract::{
    ValidationError, DEFAULT_SLICE_LENGTH, MAX_ITEMS, MAX_ITEM_LENGTH, MAX_LIST_ID_LENGTH,
    MAX_SLICE_LENGTH,
};

/// Checks identifier shape and hands the input back unchanged.
pub fn validate_list_id(list_id: &str) -> Result<&str, ValidationError> {
    if list_id.is_empty() {
        return Err(ValidationError::new("list_id is required"));
    }

    if list_id.chars().count() > MAX_LIST_ID_LENGTH {
        return Err(ValidationError::new(
            "list_id must be 255 characters or less",
        ));
    }

    if !list_id
        .chars()
        .all(|character| character.is_ascii_alphanumeric() || character == '-' || character == '_')
    {
        return Err(ValidationError::new(
            "list_id must contain only alphanumeric characters, hyphens, and underscores",
        ));
    }

    Ok(list_id)
}

/// Parses the bounded `n` query parameter; absence yields the default.
pub fn validate_n_parameter(raw: Option<&str>) -> Result<usize, ValidationError> {
    let Some(raw) = raw else {
        return Ok(DEFAULT_SLICE_LENGTH);
    };

    let Ok(parsed) = raw.parse::<i64>() else {
        return Err(ValidationError::new(format!(
            "Invalid parameter: n must be an integer, got '{raw}'"
        )));
    };

    if parsed < 1 {
        return Err(ValidationError::new(format!(
            "Invalid parameter: n must be at least 1, got {parsed}"
        )));
    }

    if parsed > MAX_SLICE_LENGTH as i64 {
        return Err(ValidationError::new(format!(
            "Invalid parameter: n must be at most {MAX_SLICE_LENGTH}, got {parsed}"
        )));
    }

    Ok(parsed as usize)
}

/// Validates the `items` payload and returns the owned string sequence.
pub fn validate_items(value: &Value) -> Result<Vec<String>, ValidationError> {
    let Some(entries) = value.as_array() else {
        return Err(ValidationError::new("items must be an array"));
    };

    if entries.is_empty() {
        return Err(ValidationError::new("items array cannot be empty"));
    }

    if entries.len() > MAX_ITEMS {
        return Err(ValidationError::new(
            "items array cannot exceed 10,000 elements",
        ));
    }

    let mut items = Vec::with_capacity(entries.len());
    for (index, entry) in entries.iter().enumerate() {
        let Some(item) = entry.as_str() else {
            return Err(ValidationError::new(format!(
                "items[{index}] must be a string, got {}",
                json_type_name(entry)
            )));
        };

        if item.chars().count() > MAX_ITEM_LENGTH {
            return Err(ValidationError::new(format!(
                "items[{index}] exceeds maximum length of 1000 characters"
            )));
        }

        items.push(item.to_string());
    }

    Ok(items)
}

/// Requires a body with an `items` field and yields that field.
pub fn validate_request_body(body: Option<&Value>) -> Result<&Value, ValidationError> {
    let Some(body) = body else {
        return Err(ValidationError::new("Request body is required"));
    };

    match body.get("items") {
        Some(items) => Ok(items),
        None => Err(ValidationError::new(
            "Request body must contain 'items' field",
        )),
    }
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
