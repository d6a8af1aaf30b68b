use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use list_service_core::contract::{ListCollection, SliceKind, ValidationError};
use list_service_core::validation::{
    validate_items, validate_list_id, validate_n_parameter, validate_request_body,
};

use crate::adapters::record_store::RecordStore;
use crate::service;

pub const LISTS_RESOURCE: &str = "/lists";
pub const LIST_RESOURCE: &str = "/lists/{list_id}";
pub const HEAD_RESOURCE: &str = "/lists/{list_id}/head";
pub const TAIL_RESOURCE: &str = "/lists/{list_id}/tail";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ApiGatewayResponse {
    #[serde(rename = "statusCode")]
    pub status_code: u16,
    pub headers: Value,
    pub body: String,
}

/// API Gateway REST envelope with the fields the router consumes made
/// explicit. The gateway sends `null` for absent parameter maps.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiGatewayRequest {
    #[serde(rename = "httpMethod", default)]
    pub http_method: String,
    #[serde(default)]
    pub resource: String,
    #[serde(rename = "pathParameters", default)]
    pub path_parameters: Option<HashMap<String, String>>,
    #[serde(rename = "queryStringParameters", default)]
    pub query_parameters: Option<HashMap<String, String>>,
    #[serde(default)]
    pub body: Option<String>,
}

/// Dispatches one API Gateway event: parse, validate, delegate, render.
/// Validation always runs before any store call; store failures surface as a
/// generic 500 with the detail kept in the logs.
pub fn handle_api_event(
    event: Value,
    request_id: &str,
    store: &dyn RecordStore,
) -> ApiGatewayResponse {
    let request = match serde_json::from_value::<ApiGatewayRequest>(event) {
        Ok(value) => value,
        Err(error) => {
            log_request_error(
                request_id,
                "malformed_event",
                json!({ "error": error.to_string() }),
            );
            return error_response(
                400,
                "BadRequest",
                &format!("Malformed request event: {error}"),
            );
        }
    };

    log_request_info(
        request_id,
        "request_started",
        json!({
            "method": request.http_method,
            "resource": request.resource,
        }),
    );

    let response = route_request(&request, request_id, store);

    log_request_info(
        request_id,
        "request_completed",
        json!({
            "method": request.http_method,
            "resource": request.resource,
            "status_code": response.status_code,
        }),
    );

    response
}

fn route_request(
    request: &ApiGatewayRequest,
    request_id: &str,
    store: &dyn RecordStore,
) -> ApiGatewayResponse {
    match request.resource.as_str() {
        LISTS_RESOURCE => handle_collection(request, request_id, store),
        LIST_RESOURCE => handle_single(request, request_id, store),
        HEAD_RESOURCE => handle_slice(request, request_id, store, SliceKind::Head),
        TAIL_RESOURCE => handle_slice(request, request_id, store, SliceKind::Tail),
        other => {
            log_request_info(request_id, "unknown_resource", json!({ "resource": other }));
            error_response(404, "NotFound", &format!("Resource not found: {other}"))
        }
    }
}

fn handle_collection(
    request: &ApiGatewayRequest,
    request_id: &str,
    store: &dyn RecordStore,
) -> ApiGatewayResponse {
    match request.http_method.as_str() {
        "GET" => get_all_lists(request_id, store),
        "POST" => post_list(request, request_id, store),
        method => method_not_allowed(method),
    }
}

fn handle_single(
    request: &ApiGatewayRequest,
    request_id: &str,
    store: &dyn RecordStore,
) -> ApiGatewayResponse {
    let list_id = match validate_list_id(path_parameter(request, "list_id")) {
        Ok(value) => value,
        Err(error) => return validation_error_response(request_id, &error),
    };

    match request.http_method.as_str() {
        "GET" => get_list(list_id, request_id, store),
        "PUT" => put_list(request, list_id, request_id, store),
        "DELETE" => delete_list(list_id, request_id, store),
        method => method_not_allowed(method),
    }
}

fn handle_slice(
    request: &ApiGatewayRequest,
    request_id: &str,
    store: &dyn RecordStore,
    kind: SliceKind,
) -> ApiGatewayResponse {
    if request.http_method != "GET" {
        return method_not_allowed(&request.http_method);
    }

    let list_id = match validate_list_id(path_parameter(request, "list_id")) {
        Ok(value) => value,
        Err(error) => return validation_error_response(request_id, &error),
    };
    let n = match validate_n_parameter(query_parameter(request, "n")) {
        Ok(value) => value,
        Err(error) => return validation_error_response(request_id, &error),
    };

    let view = match kind {
        SliceKind::Head => service::head_view(store, list_id, n),
        SliceKind::Tail => service::tail_view(store, list_id, n),
    };

    match view {
        Ok(Some(view)) => {
            log_request_info(
                request_id,
                "slice_returned",
                json!({
                    "list_id": list_id,
                    "operation": view.operation,
                    "count": view.count,
                    "total_count": view.total_count,
                }),
            );
            success_response(200, view)
        }
        Ok(None) => not_found(list_id),
        Err(error) => internal_error(request_id, "slice_read_failed", &error),
    }
}

fn get_all_lists(request_id: &str, store: &dyn RecordStore) -> ApiGatewayResponse {
    match service::all_records(store) {
        Ok(lists) => {
            log_request_info(request_id, "lists_scanned", json!({ "count": lists.len() }));
            let collection = ListCollection {
                count: lists.len(),
                lists,
            };
            success_response(200, collection)
        }
        Err(error) => internal_error(request_id, "scan_failed", &error),
    }
}

fn post_list(
    request: &ApiGatewayRequest,
    request_id: &str,
    store: &dyn RecordStore,
) -> ApiGatewayResponse {
    let items = match validate_items_payload(request) {
        Ok(value) => value,
        Err(error) => return validation_error_response(request_id, &error),
    };

    match service::create_record(store, items) {
        Ok(record) => {
            log_request_info(
                request_id,
                "list_created",
                json!({ "list_id": record.list_id, "count": record.count }),
            );
            success_response(201, record)
        }
        Err(error) => internal_error(request_id, "create_failed", &error),
    }
}

fn get_list(list_id: &str, request_id: &str, store: &dyn RecordStore) -> ApiGatewayResponse {
    match service::fetch_record(store, list_id) {
        Ok(Some(record)) => success_response(200, record),
        Ok(None) => not_found(list_id),
        Err(error) => internal_error(request_id, "read_failed", &error),
    }
}

fn put_list(
    request: &ApiGatewayRequest,
    list_id: &str,
    request_id: &str,
    store: &dyn RecordStore,
) -> ApiGatewayResponse {
    let items = match validate_items_payload(request) {
        Ok(value) => value,
        Err(error) => return validation_error_response(request_id, &error),
    };

    match service::replace_record(store, list_id, items) {
        Ok(Some(record)) => {
            log_request_info(
                request_id,
                "list_replaced",
                json!({ "list_id": list_id, "count": record.count }),
            );
            success_response(200, record)
        }
        Ok(None) => not_found(list_id),
        Err(error) => internal_error(request_id, "replace_failed", &error),
    }
}

fn delete_list(list_id: &str, request_id: &str, store: &dyn RecordStore) -> ApiGatewayResponse {
    match service::delete_record(store, list_id) {
        Ok(true) => {
            log_request_info(request_id, "list_deleted", json!({ "list_id": list_id }));
            success_response(204, json!({}))
        }
        Ok(false) => not_found(list_id),
        Err(error) => internal_error(request_id, "delete_failed", &error),
    }
}

fn validate_items_payload(request: &ApiGatewayRequest) -> Result<Vec<String>, ValidationError> {
    let body = parse_request_body(request.body.as_deref());
    let items_value = validate_request_body(body.as_ref())?;
    validate_items(items_value)
}

// Absent, empty, and unparseable bodies are indistinguishable downstream.
fn parse_request_body(body: Option<&str>) -> Option<Value> {
    let body = body?;
    if body.is_empty() {
        return None;
    }
    serde_json::from_str(body).ok()
}

fn path_parameter<'a>(request: &'a ApiGatewayRequest, name: &str) -> &'a str {
    request
        .path_parameters
        .as_ref()
        .and_then(|parameters| parameters.get(name))
        .map(String::as_str)
        .unwrap_or("")
}

fn query_parameter<'a>(request: &'a ApiGatewayRequest, name: &str) -> Option<&'a str> {
    request
        .query_parameters
        .as_ref()
        .and_then(|parameters| parameters.get(name))
        .map(String::as_str)
}

fn default_headers() -> Value {
    json!({
        "Content-Type": "application/json",
        "Access-Control-Allow-Origin": "*",
        "Access-Control-Allow-Headers": "Content-Type",
        "Access-Control-Allow-Methods": "GET,PUT,DELETE,OPTIONS,POST",
    })
}

fn success_response(status_code: u16, payload: impl Serialize) -> ApiGatewayResponse {
    ApiGatewayResponse {
        status_code,
        headers: default_headers(),
        body: serde_json::to_string(&payload).expect("response payload should serialize"),
    }
}

fn error_response(status_code: u16, error_type: &str, message: &str) -> ApiGatewayResponse {
    ApiGatewayResponse {
        status_code,
        headers: default_headers(),
        body: json!({ "error": error_type, "message": message }).to_string(),
    }
}

fn validation_error_response(request_id: &str, error: &ValidationError) -> ApiGatewayResponse {
    log_request_info(
        request_id,
        "validation_failed",
        json!({ "message": error.message() }),
    );
    error_response(400, "BadRequest", error.message())
}

fn not_found(list_id: &str) -> ApiGatewayResponse {
    error_response(404, "NotFound", &format!("List '{list_id}' not found"))
}

fn method_not_allowed(method: &str) -> ApiGatewayResponse {
    error_response(
        405,
        "MethodNotAllowed",
        &format!("Method {method} not allowed"),
    )
}

fn internal_error(request_id: &str, event: &str, detail: &str) -> ApiGatewayResponse {
    log_request_error(request_id, event, json!({ "error": detail }));
    error_response(500, "InternalServerError", "An unexpected error occurred")
}

fn log_request_info(request_id: &str, event: &str, details: Value) {
    eprintln!(
        "{}",
        json!({
            "component": "list_api",
            "event": event,
            "request_id": request_id,
            "timestamp": chrono::Utc::now().to_rfc3339(),
            "details": details,
        })
    );
}

fn log_request_error(request_id: &str, event: &str, details: Value) {
    eprintln!(
        "{}",
        json!({
            "component": "list_api",
            "level": "error",
            "event": event,
            "request_id": request_id,
            "timestamp": chrono::Utc::now().to_rfc3339(),
            "details": details,
        })
    );
}
