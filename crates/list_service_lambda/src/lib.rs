//! AWS-oriented adapters and handlers for the list REST API.
//!
//! This crate owns runtime integration details (the Lambda entry point,
//! request routing, and the DynamoDB storage adapter) plus the service layer
//! composing store operations. Contracts, validation, and slicing live in
//! `crates/list_service_core`.

pub mod adapters;
pub mod handlers;
pub mod service;
