use lambda_runtime::{service_fn, Error, LambdaEvent};
use serde_json::Value;

use list_service_lambda::adapters::dynamodb::DynamoDbRecordStore;
use list_service_lambda::handlers::api::{handle_api_event, ApiGatewayResponse};

async fn handle_request(
    event: LambdaEvent<Value>,
    store: &DynamoDbRecordStore,
) -> Result<ApiGatewayResponse, Error> {
    let request_id = event.context.request_id.clone();
    Ok(handle_api_event(event.payload, &request_id, store))
}

#[tokio::main]
async fn main() -> Result<(), Error> {
    let table_name = std::env::var("DYNAMODB_TABLE_NAME")
        .map_err(|_| Error::from("DYNAMODB_TABLE_NAME must be configured"))?;

    // One client for the lifetime of the process; warm invocations reuse it.
    let config = aws_config::load_defaults(aws_config::BehaviorVersion::latest()).await;
    let store = DynamoDbRecordStore::new(aws_sdk_dynamodb::Client::new(&config), table_name);
    let store_ref = &store;

    lambda_runtime::run(service_fn(move |event: LambdaEvent<Value>| async move {
        handle_request(event, store_ref).await
    }))
    .await
}
