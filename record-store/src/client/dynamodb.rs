use async_trait::async_trait;
use aws_sdk_dynamodb as dynamodb;
use dynamodb::{
    error::{DisplayErrorContext, SdkError},
    operation::{
        batch_get_item::BatchGetItemError, delete_item::DeleteItemError, get_item::GetItemError,
        put_item::PutItemError, query::QueryError, scan::ScanError,
        update_item::UpdateItemError,
    },
    types::KeysAndAttributes,
};
use thiserror::Error;

use super::{
    BatchGetOutput, Item, QueryRequest, RecordClientInterface, RecordStoreError, UpdateRequest,
};

#[derive(Error, Debug)]
pub enum DynamoDbClientError {
    #[error("GetItem Error: {0}")]
    GetItem(#[from] SdkError<GetItemError>),
    #[error("Scan Error: {0}")]
    Scan(#[from] SdkError<ScanError>),
    #[error("PutItem Error: {0}")]
    PutItem(#[from] SdkError<PutItemError>),
    #[error("UpdateItem Error: {0}")]
    UpdateItem(#[from] SdkError<UpdateItemError>),
    #[error("DeleteItem Error: {0}")]
    DeleteItem(#[from] SdkError<DeleteItemError>),
    #[error("Query Error: {0}")]
    Query(#[from] SdkError<QueryError>),
    #[error("BatchGetItem Error: {0}")]
    BatchGetItem(#[from] SdkError<BatchGetItemError>),
    #[error("DynamoDB Client Error - {0}")]
    General(String),
}

impl From<DynamoDbClientError> for RecordStoreError {
    fn from(error: DynamoDbClientError) -> Self {
        match error {
            DynamoDbClientError::GetItem(err) => {
                RecordStoreError::GetItem(DisplayErrorContext(err).to_string())
            }
            DynamoDbClientError::Scan(err) => {
                RecordStoreError::Scan(DisplayErrorContext(err).to_string())
            }
            DynamoDbClientError::PutItem(err) => {
                RecordStoreError::PutItem(DisplayErrorContext(err).to_string())
            }
            DynamoDbClientError::UpdateItem(err) => {
                RecordStoreError::UpdateItem(DisplayErrorContext(err).to_string())
            }
            DynamoDbClientError::DeleteItem(err) => {
                RecordStoreError::DeleteItem(DisplayErrorContext(err).to_string())
            }
            DynamoDbClientError::Query(err) => {
                RecordStoreError::Query(DisplayErrorContext(err).to_string())
            }
            DynamoDbClientError::BatchGetItem(err) => {
                RecordStoreError::BatchGetItem(DisplayErrorContext(err).to_string())
            }
            DynamoDbClientError::General(err) => RecordStoreError::General(err),
        }
    }
}

#[derive(Clone, Debug)]
pub struct DynamoDbClient {
    client: dynamodb::Client,
}

impl DynamoDbClient {
    pub fn new(config: &aws_types::SdkConfig) -> Self {
        Self {
            client: dynamodb::Client::new(config),
        }
    }

    pub async fn from_env() -> Self {
        let config = shared::aws::load_sdk_config().await;
        Self::new(&config)
    }
}

#[async_trait]
impl RecordClientInterface for DynamoDbClient {
    async fn get_item(
        &self,
        table_name: String,
        key: Item,
    ) -> Result<Option<Item>, RecordStoreError> {
        let output = self
            .client
            .get_item()
            .table_name(table_name)
            .set_key(Some(key))
            .send()
            .await
            .map_err(DynamoDbClientError::GetItem)?;

        Ok(output.item)
    }

    async fn scan(&self, table_name: String) -> Result<Vec<Item>, RecordStoreError> {
        let output = self
            .client
            .scan()
            .table_name(&table_name)
            .send()
            .await
            .map_err(DynamoDbClientError::Scan)?;

        if output.last_evaluated_key.is_some() {
            log::warn!("Scan of {table_name} stopped at the 1MB page limit, results are partial");
        }

        Ok(output.items.unwrap_or_default())
    }

    async fn put_item(&self, table_name: String, item: Item) -> Result<(), RecordStoreError> {
        let _ = self
            .client
            .put_item()
            .table_name(table_name)
            .set_item(Some(item))
            .send()
            .await
            .map_err(DynamoDbClientError::PutItem)?;

        Ok(())
    }

    async fn update_item(&self, request: UpdateRequest) -> Result<(), RecordStoreError> {
        let _ = self
            .client
            .update_item()
            .table_name(request.table_name)
            .set_key(Some(request.key))
            .update_expression(request.update_expression)
            .set_expression_attribute_values(Some(request.expression_attribute_values))
            .send()
            .await
            .map_err(DynamoDbClientError::UpdateItem)?;

        Ok(())
    }

    async fn delete_item(&self, table_name: String, key: Item) -> Result<(), RecordStoreError> {
        let _ = self
            .client
            .delete_item()
            .table_name(table_name)
            .set_key(Some(key))
            .send()
            .await
            .map_err(DynamoDbClientError::DeleteItem)?;

        Ok(())
    }

    async fn query(&self, request: QueryRequest) -> Result<Vec<Item>, RecordStoreError> {
        let expression = request.expression;
        let output = self
            .client
            .query()
            .table_name(request.table_name)
            .set_index_name(request.index_name)
            .set_expression_attribute_names(expression.names())
            .set_expression_attribute_values(expression.values())
            .set_key_condition_expression(expression.key_condition)
            .set_filter_expression(expression.filter)
            .set_projection_expression(expression.projection)
            .send()
            .await
            .map_err(DynamoDbClientError::Query)?;

        Ok(output.items.unwrap_or_default())
    }

    async fn batch_get_item(
        &self,
        table_name: String,
        keys: Vec<Item>,
    ) -> Result<BatchGetOutput, RecordStoreError> {
        let keys_and_attributes = KeysAndAttributes::builder()
            .set_keys(Some(keys))
            .build()
            .map_err(|err| DynamoDbClientError::General(err.to_string()))?;

        let output = self
            .client
            .batch_get_item()
            .request_items(&table_name, keys_and_attributes)
            .send()
            .await
            .map_err(DynamoDbClientError::BatchGetItem)?;

        let items = output
            .responses
            .and_then(|mut responses| responses.remove(&table_name))
            .unwrap_or_default();

        let unprocessed_keys = output
            .unprocessed_keys
            .and_then(|mut unprocessed| unprocessed.remove(&table_name))
            .map(|pending| pending.keys.len())
            .unwrap_or_default();

        Ok(BatchGetOutput {
            items,
            unprocessed_keys,
        })
    }
}
