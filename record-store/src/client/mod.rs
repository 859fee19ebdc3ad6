pub mod dynamodb;

use std::collections::HashMap;

use async_trait::async_trait;
use aws_sdk_dynamodb::types::AttributeValue;
use thiserror::Error;

use crate::expression::Expression;

pub type Item = HashMap<String, AttributeValue>;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RecordStoreError {
    #[error("GetItem Error: {0}")]
    GetItem(String),
    #[error("Scan Error: {0}")]
    Scan(String),
    #[error("PutItem Error: {0}")]
    PutItem(String),
    #[error("UpdateItem Error: {0}")]
    UpdateItem(String),
    #[error("DeleteItem Error: {0}")]
    DeleteItem(String),
    #[error("Query Error: {0}")]
    Query(String),
    #[error("BatchGetItem Error: {0}")]
    BatchGetItem(String),
    #[error("Record Store Client Error - {0}")]
    General(String),
}

#[derive(Debug, Clone, PartialEq)]
pub struct UpdateRequest {
    pub table_name: String,
    pub key: Item,
    pub update_expression: String,
    pub expression_attribute_values: Item,
}

#[derive(Debug, Clone, PartialEq)]
pub struct QueryRequest {
    pub table_name: String,
    pub index_name: Option<String>,
    pub expression: Expression,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct BatchGetOutput {
    pub items: Vec<Item>,
    pub unprocessed_keys: usize,
}

// Make generic so the user operations can run against a mock
#[async_trait]
pub trait RecordClientInterface {
    async fn get_item(&self, table_name: String, key: Item)
        -> Result<Option<Item>, RecordStoreError>;
    async fn scan(&self, table_name: String) -> Result<Vec<Item>, RecordStoreError>;
    async fn put_item(&self, table_name: String, item: Item) -> Result<(), RecordStoreError>;
    async fn update_item(&self, request: UpdateRequest) -> Result<(), RecordStoreError>;
    async fn delete_item(&self, table_name: String, key: Item) -> Result<(), RecordStoreError>;
    async fn query(&self, request: QueryRequest) -> Result<Vec<Item>, RecordStoreError>;
    async fn batch_get_item(
        &self,
        table_name: String,
        keys: Vec<Item>,
    ) -> Result<BatchGetOutput, RecordStoreError>;
}
