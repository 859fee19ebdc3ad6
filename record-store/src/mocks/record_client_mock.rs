use async_trait::async_trait;
use mockall::mock;

use crate::client::{
    BatchGetOutput, Item, QueryRequest, RecordClientInterface, RecordStoreError, UpdateRequest,
};

mock! {
  pub RecordClientInterface {}

  #[async_trait]
  impl RecordClientInterface for RecordClientInterface {
      async fn get_item(&self, table_name: String, key: Item) -> Result<Option<Item>, RecordStoreError>;
      async fn scan(&self, table_name: String) -> Result<Vec<Item>, RecordStoreError>;
      async fn put_item(&self, table_name: String, item: Item) -> Result<(), RecordStoreError>;
      async fn update_item(&self, request: UpdateRequest) -> Result<(), RecordStoreError>;
      async fn delete_item(&self, table_name: String, key: Item) -> Result<(), RecordStoreError>;
      async fn query(&self, request: QueryRequest) -> Result<Vec<Item>, RecordStoreError>;
      async fn batch_get_item(&self, table_name: String, keys: Vec<Item>) -> Result<BatchGetOutput, RecordStoreError>;
  }
}
