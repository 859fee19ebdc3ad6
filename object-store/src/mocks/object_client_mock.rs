use async_trait::async_trait;
use bytes::Bytes;
use mockall::mock;

use crate::client::{ObjectClientInterface, ObjectStoreError};

mock! {
  pub ObjectClientInterface {}

  #[async_trait]
  impl ObjectClientInterface for ObjectClientInterface {
      async fn put_object(&self, bucket: String, key: String, body: Bytes) -> Result<(), ObjectStoreError>;
  }
}
