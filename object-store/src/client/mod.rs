pub mod s3;

use async_trait::async_trait;
use bytes::Bytes;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ObjectStoreError {
    #[error("PutObject Error: {0}")]
    PutObject(String),
}

// Make generic so other storage backends can be used
#[async_trait]
pub trait ObjectClientInterface {
    async fn put_object(
        &self,
        bucket: String,
        key: String,
        body: Bytes,
    ) -> Result<(), ObjectStoreError>;
}
