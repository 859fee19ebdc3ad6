use async_trait::async_trait;
use aws_sdk_s3 as s3;
use bytes::Bytes;
use s3::{
    error::{DisplayErrorContext, SdkError},
    operation::put_object::PutObjectError,
    primitives::ByteStream,
};
use thiserror::Error;

use super::{ObjectClientInterface, ObjectStoreError};

#[derive(Error, Debug)]
pub enum S3ClientError {
    #[error("PutObject Error: {0}")]
    PutObject(#[from] SdkError<PutObjectError>),
}

impl From<S3ClientError> for ObjectStoreError {
    fn from(error: S3ClientError) -> Self {
        match error {
            S3ClientError::PutObject(err) => {
                ObjectStoreError::PutObject(DisplayErrorContext(err).to_string())
            }
        }
    }
}

#[derive(Clone, Debug)]
pub struct S3Client {
    client: s3::Client,
}

impl S3Client {
    pub fn new(config: &aws_types::SdkConfig) -> Self {
        Self {
            client: s3::Client::new(config),
        }
    }

    pub async fn from_env() -> Self {
        let config = shared::aws::load_sdk_config().await;
        Self::new(&config)
    }
}

#[async_trait]
impl ObjectClientInterface for S3Client {
    async fn put_object(
        &self,
        bucket: String,
        key: String,
        body: Bytes,
    ) -> Result<(), ObjectStoreError> {
        let _ = self
            .client
            .put_object()
            .bucket(bucket)
            .key(key)
            .body(ByteStream::from(body))
            .send()
            .await
            .map_err(S3ClientError::PutObject)?;

        Ok(())
    }
}
