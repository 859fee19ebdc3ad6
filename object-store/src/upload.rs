use bytes::Bytes;
use shared::error::{LabelledError, Result};

use crate::client::ObjectClientInterface;

const UPLOAD_ERROR: &str = "Error while Uploading to S3 Bucket";

/// Writes `payload` to `bucket/key`, replacing any existing object.
pub async fn upload_to_bucket<C: ObjectClientInterface>(
    client: &C,
    bucket: &str,
    key: &str,
    payload: impl Into<Bytes>,
) -> Result<()> {
    if bucket.is_empty() {
        return Err(LabelledError::bracketed(UPLOAD_ERROR, "missing bucket name").logged());
    }
    if key.is_empty() {
        return Err(LabelledError::bracketed(UPLOAD_ERROR, "missing object key").logged());
    }

    let payload = payload.into();
    let size = payload.len();

    client
        .put_object(bucket.to_string(), key.to_string(), payload)
        .await
        .map_err(|err| LabelledError::bracketed(UPLOAD_ERROR, err).logged())?;

    log::info!("Uploaded {size} bytes to s3://{bucket}/{key}");
    Ok(())
}
