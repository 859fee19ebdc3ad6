pub mod secrets_manager;

use async_trait::async_trait;
use thiserror::Error;
use zeroize::Zeroizing;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SecretStoreError {
    #[error("GetSecretValue Error: {0}")]
    GetSecretValue(String),
}

#[async_trait]
pub trait SecretClientInterface {
    /// The secret's string payload, `None` when the secret only holds binary data.
    async fn get_secret_string(
        &self,
        secret_id: String,
    ) -> Result<Option<Zeroizing<String>>, SecretStoreError>;
}
