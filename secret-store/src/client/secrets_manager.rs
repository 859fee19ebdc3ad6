use async_trait::async_trait;
use aws_sdk_secretsmanager as secretsmanager;
use secretsmanager::{
    error::{DisplayErrorContext, SdkError},
    operation::get_secret_value::GetSecretValueError,
};
use thiserror::Error;
use zeroize::Zeroizing;

use super::{SecretClientInterface, SecretStoreError};

#[derive(Error, Debug)]
pub enum SecretsManagerClientError {
    #[error("GetSecretValue Error: {0}")]
    GetSecretValue(#[from] SdkError<GetSecretValueError>),
}

impl From<SecretsManagerClientError> for SecretStoreError {
    fn from(error: SecretsManagerClientError) -> Self {
        match error {
            SecretsManagerClientError::GetSecretValue(err) => {
                SecretStoreError::GetSecretValue(DisplayErrorContext(err).to_string())
            }
        }
    }
}

#[derive(Clone, Debug)]
pub struct SecretsManagerClient {
    client: secretsmanager::Client,
}

impl SecretsManagerClient {
    pub fn new(config: &aws_types::SdkConfig) -> Self {
        Self {
            client: secretsmanager::Client::new(config),
        }
    }

    pub async fn from_env() -> Self {
        let config = shared::aws::load_sdk_config().await;
        Self::new(&config)
    }
}

#[async_trait]
impl SecretClientInterface for SecretsManagerClient {
    async fn get_secret_string(
        &self,
        secret_id: String,
    ) -> Result<Option<Zeroizing<String>>, SecretStoreError> {
        let output = self
            .client
            .get_secret_value()
            .secret_id(secret_id)
            .send()
            .await
            .map_err(SecretsManagerClientError::GetSecretValue)?;

        Ok(output.secret_string.map(Zeroizing::new))
    }
}
