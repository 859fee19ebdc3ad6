use std::collections::HashMap;

use shared::error::{LabelledError, Result};

use crate::client::SecretClientInterface;

/// Fetches `secret_id` and decodes its JSON object payload into key/value pairs.
pub async fn get_secrets<C: SecretClientInterface>(
    client: &C,
    secret_id: &str,
) -> Result<HashMap<String, String>> {
    let secret = client
        .get_secret_string(secret_id.to_string())
        .await
        .map_err(|err| LabelledError::bracketed("FailedToGetSecret", err).logged())?
        .ok_or_else(|| {
            LabelledError::bare(format!(
                "Unable to find the secrets from the secret manager for the key: {secret_id}"
            ))
            .logged()
        })?;

    let secrets: HashMap<String, String> = serde_json::from_str(secret.as_str())
        .map_err(|err| LabelledError::bracketed("SecretUnmarshalError", err).logged())?;

    log::debug!("Fetched {} entries from secret {secret_id}", secrets.len());
    Ok(secrets)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::SecretStoreError;
    use crate::mocks::secret_client_mock::MockSecretClientInterface;
    use mockall::predicate::eq;
    use zeroize::Zeroizing;

    fn secret(payload: &str) -> Option<Zeroizing<String>> {
        Some(Zeroizing::new(payload.to_string()))
    }

    #[tokio::test]
    async fn test_get_secrets_decodes_json_object() {
        let mut mock = MockSecretClientInterface::new();
        mock.expect_get_secret_string()
            .with(eq("db/credentials".to_string()))
            .times(1)
            .returning(|_| Ok(secret(r#"{"username":"app","password":"hunter2"}"#)));

        let secrets = get_secrets(&mock, "db/credentials").await.unwrap();
        assert_eq!(secrets.len(), 2);
        assert_eq!(secrets.get("username").map(String::as_str), Some("app"));
        assert_eq!(secrets.get("password").map(String::as_str), Some("hunter2"));
    }

    #[tokio::test]
    async fn test_get_secrets_missing_string() {
        let mut mock = MockSecretClientInterface::new();
        mock.expect_get_secret_string()
            .times(1)
            .returning(|_| Ok(None));

        let err = get_secrets(&mock, "binary-only").await.unwrap_err();
        assert_eq!(
            err.to_string(),
            "Unable to find the secrets from the secret manager for the key: binary-only"
        );
    }

    #[tokio::test]
    async fn test_get_secrets_rejects_non_string_values() {
        let mut mock = MockSecretClientInterface::new();
        mock.expect_get_secret_string()
            .times(1)
            .returning(|_| Ok(secret(r#"{"port":5432}"#)));

        let err = get_secrets(&mock, "db/credentials").await.unwrap_err();
        assert_eq!(err.label(), "SecretUnmarshalError");
    }

    #[tokio::test]
    async fn test_get_secrets_service_error() {
        let mut mock = MockSecretClientInterface::new();
        mock.expect_get_secret_string().times(1).returning(|_| {
            Err(SecretStoreError::GetSecretValue(
                "ResourceNotFoundException".to_string(),
            ))
        });

        let err = get_secrets(&mock, "missing").await.unwrap_err();
        assert_eq!(
            err.to_string(),
            "FailedToGetSecret[GetSecretValue Error: ResourceNotFoundException]"
        );
    }
}
