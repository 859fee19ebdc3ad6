use async_trait::async_trait;
use mockall::mock;
use zeroize::Zeroizing;

use crate::client::{SecretClientInterface, SecretStoreError};

mock! {
  pub SecretClientInterface {}

  #[async_trait]
  impl SecretClientInterface for SecretClientInterface {
      async fn get_secret_string(&self, secret_id: String) -> Result<Option<Zeroizing<String>>, SecretStoreError>;
  }
}
