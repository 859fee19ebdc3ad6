pub mod client;
#[cfg(test)]
mod mocks;
pub mod secrets;

pub use client::secrets_manager::SecretsManagerClient;
pub use secrets::get_secrets;
