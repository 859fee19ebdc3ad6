pub mod aws;
pub mod configuration;
pub mod error;
pub mod logging;
