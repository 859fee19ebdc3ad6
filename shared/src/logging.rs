use crate::configuration::{self, Environment};

fn default_filter(environment: &Environment) -> &'static str {
    match environment {
        Environment::Development => "debug",
        Environment::Staging | Environment::Production => "info",
    }
}

/// Installs `env_logger` as the `log` backend. `RUST_LOG` wins over the per-environment
/// default. Safe to call more than once.
pub fn init_logger() {
    let filter = default_filter(&configuration::get_rust_env());
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(filter))
        .format_timestamp_millis()
        .try_init();
}
