use std::collections::BTreeMap;

use clap::{Parser, Subcommand};
use secret_store::SecretsManagerClient;
use shared::error::Result;

use super::print_json;

/// Read values from the secret store
#[derive(Parser, Debug)]
#[clap(name = "secrets", about)]
pub struct SecretsArgs {
    #[clap(subcommand)]
    pub action: SecretsAction,
}

#[derive(Subcommand, Debug)]
pub enum SecretsAction {
    /// Fetch a JSON secret and print its key/value pairs
    Get {
        secret_id: String,
        /// Print only the keys held by the secret
        #[clap(long = "keys-only")]
        keys_only: bool,
    },
}

pub async fn run(args: SecretsArgs) -> Result<()> {
    let client = SecretsManagerClient::from_env().await;

    match args.action {
        SecretsAction::Get {
            secret_id,
            keys_only,
        } => {
            let secrets = secret_store::get_secrets(&client, &secret_id).await?;
            if keys_only {
                let mut keys: Vec<&String> = secrets.keys().collect();
                keys.sort();
                print_json(&keys)
            } else {
                // sorted for stable output
                print_json(&secrets.into_iter().collect::<BTreeMap<_, _>>())
            }
        }
    }
}
