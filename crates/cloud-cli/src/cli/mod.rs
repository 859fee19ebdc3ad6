use clap::Subcommand;
use serde::Serialize;
use shared::error::{LabelledError, Result};

pub mod secrets;
pub mod upload;
pub mod users;

#[derive(Debug, Subcommand)]
pub enum Command {
    Users(users::UsersArgs),
    Upload(upload::UploadArgs),
    Secrets(secrets::SecretsArgs),
}

pub async fn run(command: Command) -> Result<()> {
    match command {
        Command::Users(args) => users::run(args).await,
        Command::Upload(args) => upload::run(args).await,
        Command::Secrets(args) => secrets::run(args).await,
    }
}

pub(crate) fn print_json<T: Serialize>(value: &T) -> Result<()> {
    let rendered = serde_json::to_string_pretty(value)
        .map_err(|err| LabelledError::bracketed("OutputEncodingError", err).logged())?;
    println!("{rendered}");
    Ok(())
}

pub(crate) fn required_setting(
    explicit: Option<String>,
    from_env: std::result::Result<String, std::env::VarError>,
    variable: &str,
) -> Result<String> {
    explicit
        .or_else(|| from_env.ok())
        .filter(|value| !value.is_empty())
        .ok_or_else(|| LabelledError::bracketed("MissingConfiguration", variable).logged())
}
