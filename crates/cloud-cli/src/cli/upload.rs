use std::path::PathBuf;

use clap::{ArgGroup, Parser};
use object_store::S3Client;
use shared::configuration;
use shared::error::{LabelledError, Result};

use super::required_setting;

/// Upload a single object to a bucket
#[derive(Parser, Debug)]
#[clap(name = "upload", about)]
#[clap(group(ArgGroup::new("source").required(true).args(["file", "payload"])))]
pub struct UploadArgs {
    /// Target bucket, defaults to $UPLOAD_BUCKET
    #[clap(short = 'b', long = "bucket")]
    pub bucket: Option<String>,

    /// Object key to write
    #[clap(short = 'k', long = "key")]
    pub key: String,

    /// Path of a file to upload as the object body
    #[clap(short = 'f', long = "file")]
    pub file: Option<PathBuf>,

    /// Literal object body
    #[clap(short = 'p', long = "payload")]
    pub payload: Option<String>,
}

pub async fn run(args: UploadArgs) -> Result<()> {
    let bucket = required_setting(args.bucket, configuration::get_upload_bucket(), "UPLOAD_BUCKET")?;

    let body = read_body(args.file, args.payload).await?;

    let client = S3Client::from_env().await;
    object_store::upload_to_bucket(&client, &bucket, &args.key, body).await
}

// The `source` arg group guarantees exactly one of `file` and `payload`.
async fn read_body(file: Option<PathBuf>, payload: Option<String>) -> Result<Vec<u8>> {
    match file {
        Some(path) => tokio::fs::read(&path).await.map_err(|err| {
            LabelledError::bracketed("FailedToReadPayload", format!("{}: {err}", path.display()))
                .logged()
        }),
        None => Ok(payload
            .expect("Infallible: clap requires either --file or --payload")
            .into_bytes()),
    }
}
