pub mod client;
#[cfg(test)]
mod mocks;
pub mod upload;

pub use client::s3::S3Client;
pub use upload::upload_to_bucket;
