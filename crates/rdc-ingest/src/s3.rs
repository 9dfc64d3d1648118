//! Object storage access for the products CSV
//!
//! Credentials and region resolve from the ambient AWS environment
//! (environment variables, shared config, instance profile). An explicit
//! endpoint override is supported for MinIO-backed tests.

use anyhow::{Context, Result};
use aws_sdk_s3::Client;
use std::str::FromStr;

/// Environment variable overriding the S3 endpoint (MinIO, localstack)
pub const ENDPOINT_ENV: &str = "RDC_S3_ENDPOINT";

/// A parsed `s3://bucket/key` address
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct S3Address {
    pub bucket: String,
    pub key: String,
}

impl FromStr for S3Address {
    type Err = anyhow::Error;

    fn from_str(address: &str) -> Result<Self> {
        let rest = address
            .strip_prefix("s3://")
            .with_context(|| format!("'{}' is not an s3:// address", address))?;

        let (bucket, key) = rest
            .split_once('/')
            .with_context(|| format!("'{}' has no object key", address))?;

        if bucket.is_empty() || key.is_empty() {
            anyhow::bail!("'{}' has an empty bucket or key", address);
        }

        Ok(Self {
            bucket: bucket.to_string(),
            key: key.to_string(),
        })
    }
}

impl std::fmt::Display for S3Address {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "s3://{}/{}", self.bucket, self.key)
    }
}

/// Read-only S3 client wrapper
#[derive(Clone)]
pub struct ObjectStore {
    client: Client,
}

impl ObjectStore {
    /// Build a client from the ambient AWS environment
    pub async fn from_env() -> Self {
        let base = aws_config::load_defaults(aws_config::BehaviorVersion::latest()).await;

        let mut builder = aws_sdk_s3::config::Builder::from(&base);
        if let Ok(endpoint) = std::env::var(ENDPOINT_ENV) {
            builder = builder.endpoint_url(endpoint).force_path_style(true);
        }

        Self {
            client: Client::from_conf(builder.build()),
        }
    }

    /// Download one object and return its bytes
    pub async fn download(&self, address: &S3Address) -> Result<Vec<u8>> {
        tracing::debug!("Downloading {}", address);

        let response = self
            .client
            .get_object()
            .bucket(&address.bucket)
            .key(&address.key)
            .send()
            .await
            .with_context(|| format!("Failed to download {}", address))?;

        let data = response
            .body
            .collect()
            .await
            .with_context(|| format!("Failed to read body of {}", address))?
            .into_bytes()
            .to_vec();

        tracing::info!(bytes = data.len(), "Downloaded {}", address);

        Ok(data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_s3_address() {
        let addr: S3Address = "s3://data-handling-public/products.csv".parse().unwrap();
        assert_eq!(addr.bucket, "data-handling-public");
        assert_eq!(addr.key, "products.csv");
        assert_eq!(addr.to_string(), "s3://data-handling-public/products.csv");
    }

    #[test]
    fn test_parse_s3_address_nested_key() {
        let addr: S3Address = "s3://bucket/a/b/c.csv".parse().unwrap();
        assert_eq!(addr.bucket, "bucket");
        assert_eq!(addr.key, "a/b/c.csv");
    }

    #[test]
    fn test_parse_s3_address_rejects_bad_input() {
        assert!("https://bucket/key".parse::<S3Address>().is_err());
        assert!("s3://bucket".parse::<S3Address>().is_err());
        assert!("s3:///key".parse::<S3Address>().is_err());
    }
}
