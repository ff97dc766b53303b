use serde::Serialize;
use thiserror::Error;
use tracing::debug;

/// Upload constraints enforced before any byte leaves this process.
pub const MAX_UPLOAD_BYTES: usize = 5 * 1024 * 1024;
pub const ALLOWED_CONTENT_TYPES: [&str; 3] = ["image/jpeg", "image/png", "image/webp"];

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("storage request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("storage responded with HTTP {status}: {body}")]
    Upstream {
        status: reqwest::StatusCode,
        body: String,
    },
}

/// A stored object: the public URL the site embeds and the bucket-relative
/// path used for later deletion.
#[derive(Debug, Clone, Serialize)]
pub struct StoredObject {
    pub url: String,
    pub path: String,
}

/// Supabase Storage client. Writes go through the service-role key; reads
/// are public-bucket URLs, so the response carries a URL usable as-is in
/// `image_url` fields.
#[derive(Clone)]
pub struct SupabaseStorage {
    client: reqwest::Client,
    base_url: String,
    bucket: String,
    service_key: String,
}

impl SupabaseStorage {
    pub fn new(supabase_url: &str, bucket: &str, service_key: &str) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: supabase_url.trim_end_matches('/').to_string(),
            bucket: bucket.to_string(),
            service_key: service_key.to_string(),
        }
    }

    fn object_url(&self, path: &str) -> String {
        format!("{}/storage/v1/object/{}/{}", self.base_url, self.bucket, path)
    }

    pub fn public_url(&self, path: &str) -> String {
        format!(
            "{}/storage/v1/object/public/{}/{}",
            self.base_url, self.bucket, path
        )
    }

    /// Upload one object. Blocks the submitting request until the storage
    /// call completes; no retry.
    pub async fn upload(
        &self,
        path: &str,
        content_type: &str,
        bytes: Vec<u8>,
    ) -> Result<StoredObject, StorageError> {
        debug!("Uploading {} bytes to {}", bytes.len(), path);

        let response = self
            .client
            .post(self.object_url(path))
            .bearer_auth(&self.service_key)
            .header("Content-Type", content_type)
            .body(bytes)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(StorageError::Upstream { status, body });
        }

        Ok(StoredObject {
            url: self.public_url(path),
            path: path.to_string(),
        })
    }

    /// Remove an object by its bucket-relative path.
    pub async fn delete(&self, path: &str) -> Result<(), StorageError> {
        let response = self
            .client
            .delete(self.object_url(path))
            .bearer_auth(&self.service_key)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(StorageError::Upstream { status, body });
        }

        Ok(())
    }
}
