//! Image hosting for gallery pictures.
//!
//! [`ImageHost`] is the seam the API talks to. [`ImageKitClient`] is the
//! production implementation; [`MemoryImageHost`] keeps files in process for
//! local development without credentials and for tests.

pub mod api;
pub mod config;
pub mod memory;

use async_trait::async_trait;

pub use api::ImageKitClient;
pub use config::ImageKitConfig;
pub use memory::MemoryImageHost;

/// File name used when the client does not supply one.
pub const DEFAULT_FILE_NAME: &str = "upload.jpg";

/// Folder every gallery image is uploaded into.
pub const GALLERY_FOLDER: &str = "/gallery";

/// A file ready to be sent to the image host.
#[derive(Debug, Clone)]
pub struct UploadFile {
    pub file_name: String,
    pub content_type: String,
    pub bytes: Vec<u8>,
}

impl UploadFile {
    /// Build an upload, substituting [`DEFAULT_FILE_NAME`] for a blank name.
    pub fn new(file_name: Option<&str>, content_type: impl Into<String>, bytes: Vec<u8>) -> Self {
        let file_name = file_name
            .map(str::trim)
            .filter(|n| !n.is_empty())
            .unwrap_or(DEFAULT_FILE_NAME)
            .to_string();
        Self {
            file_name,
            content_type: content_type.into(),
            bytes,
        }
    }
}

/// Location of a stored image.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadedImage {
    pub url: String,
    pub file_id: String,
}

/// Errors from an image host.
#[derive(Debug, thiserror::Error)]
pub enum ImageHostError {
    /// The HTTP request itself failed (network, DNS, TLS, timeout).
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The host returned a non-2xx status code.
    #[error("Image host error ({status}): {body}")]
    Api { status: u16, body: String },

    /// The upload response did not carry a file id or URL.
    #[error("Image host response is missing {0}")]
    MissingField(&'static str),

    /// The configured API base URL cannot carry a file path.
    #[error("Invalid image host URL: {0}")]
    InvalidUrl(String),
}

impl ImageHostError {
    /// True when the host reports that the file does not exist.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::Api { status: 404, .. })
    }
}

/// Upload and delete operations against an image host.
#[async_trait]
pub trait ImageHost: Send + Sync {
    async fn upload(&self, file: UploadFile) -> Result<UploadedImage, ImageHostError>;

    async fn delete(&self, file_id: &str) -> Result<(), ImageHostError>;

    /// Short name for logs and the health endpoint.
    fn name(&self) -> &'static str;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_file_name_uses_default() {
        assert_eq!(UploadFile::new(None, "image/png", vec![]).file_name, DEFAULT_FILE_NAME);
        assert_eq!(UploadFile::new(Some("  "), "image/png", vec![]).file_name, DEFAULT_FILE_NAME);
        assert_eq!(UploadFile::new(Some("room.png"), "image/png", vec![]).file_name, "room.png");
    }

    #[test]
    fn not_found_detection() {
        let err = ImageHostError::Api {
            status: 404,
            body: "{}".to_string(),
        };
        assert!(err.is_not_found());
        assert!(!ImageHostError::MissingField("fileId").is_not_found());
    }
}
