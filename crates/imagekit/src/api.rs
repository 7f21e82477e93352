//! REST client for the ImageKit upload and file management endpoints.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::multipart::{Form, Part};
use reqwest::Url;
use serde::Deserialize;

use crate::config::ImageKitConfig;
use crate::{ImageHost, ImageHostError, UploadFile, UploadedImage, GALLERY_FOLDER};

/// HTTP client for one ImageKit account.
pub struct ImageKitClient {
    client: reqwest::Client,
    config: ImageKitConfig,
}

/// Fields of the upload response this service relies on.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct UploadResponse {
    file_id: Option<String>,
    url: Option<String>,
}

impl ImageKitClient {
    /// Build a client with the configured per-request timeout.
    pub fn new(config: ImageKitConfig) -> Result<Self, ImageHostError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;
        Ok(Self { client, config })
    }

    /// `{api_url}/files/{file_id}` with the id encoded as one path segment.
    fn delete_url(&self, file_id: &str) -> Result<Url, ImageHostError> {
        let invalid = || ImageHostError::InvalidUrl(self.config.api_url.clone());
        let mut url = Url::parse(&self.config.api_url).map_err(|_| invalid())?;
        url.path_segments_mut()
            .map_err(|_| invalid())?
            .pop_if_empty()
            .push("files")
            .push(file_id);
        Ok(url)
    }

    // ---- private helpers ----

    /// Return the response unchanged on 2xx, or an [`ImageHostError::Api`]
    /// carrying the status and body text.
    async fn ensure_success(
        response: reqwest::Response,
    ) -> Result<reqwest::Response, ImageHostError> {
        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "<unreadable body>".to_string());
            return Err(ImageHostError::Api {
                status: status.as_u16(),
                body,
            });
        }
        Ok(response)
    }
}

#[async_trait]
impl ImageHost for ImageKitClient {
    /// `POST` the file as multipart with `file`, `fileName` and `folder`.
    async fn upload(&self, file: UploadFile) -> Result<UploadedImage, ImageHostError> {
        let size = file.bytes.len();
        let part = Part::bytes(file.bytes)
            .file_name(file.file_name.clone())
            .mime_str(&file.content_type)?;
        let form = Form::new()
            .part("file", part)
            .text("fileName", file.file_name.clone())
            .text("folder", GALLERY_FOLDER);

        let response = self
            .client
            .post(&self.config.upload_url)
            .basic_auth(&self.config.private_key, Some(""))
            .multipart(form)
            .send()
            .await?;

        let body: UploadResponse = Self::ensure_success(response).await?.json().await?;
        let uploaded = UploadedImage {
            file_id: body.file_id.ok_or(ImageHostError::MissingField("fileId"))?,
            url: body.url.ok_or(ImageHostError::MissingField("url"))?,
        };

        tracing::info!(
            file_id = %uploaded.file_id,
            file_name = %file.file_name,
            size,
            "Image uploaded",
        );
        Ok(uploaded)
    }

    /// `DELETE /files/{fileId}`.
    async fn delete(&self, file_id: &str) -> Result<(), ImageHostError> {
        let response = self
            .client
            .delete(self.delete_url(file_id)?)
            .basic_auth(&self.config.private_key, Some(""))
            .send()
            .await?;

        Self::ensure_success(response).await?;
        tracing::info!(file_id, "Image deleted");
        Ok(())
    }

    fn name(&self) -> &'static str {
        "imagekit"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;
    use crate::config::{DEFAULT_API_URL, DEFAULT_UPLOAD_URL};

    fn config() -> ImageKitConfig {
        ImageKitConfig {
            url_endpoint: "https://ik.imagekit.io/demo".to_string(),
            public_key: "public_abc".to_string(),
            private_key: "private_abc".to_string(),
            upload_url: DEFAULT_UPLOAD_URL.to_string(),
            api_url: DEFAULT_API_URL.to_string(),
            timeout_secs: 5,
        }
    }

    #[test]
    fn delete_url_targets_file() {
        let client = ImageKitClient::new(config()).unwrap();
        assert_eq!(
            client.delete_url("abc123").unwrap().as_str(),
            "https://api.imagekit.io/v1/files/abc123"
        );
    }

    #[test]
    fn delete_url_encodes_file_id_as_one_segment() {
        let client = ImageKitClient::new(config()).unwrap();
        assert_eq!(
            client.delete_url("../bulk?x=1#y").unwrap().as_str(),
            "https://api.imagekit.io/v1/files/..%2Fbulk%3Fx=1%23y"
        );
    }

    #[test]
    fn delete_url_tolerates_trailing_slash() {
        let mut cfg = config();
        cfg.api_url = "https://api.imagekit.io/v1/".to_string();
        let client = ImageKitClient::new(cfg).unwrap();
        assert_eq!(
            client.delete_url("abc123").unwrap().as_str(),
            "https://api.imagekit.io/v1/files/abc123"
        );
    }

    #[test]
    fn delete_url_rejects_malformed_api_url() {
        let mut cfg = config();
        cfg.api_url = "not a url".to_string();
        let client = ImageKitClient::new(cfg).unwrap();
        assert_matches!(client.delete_url("abc123"), Err(ImageHostError::InvalidUrl(_)));
    }

    #[test]
    fn upload_response_uses_camel_case() {
        let body: UploadResponse = serde_json::from_value(serde_json::json!({
            "fileId": "abc123",
            "name": "upload.jpg",
            "url": "https://ik.imagekit.io/demo/gallery/upload.jpg"
        }))
        .unwrap();
        assert_eq!(body.file_id.as_deref(), Some("abc123"));
        assert_eq!(
            body.url.as_deref(),
            Some("https://ik.imagekit.io/demo/gallery/upload.jpg")
        );
    }

    #[tokio::test]
    async fn unreachable_host_is_a_request_error() {
        let mut cfg = config();
        cfg.api_url = "http://127.0.0.1:9".to_string();
        let client = ImageKitClient::new(cfg).unwrap();
        let err = client.delete("abc123").await.unwrap_err();
        assert!(matches!(err, ImageHostError::Request(_)));
    }
}
