//! Image uploads to the hosted image API.
//!
//! DESIGN
//! ======
//! Each image goes out as one multipart `POST` with `file` and
//! `upload_preset`; the response's `secure_url` is the hosted URL.
//! `upload_in_order` sends a batch strictly one at a time so the resulting
//! URLs line up with the selection order, and stops at the first failure.

#[cfg(test)]
#[path = "upload_test.rs"]
mod upload_test;

use async_trait::async_trait;

use crate::util::config::ImageHostConfig;
use crate::util::files::{ImageFile, SelectedFile};

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum UploadError {
    #[error("could not upload {name}: {message}")]
    Network { name: String, message: String },

    #[error("image host rejected {name} ({status}): {message}")]
    Rejected { name: String, status: u16, message: String },

    #[error("image host returned no URL for {name}")]
    MissingUrl { name: String },
}

/// Uploads one file and returns its hosted URL.
#[async_trait(?Send)]
pub trait ImageUploader<F: ImageFile> {
    async fn upload(&self, file: &F) -> Result<String, UploadError>;
}

/// Upload `files` sequentially, returning URLs in the same order.
///
/// # Errors
///
/// Returns the first [`UploadError`]; later files are not attempted.
pub async fn upload_in_order<F, U>(uploader: &U, files: &[F]) -> Result<Vec<String>, UploadError>
where
    F: ImageFile,
    U: ImageUploader<F> + ?Sized,
{
    let mut urls = Vec::with_capacity(files.len());
    for file in files {
        let url = uploader.upload(file).await?;
        leptos::logging::log!("uploaded {} -> {url}", file.name());
        urls.push(url);
    }
    Ok(urls)
}

// =============================================================================
// HOSTED UPLOADER
// =============================================================================

#[derive(Debug, serde::Deserialize)]
struct UploadResponse {
    #[serde(default)]
    secure_url: Option<String>,
}

/// Pull `secure_url` out of an upload response body.
#[cfg_attr(not(feature = "hydrate"), allow(dead_code))]
fn hosted_url(name: &str, body: &str) -> Result<String, UploadError> {
    serde_json::from_str::<UploadResponse>(body)
        .ok()
        .and_then(|r| r.secure_url)
        .filter(|url| !url.is_empty())
        .ok_or_else(|| UploadError::MissingUrl { name: name.to_owned() })
}

/// Message of an image-host error body: `{"error": {"message": "..."}}`.
#[cfg_attr(not(feature = "hydrate"), allow(dead_code))]
fn host_error_message(status: u16, body: &str) -> String {
    serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|v| v.pointer("/error/message").and_then(|m| m.as_str()).map(str::to_owned))
        .unwrap_or_else(|| crate::net::api::error_message(status, body))
}

/// Unsigned uploads against the configured cloud.
#[derive(Debug, Clone)]
pub struct ImageHostUploader {
    config: ImageHostConfig,
}

impl ImageHostUploader {
    pub fn new(config: ImageHostConfig) -> Self {
        Self { config }
    }
}

#[async_trait(?Send)]
impl ImageUploader<SelectedFile> for ImageHostUploader {
    async fn upload(&self, file: &SelectedFile) -> Result<String, UploadError> {
        let name = file.name();
        #[cfg(feature = "hydrate")]
        {
            let network = |message: String| UploadError::Network { name: name.clone(), message };

            let form = web_sys::FormData::new().map_err(|e| network(format!("{e:?}")))?;
            form.append_with_blob("file", file).map_err(|e| network(format!("{e:?}")))?;
            form.append_with_str("upload_preset", &self.config.upload_preset)
                .map_err(|e| network(format!("{e:?}")))?;

            let resp = gloo_net::http::Request::post(&self.config.upload_url())
                .body(form)
                .map_err(|e| network(e.to_string()))?
                .send()
                .await
                .map_err(|e| network(e.to_string()))?;
            let status = resp.status();
            let body = resp.text().await.map_err(|e| network(e.to_string()))?;
            if !(200..300).contains(&status) {
                return Err(UploadError::Rejected { name, status, message: host_error_message(status, &body) });
            }
            hosted_url(&name, &body)
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = &self.config;
            Err(UploadError::Network { name, message: "not available on server".to_owned() })
        }
    }
}
