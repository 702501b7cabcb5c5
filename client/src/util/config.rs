//! Client configuration baked in at build time.
//!
//! The WASM bundle has no process environment, so values are captured with
//! `option_env!` when the crate is compiled. Parsing goes through a lookup
//! function so tests can feed arbitrary maps.

pub const DEFAULT_API_URL: &str = "http://localhost:3000";
pub const IMAGE_UPLOAD_BASE: &str = "https://api.cloudinary.com/v1_1";

/// Configuration problem detected before any network call.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("image hosting is not configured: {var} is missing")]
    MissingImageHost { var: &'static str },
}

/// Credentials for the hosted image API.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageHostConfig {
    pub cloud_name: String,
    pub upload_preset: String,
}

impl ImageHostConfig {
    /// Multipart upload endpoint for this cloud.
    pub fn upload_url(&self) -> String {
        format!("{IMAGE_UPLOAD_BASE}/{}/image/upload", self.cloud_name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub api_url: String,
    pub image_cloud_name: Option<String>,
    pub image_upload_preset: Option<String>,
    /// Serve tours from local storage instead of the remote API.
    pub mock_mode: bool,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::from_lookup(|_| None)
    }
}

impl ClientConfig {
    /// Build config from an arbitrary key lookup.
    ///
    /// Optional:
    /// - `TOURDESK_API_URL`: default `http://localhost:3000`
    /// - `TOURDESK_IMAGE_CLOUD_NAME`, `TOURDESK_IMAGE_UPLOAD_PRESET`: required
    ///   only when a tour is submitted with new images
    /// - `TOURDESK_MOCK_MODE`: boolean word, default false
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let non_empty = |key: &str| lookup(key).map(|v| v.trim().to_owned()).filter(|v| !v.is_empty());
        let api_url = non_empty("TOURDESK_API_URL")
            .unwrap_or_else(|| DEFAULT_API_URL.to_owned())
            .trim_end_matches('/')
            .to_owned();
        Self {
            api_url,
            image_cloud_name: non_empty("TOURDESK_IMAGE_CLOUD_NAME"),
            image_upload_preset: non_empty("TOURDESK_IMAGE_UPLOAD_PRESET"),
            mock_mode: env_bool(lookup("TOURDESK_MOCK_MODE").as_deref()).unwrap_or(false),
        }
    }

    /// Values captured from the build environment.
    pub fn from_build_env() -> Self {
        Self::from_lookup(|key| {
            match key {
                "TOURDESK_API_URL" => option_env!("TOURDESK_API_URL"),
                "TOURDESK_IMAGE_CLOUD_NAME" => option_env!("TOURDESK_IMAGE_CLOUD_NAME"),
                "TOURDESK_IMAGE_UPLOAD_PRESET" => option_env!("TOURDESK_IMAGE_UPLOAD_PRESET"),
                "TOURDESK_MOCK_MODE" => option_env!("TOURDESK_MOCK_MODE"),
                _ => None,
            }
            .map(str::to_owned)
        })
    }

    /// Image host settings, or the first missing key.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingImageHost`] naming the absent variable.
    pub fn image_host(&self) -> Result<ImageHostConfig, ConfigError> {
        let cloud_name = self
            .image_cloud_name
            .clone()
            .ok_or(ConfigError::MissingImageHost { var: "TOURDESK_IMAGE_CLOUD_NAME" })?;
        let upload_preset = self
            .image_upload_preset
            .clone()
            .ok_or(ConfigError::MissingImageHost { var: "TOURDESK_IMAGE_UPLOAD_PRESET" })?;
        Ok(ImageHostConfig { cloud_name, upload_preset })
    }
}

/// Parse a boolean word: `1/true/yes/on` or `0/false/no/off`, any case.
pub(crate) fn env_bool(raw: Option<&str>) -> Option<bool> {
    raw.and_then(|raw| match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    })
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
