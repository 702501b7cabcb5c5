//! Preview URLs for images staged in the tour form.
//!
//! Every URL handed out by `create` must eventually be passed to `release`;
//! the form state calls it when an image is rejected, removed, or the form is
//! torn down.

use super::files::SelectedFile;

/// Creates and releases displayable URLs for local files.
pub trait PreviewFactory<F> {
    fn create(&self, file: &F) -> Option<String>;
    fn release(&self, url: &str);
}

/// `URL.createObjectURL` / `URL.revokeObjectURL`. Inert outside the browser.
#[derive(Clone, Copy, Debug, Default)]
pub struct ObjectUrlPreviews;

impl PreviewFactory<SelectedFile> for ObjectUrlPreviews {
    fn create(&self, file: &SelectedFile) -> Option<String> {
        #[cfg(feature = "hydrate")]
        {
            web_sys::Url::create_object_url_with_blob(file).ok()
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = file;
            None
        }
    }

    fn release(&self, url: &str) {
        #[cfg(feature = "hydrate")]
        {
            if web_sys::Url::revoke_object_url(url).is_err() {
                leptos::logging::warn!("failed to revoke preview {url}");
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = url;
        }
    }
}
