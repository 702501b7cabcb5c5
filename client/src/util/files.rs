//! Image files picked in the tour form.
//!
//! The form logic is generic over [`ImageFile`] so it runs in tests without a
//! browser. In the browser build [`SelectedFile`] is `web_sys::File`; during
//! SSR and in tests it is a plain record.

#[cfg(test)]
#[path = "files_test.rs"]
mod files_test;

/// Largest accepted image, in bytes (10 MiB).
pub const MAX_IMAGE_BYTES: u64 = 10 * 1024 * 1024;

/// Metadata the form needs from a picked file.
pub trait ImageFile: Clone {
    fn name(&self) -> String;
    fn mime_type(&self) -> String;
    fn size(&self) -> u64;
}

/// Why a picked file was refused before entering review.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FileRejection {
    #[error("{name} is not an image")]
    NotAnImage { name: String },
    #[error("{name} is larger than 10 MB")]
    TooLarge { name: String },
}

/// Accept only `image/*` files no larger than [`MAX_IMAGE_BYTES`].
///
/// # Errors
///
/// Returns the [`FileRejection`] describing the first failed check.
pub fn check_image<F: ImageFile>(file: &F) -> Result<(), FileRejection> {
    if !file.mime_type().starts_with("image/") {
        return Err(FileRejection::NotAnImage { name: file.name() });
    }
    if file.size() > MAX_IMAGE_BYTES {
        return Err(FileRejection::TooLarge { name: file.name() });
    }
    Ok(())
}

/// Split a selection into accepted files and rejections, keeping order.
pub fn partition_images<F: ImageFile>(files: Vec<F>) -> (Vec<F>, Vec<FileRejection>) {
    let mut accepted = Vec::new();
    let mut rejected = Vec::new();
    for file in files {
        match check_image(&file) {
            Ok(()) => accepted.push(file),
            Err(reason) => rejected.push(reason),
        }
    }
    (accepted, rejected)
}

// =============================================================================
// PLATFORM FILE
// =============================================================================

#[cfg(feature = "hydrate")]
pub type SelectedFile = web_sys::File;

#[cfg(feature = "hydrate")]
impl ImageFile for web_sys::File {
    fn name(&self) -> String {
        web_sys::File::name(self)
    }

    fn mime_type(&self) -> String {
        self.type_()
    }

    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    fn size(&self) -> u64 {
        web_sys::Blob::size(self) as u64
    }
}

/// Files currently chosen in a file `<input>`.
#[cfg(feature = "hydrate")]
pub fn files_from_input(input: &web_sys::HtmlInputElement) -> Vec<SelectedFile> {
    let Some(list) = input.files() else {
        return Vec::new();
    };
    (0..list.length()).filter_map(|i| list.get(i)).collect()
}

/// Stand-in for a browser file outside the WASM build.
#[cfg(not(feature = "hydrate"))]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SelectedFile {
    pub name: String,
    pub mime_type: String,
    pub size: u64,
}

#[cfg(not(feature = "hydrate"))]
impl ImageFile for SelectedFile {
    fn name(&self) -> String {
        self.name.clone()
    }

    fn mime_type(&self) -> String {
        self.mime_type.clone()
    }

    fn size(&self) -> u64 {
        self.size
    }
}
