//! Tour authoring form state.
//!
//! SYSTEM CONTEXT
//! ==============
//! `TourEditorPage` keeps one `TourFormState` in a local signal. Inputs write
//! raw strings into it; numbers are only parsed by `validate`, so a half-typed
//! value never gets lost. The state is generic over the picked file type so it
//! runs in tests without a browser.
//!
//! IMAGES
//! ======
//! Existing tours bring already-hosted images (`existing_images`). New files
//! pass the type/size filter, get a preview URL, and wait in an
//! [`ImageReview`] queue; confirmed ones become `images` and are uploaded on
//! submit. Every preview URL is released exactly once: on reject, remove,
//! dismiss, or `release_all` at teardown.
//!
//! SUBMISSION
//! ==========
//! `submit_tour`: validate, check image host config (only when new images
//! exist), upload sequentially, append URLs, then call the handler. Any
//! failure returns early and leaves the form untouched.

#[cfg(test)]
#[path = "tour_form_test.rs"]
mod tour_form_test;

use std::collections::BTreeMap;

use super::image_review::{ImageReview, ReviewStep, StagedImage};
use crate::net::api::ApiError;
use crate::net::types::{
    BlackoutDate, Discount, DiscountKind, Location, Price, Stop, StopLocation, Tour, TourDraft, TourImage,
};
use crate::net::upload::{ImageUploader, UploadError, upload_in_order};
use crate::util::config::{ClientConfig, ConfigError, ImageHostConfig};
use crate::util::files::{FileRejection, ImageFile, partition_images};
use crate::util::preview::PreviewFactory;

pub const CATEGORIES: [&str; 5] = ["gastronomía", "historia", "aventura", "naturaleza", "otros"];

pub const LANGUAGES: [&str; 9] =
    ["Español", "Inglés", "Francés", "Alemán", "Italiano", "Portugués", "Chino", "Japonés", "Ruso"];

pub const COUNTRIES: [&str; 10] = [
    "España",
    "Francia",
    "Italia",
    "Alemania",
    "Portugal",
    "Reino Unido",
    "Países Bajos",
    "Bélgica",
    "Suiza",
    "Austria",
];

// =============================================================================
// VALIDATION ERRORS
// =============================================================================

/// Form field an error message is attached to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum FieldKey {
    Title,
    Category,
    Description,
    Duration,
    Price,
    DiscountKind,
    DiscountAmount,
    DiscountDates,
    MeetingPoint,
    Languages,
    LocationName,
    LocationCountry,
    StopName(usize),
    StopLat(usize),
    StopLng(usize),
    BlackoutDate(usize),
}

/// Field-localized messages; submission is blocked while any exist.
#[derive(Clone, Debug, Default, PartialEq, Eq, thiserror::Error)]
#[error("please fix the {} highlighted field(s)", .errors.len())]
pub struct ValidationErrors {
    errors: BTreeMap<FieldKey, String>,
}

impl ValidationErrors {
    pub fn insert(&mut self, key: FieldKey, message: impl Into<String>) {
        self.errors.entry(key).or_insert_with(|| message.into());
    }

    pub fn get(&self, key: FieldKey) -> Option<&str> {
        self.errors.get(&key).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn keys(&self) -> impl Iterator<Item = FieldKey> + '_ {
        self.errors.keys().copied()
    }
}

// =============================================================================
// SUB-RECORDS
// =============================================================================

/// One itinerary stop as typed.
#[derive(Clone, Debug, PartialEq)]
pub struct StopInput {
    pub name: String,
    pub lat: String,
    pub lng: String,
    pub address: String,
}

impl Default for StopInput {
    fn default() -> Self {
        Self { name: String::new(), lat: "0".to_owned(), lng: "0".to_owned(), address: String::new() }
    }
}

/// One blackout date and its blocked hours.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct BlackoutInput {
    pub date: String,
    pub hours: Vec<String>,
}

// =============================================================================
// FORM STATE
// =============================================================================

#[derive(Clone, Debug)]
pub struct TourFormState<F> {
    pub title: String,
    pub category: String,
    pub description: String,
    pub duration: String,
    pub price_value: String,
    pub based_on_tips: bool,
    pub discount_enabled: bool,
    /// Wire tag of the chosen kind, empty until one is picked.
    pub discount_kind: String,
    pub discount_amount: String,
    pub discount_description: String,
    pub discount_valid_from: String,
    pub discount_valid_to: String,
    pub meeting_point: String,
    pub languages: Vec<String>,
    pub location_name: String,
    pub location_country: String,
    pub stops: Vec<StopInput>,
    pub blackouts: Vec<BlackoutInput>,
    /// Images already on the image host (edit mode).
    pub existing_images: Vec<TourImage>,
    /// Messages from the last failed validation.
    pub errors: ValidationErrors,
    images: Vec<StagedImage<F>>,
    review: ImageReview<F>,
}

impl<F> Default for TourFormState<F> {
    fn default() -> Self {
        Self {
            title: String::new(),
            category: String::new(),
            description: String::new(),
            duration: String::new(),
            price_value: "0".to_owned(),
            based_on_tips: false,
            discount_enabled: false,
            discount_kind: String::new(),
            discount_amount: String::new(),
            discount_description: String::new(),
            discount_valid_from: String::new(),
            discount_valid_to: String::new(),
            meeting_point: String::new(),
            languages: Vec::new(),
            location_name: String::new(),
            location_country: String::new(),
            stops: Vec::new(),
            blackouts: Vec::new(),
            existing_images: Vec::new(),
            errors: ValidationErrors::default(),
            images: Vec::new(),
            review: ImageReview::new(),
        }
    }
}

impl<F> TourFormState<F> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Edit-mode form prefilled from `tour`.
    pub fn from_tour(tour: &Tour) -> Self {
        let discount = tour.price.discount.as_ref();
        Self {
            title: tour.title.clone(),
            category: tour.category.clone(),
            description: tour.description.clone(),
            duration: tour.duration.clone(),
            price_value: tour.price.value.to_string(),
            based_on_tips: tour.price.based_on_tips,
            discount_enabled: discount.is_some(),
            discount_kind: discount.map(|d| d.kind.as_str().to_owned()).unwrap_or_default(),
            discount_amount: discount.map(|d| d.amount.to_string()).unwrap_or_default(),
            discount_description: discount.map(|d| d.description.clone()).unwrap_or_default(),
            discount_valid_from: discount.map(|d| d.valid_from.clone()).unwrap_or_default(),
            discount_valid_to: discount.map(|d| d.valid_to.clone()).unwrap_or_default(),
            meeting_point: tour.meeting_point.clone(),
            languages: tour.language.clone(),
            location_name: tour.location.name.clone(),
            location_country: tour.location.country.clone(),
            stops: tour
                .stops
                .iter()
                .map(|s| StopInput {
                    name: s.stop_name.clone(),
                    lat: s.location.lat.to_string(),
                    lng: s.location.lng.to_string(),
                    address: s.location.address.clone(),
                })
                .collect(),
            blackouts: tour
                .non_available_dates
                .iter()
                .map(|b| BlackoutInput { date: b.date.clone(), hours: b.hours.clone() })
                .collect(),
            existing_images: tour.images.clone(),
            ..Self::default()
        }
    }

    // =========================================================================
    // DYNAMIC LISTS
    // =========================================================================

    pub fn add_stop(&mut self) {
        self.stops.push(StopInput::default());
    }

    pub fn remove_stop(&mut self, index: usize) {
        if index < self.stops.len() {
            self.stops.remove(index);
        }
    }

    pub fn add_blackout(&mut self) {
        self.blackouts.push(BlackoutInput::default());
    }

    pub fn remove_blackout(&mut self, index: usize) {
        if index < self.blackouts.len() {
            self.blackouts.remove(index);
        }
    }

    /// Add an hour to blackout `index`. Empty and duplicate hours are refused.
    pub fn add_hour(&mut self, index: usize, hour: &str) -> bool {
        let hour = hour.trim();
        let Some(blackout) = self.blackouts.get_mut(index) else {
            return false;
        };
        if hour.is_empty() || blackout.hours.iter().any(|h| h == hour) {
            return false;
        }
        blackout.hours.push(hour.to_owned());
        true
    }

    pub fn remove_hour(&mut self, index: usize, hour: &str) {
        if let Some(blackout) = self.blackouts.get_mut(index) {
            blackout.hours.retain(|h| h != hour);
        }
    }

    pub fn toggle_language(&mut self, language: &str) {
        if let Some(pos) = self.languages.iter().position(|l| l == language) {
            self.languages.remove(pos);
        } else {
            self.languages.push(language.to_owned());
        }
    }

    // =========================================================================
    // IMAGES
    // =========================================================================

    pub fn review(&self) -> &ImageReview<F> {
        &self.review
    }

    pub fn review_step(&self) -> ReviewStep {
        self.review.step()
    }

    /// Confirmed new images, in selection order.
    pub fn images(&self) -> &[StagedImage<F>] {
        &self.images
    }

    /// Preview URLs of the confirmed new images.
    pub fn preview_urls(&self) -> Vec<&str> {
        self.images.iter().filter_map(|i| i.preview.as_deref()).collect()
    }

    pub fn has_new_images(&self) -> bool {
        !self.images.is_empty()
    }

    /// Accept the image shown in the review dialog.
    pub fn confirm_image(&mut self) {
        if let Some(image) = self.review.confirm() {
            self.images.push(image);
        }
    }

    /// Discard the image shown in the review dialog.
    pub fn reject_image(&mut self, previews: &dyn PreviewFactory<F>) {
        if let Some(image) = self.review.reject() {
            release(previews, &image);
        }
    }

    /// Close the dialog early, discarding everything still pending.
    pub fn dismiss_review(&mut self, previews: &dyn PreviewFactory<F>) {
        for image in self.review.dismiss() {
            release(previews, &image);
        }
    }

    /// Drop a confirmed new image.
    pub fn remove_image(&mut self, index: usize, previews: &dyn PreviewFactory<F>) {
        if index < self.images.len() {
            let image = self.images.remove(index);
            release(previews, &image);
        }
    }

    /// Drop an already-hosted image. Nothing to release.
    pub fn remove_existing_image(&mut self, index: usize) {
        if index < self.existing_images.len() {
            self.existing_images.remove(index);
        }
    }

    /// Release every preview the form still holds. Called at teardown.
    pub fn release_all(&mut self, previews: &dyn PreviewFactory<F>) {
        self.dismiss_review(previews);
        for image in self.images.drain(..) {
            release(previews, &image);
        }
    }

    // =========================================================================
    // VALIDATION
    // =========================================================================

    /// Check every rule and build the payload from the form.
    ///
    /// The draft's images are the existing ones only; uploads are appended by
    /// [`submit_tour`].
    ///
    /// # Errors
    ///
    /// Returns every failed rule as [`ValidationErrors`].
    pub fn validate(&self) -> Result<TourDraft, ValidationErrors> {
        let mut errors = ValidationErrors::default();

        let required = [
            (FieldKey::Title, &self.title, "Title is required"),
            (FieldKey::Category, &self.category, "Category is required"),
            (FieldKey::Description, &self.description, "Description is required"),
            (FieldKey::Duration, &self.duration, "Duration is required"),
            (FieldKey::MeetingPoint, &self.meeting_point, "Meeting point is required"),
            (FieldKey::LocationName, &self.location_name, "Location name is required"),
            (FieldKey::LocationCountry, &self.location_country, "Country is required"),
        ];
        for (key, value, message) in required {
            if value.trim().is_empty() {
                errors.insert(key, message);
            }
        }
        if self.languages.is_empty() {
            errors.insert(FieldKey::Languages, "Select at least one language");
        }

        let price_value = match parse_number(&self.price_value) {
            None => {
                errors.insert(FieldKey::Price, "Price must be a number");
                0.0
            }
            Some(v) if v < 0.0 => {
                errors.insert(FieldKey::Price, "Price must be zero or more");
                0.0
            }
            Some(v) => v,
        };

        let discount = if self.discount_enabled { self.check_discount(&mut errors) } else { None };

        let stops = self
            .stops
            .iter()
            .enumerate()
            .map(|(i, stop)| {
                if stop.name.trim().is_empty() {
                    errors.insert(FieldKey::StopName(i), "Stop name is required");
                }
                let lat = check_coordinate(&stop.lat, 90.0, FieldKey::StopLat(i), "Latitude", &mut errors);
                let lng = check_coordinate(&stop.lng, 180.0, FieldKey::StopLng(i), "Longitude", &mut errors);
                Stop {
                    stop_name: stop.name.trim().to_owned(),
                    location: StopLocation { lat, lng, address: stop.address.trim().to_owned() },
                }
            })
            .collect();

        let non_available_dates = self
            .blackouts
            .iter()
            .enumerate()
            .map(|(i, blackout)| {
                if blackout.date.trim().is_empty() {
                    errors.insert(FieldKey::BlackoutDate(i), "Date is required");
                }
                BlackoutDate { date: blackout.date.trim().to_owned(), hours: blackout.hours.clone() }
            })
            .collect();

        if !errors.is_empty() {
            return Err(errors);
        }

        Ok(TourDraft {
            title: self.title.trim().to_owned(),
            category: self.category.trim().to_owned(),
            description: self.description.trim().to_owned(),
            duration: self.duration.trim().to_owned(),
            price: Price { value: price_value, based_on_tips: self.based_on_tips, discount },
            meeting_point: self.meeting_point.trim().to_owned(),
            language: self.languages.clone(),
            location: Location {
                name: self.location_name.trim().to_owned(),
                country: self.location_country.trim().to_owned(),
            },
            stops,
            non_available_dates,
            images: self.existing_images.clone(),
            provider_id: None,
        })
    }

    fn check_discount(&self, errors: &mut ValidationErrors) -> Option<Discount> {
        let kind = DiscountKind::parse(&self.discount_kind);
        if kind.is_none() {
            errors.insert(FieldKey::DiscountKind, "Choose a discount type");
        }

        let amount = match parse_number(&self.discount_amount) {
            None => {
                errors.insert(FieldKey::DiscountAmount, "Discount amount must be a number");
                None
            }
            Some(v) if v <= 0.0 => {
                errors.insert(FieldKey::DiscountAmount, "Discount must be greater than 0");
                None
            }
            Some(v) if kind == Some(DiscountKind::Percentage) && v > 100.0 => {
                errors.insert(FieldKey::DiscountAmount, "A percentage discount cannot exceed 100");
                None
            }
            Some(v) => Some(v),
        };

        let from = self.discount_valid_from.trim();
        let to = self.discount_valid_to.trim();
        if !from.is_empty() && !to.is_empty() && from > to {
            errors.insert(FieldKey::DiscountDates, "Start date must be on or before the end date");
        }

        Some(Discount {
            kind: kind?,
            amount: amount?,
            description: self.discount_description.trim().to_owned(),
            valid_from: from.to_owned(),
            valid_to: to.to_owned(),
        })
    }
}

impl<F: ImageFile> TourFormState<F> {
    /// Filter picked files and queue the acceptable ones for review.
    ///
    /// Returns the refused files so the page can show a notice.
    pub fn stage_files(&mut self, files: Vec<F>, previews: &dyn PreviewFactory<F>) -> Vec<FileRejection> {
        let (accepted, rejected) = partition_images(files);
        self.review.stage(accepted.into_iter().map(|file| {
            let preview = previews.create(&file);
            StagedImage { file, preview }
        }));
        rejected
    }

    /// Files to upload on submit, in selection order.
    pub fn new_files(&self) -> Vec<F> {
        self.images.iter().map(|i| i.file.clone()).collect()
    }
}

fn release<F>(previews: &dyn PreviewFactory<F>, image: &StagedImage<F>) {
    if let Some(url) = &image.preview {
        previews.release(url);
    }
}

fn parse_number(raw: &str) -> Option<f64> {
    raw.trim().parse::<f64>().ok().filter(|v| v.is_finite()).map(|v| v + 0.0)
}

fn check_coordinate(raw: &str, bound: f64, key: FieldKey, label: &str, errors: &mut ValidationErrors) -> f64 {
    match parse_number(raw) {
        None => {
            errors.insert(key, format!("{label} must be a number"));
            0.0
        }
        Some(v) if !(-bound..=bound).contains(&v) => {
            errors.insert(key, format!("{label} must be between -{bound} and {bound}"));
            0.0
        }
        Some(v) => v,
    }
}

// =============================================================================
// SUBMISSION
// =============================================================================

/// Why a submission stopped. The form is left as it was.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SubmitError {
    #[error(transparent)]
    Invalid(#[from] ValidationErrors),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Upload(#[from] UploadError),

    #[error("could not save the tour: {0}")]
    Api(#[from] ApiError),
}

/// Validate, upload new images in order, then hand the draft to `handler`.
///
/// `make_uploader` is only called when there are new images and the image
/// host is configured.
///
/// # Errors
///
/// Returns the first [`SubmitError`]; nothing is uploaded or saved after it.
pub async fn submit_tour<F, U, H, Fut>(
    form: &TourFormState<F>,
    config: &ClientConfig,
    make_uploader: impl FnOnce(ImageHostConfig) -> U,
    handler: H,
) -> Result<Tour, SubmitError>
where
    F: ImageFile,
    U: ImageUploader<F>,
    H: FnOnce(TourDraft) -> Fut,
    Fut: Future<Output = Result<Tour, ApiError>>,
{
    let mut draft = form.validate()?;

    let files = form.new_files();
    if !files.is_empty() {
        let uploader = make_uploader(config.image_host()?);
        let urls = upload_in_order(&uploader, &files).await?;
        draft.push_uploaded(urls);
    }

    Ok(handler(draft).await?)
}
