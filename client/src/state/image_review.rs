//! One-at-a-time confirmation of newly attached images.
//!
//! DESIGN
//! ======
//! Staged images wait in a queue; the dialog always shows the front entry.
//! `ReviewStep` is the dialog state:
//!
//! ```text
//! Closed --stage--> Open{0,n} --confirm/reject--> Open{i+1,n} ... --> Closed
//!                       \--dismiss--> Closed (queue drained)
//! ```
//!
//! The queue hands entries back to the caller on every transition; releasing
//! preview URLs is the caller's job.

#[cfg(test)]
#[path = "image_review_test.rs"]
mod image_review_test;

use std::collections::VecDeque;

/// A picked file with its preview URL, if one could be created.
#[derive(Clone, Debug, PartialEq)]
pub struct StagedImage<F> {
    pub file: F,
    pub preview: Option<String>,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ReviewStep {
    #[default]
    Closed,
    /// Showing entry `index` (0-based) of the `total` staged in this round.
    Open { index: usize, total: usize },
}

#[derive(Clone, Debug)]
pub struct ImageReview<F> {
    pending: VecDeque<StagedImage<F>>,
    step: ReviewStep,
}

impl<F> Default for ImageReview<F> {
    fn default() -> Self {
        Self { pending: VecDeque::new(), step: ReviewStep::Closed }
    }
}

impl<F> ImageReview<F> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn step(&self) -> ReviewStep {
        self.step
    }

    pub fn is_open(&self) -> bool {
        matches!(self.step, ReviewStep::Open { .. })
    }

    /// Entry currently shown in the dialog.
    pub fn current(&self) -> Option<&StagedImage<F>> {
        self.pending.front()
    }

    pub fn pending_len(&self) -> usize {
        self.pending.len()
    }

    /// Queue images for review, opening the dialog if it was closed.
    ///
    /// Staging while open extends the current round.
    pub fn stage(&mut self, images: impl IntoIterator<Item = StagedImage<F>>) {
        let before = self.pending.len();
        self.pending.extend(images);
        let added = self.pending.len() - before;
        if added == 0 {
            return;
        }
        self.step = match self.step {
            ReviewStep::Closed => ReviewStep::Open { index: 0, total: added },
            ReviewStep::Open { index, total } => ReviewStep::Open { index, total: total + added },
        };
    }

    /// Accept the current image; the caller commits it.
    pub fn confirm(&mut self) -> Option<StagedImage<F>> {
        self.take_current()
    }

    /// Discard the current image; the caller releases its preview.
    pub fn reject(&mut self) -> Option<StagedImage<F>> {
        self.take_current()
    }

    /// Close early, handing back every image still pending.
    pub fn dismiss(&mut self) -> Vec<StagedImage<F>> {
        self.step = ReviewStep::Closed;
        self.pending.drain(..).collect()
    }

    fn take_current(&mut self) -> Option<StagedImage<F>> {
        let ReviewStep::Open { index, total } = self.step else {
            return None;
        };
        let image = self.pending.pop_front()?;
        self.step = if self.pending.is_empty() {
            ReviewStep::Closed
        } else {
            ReviewStep::Open { index: index + 1, total }
        };
        Some(image)
    }
}
