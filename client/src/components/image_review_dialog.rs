//! Modal that walks through newly picked images one at a time.

#[cfg(test)]
#[path = "image_review_dialog_test.rs"]
mod image_review_dialog_test;

use leptos::either::Either;
use leptos::prelude::*;

use super::tour_form::FormSignal;
use crate::state::image_review::ReviewStep;
use crate::util::files::ImageFile;
use crate::util::preview::ObjectUrlPreviews;

/// `"Image 2 of 3"` for an open step, empty when closed.
pub fn progress_label(step: ReviewStep) -> String {
    match step {
        ReviewStep::Closed => String::new(),
        ReviewStep::Open { index, total } => format!("Image {} of {total}", index + 1),
    }
}

#[component]
pub fn ImageReviewDialog(form: FormSignal) -> impl IntoView {
    let step = move || form.with(|f| f.review_step());
    let current = move || form.with(|f| f.review().current().map(|image| (image.preview.clone(), ImageFile::name(&image.file))));

    let on_confirm = move |_| form.update(|f| f.confirm_image());
    let on_reject = move |_| form.update(|f| f.reject_image(&ObjectUrlPreviews));
    let on_dismiss = move |_| form.update(|f| f.dismiss_review(&ObjectUrlPreviews));
    let on_keydown = move |ev: leptos::ev::KeyboardEvent| {
        if ev.key() == "Escape" {
            ev.prevent_default();
            form.update(|f| f.dismiss_review(&ObjectUrlPreviews));
        }
    };

    view! {
        <Show when=move || step() != ReviewStep::Closed>
            <div class="dialog-backdrop" on:keydown=on_keydown>
                <div class="dialog" role="dialog" aria-modal="true" tabindex="-1">
                    <h3 class="dialog__title">"Add this image?"</h3>
                    <p class="dialog__progress">{move || progress_label(step())}</p>
                    {move || {
                        current()
                            .map(|(preview, name)| match preview {
                                Some(src) => Either::Left(view! { <img class="dialog__preview" src=src alt=name/> }),
                                None => Either::Right(view! { <p class="dialog__file">{name}</p> }),
                            })
                    }}
                    <div class="dialog__actions">
                        <button type="button" class="btn btn--ghost" on:click=on_dismiss>
                            "Discard remaining"
                        </button>
                        <button type="button" class="btn btn--danger" on:click=on_reject>
                            "Reject"
                        </button>
                        <button type="button" class="btn btn--primary" on:click=on_confirm>
                            "Confirm"
                        </button>
                    </div>
                </div>
            </div>
        </Show>
    }
}
