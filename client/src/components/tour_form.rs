//! Tour authoring form.
//!
//! SYSTEM CONTEXT
//! ==============
//! Pure view over a `TourFormState` signal owned by `TourEditorPage`. Every
//! input writes its raw string back into the state; parsing and validation
//! happen on submit, and the resulting field errors are rendered next to the
//! inputs they belong to.

use leptos::prelude::*;
use leptos_router::components::A;

use super::image_review_dialog::ImageReviewDialog;
#[cfg(feature = "hydrate")]
use super::notice_stack::push_notice;
use crate::net::types::DiscountKind;
use crate::state::tour_form::{FieldKey, StopInput, TourFormState, CATEGORIES, COUNTRIES, LANGUAGES};
#[cfg(feature = "hydrate")]
use crate::state::ui::NoticeKind;
use crate::state::ui::UiState;
use crate::util::files::{ImageFile, SelectedFile};
use crate::util::preview::ObjectUrlPreviews;

pub type TourForm = TourFormState<SelectedFile>;

/// Local because picked browser files are not `Send`.
pub type FormSignal = RwSignal<TourForm, LocalStorage>;

#[component]
pub fn TourFormView(
    form: FormSignal,
    #[prop(into)] busy: Signal<bool>,
    submit_label: &'static str,
    on_submit: Callback<()>,
) -> impl IntoView {
    let on_form_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if !busy.get_untracked() {
            on_submit.run(());
        }
    };
    let error_summary = move || {
        form.with(|f| (!f.errors.is_empty()).then(|| view! { <p class="form-alert">{f.errors.to_string()}</p> }))
    };

    view! {
        <form class="tour-form" on:submit=on_form_submit novalidate=true>
            {error_summary}

            <section class="form-section">
                <h2>"Basics"</h2>
                <TextField form=form label="Title" error=FieldKey::Title get={|f| f.title.clone()} set={|f, v| f.title = v}/>
                <label class="field">
                    <span>"Category"</span>
                    <select
                        prop:value=move || form.with(|f| f.category.clone())
                        on:change=move |ev| form.update(|f| f.category = event_target_value(&ev))
                    >
                        <option value="">"Select a category"</option>
                        {CATEGORIES.iter().map(|&c| view! { <option value=c>{c}</option> }).collect_view()}
                    </select>
                    {field_error(form, FieldKey::Category)}
                </label>
                <TextField
                    form=form
                    label="Description"
                    multiline=true
                    error=FieldKey::Description
                    get={|f| f.description.clone()}
                    set={|f, v| f.description = v}
                />
                <TextField
                    form=form
                    label="Duration"
                    placeholder="2 horas"
                    error=FieldKey::Duration
                    get={|f| f.duration.clone()}
                    set={|f, v| f.duration = v}
                />
                <TextField
                    form=form
                    label="Meeting point"
                    error=FieldKey::MeetingPoint
                    get={|f| f.meeting_point.clone()}
                    set={|f, v| f.meeting_point = v}
                />
            </section>

            <PriceSection form=form/>

            <section class="form-section">
                <h2>"Location"</h2>
                <TextField
                    form=form
                    label="City"
                    error=FieldKey::LocationName
                    get={|f| f.location_name.clone()}
                    set={|f, v| f.location_name = v}
                />
                <label class="field">
                    <span>"Country"</span>
                    <select
                        prop:value=move || form.with(|f| f.location_country.clone())
                        on:change=move |ev| form.update(|f| f.location_country = event_target_value(&ev))
                    >
                        <option value="">"Select a country"</option>
                        {COUNTRIES.iter().map(|&c| view! { <option value=c>{c}</option> }).collect_view()}
                    </select>
                    {field_error(form, FieldKey::LocationCountry)}
                </label>
            </section>

            <section class="form-section">
                <h2>"Languages"</h2>
                <div class="check-grid">
                    {LANGUAGES
                        .iter()
                        .map(|&lang| {
                            view! {
                                <label class="check">
                                    <input
                                        type="checkbox"
                                        prop:checked=move || form.with(|f| f.languages.iter().any(|l| l == lang))
                                        on:change=move |_| form.update(|f| f.toggle_language(lang))
                                    />
                                    {lang}
                                </label>
                            }
                        })
                        .collect_view()}
                </div>
                {field_error(form, FieldKey::Languages)}
            </section>

            <StopsSection form=form/>
            <BlackoutsSection form=form/>
            <ImagesSection form=form/>

            <div class="form-actions">
                <A href="/dashboard/tours">"Cancel"</A>
                <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                    {move || if busy.get() { "Saving..." } else { submit_label }}
                </button>
            </div>
        </form>
        <ImageReviewDialog form=form/>
    }
}

/// Message for `key` from the last validation, if any.
fn field_error(form: FormSignal, key: FieldKey) -> impl IntoView {
    move || form.with(|f| f.errors.get(key).map(|message| view! { <p class="field-error">{message.to_owned()}</p> }))
}

#[component]
fn TextField(
    form: FormSignal,
    label: &'static str,
    get: fn(&TourForm) -> String,
    set: fn(&mut TourForm, String),
    #[prop(optional)] error: Option<FieldKey>,
    #[prop(optional)] placeholder: &'static str,
    #[prop(default = "text")] input_type: &'static str,
    #[prop(optional)] multiline: bool,
) -> impl IntoView {
    let value = move || form.with(get);
    let on_input = move |ev: leptos::ev::Event| {
        let raw = event_target_value(&ev);
        form.update(|f| set(f, raw));
    };
    let control = if multiline {
        leptos::either::Either::Left(view! {
            <textarea rows="4" placeholder=placeholder prop:value=value on:input=on_input></textarea>
        })
    } else {
        leptos::either::Either::Right(view! {
            <input type=input_type placeholder=placeholder prop:value=value on:input=on_input/>
        })
    };

    view! {
        <label class="field">
            <span>{label}</span>
            {control}
            {error.map(|key| field_error(form, key))}
        </label>
    }
}

// =============================================================================
// PRICE
// =============================================================================

#[component]
fn PriceSection(form: FormSignal) -> impl IntoView {
    let discount_on = move || form.with(|f| f.discount_enabled);

    view! {
        <section class="form-section">
            <h2>"Price"</h2>
            <label class="check">
                <input
                    type="checkbox"
                    prop:checked=move || form.with(|f| f.based_on_tips)
                    on:change=move |ev| form.update(|f| f.based_on_tips = event_target_checked(&ev))
                />
                "Tips based (free tour)"
            </label>
            <TextField
                form=form
                label="Price (€)"
                input_type="number"
                error=FieldKey::Price
                get={|f| f.price_value.clone()}
                set={|f, v| f.price_value = v}
            />
            <label class="check">
                <input
                    type="checkbox"
                    prop:checked=discount_on
                    on:change=move |ev| form.update(|f| f.discount_enabled = event_target_checked(&ev))
                />
                "Offer a discount"
            </label>
            <Show when=discount_on>
                <div class="form-row">
                    <label class="field">
                        <span>"Discount type"</span>
                        <select
                            prop:value=move || form.with(|f| f.discount_kind.clone())
                            on:change=move |ev| form.update(|f| f.discount_kind = event_target_value(&ev))
                        >
                            <option value="">"Select a type"</option>
                            <option value={DiscountKind::Percentage.as_str()}>"Percentage"</option>
                            <option value={DiscountKind::Fixed.as_str()}>"Fixed amount"</option>
                        </select>
                        {field_error(form, FieldKey::DiscountKind)}
                    </label>
                    <TextField
                        form=form
                        label="Amount"
                        input_type="number"
                        error=FieldKey::DiscountAmount
                        get={|f| f.discount_amount.clone()}
                        set={|f, v| f.discount_amount = v}
                    />
                </div>
                <TextField
                    form=form
                    label="Discount description"
                    get={|f| f.discount_description.clone()}
                    set={|f, v| f.discount_description = v}
                />
                <div class="form-row">
                    <TextField
                        form=form
                        label="Valid from"
                        input_type="date"
                        get={|f| f.discount_valid_from.clone()}
                        set={|f, v| f.discount_valid_from = v}
                    />
                    <TextField
                        form=form
                        label="Valid to"
                        input_type="date"
                        error=FieldKey::DiscountDates
                        get={|f| f.discount_valid_to.clone()}
                        set={|f, v| f.discount_valid_to = v}
                    />
                </div>
            </Show>
        </section>
    }
}

// =============================================================================
// STOPS
// =============================================================================

#[component]
fn StopsSection(form: FormSignal) -> impl IntoView {
    // Rows are rebuilt only when the count changes, so typing keeps focus.
    let count = Memo::new(move |_| form.with(|f| f.stops.len()));

    view! {
        <section class="form-section">
            <div class="form-section__header">
                <h2>"Stops"</h2>
                <button type="button" class="btn btn--ghost" on:click=move |_| form.update(TourForm::add_stop)>
                    "Add stop"
                </button>
            </div>
            {move || (0..count.get()).map(|index| view! { <StopRow form=form index=index/> }).collect_view()}
        </section>
    }
}

#[component]
fn StopRow(form: FormSignal, index: usize) -> impl IntoView {
    view! {
        <div class="stop-row">
            {stop_input(form, index, "Name", FieldKey::StopName(index), |s| s.name.clone(), |s, v| s.name = v)}
            {stop_input(form, index, "Latitude", FieldKey::StopLat(index), |s| s.lat.clone(), |s, v| s.lat = v)}
            {stop_input(form, index, "Longitude", FieldKey::StopLng(index), |s| s.lng.clone(), |s, v| s.lng = v)}
            <label class="field">
                <span>"Address"</span>
                <input
                    type="text"
                    prop:value=move || form.with(|f| f.stops.get(index).map(|s| s.address.clone()).unwrap_or_default())
                    on:input=move |ev| {
                        let raw = event_target_value(&ev);
                        form.update(|f| {
                            if let Some(stop) = f.stops.get_mut(index) {
                                stop.address = raw;
                            }
                        });
                    }
                />
            </label>
            <button type="button" class="btn btn--danger" on:click=move |_| form.update(|f| f.remove_stop(index))>
                "Remove"
            </button>
        </div>
    }
}

fn stop_input(
    form: FormSignal,
    index: usize,
    label: &'static str,
    key: FieldKey,
    get: fn(&StopInput) -> String,
    set: fn(&mut StopInput, String),
) -> impl IntoView {
    view! {
        <label class="field">
            <span>{label}</span>
            <input
                type="text"
                prop:value=move || form.with(|f| f.stops.get(index).map(get).unwrap_or_default())
                on:input=move |ev| {
                    let raw = event_target_value(&ev);
                    form.update(|f| {
                        if let Some(stop) = f.stops.get_mut(index) {
                            set(stop, raw);
                        }
                    });
                }
            />
            {field_error(form, key)}
        </label>
    }
}

// =============================================================================
// BLACKOUT DATES
// =============================================================================

#[component]
fn BlackoutsSection(form: FormSignal) -> impl IntoView {
    let count = Memo::new(move |_| form.with(|f| f.blackouts.len()));

    view! {
        <section class="form-section">
            <div class="form-section__header">
                <h2>"Unavailable dates"</h2>
                <button type="button" class="btn btn--ghost" on:click=move |_| form.update(TourForm::add_blackout)>
                    "Add date"
                </button>
            </div>
            {move || (0..count.get()).map(|index| view! { <BlackoutRow form=form index=index/> }).collect_view()}
        </section>
    }
}

#[component]
fn BlackoutRow(form: FormSignal, index: usize) -> impl IntoView {
    let pending_hour = RwSignal::new(String::new());
    let hours = move || form.with(|f| f.blackouts.get(index).map(|b| b.hours.clone()).unwrap_or_default());

    let on_add_hour = move |_| {
        let hour = pending_hour.get_untracked();
        let mut added = false;
        form.update(|f| added = f.add_hour(index, &hour));
        if added {
            pending_hour.set(String::new());
        }
    };

    view! {
        <div class="blackout-row">
            <label class="field">
                <span>"Date"</span>
                <input
                    type="date"
                    prop:value=move || form.with(|f| f.blackouts.get(index).map(|b| b.date.clone()).unwrap_or_default())
                    on:input=move |ev| {
                        let raw = event_target_value(&ev);
                        form.update(|f| {
                            if let Some(blackout) = f.blackouts.get_mut(index) {
                                blackout.date = raw;
                            }
                        });
                    }
                />
                {field_error(form, FieldKey::BlackoutDate(index))}
            </label>
            <div class="chip-list">
                {move || {
                    hours()
                        .into_iter()
                        .map(|hour| {
                            let label = hour.clone();
                            view! {
                                <span class="chip">
                                    {label}
                                    <button
                                        type="button"
                                        class="chip__remove"
                                        on:click=move |_| form.update(|f| f.remove_hour(index, &hour))
                                    >
                                        "×"
                                    </button>
                                </span>
                            }
                        })
                        .collect_view()
                }}
            </div>
            <div class="form-row">
                <input
                    type="time"
                    prop:value=move || pending_hour.get()
                    on:input=move |ev| pending_hour.set(event_target_value(&ev))
                />
                <button type="button" class="btn btn--ghost" on:click=on_add_hour>
                    "Add hour"
                </button>
                <button type="button" class="btn btn--danger" on:click=move |_| form.update(|f| f.remove_blackout(index))>
                    "Remove date"
                </button>
            </div>
        </div>
    }
}

// =============================================================================
// IMAGES
// =============================================================================

#[component]
fn ImagesSection(form: FormSignal) -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();

    let on_files = move |ev: leptos::ev::Event| {
        #[cfg(feature = "hydrate")]
        {
            let input: web_sys::HtmlInputElement = event_target(&ev);
            let files = crate::util::files::files_from_input(&input);
            let mut rejected = Vec::new();
            form.update(|f| rejected = f.stage_files(files, &ObjectUrlPreviews));
            // Clear so picking the same file again fires `change`.
            input.set_value("");
            for reason in rejected {
                push_notice(ui, NoticeKind::Error, "Image skipped", reason.to_string());
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (ev, ui);
        }
    };

    let existing = move || form.with(|f| f.existing_images.iter().map(|i| i.image_url.clone()).collect::<Vec<_>>());
    let staged = move || {
        form.with(|f| f.images().iter().map(|i| (i.preview.clone(), ImageFile::name(&i.file))).collect::<Vec<_>>())
    };

    view! {
        <section class="form-section">
            <h2>"Images"</h2>
            <input type="file" accept="image/*" multiple=true on:change=on_files/>
            <div class="image-grid">
                {move || {
                    existing()
                        .into_iter()
                        .enumerate()
                        .map(|(index, url)| {
                            view! {
                                <div class="image-grid__item">
                                    <img src=url alt=""/>
                                    <button
                                        type="button"
                                        class="image-grid__remove"
                                        on:click=move |_| form.update(|f| f.remove_existing_image(index))
                                    >
                                        "×"
                                    </button>
                                </div>
                            }
                        })
                        .collect_view()
                }}
                {move || {
                    staged()
                        .into_iter()
                        .enumerate()
                        .map(|(index, (preview, name))| {
                            view! {
                                <div class="image-grid__item image-grid__item--new">
                                    {match preview {
                                        Some(src) => leptos::either::Either::Left(view! { <img src=src alt=name/> }),
                                        None => leptos::either::Either::Right(view! { <span>{name}</span> }),
                                    }}
                                    <button
                                        type="button"
                                        class="image-grid__remove"
                                        on:click=move |_| form.update(|f| f.remove_image(index, &ObjectUrlPreviews))
                                    >
                                        "×"
                                    </button>
                                </div>
                            }
                        })
                        .collect_view()
                }}
            </div>
        </section>
    }
}
