//! Provider tour list with edit links and delete actions.

#[cfg(test)]
#[path = "tour_table_test.rs"]
mod tour_table_test;

use leptos::prelude::*;
use leptos_router::components::A;

use crate::net::types::{Location, Tour};
use crate::util::format::{format_discount, format_price, format_rating};

/// `"Name, Country"`, skipping whichever half is blank.
pub fn location_label(location: &Location) -> String {
    [location.name.trim(), location.country.trim()]
        .into_iter()
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(", ")
}

pub fn edit_href(tour_id: &str) -> String {
    format!("/dashboard/tours/{tour_id}")
}

/// Table of tours. `deleting` holds the id of the row whose delete is in flight.
#[component]
pub fn TourTable(
    #[prop(into)] tours: Signal<Vec<Tour>>,
    #[prop(into)] deleting: Signal<Option<String>>,
    on_delete: Callback<String>,
) -> impl IntoView {
    view! {
        <Show
            when=move || !tours.with(Vec::is_empty)
            fallback=|| view! { <p class="empty-state">"No tours yet. Create your first one."</p> }
        >
            <table class="data-table">
                <thead>
                    <tr>
                        <th>"Tour"</th>
                        <th>"Category"</th>
                        <th>"Duration"</th>
                        <th>"Location"</th>
                        <th>"Price"</th>
                        <th>"Rating"</th>
                        <th></th>
                    </tr>
                </thead>
                <tbody>
                    <For
                        each=move || tours.get()
                        key=|tour| tour.id.clone()
                        children=move |tour: Tour| view! { <TourRow tour=tour deleting=deleting on_delete=on_delete/> }
                    />
                </tbody>
            </table>
        </Show>
    }
}

#[component]
fn TourRow(tour: Tour, deleting: Signal<Option<String>>, on_delete: Callback<String>) -> impl IntoView {
    let id = StoredValue::new(tour.id.clone());
    let is_deleting = move || deleting.with(|d| d.as_deref() == Some(id.get_value().as_str()));
    let thumbnail = tour.thumbnail().map(str::to_owned);
    let discount = format_discount(&tour.price);

    view! {
        <tr>
            <td class="data-table__title">
                {thumbnail.map(|src| view! { <img class="data-table__thumb" src=src alt=""/> })}
                <div>
                    <div class="data-table__name">{tour.title.clone()}</div>
                    <div class="data-table__meta">"ID: " {tour.id.clone()}</div>
                </div>
            </td>
            <td><span class="badge">{tour.category.clone()}</span></td>
            <td>{tour.duration.clone()}</td>
            <td>{location_label(&tour.location)}</td>
            <td>
                {format_price(&tour.price)}
                {discount.map(|d| view! { <span class="badge badge--discount">{d}</span> })}
            </td>
            <td>{format_rating(tour.rating)}</td>
            <td class="data-table__actions">
                <A href=edit_href(&tour.id)>"Edit"</A>
                <button
                    class="btn btn--danger"
                    disabled=is_deleting
                    on:click=move |_| on_delete.run(id.get_value())
                >
                    {move || if is_deleting() { "Deleting..." } else { "Delete" }}
                </button>
            </td>
        </tr>
    }
}
