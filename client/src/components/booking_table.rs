//! Booking list with per-row cancellation.

#[cfg(test)]
#[path = "booking_table_test.rs"]
mod booking_table_test;

use leptos::prelude::*;

use crate::net::types::{Booking, BookingStatus};

/// Only bookings that are still live can be cancelled.
pub fn can_cancel(booking: &Booking) -> bool {
    booking.status != BookingStatus::Cancelled
}

/// `"2025-03-01 10:00"`, or just the date when no hour is set.
pub fn slot_label(booking: &Booking) -> String {
    if booking.hour.is_empty() {
        booking.date.clone()
    } else {
        format!("{} {}", booking.date, booking.hour)
    }
}

pub fn status_class(status: BookingStatus) -> &'static str {
    match status {
        BookingStatus::Pending => "badge badge--pending",
        BookingStatus::Confirmed => "badge badge--confirmed",
        BookingStatus::Cancelled => "badge badge--cancelled",
    }
}

#[component]
pub fn BookingTable(#[prop(into)] bookings: Signal<Vec<Booking>>, on_cancel: Callback<String>) -> impl IntoView {
    view! {
        <Show
            when=move || !bookings.with(Vec::is_empty)
            fallback=|| view! { <p class="empty-state">"No bookings yet."</p> }
        >
            <table class="data-table">
                <thead>
                    <tr>
                        <th>"Booking"</th>
                        <th>"Tour"</th>
                        <th>"Slot"</th>
                        <th>"People"</th>
                        <th>"Total"</th>
                        <th>"Status"</th>
                        <th></th>
                    </tr>
                </thead>
                <tbody>
                    <For
                        each=move || bookings.get()
                        key=|booking| format!("{}:{}", booking.id, booking.status.label())
                        children=move |booking: Booking| {
                            let id = booking.id.clone();
                            let cancellable = can_cancel(&booking);
                            view! {
                                <tr>
                                    <td class="data-table__meta">{booking.id.clone()}</td>
                                    <td>{booking.tour_id.clone()}</td>
                                    <td>{slot_label(&booking)}</td>
                                    <td>{booking.number_of_people}</td>
                                    <td>{format!("€{:.2}", booking.total_price)}</td>
                                    <td>
                                        <span class=status_class(booking.status)>{booking.status.label()}</span>
                                    </td>
                                    <td class="data-table__actions">
                                        {cancellable.then(|| view! {
                                            <button class="btn btn--danger" on:click=move |_| on_cancel.run(id.clone())>
                                                "Cancel"
                                            </button>
                                        })}
                                    </td>
                                </tr>
                            }
                        }
                    />
                </tbody>
            </table>
        </Show>
    }
}
