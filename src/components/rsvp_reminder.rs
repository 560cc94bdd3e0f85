//! RSVP Reminder Popup
//!
//! Nudges guests towards the RSVP page until they dismiss it or answer.

use leptos::prelude::*;
use leptos_router::hooks::use_location;

use crate::store::{store_dismiss_rsvp_reminder, use_site_store, SiteStateStoreFields};

#[component]
pub fn RsvpReminder() -> impl IntoView {
    let store = use_site_store();
    let pathname = use_location().pathname;

    let visible = move || !store.rsvp_reminder_dismissed().get() && pathname.get() != "/rsvp";
    let dismiss = move || store_dismiss_rsvp_reminder(&store);

    view! {
        <Show when=visible>
            <div class="rsvp-reminder">
                <div class="rsvp-reminder-header">
                    <span class="rsvp-reminder-icon">"✉"</span>
                    <button type="button" class="rsvp-reminder-close" aria-label="Close" on:click=move |_| dismiss()>
                        "×"
                    </button>
                </div>
                <p class="rsvp-reminder-text">"Don't forget to confirm your attendance!"</p>
                <a href="/rsvp" class="rsvp-reminder-link">"RSVP now"</a>
                <label class="rsvp-reminder-done">
                    <input type="checkbox" on:change=move |_| dismiss() />
                    <span>"I've already RSVP'd"</span>
                </label>
            </div>
        </Show>
    }
}
