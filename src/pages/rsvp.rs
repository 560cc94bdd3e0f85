//! RSVP Page

use leptos::prelude::*;

use super::PageHeader;
use crate::components::RsvpForm;

#[component]
pub fn RsvpPage() -> impl IntoView {
    view! {
        <div class="page rsvp-page">
            <PageHeader title="RSVP" tagline="Please let us know if you'll be joining us for our special day" />
            <RsvpForm />
        </div>
    }
}
