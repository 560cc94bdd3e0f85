//! RSVP Form Component
//!
//! Guest response form with a thank-you modal on success.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::context::use_api;
use crate::models::RsvpInput;
use crate::notify;
use crate::store::{store_dismiss_rsvp_reminder, use_site_store};

#[component]
pub fn RsvpForm() -> impl IntoView {
    let api = use_api();
    let store = use_site_store();

    let (guest_name, set_guest_name) = signal(String::new());
    let (email, set_email) = signal(String::new());
    let (num_attendees, set_num_attendees) = signal(1u32);
    let (dietary, set_dietary) = signal(String::new());
    let (message, set_message) = signal(String::new());
    let (submitting, set_submitting) = signal(false);
    let (show_success, set_show_success) = signal(false);

    let reset = move || {
        set_guest_name.set(String::new());
        set_email.set(String::new());
        set_num_attendees.set(1);
        set_dietary.set(String::new());
        set_message.set(String::new());
    };

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if submitting.get_untracked() {
            return;
        }
        let input = RsvpInput {
            guest_name: guest_name.get_untracked(),
            email: email.get_untracked(),
            num_attendees: num_attendees.get_untracked(),
            dietary_restrictions: Some(dietary.get_untracked()),
            message: Some(message.get_untracked()),
        };
        let api = api.clone();
        set_submitting.set(true);
        spawn_local(async move {
            match api.submit_rsvp(&input).await {
                Ok(rsvp) => {
                    tracing::info!(id = rsvp.id, "RSVP received");
                    store_dismiss_rsvp_reminder(&store);
                    set_show_success.set(true);
                    reset();
                }
                Err(e) if e.is_validation() => notify::alert(&e.to_string()),
                Err(e) => {
                    tracing::error!("Error submitting RSVP: {e}");
                    notify::alert("There was an error submitting your RSVP. Please try again.");
                }
            }
            set_submitting.set(false);
        });
    };

    view! {
        <form class="rsvp-form" on:submit=on_submit>
            <div class="form-grid">
                <div class="form-field">
                    <label>"Guest Name *"</label>
                    <input
                        type="text"
                        required
                        prop:value=move || guest_name.get()
                        on:input=move |ev| set_guest_name.set(event_target_value(&ev))
                    />
                </div>
                <div class="form-field">
                    <label>"Email *"</label>
                    <input
                        type="email"
                        required
                        prop:value=move || email.get()
                        on:input=move |ev| set_email.set(event_target_value(&ev))
                    />
                </div>
                <div class="form-field">
                    <label>"Number of Attendees *"</label>
                    <input
                        type="number"
                        min="1"
                        required
                        prop:value=move || num_attendees.get().to_string()
                        on:input=move |ev| set_num_attendees.set(event_target_value(&ev).parse().unwrap_or(1))
                    />
                </div>
                <div class="form-field">
                    <label>"Dietary Restrictions"</label>
                    <input
                        type="text"
                        placeholder="e.g., Vegetarian, Gluten-free"
                        prop:value=move || dietary.get()
                        on:input=move |ev| set_dietary.set(event_target_value(&ev))
                    />
                </div>
            </div>
            <div class="form-field">
                <label>"Message"</label>
                <textarea
                    rows="4"
                    placeholder="Share your thoughts or special requests..."
                    prop:value=move || message.get()
                    on:input=move |ev| set_message.set(event_target_value(&ev))
                />
            </div>
            <button type="submit" class="btn-primary" disabled=move || submitting.get()>
                {move || if submitting.get() { "Submitting..." } else { "Submit RSVP" }}
            </button>
        </form>

        <Show when=move || show_success.get()>
            <div class="modal-backdrop" on:click=move |_| set_show_success.set(false)>
                <div class="modal rsvp-success" on:click=|ev| ev.stop_propagation()>
                    <div class="rsvp-success-heart">"♥"</div>
                    <h3>"Thank You!"</h3>
                    <p>"We've received your RSVP and can't wait to celebrate with you!"</p>
                    <button class="btn-primary" on:click=move |_| set_show_success.set(false)>"Close"</button>
                </div>
            </div>
        </Show>
    }
}
