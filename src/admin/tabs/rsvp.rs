//! RSVP Tab
//!
//! Read-only table of guest responses.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::context::use_api;
use crate::models::Rsvp;

fn or_dash(value: Option<String>) -> String {
    value.filter(|v| !v.trim().is_empty()).unwrap_or_else(|| "-".to_string())
}

#[component]
pub fn RsvpTab() -> impl IntoView {
    let api = use_api();
    let (rsvps, set_rsvps) = signal(Vec::<Rsvp>::new());
    let (loading, set_loading) = signal(true);

    spawn_local(async move {
        match api.list_rsvps().await {
            Ok(loaded) => set_rsvps.set(loaded),
            Err(e) => tracing::error!("Error fetching RSVPs: {e}"),
        }
        set_loading.set(false);
    });

    let total_guests = move || rsvps.with(|list| list.iter().map(|r| r.num_attendees).sum::<u32>());

    view! {
        <section class="admin-section">
            <div class="admin-section-header">
                <h2>"RSVPs"</h2>
                <span class="admin-badge">{move || format!("{} responses, {} guests", rsvps.with(Vec::len), total_guests())}</span>
            </div>
            <Show when=move || !loading.get() fallback=|| view! { <p>"Loading..."</p> }>
                <Show
                    when=move || !rsvps.with(Vec::is_empty)
                    fallback=|| view! { <p class="empty-state">"No RSVPs yet."</p> }
                >
                    <table class="admin-table">
                        <thead>
                            <tr>
                                <th>"Name"</th>
                                <th>"Email"</th>
                                <th>"Attendees"</th>
                                <th>"Dietary Restrictions"</th>
                                <th>"Message"</th>
                                <th>"Date"</th>
                            </tr>
                        </thead>
                        <tbody>
                            {move || {
                                rsvps
                                    .get()
                                    .into_iter()
                                    .map(|rsvp| {
                                        let date = rsvp.created_date().to_string();
                                        view! {
                                            <tr>
                                                <td>{rsvp.guest_name}</td>
                                                <td>{rsvp.email}</td>
                                                <td>{rsvp.num_attendees}</td>
                                                <td>{or_dash(rsvp.dietary_restrictions)}</td>
                                                <td>{or_dash(rsvp.message)}</td>
                                                <td>{date}</td>
                                            </tr>
                                        }
                                    })
                                    .collect_view()
                            }}
                        </tbody>
                    </table>
                </Show>
            </Show>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_cells_show_dash() {
        assert_eq!(or_dash(None), "-");
        assert_eq!(or_dash(Some("  ".into())), "-");
        assert_eq!(or_dash(Some("Vegan".into())), "Vegan");
    }
}
