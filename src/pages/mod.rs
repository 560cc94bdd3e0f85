//! Public Pages
//!
//! One component per route of the guest-facing site.

mod gallery;
mod gifts;
mod home;
mod info;
mod rsvp;
mod story;
mod timeline;

pub use gallery::GalleryPage;
pub use gifts::GiftsPage;
pub use home::HomePage;
pub use info::InfoPage;
pub use rsvp::RsvpPage;
pub use story::StoryPage;
pub use timeline::TimelinePage;

use leptos::prelude::*;

/// Title, accent divider and tagline shared by every page
#[component]
fn PageHeader(title: &'static str, tagline: &'static str) -> impl IntoView {
    view! {
        <header class="page-header">
            <h1 class="page-title">{title}</h1>
            <div class="page-divider" />
            <p class="page-tagline">{tagline}</p>
        </header>
    }
}

#[component]
fn Loading() -> impl IntoView {
    view! { <div class="page-loading">"Loading..."</div> }
}
