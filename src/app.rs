//! Wedding Site App
//!
//! Root component: context providers, theme loading and the route table.

use leptos::prelude::*;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::hooks::use_location;
use leptos_router::path;
use reactive_stores::Store;

use crate::admin::{AdminGate, Dashboard, LoginPage};
use crate::api::ApiClient;
use crate::components::{Footer, Navbar, RsvpReminder};
use crate::config::AppConfig;
use crate::context::AppContext;
use crate::pages::{GalleryPage, GiftsPage, HomePage, InfoPage, RsvpPage, StoryPage, TimelinePage};
use crate::store::SiteState;
use crate::theme::{use_theme, ThemePhase, ThemeProvider};

#[component]
pub fn App(config: AppConfig) -> impl IntoView {
    // Provide context to all children
    provide_context(ApiClient::new(&config));
    provide_context(AppContext::new(signal(0u32)));
    provide_context(Store::new(SiteState::new()));

    view! {
        <ThemeProvider>
            <Router>
                <Shell />
            </Router>
        </ThemeProvider>
    }
}

/// Public chrome around the routed page; the admin area goes without it
#[component]
fn Shell() -> impl IntoView {
    let theme = use_theme();
    let pathname = use_location().pathname;
    let public = move || !pathname.get().starts_with("/admin");

    view! {
        <div class="site" class:theme-loading=move || theme.phase() == ThemePhase::Loading>
            <Show when=public>
                <Navbar />
            </Show>
            <main class="site-main">
                <Routes fallback=|| view! { <NotFound /> }>
                    <Route path=path!("/") view=HomePage />
                    <Route path=path!("/story") view=StoryPage />
                    <Route path=path!("/info") view=InfoPage />
                    <Route path=path!("/timeline") view=TimelinePage />
                    <Route path=path!("/gallery") view=GalleryPage />
                    <Route path=path!("/gifts") view=GiftsPage />
                    <Route path=path!("/rsvp") view=RsvpPage />
                    <Route path=path!("/admin/login") view=LoginPage />
                    <Route path=path!("/admin") view=|| view! { <AdminGate><Dashboard /></AdminGate> } />
                </Routes>
            </main>
            <Show when=public>
                <Footer />
                <RsvpReminder />
            </Show>
        </div>
    }
}

#[component]
fn NotFound() -> impl IntoView {
    view! {
        <div class="page not-found">
            <h1>"Page not found"</h1>
            <a href="/">"Back to the home page"</a>
        </div>
    }
}
