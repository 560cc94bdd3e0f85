//! Home Page

use leptos::prelude::*;
use leptos::task::spawn_local;

use super::Loading;
use crate::components::HeroBanner;
use crate::context::use_api;
use crate::store::{store_set_home, use_site_store, SiteStateStoreFields};

#[component]
pub fn HomePage() -> impl IntoView {
    let api = use_api();
    let store = use_site_store();
    let (loading, set_loading) = signal(store.home().get_untracked().is_none());

    spawn_local(async move {
        match api.get_home_content().await {
            Ok(home) => store_set_home(&store, home),
            Err(e) => tracing::error!("Error fetching home content: {e}"),
        }
        set_loading.set(false);
    });

    view! {
        <div class="home-page">
            <Show when=move || !loading.get() fallback=|| view! { <Loading /> }>
                {move || {
                    let home = store.home().get().unwrap_or_default();
                    view! {
                        <HeroBanner
                            hero_text=home.hero_text.filter(|t| !t.is_empty())
                            hero_image_url=home.hero_image_url
                            subtitle=home.subtitle.filter(|s| !s.is_empty())
                            wedding_date=home.wedding_date
                        />
                    }
                }}
            </Show>
        </div>
    }
}
