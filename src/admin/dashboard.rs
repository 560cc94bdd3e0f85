//! Admin Dashboard
//!
//! Sidebar of content tabs plus the demo-content tools.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_navigate;
use leptos_router::NavigateOptions;

use super::tabs::{GalleryTab, GiftsTab, HomeTab, InfoTab, RsvpTab, StoryTab, TimelineTab};
use crate::api::LOGIN_ROUTE;
use crate::context::{use_api, use_app_context};
use crate::notify;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdminTab {
    Home,
    Story,
    Info,
    Timeline,
    Gallery,
    Gifts,
    Rsvp,
}

impl AdminTab {
    pub const ALL: [AdminTab; 7] = [
        AdminTab::Home,
        AdminTab::Story,
        AdminTab::Info,
        AdminTab::Timeline,
        AdminTab::Gallery,
        AdminTab::Gifts,
        AdminTab::Rsvp,
    ];

    pub fn label(self) -> &'static str {
        match self {
            AdminTab::Home => "Home Content",
            AdminTab::Story => "Story",
            AdminTab::Info => "Information",
            AdminTab::Timeline => "Timeline",
            AdminTab::Gallery => "Gallery",
            AdminTab::Gifts => "Gifts",
            AdminTab::Rsvp => "RSVPs",
        }
    }
}

#[component]
pub fn Dashboard() -> impl IntoView {
    let api = use_api();
    let ctx = use_app_context();
    let navigate = use_navigate();
    let (active, set_active) = signal(AdminTab::Home);
    let (busy, set_busy) = signal(false);

    let seed_api = api.clone();
    let clear_api = api.clone();

    let logout = move |_| {
        api.logout();
        navigate(LOGIN_ROUTE, NavigateOptions::default());
    };

    let seed = move |_| {
        let api = seed_api.clone();
        set_busy.set(true);
        spawn_local(async move {
            match api.seed_demo_content().await {
                Ok(()) => {
                    ctx.reload();
                    notify::alert("Demo content created successfully!");
                }
                Err(e) => notify::report("seeding demo content", &e),
            }
            set_busy.set(false);
        });
    };

    let clear = move |_| {
        let api = clear_api.clone();
        let confirmed = web_sys::window()
            .and_then(|w| w.confirm_with_message("Remove all demo content? This cannot be undone.").ok())
            .unwrap_or(false);
        if !confirmed {
            return;
        }
        set_busy.set(true);
        spawn_local(async move {
            match api.clear_demo_content().await {
                Ok(()) => {
                    ctx.reload();
                    notify::alert("Demo content removed.");
                }
                Err(e) => notify::report("clearing demo content", &e),
            }
            set_busy.set(false);
        });
    };

    view! {
        <div class="admin-layout">
            <aside class="admin-sidebar">
                <h2>"Admin Panel"</h2>
                <nav class="admin-tabs">
                    {AdminTab::ALL
                        .into_iter()
                        .map(|tab| view! {
                            <button
                                class="admin-tab"
                                class:active=move || active.get() == tab
                                on:click=move |_| set_active.set(tab)
                            >
                                {tab.label()}
                            </button>
                        })
                        .collect_view()}
                </nav>
                <div class="admin-tools">
                    <button class="btn-secondary" disabled=move || busy.get() on:click=seed>"Seed Demo Content"</button>
                    <button class="btn-secondary" disabled=move || busy.get() on:click=clear>"Clear Demo Content"</button>
                    <a class="btn-secondary" href="/" target="_blank">"View Site"</a>
                    <button class="btn-danger" on:click=logout>"Logout"</button>
                </div>
            </aside>
            <main class="admin-main">
                {move || {
                    // Remount the tab after seed/clear so it refetches
                    let _ = ctx.reload_trigger.get();
                    match active.get() {
                        AdminTab::Home => view! { <HomeTab /> }.into_any(),
                        AdminTab::Story => view! { <StoryTab /> }.into_any(),
                        AdminTab::Info => view! { <InfoTab /> }.into_any(),
                        AdminTab::Timeline => view! { <TimelineTab /> }.into_any(),
                        AdminTab::Gallery => view! { <GalleryTab /> }.into_any(),
                        AdminTab::Gifts => view! { <GiftsTab /> }.into_any(),
                        AdminTab::Rsvp => view! { <RsvpTab /> }.into_any(),
                    }
                }}
            </main>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tab_labels() {
        let labels: Vec<_> = AdminTab::ALL.iter().map(|t| t.label()).collect();
        assert_eq!(labels, ["Home Content", "Story", "Information", "Timeline", "Gallery", "Gifts", "RSVPs"]);
    }
}
