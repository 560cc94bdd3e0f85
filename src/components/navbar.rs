//! Navbar Component
//!
//! Themed top navigation with a slide-in menu on small screens.

use leptos::prelude::*;
use leptos_router::hooks::use_location;

use crate::theme::use_theme;

pub const SITE_TITLE: &str = "Bianca & Joel Wedding";

pub const NAV_LINKS: &[(&str, &str)] = &[
    ("/", "Home"),
    ("/story", "Our Story"),
    ("/info", "Information"),
    ("/timeline", "Timeline"),
    ("/gallery", "Gallery"),
    ("/gifts", "Gifts"),
    ("/rsvp", "RSVP"),
];

#[component]
pub fn Navbar() -> impl IntoView {
    let theme = use_theme();
    let pathname = use_location().pathname;
    let (menu_open, set_menu_open) = signal(false);

    let is_active = move |path: &str| pathname.get() == path;
    let link_color = move |path: &'static str| {
        let palette = theme.get();
        if is_active(path) {
            palette.accent_color
        } else {
            palette.navbar_text_color
        }
    };

    let links = move |class: &'static str| {
        NAV_LINKS
            .iter()
            .map(|&(path, label)| {
                view! {
                    <a
                        href=path
                        class=class
                        class:active=move || is_active(path)
                        style:color=move || link_color(path)
                        on:click=move |_| set_menu_open.set(false)
                    >
                        {label}
                    </a>
                }
            })
            .collect_view()
    };

    view! {
        <nav class="navbar" style:background-color=move || theme.get().navbar_color>
            <div class="navbar-inner">
                <a href="/" class="navbar-brand" style:color=move || theme.get().navbar_text_color>
                    {SITE_TITLE}
                </a>
                <div class="navbar-links">{links("nav-link")}</div>
                <button
                    class="navbar-toggle"
                    style:color=move || theme.get().navbar_text_color
                    on:click=move |_| set_menu_open.update(|open| *open = !*open)
                >
                    {move || if menu_open.get() { "✕" } else { "☰" }}
                </button>
            </div>
        </nav>

        <Show when=move || menu_open.get()>
            <div class="mobile-menu-backdrop" on:click=move |_| set_menu_open.set(false) />
            <div class="mobile-menu" style:background-color=move || theme.get().navbar_color>
                {links("mobile-nav-link")}
            </div>
        </Show>
    }
}
