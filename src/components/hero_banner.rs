//! Hero Banner Component
//!
//! Full-height cover with the couple's names, subtitle and countdown.

use std::time::Duration;

use chrono::{NaiveDate, Utc};
use leptos::prelude::*;

use crate::context::use_api;
use crate::countdown::time_left;
use crate::media::normalize_image_url;
use crate::theme::use_theme;

const DEFAULT_HERO_IMAGE: &str = "https://images.unsplash.com/photo-1519741497674-611481863552?w=1920&q=80";

#[component]
pub fn HeroBanner(
    hero_text: Option<String>,
    hero_image_url: Option<String>,
    subtitle: Option<String>,
    wedding_date: Option<NaiveDate>,
) -> impl IntoView {
    let theme = use_theme();
    let base = use_api().base_url().to_string();

    let image = hero_image_url
        .filter(|url| !url.trim().is_empty())
        .map(|url| normalize_image_url(&url, &base))
        .unwrap_or_else(|| DEFAULT_HERO_IMAGE.to_string());

    view! {
        <section class="hero">
            <div class="hero-background" style:background-image=format!("url({image})") />
            <div class="hero-overlay" />
            <div class="hero-content">
                <h1 class="hero-title" style:color=move || theme.get().text_color>
                    {hero_text.unwrap_or_else(|| "John & Jane".to_string())}
                </h1>
                <div
                    class="hero-divider"
                    style:background=move || format!("linear-gradient(90deg, transparent, {}, transparent)", theme.get().accent_color)
                />
                <p class="hero-subtitle">{subtitle.unwrap_or_else(|| "Join us for our special day".to_string())}</p>
                {wedding_date.map(|date| view! { <CountdownTimer wedding_date=date /> })}
            </div>
        </section>
    }
}

/// Days/hours/minutes/seconds until the wedding, ticking every second
#[component]
pub fn CountdownTimer(wedding_date: NaiveDate) -> impl IntoView {
    let (left, set_left) = signal(time_left(wedding_date, Utc::now()));

    match set_interval_with_handle(
        move || set_left.set(time_left(wedding_date, Utc::now())),
        Duration::from_secs(1),
    ) {
        Ok(handle) => on_cleanup(move || handle.clear()),
        Err(e) => tracing::warn!("countdown timer unavailable: {e:?}"),
    }

    view! {
        <div class="countdown">
            {move || {
                left.get()
                    .units()
                    .into_iter()
                    .map(|(label, value)| view! {
                        <div class="countdown-unit">
                            <div class="countdown-value">{value}</div>
                            <div class="countdown-label">{label}</div>
                        </div>
                    })
                    .collect_view()
            }}
        </div>
    }
}
