//! Footer Component

use chrono::Datelike;
use leptos::prelude::*;

use crate::components::navbar::SITE_TITLE;

#[component]
pub fn Footer() -> impl IntoView {
    let year = chrono::Utc::now().year();

    view! {
        <footer class="footer">
            <div class="footer-inner">
                <p class="footer-title">{SITE_TITLE}</p>
                <p class="footer-heart">"♥"</p>
                <p class="footer-copy">{format!("© {year} All rights reserved")}</p>
            </div>
        </footer>
    }
}
