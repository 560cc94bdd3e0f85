//! Gift Card Component

use leptos::prelude::*;

use crate::context::use_api;
use crate::media::normalize_image_url;
use crate::models::GiftItem;

#[component]
pub fn GiftCard(gift: GiftItem) -> impl IntoView {
    let base = use_api().base_url().to_string();

    if gift.is_external() {
        view! {
            <div class="gift-card gift-card-external">
                {gift.image_url.filter(|u| !u.is_empty()).map(|url| view! {
                    <div class="gift-card-image">
                        <img src=normalize_image_url(&url, &base) alt=gift.title.clone() />
                    </div>
                })}
                <div class="gift-card-body">
                    <h3>{gift.title.clone()}</h3>
                    {gift.description.map(|d| view! { <p>{d}</p> })}
                    <a href=gift.link target="_blank" rel="noopener noreferrer" class="gift-card-link">
                        "View Gift ↗"
                    </a>
                </div>
            </div>
        }
        .into_any()
    } else {
        view! {
            <div class="gift-card gift-card-custom">
                <div class="gift-card-icon">"🎁"</div>
                <h3>{gift.title}</h3>
                {gift.description.map(|d| view! { <p class="gift-card-description">{d}</p> })}
                <a href=gift.link target="_blank" rel="noopener noreferrer" class="gift-card-link">
                    "Learn More ↗"
                </a>
            </div>
        }
        .into_any()
    }
}
