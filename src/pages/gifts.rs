//! Gift Registry Page

use leptos::prelude::*;
use leptos::task::spawn_local;

use super::{Loading, PageHeader};
use crate::components::GiftCard;
use crate::context::use_api;
use crate::models::GiftItem;

#[component]
pub fn GiftsPage() -> impl IntoView {
    let api = use_api();
    let (gifts, set_gifts) = signal(Vec::<GiftItem>::new());
    let (loading, set_loading) = signal(true);

    spawn_local(async move {
        match api.list_gift_items().await {
            Ok(mut loaded) => {
                loaded.sort_by_key(|g| g.order);
                set_gifts.set(loaded);
            }
            Err(e) => tracing::error!("Error fetching gift items: {e}"),
        }
        set_loading.set(false);
    });

    view! {
        <div class="page gifts-page">
            <PageHeader
                title="Gift Registry"
                tagline="Your presence is the greatest gift, but if you'd like to celebrate with us in another way, here are some ideas"
            />
            <Show when=move || !loading.get() fallback=|| view! { <Loading /> }>
                <Show
                    when=move || !gifts.with(Vec::is_empty)
                    fallback=|| view! { <p class="empty-state">"No gift items yet."</p> }
                >
                    <div class="gift-grid">
                        {move || gifts.get().into_iter().map(|gift| view! { <GiftCard gift=gift /> }).collect_view()}
                    </div>
                </Show>
            </Show>
        </div>
    }
}
