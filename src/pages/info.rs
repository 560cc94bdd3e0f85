//! Wedding Information Page

use leptos::prelude::*;
use leptos::task::spawn_local;

use super::{Loading, PageHeader};
use crate::components::{InfoCard, InfoModal};
use crate::context::use_api;
use crate::models::InfoSection;
use crate::reorder::sorted_by_order;

#[component]
pub fn InfoPage() -> impl IntoView {
    let api = use_api();
    let (sections, set_sections) = signal(Vec::<InfoSection>::new());
    let (loading, set_loading) = signal(true);
    let (open_section, set_open_section) = signal::<Option<InfoSection>>(None);

    spawn_local(async move {
        match api.list_info_sections().await {
            Ok(loaded) => set_sections.set(sorted_by_order(loaded)),
            Err(e) => tracing::error!("Error fetching info sections: {e}"),
        }
        set_loading.set(false);
    });

    // the ceremony map gets a large embed under the cards
    let ceremony_map = move || {
        sections.with(|all| {
            all.iter()
                .find(|s| s.section_type == "ceremony")
                .and_then(|s| s.map_embed_url.clone())
                .filter(|m| m.trim_start().starts_with('<'))
        })
    };

    view! {
        <div class="page info-page">
            <PageHeader title="Wedding Information" tagline="Everything you need to know" />
            <Show when=move || !loading.get() fallback=|| view! { <Loading /> }>
                <div class="info-grid">
                    {move || {
                        sections
                            .get()
                            .into_iter()
                            .map(|section| {
                                let opened = section.clone();
                                view! { <InfoCard section=section on_open=move |_| set_open_section.set(Some(opened.clone())) /> }
                            })
                            .collect_view()
                    }}
                </div>
                {move || ceremony_map().map(|embed| view! { <div class="info-map" inner_html=embed /> })}
            </Show>
        </div>

        {move || open_section.get().map(|section| view! {
            <InfoModal section=section on_close=move |_| set_open_section.set(None) />
        })}
    }
}
