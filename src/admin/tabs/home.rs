//! Home Content Tab
//!
//! Hero text, image, wedding date and the site palette.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::admin::fields::{TextArea, TextField};
use crate::admin::forms::{ColorField, HomeForm, COLOR_FIELDS};
use crate::components::ImagePicker;
use crate::context::use_api;
use crate::notify;
use crate::store::{store_set_home, use_site_store};
use crate::theme::{use_theme, ThemePalette};

#[component]
fn ColorInput(form: RwSignal<HomeForm>, field: &'static ColorField) -> impl IntoView {
    let default = (field.default)(&ThemePalette::default());
    let shown = {
        let default = default.clone();
        move || {
            let value = form.with(field.get);
            if value.trim().is_empty() { default.clone() } else { value }
        }
    };
    let swatch = shown.clone();

    view! {
        <div class="form-field color-field">
            <label>{field.label}</label>
            <div class="color-inputs">
                <input
                    type="color"
                    prop:value=swatch
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        form.update(|f| (field.set)(f, value));
                    }
                />
                <input
                    type="text"
                    placeholder=default.clone()
                    prop:value=move || form.with(field.get)
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        form.update(|f| (field.set)(f, value));
                    }
                />
                <button
                    type="button"
                    class="btn-link"
                    title=format!("Reset to {default}")
                    on:click=move |_| form.update(|f| (field.set)(f, String::new()))
                >
                    "Reset"
                </button>
            </div>
        </div>
    }
}

#[component]
pub fn HomeTab() -> impl IntoView {
    let api = use_api();
    let theme = use_theme();
    let store = use_site_store();

    let form = RwSignal::new(HomeForm::default());
    // Hero image the server currently has
    let saved_hero = RwSignal::new(String::new());
    let (loading, set_loading) = signal(true);
    let (saving, set_saving) = signal(false);

    {
        let api = api.clone();
        spawn_local(async move {
            match api.get_home_content().await {
                Ok(content) => {
                    let loaded = HomeForm::from_content(&content);
                    saved_hero.set(loaded.hero_image_url.clone());
                    form.set(loaded);
                }
                Err(e) => tracing::error!("Error fetching home content: {e}"),
            }
            set_loading.set(false);
        });
    }

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let update = match form.with_untracked(HomeForm::to_update) {
            Ok(update) => update,
            Err(e) => return notify::alert(&e.to_string()),
        };
        let api = api.clone();
        set_saving.set(true);
        spawn_local(async move {
            match api.update_home_content(&update).await {
                Ok(saved) => {
                    theme.publish(ThemePalette::resolve(Some(&saved)));
                    let reloaded = HomeForm::from_content(&saved);
                    saved_hero.set(reloaded.hero_image_url.clone());
                    form.set(reloaded);
                    store_set_home(&store, saved);
                    notify::alert("Home content updated successfully!");
                }
                Err(e) => notify::report("updating home content", &e),
            }
            set_saving.set(false);
        });
    };

    let hero_image = Signal::derive(move || form.with(|f| f.hero_image_url.clone()));
    let hero_in_use = Signal::derive(move || vec![saved_hero.get(), hero_image.get()]);

    view! {
        <section class="admin-section">
            <h2>"Home Content"</h2>
            <Show when=move || !loading.get() fallback=|| view! { <p>"Loading..."</p> }>
                <form class="admin-form" on:submit=on_submit.clone()>
                    <TextField form=form label="Couple Names" placeholder="Bianca & Joel"
                        get=|f: &HomeForm| f.hero_text.clone() set=|f: &mut HomeForm, v| f.hero_text = v />
                    <TextArea form=form label="Subtitle" rows=2
                        get=|f: &HomeForm| f.subtitle.clone() set=|f: &mut HomeForm, v| f.subtitle = v />
                    <TextField form=form label="Wedding Date" input_type="date"
                        get=|f: &HomeForm| f.wedding_date.clone() set=|f: &mut HomeForm, v| f.wedding_date = v />

                    <div class="form-field">
                        <label>"Hero Image"</label>
                        <ImagePicker
                            current=hero_image
                            in_use=hero_in_use
                            on_uploaded=move |url: String| form.update(|f| f.hero_image_url = url)
                        />
                    </div>

                    <h3>"Colors"</h3>
                    <div class="color-grid">
                        {COLOR_FIELDS.iter().map(|field| view! { <ColorInput form=form field=field /> }).collect_view()}
                    </div>

                    <button type="submit" class="btn-primary" disabled=move || saving.get()>
                        {move || if saving.get() { "Saving..." } else { "Save Changes" }}
                    </button>
                </form>
            </Show>
        </section>
    }
}
