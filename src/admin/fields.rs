//! Form Field Helpers
//!
//! Labelled inputs bound to one string field of a form struct held in a
//! signal. `get` reads the field, `set` writes it.

use leptos::prelude::*;

#[component]
pub fn TextField<F>(
    form: RwSignal<F>,
    label: &'static str,
    get: fn(&F) -> String,
    set: fn(&mut F, String),
    #[prop(default = "text")] input_type: &'static str,
    #[prop(optional)] placeholder: &'static str,
    #[prop(optional)] required: bool,
) -> impl IntoView
where
    F: Send + Sync + 'static,
{
    view! {
        <div class="form-field">
            <label>{label}</label>
            <input
                type=input_type
                placeholder=placeholder
                required=required
                prop:value=move || form.with(get)
                on:input=move |ev| {
                    let value = event_target_value(&ev);
                    form.update(|f| set(f, value));
                }
            />
        </div>
    }
}

#[component]
pub fn TextArea<F>(
    form: RwSignal<F>,
    label: &'static str,
    get: fn(&F) -> String,
    set: fn(&mut F, String),
    #[prop(default = 4)] rows: u32,
    #[prop(optional)] placeholder: &'static str,
) -> impl IntoView
where
    F: Send + Sync + 'static,
{
    view! {
        <div class="form-field">
            <label>{label}</label>
            <textarea
                rows=rows
                placeholder=placeholder
                prop:value=move || form.with(get)
                on:input=move |ev| {
                    let value = event_target_value(&ev);
                    form.update(|f| set(f, value));
                }
            />
        </div>
    }
}

/// Dropdown over `(value, label)` pairs
#[component]
pub fn Select<F>(
    form: RwSignal<F>,
    label: &'static str,
    options: &'static [(&'static str, &'static str)],
    get: fn(&F) -> String,
    set: fn(&mut F, String),
) -> impl IntoView
where
    F: Send + Sync + 'static,
{
    view! {
        <div class="form-field">
            <label>{label}</label>
            <select
                prop:value=move || form.with(get)
                on:change=move |ev| {
                    let value = event_target_value(&ev);
                    form.update(|f| set(f, value));
                }
            >
                {options
                    .iter()
                    .map(|&(value, text)| view! {
                        <option value=value selected=move || form.with(get) == value>{text}</option>
                    })
                    .collect_view()}
            </select>
        </div>
    }
}
