//! Admin Login Page

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_navigate;
use leptos_router::NavigateOptions;

use crate::context::use_api;
use crate::error::ApiError;

#[component]
pub fn LoginPage() -> impl IntoView {
    let api = use_api();
    let navigate = use_navigate();

    let (username, set_username) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (error, set_error) = signal::<Option<String>>(None);
    let (submitting, set_submitting) = signal(false);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if submitting.get_untracked() {
            return;
        }
        set_error.set(None);
        set_submitting.set(true);

        let api = api.clone();
        let navigate = navigate.clone();
        spawn_local(async move {
            match api.login(&username.get_untracked(), &password.get_untracked()).await {
                Ok(_) => {
                    tracing::info!("admin signed in");
                    navigate("/admin", NavigateOptions::default());
                }
                Err(e @ ApiError::Transport(_)) => {
                    tracing::error!("Login failed: {e}");
                    set_error.set(Some("Could not reach the server. Please try again.".to_string()));
                }
                Err(e) => {
                    tracing::warn!("Login rejected: {e}");
                    set_error.set(Some("Invalid username or password".to_string()));
                }
            }
            set_submitting.set(false);
        });
    };

    view! {
        <div class="login-page">
            <form class="login-card" on:submit=on_submit>
                <h1>"Admin Login"</h1>
                {move || error.get().map(|msg| view! { <div class="login-error">{msg}</div> })}
                <div class="form-field">
                    <label>"Username"</label>
                    <input
                        type="text"
                        required
                        autocomplete="username"
                        prop:value=move || username.get()
                        on:input=move |ev| set_username.set(event_target_value(&ev))
                    />
                </div>
                <div class="form-field">
                    <label>"Password"</label>
                    <input
                        type="password"
                        required
                        autocomplete="current-password"
                        prop:value=move || password.get()
                        on:input=move |ev| set_password.set(event_target_value(&ev))
                    />
                </div>
                <button type="submit" class="btn-primary" disabled=move || submitting.get()>
                    {move || if submitting.get() { "Logging in..." } else { "Login" }}
                </button>
            </form>
        </div>
    }
}
