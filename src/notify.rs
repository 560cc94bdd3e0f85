//! User Notifications

use std::time::Duration;

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::error::ApiError;

/// Blocking browser alert
pub fn alert(message: &str) {
    if let Some(window) = web_sys::window() {
        let _ = window.alert_with_message(message);
    }
}

/// Log a failed action and tell the user, unless the session expired
/// (the login redirect already explains that).
pub fn report(action: &str, err: &ApiError) {
    tracing::error!("Error {action}: {err}");
    if !matches!(err, ApiError::Unauthorized) {
        alert(&format!("Error {action}: {err}"));
    }
}

const FLASH_TIMEOUT: Duration = Duration::from_secs(3);

/// Show `message` in `slot`, then clear it unless something replaced it
pub fn flash(slot: RwSignal<Option<String>>, message: impl Into<String>) {
    let message = message.into();
    slot.set(Some(message.clone()));
    spawn_local(async move {
        TimeoutFuture::new(FLASH_TIMEOUT.as_millis() as u32).await;
        if slot.try_get_untracked().flatten().as_deref() == Some(message.as_str()) {
            slot.try_set(None);
        }
    });
}
