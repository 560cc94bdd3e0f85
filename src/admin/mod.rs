//! Admin Area
//!
//! Login page, the token gate and the content dashboard.

mod dashboard;
mod fields;
mod forms;
mod login;
mod tabs;

pub use dashboard::Dashboard;
pub use login::LoginPage;

use leptos::prelude::*;
use leptos_router::components::Redirect;

use crate::api::LOGIN_ROUTE;
use crate::context::use_api;

/// Renders its children only with a stored token, else sends to login
#[component]
pub fn AdminGate(children: Children) -> impl IntoView {
    if use_api().is_authenticated() {
        children().into_any()
    } else {
        tracing::debug!("no admin token, redirecting to login");
        view! { <Redirect path=LOGIN_ROUTE /> }.into_any()
    }
}
