//! Site State Store
//!
//! Uses Leptos reactive_stores for state shared between public pages.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::models::HomeContent;
use crate::session;

#[derive(Clone, Debug, Default, Store)]
pub struct SiteState {
    /// Last fetched home document
    pub home: Option<HomeContent>,
    /// Guest dismissed the reminder or already answered
    pub rsvp_reminder_dismissed: bool,
}

impl SiteState {
    pub fn new() -> Self {
        Self {
            rsvp_reminder_dismissed: session::rsvp_reminder_dismissed(),
            ..Default::default()
        }
    }
}

pub type SiteStore = Store<SiteState>;

pub fn use_site_store() -> SiteStore {
    expect_context::<SiteStore>()
}

/// Hide the reminder for good, e.g. after an RSVP was sent
pub fn store_dismiss_rsvp_reminder(store: &SiteStore) {
    session::dismiss_rsvp_reminder();
    *store.rsvp_reminder_dismissed().write() = true;
}

pub fn store_set_home(store: &SiteStore, home: HomeContent) {
    *store.home().write() = Some(home);
}
