//! RSVP Endpoints

use reqwest::Method;

use super::ApiClient;
use crate::error::ApiResult;
use crate::models::{Rsvp, RsvpInput};

impl ApiClient {
    /// Public: guests submit without a session
    pub async fn submit_rsvp(&self, input: &RsvpInput) -> ApiResult<Rsvp> {
        let cleaned = input.cleaned()?;
        self.send_json(Method::POST, "/api/rsvp", &cleaned).await
    }

    pub async fn list_rsvps(&self) -> ApiResult<Vec<Rsvp>> {
        self.get_json("/api/rsvp").await
    }
}
