//! Timeline Endpoints

use async_trait::async_trait;
use reqwest::Method;

use super::ApiClient;
use crate::error::ApiResult;
use crate::models::{TimelineEvent, TimelineEventInput};
use crate::reorder::ReorderStore;

impl ApiClient {
    pub async fn list_timeline_events(&self) -> ApiResult<Vec<TimelineEvent>> {
        self.get_json("/api/timeline").await
    }

    pub async fn create_timeline_event(&self, input: &TimelineEventInput) -> ApiResult<TimelineEvent> {
        self.send_json(Method::POST, "/api/timeline", input).await
    }

    pub async fn update_timeline_event(&self, id: u32, input: &TimelineEventInput) -> ApiResult<TimelineEvent> {
        self.send_json(Method::PUT, &format!("/api/timeline/{id}"), input).await
    }

    pub async fn delete_timeline_event(&self, id: u32) -> ApiResult<()> {
        self.delete(&format!("/api/timeline/{id}")).await
    }

    pub async fn reorder_timeline_events(&self, ids: &[u32]) -> ApiResult<Vec<TimelineEvent>> {
        self.send_json(Method::PUT, "/api/timeline/reorder", ids).await
    }
}

#[async_trait(?Send)]
impl ReorderStore<TimelineEvent> for ApiClient {
    async fn reorder(&self, ids: &[u32]) -> ApiResult<Vec<TimelineEvent>> {
        self.reorder_timeline_events(ids).await
    }
}
