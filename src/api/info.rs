//! Wedding Information Endpoints

use async_trait::async_trait;
use reqwest::Method;

use super::ApiClient;
use crate::error::ApiResult;
use crate::models::{InfoSection, InfoSectionInput};
use crate::reorder::ReorderStore;

impl ApiClient {
    pub async fn list_info_sections(&self) -> ApiResult<Vec<InfoSection>> {
        self.get_json("/api/info").await
    }

    pub async fn create_info_section(&self, input: &InfoSectionInput) -> ApiResult<InfoSection> {
        self.send_json(Method::POST, "/api/info", input).await
    }

    pub async fn update_info_section(&self, id: u32, input: &InfoSectionInput) -> ApiResult<InfoSection> {
        self.send_json(Method::PUT, &format!("/api/info/{id}"), input).await
    }

    pub async fn delete_info_section(&self, id: u32) -> ApiResult<()> {
        self.delete(&format!("/api/info/{id}")).await
    }

    pub async fn reorder_info_sections(&self, ids: &[u32]) -> ApiResult<Vec<InfoSection>> {
        self.send_json(Method::PUT, "/api/info/reorder", ids).await
    }
}

#[async_trait(?Send)]
impl ReorderStore<InfoSection> for ApiClient {
    async fn reorder(&self, ids: &[u32]) -> ApiResult<Vec<InfoSection>> {
        self.reorder_info_sections(ids).await
    }
}
