//! Home Content Endpoints

use async_trait::async_trait;
use reqwest::Method;

use super::ApiClient;
use crate::error::ApiResult;
use crate::models::{HomeContent, HomeContentUpdate};
use crate::theme::ThemeSource;

impl ApiClient {
    pub async fn get_home_content(&self) -> ApiResult<HomeContent> {
        self.get_json("/api/home").await
    }

    pub async fn update_home_content(&self, update: &HomeContentUpdate) -> ApiResult<HomeContent> {
        self.send_json(Method::PUT, "/api/home", update).await
    }
}

#[async_trait(?Send)]
impl ThemeSource for ApiClient {
    async fn fetch_theme_document(&self) -> ApiResult<HomeContent> {
        self.get_home_content().await
    }
}
