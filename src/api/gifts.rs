//! Gift Endpoints

use reqwest::Method;

use super::ApiClient;
use crate::error::ApiResult;
use crate::models::{GiftItem, GiftItemInput};

impl ApiClient {
    pub async fn list_gift_items(&self) -> ApiResult<Vec<GiftItem>> {
        self.get_json("/api/gifts").await
    }

    pub async fn create_gift_item(&self, input: &GiftItemInput) -> ApiResult<GiftItem> {
        self.send_json(Method::POST, "/api/gifts", input).await
    }

    pub async fn update_gift_item(&self, id: u32, input: &GiftItemInput) -> ApiResult<GiftItem> {
        self.send_json(Method::PUT, &format!("/api/gifts/{id}"), input).await
    }

    pub async fn delete_gift_item(&self, id: u32) -> ApiResult<()> {
        self.delete(&format!("/api/gifts/{id}")).await
    }
}
