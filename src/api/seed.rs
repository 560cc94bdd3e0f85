//! Demo Content Endpoints

use super::ApiClient;
use crate::error::ApiResult;

impl ApiClient {
    pub async fn seed_demo_content(&self) -> ApiResult<()> {
        self.post_empty("/api/seed/demo").await
    }

    pub async fn clear_demo_content(&self) -> ApiResult<()> {
        self.delete("/api/seed/demo").await
    }
}
