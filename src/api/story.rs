//! Story Endpoints
//!
//! Sections (text blocks) and images (reorderable).

use async_trait::async_trait;
use reqwest::Method;

use super::ApiClient;
use crate::error::ApiResult;
use crate::models::{StoryImage, StoryImageInput, StorySection, StorySectionInput};
use crate::reorder::ReorderStore;

impl ApiClient {
    pub async fn list_story_sections(&self) -> ApiResult<Vec<StorySection>> {
        self.get_json("/api/story/sections").await
    }

    pub async fn create_story_section(&self, input: &StorySectionInput) -> ApiResult<StorySection> {
        self.send_json(Method::POST, "/api/story/sections", input).await
    }

    pub async fn update_story_section(&self, id: u32, input: &StorySectionInput) -> ApiResult<StorySection> {
        self.send_json(Method::PUT, &format!("/api/story/sections/{id}"), input).await
    }

    pub async fn delete_story_section(&self, id: u32) -> ApiResult<()> {
        self.delete(&format!("/api/story/sections/{id}")).await
    }

    pub async fn list_story_images(&self) -> ApiResult<Vec<StoryImage>> {
        self.get_json("/api/story/images").await
    }

    pub async fn create_story_image(&self, input: &StoryImageInput) -> ApiResult<StoryImage> {
        self.send_json(Method::POST, "/api/story/images", input).await
    }

    pub async fn update_story_image(&self, id: u32, input: &StoryImageInput) -> ApiResult<StoryImage> {
        self.send_json(Method::PUT, &format!("/api/story/images/{id}"), input).await
    }

    pub async fn delete_story_image(&self, id: u32) -> ApiResult<()> {
        self.delete(&format!("/api/story/images/{id}")).await
    }

    /// Persist a full image order; returns the re-sorted collection
    pub async fn reorder_story_images(&self, ids: &[u32]) -> ApiResult<Vec<StoryImage>> {
        self.send_json(Method::PUT, "/api/story/images/reorder", ids).await
    }
}

#[async_trait(?Send)]
impl ReorderStore<StoryImage> for ApiClient {
    async fn reorder(&self, ids: &[u32]) -> ApiResult<Vec<StoryImage>> {
        self.reorder_story_images(ids).await
    }
}
