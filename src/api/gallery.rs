//! Gallery Endpoints

use reqwest::Method;

use super::ApiClient;
use crate::error::ApiResult;
use crate::models::{GalleryImage, GalleryImageInput};

impl ApiClient {
    pub async fn list_gallery_images(&self) -> ApiResult<Vec<GalleryImage>> {
        self.get_json("/api/gallery").await
    }

    pub async fn create_gallery_image(&self, input: &GalleryImageInput) -> ApiResult<GalleryImage> {
        self.send_json(Method::POST, "/api/gallery", input).await
    }

    pub async fn update_gallery_image(&self, id: u32, input: &GalleryImageInput) -> ApiResult<GalleryImage> {
        self.send_json(Method::PUT, &format!("/api/gallery/{id}"), input).await
    }

    pub async fn delete_gallery_image(&self, id: u32) -> ApiResult<()> {
        self.delete(&format!("/api/gallery/{id}")).await
    }
}
