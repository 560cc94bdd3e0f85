//! Upload Endpoints

use js_sys::Uint8Array;
use reqwest::multipart::{Form, Part};
use reqwest::Method;
use wasm_bindgen_futures::JsFuture;

use super::ApiClient;
use crate::error::ApiResult;
use crate::media::{file_name_from_url, validate_upload};
use crate::models::UploadedFile;

/// A file picked by the admin, read into memory
#[derive(Debug, Clone, PartialEq)]
pub struct UploadFile {
    pub name: String,
    pub mime: String,
    pub bytes: Vec<u8>,
}

impl UploadFile {
    /// Read a browser `File` after checking it is worth reading
    pub async fn read(file: &web_sys::File, max_bytes: u64) -> ApiResult<Self> {
        let name = file.name();
        validate_upload(&name, file.size() as u64, max_bytes)?;
        let buffer = JsFuture::from(file.array_buffer()).await?;
        Ok(Self { name, mime: file.type_(), bytes: Uint8Array::new(&buffer).to_vec() })
    }
}

impl ApiClient {
    pub fn max_upload_bytes(&self) -> u64 {
        self.max_upload_bytes
    }

    /// Upload an image and return its hosted URL
    pub async fn upload_file(&self, file: UploadFile) -> ApiResult<UploadedFile> {
        validate_upload(&file.name, file.bytes.len() as u64, self.max_upload_bytes)?;
        tracing::debug!(name = %file.name, size = file.bytes.len(), "uploading image");

        let mut part = Part::bytes(file.bytes).file_name(file.name);
        if !file.mime.is_empty() {
            part = part.mime_str(&file.mime)?;
        }
        let builder = self.request(Method::POST, "/api/upload").multipart(Form::new().part("file", part));
        Ok(self.send(builder).await?.json().await?)
    }

    pub async fn delete_file(&self, filename: &str) -> ApiResult<()> {
        self.delete(&format!("/api/upload/{filename}")).await
    }

    /// Remove a previously uploaded file given its hosted URL
    pub async fn delete_uploaded_url(&self, url: &str) -> ApiResult<()> {
        match file_name_from_url(url) {
            Some(name) => self.delete_file(name).await,
            None => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::api::tests::test_client;
    use crate::error::{ApiError, ValidationError};
    use crate::session::MemoryTokenStore;

    #[tokio::test]
    async fn test_oversized_upload_never_reaches_network() {
        let (client, redirects) = test_client(Arc::new(MemoryTokenStore::default()));
        let file = UploadFile { name: "dress.jpg".into(), mime: "image/jpeg".into(), bytes: vec![0; 6 * 1024 * 1024] };

        // the base URL points at a closed port, so a sent request would be a Transport error
        let err = client.upload_file(file).await.unwrap_err();
        assert!(err.is_validation());
        assert!(matches!(err, ApiError::Validation(ValidationError::FileTooLarge { max_mb: 5, .. })));
        assert_eq!(redirects.load(std::sync::atomic::Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_wrong_type_rejected_locally() {
        let (client, _) = test_client(Arc::new(MemoryTokenStore::default()));
        let file = UploadFile { name: "menu.pdf".into(), mime: "application/pdf".into(), bytes: vec![1, 2, 3] };
        assert!(matches!(
            client.upload_file(file).await,
            Err(ApiError::Validation(ValidationError::UnsupportedFileType(_)))
        ));
    }
}
