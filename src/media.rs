//! Image Helpers
//!
//! Upload validation, preview information and URL normalization.

use crate::error::ValidationError;

pub const ALLOWED_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "gif", "webp"];

/// `accept` attribute for image pickers
pub const ACCEPT_IMAGES: &str = "image/jpeg,image/png,image/gif,image/webp";

const BYTES_PER_MB: f64 = 1024.0 * 1024.0;

/// Check size and extension before anything is sent
pub fn validate_upload(file_name: &str, size: u64, max_bytes: u64) -> Result<(), ValidationError> {
    if size > max_bytes {
        return Err(ValidationError::FileTooLarge { size, max_mb: max_bytes / (1024 * 1024) });
    }
    let extension = file_name
        .rsplit_once('.')
        .map(|(_, ext)| ext.to_ascii_lowercase())
        .unwrap_or_default();
    if !ALLOWED_EXTENSIONS.contains(&extension.as_str()) {
        return Err(ValidationError::UnsupportedFileType(file_name.to_string()));
    }
    Ok(())
}

/// Prefix server-relative media paths with the API origin
///
/// Absolute URLs and other relative paths are returned untouched, as is
/// everything when the API is served from the same origin.
pub fn normalize_image_url(url: &str, base_url: &str) -> String {
    if url.starts_with("http://") || url.starts_with("https://") {
        return url.to_string();
    }
    if !base_url.is_empty() && (url.starts_with("/static") || url.starts_with("/api")) {
        return format!("{base_url}{url}");
    }
    url.to_string()
}

/// Last path segment of a hosted file URL, as expected by `DELETE /api/upload/{filename}`
pub fn file_name_from_url(url: &str) -> Option<&str> {
    let path = url.split(['?', '#']).next().unwrap_or(url);
    path.rsplit('/').next().filter(|name| !name.is_empty())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageHint {
    Ideal,
    MayPixelate,
    Large,
}

impl ImageHint {
    pub fn message(self) -> &'static str {
        match self {
            ImageHint::Ideal => "Ideal",
            ImageHint::MayPixelate => "May appear pixelated",
            ImageHint::Large => "Large (may take time)",
        }
    }

    /// Good news or a warning
    pub fn is_positive(self) -> bool {
        matches!(self, ImageHint::Ideal)
    }
}

/// What the picker shows about a selected image before upload
#[derive(Debug, Clone, PartialEq)]
pub struct ImageInfo {
    pub file_name: String,
    pub width: u32,
    pub height: u32,
    pub size_bytes: u64,
}

impl ImageInfo {
    pub fn size_mb(&self) -> f64 {
        self.size_bytes as f64 / BYTES_PER_MB
    }

    /// Width over height, e.g. "1.78:1"
    pub fn aspect_ratio(&self) -> String {
        if self.height == 0 {
            return "-".to_string();
        }
        format!("{:.2}:1", self.width as f64 / self.height as f64)
    }

    pub fn hints(&self) -> Vec<ImageHint> {
        let mut hints = Vec::new();
        if self.width >= 1920 && self.height >= 1080 {
            hints.push(ImageHint::Ideal);
        }
        if self.width < 1200 || self.height < 1200 {
            hints.push(ImageHint::MayPixelate);
        }
        if self.size_mb() > 3.0 {
            hints.push(ImageHint::Large);
        }
        hints
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::MAX_UPLOAD_BYTES;

    #[test]
    fn test_upload_size_limit() {
        assert!(validate_upload("photo.jpg", MAX_UPLOAD_BYTES, MAX_UPLOAD_BYTES).is_ok());
        assert_eq!(
            validate_upload("photo.jpg", 6 * 1024 * 1024, MAX_UPLOAD_BYTES),
            Err(ValidationError::FileTooLarge { size: 6 * 1024 * 1024, max_mb: 5 })
        );
    }

    #[test]
    fn test_upload_extensions() {
        assert!(validate_upload("IMG_0001.JPEG", 10, MAX_UPLOAD_BYTES).is_ok());
        assert!(validate_upload("dance.webp", 10, MAX_UPLOAD_BYTES).is_ok());
        assert!(matches!(
            validate_upload("invite.pdf", 10, MAX_UPLOAD_BYTES),
            Err(ValidationError::UnsupportedFileType(_))
        ));
        assert!(validate_upload("no-extension", 10, MAX_UPLOAD_BYTES).is_err());
    }

    #[test]
    fn test_normalize_image_url() {
        let base = "https://api.example.com";
        assert_eq!(normalize_image_url("/static/uploads/a.jpg", base), "https://api.example.com/static/uploads/a.jpg");
        assert_eq!(normalize_image_url("/api/upload/a.jpg", base), "https://api.example.com/api/upload/a.jpg");
        assert_eq!(normalize_image_url("https://cdn.example.com/a.jpg", base), "https://cdn.example.com/a.jpg");
        assert_eq!(normalize_image_url("/images/local.png", base), "/images/local.png");
        assert_eq!(normalize_image_url("/static/a.jpg", ""), "/static/a.jpg");
    }

    #[test]
    fn test_file_name_from_url() {
        assert_eq!(file_name_from_url("/static/uploads/abc123.jpg"), Some("abc123.jpg"));
        assert_eq!(file_name_from_url("https://x.io/static/uploads/b.png?v=2"), Some("b.png"));
        assert_eq!(file_name_from_url("/static/uploads/"), None);
    }

    #[test]
    fn test_image_hints() {
        let large_hd = ImageInfo { file_name: "a.jpg".into(), width: 4000, height: 3000, size_bytes: 4 * 1024 * 1024 };
        assert_eq!(large_hd.hints(), vec![ImageHint::Ideal, ImageHint::Large]);
        assert_eq!(large_hd.aspect_ratio(), "1.33:1");

        let small = ImageInfo { file_name: "b.png".into(), width: 800, height: 600, size_bytes: 200_000 };
        assert_eq!(small.hints(), vec![ImageHint::MayPixelate]);

        // wide but short: ideal and pixelated at once
        let banner = ImageInfo { file_name: "c.jpg".into(), width: 1920, height: 1080, size_bytes: 1 };
        assert_eq!(banner.hints(), vec![ImageHint::Ideal, ImageHint::MayPixelate]);
    }
}
