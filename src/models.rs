//! Frontend Models
//!
//! Data structures matching the content service schema.

use chrono::{NaiveDate, NaiveTime};
use serde::{de, Deserialize, Deserializer, Serialize};

use crate::error::ValidationError;

/// A record with a stable id and a position inside its collection
pub trait Ordered {
    fn id(&self) -> u32;
    fn order(&self) -> i32;
}

/// Trimmed value, or `None` when blank
pub fn non_empty(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

// ========================
// Home
// ========================

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HomeContent {
    pub id: u32,
    pub hero_text: Option<String>,
    pub hero_image_url: Option<String>,
    pub wedding_date: Option<NaiveDate>,
    pub subtitle: Option<String>,
    #[serde(default)]
    pub text_color: Option<String>,
    #[serde(default)]
    pub navbar_color: Option<String>,
    #[serde(default)]
    pub navbar_text_color: Option<String>,
    #[serde(default)]
    pub accent_color: Option<String>,
    #[serde(default)]
    pub body_bg_color: Option<String>,
    #[serde(default)]
    pub body_heading_color: Option<String>,
    #[serde(default)]
    pub body_text_color: Option<String>,
    #[serde(default)]
    pub footer_bg_color: Option<String>,
    #[serde(default)]
    pub footer_text_color: Option<String>,
}

/// Body of `PUT /api/home`
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct HomeContentUpdate {
    pub hero_text: Option<String>,
    pub hero_image_url: Option<String>,
    pub wedding_date: Option<NaiveDate>,
    pub subtitle: Option<String>,
    pub text_color: Option<String>,
    pub navbar_color: Option<String>,
    pub navbar_text_color: Option<String>,
    pub accent_color: Option<String>,
    pub body_bg_color: Option<String>,
    pub body_heading_color: Option<String>,
    pub body_text_color: Option<String>,
    pub footer_bg_color: Option<String>,
    pub footer_text_color: Option<String>,
}

// ========================
// Story
// ========================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StorySection {
    pub id: u32,
    pub title: String,
    pub content: String,
    #[serde(default)]
    pub order: i32,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct StorySectionInput {
    pub title: String,
    pub content: String,
    pub order: i32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoryImage {
    pub id: u32,
    pub image_url: String,
    pub caption: Option<String>,
    #[serde(default)]
    pub order: i32,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct StoryImageInput {
    pub image_url: String,
    pub caption: Option<String>,
    pub order: i32,
}

impl Ordered for StoryImage {
    fn id(&self) -> u32 {
        self.id
    }
    fn order(&self) -> i32 {
        self.order
    }
}

// ========================
// Wedding information
// ========================

/// Section types offered by the info form: (value, label)
pub const SECTION_TYPES: &[(&str, &str)] = &[
    ("ceremony", "Ceremony"),
    ("reception", "Reception"),
    ("dress_code", "Dress Code"),
    ("parking", "Parking"),
    ("hotel", "Hotel"),
];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InfoSection {
    pub id: u32,
    pub title: String,
    pub description: Option<String>,
    pub icon: Option<String>,
    pub section_type: String,
    pub map_embed_url: Option<String>,
    pub image_url: Option<String>,
    #[serde(default, deserialize_with = "url_list")]
    pub gallery_urls: Vec<String>,
    pub additional_info: Option<String>,
    #[serde(default)]
    pub sort_order: i32,
}

impl InfoSection {
    /// Legacy single image first, then the gallery, without duplicates
    pub fn all_images(&self) -> Vec<String> {
        let mut images: Vec<String> = self.image_url.iter().cloned().collect();
        for url in &self.gallery_urls {
            if !images.contains(url) {
                images.push(url.clone());
            }
        }
        images
    }
}

impl Ordered for InfoSection {
    fn id(&self) -> u32 {
        self.id
    }
    fn order(&self) -> i32 {
        self.sort_order
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct InfoSectionInput {
    pub title: String,
    pub description: Option<String>,
    pub icon: Option<String>,
    pub section_type: String,
    pub map_embed_url: Option<String>,
    pub image_url: Option<String>,
    pub gallery_urls: Vec<String>,
    pub additional_info: Option<String>,
}

/// Accepts a JSON array, a JSON-encoded array string, or null
fn url_list<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        List(Vec<String>),
        Encoded(String),
    }

    match Option::<Raw>::deserialize(deserializer)? {
        None => Ok(Vec::new()),
        Some(Raw::List(urls)) => Ok(urls),
        Some(Raw::Encoded(s)) if s.trim().is_empty() => Ok(Vec::new()),
        Some(Raw::Encoded(s)) => serde_json::from_str(&s).map_err(de::Error::custom),
    }
}

// ========================
// Timeline
// ========================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimelineEvent {
    pub id: u32,
    pub time: NaiveTime,
    pub title: String,
    pub description: Option<String>,
    pub icon: Option<String>,
    #[serde(default)]
    pub order: i32,
}

impl TimelineEvent {
    /// 12-hour clock, e.g. "3:00 PM"
    pub fn display_time(&self) -> String {
        self.time.format("%-I:%M %p").to_string()
    }
}

impl Ordered for TimelineEvent {
    fn id(&self) -> u32 {
        self.id
    }
    fn order(&self) -> i32 {
        self.order
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TimelineEventInput {
    pub time: NaiveTime,
    pub title: String,
    pub description: Option<String>,
    pub icon: Option<String>,
    pub order: i32,
}

/// Parse the value of an `<input type="time">` ("HH:MM" or "HH:MM:SS")
pub fn parse_time_input(raw: &str) -> Result<NaiveTime, ValidationError> {
    let raw = raw.trim();
    NaiveTime::parse_from_str(raw, "%H:%M")
        .or_else(|_| NaiveTime::parse_from_str(raw, "%H:%M:%S"))
        .map_err(|_| ValidationError::InvalidTime(raw.to_string()))
}

// ========================
// Gallery
// ========================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GalleryImage {
    pub id: u32,
    pub image_url: String,
    pub caption: Option<String>,
    #[serde(default)]
    pub order: i32,
}

impl Ordered for GalleryImage {
    fn id(&self) -> u32 {
        self.id
    }
    fn order(&self) -> i32 {
        self.order
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct GalleryImageInput {
    pub image_url: String,
    pub caption: Option<String>,
    pub order: i32,
}

/// Anything the lightbox can show
#[derive(Debug, Clone, PartialEq)]
pub struct Slide {
    pub image_url: String,
    pub caption: Option<String>,
}

impl From<&GalleryImage> for Slide {
    fn from(image: &GalleryImage) -> Self {
        Self { image_url: image.image_url.clone(), caption: image.caption.clone() }
    }
}

impl From<&StoryImage> for Slide {
    fn from(image: &StoryImage) -> Self {
        Self { image_url: image.image_url.clone(), caption: image.caption.clone() }
    }
}

// ========================
// Gifts
// ========================

/// Gift kinds offered by the gift form: (value, label)
pub const GIFT_TYPES: &[(&str, &str)] = &[("external", "External Link"), ("card", "Custom Card")];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GiftItem {
    pub id: u32,
    pub title: String,
    pub description: Option<String>,
    pub link: String,
    pub image_url: Option<String>,
    pub item_type: String,
    #[serde(default)]
    pub order: i32,
}

impl GiftItem {
    pub fn is_external(&self) -> bool {
        self.item_type == "external"
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct GiftItemInput {
    pub title: String,
    pub description: Option<String>,
    pub link: String,
    pub image_url: Option<String>,
    pub item_type: String,
    pub order: i32,
}

// ========================
// RSVP
// ========================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Rsvp {
    pub id: u32,
    pub guest_name: String,
    pub email: String,
    pub num_attendees: u32,
    pub dietary_restrictions: Option<String>,
    pub message: Option<String>,
    pub created_at: String,
}

impl Rsvp {
    /// Date part of `created_at` ("2025-06-15T10:00:00" -> "2025-06-15")
    pub fn created_date(&self) -> &str {
        self.created_at.split('T').next().unwrap_or(&self.created_at)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RsvpInput {
    pub guest_name: String,
    pub email: String,
    pub num_attendees: u32,
    pub dietary_restrictions: Option<String>,
    pub message: Option<String>,
}

impl RsvpInput {
    /// Trim every field, blank optionals become null, and check required ones
    pub fn cleaned(&self) -> Result<RsvpInput, ValidationError> {
        let guest_name = non_empty(&self.guest_name).ok_or(ValidationError::MissingField("Guest name"))?;
        let email = non_empty(&self.email).ok_or(ValidationError::MissingField("Email"))?;
        let well_formed = email
            .split_once('@')
            .is_some_and(|(user, domain)| !user.is_empty() && domain.contains('.') && !domain.ends_with('.'));
        if !well_formed {
            return Err(ValidationError::InvalidEmail(email));
        }
        if self.num_attendees == 0 {
            return Err(ValidationError::InvalidAttendees);
        }

        Ok(RsvpInput {
            guest_name,
            email,
            num_attendees: self.num_attendees,
            dietary_restrictions: self.dietary_restrictions.as_deref().and_then(non_empty),
            message: self.message.as_deref().and_then(non_empty),
        })
    }
}

// ========================
// Auth & upload
// ========================

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Token {
    pub access_token: String,
    pub token_type: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct UploadedFile {
    pub url: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn info_json(gallery: &str) -> String {
        format!(
            r#"{{"id":1,"title":"Ceremony","description":null,"icon":"rings","section_type":"ceremony",
                "map_embed_url":null,"image_url":"/static/a.jpg","gallery_urls":{gallery},"additional_info":null}}"#
        )
    }

    #[test]
    fn test_gallery_urls_accepts_every_encoding() {
        let list: InfoSection = serde_json::from_str(&info_json(r#"["/b.jpg"]"#)).unwrap();
        assert_eq!(list.gallery_urls, vec!["/b.jpg"]);

        let encoded: InfoSection = serde_json::from_str(&info_json(r#""[\"/b.jpg\",\"/c.jpg\"]""#)).unwrap();
        assert_eq!(encoded.gallery_urls, vec!["/b.jpg", "/c.jpg"]);

        let null: InfoSection = serde_json::from_str(&info_json("null")).unwrap();
        assert!(null.gallery_urls.is_empty());
        assert_eq!(null.sort_order, 0);
    }

    #[test]
    fn test_all_images_dedupes_legacy_image() {
        let section: InfoSection = serde_json::from_str(&info_json(r#"["/static/a.jpg","/d.jpg"]"#)).unwrap();
        assert_eq!(section.all_images(), vec!["/static/a.jpg", "/d.jpg"]);
    }

    #[test]
    fn test_timeline_time_round_trips_server_format() {
        let event: TimelineEvent = serde_json::from_str(
            r#"{"id":3,"time":"15:00:00","title":"Cerimônia","description":null,"icon":"rings","order":0}"#,
        )
        .unwrap();
        assert_eq!(event.display_time(), "3:00 PM");
        assert_eq!(serde_json::to_value(&event).unwrap()["time"], "15:00:00");
    }

    #[test]
    fn test_parse_time_input() {
        assert_eq!(parse_time_input("09:30").unwrap(), NaiveTime::from_hms_opt(9, 30, 0).unwrap());
        assert_eq!(parse_time_input("21:05:10").unwrap(), NaiveTime::from_hms_opt(21, 5, 10).unwrap());
        assert!(matches!(parse_time_input(""), Err(ValidationError::InvalidTime(_))));
    }

    #[test]
    fn test_rsvp_cleaning() {
        let raw = RsvpInput {
            guest_name: "  Ana Souza ".into(),
            email: " ana@example.com".into(),
            num_attendees: 2,
            dietary_restrictions: Some("   ".into()),
            message: Some(" Parabéns! ".into()),
        };
        let cleaned = raw.cleaned().unwrap();
        assert_eq!(cleaned.guest_name, "Ana Souza");
        assert_eq!(cleaned.email, "ana@example.com");
        assert_eq!(cleaned.dietary_restrictions, None);
        assert_eq!(cleaned.message.as_deref(), Some("Parabéns!"));

        let body = serde_json::to_value(&cleaned).unwrap();
        assert!(body["dietary_restrictions"].is_null());
    }

    #[test]
    fn test_rsvp_rejections() {
        let base = RsvpInput {
            guest_name: "Joel".into(),
            email: "joel@example.com".into(),
            num_attendees: 1,
            dietary_restrictions: None,
            message: None,
        };
        assert_eq!(
            RsvpInput { guest_name: " ".into(), ..base.clone() }.cleaned(),
            Err(ValidationError::MissingField("Guest name"))
        );
        assert!(matches!(
            RsvpInput { email: "joel.example.com".into(), ..base.clone() }.cleaned(),
            Err(ValidationError::InvalidEmail(_))
        ));
        assert_eq!(
            RsvpInput { num_attendees: 0, ..base }.cleaned(),
            Err(ValidationError::InvalidAttendees)
        );
    }

    #[test]
    fn test_home_content_tolerates_missing_palette() {
        let home: HomeContent = serde_json::from_str(
            r#"{"id":1,"hero_text":"Bianca & Joel","hero_image_url":null,"wedding_date":"2025-06-15","subtitle":null}"#,
        )
        .unwrap();
        assert_eq!(home.wedding_date, NaiveDate::from_ymd_opt(2025, 6, 15));
        assert_eq!(home.accent_color, None);
    }
}
