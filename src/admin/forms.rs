//! Admin Form State
//!
//! Raw string state behind each admin form, and its conversion into the
//! request bodies the content service expects. Blank optional fields are
//! sent as null.

use chrono::NaiveDate;

use crate::error::ValidationError;
use crate::models::*;
use crate::theme::ThemePalette;

fn opt(raw: &str) -> Option<String> {
    non_empty(raw)
}

fn required(raw: &str, field: &'static str) -> Result<String, ValidationError> {
    non_empty(raw).ok_or(ValidationError::MissingField(field))
}

fn order_or_zero(raw: &str) -> i32 {
    raw.trim().parse().unwrap_or(0)
}

// ========================
// Home
// ========================

#[derive(Debug, Clone, Default, PartialEq)]
pub struct HomeForm {
    pub hero_text: String,
    pub subtitle: String,
    pub hero_image_url: String,
    pub wedding_date: String,
    pub text_color: String,
    pub navbar_color: String,
    pub navbar_text_color: String,
    pub accent_color: String,
    pub body_bg_color: String,
    pub body_heading_color: String,
    pub body_text_color: String,
    pub footer_bg_color: String,
    pub footer_text_color: String,
}

/// A palette color input: label, getter, setter, default
pub struct ColorField {
    pub label: &'static str,
    pub get: fn(&HomeForm) -> String,
    pub set: fn(&mut HomeForm, String),
    pub default: fn(&ThemePalette) -> String,
}

pub const COLOR_FIELDS: &[ColorField] = &[
    ColorField {
        label: "Hero Text Color",
        get: |f| f.text_color.clone(),
        set: |f, v| f.text_color = v,
        default: |p| p.text_color.clone(),
    },
    ColorField {
        label: "Navbar Background",
        get: |f| f.navbar_color.clone(),
        set: |f, v| f.navbar_color = v,
        default: |p| p.navbar_color.clone(),
    },
    ColorField {
        label: "Navbar Text",
        get: |f| f.navbar_text_color.clone(),
        set: |f, v| f.navbar_text_color = v,
        default: |p| p.navbar_text_color.clone(),
    },
    ColorField {
        label: "Accent",
        get: |f| f.accent_color.clone(),
        set: |f, v| f.accent_color = v,
        default: |p| p.accent_color.clone(),
    },
    ColorField {
        label: "Page Background",
        get: |f| f.body_bg_color.clone(),
        set: |f, v| f.body_bg_color = v,
        default: |p| p.body_bg_color.clone(),
    },
    ColorField {
        label: "Headings",
        get: |f| f.body_heading_color.clone(),
        set: |f, v| f.body_heading_color = v,
        default: |p| p.body_heading_color.clone(),
    },
    ColorField {
        label: "Body Text",
        get: |f| f.body_text_color.clone(),
        set: |f, v| f.body_text_color = v,
        default: |p| p.body_text_color.clone(),
    },
    ColorField {
        label: "Footer Background",
        get: |f| f.footer_bg_color.clone(),
        set: |f, v| f.footer_bg_color = v,
        default: |p| p.footer_bg_color.clone(),
    },
    ColorField {
        label: "Footer Text",
        get: |f| f.footer_text_color.clone(),
        set: |f, v| f.footer_text_color = v,
        default: |p| p.footer_text_color.clone(),
    },
];

impl HomeForm {
    pub fn from_content(content: &HomeContent) -> Self {
        let text = |v: &Option<String>| v.clone().unwrap_or_default();
        Self {
            hero_text: text(&content.hero_text),
            subtitle: text(&content.subtitle),
            hero_image_url: text(&content.hero_image_url),
            wedding_date: content.wedding_date.map(|d| d.format("%Y-%m-%d").to_string()).unwrap_or_default(),
            text_color: text(&content.text_color),
            navbar_color: text(&content.navbar_color),
            navbar_text_color: text(&content.navbar_text_color),
            accent_color: text(&content.accent_color),
            body_bg_color: text(&content.body_bg_color),
            body_heading_color: text(&content.body_heading_color),
            body_text_color: text(&content.body_text_color),
            footer_bg_color: text(&content.footer_bg_color),
            footer_text_color: text(&content.footer_text_color),
        }
    }

    pub fn to_update(&self) -> Result<HomeContentUpdate, ValidationError> {
        let wedding_date = match opt(&self.wedding_date) {
            Some(raw) => Some(
                NaiveDate::parse_from_str(&raw, "%Y-%m-%d").map_err(|_| ValidationError::InvalidDate(raw))?,
            ),
            None => None,
        };
        Ok(HomeContentUpdate {
            hero_text: opt(&self.hero_text),
            hero_image_url: opt(&self.hero_image_url),
            wedding_date,
            subtitle: opt(&self.subtitle),
            text_color: opt(&self.text_color),
            navbar_color: opt(&self.navbar_color),
            navbar_text_color: opt(&self.navbar_text_color),
            accent_color: opt(&self.accent_color),
            body_bg_color: opt(&self.body_bg_color),
            body_heading_color: opt(&self.body_heading_color),
            body_text_color: opt(&self.body_text_color),
            footer_bg_color: opt(&self.footer_bg_color),
            footer_text_color: opt(&self.footer_text_color),
        })
    }
}

// ========================
// Story
// ========================

#[derive(Debug, Clone, Default, PartialEq)]
pub struct StorySectionForm {
    pub title: String,
    pub content: String,
    pub order: String,
}

impl StorySectionForm {
    pub fn from_section(section: &StorySection) -> Self {
        Self {
            title: section.title.clone(),
            content: section.content.clone(),
            order: section.order.to_string(),
        }
    }

    pub fn to_input(&self) -> Result<StorySectionInput, ValidationError> {
        Ok(StorySectionInput {
            title: required(&self.title, "Title")?,
            content: required(&self.content, "Content")?,
            order: order_or_zero(&self.order),
        })
    }
}

/// Story or gallery image: a hosted URL and an optional caption
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ImageForm {
    pub image_url: String,
    pub caption: String,
}

impl ImageForm {
    fn parts(&self) -> Result<(String, Option<String>), ValidationError> {
        let image_url = non_empty(&self.image_url).ok_or(ValidationError::MissingField("Image"))?;
        Ok((image_url, opt(&self.caption)))
    }

    /// New images go to the end of the collection
    pub fn to_story_input(&self, order: i32) -> Result<StoryImageInput, ValidationError> {
        let (image_url, caption) = self.parts()?;
        Ok(StoryImageInput { image_url, caption, order })
    }

    pub fn to_gallery_input(&self, order: i32) -> Result<GalleryImageInput, ValidationError> {
        let (image_url, caption) = self.parts()?;
        Ok(GalleryImageInput { image_url, caption, order })
    }
}

// ========================
// Information
// ========================

#[derive(Debug, Clone, PartialEq)]
pub struct InfoForm {
    pub title: String,
    pub description: String,
    pub icon: String,
    pub section_type: String,
    pub map_embed_url: String,
    pub image_url: String,
    pub gallery_urls: Vec<String>,
    pub additional_info: String,
}

impl Default for InfoForm {
    fn default() -> Self {
        Self {
            title: String::new(),
            description: String::new(),
            icon: String::new(),
            section_type: SECTION_TYPES[0].0.to_string(),
            map_embed_url: String::new(),
            image_url: String::new(),
            gallery_urls: Vec::new(),
            additional_info: String::new(),
        }
    }
}

impl InfoForm {
    pub fn from_section(section: &InfoSection) -> Self {
        let text = |v: &Option<String>| v.clone().unwrap_or_default();
        Self {
            title: section.title.clone(),
            description: text(&section.description),
            icon: text(&section.icon),
            section_type: section.section_type.clone(),
            map_embed_url: text(&section.map_embed_url),
            image_url: text(&section.image_url),
            gallery_urls: section.gallery_urls.clone(),
            additional_info: text(&section.additional_info),
        }
    }

    pub fn add_gallery_url(&mut self, url: String) {
        if !url.is_empty() && !self.gallery_urls.contains(&url) {
            self.gallery_urls.push(url);
        }
    }

    pub fn to_input(&self) -> Result<InfoSectionInput, ValidationError> {
        Ok(InfoSectionInput {
            title: required(&self.title, "Title")?,
            description: opt(&self.description),
            icon: opt(&self.icon),
            section_type: required(&self.section_type, "Section type")?,
            map_embed_url: opt(&self.map_embed_url),
            image_url: opt(&self.image_url),
            gallery_urls: self.gallery_urls.iter().filter_map(|u| non_empty(u)).collect(),
            additional_info: opt(&self.additional_info),
        })
    }
}

// ========================
// Timeline
// ========================

#[derive(Debug, Clone, Default, PartialEq)]
pub struct TimelineForm {
    pub time: String,
    pub title: String,
    pub description: String,
    pub icon: String,
    pub order: String,
}

impl TimelineForm {
    pub fn from_event(event: &TimelineEvent) -> Self {
        Self {
            time: event.time.format("%H:%M").to_string(),
            title: event.title.clone(),
            description: event.description.clone().unwrap_or_default(),
            icon: event.icon.clone().unwrap_or_default(),
            order: event.order.to_string(),
        }
    }

    pub fn to_input(&self) -> Result<TimelineEventInput, ValidationError> {
        Ok(TimelineEventInput {
            time: parse_time_input(&self.time)?,
            title: required(&self.title, "Title")?,
            description: opt(&self.description),
            icon: opt(&self.icon),
            order: order_or_zero(&self.order),
        })
    }
}

// ========================
// Gifts
// ========================

#[derive(Debug, Clone, PartialEq)]
pub struct GiftForm {
    pub title: String,
    pub description: String,
    pub link: String,
    pub image_url: String,
    pub item_type: String,
    pub order: String,
}

impl Default for GiftForm {
    fn default() -> Self {
        Self {
            title: String::new(),
            description: String::new(),
            link: String::new(),
            image_url: String::new(),
            item_type: GIFT_TYPES[0].0.to_string(),
            order: String::new(),
        }
    }
}

impl GiftForm {
    pub fn from_item(item: &GiftItem) -> Self {
        Self {
            title: item.title.clone(),
            description: item.description.clone().unwrap_or_default(),
            link: item.link.clone(),
            image_url: item.image_url.clone().unwrap_or_default(),
            item_type: item.item_type.clone(),
            order: item.order.to_string(),
        }
    }

    pub fn to_input(&self) -> Result<GiftItemInput, ValidationError> {
        Ok(GiftItemInput {
            title: required(&self.title, "Title")?,
            description: opt(&self.description),
            link: required(&self.link, "Link")?,
            image_url: opt(&self.image_url),
            item_type: required(&self.item_type, "Type")?,
            order: order_or_zero(&self.order),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveTime;

    #[test]
    fn test_home_form_blanks_become_null() {
        let form = HomeForm {
            hero_text: " Bianca & Joel ".into(),
            wedding_date: "2025-06-15".into(),
            accent_color: "#112233".into(),
            navbar_color: "  ".into(),
            ..HomeForm::default()
        };
        let update = form.to_update().unwrap();
        assert_eq!(update.hero_text.as_deref(), Some("Bianca & Joel"));
        assert_eq!(update.wedding_date, NaiveDate::from_ymd_opt(2025, 6, 15));
        assert_eq!(update.accent_color.as_deref(), Some("#112233"));
        assert_eq!(update.navbar_color, None);
        assert_eq!(update.subtitle, None);

        let body = serde_json::to_value(&update).unwrap();
        assert_eq!(body["wedding_date"], "2025-06-15");
        assert!(body["subtitle"].is_null());
    }

    #[test]
    fn test_home_form_round_trips_content() {
        let content = HomeContent {
            id: 1,
            hero_text: Some("Ana & Léo".into()),
            wedding_date: NaiveDate::from_ymd_opt(2026, 1, 2),
            footer_bg_color: Some("#CFA7A4".into()),
            ..HomeContent::default()
        };
        let form = HomeForm::from_content(&content);
        assert_eq!(form.wedding_date, "2026-01-02");
        let update = form.to_update().unwrap();
        assert_eq!(update.hero_text, content.hero_text);
        assert_eq!(update.footer_bg_color, content.footer_bg_color);
        assert_eq!(update.text_color, None);
    }

    #[test]
    fn test_home_form_rejects_bad_date() {
        let form = HomeForm { wedding_date: "15/06/2025".into(), ..HomeForm::default() };
        assert_eq!(form.to_update(), Err(ValidationError::InvalidDate("15/06/2025".into())));
    }

    #[test]
    fn test_color_fields_cover_palette() {
        let mut form = HomeForm::default();
        for field in COLOR_FIELDS {
            (field.set)(&mut form, "#000000".into());
            assert_eq!((field.get)(&form), "#000000");
        }
        let update = form.to_update().unwrap();
        assert_eq!(update.footer_text_color.as_deref(), Some("#000000"));
        let defaults: Vec<String> = COLOR_FIELDS.iter().map(|f| (f.default)(&ThemePalette::default())).collect();
        assert_eq!(defaults.len(), 9);
        assert_eq!(defaults[3], "#D4B483");
    }

    #[test]
    fn test_story_section_requires_title_and_content() {
        let form = StorySectionForm { title: "How we met".into(), content: " ".into(), order: "x".into() };
        assert_eq!(form.to_input(), Err(ValidationError::MissingField("Content")));

        let ok = StorySectionForm { content: "At a café".into(), ..form }.to_input().unwrap();
        assert_eq!(ok.order, 0);
    }

    #[test]
    fn test_image_form() {
        assert_eq!(ImageForm::default().to_gallery_input(0), Err(ValidationError::MissingField("Image")));
        let input = ImageForm { image_url: "/static/uploads/a.jpg".into(), caption: "".into() }
            .to_story_input(4)
            .unwrap();
        assert_eq!(input.order, 4);
        assert_eq!(input.caption, None);
    }

    #[test]
    fn test_info_form_gallery_urls() {
        let mut form = InfoForm { title: "Hotel".into(), section_type: "hotel".into(), ..InfoForm::default() };
        form.add_gallery_url("/static/a.jpg".into());
        form.add_gallery_url("/static/a.jpg".into());
        form.add_gallery_url(String::new());
        let input = form.to_input().unwrap();
        assert_eq!(input.gallery_urls, vec!["/static/a.jpg"]);
        assert_eq!(input.description, None);
        assert_eq!(InfoForm::default().section_type, "ceremony");
    }

    #[test]
    fn test_timeline_form() {
        let form = TimelineForm { time: "16:30".into(), title: "Ceremony".into(), order: "2".into(), ..Default::default() };
        let input = form.to_input().unwrap();
        assert_eq!(input.time, NaiveTime::from_hms_opt(16, 30, 0).unwrap());
        assert_eq!(input.order, 2);

        let bad = TimelineForm { time: "late".into(), ..form };
        assert!(matches!(bad.to_input(), Err(ValidationError::InvalidTime(_))));
    }

    #[test]
    fn test_gift_form_requires_link() {
        let form = GiftForm { title: "Honeymoon fund".into(), ..GiftForm::default() };
        assert_eq!(form.to_input(), Err(ValidationError::MissingField("Link")));
        assert_eq!(GiftForm::default().item_type, "external");
    }
}
