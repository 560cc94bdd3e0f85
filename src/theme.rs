//! Theme Propagation
//!
//! The site palette lives in the home-content document. It is fetched once at
//! startup, published as CSS custom properties on the document root, and
//! republished whenever the admin saves new colors.

use std::sync::Arc;

use async_trait::async_trait;
use leptos::prelude::*;
use leptos::task::spawn_local;
use wasm_bindgen::JsCast;

use crate::error::ApiResult;
use crate::models::HomeContent;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThemePalette {
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

impl Default for ThemePalette {
    fn default() -> Self {
        Self {
            text_color: "#8B6F6D".into(),
            navbar_color: "#F8F4EC".into(),
            navbar_text_color: "#8B6F6D".into(),
            accent_color: "#D4B483".into(),
            body_bg_color: "#F8F4EC".into(),
            body_heading_color: "#8B6F6D".into(),
            body_text_color: "#333333".into(),
            footer_bg_color: "#CFA7A4".into(),
            footer_text_color: "#8B6F6D".into(),
        }
    }
}

fn pick(value: &Option<String>, fallback: String) -> String {
    match value.as_deref().map(str::trim) {
        Some(v) if !v.is_empty() => v.to_string(),
        _ => fallback,
    }
}

impl ThemePalette {
    /// Palette from a home document; unset or blank fields keep their default
    pub fn resolve(document: Option<&HomeContent>) -> Self {
        let defaults = Self::default();
        let Some(doc) = document else { return defaults };
        Self {
            text_color: pick(&doc.text_color, defaults.text_color),
            navbar_color: pick(&doc.navbar_color, defaults.navbar_color),
            navbar_text_color: pick(&doc.navbar_text_color, defaults.navbar_text_color),
            accent_color: pick(&doc.accent_color, defaults.accent_color),
            body_bg_color: pick(&doc.body_bg_color, defaults.body_bg_color),
            body_heading_color: pick(&doc.body_heading_color, defaults.body_heading_color),
            body_text_color: pick(&doc.body_text_color, defaults.body_text_color),
            footer_bg_color: pick(&doc.footer_bg_color, defaults.footer_bg_color),
            footer_text_color: pick(&doc.footer_text_color, defaults.footer_text_color),
        }
    }

    pub fn css_variables(&self) -> [(&'static str, &str); 9] {
        [
            ("--theme-hero-text", &self.text_color),
            ("--theme-navbar-bg", &self.navbar_color),
            ("--theme-navbar-text", &self.navbar_text_color),
            ("--theme-accent", &self.accent_color),
            ("--theme-body-bg", &self.body_bg_color),
            ("--theme-body-heading", &self.body_heading_color),
            ("--theme-body-text", &self.body_text_color),
            ("--theme-footer-bg", &self.footer_bg_color),
            ("--theme-footer-text", &self.footer_text_color),
        ]
    }
}

/// Sink for published CSS variables
pub trait StyleRegistry: Send + Sync {
    fn set_variable(&self, name: &str, value: &str);
}

fn publish_to(registry: &dyn StyleRegistry, palette: &ThemePalette) {
    for (name, value) in palette.css_variables() {
        registry.set_variable(name, value);
    }
}

/// Writes variables onto `document.documentElement`
#[derive(Clone, Copy, Debug, Default)]
pub struct DomStyleRegistry;

impl StyleRegistry for DomStyleRegistry {
    fn set_variable(&self, name: &str, value: &str) {
        let root = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.document_element())
            .and_then(|el| el.dyn_into::<web_sys::HtmlElement>().ok());
        if let Some(root) = root {
            if root.style().set_property(name, value).is_err() {
                tracing::warn!(name, "could not set theme variable");
            }
        }
    }
}

/// Where the palette document comes from
#[async_trait(?Send)]
pub trait ThemeSource {
    async fn fetch_theme_document(&self) -> ApiResult<HomeContent>;
}

/// Fetch, resolve and publish the palette. Never fails: errors yield defaults.
pub async fn load_theme(source: &dyn ThemeSource, registry: &dyn StyleRegistry) -> ThemePalette {
    let palette = match source.fetch_theme_document().await {
        Ok(doc) => ThemePalette::resolve(Some(&doc)),
        Err(e) => {
            tracing::error!("Error fetching theme: {e}");
            ThemePalette::default()
        }
    };
    publish_to(registry, &palette);
    palette
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThemePhase {
    Loading,
    Ready,
}

/// Reactive palette shared through context
#[derive(Clone, Copy)]
pub struct ThemeContext {
    palette: RwSignal<ThemePalette>,
    phase: RwSignal<ThemePhase>,
    registry: StoredValue<Arc<dyn StyleRegistry>>,
}

impl ThemeContext {
    pub fn new(registry: Arc<dyn StyleRegistry>) -> Self {
        Self {
            palette: RwSignal::new(ThemePalette::default()),
            phase: RwSignal::new(ThemePhase::Loading),
            registry: StoredValue::new(registry),
        }
    }

    /// Current palette (tracked)
    pub fn get(&self) -> ThemePalette {
        self.palette.get()
    }

    pub fn phase(&self) -> ThemePhase {
        self.phase.get()
    }

    pub async fn load(self, source: &dyn ThemeSource) {
        let registry = self.registry.get_value();
        let palette = load_theme(source, registry.as_ref()).await;
        self.palette.set(palette);
        self.phase.set(ThemePhase::Ready);
    }

    /// Replace the palette and push it to the registry
    pub fn publish(&self, palette: ThemePalette) {
        publish_to(self.registry.get_value().as_ref(), &palette);
        self.palette.set(palette);
        self.phase.set(ThemePhase::Ready);
    }
}

pub fn use_theme() -> ThemeContext {
    expect_context::<ThemeContext>()
}

#[component]
pub fn ThemeProvider(children: Children) -> impl IntoView {
    let api = expect_context::<crate::api::ApiClient>();
    let theme = ThemeContext::new(Arc::new(DomStyleRegistry));
    provide_context(theme);

    spawn_local(async move {
        theme.load(&api).await;
    });

    children()
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use super::*;
    use crate::error::ApiError;

    #[derive(Default)]
    struct RecordingRegistry {
        writes: Mutex<Vec<(String, String)>>,
    }

    impl RecordingRegistry {
        fn value(&self, name: &str) -> Option<String> {
            let writes = self.writes.lock().unwrap();
            writes.iter().rev().find(|(n, _)| n == name).map(|(_, v)| v.clone())
        }
    }

    impl StyleRegistry for RecordingRegistry {
        fn set_variable(&self, name: &str, value: &str) {
            self.writes.lock().unwrap().push((name.to_string(), value.to_string()));
        }
    }

    struct FailingSource;

    #[async_trait(?Send)]
    impl ThemeSource for FailingSource {
        async fn fetch_theme_document(&self) -> ApiResult<HomeContent> {
            Err(ApiError::Status { status: 500, detail: "boom".into() })
        }
    }

    struct FixedSource(HomeContent);

    #[async_trait(?Send)]
    impl ThemeSource for FixedSource {
        async fn fetch_theme_document(&self) -> ApiResult<HomeContent> {
            Ok(self.0.clone())
        }
    }

    #[tokio::test]
    async fn test_fetch_failure_publishes_defaults() {
        let registry = RecordingRegistry::default();
        let palette = load_theme(&FailingSource, &registry).await;

        assert_eq!(palette, ThemePalette::default());
        assert_eq!(palette.accent_color, "#D4B483");
        assert_eq!(registry.writes.lock().unwrap().len(), 9);
        assert_eq!(registry.value("--theme-accent").as_deref(), Some("#D4B483"));
        assert_eq!(registry.value("--theme-footer-bg").as_deref(), Some("#CFA7A4"));
    }

    #[tokio::test]
    async fn test_partial_document_keeps_defaults_for_unset_fields() {
        let doc = HomeContent {
            id: 1,
            accent_color: Some("#112233".into()),
            navbar_color: Some("rgb(1, 2, 3)".into()),
            footer_text_color: Some("   ".into()),
            ..HomeContent::default()
        };
        let registry = RecordingRegistry::default();
        let palette = load_theme(&FixedSource(doc), &registry).await;

        assert_eq!(palette.accent_color, "#112233");
        assert_eq!(palette.navbar_color, "rgb(1, 2, 3)");
        assert_eq!(palette.footer_text_color, "#8B6F6D");
        assert_eq!(palette.body_text_color, "#333333");
        assert_eq!(registry.value("--theme-navbar-bg").as_deref(), Some("rgb(1, 2, 3)"));
    }

    #[test]
    fn test_publish_replaces_palette_and_variables() {
        Owner::new().with(|| {
            let registry = Arc::new(RecordingRegistry::default());
            let theme = ThemeContext::new(registry.clone());
            assert_eq!(theme.phase(), ThemePhase::Loading);

            let saved = HomeContent {
                id: 1,
                accent_color: Some("#445566".into()),
                ..HomeContent::default()
            };
            theme.publish(ThemePalette::resolve(Some(&saved)));

            assert_eq!(registry.value("--theme-accent").as_deref(), Some("#445566"));
            assert_eq!(theme.get().accent_color, "#445566");
            assert_eq!(theme.phase(), ThemePhase::Ready);

            // Clearing the color in the admin form falls back to the default
            theme.publish(ThemePalette::resolve(Some(&HomeContent::default())));
            assert_eq!(registry.value("--theme-accent").as_deref(), Some("#D4B483"));
            assert_eq!(theme.get(), ThemePalette::default());
        });
    }

    #[test]
    fn test_css_variable_names() {
        let names: Vec<&str> = ThemePalette::default().css_variables().iter().map(|(n, _)| *n).collect();
        assert_eq!(names[0], "--theme-hero-text");
        assert_eq!(names[3], "--theme-accent");
        assert!(names.iter().all(|n| n.starts_with("--theme-")));
    }
}
