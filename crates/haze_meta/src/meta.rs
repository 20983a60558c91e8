//! Page metadata configuration

use serde::{Deserialize, Serialize};

/// Social card layout
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CardType {
    Summary,
    #[default]
    SummaryLargeImage,
}

impl CardType {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Summary => "summary",
            Self::SummaryLargeImage => "summary_large_image",
        }
    }
}

/// Article-specific metadata
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ArticleMeta {
    /// RFC 3339 timestamp
    #[serde(default)]
    pub published_time: Option<String>,
    /// RFC 3339 timestamp
    #[serde(default)]
    pub modified_time: Option<String>,
    #[serde(default)]
    pub author: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
}

/// Per-page metadata; every field optional, defaults substituted at render
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct PageMeta {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub keywords: Vec<String>,
    /// Absolute URL, or a path resolved against the base site URL
    #[serde(default)]
    pub canonical: Option<String>,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub card_type: CardType,
    #[serde(default)]
    pub article: Option<ArticleMeta>,
    /// JSON-LD payload rendered into a script tag
    #[serde(default)]
    pub structured_data: Option<serde_json::Value>,
}

impl PageMeta {
    pub fn titled(title: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            ..Default::default()
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_canonical(mut self, canonical: impl Into<String>) -> Self {
        self.canonical = Some(canonical.into());
        self
    }

    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.image = Some(image.into());
        self
    }
}

/// Site-wide fallbacks for omitted page fields
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MetaDefaults {
    pub title: String,
    pub description: String,
    /// Base site URL canonical paths resolve against
    pub base_url: String,
    pub site_name: String,
    pub image: Option<String>,
}

impl Default for MetaDefaults {
    fn default() -> Self {
        Self {
            title: "Portfolio".to_string(),
            description: "Personal portfolio".to_string(),
            base_url: "https://example.com".to_string(),
            site_name: "Portfolio".to_string(),
            image: None,
        }
    }
}

impl MetaDefaults {
    /// Resolve a canonical value against the base URL
    ///
    /// Absolute URLs pass through; paths are joined onto the base; an
    /// omitted canonical resolves to the base URL itself.
    pub fn resolve_canonical(&self, canonical: Option<&str>) -> String {
        let base = self.base_url.trim_end_matches('/');
        match canonical {
            None => base.to_string(),
            Some(url) if url.starts_with("http://") || url.starts_with("https://") => {
                url.to_string()
            }
            Some(path) => format!("{}/{}", base, path.trim_start_matches('/')),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_canonical_defaults_to_base_url() {
        let defaults = MetaDefaults::default();
        assert_eq!(defaults.resolve_canonical(None), "https://example.com");
    }

    #[test]
    fn test_canonical_joins_paths() {
        let defaults = MetaDefaults {
            base_url: "https://site.dev/".to_string(),
            ..Default::default()
        };
        assert_eq!(
            defaults.resolve_canonical(Some("/about")),
            "https://site.dev/about"
        );
        assert_eq!(
            defaults.resolve_canonical(Some("projects")),
            "https://site.dev/projects"
        );
    }

    #[test]
    fn test_canonical_passes_absolute_urls_through() {
        let defaults = MetaDefaults::default();
        assert_eq!(
            defaults.resolve_canonical(Some("https://other.dev/x")),
            "https://other.dev/x"
        );
    }
}
