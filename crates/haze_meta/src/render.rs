//! Head tag rendering

use crate::meta::{MetaDefaults, PageMeta};

/// One rendered document head tag
#[derive(Clone, Debug, PartialEq)]
pub enum HeadTag {
    Title(String),
    /// `<meta name=... content=...>`
    Meta { name: String, content: String },
    /// `<meta property=... content=...>` (Open Graph)
    Property { property: String, content: String },
    /// `<link rel=... href=...>`
    Link { rel: String, href: String },
    /// `<script type="application/ld+json">`
    JsonLd(String),
}

fn meta(name: &str, content: impl Into<String>) -> HeadTag {
    HeadTag::Meta {
        name: name.to_string(),
        content: content.into(),
    }
}

fn property(property: &str, content: impl Into<String>) -> HeadTag {
    HeadTag::Property {
        property: property.to_string(),
        content: content.into(),
    }
}

/// Render a page's head tags, substituting defaults for omitted fields
pub fn render(page: &PageMeta, defaults: &MetaDefaults) -> Vec<HeadTag> {
    let title = page.title.clone().unwrap_or_else(|| defaults.title.clone());
    let description = page
        .description
        .clone()
        .unwrap_or_else(|| defaults.description.clone());
    let canonical = defaults.resolve_canonical(page.canonical.as_deref());
    let image = page.image.clone().or_else(|| defaults.image.clone());

    let mut tags = vec![
        HeadTag::Title(title.clone()),
        meta("description", description.clone()),
    ];

    if !page.keywords.is_empty() {
        tags.push(meta("keywords", page.keywords.join(", ")));
    }

    tags.push(HeadTag::Link {
        rel: "canonical".to_string(),
        href: canonical.clone(),
    });

    // Open Graph
    tags.push(property("og:title", title.clone()));
    tags.push(property("og:description", description.clone()));
    tags.push(property("og:url", canonical));
    tags.push(property("og:site_name", defaults.site_name.clone()));
    tags.push(property(
        "og:type",
        if page.article.is_some() {
            "article"
        } else {
            "website"
        },
    ));
    if let Some(ref image) = image {
        tags.push(property("og:image", image.clone()));
    }

    // Twitter card
    tags.push(meta("twitter:card", page.card_type.as_str()));
    tags.push(meta("twitter:title", title));
    tags.push(meta("twitter:description", description));
    if let Some(ref image) = image {
        tags.push(meta("twitter:image", image.clone()));
    }

    if let Some(ref article) = page.article {
        if let Some(ref published) = article.published_time {
            tags.push(property("article:published_time", published.clone()));
        }
        if let Some(ref modified) = article.modified_time {
            tags.push(property("article:modified_time", modified.clone()));
        }
        if let Some(ref author) = article.author {
            tags.push(property("article:author", author.clone()));
        }
        for tag in &article.tags {
            tags.push(property("article:tag", tag.clone()));
        }
    }

    if let Some(ref data) = page.structured_data {
        match serde_json::to_string(data) {
            Ok(json) => tags.push(HeadTag::JsonLd(json)),
            Err(err) => tracing::warn!(%err, "skipping unserializable structured data"),
        }
    }

    tags
}

/// Render head tags to an HTML string
pub fn render_html(page: &PageMeta, defaults: &MetaDefaults) -> String {
    let mut html = String::new();
    for tag in render(page, defaults) {
        match tag {
            HeadTag::Title(title) => {
                html.push_str(&format!("<title>{}</title>\n", escape(&title)));
            }
            HeadTag::Meta { name, content } => {
                html.push_str(&format!(
                    "<meta name=\"{}\" content=\"{}\">\n",
                    escape(&name),
                    escape(&content)
                ));
            }
            HeadTag::Property { property, content } => {
                html.push_str(&format!(
                    "<meta property=\"{}\" content=\"{}\">\n",
                    escape(&property),
                    escape(&content)
                ));
            }
            HeadTag::Link { rel, href } => {
                html.push_str(&format!(
                    "<link rel=\"{}\" href=\"{}\">\n",
                    escape(&rel),
                    escape(&href)
                ));
            }
            HeadTag::JsonLd(json) => {
                // Script bodies take a narrower escape: only close-tag
                // sequences are dangerous inside JSON.
                let body = json.replace("</", "<\\/");
                html.push_str(&format!(
                    "<script type=\"application/ld+json\">{}</script>\n",
                    body
                ));
            }
        }
    }
    html
}

/// Escape text for use in HTML attribute values and element bodies
fn escape(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for ch in value.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::meta::{ArticleMeta, CardType};
    use serde_json::json;

    fn find_meta<'a>(tags: &'a [HeadTag], target: &str) -> Option<&'a str> {
        tags.iter().find_map(|tag| match tag {
            HeadTag::Meta { name, content } if name == target => Some(content.as_str()),
            _ => None,
        })
    }

    fn find_property<'a>(tags: &'a [HeadTag], target: &str) -> Option<&'a str> {
        tags.iter().find_map(|tag| match tag {
            HeadTag::Property { property, content } if property == target => {
                Some(content.as_str())
            }
            _ => None,
        })
    }

    #[test]
    fn test_empty_meta_uses_defaults_everywhere() {
        let page: PageMeta = serde_json::from_str("{}").unwrap();
        let defaults = MetaDefaults::default();
        let tags = render(&page, &defaults);

        assert_eq!(tags[0], HeadTag::Title("Portfolio".to_string()));
        assert_eq!(find_meta(&tags, "description"), Some("Personal portfolio"));
        assert!(tags.contains(&HeadTag::Link {
            rel: "canonical".to_string(),
            href: "https://example.com".to_string(),
        }));
        assert_eq!(find_property(&tags, "og:type"), Some("website"));
        assert_eq!(find_meta(&tags, "twitter:card"), Some("summary_large_image"));
    }

    #[test]
    fn test_keywords_omitted_when_empty() {
        let tags = render(&PageMeta::default(), &MetaDefaults::default());
        assert_eq!(find_meta(&tags, "keywords"), None);
    }

    #[test]
    fn test_article_switches_og_type_and_adds_tags() {
        let page = PageMeta {
            article: Some(ArticleMeta {
                published_time: Some("2024-05-01T00:00:00Z".to_string()),
                modified_time: None,
                author: Some("Ada".to_string()),
                tags: vec!["rust".to_string(), "graphics".to_string()],
            }),
            ..Default::default()
        };
        let tags = render(&page, &MetaDefaults::default());

        assert_eq!(find_property(&tags, "og:type"), Some("article"));
        assert_eq!(
            find_property(&tags, "article:published_time"),
            Some("2024-05-01T00:00:00Z")
        );
        let article_tags: Vec<_> = tags
            .iter()
            .filter(|t| matches!(t, HeadTag::Property { property, .. } if property == "article:tag"))
            .collect();
        assert_eq!(article_tags.len(), 2);
    }

    #[test]
    fn test_summary_card_type() {
        let page = PageMeta {
            card_type: CardType::Summary,
            ..Default::default()
        };
        let tags = render(&page, &MetaDefaults::default());
        assert_eq!(find_meta(&tags, "twitter:card"), Some("summary"));
    }

    #[test]
    fn test_structured_data_renders_as_json_ld() {
        let page = PageMeta {
            structured_data: Some(json!({"@type": "Person", "name": "Ada"})),
            ..Default::default()
        };
        let tags = render(&page, &MetaDefaults::default());
        let json_ld = tags.iter().find_map(|t| match t {
            HeadTag::JsonLd(body) => Some(body),
            _ => None,
        });
        assert!(json_ld.is_some_and(|body| body.contains("\"@type\":\"Person\"")));
    }

    #[test]
    fn test_html_escapes_attribute_values() {
        let page = PageMeta::titled("Hi <there> & \"friends\"");
        let html = render_html(&page, &MetaDefaults::default());
        assert!(html.contains("<title>Hi &lt;there&gt; &amp; &quot;friends&quot;</title>"));
        assert!(!html.contains("<there>"));
    }
}
