//! The page catalog
//!
//! Four fixed pages, each a list of content sections plus the metadata the
//! document head renders for it.

use crate::config::SiteConfig;
use haze_meta::PageMeta;

/// A page of the portfolio
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Page {
    Home,
    About,
    Projects,
    Contact,
}

/// One content section within a page
#[derive(Clone, Debug)]
pub struct SectionContent {
    pub heading: &'static str,
    pub body: &'static str,
}

impl Page {
    pub const ALL: [Page; 4] = [Page::Home, Page::About, Page::Projects, Page::Contact];

    pub fn path(self) -> &'static str {
        match self {
            Page::Home => "/",
            Page::About => "/about",
            Page::Projects => "/projects",
            Page::Contact => "/contact",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Page::Home => "Home",
            Page::About => "About",
            Page::Projects => "Projects",
            Page::Contact => "Contact",
        }
    }

    /// Resolve a route path to a page
    pub fn from_path(path: &str) -> Option<Page> {
        Page::ALL.into_iter().find(|p| p.path() == path)
    }

    /// Resolve a lowercase page name, for the CLI
    pub fn from_name(name: &str) -> Option<Page> {
        match name {
            "home" => Some(Page::Home),
            "about" => Some(Page::About),
            "projects" => Some(Page::Projects),
            "contact" => Some(Page::Contact),
            _ => None,
        }
    }

    pub fn sections(self) -> Vec<SectionContent> {
        match self {
            Page::Home => vec![
                SectionContent {
                    heading: "Hero",
                    body: "Introduction and headline",
                },
                SectionContent {
                    heading: "Featured work",
                    body: "Selected projects at a glance",
                },
                SectionContent {
                    heading: "Get in touch",
                    body: "Contact call to action",
                },
            ],
            Page::About => vec![
                SectionContent {
                    heading: "Bio",
                    body: "Background and focus",
                },
                SectionContent {
                    heading: "Skills",
                    body: "Tools and technologies",
                },
            ],
            Page::Projects => vec![
                SectionContent {
                    heading: "Projects",
                    body: "Project grid",
                },
                SectionContent {
                    heading: "Open source",
                    body: "Contributions and libraries",
                },
                SectionContent {
                    heading: "Writing",
                    body: "Articles and talks",
                },
            ],
            Page::Contact => vec![SectionContent {
                heading: "Contact",
                body: "Email and social links",
            }],
        }
    }

    /// Head metadata for this page under the given site config
    pub fn meta(self, config: &SiteConfig) -> PageMeta {
        let title = format!("{} | {}", self.title(), config.site.name);
        PageMeta::titled(title)
            .with_description(config.site.description.clone())
            .with_canonical(self.path())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_path_round_trips() {
        for page in Page::ALL {
            assert_eq!(Page::from_path(page.path()), Some(page));
        }
    }

    #[test]
    fn test_unknown_path_is_none() {
        assert_eq!(Page::from_path("/blog"), None);
    }

    #[test]
    fn test_meta_carries_site_name() {
        let config = SiteConfig::default();
        let meta = Page::About.meta(&config);
        assert_eq!(meta.title.as_deref(), Some("About | Portfolio"));
        assert_eq!(meta.canonical.as_deref(), Some("/about"));
    }

    #[test]
    fn test_every_page_has_sections() {
        for page in Page::ALL {
            assert!(!page.sections().is_empty());
        }
    }
}
