//! Haze Head Metadata
//!
//! Renders a page's metadata configuration into document head tags:
//! title, description, canonical link, Open Graph and Twitter card
//! properties, article metadata, and JSON-LD structured data. Defaults
//! are substituted for every omitted field, so an empty config still
//! yields a complete head.
//!
//! # Example
//!
//! ```rust
//! use haze_meta::{MetaDefaults, PageMeta, render};
//!
//! let defaults = MetaDefaults::default();
//! let tags = render(&PageMeta::default(), &defaults);
//! assert!(!tags.is_empty());
//! ```

pub mod meta;
pub mod render;

pub use meta::{ArticleMeta, CardType, MetaDefaults, PageMeta};
pub use render::{render, render_html, HeadTag};
