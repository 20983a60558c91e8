//! Haze Portfolio Site
//!
//! The application layer: site configuration, the page catalog, the
//! routing collaborator, the [`PortfolioApp`] that mounts pages with
//! their effect sets, and a deterministic headless frame runtime.

pub mod app;
pub mod config;
pub mod pages;
pub mod router;
pub mod runtime;

pub use app::PortfolioApp;
pub use config::{ConfigError, SiteConfig};
pub use pages::{Page, SectionContent};
pub use router::{RecordingRouter, Router};
pub use runtime::{HeadlessContext, HeadlessRunConfig, HeadlessRuntime};
