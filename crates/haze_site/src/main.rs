//! The `haze` command line

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use haze_core::Size;
use haze_site::{
    HeadlessRunConfig, HeadlessRuntime, Page, PortfolioApp, RecordingRouter, SiteConfig,
};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "haze", about = "Portfolio site runtime", version)]
struct Cli {
    /// Path to the site configuration file
    #[arg(long, global = true, default_value = "haze.toml")]
    config: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print a page's resolved head HTML and section summary
    Render {
        /// Page name: home, about, projects, contact
        #[arg(long, default_value = "home")]
        page: String,
    },
    /// Drive the app through a headless frame loop
    Run {
        /// Number of frames to execute
        #[arg(long, default_value_t = 120)]
        frames: u32,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();
    let config = SiteConfig::load(&cli.config)
        .with_context(|| format!("loading {}", cli.config.display()))?;

    match cli.command {
        Command::Render { page } => render(config, &page),
        Command::Run { frames } => run(config, frames),
    }
}

fn render(config: SiteConfig, name: &str) -> Result<()> {
    let page = Page::from_name(name)
        .with_context(|| format!("unknown page '{name}' (expected home, about, projects, or contact)"))?;
    let app = PortfolioApp::headless(config, Size::new(1280.0, 720.0));

    println!("{}", app.head_html(page));
    println!("# {} ({})", page.title(), page.path());
    for section in page.sections() {
        println!("- {}: {}", section.heading, section.body);
    }
    Ok(())
}

fn run(config: SiteConfig, frames: u32) -> Result<()> {
    let cfg = HeadlessRunConfig {
        max_frames: frames,
        ..Default::default()
    };
    let viewport = Size::new(cfg.width as f32, cfg.height as f32);
    let mut app = PortfolioApp::headless(config, viewport);
    let mut router = RecordingRouter::new();
    app.mount_page(Page::Home);

    HeadlessRuntime::run(cfg, |cx| {
        // A scripted session: drift the pointer, scroll steadily, and
        // swap to the projects page mid-run.
        let t = cx.elapsed_ms as f32;
        app.pointer_moved(
            cx.width as f32 / 2.0 + (t / 300.0).sin() * 200.0,
            cx.height as f32 / 2.0 + (t / 450.0).cos() * 120.0,
        );
        app.scrolled(t * 0.4);
        if cx.frame_index == cfg.max_frames / 2 {
            app.navigate(Page::Projects.path(), &mut router);
        }
        app.frame(cfg.tick_ms as f32);

        if cx.frame_index % 30 == 0 {
            tracing::info!(
                frame = cx.frame_index,
                nodes = app.stage().len(),
                tweens = app.scheduler().active_count(),
                "frame"
            );
        }
    })?;

    app.unmount_page();
    tracing::info!(
        nodes = app.stage().len(),
        tweens = app.scheduler().active_count(),
        routes = router.history().len(),
        "run complete"
    );
    Ok(())
}
