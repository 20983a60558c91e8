//! Full-session behavior: mount, interact, navigate, tear down

use haze_core::{NodeKind, Size};
use haze_site::{HeadlessRunConfig, HeadlessRuntime, Page, PortfolioApp, RecordingRouter, SiteConfig};

fn app() -> PortfolioApp<haze_theme::InMemoryStore> {
    PortfolioApp::headless(SiteConfig::default(), Size::new(1280.0, 720.0))
}

#[test]
fn headless_session_ends_clean() {
    let mut app = app();
    let mut router = RecordingRouter::new();
    app.mount_page(Page::Home);

    let cfg = HeadlessRunConfig {
        max_frames: 240,
        tick_ms: 16,
        ..Default::default()
    };
    HeadlessRuntime::run(cfg, |cx| {
        app.pointer_moved(cx.elapsed_ms as f32 % 1280.0, 360.0);
        app.scrolled(cx.elapsed_ms as f32 * 0.3);
        if cx.frame_index == 120 {
            app.navigate("/projects", &mut router);
        }
        app.frame(16.0);
    })
    .unwrap();

    assert_eq!(app.current_page(), Some(Page::Projects));
    assert_eq!(router.history(), &["/projects".to_string()]);

    app.unmount_page();
    assert_eq!(app.stage().len(), 1);
    assert_eq!(app.scheduler().active_count(), 0);
    assert_eq!(app.events().handler_count(), 0);
    assert_eq!(app.scroll().registration_count(), 0);
}

#[test]
fn page_swaps_never_accumulate_resources() {
    let mut app = app();
    for _ in 0..10 {
        for page in Page::ALL {
            app.mount_page(page);
            app.frame(16.0);
        }
    }
    app.unmount_page();

    assert_eq!(app.stage().len(), 1);
    assert_eq!(app.scheduler().active_count(), 0);
    assert_eq!(app.scroll().registration_count(), 0);
}

#[test]
fn ambient_population_respects_config_overrides() {
    let mut config = SiteConfig::default();
    config.effects.particle_count = 5;
    config.effects.shape_count = 2;
    let mut app = PortfolioApp::headless(config, Size::new(1280.0, 720.0));

    app.mount_page(Page::Contact);
    assert_eq!(app.stage().count_kind(NodeKind::Shape), 2 + 1); // plus the action button
    assert!(app.stage().count_kind(NodeKind::Particle) >= 5);
}

#[test]
fn render_output_has_head_for_every_page() {
    let app = app();
    for page in Page::ALL {
        let html = app.head_html(page);
        assert!(html.contains("<title>"));
        assert!(html.contains("og:title"));
        assert!(html.contains("rel=\"canonical\""));
    }
}
