//! The portfolio application
//!
//! Owns the stage, the animation scheduler, the event and scroll
//! dispatchers, the theme state, and whichever page is currently mounted
//! along with its effect set. A page swap always tears the old page down
//! completely before the next one mounts.

use crate::config::SiteConfig;
use crate::pages::Page;
use crate::router::Router;
use haze_animation::TweenScheduler;
use haze_core::{event_types, Event, EventData, EventDispatcher, NodeId, NodeKind, Point, Size, Stage};
use haze_effects::{
    AmbientBackground, AmbientConfig, CursorTrail, CursorTrailConfig, Effect, EffectContext,
    HoverBurst, HoverBurstConfig, SectionReveal, SectionRevealConfig, SmokeTransition,
    SmokeTransitionConfig,
};
use haze_meta::{render_html, MetaDefaults, PageMeta};
use haze_scroll::ScrollDispatcher;
use haze_theme::{ColorScheme, ColorTokens, InMemoryStore, ThemeState, ThemeStore};

/// Vertical spacing between section tops, px
const SECTION_PITCH: f32 = 640.0;

struct MountedPage {
    page: Page,
    sections: Vec<NodeId>,
    ambient: AmbientBackground,
    trail: CursorTrail,
    burst: HoverBurst,
    reveals: Vec<SectionReveal>,
    smoke: SmokeTransition,
}

/// The running portfolio app
pub struct PortfolioApp<S: ThemeStore> {
    config: SiteConfig,
    stage: Stage,
    scheduler: TweenScheduler,
    events: EventDispatcher,
    scroll: ScrollDispatcher,
    theme: ThemeState<S>,
    viewport: Size,
    pointer: Point,
    clock_ms: u64,
    mounted: Option<MountedPage>,
}

impl PortfolioApp<InMemoryStore> {
    /// An app with an in-memory theme store, for tests and headless runs
    pub fn headless(config: SiteConfig, viewport: Size) -> Self {
        Self::new(config, InMemoryStore::default(), ColorScheme::Light, viewport)
    }
}

impl<S: ThemeStore> PortfolioApp<S> {
    pub fn new(
        config: SiteConfig,
        store: S,
        system_scheme: ColorScheme,
        viewport: Size,
    ) -> Self {
        Self {
            config,
            stage: Stage::new(),
            scheduler: TweenScheduler::new(),
            events: EventDispatcher::new(),
            scroll: ScrollDispatcher::new(viewport.height),
            theme: ThemeState::new(store, system_scheme),
            viewport,
            pointer: Point::ZERO,
            clock_ms: 0,
            mounted: None,
        }
    }

    pub fn config(&self) -> &SiteConfig {
        &self.config
    }

    pub fn stage(&self) -> &Stage {
        &self.stage
    }

    pub fn scheduler(&self) -> &TweenScheduler {
        &self.scheduler
    }

    pub fn events(&self) -> &EventDispatcher {
        &self.events
    }

    pub fn scroll(&self) -> &ScrollDispatcher {
        &self.scroll
    }

    pub fn current_page(&self) -> Option<Page> {
        self.mounted.as_ref().map(|m| m.page)
    }

    fn ambient_config(&self) -> AmbientConfig {
        AmbientConfig {
            particle_count: self.config.effects.particle_count,
            shape_count: self.config.effects.shape_count,
            ..Default::default()
        }
    }

    fn trail_config(&self) -> CursorTrailConfig {
        CursorTrailConfig {
            dot_count: self.config.effects.trail_length,
            ..Default::default()
        }
    }

    /// Mount a page: section nodes, then the full effect set
    ///
    /// Any page already mounted is torn down first, so the previous page's
    /// teardown always precedes the next page's mount.
    pub fn mount_page(&mut self, page: Page) {
        if self.mounted.is_some() {
            self.unmount_page();
        }

        let stage_root = self.stage.root();
        let background = self.stage.create_in(stage_root, NodeKind::Container);
        let root = self.stage.create_in(stage_root, NodeKind::Container);
        let overlay = self.stage.create_in(stage_root, NodeKind::Container);

        let mut sections = Vec::new();
        for (index, content) in page.sections().iter().enumerate() {
            let section = self.stage.create_in(root, NodeKind::Section);
            if let Some(node) = self.stage.get_mut(section) {
                node.position = Point::new(0.0, index as f32 * SECTION_PITCH);
                node.size = Size::new(self.viewport.width, SECTION_PITCH * 0.9);
            }
            let heading = self.stage.create_in(section, NodeKind::Text);
            if let Some(node) = self.stage.get_mut(heading) {
                node.text = Some(content.heading.to_string());
            }
            sections.push(section);
        }

        // Floating action target for the hover burst.
        let fab = self.stage.create_in(overlay, NodeKind::Shape);
        if let Some(node) = self.stage.get_mut(fab) {
            node.position = Point::new(self.viewport.width - 72.0, self.viewport.height - 72.0);
            node.size = Size::new(48.0, 48.0);
        }

        let mut ambient = AmbientBackground::new(background, self.ambient_config());
        let mut trail = CursorTrail::new(overlay, self.trail_config());
        let mut burst = HoverBurst::new(overlay, HoverBurstConfig::default());
        let mut reveals: Vec<SectionReveal> = sections
            .iter()
            .map(|s| SectionReveal::new(*s, SectionRevealConfig::default()))
            .collect();
        let mut smoke = SmokeTransition::new(root, SmokeTransitionConfig::default());

        {
            let mut cx = EffectContext {
                stage: &mut self.stage,
                scheduler: &mut self.scheduler,
                events: &mut self.events,
                scroll: &mut self.scroll,
                viewport: self.viewport,
                pointer: self.pointer,
            };
            ambient.mount(&mut cx);
            trail.mount(&mut cx);
            burst.mount(&mut cx);
            for reveal in &mut reveals {
                reveal.mount(&mut cx);
            }
            smoke.mount(&mut cx);
            smoke.play(&mut cx);
        }

        // Sections already inside the viewport must reveal without any
        // scroll input, so triggers are evaluated once at mount.
        self.scroll.update(self.scroll.scroll_y(), &self.stage);

        self.events.dispatch(&Event::new(
            event_types::MOUNT,
            EventData::None,
            self.clock_ms,
        ));
        tracing::info!(page = page.title(), sections = sections.len(), "page mounted");

        self.mounted = Some(MountedPage {
            page,
            sections,
            ambient,
            trail,
            burst,
            reveals,
            smoke,
        });
    }

    /// Tear down the current page and every effect it mounted
    pub fn unmount_page(&mut self) {
        let Some(mut mounted) = self.mounted.take() else {
            return;
        };
        {
            let mut cx = EffectContext {
                stage: &mut self.stage,
                scheduler: &mut self.scheduler,
                events: &mut self.events,
                scroll: &mut self.scroll,
                viewport: self.viewport,
                pointer: self.pointer,
            };
            mounted.smoke.unmount(&mut cx);
            for reveal in &mut mounted.reveals {
                reveal.unmount(&mut cx);
            }
            mounted.burst.unmount(&mut cx);
            mounted.trail.unmount(&mut cx);
            mounted.ambient.unmount(&mut cx);
        }
        // Effect containers and section nodes hang off the stage root;
        // clearing it drops the page structure in one pass.
        let root = self.stage.root();
        self.stage.clear_children(root);

        self.events.dispatch(&Event::new(
            event_types::UNMOUNT,
            EventData::None,
            self.clock_ms,
        ));
        tracing::info!(page = mounted.page.title(), "page unmounted");
    }

    /// Advance one frame: tweens first, then every mounted effect
    pub fn frame(&mut self, dt_ms: f32) {
        self.clock_ms += dt_ms as u64;
        self.scheduler.tick(dt_ms);

        if let Some(mounted) = self.mounted.as_mut() {
            let mut cx = EffectContext {
                stage: &mut self.stage,
                scheduler: &mut self.scheduler,
                events: &mut self.events,
                scroll: &mut self.scroll,
                viewport: self.viewport,
                pointer: self.pointer,
            };
            mounted.ambient.tick(&mut cx, dt_ms);
            mounted.trail.tick(&mut cx, dt_ms);
            mounted.burst.tick(&mut cx, dt_ms);
            for reveal in &mut mounted.reveals {
                reveal.tick(&mut cx, dt_ms);
            }
            mounted.smoke.tick(&mut cx, dt_ms);
        }
    }

    /// Feed a pointer position into the event stream
    pub fn pointer_moved(&mut self, x: f32, y: f32) {
        self.pointer = Point::new(x, y);
        self.events
            .dispatch(&Event::pointer_move(x, y, self.clock_ms));
    }

    /// Feed a scroll offset, evaluating reveal triggers
    pub fn scrolled(&mut self, offset_y: f32) {
        self.scroll.update(offset_y, &self.stage);
        self.events
            .dispatch(&Event::scroll(offset_y, self.clock_ms));
    }

    /// Route to a path and swap pages if it names one
    ///
    /// Unknown paths route (the host may handle them) but leave the
    /// current page mounted.
    pub fn navigate(&mut self, path: &str, router: &mut dyn Router) {
        router.navigate(path);
        match Page::from_path(path) {
            Some(page) => self.mount_page(page),
            None => tracing::debug!(path, "no page for path, keeping current"),
        }
    }

    pub fn toggle_theme(&mut self) -> ColorScheme {
        self.theme.toggle();
        self.theme.resolved()
    }

    pub fn theme(&self) -> &ThemeState<S> {
        &self.theme
    }

    pub fn colors(&self) -> ColorTokens {
        self.theme.colors()
    }

    /// Resolved head metadata for a page
    pub fn page_meta(&self, page: Page) -> PageMeta {
        page.meta(&self.config)
    }

    fn meta_defaults(&self) -> MetaDefaults {
        MetaDefaults {
            title: self.config.site.name.clone(),
            description: self.config.site.description.clone(),
            base_url: self.config.site.base_url.clone(),
            site_name: self.config.site.name.clone(),
            image: None,
        }
    }

    /// Rendered head HTML for a page
    pub fn head_html(&self, page: Page) -> String {
        render_html(&page.meta(&self.config), &self.meta_defaults())
    }
}
