use alloc::string::{String, ToString};
use alloc::vec::Vec;

use vitrine::{
    Counter, CounterFrame, Key, Margin, NavState, ObserverOptions, Reveal, RevealMode,
    RevealOptions, RevealTarget, ScrollEffects, Slider, SliderOptions, VisibilityObserver,
};

use crate::{Surface, Throttle};

/// Default rate limit for scroll and resize handling (~60fps).
pub const DEFAULT_THROTTLE_MS: u64 = 16;

/// Configuration for [`Page`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PageConfig {
    pub slider: SliderOptions,
    pub reveal: RevealOptions,
    /// Observer settings for the stats section (counters start once it is half visible).
    pub stats_observer: ObserverOptions,
    pub scroll_throttle_ms: u64,
    pub resize_throttle_ms: u64,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            slider: SliderOptions::default(),
            reveal: RevealOptions::default(),
            stats_observer: ObserverOptions::default()
                .with_threshold(0.5)
                .with_root_margin(Margin::ZERO),
            scroll_throttle_ms: DEFAULT_THROTTLE_MS,
            resize_throttle_ms: DEFAULT_THROTTLE_MS,
        }
    }
}

impl PageConfig {
    pub fn with_slider(mut self, slider: SliderOptions) -> Self {
        self.slider = slider;
        self
    }

    pub fn with_reveal(mut self, reveal: RevealOptions) -> Self {
        self.reveal = reveal;
        self
    }

    pub fn with_stats_observer(mut self, stats_observer: ObserverOptions) -> Self {
        self.stats_observer = stats_observer;
        self
    }

    pub fn with_throttle_ms(mut self, scroll_ms: u64, resize_ms: u64) -> Self {
        self.scroll_throttle_ms = scroll_ms;
        self.resize_throttle_ms = resize_ms;
        self
    }
}

/// What the page contains, captured once after the document is parsed.
///
/// Empty fields are fine: a page without cards, reveal targets or stats simply leaves the
/// corresponding component inert.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PageContent {
    pub card_count: usize,
    pub reveal_targets: Vec<RevealTarget>,
    /// Initial text of each stat number, in document order.
    pub stat_texts: Vec<String>,
}

impl PageContent {
    pub fn with_cards(mut self, card_count: usize) -> Self {
        self.card_count = card_count;
        self
    }

    /// Adds reveal targets from their raw delay attributes (`None` when absent).
    pub fn with_reveal_delays<'a>(
        mut self,
        delays: impl IntoIterator<Item = Option<&'a str>>,
    ) -> Self {
        self.reveal_targets
            .extend(delays.into_iter().map(RevealTarget::from_delay_attr));
        self
    }

    pub fn with_stats<'a>(mut self, texts: impl IntoIterator<Item = &'a str>) -> Self {
        self.stat_texts.extend(texts.into_iter().map(String::from));
        self
    }
}

/// A framework-neutral page controller that owns every interactive component and routes host
/// events to them.
///
/// This type does not hold any DOM objects; the host passes its page in as a [`Surface`]. Hosts
/// drive it by calling:
/// - `on_scroll` / `on_resize` when the window reports them
/// - `on_prev` / `on_next` / `on_pointer_enter` / `on_pointer_leave` for the slider controls
/// - `on_menu_toggle` / `on_nav_link_click` / `on_key` for navigation
/// - `tick(now_ms)` each frame/timer tick (autoplay, reveal delays, counters, throttled replays)
#[derive(Debug)]
pub struct Page<S> {
    surface: S,
    slider: Slider,
    reveal: Reveal,
    reveal_observer: Option<VisibilityObserver>,
    nav: NavState,
    counters: Vec<(usize, Counter)>,
    stats_observer: VisibilityObserver,
    stats_started: bool,
    scroll_throttle: Throttle,
    resize_throttle: Throttle,
    scroll_y: f32,
}

impl<S: Surface> Page<S> {
    /// Builds every component, renders the initial slider offset, starts autoplay (if enabled)
    /// and runs the initial visibility check.
    pub fn new(surface: S, config: PageConfig, content: PageContent, now_ms: u64) -> Self {
        let slider = Slider::new(content.card_count, surface.container_width(), config.slider);
        let reveal = Reveal::new(content.reveal_targets, config.reveal);

        let reveal_observer = match config.reveal.mode {
            RevealMode::Observer => {
                let mut observer = VisibilityObserver::new(reveal.len(), config.reveal.observer);
                observer.observe_all();
                Some(observer)
            }
            RevealMode::Polling => None,
        };

        let counters: Vec<(usize, Counter)> = content
            .stat_texts
            .iter()
            .enumerate()
            .filter_map(|(i, text)| Counter::parse(text).map(|c| (i, c)))
            .collect();
        let mut stats_observer = VisibilityObserver::new(1, config.stats_observer);
        if !counters.is_empty() {
            stats_observer.observe(0);
        }

        let mut page = Self {
            surface,
            slider,
            reveal,
            reveal_observer,
            nav: NavState::new(),
            counters,
            stats_observer,
            stats_started: false,
            scroll_throttle: Throttle::new(config.scroll_throttle_ms),
            resize_throttle: Throttle::new(config.resize_throttle_ms),
            scroll_y: 0.0,
        };

        page.surface.set_slider_offset(page.slider.offset());
        if config.slider.autoplay {
            page.slider.start_autoplay(now_ms);
        }
        page.check_visibility(now_ms, true);
        page
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    pub fn into_surface(self) -> S {
        self.surface
    }

    pub fn slider(&self) -> &Slider {
        &self.slider
    }

    pub fn reveal(&self) -> &Reveal {
        &self.reveal
    }

    pub fn nav(&self) -> &NavState {
        &self.nav
    }

    pub fn scroll_y(&self) -> f32 {
        self.scroll_y
    }

    pub fn stats_started(&self) -> bool {
        self.stats_started
    }

    pub fn on_next(&mut self) {
        let offset = self.slider.advance();
        self.surface.set_slider_offset(offset);
    }

    pub fn on_prev(&mut self) {
        let offset = self.slider.retreat();
        self.surface.set_slider_offset(offset);
    }

    pub fn on_pointer_enter(&mut self) {
        self.slider.on_pointer_enter();
    }

    pub fn on_pointer_leave(&mut self, now_ms: u64) {
        self.slider.on_pointer_leave(now_ms);
    }

    /// Call this when the window reports a scroll (`scroll_y` = `pageYOffset`).
    ///
    /// The navbar flag updates on every call; parallax, the scroll indicator and visibility
    /// checks are throttled.
    pub fn on_scroll(&mut self, scroll_y: f32, now_ms: u64) {
        self.scroll_y = scroll_y;
        if self.nav.on_scroll(scroll_y) {
            self.surface.set_navbar_scrolled(self.nav.is_scrolled());
        }
        if self.scroll_throttle.try_fire(now_ms) {
            self.apply_scroll(now_ms);
        }
    }

    /// Call this when the window reports a resize. The new geometry is read from the surface.
    pub fn on_resize(&mut self, now_ms: u64) {
        if self.resize_throttle.try_fire(now_ms) {
            self.apply_resize(now_ms);
        }
    }

    pub fn on_menu_toggle(&mut self) {
        let open = self.nav.toggle_menu();
        self.surface.set_menu_open(open);
    }

    pub fn on_nav_link_click(&mut self) {
        if self.nav.close_menu() {
            self.surface.set_menu_open(false);
        }
    }

    pub fn on_key(&mut self, key: Key) {
        if self.nav.on_key(key) {
            self.surface.set_menu_open(false);
        }
    }

    /// Advances all timers.
    ///
    /// Throttled scroll/resize events are replayed first, so a resize clamp always lands before
    /// the next autoplay advance.
    pub fn tick(&mut self, now_ms: u64) {
        if self.resize_throttle.take_trailing(now_ms) {
            self.apply_resize(now_ms);
        }
        if self.scroll_throttle.take_trailing(now_ms) {
            self.apply_scroll(now_ms);
        }

        if let Some(offset) = self.slider.tick(now_ms) {
            self.surface.set_slider_offset(offset);
        }

        let surface = &mut self.surface;
        let observer = &mut self.reveal_observer;
        self.reveal.tick(now_ms, |index| {
            surface.mark_revealed(index);
            if let Some(observer) = observer.as_mut() {
                observer.unobserve(index);
            }
        });

        for (index, counter) in &mut self.counters {
            match counter.tick(now_ms) {
                Some(CounterFrame::Value(value)) => {
                    self.surface.set_counter_text(*index, &value.to_string());
                }
                Some(CounterFrame::Done) => {
                    self.surface.set_counter_text(*index, counter.final_text());
                }
                None => {}
            }
        }
    }

    /// Cancels every outstanding timer (autoplay, pending reveals, counters) and stops observing.
    pub fn teardown(&mut self) {
        self.slider.stop_autoplay();
        self.reveal.cancel_pending();
        for (_, counter) in &mut self.counters {
            counter.stop();
        }
        if let Some(observer) = self.reveal_observer.as_mut() {
            observer.disconnect();
        }
        self.stats_observer.disconnect();
        self.scroll_throttle.reset();
        self.resize_throttle.reset();
    }

    fn apply_scroll(&mut self, now_ms: u64) {
        let effects = ScrollEffects::at(self.scroll_y);
        self.surface
            .set_hero_parallax(effects.content_offset, effects.video_offset);
        self.surface.set_indicator_opacity(effects.indicator_opacity);
        self.check_visibility(now_ms, false);
    }

    fn apply_resize(&mut self, now_ms: u64) {
        let width = self.surface.container_width();
        if self.slider.on_resize(width) {
            self.surface.set_slider_offset(self.slider.offset());
        }
        self.check_visibility(now_ms, false);
    }

    /// `startup` routes polling-mode pages through `Reveal::start` for the initial check.
    fn check_visibility(&mut self, now_ms: u64, startup: bool) {
        let viewport = self.surface.viewport();
        let surface = &self.surface;
        let reveal = &mut self.reveal;
        match self.reveal_observer.as_mut() {
            Some(observer) => {
                observer.check(
                    viewport,
                    |index| surface.target_rect(index),
                    |index, visible| {
                        reveal.on_visibility(index, visible, now_ms);
                    },
                );
            }
            None if startup => {
                reveal.start(now_ms, viewport, |index| surface.target_rect(index));
            }
            None => {
                reveal.poll(now_ms, viewport, |index| surface.target_rect(index));
            }
        }

        if self.stats_started {
            return;
        }
        let mut visible = false;
        self.stats_observer
            .check(viewport, |_| surface.stats_rect(), |_, v| visible |= v);
        if visible {
            self.stats_started = true;
            self.stats_observer.unobserve(0);
            for (_, counter) in &mut self.counters {
                counter.start(now_ms);
            }
        }
    }
}
