use crate::Key;

/// Scroll distance after which the navbar switches to its compact style.
pub const NAVBAR_SCROLLED_PX: f32 = 100.0;
pub const HERO_CONTENT_RATE: f32 = -0.5;
pub const HERO_VIDEO_RATE: f32 = 0.3;
/// Scroll distance over which the scroll indicator fades out.
pub const INDICATOR_FADE_PX: f32 = 300.0;

/// Navbar style and mobile menu state.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NavState {
    scrolled: bool,
    menu_open: bool,
}

impl NavState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_scrolled(&self) -> bool {
        self.scrolled
    }

    pub fn is_menu_open(&self) -> bool {
        self.menu_open
    }

    /// Returns `true` if the scrolled flag changed.
    pub fn on_scroll(&mut self, scroll_y: f32) -> bool {
        let scrolled = scroll_y > NAVBAR_SCROLLED_PX;
        let changed = scrolled != self.scrolled;
        self.scrolled = scrolled;
        changed
    }

    /// Hamburger click. Returns the new open state.
    pub fn toggle_menu(&mut self) -> bool {
        self.menu_open = !self.menu_open;
        self.menu_open
    }

    /// Nav link click or Escape. Returns `true` if the menu was open.
    pub fn close_menu(&mut self) -> bool {
        core::mem::replace(&mut self.menu_open, false)
    }

    /// Returns `true` if the key closed the menu.
    pub fn on_key(&mut self, key: Key) -> bool {
        match key {
            Key::Escape => self.close_menu(),
            Key::Other => false,
        }
    }
}

/// Scroll-linked hero effects, derived purely from the page scroll position.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScrollEffects {
    /// Vertical translation of the hero content, in pixels.
    pub content_offset: f32,
    /// Vertical translation of the hero video, in pixels.
    pub video_offset: f32,
    pub indicator_opacity: f32,
}

impl ScrollEffects {
    pub fn at(scroll_y: f32) -> Self {
        Self {
            content_offset: scroll_y * HERO_CONTENT_RATE,
            video_offset: scroll_y * HERO_VIDEO_RATE,
            indicator_opacity: indicator_opacity(scroll_y),
        }
    }
}

pub fn indicator_opacity(scroll_y: f32) -> f32 {
    (1.0 - scroll_y / INDICATOR_FADE_PX).max(0.0)
}
