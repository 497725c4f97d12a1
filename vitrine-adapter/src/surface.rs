use vitrine::{Rect, Viewport};

/// The host page as seen by a [`crate::Page`].
///
/// Geometry queries are required; every mutation has a no-op default so hosts only implement
/// the parts of the page they actually render. Indexes refer to the order in which cards,
/// reveal targets and stats were listed in [`crate::PageContent`].
pub trait Surface {
    /// Width of the slider's container (the element the card track scrolls inside).
    fn container_width(&self) -> u32;

    fn viewport(&self) -> Viewport;

    /// Current bounding rect of reveal target `index`, or `None` if it is not laid out.
    fn target_rect(&self, index: usize) -> Option<Rect>;

    /// Current bounding rect of the stats section, if the page has one.
    fn stats_rect(&self) -> Option<Rect> {
        None
    }

    /// Applies `translateX(offset px)` to the card track.
    fn set_slider_offset(&mut self, _offset: i64) {}

    /// Adds the "animated" class to reveal target `index`.
    fn mark_revealed(&mut self, _index: usize) {}

    fn set_navbar_scrolled(&mut self, _scrolled: bool) {}

    /// Toggles the "active" class on both the hamburger and the nav menu.
    fn set_menu_open(&mut self, _open: bool) {}

    fn set_hero_parallax(&mut self, _content_offset: f32, _video_offset: f32) {}

    fn set_indicator_opacity(&mut self, _opacity: f32) {}

    fn set_counter_text(&mut self, _index: usize, _text: &str) {}
}
