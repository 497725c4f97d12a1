use vitrine::{Key, Rect, Viewport};
use vitrine_adapter::{Page, PageConfig, PageContent, Surface};

/// A printing stand-in for a DOM page: four 300px sections stacked 600px apart.
struct Console {
    scroll_y: i32,
}

impl Console {
    fn section(&self, index: usize) -> Rect {
        Rect::from_origin_size(0, 700 + index as i32 * 600 - self.scroll_y, 1000, 300)
    }
}

impl Surface for Console {
    fn container_width(&self) -> u32 {
        1200
    }

    fn viewport(&self) -> Viewport {
        Viewport::new(1280, 800)
    }

    fn target_rect(&self, index: usize) -> Option<Rect> {
        (index < 3).then(|| self.section(index))
    }

    fn stats_rect(&self) -> Option<Rect> {
        Some(self.section(3))
    }

    fn set_slider_offset(&mut self, offset: i64) {
        println!("slider: translateX({offset}px)");
    }

    fn mark_revealed(&mut self, index: usize) {
        println!("reveal: section #{index}");
    }

    fn set_navbar_scrolled(&mut self, scrolled: bool) {
        println!("navbar: scrolled={scrolled}");
    }

    fn set_menu_open(&mut self, open: bool) {
        println!("menu: open={open}");
    }

    fn set_counter_text(&mut self, index: usize, text: &str) {
        if text.ends_with('+') {
            println!("stat #{index}: {text}");
        }
    }
}

fn main() {
    // Example: drive a whole page from a simulated 60fps loop without holding any DOM objects.
    //
    // A real adapter would forward browser events to the same methods and call tick() from
    // requestAnimationFrame.
    let content = PageContent::default()
        .with_cards(10)
        .with_reveal_delays([None, Some("100"), Some("200")])
        .with_stats(["150+", "12", "3+"]);
    let mut page = Page::new(Console { scroll_y: 0 }, PageConfig::default(), content, 0);

    page.on_menu_toggle();
    page.on_key(Key::from_dom("Escape"));

    let mut now_ms = 0u64;
    for frame in 0..600u64 {
        now_ms += 16;
        if frame < 150 {
            let y = (frame * 16) as i32;
            page.surface_mut().scroll_y = y;
            page.on_scroll(y as f32, now_ms);
        }
        page.tick(now_ms);
    }

    page.teardown();
    println!(
        "done: slider={:?} revealed={}/{}",
        page.slider().state(),
        page.reveal().revealed_count(),
        page.reveal().len()
    );
}
