// Example: reveal-on-scroll without an intersection observer (polling fallback).
use vitrine::{Rect, Reveal, RevealMode, RevealOptions, RevealTarget, Viewport};

fn main() {
    // Three sections stacked 500px apart; the middle one carries a 200ms delay.
    let delays = [None, Some("200"), Some("not-a-number")];
    let mut reveal = Reveal::new(
        delays.iter().map(|d| RevealTarget::from_delay_attr(*d)),
        RevealOptions::default().with_mode(RevealMode::Polling),
    );
    let viewport = Viewport::new(1280, 720);
    let rect_at = |index: usize, scroll_y: i32| {
        Some(Rect::from_origin_size(
            40,
            index as i32 * 500 + 100 - scroll_y,
            600,
            300,
        ))
    };

    reveal.start(0, viewport, |i| rect_at(i, 0));

    let mut now_ms = 0u64;
    for scroll_y in (0..=1200).step_by(100) {
        now_ms += 100;
        reveal.poll(now_ms, viewport, |i| rect_at(i, scroll_y));
        reveal.tick(now_ms, |i| println!("t={now_ms} scroll_y={scroll_y} revealed #{i}"));
    }

    // Let any trailing delays elapse.
    now_ms += 1_000;
    reveal.tick(now_ms, |i| println!("t={now_ms} revealed #{i}"));
    println!("revealed {}/{}", reveal.revealed_count(), reveal.len());
}
