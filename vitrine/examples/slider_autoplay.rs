// Example: a certification slider driven by a simulated clock and one window resize.
use vitrine::{Slider, SliderOptions};

fn main() {
    let mut slider = Slider::new(10, 1200, SliderOptions::default());
    slider.start_autoplay(0);
    println!("initial={:?}", slider.state());

    let mut now_ms = 0u64;
    while now_ms < 40_000 {
        now_ms += 16;
        if now_ms == 20_000 {
            // The window grew: more cards fit, fewer resting positions remain.
            if slider.on_resize(1850) {
                println!("t={now_ms} resized, offset={}", slider.offset());
            }
        }
        if let Some(offset) = slider.tick(now_ms) {
            println!(
                "t={now_ms} index={} offset={offset}",
                slider.current_index()
            );
        }
    }

    slider.stop_autoplay();
    println!("final={:?}", slider.state());
}
