//! Headless interactivity for static portfolio pages.
//!
//! For event routing, throttling and an output surface, see the `vitrine-adapter` crate.
//!
//! This crate holds the state machines behind a page's moving parts: a wrapping card slider with
//! responsive viewport counts and autoplay, one-shot reveal-on-scroll with per-target delays,
//! a software intersection observer, count-up stat counters, and navbar/menu/parallax state.
//!
//! It is UI-agnostic. A DOM/GUI layer is expected to provide:
//! - container and viewport sizes
//! - element bounding rects
//! - a monotonic clock (`now_ms`) for `tick`
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod chrome;
mod counter;
mod observer;
mod options;
mod reveal;
mod slider;
mod timer;
mod types;

#[cfg(test)]
mod tests;

pub use chrome::{
    HERO_CONTENT_RATE, HERO_VIDEO_RATE, INDICATOR_FADE_PX, NAVBAR_SCROLLED_PX, NavState,
    ScrollEffects, indicator_opacity,
};
pub use counter::{COUNTER_INTERVAL_MS, COUNTER_STEPS, Counter, CounterFrame, parse_leading_int};
pub use observer::{VisibilityObserver, intersection_ratio, is_intersecting, meets_threshold};
pub use options::{
    DEFAULT_AUTOPLAY_INTERVAL_MS, DEFAULT_ITEM_PITCH, ObserverOptions, RevealMode, RevealOptions,
    SliderOptions,
};
pub use reveal::{Reveal, RevealTarget, parse_delay};
pub use slider::Slider;
pub use timer::{Interval, Timeout};
pub use types::{Direction, Key, Margin, Rect, SliderState, Viewport};
