//! Adapter utilities for the `vitrine` crate.
//!
//! The `vitrine` crate is UI-agnostic and focuses on the state machines. This crate provides
//! the framework-neutral glue a host page needs around them:
//!
//! - [`Surface`]: the host's geometry and style mutations, injected instead of looked up globally
//! - [`Throttle`]: leading-edge rate limiting for scroll/resize with trailing replay
//! - [`Page`]: one controller owning the slider, reveal, counters and nav state
//!
//! This crate is intentionally framework-agnostic (no web-sys/DOM bindings).
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

mod page;
mod surface;
mod throttle;


pub use page::{DEFAULT_THROTTLE_MS, Page, PageConfig, PageContent};
pub use surface::Surface;
pub use throttle::Throttle;
