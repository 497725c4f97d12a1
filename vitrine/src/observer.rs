use alloc::vec;
use alloc::vec::Vec;

use crate::{Margin, ObserverOptions, Rect, Viewport};

/// Fraction of `rect` visible inside the viewport grown/shrunk by `margin` (0.0..=1.0).
///
/// Zero-area targets count as fully visible when they sit inside the root, and invisible
/// otherwise.
pub fn intersection_ratio(rect: &Rect, viewport: Viewport, margin: Margin) -> f32 {
    let root = viewport.rect_with_margin(margin);
    let area = rect.area();
    if area == 0 {
        return if rect.is_within(&root) { 1.0 } else { 0.0 };
    }
    match rect.intersection(&root) {
        Some(visible) => (visible.area() as f64 / area as f64) as f32,
        None => 0.0,
    }
}

/// Returns `true` when a target at `ratio` satisfies a positive `threshold`.
///
/// Ratios cannot see edge-adjacent contact; use [`is_intersecting`] for threshold 0.
pub fn meets_threshold(ratio: f32, threshold: f32) -> bool {
    ratio > 0.0 && ratio >= threshold
}

/// Intersection test as a native observer performs it.
///
/// With a non-positive threshold any contact with the margin-adjusted root counts, including a
/// target whose edge merely touches it. Otherwise the visible ratio must reach the threshold.
pub fn is_intersecting(rect: &Rect, viewport: Viewport, options: &ObserverOptions) -> bool {
    if options.threshold <= 0.0 {
        let root = viewport.rect_with_margin(options.root_margin);
        return rect.intersection(&root).is_some();
    }
    let ratio = intersection_ratio(rect, viewport, options.root_margin);
    meets_threshold(ratio, options.threshold)
}

/// A software intersection observer.
///
/// Targets are addressed by index (`0..count`). Each [`VisibilityObserver::check`] computes the
/// current intersection state of every observed target and emits only the ones whose state
/// changed since the previous check. A freshly observed target always reports once, matching the
/// initial notification of a native `IntersectionObserver`.
#[derive(Clone, Debug)]
pub struct VisibilityObserver {
    options: ObserverOptions,
    observed: Vec<bool>,
    last: Vec<Option<bool>>,
}

impl VisibilityObserver {
    pub fn new(count: usize, options: ObserverOptions) -> Self {
        Self {
            options,
            observed: vec![false; count],
            last: vec![None; count],
        }
    }

    pub fn options(&self) -> &ObserverOptions {
        &self.options
    }

    pub fn count(&self) -> usize {
        self.observed.len()
    }

    pub fn is_observing(&self, index: usize) -> bool {
        self.observed.get(index).copied().unwrap_or(false)
    }

    /// Number of targets currently observed.
    pub fn observed_count(&self) -> usize {
        self.observed.iter().filter(|o| **o).count()
    }

    /// Starts observing `index`. Observing an already-observed target is a no-op.
    pub fn observe(&mut self, index: usize) {
        let Some(slot) = self.observed.get_mut(index) else {
            vwarn!(index, count = self.last.len(), "VisibilityObserver: out-of-bounds index");
            debug_assert!(false, "VisibilityObserver::observe: index {index} out of bounds");
            return;
        };
        if !*slot {
            *slot = true;
            self.last[index] = None;
        }
    }

    pub fn observe_all(&mut self) {
        for i in 0..self.observed.len() {
            self.observe(i);
        }
    }

    pub fn unobserve(&mut self, index: usize) {
        if let Some(slot) = self.observed.get_mut(index) {
            *slot = false;
            self.last[index] = None;
        }
    }

    pub fn disconnect(&mut self) {
        self.observed.fill(false);
        self.last.fill(None);
    }

    /// Recomputes visibility for all observed targets and emits `(index, is_intersecting)` for
    /// each state change.
    ///
    /// `rect_of(index)` returning `None` (target gone from layout) is treated as not intersecting.
    /// Returns the number of emitted entries.
    pub fn check(
        &mut self,
        viewport: Viewport,
        mut rect_of: impl FnMut(usize) -> Option<Rect>,
        mut emit: impl FnMut(usize, bool),
    ) -> usize {
        let mut emitted = 0usize;
        for index in 0..self.observed.len() {
            if !self.observed[index] {
                continue;
            }
            let intersecting =
                rect_of(index).is_some_and(|rect| is_intersecting(&rect, viewport, &self.options));
            if self.last[index] == Some(intersecting) {
                continue;
            }
            self.last[index] = Some(intersecting);
            emitted += 1;
            emit(index, intersecting);
        }
        if emitted > 0 {
            vtrace!(emitted, "VisibilityObserver::check");
        }
        emitted
    }
}
