use alloc::vec::Vec;

use crate::{Rect, RevealMode, RevealOptions, Timeout, Viewport};

/// Parses a reveal delay attribute (e.g. `data-aos-delay="200"`) into milliseconds.
///
/// Absent, empty, malformed, negative and non-finite values yield 0. Fractions are truncated.
///
/// Only decimal notation is accepted: `"0x10"` yields 0, whereas a browser coercing the same
/// attribute for `setTimeout` would wait 16ms.
pub fn parse_delay(attr: Option<&str>) -> u64 {
    let Some(raw) = attr else {
        return 0;
    };
    match raw.trim().parse::<f64>() {
        Ok(v) if v.is_finite() && v > 0.0 => v as u64,
        _ => 0,
    }
}

/// A reveal target as captured at construction time.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RevealTarget {
    pub delay_ms: u64,
}

impl RevealTarget {
    pub fn new(delay_ms: u64) -> Self {
        Self { delay_ms }
    }

    pub fn from_delay_attr(attr: Option<&str>) -> Self {
        Self::new(parse_delay(attr))
    }
}

#[derive(Clone, Copy, Debug)]
struct Slot {
    delay_ms: u64,
    revealed: bool,
    pending: Option<Timeout>,
}

/// One-shot reveal-on-scroll state for a fixed set of targets.
///
/// Targets are addressed by their index in the sequence passed to [`Reveal::new`]; membership
/// never changes afterwards. A target becomes *pending* on its first qualifying visibility report
/// and *revealed* once its delay has elapsed (see [`Reveal::tick`]). Revealed is terminal.
///
/// Both visibility inlets are idempotent: reporting a target that is already pending or revealed
/// does nothing, so an observer and a poller feeding the same instance cannot double-fire.
#[derive(Clone, Debug)]
pub struct Reveal {
    options: RevealOptions,
    slots: Vec<Slot>,
}

impl Reveal {
    pub fn new(targets: impl IntoIterator<Item = RevealTarget>, options: RevealOptions) -> Self {
        let slots: Vec<Slot> = targets
            .into_iter()
            .map(|t| Slot {
                delay_ms: t.delay_ms,
                revealed: false,
                pending: None,
            })
            .collect();
        vdebug!(count = slots.len(), mode = ?options.mode, "Reveal::new");
        Self { options, slots }
    }

    pub fn options(&self) -> &RevealOptions {
        &self.options
    }

    pub fn mode(&self) -> RevealMode {
        self.options.mode
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn delay_ms(&self, index: usize) -> Option<u64> {
        self.slots.get(index).map(|s| s.delay_ms)
    }

    pub fn is_revealed(&self, index: usize) -> bool {
        self.slots.get(index).is_some_and(|s| s.revealed)
    }

    pub fn is_pending(&self, index: usize) -> bool {
        self.slots.get(index).is_some_and(|s| s.pending.is_some())
    }

    /// Whether an observer should keep watching `index` (false once revealed).
    pub fn is_observed(&self, index: usize) -> bool {
        self.slots.get(index).is_some_and(|s| !s.revealed)
    }

    pub fn revealed_count(&self) -> usize {
        self.slots.iter().filter(|s| s.revealed).count()
    }

    pub fn is_complete(&self) -> bool {
        self.slots.iter().all(|s| s.revealed)
    }

    /// Earliest pending reveal deadline, useful for scheduling the next `tick`.
    pub fn next_due_ms(&self) -> Option<u64> {
        self.slots
            .iter()
            .filter_map(|s| s.pending.map(|t| t.due_ms()))
            .min()
    }

    /// Runs the startup check: in polling mode, performs one immediate [`Reveal::poll`].
    ///
    /// Returns the number of newly scheduled reveals.
    pub fn start(
        &mut self,
        now_ms: u64,
        viewport: Viewport,
        rect_of: impl FnMut(usize) -> Option<Rect>,
    ) -> usize {
        match self.options.mode {
            RevealMode::Observer => 0,
            RevealMode::Polling => self.poll(now_ms, viewport, rect_of),
        }
    }

    /// Observer inlet: a visibility state change for `index`.
    ///
    /// Returns `true` if a reveal was scheduled.
    pub fn on_visibility(&mut self, index: usize, is_intersecting: bool, now_ms: u64) -> bool {
        if index >= self.slots.len() {
            vwarn!(index, count = self.slots.len(), "Reveal: out-of-bounds index");
            return false;
        }
        is_intersecting && self.schedule(index, now_ms)
    }

    /// Polling inlet: schedules every unrevealed target that lies fully inside the viewport.
    ///
    /// Does nothing in observer mode. `rect_of(index)` returning `None` skips the target.
    /// Returns the number of newly scheduled reveals.
    pub fn poll(
        &mut self,
        now_ms: u64,
        viewport: Viewport,
        mut rect_of: impl FnMut(usize) -> Option<Rect>,
    ) -> usize {
        if self.options.mode != RevealMode::Polling {
            return 0;
        }
        let bounds = viewport.rect();
        let mut scheduled = 0usize;
        for index in 0..self.slots.len() {
            let slot = &self.slots[index];
            if slot.revealed || slot.pending.is_some() {
                continue;
            }
            let Some(rect) = rect_of(index) else {
                continue;
            };
            if rect.is_within(&bounds) && self.schedule(index, now_ms) {
                scheduled += 1;
            }
        }
        scheduled
    }

    fn schedule(&mut self, index: usize, now_ms: u64) -> bool {
        let slot = &mut self.slots[index];
        if slot.revealed || slot.pending.is_some() {
            return false;
        }
        slot.pending = Some(Timeout::new(now_ms, slot.delay_ms));
        vtrace!(index, now_ms, delay_ms = slot.delay_ms, "Reveal::schedule");
        true
    }

    /// Fires due reveals, calling `emit(index)` once per newly revealed target.
    ///
    /// Returns the number of targets revealed by this call.
    pub fn tick(&mut self, now_ms: u64, mut emit: impl FnMut(usize)) -> usize {
        let mut revealed = 0usize;
        for (index, slot) in self.slots.iter_mut().enumerate() {
            let Some(timeout) = slot.pending else {
                continue;
            };
            if !timeout.is_due(now_ms) {
                continue;
            }
            slot.pending = None;
            slot.revealed = true;
            revealed += 1;
            emit(index);
        }
        if revealed > 0 {
            vtrace!(revealed, now_ms, "Reveal::tick");
        }
        revealed
    }

    /// Drops all scheduled reveals (page teardown). Returns how many were cancelled.
    ///
    /// Cancelled targets are not revealed; a later visibility report may schedule them again.
    pub fn cancel_pending(&mut self) -> usize {
        let mut cancelled = 0usize;
        for slot in &mut self.slots {
            if slot.pending.take().is_some() {
                cancelled += 1;
            }
        }
        if cancelled > 0 {
            vdebug!(cancelled, "Reveal::cancel_pending");
        }
        cancelled
    }
}
