/// Leading-edge rate limiter for high-frequency events (scroll, resize).
///
/// The first event in a window runs immediately; events inside the window are dropped but
/// remembered, and [`Throttle::take_trailing`] lets the adapter replay the latest state once
/// the window has passed so the final position is never lost.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Throttle {
    limit_ms: u64,
    window_end_ms: Option<u64>,
    trailing: bool,
}

impl Throttle {
    pub fn new(limit_ms: u64) -> Self {
        Self {
            limit_ms,
            window_end_ms: None,
            trailing: false,
        }
    }

    pub fn limit_ms(&self) -> u64 {
        self.limit_ms
    }

    pub fn is_open(&self, now_ms: u64) -> bool {
        self.window_end_ms.is_none_or(|end| now_ms >= end)
    }

    pub fn has_trailing(&self) -> bool {
        self.trailing
    }

    /// Returns `true` if the event should run now.
    pub fn try_fire(&mut self, now_ms: u64) -> bool {
        if self.is_open(now_ms) {
            self.open_window(now_ms);
            return true;
        }
        self.trailing = true;
        false
    }

    /// Returns `true` (and starts a new window) if an event was dropped and the window has passed.
    pub fn take_trailing(&mut self, now_ms: u64) -> bool {
        if !self.trailing || !self.is_open(now_ms) {
            return false;
        }
        self.open_window(now_ms);
        true
    }

    pub fn reset(&mut self) {
        self.window_end_ms = None;
        self.trailing = false;
    }

    fn open_window(&mut self, now_ms: u64) {
        self.window_end_ms = Some(now_ms.saturating_add(self.limit_ms));
        self.trailing = false;
    }
}
