/// A recurring timer driven by adapter-supplied timestamps.
///
/// The value itself is the timer handle: whoever owns it owns the schedule, and dropping it
/// cancels all future firings.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Interval {
    period_ms: u64,
    next_due_ms: u64,
}

impl Interval {
    /// Starts an interval whose first firing is one period after `now_ms`.
    ///
    /// A zero period is treated as 1ms.
    pub fn new(now_ms: u64, period_ms: u64) -> Self {
        let period_ms = period_ms.max(1);
        Self {
            period_ms,
            next_due_ms: now_ms.saturating_add(period_ms),
        }
    }

    pub fn period_ms(&self) -> u64 {
        self.period_ms
    }

    pub fn next_due_ms(&self) -> u64 {
        self.next_due_ms
    }

    /// Returns `true` if the interval fired at `now_ms`.
    ///
    /// Missed periods are coalesced into a single firing; the next deadline stays on the
    /// original phase and is always strictly after `now_ms`.
    pub fn poll(&mut self, now_ms: u64) -> bool {
        if now_ms < self.next_due_ms {
            return false;
        }
        let missed = (now_ms - self.next_due_ms) / self.period_ms;
        let advance = missed.saturating_add(1).saturating_mul(self.period_ms);
        self.next_due_ms = self.next_due_ms.saturating_add(advance);
        true
    }
}

/// A one-shot timer driven by adapter-supplied timestamps.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Timeout {
    due_ms: u64,
}

impl Timeout {
    pub fn new(now_ms: u64, delay_ms: u64) -> Self {
        Self {
            due_ms: now_ms.saturating_add(delay_ms),
        }
    }

    pub fn due_ms(&self) -> u64 {
        self.due_ms
    }

    pub fn is_due(&self, now_ms: u64) -> bool {
        now_ms >= self.due_ms
    }
}
