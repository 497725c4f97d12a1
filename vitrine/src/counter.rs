use alloc::string::String;

use crate::Interval;

pub const COUNTER_STEPS: u32 = 50;
pub const COUNTER_INTERVAL_MS: u64 = 30;

/// Parses the leading integer of `text`, `parseInt`-style: leading whitespace, an optional sign,
/// then digits. Trailing text (`"150+"`, `"5K"`) is ignored.
pub fn parse_leading_int(text: &str) -> Option<i64> {
    let s = text.trim_start();
    let (negative, digits) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };
    let end = digits
        .bytes()
        .position(|b| !b.is_ascii_digit())
        .unwrap_or(digits.len());
    if end == 0 {
        return None;
    }
    let mut value = 0i64;
    for b in digits[..end].bytes() {
        value = value.saturating_mul(10).saturating_add((b - b'0') as i64);
    }
    Some(if negative { -value } else { value })
}

/// One animation frame of a [`Counter`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CounterFrame {
    /// Display this intermediate value.
    Value(i64),
    /// Display [`Counter::final_text`]; the animation is over.
    Done,
}

/// Counts a stat up from zero to its final value in [`COUNTER_STEPS`] equal increments.
///
/// The final frame restores the original text verbatim, so suffixes such as `+` survive.
#[derive(Clone, Debug)]
pub struct Counter {
    final_text: String,
    target: i64,
    step: u32,
    timer: Option<Interval>,
    finished: bool,
}

impl Counter {
    /// Returns `None` when `text` does not start with an integer (the stat is left untouched).
    pub fn parse(text: &str) -> Option<Self> {
        let target = parse_leading_int(text)?;
        Some(Self {
            final_text: String::from(text),
            target,
            step: 0,
            timer: None,
            finished: false,
        })
    }

    pub fn final_text(&self) -> &str {
        &self.final_text
    }

    pub fn target(&self) -> i64 {
        self.target
    }

    pub fn is_running(&self) -> bool {
        self.timer.is_some()
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// Starts the animation. Restarting a running or finished counter is a no-op.
    pub fn start(&mut self, now_ms: u64) -> bool {
        if self.finished || self.timer.is_some() {
            return false;
        }
        self.timer = Some(Interval::new(now_ms, COUNTER_INTERVAL_MS));
        true
    }

    pub fn stop(&mut self) {
        self.timer = None;
    }

    pub fn tick(&mut self, now_ms: u64) -> Option<CounterFrame> {
        if !self.timer.as_mut()?.poll(now_ms) {
            return None;
        }
        self.step += 1;
        let current = self.value_at(self.step);
        if self.target <= 0 || current >= self.target {
            self.timer = None;
            self.finished = true;
            return Some(CounterFrame::Done);
        }
        Some(CounterFrame::Value(current))
    }

    fn value_at(&self, step: u32) -> i64 {
        let scaled = (self.target as i128) * (step as i128) / (COUNTER_STEPS as i128);
        scaled as i64
    }
}
