use crate::Margin;

/// Default distance between the start of one card and the start of the next (350px card + 20px gap).
pub const DEFAULT_ITEM_PITCH: u32 = 370;
/// Default autoplay period.
pub const DEFAULT_AUTOPLAY_INTERVAL_MS: u64 = 4000;

/// Configuration for [`crate::Slider`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SliderOptions {
    /// Card width plus inter-card gap, in pixels. Fixed for the slider's lifetime.
    pub item_pitch: u32,
    pub autoplay_interval_ms: u64,
    /// Whether adapters should start autoplay as soon as the slider is constructed.
    pub autoplay: bool,
    /// Stop autoplay while the pointer is over the slider and restart it on leave.
    pub pause_on_hover: bool,
}

impl Default for SliderOptions {
    fn default() -> Self {
        Self {
            item_pitch: DEFAULT_ITEM_PITCH,
            autoplay_interval_ms: DEFAULT_AUTOPLAY_INTERVAL_MS,
            autoplay: true,
            pause_on_hover: true,
        }
    }
}

impl SliderOptions {
    pub fn with_item_pitch(mut self, item_pitch: u32) -> Self {
        self.item_pitch = item_pitch;
        self
    }

    pub fn with_autoplay_interval_ms(mut self, interval_ms: u64) -> Self {
        self.autoplay_interval_ms = interval_ms;
        self
    }

    pub fn with_autoplay(mut self, autoplay: bool) -> Self {
        self.autoplay = autoplay;
        self
    }

    pub fn with_pause_on_hover(mut self, pause_on_hover: bool) -> Self {
        self.pause_on_hover = pause_on_hover;
        self
    }
}

/// Configuration for [`crate::VisibilityObserver`] (mirrors `IntersectionObserverInit`).
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ObserverOptions {
    /// Fraction of the target's area (0.0..=1.0) that must be visible to count as intersecting.
    pub threshold: f32,
    pub root_margin: Margin,
}

impl Default for ObserverOptions {
    /// Reveal defaults: 10% visible, root shrunk by 50px at the bottom.
    fn default() -> Self {
        Self {
            threshold: 0.1,
            root_margin: Margin::new(0, 0, -50, 0),
        }
    }
}

impl ObserverOptions {
    pub fn with_threshold(mut self, threshold: f32) -> Self {
        self.threshold = threshold;
        self
    }

    pub fn with_root_margin(mut self, root_margin: Margin) -> Self {
        self.root_margin = root_margin;
        self
    }
}

/// How visibility reaches a [`crate::Reveal`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RevealMode {
    /// An intersection observer reports visibility changes (`Reveal::on_visibility`).
    #[default]
    Observer,
    /// No observer is available; the adapter polls geometry on scroll (`Reveal::poll`).
    Polling,
}

/// Configuration for [`crate::Reveal`].
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RevealOptions {
    pub mode: RevealMode,
    /// Used by adapters that build an observer for the reveal targets.
    pub observer: ObserverOptions,
}

impl RevealOptions {
    pub fn with_mode(mut self, mode: RevealMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn with_observer(mut self, observer: ObserverOptions) -> Self {
        self.observer = observer;
        self
    }
}
