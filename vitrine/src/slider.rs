use crate::{Direction, Interval, SliderOptions, SliderState};

/// A headless horizontal card slider.
///
/// This type does not hold any UI objects. Adapters drive it by reporting the container width
/// (`new`, `on_resize`), forwarding commands (`advance`, `retreat`), pointer hover, and a
/// monotonic clock (`tick`). The only output is [`Slider::offset`], the horizontal translation to
/// apply to the card track.
///
/// Invariant: `current_index() <= max_index()` after every call.
#[derive(Clone, Debug)]
pub struct Slider {
    options: SliderOptions,
    item_count: usize,
    container_width: u32,
    viewport_count: usize,
    current_index: usize,
    autoplay: Option<Interval>,
    paused_by_hover: bool,
}

impl Slider {
    /// Creates a slider over `item_count` cards inside a container `container_width` pixels wide.
    ///
    /// Autoplay is not started; call [`Slider::start_autoplay`] (adapters typically do so when
    /// `options.autoplay` is set).
    pub fn new(item_count: usize, container_width: u32, options: SliderOptions) -> Self {
        let viewport_count = viewport_count_for(container_width, options.item_pitch);
        vdebug!(
            item_count,
            container_width,
            viewport_count,
            item_pitch = options.item_pitch,
            "Slider::new"
        );
        Self {
            options,
            item_count,
            container_width,
            viewport_count,
            current_index: 0,
            autoplay: None,
            paused_by_hover: false,
        }
    }

    pub fn options(&self) -> &SliderOptions {
        &self.options
    }

    pub fn item_count(&self) -> usize {
        self.item_count
    }

    pub fn item_pitch(&self) -> u32 {
        self.options.item_pitch
    }

    pub fn container_width(&self) -> u32 {
        self.container_width
    }

    /// Number of cards fully visible at once.
    pub fn viewport_count(&self) -> usize {
        self.viewport_count
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    /// The last index the slider can rest on (`item_count - viewport_count`, or 0).
    pub fn max_index(&self) -> usize {
        self.item_count.saturating_sub(self.viewport_count)
    }

    /// Horizontal translation of the card track in pixels: `-(current_index * item_pitch)`.
    pub fn offset(&self) -> i64 {
        let px = (self.current_index as i64).saturating_mul(self.options.item_pitch as i64);
        -px
    }

    pub fn state(&self) -> SliderState {
        SliderState {
            current_index: self.current_index,
            max_index: self.max_index(),
            viewport_count: self.viewport_count,
            offset: self.offset(),
            autoplay: self.is_autoplaying(),
        }
    }

    /// Moves one card forward, wrapping to the first card after the last resting position.
    ///
    /// Returns the new offset.
    pub fn advance(&mut self) -> i64 {
        self.step(Direction::Forward)
    }

    /// Moves one card backward, wrapping to the last resting position from the first card.
    ///
    /// Returns the new offset.
    pub fn retreat(&mut self) -> i64 {
        self.step(Direction::Backward)
    }

    pub fn step(&mut self, direction: Direction) -> i64 {
        let max = self.max_index();
        let prev = self.current_index;
        self.current_index = match direction {
            Direction::Forward if prev >= max => 0,
            Direction::Forward => prev + 1,
            Direction::Backward if prev == 0 => max,
            Direction::Backward => (prev - 1).min(max),
        };
        vtrace!(?direction, prev, next = self.current_index, max, "Slider::step");
        self.offset()
    }

    /// Jumps to `index`, clamped into `0..=max_index()`.
    ///
    /// Returns the new offset.
    pub fn go_to(&mut self, index: usize) -> i64 {
        self.current_index = index.min(self.max_index());
        self.offset()
    }

    /// Recomputes the viewport count for a new container width and clamps the current index.
    ///
    /// Returns `true` if the offset changed. Calling this repeatedly with the same width is a
    /// no-op.
    pub fn on_resize(&mut self, container_width: u32) -> bool {
        if container_width == self.container_width {
            return false;
        }
        let prev_offset = self.offset();
        self.container_width = container_width;
        self.viewport_count = viewport_count_for(container_width, self.options.item_pitch);
        self.current_index = self.current_index.min(self.max_index());
        vtrace!(
            container_width,
            viewport_count = self.viewport_count,
            current_index = self.current_index,
            "Slider::on_resize"
        );
        self.offset() != prev_offset
    }

    pub fn is_autoplaying(&self) -> bool {
        self.autoplay.is_some()
    }

    /// The timestamp of the next autoplay advance, if autoplay is active.
    pub fn next_autoplay_ms(&self) -> Option<u64> {
        self.autoplay.map(|it| it.next_due_ms())
    }

    /// Starts autoplay. Starting while already active keeps the existing timer.
    ///
    /// Returns `true` if a new timer was started.
    pub fn start_autoplay(&mut self, now_ms: u64) -> bool {
        if self.autoplay.is_some() {
            return false;
        }
        self.paused_by_hover = false;
        self.autoplay = Some(Interval::new(now_ms, self.options.autoplay_interval_ms));
        vdebug!(now_ms, "Slider::start_autoplay");
        true
    }

    /// Stops autoplay, cancelling the timer. Returns `true` if a timer was running.
    pub fn stop_autoplay(&mut self) -> bool {
        self.paused_by_hover = false;
        let was = self.autoplay.take().is_some();
        if was {
            vdebug!("Slider::stop_autoplay");
        }
        was
    }

    /// Pauses autoplay while hovered. A slider that was not autoplaying stays still.
    pub fn on_pointer_enter(&mut self) {
        if self.options.pause_on_hover && self.stop_autoplay() {
            self.paused_by_hover = true;
        }
    }

    /// Resumes autoplay only if the matching pointer-enter paused it.
    pub fn on_pointer_leave(&mut self, now_ms: u64) {
        if self.paused_by_hover {
            self.start_autoplay(now_ms);
        }
    }

    /// Advances the autoplay timer.
    ///
    /// Returns the new offset when the timer fired, `None` otherwise.
    pub fn tick(&mut self, now_ms: u64) -> Option<i64> {
        let fired = self.autoplay.as_mut()?.poll(now_ms);
        fired.then(|| self.advance())
    }
}

fn viewport_count_for(container_width: u32, item_pitch: u32) -> usize {
    if item_pitch == 0 {
        return 0;
    }
    (container_width / item_pitch) as usize
}
