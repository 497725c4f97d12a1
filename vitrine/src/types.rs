/// An element's bounding box in viewport coordinates (CSS pixels).
///
/// Edges follow DOM `getBoundingClientRect` conventions: `top`/`left` are the near edges,
/// `bottom`/`right` the far ones, and all of them may be negative once an element scrolls past
/// the viewport origin.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rect {
    pub top: i32,
    pub left: i32,
    pub bottom: i32,
    pub right: i32,
}

impl Rect {
    /// Creates a rect from its origin and size.
    pub fn from_origin_size(left: i32, top: i32, width: u32, height: u32) -> Self {
        Self {
            top,
            left,
            bottom: top.saturating_add_unsigned(height),
            right: left.saturating_add_unsigned(width),
        }
    }

    pub fn width(&self) -> u32 {
        self.right.saturating_sub(self.left).max(0) as u32
    }

    pub fn height(&self) -> u32 {
        self.bottom.saturating_sub(self.top).max(0) as u32
    }

    pub fn area(&self) -> u64 {
        self.width() as u64 * self.height() as u64
    }

    /// Returns `true` when `self` lies within `outer` on all four edges (edges may touch).
    pub fn is_within(&self, outer: &Rect) -> bool {
        self.top >= outer.top
            && self.left >= outer.left
            && self.bottom <= outer.bottom
            && self.right <= outer.right
    }

    /// Returns the overlapping region, or `None` when the rects are disjoint.
    pub fn intersection(&self, other: &Rect) -> Option<Rect> {
        let r = Rect {
            top: self.top.max(other.top),
            left: self.left.max(other.left),
            bottom: self.bottom.min(other.bottom),
            right: self.right.min(other.right),
        };
        (r.top <= r.bottom && r.left <= r.right).then_some(r)
    }
}

/// The visible area of the page (`innerWidth` x `innerHeight`).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    pub fn rect(&self) -> Rect {
        Rect::from_origin_size(0, 0, self.width, self.height)
    }

    /// Returns the viewport rect grown (positive) or shrunk (negative) by `margin`.
    pub fn rect_with_margin(&self, margin: Margin) -> Rect {
        let r = self.rect();
        Rect {
            top: r.top.saturating_sub(margin.top),
            left: r.left.saturating_sub(margin.left),
            bottom: r.bottom.saturating_add(margin.bottom),
            right: r.right.saturating_add(margin.right),
        }
    }
}

/// A CSS-style margin around the observation root, in pixels.
///
/// Positive values grow the root; negative values shrink it. A negative `bottom` makes targets
/// count as visible only once they have travelled that far above the viewport's lower edge.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Margin {
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
    pub left: i32,
}

impl Margin {
    pub const ZERO: Margin = Margin {
        top: 0,
        right: 0,
        bottom: 0,
        left: 0,
    };

    pub fn new(top: i32, right: i32, bottom: i32, left: i32) -> Self {
        Self {
            top,
            right,
            bottom,
            left,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Direction {
    Forward,
    Backward,
}

/// Keys the page reacts to. Everything other than Escape is ignored.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Key {
    Escape,
    Other,
}

impl Key {
    /// Maps a DOM `KeyboardEvent.key` value.
    pub fn from_dom(key: &str) -> Self {
        match key {
            "Escape" | "Esc" => Self::Escape,
            _ => Self::Other,
        }
    }
}

/// A snapshot of slider state, suitable for rendering or debugging.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SliderState {
    pub current_index: usize,
    pub max_index: usize,
    pub viewport_count: usize,
    /// Horizontal translation to apply to the card track, in pixels (never positive).
    pub offset: i64,
    pub autoplay: bool,
}
