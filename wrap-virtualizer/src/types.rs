use core::ops::RangeInclusive;

use crate::float;

/// A width/height pair in logical pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    pub const ZERO: Self = Self::new(0.0, 0.0);
    /// An unconstrained size, used to ask a container for its natural size.
    pub const INFINITY: Self = Self::new(f64::INFINITY, f64::INFINITY);

    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Replaces negative and NaN components with zero.
    pub fn non_negative(self) -> Self {
        Self::new(float::non_negative(self.width), float::non_negative(self.height))
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const ZERO: Self = Self::new(0.0, 0.0);

    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0, 0.0);

    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub const fn from_origin_size(origin: Point, size: Size) -> Self {
        Self::new(origin.x, origin.y, size.width, size.height)
    }

    pub const fn origin(&self) -> Point {
        Point::new(self.x, self.y)
    }

    pub const fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }
}

/// Flow direction of items inside a line.
///
/// `Horizontal` packs items left to right into rows that stack top to bottom, so the scrolling
/// ("main") axis is the Y axis. `Vertical` packs items top to bottom into columns that stack left
/// to right, so the main axis is the X axis.
///
/// The name describes the flow of items within a line, not the scroll direction: the default
/// `Horizontal` lays out rows and scrolls vertically. Layouts that name orientation after the
/// stacking direction of lines call the same row layout "vertical".
///
/// Every layout formula in this crate is written in main/cross terms; the methods below are the
/// only place where those terms are mapped to physical X/Y.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Orientation {
    #[default]
    Horizontal,
    Vertical,
}

impl Orientation {
    #[inline]
    pub fn main(self, size: Size) -> f64 {
        match self {
            Self::Horizontal => size.height,
            Self::Vertical => size.width,
        }
    }

    #[inline]
    pub fn cross(self, size: Size) -> f64 {
        match self {
            Self::Horizontal => size.width,
            Self::Vertical => size.height,
        }
    }

    #[inline]
    pub fn main_of(self, point: Point) -> f64 {
        match self {
            Self::Horizontal => point.y,
            Self::Vertical => point.x,
        }
    }

    #[inline]
    pub fn cross_of(self, point: Point) -> f64 {
        match self {
            Self::Horizontal => point.x,
            Self::Vertical => point.y,
        }
    }

    #[inline]
    pub fn size(self, main: f64, cross: f64) -> Size {
        match self {
            Self::Horizontal => Size::new(cross, main),
            Self::Vertical => Size::new(main, cross),
        }
    }

    #[inline]
    pub fn point(self, main: f64, cross: f64) -> Point {
        match self {
            Self::Horizontal => Point::new(cross, main),
            Self::Vertical => Point::new(main, cross),
        }
    }

    #[inline]
    pub fn rect(self, main: f64, cross: f64, main_size: f64, cross_size: f64) -> Rect {
        Rect::from_origin_size(self.point(main, cross), self.size(main_size, cross_size))
    }
}

/// Policy for distributing leftover cross-axis space among and around packed items.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SpacingMode {
    None,
    #[default]
    Uniform,
    BetweenItemsOnly,
    StartAndEndOnly,
}

/// Measurement system for [`CacheLength`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CacheUnit {
    Pixel,
    Item,
    #[default]
    Page,
}

/// How far outside the viewport items are realized ahead of time.
///
/// Both values are interpreted in the accompanying [`CacheUnit`].
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CacheLength {
    pub before: f64,
    pub after: f64,
}

impl CacheLength {
    /// Negative and NaN lengths are treated as zero.
    pub fn new(before: f64, after: f64) -> Self {
        Self {
            before: float::non_negative(before),
            after: float::non_negative(after),
        }
    }

    pub fn uniform(len: f64) -> Self {
        Self::new(len, len)
    }

    pub(crate) fn sanitized(self) -> Self {
        Self::new(self.before, self.after)
    }
}

impl Default for CacheLength {
    fn default() -> Self {
        Self::uniform(1.0)
    }
}

/// Unit used by line and mouse-wheel scrolling.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ScrollUnit {
    #[default]
    Pixel,
    Item,
}

/// What happens to a container once its item leaves the realized range.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum VirtualizationMode {
    /// The container is discarded.
    Standard,
    /// The container is handed back to the generator for reuse.
    #[default]
    Recycling,
}

/// An inclusive range of item indexes that must be realized.
///
/// An empty range is explicit (there is no `start > end` encoding), so a range obtained from this
/// crate always satisfies `start_index <= end_index` when it is non-empty.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ItemRange {
    bounds: Option<(usize, usize)>,
}

impl ItemRange {
    pub const EMPTY: Self = Self { bounds: None };

    /// Creates `[start_index, end_index]`.
    ///
    /// Reversed bounds produce [`ItemRange::EMPTY`] (and are debug-asserted).
    pub fn new(start_index: usize, end_index: usize) -> Self {
        debug_assert!(
            start_index <= end_index,
            "ItemRange bounds are reversed (start={start_index}, end={end_index})"
        );
        if start_index > end_index {
            return Self::EMPTY;
        }
        Self {
            bounds: Some((start_index, end_index)),
        }
    }

    /// Every index of a collection with `count` items.
    pub fn all(count: usize) -> Self {
        if count == 0 {
            Self::EMPTY
        } else {
            Self::new(0, count - 1)
        }
    }

    pub fn start_index(&self) -> Option<usize> {
        self.bounds.map(|(s, _)| s)
    }

    pub fn end_index(&self) -> Option<usize> {
        self.bounds.map(|(_, e)| e)
    }

    pub fn is_empty(&self) -> bool {
        self.bounds.is_none()
    }

    pub fn len(&self) -> usize {
        self.bounds.map_or(0, |(s, e)| e - s + 1)
    }

    pub fn contains(&self, index: usize) -> bool {
        self.bounds.is_some_and(|(s, e)| s <= index && index <= e)
    }

    pub fn iter(&self) -> RangeInclusive<usize> {
        let (start, end) = self.bounds.unwrap_or((1, 0));
        start..=end
    }
}
