use crate::{CacheLength, CacheUnit, Rect, Size};

/// Constraints handed down by a grouping parent during hierarchical virtualization.
///
/// When a panel is the items host of a virtualized group (for example a collapsible section inside
/// an outer virtualized list), the outer panel owns scrolling. It tells the inner panel which part
/// of the group is currently visible and how much to cache, and the inner panel uses that instead
/// of its own offset, viewport and cache settings.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GroupConstraints {
    /// Visible part of the group, in the group's coordinates (the header included).
    ///
    /// With `ScrollUnit::Item` the main-axis origin is counted in whole lines, the header being
    /// the first one.
    pub viewport: Rect,
    pub cache_length: CacheLength,
    pub cache_unit: CacheUnit,
    /// Desired size of the group header that precedes the panel.
    pub header_size: Size,
    /// Cross-axis space the group reserves around the panel.
    pub margin: f64,
}

impl GroupConstraints {
    pub fn new(viewport: Rect) -> Self {
        Self {
            viewport,
            cache_length: CacheLength::uniform(0.0),
            cache_unit: CacheUnit::Item,
            header_size: Size::ZERO,
            margin: 0.0,
        }
    }

    pub fn with_cache(mut self, cache_length: CacheLength, cache_unit: CacheUnit) -> Self {
        self.cache_length = cache_length;
        self.cache_unit = cache_unit;
        self
    }

    pub fn with_header_size(mut self, header_size: Size) -> Self {
        self.header_size = header_size;
        self
    }

    pub fn with_margin(mut self, margin: f64) -> Self {
        self.margin = margin;
        self
    }
}
