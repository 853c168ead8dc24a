use alloc::sync::Arc;

use crate::{
    CacheLength, CacheUnit, Orientation, ScrollGeometry, ScrollUnit, Size, VirtualizationMode,
};

/// A callback fired when extent, viewport or offset change (the scroll owner's
/// "invalidate scroll info" signal).
pub type ScrollInfoCallback = Arc<dyn Fn(&ScrollGeometry) + Send + Sync>;

/// Configuration for [`crate::VirtualizingPanel`].
///
/// Policy-specific settings (spacing, stretching) live on the policy itself, for example
/// [`crate::WrapLayout`].
///
/// This type is cheap to clone: the callback is stored in an `Arc`.
#[derive(Clone)]
pub struct PanelOptions {
    pub orientation: Orientation,
    /// Fixed child size. When `None`, the first realized child is measured unconstrained and its
    /// desired size is used for every item.
    pub item_size: Option<Size>,

    pub cache_length: CacheLength,
    pub cache_unit: CacheUnit,

    pub scroll_unit: ScrollUnit,
    /// Line scroll amount in pixels (`ScrollUnit::Pixel`).
    pub scroll_line_delta: f64,
    /// Mouse-wheel scroll amount in pixels (`ScrollUnit::Pixel`).
    pub mouse_wheel_delta: f64,
    /// Line scroll amount in items (`ScrollUnit::Item`).
    pub scroll_line_delta_item: usize,
    /// Mouse-wheel scroll amount in items (`ScrollUnit::Item`).
    pub mouse_wheel_delta_item: usize,

    pub virtualization_mode: VirtualizationMode,
    /// When `false`, every item is realized.
    pub is_virtualizing: bool,
    /// When `false`, a panel hosted by a group realizes every item of the group.
    pub virtualize_when_grouping: bool,

    pub on_scroll_info_changed: Option<ScrollInfoCallback>,
}

impl Default for PanelOptions {
    fn default() -> Self {
        Self {
            orientation: Orientation::Horizontal,
            item_size: None,
            cache_length: CacheLength::default(),
            cache_unit: CacheUnit::default(),
            scroll_unit: ScrollUnit::default(),
            scroll_line_delta: 16.0,
            mouse_wheel_delta: 48.0,
            scroll_line_delta_item: 1,
            mouse_wheel_delta_item: 3,
            virtualization_mode: VirtualizationMode::default(),
            is_virtualizing: true,
            virtualize_when_grouping: true,
            on_scroll_info_changed: None,
        }
    }
}

impl PanelOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_orientation(mut self, orientation: Orientation) -> Self {
        self.orientation = orientation;
        self
    }

    pub fn with_item_size(mut self, item_size: Option<Size>) -> Self {
        self.item_size = item_size;
        self
    }

    pub fn with_cache(mut self, cache_length: CacheLength, cache_unit: CacheUnit) -> Self {
        self.cache_length = cache_length;
        self.cache_unit = cache_unit;
        self
    }

    pub fn with_scroll_unit(mut self, scroll_unit: ScrollUnit) -> Self {
        self.scroll_unit = scroll_unit;
        self
    }

    /// Pixel amounts for line and wheel scrolling.
    pub fn with_scroll_deltas(mut self, line: f64, wheel: f64) -> Self {
        self.scroll_line_delta = line;
        self.mouse_wheel_delta = wheel;
        self
    }

    /// Item amounts for line and wheel scrolling.
    pub fn with_scroll_deltas_item(mut self, line: usize, wheel: usize) -> Self {
        self.scroll_line_delta_item = line;
        self.mouse_wheel_delta_item = wheel;
        self
    }

    pub fn with_virtualization_mode(mut self, mode: VirtualizationMode) -> Self {
        self.virtualization_mode = mode;
        self
    }

    pub fn with_is_virtualizing(mut self, is_virtualizing: bool) -> Self {
        self.is_virtualizing = is_virtualizing;
        self
    }

    pub fn with_virtualize_when_grouping(mut self, virtualize_when_grouping: bool) -> Self {
        self.virtualize_when_grouping = virtualize_when_grouping;
        self
    }

    pub fn with_on_scroll_info_changed(
        mut self,
        f: Option<impl Fn(&ScrollGeometry) + Send + Sync + 'static>,
    ) -> Self {
        self.on_scroll_info_changed = f.map(|f| Arc::new(f) as _);
        self
    }
}

impl core::fmt::Debug for PanelOptions {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("PanelOptions")
            .field("orientation", &self.orientation)
            .field("item_size", &self.item_size)
            .field("cache_length", &self.cache_length)
            .field("cache_unit", &self.cache_unit)
            .field("scroll_unit", &self.scroll_unit)
            .field("scroll_line_delta", &self.scroll_line_delta)
            .field("mouse_wheel_delta", &self.mouse_wheel_delta)
            .field("scroll_line_delta_item", &self.scroll_line_delta_item)
            .field("mouse_wheel_delta_item", &self.mouse_wheel_delta_item)
            .field("virtualization_mode", &self.virtualization_mode)
            .field("is_virtualizing", &self.is_virtualizing)
            .field("virtualize_when_grouping", &self.virtualize_when_grouping)
            .finish_non_exhaustive()
    }
}
