use crate::range;
use crate::{
    Arrangement, GroupConstraints, ItemRange, Orientation, Packing, PackingInput, Point,
    RangeInput, RealizeStats, Size,
};

/// The immutable outcome of a measure pass.
///
/// [`crate::VirtualizingPanel::measure`] produces it and [`crate::VirtualizingPanel::arrange`]
/// consumes it, so nothing computed during measure is smuggled into arrange through panel state.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LayoutPass {
    pub orientation: Orientation,
    pub item_count: usize,
    pub child_size: Size,
    pub items_per_line: usize,
    pub line_count: usize,
    pub extent: Size,
    pub viewport: Size,
    pub offset: Point,
    pub item_range: ItemRange,
    /// Set when the panel is hosted by a grouping parent.
    pub grouped: bool,
    pub desired_size: Size,
    pub stats: RealizeStats,
}

/// Inputs of the item-unit scroll amount queries.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScrollMetrics {
    pub child_size: Size,
    pub viewport: Size,
    pub line_delta_item: usize,
    pub wheel_delta_item: usize,
}

/// A packing strategy plugged into [`crate::VirtualizingPanel`].
///
/// The panel drives the pass (generation, recycling, geometry, scrolling) and asks the policy
/// how items pack, which of them must exist, and where they go.
///
/// The scroll amount queries are used with `ScrollUnit::Item`. Amounts towards the start
/// (up/left) are negative. The defaults step `line_delta_item` / `wheel_delta_item` children,
/// capped at one viewport.
pub trait LayoutPolicy {
    fn calculate_extent(&self, input: &PackingInput) -> Packing;

    fn update_item_range(&self, input: &RangeInput, group: Option<&GroupConstraints>) -> ItemRange {
        range::resolve(input, group)
    }

    fn arrangement(&self, pass: &LayoutPass, final_size: Size) -> Arrangement;

    fn line_up_scroll_amount(&self, m: &ScrollMetrics) -> f64 {
        -item_step(m.child_size.height, m.line_delta_item, m.viewport.height)
    }

    fn line_down_scroll_amount(&self, m: &ScrollMetrics) -> f64 {
        item_step(m.child_size.height, m.line_delta_item, m.viewport.height)
    }

    fn line_left_scroll_amount(&self, m: &ScrollMetrics) -> f64 {
        -item_step(m.child_size.width, m.line_delta_item, m.viewport.width)
    }

    fn line_right_scroll_amount(&self, m: &ScrollMetrics) -> f64 {
        item_step(m.child_size.width, m.line_delta_item, m.viewport.width)
    }

    fn mouse_wheel_up_scroll_amount(&self, m: &ScrollMetrics) -> f64 {
        -item_step(m.child_size.height, m.wheel_delta_item, m.viewport.height)
    }

    fn mouse_wheel_down_scroll_amount(&self, m: &ScrollMetrics) -> f64 {
        item_step(m.child_size.height, m.wheel_delta_item, m.viewport.height)
    }

    fn mouse_wheel_left_scroll_amount(&self, m: &ScrollMetrics) -> f64 {
        -item_step(m.child_size.width, m.wheel_delta_item, m.viewport.width)
    }

    fn mouse_wheel_right_scroll_amount(&self, m: &ScrollMetrics) -> f64 {
        item_step(m.child_size.width, m.wheel_delta_item, m.viewport.width)
    }
}

/// `items` children worth of distance, never more than one viewport.
pub(crate) fn item_step(child: f64, items: usize, viewport: f64) -> f64 {
    (child * items as f64).min(viewport)
}
