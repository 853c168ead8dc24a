use crate::float;
use crate::{Orientation, Size, SpacingMode};

/// Inputs of the extent/packing computation for one pass.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PackingInput {
    /// Size offered to the panel. The cross dimension may be infinite.
    pub available: Size,
    /// Uniform child size used for packing.
    pub child_size: Size,
    pub item_count: usize,
    pub orientation: Orientation,
    /// Cross-axis space reserved by a grouping parent (zero when not grouped).
    pub group_margin: f64,
}

/// Result of packing `item_count` uniform children into lines.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Packing {
    pub items_per_line: usize,
    pub line_count: usize,
    pub extent: Size,
}

/// Upper bound on the items a bounded line can hold.
///
/// Vanishingly small child sizes would otherwise saturate the count at `usize::MAX`.
pub const MAX_ITEMS_PER_LINE: usize = u32::MAX as usize;

/// Number of children that fit in one line.
///
/// An unbounded cross axis puts every item on a single line. Degenerate child sizes (zero,
/// negative, NaN or infinite) fall back to one item per line. The result never exceeds
/// [`MAX_ITEMS_PER_LINE`] for a bounded cross axis.
pub fn items_per_line(available_cross: f64, child_cross: f64, item_count: usize) -> usize {
    if available_cross.is_infinite() && available_cross > 0.0 {
        return item_count.max(1);
    }
    if !float::is_positive(child_cross) {
        return 1;
    }
    float::to_count(float::floor(float::non_negative(available_cross) / child_cross))
        .clamp(1, MAX_ITEMS_PER_LINE)
}

/// `ceil(item_count / items_per_line)`.
pub fn line_count(item_count: usize, items_per_line: usize) -> usize {
    item_count.div_ceil(items_per_line.max(1))
}

/// The cross-axis dimension packing works against, after the group reservation.
pub(crate) fn available_cross(input: &PackingInput) -> f64 {
    let cross = input.orientation.cross(input.available);
    if cross.is_infinite() {
        return cross;
    }
    float::non_negative(float::non_negative(cross) - float::non_negative(input.group_margin))
}

/// Packs uniform children into lines and computes the total extent.
///
/// When `spacing` distributes leftover space and the cross axis is bounded, the extent spans the
/// whole available cross size; otherwise it is exactly as wide as the packed line.
pub fn calculate_extent(input: &PackingInput, spacing: SpacingMode) -> Packing {
    let orientation = input.orientation;
    let available_cross = available_cross(input);
    let child_cross = orientation.cross(input.child_size);
    let child_main = orientation.main(input.child_size);

    let items_per_line = items_per_line(available_cross, child_cross, input.item_count);
    let line_count = line_count(input.item_count, items_per_line);

    let extent_cross = if spacing != SpacingMode::None && available_cross.is_finite() {
        available_cross
    } else if float::is_positive(child_cross) {
        child_cross * items_per_line as f64
    } else {
        0.0
    };

    // A degenerate child main size defers the extent until a real child has been measured.
    let extent_main = if float::is_positive(child_main) {
        child_main * line_count as f64
    } else {
        0.0
    };

    Packing {
        items_per_line,
        line_count,
        extent: orientation.size(extent_main, float::non_negative(extent_cross)),
    }
}
