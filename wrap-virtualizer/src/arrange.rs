use crate::float;
use crate::{Orientation, Point, Rect, Size, SpacingMode};

/// Cross-axis gaps between (`inner`) and around (`outer`) the items of a line.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Spacing {
    pub inner: f64,
    pub outer: f64,
}

impl Spacing {
    pub fn compute(
        mode: SpacingMode,
        final_cross: f64,
        child_cross: f64,
        items_per_line: usize,
    ) -> Self {
        let per_line = items_per_line.max(1);
        let final_cross = float::non_negative(final_cross);
        if !final_cross.is_finite() {
            return Self::default();
        }
        let packed = (float::non_negative(child_cross) * per_line as f64).min(final_cross);
        let unused = float::non_negative(final_cross - packed);

        match mode {
            SpacingMode::Uniform => {
                let gap = unused / (per_line as f64 + 1.0);
                Self {
                    inner: gap,
                    outer: gap,
                }
            }
            SpacingMode::BetweenItemsOnly => Self {
                inner: unused / per_line.saturating_sub(1).max(1) as f64,
                outer: 0.0,
            },
            SpacingMode::StartAndEndOnly => Self {
                inner: 0.0,
                outer: unused / 2.0,
            },
            SpacingMode::None => Self::default(),
        }
    }
}

/// Size a child is arranged at.
///
/// Without stretching this is the packing size. With stretching, the cross dimension grows to an
/// equal share of the final cross size, capped at `max_cross`.
pub fn child_arrange_size(
    orientation: Orientation,
    child_size: Size,
    final_size: Size,
    items_per_line: usize,
    stretch: bool,
    max_cross: f64,
) -> Size {
    if !stretch {
        return child_size;
    }
    let final_cross = orientation.cross(final_size);
    if !final_cross.is_finite() {
        return child_size;
    }
    let share = float::non_negative(final_cross) / items_per_line.max(1) as f64;
    let cross = if max_cross.is_nan() {
        share
    } else {
        share.min(max_cross)
    };
    orientation.size(orientation.main(child_size), cross)
}

/// Per-pass placement parameters, shared by every child arranged in that pass.
///
/// Produced by [`crate::LayoutPolicy::arrangement`] and applied with [`Arrangement::rect_for`].
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Arrangement {
    pub orientation: Orientation,
    pub items_per_line: usize,
    pub child_size: Size,
    pub spacing: Spacing,
    /// Scroll translation applied to every rect.
    pub offset: Point,
    /// Set when the final main size is zero: children get an empty rect and are not shown.
    pub collapsed: bool,
}

impl Arrangement {
    /// Rect of the item at `index`, relative to the panel.
    pub fn rect_for(&self, index: usize) -> Rect {
        if self.collapsed {
            return Rect::ZERO;
        }
        let o = self.orientation;
        let per_line = self.items_per_line.max(1);
        let column = index % per_line;
        let line = index / per_line;
        let child_cross = o.cross(self.child_size);
        let child_main = o.main(self.child_size);

        let cross = self.spacing.outer + column as f64 * (child_cross + self.spacing.inner);
        let main = line as f64 * child_main;
        o.rect(
            main - o.main_of(self.offset),
            cross - o.cross_of(self.offset),
            child_main,
            child_cross,
        )
    }
}
