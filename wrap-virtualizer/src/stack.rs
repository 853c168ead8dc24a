use crate::float;
use crate::{Arrangement, LayoutPass, LayoutPolicy, Packing, PackingInput, Size, Spacing};

/// One item per line, each line spanning the full cross size.
///
/// Useful as a list layout and as a reference for writing other policies.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StackLayout;

impl LayoutPolicy for StackLayout {
    fn calculate_extent(&self, input: &PackingInput) -> Packing {
        let o = input.orientation;
        let child_main = o.main(input.child_size);
        let extent_main = if float::is_positive(child_main) {
            child_main * input.item_count as f64
        } else {
            0.0
        };
        Packing {
            items_per_line: 1,
            line_count: input.item_count,
            extent: o.size(extent_main, float::non_negative(o.cross(input.child_size))),
        }
    }

    fn arrangement(&self, pass: &LayoutPass, final_size: Size) -> Arrangement {
        let o = pass.orientation;
        let final_cross = o.cross(final_size);
        let child_size = if final_cross.is_finite() {
            o.size(o.main(pass.child_size), float::non_negative(final_cross))
        } else {
            pass.child_size
        };
        let offset = if pass.grouped {
            o.point(0.0, o.cross_of(pass.offset))
        } else {
            pass.offset
        };
        Arrangement {
            orientation: o,
            items_per_line: 1,
            child_size,
            spacing: Spacing::default(),
            offset,
            collapsed: o.main(final_size) == 0.0,
        }
    }
}
