use crate::arrange::{Spacing, child_arrange_size};
use crate::packing;
use crate::{Arrangement, LayoutPass, LayoutPolicy, Packing, PackingInput, Size, SpacingMode};

/// Packs uniform items into lines that wrap along the cross axis.
///
/// Leftover cross-axis space in a line is distributed according to [`SpacingMode`]. With
/// `stretch_items`, items instead grow to an equal share of the line, bounded by `item_max_size`.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WrapLayout {
    pub spacing_mode: SpacingMode,
    pub stretch_items: bool,
    pub item_max_size: Size,
}

impl Default for WrapLayout {
    fn default() -> Self {
        Self {
            spacing_mode: SpacingMode::default(),
            stretch_items: false,
            item_max_size: Size::INFINITY,
        }
    }
}

impl WrapLayout {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_spacing_mode(mut self, spacing_mode: SpacingMode) -> Self {
        self.spacing_mode = spacing_mode;
        self
    }

    pub fn with_stretch_items(mut self, stretch_items: bool) -> Self {
        self.stretch_items = stretch_items;
        self
    }

    pub fn with_item_max_size(mut self, item_max_size: Size) -> Self {
        self.item_max_size = item_max_size;
        self
    }
}

impl LayoutPolicy for WrapLayout {
    fn calculate_extent(&self, input: &PackingInput) -> Packing {
        packing::calculate_extent(input, self.spacing_mode)
    }

    fn arrangement(&self, pass: &LayoutPass, final_size: Size) -> Arrangement {
        let o = pass.orientation;
        let child_size = child_arrange_size(
            o,
            pass.child_size,
            final_size,
            pass.items_per_line,
            self.stretch_items,
            o.cross(self.item_max_size),
        );
        let spacing = Spacing::compute(
            self.spacing_mode,
            o.cross(final_size),
            o.cross(child_size),
            pass.items_per_line,
        );
        // A grouped panel is scrolled by its parent along the main axis.
        let offset = if pass.grouped {
            o.point(0.0, o.cross_of(pass.offset))
        } else {
            pass.offset
        };
        Arrangement {
            orientation: o,
            items_per_line: pass.items_per_line,
            child_size,
            spacing,
            offset,
            collapsed: o.main(final_size) == 0.0,
        }
    }
}
