use crate::float;
use crate::{Point, Size};

/// Extent, viewport and offset of a panel: the state a scroll owner reads.
///
/// The offset is kept inside `[0, max(0, extent - viewport)]` on both axes by every mutator.
///
/// With `feature = "serde"`, this type implements `Serialize`/`Deserialize`, which makes it usable
/// as a snapshot for restoring scroll state across sessions.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScrollGeometry {
    pub extent: Size,
    pub viewport: Size,
    pub offset: Point,
}

impl ScrollGeometry {
    pub fn max_offset(&self) -> Point {
        Point::new(
            float::non_negative(self.extent.width - self.viewport.width),
            float::non_negative(self.extent.height - self.viewport.height),
        )
    }

    pub fn clamp_offset(&self, offset: Point) -> Point {
        let max = self.max_offset();
        Point::new(
            float::non_negative(offset.x).min(max.x),
            float::non_negative(offset.y).min(max.y),
        )
    }

    /// Updates extent and viewport together, then re-clamps the offset once.
    ///
    /// Returns `true` when either changed.
    pub fn resize(&mut self, extent: Size, viewport: Size) -> bool {
        let extent = extent.non_negative();
        let viewport = viewport.non_negative();
        if self.extent == extent && self.viewport == viewport {
            return false;
        }
        self.extent = extent;
        self.viewport = viewport;
        self.offset = self.clamp_offset(self.offset);
        true
    }

    /// Stores the clamped offset. Returns `true` when it changed.
    pub fn set_offset(&mut self, offset: Point) -> bool {
        let offset = self.clamp_offset(offset);
        if self.offset == offset {
            return false;
        }
        self.offset = offset;
        true
    }
}
