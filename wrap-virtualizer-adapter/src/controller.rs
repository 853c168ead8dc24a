use alloc::vec::Vec;

use wrap_virtualizer::{
    ItemsChanged, LayoutError, LayoutPass, LayoutPolicy, PanelOptions, Point, Rect, Size,
    VirtualizingPanel, WrapLayout,
};

use crate::{ContainerFactory, ContainerId, ContainerPool};

/// A realized container and where the last layout placed it.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ArrangedItem {
    pub index: usize,
    pub container: ContainerId,
    pub rect: Rect,
}

/// A framework-neutral controller that owns a `VirtualizingPanel` and its container pool.
///
/// Adapters drive it by calling:
/// - `items_changed` after mutating their items source
/// - `on_scroll` (or the panel's scroll methods) when input arrives
/// - `layout(available)` once per frame
///
/// Scroll and item updates only invalidate; `layout` runs a single measure + arrange when
/// something changed, so bursts of scroll events coalesce into one pass.
pub struct Controller<F: ContainerFactory, P = WrapLayout> {
    panel: VirtualizingPanel<ContainerId, P>,
    pool: ContainerPool<F>,
    last_available: Option<Size>,
    last_pass: Option<LayoutPass>,
    arranged: Vec<ArrangedItem>,
    layout_passes: usize,
}

impl<F: ContainerFactory, P: LayoutPolicy + Default> Controller<F, P> {
    pub fn new(options: PanelOptions, factory: F) -> Self {
        Self::from_parts(VirtualizingPanel::new(options), ContainerPool::new(factory))
    }
}

impl<F: ContainerFactory, P: LayoutPolicy> Controller<F, P> {
    pub fn from_parts(panel: VirtualizingPanel<ContainerId, P>, pool: ContainerPool<F>) -> Self {
        Self {
            panel,
            pool,
            last_available: None,
            last_pass: None,
            arranged: Vec::new(),
            layout_passes: 0,
        }
    }

    pub fn panel(&self) -> &VirtualizingPanel<ContainerId, P> {
        &self.panel
    }

    /// Direct access for scroll commands (`line_down`, `page_up`, `make_visible`, ...).
    pub fn panel_mut(&mut self) -> &mut VirtualizingPanel<ContainerId, P> {
        &mut self.panel
    }

    pub fn pool(&self) -> &ContainerPool<F> {
        &self.pool
    }

    pub fn pool_mut(&mut self) -> &mut ContainerPool<F> {
        &mut self.pool
    }

    pub fn container(&self, id: ContainerId) -> Option<&F::Container> {
        self.pool.get(id)
    }

    /// Forwards an items-source change to the pool mapping and then to the panel.
    pub fn items_changed(&mut self, change: ItemsChanged) {
        self.pool.apply(change);
        self.panel.on_items_changed(change, &mut self.pool);
    }

    pub fn set_item_count(&mut self, count: usize) {
        self.panel.set_item_count(count);
    }

    /// Call this when the UI reports a new scroll position.
    pub fn on_scroll(&mut self, offset: Point) {
        vtrace!(x = offset.x, y = offset.y, "on_scroll");
        self.panel.set_offset(offset);
    }

    pub fn bring_index_into_view(&mut self, index: usize) -> Result<Point, LayoutError> {
        self.panel.bring_index_into_view(index)
    }

    /// Runs measure and arrange if anything changed since the previous call.
    ///
    /// Returns `Ok(true)` when a pass ran. Infinite dimensions of `available` are arranged at the
    /// panel's desired size.
    pub fn layout(&mut self, available: Size) -> Result<bool, LayoutError> {
        if !self.panel.needs_measure() && self.last_available == Some(available) {
            return Ok(false);
        }

        let pass = self.panel.measure(available, &mut self.pool)?;
        let final_size = Size::new(
            finite_or(available.width, pass.desired_size.width),
            finite_or(available.height, pass.desired_size.height),
        );

        self.arranged.clear();
        let arranged = &mut self.arranged;
        self.panel
            .arrange(final_size, &pass, &self.pool, |index, container, rect| {
                arranged.push(ArrangedItem {
                    index,
                    container: *container,
                    rect,
                });
            });

        self.last_available = Some(available);
        self.last_pass = Some(pass);
        self.layout_passes += 1;
        vdebug!(
            passes = self.layout_passes,
            arranged = self.arranged.len(),
            pooled = self.pool.pooled_len(),
            "layout"
        );
        Ok(true)
    }

    /// Containers placed by the last layout, in item order.
    pub fn arranged(&self) -> &[ArrangedItem] {
        &self.arranged
    }

    pub fn last_pass(&self) -> Option<&LayoutPass> {
        self.last_pass.as_ref()
    }

    pub fn layout_passes(&self) -> usize {
        self.layout_passes
    }
}

impl<F: ContainerFactory, P> core::fmt::Debug for Controller<F, P> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Controller")
            .field("last_available", &self.last_available)
            .field("arranged", &self.arranged.len())
            .field("layout_passes", &self.layout_passes)
            .finish_non_exhaustive()
    }
}

fn finite_or(v: f64, fallback: f64) -> f64 {
    if v.is_finite() { v } else { fallback }
}
