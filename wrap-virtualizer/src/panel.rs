use core::cell::Cell;

use crate::float;
use crate::{
    ContainerGenerator, GroupConstraints, ItemRange, ItemsChanged, LayoutError, LayoutPass,
    LayoutPolicy, PackingInput, PanelOptions, Point, RangeInput, RealizeStats, RealizedChild,
    Realizer, Rect, ScrollGeometry, ScrollMetrics, ScrollUnit, Size, WrapLayout,
};

/// A headless virtualizing panel.
///
/// The panel decides, for every layout pass, which items of a (possibly huge) collection need a
/// container, where each realized container goes, and when containers can be recycled. It never
/// creates UI objects itself:
/// - the host supplies containers through a [`ContainerGenerator`],
/// - the host drives passes with [`VirtualizingPanel::measure`] and [`VirtualizingPanel::arrange`],
/// - a scroll owner reads the geometry and moves the offset.
///
/// Packing is delegated to a [`LayoutPolicy`] (`WrapLayout` by default).
///
/// The panel is `!Sync`: notifications are coalesced through interior counters, so it belongs to
/// a single UI thread.
#[derive(Clone, Debug)]
pub struct VirtualizingPanel<C, P = WrapLayout> {
    options: PanelOptions,
    policy: P,
    geometry: ScrollGeometry,
    item_count: usize,
    group: Option<GroupConstraints>,
    realizer: Realizer<C>,
    last_pass: Option<LayoutPass>,
    measure_dirty: bool,

    notify_depth: Cell<usize>,
    notify_pending: Cell<bool>,
}

impl<C, P: LayoutPolicy + Default> VirtualizingPanel<C, P> {
    /// Creates a panel with the policy's default configuration.
    pub fn new(options: PanelOptions) -> Self {
        Self::with_policy(options, P::default())
    }
}

impl<C, P: LayoutPolicy> VirtualizingPanel<C, P> {
    pub fn with_policy(options: PanelOptions, policy: P) -> Self {
        vdebug!(
            orientation = ?options.orientation,
            is_virtualizing = options.is_virtualizing,
            "VirtualizingPanel::new"
        );
        Self {
            options,
            policy,
            geometry: ScrollGeometry::default(),
            item_count: 0,
            group: None,
            realizer: Realizer::new(),
            last_pass: None,
            measure_dirty: true,
            notify_depth: Cell::new(0),
            notify_pending: Cell::new(false),
        }
    }

    pub fn options(&self) -> &PanelOptions {
        &self.options
    }

    /// Replaces the options and schedules a new measure pass.
    pub fn set_options(&mut self, options: PanelOptions) {
        self.options = options;
        vtrace!(
            orientation = ?self.options.orientation,
            scroll_unit = ?self.options.scroll_unit,
            "VirtualizingPanel::set_options"
        );
        self.invalidate_measure();
    }

    /// Clones the current options, applies `f`, then delegates to `set_options`.
    pub fn update_options(&mut self, f: impl FnOnce(&mut PanelOptions)) {
        let mut next = self.options.clone();
        f(&mut next);
        self.set_options(next);
    }

    pub fn policy(&self) -> &P {
        &self.policy
    }

    pub fn update_policy(&mut self, f: impl FnOnce(&mut P)) {
        f(&mut self.policy);
        self.invalidate_measure();
    }

    pub fn item_count(&self) -> usize {
        self.item_count
    }

    /// Sets the item count without touching realized containers.
    ///
    /// Prefer [`VirtualizingPanel::on_items_changed`] when containers may have gone stale.
    pub fn set_item_count(&mut self, count: usize) {
        if self.item_count == count {
            return;
        }
        self.item_count = count;
        self.invalidate_measure();
    }

    pub fn group_constraints(&self) -> Option<&GroupConstraints> {
        self.group.as_ref()
    }

    /// Installs (or removes) the constraints of a grouping parent.
    pub fn set_group_constraints(&mut self, group: Option<GroupConstraints>) {
        if self.group == group {
            return;
        }
        self.group = group;
        self.invalidate_measure();
    }

    pub fn needs_measure(&self) -> bool {
        self.measure_dirty
    }

    pub fn invalidate_measure(&mut self) {
        self.measure_dirty = true;
    }

    /// The most recent successful measure pass.
    pub fn last_pass(&self) -> Option<&LayoutPass> {
        self.last_pass.as_ref()
    }

    /// Realized containers, ordered by item index.
    pub fn realized(&self) -> &[RealizedChild<C>] {
        self.realizer.children()
    }

    pub fn realized_len(&self) -> usize {
        self.realizer.len()
    }

    fn notify_now(&self) {
        if let Some(cb) = &self.options.on_scroll_info_changed {
            cb(&self.geometry);
        }
    }

    fn notify(&self) {
        if self.notify_depth.get() > 0 {
            self.notify_pending.set(true);
            return;
        }
        self.notify_now();
    }

    /// Batches multiple updates into a single `on_scroll_info_changed` notification.
    ///
    /// A scroll owner that moves both offsets, or restores a snapshot, should wrap the calls so
    /// listeners see the final geometry once.
    pub fn batch_update(&mut self, f: impl FnOnce(&mut Self)) {
        let depth = self.notify_depth.get();
        self.notify_depth.set(depth.saturating_add(1));

        f(self);

        let depth = self.notify_depth.get();
        debug_assert!(depth > 0, "notify_depth underflow");
        let next = depth.saturating_sub(1);
        self.notify_depth.set(next);

        if next == 0 && self.notify_pending.replace(false) {
            self.notify_now();
        }
    }

    /// Applies an items-source notification.
    ///
    /// Call it after the source and the generator's index mapping reflect the change.
    pub fn on_items_changed<G>(&mut self, change: ItemsChanged, generator: &mut G)
    where
        G: ContainerGenerator<Container = C>,
    {
        self.item_count = change.apply_to_count(self.item_count);
        match change {
            ItemsChanged::Reset { .. } => self.realizer.clear(generator),
            change if change.invalidates_containers() => {
                let _dropped = self.realizer.prune_stale(generator);
                vdebug!(dropped = _dropped, ?change, "on_items_changed");
            }
            _ => {}
        }
        self.invalidate_measure();
    }

    /// Calls `f` with each realized container and its item index, in index order.
    pub fn for_each_realized<G>(&self, generator: &G, f: impl FnMut(usize, &C))
    where
        G: ContainerGenerator<Container = C>,
    {
        self.realizer.for_each(generator, f);
    }

    /// Runs a measure pass against `available`.
    ///
    /// Computes the packing and extent, updates the viewport and clamps the offset, resolves the
    /// realized range, realizes missing containers and finally virtualizes everything outside the
    /// range. The returned [`LayoutPass`] is what [`VirtualizingPanel::arrange`] consumes.
    pub fn measure<G>(&mut self, available: Size, generator: &mut G) -> Result<LayoutPass, LayoutError>
    where
        G: ContainerGenerator<Container = C>,
    {
        let o = self.options.orientation;
        let count = self.item_count;
        let group = self.group;

        let (child_size, measure_size) = match self.options.item_size {
            Some(size) => (size.non_negative(), size),
            None => {
                let size = self
                    .realizer
                    .probe_child_size(generator, count)?
                    .unwrap_or(Size::ZERO);
                (size.non_negative(), Size::INFINITY)
            }
        };
        if count > 0 && !float::is_positive(o.main(child_size)) {
            vwarn!(
                width = child_size.width,
                height = child_size.height,
                "measure: degenerate child size, extent deferred"
            );
        }

        let packing_available = match &group {
            Some(g) if float::is_positive(o.cross(g.viewport.size())) => {
                o.size(o.main(available), o.cross(g.viewport.size()))
            }
            _ => available,
        };
        let packing = self.policy.calculate_extent(&PackingInput {
            available: packing_available,
            child_size,
            item_count: count,
            orientation: o,
            group_margin: group.as_ref().map_or(0.0, |g| g.margin),
        });
        let extent = packing.extent;

        let viewport = match &group {
            Some(g) => g.viewport.size().non_negative(),
            None => Size::new(
                finite_or(available.width, extent.width),
                finite_or(available.height, extent.height),
            )
            .non_negative(),
        };
        if self.geometry.resize(extent, viewport) {
            self.notify();
        }

        let virtualizing =
            self.options.is_virtualizing && (group.is_none() || self.options.virtualize_when_grouping);
        let item_range = if virtualizing {
            self.policy.update_item_range(
                &RangeInput {
                    item_count: count,
                    items_per_line: packing.items_per_line,
                    child_size,
                    orientation: o,
                    extent,
                    viewport,
                    offset: self.geometry.offset,
                    cache_length: self.options.cache_length,
                    cache_unit: self.options.cache_unit,
                    scroll_unit: self.options.scroll_unit,
                },
                group.as_ref(),
            )
        } else {
            ItemRange::all(count)
        };

        let realized = self.realizer.realize(item_range, generator, measure_size)?;
        let virtualized =
            self.realizer
                .virtualize(item_range, generator, self.options.virtualization_mode);
        let stats = RealizeStats {
            generated: realized.generated,
            reused: realized.reused,
            recycled: virtualized.recycled,
            removed: virtualized.removed,
        };

        let desired_size = if group.is_some() {
            extent
        } else {
            Size::new(
                available.width.min(extent.width),
                available.height.min(extent.height),
            )
            .non_negative()
        };

        let pass = LayoutPass {
            orientation: o,
            item_count: count,
            child_size,
            items_per_line: packing.items_per_line,
            line_count: packing.line_count,
            extent,
            viewport,
            offset: self.geometry.offset,
            item_range,
            grouped: group.is_some(),
            desired_size,
            stats,
        };
        vdebug!(
            start = ?item_range.start_index(),
            end = ?item_range.end_index(),
            extent_width = extent.width,
            extent_height = extent.height,
            generated = stats.generated,
            recycled = stats.recycled,
            removed = stats.removed,
            "measure"
        );
        self.last_pass = Some(pass);
        self.measure_dirty = false;
        Ok(pass)
    }

    /// Places every realized container for `pass` and returns the size the panel occupies.
    ///
    /// `place` receives the item index, the container and its rect relative to the panel.
    pub fn arrange<G>(
        &self,
        final_size: Size,
        pass: &LayoutPass,
        generator: &G,
        mut place: impl FnMut(usize, &C, Rect),
    ) -> Size
    where
        G: ContainerGenerator<Container = C>,
    {
        let arrangement = self.policy.arrangement(pass, final_size);
        self.realizer.for_each(generator, |index, container| {
            place(index, container, arrangement.rect_for(index));
        });
        final_size
    }

    pub fn geometry(&self) -> ScrollGeometry {
        self.geometry
    }

    pub fn extent(&self) -> Size {
        self.geometry.extent
    }

    pub fn viewport(&self) -> Size {
        self.geometry.viewport
    }

    pub fn offset(&self) -> Point {
        self.geometry.offset
    }

    /// Moves the scroll offset, clamped to the scrollable area.
    ///
    /// A change schedules a new measure pass and notifies the scroll owner.
    pub fn set_offset(&mut self, offset: Point) {
        if !self.geometry.set_offset(offset) {
            return;
        }
        vtrace!(
            x = self.geometry.offset.x,
            y = self.geometry.offset.y,
            "set_offset"
        );
        self.measure_dirty = true;
        self.notify();
    }

    pub fn set_horizontal_offset(&mut self, x: f64) {
        self.set_offset(Point::new(x, self.geometry.offset.y));
    }

    pub fn set_vertical_offset(&mut self, y: f64) {
        self.set_offset(Point::new(self.geometry.offset.x, y));
    }

    /// Restores a previously captured geometry (for example across sessions).
    ///
    /// The offset is clamped against the restored extent and viewport; the next measure pass
    /// re-validates all three.
    pub fn restore_geometry(&mut self, geometry: ScrollGeometry) {
        self.batch_update(|p| {
            let changed = p.geometry.resize(geometry.extent, geometry.viewport);
            let moved = p.geometry.set_offset(geometry.offset);
            if changed || moved {
                p.measure_dirty = true;
                p.notify();
            }
        });
    }

    fn scroll_by(&mut self, dx: f64, dy: f64) {
        let offset = self.geometry.offset;
        self.set_offset(Point::new(offset.x + dx, offset.y + dy));
    }

    fn scroll_metrics(&self) -> ScrollMetrics {
        let child_size = self
            .last_pass
            .map(|p| p.child_size)
            .or(self.options.item_size)
            .unwrap_or(Size::ZERO);
        ScrollMetrics {
            child_size,
            viewport: self.geometry.viewport,
            line_delta_item: self.options.scroll_line_delta_item,
            wheel_delta_item: self.options.mouse_wheel_delta_item,
        }
    }

    pub fn line_up(&mut self) {
        let dy = match self.options.scroll_unit {
            ScrollUnit::Pixel => -self.options.scroll_line_delta,
            ScrollUnit::Item => self.policy.line_up_scroll_amount(&self.scroll_metrics()),
        };
        self.scroll_by(0.0, dy);
    }

    pub fn line_down(&mut self) {
        let dy = match self.options.scroll_unit {
            ScrollUnit::Pixel => self.options.scroll_line_delta,
            ScrollUnit::Item => self.policy.line_down_scroll_amount(&self.scroll_metrics()),
        };
        self.scroll_by(0.0, dy);
    }

    pub fn line_left(&mut self) {
        let dx = match self.options.scroll_unit {
            ScrollUnit::Pixel => -self.options.scroll_line_delta,
            ScrollUnit::Item => self.policy.line_left_scroll_amount(&self.scroll_metrics()),
        };
        self.scroll_by(dx, 0.0);
    }

    pub fn line_right(&mut self) {
        let dx = match self.options.scroll_unit {
            ScrollUnit::Pixel => self.options.scroll_line_delta,
            ScrollUnit::Item => self.policy.line_right_scroll_amount(&self.scroll_metrics()),
        };
        self.scroll_by(dx, 0.0);
    }

    pub fn mouse_wheel_up(&mut self) {
        let dy = match self.options.scroll_unit {
            ScrollUnit::Pixel => -self.options.mouse_wheel_delta,
            ScrollUnit::Item => self
                .policy
                .mouse_wheel_up_scroll_amount(&self.scroll_metrics()),
        };
        self.scroll_by(0.0, dy);
    }

    pub fn mouse_wheel_down(&mut self) {
        let dy = match self.options.scroll_unit {
            ScrollUnit::Pixel => self.options.mouse_wheel_delta,
            ScrollUnit::Item => self
                .policy
                .mouse_wheel_down_scroll_amount(&self.scroll_metrics()),
        };
        self.scroll_by(0.0, dy);
    }

    pub fn mouse_wheel_left(&mut self) {
        let dx = match self.options.scroll_unit {
            ScrollUnit::Pixel => -self.options.mouse_wheel_delta,
            ScrollUnit::Item => self
                .policy
                .mouse_wheel_left_scroll_amount(&self.scroll_metrics()),
        };
        self.scroll_by(dx, 0.0);
    }

    pub fn mouse_wheel_right(&mut self) {
        let dx = match self.options.scroll_unit {
            ScrollUnit::Pixel => self.options.mouse_wheel_delta,
            ScrollUnit::Item => self
                .policy
                .mouse_wheel_right_scroll_amount(&self.scroll_metrics()),
        };
        self.scroll_by(dx, 0.0);
    }

    pub fn page_up(&mut self) {
        self.scroll_by(0.0, -self.geometry.viewport.height);
    }

    pub fn page_down(&mut self) {
        self.scroll_by(0.0, self.geometry.viewport.height);
    }

    pub fn page_left(&mut self) {
        self.scroll_by(-self.geometry.viewport.width, 0.0);
    }

    pub fn page_right(&mut self) {
        self.scroll_by(self.geometry.viewport.width, 0.0);
    }

    /// Scrolls the minimum distance that brings `rect` (in content coordinates) into view.
    ///
    /// Returns the part of `rect` that is visible afterwards, in content coordinates. A rect larger
    /// than the viewport is aligned to its start.
    pub fn make_visible(&mut self, rect: Rect) -> Rect {
        let offset = self.geometry.offset;
        let viewport = self.geometry.viewport;
        self.set_offset(Point::new(
            reveal(offset.x, viewport.width, rect.x, rect.width),
            reveal(offset.y, viewport.height, rect.y, rect.height),
        ));

        let offset = self.geometry.offset;
        let (x, width) = visible_span(offset.x, viewport.width, rect.x, rect.width);
        let (y, height) = visible_span(offset.y, viewport.height, rect.y, rect.height);
        Rect::new(x, y, width, height)
    }

    /// Scrolls the main axis so the line holding `index` starts the viewport.
    ///
    /// Uses the packing of the last measure pass; before the first pass every item is assumed to
    /// sit on its own line. Returns the resulting offset.
    ///
    /// A grouped panel does not scroll itself: its geometry is left untouched and the returned
    /// point is the line's position inside the panel, for the grouping parent to scroll to.
    pub fn bring_index_into_view(&mut self, index: usize) -> Result<Point, LayoutError> {
        if index >= self.item_count {
            return Err(LayoutError::IndexOutOfRange {
                index,
                count: self.item_count,
            });
        }
        let o = self.options.orientation;
        let (items_per_line, child_main) = match &self.last_pass {
            Some(pass) => (pass.items_per_line.max(1), o.main(pass.child_size)),
            None => (1, self.options.item_size.map_or(0.0, |s| o.main(s))),
        };
        let line = index / items_per_line;
        let main = line as f64 * float::non_negative(child_main);
        if self.group.is_some() {
            return Ok(o.point(main, 0.0));
        }
        self.set_offset(o.point(main, o.cross_of(self.geometry.offset)));
        Ok(self.geometry.offset)
    }
}

fn finite_or(v: f64, fallback: f64) -> f64 {
    if v.is_finite() { v } else { fallback }
}

/// New offset along one axis so that `[start, start + len]` is visible.
fn reveal(offset: f64, viewport: f64, start: f64, len: f64) -> f64 {
    let end = start + len;
    if start < offset || len > viewport {
        start
    } else if end > offset + viewport {
        end - viewport
    } else {
        offset
    }
}

/// Intersection of `[start, start + len]` with the visible window, as `(start, len)`.
fn visible_span(offset: f64, viewport: f64, start: f64, len: f64) -> (f64, f64) {
    let lo = start.max(offset);
    let hi = (start + len).min(offset + viewport);
    if hi > lo { (lo, hi - lo) } else { (lo, 0.0) }
}
