//! Item range resolution: which indexes must be realized for the current scroll position.
//!
//! Line positions always round the same way: the start of a window rounds down to the line that
//! contains it and the end of a window includes the line it touches. A viewport ending exactly on
//! a line boundary therefore realizes that trailing line too.

use crate::float;
use crate::packing;
use crate::{
    CacheLength, CacheUnit, GroupConstraints, ItemRange, Orientation, Point, ScrollUnit, Size,
};

/// Everything the resolver needs from the current pass.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RangeInput {
    pub item_count: usize,
    pub items_per_line: usize,
    pub child_size: Size,
    pub orientation: Orientation,
    pub extent: Size,
    pub viewport: Size,
    pub offset: Point,
    pub cache_length: CacheLength,
    pub cache_unit: CacheUnit,
    pub scroll_unit: ScrollUnit,
}

/// Resolves the realized range, deferring to `group` when the panel is hosted by one.
pub fn resolve(input: &RangeInput, group: Option<&GroupConstraints>) -> ItemRange {
    match group {
        Some(group) => resolve_grouped(input, group),
        None => resolve_flat(input),
    }
}

/// Resolves the realized range of a panel that owns its own scrolling.
pub fn resolve_flat(input: &RangeInput) -> ItemRange {
    let count = input.item_count;
    if count == 0 {
        return ItemRange::EMPTY;
    }
    let per_line = input.items_per_line.max(1);
    let max_line = packing::line_count(count, per_line) - 1;
    let o = input.orientation;
    let child_main = o.main(input.child_size);
    let cache = input.cache_length.sanitized();

    let mut start_px = float::non_negative(o.main_of(input.offset));
    let mut end_px = start_px + float::non_negative(o.main(input.viewport));
    if input.cache_unit == CacheUnit::Pixel {
        start_px = float::non_negative(start_px - cache.before);
        end_px = (end_px + cache.after).min(float::non_negative(o.main(input.extent)));
    }

    let start_line = line_at(start_px, child_main, max_line);
    let end_line = line_at(end_px, child_main, max_line).max(start_line);

    let mut start = start_line.saturating_mul(per_line);
    let mut end = end_line
        .saturating_add(1)
        .saturating_mul(per_line)
        .saturating_sub(1)
        .min(count - 1);

    match input.cache_unit {
        CacheUnit::Pixel => {}
        CacheUnit::Page => {
            let per_page = (end - start + 1) as f64;
            start = start.saturating_sub(float::to_count(cache.before * per_page));
            end = end
                .saturating_add(float::to_count(cache.after * per_page))
                .min(count - 1);
        }
        CacheUnit::Item => {
            start = start.saturating_sub(float::to_count(cache.before));
            end = end
                .saturating_add(float::to_count(cache.after))
                .min(count - 1);
        }
    }

    vtrace!(start, end, start_line, end_line, "resolve_flat");
    ItemRange::new(start, end)
}

/// Resolves the realized range of a panel hosted by a virtualized group.
///
/// The group's viewport, header and cache policy replace the panel's own offset, viewport and
/// cache settings. Pixel caches are bounded by the distance actually available before and after
/// the visible window, so nothing is cached past either end of the extent. Page caches are
/// converted to pixels using the visible window size.
pub fn resolve_grouped(input: &RangeInput, group: &GroupConstraints) -> ItemRange {
    let count = input.item_count;
    if count == 0 {
        return ItemRange::EMPTY;
    }
    let per_line = input.items_per_line.max(1);
    let max_line = packing::line_count(count, per_line) - 1;
    let o = input.orientation;
    let child_main = o.main(input.child_size);
    if !float::is_positive(child_main) {
        return ItemRange::new(0, (per_line - 1).min(count - 1));
    }
    let extent_main = float::non_negative(o.main(input.extent));
    let origin = o.main_of(group.viewport.origin());

    let (offset_line, offset_px) = match input.scroll_unit {
        ScrollUnit::Item => {
            // The header takes up the first line unit.
            let line = float::to_count(float::floor(origin))
                .saturating_sub(1)
                .min(max_line);
            (line, line as f64 * child_main)
        }
        ScrollUnit::Pixel => {
            let px = float::non_negative(origin - o.main(group.header_size)).min(extent_main);
            (line_at(px, child_main, max_line), px)
        }
    };

    let viewport_main = float::non_negative(o.main(group.viewport.size()))
        .min(float::non_negative(extent_main - offset_px));
    let window_end = offset_px + viewport_main;
    let end_line_exclusive =
        line_end_exclusive(window_end, child_main, max_line).max(offset_line + 1);

    let mut start = offset_line.saturating_mul(per_line);
    let mut end = end_line_exclusive
        .saturating_mul(per_line)
        .saturating_sub(1)
        .min(count - 1);

    let cache = group.cache_length.sanitized();
    let pixel_cache = match group.cache_unit {
        CacheUnit::Pixel => Some((cache.before, cache.after)),
        CacheUnit::Page => Some((cache.before * viewport_main, cache.after * viewport_main)),
        CacheUnit::Item => None,
    };

    match pixel_cache {
        Some((before, after)) => {
            let before_px = before.min(offset_px);
            let after_px = after.min(float::non_negative(extent_main - window_end));
            let cached_start_line = line_at(offset_px - before_px, child_main, max_line);
            let cached_end_exclusive =
                line_end_exclusive(window_end + after_px, child_main, max_line)
                    .max(end_line_exclusive);
            start = start.min(cached_start_line.saturating_mul(per_line));
            end = cached_end_exclusive
                .saturating_mul(per_line)
                .saturating_sub(1)
                .min(count - 1);
        }
        None => {
            start = start.saturating_sub(float::to_count(cache.before));
            end = end
                .saturating_add(float::to_count(cache.after))
                .min(count - 1);
        }
    }

    vtrace!(start, end, offset_line, offset_px, "resolve_grouped");
    ItemRange::new(start, end)
}

/// The line containing `pos`, clamped to `[0, max_line]`.
fn line_at(pos: f64, child_main: f64, max_line: usize) -> usize {
    if !float::is_positive(child_main) {
        return 0;
    }
    float::to_count(float::floor(pos / child_main)).min(max_line)
}

/// One past the last line touched by a window ending at `pos`, clamped to `[0, max_line + 1]`.
fn line_end_exclusive(pos: f64, child_main: f64, max_line: usize) -> usize {
    float::to_count(float::ceil(pos / child_main)).min(max_line + 1)
}
