use alloc::collections::BTreeSet;
use alloc::vec::Vec;

use crate::{ContainerGenerator, ItemRange, LayoutError, Size, VirtualizationMode};

/// A realized container plus the desired size reported when it was measured.
#[derive(Clone, Debug)]
pub struct RealizedChild<C> {
    pub container: C,
    pub desired_size: Size,
}

/// Counters describing what one realize/virtualize pass did.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RealizeStats {
    pub generated: usize,
    pub reused: usize,
    pub recycled: usize,
    pub removed: usize,
}

/// Owns the realized containers of a panel and reconciles them with a resolved [`ItemRange`].
///
/// Children are kept ordered by item index, so the first child is always the lowest realized
/// item. A pass runs [`Realizer::realize`] before [`Realizer::virtualize`]: an item that stays in
/// range is never dropped while the pool settles.
#[derive(Clone, Debug)]
pub struct Realizer<C> {
    children: Vec<RealizedChild<C>>,
}

impl<C> Default for Realizer<C> {
    fn default() -> Self {
        Self {
            children: Vec::new(),
        }
    }
}

impl<C> Realizer<C> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.children.len()
    }

    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    pub fn children(&self) -> &[RealizedChild<C>] {
        &self.children
    }

    pub fn first_desired_size(&self) -> Option<Size> {
        self.children.first().map(|c| c.desired_size)
    }

    /// Returns the size of the first realized child, realizing item 0 if nothing is realized.
    ///
    /// The probe container stays in the realized set; the next virtualize scan drops it if item 0
    /// is outside the range. Returns `Ok(None)` for an empty collection.
    pub fn probe_child_size<G>(
        &mut self,
        generator: &mut G,
        item_count: usize,
    ) -> Result<Option<Size>, LayoutError>
    where
        G: ContainerGenerator<Container = C>,
    {
        if let Some(size) = self.first_desired_size() {
            return Ok(Some(size));
        }
        if item_count == 0 {
            return Ok(None);
        }
        let container = generator
            .generate_or_recycle(0)
            .ok_or(LayoutError::ContainerUnavailable { index: 0 })?;
        let desired_size = generator.measure(&container, Size::INFINITY);
        vdebug!(
            width = desired_size.width,
            height = desired_size.height,
            "probe_child_size"
        );
        self.children.push(RealizedChild {
            container,
            desired_size,
        });
        Ok(Some(desired_size))
    }

    /// Makes sure every index in `range` has a container, walking forward from the start.
    ///
    /// Existing containers are reused as they are. New ones are measured against
    /// `measure_size`. Containers outside the range are left alone here; see
    /// [`Realizer::virtualize`].
    pub fn realize<G>(
        &mut self,
        range: ItemRange,
        generator: &mut G,
        measure_size: Size,
    ) -> Result<RealizeStats, LayoutError>
    where
        G: ContainerGenerator<Container = C>,
    {
        let mut stats = RealizeStats::default();
        if range.is_empty() {
            return Ok(stats);
        }

        let live: BTreeSet<usize> = self
            .children
            .iter()
            .filter_map(|c| generator.index_of(&c.container))
            .filter(|&i| range.contains(i))
            .collect();

        let mut result = Ok(());
        for index in range.iter() {
            if live.contains(&index) {
                stats.reused += 1;
                continue;
            }
            let Some(container) = generator.generate_or_recycle(index) else {
                result = Err(LayoutError::ContainerUnavailable { index });
                break;
            };
            let desired_size = generator.measure(&container, measure_size);
            self.children.push(RealizedChild {
                container,
                desired_size,
            });
            stats.generated += 1;
        }

        // Whatever was generated before a failure stays owned and ordered.
        self.sort_by_index(generator);
        result.map(|()| stats)
    }

    /// Releases every container that is stale, outside `range`, or a duplicate of a kept index.
    ///
    /// Scans back to front so removals never skip an entry.
    pub fn virtualize<G>(
        &mut self,
        range: ItemRange,
        generator: &mut G,
        mode: VirtualizationMode,
    ) -> RealizeStats
    where
        G: ContainerGenerator<Container = C>,
    {
        let mut stats = RealizeStats::default();
        let mut kept = BTreeSet::new();
        let mut i = self.children.len();
        while i > 0 {
            i -= 1;
            let keep = match generator.index_of(&self.children[i].container) {
                Some(index) if range.contains(index) => {
                    let fresh = kept.insert(index);
                    if !fresh {
                        vwarn!(index, "virtualize: two containers map to the same item");
                    }
                    fresh
                }
                Some(_) => false,
                None => {
                    vdebug!(position = i, "virtualize: dropping stale container");
                    false
                }
            };
            if keep {
                continue;
            }
            let child = self.children.remove(i);
            match mode {
                VirtualizationMode::Recycling => {
                    generator.recycle(child.container);
                    stats.recycled += 1;
                }
                VirtualizationMode::Standard => {
                    generator.remove(child.container);
                    stats.removed += 1;
                }
            }
        }
        stats
    }

    /// Removes containers whose item no longer resolves and restores index order.
    ///
    /// Returns how many were dropped.
    pub fn prune_stale<G>(&mut self, generator: &mut G) -> usize
    where
        G: ContainerGenerator<Container = C>,
    {
        let mut dropped = 0usize;
        let mut i = self.children.len();
        while i > 0 {
            i -= 1;
            if generator.index_of(&self.children[i].container).is_none() {
                let child = self.children.remove(i);
                generator.remove(child.container);
                dropped += 1;
            }
        }
        // Moves can reorder surviving containers too.
        self.sort_by_index(generator);
        dropped
    }

    /// Removes every realized container.
    pub fn clear<G>(&mut self, generator: &mut G)
    where
        G: ContainerGenerator<Container = C>,
    {
        for child in self.children.drain(..).rev() {
            generator.remove(child.container);
        }
    }

    /// Calls `f` with each realized container and the item it represents, in index order.
    pub fn for_each<G>(&self, generator: &G, mut f: impl FnMut(usize, &C))
    where
        G: ContainerGenerator<Container = C>,
    {
        for child in &self.children {
            if let Some(index) = generator.index_of(&child.container) {
                f(index, &child.container);
            }
        }
    }

    fn sort_by_index<G>(&mut self, generator: &G)
    where
        G: ContainerGenerator<Container = C>,
    {
        self.children.sort_by_cached_key(|c| {
            generator
                .index_of(&c.container)
                .unwrap_or(usize::MAX)
        });
    }
}
