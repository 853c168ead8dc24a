use alloc::vec::Vec;

use wrap_virtualizer::{ContainerGenerator, ItemsChanged, Size};

/// Creates, rebinds and measures the host's visual containers.
///
/// Implemented by the UI layer; [`ContainerPool`] decides when each method is called.
pub trait ContainerFactory {
    type Container;

    /// Builds a fresh container for the item at `index`. `None` fails the layout pass.
    fn create(&mut self, index: usize) -> Option<Self::Container>;

    /// Points a recycled container at a new item.
    fn bind(&mut self, container: &mut Self::Container, index: usize);

    fn measure(&mut self, container: &Self::Container, available: Size) -> Size;

    /// Called when a container leaves the pool for good.
    fn release(&mut self, container: Self::Container) {
        let _ = container;
    }
}

/// A generation-checked handle to a pooled container.
///
/// The generation changes every time the slot changes hands, so a handle kept after its container
/// was recycled never resolves to the slot's next occupant.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ContainerId {
    slot: u32,
    generation: u32,
}

impl ContainerId {
    pub fn slot(self) -> u32 {
        self.slot
    }

    pub fn generation(self) -> u32 {
        self.generation
    }
}

#[derive(Clone, Debug)]
enum SlotState<T> {
    Vacant,
    Pooled(T),
    Live { container: T, index: Option<usize> },
}

#[derive(Clone, Debug)]
struct Slot<T> {
    generation: u32,
    state: SlotState<T>,
}

/// An arena of containers that implements [`ContainerGenerator`] on top of a [`ContainerFactory`].
///
/// Live containers remember the item they show. Feed every [`ItemsChanged`] to
/// [`ContainerPool::apply`] before handing it to the panel so that mapping stays in sync.
#[derive(Clone, Debug)]
pub struct ContainerPool<F: ContainerFactory> {
    factory: F,
    slots: Vec<Slot<F::Container>>,
    vacant: Vec<u32>,
    pooled: Vec<u32>,
    max_pooled: usize,
}

impl<F: ContainerFactory> ContainerPool<F> {
    pub fn new(factory: F) -> Self {
        Self {
            factory,
            slots: Vec::new(),
            vacant: Vec::new(),
            pooled: Vec::new(),
            max_pooled: usize::MAX,
        }
    }

    /// Caps the number of idle containers kept for reuse. Extra ones are released.
    pub fn with_max_pooled(mut self, max_pooled: usize) -> Self {
        self.max_pooled = max_pooled;
        self
    }

    pub fn factory(&self) -> &F {
        &self.factory
    }

    pub fn factory_mut(&mut self) -> &mut F {
        &mut self.factory
    }

    pub fn live_len(&self) -> usize {
        self.slots
            .iter()
            .filter(|s| matches!(s.state, SlotState::Live { .. }))
            .count()
    }

    pub fn pooled_len(&self) -> usize {
        self.pooled.len()
    }

    /// The live container behind `id`, or `None` if the handle is stale.
    pub fn get(&self, id: ContainerId) -> Option<&F::Container> {
        match &self.slot(id)?.state {
            SlotState::Live { container, .. } => Some(container),
            _ => None,
        }
    }

    pub fn get_mut(&mut self, id: ContainerId) -> Option<&mut F::Container> {
        let slot = self.slots.get_mut(id.slot as usize)?;
        if slot.generation != id.generation {
            return None;
        }
        match &mut slot.state {
            SlotState::Live { container, .. } => Some(container),
            _ => None,
        }
    }

    /// Updates the item index of every live container after a change in the items source.
    pub fn apply(&mut self, change: ItemsChanged) {
        for slot in &mut self.slots {
            if let SlotState::Live { index, .. } = &mut slot.state {
                *index = index.and_then(|i| remap(i, change));
            }
        }
    }

    fn slot(&self, id: ContainerId) -> Option<&Slot<F::Container>> {
        self.slots
            .get(id.slot as usize)
            .filter(|s| s.generation == id.generation)
    }

    /// Takes the container out of a live slot and advances its generation.
    fn take_live(&mut self, id: ContainerId) -> Option<F::Container> {
        let slot = self.slots.get_mut(id.slot as usize)?;
        if slot.generation != id.generation || !matches!(slot.state, SlotState::Live { .. }) {
            return None;
        }
        slot.generation = slot.generation.wrapping_add(1);
        match core::mem::replace(&mut slot.state, SlotState::Vacant) {
            SlotState::Live { container, .. } => Some(container),
            _ => None,
        }
    }

    fn release_into_vacant(&mut self, slot: u32, container: F::Container) {
        self.factory.release(container);
        self.vacant.push(slot);
    }
}

impl<F: ContainerFactory> ContainerGenerator for ContainerPool<F> {
    type Container = ContainerId;

    fn generate_or_recycle(&mut self, index: usize) -> Option<ContainerId> {
        while let Some(slot) = self.pooled.pop() {
            let entry = &mut self.slots[slot as usize];
            if !matches!(entry.state, SlotState::Pooled(_)) {
                continue;
            }
            let SlotState::Pooled(mut container) =
                core::mem::replace(&mut entry.state, SlotState::Vacant)
            else {
                continue;
            };
            self.factory.bind(&mut container, index);
            entry.state = SlotState::Live {
                container,
                index: Some(index),
            };
            return Some(ContainerId {
                slot,
                generation: entry.generation,
            });
        }

        let Some(container) = self.factory.create(index) else {
            vwarn!(index, "factory could not create a container");
            return None;
        };
        let state = SlotState::Live {
            container,
            index: Some(index),
        };
        let slot = match self.vacant.pop() {
            Some(slot) => {
                self.slots[slot as usize].state = state;
                slot
            }
            None => {
                self.slots.push(Slot {
                    generation: 0,
                    state,
                });
                (self.slots.len() - 1) as u32
            }
        };
        Some(ContainerId {
            slot,
            generation: self.slots[slot as usize].generation,
        })
    }

    fn recycle(&mut self, id: ContainerId) {
        let Some(container) = self.take_live(id) else {
            vwarn!(slot = id.slot, generation = id.generation, "recycle: stale handle");
            return;
        };
        if self.pooled.len() >= self.max_pooled {
            self.release_into_vacant(id.slot, container);
            return;
        }
        self.slots[id.slot as usize].state = SlotState::Pooled(container);
        self.pooled.push(id.slot);
    }

    fn remove(&mut self, id: ContainerId) {
        let Some(container) = self.take_live(id) else {
            vwarn!(slot = id.slot, generation = id.generation, "remove: stale handle");
            return;
        };
        self.release_into_vacant(id.slot, container);
    }

    fn index_of(&self, id: &ContainerId) -> Option<usize> {
        match &self.slot(*id)?.state {
            SlotState::Live { index, .. } => *index,
            _ => None,
        }
    }

    fn measure(&mut self, id: &ContainerId, available: Size) -> Size {
        let Some(slot) = self.slots.get(id.slot as usize) else {
            return Size::ZERO;
        };
        match &slot.state {
            SlotState::Live { container, .. } if slot.generation == id.generation => {
                self.factory.measure(container, available)
            }
            _ => Size::ZERO,
        }
    }
}

/// Where the item at `index` ends up after `change`, or `None` if it no longer exists.
pub fn remap(index: usize, change: ItemsChanged) -> Option<usize> {
    match change {
        ItemsChanged::Add { index: at, count } => {
            Some(if index >= at { index + count } else { index })
        }
        ItemsChanged::Remove { index: at, count } => {
            if index < at {
                Some(index)
            } else if index < at + count {
                None
            } else {
                Some(index - count)
            }
        }
        ItemsChanged::Replace { index: at, count } => {
            (index < at || index >= at + count).then_some(index)
        }
        ItemsChanged::Move {
            old_index,
            new_index,
            count,
        } => {
            if index >= old_index && index < old_index + count {
                return Some(new_index + (index - old_index));
            }
            let without = if index >= old_index + count {
                index - count
            } else {
                index
            };
            Some(if without >= new_index {
                without + count
            } else {
                without
            })
        }
        ItemsChanged::Reset { .. } => None,
    }
}
