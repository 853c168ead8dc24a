use alloc::vec::Vec;

use wrap_virtualizer::{ItemsChanged, LayoutError};

/// A list that reports every mutation as an [`ItemsChanged`] notification.
///
/// Each mutator returns the notification to forward to
/// [`crate::Controller::items_changed`] (or to a pool and panel directly).
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ItemsSource<T> {
    items: Vec<T>,
}

impl<T> ItemsSource<T> {
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&T> {
        self.items.get(index)
    }

    pub fn as_slice(&self) -> &[T] {
        &self.items
    }

    pub fn iter(&self) -> core::slice::Iter<'_, T> {
        self.items.iter()
    }

    fn check(&self, index: usize, len: usize) -> Result<(), LayoutError> {
        if index >= len {
            return Err(LayoutError::IndexOutOfRange { index, count: len });
        }
        Ok(())
    }

    pub fn push(&mut self, item: T) -> ItemsChanged {
        self.items.push(item);
        ItemsChanged::Add {
            index: self.items.len() - 1,
            count: 1,
        }
    }

    pub fn extend(&mut self, items: impl IntoIterator<Item = T>) -> ItemsChanged {
        let index = self.items.len();
        self.items.extend(items);
        ItemsChanged::Add {
            index,
            count: self.items.len() - index,
        }
    }

    /// Inserts at `index`; `index == len` appends.
    pub fn insert(&mut self, index: usize, item: T) -> Result<ItemsChanged, LayoutError> {
        self.check(index, self.items.len() + 1)?;
        self.items.insert(index, item);
        Ok(ItemsChanged::Add { index, count: 1 })
    }

    pub fn remove(&mut self, index: usize) -> Result<(T, ItemsChanged), LayoutError> {
        self.check(index, self.items.len())?;
        let item = self.items.remove(index);
        Ok((item, ItemsChanged::Remove { index, count: 1 }))
    }

    /// Replaces the item at `index` and returns the previous one.
    pub fn replace(&mut self, index: usize, item: T) -> Result<(T, ItemsChanged), LayoutError> {
        self.check(index, self.items.len())?;
        let old = core::mem::replace(&mut self.items[index], item);
        Ok((old, ItemsChanged::Replace { index, count: 1 }))
    }

    /// Moves the item at `old_index` so that it ends up at `new_index`.
    pub fn move_item(
        &mut self,
        old_index: usize,
        new_index: usize,
    ) -> Result<ItemsChanged, LayoutError> {
        let len = self.items.len();
        self.check(old_index, len)?;
        self.check(new_index, len)?;
        let item = self.items.remove(old_index);
        self.items.insert(new_index, item);
        Ok(ItemsChanged::Move {
            old_index,
            new_index,
            count: 1,
        })
    }

    /// Replaces the whole contents.
    pub fn reset(&mut self, items: impl IntoIterator<Item = T>) -> ItemsChanged {
        self.items.clear();
        self.items.extend(items);
        ItemsChanged::Reset {
            count: self.items.len(),
        }
    }

    pub fn clear(&mut self) -> ItemsChanged {
        self.reset(core::iter::empty())
    }
}

impl<T> FromIterator<T> for ItemsSource<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            items: iter.into_iter().collect(),
        }
    }
}
