use crate::*;

use alloc::string::String;
use alloc::vec::Vec;
use std::format;

use wrap_virtualizer::{
    CacheLength, CacheUnit, ContainerGenerator, ItemRange, ItemsChanged, LayoutError,
    PanelOptions, Point, Rect, Size,
};

#[derive(Debug)]
struct Tile {
    label: String,
}

#[derive(Debug, Default)]
struct Tiles {
    created: usize,
    bound: usize,
    released: usize,
    fail_at: Option<usize>,
}

impl ContainerFactory for Tiles {
    type Container = Tile;

    fn create(&mut self, index: usize) -> Option<Tile> {
        if self.fail_at == Some(index) {
            return None;
        }
        self.created += 1;
        Some(Tile {
            label: format!("item {index}"),
        })
    }

    fn bind(&mut self, container: &mut Tile, index: usize) {
        self.bound += 1;
        container.label = format!("item {index}");
    }

    fn measure(&mut self, _container: &Tile, _available: Size) -> Size {
        Size::new(100.0, 50.0)
    }

    fn release(&mut self, _container: Tile) {
        self.released += 1;
    }
}

const VIEWPORT: Size = Size::new(400.0, 300.0);

fn no_cache() -> PanelOptions {
    PanelOptions::new().with_cache(CacheLength::uniform(0.0), CacheUnit::Item)
}

fn arranged_indices(c: &Controller<Tiles>) -> Vec<usize> {
    c.arranged().iter().map(|a| a.index).collect()
}

#[test]
fn recycled_handles_do_not_alias_the_next_occupant() {
    let mut pool = ContainerPool::new(Tiles::default());
    let a = pool.generate_or_recycle(0).unwrap();
    assert_eq!(pool.index_of(&a), Some(0));
    assert_eq!(pool.get(a).unwrap().label, "item 0");

    pool.recycle(a);
    assert_eq!(pool.index_of(&a), None);
    assert!(pool.get(a).is_none());
    assert_eq!(pool.pooled_len(), 1);

    let b = pool.generate_or_recycle(5).unwrap();
    assert_eq!(b.slot(), a.slot());
    assert_ne!(b, a);
    assert_eq!(pool.index_of(&b), Some(5));
    assert_eq!(pool.get(b).unwrap().label, "item 5");
    assert_eq!(pool.factory().created, 1);
    assert_eq!(pool.factory().bound, 1);

    // Stale handles are ignored.
    pool.recycle(a);
    pool.remove(a);
    assert_eq!(pool.live_len(), 1);
    assert_eq!(pool.measure(&a, Size::INFINITY), Size::ZERO);
}

#[test]
fn removed_slots_are_reused_with_a_new_generation() {
    let mut pool = ContainerPool::new(Tiles::default());
    let a = pool.generate_or_recycle(0).unwrap();
    pool.remove(a);
    assert_eq!(pool.factory().released, 1);
    assert_eq!(pool.live_len(), 0);

    let b = pool.generate_or_recycle(1).unwrap();
    assert_eq!(b.slot(), a.slot());
    assert!(b.generation() != a.generation());
    assert_eq!(pool.factory().created, 2);
}

#[test]
fn pool_limit_releases_extra_containers() {
    let mut pool = ContainerPool::new(Tiles::default()).with_max_pooled(1);
    let a = pool.generate_or_recycle(0).unwrap();
    let b = pool.generate_or_recycle(1).unwrap();
    pool.recycle(a);
    pool.recycle(b);
    assert_eq!(pool.pooled_len(), 1);
    assert_eq!(pool.factory().released, 1);
}

#[test]
fn remap_follows_collection_changes() {
    let add = ItemsChanged::Add { index: 2, count: 3 };
    assert_eq!(remap(1, add), Some(1));
    assert_eq!(remap(2, add), Some(5));

    let remove = ItemsChanged::Remove { index: 2, count: 3 };
    assert_eq!(remap(1, remove), Some(1));
    assert_eq!(remap(3, remove), None);
    assert_eq!(remap(5, remove), Some(2));

    let replace = ItemsChanged::Replace { index: 2, count: 1 };
    assert_eq!(remap(2, replace), None);
    assert_eq!(remap(3, replace), Some(3));

    let forward = ItemsChanged::Move {
        old_index: 1,
        new_index: 3,
        count: 1,
    };
    // [a b c d e] -> [a c d b e]
    assert_eq!(remap(0, forward), Some(0));
    assert_eq!(remap(1, forward), Some(3));
    assert_eq!(remap(2, forward), Some(1));
    assert_eq!(remap(3, forward), Some(2));
    assert_eq!(remap(4, forward), Some(4));

    let backward = ItemsChanged::Move {
        old_index: 3,
        new_index: 0,
        count: 1,
    };
    // [a b c d] -> [d a b c]
    assert_eq!(remap(3, backward), Some(0));
    assert_eq!(remap(0, backward), Some(1));
    assert_eq!(remap(2, backward), Some(3));

    assert_eq!(remap(0, ItemsChanged::Reset { count: 10 }), None);
}

#[test]
fn items_source_reports_changes() {
    let mut items: ItemsSource<u32> = (0..5).collect();
    assert_eq!(items.push(5), ItemsChanged::Add { index: 5, count: 1 });
    assert_eq!(
        items.insert(0, 9),
        Ok(ItemsChanged::Add { index: 0, count: 1 })
    );
    assert_eq!(
        items.remove(0),
        Ok((9, ItemsChanged::Remove { index: 0, count: 1 }))
    );
    assert_eq!(
        items.replace(1, 7),
        Ok((1, ItemsChanged::Replace { index: 1, count: 1 }))
    );
    assert_eq!(
        items.move_item(0, 2),
        Ok(ItemsChanged::Move {
            old_index: 0,
            new_index: 2,
            count: 1,
        })
    );
    assert_eq!(items.as_slice(), [7, 2, 0, 3, 4, 5]);
    assert_eq!(
        items.extend([8, 9]),
        ItemsChanged::Add { index: 6, count: 2 }
    );
    assert_eq!(items.clear(), ItemsChanged::Reset { count: 0 });
    assert!(items.is_empty());
}

#[test]
fn items_source_rejects_out_of_range_indexes() {
    let mut items: ItemsSource<u32> = (0..3).collect();
    assert_eq!(
        items.remove(3),
        Err(LayoutError::IndexOutOfRange { index: 3, count: 3 })
    );
    assert_eq!(
        items.insert(5, 1),
        Err(LayoutError::IndexOutOfRange { index: 5, count: 4 })
    );
    assert!(items.move_item(0, 3).is_err());
    assert_eq!(items.len(), 3);
}

#[test]
fn controller_coalesces_scroll_into_one_pass() {
    let mut c: Controller<Tiles> = Controller::new(no_cache(), Tiles::default());
    c.set_item_count(1000);

    assert_eq!(c.layout(VIEWPORT), Ok(true));
    assert_eq!(c.layout(VIEWPORT), Ok(false));
    assert_eq!(arranged_indices(&c), (0..=27).collect::<Vec<_>>());

    for y in [100.0, 200.0, 300.0, 500.0] {
        c.on_scroll(Point::new(0.0, y));
    }
    assert_eq!(c.layout(VIEWPORT), Ok(true));
    assert_eq!(c.layout_passes(), 2);
    assert_eq!(c.last_pass().unwrap().item_range, ItemRange::new(40, 67));
    assert_eq!(arranged_indices(&c), (40..=67).collect::<Vec<_>>());
    assert_eq!(c.arranged()[0].rect, Rect::new(0.0, 0.0, 100.0, 50.0));

    // Resizing the window alone triggers a pass.
    assert_eq!(c.layout(Size::new(400.0, 400.0)), Ok(true));
}

#[test]
fn controller_recycles_through_the_pool() {
    let mut c: Controller<Tiles> = Controller::new(no_cache(), Tiles::default());
    c.set_item_count(1000);
    c.layout(VIEWPORT).unwrap();
    c.on_scroll(Point::new(0.0, 5000.0));
    c.layout(VIEWPORT).unwrap();
    assert_eq!(c.pool().pooled_len(), 28);

    c.on_scroll(Point::new(0.0, 9000.0));
    c.layout(VIEWPORT).unwrap();
    assert_eq!(c.pool().factory().created, 56);
    assert_eq!(c.pool().live_len(), 28);

    let first = c.arranged()[0];
    assert_eq!(first.index, 720);
    assert_eq!(c.container(first.container).unwrap().label, "item 720");
}

#[test]
fn controller_applies_items_source_changes() {
    let mut items: ItemsSource<u32> = (0..100).collect();
    let mut c: Controller<Tiles> = Controller::new(no_cache(), Tiles::default());
    c.set_item_count(items.len());
    c.layout(VIEWPORT).unwrap();

    let (_, change) = items.remove(3).unwrap();
    c.items_changed(change);
    assert_eq!(c.panel().item_count(), 99);
    assert_eq!(c.pool().factory().released, 1);

    let change = items.insert(0, 1000).unwrap();
    c.items_changed(change);
    c.layout(VIEWPORT).unwrap();

    assert_eq!(arranged_indices(&c), (0..=27).collect::<Vec<_>>());
    for a in c.arranged() {
        assert_eq!(c.pool().index_of(&a.container), Some(a.index));
    }

    let change = items.reset(0..5);
    c.items_changed(change);
    c.layout(VIEWPORT).unwrap();
    assert_eq!(arranged_indices(&c), [0, 1, 2, 3, 4]);
}

#[test]
fn controller_surfaces_factory_failures() {
    let mut c: Controller<Tiles> = Controller::new(
        no_cache(),
        Tiles {
            fail_at: Some(3),
            ..Tiles::default()
        },
    );
    c.set_item_count(10);
    assert_eq!(
        c.layout(VIEWPORT),
        Err(LayoutError::ContainerUnavailable { index: 3 })
    );
    assert_eq!(c.layout_passes(), 0);
}

#[test]
fn controller_bring_index_into_view() {
    let mut c: Controller<Tiles> = Controller::new(no_cache(), Tiles::default());
    c.set_item_count(1000);
    c.layout(VIEWPORT).unwrap();

    assert_eq!(c.bring_index_into_view(401), Ok(Point::new(0.0, 5000.0)));
    c.layout(VIEWPORT).unwrap();
    assert_eq!(c.arranged()[0].index, 400);
    assert!(c.bring_index_into_view(1000).is_err());
}
