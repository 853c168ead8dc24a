// Example: a 10k-item grid driven by a toy container generator.
use std::collections::HashMap;

use wrap_virtualizer::{
    CacheLength, CacheUnit, ContainerGenerator, PanelOptions, Size, VirtualizingPanel,
};

#[derive(Default)]
struct Tiles {
    next: u32,
    bound: HashMap<u32, usize>,
    pool: Vec<u32>,
}

impl ContainerGenerator for Tiles {
    type Container = u32;

    fn generate_or_recycle(&mut self, index: usize) -> Option<u32> {
        let id = self.pool.pop().unwrap_or_else(|| {
            self.next += 1;
            self.next
        });
        self.bound.insert(id, index);
        Some(id)
    }

    fn recycle(&mut self, container: u32) {
        self.bound.remove(&container);
        self.pool.push(container);
    }

    fn remove(&mut self, container: u32) {
        self.bound.remove(&container);
    }

    fn index_of(&self, container: &u32) -> Option<usize> {
        self.bound.get(container).copied()
    }

    fn measure(&mut self, _container: &u32, _available: Size) -> Size {
        Size::new(96.0, 64.0)
    }
}

fn main() -> Result<(), wrap_virtualizer::LayoutError> {
    let mut tiles = Tiles::default();
    let mut panel: VirtualizingPanel<u32> = VirtualizingPanel::new(
        PanelOptions::new().with_cache(CacheLength::uniform(0.5), CacheUnit::Page),
    );
    panel.set_item_count(10_000);

    let window = Size::new(800.0, 600.0);
    let pass = panel.measure(window, &mut tiles)?;
    println!(
        "items_per_line={} lines={} extent={:?}",
        pass.items_per_line, pass.line_count, pass.extent
    );
    println!("realized={:?}", pass.item_range);

    panel.bring_index_into_view(5_000)?;
    let pass = panel.measure(window, &mut tiles)?;
    println!("after bring_index_into_view: realized={:?} stats={:?}", pass.item_range, pass.stats);

    panel.arrange(window, &pass, &tiles, |index, id, rect| {
        if index == 5_000 {
            println!("item {index} -> tile #{id} at {rect:?}");
        }
    });
    Ok(())
}
