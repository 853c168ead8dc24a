//! A headless virtualizing wrap panel.
//!
//! Given a logical item count, a viewport and a cache policy, this crate decides at every layout
//! pass which items must exist as realized containers, where each one is placed, and when
//! containers can be recycled. Items are uniformly sized and packed into lines that wrap along the
//! cross axis.
//!
//! It is UI-agnostic. A TUI/GUI layer is expected to provide:
//! - a [`ContainerGenerator`] that creates, measures and recycles containers
//! - the available size of every measure pass
//! - scroll input, forwarded to the panel's scroll-owner methods
//!
//! For a ready-made container pool and a pass-coalescing controller, see the
//! `wrap-virtualizer-adapter` crate.
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod arrange;
mod error;
mod float;
mod generator;
mod group;
mod items;
mod options;
pub mod packing;
mod panel;
mod policy;
pub mod range;
mod realize;
mod stack;
mod state;
mod types;
mod wrap;


pub use arrange::{Arrangement, Spacing, child_arrange_size};
pub use error::LayoutError;
pub use generator::ContainerGenerator;
pub use group::GroupConstraints;
pub use items::ItemsChanged;
pub use options::{PanelOptions, ScrollInfoCallback};
pub use packing::{Packing, PackingInput};
pub use panel::VirtualizingPanel;
pub use policy::{LayoutPass, LayoutPolicy, ScrollMetrics};
pub use range::RangeInput;
pub use realize::{RealizeStats, RealizedChild, Realizer};
pub use stack::StackLayout;
pub use state::ScrollGeometry;
pub use types::{
    CacheLength, CacheUnit, ItemRange, Orientation, Point, Rect, ScrollUnit, Size, SpacingMode,
    VirtualizationMode,
};
pub use wrap::WrapLayout;
