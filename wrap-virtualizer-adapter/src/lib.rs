//! Adapter utilities for the `wrap-virtualizer` crate.
//!
//! The `wrap-virtualizer` crate is UI-agnostic and only decides which items need containers and
//! where they go. This crate provides small, framework-neutral helpers commonly needed by
//! adapters:
//!
//! - A container pool with generation-checked handles (`ContainerPool`)
//! - An items source that reports its mutations (`ItemsSource`)
//! - A controller that coalesces scroll and item updates into single layout passes
//!
//! This crate is intentionally framework-agnostic (no ratatui/egui bindings).
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod controller;
mod items;
mod pool;

#[cfg(test)]
mod tests;

pub use controller::{ArrangedItem, Controller};
pub use items::ItemsSource;
pub use pool::{ContainerFactory, ContainerId, ContainerPool, remap};
