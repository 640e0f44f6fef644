//! Slide-in drawers over a dimming mask.
//!
//! - [`DrawerItem`] describes one panel: its content view, where it rests
//!   while hidden and shown, and its size
//! - [`compute_constraints`] turns an item and a state into anchor constraints
//! - [`DrawerOverlay`] owns the mask and the items and runs transitions

mod anchors;
mod item;
mod overlay;

pub use anchors::{DrawerConstraints, compute_constraints};
pub use item::{
    DrawerItem, DrawerItemBuilder, DrawerSize, HorizontalDirection, Position, SizeMode, SizeValue,
    VerticalDirection,
};
pub use overlay::{CompletionCallback, CoverMode, DrawerOverlay, MaskTapCallback};
