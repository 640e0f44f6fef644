//! Layout for drawer hosts.
//!
//! Installed [`Constraint`](side_drawer_core::Constraint)s are turned into
//! frames by [`layout_if_needed`]. The drawer overlay calls it after swapping
//! an item's anchors; hosts call it after resizing a window or surface.

mod solver;

pub use solver::{attribute_value, layout_if_needed, resolve_frame};
