//! Core primitives for side drawer overlays.
//!
//! This crate provides the pieces the drawer component is built on:
//!
//! - **Geometry**: points, sizes, rectangles and colors
//! - **Constraints**: declarative linear layout rules between views
//! - **View Tree**: parent-child view hierarchy with frames, opacity,
//!   interaction flags, installed constraints and hit testing
//! - **Logging**: tracing targets and view tree dumps
//!
//! # Example
//!
//! ```
//! use side_drawer_core::{Attribute, Constraint, Rect, SharedViewTree};
//!
//! let views = SharedViewTree::new();
//! let window = views.create_view_with_frame("window", Rect::new(0.0, 0.0, 320.0, 480.0));
//! let panel = views.create_view("panel");
//! views.add_child(window, panel).unwrap();
//!
//! views.with_write(|tree| {
//!     tree.install_constraints(
//!         window,
//!         [Constraint::equal(panel, Attribute::Leading, window, Attribute::Leading)],
//!     )
//! })
//! .unwrap();
//! ```

pub mod constraint;
pub mod geometry;
pub mod logging;
pub mod view;

pub use constraint::{Attribute, Constraint, Relation};
pub use geometry::{Color, Point, Rect, Size};
pub use logging::{TreeFormatOptions, TreeStyle, ViewTreeDebug};
pub use view::{SharedViewTree, ViewError, ViewId, ViewResult, ViewTree};
