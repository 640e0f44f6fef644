//! Prelude module for side drawers.
//!
//! ```
//! use side_drawer::prelude::*;
//! ```
//!
//! This provides access to:
//! - The overlay and its items (`DrawerOverlay`, `DrawerItem`, `Position`, `DrawerSize`)
//! - Configuration and errors (`OverlayConfig`, `DrawerError`)
//! - View tree and geometry types (`SharedViewTree`, `ViewId`, `Rect`, `Color`)

// ============================================================================
// Drawers
// ============================================================================

pub use crate::widget::drawer::{
    CompletionCallback, CoverMode, DrawerItem, DrawerOverlay, DrawerSize, HorizontalDirection,
    MaskTapCallback, Position, SizeMode, SizeValue, VerticalDirection,
};

// ============================================================================
// Configuration and Errors
// ============================================================================

pub use crate::config::OverlayConfig;
pub use crate::error::{ConfigError, DrawerError};
pub use crate::widget::animation::Easing;

// ============================================================================
// Touch Input
// ============================================================================

pub use crate::widget::gesture::{TouchEvent, TouchPhase, TouchPoint};

// ============================================================================
// Views and Geometry
// ============================================================================

pub use side_drawer_core::{Color, Point, Rect, SharedViewTree, Size, ViewId, ViewTree};
