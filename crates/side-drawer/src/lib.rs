//! Side drawer overlays.
//!
//! Panels slide in from any edge over a dimming mask. Each panel rests at a
//! hidden anchor just outside the overlay and a shown anchor inside it, and
//! moves between them by swapping layout constraints. Tapping the mask
//! outside every panel runs a host callback, usually wired to
//! [`DrawerOverlay::hide_all`].
//!
//! # Example
//!
//! ```
//! use std::time::Duration;
//! use side_drawer::prelude::*;
//!
//! fn main() -> Result<(), DrawerError> {
//!     let views = SharedViewTree::new();
//!     let window = views.create_view_with_frame("window", Rect::new(0.0, 0.0, 400.0, 800.0));
//!     let menu = views.create_view("menu");
//!
//!     let mut overlay = DrawerOverlay::new(views.clone(), window)?;
//!     let item = DrawerItem::builder(menu)
//!         .position(Position::RIGHT)
//!         .size(DrawerSize::new(SizeValue::scale(0.9), SizeValue::scale(1.0)))
//!         .build()?;
//!     let index = overlay.add_item(item)?;
//!     overlay.set_mask_tap_callback(Some(Box::new(|overlay: &mut DrawerOverlay| {
//!         overlay.hide_all(Duration::from_millis(300), true, None);
//!     })));
//!
//!     overlay.toggle_item(index, None);
//!     overlay.finish_animations();
//!     assert_eq!(views.frame(menu)?, Rect::new(40.0, 0.0, 360.0, 800.0));
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod error;
pub mod prelude;
pub mod widget;

pub use config::OverlayConfig;
pub use error::{ConfigError, DrawerError, PositionRole, Result};
pub use widget::drawer::{
    CoverMode, DrawerItem, DrawerItemBuilder, DrawerOverlay, DrawerSize, HorizontalDirection,
    Position, SizeMode, SizeValue, VerticalDirection,
};
