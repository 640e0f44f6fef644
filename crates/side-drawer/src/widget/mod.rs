//! Drawer widgets and the machinery they run on.
//!
//! - [`drawer`]: items, anchor constraints and the overlay
//! - [`layout`]: constraint solving into frames
//! - [`animation`]: easing, timing and property animation
//! - [`gesture`]: touch delivery and tap recognition

pub mod animation;
pub mod drawer;
pub mod gesture;
pub mod layout;
