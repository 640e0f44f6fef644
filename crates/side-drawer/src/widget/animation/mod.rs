//! Animation for drawer transitions.
//!
//! - [`Easing`] curves map linear progress to eased progress
//! - [`Transition`] tracks timing for one change
//! - [`Animator`] applies opacity and frame tracks to a view tree

mod animator;
mod easing;
mod transition;

pub use animator::{AlphaTrack, AnimationId, AnimationRequest, Animator, FrameTrack};
pub use easing::{Easing, lerp_eased};
pub use transition::{Transition, TransitionState};
