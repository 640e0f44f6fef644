//! Property animation over the view tree.
//!
//! An [`Animator`] owns running animations. Each animation interpolates the
//! opacity of one view and the frames of any number of views, driven by a
//! [`Transition`]. The host's frame loop calls [`Animator::advance`]; the ids
//! of animations that finished during that step are returned so their owner
//! can run completion logic.
//!
//! Starting an animation retires the tracks of older animations on the same
//! views, so the one started later wins even after it finishes. The older
//! animations keep running and still report when they finish.

use std::time::Duration;

use side_drawer_core::logging::targets;
use side_drawer_core::{Rect, ViewId, ViewResult, ViewTree};

use super::easing::Easing;
use super::transition::{Transition, TransitionState};

/// Identifier of a started animation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct AnimationId(u64);

impl AnimationId {
    /// Raw numeric value.
    #[inline]
    pub fn as_raw(self) -> u64 {
        self.0
    }
}

/// Opacity interpolation for one view.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AlphaTrack {
    /// Animated view.
    pub view: ViewId,
    /// Opacity at the start.
    pub from: f32,
    /// Opacity at the end.
    pub to: f32,
}

/// Frame interpolation for one view.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameTrack {
    /// Animated view.
    pub view: ViewId,
    /// Frame at the start.
    pub from: Rect,
    /// Frame at the end.
    pub to: Rect,
}

/// What to animate and how.
///
/// The alpha track's start value is read from the tree when the animation
/// starts.
#[derive(Debug, Clone, Default)]
pub struct AnimationRequest {
    /// Total duration.
    pub duration: Duration,
    /// Easing curve.
    pub easing: Easing,
    /// Target opacity for a view.
    pub alpha: Option<(ViewId, f32)>,
    /// Frame tracks.
    pub frames: Vec<FrameTrack>,
}

impl AnimationRequest {
    /// Create an empty request.
    pub fn new(duration: Duration, easing: Easing) -> Self {
        Self {
            duration,
            easing,
            alpha: None,
            frames: Vec::new(),
        }
    }

    /// Animate `view`'s opacity to `to`.
    pub fn alpha(mut self, view: ViewId, to: f32) -> Self {
        self.alpha = Some((view, to));
        self
    }

    /// Animate `view`'s frame between two rectangles.
    pub fn frame(mut self, view: ViewId, from: Rect, to: Rect) -> Self {
        self.frames.push(FrameTrack { view, from, to });
        self
    }
}

#[derive(Debug)]
struct Animation {
    id: AnimationId,
    transition: Transition,
    alpha: Option<AlphaTrack>,
    frames: Vec<FrameTrack>,
}

impl Animation {
    fn apply(&self, tree: &mut ViewTree, state: TransitionState) {
        let Some(progress) = state.progress() else {
            return;
        };
        let finished = state == TransitionState::Finished;

        if let Some(track) = self.alpha {
            let alpha = if finished {
                track.to
            } else {
                track.from + (track.to - track.from) * progress
            };
            if let Err(error) = tree.set_alpha(track.view, alpha) {
                tracing::warn!(
                    target: targets::ANIMATION,
                    id = ?self.id,
                    view = ?track.view,
                    %error,
                    "alpha track lost its view"
                );
            }
        }

        for track in &self.frames {
            let frame = if finished {
                track.to
            } else {
                track.from.lerp(track.to, progress)
            };
            if let Err(error) = tree.set_frame(track.view, frame) {
                tracing::warn!(
                    target: targets::ANIMATION,
                    id = ?self.id,
                    view = ?track.view,
                    %error,
                    "frame track lost its view"
                );
            }
        }
    }
}

/// Runs animations against a [`ViewTree`].
#[derive(Debug, Default)]
pub struct Animator {
    running: Vec<Animation>,
    next_id: u64,
}

impl Animator {
    /// Create an animator with nothing running.
    pub fn new() -> Self {
        Self::default()
    }

    /// Start an animation.
    ///
    /// Nothing changes in the tree until the next [`advance`](Self::advance).
    /// Fails if the alpha track's view does not exist.
    pub fn start(&mut self, tree: &ViewTree, request: AnimationRequest) -> ViewResult<AnimationId> {
        let alpha = match request.alpha {
            Some((view, to)) => Some(AlphaTrack {
                view,
                from: tree.alpha(view)?,
                to,
            }),
            None => None,
        };

        if let Some(track) = alpha {
            self.cancel_alpha(track.view);
        }
        for track in &request.frames {
            self.cancel_frame(track.view);
        }

        let id = AnimationId(self.next_id);
        self.next_id += 1;

        let mut transition = Transition::new(request.duration, request.easing);
        transition.start();

        tracing::debug!(
            target: targets::ANIMATION,
            ?id,
            duration = ?request.duration,
            easing = ?request.easing,
            frames = request.frames.len(),
            "animation started"
        );

        self.running.push(Animation {
            id,
            transition,
            alpha,
            frames: request.frames,
        });
        Ok(id)
    }

    /// Advance every running animation by `dt` and apply the results.
    ///
    /// Returns the animations that finished during this step, in start order.
    pub fn advance(&mut self, tree: &mut ViewTree, dt: Duration) -> Vec<AnimationId> {
        let mut finished = Vec::new();
        for animation in &mut self.running {
            let state = animation.transition.advance(dt);
            animation.apply(tree, state);
            if state == TransitionState::Finished {
                finished.push(animation.id);
            }
        }

        if !finished.is_empty() {
            self.running.retain(|a| !finished.contains(&a.id));
            tracing::debug!(target: targets::ANIMATION, ?finished, "animations finished");
        }
        finished
    }

    /// Stop animating `view`'s opacity. The animations themselves keep
    /// running. Returns how many tracks were dropped.
    pub fn cancel_alpha(&mut self, view: ViewId) -> usize {
        let mut cancelled = 0;
        for animation in &mut self.running {
            if animation.alpha.is_some_and(|track| track.view == view) {
                animation.alpha = None;
                cancelled += 1;
            }
        }
        if cancelled > 0 {
            tracing::trace!(target: targets::ANIMATION, ?view, cancelled, "alpha tracks retired");
        }
        cancelled
    }

    /// Stop animating `view`'s frame. The animations themselves keep running.
    pub fn cancel_frame(&mut self, view: ViewId) -> usize {
        let mut cancelled = 0;
        for animation in &mut self.running {
            let before = animation.frames.len();
            animation.frames.retain(|track| track.view != view);
            cancelled += before - animation.frames.len();
        }
        if cancelled > 0 {
            tracing::trace!(target: targets::ANIMATION, ?view, cancelled, "frame tracks retired");
        }
        cancelled
    }

    /// Jump every running animation to its end.
    pub fn finish_all(&mut self, tree: &mut ViewTree) -> Vec<AnimationId> {
        self.advance(tree, Duration::MAX)
    }

    /// Check if anything is running.
    pub fn is_animating(&self) -> bool {
        !self.running.is_empty()
    }

    /// Number of running animations.
    pub fn running_count(&self) -> usize {
        self.running.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tree_with_view() -> (ViewTree, ViewId) {
        let mut tree = ViewTree::new();
        let view = tree.create_view_with_frame("view", Rect::new(0.0, 0.0, 100.0, 100.0));
        tree.set_alpha(view, 0.0).unwrap();
        (tree, view)
    }

    #[test]
    fn test_alpha_and_frame_interpolation() {
        let (mut tree, view) = tree_with_view();
        let mut animator = Animator::new();

        let request = AnimationRequest::new(Duration::from_millis(100), Easing::Linear)
            .alpha(view, 1.0)
            .frame(view, Rect::new(-100.0, 0.0, 100.0, 100.0), Rect::new(0.0, 0.0, 100.0, 100.0));
        let id = animator.start(&tree, request).unwrap();

        // Start does not touch the tree.
        assert_eq!(tree.alpha(view).unwrap(), 0.0);

        assert!(animator.advance(&mut tree, Duration::from_millis(50)).is_empty());
        assert_eq!(tree.alpha(view).unwrap(), 0.5);
        assert_eq!(tree.frame(view).unwrap().origin.x, -50.0);

        assert_eq!(animator.advance(&mut tree, Duration::from_millis(50)), vec![id]);
        assert_eq!(tree.alpha(view).unwrap(), 1.0);
        assert_eq!(tree.frame(view).unwrap(), Rect::new(0.0, 0.0, 100.0, 100.0));
        assert!(!animator.is_animating());
    }

    #[test]
    fn test_zero_duration_finishes_on_next_advance() {
        let (mut tree, view) = tree_with_view();
        let mut animator = Animator::new();

        let id = animator
            .start(&tree, AnimationRequest::new(Duration::ZERO, Easing::Linear).alpha(view, 1.0))
            .unwrap();
        assert!(animator.is_animating());
        assert_eq!(animator.advance(&mut tree, Duration::ZERO), vec![id]);
        assert_eq!(tree.alpha(view).unwrap(), 1.0);
    }

    #[test]
    fn test_later_animation_wins() {
        let (mut tree, view) = tree_with_view();
        let mut animator = Animator::new();

        let request = |ms, to| {
            AnimationRequest::new(Duration::from_millis(ms), Easing::Linear).alpha(view, to)
        };
        let first = animator.start(&tree, request(300, 1.0)).unwrap();
        let second = animator.start(&tree, request(100, 0.0)).unwrap();
        assert_eq!(animator.running_count(), 2);

        assert_eq!(animator.advance(&mut tree, Duration::from_millis(100)), vec![second]);
        assert_eq!(tree.alpha(view).unwrap(), 0.0);

        // The older, longer animation no longer owns the alpha.
        assert_eq!(animator.advance(&mut tree, Duration::from_millis(200)), vec![first]);
        assert_eq!(tree.alpha(view).unwrap(), 0.0);
        assert!(!animator.is_animating());
    }

    #[test]
    fn test_later_frame_track_replaces_older() {
        let (mut tree, view) = tree_with_view();
        let mut animator = Animator::new();
        let hidden = Rect::new(-100.0, 0.0, 100.0, 100.0);
        let shown = Rect::new(0.0, 0.0, 100.0, 100.0);

        animator
            .start(
                &tree,
                AnimationRequest::new(Duration::from_millis(200), Easing::Linear)
                    .frame(view, shown, hidden),
            )
            .unwrap();
        animator.advance(&mut tree, Duration::from_millis(100));
        let midway = tree.frame(view).unwrap();
        animator
            .start(
                &tree,
                AnimationRequest::new(Duration::from_millis(50), Easing::Linear)
                    .frame(view, midway, shown),
            )
            .unwrap();

        animator.advance(&mut tree, Duration::from_millis(50));
        animator.advance(&mut tree, Duration::from_millis(50));
        assert!(!animator.is_animating());
        assert_eq!(tree.frame(view).unwrap(), shown);
    }

    #[test]
    fn test_cancel_alpha_keeps_animation_running() {
        let (mut tree, view) = tree_with_view();
        let mut animator = Animator::new();
        let id = animator
            .start(
                &tree,
                AnimationRequest::new(Duration::from_millis(100), Easing::Linear).alpha(view, 1.0),
            )
            .unwrap();

        assert_eq!(animator.cancel_alpha(view), 1);
        assert_eq!(animator.cancel_alpha(view), 0);
        tree.set_alpha(view, 0.25).unwrap();

        assert_eq!(animator.finish_all(&mut tree), vec![id]);
        assert_eq!(tree.alpha(view).unwrap(), 0.25);
    }

    #[test]
    fn test_destroyed_view_does_not_stop_animation() {
        let (mut tree, view) = tree_with_view();
        let other = tree.create_view("other");
        let mut animator = Animator::new();

        let request = AnimationRequest::new(Duration::from_millis(10), Easing::Linear)
            .alpha(view, 1.0)
            .frame(other, Rect::ZERO, Rect::new(0.0, 0.0, 10.0, 10.0));
        let id = animator.start(&tree, request).unwrap();
        tree.destroy(other).unwrap();

        assert_eq!(animator.finish_all(&mut tree), vec![id]);
        assert_eq!(tree.alpha(view).unwrap(), 1.0);
    }

    #[test]
    fn test_start_with_invalid_alpha_view() {
        let (mut tree, view) = tree_with_view();
        tree.destroy(view).unwrap();
        let mut animator = Animator::new();

        let result = animator.start(
            &tree,
            AnimationRequest::new(Duration::ZERO, Easing::Linear).alpha(view, 1.0),
        );
        assert!(result.is_err());
        assert!(!animator.is_animating());
    }
}
