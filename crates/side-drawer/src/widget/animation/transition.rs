//! Transition timing.
//!
//! A [`Transition`] tracks how far a timed change has progressed. It does not
//! know what is being animated; the [`Animator`](super::Animator) applies the
//! eased progress to view properties.
//!
//! Time is fed in explicitly through [`Transition::advance`] so transitions
//! follow the host's frame clock.

use std::time::Duration;

use super::easing::Easing;

/// Current state of a transition after an update.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum TransitionState {
    /// Not started, stopped, or already reported as finished.
    #[default]
    Idle,
    /// Transition is running.
    Running {
        /// Eased progress from 0.0 to 1.0.
        progress: f32,
    },
    /// The transition reached its end during this update. Reported once.
    Finished,
}

impl TransitionState {
    /// Check if a transition is currently in progress.
    pub fn is_running(&self) -> bool {
        matches!(self, TransitionState::Running { .. })
    }

    /// Eased progress to apply for this state, if any.
    ///
    /// A finished transition applies full progress.
    pub fn progress(&self) -> Option<f32> {
        match self {
            TransitionState::Running { progress } => Some(*progress),
            TransitionState::Finished => Some(1.0),
            TransitionState::Idle => None,
        }
    }
}

/// Timing controller for a single transition.
#[derive(Debug, Clone)]
pub struct Transition {
    /// Easing curve applied to raw progress.
    easing: Easing,
    /// Total duration.
    duration: Duration,
    /// Time accumulated since start.
    elapsed: Duration,
    /// Whether the transition is running.
    running: bool,
}

impl Transition {
    /// Create a stopped transition.
    pub fn new(duration: Duration, easing: Easing) -> Self {
        Self {
            easing,
            duration,
            elapsed: Duration::ZERO,
            running: false,
        }
    }

    /// Get the easing curve.
    #[inline]
    pub fn easing(&self) -> Easing {
        self.easing
    }

    /// Get the transition duration.
    #[inline]
    pub fn duration(&self) -> Duration {
        self.duration
    }

    /// Time accumulated since the transition started.
    #[inline]
    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }

    /// Check if the transition is running.
    #[inline]
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Start (or restart) from the beginning.
    pub fn start(&mut self) {
        self.elapsed = Duration::ZERO;
        self.running = true;
    }

    /// Stop without reporting completion.
    pub fn stop(&mut self) {
        self.running = false;
    }

    /// Linear progress from 0.0 to 1.0.
    pub fn raw_progress(&self) -> f32 {
        if self.duration.is_zero() {
            return if self.running && self.elapsed.is_zero() { 0.0 } else { 1.0 };
        }
        (self.elapsed.as_secs_f64() / self.duration.as_secs_f64()).min(1.0) as f32
    }

    /// Advance by `dt` and get the resulting state.
    ///
    /// A zero-length transition finishes on its first update, even with a
    /// zero `dt`.
    pub fn advance(&mut self, dt: Duration) -> TransitionState {
        if !self.running {
            return TransitionState::Idle;
        }

        self.elapsed = self.elapsed.saturating_add(dt);
        if self.duration.is_zero() || self.elapsed >= self.duration {
            self.elapsed = self.duration;
            self.running = false;
            return TransitionState::Finished;
        }

        TransitionState::Running {
            progress: self.easing.apply(self.raw_progress()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transition_starts_stopped() {
        let mut t = Transition::new(Duration::from_millis(300), Easing::Linear);
        assert!(!t.is_running());
        assert_eq!(t.advance(Duration::from_millis(16)), TransitionState::Idle);
    }

    #[test]
    fn test_transition_progress() {
        let mut t = Transition::new(Duration::from_millis(200), Easing::Linear);
        t.start();

        let state = t.advance(Duration::from_millis(50));
        assert_eq!(state, TransitionState::Running { progress: 0.25 });
        assert!(state.is_running());

        assert_eq!(t.advance(Duration::from_millis(150)), TransitionState::Finished);
        assert!(!t.is_running());
        assert_eq!(t.raw_progress(), 1.0);

        // Finished is reported once.
        assert_eq!(t.advance(Duration::from_millis(16)), TransitionState::Idle);
    }

    #[test]
    fn test_zero_duration_finishes_on_first_update() {
        let mut t = Transition::new(Duration::ZERO, Easing::EaseInOut);
        t.start();
        assert_eq!(t.raw_progress(), 0.0);
        assert_eq!(t.advance(Duration::ZERO), TransitionState::Finished);
    }

    #[test]
    fn test_huge_step_saturates() {
        let mut t = Transition::new(Duration::from_secs(1), Easing::Linear);
        t.start();
        t.advance(Duration::from_millis(500));
        assert_eq!(t.advance(Duration::MAX), TransitionState::Finished);
        assert_eq!(t.elapsed(), Duration::from_secs(1));
    }

    #[test]
    fn test_stop_suppresses_finish() {
        let mut t = Transition::new(Duration::from_millis(100), Easing::Linear);
        t.start();
        t.stop();
        assert_eq!(t.advance(Duration::from_millis(200)), TransitionState::Idle);
    }

    #[test]
    fn test_state_progress() {
        assert_eq!(TransitionState::Idle.progress(), None);
        assert_eq!(TransitionState::Finished.progress(), Some(1.0));
        assert_eq!(
            TransitionState::Running { progress: 0.4 }.progress(),
            Some(0.4)
        );
    }
}
