//! Touch delivery and tap recognition for the drawer mask.
//!
//! The host feeds raw [`TouchEvent`]s to the overlay. A [`TapRecognizer`]
//! turns them into [`TapGesture`]s, and a [`TouchFilter`] decides whether the
//! mask should claim the touched view at all.
//!
//! # Usage
//!
//! ```
//! use std::time::{Duration, Instant};
//! use side_drawer::widget::gesture::{TapRecognizer, TouchEvent, TouchPhase, TouchPoint};
//! use side_drawer_core::Point;
//!
//! let mut recognizer = TapRecognizer::new();
//! let t0 = Instant::now();
//!
//! let down = TouchPoint::new(1, TouchPhase::Started, Point::new(40.0, 40.0), t0);
//! let down = TouchEvent::single(down);
//! assert!(recognizer.process_touch(&down).is_empty());
//!
//! let up = TouchEvent::single(TouchPoint::new(
//!     1,
//!     TouchPhase::Ended,
//!     Point::new(42.0, 41.0),
//!     t0 + Duration::from_millis(80),
//! ));
//! assert_eq!(recognizer.process_touch(&up).len(), 1);
//! ```

use std::collections::HashMap;
use std::time::{Duration, Instant};

use side_drawer_core::logging::targets;
use side_drawer_core::{Point, ViewId, ViewTree};

/// Default tap timeout in milliseconds.
///
/// A tap must complete within this duration to be recognized.
pub const DEFAULT_TAP_TIMEOUT_MS: u64 = 300;

/// Default double-tap timeout in milliseconds.
pub const DEFAULT_DOUBLE_TAP_TIMEOUT_MS: u64 = 300;

/// Default maximum movement for a tap in pixels.
///
/// Movement beyond this threshold cancels tap recognition.
pub const DEFAULT_TAP_SLOP: f32 = 10.0;

/// Phase of a single touch point.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TouchPhase {
    /// The finger went down.
    Started,
    /// The finger moved.
    Moved,
    /// The finger lifted.
    Ended,
    /// The system took the touch away.
    Cancelled,
}

/// One touch point, in window coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TouchPoint {
    /// Identifier stable across the phases of one touch.
    pub id: u64,
    /// Current phase.
    pub phase: TouchPhase,
    /// Position in window (tree root) coordinates.
    pub position: Point,
    /// When the host observed this point.
    pub timestamp: Instant,
}

impl TouchPoint {
    /// Create a touch point.
    pub fn new(id: u64, phase: TouchPhase, position: Point, timestamp: Instant) -> Self {
        Self {
            id,
            phase,
            position,
            timestamp,
        }
    }
}

/// A batch of touch points delivered together.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TouchEvent {
    /// Points that changed in this event.
    pub points: Vec<TouchPoint>,
}

impl TouchEvent {
    /// Create an event from several points.
    pub fn with_points(points: Vec<TouchPoint>) -> Self {
        Self { points }
    }

    /// Create an event carrying one point.
    pub fn single(point: TouchPoint) -> Self {
        Self {
            points: vec![point],
        }
    }
}

/// A recognized tap.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TapGesture {
    /// Where the finger lifted, in window coordinates.
    pub position: Point,
    /// Number of consecutive taps (2 for a double tap).
    pub tap_count: u32,
}

/// Configuration for the tap recognizer.
#[derive(Debug, Clone)]
pub struct TapConfig {
    /// Maximum duration for a tap.
    pub tap_timeout: Duration,
    /// Maximum duration between taps for a multi-tap.
    pub double_tap_timeout: Duration,
    /// Maximum movement allowed for a tap.
    pub tap_slop: f32,
}

impl Default for TapConfig {
    fn default() -> Self {
        Self {
            tap_timeout: Duration::from_millis(DEFAULT_TAP_TIMEOUT_MS),
            double_tap_timeout: Duration::from_millis(DEFAULT_DOUBLE_TAP_TIMEOUT_MS),
            tap_slop: DEFAULT_TAP_SLOP,
        }
    }
}

#[derive(Debug, Clone)]
struct TouchState {
    start_time: Instant,
    start_pos: Point,
    moved_beyond_slop: bool,
}

#[derive(Debug, Clone)]
struct TapState {
    position: Point,
    time: Instant,
    tap_count: u32,
}

/// Recognizes taps from raw touch events.
#[derive(Debug, Default)]
pub struct TapRecognizer {
    config: TapConfig,
    touches: HashMap<u64, TouchState>,
    last_tap: Option<TapState>,
}

impl TapRecognizer {
    /// Creates a recognizer with default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a recognizer with the given configuration.
    pub fn with_config(config: TapConfig) -> Self {
        Self {
            config,
            touches: HashMap::new(),
            last_tap: None,
        }
    }

    /// Get the configuration.
    pub fn config(&self) -> &TapConfig {
        &self.config
    }

    /// Processes a touch event and returns any recognized taps.
    pub fn process_touch(&mut self, event: &TouchEvent) -> Vec<TapGesture> {
        let mut taps = Vec::new();
        for point in &event.points {
            match point.phase {
                TouchPhase::Started => self.handle_touch_start(point),
                TouchPhase::Moved => self.handle_touch_move(point),
                TouchPhase::Ended => {
                    if let Some(tap) = self.handle_touch_end(point) {
                        taps.push(tap);
                    }
                }
                TouchPhase::Cancelled => {
                    self.touches.remove(&point.id);
                }
            }
        }
        taps
    }

    /// Forget every tracked touch and the last tap.
    pub fn reset(&mut self) {
        self.touches.clear();
        self.last_tap = None;
    }

    fn handle_touch_start(&mut self, point: &TouchPoint) {
        self.touches.insert(
            point.id,
            TouchState {
                start_time: point.timestamp,
                start_pos: point.position,
                moved_beyond_slop: false,
            },
        );
    }

    fn handle_touch_move(&mut self, point: &TouchPoint) {
        let slop = self.config.tap_slop;
        if let Some(touch) = self.touches.get_mut(&point.id)
            && touch.start_pos.distance_to(point.position) > slop
        {
            touch.moved_beyond_slop = true;
        }
    }

    fn handle_touch_end(&mut self, point: &TouchPoint) -> Option<TapGesture> {
        let touch = self.touches.remove(&point.id)?;

        let moved = touch.moved_beyond_slop
            || touch.start_pos.distance_to(point.position) > self.config.tap_slop;
        let duration = point.timestamp.saturating_duration_since(touch.start_time);
        if moved || duration >= self.config.tap_timeout {
            tracing::trace!(
                target: targets::GESTURE,
                id = point.id,
                moved,
                ?duration,
                "touch ended without a tap"
            );
            return None;
        }

        let tap_count = match &self.last_tap {
            Some(last)
                if point.timestamp.saturating_duration_since(last.time)
                    < self.config.double_tap_timeout
                    && last.position.distance_to(point.position) < self.config.tap_slop =>
            {
                last.tap_count + 1
            }
            _ => 1,
        };

        self.last_tap = Some(TapState {
            position: point.position,
            time: point.timestamp,
            tap_count,
        });

        Some(TapGesture {
            position: point.position,
            tap_count,
        })
    }
}

/// Decides whether a recognizer should receive a touch on `target`.
pub trait TouchFilter {
    /// Return `true` to claim the touch.
    fn should_receive(&self, tree: &ViewTree, target: ViewId) -> bool;
}

/// Claims touches everywhere except inside drawer content.
///
/// A touch on any view within one of the content subtrees belongs to the
/// drawer itself and must not dismiss it.
#[derive(Debug, Clone, Copy)]
pub struct MaskTapFilter<'a> {
    contents: &'a [ViewId],
}

impl<'a> MaskTapFilter<'a> {
    /// Create a filter excluding the given content views and their descendants.
    pub fn new(contents: &'a [ViewId]) -> Self {
        Self { contents }
    }
}

impl TouchFilter for MaskTapFilter<'_> {
    fn should_receive(&self, tree: &ViewTree, target: ViewId) -> bool {
        !self
            .contents
            .iter()
            .any(|&content| tree.is_descendant_of(target, content))
    }
}
