//! Touch gesture recognition.
//!
//! One touch sequence is `start → move* → end`. The first move decides whether the sequence
//! is a vertical page scroll or a horizontal swipe; that decision sticks until the sequence
//! ends. On release a horizontal sequence is judged a valid swipe when it was quick and long
//! enough, or simply long enough.

use crate::{Direction, Px};

/// A quick swipe must finish within this many milliseconds...
pub const SWIPE_MAX_MS: u64 = 300;
/// ...and travel more than this many pixels.
pub const SWIPE_MIN_PX: Px = 25;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TouchPoint {
    pub x: Px,
    pub y: Px,
}

impl TouchPoint {
    pub fn new(x: Px, y: Px) -> Self {
        Self { x, y }
    }
}

/// How a touch sequence ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Release {
    /// The sequence was a vertical scroll; the carousel must not react.
    Scroll,
    Swipe {
        delta_x: Px,
        direction: Direction,
        valid: bool,
    },
}

#[derive(Clone, Copy, Debug)]
struct Tracking {
    start: TouchPoint,
    start_ms: u64,
    delta: TouchPoint,
    /// `None` until the first move classifies the sequence.
    scrolling: Option<bool>,
}

/// Per-sequence gesture state machine: `Idle → Tracking → Idle`.
#[derive(Clone, Debug, Default)]
pub struct GestureRecognizer {
    tracking: Option<Tracking>,
    last_delta_x: Px,
}

impl GestureRecognizer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_tracking(&self) -> bool {
        self.tracking.is_some()
    }

    /// Horizontal travel of the sequence in flight (or `0`).
    pub fn delta_x(&self) -> Px {
        self.tracking.map_or(0, |t| t.delta.x)
    }

    /// `Some(true)` once the sequence was classified as a vertical scroll.
    pub fn is_scrolling(&self) -> Option<bool> {
        self.tracking.and_then(|t| t.scrolling)
    }

    /// Starts a new sequence, discarding any unfinished one.
    pub fn start(&mut self, point: TouchPoint, now_ms: u64) {
        self.tracking = Some(Tracking {
            start: point,
            start_ms: now_ms,
            delta: TouchPoint::default(),
            scrolling: None,
        });
        self.last_delta_x = 0;
    }

    /// Feeds a move event.
    ///
    /// Returns the horizontal delta to follow with the strip, or `None` when idle or when the
    /// sequence is a scroll.
    pub fn track(&mut self, point: TouchPoint) -> Option<Px> {
        let t = self.tracking.as_mut()?;
        t.delta = TouchPoint {
            x: point.x.saturating_sub(t.start.x),
            y: point.y.saturating_sub(t.start.y),
        };
        let scrolling = *t
            .scrolling
            .get_or_insert(t.delta.x.saturating_abs() < t.delta.y.saturating_abs());
        (!scrolling).then_some(t.delta.x)
    }

    /// Ends the sequence. Returns `None` if no sequence was in flight.
    pub fn end(&mut self, now_ms: u64, frame_width: Px) -> Option<Release> {
        let t = self.tracking.take()?;
        self.last_delta_x = t.delta.x;
        if t.scrolling == Some(true) {
            return Some(Release::Scroll);
        }
        let elapsed = now_ms.saturating_sub(t.start_ms);
        let direction = if t.delta.x < 0 {
            Direction::Forward
        } else {
            Direction::Backward
        };
        Some(Release::Swipe {
            delta_x: t.delta.x,
            direction,
            valid: is_valid_swipe(elapsed, t.delta.x, frame_width),
        })
    }

    /// Whether a click right after the last sequence should be swallowed (the finger moved).
    pub fn suppresses_click(&self) -> bool {
        self.last_delta_x != 0 || self.delta_x() != 0
    }

    pub fn cancel(&mut self) {
        self.tracking = None;
    }
}

/// Quick-and-long-enough, or longer than a third of the frame.
pub fn is_valid_swipe(elapsed_ms: u64, delta_x: Px, frame_width: Px) -> bool {
    let travel = delta_x.saturating_abs();
    (elapsed_ms < SWIPE_MAX_MS && travel > SWIPE_MIN_PX)
        || i64::from(travel) * 3 > i64::from(frame_width)
}
