//! A headless carousel engine.
//!
//! For the view-adapter lifecycle shell (listeners, notifications, slide cloning), see the
//! `carousel-adapter` crate.
//!
//! This crate holds the parts of a slide carousel that have real invariants: the current
//! index and pixel offset, the algorithm that picks the next offset for a step, jump or swipe,
//! the clone-based infinite loop, and touch gesture classification.
//!
//! It is UI-agnostic. A DOM/GUI/TUI layer is expected to provide:
//! - frame, strip and per-slide widths (a [`Measurement`])
//! - touch points and timestamps
//! - a way to apply the returned [`Translate`] commands
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod carousel;
mod ease;
mod geometry;
mod gesture;
pub mod infinite;
pub mod navigation;
mod options;
mod state;
mod types;

#[cfg(test)]
mod tests;

pub use carousel::Carousel;
pub use ease::{Ease, ParseEaseError};
pub use geometry::{Geometry, Measurement};
pub use gesture::{
    GestureRecognizer, Release, SWIPE_MAX_MS, SWIPE_MIN_PX, TouchPoint, is_valid_swipe,
};
pub use navigation::{NavContext, Plan, Seam};
pub use options::{CarouselOptions, ClassNames};
pub use state::{CarouselState, Controls};
pub use types::{Direction, NavRequest, Px, SlideOutcome, SlideRect, TouchOutcome, Translate};
