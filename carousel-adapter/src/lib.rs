//! Adapter utilities for the `carousel` crate.
//!
//! The `carousel` crate is UI-agnostic and focuses on the navigation math and state. This crate
//! provides the lifecycle shell a host needs around it:
//!
//! - A small view seam ([`SliderView`]) for measuring, translating, cloning slides and
//!   (un)registering listeners
//! - [`Slider`], which wires setup/reset/destroy, control clicks, touch sequences, frame clicks,
//!   resizes and transition ends into a [`carousel::Carousel`]
//! - Lifecycle notifications ([`SliderEvent`])
//! - Frame-driven animation for hosts without CSS transitions ([`FrameAnimator`])
//!
//! This crate is intentionally framework-agnostic (no web-sys/egui bindings).
#![forbid(unsafe_code)]

#[macro_use]
mod macros;

mod error;
mod event;
mod slider;
mod tween;
mod view;


pub use error::SetupError;
pub use event::{EventDetail, EventKind, Phase, SliderEvent};
pub use slider::Slider;
pub use tween::{AnimationFrame, FrameAnimator, Tween};
pub use view::{Control, Handled, InputEvent, Listener, Located, SliderView};
