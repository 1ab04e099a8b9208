use carousel::infinite::ClonePosition;
use carousel::{ClassNames, Measurement, Px, SlideRect, TouchPoint, Translate};

use crate::SliderEvent;

/// Which of the elements named in [`ClassNames`] the view could find.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Located {
    pub frame: bool,
    pub slide_container: bool,
    pub prev_ctrl: bool,
    pub next_ctrl: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Control {
    Prev,
    Next,
}

/// A native listener the slider installs on the host.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Listener {
    PrevClick,
    NextClick,
    TouchStart,
    /// Installed only while a touch sequence is in flight.
    TouchMove,
    /// Installed only while a touch sequence is in flight.
    TouchEnd,
    /// Clicks on the frame, so clicks ending a drag can be swallowed.
    FrameClick,
    Resize,
    TransitionEnd,
}

/// Input the host forwards from a registered listener.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum InputEvent {
    PrevClick,
    NextClick,
    TouchStart { point: TouchPoint, now_ms: u64 },
    TouchMove { point: TouchPoint },
    TouchEnd { now_ms: u64 },
    FrameClick,
    Resize,
    TransitionEnd,
}

impl InputEvent {
    /// The listener that delivers this input.
    pub fn listener(&self) -> Listener {
        match self {
            Self::PrevClick => Listener::PrevClick,
            Self::NextClick => Listener::NextClick,
            Self::TouchStart { .. } => Listener::TouchStart,
            Self::TouchMove { .. } => Listener::TouchMove,
            Self::TouchEnd { .. } => Listener::TouchEnd,
            Self::FrameClick => Listener::FrameClick,
            Self::Resize => Listener::Resize,
            Self::TransitionEnd => Listener::TransitionEnd,
        }
    }
}

/// What the host should do with the native event after [`crate::Slider::handle`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Handled {
    /// No matching listener is installed; the input was dropped.
    Ignored,
    /// The input was processed; the native event may proceed.
    Consumed,
    /// The input was processed and the native event's default action must be prevented.
    PreventDefault,
}

impl Handled {
    pub fn is_handled(self) -> bool {
        self != Self::Ignored
    }
}

/// The host capabilities a [`crate::Slider`] needs.
///
/// Implementations own the real UI objects (DOM nodes, widgets, terminal cells). Widths include
/// horizontal margins. Slide indexes always refer to the live slide list, clones included.
pub trait SliderView {
    /// Resolves the frame, slide container and controls by class name.
    fn locate(&mut self, class_names: &ClassNames) -> Located;

    fn frame_width(&self) -> Px;

    fn strip_width(&self) -> Px;

    /// The translation the strip is currently rendered at (mid-transition values included).
    fn strip_left(&self) -> Px;

    fn slide_count(&self) -> usize;

    fn slide_rect(&self, index: usize) -> SlideRect;

    /// Deep-clones slide `source` and inserts the copy at `at`.
    fn clone_slide(&mut self, source: usize, at: ClonePosition);

    /// Removes the first or last slide.
    fn remove_slide(&mut self, at: ClonePosition);

    fn translate(&mut self, translate: &Translate);

    /// Moves the active marker `class_name` to slide `index`.
    fn set_active_slide(&mut self, index: usize, class_name: &str);

    /// Toggles the disabled marker on a control.
    fn set_control_disabled(&mut self, control: Control, disabled: bool);

    fn add_listener(&mut self, listener: Listener);

    fn remove_listener(&mut self, listener: Listener);

    fn dispatch(&mut self, event: &SliderEvent);

    /// Reads every width the geometry cache needs.
    fn measure(&self) -> Measurement {
        Measurement {
            frame_width: self.frame_width(),
            strip_width: self.strip_width(),
            strip_left: self.strip_left(),
            slides: (0..self.slide_count()).map(|i| self.slide_rect(i)).collect(),
        }
    }
}
