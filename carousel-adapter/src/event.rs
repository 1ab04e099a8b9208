use core::fmt;

use crate::InputEvent;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Phase {
    Before,
    After,
    On,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum EventKind {
    Init,
    Slide,
    TouchStart,
    TouchMove,
    TouchEnd,
    Resize,
    Destroy,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum EventDetail {
    None,
    /// Padded index before the slide and the slide the request aimed at.
    BeforeSlide { index: usize, next_slide: isize },
    /// Padded index after the slide.
    AfterSlide { current_slide: usize },
    /// The input that triggered a touch or resize notification.
    Input(InputEvent),
}

/// A lifecycle notification, dispatched through [`crate::SliderView::dispatch`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SliderEvent {
    pub phase: Phase,
    pub kind: EventKind,
    pub detail: EventDetail,
}

impl SliderEvent {
    pub fn new(phase: Phase, kind: EventKind, detail: EventDetail) -> Self {
        Self {
            phase,
            kind,
            detail,
        }
    }

    /// Event name for custom-event style dispatch, e.g. `before.carousel.slide`.
    pub fn name(&self) -> String {
        format!("{}.carousel.{}", self.phase, self.kind)
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Before => "before",
            Self::After => "after",
            Self::On => "on",
        })
    }
}

impl fmt::Display for EventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Init => "init",
            Self::Slide => "slide",
            Self::TouchStart => "touchstart",
            Self::TouchMove => "touchmove",
            Self::TouchEnd => "touchend",
            Self::Resize => "resize",
            Self::Destroy => "destroy",
        })
    }
}
