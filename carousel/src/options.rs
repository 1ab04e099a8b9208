use alloc::string::String;

use crate::Ease;

/// Class names the view layer uses to locate the frame, strip and controls, and to mark the
/// active slide.
///
/// An empty `active_slide` disables the active-slide marker.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ClassNames {
    pub frame: String,
    pub slide_container: String,
    pub prev_ctrl: String,
    pub next_ctrl: String,
    pub active_slide: String,
}

impl Default for ClassNames {
    fn default() -> Self {
        Self {
            frame: "js_frame".into(),
            slide_container: "js_slides".into(),
            prev_ctrl: "js_prev".into(),
            next_ctrl: "js_next".into(),
            active_slide: "active".into(),
        }
    }
}

/// Configuration for [`crate::Carousel`].
///
/// Options are a snapshot taken at setup. Defaults match the classic swipe-slider behavior:
/// one slide per step, no looping, 300ms steps.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CarouselOptions {
    /// Slides advanced per discrete step when not in infinite-group mode.
    pub slides_to_scroll: usize,
    /// Duration of a normal step (ms).
    pub slide_speed: u32,
    /// Duration of a wrap-around rewind (ms).
    pub rewind_speed: u32,
    /// Duration of the snap back after an aborted swipe (ms).
    pub snap_back_speed: u32,
    pub ease: Ease,
    /// Wrap from the last slide to the first on a forward step past the end.
    pub rewind: bool,
    /// Wrap from the first slide to the last on a backward step at the start.
    pub rewind_prev: bool,
    /// Clone count per side for infinite looping. `0` disables it.
    ///
    /// Use either `infinite` or `rewind`, not both.
    pub infinite: usize,
    /// Logical index shown at setup (and on resize when `rewind_on_resize` is set).
    pub initial_index: usize,
    pub rewind_on_resize: bool,
    /// Dragging positions the strip directly instead of triggering discrete steps.
    pub touch_control: bool,
    /// Center the strip when it is narrower than the frame.
    pub center: bool,
    pub class_names: ClassNames,
}

impl Default for CarouselOptions {
    fn default() -> Self {
        Self {
            slides_to_scroll: 1,
            slide_speed: 300,
            rewind_speed: 600,
            snap_back_speed: 200,
            ease: Ease::Ease,
            rewind: false,
            rewind_prev: false,
            infinite: 0,
            initial_index: 0,
            rewind_on_resize: true,
            touch_control: false,
            center: true,
            class_names: ClassNames::default(),
        }
    }
}

impl CarouselOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// The infinite pad count, if looping is enabled.
    pub fn infinite_pad(&self) -> Option<usize> {
        (self.infinite > 0).then_some(self.infinite)
    }

    pub fn with_slides_to_scroll(mut self, slides_to_scroll: usize) -> Self {
        self.slides_to_scroll = slides_to_scroll;
        self
    }

    pub fn with_slide_speed(mut self, slide_speed: u32) -> Self {
        self.slide_speed = slide_speed;
        self
    }

    pub fn with_rewind_speed(mut self, rewind_speed: u32) -> Self {
        self.rewind_speed = rewind_speed;
        self
    }

    pub fn with_snap_back_speed(mut self, snap_back_speed: u32) -> Self {
        self.snap_back_speed = snap_back_speed;
        self
    }

    pub fn with_ease(mut self, ease: Ease) -> Self {
        self.ease = ease;
        self
    }

    pub fn with_rewind(mut self, rewind: bool) -> Self {
        self.rewind = rewind;
        self
    }

    pub fn with_rewind_prev(mut self, rewind_prev: bool) -> Self {
        self.rewind_prev = rewind_prev;
        self
    }

    pub fn with_infinite(mut self, pad: usize) -> Self {
        self.infinite = pad;
        self
    }

    pub fn with_initial_index(mut self, initial_index: usize) -> Self {
        self.initial_index = initial_index;
        self
    }

    pub fn with_rewind_on_resize(mut self, rewind_on_resize: bool) -> Self {
        self.rewind_on_resize = rewind_on_resize;
        self
    }

    pub fn with_touch_control(mut self, touch_control: bool) -> Self {
        self.touch_control = touch_control;
        self
    }

    pub fn with_center(mut self, center: bool) -> Self {
        self.center = center;
        self
    }

    pub fn with_class_names(mut self, class_names: ClassNames) -> Self {
        self.class_names = class_names;
        self
    }

    /// Disables (`""`) or renames the active-slide marker class.
    pub fn with_active_slide_class(mut self, class: impl Into<String>) -> Self {
        self.class_names.active_slide = class.into();
        self
    }

    pub fn marks_active_slide(&self) -> bool {
        !self.class_names.active_slide.is_empty()
    }
}
