use crate::Ease;

/// Pixel quantity on the slide axis.
///
/// Offsets are integral, like the DOM's `offsetLeft`/`offsetWidth`. Strip offsets are `<= 0`:
/// the strip is translated left to reveal later slides.
pub type Px = i32;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Direction {
    Forward,
    Backward,
}

impl Direction {
    pub fn is_forward(self) -> bool {
        matches!(self, Self::Forward)
    }
}

/// A navigation request fed to [`crate::navigation::plan`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum NavRequest {
    /// Discrete step (prev/next control or a valid swipe).
    Step(Direction),
    /// Jump to a logical slide index. Out-of-range targets are clamped.
    Jump(usize),
}

/// A slide's natural position inside the strip.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SlideRect {
    /// Offset from the strip start.
    pub offset: Px,
    /// Rendered width including horizontal margins.
    pub width: Px,
}

impl SlideRect {
    pub fn new(offset: Px, width: Px) -> Self {
        Self { offset, width }
    }

    pub fn end(&self) -> Px {
        self.offset.saturating_add(self.width)
    }
}

/// A horizontal translation the view must apply to the slide strip.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Translate {
    pub to: Px,
    pub duration_ms: u32,
    /// `None` leaves the timing function unset (used for immediate moves).
    pub ease: Option<Ease>,
}

impl Translate {
    pub fn new(to: Px, duration_ms: u32, ease: Option<Ease>) -> Self {
        Self {
            to,
            duration_ms,
            ease,
        }
    }

    /// An immediate, unanimated move.
    pub fn immediate(to: Px) -> Self {
        Self::new(to, 0, None)
    }

    pub fn is_immediate(&self) -> bool {
        self.duration_ms == 0
    }
}

/// Everything an adapter needs to report and render one committed navigation.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SlideOutcome {
    /// Padded index before the navigation.
    pub from_index: usize,
    /// The slide the request aimed at, as reported in the "before slide" notification.
    pub next_slide: isize,
    /// Logical index after the navigation (and after any seam re-pointing).
    pub current_slide: usize,
    pub translate: Translate,
}

/// Result of releasing a touch sequence.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TouchOutcome {
    /// No sequence was in flight.
    Ignored,
    /// The sequence was a vertical scroll.
    Scrolled,
    /// A valid swipe stepped the carousel.
    Slid(SlideOutcome),
    /// The swipe was aborted; return to the pre-drag offset.
    SnapBack(Translate),
    /// Touch-control mode kept the dragged offset. Carries a snap translate when the drag
    /// ended past a bound.
    Settled(Option<Translate>),
}
