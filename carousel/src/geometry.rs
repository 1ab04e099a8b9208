use alloc::vec::Vec;

use crate::{Px, SlideRect};

/// Raw layout readings taken by the view layer.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Measurement {
    /// Frame (viewport) width including margins.
    pub frame_width: Px,
    /// Slide container width including margins, as reported by the layout engine.
    pub strip_width: Px,
    /// The translation the strip is currently rendered at.
    pub strip_left: Px,
    /// Every slide in strip order, clones included.
    pub slides: Vec<SlideRect>,
}

impl Measurement {
    /// Builds a measurement for slides laid out back to back from `widths`.
    pub fn from_widths(frame_width: Px, widths: impl IntoIterator<Item = Px>) -> Self {
        let mut offset: Px = 0;
        let slides: Vec<SlideRect> = widths
            .into_iter()
            .map(|w| {
                let rect = SlideRect::new(offset, w);
                offset = offset.saturating_add(w);
                rect
            })
            .collect();
        Self {
            frame_width,
            strip_width: offset,
            strip_left: 0,
            slides,
        }
    }
}

/// Derived layout cache. Always rebuilt wholesale from a [`Measurement`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Geometry {
    frame_width: Px,
    strip_width: Px,
    slides: Vec<SlideRect>,
    slides_fit_in_frame: bool,
}

impl Geometry {
    pub fn from_measurement(m: &Measurement) -> Self {
        let frame_width = m.frame_width;
        let mut strip_width = m.strip_width;

        // A container that has not laid out its children yet reports the frame's width.
        if frame_width == strip_width {
            strip_width = m
                .slides
                .iter()
                .fold(0, |acc: Px, s| acc.saturating_add(s.width));
        }

        let slides_fit_in_frame = match m.slides.first() {
            Some(first) if first.width > 0 => {
                m.slides.iter().all(|s| s.width == first.width) && frame_width % first.width == 0
            }
            _ => false,
        };

        Self {
            frame_width,
            strip_width,
            slides: m.slides.clone(),
            slides_fit_in_frame,
        }
    }

    pub fn frame_width(&self) -> Px {
        self.frame_width
    }

    pub fn strip_width(&self) -> Px {
        self.strip_width
    }

    pub fn slides(&self) -> &[SlideRect] {
        &self.slides
    }

    pub fn slide(&self, index: usize) -> Option<SlideRect> {
        self.slides.get(index).copied()
    }

    pub fn count(&self) -> usize {
        self.slides.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slides.is_empty()
    }

    /// Every slide has the same width and a whole number of them fills the frame.
    pub fn slides_fit_in_frame(&self) -> bool {
        self.slides_fit_in_frame
    }

    /// Drag range of the strip. Negative when the strip is narrower than the frame.
    pub fn max_offset(&self) -> Px {
        self.strip_width.saturating_sub(self.frame_width)
    }

    /// Clamps a strip offset to `[-max_offset, 0]`.
    pub fn clamp_offset(&self, offset: Px) -> Px {
        offset.max(-self.max_offset()).min(0)
    }

    /// The strip offset that aligns slide `index` with the frame's left edge.
    pub fn anchor_offset(&self, index: usize) -> Px {
        self.slide(index).map_or(0, |s| -s.offset)
    }
}
