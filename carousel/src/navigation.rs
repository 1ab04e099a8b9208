//! The navigation algorithm.
//!
//! [`plan`] is a pure function: it reads the current index/offset, the geometry cache and the
//! options, and returns where the carousel should go. [`crate::Carousel`] commits the plan.

use crate::infinite;
use crate::{CarouselOptions, Direction, Geometry, NavRequest, Px, Translate};

/// Extra distance kept between a revealed slide and the frame edge so prev/next controls
/// drawn over the frame do not hide it.
pub const CONTROL_MARGIN: Px = 60;

/// Inputs of [`plan`].
#[derive(Clone, Copy, Debug)]
pub struct NavContext<'a> {
    pub geometry: &'a Geometry,
    pub options: &'a CarouselOptions,
    /// Current padded index.
    pub index: usize,
    /// Current committed strip offset.
    pub offset: Px,
}

/// A zero-duration correction that swaps a clone for the real slide it mirrors.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Seam {
    pub index: usize,
    pub offset: Px,
}

impl Seam {
    pub fn translate(&self) -> Translate {
        Translate::immediate(self.offset)
    }
}

/// The outcome of [`plan`].
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Plan {
    pub request: NavRequest,
    /// Slide reported in the "before slide" notification.
    pub next_slide: isize,
    /// Clamped target index, before the commit guard and seam re-pointing.
    pub target_index: usize,
    /// Index to commit.
    pub index: usize,
    /// Offset to record (the seam offset when a seam correction is scheduled).
    pub offset: Px,
    /// Animated move to apply now.
    pub translate: Translate,
    pub seam: Option<Seam>,
}

/// Computes the next index/offset/duration for `request`.
///
/// Returns `None` when nothing can move: no slides, or every slide already fits in the frame.
pub fn plan(request: NavRequest, ctx: &NavContext<'_>) -> Option<Plan> {
    let geo = ctx.geometry;
    let opts = ctx.options;
    let max_offset = geo.max_offset();
    if max_offset <= 0 || geo.is_empty() {
        ctrace!(max_offset, "navigation: nothing to move");
        return None;
    }

    let len = geo.count();
    let last = len - 1;
    let index = ctx.index;
    let pad = opts.infinite;
    let direction = match request {
        NavRequest::Step(d) => Some(d),
        NavRequest::Jump(_) => None,
    };

    let mut duration = opts.slide_speed;
    let mut target = match request {
        NavRequest::Step(Direction::Forward) => {
            let raw = if pad > 0 {
                infinite::forward_target(index, len, pad, opts.slides_to_scroll)
            } else {
                (index as isize).saturating_add(infinite::step_len(opts.slides_to_scroll))
            };
            raw.clamp(0, last as isize) as usize
        }
        NavRequest::Step(Direction::Backward) => {
            let raw = if pad > 0 {
                infinite::backward_target(index, pad, opts.slides_to_scroll)
            } else {
                (index as isize).saturating_sub(infinite::step_len(opts.slides_to_scroll))
            };
            raw.clamp(0, last as isize) as usize
        }
        NavRequest::Jump(logical) if pad > 0 => {
            let real_last = len.saturating_sub(pad * 2).saturating_sub(1);
            infinite::to_padded(logical.min(real_last), pad).min(last)
        }
        NavRequest::Jump(logical) => logical.min(last),
    };

    let next_slide = match request {
        NavRequest::Step(Direction::Forward) => index as isize + 1,
        NavRequest::Step(Direction::Backward) => index as isize - 1,
        NavRequest::Jump(_) => target as isize,
    };

    let rewinds_prev =
        opts.rewind_prev && ctx.offset == 0 && direction == Some(Direction::Backward);
    if rewinds_prev {
        target = last;
        duration = opts.rewind_speed;
    }

    let unclamped = match direction {
        Some(d) if !rewinds_prev => {
            let distance = if geo.slides_fit_in_frame() || pad > 0 || opts.rewind {
                geo.frame_width()
            } else {
                custom_distance(geo, ctx.offset, d)
            };
            if d.is_forward() {
                ctx.offset.saturating_sub(distance)
            } else {
                ctx.offset.saturating_add(distance)
            }
        }
        _ => geo.anchor_offset(target),
    };
    let mut next_offset = geo.clamp_offset(unclamped);

    if opts.rewind && ctx.offset == -max_offset && direction == Some(Direction::Forward) {
        next_offset = 0;
        target = 0;
        duration = opts.rewind_speed;
    }

    let translate = Translate::new(next_offset, duration, Some(opts.ease));

    let mut committed = match geo.slide(target) {
        Some(s) if s.offset <= max_offset => target,
        _ => index,
    };
    let mut offset = next_offset;

    let seam = if pad > 0 {
        infinite::seam_target(target, len, pad, direction).map(|real| {
            committed = real;
            offset = geo.anchor_offset(real);
            Seam {
                index: real,
                offset,
            }
        })
    } else {
        None
    };

    ctrace!(
        ?request,
        from = index,
        target,
        committed,
        offset,
        duration,
        seam = seam.is_some(),
        "navigation: plan"
    );

    Some(Plan {
        request,
        next_slide,
        target_index: target,
        index: committed,
        offset,
        translate,
        seam,
    })
}

/// Content-aware step distance.
///
/// Finds the nearest partially hidden slide in `direction` (measured at the committed offset,
/// so an in-flight transition does not skew it) and returns the travel needed to reveal it,
/// leaving [`CONTROL_MARGIN`] to the frame edge. Slides almost as wide as the frame are
/// centered instead. Returns `0` when nothing is hidden in that direction.
pub fn custom_distance(geo: &Geometry, offset: Px, direction: Direction) -> Px {
    let frame = geo.frame_width();
    let slides = geo.slides();

    let hidden = match direction {
        Direction::Backward => slides
            .iter()
            .rev()
            .find(|s| s.offset.saturating_add(offset) < 0)
            .map(|s| (frame - s.end().saturating_add(offset), s.width)),
        Direction::Forward => slides
            .iter()
            .find(|s| s.end().saturating_add(offset) > frame)
            .map(|s| (s.offset.saturating_add(offset), s.width)),
    };

    let Some((distance, hidden_width)) = hidden else {
        return 0;
    };
    if distance == 0 {
        return 0;
    }

    let slack = frame - hidden_width;
    if slack <= CONTROL_MARGIN {
        // distance - slack / 2, rounded half up
        (distance * 2 - slack + 1).div_euclid(2)
    } else {
        distance - CONTROL_MARGIN
    }
}
