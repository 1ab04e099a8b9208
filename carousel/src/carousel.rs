use crate::infinite;
use crate::navigation::{self, NavContext};
use crate::{
    CarouselOptions, CarouselState, Controls, Direction, Geometry, GestureRecognizer, Measurement,
    NavRequest, Px, Release, SlideOutcome, TouchOutcome, TouchPoint, Translate,
};

/// A headless carousel controller.
///
/// This type is intentionally UI-agnostic:
/// - It does not hold any UI objects.
/// - Your adapter drives it with layout [`Measurement`]s, touch points and transition-end
///   notifications.
/// - Every state change is returned as a [`Translate`] command for the adapter to apply.
///
/// Index and offset are owned here exclusively; nothing else writes them.
#[derive(Clone, Debug)]
pub struct Carousel {
    options: CarouselOptions,
    geometry: Geometry,
    index: usize,
    offset: Px,
    controls: Controls,
    gesture: GestureRecognizer,
    /// At most one action waiting for the current transition to end.
    pending: Option<Translate>,
}

impl Carousel {
    /// Creates a carousel positioned (logically) at `options.initial_index`.
    ///
    /// Nothing can move until the first [`Carousel::reset`] provides geometry.
    pub fn new(options: CarouselOptions) -> Self {
        let index = infinite::to_padded(options.initial_index, options.infinite);
        cdebug!(
            initial_index = options.initial_index,
            infinite = options.infinite,
            touch_control = options.touch_control,
            "Carousel::new"
        );
        Self {
            options,
            geometry: Geometry::default(),
            index,
            offset: 0,
            controls: Controls::default(),
            gesture: GestureRecognizer::new(),
            pending: None,
        }
    }

    pub fn options(&self) -> &CarouselOptions {
        &self.options
    }

    pub fn geometry(&self) -> &Geometry {
        &self.geometry
    }

    /// Current padded index.
    pub fn index(&self) -> usize {
        self.index
    }

    /// Current logical index. Clone slots report the real slide they show.
    pub fn return_index(&self) -> usize {
        self.logical(self.index)
    }

    pub fn offset(&self) -> Px {
        self.offset
    }

    pub fn controls(&self) -> Controls {
        self.controls
    }

    pub fn state(&self) -> CarouselState {
        CarouselState {
            index: self.index,
            offset: self.offset,
            controls: self.controls,
        }
    }

    pub fn gesture(&self) -> &GestureRecognizer {
        &self.gesture
    }

    pub fn has_pending_transition_action(&self) -> bool {
        self.pending.is_some()
    }

    /// Whether a frame resize to `frame_width` invalidates the geometry cache.
    pub fn needs_reset(&self, frame_width: Px) -> bool {
        self.geometry.frame_width() != frame_width
    }

    /// Rebuilds the geometry cache and re-anchors the strip to the current slide.
    ///
    /// With `rewind_on_resize` the index goes back to `initial_index` and the move is animated
    /// with `rewind_speed`; otherwise the current slide is kept and the move is immediate.
    ///
    /// Returns the translate to apply, or `None` if the strip is already where it should be.
    pub fn reset(&mut self, measurement: &Measurement) -> Option<Translate> {
        self.geometry = Geometry::from_measurement(measurement);
        self.pending = None;
        let pad = self.options.infinite;

        if self.geometry.is_empty() {
            cwarn!("Carousel::reset: no slides");
            self.index = 0;
            self.offset = 0;
            self.update_controls(0, 0);
            return None;
        }

        let (duration, ease) = if self.options.rewind_on_resize {
            self.index = infinite::to_padded(self.options.initial_index, pad);
            (self.options.rewind_speed, Some(self.options.ease))
        } else {
            (0, None)
        };
        self.index = self.index.min(self.geometry.count() - 1);

        let max_offset = self.geometry.max_offset();
        let translate = if max_offset < 0 && self.options.center {
            self.offset = 0;
            let centered = max_offset.saturating_neg() / 2;
            ((measurement.strip_left - centered).saturating_abs() > 1)
                .then(|| Translate::immediate(centered))
        } else if pad > 0 {
            self.offset = self
                .geometry
                .clamp_offset(self.geometry.anchor_offset(self.index));
            Some(Translate::immediate(self.offset))
        } else {
            self.offset = self
                .geometry
                .clamp_offset(self.geometry.anchor_offset(self.index));
            Some(Translate::new(self.offset, duration, ease))
        };

        self.update_controls(self.index, self.offset);
        cdebug!(
            frame_width = self.geometry.frame_width(),
            strip_width = self.geometry.strip_width(),
            slides = self.geometry.count(),
            fit = self.geometry.slides_fit_in_frame(),
            index = self.index,
            offset = self.offset,
            "Carousel::reset"
        );
        translate
    }

    /// Steps backward. No-op at the start (unless `rewind_prev`).
    pub fn prev(&mut self) -> Option<SlideOutcome> {
        if self.controls.no_more_prev {
            return None;
        }
        self.navigate(NavRequest::Step(Direction::Backward))
    }

    /// Steps forward. No-op at the end (unless `rewind`).
    pub fn next(&mut self) -> Option<SlideOutcome> {
        if self.controls.no_more_next {
            return None;
        }
        self.navigate(NavRequest::Step(Direction::Forward))
    }

    /// Jumps to a logical slide index. Out-of-range indexes are clamped.
    pub fn slide_to(&mut self, index: usize) -> Option<SlideOutcome> {
        self.navigate(NavRequest::Jump(index))
    }

    /// Plans and commits a navigation request.
    ///
    /// Returns `None` (and changes nothing) in touch-control mode or when the slides fit in the
    /// frame. A committed navigation replaces any pending seam correction.
    pub fn navigate(&mut self, request: NavRequest) -> Option<SlideOutcome> {
        if self.options.touch_control {
            return None;
        }
        let ctx = NavContext {
            geometry: &self.geometry,
            options: &self.options,
            index: self.index,
            offset: self.offset,
        };
        let plan = navigation::plan(request, &ctx)?;

        let from_index = self.index;
        self.index = plan.index;
        self.offset = plan.offset;
        self.pending = plan.seam.map(|seam| seam.translate());
        self.update_controls(plan.target_index, plan.translate.to);

        Some(SlideOutcome {
            from_index,
            next_slide: plan.next_slide,
            current_slide: self.logical(self.index),
            translate: plan.translate,
        })
    }

    /// Call when the view reports the end of a transition.
    ///
    /// Returns the pending action (a seam correction), at most once.
    pub fn on_transition_end(&mut self) -> Option<Translate> {
        let action = self.pending.take();
        if action.is_some() {
            ctrace!(index = self.index, offset = self.offset, "seam correction");
        }
        action
    }

    pub fn touch_start(&mut self, point: TouchPoint, now_ms: u64) {
        self.gesture.start(point, now_ms);
    }

    /// Feeds a touch move. Returns the live translate to apply, if any.
    pub fn touch_move(&mut self, point: TouchPoint) -> Option<Translate> {
        let delta_x = self.gesture.track(point)?;
        let target = self.offset.saturating_add(delta_x);
        if !self.options.touch_control {
            return Some(Translate::immediate(target));
        }

        let (_, snap) = self.clamp_drag(target);
        Some(snap.unwrap_or(Translate::immediate(target)))
    }

    /// Ends the touch sequence and decides what the strip does next.
    pub fn touch_end(&mut self, now_ms: u64) -> TouchOutcome {
        let frame_width = self.geometry.frame_width();
        let Some(release) = self.gesture.end(now_ms, frame_width) else {
            return TouchOutcome::Ignored;
        };

        let (delta_x, direction, valid) = match release {
            Release::Scroll => return TouchOutcome::Scrolled,
            Release::Swipe {
                delta_x,
                direction,
                valid,
            } => (delta_x, direction, valid),
        };

        if self.options.touch_control {
            let (offset, snap) = self.clamp_drag(self.offset.saturating_add(delta_x));
            self.offset = offset;
            self.update_controls(self.index, self.offset);
            return TouchOutcome::Settled(snap);
        }

        let at_bound = if direction.is_forward() {
            self.controls.no_more_next
        } else {
            self.controls.no_more_prev
        };
        if valid && !at_bound {
            if let Some(outcome) = self.navigate(NavRequest::Step(direction)) {
                return TouchOutcome::Slid(outcome);
            }
        }
        TouchOutcome::SnapBack(Translate::new(
            self.rest_position(),
            self.options.snap_back_speed,
            None,
        ))
    }

    /// Whether a click following the last touch sequence should be swallowed.
    pub fn suppresses_click(&self) -> bool {
        self.gesture.suppresses_click()
    }

    /// Drops an unfinished touch sequence.
    pub fn cancel_touch(&mut self) {
        self.gesture.cancel();
    }

    fn logical(&self, padded: usize) -> usize {
        let pad = self.options.infinite;
        let real = self
            .geometry
            .count()
            .saturating_sub(pad.saturating_mul(2));
        infinite::to_logical(padded, pad, real)
    }

    /// Where the strip rests at the committed offset (centered when narrower than the frame).
    fn rest_position(&self) -> Px {
        let max_offset = self.geometry.max_offset();
        if max_offset < 0 && self.options.center {
            max_offset.saturating_neg() / 2
        } else {
            self.offset
        }
    }

    /// Clamps a touch-control drag target. Returns the offset to keep and, when the target was
    /// out of range, the snap to play.
    ///
    /// A strip narrower than the frame has no drag range: it stays at offset 0 and snaps back to
    /// its rest position (centered when `center` is set).
    fn clamp_drag(&self, target: Px) -> (Px, Option<Translate>) {
        let speed = self.options.snap_back_speed;
        let max_offset = self.geometry.max_offset();
        if max_offset < 0 {
            let rest = self.rest_position();
            return (0, (target != rest).then(|| Translate::new(rest, speed, None)));
        }
        if target > 0 {
            (0, Some(Translate::new(0, speed, None)))
        } else if target < -max_offset {
            (-max_offset, Some(Translate::new(-max_offset, speed, None)))
        } else {
            (target, None)
        }
    }

    fn update_controls(&mut self, index: usize, offset: Px) {
        if self.options.infinite > 0 {
            self.controls = Controls::default();
            return;
        }
        let max_offset = self.geometry.max_offset();
        let last = self.geometry.count().saturating_sub(1);
        self.controls = Controls {
            no_more_prev: !self.options.rewind_prev && (offset == 0 || max_offset <= 0),
            no_more_next: !self.options.rewind
                && (index == last || max_offset <= -offset || max_offset <= 0),
        };
    }
}
