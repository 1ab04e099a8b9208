use carousel::infinite::{self, ClonePosition};
use carousel::{Carousel, CarouselOptions, SlideOutcome, TouchOutcome, Translate};

use crate::{
    Control, EventDetail, EventKind, Handled, InputEvent, Listener, Located, Phase, SetupError,
    SliderEvent, SliderView,
};

/// A framework-neutral slider that wraps a [`Carousel`] and a host [`SliderView`].
///
/// This type owns the lifecycle: [`Slider::setup`] clones infinite padding, installs listeners
/// and anchors the strip; [`Slider::destroy`] reverses all of it. Between the two, the host
/// forwards input from installed listeners through [`Slider::handle`].
#[derive(Debug)]
pub struct Slider<V> {
    view: V,
    options: CarouselOptions,
    carousel: Option<Carousel>,
    located: Located,
    listeners: Vec<Listener>,
}

impl<V: SliderView> Slider<V> {
    /// Creates a slider and runs [`Slider::setup`].
    pub fn new(view: V, options: CarouselOptions) -> Result<Self, SetupError> {
        let mut slider = Self::unmounted(view, options);
        slider.setup()?;
        Ok(slider)
    }

    /// Creates a slider without touching the view.
    pub fn unmounted(view: V, options: CarouselOptions) -> Self {
        Self {
            view,
            options,
            carousel: None,
            located: Located::default(),
            listeners: Vec::new(),
        }
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    pub fn view_mut(&mut self) -> &mut V {
        &mut self.view
    }

    pub fn into_view(self) -> V {
        self.view
    }

    pub fn options(&self) -> &CarouselOptions {
        &self.options
    }

    /// The controller, while set up.
    pub fn carousel(&self) -> Option<&Carousel> {
        self.carousel.as_ref()
    }

    pub fn is_set_up(&self) -> bool {
        self.carousel.is_some()
    }

    /// Listeners currently installed on the host, in installation order.
    pub fn listeners(&self) -> &[Listener] {
        &self.listeners
    }

    pub fn setup(&mut self) -> Result<(), SetupError> {
        if self.carousel.is_some() {
            return Err(SetupError::AlreadySetUp);
        }
        self.emit(Phase::Before, EventKind::Init, EventDetail::None);

        let class_names = &self.options.class_names;
        let located = self.view.locate(class_names);
        if !located.frame {
            return Err(SetupError::MissingFrame(class_names.frame.clone()));
        }
        if !located.slide_container {
            return Err(SetupError::MissingSlideContainer(
                class_names.slide_container.clone(),
            ));
        }
        let count = self.view.slide_count();
        if count == 0 {
            return Err(SetupError::NoSlides);
        }
        let pad = self.options.infinite;
        if pad > count {
            return Err(SetupError::InfiniteTooLarge { pad, count });
        }

        for op in infinite::clone_ops(count, pad) {
            self.view.clone_slide(op.source, op.at);
        }
        self.located = located;
        self.carousel = Some(Carousel::new(self.options.clone()));
        self.listen(Listener::TransitionEnd);

        self.reset();

        if located.prev_ctrl && located.next_ctrl {
            self.listen(Listener::PrevClick);
            self.listen(Listener::NextClick);
        }
        self.listen(Listener::TouchStart);
        self.listen(Listener::FrameClick);
        self.listen(Listener::Resize);

        adebug!(count, pad, listeners = self.listeners.len(), "Slider::setup");
        self.emit(Phase::After, EventKind::Init, EventDetail::None);
        Ok(())
    }

    /// Re-measures the view and re-anchors the strip. No-op while not set up.
    pub fn reset(&mut self) {
        if self.carousel.is_none() {
            return;
        }
        let measurement = self.view.measure();
        let Some(carousel) = self.carousel.as_mut() else {
            return;
        };
        if let Some(translate) = carousel.reset(&measurement) {
            self.view.translate(&translate);
        }
        self.sync_markers();
    }

    /// Jumps to a logical slide index.
    pub fn slide_to(&mut self, index: usize) {
        let outcome = self.carousel.as_mut().and_then(|c| c.slide_to(index));
        self.apply_slide(outcome);
    }

    pub fn prev(&mut self) {
        let outcome = self.carousel.as_mut().and_then(Carousel::prev);
        self.apply_slide(outcome);
    }

    pub fn next(&mut self) {
        let outcome = self.carousel.as_mut().and_then(Carousel::next);
        self.apply_slide(outcome);
    }

    /// Current logical index (`0` while not set up).
    pub fn return_index(&self) -> usize {
        self.carousel.as_ref().map_or(0, Carousel::return_index)
    }

    /// Whether a click on the frame right after a drag should be swallowed.
    pub fn suppresses_click(&self) -> bool {
        self.carousel
            .as_ref()
            .is_some_and(Carousel::suppresses_click)
    }

    /// Unregisters every listener and removes the infinite clones. No-op while not set up.
    pub fn destroy(&mut self) {
        if self.carousel.is_none() {
            return;
        }
        self.emit(Phase::Before, EventKind::Destroy, EventDetail::None);

        for listener in std::mem::take(&mut self.listeners) {
            self.view.remove_listener(listener);
        }
        for _ in 0..self.options.infinite {
            self.view.remove_slide(ClonePosition::Start);
            self.view.remove_slide(ClonePosition::End);
        }
        self.carousel = None;
        self.located = Located::default();

        adebug!("Slider::destroy");
        self.emit(Phase::After, EventKind::Destroy, EventDetail::None);
    }

    /// Routes input from an installed listener.
    ///
    /// Returns [`Handled::Ignored`] (and does nothing) when the matching listener is not
    /// installed, e.g. a touch move outside a touch sequence or any input after `destroy`.
    /// A frame click right after a drag returns [`Handled::PreventDefault`].
    pub fn handle(&mut self, input: InputEvent) -> Handled {
        if !self.listeners.contains(&input.listener()) {
            awarn!(?input, "input without an installed listener");
            return Handled::Ignored;
        }
        match input {
            InputEvent::PrevClick => self.prev(),
            InputEvent::NextClick => self.next(),
            InputEvent::TouchStart { point, now_ms } => {
                self.listen(Listener::TouchMove);
                self.listen(Listener::TouchEnd);
                if let Some(c) = self.carousel.as_mut() {
                    c.touch_start(point, now_ms);
                }
                self.emit(Phase::On, EventKind::TouchStart, EventDetail::Input(input));
            }
            InputEvent::TouchMove { point } => {
                if let Some(translate) = self.carousel.as_mut().and_then(|c| c.touch_move(point))
                {
                    self.view.translate(&translate);
                }
                self.emit(Phase::On, EventKind::TouchMove, EventDetail::Input(input));
            }
            InputEvent::TouchEnd { now_ms } => {
                let outcome = self
                    .carousel
                    .as_mut()
                    .map_or(TouchOutcome::Ignored, |c| c.touch_end(now_ms));
                match outcome {
                    TouchOutcome::Slid(slide) => self.apply_slide(Some(slide)),
                    TouchOutcome::SnapBack(translate) | TouchOutcome::Settled(Some(translate)) => {
                        self.view.translate(&translate);
                        self.sync_markers();
                    }
                    TouchOutcome::Settled(None) => self.sync_markers(),
                    TouchOutcome::Scrolled | TouchOutcome::Ignored => {}
                }
                self.unlisten(Listener::TouchMove);
                self.unlisten(Listener::TouchEnd);
                self.emit(Phase::On, EventKind::TouchEnd, EventDetail::Input(input));
            }
            InputEvent::FrameClick => {
                if self.suppresses_click() {
                    adebug!("click after drag suppressed");
                    return Handled::PreventDefault;
                }
            }
            InputEvent::Resize => {
                let frame_width = self.view.frame_width();
                if self
                    .carousel
                    .as_ref()
                    .is_some_and(|c| c.needs_reset(frame_width))
                {
                    adebug!(frame_width, "frame resized");
                    self.reset();
                    self.emit(Phase::On, EventKind::Resize, EventDetail::Input(input));
                }
            }
            InputEvent::TransitionEnd => {
                if let Some(translate) = self.carousel.as_mut().and_then(Carousel::on_transition_end)
                {
                    self.view.translate(&translate);
                }
            }
        }
        Handled::Consumed
    }

    fn apply_slide(&mut self, outcome: Option<SlideOutcome>) {
        let Some(outcome) = outcome else {
            return;
        };
        self.emit(
            Phase::Before,
            EventKind::Slide,
            EventDetail::BeforeSlide {
                index: outcome.from_index,
                next_slide: outcome.next_slide,
            },
        );
        self.view.translate(&outcome.translate);
        self.sync_markers();
        self.emit(
            Phase::After,
            EventKind::Slide,
            EventDetail::AfterSlide {
                current_slide: outcome.current_slide,
            },
        );
    }

    /// Pushes the active-slide marker and control disabled state to the view.
    fn sync_markers(&mut self) {
        let Some(carousel) = self.carousel.as_ref() else {
            return;
        };
        if self.options.marks_active_slide() {
            self.view
                .set_active_slide(carousel.index(), &self.options.class_names.active_slide);
        }
        let controls = carousel.controls();
        if self.located.prev_ctrl {
            self.view
                .set_control_disabled(Control::Prev, controls.no_more_prev);
        }
        if self.located.next_ctrl {
            self.view
                .set_control_disabled(Control::Next, controls.no_more_next);
        }
    }

    fn listen(&mut self, listener: Listener) {
        if self.listeners.contains(&listener) {
            return;
        }
        self.listeners.push(listener);
        self.view.add_listener(listener);
    }

    fn unlisten(&mut self, listener: Listener) {
        if let Some(pos) = self.listeners.iter().position(|l| *l == listener) {
            self.listeners.remove(pos);
            self.view.remove_listener(listener);
        }
    }

    fn emit(&mut self, phase: Phase, kind: EventKind, detail: EventDetail) {
        self.view.dispatch(&SliderEvent::new(phase, kind, detail));
    }
}
