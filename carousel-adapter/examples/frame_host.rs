// Example: a host without CSS transitions, driving the slider from a frame loop.
//
// The host:
// - implements `SliderView` over its own slide list
// - plays translate commands with `FrameAnimator`
// - feeds `InputEvent::TransitionEnd` back when an animation finishes
use carousel::infinite::ClonePosition;
use carousel::{CarouselOptions, ClassNames, Px, SlideRect, Translate};
use carousel_adapter::{
    Control, FrameAnimator, InputEvent, Listener, Located, Slider, SliderEvent, SliderView,
};

const SLIDE_WIDTH: Px = 10;

struct TextHost {
    slides: Vec<char>,
    animator: FrameAnimator,
    now_ms: u64,
    listeners: Vec<Listener>,
}

impl SliderView for TextHost {
    fn locate(&mut self, _class_names: &ClassNames) -> Located {
        Located {
            frame: true,
            slide_container: true,
            prev_ctrl: true,
            next_ctrl: true,
        }
    }

    fn frame_width(&self) -> Px {
        SLIDE_WIDTH * 2
    }

    fn strip_width(&self) -> Px {
        SLIDE_WIDTH * self.slides.len() as Px
    }

    fn strip_left(&self) -> Px {
        self.animator.offset()
    }

    fn slide_count(&self) -> usize {
        self.slides.len()
    }

    fn slide_rect(&self, index: usize) -> SlideRect {
        SlideRect::new(SLIDE_WIDTH * index as Px, SLIDE_WIDTH)
    }

    fn clone_slide(&mut self, source: usize, at: ClonePosition) {
        let c = self.slides[source].to_ascii_uppercase();
        match at {
            ClonePosition::End => self.slides.push(c),
            ClonePosition::Start => self.slides.insert(0, c),
        }
    }

    fn remove_slide(&mut self, at: ClonePosition) {
        match at {
            ClonePosition::End => {
                self.slides.pop();
            }
            ClonePosition::Start => {
                self.slides.remove(0);
            }
        }
    }

    fn translate(&mut self, translate: &Translate) {
        self.animator.apply(translate, self.now_ms);
    }

    fn set_active_slide(&mut self, _index: usize, _class_name: &str) {}

    fn set_control_disabled(&mut self, control: Control, disabled: bool) {
        if disabled {
            println!("  {control:?} disabled");
        }
    }

    fn add_listener(&mut self, listener: Listener) {
        self.listeners.push(listener);
    }

    fn remove_listener(&mut self, listener: Listener) {
        self.listeners.retain(|l| *l != listener);
    }

    fn dispatch(&mut self, event: &SliderEvent) {
        println!("  event {}", event.name());
    }
}

impl TextHost {
    fn render(&self) -> String {
        let first = (-self.animator.offset()).max(0) as usize;
        let start = first / SLIDE_WIDTH as usize;
        self.slides.iter().skip(start).take(2).collect()
    }
}

fn run_frames(slider: &mut Slider<TextHost>) {
    loop {
        let host = slider.view_mut();
        host.now_ms += 16;
        let now = host.now_ms;
        let Some(frame) = host.animator.tick(now) else {
            break;
        };
        if frame.finished {
            println!("  t={now} offset={} view={}", frame.offset, host.render());
            slider.handle(InputEvent::TransitionEnd);
        }
    }
}

fn main() {
    let host = TextHost {
        slides: vec!['a', 'b', 'c', 'd'],
        animator: FrameAnimator::new(0),
        now_ms: 0,
        listeners: Vec::new(),
    };
    let options = CarouselOptions::default().with_infinite(2).with_slides_to_scroll(2);
    let mut slider = match Slider::new(host, options) {
        Ok(slider) => slider,
        Err(err) => {
            eprintln!("setup failed: {err}");
            return;
        }
    };
    println!("strip={:?}", slider.view().slides);

    for _ in 0..3 {
        slider.handle(InputEvent::NextClick);
        run_frames(&mut slider);
        println!("index={} view={}", slider.return_index(), slider.view().render());
    }

    slider.destroy();
    println!("after destroy strip={:?}", slider.view().slides);
}
