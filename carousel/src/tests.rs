use crate::*;

use alloc::string::{String, ToString};
use alloc::vec;
use alloc::vec::Vec;

#[derive(Clone, Copy, Debug)]
struct Lcg(u64);

impl Lcg {
    fn new(seed: u64) -> Self {
        Self(seed)
    }

    fn next_u64(&mut self) -> u64 {
        // Deterministic, dependency-free PRNG for tests.
        self.0 = self
            .0
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        self.0
    }

    fn gen_range_i32(&mut self, start: i32, end_exclusive: i32) -> i32 {
        debug_assert!(start < end_exclusive);
        let span = (end_exclusive - start) as u64;
        start + (self.next_u64() % span) as i32
    }

    fn gen_range_usize(&mut self, start: usize, end_exclusive: usize) -> usize {
        debug_assert!(start < end_exclusive);
        start + (self.next_u64() % (end_exclusive - start) as u64) as usize
    }
}

fn set_up(options: CarouselOptions, frame: Px, widths: &[Px]) -> Carousel {
    let mut c = Carousel::new(options);
    c.reset(&Measurement::from_widths(frame, widths.iter().copied()));
    c
}

/// Real slides plus `pad` clones on each side, all `width` wide.
fn padded_widths(real: usize, pad: usize, width: Px) -> Vec<Px> {
    vec![width; infinite::padded_len(real, pad)]
}

#[test]
fn slide_to_aligns_slide_with_frame_and_reports_index() {
    let mut c = set_up(CarouselOptions::default(), 100, &[100; 5]);
    for i in [3usize, 0, 4, 1, 2] {
        let outcome = c.slide_to(i).unwrap();
        assert_eq!(outcome.translate.to, -(i as Px) * 100);
        assert_eq!(outcome.translate.duration_ms, 300);
        assert_eq!(c.offset(), -(i as Px) * 100);
        assert_eq!(c.return_index(), i);
    }
}

#[test]
fn slide_to_clamps_out_of_range_index() {
    let mut c = set_up(CarouselOptions::default(), 100, &[100; 5]);
    let outcome = c.slide_to(99).unwrap();
    assert_eq!(outcome.current_slide, 4);
    assert_eq!(c.offset(), -400);
    assert!(c.controls().no_more_next);
}

#[test]
fn slide_to_matches_reference_on_random_layouts() {
    let mut rng = Lcg::new(0x5eed);
    for _ in 0..200 {
        let count = rng.gen_range_usize(2, 12);
        let widths: Vec<Px> = (0..count).map(|_| rng.gen_range_i32(40, 160)).collect();
        let frame = rng.gen_range_i32(40, 400);
        let mut c = set_up(CarouselOptions::default(), frame, &widths);

        let strip: Px = widths.iter().sum();
        let max_offset = strip - frame;
        let target = rng.gen_range_usize(0, count);
        let natural: Px = widths[..target].iter().sum();
        let before = c.index();

        let outcome = c.slide_to(target);
        if max_offset <= 0 {
            assert!(outcome.is_none());
            assert_eq!(c.offset(), 0);
            continue;
        }
        assert!(outcome.is_some());
        assert_eq!(c.offset(), (-natural).clamp(-max_offset, 0));
        if natural <= max_offset {
            assert_eq!(c.return_index(), target);
        } else {
            assert_eq!(c.index(), before);
        }
        assert!(c.offset() <= 0 && c.offset() >= -max_offset);
    }
}

#[test]
fn next_advances_until_the_end_then_stops() {
    let mut c = set_up(CarouselOptions::default(), 100, &[100; 5]);
    assert!(c.controls().no_more_prev);
    assert!(!c.controls().no_more_next);

    let mut last = c.index();
    while !c.controls().no_more_next {
        c.next().unwrap();
        assert!(c.index() > last);
        last = c.index();
    }
    assert_eq!(c.index(), 4);
    assert_eq!(c.offset(), -400);

    assert!(c.next().is_none());
    assert_eq!(c.offset(), -400);
    assert_eq!(c.index(), 4);
}

#[test]
fn prev_at_start_is_a_no_op() {
    let mut c = set_up(CarouselOptions::default(), 100, &[100; 5]);
    assert!(c.prev().is_none());
    assert_eq!(c.state().offset, 0);
}

#[test]
fn rewind_wraps_from_last_slide_to_first() {
    let mut c = set_up(CarouselOptions::default().with_rewind(true), 100, &[100; 5]);
    for _ in 0..4 {
        c.next().unwrap();
    }
    assert_eq!(c.offset(), -400);
    assert!(!c.controls().no_more_next);

    let outcome = c.next().unwrap();
    assert_eq!(c.index(), 0);
    assert_eq!(c.offset(), 0);
    assert_eq!(outcome.translate, Translate::new(0, 600, Some(Ease::Ease)));
}

#[test]
fn rewind_prev_wraps_from_first_slide_to_last() {
    let mut c = set_up(CarouselOptions::default().with_rewind_prev(true), 100, &[100; 5]);
    assert!(!c.controls().no_more_prev);

    let outcome = c.prev().unwrap();
    assert_eq!(outcome.translate.duration_ms, 600);
    assert_eq!(c.offset(), -400);
    assert_eq!(c.index(), 4);
}

#[test]
fn uneven_slides_use_content_aware_distance() {
    // 120px slides do not tile a 300px frame.
    let mut c = set_up(CarouselOptions::default(), 300, &[120; 5]);
    assert!(!c.geometry().slides_fit_in_frame());
    assert_eq!(c.geometry().max_offset(), 300);

    // Slide 2 (240..360) is cut off: reveal it, keeping the control margin.
    c.next().unwrap();
    assert_eq!(c.offset(), -180);
    assert_eq!(c.index(), 1);

    c.next().unwrap();
    assert_eq!(c.offset(), -300);
    assert_eq!(c.index(), 2);
    assert!(c.controls().no_more_next);

    c.prev().unwrap();
    assert_eq!(c.offset(), -120);
    assert_eq!(c.index(), 1);
}

#[test]
fn content_aware_distance_centers_slides_nearly_as_wide_as_the_frame() {
    let geo = Geometry::from_measurement(&Measurement::from_widths(300, [280, 280, 280]));
    assert_eq!(
        navigation::custom_distance(&geo, 0, Direction::Forward),
        270
    );
    assert_eq!(
        navigation::custom_distance(&geo, 0, Direction::Backward),
        0
    );
}

#[test]
fn slides_narrower_than_frame_do_not_move_and_get_centered() {
    let mut c = Carousel::new(CarouselOptions::default());
    let translate = c.reset(&Measurement::from_widths(500, [100; 3]));
    assert_eq!(translate, Some(Translate::immediate(100)));
    assert_eq!(c.offset(), 0);
    assert!(c.controls().no_more_prev);
    assert!(c.controls().no_more_next);

    assert!(c.next().is_none());
    assert!(c.slide_to(2).is_none());

    // Already centered: nothing to do.
    let mut m = Measurement::from_widths(500, [100; 3]);
    m.strip_left = 100;
    assert_eq!(c.reset(&m), None);
}

#[test]
fn infinite_setup_starts_on_first_real_slide() {
    let c = set_up(
        CarouselOptions::default().with_infinite(1),
        100,
        &padded_widths(5, 1, 100),
    );
    assert_eq!(c.index(), 1);
    assert_eq!(c.return_index(), 0);
    assert_eq!(c.offset(), -100);
    assert_eq!(c.controls(), Controls::default());
}

#[test]
fn infinite_forward_past_the_end_schedules_one_seam_correction() {
    let mut c = set_up(
        CarouselOptions::default().with_infinite(1),
        100,
        &padded_widths(5, 1, 100),
    );
    c.slide_to(4).unwrap();
    assert_eq!(c.index(), 5);
    assert!(!c.has_pending_transition_action());

    let outcome = c.next().unwrap();
    // The animation runs onto the clone of slide 0...
    assert_eq!(outcome.translate.to, -600);
    // ...while the state already points at the real slide 0.
    assert_eq!(c.return_index(), 0);
    assert_eq!(c.offset(), -100);

    assert_eq!(c.on_transition_end(), Some(Translate::immediate(-100)));
    assert_eq!(c.on_transition_end(), None);
}

#[test]
fn infinite_backward_past_the_start_wraps_to_last_slide() {
    let mut c = set_up(
        CarouselOptions::default().with_infinite(1),
        100,
        &padded_widths(5, 1, 100),
    );
    let outcome = c.prev().unwrap();
    assert_eq!(outcome.translate.to, 0);
    assert_eq!(c.return_index(), 4);
    assert_eq!(c.offset(), -500);
    assert_eq!(c.on_transition_end(), Some(Translate::immediate(-500)));
}

#[test]
fn infinite_group_mode_steps_by_group() {
    let mut c = set_up(
        CarouselOptions::default()
            .with_infinite(3)
            .with_slides_to_scroll(3),
        300,
        &padded_widths(9, 3, 100),
    );
    assert_eq!(c.index(), 3);

    c.next().unwrap();
    assert_eq!((c.index(), c.offset()), (6, -600));
    c.next().unwrap();
    assert_eq!((c.index(), c.offset()), (9, -900));

    let outcome = c.next().unwrap();
    assert_eq!(outcome.translate.to, -1200);
    assert_eq!(c.return_index(), 0);
    assert_eq!(c.on_transition_end(), Some(Translate::immediate(-300)));

    c.prev().unwrap();
    assert_eq!(c.return_index(), 6);
    assert_eq!(c.offset(), -900);
}

#[test]
fn new_navigation_replaces_pending_seam_correction() {
    let mut c = set_up(
        CarouselOptions::default().with_infinite(1),
        100,
        &padded_widths(5, 1, 100),
    );
    c.prev().unwrap();
    assert!(c.has_pending_transition_action());

    c.slide_to(2).unwrap();
    assert!(!c.has_pending_transition_action());
    assert_eq!(c.on_transition_end(), None);
}

#[test]
fn clone_ops_pad_both_ends_in_order() {
    let ops = infinite::clone_ops(5, 2);
    let mut strip: Vec<String> = (0..5).map(|i| i.to_string()).collect();
    for op in &ops {
        let cloned = strip[op.source].clone();
        match op.at {
            infinite::ClonePosition::End => strip.push(cloned),
            infinite::ClonePosition::Start => strip.insert(0, cloned),
        }
    }
    assert_eq!(strip, ["3", "4", "0", "1", "2", "3", "4", "0", "1"]);
    assert_eq!(strip.len(), infinite::padded_len(5, 2));
}

#[test]
fn horizontal_drag_follows_finger_and_long_swipe_is_valid() {
    let mut c = set_up(CarouselOptions::default(), 300, &[100; 6]);
    c.touch_start(TouchPoint::new(100, 100), 0);
    assert_eq!(
        c.touch_move(TouchPoint::new(-20, 100)),
        Some(Translate::immediate(-120))
    );

    // Slow, but longer than a third of the frame.
    match c.touch_end(1_000) {
        TouchOutcome::Slid(outcome) => assert_eq!(outcome.translate.to, -300),
        other => panic!("expected a slide, got {other:?}"),
    }
    assert_eq!(c.offset(), -300);
    assert!(c.suppresses_click());
}

#[test]
fn quick_short_swipe_is_valid_but_slow_short_swipe_snaps_back() {
    let mut c = set_up(CarouselOptions::default(), 300, &[100; 6]);
    c.touch_start(TouchPoint::new(0, 0), 0);
    c.touch_move(TouchPoint::new(-30, 2));
    assert!(matches!(c.touch_end(100), TouchOutcome::Slid(_)));

    let mut c = set_up(CarouselOptions::default(), 300, &[100; 6]);
    c.touch_start(TouchPoint::new(0, 0), 0);
    c.touch_move(TouchPoint::new(-30, 2));
    assert_eq!(
        c.touch_end(500),
        TouchOutcome::SnapBack(Translate::new(0, 200, None))
    );
    assert_eq!(c.offset(), 0);
}

#[test]
fn vertical_first_move_is_a_scroll_for_the_whole_sequence() {
    let mut c = set_up(CarouselOptions::default(), 300, &[100; 6]);
    c.touch_start(TouchPoint::new(0, 0), 0);
    assert_eq!(c.touch_move(TouchPoint::new(5, 30)), None);
    assert_eq!(c.gesture().is_scrolling(), Some(true));
    assert_eq!(c.touch_move(TouchPoint::new(-250, 30)), None);
    assert_eq!(c.touch_end(50), TouchOutcome::Scrolled);
    assert_eq!(c.offset(), 0);
    assert_eq!(c.index(), 0);
}

#[test]
fn valid_swipe_against_a_bound_snaps_back() {
    let mut c = set_up(CarouselOptions::default(), 300, &[100; 6]);
    c.touch_start(TouchPoint::new(0, 0), 0);
    c.touch_move(TouchPoint::new(200, 0));
    assert_eq!(
        c.touch_end(50),
        TouchOutcome::SnapBack(Translate::new(0, 200, None))
    );
}

#[test]
fn touch_end_without_a_sequence_is_ignored() {
    let mut c = set_up(CarouselOptions::default(), 300, &[100; 6]);
    assert_eq!(c.touch_move(TouchPoint::new(10, 0)), None);
    assert_eq!(c.touch_end(10), TouchOutcome::Ignored);
}

#[test]
fn touch_control_clamps_live_and_keeps_dragged_offset() {
    let mut c = set_up(
        CarouselOptions::default().with_touch_control(true),
        300,
        &[100; 6],
    );
    assert!(c.next().is_none());
    assert!(c.slide_to(3).is_none());

    c.touch_start(TouchPoint::new(0, 0), 0);
    assert_eq!(
        c.touch_move(TouchPoint::new(-100, 0)),
        Some(Translate::immediate(-100))
    );
    assert_eq!(
        c.touch_move(TouchPoint::new(50, 0)),
        Some(Translate::new(0, 200, None))
    );
    assert_eq!(
        c.touch_move(TouchPoint::new(-400, 0)),
        Some(Translate::new(-300, 200, None))
    );
    assert_eq!(
        c.touch_end(20),
        TouchOutcome::Settled(Some(Translate::new(-300, 200, None)))
    );
    assert_eq!(c.offset(), -300);

    c.touch_start(TouchPoint::new(0, 0), 100);
    c.touch_move(TouchPoint::new(150, 0));
    assert_eq!(c.touch_end(200), TouchOutcome::Settled(None));
    assert_eq!(c.offset(), -150);
}

#[test]
fn reset_recomputes_fit_for_new_frame_width() {
    let mut c = set_up(CarouselOptions::default(), 300, &[100; 6]);
    assert!(c.geometry().slides_fit_in_frame());
    assert!(c.needs_reset(250));
    assert!(!c.needs_reset(300));

    c.reset(&Measurement::from_widths(250, [100; 6]));
    assert!(!c.geometry().slides_fit_in_frame());

    c.reset(&Measurement::from_widths(200, [100; 6]));
    assert!(c.geometry().slides_fit_in_frame());
}

#[test]
fn reset_keeps_slide_unless_rewind_on_resize() {
    let mut keep = set_up(
        CarouselOptions::default().with_rewind_on_resize(false),
        100,
        &[100; 5],
    );
    keep.slide_to(2).unwrap();
    let translate = keep.reset(&Measurement::from_widths(100, [100; 5]));
    assert_eq!(translate, Some(Translate::immediate(-200)));
    assert_eq!(keep.index(), 2);

    let mut rewind = set_up(CarouselOptions::default(), 100, &[100; 5]);
    rewind.slide_to(2).unwrap();
    let translate = rewind.reset(&Measurement::from_widths(100, [100; 5]));
    assert_eq!(translate, Some(Translate::new(0, 600, Some(Ease::Ease))));
    assert_eq!(rewind.index(), 0);
}

#[test]
fn unsettled_container_width_falls_back_to_sum_of_slides() {
    let m = Measurement {
        frame_width: 300,
        strip_width: 300,
        strip_left: 0,
        slides: Measurement::from_widths(300, [100; 6]).slides,
    };
    let geo = Geometry::from_measurement(&m);
    assert_eq!(geo.strip_width(), 600);
    assert_eq!(geo.max_offset(), 300);
}

#[test]
fn ease_parses_css_names_and_samples_monotonically() {
    assert_eq!("ease-in-out".parse::<Ease>(), Ok(Ease::EaseInOut));
    assert_eq!(Ease::EaseOut.to_string(), "ease-out");
    assert!("bounce".parse::<Ease>().is_err());

    for ease in [Ease::Linear, Ease::Ease, Ease::EaseIn, Ease::EaseOut, Ease::EaseInOut] {
        assert!(ease.sample(0.0).abs() < 1e-3);
        assert!((ease.sample(1.0) - 1.0).abs() < 1e-3);
        let mut prev = 0.0f32;
        for step in 1..=20 {
            let v = ease.sample(step as f32 / 20.0);
            assert!(v + 1e-3 >= prev, "{ease} not monotonic at {step}");
            prev = v;
        }
    }
    assert_eq!(Ease::Linear.sample(0.25), 0.25);
}

#[test]
fn infinite_backward_steps_onto_leading_clones_report_real_slides() {
    let mut c = set_up(
        CarouselOptions::default().with_infinite(2),
        100,
        &padded_widths(5, 2, 100),
    );
    assert_eq!(c.index(), 2);

    // Slot 1 holds the clone of slide 4 and is not a seam.
    let outcome = c.prev().unwrap();
    assert_eq!(c.index(), 1);
    assert_eq!(c.offset(), -100);
    assert_eq!(c.return_index(), 4);
    assert_eq!(outcome.current_slide, 4);
    assert!(!c.has_pending_transition_action());

    // Slot 0 is the seam: re-pointed to the real slide 3.
    let outcome = c.prev().unwrap();
    assert_eq!(outcome.translate.to, 0);
    assert_eq!(c.return_index(), 3);
    assert_eq!(outcome.current_slide, 3);
    assert_eq!(c.on_transition_end(), Some(Translate::immediate(-500)));
}

#[test]
fn infinite_logical_index_wraps_clone_slots() {
    for padded in 0..infinite::padded_len(5, 2) {
        let expected = [3, 4, 0, 1, 2, 3, 4, 0, 1][padded];
        assert_eq!(infinite::to_logical(padded, 2, 5), expected);
    }
    assert_eq!(infinite::to_logical(3, 2, 0), 1);
}

#[test]
fn infinite_reset_without_rewind_keeps_the_current_slide() {
    let widths = padded_widths(5, 1, 100);
    let mut c = set_up(
        CarouselOptions::default()
            .with_infinite(1)
            .with_rewind_on_resize(false),
        100,
        &widths,
    );
    c.next().unwrap();
    c.next().unwrap();
    assert_eq!((c.index(), c.return_index()), (3, 2));

    assert_eq!(
        c.reset(&Measurement::from_widths(100, widths.iter().copied())),
        Some(Translate::immediate(-300))
    );
    assert_eq!((c.index(), c.return_index()), (3, 2));
    assert_eq!(c.offset(), -300);
}

#[test]
fn touch_control_on_centered_narrow_strip_returns_to_center() {
    let mut c = Carousel::new(CarouselOptions::default().with_touch_control(true));
    assert_eq!(
        c.reset(&Measurement::from_widths(500, [100; 3])),
        Some(Translate::immediate(100))
    );

    c.touch_start(TouchPoint::new(0, 0), 0);
    assert_eq!(
        c.touch_move(TouchPoint::new(10, 0)),
        Some(Translate::new(100, 200, None))
    );
    assert_eq!(
        c.touch_end(20),
        TouchOutcome::Settled(Some(Translate::new(100, 200, None)))
    );
    assert_eq!(c.offset(), 0);
}

#[test]
fn touch_control_on_uncentered_narrow_strip_stays_at_origin() {
    let mut c = set_up(
        CarouselOptions::default()
            .with_touch_control(true)
            .with_center(false),
        500,
        &[100; 3],
    );
    c.touch_start(TouchPoint::new(0, 0), 0);
    assert_eq!(
        c.touch_move(TouchPoint::new(-30, 0)),
        Some(Translate::new(0, 200, None))
    );
    assert_eq!(
        c.touch_end(20),
        TouchOutcome::Settled(Some(Translate::new(0, 200, None)))
    );
    assert_eq!(c.offset(), 0);
    assert_eq!(c.controls(), Controls { no_more_prev: true, no_more_next: true });
}

#[test]
fn huge_slides_to_scroll_saturates_forward() {
    assert_eq!(infinite::step_len(usize::MAX), isize::MAX);

    let mut c = set_up(
        CarouselOptions::default().with_slides_to_scroll(usize::MAX),
        100,
        &[100; 5],
    );
    let outcome = c.next().unwrap();
    assert_eq!(c.index(), 4);
    assert_eq!(outcome.translate.to, -100);
}
