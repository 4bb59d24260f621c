use crate::*;

use alloc::string::{String, ToString};
use alloc::vec::Vec;
use core::sync::atomic::{AtomicUsize, Ordering};

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

    fn gen_unit_f32(&mut self) -> f32 {
        (self.next_u64() % 1_000_000) as f32 / 1_000_000.0
    }

    fn gen_range_f32(&mut self, start: f32, end: f32) -> f32 {
        start + self.gen_unit_f32() * (end - start)
    }
}

// ---- smoothing ----

#[test]
fn smoothed_axis_never_overshoots() {
    let mut rng = Lcg::new(42);
    for _ in 0..200 {
        let smoothing = rng.gen_range_f32(0.001, 1.0);
        let mut axis = SmoothedAxis::new(smoothing);
        for _ in 0..50 {
            axis.set_target(rng.gen_range_f32(-1000.0, 1000.0));
            let before = axis.current;
            let target = axis.target;
            let after = axis.step();
            let gap_before = (target - before).abs();
            let gap_after = (target - after).abs();
            assert!(gap_after <= gap_before, "moved away from target");
            // After lies on the segment [before, target].
            assert!(
                (after - before) * (target - before) >= 0.0,
                "stepped in the wrong direction"
            );
            assert!(gap_after <= (target - before).abs(), "overshot the target");
        }
    }
}

#[test]
fn smoothed_axis_with_full_smoothing_lands_on_target() {
    let mut axis = SmoothedAxis::new(1.0);
    axis.set_target(123.0);
    assert_eq!(axis.step(), 123.0);
}

#[test]
fn smoothed_axis_converges_geometrically() {
    let mut axis = SmoothedAxis::new(0.2);
    axis.set_target(100.0);
    let mut prev_gap = 100.0f32;
    for _ in 0..100 {
        axis.step();
        let gap = (axis.target - axis.current).abs();
        assert!(gap <= prev_gap);
        prev_gap = gap;
    }
    assert!(axis.is_settled(0.1));
}

#[test]
fn set_target_does_not_reset_current() {
    let mut point = SmoothedPoint::new(0.2);
    point.set_target(Point::new(10.0, 10.0));
    point.step();
    let mid = point.current();
    point.set_target(Point::new(-50.0, 20.0));
    assert_eq!(point.current(), mid);
}

// ---- animator ----

#[test]
fn animator_tick_without_followers_is_noop() {
    let mut a = ContinuousAnimator::new();
    a.set_pointer(Point::new(5.0, 5.0));
    let mut frames = 0;
    a.tick(|_| frames += 1);
    assert_eq!(frames, 0);
}

#[test]
fn animator_followers_chase_pointer_at_their_own_speed() {
    let mut a = ContinuousAnimator::new();
    a.add_follower(1, CURSOR_SMOOTHING);
    a.add_follower(2, FOLLOWER_SMOOTHING);
    a.set_pointer(Point::new(100.0, 0.0));

    let mut frames = Vec::new();
    a.tick(|f| frames.push(f));
    assert_eq!(frames.len(), 2);
    assert_eq!(frames[0].element, 1);
    assert!((frames[0].position.x - 20.0).abs() < 1e-4);
    assert!((frames[1].position.x - 10.0).abs() < 1e-4);

    for _ in 0..500 {
        a.tick(|_| {});
    }
    assert!((a.current_of(1).unwrap().x - 100.0).abs() < 0.5);
    assert!((a.current_of(2).unwrap().x - 100.0).abs() < 0.5);
}

#[test]
fn animator_ignores_duplicate_followers() {
    let mut a = ContinuousAnimator::new();
    a.add_follower(7, 0.2);
    a.add_follower(7, 0.9);
    assert_eq!(a.follower_len(), 1);
}

#[test]
fn late_followers_pick_up_the_current_pointer_target() {
    let mut a = ContinuousAnimator::new();
    a.set_pointer(Point::new(40.0, 8.0));
    a.add_follower(3, 1.0);
    a.tick(|_| {});
    assert_eq!(a.current_of(3), Some(Point::new(40.0, 8.0)));
}

#[test]
fn scroll_percent_clamps_degenerate_range() {
    // Content no taller than the viewport: scrollable range is 0.
    let m = ScrollMetrics::new(0.0, 600.0, 600.0);
    assert_eq!(scroll_percent(m), 0.0);
    let m = ScrollMetrics::new(50.0, 400.0, 600.0);
    let p = scroll_percent(m);
    assert!(p.is_finite());
    assert_eq!(p, 0.0);
}

#[test]
fn scroll_percent_stays_within_bounds() {
    let m = ScrollMetrics::new(500.0, 1600.0, 600.0);
    assert_eq!(scroll_percent(m), 50.0);
    // Overscroll (rubber-banding) clamps at 100.
    let m = ScrollMetrics::new(2000.0, 1600.0, 600.0);
    assert_eq!(scroll_percent(m), 100.0);
}

#[test]
fn fade_opacity_clamps_to_unit_range() {
    assert_eq!(fade_opacity(0.0, FADE_DISTANCE), 1.0);
    assert_eq!(fade_opacity(400.0, FADE_DISTANCE), 0.5);
    assert_eq!(fade_opacity(5000.0, FADE_DISTANCE), 0.0);
    assert_eq!(fade_opacity(100.0, 0.0), 1.0);
}

#[test]
fn parallax_shift_is_linear_in_scroll() {
    assert_eq!(parallax_shift(300.0, PARALLAX_SPEED), 150.0);
}

#[test]
fn magnetic_offset_is_damped_and_lifted() {
    let rect = ElementRect::new(100.0, 200.0, 80.0, 40.0);
    // Pointer at the exact center: only the lift remains.
    let p = magnetic_offset(rect.center(), rect, MAGNETIC_STRENGTH, MAGNETIC_LIFT);
    assert_eq!(p, Point::new(0.0, -3.0));

    let p = magnetic_offset(
        Point::new(150.0, 230.0),
        rect,
        MAGNETIC_STRENGTH,
        MAGNETIC_LIFT,
    );
    assert!((p.x - 2.0).abs() < 1e-4);
    assert!((p.y - (2.0 - 3.0)).abs() < 1e-4);
}

// ---- debounce ----

#[test]
fn debounce_collapses_burst_to_trailing_call() {
    let mut d = Debouncer::new(10);
    d.call("a", 0);
    d.call("b", 5);
    d.call("c", 8);

    assert_eq!(d.poll(17), None);
    assert_eq!(d.next_deadline(), Some(18));
    assert_eq!(d.poll(18), Some("c"));
    assert_eq!(d.poll(18), None);
    assert!(!d.is_pending());
}

#[test]
fn debounce_instances_are_independent() {
    let mut d1 = Debouncer::new(10);
    let mut d2 = Debouncer::new(50);
    d1.call(1u32, 0);
    d2.call(2u32, 0);
    assert_eq!(d1.poll(10), Some(1));
    assert_eq!(d2.poll(10), None);
    assert_eq!(d2.poll(50), Some(2));
}

#[test]
fn debounce_cancel_drops_pending_value() {
    let mut d = Debouncer::new(10);
    d.call(9u8, 0);
    d.cancel();
    assert_eq!(d.poll(100), None);
}

// ---- reveal ----

fn no_text(_: ElementId) -> Option<String> {
    None
}

#[test]
fn reveal_fires_exactly_once_per_element() {
    let mut r = RevealController::new();
    r.observe([1, 2], RevealKind::Visible, ObserveOptions::reveal(), |_| {});

    let mut effects = Vec::new();
    for _ in 0..5 {
        r.notify_intersection(1, true, 0, no_text, |e| effects.push(e));
    }
    assert_eq!(
        effects,
        alloc::vec![
            RevealEffect::MarkVisible { element: 1 },
            RevealEffect::Unobserve { element: 1 },
        ]
    );
    assert!(r.is_triggered(1));
    assert!(!r.is_triggered(2));
    assert_eq!(r.pending_len(), 1);
}

#[test]
fn reveal_ignores_non_intersecting_and_unknown_elements() {
    let mut r = RevealController::new();
    r.observe([1], RevealKind::Visible, ObserveOptions::reveal(), |_| {});

    let mut fired = 0;
    r.notify_intersection(1, false, 0, no_text, |_| fired += 1);
    r.notify_intersection(99, true, 0, no_text, |_| fired += 1);
    assert_eq!(fired, 0);
    assert!(!r.is_triggered(1));
}

#[test]
fn stagger_delays_follow_document_order() {
    let mut r = RevealController::new();
    let mut prepared = Vec::new();
    r.observe(
        [10, 11, 12],
        RevealKind::Stagger,
        ObserveOptions::stagger(),
        |e| prepared.push(e),
    );
    assert_eq!(
        prepared,
        alloc::vec![
            RevealEffect::PrepareStagger {
                element: 10,
                delay_ms: 0
            },
            RevealEffect::PrepareStagger {
                element: 11,
                delay_ms: 100
            },
            RevealEffect::PrepareStagger {
                element: 12,
                delay_ms: 200
            },
        ]
    );
    assert_eq!(r.stagger_delay_ms(12), Some(200));

    let mut effects = Vec::new();
    r.notify_intersection(11, true, 0, no_text, |e| effects.push(e));
    assert_eq!(
        effects,
        alloc::vec![
            RevealEffect::StaggerIn { element: 11 },
            RevealEffect::Unobserve { element: 11 },
        ]
    );
}

#[test]
fn observe_groups_keep_their_own_thresholds() {
    let mut r = RevealController::new();
    r.observe([1], RevealKind::Visible, ObserveOptions::reveal(), |_| {});
    r.observe([2], RevealKind::Counter, ObserveOptions::counter(), |_| {});

    assert_eq!(r.options_for(1).unwrap().threshold, 0.1);
    assert_eq!(r.options_for(1).unwrap().root_margin.bottom, -100.0);
    assert_eq!(r.options_for(2).unwrap().threshold, 0.5);

    let mut pending = Vec::new();
    r.for_each_pending(|el, _| pending.push(el));
    assert_eq!(pending, alloc::vec![1, 2]);
}

#[test]
fn counter_sequence_is_monotone_and_ends_verbatim() {
    let mut r = RevealController::new();
    r.observe([5], RevealKind::Counter, ObserveOptions::counter(), |_| {});
    r.notify_intersection(5, true, 0, |_| Some("100+".to_string()), |_| {});
    assert!(r.has_active_counters());

    let mut texts = Vec::new();
    let mut now = 0u64;
    while r.has_active_counters() {
        now += 16;
        r.tick(now, |e| {
            if let RevealEffect::SetText { element, text } = e {
                assert_eq!(element, 5);
                texts.push(text);
            }
        });
        assert!(now < 10_000, "counter never finished");
    }

    assert_eq!(texts.last().unwrap(), "100+");
    let mut prev = 0u64;
    for text in &texts {
        let digits: String = text.chars().filter(|c| c.is_ascii_digit()).collect();
        let value = digits.parse::<u64>().unwrap();
        assert!(value >= prev, "counter went backwards");
        assert!(value <= 100, "counter exceeded its target");
        assert!(text.ends_with('+'), "suffix lost in {text:?}");
        prev = value;
    }
}

#[test]
fn counter_with_unparseable_text_is_skipped() {
    let mut r = RevealController::new();
    r.observe([5], RevealKind::Counter, ObserveOptions::counter(), |_| {});

    let mut effects = Vec::new();
    r.notify_intersection(5, true, 0, |_| Some("many".to_string()), |e| effects.push(e));
    // Still unsubscribed, but no text was touched and no tween started.
    assert_eq!(effects, alloc::vec![RevealEffect::Unobserve { element: 5 }]);
    assert!(!r.has_active_counters());
    r.tick(2000, |_| panic!("no frames expected"));
}

#[test]
fn counter_parses_the_first_digit_run() {
    // Trailing suffix: intermediate frames keep it, the target is the digits alone.
    let mut t = CounterTween::parse(1, "100+", 0).unwrap();
    assert_eq!(t.target(), 100);
    assert_eq!(t.advance(30).as_deref(), Some("2+"));

    // Embedded digits: the surrounding text survives to the final verbatim frame.
    let mut t = CounterTween::parse(2, "over 25 projects", 0).unwrap();
    assert_eq!(t.target(), 25);
    assert_eq!(
        t.advance(COUNTER_DURATION_MS).as_deref(),
        Some("over 25 projects")
    );

    assert!(CounterTween::parse(3, "countless", 0).is_none());
}

#[test]
fn counter_with_zero_target_pins_immediately() {
    let mut t = CounterTween::parse(1, "0 bugs", 0).unwrap();
    assert_eq!(t.advance(30), Some("0 bugs".to_string()));
    assert!(t.is_done());
}

#[test]
fn counter_tween_emits_at_most_one_frame_per_step() {
    let mut t = CounterTween::parse(1, "50", 0).unwrap();
    assert_eq!(t.advance(10), None); // before the first step boundary
    assert!(t.advance(30).is_some());
    assert_eq!(t.advance(31), None); // same step
    assert!(t.advance(60).is_some());
}

#[test]
fn counter_finishes_by_its_duration() {
    let mut t = CounterTween::parse(1, "37", 0).unwrap();
    let text = t.advance(COUNTER_DURATION_MS);
    assert_eq!(text, Some("37".to_string()));
    assert!(t.is_done());
}

// ---- lightbox ----

fn sample_gallery(n: usize) -> Gallery {
    (0..n)
        .map(|i| GalleryItem {
            image_src: alloc::format!("images/work-{i}.jpg"),
            image_alt: alloc::format!("Work {i}"),
            title: alloc::format!("Project {i}"),
            category: String::from("Design"),
        })
        .collect()
}

#[test]
fn lightbox_next_wraps_around_the_gallery() {
    for n in 1..=5usize {
        let mut lb = Lightbox::new(sample_gallery(n));
        for start in 0..n {
            assert!(lb.open(start));
            for _ in 0..n {
                lb.next();
            }
            assert_eq!(lb.current_index(), start);
        }
    }
}

#[test]
fn lightbox_prev_from_zero_wraps_to_last() {
    let mut lb = Lightbox::new(sample_gallery(4));
    assert!(lb.open(0));
    assert_eq!(lb.prev(), Some(3));
    assert_eq!(lb.current_item().unwrap().title, "Project 3");
}

#[test]
fn lightbox_close_when_closed_is_noop() {
    let mut lb = Lightbox::new(sample_gallery(3));
    assert!(!lb.close());
    assert!(!lb.is_open());
    assert_eq!(lb.current_index(), 0);
}

#[test]
fn lightbox_navigation_while_closed_is_noop() {
    let mut lb = Lightbox::new(sample_gallery(3));
    assert_eq!(lb.next(), None);
    assert_eq!(lb.prev(), None);
    assert_eq!(lb.current_index(), 0);
}

#[test]
fn lightbox_rejects_out_of_bounds_open() {
    let mut lb = Lightbox::new(sample_gallery(3));
    assert!(!lb.open(3));
    assert!(!lb.is_open());
}

#[test]
fn empty_gallery_cannot_open() {
    let mut lb = Lightbox::new(Gallery::new());
    assert!(!lb.open(0));
    assert!(!lb.is_open());
    assert_eq!(lb.handle_key(Key::ArrowRight), false);
}

#[test]
fn lightbox_keys_are_consumed_only_while_open() {
    let mut lb = Lightbox::new(sample_gallery(3));
    assert!(!lb.handle_key(Key::Escape));

    assert!(lb.open(1));
    assert!(lb.handle_key(Key::ArrowRight));
    assert_eq!(lb.current_index(), 2);
    assert!(lb.handle_key(Key::ArrowLeft));
    assert_eq!(lb.current_index(), 1);
    assert!(lb.handle_key(Key::Escape));
    assert!(!lb.is_open());
}

#[test]
fn lightbox_scroll_lock_mirrors_open_state() {
    let mut lb = Lightbox::new(sample_gallery(2));
    assert!(!lb.scroll_locked());
    lb.open(0);
    assert!(lb.scroll_locked());
    lb.close();
    assert!(!lb.scroll_locked());
}

#[test]
fn lightbox_content_follows_current_index_exactly() {
    let mut lb = Lightbox::new(sample_gallery(3));
    lb.open(2);
    let item = lb.current_item().unwrap();
    assert_eq!(item.image_src, "images/work-2.jpg");
    assert_eq!(item.image_alt, "Work 2");
    assert_eq!(item.category, "Design");
}

#[test]
fn lightbox_on_change_fires_per_transition() {
    static CHANGES: AtomicUsize = AtomicUsize::new(0);
    CHANGES.store(0, Ordering::SeqCst);

    let mut lb = Lightbox::new(sample_gallery(3)).with_on_change(|_| {
        CHANGES.fetch_add(1, Ordering::SeqCst);
    });
    lb.open(0); // 1
    lb.next(); // 2
    lb.prev(); // 3
    lb.close(); // 4
    lb.close(); // no-op, no notification
    assert_eq!(CHANGES.load(Ordering::SeqCst), 4);
}

#[test]
fn lightbox_restore_clamps_snapshot() {
    let mut lb = Lightbox::new(sample_gallery(2));
    lb.restore(LightboxSnapshot {
        is_open: true,
        current_index: 10,
    });
    assert!(lb.is_open());
    assert_eq!(lb.current_index(), 1);

    let mut empty = Lightbox::new(Gallery::new());
    empty.restore(LightboxSnapshot {
        is_open: true,
        current_index: 0,
    });
    assert!(!empty.is_open());
}

#[test]
fn lightbox_reopen_retargets_index() {
    let mut lb = Lightbox::new(sample_gallery(4));
    lb.open(1);
    assert!(lb.open(3));
    assert_eq!(lb.current_index(), 3);
    assert!(lb.is_open());
}
