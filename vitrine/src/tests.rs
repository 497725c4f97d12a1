use crate::*;

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

    fn gen_range_u64(&mut self, start: u64, end_exclusive: u64) -> u64 {
        debug_assert!(start < end_exclusive);
        let span = end_exclusive - start;
        start + (self.next_u64() % span)
    }

    fn gen_range_usize(&mut self, start: usize, end_exclusive: usize) -> usize {
        self.gen_range_u64(start as u64, end_exclusive as u64) as usize
    }

    fn gen_range_u32(&mut self, start: u32, end_exclusive: u32) -> u32 {
        self.gen_range_u64(start as u64, end_exclusive as u64) as u32
    }
}

fn approx(a: f32, b: f32) -> bool {
    (a - b).abs() < 1e-4
}

fn cert_slider() -> Slider {
    Slider::new(10, 1200, SliderOptions::default().with_autoplay(false))
}

#[test]
fn slider_viewport_count_and_max_index() {
    let s = cert_slider();
    assert_eq!(s.item_pitch(), 370);
    assert_eq!(s.viewport_count(), 3);
    assert_eq!(s.max_index(), 7);
    assert_eq!(s.current_index(), 0);
    assert_eq!(s.offset(), 0);
}

#[test]
fn slider_advance_wraps_after_max() {
    let mut s = cert_slider();
    for i in 1..=7 {
        assert_eq!(s.advance(), -(i as i64) * 370);
    }
    assert_eq!(s.current_index(), 7);
    assert_eq!(s.advance(), 0);
    assert_eq!(s.current_index(), 0);
}

#[test]
fn slider_advance_max_plus_one_times_returns_to_start() {
    for (count, width) in [(10usize, 1200u32), (4, 370), (7, 0), (1, 5000), (25, 1850)] {
        let mut s = Slider::new(count, width, SliderOptions::default());
        let start = s.current_index();
        for _ in 0..=s.max_index() {
            s.advance();
        }
        assert_eq!(s.current_index(), start, "count={count} width={width}");
    }
}

#[test]
fn slider_retreat_from_zero_jumps_to_max_and_inverts_advance() {
    let mut s = cert_slider();
    s.retreat();
    assert_eq!(s.current_index(), 7);

    let mut s = cert_slider();
    for start in 0..s.max_index() {
        s.go_to(start);
        s.advance();
        s.retreat();
        assert_eq!(s.current_index(), start);
    }
}

#[test]
fn slider_is_inert_when_everything_fits() {
    let mut s = Slider::new(2, 1200, SliderOptions::default());
    assert_eq!(s.max_index(), 0);
    assert_eq!(s.advance(), 0);
    assert_eq!(s.retreat(), 0);
    assert_eq!(s.current_index(), 0);

    let mut empty = Slider::new(0, 1200, SliderOptions::default());
    assert_eq!(empty.advance(), 0);
    assert_eq!(empty.retreat(), 0);
}

#[test]
fn slider_zero_width_container_allows_every_card() {
    let mut s = Slider::new(4, 0, SliderOptions::default());
    assert_eq!(s.viewport_count(), 0);
    assert_eq!(s.max_index(), 4);
    for _ in 0..4 {
        s.advance();
    }
    assert_eq!(s.current_index(), 4);
    assert_eq!(s.offset(), -1480);
    s.advance();
    assert_eq!(s.current_index(), 0);

    let zero_pitch = Slider::new(4, 1200, SliderOptions::default().with_item_pitch(0));
    assert_eq!(zero_pitch.viewport_count(), 0);
    assert_eq!(zero_pitch.offset(), 0);
}

#[test]
fn slider_resize_keeps_valid_index_and_clamps_when_needed() {
    let mut s = cert_slider();
    s.go_to(7);

    // Shrink: 3 -> 2 cards visible, max grows to 8, index 7 stays.
    assert!(!s.on_resize(740));
    assert_eq!(s.viewport_count(), 2);
    assert_eq!(s.max_index(), 8);
    assert_eq!(s.current_index(), 7);

    // Grow: 2 -> 5 cards visible, max drops to 5, index clamps.
    assert!(s.on_resize(1850));
    assert_eq!(s.viewport_count(), 5);
    assert_eq!(s.max_index(), 5);
    assert_eq!(s.current_index(), 5);
    assert_eq!(s.offset(), -1850);
}

#[test]
fn slider_resize_is_idempotent_for_unchanged_width() {
    let mut s = cert_slider();
    s.go_to(4);
    let before = s.state();
    for _ in 0..5 {
        assert!(!s.on_resize(1200));
    }
    assert_eq!(s.state(), before);
}

#[test]
fn slider_index_stays_in_bounds_under_random_ops() {
    let mut rng = Lcg::new(0x5eed);
    for _ in 0..200 {
        let count = rng.gen_range_usize(0, 30);
        let width = rng.gen_range_u32(0, 4000);
        let mut s = Slider::new(count, width, SliderOptions::default());
        for _ in 0..100 {
            match rng.gen_range_u64(0, 4) {
                0 => {
                    s.advance();
                }
                1 => {
                    s.retreat();
                }
                2 => {
                    s.on_resize(rng.gen_range_u32(0, 4000));
                }
                _ => {
                    s.go_to(rng.gen_range_usize(0, 40));
                }
            }
            assert!(s.current_index() <= s.max_index());
            assert_eq!(s.max_index(), count.saturating_sub(s.viewport_count()));
            assert_eq!(s.offset(), -(s.current_index() as i64) * 370);
        }
    }
}

#[test]
fn autoplay_start_twice_keeps_single_timer() {
    let mut s = cert_slider();
    assert!(s.start_autoplay(0));
    assert!(!s.start_autoplay(100));
    assert_eq!(s.next_autoplay_ms(), Some(4000));

    assert_eq!(s.tick(3999), None);
    assert_eq!(s.tick(4000), Some(-370));
    assert_eq!(s.tick(4000), None);
    assert_eq!(s.tick(7999), None);
    assert_eq!(s.tick(8000), Some(-740));
    assert_eq!(s.current_index(), 2);
}

#[test]
fn autoplay_coalesces_missed_periods() {
    let mut s = cert_slider();
    s.start_autoplay(0);
    assert_eq!(s.tick(12_500), Some(-370));
    assert_eq!(s.current_index(), 1);
    assert_eq!(s.next_autoplay_ms(), Some(16_000));
}

#[test]
fn autoplay_stop_cancels_timer() {
    let mut s = cert_slider();
    s.start_autoplay(0);
    assert!(s.stop_autoplay());
    assert!(!s.stop_autoplay());
    assert!(!s.is_autoplaying());
    assert_eq!(s.tick(100_000), None);
    assert_eq!(s.current_index(), 0);
}

#[test]
fn hover_pauses_and_resumes_autoplay() {
    let mut s = cert_slider();
    s.start_autoplay(0);

    s.on_pointer_enter();
    assert!(!s.is_autoplaying());
    assert_eq!(s.tick(4000), None);

    s.on_pointer_leave(5000);
    assert_eq!(s.next_autoplay_ms(), Some(9000));
    assert_eq!(s.tick(9000), Some(-370));

    let mut pinned = Slider::new(10, 1200, SliderOptions::default().with_pause_on_hover(false));
    pinned.start_autoplay(0);
    pinned.on_pointer_enter();
    assert!(pinned.is_autoplaying());
}

#[test]
fn hover_never_starts_autoplay_that_was_not_running() {
    let mut s = cert_slider();
    s.on_pointer_enter();
    s.on_pointer_leave(10);
    assert!(!s.is_autoplaying());
    assert_eq!(s.tick(4010), None);

    // Stopped explicitly while hovered: leaving must not resume it either.
    s.start_autoplay(0);
    s.on_pointer_enter();
    s.stop_autoplay();
    s.on_pointer_leave(200);
    assert!(!s.is_autoplaying());
}

#[test]
fn resize_between_ticks_clamps_before_next_advance() {
    let mut s = cert_slider();
    s.start_autoplay(0);
    s.go_to(7);
    s.on_resize(1850);
    assert_eq!(s.current_index(), 5);
    // 5 is the new max, so the next tick wraps.
    assert_eq!(s.tick(4000), Some(0));
}

#[test]
fn interval_zero_period_is_one_ms() {
    let mut it = Interval::new(10, 0);
    assert_eq!(it.period_ms(), 1);
    assert!(!it.poll(10));
    assert!(it.poll(11));
    assert_eq!(it.next_due_ms(), 12);
}

#[test]
fn timeout_is_due_at_deadline() {
    let t = Timeout::new(100, 250);
    assert_eq!(t.due_ms(), 350);
    assert!(!t.is_due(349));
    assert!(t.is_due(350));
    assert!(Timeout::new(u64::MAX - 1, 10).is_due(u64::MAX));
}

#[test]
fn parse_delay_is_fail_soft() {
    assert_eq!(parse_delay(None), 0);
    assert_eq!(parse_delay(Some("")), 0);
    assert_eq!(parse_delay(Some("200")), 200);
    assert_eq!(parse_delay(Some(" 150 ")), 150);
    assert_eq!(parse_delay(Some("12.9")), 12);
    assert_eq!(parse_delay(Some("abc")), 0);
    assert_eq!(parse_delay(Some("-5")), 0);
    assert_eq!(parse_delay(Some("NaN")), 0);
    assert_eq!(parse_delay(Some("inf")), 0);
    assert_eq!(parse_delay(Some("0x10")), 0);
    assert_eq!(RevealTarget::from_delay_attr(Some("300")).delay_ms, 300);
}

fn observer_reveal(delays: &[u64]) -> Reveal {
    Reveal::new(
        delays.iter().map(|&d| RevealTarget::new(d)),
        RevealOptions::default(),
    )
}

#[test]
fn reveal_with_zero_delay_sticks_under_repeated_reports() {
    let mut r = observer_reveal(&[0]);
    assert!(r.on_visibility(0, true, 1000));
    assert!(r.is_pending(0));

    let mut out = Vec::new();
    assert_eq!(r.tick(1000, |i| out.push(i)), 1);
    assert_eq!(out, [0]);
    assert!(r.is_revealed(0));
    assert!(!r.is_observed(0));

    for now in [1100u64, 1200, 1300] {
        assert!(!r.on_visibility(0, true, now));
        assert!(!r.on_visibility(0, false, now));
        assert_eq!(r.tick(now, |_| panic!("revealed twice")), 0);
        assert!(r.is_revealed(0));
    }
}

#[test]
fn reveal_waits_for_delay() {
    let mut r = observer_reveal(&[300]);
    r.on_visibility(0, true, 1000);
    assert_eq!(r.next_due_ms(), Some(1300));
    assert_eq!(r.tick(1299, |_| {}), 0);
    assert!(!r.is_revealed(0));
    assert_eq!(r.tick(1300, |_| {}), 1);
    assert!(r.is_revealed(0));
    assert_eq!(r.next_due_ms(), None);
}

#[test]
fn reveal_second_report_while_pending_does_not_reschedule() {
    let mut r = observer_reveal(&[500]);
    assert!(r.on_visibility(0, true, 0));
    assert!(!r.on_visibility(0, true, 400));
    assert_eq!(r.next_due_ms(), Some(500));

    let mut fired = 0;
    r.tick(500, |_| fired += 1);
    r.tick(900, |_| fired += 1);
    assert_eq!(fired, 1);
}

#[test]
fn reveal_never_visible_stays_hidden() {
    let mut r = observer_reveal(&[0, 0]);
    r.on_visibility(1, true, 0);
    for now in (0..10_000u64).step_by(500) {
        r.on_visibility(0, false, now);
        r.tick(now, |_| {});
    }
    assert!(!r.is_revealed(0));
    assert!(r.is_revealed(1));
    assert!(!r.is_complete());
    assert_eq!(r.revealed_count(), 1);
}

#[test]
fn reveal_ignores_out_of_bounds_reports() {
    let mut r = observer_reveal(&[0]);
    assert!(!r.on_visibility(5, true, 0));
    assert!(!r.is_revealed(5));
    assert_eq!(r.delay_ms(5), None);
}

#[test]
fn reveal_polling_requires_full_containment() {
    let viewport = Viewport::new(800, 600);
    let rects = [
        Some(Rect::from_origin_size(10, 10, 100, 100)),
        Some(Rect::from_origin_size(10, 550, 100, 100)),
        None,
    ];
    let mut r = Reveal::new(
        [RevealTarget::new(0); 3],
        RevealOptions::default().with_mode(RevealMode::Polling),
    );

    assert_eq!(r.start(0, viewport, |i| rects[i]), 1);
    assert!(r.is_pending(0));
    assert!(!r.is_pending(1));
    assert_eq!(r.poll(5, viewport, |i| rects[i]), 0);

    let mut out = Vec::new();
    r.tick(5, |i| out.push(i));
    assert_eq!(out, [0]);

    let scrolled = [
        Some(Rect::from_origin_size(10, -200, 100, 100)),
        Some(Rect::from_origin_size(10, 300, 100, 100)),
        None,
    ];
    assert_eq!(r.poll(20, viewport, |i| scrolled[i]), 1);
    r.tick(20, |i| out.push(i));
    assert_eq!(out, [0, 1]);
    assert!(r.is_revealed(0));
    assert!(!r.is_revealed(2));
}

#[test]
fn reveal_poll_is_a_no_op_in_observer_mode() {
    let mut r = observer_reveal(&[0]);
    let inside = Rect::from_origin_size(0, 0, 10, 10);
    assert_eq!(r.start(0, Viewport::new(100, 100), |_| Some(inside)), 0);
    assert_eq!(r.poll(0, Viewport::new(100, 100), |_| Some(inside)), 0);
    assert!(!r.is_pending(0));
}

#[test]
fn reveal_cancel_pending_drops_timers() {
    let mut r = observer_reveal(&[100, 100]);
    r.on_visibility(0, true, 0);
    r.on_visibility(1, true, 0);
    assert_eq!(r.cancel_pending(), 2);
    assert_eq!(r.tick(1000, |_| {}), 0);
    assert_eq!(r.revealed_count(), 0);

    assert!(r.on_visibility(0, true, 1000));
    assert_eq!(r.tick(1100, |_| {}), 1);
}

#[test]
fn reveal_with_no_targets_is_inert() {
    let mut r = observer_reveal(&[]);
    assert!(r.is_empty());
    assert!(r.is_complete());
    assert_eq!(r.tick(0, |_| {}), 0);
    assert_eq!(r.next_due_ms(), None);
}

#[test]
fn rect_geometry_helpers() {
    let r = Rect::from_origin_size(10, 20, 30, 40);
    assert_eq!((r.left, r.top, r.right, r.bottom), (10, 20, 40, 60));
    assert_eq!(r.width(), 30);
    assert_eq!(r.height(), 40);
    assert_eq!(r.area(), 1200);

    let far = Rect::from_origin_size(100, 100, 5, 5);
    assert_eq!(r.intersection(&far), None);
    assert!(far.is_within(&Viewport::new(105, 105).rect()));
    assert!(!far.is_within(&Viewport::new(104, 105).rect()));
}

#[test]
fn intersection_ratio_respects_root_margin() {
    let vp = Viewport::new(1000, 800);
    let inside = Rect::from_origin_size(0, 100, 100, 100);
    assert_eq!(intersection_ratio(&inside, vp, Margin::ZERO), 1.0);

    let half = Rect::from_origin_size(0, 700, 100, 200);
    assert_eq!(intersection_ratio(&half, vp, Margin::ZERO), 0.5);

    let low = Rect::from_origin_size(0, 760, 100, 100);
    assert!(approx(intersection_ratio(&low, vp, Margin::ZERO), 0.4));
    assert_eq!(intersection_ratio(&low, vp, Margin::new(0, 0, -50, 0)), 0.0);

    let point = Rect::from_origin_size(5, 5, 0, 0);
    assert_eq!(intersection_ratio(&point, vp, Margin::ZERO), 1.0);
    let gone = Rect::from_origin_size(5, -50, 0, 0);
    assert_eq!(intersection_ratio(&gone, vp, Margin::ZERO), 0.0);
}

#[test]
fn threshold_semantics() {
    assert!(!meets_threshold(0.0, 0.0));
    assert!(meets_threshold(0.05, 0.0));
    assert!(meets_threshold(0.1, 0.1));
    assert!(!meets_threshold(0.09, 0.1));
}

#[test]
fn zero_threshold_counts_edge_contact() {
    let vp = Viewport::new(1000, 800);
    let touching = Rect {
        top: -50,
        left: 0,
        bottom: 0,
        right: 100,
    };
    let any = ObserverOptions::default()
        .with_threshold(0.0)
        .with_root_margin(Margin::ZERO);
    assert_eq!(intersection_ratio(&touching, vp, Margin::ZERO), 0.0);
    assert!(is_intersecting(&touching, vp, &any));
    assert!(!is_intersecting(&touching, vp, &any.with_threshold(0.1)));

    let above = Rect::from_origin_size(0, -60, 100, 50);
    assert!(!is_intersecting(&above, vp, &any));

    let mut o = VisibilityObserver::new(1, any);
    o.observe(0);
    let mut seen = Vec::new();
    o.check(vp, |_| Some(touching), |i, v| seen.push((i, v)));
    assert_eq!(seen, [(0, true)]);
}

#[test]
fn observer_reports_only_state_changes() {
    let vp = Viewport::new(1000, 800);
    let mut rects = [
        Rect::from_origin_size(0, 100, 100, 100),
        Rect::from_origin_size(0, 2000, 100, 100),
    ];
    let mut o = VisibilityObserver::new(2, ObserverOptions::default());
    o.observe_all();
    assert_eq!(o.observed_count(), 2);

    let mut seen = Vec::new();
    assert_eq!(o.check(vp, |i| Some(rects[i]), |i, v| seen.push((i, v))), 2);
    assert_eq!(seen, [(0, true), (1, false)]);

    seen.clear();
    assert_eq!(o.check(vp, |i| Some(rects[i]), |i, v| seen.push((i, v))), 0);

    rects[1] = Rect::from_origin_size(0, 600, 100, 100);
    o.check(vp, |i| Some(rects[i]), |i, v| seen.push((i, v)));
    assert_eq!(seen, [(1, true)]);

    seen.clear();
    o.unobserve(0);
    rects[0] = Rect::from_origin_size(0, 5000, 100, 100);
    o.check(vp, |i| Some(rects[i]), |i, v| seen.push((i, v)));
    assert!(seen.is_empty());
    assert!(!o.is_observing(0));

    o.check(vp, |_| None, |i, v| seen.push((i, v)));
    assert_eq!(seen, [(1, false)]);

    o.disconnect();
    assert_eq!(o.observed_count(), 0);
}

#[test]
fn parse_leading_int_matches_parse_int() {
    assert_eq!(parse_leading_int("150+"), Some(150));
    assert_eq!(parse_leading_int("  42"), Some(42));
    assert_eq!(parse_leading_int("-7x"), Some(-7));
    assert_eq!(parse_leading_int("5K"), Some(5));
    assert_eq!(parse_leading_int("4.5"), Some(4));
    assert_eq!(parse_leading_int("abc"), None);
    assert_eq!(parse_leading_int(""), None);
    assert_eq!(parse_leading_int("+"), None);
}

#[test]
fn counter_counts_up_in_fifty_steps_then_restores_text() {
    assert!(Counter::parse("Python").is_none());

    let mut c = Counter::parse("150+").unwrap();
    assert_eq!(c.tick(30), None);
    assert!(c.start(0));
    assert!(!c.start(10));

    let mut frames = Vec::new();
    let mut now = 0u64;
    while !c.is_finished() {
        now += COUNTER_INTERVAL_MS;
        if let Some(f) = c.tick(now) {
            frames.push(f);
        }
    }
    assert_eq!(frames.len(), COUNTER_STEPS as usize);
    assert_eq!(frames[0], CounterFrame::Value(3));
    assert_eq!(frames[48], CounterFrame::Value(147));
    assert_eq!(frames[49], CounterFrame::Done);
    assert_eq!(c.final_text(), "150+");
    assert!(!c.is_running());
    assert!(!c.start(now));
}

#[test]
fn counter_non_positive_target_finishes_immediately() {
    let mut c = Counter::parse("0").unwrap();
    c.start(0);
    assert_eq!(c.tick(30), Some(CounterFrame::Done));

    let mut small = Counter::parse("7").unwrap();
    small.start(0);
    assert_eq!(small.tick(30), Some(CounterFrame::Value(0)));
}

#[test]
fn nav_state_tracks_scroll_and_menu() {
    let mut nav = NavState::new();
    assert!(!nav.on_scroll(50.0));
    assert!(nav.on_scroll(150.0));
    assert!(nav.is_scrolled());
    assert!(!nav.on_scroll(200.0));
    assert!(nav.on_scroll(100.0));
    assert!(!nav.is_scrolled());

    assert!(nav.toggle_menu());
    assert!(!nav.on_key(Key::Other));
    assert!(nav.is_menu_open());
    assert!(nav.on_key(Key::Escape));
    assert!(!nav.is_menu_open());
    assert!(!nav.on_key(Key::Escape));

    nav.toggle_menu();
    assert!(nav.close_menu());
    assert!(!nav.close_menu());

    assert_eq!(Key::from_dom("Escape"), Key::Escape);
    assert_eq!(Key::from_dom("a"), Key::Other);
}

#[test]
fn scroll_effects_follow_scroll_position() {
    let top = ScrollEffects::at(0.0);
    assert_eq!(top.content_offset, 0.0);
    assert_eq!(top.indicator_opacity, 1.0);

    let mid = ScrollEffects::at(150.0);
    assert!(approx(mid.content_offset, -75.0));
    assert!(approx(mid.video_offset, 45.0));
    assert!(approx(mid.indicator_opacity, 0.5));

    assert_eq!(indicator_opacity(600.0), 0.0);
}
