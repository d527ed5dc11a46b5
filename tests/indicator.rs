use portfolio_wasm::indicator::{
    counter_value, ease_out_quint, parse_percentage, stroke_offset, IndicatorPhase, SkillIndicator,
};

const DURATION: f64 = 3_000.0;

#[test]
fn easing_endpoints_and_clamping() {
    assert_eq!(ease_out_quint(0.0), 0.0);
    assert_eq!(ease_out_quint(1.0), 1.0);
    assert_eq!(ease_out_quint(-1.0), 0.0);
    assert_eq!(ease_out_quint(2.0), 1.0);
    assert!((ease_out_quint(0.5) - 0.96875).abs() < 1e-12);
}

#[test]
fn counter_reaches_target_exactly() {
    assert_eq!(counter_value(0, 87, 0.0, DURATION), 0);
    assert_eq!(counter_value(0, 87, DURATION, DURATION), 87);
    assert_eq!(counter_value(0, 87, DURATION * 5.0, DURATION), 87);
    // floor(90 * 0.96875) = 87
    assert_eq!(counter_value(0, 90, 1_500.0, DURATION), 87);
}

#[test]
fn counter_is_monotonic() {
    for target in [0, 1, 33, 50, 99, 100] {
        let mut last = 0;
        let mut t = 0.0;
        while t <= DURATION + 50.0 {
            let v = counter_value(0, target, t, DURATION);
            assert!(v >= last, "target {target}: {v} < {last} at {t}ms");
            assert!(v <= target);
            last = v;
            t += 16.7;
        }
        assert_eq!(last, target);
    }
}

#[test]
fn stroke_offset_matches_ring_geometry() {
    let c = 2.0 * std::f64::consts::PI * 52.0;
    assert!((stroke_offset(0, 52.0) - c).abs() < 1e-9);
    assert!(stroke_offset(100, 52.0).abs() < 1e-9);
    assert!((stroke_offset(75, 52.0) - c * 0.25).abs() < 1e-9);
}

#[test]
fn percentage_parsing_follows_parse_int() {
    assert_eq!(parse_percentage("90"), Some(90));
    assert_eq!(parse_percentage("  85%"), Some(85));
    assert_eq!(parse_percentage("72.9"), Some(72));
    assert_eq!(parse_percentage("250"), Some(100));
    assert_eq!(parse_percentage("-5"), Some(0));
    assert_eq!(parse_percentage("abc"), None);
    assert_eq!(parse_percentage(""), None);
}

#[test]
fn second_visibility_crossing_is_ignored() {
    let mut ind = SkillIndicator::new(80, DURATION);
    assert_eq!(ind.phase(), IndicatorPhase::Unobserved);
    assert!(!ind.on_visibility(1.0, 0.5), "not observed yet");

    ind.observe();
    assert_eq!(ind.phase(), IndicatorPhase::Pending);
    assert!(!ind.on_visibility(0.3, 0.5));
    assert!(ind.on_visibility(0.5, 0.5));
    assert_eq!(ind.phase(), IndicatorPhase::Animating);
    assert!(!ind.on_visibility(0.9, 0.5));

    ind.counter_frame(0.0);
    ind.counter_frame(DURATION);
    assert!(ind.is_done());
    assert!(!ind.on_visibility(1.0, 0.5));
    ind.observe();
    assert_eq!(ind.phase(), IndicatorPhase::Done);
}

#[test]
fn counter_frames_count_up_then_finish() {
    let mut ind = SkillIndicator::new(95, DURATION);
    ind.observe();
    assert!(ind.on_visibility(0.6, 0.5));

    let start = 10_000.0;
    let mut last = ind.counter_frame(start);
    assert_eq!(last, 0);
    let mut now = start;
    while !ind.is_done() {
        now += 16.0;
        let shown = ind.counter_frame(now);
        assert!(shown >= last);
        last = shown;
    }
    assert_eq!(last, 95);
    assert_eq!(ind.displayed(), 95);
    assert!(now - start >= DURATION);
    // Further frames keep the final value.
    assert_eq!(ind.counter_frame(now + 1_000.0), 95);
}

#[test]
fn ring_offset_uses_target() {
    let ind = SkillIndicator::new(150, DURATION);
    assert_eq!(ind.target(), 100);
    assert!(ind.ring_offset(52.0).abs() < 1e-9);
}
