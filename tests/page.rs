use portfolio_wasm::config::SiteConfig;
use portfolio_wasm::pointer::GlowTracker;
use portfolio_wasm::reveal::{stagger_delay_ms, RevealSet};
use portfolio_wasm::state::{AppState, ThemedValue};
use portfolio_wasm::theme::Theme;

#[test]
fn reveal_marks_once_and_never_unmarks() {
    let mut set = RevealSet::new(3, 0.1);
    assert!(!set.on_intersection(0, 0.05));
    assert!(set.on_intersection(0, 0.1));
    assert!(!set.on_intersection(0, 0.9));
    assert!(!set.on_intersection(0, 0.0));
    assert!(set.is_revealed(0));
    assert!(!set.is_revealed(1));
    assert!(set.on_intersection(2, 1.0));
    assert_eq!(set.revealed_count(), 2);
    assert!(!set.on_intersection(7, 1.0));
    assert!(!set.is_revealed(7));
}

#[test]
fn cards_fade_in_one_step_apart() {
    let delays: Vec<_> = (0..4).map(|i| stagger_delay_ms(i, 100)).collect();
    assert_eq!(delays, [0, 100, 200, 300]);
}

#[test]
fn glow_follows_pointer_and_hides_on_leave() {
    let mut glow = GlowTracker::new(10.0);
    assert!(!glow.placement().visible);

    let p = glow.on_move(200.0, 50.0);
    assert_eq!((p.left, p.top, p.visible), (190.0, 40.0, true));

    let p = glow.on_leave();
    assert_eq!((p.left, p.top, p.visible), (190.0, 40.0, false));

    assert!(glow.on_move(0.0, 0.0).visible);
}

#[test]
fn config_defaults() {
    let cfg = SiteConfig::default();
    assert_eq!(cfg.theme_storage_key, "theme");
    assert_eq!(cfg.scroll_offset, 100.0);
    assert_eq!(cfg.particle_density, 15_000.0);
    assert_eq!((cfg.ring_delay_ms, cfg.counter_delay_ms), (300, 500));
    assert!((cfg.ring_circumference() - 2.0 * std::f64::consts::PI * 52.0).abs() < 1e-12);
}

#[test]
fn config_overrides_from_dataset() {
    let cfg = SiteConfig::default().apply_overrides(|key| match key {
        "particleDensity" => Some("30000".into()),
        "logLevel" => Some("debug".into()),
        _ => None,
    });
    assert_eq!(cfg.particle_density, 30_000.0);
    assert_eq!(cfg.log_level, log::Level::Debug);

    let cfg = SiteConfig::default().apply_overrides(|key| match key {
        "particleDensity" => Some("-1".into()),
        "logLevel" => Some("loud".into()),
        _ => None,
    });
    assert_eq!(cfg, SiteConfig::default());
}

#[test]
fn app_state_starts_on_javascript_light() {
    let state = AppState::default();
    assert_eq!(state.theme, Theme::Light);
    assert_eq!(state.language, "javascript");
}

#[test]
fn themed_value_recomputes_only_on_theme_change() {
    let mut accent = ThemedValue::new();
    let mut calls = 0;
    let mut lookup = |theme: Theme| {
        accent
            .get_or_refresh(theme, || {
                calls += 1;
                Ok::<_, ()>(format!("{theme}-{calls}"))
            })
            .cloned()
    };
    assert_eq!(lookup(Theme::Light), Ok("light-1".to_string()));
    assert_eq!(lookup(Theme::Light), Ok("light-1".to_string()));
    assert_eq!(lookup(Theme::Dark), Ok("dark-2".to_string()));
    assert_eq!(lookup(Theme::Light), Ok("light-3".to_string()));
}

#[test]
fn themed_value_keeps_nothing_after_a_failed_lookup() {
    let mut accent = ThemedValue::<String>::new();
    assert_eq!(accent.theme(), None);
    assert!(accent.get_or_refresh(Theme::Dark, || Err("no style")).is_err());
    assert_eq!(accent.theme(), None);
    let value = accent.get_or_refresh(Theme::Dark, || Ok::<_, &str>("#fff".to_string()));
    assert_eq!(value.map(String::as_str), Ok("#fff"));
    assert_eq!(accent.theme(), Some(Theme::Dark));
}
