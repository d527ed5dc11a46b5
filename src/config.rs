//! Site-wide tunables. Every component receives the `SiteConfig` it was
//! started with instead of reaching for module-level constants.

use std::f64::consts::PI;
use std::str::FromStr;

/// Tunables for every component on the page.
#[derive(Clone, Debug, PartialEq)]
pub struct SiteConfig {
    /// `localStorage` key holding the theme preference.
    pub theme_storage_key: String,
    /// Attribute on `<html>` that mirrors the preference.
    pub theme_attribute: String,
    /// CSS custom property used for particles and progress rings.
    pub accent_property: String,

    /// Added to `scrollY` before looking up the active region.
    pub scroll_offset: f64,

    /// Viewport area (px²) per particle.
    pub particle_density: f64,
    /// Velocity components are drawn from `[-particle_speed, particle_speed]`.
    pub particle_speed: f64,
    pub particle_radius_min: f64,
    pub particle_radius_max: f64,

    pub indicator_threshold: f64,
    pub ring_delay_ms: i32,
    pub counter_delay_ms: i32,
    pub counter_duration_ms: f64,
    pub ring_radius: f64,

    pub reveal_threshold: f64,
    pub card_stagger_ms: i32,

    /// Cosmetic "executing" delay in the playground.
    pub playground_latency_ms: i32,

    /// Half the glow element's size; the glow is centred on the pointer.
    pub glow_offset: f64,

    pub log_level: log::Level,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            theme_storage_key: "theme".to_string(),
            theme_attribute: "data-theme".to_string(),
            accent_property: "--primary-color".to_string(),
            scroll_offset: 100.0,
            particle_density: 15_000.0,
            particle_speed: 0.25,
            particle_radius_min: 1.0,
            particle_radius_max: 3.0,
            indicator_threshold: 0.5,
            ring_delay_ms: 300,
            counter_delay_ms: 500,
            counter_duration_ms: 3_000.0,
            ring_radius: 52.0,
            reveal_threshold: 0.1,
            card_stagger_ms: 100,
            playground_latency_ms: 500,
            glow_offset: 10.0,
            log_level: log::Level::Info,
        }
    }
}

impl SiteConfig {
    /// Circumference of the progress ring.
    pub fn ring_circumference(&self) -> f64 {
        2.0 * PI * self.ring_radius
    }

    /// Apply overrides read from `data-*` attributes on the root element.
    ///
    /// `lookup` receives the camel-cased dataset key (`particleDensity`,
    /// `logLevel`). Values that fail to parse are logged and ignored.
    pub fn apply_overrides<F>(mut self, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(raw) = lookup("particleDensity") {
            match raw.trim().parse::<f64>() {
                Ok(v) if v > 0.0 => self.particle_density = v,
                _ => log::warn!("ignoring data-particle-density={raw:?}"),
            }
        }
        if let Some(raw) = lookup("logLevel") {
            match log::Level::from_str(raw.trim()) {
                Ok(level) => self.log_level = level,
                Err(_) => log::warn!("ignoring data-log-level={raw:?}"),
            }
        }
        self
    }
}
