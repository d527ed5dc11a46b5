//! Decorative particle field drifting behind the page.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Particle {
    pub x: f64,
    pub y: f64,
    pub vx: f64,
    pub vy: f64,
    pub radius: f64,
}

/// Creation parameters for a field.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FieldParams {
    /// Viewport area (px²) per particle.
    pub density: f64,
    pub max_speed: f64,
    pub radius_min: f64,
    pub radius_max: f64,
}

impl Default for FieldParams {
    fn default() -> Self {
        Self {
            density: 15_000.0,
            max_speed: 0.25,
            radius_min: 1.0,
            radius_max: 3.0,
        }
    }
}

impl From<&crate::config::SiteConfig> for FieldParams {
    fn from(cfg: &crate::config::SiteConfig) -> Self {
        Self {
            density: cfg.particle_density,
            max_speed: cfg.particle_speed,
            radius_min: cfg.particle_radius_min,
            radius_max: cfg.particle_radius_max,
        }
    }
}

/// `floor(width * height / density)`; zero for degenerate viewports.
pub fn particle_count(width: f64, height: f64, density: f64) -> usize {
    if width <= 0.0 || height <= 0.0 || density <= 0.0 {
        return 0;
    }
    (width * height / density).floor() as usize
}

pub struct ParticleField<R = SmallRng> {
    width: f64,
    height: f64,
    params: FieldParams,
    particles: Vec<Particle>,
    rng: R,
}

impl ParticleField<SmallRng> {
    /// Field seeded from the platform entropy source.
    pub fn from_entropy(width: f64, height: f64, params: FieldParams) -> Self {
        Self::new(width, height, params, SmallRng::from_entropy())
    }
}

impl<R: Rng> ParticleField<R> {
    pub fn new(width: f64, height: f64, params: FieldParams, rng: R) -> Self {
        let mut field = Self {
            width,
            height,
            params,
            particles: Vec::new(),
            rng,
        };
        field.populate();
        field
    }

    /// Adopt new viewport dimensions. The whole set is regenerated; existing
    /// particles are discarded rather than rescaled.
    pub fn resize(&mut self, width: f64, height: f64) {
        self.width = width;
        self.height = height;
        self.populate();
    }

    fn populate(&mut self) {
        let count = particle_count(self.width, self.height, self.params.density);
        let FieldParams {
            max_speed,
            radius_min,
            radius_max,
            ..
        } = self.params;
        self.particles.clear();
        self.particles.reserve(count);
        for _ in 0..count {
            let p = Particle {
                x: self.rng.gen::<f64>() * self.width,
                y: self.rng.gen::<f64>() * self.height,
                vx: (self.rng.gen::<f64>() * 2.0 - 1.0) * max_speed,
                vy: (self.rng.gen::<f64>() * 2.0 - 1.0) * max_speed,
                radius: radius_min + self.rng.gen::<f64>() * (radius_max - radius_min),
            };
            self.particles.push(p);
        }
        log::debug!(
            "particle field {}x{}: {} particles",
            self.width,
            self.height,
            self.particles.len()
        );
    }

    /// Advance one frame. A particle that crosses an edge has that velocity
    /// component negated and is pulled back onto the edge.
    pub fn step(&mut self) {
        let (w, h) = (self.width, self.height);
        for p in &mut self.particles {
            p.x += p.vx;
            p.y += p.vy;
            if p.x < 0.0 || p.x > w {
                p.vx = -p.vx;
                p.x = p.x.clamp(0.0, w);
            }
            if p.y < 0.0 || p.y > h {
                p.vy = -p.vy;
                p.y = p.y.clamp(0.0, h);
            }
        }
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn height(&self) -> f64 {
        self.height
    }
}
