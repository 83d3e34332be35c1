//! Decorative drifting particles behind the hero banner.
//!
//! Thirty particles are spawned once with randomized position, size,
//! drift period, start offset, and opacity, then loop forever along a
//! fixed four-leg drift path. The field is purely cosmetic: it ignores
//! input and nothing else reads it.

use std::time::Duration;

use rand::Rng;

/// Number of particles in the field.
pub const PARTICLE_COUNT: usize = 30;

/// Drift path waypoints in (columns, rows), relative to the particle's
/// home position. The path starts and ends at the origin so the loop
/// seam is invisible.
const DRIFT_PATH: [(f64, f64); 5] = [
    (0.0, 0.0),
    (1.0, -1.0),
    (-1.0, -0.5),
    (0.5, -1.5),
    (0.0, 0.0),
];

/// One decorative particle.
#[derive(Debug, Clone)]
pub struct Particle {
    /// Horizontal home position as a fraction of the banner width.
    pub x_pct: f64,
    /// Vertical home position as a fraction of the banner height.
    pub y_pct: f64,
    /// Visual size in the range `[2.0, 6.0)`, mapped to a glyph.
    pub size: f64,
    /// Opacity in the range `[0.2, 0.7)`, mapped to dimming.
    pub opacity: f64,
    /// Full drift loop duration, 10-30s.
    pub period: Duration,
    /// Start offset into the loop, 0-5s, so particles desynchronize.
    pub phase_offset: Duration,
    elapsed: Duration,
}

impl Particle {
    /// Current drift offset in (columns, rows) from the home position.
    ///
    /// Interpolates between the waypoints of the drift path with a
    /// smoothstep ease per leg.
    #[must_use]
    pub fn drift_offset(&self) -> (f64, f64) {
        let period = self.period.as_secs_f64();
        if period <= 0.0 {
            return (0.0, 0.0);
        }
        let t = ((self.elapsed + self.phase_offset).as_secs_f64() % period) / period;
        let legs = (DRIFT_PATH.len() - 1) as f64;
        let scaled = t * legs;
        let leg = (scaled as usize).min(DRIFT_PATH.len() - 2);
        let local = scaled - leg as f64;
        let eased = local * local * (3.0 - 2.0 * local);
        let (x0, y0) = DRIFT_PATH[leg];
        let (x1, y1) = DRIFT_PATH[leg + 1];
        (x0 + (x1 - x0) * eased, y0 + (y1 - y0) * eased)
    }

    /// Glyph for this particle's size bucket.
    #[must_use]
    pub fn glyph(&self) -> &'static str {
        if self.size < 3.0 {
            "·"
        } else if self.size < 4.5 {
            "•"
        } else {
            "●"
        }
    }
}

/// The full particle field.
#[derive(Debug, Clone)]
pub struct ParticleField {
    particles: Vec<Particle>,
}

impl ParticleField {
    /// Spawns the field with the default particle count and a
    /// thread-local RNG.
    #[must_use]
    pub fn new() -> Self {
        Self::spawn_with(&mut rand::rng(), PARTICLE_COUNT)
    }

    /// Spawns `count` particles from `rng`.
    ///
    /// Kept separate from [`Self::new`] so tests can seed the RNG.
    #[must_use]
    pub fn spawn_with<R: Rng>(rng: &mut R, count: usize) -> Self {
        let particles = (0..count)
            .map(|_| Particle {
                x_pct: rng.random_range(0.0..1.0),
                y_pct: rng.random_range(0.0..1.0),
                size: rng.random_range(2.0..6.0),
                opacity: rng.random_range(0.2..0.7),
                period: Duration::from_secs_f64(rng.random_range(10.0..30.0)),
                phase_offset: Duration::from_secs_f64(rng.random_range(0.0..5.0)),
                elapsed: Duration::ZERO,
            })
            .collect();
        Self { particles }
    }

    /// Advances every particle's drift clock by `dt`.
    pub fn advance(&mut self, dt: Duration) {
        for particle in &mut self.particles {
            particle.elapsed += dt;
        }
    }

    /// The particles in spawn order.
    #[must_use]
    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }
}

impl Default for ParticleField {
    fn default() -> Self {
        Self::new()
    }
}
