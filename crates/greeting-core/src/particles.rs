//! Ambient floating-heart particles.
//!
//! Each particle's parameters are drawn once when the field is built and
//! never again; re-rolling on re-render would make the field jump every
//! time unrelated state changes.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Number of particles in a field.
pub const PARTICLE_COUNT: usize = 36;

/// Height a particle rises over one cycle, in pixels.
pub const RISE_PIXELS: f64 = 220.0;

/// Opacity keyframes over one cycle, evenly spaced.
const OPACITY_KEYFRAMES: [f64; 4] = [0.0, 1.0, 1.0, 0.0];

/// One decorative particle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Particle {
    /// Horizontal position as a percentage of the field width, 0–100.
    pub horizontal_position: f64,
    /// Delay before the first cycle starts, 0–4 seconds.
    pub start_delay_seconds: f64,
    /// Edge length, 12–30 pixels.
    pub size_pixels: f64,
    /// Duration of one rise, 6–9 seconds.
    pub cycle_seconds: f64,
}

/// A sampled point of a particle's animation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParticleFrame {
    /// Vertical offset from the baseline (negative is up).
    pub offset_y: f64,
    pub opacity: f64,
}

impl Particle {
    fn random<R: Rng>(rng: &mut R) -> Self {
        Self {
            horizontal_position: rng.random_range(0.0..=100.0),
            start_delay_seconds: rng.random_range(0.0..=4.0),
            size_pixels: rng.random_range(12.0..=30.0),
            cycle_seconds: rng.random_range(6.0..=9.0),
        }
    }

    /// Samples the looping animation `elapsed_seconds` after the field
    /// appeared. Hidden at the baseline until the start delay has passed.
    pub fn frame_at(&self, elapsed_seconds: f64) -> ParticleFrame {
        let t = elapsed_seconds - self.start_delay_seconds;
        if t < 0.0 {
            return ParticleFrame {
                offset_y: 0.0,
                opacity: 0.0,
            };
        }
        let progress = (t % self.cycle_seconds) / self.cycle_seconds;
        ParticleFrame {
            offset_y: -RISE_PIXELS * ease_out(progress),
            opacity: opacity_at(progress),
        }
    }

    /// Inline CSS binding this particle to the `float-up` keyframes.
    pub fn inline_style(&self) -> String {
        format!(
            "left: {:.2}%; width: {:.1}px; height: {:.1}px; font-size: {:.1}px; \
             animation-delay: {:.2}s; animation-duration: {:.2}s;",
            self.horizontal_position,
            self.size_pixels,
            self.size_pixels,
            self.size_pixels,
            self.start_delay_seconds,
            self.cycle_seconds,
        )
    }
}

/// Quadratic ease-out.
fn ease_out(t: f64) -> f64 {
    1.0 - (1.0 - t) * (1.0 - t)
}

/// Opacity at linear cycle progress. The rise spans a single keyframe pair,
/// so its easing covers the whole cycle; opacity eases within each segment.
fn opacity_at(progress: f64) -> f64 {
    let segments = (OPACITY_KEYFRAMES.len() - 1) as f64;
    let pos = progress.clamp(0.0, 1.0) * segments;
    let i = (pos.floor() as usize).min(OPACITY_KEYFRAMES.len() - 2);
    let local = ease_out(pos - i as f64);
    OPACITY_KEYFRAMES[i] + (OPACITY_KEYFRAMES[i + 1] - OPACITY_KEYFRAMES[i]) * local
}

/// Fixed-size set of particles, randomized once at construction.
#[derive(Debug, Clone, PartialEq)]
pub struct ParticleField {
    particles: Vec<Particle>,
}

impl ParticleField {
    /// Builds a field from the thread-local RNG.
    pub fn new() -> Self {
        Self::from_rng(&mut rand::rng())
    }

    /// Builds a reproducible field.
    pub fn with_seed(seed: u64) -> Self {
        Self::from_rng(&mut StdRng::seed_from_u64(seed))
    }

    pub fn from_rng<R: Rng>(rng: &mut R) -> Self {
        let particles = (0..PARTICLE_COUNT).map(|_| Particle::random(rng)).collect();
        Self { particles }
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }
}

impl Default for ParticleField {
    fn default() -> Self {
        Self::new()
    }
}
