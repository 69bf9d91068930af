//! Particle generation and motion.

use folio_core::{AnimationSpeed, Rgb};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

/// Colour used when a field is generated with an empty palette.
const FALLBACK_COLOR: Rgb = Rgb(255, 255, 255);

/// A single drifting point.
#[derive(Debug, Clone, PartialEq)]
pub struct Particle {
    /// Horizontal position as a fraction of the container width.
    pub x: f32,
    /// Vertical position as a fraction of the container height.
    pub y: f32,
    /// Horizontal velocity, in fractions of the width per frame.
    pub vx: f32,
    /// Vertical velocity, in fractions of the height per frame.
    pub vy: f32,
    /// Radius in logical units (cell widths).
    pub radius: f32,
    pub color: Rgb,
}

/// Parameters for generating a [`ParticleField`].
#[derive(Debug, Clone, PartialEq)]
pub struct FieldSettings {
    pub count: usize,
    pub palette: Vec<Rgb>,
    pub opacity: f32,
    /// Velocity components are drawn from `±max_speed / 2`.
    pub max_speed: f32,
    pub min_radius: f32,
    pub radius_spread: f32,
}

impl Default for FieldSettings {
    fn default() -> Self {
        Self {
            count: 100,
            palette: vec![Rgb(59, 130, 246), Rgb(168, 85, 247), Rgb(34, 197, 94)],
            opacity: 0.8,
            max_speed: 0.0006,
            min_radius: 0.25,
            radius_spread: 0.6,
        }
    }
}

/// The fixed collection of particles owned by one animator.
///
/// The count never changes after generation; only positions and the sign of
/// velocities do.
#[derive(Debug, Clone)]
pub struct ParticleField {
    particles: Vec<Particle>,
    opacity: f32,
    /// Multiplier applied to every velocity when stepping.
    speed_scale: f32,
}

impl ParticleField {
    /// Generate a field from the given random source.
    pub fn generate<R: Rng + ?Sized>(settings: &FieldSettings, rng: &mut R) -> Self {
        let particles = (0..settings.count)
            .map(|_| Particle {
                x: rng.gen_range(0.0..1.0),
                y: rng.gen_range(0.0..1.0),
                vx: (rng.gen_range(0.0..1.0) - 0.5) * settings.max_speed,
                vy: (rng.gen_range(0.0..1.0) - 0.5) * settings.max_speed,
                radius: settings.min_radius + rng.gen_range(0.0..1.0) * settings.radius_spread,
                color: settings
                    .palette
                    .choose(rng)
                    .copied()
                    .unwrap_or(FALLBACK_COLOR),
            })
            .collect();

        Self {
            particles,
            opacity: settings.opacity.clamp(0.0, 1.0),
            speed_scale: 1.0,
        }
    }

    /// Generate a reproducible field from a seed.
    pub fn seeded(settings: &FieldSettings, seed: u64) -> Self {
        Self::generate(settings, &mut StdRng::seed_from_u64(seed))
    }

    /// Build a field from explicit particles.
    pub fn from_particles(particles: Vec<Particle>, opacity: f32) -> Self {
        Self {
            particles,
            opacity: opacity.clamp(0.0, 1.0),
            speed_scale: 1.0,
        }
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

    pub fn opacity(&self) -> f32 {
        self.opacity
    }

    /// Scale all motion by the given animation speed.
    pub fn set_speed(&mut self, speed: AnimationSpeed) {
        self.speed_scale = speed.velocity_scale();
    }

    /// Advance every particle by one frame.
    ///
    /// A particle that leaves the unit square keeps its position and turns
    /// back: the offending velocity component is pointed inwards, so the
    /// particle re-enters on the next step.
    pub fn step(&mut self) {
        let scale = self.speed_scale;
        for p in &mut self.particles {
            p.x += p.vx * scale;
            p.y += p.vy * scale;

            if p.x < 0.0 {
                p.vx = p.vx.abs();
            } else if p.x > 1.0 {
                p.vx = -p.vx.abs();
            }
            if p.y < 0.0 {
                p.vy = p.vy.abs();
            } else if p.y > 1.0 {
                p.vy = -p.vy.abs();
            }
        }
    }
}
