//! Particle field animation for the folio hero.
//!
//! A fixed set of particles drifts across a dot canvas sized to its
//! container. The field is generated once from a seeded random source and
//! owned by a [`FieldAnimator`], which redraws it on every frame the host
//! scheduler grants and cancels its pending frame when stopped.

mod animator;
mod canvas;
mod chars;
mod color;
mod particle;

pub use animator::{AnimatorError, FieldAnimator};
pub use canvas::{Canvas2d, DotCanvas, DotSurface, Surface};
pub use color::hsl_to_rgb;
pub use particle::{FieldSettings, Particle, ParticleField};
