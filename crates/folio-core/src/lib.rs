//! Core types for the folio portfolio.
//!
//! Shared by every folio crate: colours and themes, the logical geometry of a
//! drawing surface, and the host scheduling facilities that drive the
//! animated components.

mod color;
mod geometry;
mod schedule;
mod theme;

pub use color::{ParseRgbError, Rgb};
pub use geometry::{PixelDensity, Size};
pub use schedule::{FrameRequest, FrameScheduler, HostScheduler, TimerId, Timers, Wakeup};
pub use theme::{AnimationSpeed, ColorTheme};
