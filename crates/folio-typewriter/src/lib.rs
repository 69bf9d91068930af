//! Typewriter caption for the folio hero.
//!
//! [`Typewriter`] is the pure state machine: it types a phrase one character
//! per tick, erases it again, and moves on to the next phrase forever.
//! [`TypewriterLoop`] drives it from the host's single-shot timers and writes
//! each new caption to a [`TextOutput`].

mod component;
mod machine;

pub use component::{TextOutput, Timing, TypewriterLoop};
pub use machine::{Direction, Typewriter, TypewriterError};
