//! Command-line motor control for a small two-motor differential-drive car.
//!
//! Each binary under `src/bin` is a standalone procedure: parse flags, work
//! out a duty cycle, put the H-bridge into the commanded state, hold, exit.

pub mod calib;
pub mod command;
pub mod drive;
pub mod error;

pub use error::{Error, Result};
