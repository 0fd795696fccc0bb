use core::result;

use thiserror::Error;

pub type Result<T> = result::Result<T, Error>;

/// An Error that can occur in this crate
#[derive(Error, Debug)]
pub enum Error {
    #[error("{0}")]
    GpioError(#[from] rppal::gpio::Error),

    #[error("Time cannot be a negative value")]
    NegativeTime,

    #[error("Either speed or duty cycle must be specified")]
    MissingThrottle,

    #[error("Speed and duty cycle cannot both be specified")]
    ConflictingThrottle,

    #[error("Maximum speed is 71 cm/s")]
    SpeedLimit,

    #[error("Turn angles exceeding 135 degrees are not supported")]
    AngleTooLarge,

    #[error("Negative turn angles are not supported, pass a direction argument instead")]
    NegativeAngle,

    #[error("{0} is not a valid direction")]
    UnknownDirection(String),
}
