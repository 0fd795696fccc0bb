//! The two movement commands the car understands: a timed straight drive and
//! an in-place pivot turn.
//!
//! Commands validate their inputs up front, then write both sides' duty
//! cycles and directions before the hold begins, so neither side is ever
//! left half-commanded.

use std::fmt::{Display, Formatter};
use std::str::FromStr;
use std::thread;
use std::time::Duration;

use crate::calib;
use crate::calib::{MAX_SPEED_CM_S, MAX_TURN_DEGREES};
use crate::drive::{Direction, MotorDriver, Side};
use crate::{Error, Result};

/// How long a turn command holds the pivot, in seconds.
pub const TURN_HOLD_SECS: f64 = 1.0;

/// Block for the commanded movement window.
pub fn hold(secs: f64) {
    thread::sleep(Duration::from_secs_f64(secs));
}

/// Direction of travel for a straight drive.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Heading {
    Forward,
    Backward,
}

impl FromStr for Heading {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_uppercase().as_str() {
            "F" | "FORWARD" => Ok(Heading::Forward),
            "B" | "BACKWARD" => Ok(Heading::Backward),
            _ => Err(Error::UnknownDirection(s.to_string())),
        }
    }
}

impl Display for Heading {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Heading::Forward => f.write_str("forwards"),
            Heading::Backward => f.write_str("backwards"),
        }
    }
}

impl From<Heading> for Direction {
    fn from(h: Heading) -> Self {
        match h {
            Heading::Forward => Direction::Forward,
            Heading::Backward => Direction::Backward,
        }
    }
}

/// Which way a pivot turn rotates the car.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Steer {
    Left,
    Right,
}

impl FromStr for Steer {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_uppercase().as_str() {
            "L" | "LEFT" => Ok(Steer::Left),
            "R" | "RIGHT" => Ok(Steer::Right),
            _ => Err(Error::UnknownDirection(s.to_string())),
        }
    }
}

impl Display for Steer {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Steer::Left => f.write_str("left"),
            Steer::Right => f.write_str("right"),
        }
    }
}

/// A validated straight-line drive: both sides at the same duty cycle.
pub struct MovementCommand {
    secs: f64,
    duty_cycle: f64,
    heading: Heading,
}

impl MovementCommand {
    /// Validate the raw flag values and resolve the duty cycle.
    ///
    /// Exactly one of `duty_cycle_percent` and `speed_cm_s` must be given; a
    /// speed is pushed through the calibration curve for `secs`.
    pub fn new(
        secs: f64,
        duty_cycle_percent: Option<f64>,
        speed_cm_s: Option<f64>,
        heading: Heading,
    ) -> Result<Self> {
        if secs < 0.0 || secs.is_nan() {
            return Err(Error::NegativeTime);
        }

        let duty_cycle = match (duty_cycle_percent, speed_cm_s) {
            (Some(_), Some(_)) => return Err(Error::ConflictingThrottle),
            (None, None) => return Err(Error::MissingThrottle),
            (Some(percent), None) => percent / 100.0,
            (None, Some(speed)) if speed > MAX_SPEED_CM_S => return Err(Error::SpeedLimit),
            (None, Some(speed)) => calib::speed_to_duty_cycle(secs, speed),
        };

        Ok(Self {
            secs,
            duty_cycle,
            heading,
        })
    }

    pub fn duty_cycle(&self) -> f64 {
        self.duty_cycle
    }

    /// Put both sides into the commanded state, duty cycles first.
    pub fn apply<D: MotorDriver>(&self, driver: &mut D) -> Result<()> {
        let direction = Direction::from(self.heading);
        driver.set_duty_cycle(Side::Left, self.duty_cycle)?;
        driver.set_duty_cycle(Side::Right, self.duty_cycle)?;
        driver.set_direction(Side::Left, direction)?;
        driver.set_direction(Side::Right, direction)?;
        Ok(())
    }

    /// Apply and hold for the commanded time. No stop is issued afterwards;
    /// the driver keeps the last state when the process exits.
    pub fn run<D: MotorDriver>(&self, driver: &mut D) -> Result<()> {
        println!("moving {}", self.heading);
        self.apply(driver)?;
        hold(self.secs);
        Ok(())
    }
}

/// A validated in-place turn.
pub struct TurnCommand {
    angle: i32,
    steer: Steer,
}

impl TurnCommand {
    pub fn new(angle: i32, steer: Steer) -> Result<Self> {
        if angle > MAX_TURN_DEGREES {
            return Err(Error::AngleTooLarge);
        }
        if angle < 0 {
            return Err(Error::NegativeAngle);
        }
        Ok(Self { angle, steer })
    }

    pub fn duty_cycle(&self) -> f64 {
        calib::angle_to_duty_cycle(self.angle)
    }

    /// Pivot turn: the inside wheel holds still while the outside wheel
    /// drives forward at the computed duty cycle.
    pub fn apply<D: MotorDriver>(&self, driver: &mut D) -> Result<()> {
        let duty_cycle = self.duty_cycle();
        match self.steer {
            Steer::Left => {
                driver.set_duty_cycle(Side::Left, 0.0)?;
                driver.set_duty_cycle(Side::Right, duty_cycle)?;
                driver.set_direction(Side::Left, Direction::Stop)?;
                driver.set_direction(Side::Right, Direction::Forward)?;
            }
            Steer::Right => {
                driver.set_duty_cycle(Side::Left, duty_cycle)?;
                driver.set_duty_cycle(Side::Right, 0.0)?;
                driver.set_direction(Side::Left, Direction::Forward)?;
                driver.set_direction(Side::Right, Direction::Stop)?;
            }
        }
        Ok(())
    }

    pub fn run<D: MotorDriver>(&self, driver: &mut D) -> Result<()> {
        println!("turning {}", self.steer);
        self.apply(driver)?;
        hold(TURN_HOLD_SECS);
        Ok(())
    }
}
