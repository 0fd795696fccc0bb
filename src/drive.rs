use std::fmt::{Display, Formatter};

use rppal::gpio::{Gpio, OutputPin};

use Direction::*;

use crate::Result;

/// One of the two independently driven motor groups of the car.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Side {
    Left,
    Right,
}

/// Spin state of one side of the drivetrain.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Direction {
    Forward,
    Backward,
    Stop,
}

impl Display for Direction {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Forward => f.write_str("Forward"),
            Backward => f.write_str("Backward"),
            Stop => f.write_str("Stop"),
        }
    }
}

/// The motor-driver contract: synchronous, fire-and-forget writes, one call
/// per side.
pub trait MotorDriver {
    fn set_direction(&mut self, side: Side, direction: Direction) -> Result<()>;

    /// Apply a duty cycle to one side. Values outside [0, 1] are clamped.
    fn set_duty_cycle(&mut self, side: Side, duty_cycle: f64) -> Result<()>;
}

/// Clamp a duty cycle into [0, 1]. In-range values pass through unchanged.
pub fn clamp_unit(value: f64) -> f64 {
    if value < 0.0 {
        0.0
    } else if value > 1.0 {
        1.0
    } else {
        value
    }
}

/// Both sides of the L298N, as rppal output pins.
///
/// Per side: two direction inputs on the bridge and one enable pin carrying
/// a software PWM signal for drive strength.
pub struct Drivetrain {
    left: MotorSide,
    right: MotorSide,
}

struct MotorSide {
    fwd: OutputPin,
    back: OutputPin,
    pwm: OutputPin,
    frequency: f64,
}

impl MotorSide {
    fn new(fwd: u8, back: u8, pwm: u8, frequency: f64) -> Result<Self> {
        let mut fwd = Gpio::new()?.get(fwd)?.into_output_low();
        let mut back = Gpio::new()?.get(back)?.into_output_low();
        let mut pwm = Gpio::new()?.get(pwm)?.into_output_low();

        // no stop on exit: the bridge keeps the last commanded state
        fwd.set_reset_on_drop(false);
        back.set_reset_on_drop(false);
        pwm.set_reset_on_drop(false);

        Ok(Self {
            fwd,
            back,
            pwm,
            frequency,
        })
    }

    fn set_direction(&mut self, direction: Direction) {
        match direction {
            Forward => {
                self.fwd.set_high();
                self.back.set_low();
            }
            Backward => {
                self.fwd.set_low();
                self.back.set_high();
            }
            Stop => {
                self.fwd.set_low();
                self.back.set_low();
            }
        }
    }

    fn set_duty_cycle(&mut self, duty_cycle: f64) -> Result<()> {
        self.pwm
            .set_pwm_frequency(self.frequency, clamp_unit(duty_cycle))?;
        Ok(())
    }
}

impl Drivetrain {
    pub fn new(
        frequency: f64,
        left_fwd: u8,
        left_back: u8,
        left_pwm: u8,
        right_fwd: u8,
        right_back: u8,
        right_pwm: u8,
    ) -> Result<Self> {
        Ok(Self {
            left: MotorSide::new(left_fwd, left_back, left_pwm, frequency)?,
            right: MotorSide::new(right_fwd, right_back, right_pwm, frequency)?,
        })
    }

    fn side(&mut self, side: Side) -> &mut MotorSide {
        match side {
            Side::Left => &mut self.left,
            Side::Right => &mut self.right,
        }
    }
}

impl MotorDriver for Drivetrain {
    fn set_direction(&mut self, side: Side, direction: Direction) -> Result<()> {
        self.side(side).set_direction(direction);
        Ok(())
    }

    fn set_duty_cycle(&mut self, side: Side, duty_cycle: f64) -> Result<()> {
        self.side(side).set_duty_cycle(duty_cycle)
    }
}
