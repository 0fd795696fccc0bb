use clap::Parser;
use git_version::git_version;

use rover::calib;
use rover::calib::MAX_TURN_DEGREES;
use rover::command::{hold, TURN_HOLD_SECS};
use rover::drive::{Direction, Drivetrain, MotorDriver, Side};
use rover::{Error, Result};

const GIT_VERSION: &str = git_version!(fallback = "0.1.0");

/// Test script: pivot the car left for one second.
///
/// Cruder than the finished `turn` binary, this pokes the driver directly
/// and only checks the upper angle bound.
#[derive(Parser)]
#[clap(name = "turn-left-test", version = GIT_VERSION)]
struct Opts {
    /// Amount in degrees to turn the car left
    #[clap(short, long)]
    turn: i32,

    /// PWM frequency for both sides, in Hz
    #[clap(short, long, default_value = "1000")]
    frequency: f64,

    /// BCM pin wired to IN1 on the L298N (left side forward)
    #[clap(long, default_value = "24")]
    left_fwd_pin: u8,

    /// BCM pin wired to IN2 on the L298N (left side backward)
    #[clap(long, default_value = "23")]
    left_back_pin: u8,

    /// BCM pin wired to ENA on the L298N (left side duty cycle)
    #[clap(long, default_value = "13")]
    left_pwm_pin: u8,

    /// BCM pin wired to IN3 on the L298N (right side forward)
    #[clap(long, default_value = "27")]
    right_fwd_pin: u8,

    /// BCM pin wired to IN4 on the L298N (right side backward)
    #[clap(long, default_value = "22")]
    right_back_pin: u8,

    /// BCM pin wired to ENB on the L298N (right side duty cycle)
    #[clap(long, default_value = "19")]
    right_pwm_pin: u8,
}

fn main() -> Result<()> {
    let opts: Opts = Opts::parse();

    if opts.turn > MAX_TURN_DEGREES {
        return Err(Error::AngleTooLarge);
    }
    let duty_cycle = calib::angle_to_duty_cycle(opts.turn);

    let mut driver = Drivetrain::new(
        opts.frequency,
        opts.left_fwd_pin,
        opts.left_back_pin,
        opts.left_pwm_pin,
        opts.right_fwd_pin,
        opts.right_back_pin,
        opts.right_pwm_pin,
    )?;

    driver.set_duty_cycle(Side::Left, 0.0)?;
    driver.set_duty_cycle(Side::Right, duty_cycle)?;
    driver.set_direction(Side::Left, Direction::Stop)?;
    driver.set_direction(Side::Right, Direction::Forward)?;
    hold(TURN_HOLD_SECS);

    Ok(())
}
