use clap::Parser;
use git_version::git_version;

use rover::command::{Heading, MovementCommand};
use rover::drive::Drivetrain;
use rover::Result;

const GIT_VERSION: &str = git_version!(fallback = "0.1.0");

/// Drive the car in a straight line for a fixed amount of time.
///
/// Drive strength is given either directly as a PWM duty cycle or as a
/// target speed in cm/s, which goes through the calibration curves.
#[derive(Parser)]
#[clap(name = "drive", version = GIT_VERSION)]
struct Opts {
    /// Amount of time in seconds the car is to move
    #[clap(short, long)]
    time: f64,

    /// The direction the car is to move, "F"/"Forward" or "B"/"Backward"
    #[clap(short, long)]
    direction: Heading,

    /// Duty cycle to drive the car at, as a percentage
    #[clap(long)]
    duty_cycle: Option<f64>,

    /// Speed to drive the car at, in cm/s
    #[clap(short, long)]
    speed: Option<f64>,

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

    let command = MovementCommand::new(opts.time, opts.duty_cycle, opts.speed, opts.direction)?;
    println!(
        "time: {}s, commanded duty cycle: {:.3}%",
        opts.time,
        command.duty_cycle() * 100.0
    );

    let mut driver = Drivetrain::new(
        opts.frequency,
        opts.left_fwd_pin,
        opts.left_back_pin,
        opts.left_pwm_pin,
        opts.right_fwd_pin,
        opts.right_back_pin,
        opts.right_pwm_pin,
    )?;

    command.run(&mut driver)
}
