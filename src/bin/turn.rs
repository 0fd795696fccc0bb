use clap::Parser;
use git_version::git_version;

use rover::command::{Steer, TurnCommand};
use rover::drive::Drivetrain;
use rover::Result;

const GIT_VERSION: &str = git_version!(fallback = "0.1.0");

/// Turn the car in place by pivoting on one side.
///
/// The inside wheels stay stopped while the outside wheels drive forward at
/// a duty cycle fitted from turning-radius tests.
#[derive(Parser)]
#[clap(name = "turn", version = GIT_VERSION)]
struct Opts {
    /// Amount in degrees to turn the car, 0 to 135
    #[clap(short, long)]
    angle: i32,

    /// The direction the car is to turn, "L"/"Left" or "R"/"Right"
    #[clap(short, long)]
    direction: Steer,

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

    let command = TurnCommand::new(opts.angle, opts.direction)?;

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
