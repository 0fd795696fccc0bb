//! Calibration curves mapping physical quantities to duty-cycle fractions.
//!
//! Every coefficient in here is a linear-regression fit over test-track
//! measurements of the assembled car. Treat them as data, not as math to be
//! cleaned up.

/// Top speed the calibration runs covered, in cm/s.
pub const MAX_SPEED_CM_S: f64 = 71.0;

/// Largest turn angle the turning-radius fit covers, in degrees.
pub const MAX_TURN_DEGREES: i32 = 135;

/// Runs at or under this many seconds use the short-run speed curve.
const SHORT_RUN_SECS: f64 = 1.5;

/// Convert a target speed in cm/s into a duty-cycle fraction.
///
/// Two fits exist because the measured speed-to-duty-cycle relationship came
/// out different for short and long runs. The result is not clamped here;
/// clamping happens where the value is applied to a motor.
pub fn speed_to_duty_cycle(secs: f64, speed_cm_s: f64) -> f64 {
    let duty_percent = if secs <= SHORT_RUN_SECS {
        (speed_cm_s + 1.16786) / 0.720071
    } else {
        (speed_cm_s + 12.24778) / 0.95181
    };
    duty_percent / 100.0
}

/// Convert a turn angle in degrees into a duty-cycle fraction.
pub fn angle_to_duty_cycle(angle: i32) -> f64 {
    match angle {
        // measured values, more reliable than the fit at these two angles
        90 => 0.85,
        45 => 0.60,
        _ => (f64::from(angle) + 94.28571) / 224.4898,
    }
}
