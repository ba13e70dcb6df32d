//! Classification of a run and its user-facing text

use std::fmt;

/// Why a launch request was rejected before integrating
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvalidReason {
    OutOfRange,
}

impl fmt::Display for InvalidReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InvalidReason::OutOfRange => write!(f, "Parameters out of range."),
        }
    }
}

/// Result of one simulation request.
///
/// `Hit` holds the impact point: `x_cm`/`y_cm` in absolute screen
/// centimetres, `z` in simulation metres, all rounded to two decimals.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Outcome {
    Invalid(InvalidReason),
    Missed,
    Hit { x_cm: f64, y_cm: f64, z: f64 },
}

impl Outcome {
    pub fn is_hit(&self) -> bool {
        matches!(self, Outcome::Hit { .. })
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Invalid(reason) => write!(f, "Invalid input: {reason}"),
            Outcome::Missed => write!(f, "Beam did not reach the detector screen."),
            // z is in metres; the "cm" label is part of the output format.
            Outcome::Hit { x_cm, y_cm, z } => write!(
                f,
                "Beam reached the screen:\nX: {} cm\nY: {} cm\nZ: {} cm",
                ShortFloat(*x_cm),
                ShortFloat(*y_cm),
                ShortFloat(*z)
            ),
        }
    }
}

/// Round to `digits` decimals, ties resolved on the exact binary value
/// (the same result as formatting with `{:.digits$}`).
pub fn round_to(value: f64, digits: usize) -> f64 {
    format!("{value:.digits$}").parse().unwrap_or(value)
}

/// Shortest round-trip decimal that always shows a fractional part: `3.0`, `-0.49`, `-0.0`
struct ShortFloat(f64);

impl fmt::Display for ShortFloat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let v = self.0;
        if v.is_finite() && v.fract() == 0.0 {
            write!(f, "{v:.1}")
        } else {
            write!(f, "{v}")
        }
    }
}
