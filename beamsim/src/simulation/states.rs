//! Core state types for the beam simulation.
//!
//! - `SimulationParameters` – the launch request after integer truncation
//! - `ParticleState`        – position/velocity of the electron in simulation space
//! - `Trajectory`           – positions visited, one per step
//!
//! Simulation space puts the source charge at the origin; screen coordinates
//! are recovered by adding the source position back.

use nalgebra::Vector3;
pub type NVec3 = Vector3<f64>;

/// Launch request: lateral offset (cm) and accelerating voltage (V), truncated toward zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SimulationParameters {
    pub x_cm: i64,
    pub y_cm: i64,
    pub voltage: i64,
}

impl SimulationParameters {
    /// Truncate raw front-end values. Returns `None` for NaN or infinite input,
    /// which has no integer value.
    pub fn from_raw(x_cm: f64, y_cm: f64, voltage: f64) -> Option<Self> {
        if !(x_cm.is_finite() && y_cm.is_finite() && voltage.is_finite()) {
            return None;
        }
        // `as` truncates toward zero and saturates at the i64 range.
        Some(Self {
            x_cm: x_cm as i64,
            y_cm: y_cm as i64,
            voltage: voltage as i64,
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParticleState {
    pub x: NVec3, // position (m)
    pub v: NVec3, // velocity (m/s)
}

/// Append-only record of positions, one per integration step.
#[derive(Debug, Clone, Default)]
pub struct Trajectory {
    points: Vec<NVec3>,
}

impl Trajectory {
    pub fn push(&mut self, p: NVec3) {
        self.points.push(p);
    }

    pub fn last(&self) -> Option<&NVec3> {
        self.points.last()
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn points(&self) -> &[NVec3] {
        &self.points
    }
}
