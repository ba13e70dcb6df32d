//! Physical constants and numerical settings for the simulation
//!
//! `PhysicalConstants` holds the fixed beam setup:
//! - particle mass and charge (`mass`, `charge`),
//! - Coulomb constant `k`,
//! - the fixed source charge `source_charge` and its position on the screen plane.
//!
//! `IntegratorSettings` holds the stepping and termination numbers.
//!
//! Both are immutable bundles handed to the engine; nothing here is global state.

use crate::configuration::config::{ConstantsConfig, IntegratorConfig};

/// Inclusive lateral launch limit (cm)
pub const MAX_OFFSET_CM: i64 = 20;
/// Inclusive accelerating voltage range (V)
pub const MIN_VOLTAGE: i64 = 10;
pub const MAX_VOLTAGE: i64 = 10_000;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PhysicalConstants {
    pub mass: f64,          // kg
    pub charge: f64,        // C
    pub k: f64,             // Coulomb constant
    pub source_x: f64,      // m
    pub source_y: f64,      // m
    pub source_charge: f64, // C
}

impl PhysicalConstants {
    /// Speed gained from rest through `voltage`, from q·V = ½·m·v².
    /// The absolute value keeps the root real whatever the sign convention of `charge`.
    pub fn launch_speed(&self, voltage: f64) -> f64 {
        (2.0 * self.charge * voltage / self.mass).abs().sqrt()
    }
}

impl Default for PhysicalConstants {
    fn default() -> Self {
        ConstantsConfig::default().into()
    }
}

impl From<ConstantsConfig> for PhysicalConstants {
    fn from(c: ConstantsConfig) -> Self {
        Self {
            mass: c.mass,
            charge: c.charge,
            k: c.k,
            source_x: c.source_x,
            source_y: c.source_y,
            source_charge: c.source_charge,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IntegratorSettings {
    pub dt: f64,                // step size (s)
    pub z_start: f64,           // launch plane (m)
    pub z_screen: f64,          // screen plane (m)
    pub screen_half_width: f64, // lateral acceptance (m)
    pub max_steps: u64,         // iteration cap
}

impl Default for IntegratorSettings {
    fn default() -> Self {
        IntegratorConfig::default().into()
    }
}

impl From<IntegratorConfig> for IntegratorSettings {
    fn from(c: IntegratorConfig) -> Self {
        Self {
            dt: c.dt,
            z_start: c.z_start,
            z_screen: c.z_screen,
            screen_half_width: c.screen_half_width,
            max_steps: c.max_steps,
        }
    }
}
