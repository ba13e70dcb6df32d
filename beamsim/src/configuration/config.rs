//! Configuration types for loading simulation scenarios from YAML.
//!
//! A scenario carries the physical constants of the beam setup and the
//! numerical settings of the integrator:
//!
//! - [`ConstantsConfig`]  – particle mass/charge, Coulomb constant, source charge and its position
//! - [`IntegratorConfig`] – time step, start plane, screen plane and width, step cap
//! - [`ScenarioConfig`]   – top-level wrapper used to load a scenario from YAML
//!
//! Every field has a default, so an empty document (or a missing section)
//! reproduces the built-in detector setup.
//!
//! # YAML format
//!
//! ```yaml
//! constants:
//!   mass: 9.1093837e-31        # kg, electron
//!   charge: -1.6021766e-19     # C, electron
//!   k: 8.99e9                  # Coulomb constant
//!   source_x: 0.068            # m, fixed charge position (x)
//!   source_y: -0.022           # m, fixed charge position (y)
//!   source_charge: -81.0e-12   # C
//!
//! integrator:
//!   dt: 1.0e-9                 # s
//!   z_start: -500.0            # m, launch plane (simulation space)
//!   z_screen: 0.5              # m, screen plane (simulation space)
//!   screen_half_width: 0.5     # m, |x|,|y| acceptance on the screen
//!   max_steps: 10000000        # iteration cap
//! ```

use serde::Deserialize;

use crate::error::{Error, Result};

/// Physical constants of the beam setup
#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct ConstantsConfig {
    pub mass: f64,          // particle mass (kg)
    pub charge: f64,        // particle charge (C), negative for an electron
    pub k: f64,             // Coulomb constant
    pub source_x: f64,      // fixed charge x position (m)
    pub source_y: f64,      // fixed charge y position (m)
    pub source_charge: f64, // fixed charge magnitude (C)
}

impl Default for ConstantsConfig {
    fn default() -> Self {
        Self {
            mass: 9.1093837e-31,
            charge: -1.6021766e-19,
            k: 8.99e9,
            source_x: 0.068,
            source_y: -0.022,
            source_charge: -81e-12,
        }
    }
}

/// Numerical settings of the fixed-step integrator
#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct IntegratorConfig {
    pub dt: f64,                // time step (s)
    pub z_start: f64,           // launch plane in simulation space (m)
    pub z_screen: f64,          // screen plane in simulation space (m)
    pub screen_half_width: f64, // lateral acceptance of the screen (m)
    pub max_steps: u64,         // iteration cap
}

impl Default for IntegratorConfig {
    fn default() -> Self {
        Self {
            dt: 1e-9,
            z_start: -500.0,
            z_screen: 0.5,
            screen_half_width: 0.5,
            max_steps: 10_000_000,
        }
    }
}

/// Top-level scenario configuration loaded from YAML.
#[derive(Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct ScenarioConfig {
    pub constants: ConstantsConfig,   // physical constants
    pub integrator: IntegratorConfig, // numerical settings
}

impl ScenarioConfig {
    /// Parse a scenario from any YAML reader and validate it.
    pub fn from_reader<R: std::io::Read>(reader: R) -> Result<Self> {
        let cfg: ScenarioConfig = serde_yaml::from_reader(reader)?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Reject values the integrator cannot run with.
    pub fn validate(&self) -> Result<()> {
        let c = &self.constants;
        let finite = [
            ("mass", c.mass),
            ("charge", c.charge),
            ("k", c.k),
            ("source_x", c.source_x),
            ("source_y", c.source_y),
            ("source_charge", c.source_charge),
        ];
        for (name, value) in finite {
            if !value.is_finite() {
                return Err(Error::InvalidParam(format!("{name} must be finite")));
            }
        }
        if c.mass <= 0.0 {
            return Err(Error::InvalidParam("mass must be > 0".into()));
        }

        let i = &self.integrator;
        if !i.dt.is_finite() || i.dt <= 0.0 {
            return Err(Error::InvalidParam("dt must be finite and > 0".into()));
        }
        if !i.screen_half_width.is_finite() || i.screen_half_width <= 0.0 {
            return Err(Error::InvalidParam(
                "screen_half_width must be finite and > 0".into(),
            ));
        }
        if !i.z_start.is_finite() || !i.z_screen.is_finite() || i.z_start >= i.z_screen {
            return Err(Error::InvalidParam(
                "z_start must be finite and upstream of z_screen".into(),
            ));
        }
        if i.max_steps == 0 {
            return Err(Error::InvalidParam("max_steps must be > 0".into()));
        }
        Ok(())
    }
}
