//! Force / acceleration contributors for the beam engine
//!
//! Defines the acceleration trait, the set that sums terms, and the
//! Coulomb field of a fixed point charge sitting at the simulation origin

use crate::error::{Error, Result};
use crate::simulation::params::PhysicalConstants;
use crate::simulation::states::NVec3;

/// Trait for acceleration sources acting on a single particle at position `x`
pub trait Acceleration {
    fn acceleration(&self, x: &NVec3) -> Result<NVec3>;
}

/// Collection of acceleration terms
/// Each term implements [`Acceleration`] and their contributions are summed
pub struct AccelSet {
    terms: Vec<Box<dyn Acceleration + Send + Sync>>,
}

impl AccelSet {
    /// Create an empty acceleration set
    pub fn new() -> Self {
        Self { terms: Vec::new() }
    }

    /// Add an acceleration term
    pub fn with(mut self, term: impl Acceleration + Send + Sync + 'static) -> Self {
        self.terms.push(Box::new(term));
        self
    }

    /// Total acceleration at `x`, or the first term's error
    pub fn accumulate(&self, x: &NVec3) -> Result<NVec3> {
        let mut total = NVec3::zeros();
        for term in &self.terms {
            total += term.acceleration(x)?;
        }
        Ok(total)
    }
}

impl Default for AccelSet {
    fn default() -> Self {
        Self::new()
    }
}

/// Coulomb force of a fixed point charge at the origin on the moving particle,
/// expressed as acceleration: a = k·Q·q·r / m / |r|³
///
/// No softening: a particle exactly on the charge is reported as
/// [`Error::Singularity`] instead of producing inf/NaN.
pub struct CoulombSource {
    pub k: f64,
    pub source_charge: f64, // Q
    pub charge: f64,        // q
    pub mass: f64,          // m
}

impl From<&PhysicalConstants> for CoulombSource {
    fn from(c: &PhysicalConstants) -> Self {
        Self {
            k: c.k,
            source_charge: c.source_charge,
            charge: c.charge,
            mass: c.mass,
        }
    }
}

impl Acceleration for CoulombSource {
    fn acceleration(&self, x: &NVec3) -> Result<NVec3> {
        // |r|^2, summed x, y, z in order
        let r2 = x.x * x.x + x.y * x.y + x.z * x.z;
        if r2 == 0.0 {
            return Err(Error::Singularity { distance: 0.0 });
        }
        let r3 = r2.powf(1.5);

        // k·Q·q is grouped first; per component (kQq·r_i / m) / |r|^3
        let kqq = self.k * self.source_charge * self.charge;
        let a = x.map(|r_i| kqq * r_i / self.mass / r3);

        if a.iter().any(|c| !c.is_finite()) {
            return Err(Error::Singularity {
                distance: r2.sqrt(),
            });
        }
        Ok(a)
    }
}
