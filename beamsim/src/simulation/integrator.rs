//! Fixed-step time integrator for the single-particle beam
//!
//! Semi-implicit (symplectic) Euler: the velocity is kicked with the
//! acceleration at the old position, then the position drifts with the
//! new velocity. The order is part of the result and must not be swapped.

use super::forces::AccelSet;
use super::states::ParticleState;
use crate::error::Result;

/// Advance `state` by one step of size `dt`
/// - v_n+1 = v_n + a(x_n) * dt
/// - x_n+1 = x_n + v_n+1 * dt
pub fn semi_implicit_euler(state: &ParticleState, forces: &AccelSet, dt: f64) -> Result<ParticleState> {
    let a = forces.accumulate(&state.x)?;

    // Kick
    let v = state.v + a * dt;

    // Drift with the updated velocity
    let x = state.x + v * dt;

    Ok(ParticleState { x, v })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::simulation::forces::{Acceleration, CoulombSource};
    use crate::simulation::params::PhysicalConstants;
    use crate::simulation::states::NVec3;
    use approx::assert_relative_eq;

    struct Uniform(NVec3);

    impl Acceleration for Uniform {
        fn acceleration(&self, _x: &NVec3) -> Result<NVec3> {
            Ok(self.0)
        }
    }

    #[test]
    fn free_flight_is_linear() {
        let s0 = ParticleState {
            x: NVec3::new(0.0, 0.0, -1.0),
            v: NVec3::new(0.0, 0.0, 2.0),
        };
        let s1 = semi_implicit_euler(&s0, &AccelSet::new(), 0.25).unwrap();
        assert_eq!(s1.v, s0.v);
        assert_relative_eq!(s1.x, NVec3::new(0.0, 0.0, -0.5));
    }

    #[test]
    fn position_uses_updated_velocity() {
        let forces = AccelSet::new().with(Uniform(NVec3::new(0.0, 0.0, 4.0)));
        let s0 = ParticleState {
            x: NVec3::zeros(),
            v: NVec3::zeros(),
        };
        let s1 = semi_implicit_euler(&s0, &forces, 0.5).unwrap();
        // v1 = 0 + 4 * 0.5 = 2, x1 = 0 + 2 * 0.5 = 1 (explicit Euler would leave x at 0)
        assert_relative_eq!(s1.v.z, 2.0);
        assert_relative_eq!(s1.x.z, 1.0);
    }

    #[test]
    fn singularity_propagates() {
        let forces = AccelSet::new().with(CoulombSource::from(&PhysicalConstants::default()));
        let s0 = ParticleState {
            x: NVec3::zeros(),
            v: NVec3::new(0.0, 0.0, 1.0),
        };
        let err = semi_implicit_euler(&s0, &forces, 1e-9).unwrap_err();
        assert!(matches!(err, Error::Singularity { .. }));
    }
}
