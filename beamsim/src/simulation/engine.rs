//! Integration loop and its termination state machine
//!
//! One running state, four terminal transitions. Each transition is its
//! own predicate, checked after every step:
//! - `Reversed`      – z stopped increasing (turned back by the source charge)
//! - `ScreenCrossed` – z passed the screen plane
//! - `CapReached`    – the step counter went past `max_steps`
//! - `Singular`      – the force could not be evaluated (particle on the charge)

use log::{debug, warn};

use super::forces::AccelSet;
use super::integrator::semi_implicit_euler;
use super::params::IntegratorSettings;
use super::states::{ParticleState, Trajectory};

/// Why the loop stopped
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Termination {
    ScreenCrossed,
    CapReached,
    Reversed,
    Singular,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopState {
    Running,
    Terminated(Termination),
}

/// z_new past the screen plane
pub fn crossed_screen(z_new: f64, z_screen: f64) -> bool {
    z_new > z_screen
}

/// Counter beyond the cap; the loop runs while `steps <= max_steps`
pub fn cap_reached(steps: u64, max_steps: u64) -> bool {
    steps > max_steps
}

/// No forward progress in z. A NaN coordinate also counts as reversed.
pub fn reversed(z_old: f64, z_new: f64) -> bool {
    !(z_new > z_old)
}

/// Transition out of `Running` after a step from `old` to `new`
pub fn next_state(old: &ParticleState, new: &ParticleState, steps: u64, settings: &IntegratorSettings) -> LoopState {
    if reversed(old.x.z, new.x.z) {
        LoopState::Terminated(Termination::Reversed)
    } else if crossed_screen(new.x.z, settings.z_screen) {
        LoopState::Terminated(Termination::ScreenCrossed)
    } else if cap_reached(steps, settings.max_steps) {
        LoopState::Terminated(Termination::CapReached)
    } else {
        LoopState::Running
    }
}

/// Everything one integration run produced
#[derive(Debug, Clone)]
pub struct Run {
    pub initial: ParticleState,
    pub final_state: ParticleState,
    pub trajectory: Trajectory,
    pub steps: u64,
    pub termination: Termination,
}

impl Run {
    /// Whether z was still increasing on the last step
    pub fn is_forward(&self) -> bool {
        !matches!(self.termination, Termination::Reversed | Termination::Singular)
    }
}

/// Runtime engine: numerical settings plus the active force set
pub struct Engine {
    pub settings: IntegratorSettings,
    pub forces: AccelSet,
}

impl Engine {
    /// Integrate from `initial` until a terminal transition fires
    pub fn run(&self, initial: ParticleState) -> Run {
        debug!(
            "run start: x = {:?} m, v = {:?} m/s, dt = {:e} s",
            initial.x.as_slice(),
            initial.v.as_slice(),
            self.settings.dt
        );

        let mut trajectory = Trajectory::default();
        let mut old = initial;
        let mut steps: u64 = 0;

        let termination = loop {
            let new = match semi_implicit_euler(&old, &self.forces, self.settings.dt) {
                Ok(s) => s,
                Err(e) => {
                    warn!("run stopped after {steps} steps: {e}");
                    break Termination::Singular;
                }
            };
            trajectory.push(new.x);
            steps += 1;

            let state = next_state(&old, &new, steps, &self.settings);
            old = new;
            if let LoopState::Terminated(t) = state {
                break t;
            }
        };

        debug!(
            "run end: {:?} after {} steps, z = {} m",
            termination, steps, old.x.z
        );

        Run {
            initial,
            final_state: old,
            trajectory,
            steps,
            termination,
        }
    }
}
