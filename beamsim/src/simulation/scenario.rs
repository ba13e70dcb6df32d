//! Build a ready-to-run beam scenario and answer launch requests
//!
//! A `Scenario` bundles the physical constants with an `Engine`
//! (integrator settings + Coulomb force set). `simulate` is the whole
//! request path: truncate and validate the inputs, shift them into
//! simulation space, integrate, classify.

use crate::configuration::config::ScenarioConfig;
use crate::simulation::engine::{Engine, Run, Termination};
use crate::simulation::forces::{AccelSet, CoulombSource};
use crate::simulation::outcome::{round_to, InvalidReason, Outcome};
use crate::simulation::params::{
    IntegratorSettings, PhysicalConstants, MAX_OFFSET_CM, MAX_VOLTAGE, MIN_VOLTAGE,
};
use crate::simulation::states::{NVec3, ParticleState, SimulationParameters};

/// Outcome of a request together with the run behind it (`None` when rejected)
#[derive(Debug, Clone)]
pub struct Report {
    pub outcome: Outcome,
    pub run: Option<Run>,
}

pub struct Scenario {
    pub constants: PhysicalConstants,
    pub engine: Engine,
}

impl Scenario {
    pub fn new(constants: PhysicalConstants, settings: IntegratorSettings) -> Self {
        let forces = AccelSet::new().with(CoulombSource::from(&constants));
        Self {
            constants,
            engine: Engine { settings, forces },
        }
    }

    pub fn build_scenario(cfg: ScenarioConfig) -> Self {
        Self::new(cfg.constants.into(), cfg.integrator.into())
    }

    /// Inclusive range check on the truncated inputs
    pub fn in_range(p: &SimulationParameters) -> bool {
        p.x_cm.abs() <= MAX_OFFSET_CM
            && p.y_cm.abs() <= MAX_OFFSET_CM
            && (MIN_VOLTAGE..=MAX_VOLTAGE).contains(&p.voltage)
    }

    /// Launch state in simulation space: the source charge sits at the origin
    pub fn initial_state(&self, p: &SimulationParameters) -> ParticleState {
        let c = &self.constants;
        let x = p.x_cm as f64 / 100.0 - c.source_x;
        let y = p.y_cm as f64 / 100.0 - c.source_y;
        ParticleState {
            x: NVec3::new(x, y, self.engine.settings.z_start),
            v: NVec3::new(0.0, 0.0, c.launch_speed(p.voltage as f64)),
        }
    }

    /// Map a finished run to `Missed` or `Hit`
    pub fn classify(&self, run: &Run) -> Outcome {
        if run.termination != Termination::ScreenCrossed {
            return Outcome::Missed;
        }
        let c = &self.constants;
        let p = run.final_state.x;
        let screen_x = p.x + c.source_x;
        let screen_y = p.y + c.source_y;
        let half_width = self.engine.settings.screen_half_width;
        if screen_x.abs() > half_width || screen_y.abs() > half_width {
            return Outcome::Missed;
        }
        Outcome::Hit {
            x_cm: round_to(screen_x * 100.0, 2),
            y_cm: round_to(screen_y * 100.0, 2),
            z: round_to(p.z, 2),
        }
    }

    /// Full request path, keeping the run for inspection or export
    pub fn run(&self, x_cm: f64, y_cm: f64, voltage: f64) -> Report {
        let params = match SimulationParameters::from_raw(x_cm, y_cm, voltage) {
            Some(p) if Self::in_range(&p) => p,
            _ => {
                return Report {
                    outcome: Outcome::Invalid(InvalidReason::OutOfRange),
                    run: None,
                }
            }
        };

        let run = self.engine.run(self.initial_state(&params));
        Report {
            outcome: self.classify(&run),
            run: Some(run),
        }
    }

    pub fn simulate(&self, x_cm: f64, y_cm: f64, voltage: f64) -> Outcome {
        self.run(x_cm, y_cm, voltage).outcome
    }
}

impl Default for Scenario {
    fn default() -> Self {
        Self::new(PhysicalConstants::default(), IntegratorSettings::default())
    }
}

/// Simulate one launch with the built-in detector setup
pub fn simulate(x_cm: f64, y_cm: f64, voltage: f64) -> Outcome {
    Scenario::default().simulate(x_cm, y_cm, voltage)
}
