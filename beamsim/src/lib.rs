pub mod simulation;
pub mod configuration;
pub mod benchmark;
pub mod export;
pub mod error;

pub use simulation::states::{NVec3, ParticleState, SimulationParameters, Trajectory};
pub use simulation::params::{IntegratorSettings, PhysicalConstants};
pub use simulation::forces::{Acceleration, AccelSet, CoulombSource};
pub use simulation::integrator::semi_implicit_euler;
pub use simulation::engine::{Engine, LoopState, Run, Termination};
pub use simulation::outcome::{InvalidReason, Outcome};
pub use simulation::scenario::{simulate, Report, Scenario};

pub use configuration::config::{ConstantsConfig, IntegratorConfig, ScenarioConfig};

pub use export::trajectory::{export_report, write_trajectory, write_trajectory_jsonl};

pub use benchmark::benchmark::{bench_rows, bench_simulate};

pub use error::{Error, Result};
