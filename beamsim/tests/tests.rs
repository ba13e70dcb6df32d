use beamsim::simulation::params::{IntegratorSettings, PhysicalConstants};
use beamsim::simulation::scenario::{simulate, Scenario};
use beamsim::simulation::states::SimulationParameters;
use beamsim::{Outcome, ScenarioConfig, Termination};

use std::fs::File;
use std::io::BufReader;

const INVALID: &str = "Invalid input: Parameters out of range.";
const MISSED: &str = "Beam did not reach the detector screen.";

/// Built-in setup with a different step cap
pub fn capped_scenario(max_steps: u64) -> Scenario {
    Scenario::new(
        PhysicalConstants::default(),
        IntegratorSettings {
            max_steps,
            ..Default::default()
        },
    )
}

/// Force-free toy setup: charge on the beam axis, v0 = 2 m/s at 10 V, dz = 0.5 m per step
pub fn on_axis_scenario() -> Scenario {
    let constants = PhysicalConstants {
        mass: 5.0,
        charge: -1.0,
        k: 0.0,
        source_x: 0.0,
        source_y: 0.0,
        source_charge: -1.0,
    };
    let settings = IntegratorSettings {
        dt: 0.25,
        z_start: -1.0,
        z_screen: 0.5,
        screen_half_width: 0.5,
        max_steps: 100,
    };
    Scenario::new(constants, settings)
}

// ==================================================================================
// Scenario file tests
// ==================================================================================

#[test]
fn bundled_scenario_matches_built_in_defaults() {
    let file = File::open(concat!(env!("CARGO_MANIFEST_DIR"), "/scenarios/default.yaml")).unwrap();
    let cfg = ScenarioConfig::from_reader(BufReader::new(file)).unwrap();
    assert_eq!(cfg, ScenarioConfig::default());

    let scenario = Scenario::build_scenario(cfg);
    assert_eq!(
        scenario.simulate(0.0, 0.0, 1000.0).to_string(),
        "Beam reached the screen:\nX: -0.49 cm\nY: 0.16 cm\nZ: 0.5 cm"
    );
}

// ==================================================================================
// Validation tests
// ==================================================================================

#[test]
fn out_of_range_offset_is_invalid() {
    assert_eq!(simulate(25.0, 0.0, 500.0).to_string(), INVALID);
    assert_eq!(simulate(0.0, -21.0, 500.0).to_string(), INVALID);
}

#[test]
fn out_of_range_voltage_is_invalid() {
    assert_eq!(simulate(0.0, 0.0, 5.0).to_string(), INVALID);
    assert_eq!(simulate(0.0, 0.0, 10001.0).to_string(), INVALID);
}

#[test]
fn invalid_input_runs_no_step() {
    let report = Scenario::default().run(25.0, 0.0, 500.0);
    assert!(report.run.is_none());
}

#[test]
fn bounds_are_inclusive() {
    for (x, y, v) in [(20.0, 20.0, 10000.0), (-20.0, -20.0, 10.0)] {
        let p = SimulationParameters::from_raw(x, y, v).unwrap();
        assert!(Scenario::in_range(&p), "{x}, {y}, {v} rejected");
    }
}

#[test]
fn inputs_truncate_toward_zero() {
    let p = SimulationParameters::from_raw(20.9, -20.9, 9.99).unwrap();
    assert_eq!(
        p,
        SimulationParameters {
            x_cm: 20,
            y_cm: -20,
            voltage: 9
        }
    );
    // 9.99 V truncates to 9 V
    assert_eq!(simulate(0.0, 0.0, 9.99).to_string(), INVALID);
    // 20.9 cm truncates to 20 cm
    assert_eq!(
        simulate(20.9, -20.9, 10000.7),
        simulate(20.0, -20.0, 10000.0)
    );
}

#[test]
fn non_finite_input_is_invalid() {
    assert_eq!(simulate(f64::NAN, 0.0, 100.0).to_string(), INVALID);
    assert_eq!(simulate(0.0, 0.0, f64::INFINITY).to_string(), INVALID);
}

// ==================================================================================
// Initial state tests
// ==================================================================================

#[test]
fn launch_speed_from_energy_conservation() {
    let scenario = Scenario::default();
    let c = scenario.constants;
    for v in [10, 11, 500, 1000, 9999, 10000] {
        let p = SimulationParameters {
            x_cm: 0,
            y_cm: 0,
            voltage: v,
        };
        let s = scenario.initial_state(&p);
        let expected = (2.0 * c.charge * v as f64 / c.mass).abs().sqrt();
        assert_eq!(s.v.z, expected);
        assert_eq!(s.v.x, 0.0);
        assert_eq!(s.v.y, 0.0);
    }
}

#[test]
fn launch_position_is_shifted_to_the_charge() {
    let scenario = Scenario::default();
    let p = SimulationParameters {
        x_cm: 7,
        y_cm: -2,
        voltage: 100,
    };
    let s = scenario.initial_state(&p);
    assert_eq!(s.x.x, 0.07 - 0.068);
    assert_eq!(s.x.y, -0.02 - -0.022);
    assert_eq!(s.x.z, -500.0);
}

// ==================================================================================
// Reference trajectories
// ==================================================================================

#[test]
fn on_axis_1000_volts_hits() {
    let report = Scenario::default().run(0.0, 0.0, 1000.0);
    assert_eq!(
        report.outcome.to_string(),
        "Beam reached the screen:\nX: -0.49 cm\nY: 0.16 cm\nZ: 0.5 cm"
    );
    let run = report.run.unwrap();
    assert_eq!(run.termination, Termination::ScreenCrossed);
    assert_eq!(run.steps, 26686);
}

#[test]
fn reference_hits() {
    let cases = [
        ((20.0, 20.0, 10000.0), "X: 20.01 cm\nY: 20.01 cm\nZ: 0.51 cm"),
        ((-20.0, -20.0, 10.0), "X: -31.09 cm\nY: -27.37 cm\nZ: 0.5 cm"),
        ((7.0, -2.0, 1000.0), "X: 14.77 cm\nY: 5.77 cm\nZ: 0.5 cm"),
        ((10.0, 5.0, 100.0), "X: 11.91 cm\nY: 9.3 cm\nZ: 0.5 cm"),
    ];
    for ((x, y, v), coords) in cases {
        let out = simulate(x, y, v);
        assert!(out.is_hit(), "({x}, {y}, {v}) -> {out}");
        assert_eq!(out.to_string(), format!("Beam reached the screen:\n{coords}"));
    }
}

#[test]
fn hit_fields_are_rounded() {
    match simulate(20.0, 20.0, 10000.0) {
        Outcome::Hit { x_cm, y_cm, z } => {
            assert_eq!(x_cm, 20.01);
            assert_eq!(y_cm, 20.01);
            assert_eq!(z, 0.51);
        }
        other => panic!("expected a hit, got {other:?}"),
    }
}

#[test]
fn slow_beam_near_axis_is_turned_back() {
    let report = Scenario::default().run(7.0, -2.0, 10.0);
    assert_eq!(report.outcome, Outcome::Missed);
    let run = report.run.unwrap();
    assert_eq!(run.termination, Termination::Reversed);
    assert!(!run.is_forward());
    assert!(run.final_state.x.z < 0.0);
}

#[test]
fn slow_beam_deflected_off_screen() {
    let report = Scenario::default().run(0.0, 0.0, 10.0);
    assert_eq!(report.outcome.to_string(), MISSED);
    let run = report.run.unwrap();
    // reaches the screen plane, but beyond 50 cm laterally
    assert_eq!(run.termination, Termination::ScreenCrossed);
    assert!((run.final_state.x.x + 0.068).abs() > 0.5);
}

// ==================================================================================
// Loop invariants
// ==================================================================================

#[test]
fn deterministic() {
    let scenario = Scenario::default();
    let a = scenario.run(-3.0, 12.0, 250.0);
    let b = scenario.run(-3.0, 12.0, 250.0);
    assert_eq!(a.outcome, b.outcome);
    let (ra, rb) = (a.run.unwrap(), b.run.unwrap());
    assert_eq!(ra.steps, rb.steps);
    assert_eq!(ra.final_state, rb.final_state);
}

#[test]
fn z_strictly_increases_while_forward() {
    let run = Scenario::default().run(5.0, 5.0, 5000.0).run.unwrap();
    assert_eq!(run.termination, Termination::ScreenCrossed);
    let points = run.trajectory.points();
    assert!(points[0].z > run.initial.x.z);
    for w in points.windows(2) {
        assert!(w[1].z > w[0].z);
    }
    assert_eq!(points.len() as u64, run.steps);
    assert_eq!(*run.trajectory.last().unwrap(), run.final_state.x);
}

#[test]
fn reversal_is_the_only_non_increasing_step() {
    let run = Scenario::default().run(7.0, -2.0, 10.0).run.unwrap();
    let points = run.trajectory.points();
    let n = points.len();
    for w in points[..n - 1].windows(2) {
        assert!(w[1].z > w[0].z);
    }
    assert!(points[n - 1].z <= points[n - 2].z);
}

#[test]
fn iteration_cap_ends_as_miss() {
    let report = capped_scenario(1000).run(0.0, 0.0, 1000.0);
    assert_eq!(report.outcome, Outcome::Missed);
    let run = report.run.unwrap();
    assert_eq!(run.termination, Termination::CapReached);
    assert_eq!(run.steps, 1001);
    assert!(run.final_state.x.z < 0.5);
}

#[test]
fn landing_on_the_charge_is_a_miss() {
    let report = on_axis_scenario().run(0.0, 0.0, 10.0);
    assert_eq!(report.outcome, Outcome::Missed);
    let run = report.run.unwrap();
    assert_eq!(run.termination, Termination::Singular);
    // z: -1.0 -> -0.5 -> 0.0, then the force at the origin is undefined
    assert_eq!(run.steps, 2);
    assert_eq!(run.final_state.x.z, 0.0);
}
