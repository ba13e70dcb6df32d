use std::time::Instant;

use crate::simulation::scenario::Scenario;

/// Low voltages are slow (~2.7e5 steps at 10 V), so sample them sparsely
const VOLTAGES: [i64; 10] = [10, 20, 50, 100, 200, 500, 1000, 2000, 5000, 10000];

/// Time `scenario.run` on the beam axis for each voltage
/// Returns one `(V, steps, ms)` row per voltage
pub fn bench_rows(scenario: &Scenario, voltages: &[i64]) -> Vec<(i64, u64, f64)> {
    // Warm up
    let _warmup = scenario.run(0.0, 0.0, 10000.0);

    voltages
        .iter()
        .map(|&v| {
            let t0 = Instant::now();
            let report = scenario.run(0.0, 0.0, v as f64);
            let ms = t0.elapsed().as_secs_f64() * 1000.0;

            let steps = report.run.as_ref().map_or(0, |r| r.steps);
            (v, steps, ms)
        })
        .collect()
}

/// Time `simulate` on the beam axis across the voltage range
/// Paste output directly into excel to graph
pub fn bench_simulate() {
    let scenario = Scenario::default();

    println!("V,steps,ms");
    for (v, steps, ms) in bench_rows(&scenario, &VOLTAGES) {
        println!("{},{},{:.3}", v, steps, ms);
    }
}
