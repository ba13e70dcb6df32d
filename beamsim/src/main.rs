use beamsim::{bench_simulate, export_report, Scenario, ScenarioConfig};

use anyhow::Result;
use clap::Parser;
use log::info;

use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;

/// Electron beam toward a charged detector screen
#[derive(Parser, Debug)]
struct Args {
    /// Initial X-axis position (cm)
    #[arg(required_unless_present = "bench", allow_negative_numbers = true)]
    x_cm: Option<f64>,

    /// Initial Y-axis position (cm)
    #[arg(required_unless_present = "bench", allow_negative_numbers = true)]
    y_cm: Option<f64>,

    /// Beam accelerating voltage (V)
    #[arg(required_unless_present = "bench", allow_negative_numbers = true)]
    voltage: Option<f64>,

    /// Scenario YAML under scenarios/; built-in constants when omitted
    #[arg(short, long)]
    file_name: Option<String>,

    /// Write the trajectory as JSON lines to this path
    #[arg(long)]
    trajectory: Option<PathBuf>,

    /// Run the timing benchmark instead of a single launch
    #[arg(long)]
    bench: bool,
}

// load here to keep main clean
fn load_scenario_from_yaml(file_name: &str) -> Result<ScenarioConfig> {
    let config_path = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("scenarios").join(file_name);
    let file = File::open(&config_path)?;
    let scenario_cfg = ScenarioConfig::from_reader(BufReader::new(file))?;

    info!("loaded scenario {}", config_path.display());
    Ok(scenario_cfg)
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    if args.bench {
        bench_simulate();
        return Ok(());
    }

    let scenario_cfg = match &args.file_name {
        Some(name) => load_scenario_from_yaml(name)?,
        None => ScenarioConfig::default(),
    };
    let scenario = Scenario::build_scenario(scenario_cfg);

    // clap enforces presence unless --bench
    let (Some(x), Some(y), Some(v)) = (args.x_cm, args.y_cm, args.voltage) else {
        anyhow::bail!("X_CM, Y_CM and VOLTAGE are required");
    };

    let report = scenario.run(x, y, v);
    println!("{}", report.outcome);

    if let Some(path) = &args.trajectory {
        export_report(&report, path)?;
    }

    Ok(())
}
