//! Trajectory export as JSON lines, one object per integration step.

use std::fs::OpenOptions;
use std::io::{BufWriter, Write};
use std::path::Path;

use log::info;
use serde::Serialize;

use crate::error::Result;
use crate::simulation::engine::Run;
use crate::simulation::scenario::Report;

#[derive(Serialize, Debug, PartialEq)]
pub struct TrajectoryPoint {
    pub step: u64,
    pub x: f64, // m, simulation space
    pub y: f64,
    pub z: f64,
}

/// Write every position of `run` to `writer`, one JSON object per line
pub fn write_trajectory<W: Write>(run: &Run, writer: W) -> Result<()> {
    let mut writer = BufWriter::new(writer);
    for (i, p) in run.trajectory.points().iter().enumerate() {
        let point = TrajectoryPoint {
            step: i as u64 + 1,
            x: p.x,
            y: p.y,
            z: p.z,
        };
        let line = serde_json::to_string(&point)?;
        writeln!(writer, "{line}")?;
    }
    writer.flush()?;
    Ok(())
}

// Will delete the contents of the file if it already exists
pub fn write_trajectory_jsonl(run: &Run, path: &Path) -> Result<()> {
    let file = OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .open(path)?;
    write_trajectory(run, file)
}

/// Export the run behind `report` to `path`. Returns `false`, writing
/// nothing, when the request was rejected and no run exists.
pub fn export_report(report: &Report, path: &Path) -> Result<bool> {
    let Some(run) = &report.run else {
        info!("no trajectory written to {}: request was rejected", path.display());
        return Ok(false);
    };
    write_trajectory_jsonl(run, path)?;
    info!("wrote {} trajectory points to {}", run.trajectory.len(), path.display());
    Ok(true)
}
