use thiserror::Error;

/// Crate-wide result type alias.
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for configuration loading, integration and export.
///
/// Out-of-range user input is not an error here: it is reported as
/// [`crate::Outcome::Invalid`] so the caller always gets a printable result.
#[derive(Debug, Error)]
pub enum Error {
    /// Invalid configuration value (non-finite, non-positive, inconsistent geometry).
    #[error("invalid parameter: {0}")]
    InvalidParam(String),

    /// Particle landed on the source charge, or the force evaluated to a non-finite value.
    #[error("coulomb singularity at |r| = {distance:e} m")]
    Singularity { distance: f64 },

    /// Propagated I/O errors (scenario files, trajectory export).
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Malformed scenario YAML.
    #[error(transparent)]
    Yaml(#[from] serde_yaml::Error),

    /// Trajectory serialization failure.
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}
