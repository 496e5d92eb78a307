use std::fmt;
use std::io;

/// Things that can go wrong at the edges of the lab: reading configuration
/// and writing output. The session itself cannot fail.
#[derive(Debug)]
pub enum LabError {
    /// Reading a configuration file failed
    Io(io::Error),
    /// Configuration or output JSON was malformed
    Json(serde_json::Error),
    /// A configuration value is outside what the session can run with
    InvalidConfig(String),
}

impl fmt::Display for LabError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LabError::Io(error) => write!(f, "I/O error: {error}"),
            LabError::Json(error) => write!(f, "JSON error: {error}"),
            LabError::InvalidConfig(reason) => write!(f, "Invalid configuration: {reason}"),
        }
    }
}

impl std::error::Error for LabError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            LabError::Io(error) => Some(error),
            LabError::Json(error) => Some(error),
            LabError::InvalidConfig(_) => None,
        }
    }
}

impl From<io::Error> for LabError {
    fn from(error: io::Error) -> Self {
        LabError::Io(error)
    }
}

impl From<serde_json::Error> for LabError {
    fn from(error: serde_json::Error) -> Self {
        LabError::Json(error)
    }
}
