use std::fmt;

use solar_sim::ConfigError;

/// Failures at the boundary between the page and the simulation.
#[derive(Debug)]
pub enum HostError {
    /// A command from the page was not valid `PlayerCommand` JSON.
    Command(serde_json::Error),
    /// Stored progress could not be parsed.
    Progress(serde_json::Error),
    /// A snapshot or record failed to serialize.
    Serialize(serde_json::Error),
    /// The host configuration was rejected.
    Config(ConfigError),
    /// An export was called before `solar_start`.
    NotStarted,
}

impl fmt::Display for HostError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Command(e) => write!(f, "invalid command: {e}"),
            Self::Progress(e) => write!(f, "invalid progress record: {e}"),
            Self::Serialize(e) => write!(f, "serialization failed: {e}"),
            Self::Config(e) => write!(f, "invalid configuration: {e}"),
            Self::NotStarted => write!(f, "simulation not started"),
        }
    }
}

impl std::error::Error for HostError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Command(e) | Self::Progress(e) | Self::Serialize(e) => Some(e),
            Self::Config(e) => Some(e),
            Self::NotStarted => None,
        }
    }
}

impl From<ConfigError> for HostError {
    fn from(e: ConfigError) -> Self {
        Self::Config(e)
    }
}
