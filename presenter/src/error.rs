use std::{error::Error, fmt, io};

/// The presenter's result type.
pub type Result<T> = std::result::Result<T, ConfigErr>;

/// Failures while assembling the presenter's configuration.
#[derive(Debug)]
pub enum ConfigErr {
    Io {
        path: String,
        source: io::Error,
    },
    Json(serde_json::Error),
    InvalidVar {
        key: &'static str,
        value: String,
    },
    InvalidField {
        field: &'static str,
        reason: String,
    },
}

impl fmt::Display for ConfigErr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigErr::Io { path, source } => write!(f, "cannot read '{path}': {source}"),
            ConfigErr::Json(e) => write!(f, "invalid JSON: {e}"),
            ConfigErr::InvalidVar { key, value } => {
                write!(f, "invalid value for {key}: '{value}'")
            }
            ConfigErr::InvalidField { field, reason } => write!(f, "invalid {field}: {reason}"),
        }
    }
}

impl Error for ConfigErr {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            ConfigErr::Io { source, .. } => Some(source),
            ConfigErr::Json(e) => Some(e),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for ConfigErr {
    fn from(value: serde_json::Error) -> Self {
        Self::Json(value)
    }
}

/// Boundary conversion for `main`.
impl From<ConfigErr> for io::Error {
    fn from(value: ConfigErr) -> Self {
        match value {
            ConfigErr::Io { source, .. } => source,
            other => io::Error::new(io::ErrorKind::InvalidInput, other),
        }
    }
}
