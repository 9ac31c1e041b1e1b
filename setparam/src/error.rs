//! Error types for setparam

use std::path::PathBuf;

use thiserror::Error;

/// Message shown for every malformed command line.
pub const USAGE: &str = "Please provide the parameters to change, as key=val";

/// Command-line argument errors. All of them display as the usage message.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ArgsError {
    #[error("{}", USAGE)]
    MissingSeparator(String),

    #[error("{}", USAGE)]
    EmptyKey(String),

    #[error("{}", USAGE)]
    NoParameters,
}

impl ArgsError {
    /// The offending argument, if there was one.
    pub fn argument(&self) -> Option<&str> {
        match self {
            ArgsError::MissingSeparator(arg) | ArgsError::EmptyKey(arg) => Some(arg.as_str()),
            ArgsError::NoParameters => None,
        }
    }
}

#[derive(Error, Debug)]
pub enum SetParamError {
    #[error(transparent)]
    Usage(#[from] ArgsError),

    #[error("Configuration file not found: {0}")]
    TargetNotFound(PathBuf),

    #[error("Failed to {op} {path}: {source}")]
    Io {
        path: PathBuf,
        op: &'static str,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to replace {path}: {source}")]
    Persist {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, SetParamError>;

impl SetParamError {
    /// Process exit status for this error: 1 for usage errors, 2 otherwise.
    pub fn exit_code(&self) -> i32 {
        match self {
            SetParamError::Usage(_) => 1,
            _ => 2,
        }
    }

    pub(crate) fn io(path: impl Into<PathBuf>, op: &'static str, source: std::io::Error) -> Self {
        SetParamError::Io {
            path: path.into(),
            op,
            source,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_args_errors_display_usage() {
        assert_eq!(ArgsError::NoParameters.to_string(), USAGE);
        assert_eq!(ArgsError::MissingSeparator("foo".into()).to_string(), USAGE);
        assert_eq!(ArgsError::EmptyKey("=1".into()).to_string(), USAGE);
    }

    #[test]
    fn test_exit_codes() {
        let usage: SetParamError = ArgsError::NoParameters.into();
        assert_eq!(usage.exit_code(), 1);
        assert_eq!(usage.to_string(), USAGE);

        let missing = SetParamError::TargetNotFound(PathBuf::from("prifi_simul.toml"));
        assert_eq!(missing.exit_code(), 2);
        assert_eq!(
            missing.to_string(),
            "Configuration file not found: prifi_simul.toml"
        );
    }

    #[test]
    fn test_argument_accessor() {
        assert_eq!(ArgsError::MissingSeparator("foo".into()).argument(), Some("foo"));
        assert_eq!(ArgsError::NoParameters.argument(), None);
    }
}
