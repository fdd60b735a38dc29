use std::fmt;

use crate::config::ConfigError;

/// Errors raised while building routes.
///
/// All of them happen at route-table assembly time; a descriptor that
/// produced one is discarded, not repaired.
#[derive(Debug)]
pub enum RouteError {
    /// No stand-in could be built for the target type.
    ProxyConstruction { target: &'static str, reason: String },
    /// The descriptor already holds a recorded invocation.
    DoubleRecording { path: String, method: String },
    /// The invoked method is not part of the target's method table.
    UnknownMethod { target: &'static str, method: String },
    /// The invocation passed a different number of arguments than the method declares.
    ArityMismatch {
        method: String,
        expected: usize,
        found: usize,
    },
    /// Declared parameters that no unset argument slot consumed.
    UnconsumedParameters { method: String, names: Vec<String> },
    /// A non-error route was frozen without a path.
    EmptyPath,
    /// A non-error route was frozen without any HTTP verb.
    MissingMethods { path: String },
    /// A route was frozen before its target method was recorded.
    NotRecorded { path: String },
    Config(ConfigError),
}

impl fmt::Display for RouteError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RouteError::ProxyConstruction { target, reason } => {
                write!(f, "Cannot create a stand-in for `{target}`: {reason}")
            }
            RouteError::DoubleRecording { path, method } => write!(
                f,
                "Route '{path}' already recorded an invocation; refusing to record `{method}`"
            ),
            RouteError::UnknownMethod { target, method } => {
                write!(f, "`{target}` has no method named `{method}`")
            }
            RouteError::ArityMismatch {
                method,
                expected,
                found,
            } => write!(
                f,
                "`{method}` takes {expected} argument(s) but was invoked with {found}"
            ),
            RouteError::UnconsumedParameters { method, names } => write!(
                f,
                "`{method}` left declared parameter(s) unconsumed: {}",
                names.join(", ")
            ),
            RouteError::EmptyPath => write!(f, "Route has an empty path"),
            RouteError::MissingMethods { path } => {
                write!(f, "Route '{path}' does not declare any HTTP method")
            }
            RouteError::NotRecorded { path } => {
                write!(f, "Route '{path}' has no recorded target invocation")
            }
            RouteError::Config(err) => write!(f, "{err}"),
        }
    }
}

impl std::error::Error for RouteError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            RouteError::Config(err) => Some(err),
            _ => None,
        }
    }
}

impl From<ConfigError> for RouteError {
    fn from(err: ConfigError) -> Self {
        RouteError::Config(err)
    }
}
