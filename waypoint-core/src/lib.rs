//! Route-definition recording.
//!
//! A route is described by what looks like a typed method call on its
//! handler; the call is recorded instead of executed and turned into a
//! [`Route`]: verbs, path, roles, media types, and an ordered list of
//! [`Parameter`] sources for the handler's arguments.

pub mod config;
pub mod error;
pub mod logging;
pub mod pagination;
pub mod params;
pub mod placeholder;
pub mod prelude;
pub mod recorder;
pub mod route;
pub mod routes;
pub mod target;

pub use config::{ConfigError, ConfigProperties, ConfigValue, FromConfigValue, RouterConfig};
pub use error::RouteError;
pub use logging::{init_tracing, init_tracing_with};
pub use pagination::{pagination_parameters, PaginationMetadata, Paginated};
pub use params::{Arg, ParamType, Parameter};
pub use placeholder::{extract_placeholders, has_placeholders};
pub use recorder::{classify, Classification, RecorderSettings, StandIn};
pub use route::{OnMethods, Route, RouteDescriptor, TargetEndpoint, Throwable};
pub use routes::{RouteTable, Routes, RoutingModule};
pub use target::{Target, TargetClass, TargetMethod, FINALIZE};

pub use waypoint_http;
