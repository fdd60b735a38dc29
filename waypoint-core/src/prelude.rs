//! Waypoint prelude: everything needed to declare routes with one `use`.
//!
//! ```ignore
//! use waypoint_core::prelude::*;
//!
//! struct Cars;
//!
//! impl Target for Cars {
//!     fn methods() -> Vec<TargetMethod> {
//!         vec![TargetMethod::new("find").param(ParamType::String)]
//!     }
//! }
//!
//! let mut routes = Routes::new();
//! routes
//!     .route()
//!     .set_path("/cars/{id}")
//!     .on([RequestMethod::Get])
//!     .to::<Cars>()?
//!     .invoke("find", args!["{id}"])?;
//! let table = routes.build()?;
//! ```

pub use crate::args;
pub use crate::config::{ConfigProperties, RouterConfig};
pub use crate::error::RouteError;
pub use crate::pagination::Paginated;
pub use crate::params::{Arg, ParamType, Parameter};
pub use crate::recorder::{RecorderSettings, StandIn};
pub use crate::route::{Route, RouteDescriptor, Throwable};
pub use crate::routes::{RouteTable, Routes, RoutingModule};
pub use crate::target::{Target, TargetMethod};
pub use waypoint_http::{MediaType, RequestMethod};
