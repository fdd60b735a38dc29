//! Waypoint: declare HTTP routes by recording typed handler calls.
//!
//! This facade re-exports the Waypoint sub-crates through a single
//! dependency:
//!
//! ```ignore
//! use waypoint::prelude::*;
//! ```
//!
//! | Crate            | Contents                                              |
//! |------------------|-------------------------------------------------------|
//! | `waypoint-core`  | route descriptors, parameters, recorder, config        |
//! | `waypoint-http`  | request methods, media types, consumers, error values |

pub extern crate waypoint_core;
pub extern crate waypoint_http;

pub use waypoint_core::*;

pub use waypoint_http::{
    ConsumeError, Consumer, ErrorResponse, ErrorResponseImpl, JsonConsumer, MediaType,
    RequestMethod, StatusCode, UnsupportedMethod,
};

pub mod prelude {
    //! Re-exports the core prelude plus the HTTP collaborator traits.
    pub use waypoint_core::prelude::*;
    pub use waypoint_http::{Consumer, ErrorResponse, ErrorResponseImpl, JsonConsumer};
}
