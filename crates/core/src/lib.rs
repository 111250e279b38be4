//! Request construction for the Flapjack monitoring API.
//!
//! This crate turns a named [`Operation`] and its arguments into a
//! [`RequestDescriptor`]: arguments are validated against declarative
//! [`ParameterSpec`]s, rendered (timestamps as ISO-8601), percent-escaped,
//! and assembled into a path plus query string or form body. It performs no
//! I/O; see `diner-client` for the HTTP side.
//!
//! ```
//! use chrono::{TimeZone, Utc};
//! use diner_core::{EndpointConfig, Operation, TimeWindow};
//!
//! let endpoint = EndpointConfig::parse("flapjack.example.com").unwrap();
//! let op = Operation::Outages {
//!     entity: "host1".into(),
//!     window: TimeWindow::new().start_time(Utc.with_ymd_and_hms(2011, 8, 1, 0, 0, 0).unwrap()),
//! };
//! let request = op.request().unwrap();
//! assert_eq!(
//!     request.uri(&endpoint),
//!     "http://flapjack.example.com:80/outages/host1?start_time=2011-08-01T00%3A00%3A00Z"
//! );
//! ```

pub mod endpoint;
pub mod error;
pub mod operation;
pub mod param;
pub mod request;
pub mod value;

pub use endpoint::{EndpointConfig, Scheme};
pub use error::Error;
pub use operation::{Operation, TimeWindow};
pub use param::{EncodedParameter, ParamKind, ParameterSpec, encode, escape, validate};
pub use request::{Method, RequestDescriptor, assemble};
pub use value::{Iso8601, ParamValue, Timestamp};
