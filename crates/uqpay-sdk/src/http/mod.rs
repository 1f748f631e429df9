/*
[INPUT]:  SDK configuration and resource request paths/bodies
[OUTPUT]: HTTP responses and typed API results
[POS]:    HTTP layer - REST API communication
[UPDATE]: When adding new transport features or changing client behavior
*/

pub mod client;
pub mod context;
pub mod error;
pub(crate) mod query;

pub use client::{ApiBase, ApiClient, ClientConfig, Credentials};
pub use context::RequestContext;
pub use error::{ApiError, Result, UqpayError};
pub(crate) use error::ResultExt;
