/*
[INPUT]:  Crate modules and public type definitions
[OUTPUT]: Public UQPAY SDK crate surface
[POS]:    Crate root - module wiring
[UPDATE]: When public modules or exports change
*/

pub mod banking;
pub mod client;
pub mod configuration;
pub mod connect;
pub mod http;
pub mod issuing;
pub mod supporting;
pub mod types;

pub use client::UqpayClient;
pub use configuration::{Configuration, Environment};

// Re-export commonly used types from http
pub use http::{
    ApiBase,
    ApiClient,
    ApiError,
    ClientConfig,
    Credentials,
    RequestContext,
    Result,
    UqpayError,
};

// Re-export all types
pub use types::*;
