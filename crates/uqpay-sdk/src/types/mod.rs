/*
[INPUT]:  API schema definitions and serde requirements
[OUTPUT]: Typed Rust structs/enums with serialization support
[POS]:    Data layer - type definitions for API communication
[UPDATE]: When API schema changes or new types added
*/

pub mod banking;
pub mod common;
pub mod connect;
pub mod enums;
pub mod issuing;
pub mod serde_helpers;
pub mod supporting;

pub use banking::*;
pub use common::*;
pub use connect::*;
pub use enums::*;
pub use issuing::*;
pub use supporting::*;
