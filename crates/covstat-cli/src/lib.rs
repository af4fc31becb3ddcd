//! Library components of the covstat CLI.
//!
//! The pipeline stages live here so integration tests can drive them
//! without spawning the binary.

pub mod logging;
pub mod pipeline;
pub mod types;
