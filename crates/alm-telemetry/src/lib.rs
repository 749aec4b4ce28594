//! Logging setup shared by the agile-life binaries.
//!
//! Everything in the workspace logs through `tracing`; this crate only decides
//! where those events go and in which format.

pub mod logging;
