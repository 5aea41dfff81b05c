//! Library side of the `ankiconn` binary.
//!
//! The binary itself is intentionally thin: argument parsing, dispatch, and
//! rendering live here so tests can drive them against a captured writer.

pub mod dispatch;
pub mod render;
