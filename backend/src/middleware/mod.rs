//! Request middleware.
//!
//! Purpose: cross-cutting request lifecycle concerns applied to every
//! route: trace correlation and the CORS policy.

pub mod cors;
pub mod trace;

pub use cors::Cors;
pub use trace::Trace;
