//! HTTP inbound adapter exposing REST endpoints.

pub mod docs;
pub mod error;
pub mod schemas;
pub mod state;
#[cfg(test)]
pub mod test_utils;
pub mod users;

pub use error::ApiResult;
