//! Outbound adapters implementing domain ports.
//!
//! - **memory**: the process-lifetime user store.
//!
//! Adapters translate between storage representations and domain types and
//! hold no business rules.

pub mod memory;
