//! Domain primitives, ports and services.
//!
//! Purpose: hold the user model and its use-cases independently of HTTP or
//! storage concerns. Inbound adapters call the driving ports
//! ([`ports::UsersQuery`], [`ports::UsersCommand`]); outbound adapters
//! implement the driven port ([`ports::UserRepository`]).
//!
//! Public surface:
//! - Error / ErrorCode: transport-agnostic failure payload.
//! - User / UserDraft / UserId: the user record, its input, its identity.
//! - UserDirectory: the service implementing the driving ports.
//! - TraceId: request correlation identifier.

pub mod error;
pub mod ports;
pub mod trace_id;
pub mod user;
pub mod user_directory;

pub use self::error::{Error, ErrorCode};
pub use self::trace_id::{TRACE_ID_HEADER, TraceId};
pub use self::user::{User, UserDraft, UserId, UserIdParseError};
pub use self::user_directory::{UserDirectory, user_not_found};
