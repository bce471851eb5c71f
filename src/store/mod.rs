//! Persistence layer: plain identity-scoped queries over `PgPool`.
//!
//! Every task query takes the owner id and scopes on it; handlers call these
//! only after the caller's identity has been resolved and checked against the
//! path.

pub mod tasks;
pub mod users;
