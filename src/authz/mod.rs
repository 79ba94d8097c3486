//! Authorization module
//!
//! Role-based access control for the hiring workflow:
//! - `identity`: the per-request caller context, rebuilt from trusted headers
//! - `policy`: the declarative route -> allowed-role table
//! - `gate`: the reusable role and ownership admission checks
//! - `visibility`: read-time field redaction based on viewer vs owner

pub mod gate;
pub mod identity;
pub mod policy;
pub mod visibility;

pub use identity::{Identity, Role};
