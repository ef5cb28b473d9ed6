//! Error types for the silence ACL
//!
//! Every failure happens while building rules: malformed patterns, broken
//! configuration files, unparsable matcher text. Evaluating an already
//! built rule never fails.

mod constructors;
mod conversions;
mod types;

pub use types::{AclError, AclResult};
