//! Shared Kernel
//!
//! Vocabulary shared by every crate in the workspace:
//! - Unified error type, error classification and result aliases
//! - Typed identifiers for persisted records
//!
//! Only things with the same meaning in every domain belong here.

pub mod error {
    pub mod app_error;
    pub mod conversions;
    pub mod kind;
}
pub mod id;
