//! Company-domain identifiers.

pub mod id;

pub use id::*;
