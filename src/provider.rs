//! Provider-facing model: the provider enumeration, the per-provider credential bundle, the
//! allowed-domain list, and the derived configuration status.
//!
//! `kind` holds the [`ProviderKind`] enumeration together with [`classify`], which stays total
//! over raw tags. `config` stores one [`ProviderSettings`] case per provider so fields only
//! exist where they mean something. `status` recomputes [`ConfigStatus`] from current values
//! and is never persisted.

pub mod config;
pub mod domains;
pub mod kind;
pub mod secret;
pub mod status;

pub use config::*;
pub use domains::*;
pub use kind::*;
pub use secret::*;
pub use status::*;
