//! Typed, multi-tenant email-provider configuration store—validate administrative updates,
//! derive configuration status on every read, and keep client secrets out of display paths.

#![deny(clippy::all, missing_docs, unused_crate_dependencies)]

pub mod company;
pub mod error;
pub mod form;
pub mod obs;
pub mod provider;
pub mod record;
pub mod service;
pub mod settings;
pub mod store;

mod _prelude {
	pub use std::{
		collections::HashMap,
		fmt::{Debug, Display, Formatter, Result as FmtResult},
		future::Future,
		pin::Pin,
		str::FromStr,
		sync::Arc,
	};

	pub use async_lock::Mutex as AsyncMutex;
	pub use parking_lot::{Mutex, RwLock};
	pub use serde::{Deserialize, Serialize};
	pub use thiserror::Error as ThisError;
	pub use time::OffsetDateTime;

	pub use crate::error::{Error, Result};
}

#[cfg(test)] use tokio as _;
