//! Crate-level error types shared across forms, stores, and the service facade.

// self
use crate::_prelude::*;

/// Crate-wide result type alias returning [`Error`] by default.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Canonical error exposed by public APIs.
#[derive(Debug, ThisError)]
pub enum Error {
	/// Storage-layer failure.
	#[error("{0}")]
	Storage(
		#[from]
		#[source]
		crate::store::StoreError,
	),
	/// Local configuration problem.
	#[error(transparent)]
	Config(#[from] ConfigError),
	/// Submitted form failed validation; nothing was persisted.
	#[error(transparent)]
	Validation(#[from] crate::form::ValidationErrors),
	/// Identifier could not be parsed.
	#[error(transparent)]
	Identifier(#[from] crate::company::IdentifierError),
}
impl Error {
	/// Returns the field-level validation errors, if this is a validation failure.
	pub fn validation(&self) -> Option<&crate::form::ValidationErrors> {
		match self {
			Self::Validation(errors) => Some(errors),
			_ => None,
		}
	}
}

/// Service configuration failures.
#[derive(Debug, PartialEq, Eq, ThisError)]
pub enum ConfigError {
	/// The default Microsoft 365 tenant was blank.
	#[error("Default tenant identifier cannot be blank.")]
	BlankDefaultTenant,
	/// The default Microsoft 365 tenant contains whitespace.
	#[error("Default tenant identifier contains whitespace: {tenant}.")]
	DefaultTenantWhitespace {
		/// Offending tenant value.
		tenant: String,
	},
}
