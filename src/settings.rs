//! Service settings, embeddable in a host application's configuration file.

// self
use crate::{_prelude::*, error::ConfigError, provider::DEFAULT_TENANT_ID};

/// Tunables for [`ProviderConfigService`](crate::service::ProviderConfigService).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServiceSettings {
	/// Retired configurations kept per company for audit; `0` disables retention.
	pub history_limit: usize,
	/// Microsoft 365 tenant applied when the form leaves `tenant_id` blank.
	pub default_tenant_id: String,
}
impl ServiceSettings {
	const DEFAULT_HISTORY_LIMIT: usize = 20;

	/// Returns a builder seeded with defaults.
	pub fn builder() -> ServiceSettingsBuilder {
		ServiceSettingsBuilder::default()
	}

	/// Checks invariants; deserialized settings should pass through here before use.
	pub fn validate(&self) -> Result<(), ConfigError> {
		if self.default_tenant_id.trim().is_empty() {
			return Err(ConfigError::BlankDefaultTenant);
		}
		if self.default_tenant_id.chars().any(char::is_whitespace) {
			return Err(ConfigError::DefaultTenantWhitespace {
				tenant: self.default_tenant_id.clone(),
			});
		}

		Ok(())
	}
}
impl Default for ServiceSettings {
	fn default() -> Self {
		Self {
			history_limit: Self::DEFAULT_HISTORY_LIMIT,
			default_tenant_id: DEFAULT_TENANT_ID.into(),
		}
	}
}

/// Builder for [`ServiceSettings`].
#[derive(Debug, Default)]
pub struct ServiceSettingsBuilder {
	settings: ServiceSettings,
}
impl ServiceSettingsBuilder {
	/// Overrides how many retired configurations are kept per company.
	pub fn history_limit(mut self, limit: usize) -> Self {
		self.settings.history_limit = limit;

		self
	}

	/// Overrides the Microsoft 365 tenant used for blank submissions.
	pub fn default_tenant_id(mut self, tenant: impl Into<String>) -> Self {
		self.settings.default_tenant_id = tenant.into();

		self
	}

	/// Consumes the builder and validates the resulting settings.
	pub fn build(self) -> Result<ServiceSettings, ConfigError> {
		self.settings.validate()?;

		Ok(self.settings)
	}
}
