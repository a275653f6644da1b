//! Per-company provider configuration with one settings case per provider.

// self
use crate::{
	_prelude::*,
	provider::{AllowedDomains, ClientSecret, ConfigStatus, ProviderKind},
};

/// Microsoft 365 tenant used when the form leaves `tenant_id` blank.
pub const DEFAULT_TENANT_ID: &str = "common";

/// OAuth client credential pair.
///
/// Either half may be blank, which keeps an incomplete bundle representable; see
/// [`ConfigStatus::Incomplete`].
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OAuthCredentials {
	/// OAuth client identifier.
	pub client_id: String,
	/// OAuth client secret.
	pub client_secret: ClientSecret,
}
impl OAuthCredentials {
	/// Creates a credential pair.
	pub fn new(client_id: impl Into<String>, client_secret: impl Into<String>) -> Self {
		Self { client_id: client_id.into(), client_secret: ClientSecret::new(client_secret) }
	}

	/// Returns `true` when both the id and the secret are non-blank.
	pub fn is_complete(&self) -> bool {
		!self.client_id.trim().is_empty() && !self.client_secret.is_blank()
	}
}

/// Provider selection plus the fields that provider uses.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "provider_type", rename_all = "snake_case")]
pub enum ProviderSettings {
	/// Manual configuration; no credentials.
	#[default]
	Manual,
	/// Microsoft 365 application credentials and directory tenant.
	#[serde(rename = "microsoft365")]
	Microsoft365 {
		/// Azure AD application credentials.
		credentials: OAuthCredentials,
		/// Directory tenant (`common` for multi-tenant apps).
		tenant_id: String,
	},
	/// Google Workspace OAuth client.
	GoogleWorkspace {
		/// Google Cloud OAuth client credentials.
		credentials: OAuthCredentials,
	},
	/// Exchange server; configured outside this record.
	Exchange,
	/// Generic OAuth 2.0 client.
	CustomOauth {
		/// OAuth client credentials.
		credentials: OAuthCredentials,
	},
}
impl ProviderSettings {
	/// Provider selected by these settings.
	pub fn kind(&self) -> ProviderKind {
		match self {
			ProviderSettings::Manual => ProviderKind::Manual,
			ProviderSettings::Microsoft365 { .. } => ProviderKind::Microsoft365,
			ProviderSettings::GoogleWorkspace { .. } => ProviderKind::GoogleWorkspace,
			ProviderSettings::Exchange => ProviderKind::Exchange,
			ProviderSettings::CustomOauth { .. } => ProviderKind::CustomOauth,
		}
	}

	/// OAuth credentials, for providers that carry them.
	pub fn credentials(&self) -> Option<&OAuthCredentials> {
		match self {
			ProviderSettings::Microsoft365 { credentials, .. }
			| ProviderSettings::GoogleWorkspace { credentials }
			| ProviderSettings::CustomOauth { credentials } => Some(credentials),
			ProviderSettings::Manual | ProviderSettings::Exchange => None,
		}
	}

	/// Microsoft 365 directory tenant.
	pub fn tenant_id(&self) -> Option<&str> {
		match self {
			ProviderSettings::Microsoft365 { tenant_id, .. } => Some(tenant_id),
			_ => None,
		}
	}
}

/// The complete configuration bundle stored for one company.
///
/// Updates replace the whole bundle; fields are never patched individually.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProviderConfiguration {
	/// Provider selection and its credentials.
	pub settings: ProviderSettings,
	/// Domains the integration may operate against; empty permits all.
	#[serde(default)]
	pub allowed_domains: AllowedDomains,
}
impl ProviderConfiguration {
	/// Creates a configuration with no domain restriction.
	pub fn new(settings: ProviderSettings) -> Self {
		Self { settings, allowed_domains: AllowedDomains::default() }
	}

	/// Replaces the domain allow-list.
	pub fn with_allowed_domains(mut self, allowed_domains: AllowedDomains) -> Self {
		self.allowed_domains = allowed_domains;

		self
	}

	/// Provider selected by this configuration.
	pub fn kind(&self) -> ProviderKind {
		self.settings.kind()
	}

	/// Whether the selected provider needs OAuth client credentials.
	pub fn requires_oauth(&self) -> bool {
		self.kind().requires_oauth()
	}

	/// Recomputes the configuration status from the current field values.
	pub fn status(&self) -> ConfigStatus {
		ConfigStatus::of(Some(self))
	}
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	#[test]
	fn credentials_require_both_halves() {
		assert!(OAuthCredentials::new("id", "secret").is_complete());
		assert!(!OAuthCredentials::new("abc", "").is_complete());
		assert!(!OAuthCredentials::new(" ", "secret").is_complete());
	}

	#[test]
	fn settings_expose_only_relevant_fields() {
		let microsoft = ProviderSettings::Microsoft365 {
			credentials: OAuthCredentials::new("id", "secret"),
			tenant_id: DEFAULT_TENANT_ID.into(),
		};

		assert_eq!(microsoft.kind(), ProviderKind::Microsoft365);
		assert_eq!(microsoft.tenant_id(), Some("common"));
		assert!(microsoft.credentials().is_some());
		assert!(ProviderSettings::Exchange.credentials().is_none());
		assert!(ProviderSettings::Manual.tenant_id().is_none());
	}

	#[test]
	fn settings_serialize_with_provider_tag() {
		let config = ProviderConfiguration::new(ProviderSettings::GoogleWorkspace {
			credentials: OAuthCredentials::new("gid", "gsecret"),
		})
		.with_allowed_domains(AllowedDomains::parse("@acme.com"));
		let json = serde_json::to_value(&config).expect("Configuration should serialize.");

		assert_eq!(json["settings"]["provider_type"], "google_workspace");
		assert_eq!(json["settings"]["credentials"]["client_id"], "gid");
		assert_eq!(json["allowed_domains"][0], "@acme.com");

		let back: ProviderConfiguration =
			serde_json::from_value(json).expect("Configuration should deserialize.");

		assert_eq!(back, config);
	}

	#[test]
	fn default_configuration_is_manual_and_unrestricted() {
		let config = ProviderConfiguration::default();

		assert_eq!(config.kind(), ProviderKind::Manual);
		assert!(!config.requires_oauth());
		assert!(config.allowed_domains.is_empty());
	}
}
