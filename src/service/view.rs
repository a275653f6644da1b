//! Read models: the masked display view and the credential-bearing connection target.

// self
use crate::{
	_prelude::*,
	company::{AdminId, CompanyId},
	provider::{
		AllowedDomains, ClientSecret, ConfigStatus, ProviderConfiguration, ProviderKind, SecretMask,
	},
	record::ConfigurationRecord,
};

/// Display-safe projection of a company's configuration.
///
/// Carries presence flags and a [`SecretMask`] instead of the client secret, so it can be handed
/// to any rendering layer or serialized into an API response.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ConfigurationView {
	/// Owning company.
	pub company: CompanyId,
	/// Selected provider; `None` when the company never saved a configuration.
	pub provider_type: Option<ProviderKind>,
	/// Whether the selected provider needs OAuth client credentials.
	pub requires_oauth: bool,
	/// Stored client id.
	pub client_id: Option<String>,
	/// Whether a non-blank client id is stored.
	pub client_id_set: bool,
	/// Masked client secret.
	pub client_secret: SecretMask,
	/// Microsoft 365 directory tenant.
	pub tenant_id: Option<String>,
	/// Domain allow-list entries.
	pub allowed_domains: AllowedDomains,
	/// Allow-list joined for the form input.
	pub allowed_domains_display: String,
	/// Status derived at read time.
	pub status: ConfigStatus,
	/// Stored revision, if any.
	pub revision: Option<u64>,
	/// Instant of the last update, if any.
	pub updated_at: Option<OffsetDateTime>,
	/// Administrator behind the last update, if known.
	pub updated_by: Option<AdminId>,
}
impl ConfigurationView {
	/// View for a company without a stored configuration.
	pub fn unconfigured(company: CompanyId) -> Self {
		Self {
			company,
			provider_type: None,
			requires_oauth: false,
			client_id: None,
			client_id_set: false,
			client_secret: SecretMask::default(),
			tenant_id: None,
			allowed_domains: AllowedDomains::default(),
			allowed_domains_display: String::new(),
			status: ConfigStatus::of(None),
			revision: None,
			updated_at: None,
			updated_by: None,
		}
	}

	/// Projects a stored record, recomputing its status.
	pub fn from_record(record: &ConfigurationRecord) -> Self {
		let config = &record.configuration;
		let credentials = config.settings.credentials();
		let client_id = credentials.map(|c| c.client_id.clone());

		Self {
			company: record.company.clone(),
			provider_type: Some(config.kind()),
			requires_oauth: config.requires_oauth(),
			client_id_set: client_id.as_deref().is_some_and(|id| !id.trim().is_empty()),
			client_id,
			client_secret: credentials.map(|c| c.client_secret.mask()).unwrap_or_default(),
			tenant_id: config.settings.tenant_id().map(ToOwned::to_owned),
			allowed_domains_display: config.allowed_domains.joined(),
			allowed_domains: config.allowed_domains.clone(),
			status: config.status(),
			revision: Some(record.revision),
			updated_at: Some(record.updated_at),
			updated_by: record.updated_by.clone(),
		}
	}
}

/// Mode reported by the external connection tester.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConnectionMode {
	/// Sandbox credentials.
	Test,
	/// Production credentials.
	Live,
}

/// Everything the integration needs to call the provider API.
///
/// This is the only read path that yields the raw client secret; it is deliberately not
/// serializable.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ConnectionTarget {
	/// Owning company.
	pub company: CompanyId,
	/// Provider to call.
	pub provider: ProviderKind,
	/// OAuth client identifier.
	pub client_id: String,
	/// Microsoft 365 directory tenant.
	pub tenant_id: Option<String>,
	/// Domains the integration may operate against.
	pub allowed_domains: AllowedDomains,
	client_secret: ClientSecret,
}
impl ConnectionTarget {
	/// Builds a target for OAuth providers whose credential pair is complete.
	pub fn from_configuration(
		company: CompanyId,
		config: &ProviderConfiguration,
	) -> Option<Self> {
		if !config.requires_oauth() {
			return None;
		}

		let credentials = config.settings.credentials().filter(|c| c.is_complete())?;

		Some(Self {
			company,
			provider: config.kind(),
			client_id: credentials.client_id.clone(),
			tenant_id: config.settings.tenant_id().map(ToOwned::to_owned),
			allowed_domains: config.allowed_domains.clone(),
			client_secret: credentials.client_secret.clone(),
		})
	}

	/// Raw client secret for the provider call. Callers must avoid logging this string.
	pub fn client_secret(&self) -> &str {
		self.client_secret.expose()
	}
}
