//! Provider enumeration and OAuth classification.

// self
use crate::_prelude::*;

/// Email-provider integrations a company can select.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProviderKind {
	/// Manual or SMTP-style setup without OAuth.
	Manual,
	/// Microsoft 365 through an Azure AD application.
	#[serde(rename = "microsoft365")]
	Microsoft365,
	/// Google Workspace through a Google Cloud OAuth client.
	GoogleWorkspace,
	/// On-premises Exchange.
	Exchange,
	/// Any other OAuth 2.0 provider.
	CustomOauth,
}
impl ProviderKind {
	/// Every provider kind, in form display order.
	pub const ALL: [ProviderKind; 5] = [
		ProviderKind::Manual,
		ProviderKind::Microsoft365,
		ProviderKind::GoogleWorkspace,
		ProviderKind::Exchange,
		ProviderKind::CustomOauth,
	];

	/// Returns the stable wire label used by forms and persisted records.
	pub const fn as_str(self) -> &'static str {
		match self {
			ProviderKind::Manual => "manual",
			ProviderKind::Microsoft365 => "microsoft365",
			ProviderKind::GoogleWorkspace => "google_workspace",
			ProviderKind::Exchange => "exchange",
			ProviderKind::CustomOauth => "custom_oauth",
		}
	}

	/// Returns the human-readable name shown in provider pickers.
	pub const fn label(self) -> &'static str {
		match self {
			ProviderKind::Manual => "Manual Configuration",
			ProviderKind::Microsoft365 => "Microsoft 365",
			ProviderKind::GoogleWorkspace => "Google Workspace",
			ProviderKind::Exchange => "Exchange Server",
			ProviderKind::CustomOauth => "Custom OAuth",
		}
	}

	/// Returns `true` when the integration needs a client id/secret pair.
	pub const fn requires_oauth(self) -> bool {
		matches!(
			self,
			ProviderKind::Microsoft365 | ProviderKind::GoogleWorkspace | ProviderKind::CustomOauth
		)
	}
}
impl Display for ProviderKind {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}
impl FromStr for ProviderKind {
	type Err = UnknownProvider;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		Self::ALL
			.into_iter()
			.find(|kind| kind.as_str() == s)
			.ok_or_else(|| UnknownProvider { value: s.to_owned() })
	}
}

/// Error returned when a provider tag does not name a known integration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ThisError)]
#[error("Unknown provider type: {value}.")]
pub struct UnknownProvider {
	/// Offending tag.
	pub value: String,
}

/// Result of [`classify`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Classification {
	/// Whether the provider needs OAuth client credentials.
	pub requires_oauth: bool,
}

/// Classifies a raw provider tag; unknown tags never require OAuth.
pub fn classify(provider_type: &str) -> Classification {
	let requires_oauth =
		provider_type.trim().parse::<ProviderKind>().is_ok_and(ProviderKind::requires_oauth);

	Classification { requires_oauth }
}
