//! Derived configuration status.

// self
use crate::{
	_prelude::*,
	provider::{ProviderConfiguration, ProviderKind},
};

/// Summary of whether a provider's required fields are present.
///
/// Always derived from the stored fields on read; never persisted.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ConfigStatus {
	/// Manual configuration; nothing else to fill in.
	Ready,
	/// OAuth provider with both client id and secret present.
	Configured,
	/// OAuth provider missing its client id or secret.
	Incomplete,
	/// No provider selected, or one this store cannot assess.
	NotConfigured,
}
impl ConfigStatus {
	/// Derives the status of a stored configuration; `None` means no provider was selected.
	pub fn of(config: Option<&ProviderConfiguration>) -> Self {
		match config {
			Some(config) => Self::derive(
				Some(config.kind()),
				config.settings.credentials().is_some_and(|credentials| credentials.is_complete()),
			),
			None => Self::NotConfigured,
		}
	}

	/// Returns a stable label suitable for payloads and log fields.
	pub const fn as_str(self) -> &'static str {
		match self {
			ConfigStatus::Ready => "ready",
			ConfigStatus::Configured => "configured",
			ConfigStatus::Incomplete => "incomplete",
			ConfigStatus::NotConfigured => "not_configured",
		}
	}

	/// Returns the badge text shown next to the provider picker.
	pub const fn label(self) -> &'static str {
		match self {
			ConfigStatus::Ready => "Ready",
			ConfigStatus::Configured => "Configured",
			ConfigStatus::Incomplete => "Incomplete",
			ConfigStatus::NotConfigured => "Not Configured",
		}
	}

	fn derive(kind: Option<ProviderKind>, credentials_complete: bool) -> Self {
		match kind {
			Some(ProviderKind::Manual) => Self::Ready,
			Some(ProviderKind::Microsoft365 | ProviderKind::GoogleWorkspace) =>
				if credentials_complete {
					Self::Configured
				} else {
					Self::Incomplete
				},
			Some(ProviderKind::Exchange | ProviderKind::CustomOauth) | None => Self::NotConfigured,
		}
	}
}
impl Display for ConfigStatus {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.label())
	}
}

/// Derives the status from raw, untyped values; unknown or missing tags are
/// [`ConfigStatus::NotConfigured`].
pub fn status(
	provider_type: Option<&str>,
	client_id: Option<&str>,
	client_secret: Option<&str>,
) -> ConfigStatus {
	let kind = provider_type.and_then(|tag| tag.trim().parse::<ProviderKind>().ok());
	let present = |value: Option<&str>| value.is_some_and(|v| !v.trim().is_empty());

	ConfigStatus::derive(kind, present(client_id) && present(client_secret))
}

#[cfg(test)]
mod tests {
	// self
	use super::*;
	use crate::provider::{DEFAULT_TENANT_ID, OAuthCredentials, ProviderSettings};

	fn microsoft(client_id: &str, client_secret: &str) -> ProviderConfiguration {
		ProviderConfiguration::new(ProviderSettings::Microsoft365 {
			credentials: OAuthCredentials::new(client_id, client_secret),
			tenant_id: DEFAULT_TENANT_ID.into(),
		})
	}

	#[test]
	fn manual_is_always_ready() {
		assert_eq!(ProviderConfiguration::default().status(), ConfigStatus::Ready);
		assert_eq!(status(Some("manual"), None, None), ConfigStatus::Ready);
		assert_eq!(status(Some("manual"), Some("id"), Some("")), ConfigStatus::Ready);
	}

	#[test]
	fn microsoft_with_missing_secret_is_incomplete() {
		assert_eq!(microsoft("abc", "").status(), ConfigStatus::Incomplete);
		assert_eq!(status(Some("microsoft365"), Some("abc"), Some("")), ConfigStatus::Incomplete);
	}

	#[test]
	fn oauth_pair_present_is_configured() {
		assert_eq!(microsoft("abc", "xyz").status(), ConfigStatus::Configured);
		assert_eq!(
			status(Some("google_workspace"), Some("abc"), Some("xyz")),
			ConfigStatus::Configured
		);
		assert_eq!(status(Some("google_workspace"), None, Some("xyz")), ConfigStatus::Incomplete);
	}

	#[test]
	fn other_providers_are_not_configured() {
		let custom = ProviderConfiguration::new(ProviderSettings::CustomOauth {
			credentials: OAuthCredentials::new("abc", "xyz"),
		});

		assert_eq!(custom.status(), ConfigStatus::NotConfigured);
		assert_eq!(
			ProviderConfiguration::new(ProviderSettings::Exchange).status(),
			ConfigStatus::NotConfigured
		);
		assert_eq!(ConfigStatus::of(None), ConfigStatus::NotConfigured);
		assert_eq!(status(None, Some("abc"), Some("xyz")), ConfigStatus::NotConfigured);
		assert_eq!(status(Some("lotus_notes"), Some("a"), Some("b")), ConfigStatus::NotConfigured);
	}

	#[test]
	fn labels_render_for_display() {
		assert_eq!(ConfigStatus::NotConfigured.to_string(), "Not Configured");
		assert_eq!(ConfigStatus::NotConfigured.as_str(), "not_configured");
		assert_eq!(
			serde_json::to_string(&ConfigStatus::Incomplete).expect("Status should serialize."),
			"\"incomplete\""
		);
	}
}
