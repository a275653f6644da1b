//! Administrative update form and its validation into a [`ProviderConfiguration`].

// self
use crate::{
	_prelude::*,
	provider::{
		AllowedDomains, DEFAULT_TENANT_ID, OAuthCredentials, ProviderConfiguration, ProviderKind,
		ProviderSettings,
	},
};

/// Form fields that can carry a validation error.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Field {
	/// `provider_type`
	ProviderType,
	/// `client_id`
	ClientId,
	/// `client_secret`
	ClientSecret,
}
impl Field {
	/// Returns the form field name.
	pub const fn as_str(self) -> &'static str {
		match self {
			Field::ProviderType => "provider_type",
			Field::ClientId => "client_id",
			Field::ClientSecret => "client_secret",
		}
	}
}
impl Display for Field {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}

/// One field-level validation message.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldError {
	/// Offending field.
	pub field: Field,
	/// Message suitable for rendering next to the field.
	pub message: String,
}

/// Every problem found in a submitted form.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ThisError)]
#[error("Provider configuration is invalid: {}.", summarize(.errors))]
pub struct ValidationErrors {
	/// Field-level errors in form order.
	pub errors: Vec<FieldError>,
}
impl ValidationErrors {
	/// Returns `true` if any error names the provided field.
	pub fn contains(&self, field: Field) -> bool {
		self.errors.iter().any(|error| error.field == field)
	}

	/// Messages attached to the provided field.
	pub fn messages_for(&self, field: Field) -> impl Iterator<Item = &str> {
		self.errors.iter().filter(move |error| error.field == field).map(|e| e.message.as_str())
	}

	/// Fields with at least one error.
	pub fn fields(&self) -> Vec<Field> {
		let mut fields = Vec::new();

		for error in &self.errors {
			if !fields.contains(&error.field) {
				fields.push(error.field);
			}
		}

		fields
	}

	fn push(&mut self, field: Field, message: impl Into<String>) {
		self.errors.push(FieldError { field, message: message.into() });
	}
}

fn summarize(errors: &[FieldError]) -> String {
	errors
		.iter()
		.map(|error| format!("{}: {}", error.field, error.message))
		.collect::<Vec<_>>()
		.join("; ")
}

/// Submitted provider settings, one field per form input.
///
/// Inputs irrelevant to the selected provider are accepted and discarded on validation.
#[derive(Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProviderForm {
	/// Provider wire label (`manual`, `microsoft365`, ...).
	pub provider_type: String,
	/// OAuth client identifier.
	pub client_id: Option<String>,
	/// OAuth client secret.
	pub client_secret: Option<String>,
	/// Microsoft 365 directory tenant.
	pub tenant_id: Option<String>,
	/// Comma-separated domain allow-list.
	pub allowed_domains: Option<String>,
}
impl ProviderForm {
	/// Starts a form selecting the provided provider tag.
	pub fn new(provider_type: impl Into<String>) -> Self {
		Self { provider_type: provider_type.into(), ..Default::default() }
	}

	/// Sets the client id input.
	pub fn client_id(mut self, value: impl Into<String>) -> Self {
		self.client_id = Some(value.into());

		self
	}

	/// Sets the client secret input.
	pub fn client_secret(mut self, value: impl Into<String>) -> Self {
		self.client_secret = Some(value.into());

		self
	}

	/// Sets the tenant id input.
	pub fn tenant_id(mut self, value: impl Into<String>) -> Self {
		self.tenant_id = Some(value.into());

		self
	}

	/// Sets the comma-separated allowed domains input.
	pub fn allowed_domains(mut self, value: impl Into<String>) -> Self {
		self.allowed_domains = Some(value.into());

		self
	}

	/// Validates the form, defaulting a blank Microsoft 365 tenant to `common`.
	pub fn validate(&self) -> Result<ProviderConfiguration, ValidationErrors> {
		self.validate_with(DEFAULT_TENANT_ID)
	}

	/// Validates the form, defaulting a blank Microsoft 365 tenant to `default_tenant_id`.
	pub fn validate_with(
		&self,
		default_tenant_id: &str,
	) -> Result<ProviderConfiguration, ValidationErrors> {
		let mut errors = ValidationErrors { errors: Vec::new() };
		let tag = self.provider_type.trim();
		let kind = match tag.parse::<ProviderKind>() {
			Ok(kind) => kind,
			Err(_) if tag.is_empty() => {
				errors.push(Field::ProviderType, "Select an email provider.");

				return Err(errors);
			},
			Err(e) => {
				errors.push(Field::ProviderType, e.to_string());

				return Err(errors);
			},
		};
		let client_id = filled(self.client_id.as_deref());
		let client_secret = filled(self.client_secret.as_deref());

		if kind.requires_oauth() {
			if client_id.is_none() {
				errors.push(Field::ClientId, format!("Client ID is required for {}.", kind.label()));
			}
			if client_secret.is_none() {
				errors.push(
					Field::ClientSecret,
					format!("Client secret is required for {}.", kind.label()),
				);
			}
		}
		if !errors.errors.is_empty() {
			return Err(errors);
		}

		let credentials = || {
			OAuthCredentials::new(client_id.unwrap_or_default(), client_secret.unwrap_or_default())
		};
		let settings = match kind {
			ProviderKind::Manual => ProviderSettings::Manual,
			ProviderKind::Microsoft365 => ProviderSettings::Microsoft365 {
				credentials: credentials(),
				tenant_id: filled(self.tenant_id.as_deref()).unwrap_or(default_tenant_id).to_owned(),
			},
			ProviderKind::GoogleWorkspace =>
				ProviderSettings::GoogleWorkspace { credentials: credentials() },
			ProviderKind::Exchange => ProviderSettings::Exchange,
			ProviderKind::CustomOauth => ProviderSettings::CustomOauth { credentials: credentials() },
		};
		let allowed_domains =
			self.allowed_domains.as_deref().map(AllowedDomains::parse).unwrap_or_default();

		Ok(ProviderConfiguration { settings, allowed_domains })
	}
}
impl Debug for ProviderForm {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_struct("ProviderForm")
			.field("provider_type", &self.provider_type)
			.field("client_id", &self.client_id)
			.field("client_secret", &self.client_secret.as_ref().map(|_| "<redacted>"))
			.field("tenant_id", &self.tenant_id)
			.field("allowed_domains", &self.allowed_domains)
			.finish()
	}
}

fn filled(value: Option<&str>) -> Option<&str> {
	value.map(str::trim).filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
	// self
	use super::*;
	use crate::provider::ConfigStatus;

	#[test]
	fn unknown_provider_is_rejected() {
		let errors =
			ProviderForm::new("lotus_notes").validate().expect_err("Unknown tag must fail.");

		assert_eq!(errors.fields(), vec![Field::ProviderType]);
		assert!(errors.to_string().contains("lotus_notes"));

		let blank = ProviderForm::default().validate().expect_err("Blank tag must fail.");

		assert!(blank.contains(Field::ProviderType));
	}

	#[test]
	fn oauth_providers_report_each_missing_credential() {
		let errors = ProviderForm::new("custom_oauth")
			.client_id("  ")
			.validate()
			.expect_err("Missing credentials must fail.");

		assert_eq!(errors.fields(), vec![Field::ClientId, Field::ClientSecret]);

		let errors = ProviderForm::new("google_workspace")
			.client_id("gid")
			.validate()
			.expect_err("Missing secret must fail.");

		assert_eq!(errors.fields(), vec![Field::ClientSecret]);
		assert_eq!(
			errors.messages_for(Field::ClientSecret).collect::<Vec<_>>(),
			vec!["Client secret is required for Google Workspace."]
		);
	}

	#[test]
	fn microsoft_tenant_defaults_to_common() {
		let config = ProviderForm::new("microsoft365")
			.client_id("app")
			.client_secret("secret")
			.tenant_id("   ")
			.validate()
			.expect("Microsoft form should validate.");

		assert_eq!(config.settings.tenant_id(), Some(DEFAULT_TENANT_ID));
		assert_eq!(config.status(), ConfigStatus::Configured);

		let config = ProviderForm::new("microsoft365")
			.client_id("app")
			.client_secret("secret")
			.tenant_id(" contoso.onmicrosoft.com ")
			.validate()
			.expect("Microsoft form should validate.");

		assert_eq!(config.settings.tenant_id(), Some("contoso.onmicrosoft.com"));
	}

	#[test]
	fn irrelevant_fields_are_discarded() {
		let config = ProviderForm::new("manual")
			.client_id("stale-id")
			.client_secret("stale-secret")
			.tenant_id("stale-tenant")
			.allowed_domains(" @a.com, @b.com ,")
			.validate()
			.expect("Manual form should validate.");

		assert_eq!(config.settings, ProviderSettings::Manual);
		assert_eq!(config.allowed_domains.as_slice(), ["@a.com".to_owned(), "@b.com".to_owned()]);
	}

	#[test]
	fn form_deserializes_from_submitted_fields() {
		let form: ProviderForm = serde_json::from_str(
			r#"{"provider_type":"google_workspace","client_id":"gid","client_secret":"gs"}"#,
		)
		.expect("Form payload should deserialize.");
		let config = form.validate().expect("Deserialized form should validate.");

		assert_eq!(config.kind(), ProviderKind::GoogleWorkspace);
		assert!(config.allowed_domains.is_empty());
		assert!(!format!("{form:?}").contains("\"gs\""));
	}
}
