//! Persisted configuration records.

// self
use crate::{
	_prelude::*,
	company::{AdminId, CompanyId},
	provider::{ConfigStatus, ProviderConfiguration},
};

/// A company's configuration as stored, with bookkeeping for audit.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfigurationRecord {
	/// Owning company.
	pub company: CompanyId,
	/// Stored configuration bundle.
	pub configuration: ProviderConfiguration,
	/// Number of updates applied for this company, starting at 1.
	pub revision: u64,
	/// Instant the bundle was written.
	pub updated_at: OffsetDateTime,
	/// Administrator who submitted the update, when known.
	pub updated_by: Option<AdminId>,
}
impl ConfigurationRecord {
	/// Creates the first revision for a company.
	pub fn new(
		company: CompanyId,
		configuration: ProviderConfiguration,
		updated_at: OffsetDateTime,
	) -> Self {
		Self { company, configuration, revision: 1, updated_at, updated_by: None }
	}

	/// Builds the record that replaces `previous`, bumping the revision.
	pub fn succeeding(
		previous: Option<&ConfigurationRecord>,
		company: CompanyId,
		configuration: ProviderConfiguration,
		updated_at: OffsetDateTime,
	) -> Self {
		let revision = previous.map_or(1, |record| record.revision.saturating_add(1));

		Self { company, configuration, revision, updated_at, updated_by: None }
	}

	/// Records the administrator responsible for this revision.
	pub fn with_updated_by(mut self, actor: Option<AdminId>) -> Self {
		self.updated_by = actor;

		self
	}

	/// Status derived from the stored fields.
	pub fn status(&self) -> ConfigStatus {
		self.configuration.status()
	}
}

#[cfg(test)]
mod tests {
	// crates.io
	use time::macros;
	// self
	use super::*;
	use crate::provider::ProviderSettings;

	#[test]
	fn succeeding_bumps_revision() {
		let company = CompanyId::new("acme").expect("Company fixture should be valid.");
		let first = ConfigurationRecord::new(
			company.clone(),
			ProviderConfiguration::default(),
			macros::datetime!(2025-03-01 09:00 UTC),
		);
		let second = ConfigurationRecord::succeeding(
			Some(&first),
			company.clone(),
			ProviderConfiguration::new(ProviderSettings::Exchange),
			macros::datetime!(2025-03-02 09:00 UTC),
		);

		assert_eq!(first.revision, 1);
		assert_eq!(second.revision, 2);
		assert_eq!(
			ConfigurationRecord::succeeding(
				None,
				company,
				ProviderConfiguration::default(),
				macros::datetime!(2025-03-02 09:00 UTC),
			)
			.revision,
			1
		);
	}

	#[test]
	fn status_is_derived_not_stored() {
		let record = ConfigurationRecord::new(
			CompanyId::new("acme").expect("Company fixture should be valid."),
			ProviderConfiguration::default(),
			macros::datetime!(2025-03-01 09:00 UTC),
		);
		let json = serde_json::to_value(&record).expect("Record should serialize.");

		assert_eq!(record.status(), ConfigStatus::Ready);
		assert!(json.get("status").is_none());
	}
}
