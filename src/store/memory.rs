//! Thread-safe in-memory [`ConfigStore`] for local development and tests.

// self
use crate::{
	_prelude::*,
	company::CompanyId,
	record::ConfigurationRecord,
	store::{self, ConfigStore, EntryMap, StoreFuture},
};

type SharedEntries = Arc<RwLock<EntryMap>>;

/// Storage backend that keeps records in-process.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore(SharedEntries);
impl MemoryStore {
	/// Number of companies with a stored configuration.
	pub fn len(&self) -> usize {
		self.0.read().len()
	}

	/// Returns `true` when no company has been configured.
	pub fn is_empty(&self) -> bool {
		self.0.read().is_empty()
	}

	fn load_now(entries: SharedEntries, company: CompanyId) -> Option<ConfigurationRecord> {
		entries.read().get(&company).map(|entry| entry.current.clone())
	}

	fn replace_now(
		entries: SharedEntries,
		record: ConfigurationRecord,
		history_limit: usize,
	) -> Option<ConfigurationRecord> {
		store::replace_entry(&mut entries.write(), record, history_limit)
	}

	fn history_now(entries: SharedEntries, company: CompanyId) -> Vec<ConfigurationRecord> {
		entries.read().get(&company).map(|entry| entry.history.clone()).unwrap_or_default()
	}
}
impl ConfigStore for MemoryStore {
	fn load<'a>(&'a self, company: &'a CompanyId) -> StoreFuture<'a, Option<ConfigurationRecord>> {
		let entries = self.0.clone();
		let company = company.to_owned();

		Box::pin(async move { Ok(Self::load_now(entries, company)) })
	}

	fn replace(
		&self,
		record: ConfigurationRecord,
		history_limit: usize,
	) -> StoreFuture<'_, Option<ConfigurationRecord>> {
		let entries = self.0.clone();

		Box::pin(async move { Ok(Self::replace_now(entries, record, history_limit)) })
	}

	fn history<'a>(&'a self, company: &'a CompanyId) -> StoreFuture<'a, Vec<ConfigurationRecord>> {
		let entries = self.0.clone();
		let company = company.to_owned();

		Box::pin(async move { Ok(Self::history_now(entries, company)) })
	}
}
