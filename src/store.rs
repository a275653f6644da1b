//! Storage contracts and built-in store implementations for configuration records.

pub mod file;
pub mod memory;

pub use file::FileStore;
pub use memory::MemoryStore;

// self
use crate::{_prelude::*, company::CompanyId, record::ConfigurationRecord};

/// Boxed future returned by [`ConfigStore`] operations.
pub type StoreFuture<'a, T> = Pin<Box<dyn Future<Output = Result<T, StoreError>> + 'a + Send>>;

/// Storage backend contract for per-company provider configurations.
pub trait ConfigStore
where
	Self: Send + Sync,
{
	/// Fetches the current record for a company, if one was ever written.
	fn load<'a>(&'a self, company: &'a CompanyId) -> StoreFuture<'a, Option<ConfigurationRecord>>;

	/// Atomically installs `record` as the company's current configuration.
	///
	/// The displaced record is appended to the company's history, which keeps at most
	/// `history_limit` entries (oldest dropped first). Returns the displaced record.
	fn replace(
		&self,
		record: ConfigurationRecord,
		history_limit: usize,
	) -> StoreFuture<'_, Option<ConfigurationRecord>>;

	/// Retired records for a company, oldest first.
	fn history<'a>(&'a self, company: &'a CompanyId) -> StoreFuture<'a, Vec<ConfigurationRecord>>;
}

/// Error type produced by [`ConfigStore`] implementations.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ThisError)]
pub enum StoreError {
	/// Serialization failures surfaced by the backend.
	#[error("Serialization error: {message}.")]
	Serialization {
		/// Human-readable error payload.
		message: String,
	},
	/// Backend-level failure for the storage engine.
	#[error("Backend failure: {message}.")]
	Backend {
		/// Human-readable error payload.
		message: String,
	},
}

/// Current record plus retired revisions for one company.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompanyEntry {
	/// Configuration in effect.
	pub current: ConfigurationRecord,
	/// Retired configurations, oldest first.
	#[serde(default)]
	pub history: Vec<ConfigurationRecord>,
}

pub(crate) type EntryMap = HashMap<CompanyId, CompanyEntry>;

/// Shared replace-and-retire step; callers hold the write lock for the whole call.
pub(crate) fn replace_entry(
	entries: &mut EntryMap,
	record: ConfigurationRecord,
	history_limit: usize,
) -> Option<ConfigurationRecord> {
	let Some(entry) = entries.get_mut(&record.company) else {
		entries.insert(record.company.clone(), CompanyEntry { current: record, history: Vec::new() });

		return None;
	};
	let previous = std::mem::replace(&mut entry.current, record);

	if history_limit > 0 {
		entry.history.push(previous.clone());

		let overflow = entry.history.len().saturating_sub(history_limit);

		entry.history.drain(..overflow);
	}

	Some(previous)
}
