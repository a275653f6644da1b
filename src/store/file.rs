//! JSON-file-backed [`ConfigStore`] for single-node deployments.

// std
use std::{
	fs::{self, File},
	io::Write,
	path::{Path, PathBuf},
};
// self
use crate::{
	_prelude::*,
	company::CompanyId,
	record::ConfigurationRecord,
	store::{self, CompanyEntry, ConfigStore, EntryMap, StoreError, StoreFuture},
};

/// Persists every company entry to one JSON snapshot, rewritten after each mutation.
#[derive(Clone, Debug)]
pub struct FileStore {
	path: PathBuf,
	inner: Arc<RwLock<EntryMap>>,
}
impl FileStore {
	/// Opens (or creates) a store at the provided path, eagerly loading existing data.
	pub fn open(path: impl Into<PathBuf>) -> Result<Self, StoreError> {
		let path = path.into();

		ensure_parent_exists(&path)?;

		let snapshot = load_snapshot(&path)?;

		Ok(Self { path, inner: Arc::new(RwLock::new(snapshot)) })
	}

	/// Location of the snapshot file.
	pub fn path(&self) -> &Path {
		&self.path
	}

	fn persist_locked(&self, entries: &EntryMap) -> Result<(), StoreError> {
		ensure_parent_exists(&self.path)?;

		let mut snapshot = entries.values().collect::<Vec<_>>();

		snapshot.sort_by(|a, b| a.current.company.cmp(&b.current.company));

		let serialized =
			serde_json::to_vec_pretty(&snapshot).map_err(|e| StoreError::Serialization {
				message: format!("Failed to serialize store snapshot: {e}"),
			})?;
		let mut tmp_path = self.path.clone();

		tmp_path.set_extension("tmp");

		let written = write_synced(&tmp_path, &serialized).and_then(|()| {
			fs::rename(&tmp_path, &self.path).map_err(|e| backend("replace", &self.path, e))
		});

		if written.is_err() && tmp_path.is_file() {
			// Best effort; the write error is reported.
			let _ = fs::remove_file(&tmp_path);
		}

		written
	}
}
impl ConfigStore for FileStore {
	fn load<'a>(&'a self, company: &'a CompanyId) -> StoreFuture<'a, Option<ConfigurationRecord>> {
		Box::pin(async move { Ok(self.inner.read().get(company).map(|e| e.current.clone())) })
	}

	fn replace(
		&self,
		record: ConfigurationRecord,
		history_limit: usize,
	) -> StoreFuture<'_, Option<ConfigurationRecord>> {
		Box::pin(async move {
			let mut guard = self.inner.write();
			let rollback = guard.get(&record.company).cloned();
			let company = record.company.clone();
			let previous = store::replace_entry(&mut guard, record, history_limit);

			if let Err(e) = self.persist_locked(&guard) {
				// Keep memory in line with the file that is still on disk.
				match rollback {
					Some(entry) => guard.insert(company, entry),
					None => guard.remove(&company),
				};

				return Err(e);
			}

			Ok(previous)
		})
	}

	fn history<'a>(&'a self, company: &'a CompanyId) -> StoreFuture<'a, Vec<ConfigurationRecord>> {
		Box::pin(async move {
			Ok(self.inner.read().get(company).map(|e| e.history.clone()).unwrap_or_default())
		})
	}
}

fn load_snapshot(path: &Path) -> Result<EntryMap, StoreError> {
	if !path.exists() {
		return Ok(EntryMap::new());
	}

	let bytes = fs::read(path).map_err(|e| backend("read", path, e))?;

	if bytes.iter().all(u8::is_ascii_whitespace) {
		return Ok(EntryMap::new());
	}

	let de = &mut serde_json::Deserializer::from_slice(&bytes);
	let entries: Vec<CompanyEntry> =
		serde_path_to_error::deserialize(de).map_err(|e| StoreError::Serialization {
			message: format!("Failed to parse {} at `{}`: {}", path.display(), e.path(), e.inner()),
		})?;

	let mut map = EntryMap::with_capacity(entries.len());

	for entry in entries {
		let company = entry.current.company.clone();

		if map.insert(company.clone(), entry).is_some() {
			return Err(StoreError::Serialization {
				message: format!("Snapshot {} lists company {company} more than once.", path.display()),
			});
		}
	}

	Ok(map)
}

fn write_synced(path: &Path, bytes: &[u8]) -> Result<(), StoreError> {
	let mut file = File::create(path).map_err(|e| backend("create", path, e))?;

	file.write_all(bytes).map_err(|e| backend("write", path, e))?;
	file.sync_all().map_err(|e| backend("sync", path, e))
}

fn ensure_parent_exists(path: &Path) -> Result<(), StoreError> {
	if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
		fs::create_dir_all(parent).map_err(|e| StoreError::Backend {
			message: format!("Failed to create store directory {}: {e}", parent.display()),
		})?;
	}

	Ok(())
}

fn backend(action: &str, path: &Path, e: std::io::Error) -> StoreError {
	StoreError::Backend { message: format!("Failed to {action} {}: {e}", path.display()) }
}
