//! Provider configuration facade: validated updates, masked reads, and the credential hand-off
//! to the connection tester.

pub mod view;

pub use view::*;

// self
use crate::{
	_prelude::*,
	company::{AdminId, CompanyId},
	error::ConfigError,
	form::ProviderForm,
	obs::{self, OperationKind, OperationOutcome, OperationSpan},
	provider::ConfigStatus,
	record::ConfigurationRecord,
	settings::ServiceSettings,
	store::ConfigStore,
};

/// Boxed future returned by [`ConnectionTester`] implementations.
pub type ConnectionFuture<'a> = Pin<Box<dyn Future<Output = ConnectionReport> + 'a + Send>>;

/// Live check of stored credentials against the provider API, implemented by the integration.
pub trait ConnectionTester
where
	Self: Send + Sync,
{
	/// Exercises the credentials in `target` and reports what happened.
	fn test<'a>(&'a self, target: &'a ConnectionTarget) -> ConnectionFuture<'a>;
}

/// Result reported by a [`ConnectionTester`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConnectionReport {
	/// Whether the provider accepted the credentials.
	pub success: bool,
	/// Mode the provider reported the credentials to be in.
	pub mode: ConnectionMode,
	/// Human-readable detail from the tester.
	pub message: Option<String>,
}

/// Owns the store handle and applies the configuration rules on every read and write.
///
/// Updates for the same company are serialized inside one service instance so revision numbers
/// and history stay consistent. Separate submissions are not version-checked: the last write
/// wins.
#[derive(Clone)]
pub struct ProviderConfigService {
	/// Service tunables.
	pub settings: ServiceSettings,
	store: Arc<dyn ConfigStore>,
	update_guards: Arc<Mutex<HashMap<CompanyId, Arc<AsyncMutex<()>>>>>,
}
impl ProviderConfigService {
	/// Creates a service over the provided store.
	pub fn new(store: Arc<dyn ConfigStore>, settings: ServiceSettings) -> Self {
		Self { store, settings, update_guards: Default::default() }
	}

	/// Creates a service after validating deserialized settings.
	pub fn try_new(
		store: Arc<dyn ConfigStore>,
		settings: ServiceSettings,
	) -> Result<Self, ConfigError> {
		settings.validate()?;

		Ok(Self::new(store, settings))
	}

	/// Validates `form` and replaces the company's configuration with the result.
	///
	/// Responds with the masked view of the persisted configuration.
	pub async fn update(
		&self,
		company: &CompanyId,
		form: &ProviderForm,
	) -> Result<ConfigurationView> {
		self.update_by(company, form, None).await
	}

	/// Same as [`update`](Self::update), recording the administrator behind the change.
	///
	/// On validation failure nothing is written and every field error is returned at once.
	pub async fn update_by(
		&self,
		company: &CompanyId,
		form: &ProviderForm,
		actor: Option<&AdminId>,
	) -> Result<ConfigurationView> {
		const KIND: OperationKind = OperationKind::Update;

		let span = OperationSpan::new(KIND, company);

		obs::record_operation_outcome(KIND, OperationOutcome::Attempt);

		let result = span
			.instrument(async move {
				let configuration =
					form.validate_with(&self.settings.default_tenant_id).map_err(|errors| {
						let fields = errors.fields();

						obs::log_update_rejected(
							&fields.iter().map(|f| f.as_str()).collect::<Vec<_>>(),
						);

						Error::from(errors)
					})?;
				let guard = self.update_guard(company);
				let _exclusive = guard.lock().await;
				let previous = self.store.load(company).await.inspect_err(log_store_failure)?;
				let record = ConfigurationRecord::succeeding(
					previous.as_ref(),
					company.clone(),
					configuration,
					OffsetDateTime::now_utc(),
				)
				.with_updated_by(actor.cloned());

				self.store
					.replace(record.clone(), self.settings.history_limit)
					.await
					.inspect_err(log_store_failure)?;
				obs::log_update_accepted(
					record.configuration.kind().as_str(),
					record.revision,
					previous.is_some(),
				);

				Ok(ConfigurationView::from_record(&record))
			})
			.await;

		self.release_update_guard(company);
		record_result(KIND, &result);

		result
	}

	/// Display-path read; a company without a record reads as not configured.
	pub async fn read(&self, company: &CompanyId) -> Result<ConfigurationView> {
		const KIND: OperationKind = OperationKind::Read;

		let span = OperationSpan::new(KIND, company);

		obs::record_operation_outcome(KIND, OperationOutcome::Attempt);

		let result = span
			.instrument(async move {
				let record = self.store.load(company).await.inspect_err(log_store_failure)?;

				Ok(match record {
					Some(record) => ConfigurationView::from_record(&record),
					None => ConfigurationView::unconfigured(company.clone()),
				})
			})
			.await;

		record_result(KIND, &result);

		result
	}

	/// Status derived from the company's current record.
	pub async fn status(&self, company: &CompanyId) -> Result<ConfigStatus> {
		Ok(self.read(company).await?.status)
	}

	/// Credential hand-off for the integration; `None` unless an OAuth provider is selected and
	/// both client id and secret are stored.
	pub async fn connection_target(&self, company: &CompanyId) -> Result<Option<ConnectionTarget>> {
		const KIND: OperationKind = OperationKind::ConnectionTarget;

		let span = OperationSpan::new(KIND, company);

		obs::record_operation_outcome(KIND, OperationOutcome::Attempt);

		let result = span
			.instrument(async move {
				let record = self.store.load(company).await.inspect_err(log_store_failure)?;

				Ok(record.and_then(|record| {
					ConnectionTarget::from_configuration(record.company, &record.configuration)
				}))
			})
			.await;

		record_result(KIND, &result);

		result
	}

	/// Runs `tester` against the stored credentials; `None` when there is nothing to test.
	pub async fn test_connection<T>(
		&self,
		company: &CompanyId,
		tester: &T,
	) -> Result<Option<ConnectionReport>>
	where
		T: ?Sized + ConnectionTester,
	{
		let Some(target) = self.connection_target(company).await? else {
			return Ok(None);
		};

		Ok(Some(tester.test(&target).await))
	}

	/// Masked views of the company's retired configurations, oldest first.
	pub async fn history(&self, company: &CompanyId) -> Result<Vec<ConfigurationView>> {
		const KIND: OperationKind = OperationKind::History;

		let span = OperationSpan::new(KIND, company);

		obs::record_operation_outcome(KIND, OperationOutcome::Attempt);

		let result = span
			.instrument(async move {
				let records = self.store.history(company).await.inspect_err(log_store_failure)?;

				Ok(records.iter().map(ConfigurationView::from_record).collect())
			})
			.await;

		record_result(KIND, &result);

		result
	}

	fn update_guard(&self, company: &CompanyId) -> Arc<AsyncMutex<()>> {
		let mut guards = self.update_guards.lock();

		guards.entry(company.clone()).or_insert_with(|| Arc::new(AsyncMutex::new(()))).clone()
	}

	// Drops the company's guard once no other update holds a handle to it.
	fn release_update_guard(&self, company: &CompanyId) {
		let mut guards = self.update_guards.lock();

		if guards.get(company).is_some_and(|guard| Arc::strong_count(guard) == 1) {
			guards.remove(company);
		}
	}
}
impl Debug for ProviderConfigService {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_struct("ProviderConfigService").field("settings", &self.settings).finish()
	}
}

fn log_store_failure(e: &crate::store::StoreError) {
	obs::log_store_failure(e);
}

fn record_result<T>(kind: OperationKind, result: &Result<T>) {
	match result {
		Ok(_) => obs::record_operation_outcome(kind, OperationOutcome::Success),
		Err(_) => obs::record_operation_outcome(kind, OperationOutcome::Failure),
	}
}
