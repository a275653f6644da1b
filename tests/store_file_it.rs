mod common;

// std
use std::{env, fs, path::PathBuf, process, sync::Arc};
// crates.io
use time::OffsetDateTime;
// self
use common::*;
use email_provider_config::{
	provider::{ConfigStatus, ProviderKind},
	service::ProviderConfigService,
	settings::ServiceSettings,
	store::{ConfigStore, FileStore},
};

fn temp_path() -> PathBuf {
	let unique = format!(
		"email_provider_config_it_{}_{}/companies.json",
		process::id(),
		OffsetDateTime::now_utc().unix_timestamp_nanos(),
	);

	env::temp_dir().join(unique)
}

fn service_at(path: &PathBuf) -> ProviderConfigService {
	let store: Arc<dyn ConfigStore> =
		Arc::new(FileStore::open(path).expect("Failed to open file store snapshot."));

	ProviderConfigService::try_new(store, ServiceSettings::default())
		.expect("Default settings should validate.")
}

#[tokio::test]
async fn configuration_survives_reopen() {
	let path = temp_path();
	let acme = company("acme");

	{
		let service = service_at(&path);

		service
			.update(&acme, &oauth_form("microsoft365", "app-id", "").allowed_domains("@acme.com"))
			.await
			.expect_err("Blank client secret must be rejected.");
		service
			.update(&acme, &oauth_form("microsoft365", "app-id", "app-secret"))
			.await
			.expect("First update should persist.");
		let form = oauth_form("google_workspace", "gid", "gsecret").allowed_domains("@acme.com");

		service
			.update(&acme, &form)
			.await
			.expect("Second update should persist.");
	}

	let service = service_at(&path);
	let view = service.read(&acme).await.expect("Read after reopen should succeed.");
	let history = service.history(&acme).await.expect("History after reopen should load.");

	assert_eq!(view.provider_type, Some(ProviderKind::GoogleWorkspace));
	assert_eq!(view.status, ConfigStatus::Configured);
	assert_eq!(view.revision, Some(2));
	assert_eq!(view.allowed_domains_display, "@acme.com");
	assert_eq!(history.len(), 1);
	assert_eq!(history[0].tenant_id.as_deref(), Some("common"));

	let target = service
		.connection_target(&acme)
		.await
		.expect("Connection target lookup should succeed.")
		.expect("Reloaded bundle should still be complete.");

	assert_eq!(target.client_secret(), "gsecret");

	let dir = path.parent().expect("Snapshot path should have a parent directory.").to_owned();

	fs::remove_dir_all(&dir).unwrap_or_else(|e| {
		panic!("Failed to remove temporary store directory {}: {e}", dir.display())
	});
}
