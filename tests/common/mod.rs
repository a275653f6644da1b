//! Fixtures shared by the integration tests.

#![allow(dead_code)]

// std
use std::sync::Arc;
// self
use email_provider_config::{
	company::{AdminId, CompanyId},
	form::ProviderForm,
	service::ProviderConfigService,
	settings::ServiceSettings,
	store::{ConfigStore, MemoryStore},
};

pub fn company(value: &str) -> CompanyId {
	CompanyId::new(value).expect("Company fixture should be a valid identifier.")
}

pub fn admin(value: &str) -> AdminId {
	AdminId::new(value).expect("Admin fixture should be a valid identifier.")
}

pub fn oauth_form(provider_type: &str, client_id: &str, client_secret: &str) -> ProviderForm {
	ProviderForm::new(provider_type).client_id(client_id).client_secret(client_secret)
}

pub fn build_memory_service() -> (ProviderConfigService, Arc<MemoryStore>) {
	build_memory_service_with(ServiceSettings::default())
}

pub fn build_memory_service_with(
	settings: ServiceSettings,
) -> (ProviderConfigService, Arc<MemoryStore>) {
	let backend = Arc::new(MemoryStore::default());
	let store: Arc<dyn ConfigStore> = backend.clone();

	(ProviderConfigService::new(store, settings), backend)
}
