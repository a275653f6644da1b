// self
use crate::{_prelude::*, company::CompanyId, obs::OperationKind};

/// Type alias that resolves to an instrumented future when tracing is enabled.
#[cfg(feature = "tracing")]
pub type InstrumentedOperation<F> = tracing::instrument::Instrumented<F>;
/// Passthrough future type when tracing is disabled.
#[cfg(not(feature = "tracing"))]
pub type InstrumentedOperation<F> = F;

/// Span wrapping one service operation for one company.
#[derive(Clone, Debug)]
pub struct OperationSpan {
	#[cfg(feature = "tracing")]
	span: tracing::Span,
}
impl OperationSpan {
	/// Creates a new span tagged with the operation kind and company.
	pub fn new(kind: OperationKind, company: &CompanyId) -> Self {
		#[cfg(feature = "tracing")]
		{
			let span = tracing::info_span!(
				"email_provider_config.operation",
				operation = kind.as_str(),
				company = company.as_str()
			);

			Self { span }
		}
		#[cfg(not(feature = "tracing"))]
		{
			let _ = (kind, company);

			Self {}
		}
	}

	/// Instruments an async block without holding a guard across `.await` points.
	pub fn instrument<Fut>(&self, fut: Fut) -> InstrumentedOperation<Fut>
	where
		Fut: Future,
	{
		#[cfg(feature = "tracing")]
		{
			use tracing::Instrument;

			fut.instrument(self.span.clone())
		}
		#[cfg(not(feature = "tracing"))]
		{
			fut
		}
	}
}

/// Emits an event for a persisted update. Never logs credential values.
pub fn log_update_accepted(provider: &str, revision: u64, replaced: bool) {
	#[cfg(feature = "tracing")]
	{
		tracing::info!(provider, revision, replaced, "provider configuration updated");
	}
	#[cfg(not(feature = "tracing"))]
	{
		let _ = (provider, revision, replaced);
	}
}

/// Emits an event for a rejected update, naming the offending fields.
pub fn log_update_rejected(fields: &[&str]) {
	#[cfg(feature = "tracing")]
	{
		tracing::warn!(fields = ?fields, "provider configuration update rejected");
	}
	#[cfg(not(feature = "tracing"))]
	{
		let _ = fields;
	}
}

/// Emits an event for a storage failure.
pub fn log_store_failure(error: &dyn std::error::Error) {
	#[cfg(feature = "tracing")]
	{
		tracing::error!(error = %error, "provider configuration store failed");
	}
	#[cfg(not(feature = "tracing"))]
	{
		let _ = error;
	}
}
