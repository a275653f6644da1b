//! OAuth client secret wrapper with a display-only mask.
//!
//! Display surfaces receive [`SecretMask`]; the raw value is readable inside the crate only and
//! leaves it through [`ConnectionTarget`](crate::service::ConnectionTarget).

// crates.io
use base64::{Engine as _, engine::general_purpose::URL_SAFE_NO_PAD};
use sha2::{Digest, Sha256};
// self
use crate::_prelude::*;

const FINGERPRINT_LEN: usize = 8;
const PLACEHOLDER: &str = "********";

/// OAuth client secret; formatting never prints the stored value.
#[derive(Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ClientSecret(String);
impl ClientSecret {
	/// Wraps a secret string.
	pub fn new(value: impl Into<String>) -> Self {
		Self(value.into())
	}

	/// Returns `true` when nothing but whitespace was stored.
	pub fn is_blank(&self) -> bool {
		self.0.trim().is_empty()
	}

	/// Produces the display-safe view of this secret.
	pub fn mask(&self) -> SecretMask {
		if self.is_blank() {
			return SecretMask::default();
		}

		SecretMask { set: true, fingerprint: Some(fingerprint(&self.0)) }
	}

	pub(crate) fn expose(&self) -> &str {
		&self.0
	}
}
impl Debug for ClientSecret {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_tuple("ClientSecret").field(&"<redacted>").finish()
	}
}
impl Display for ClientSecret {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str("<redacted>")
	}
}

/// What a display surface may learn about a stored secret.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SecretMask {
	/// Whether a non-blank secret is stored.
	pub set: bool,
	/// Short digest prefix so administrators can tell when the secret changed.
	pub fingerprint: Option<String>,
}
impl SecretMask {
	/// Placeholder to pre-fill password inputs with; empty when no secret is stored.
	pub fn placeholder(&self) -> &'static str {
		if self.set { PLACEHOLDER } else { "" }
	}
}
impl Display for SecretMask {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		match &self.fingerprint {
			Some(fingerprint) => write!(f, "{PLACEHOLDER} ({fingerprint})"),
			None => f.write_str("not set"),
		}
	}
}

fn fingerprint(value: &str) -> String {
	let digest = Sha256::digest(value.as_bytes());
	let mut encoded = URL_SAFE_NO_PAD.encode(digest);

	encoded.truncate(FINGERPRINT_LEN);

	encoded
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	#[test]
	fn secret_formatters_redact() {
		let secret = ClientSecret::new("s3cr3t-value");

		assert_eq!(format!("{secret:?}"), "ClientSecret(\"<redacted>\")");
		assert_eq!(format!("{secret}"), "<redacted>");
	}

	#[test]
	fn mask_never_contains_the_secret() {
		let secret = ClientSecret::new("s3cr3t-value");
		let mask = secret.mask();
		let rendered = format!("{mask} {}", serde_json::to_string(&mask).expect("Mask serializes."));

		assert!(mask.set);
		assert_eq!(mask.placeholder(), PLACEHOLDER);
		assert_eq!(mask.fingerprint.as_deref().map(str::len), Some(FINGERPRINT_LEN));
		assert!(!rendered.contains("s3cr3t-value"));
	}

	#[test]
	fn fingerprint_tracks_secret_changes() {
		let first = ClientSecret::new("first").mask();
		let again = ClientSecret::new("first").mask();
		let second = ClientSecret::new("second").mask();

		assert_eq!(first, again);
		assert_ne!(first.fingerprint, second.fingerprint);
	}

	#[test]
	fn blank_secrets_mask_as_unset() {
		let mask = ClientSecret::new("   ").mask();

		assert_eq!(mask, SecretMask::default());
		assert_eq!(mask.placeholder(), "");
		assert_eq!(mask.to_string(), "not set");
	}
}
