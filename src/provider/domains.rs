//! Allow-list of email domains the provider integration may operate against.

// self
use crate::_prelude::*;

/// Ordered, duplicate-free list of domain entries such as `@company.com`.
///
/// An empty list permits every domain. Enforcement lives with the integration that sends or
/// receives mail; this type is the source of truth for the permitted set.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "Vec<String>", into = "Vec<String>")]
pub struct AllowedDomains(Vec<String>);
impl AllowedDomains {
	/// Parses the comma-separated form value; entries are trimmed and blanks dropped.
	pub fn parse(raw: &str) -> Self {
		Self::from_iter(raw.split(','))
	}

	/// Returns `true` when no restriction is configured.
	pub fn is_empty(&self) -> bool {
		self.0.is_empty()
	}

	/// Number of entries.
	pub fn len(&self) -> usize {
		self.0.len()
	}

	/// Iterator over entries in submission order.
	pub fn iter(&self) -> impl Iterator<Item = &str> {
		self.0.iter().map(String::as_str)
	}

	/// Entries as a slice.
	pub fn as_slice(&self) -> &[String] {
		&self.0
	}

	/// Display form, joined the way the form field expects it back.
	pub fn joined(&self) -> String {
		self.0.join(", ")
	}

	/// Checks an address (`user@company.com`) or bare domain against the allow-list.
	pub fn permits(&self, address_or_domain: &str) -> bool {
		if self.0.is_empty() {
			return true;
		}

		let candidate = domain_of(address_or_domain);

		!candidate.is_empty() && self.0.iter().any(|entry| domain_of(entry) == candidate)
	}
}
impl<S> FromIterator<S> for AllowedDomains
where
	S: AsRef<str>,
{
	fn from_iter<I>(iter: I) -> Self
	where
		I: IntoIterator<Item = S>,
	{
		let mut entries = Vec::<String>::new();

		for raw in iter {
			let entry = raw.as_ref().trim();

			if entry.is_empty() || entries.iter().any(|seen| seen == entry) {
				continue;
			}

			entries.push(entry.to_owned());
		}

		Self(entries)
	}
}
impl From<Vec<String>> for AllowedDomains {
	fn from(value: Vec<String>) -> Self {
		Self::from_iter(value)
	}
}
impl From<AllowedDomains> for Vec<String> {
	fn from(value: AllowedDomains) -> Self {
		value.0
	}
}
impl Display for AllowedDomains {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(&self.joined())
	}
}

fn domain_of(value: &str) -> String {
	let value = value.trim();
	let domain = value.rsplit_once('@').map_or(value, |(_, domain)| domain);

	domain.to_ascii_lowercase()
}
