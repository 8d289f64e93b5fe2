use std::fmt;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

/// Generic arity suffix appended to type names in metadata ids (`List`1`).
static ARITY_SUFFIX: Lazy<Regex> =
	Lazy::new(|| Regex::new(r"`{1,2}[0-9]+$").expect("valid arity suffix pattern"));

/// Category encoded by the sigil at the start of an entity id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IdCategory {
	/// `N:` ids.
	Namespace,
	/// `T:` ids.
	Type,
	/// `M:` ids, covering methods, constructors, operators and casts.
	Method,
	/// `P:` ids.
	Property,
	/// `F:` ids.
	Field,
	/// `E:` ids.
	Event,
	/// Anything without a recognised sigil.
	Unknown,
}

/// Stable identifier of an API entity, e.g. `T:System.Collections.Generic.List`1`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ApiId(String);

impl ApiId {
	/// Wrap an id string.
	pub fn new(id: impl Into<String>) -> Self {
		Self(id.into())
	}

	/// The raw id text.
	pub fn as_str(&self) -> &str {
		&self.0
	}

	/// Decode the category sigil.
	pub fn category(&self) -> IdCategory {
		match self.0.split_once(':') {
			Some(("N", _)) => IdCategory::Namespace,
			Some(("T", _)) => IdCategory::Type,
			Some(("M", _)) => IdCategory::Method,
			Some(("P", _)) => IdCategory::Property,
			Some(("F", _)) => IdCategory::Field,
			Some(("E", _)) => IdCategory::Event,
			_ => IdCategory::Unknown,
		}
	}

	/// The qualified name with the sigil removed.
	pub fn qualified_name(&self) -> &str {
		match self.0.split_once(':') {
			Some((sigil, rest)) if sigil.len() == 1 => rest,
			_ => &self.0,
		}
	}

	/// The display name of the entity.
	///
	/// Namespaces keep their dotted name. Everything else drops the parameter
	/// list, keeps the last dotted segment and strips any generic arity suffix.
	pub fn short_name(&self) -> String {
		let qualified = self.qualified_name();
		if self.category() == IdCategory::Namespace {
			return qualified.to_string();
		}
		let without_params = qualified.split('(').next().unwrap_or(qualified);
		let last = without_params
			.rsplit(['.', '+'])
			.next()
			.unwrap_or(without_params);
		let last = last.strip_prefix('#').unwrap_or(last);
		ARITY_SUFFIX.replace(last, "").into_owned()
	}

	/// The qualified name of the type that declares this member, if the id names one.
	pub fn declaring_type_name(&self) -> Option<&str> {
		match self.category() {
			IdCategory::Namespace | IdCategory::Type | IdCategory::Unknown => None,
			_ => {
				let qualified = self.qualified_name();
				let without_params = qualified.split('(').next().unwrap_or(qualified);
				without_params.rsplit_once('.').map(|(owner, _)| owner)
			}
		}
	}
}

impl fmt::Display for ApiId {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&self.0)
	}
}

impl From<&str> for ApiId {
	fn from(id: &str) -> Self {
		Self::new(id)
	}
}

impl From<String> for ApiId {
	fn from(id: String) -> Self {
		Self(id)
	}
}

impl PartialEq<str> for ApiId {
	fn eq(&self, other: &str) -> bool {
		self.0 == other
	}
}

impl PartialEq<&str> for ApiId {
	fn eq(&self, other: &&str) -> bool {
		self.0 == *other
	}
}
