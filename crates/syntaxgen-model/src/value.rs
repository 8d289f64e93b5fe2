use serde::{Deserialize, Serialize};

use crate::types::TypeReference;

/// Payload of an attribute argument or a parameter default value.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Value {
	/// The null reference.
	Null,
	/// A type object, as produced by `typeof`.
	TypeOf {
		/// The referenced type.
		#[serde(rename = "type")]
		type_: TypeReference,
	},
	/// A combination of enumeration fields.
	EnumFlags {
		/// The enumeration type.
		#[serde(rename = "type")]
		type_: TypeReference,
		/// Field names in source order.
		fields: Vec<String>,
	},
	/// A primitive literal in its metadata text form.
	Literal {
		/// Declared type of the literal.
		#[serde(rename = "type")]
		type_: TypeReference,
		/// Raw literal text.
		text: String,
	},
	/// An array whose elements are not available in metadata.
	ArrayPlaceholder {
		/// Element type.
		element: TypeReference,
	},
}

impl Value {
	/// A literal of type `type_id`.
	pub fn literal(type_id: &str, text: impl Into<String>) -> Self {
		Self::Literal {
			type_: TypeReference::named(type_id),
			text: text.into(),
		}
	}

	/// A combination of fields of the enumeration `type_id`.
	pub fn enum_flags<I, S>(type_id: &str, fields: I) -> Self
	where
		I: IntoIterator<Item = S>,
		S: Into<String>,
	{
		Self::EnumFlags {
			type_: TypeReference::named(type_id),
			fields: fields.into_iter().map(Into::into).collect(),
		}
	}
}
