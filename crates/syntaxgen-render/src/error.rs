use syntaxgen_model::{ApiId, TypeReference};
use thiserror::Error;

/// Errors raised when an entity node violates the metadata contract.
///
/// Unsupported language features are not errors; generators report those
/// in-band through [`crate::writer::SyntaxWriter::write_message`].
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RenderError {
	/// A conversion operator whose name is neither `Implicit` nor `Explicit`.
	#[error("cast operator '{name}' must be named Implicit or Explicit")]
	MalformedCast {
		/// The offending member name.
		name: String,
	},
	/// An explicit implementation that does not say what it implements.
	#[error("{id} is an explicit implementation but names no implemented member")]
	MissingImplementedMember {
		/// The offending entity.
		id: ApiId,
	},
	/// An enumeration flag value with no fields.
	#[error("enumeration value of type {type_:?} has no field names")]
	EmptyEnumFlags {
		/// The enumeration type.
		type_: TypeReference,
	},
	/// A language identifier no generator answers to.
	#[error("unknown syntax language '{0}'")]
	UnknownLanguage(String),
}

/// Result type returned by renderer helpers.
pub type Result<T> = std::result::Result<T, RenderError>;
