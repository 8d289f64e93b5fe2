use serde::{Deserialize, Serialize};

use crate::id::ApiId;

/// One occurrence of a type inside a signature.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum TypeReference {
	/// A named type.
	Type {
		/// Type id (`T:...`).
		id: ApiId,
	},
	/// An array of `rank` dimensions.
	Array {
		/// Number of dimensions, at least one.
		rank: u32,
		/// Element type.
		element: Box<TypeReference>,
	},
	/// An unmanaged pointer.
	Pointer {
		/// Pointed-to type.
		pointee: Box<TypeReference>,
	},
	/// A managed reference, as used by by-ref parameters.
	Reference {
		/// Referenced type.
		referent: Box<TypeReference>,
	},
	/// A generic parameter of the enclosing type or method.
	Template {
		/// Parameter name.
		name: String,
		/// Custom modifier type ids; these have no rendered form.
		#[serde(default)]
		modifiers: Vec<ApiId>,
	},
	/// A constructed generic type.
	Specialization {
		/// The generic type definition.
		definition: ApiId,
		/// Type arguments in declaration order.
		arguments: Vec<TypeReference>,
	},
}

impl TypeReference {
	/// A named type reference.
	pub fn named(id: impl Into<ApiId>) -> Self {
		Self::Type { id: id.into() }
	}

	/// An array of `element` with `rank` dimensions.
	pub fn array_of(rank: u32, element: TypeReference) -> Self {
		Self::Array {
			rank,
			element: Box::new(element),
		}
	}

	/// A pointer to `pointee`.
	pub fn pointer_to(pointee: TypeReference) -> Self {
		Self::Pointer {
			pointee: Box::new(pointee),
		}
	}

	/// A managed reference to `referent`.
	pub fn reference_to(referent: TypeReference) -> Self {
		Self::Reference {
			referent: Box::new(referent),
		}
	}

	/// A generic parameter reference.
	pub fn template(name: impl Into<String>) -> Self {
		Self::Template {
			name: name.into(),
			modifiers: Vec::new(),
		}
	}

	/// A constructed generic type.
	pub fn specialization(definition: impl Into<ApiId>, arguments: Vec<TypeReference>) -> Self {
		Self::Specialization {
			definition: definition.into(),
			arguments,
		}
	}

	/// Whether this reference names exactly the type `id`.
	pub fn is_type(&self, id: &str) -> bool {
		matches!(self, Self::Type { id: own } if own == id)
	}

	/// Whether a pointer appears anywhere inside this reference.
	pub fn contains_pointer(&self) -> bool {
		match self {
			Self::Pointer { .. } => true,
			Self::Array { element, .. } => element.contains_pointer(),
			Self::Reference { referent } => referent.contains_pointer(),
			Self::Specialization { arguments, .. } => {
				arguments.iter().any(TypeReference::contains_pointer)
			}
			Self::Type { .. } | Self::Template { .. } => false,
		}
	}

	/// Strip a managed reference wrapper, if any.
	pub fn dereferenced(&self) -> &TypeReference {
		match self {
			Self::Reference { referent } => referent,
			other => other,
		}
	}
}
