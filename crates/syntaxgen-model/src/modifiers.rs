use bitflags::bitflags;
use serde::{Deserialize, Serialize};

bitflags! {
	/// Declaration modifiers carried by an entity node.
	#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
	#[serde(transparent)]
	pub struct Modifiers: u32 {
		/// Static member, or together with `ABSTRACT | SEALED` a static-like type.
		const STATIC = 1 << 0;
		/// Abstract type or member.
		const ABSTRACT = 1 << 1;
		/// Sealed type.
		const SEALED = 1 << 2;
		/// Virtual member.
		const VIRTUAL = 1 << 3;
		/// Member overriding an inherited virtual member.
		const OVERRIDE = 1 << 4;
		/// Virtual member that cannot be overridden further.
		const FINAL = 1 << 5;
		/// Read-only (init-only) field.
		const READ_ONLY = 1 << 6;
		/// Literal (constant) field.
		const LITERAL = 1 << 7;
		/// Type marked serializable in metadata.
		const SERIALIZABLE = 1 << 8;
		/// Volatile field.
		const VOLATILE = 1 << 9;
		/// Pointer-bearing signature or fixed-size buffer.
		const UNSAFE = 1 << 10;
		/// Variable-argument (`__arglist`) calling convention.
		const VARARGS = 1 << 11;
		/// Extension method.
		const EXTENSION = 1 << 12;
		/// Explicit interface implementation.
		const EXPLICIT_IMPLEMENTATION = 1 << 13;
		/// Property designated as the type's default indexer.
		const DEFAULT_INDEXER = 1 << 14;
	}
}

/// Declared accessibility of an entity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Visibility {
	/// Accessible everywhere.
	#[default]
	Public,
	/// Accessible to derived types.
	Family,
	/// Accessible to derived types or the declaring assembly.
	FamilyOrAssembly,
	/// Accessible to derived types within the declaring assembly.
	FamilyAndAssembly,
	/// Accessible within the declaring assembly.
	Assembly,
	/// Accessible within the declaring type.
	Private,
}

/// Variance annotation of a generic parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Variance {
	/// Invariant.
	#[default]
	None,
	/// Covariant (`out`).
	Covariant,
	/// Contravariant (`in`).
	Contravariant,
}
