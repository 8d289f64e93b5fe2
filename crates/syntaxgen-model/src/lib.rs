//! Entity node model for declaration-syntax rendering.
//!
//! An [`EntityNode`] is an immutable description of one documented API element:
//! its kind, name, modifiers, generics, attributes and signature. Nodes are produced
//! once by a metadata extraction stage and handed to the renderer read-only. Related
//! entities are referred to by [`ApiId`], never owned, so a node never forms a cycle.

/// Entity nodes and their parts.
pub mod entity;
/// Entity identifiers.
pub mod id;
/// Modifier flags, visibility and variance.
pub mod modifiers;
/// Type references.
pub mod types;
/// Attribute argument and default values.
pub mod value;

pub use crate::entity::{
	Accessor, Attachment, Attribute, Constraints, ContainingType, Containers, EntityKind,
	EntityNode, GenericParameter, MemberReference, MemberSubkind, MethodTag, NamedArgument,
	Parameter, TypeSubkind,
};
pub use crate::id::{ApiId, IdCategory};
pub use crate::modifiers::{Modifiers, Variance, Visibility};
pub use crate::types::TypeReference;
pub use crate::value::Value;
