//! The per-language generator contract and the dispatch shared by every backend.
//!
//! A [`SyntaxGenerator`] supplies one `write_*_syntax` method per declarable kind.
//! [`SyntaxGenerator::write_syntax`] owns the block boundaries, runs the
//! unsupported-feature guards, and then routes the entity to exactly one of those
//! methods with an exhaustive match over [`EntityKind`].

use bitflags::bitflags;
use once_cell::sync::Lazy;
use regex::Regex;
use syntaxgen_model::{
	ApiId, Attachment, EntityKind, EntityNode, MemberReference, MemberSubkind, MethodTag,
	Modifiers, TypeReference, TypeSubkind,
};

use crate::error::{RenderError, Result};
use crate::syntax::{Notation, clr};
use crate::writer::SyntaxWriter;

/// Special-name methods that are accessors (`get_X`, `add_Y`) rather than operators.
static ACCESSOR_NAME: Lazy<Regex> =
	Lazy::new(|| Regex::new(r"^[a-z]+_").expect("valid accessor name pattern"));

bitflags! {
	/// Constructs a language may be unable to express.
	///
	/// Flags are declared in guard priority order: when an entity trips several
	/// guards, the first one reported wins.
	#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
	pub struct Unsupported: u8 {
		/// Pointer-typed signatures, fixed buffers or an `unsafe` modifier.
		const UNSAFE = 1 << 0;
		/// C-style variable argument lists.
		const VARARGS = 1 << 1;
		/// Entities declaring their own generic parameters.
		const GENERIC = 1 << 2;
		/// Explicit interface implementations.
		const EXPLICIT_IMPLEMENTATION = 1 << 3;
	}
}

impl Unsupported {
	/// Every construct `entity` uses that some language might not support.
	pub fn detect(entity: &EntityNode) -> Self {
		let mut found = Self::empty();
		let is_unsafe = entity.has(Modifiers::UNSAFE)
			|| entity.signature_types().any(TypeReference::contains_pointer)
			|| entity
				.attributes
				.iter()
				.any(|attribute| attribute.is(clr::FIXED_BUFFER_ATTRIBUTE));
		found.set(Self::UNSAFE, is_unsafe);
		found.set(Self::VARARGS, entity.has(Modifiers::VARARGS));
		found.set(Self::GENERIC, !entity.generic_parameters.is_empty());
		found.set(
			Self::EXPLICIT_IMPLEMENTATION,
			entity.has(Modifiers::EXPLICIT_IMPLEMENTATION),
		);
		found
	}

	/// The single most important flag in the set.
	pub fn first(self) -> Option<Self> {
		self.iter().next()
	}

	/// Message key reporting this construct for `language`, e.g. `UnsupportedUnsafe_CSharp`.
	///
	/// Only meaningful for single flags.
	pub fn message_key(self, language: &str) -> String {
		let feature = if self.contains(Self::UNSAFE) {
			"Unsafe"
		} else if self.contains(Self::VARARGS) {
			"Varargs"
		} else if self.contains(Self::GENERIC) {
			"Generic"
		} else {
			"ExplicitImplementation"
		};
		unsupported_key(feature, language)
	}
}

/// Message key for a construct `feature` that `language` cannot express.
pub fn unsupported_key(feature: &str, language: &str) -> String {
	format!("Unsupported{feature}_{language}")
}

/// Direction of a user-defined conversion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CastKind {
	/// Widening conversion, named `Implicit`.
	Implicit,
	/// Narrowing conversion, named `Explicit`.
	Explicit,
}

impl CastKind {
	/// Classify a conversion by its member name.
	pub fn from_name(name: &str) -> Option<Self> {
		match name {
			"Implicit" => Some(Self::Implicit),
			"Explicit" => Some(Self::Explicit),
			_ => None,
		}
	}
}

/// The conversion direction of a cast entity, or an error if its name is not
/// one of the two conversion names.
pub fn cast_kind(entity: &EntityNode) -> Result<CastKind> {
	CastKind::from_name(&entity.name).ok_or_else(|| RenderError::MalformedCast {
		name: entity.name.clone(),
	})
}

/// Members an explicit implementation stands for.
pub fn implemented_members(entity: &EntityNode) -> Result<&[MemberReference]> {
	if entity.implemented_members.is_empty() {
		return Err(RenderError::MissingImplementedMember {
			id: entity.id.clone(),
		});
	}
	Ok(&entity.implemented_members)
}

/// The base class worth printing; the universal object base is left implicit.
pub fn explicit_base_type(entity: &EntityNode) -> Option<&TypeReference> {
	entity
		.base_type
		.as_ref()
		.filter(|base| !base.is_type(clr::OBJECT))
}

/// The declared result type, treating `System.Void` like an absent one.
pub fn result_type(entity: &EntityNode) -> Option<&TypeReference> {
	entity
		.return_type
		.as_ref()
		.filter(|ty| !ty.is_type(clr::VOID))
}

/// The name a constructor is declared under: its containing type's name.
pub fn constructor_name(entity: &EntityNode) -> &str {
	entity
		.containing_type()
		.map_or(entity.name.as_str(), |ty| ty.name.as_str())
}

/// A language backend.
///
/// Every method takes the entity read-only and a writer positioned inside an
/// open block. Methods write nothing outside that block and share no state
/// across calls, so one generator can serve any number of renders.
pub trait SyntaxGenerator {
	/// Language id used as the block tag and message-key suffix.
	fn language(&self) -> &'static str;

	/// Tables and wrap policy for the shared helpers.
	fn notation(&self) -> Notation<'_>;

	/// Constructs this language reports instead of rendering.
	fn guarded_features(&self) -> Unsupported {
		Unsupported::UNSAFE | Unsupported::VARARGS
	}

	/// Namespace declaration.
	fn write_namespace_syntax(&self, entity: &EntityNode, writer: &mut dyn SyntaxWriter)
	-> Result<()>;
	/// Class declaration.
	fn write_class_syntax(&self, entity: &EntityNode, writer: &mut dyn SyntaxWriter) -> Result<()>;
	/// Structure declaration.
	fn write_structure_syntax(&self, entity: &EntityNode, writer: &mut dyn SyntaxWriter)
	-> Result<()>;
	/// Interface declaration.
	fn write_interface_syntax(&self, entity: &EntityNode, writer: &mut dyn SyntaxWriter)
	-> Result<()>;
	/// Delegate declaration.
	fn write_delegate_syntax(&self, entity: &EntityNode, writer: &mut dyn SyntaxWriter)
	-> Result<()>;
	/// Enumeration declaration.
	fn write_enumeration_syntax(
		&self,
		entity: &EntityNode,
		writer: &mut dyn SyntaxWriter,
	) -> Result<()>;
	/// Constructor declaration.
	fn write_constructor_syntax(
		&self,
		entity: &EntityNode,
		writer: &mut dyn SyntaxWriter,
	) -> Result<()>;
	/// Ordinary method declaration.
	fn write_normal_method_syntax(
		&self,
		entity: &EntityNode,
		writer: &mut dyn SyntaxWriter,
	) -> Result<()>;
	/// User-defined operator declaration.
	fn write_operator_syntax(&self, entity: &EntityNode, writer: &mut dyn SyntaxWriter)
	-> Result<()>;
	/// User-defined conversion declaration.
	fn write_cast_syntax(&self, entity: &EntityNode, writer: &mut dyn SyntaxWriter) -> Result<()>;
	/// Property or indexer declaration.
	fn write_property_syntax(&self, entity: &EntityNode, writer: &mut dyn SyntaxWriter)
	-> Result<()>;
	/// Field declaration.
	fn write_field_syntax(&self, entity: &EntityNode, writer: &mut dyn SyntaxWriter) -> Result<()>;
	/// Event declaration.
	fn write_event_syntax(&self, entity: &EntityNode, writer: &mut dyn SyntaxWriter) -> Result<()>;

	/// Attached property: links to its getter and setter by default.
	fn write_attached_property_syntax(
		&self,
		entity: &EntityNode,
		writer: &mut dyn SyntaxWriter,
	) -> Result<()> {
		match &entity.attachment {
			Some(Attachment::Property { getter, setter }) => {
				write_see_also(&[getter.as_ref(), setter.as_ref()], writer);
				Ok(())
			}
			_ => self.write_property_syntax(entity, writer),
		}
	}

	/// Attached event: links to its adder and remover by default.
	fn write_attached_event_syntax(
		&self,
		entity: &EntityNode,
		writer: &mut dyn SyntaxWriter,
	) -> Result<()> {
		match &entity.attachment {
			Some(Attachment::Event { adder, remover }) => {
				write_see_also(&[adder.as_ref(), remover.as_ref()], writer);
				Ok(())
			}
			_ => self.write_event_syntax(entity, writer),
		}
	}

	/// Render `entity` as one complete block.
	///
	/// The block is closed even when rendering fails part way.
	fn write_syntax(&self, entity: &EntityNode, writer: &mut dyn SyntaxWriter) -> Result<()> {
		tracing::debug!(id = %entity.id, language = self.language(), "rendering syntax");
		writer.write_start_block(self.language());
		let result = self.write_entity_syntax(entity, writer);
		writer.write_end_block();
		if let Err(error) = &result {
			tracing::warn!(id = %entity.id, language = self.language(), %error, "render failed");
		}
		result
	}

	/// Run the guards, then route `entity` to its kind's writer.
	fn write_entity_syntax(&self, entity: &EntityNode, writer: &mut dyn SyntaxWriter) -> Result<()> {
		let unsupported = Unsupported::detect(entity) & self.guarded_features();
		if let Some(feature) = unsupported.first() {
			let key = feature.message_key(self.language());
			tracing::debug!(id = %entity.id, %key, "construct not expressible");
			writer.write_message(&key);
			return Ok(());
		}
		match entity.kind {
			EntityKind::Namespace => self.write_namespace_syntax(entity, writer),
			EntityKind::Type(subkind) => self.write_type_syntax(subkind, entity, writer),
			EntityKind::Member(subkind) => self.write_member_syntax(subkind, entity, writer),
		}
	}

	/// Route a type declaration.
	fn write_type_syntax(
		&self,
		subkind: TypeSubkind,
		entity: &EntityNode,
		writer: &mut dyn SyntaxWriter,
	) -> Result<()> {
		match subkind {
			TypeSubkind::Class => self.write_class_syntax(entity, writer),
			TypeSubkind::Structure => self.write_structure_syntax(entity, writer),
			TypeSubkind::Interface => self.write_interface_syntax(entity, writer),
			TypeSubkind::Delegate => self.write_delegate_syntax(entity, writer),
			TypeSubkind::Enumeration => self.write_enumeration_syntax(entity, writer),
		}
	}

	/// Route a member declaration. Properties and events backed by an
	/// accessor pair go to the attached writers.
	fn write_member_syntax(
		&self,
		subkind: MemberSubkind,
		entity: &EntityNode,
		writer: &mut dyn SyntaxWriter,
	) -> Result<()> {
		match (subkind, &entity.attachment) {
			(MemberSubkind::Constructor, _) => self.write_constructor_syntax(entity, writer),
			(MemberSubkind::Method(tag), _) => self.write_method_syntax(tag, entity, writer),
			(MemberSubkind::Property, Some(Attachment::Property { .. })) => {
				self.write_attached_property_syntax(entity, writer)
			}
			(MemberSubkind::Property, _) => self.write_property_syntax(entity, writer),
			(MemberSubkind::Field, _) => self.write_field_syntax(entity, writer),
			(MemberSubkind::Event, Some(Attachment::Event { .. })) => {
				self.write_attached_event_syntax(entity, writer)
			}
			(MemberSubkind::Event, _) => self.write_event_syntax(entity, writer),
		}
	}

	/// Route a method to the method, operator or conversion writer.
	///
	/// Special-name methods are conversions when named `Implicit`/`Explicit`,
	/// plain methods when their name has a lowercase accessor prefix, and
	/// operators otherwise.
	fn write_method_syntax(
		&self,
		tag: MethodTag,
		entity: &EntityNode,
		writer: &mut dyn SyntaxWriter,
	) -> Result<()> {
		match tag {
			MethodTag::Normal => self.write_normal_method_syntax(entity, writer),
			MethodTag::Operator => self.write_operator_syntax(entity, writer),
			MethodTag::Cast => {
				cast_kind(entity)?;
				self.write_cast_syntax(entity, writer)
			}
			MethodTag::Special => {
				if CastKind::from_name(&entity.name).is_some() {
					self.write_cast_syntax(entity, writer)
				} else if ACCESSOR_NAME.is_match(&entity.name) {
					self.write_normal_method_syntax(entity, writer)
				} else {
					self.write_operator_syntax(entity, writer)
				}
			}
		}
	}
}

/// Write `See a, b` with a link per present target; nothing if none are.
fn write_see_also(targets: &[Option<&ApiId>], writer: &mut dyn SyntaxWriter) {
	let mut first = true;
	for target in targets.iter().flatten() {
		if first {
			writer.write_string("See ");
			first = false;
		} else {
			writer.write_string(", ");
		}
		writer.write_reference_link(target);
	}
}

#[cfg(test)]
mod tests {
	use pretty_assertions::assert_eq;
	use syntaxgen_model::{Attribute, Parameter};

	use super::*;

	fn method(name: &str) -> EntityNode {
		EntityNode::new(
			format!("M:Widgets.Box.{name}"),
			EntityKind::Member(MemberSubkind::Method(MethodTag::Normal)),
			name,
		)
	}

	#[test]
	fn pointers_anywhere_in_the_signature_are_unsafe() {
		let entity = method("Read").with_parameter(Parameter::new(
			"buffer",
			TypeReference::array_of(
				1,
				TypeReference::pointer_to(TypeReference::named("T:System.Byte")),
			),
		));
		assert_eq!(Unsupported::detect(&entity), Unsupported::UNSAFE);
	}

	#[test]
	fn fixed_buffers_are_unsafe() {
		let entity = method("Buffer").with_attribute(Attribute::new(clr::FIXED_BUFFER_ATTRIBUTE));
		assert!(Unsupported::detect(&entity).contains(Unsupported::UNSAFE));
	}

	#[test]
	fn guard_priority_follows_declaration_order() {
		let all = Unsupported::all();
		assert_eq!(all.first(), Some(Unsupported::UNSAFE));
		assert_eq!(
			(Unsupported::GENERIC | Unsupported::EXPLICIT_IMPLEMENTATION).first(),
			Some(Unsupported::GENERIC)
		);
		assert_eq!(
			Unsupported::EXPLICIT_IMPLEMENTATION.message_key("JScript"),
			"UnsupportedExplicitImplementation_JScript"
		);
	}

	#[test]
	fn casts_must_be_named_for_their_direction() {
		assert_eq!(cast_kind(&method("Implicit")), Ok(CastKind::Implicit));
		assert_eq!(
			cast_kind(&method("Convert")),
			Err(RenderError::MalformedCast {
				name: "Convert".into()
			})
		);
	}

	#[test]
	fn accessor_prefixes_are_recognized() {
		assert!(ACCESSOR_NAME.is_match("get_Item"));
		assert!(ACCESSOR_NAME.is_match("op_Addition"));
		assert!(!ACCESSOR_NAME.is_match("Addition"));
		assert!(!ACCESSOR_NAME.is_match("Get_Item"));
	}

	#[test]
	fn object_base_is_implicit() {
		let class = EntityNode::new("T:Widgets.Box", EntityKind::Type(TypeSubkind::Class), "Box")
			.with_base_type(TypeReference::named(clr::OBJECT));
		assert_eq!(explicit_base_type(&class), None);
	}
}
