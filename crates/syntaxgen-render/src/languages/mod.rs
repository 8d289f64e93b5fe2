//! The four language backends and the pieces of declaration shape they share.

use std::fmt;
use std::str::FromStr;

use syntaxgen_model::{Accessor, EntityNode, Modifiers, TypeReference};

use crate::error::{RenderError, Result};
use crate::syntax::{Notation, clr};
use crate::writer::SyntaxWriter;

/// C# backend.
pub mod csharp;
/// JScript backend.
pub mod jscript;
/// Visual Basic backend.
pub mod visual_basic;
pub mod xaml;

/// A target language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Language {
	/// C#.
	CSharp,
	/// Visual Basic.
	VisualBasic,
	/// XAML attribute usage.
	Xaml,
	/// JScript.
	JScript,
}

impl Language {
	/// Every language, in the order output is usually presented.
	pub const ALL: [Self; 4] = [Self::CSharp, Self::VisualBasic, Self::Xaml, Self::JScript];

	/// Id used as the block tag and message-key suffix.
	pub fn id(self) -> &'static str {
		match self {
			Self::CSharp => csharp::LANGUAGE,
			Self::VisualBasic => visual_basic::LANGUAGE,
			Self::Xaml => xaml::LANGUAGE,
			Self::JScript => jscript::LANGUAGE,
		}
	}
}

impl fmt::Display for Language {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.id())
	}
}

impl FromStr for Language {
	type Err = RenderError;

	fn from_str(value: &str) -> Result<Self> {
		let normalized = value.trim().to_ascii_lowercase().replace(['-', '_', ' '], "");
		match normalized.as_str() {
			"csharp" | "cs" | "c#" => Ok(Self::CSharp),
			"visualbasic" | "vb" | "vbnet" | "vb.net" => Ok(Self::VisualBasic),
			"xaml" => Ok(Self::Xaml),
			"jscript" | "js" | "jscript.net" => Ok(Self::JScript),
			_ => Err(RenderError::UnknownLanguage(value.to_string())),
		}
	}
}

/// Inheritance keyword slot of a type declaration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum TypeInheritance {
	/// Abstract and sealed together: a static, non-instantiable type.
	Static,
	/// Must be derived from.
	Abstract,
	/// Cannot be derived from.
	Sealed,
	/// No keyword.
	None,
}

impl TypeInheritance {
	pub(crate) fn of(entity: &EntityNode) -> Self {
		let is_abstract = entity.has(Modifiers::ABSTRACT);
		let is_sealed = entity.has(Modifiers::SEALED);
		match (is_abstract, is_sealed) {
			(true, true) => Self::Static,
			(true, false) => Self::Abstract,
			(false, true) => Self::Sealed,
			(false, false) => Self::None,
		}
	}
}

/// Inheritance keyword slot of a method, property or event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ProcedureInheritance {
	/// Belongs to the type rather than an instance.
	Static,
	/// Has no body.
	Abstract,
	/// Overrides and forbids further overriding.
	SealedOverride,
	/// Overrides a base member.
	Override,
	/// Can be overridden.
	Virtual,
	/// No keyword. Interface members always land here.
	None,
}

impl ProcedureInheritance {
	pub(crate) fn of(entity: &EntityNode) -> Self {
		if entity.is_interface_member() {
			return Self::None;
		}
		if entity.has(Modifiers::STATIC) {
			Self::Static
		} else if entity.has(Modifiers::ABSTRACT) {
			Self::Abstract
		} else if entity.has(Modifiers::OVERRIDE) && entity.has(Modifiers::FINAL) {
			Self::SealedOverride
		} else if entity.has(Modifiers::OVERRIDE) {
			Self::Override
		} else if entity.has(Modifiers::VIRTUAL) && !entity.has(Modifiers::FINAL) {
			Self::Virtual
		} else {
			Self::None
		}
	}
}

/// Write the entity's attributes, one per line, plus the serializable marker
/// when only the modifier records it.
pub(crate) fn write_declaration_attributes(
	notation: &Notation<'_>,
	entity: &EntityNode,
	writer: &mut dyn SyntaxWriter,
) -> Result<()> {
	notation.write_attributes(&entity.attributes, writer)?;
	let has_marker = entity
		.attributes
		.iter()
		.any(|attribute| attribute.is(clr::SERIALIZABLE_ATTRIBUTE));
	if entity.has(Modifiers::SERIALIZABLE) && !has_marker {
		notation.write_attribute_usage(clr::SERIALIZABLE_ATTRIBUTE, writer);
		notation.write_continued_line(writer);
	}
	Ok(())
}

/// Write the visibility keyword and a space, unless the entity is an
/// interface member, whose accessibility is implied.
pub(crate) fn write_member_visibility(
	notation: &Notation<'_>,
	entity: &EntityNode,
	writer: &mut dyn SyntaxWriter,
) {
	if entity.is_interface_member() {
		return;
	}
	notation.write_visibility(entity.visibility, writer);
	writer.write_string(" ");
}

/// Write an accessor's own visibility and a space when it differs from the
/// property's.
pub(crate) fn write_accessor_visibility(
	notation: &Notation<'_>,
	entity: &EntityNode,
	accessor: &Accessor,
	writer: &mut dyn SyntaxWriter,
) {
	if entity.is_interface_member() {
		return;
	}
	if let Some(visibility) = accessor.visibility
		&& visibility != entity.visibility
	{
		notation.write_visibility(visibility, writer);
		writer.write_string(" ");
	}
}

/// Write the base class followed by the interfaces as one list.
pub(crate) fn write_base_list(
	notation: &Notation<'_>,
	base: Option<&TypeReference>,
	interfaces: &[TypeReference],
	writer: &mut dyn SyntaxWriter,
) {
	let bases: Vec<TypeReference> = base.into_iter().chain(interfaces).cloned().collect();
	notation.write_type_list(&bases, writer);
}
