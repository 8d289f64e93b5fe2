//! XAML usage syntax.
//!
//! XAML has no declarations. For types deriving from a UI base type it shows
//! how the type is used in markup: an object element for concrete classes and
//! attribute usages for settable properties and events. Everything else
//! renders as an empty block.
//!
//! Unsafe and varargs entities are reported before any of this. Generic and
//! explicit implementation entities are only reported once they would have
//! rendered a usage.

use syntaxgen_model::{ApiId, Attachment, EntityNode, Modifiers, TypeReference, Visibility};

use crate::error::Result;
use crate::generator::{SyntaxGenerator, Unsupported};
use crate::syntax::{
	ArrayPlaceholder, CharNotation, ConstraintStyle, DEFAULT_WRAP_COLUMN, Dialect, Notation,
	ParameterNotation, StringEscape, TypeAnnotation,
};
use crate::writer::SyntaxWriter;

/// Language id.
pub const LANGUAGE: &str = "XAML";

/// Guards applied after UI detection.
const USAGE_GUARDS: Unsupported =
	Unsupported::GENERIC.union(Unsupported::EXPLICIT_IMPLEMENTATION);

/// Base types whose descendants can appear in markup.
pub const DEFAULT_UI_BASE_TYPES: [&str; 2] = [
	"T:System.Windows.FrameworkElement",
	"T:System.Windows.FrameworkContentElement",
];

/// XAML tables. Only type references and values are ever rendered through them.
pub static DIALECT: Dialect = Dialect {
	language: LANGUAGE,
	null_keyword: "{x:Null}",
	true_keyword: "True",
	false_keyword: "False",
	or_operator: ",",
	typeof_keyword: Some("x:Type"),
	float_suffix: "",
	string_escape: StringEscape::DoubledQuote,
	char_notation: CharNotation::SingleQuoted,
	array_placeholder: ArrayPlaceholder::Literal("..."),
	named_argument_separator: "=",
	attribute_brackets: ("", ""),
	generic_brackets: ("(", ")"),
	array_brackets: ("[", "]"),
	pointer_suffix: None,
	line_continuation: None,
	type_annotation: TypeAnnotation::Leading,
	constraint_style: ConstraintStyle::Omitted,
	constraint_keywords: ["", "", ""],
	variance_keywords: ("", ""),
	parameters: ParameterNotation {
		open: "",
		close: "",
		omit_when_empty: true,
		separator: "",
		out: &[],
		in_: &[],
		by_ref: &[],
		params_array: &[],
		optional: &[],
		optional_with_default: &[],
		receiver: &[],
		default_values: false,
	},
	builtin_types: &[],
	operators: &[],
	visibility: no_visibility,
};

fn no_visibility(_: Visibility) -> &'static str {
	""
}

/// Renders XAML usage for UI types and their members.
#[derive(Debug, Clone)]
pub struct XamlGenerator {
	wrap_column: usize,
	base_types: Vec<ApiId>,
}

impl Default for XamlGenerator {
	fn default() -> Self {
		Self::new(DEFAULT_WRAP_COLUMN)
	}
}

impl XamlGenerator {
	/// A generator recognizing the default UI base types.
	pub fn new(wrap_column: usize) -> Self {
		Self {
			wrap_column,
			base_types: DEFAULT_UI_BASE_TYPES.iter().copied().map(ApiId::new).collect(),
		}
	}

	/// Replace the UI base types.
	pub fn with_base_types<I, S>(mut self, base_types: I) -> Self
	where
		I: IntoIterator<Item = S>,
		S: Into<ApiId>,
	{
		self.base_types = base_types.into_iter().map(Into::into).collect();
		self
	}

	fn is_ui_type(&self, id: &ApiId, ancestors: &[ApiId]) -> bool {
		std::iter::once(id)
			.chain(ancestors)
			.any(|candidate| self.base_types.contains(candidate))
	}

	/// Whether a member belongs to a UI type.
	fn is_ui_member(&self, entity: &EntityNode) -> bool {
		entity
			.containing_type()
			.is_some_and(|ty| self.is_ui_type(&ty.id, &ty.ancestors))
	}

	/// Write the message for a construct no usage form can carry. Returns
	/// whether one was written.
	fn write_unexpressible(&self, entity: &EntityNode, writer: &mut dyn SyntaxWriter) -> bool {
		let found = Unsupported::detect(entity) & USAGE_GUARDS;
		match found.first() {
			Some(feature) => {
				let key = feature.message_key(LANGUAGE);
				tracing::debug!(id = %entity.id, %key, "construct not expressible");
				writer.write_message(&key);
				true
			}
			None => false,
		}
	}

	fn is_public_instance_member(entity: &EntityNode) -> bool {
		entity.visibility == Visibility::Public && !entity.has(Modifiers::STATIC)
	}

	/// `<object Name="value" .../>`, where the value is a type or a placeholder.
	fn write_attribute_usage(
		&self,
		owner: Option<&str>,
		name: &str,
		value: AttributeValue<'_>,
		writer: &mut dyn SyntaxWriter,
	) {
		writer.write_string("<");
		writer.write_parameter("object");
		writer.write_string(" ");
		if let Some(owner) = owner {
			writer.write_identifier(owner);
			writer.write_string(".");
		}
		writer.write_identifier(name);
		writer.write_string("=\"");
		match value {
			AttributeValue::Type(ty) => self.notation().write_type_reference(ty, writer),
			AttributeValue::Handler => writer.write_parameter("handler"),
		}
		writer.write_string("\" .../>");
	}
}

enum AttributeValue<'a> {
	Type(&'a TypeReference),
	Handler,
}

impl SyntaxGenerator for XamlGenerator {
	fn language(&self) -> &'static str {
		LANGUAGE
	}

	fn notation(&self) -> Notation<'_> {
		Notation::new(&DIALECT, self.wrap_column)
	}

	fn guarded_features(&self) -> Unsupported {
		Unsupported::UNSAFE | Unsupported::VARARGS
	}

	fn write_namespace_syntax(&self, _: &EntityNode, _: &mut dyn SyntaxWriter) -> Result<()> {
		Ok(())
	}

	fn write_class_syntax(&self, entity: &EntityNode, writer: &mut dyn SyntaxWriter) -> Result<()> {
		let is_concrete = !entity.has(Modifiers::ABSTRACT);
		if is_concrete
			&& entity.visibility == Visibility::Public
			&& self.is_ui_type(&entity.id, &entity.ancestors)
			&& !self.write_unexpressible(entity, writer)
		{
			writer.write_string("<");
			writer.write_identifier(&entity.name);
			writer.write_string(" .../>");
		}
		Ok(())
	}

	fn write_structure_syntax(&self, _: &EntityNode, _: &mut dyn SyntaxWriter) -> Result<()> {
		Ok(())
	}

	fn write_interface_syntax(&self, _: &EntityNode, _: &mut dyn SyntaxWriter) -> Result<()> {
		Ok(())
	}

	fn write_delegate_syntax(&self, _: &EntityNode, _: &mut dyn SyntaxWriter) -> Result<()> {
		Ok(())
	}

	fn write_enumeration_syntax(&self, _: &EntityNode, _: &mut dyn SyntaxWriter) -> Result<()> {
		Ok(())
	}

	fn write_constructor_syntax(&self, _: &EntityNode, _: &mut dyn SyntaxWriter) -> Result<()> {
		Ok(())
	}

	fn write_normal_method_syntax(&self, _: &EntityNode, _: &mut dyn SyntaxWriter) -> Result<()> {
		Ok(())
	}

	fn write_operator_syntax(&self, _: &EntityNode, _: &mut dyn SyntaxWriter) -> Result<()> {
		Ok(())
	}

	fn write_cast_syntax(&self, _: &EntityNode, _: &mut dyn SyntaxWriter) -> Result<()> {
		Ok(())
	}

	fn write_property_syntax(
		&self,
		entity: &EntityNode,
		writer: &mut dyn SyntaxWriter,
	) -> Result<()> {
		let is_settable = entity.setter.as_ref().is_some_and(|setter| {
			setter
				.visibility
				.is_none_or(|visibility| visibility == Visibility::Public)
		});
		let Some(ty) = &entity.return_type else {
			return Ok(());
		};
		if is_settable
			&& Self::is_public_instance_member(entity)
			&& !entity.is_indexer()
			&& !matches!(ty, TypeReference::Array { .. })
			&& self.is_ui_member(entity)
			&& !self.write_unexpressible(entity, writer)
		{
			self.write_attribute_usage(None, &entity.name, AttributeValue::Type(ty), writer);
		}
		Ok(())
	}

	fn write_field_syntax(&self, _: &EntityNode, _: &mut dyn SyntaxWriter) -> Result<()> {
		Ok(())
	}

	fn write_event_syntax(&self, entity: &EntityNode, writer: &mut dyn SyntaxWriter) -> Result<()> {
		if Self::is_public_instance_member(entity)
			&& self.is_ui_member(entity)
			&& !self.write_unexpressible(entity, writer)
		{
			self.write_attribute_usage(None, &entity.name, AttributeValue::Handler, writer);
		}
		Ok(())
	}

	fn write_attached_property_syntax(
		&self,
		entity: &EntityNode,
		writer: &mut dyn SyntaxWriter,
	) -> Result<()> {
		let has_setter = matches!(
			entity.attachment,
			Some(Attachment::Property {
				setter: Some(_),
				..
			})
		);
		if let (true, Some(owner), Some(ty)) =
			(has_setter, entity.containing_type(), &entity.return_type)
			&& !self.write_unexpressible(entity, writer)
		{
			self.write_attribute_usage(
				Some(&owner.name),
				&entity.name,
				AttributeValue::Type(ty),
				writer,
			);
		}
		Ok(())
	}

	fn write_attached_event_syntax(
		&self,
		entity: &EntityNode,
		writer: &mut dyn SyntaxWriter,
	) -> Result<()> {
		let has_adder = matches!(
			entity.attachment,
			Some(Attachment::Event { adder: Some(_), .. })
		);
		if let (true, Some(owner)) = (has_adder, entity.containing_type())
			&& !self.write_unexpressible(entity, writer)
		{
			self.write_attribute_usage(
				Some(&owner.name),
				&entity.name,
				AttributeValue::Handler,
				writer,
			);
		}
		Ok(())
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn the_base_type_itself_counts_as_ui() {
		let generator = XamlGenerator::default();
		let id = ApiId::new("T:System.Windows.FrameworkElement");
		assert!(generator.is_ui_type(&id, &[]));
		assert!(!generator.is_ui_type(&ApiId::new("T:System.Object"), &[]));
	}

	#[test]
	fn custom_base_types_replace_the_defaults() {
		let generator = XamlGenerator::default().with_base_types(["T:Widgets.Control"]);
		let ancestors = [ApiId::new("T:Widgets.Control"), ApiId::new("T:System.Object")];
		assert!(generator.is_ui_type(&ApiId::new("T:Widgets.Button"), &ancestors));
		assert!(!generator.is_ui_type(
			&ApiId::new("T:Widgets.Button"),
			&[ApiId::new("T:System.Windows.FrameworkElement")]
		));
	}
}
