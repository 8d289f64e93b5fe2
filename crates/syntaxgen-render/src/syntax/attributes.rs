use syntaxgen_model::{ApiId, Attribute};

use super::Notation;
use crate::error::Result;
use crate::writer::SyntaxWriter;

/// Attributes the compiler emits on its own; they never appear in source.
const SYNTHESIZED_ATTRIBUTES: &[&str] = &[
	"T:System.Runtime.CompilerServices.ExtensionAttribute",
	"T:System.Runtime.CompilerServices.FixedBufferAttribute",
	"T:System.Runtime.CompilerServices.IsReadOnlyAttribute",
	"T:System.Runtime.CompilerServices.IsByRefLikeAttribute",
	"T:System.Runtime.CompilerServices.NullableAttribute",
	"T:System.Runtime.CompilerServices.NullableContextAttribute",
	"T:System.ParamArrayAttribute",
];

/// Whether `attribute` marks generated code and must be left out of listings.
pub fn is_synthesized(attribute: &Attribute) -> bool {
	SYNTHESIZED_ATTRIBUTES
		.iter()
		.any(|type_id| attribute.is(type_id))
}

impl Notation<'_> {
	/// Write each source-visible attribute on its own line.
	pub fn write_attributes(
		&self,
		attributes: &[Attribute],
		writer: &mut dyn SyntaxWriter,
	) -> Result<()> {
		for attribute in attributes.iter().filter(|attribute| !is_synthesized(attribute)) {
			self.write_attribute(attribute, writer)?;
			self.write_continued_line(writer);
		}
		Ok(())
	}

	/// Write source-visible attributes on the current line, each followed by a space.
	pub fn write_inline_attributes(
		&self,
		attributes: &[Attribute],
		writer: &mut dyn SyntaxWriter,
	) -> Result<()> {
		for attribute in attributes.iter().filter(|attribute| !is_synthesized(attribute)) {
			self.write_attribute(attribute, writer)?;
			writer.write_string(" ");
		}
		Ok(())
	}

	/// Write one attribute usage with its arguments.
	pub fn write_attribute(&self, attribute: &Attribute, writer: &mut dyn SyntaxWriter) -> Result<()> {
		let (open, close) = self.dialect.attribute_brackets;
		writer.write_string(open);
		self.write_type_reference(&attribute.attribute_type, writer);

		let has_arguments =
			!attribute.positional_arguments.is_empty() || !attribute.named_arguments.is_empty();
		if has_arguments {
			writer.write_string("(");
			let mut first = true;
			for value in &attribute.positional_arguments {
				self.write_argument_separator(&mut first, writer);
				self.write_value(value, writer)?;
			}
			for argument in &attribute.named_arguments {
				self.write_argument_separator(&mut first, writer);
				writer.write_string(&argument.name);
				writer.write_string(self.dialect.named_argument_separator);
				self.write_value(&argument.value, writer)?;
			}
			writer.write_string(")");
		}

		writer.write_string(close);
		Ok(())
	}

	/// Write an argument-less attribute usage of `type_id`.
	pub fn write_attribute_usage(&self, type_id: &str, writer: &mut dyn SyntaxWriter) {
		let (open, close) = self.dialect.attribute_brackets;
		writer.write_string(open);
		writer.write_reference_link(&ApiId::new(type_id));
		writer.write_string(close);
	}

	fn write_argument_separator(&self, first: &mut bool, writer: &mut dyn SyntaxWriter) {
		if *first {
			*first = false;
			return;
		}
		self.write_list_separator(writer);
	}
}
