use syntaxgen_model::{Parameter, TypeReference};

use super::Notation;
use super::dialect::TypeAnnotation;
use crate::error::Result;
use crate::writer::SyntaxWriter;

impl Notation<'_> {
	/// Render a parameter list in the language's own brackets.
	///
	/// Non-empty lists put one parameter per line, indented by a tab. When
	/// `is_extension` is set the first parameter carries the receiver prefix.
	pub fn write_parameters(
		&self,
		parameters: &[Parameter],
		is_extension: bool,
		writer: &mut dyn SyntaxWriter,
	) -> Result<()> {
		let notation = &self.dialect.parameters;
		self.write_bracketed_parameters(
			parameters,
			is_extension,
			(notation.open, notation.close),
			writer,
		)
	}

	/// Render a parameter list inside explicit brackets, as indexers need.
	pub fn write_bracketed_parameters(
		&self,
		parameters: &[Parameter],
		is_extension: bool,
		(open, close): (&str, &str),
		writer: &mut dyn SyntaxWriter,
	) -> Result<()> {
		let notation = &self.dialect.parameters;
		if parameters.is_empty() {
			if !notation.omit_when_empty {
				writer.write_string(open);
				writer.write_string(close);
			}
			return Ok(());
		}

		writer.write_string(open);
		self.write_continued_line(writer);
		for (index, parameter) in parameters.iter().enumerate() {
			writer.write_string("\t");
			self.write_parameter_declaration(parameter, is_extension && index == 0, writer)?;
			if index + 1 < parameters.len() {
				writer.write_string(notation.separator);
			}
			self.write_continued_line(writer);
		}
		writer.write_string(close);
		Ok(())
	}

	fn write_parameter_declaration(
		&self,
		parameter: &Parameter,
		is_receiver: bool,
		writer: &mut dyn SyntaxWriter,
	) -> Result<()> {
		let notation = &self.dialect.parameters;
		// An explicit default already marks the parameter optional.
		if parameter.default_value.is_some() {
			self.write_tokens(notation.optional_with_default, writer);
		} else if parameter.is_optional {
			self.write_tokens(notation.optional, writer);
		}
		if is_receiver {
			self.write_tokens(notation.receiver, writer);
		}
		if parameter.is_params_array {
			self.write_tokens(notation.params_array, writer);
		}
		let by_ref =
			parameter.is_by_ref || matches!(parameter.type_, TypeReference::Reference { .. });
		if parameter.is_out {
			self.write_tokens(notation.out, writer);
		} else if by_ref && parameter.is_in {
			self.write_tokens(notation.in_, writer);
		} else if by_ref {
			self.write_tokens(notation.by_ref, writer);
		}

		match self.dialect.type_annotation {
			TypeAnnotation::Leading => {
				self.write_type_reference(&parameter.type_, writer);
				writer.write_string(" ");
				writer.write_parameter(&parameter.name);
			}
			TypeAnnotation::Keyword(_) | TypeAnnotation::Punctuation(_) => {
				writer.write_parameter(&parameter.name);
				self.write_type_annotation(writer);
				self.write_type_reference(&parameter.type_, writer);
			}
		}

		if notation.default_values
			&& let Some(value) = &parameter.default_value
		{
			writer.write_string(" = ");
			self.write_value(value, writer)?;
		}
		Ok(())
	}
}
