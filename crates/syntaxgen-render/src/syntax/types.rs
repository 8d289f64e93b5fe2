use syntaxgen_model::{ApiId, TypeReference};

use super::Notation;
use crate::writer::SyntaxWriter;

impl Notation<'_> {
	/// Render a type occurrence.
	///
	/// Arrays write one comma per extra dimension inside the rank brackets.
	/// Managed references render as their referent, since the by-ref qualifier
	/// is written by the parameter list.
	pub fn write_type_reference(&self, ty: &TypeReference, writer: &mut dyn SyntaxWriter) {
		match ty {
			TypeReference::Type { id } => self.write_type_link(id, writer),
			TypeReference::Template { name, .. } => writer.write_string(name),
			TypeReference::Array { rank, element } => {
				self.write_type_reference(element, writer);
				let (open, close) = self.dialect.array_brackets;
				writer.write_string(open);
				for _ in 1..*rank {
					writer.write_string(",");
				}
				writer.write_string(close);
			}
			TypeReference::Pointer { pointee } => {
				self.write_type_reference(pointee, writer);
				if let Some(suffix) = self.dialect.pointer_suffix {
					writer.write_string(suffix);
				}
			}
			TypeReference::Reference { referent } => self.write_type_reference(referent, writer),
			TypeReference::Specialization {
				definition,
				arguments,
			} => {
				writer.write_reference_link(definition);
				let (open, close) = self.dialect.generic_brackets;
				writer.write_string(open);
				for (index, argument) in arguments.iter().enumerate() {
					if index > 0 {
						writer.write_string(", ");
					}
					self.write_type_reference(argument, writer);
				}
				writer.write_string(close);
			}
		}
	}

	/// Reference a named type, substituting the language keyword for built-ins.
	pub fn write_type_link(&self, id: &ApiId, writer: &mut dyn SyntaxWriter) {
		match self.dialect.builtin_keyword(id.as_str()) {
			Some(keyword) => writer.write_reference_link_with_text(id, Some(keyword)),
			None => writer.write_reference_link(id),
		}
	}

	/// Render a comma-separated type list, wrapping before an item once the
	/// line has passed the wrap column.
	pub fn write_type_list(&self, types: &[TypeReference], writer: &mut dyn SyntaxWriter) {
		for (index, ty) in types.iter().enumerate() {
			if index > 0 {
				self.write_list_separator(writer);
			}
			self.write_type_reference(ty, writer);
		}
	}
}

#[cfg(test)]
mod tests {
	use pretty_assertions::assert_eq;

	use super::*;
	use crate::languages::{csharp, jscript, visual_basic};
	use crate::output::ShortNameResolver;
	use crate::syntax::{DEFAULT_WRAP_COLUMN, Dialect};
	use crate::writer::BlockWriter;

	fn render(dialect: &Dialect, ty: &TypeReference) -> String {
		let notation = Notation::new(dialect, DEFAULT_WRAP_COLUMN);
		let mut writer = BlockWriter::new();
		writer.write_start_block(dialect.language);
		notation.write_type_reference(ty, &mut writer);
		writer.write_end_block();
		writer.into_blocks()[0].to_plain_text(&ShortNameResolver)
	}

	#[test]
	fn rank_three_arrays_write_two_commas() {
		let ty = TypeReference::array_of(3, TypeReference::named("T:System.Int32"));
		assert_eq!(render(&csharp::DIALECT, &ty), "int[,,]");
		assert_eq!(render(&visual_basic::DIALECT, &ty), "Integer(,,)");
		assert_eq!(render(&jscript::DIALECT, &ty), "int[,,]");
	}

	#[test]
	fn specializations_use_the_language_brackets() {
		let ty = TypeReference::specialization(
			"T:System.Collections.Generic.Dictionary`2",
			vec![
				TypeReference::named("T:System.String"),
				TypeReference::array_of(1, TypeReference::template("T")),
			],
		);
		assert_eq!(render(&csharp::DIALECT, &ty), "Dictionary<string, T[]>");
		assert_eq!(
			render(&visual_basic::DIALECT, &ty),
			"Dictionary(Of String, T())"
		);
	}

	#[test]
	fn pointers_and_references() {
		let pointer = TypeReference::pointer_to(TypeReference::named("T:System.Byte"));
		assert_eq!(render(&csharp::DIALECT, &pointer), "byte*");
		let reference = TypeReference::reference_to(TypeReference::named("T:Widgets.Box"));
		assert_eq!(render(&csharp::DIALECT, &reference), "Box");
	}
}
