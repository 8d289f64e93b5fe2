//! Formatting algorithms shared by every language generator.
//!
//! Each helper is written once against a [`Dialect`] table; the language modules
//! only supply tables and the statement shapes that genuinely differ.

pub use self::attributes::is_synthesized;
pub use self::dialect::{
	ArrayPlaceholder, CharNotation, ConstraintStyle, Dialect, ParameterNotation, StringEscape,
	Token, TypeAnnotation, clr,
};

/// Attribute filtering and rendering.
pub mod attributes;
/// Language tables.
pub mod dialect;
/// Generic parameter and constraint rendering.
pub mod generics;
/// Parameter list rendering.
pub mod parameters;
/// Type reference rendering.
pub mod types;
/// Attribute argument and default value rendering.
pub mod values;

use syntaxgen_model::Visibility;

use crate::writer::SyntaxWriter;

/// Default column past which helpers break the line.
pub const DEFAULT_WRAP_COLUMN: usize = 60;

/// A language's tables bound to a wrap policy.
#[derive(Debug, Clone, Copy)]
pub struct Notation<'a> {
	/// Language tables.
	pub dialect: &'a Dialect,
	/// Column past which helpers break the line.
	pub wrap_column: usize,
}

impl<'a> Notation<'a> {
	/// Bind `dialect` to `wrap_column`.
	pub fn new(dialect: &'a Dialect, wrap_column: usize) -> Self {
		Self {
			dialect,
			wrap_column,
		}
	}

	/// End the current line, writing the continuation marker first if the
	/// language needs one.
	pub fn write_continued_line(&self, writer: &mut dyn SyntaxWriter) {
		if let Some(marker) = self.dialect.line_continuation {
			writer.write_string(marker);
		}
		writer.write_line();
	}

	/// Break the line and indent the continuation by one tab.
	pub fn write_wrap(&self, writer: &mut dyn SyntaxWriter) {
		self.write_continued_line(writer);
		writer.write_string("\t");
	}

	/// Write a space, or break the line in its place when the space would
	/// pass the wrap column.
	pub fn write_space_or_wrap(&self, writer: &mut dyn SyntaxWriter) {
		if writer.position() + 1 > self.wrap_column {
			self.write_wrap(writer);
		} else {
			writer.write_string(" ");
		}
	}

	/// Write the comma between two list items.
	pub fn write_list_separator(&self, writer: &mut dyn SyntaxWriter) {
		writer.write_string(",");
		self.write_space_or_wrap(writer);
	}

	/// Write the visibility keyword without trailing space.
	pub fn write_visibility(&self, visibility: Visibility, writer: &mut dyn SyntaxWriter) {
		writer.write_keyword((self.dialect.visibility)(visibility));
	}

	/// Write the separator between a name and a trailing type annotation.
	///
	/// Languages with leading types write nothing.
	pub fn write_type_annotation(&self, writer: &mut dyn SyntaxWriter) {
		match self.dialect.type_annotation {
			TypeAnnotation::Leading => {}
			TypeAnnotation::Keyword(keyword) => {
				writer.write_string(" ");
				writer.write_keyword(keyword);
				writer.write_string(" ");
			}
			TypeAnnotation::Punctuation(text) => {
				writer.write_string(" ");
				writer.write_string(text);
				writer.write_string(" ");
			}
		}
	}

	/// Write prefix tokens. Keywords and attributes are followed by a space;
	/// text tokens attach to whatever follows.
	pub fn write_tokens(&self, tokens: &[Token], writer: &mut dyn SyntaxWriter) {
		for token in tokens {
			match token {
				Token::Keyword(keyword) => {
					writer.write_keyword(keyword);
					writer.write_string(" ");
				}
				Token::Attribute(type_id) => {
					self.write_attribute_usage(type_id, writer);
					writer.write_string(" ");
				}
				Token::Text(text) => writer.write_string(text),
			}
		}
	}

	/// Write an operator token, styled as a keyword when it is a word.
	pub fn write_symbol(&self, symbol: &str, writer: &mut dyn SyntaxWriter) {
		if symbol.chars().all(char::is_alphabetic) {
			writer.write_keyword(symbol);
		} else {
			writer.write_string(symbol);
		}
	}
}

#[cfg(test)]
mod tests {
	use pretty_assertions::assert_eq;

	use super::*;
	use crate::languages::visual_basic;
	use crate::output::ShortNameResolver;
	use crate::writer::BlockWriter;

	#[test]
	fn wrap_writes_continuation_and_indent() {
		let notation = Notation::new(&visual_basic::DIALECT, 4);
		let mut writer = BlockWriter::new();
		writer.write_start_block("VisualBasic");
		writer.write_string("Inherits");
		notation.write_space_or_wrap(&mut writer);
		assert_eq!(writer.position(), 1);
		writer.write_string("Base");
		writer.write_end_block();

		let text = writer.into_blocks()[0].to_plain_text(&ShortNameResolver);
		assert_eq!(text, "Inherits _\n\tBase");
	}

	#[test]
	fn space_when_the_column_is_not_passed() {
		let notation = Notation::new(&visual_basic::DIALECT, 9);
		let mut writer = BlockWriter::new();
		writer.write_start_block("VisualBasic");
		writer.write_string("Inherits");
		notation.write_space_or_wrap(&mut writer);
		assert_eq!(writer.position(), 9);
	}

	#[test]
	fn wrapped_separator_leaves_no_trailing_space() {
		let notation = Notation::new(&visual_basic::DIALECT, 4);
		let mut writer = BlockWriter::new();
		writer.write_start_block("VisualBasic");
		writer.write_string("First");
		notation.write_list_separator(&mut writer);
		writer.write_string("Second");
		writer.write_end_block();

		let text = writer.into_blocks()[0].to_plain_text(&ShortNameResolver);
		assert_eq!(text, "First, _\n\tSecond");
	}
}
