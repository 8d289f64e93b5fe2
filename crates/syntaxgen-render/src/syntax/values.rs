use syntaxgen_model::{TypeReference, Value};

use super::Notation;
use super::dialect::{ArrayPlaceholder, CharNotation, StringEscape, clr};
use crate::error::{RenderError, Result};
use crate::writer::SyntaxWriter;

impl Notation<'_> {
	/// Render an attribute argument or default value.
	pub fn write_value(&self, value: &Value, writer: &mut dyn SyntaxWriter) -> Result<()> {
		match value {
			Value::Null => writer.write_keyword(self.dialect.null_keyword),
			Value::TypeOf { type_ } => match self.dialect.typeof_keyword {
				Some(keyword) => {
					writer.write_keyword(keyword);
					writer.write_string("(");
					self.write_type_reference(type_, writer);
					writer.write_string(")");
				}
				None => self.write_type_reference(type_, writer),
			},
			Value::EnumFlags { type_, fields } => {
				if fields.is_empty() {
					return Err(RenderError::EmptyEnumFlags {
						type_: type_.clone(),
					});
				}
				for (index, field) in fields.iter().enumerate() {
					if index > 0 {
						writer.write_string(" ");
						self.write_symbol(self.dialect.or_operator, writer);
						writer.write_string(" ");
					}
					self.write_type_reference(type_, writer);
					writer.write_string(".");
					writer.write_string(field);
				}
			}
			Value::Literal { type_, text } => self.write_literal(type_, text, writer),
			Value::ArrayPlaceholder { element } => self.write_array_placeholder(element, writer),
		}
		Ok(())
	}

	fn write_literal(&self, type_: &TypeReference, text: &str, writer: &mut dyn SyntaxWriter) {
		let id = match type_ {
			TypeReference::Type { id } => id.as_str(),
			TypeReference::Array { element, .. } => {
				return self.write_array_placeholder(element, writer);
			}
			_ => return writer.write_literal(text),
		};
		match id {
			clr::STRING => writer.write_literal(&self.quote_string(text)),
			clr::BOOLEAN => {
				let value = text.eq_ignore_ascii_case("true") || text == "1";
				writer.write_keyword(if value {
					self.dialect.true_keyword
				} else {
					self.dialect.false_keyword
				});
			}
			clr::CHAR => writer.write_literal(&self.quote_char(text)),
			clr::SINGLE => {
				writer.write_literal(&format!("{text}{}", self.dialect.float_suffix));
			}
			// Integral and unrecognised types print their text unchanged.
			_ => writer.write_literal(text),
		}
	}

	fn write_array_placeholder(&self, element: &TypeReference, writer: &mut dyn SyntaxWriter) {
		match self.dialect.array_placeholder {
			ArrayPlaceholder::Constructed { keyword, tail } => {
				writer.write_keyword(keyword);
				writer.write_string(" ");
				self.write_type_reference(element, writer);
				writer.write_string(tail);
			}
			ArrayPlaceholder::Literal(text) => writer.write_string(text),
		}
	}

	fn quote_string(&self, text: &str) -> String {
		let escaped = match self.dialect.string_escape {
			StringEscape::Backslash => text.replace('\\', "\\\\").replace('"', "\\\""),
			StringEscape::DoubledQuote => text.replace('"', "\"\""),
		};
		format!("\"{escaped}\"")
	}

	fn quote_char(&self, text: &str) -> String {
		match self.dialect.char_notation {
			CharNotation::SingleQuoted => {
				let escaped = match text {
					"'" => "\\'",
					"\\" => "\\\\",
					other => other,
				};
				format!("'{escaped}'")
			}
			CharNotation::QuotedWithSuffix(suffix) => {
				let escaped = if text == "\"" { "\"\"" } else { text };
				format!("\"{escaped}\"{suffix}")
			}
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

	fn render(dialect: &Dialect, value: &Value) -> String {
		let notation = Notation::new(dialect, DEFAULT_WRAP_COLUMN);
		let mut writer = BlockWriter::new();
		writer.write_start_block(dialect.language);
		notation.write_value(value, &mut writer).unwrap();
		writer.write_end_block();
		writer.into_blocks()[0].to_plain_text(&ShortNameResolver)
	}

	#[test]
	fn enum_flags_join_with_the_or_operator() {
		let value = Value::enum_flags("T:System.AttributeTargets", ["Class", "Struct", "Enum"]);
		let csharp = render(&csharp::DIALECT, &value);
		assert_eq!(
			csharp,
			"AttributeTargets.Class | AttributeTargets.Struct | AttributeTargets.Enum"
		);
		assert_eq!(csharp.matches(" | ").count(), 2);

		let basic = render(&visual_basic::DIALECT, &value);
		assert_eq!(basic.matches(" Or ").count(), 2);
	}

	#[test]
	fn single_flag_has_no_operator() {
		let value = Value::enum_flags("T:System.AttributeTargets", ["All"]);
		assert_eq!(render(&csharp::DIALECT, &value), "AttributeTargets.All");
	}

	#[test]
	fn empty_enum_flags_fail_fast() {
		let notation = Notation::new(&csharp::DIALECT, DEFAULT_WRAP_COLUMN);
		let mut writer = BlockWriter::new();
		writer.write_start_block("CSharp");
		let value = Value::enum_flags("T:System.AttributeTargets", Vec::<String>::new());
		assert!(matches!(
			notation.write_value(&value, &mut writer),
			Err(RenderError::EmptyEnumFlags { .. })
		));
	}

	#[test]
	fn literals_follow_their_declared_type() {
		assert_eq!(
			render(&csharp::DIALECT, &Value::literal(clr::STRING, "say \"hi\"")),
			"\"say \\\"hi\\\"\""
		);
		assert_eq!(
			render(&visual_basic::DIALECT, &Value::literal(clr::STRING, "say \"hi\"")),
			"\"say \"\"hi\"\"\""
		);
		assert_eq!(
			render(&visual_basic::DIALECT, &Value::literal(clr::BOOLEAN, "true")),
			"True"
		);
		assert_eq!(render(&csharp::DIALECT, &Value::literal(clr::CHAR, "x")), "'x'");
		assert_eq!(
			render(&visual_basic::DIALECT, &Value::literal(clr::CHAR, "x")),
			"\"x\"c"
		);
		assert_eq!(render(&csharp::DIALECT, &Value::literal(clr::SINGLE, "1.5")), "1.5f");
		assert_eq!(
			render(&visual_basic::DIALECT, &Value::literal(clr::SINGLE, "1.5")),
			"1.5F"
		);
		assert_eq!(
			render(&csharp::DIALECT, &Value::literal("T:System.Int64", "-42")),
			"-42"
		);
		assert_eq!(
			render(&csharp::DIALECT, &Value::literal("T:System.Double", "2.5")),
			"2.5"
		);
	}

	#[test]
	fn integral_and_unknown_types_print_raw_text() {
		for dialect in [&csharp::DIALECT, &visual_basic::DIALECT, &jscript::DIALECT] {
			assert_eq!(render(dialect, &Value::literal("T:System.Byte", "255")), "255");
			assert_eq!(render(dialect, &Value::literal("T:Widgets.Percent", "50")), "50");
		}
	}

	#[test]
	fn null_and_typeof() {
		assert_eq!(render(&visual_basic::DIALECT, &Value::Null), "Nothing");
		let value = Value::TypeOf {
			type_: TypeReference::named("T:System.Int32"),
		};
		assert_eq!(render(&csharp::DIALECT, &value), "typeof(int)");
		assert_eq!(render(&visual_basic::DIALECT, &value), "GetType(Integer)");
		assert_eq!(render(&jscript::DIALECT, &value), "int");
	}

	#[test]
	fn arrays_render_placeholders() {
		let value = Value::ArrayPlaceholder {
			element: TypeReference::named("T:System.String"),
		};
		assert_eq!(render(&csharp::DIALECT, &value), "new string[] { ... }");
		assert_eq!(render(&visual_basic::DIALECT, &value), "New String() { ... }");
		let typed = Value::Literal {
			type_: TypeReference::array_of(1, TypeReference::named("T:System.Int32")),
			text: "ignored".into(),
		};
		assert_eq!(render(&csharp::DIALECT, &typed), "new int[] { ... }");
	}
}
