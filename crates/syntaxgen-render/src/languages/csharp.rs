use syntaxgen_model::{ApiId, EntityNode, Modifiers, Visibility};

use super::{
	ProcedureInheritance, TypeInheritance, write_accessor_visibility, write_base_list,
	write_declaration_attributes, write_member_visibility,
};
use crate::error::Result;
use crate::generator::{
	CastKind, SyntaxGenerator, cast_kind, constructor_name, explicit_base_type,
	implemented_members, unsupported_key,
};
use crate::syntax::{
	ArrayPlaceholder, CharNotation, ConstraintStyle, DEFAULT_WRAP_COLUMN, Dialect, Notation,
	ParameterNotation, StringEscape, Token, TypeAnnotation, clr,
};
use crate::writer::SyntaxWriter;

/// Language id.
pub const LANGUAGE: &str = "CSharp";

/// C# tables.
pub static DIALECT: Dialect = Dialect {
	language: LANGUAGE,
	null_keyword: "null",
	true_keyword: "true",
	false_keyword: "false",
	or_operator: "|",
	typeof_keyword: Some("typeof"),
	float_suffix: "f",
	string_escape: StringEscape::Backslash,
	char_notation: CharNotation::SingleQuoted,
	array_placeholder: ArrayPlaceholder::Constructed {
		keyword: "new",
		tail: "[] { ... }",
	},
	named_argument_separator: " = ",
	attribute_brackets: ("[", "]"),
	generic_brackets: ("<", ">"),
	array_brackets: ("[", "]"),
	pointer_suffix: Some("*"),
	line_continuation: None,
	type_annotation: TypeAnnotation::Leading,
	constraint_style: ConstraintStyle::Clause("where"),
	constraint_keywords: ["struct", "class", "new()"],
	variance_keywords: ("in", "out"),
	parameters: ParameterNotation {
		open: "(",
		close: ")",
		omit_when_empty: false,
		separator: ",",
		out: &[Token::Keyword("out")],
		in_: &[Token::Keyword("in")],
		by_ref: &[Token::Keyword("ref")],
		params_array: &[Token::Keyword("params")],
		optional: &[Token::Attribute(clr::OPTIONAL_ATTRIBUTE)],
		optional_with_default: &[],
		receiver: &[Token::Keyword("this")],
		default_values: true,
	},
	builtin_types: &[
		(clr::OBJECT, "object"),
		(clr::STRING, "string"),
		(clr::BOOLEAN, "bool"),
		(clr::CHAR, "char"),
		("T:System.SByte", "sbyte"),
		("T:System.Byte", "byte"),
		("T:System.Int16", "short"),
		("T:System.UInt16", "ushort"),
		("T:System.Int32", "int"),
		("T:System.UInt32", "uint"),
		("T:System.Int64", "long"),
		("T:System.UInt64", "ulong"),
		(clr::SINGLE, "float"),
		("T:System.Double", "double"),
		("T:System.Decimal", "decimal"),
		(clr::VOID, "void"),
	],
	operators: &[
		("Addition", "+"),
		("Subtraction", "-"),
		("Multiply", "*"),
		("Division", "/"),
		("Modulus", "%"),
		("ExclusiveOr", "^"),
		("BitwiseAnd", "&"),
		("BitwiseOr", "|"),
		("LogicalNot", "!"),
		("OnesComplement", "~"),
		("LeftShift", "<<"),
		("RightShift", ">>"),
		("Equality", "=="),
		("Inequality", "!="),
		("LessThan", "<"),
		("GreaterThan", ">"),
		("LessThanOrEqual", "<="),
		("GreaterThanOrEqual", ">="),
		("UnaryNegation", "-"),
		("UnaryPlus", "+"),
		("Increment", "++"),
		("Decrement", "--"),
		("True", "true"),
		("False", "false"),
	],
	visibility: visibility_keyword,
};

fn visibility_keyword(visibility: Visibility) -> &'static str {
	match visibility {
		Visibility::Public => "public",
		Visibility::Family => "protected",
		Visibility::FamilyOrAssembly => "protected internal",
		// Approximated by the nearest keyword that grants no more than assembly access.
		Visibility::FamilyAndAssembly => "internal",
		Visibility::Assembly => "internal",
		Visibility::Private => "private",
	}
}

/// Renders C# declarations.
#[derive(Debug, Clone, Copy)]
pub struct CSharpGenerator {
	wrap_column: usize,
}

impl Default for CSharpGenerator {
	fn default() -> Self {
		Self::new(DEFAULT_WRAP_COLUMN)
	}
}

impl CSharpGenerator {
	/// A generator wrapping at `wrap_column`.
	pub fn new(wrap_column: usize) -> Self {
		Self { wrap_column }
	}

	fn write_inheritance(&self, entity: &EntityNode, writer: &mut dyn SyntaxWriter) {
		let keyword = match ProcedureInheritance::of(entity) {
			ProcedureInheritance::Static => "static",
			ProcedureInheritance::Abstract => "abstract",
			ProcedureInheritance::SealedOverride => "sealed override",
			ProcedureInheritance::Override => "override",
			ProcedureInheritance::Virtual => "virtual",
			ProcedureInheritance::None => return,
		};
		writer.write_keyword(keyword);
		writer.write_string(" ");
	}

	/// Visibility and inheritance keywords. Explicit implementations carry neither.
	fn write_procedure_prefix(&self, entity: &EntityNode, writer: &mut dyn SyntaxWriter) {
		if entity.has(Modifiers::EXPLICIT_IMPLEMENTATION) {
			return;
		}
		write_member_visibility(&self.notation(), entity, writer);
		self.write_inheritance(entity, writer);
	}

	/// The member's declared name, or `Interface.Member` for explicit implementations.
	fn write_member_name(&self, entity: &EntityNode, writer: &mut dyn SyntaxWriter) -> Result<()> {
		if entity.has(Modifiers::EXPLICIT_IMPLEMENTATION) {
			let member = &implemented_members(entity)?[0];
			self.notation()
				.write_type_reference(&member.declaring_type, writer);
			writer.write_string(".");
			writer.write_identifier(&member.name);
		} else {
			writer.write_identifier(&entity.name);
		}
		Ok(())
	}

	fn write_result_type(&self, entity: &EntityNode, writer: &mut dyn SyntaxWriter) {
		let notation = self.notation();
		match &entity.return_type {
			Some(ty) => notation.write_type_reference(ty, writer),
			None => notation.write_type_link(&ApiId::new(clr::VOID), writer),
		}
	}

	fn write_type_header(
		&self,
		keyword: &str,
		entity: &EntityNode,
		writer: &mut dyn SyntaxWriter,
	) -> Result<()> {
		let notation = self.notation();
		write_declaration_attributes(&notation, entity, writer)?;
		notation.write_visibility(entity.visibility, writer);
		writer.write_string(" ");
		if keyword == "class" {
			let modifier = match TypeInheritance::of(entity) {
				TypeInheritance::Static => Some("static"),
				TypeInheritance::Abstract => Some("abstract"),
				TypeInheritance::Sealed => Some("sealed"),
				TypeInheritance::None => None,
			};
			if let Some(modifier) = modifier {
				writer.write_keyword(modifier);
				writer.write_string(" ");
			}
		}
		writer.write_keyword(keyword);
		writer.write_string(" ");
		writer.write_identifier(&entity.name);
		Ok(())
	}

	fn write_type_body(
		&self,
		entity: &EntityNode,
		with_variance: bool,
		with_base: bool,
		writer: &mut dyn SyntaxWriter,
	) {
		let notation = self.notation();
		notation.write_generic_parameters(&entity.generic_parameters, with_variance, writer);
		let base = if with_base {
			explicit_base_type(entity)
		} else {
			None
		};
		if base.is_some() || !entity.implemented_interfaces.is_empty() {
			writer.write_string(" : ");
			write_base_list(&notation, base, &entity.implemented_interfaces, writer);
		}
		notation.write_constraint_clauses(&entity.generic_parameters, writer);
	}
}

impl SyntaxGenerator for CSharpGenerator {
	fn language(&self) -> &'static str {
		LANGUAGE
	}

	fn notation(&self) -> Notation<'_> {
		Notation::new(&DIALECT, self.wrap_column)
	}

	fn write_namespace_syntax(
		&self,
		entity: &EntityNode,
		writer: &mut dyn SyntaxWriter,
	) -> Result<()> {
		writer.write_keyword("namespace");
		writer.write_string(" ");
		writer.write_identifier(&entity.name);
		Ok(())
	}

	fn write_class_syntax(&self, entity: &EntityNode, writer: &mut dyn SyntaxWriter) -> Result<()> {
		self.write_type_header("class", entity, writer)?;
		self.write_type_body(entity, false, true, writer);
		Ok(())
	}

	fn write_structure_syntax(
		&self,
		entity: &EntityNode,
		writer: &mut dyn SyntaxWriter,
	) -> Result<()> {
		self.write_type_header("struct", entity, writer)?;
		self.write_type_body(entity, false, false, writer);
		Ok(())
	}

	fn write_interface_syntax(
		&self,
		entity: &EntityNode,
		writer: &mut dyn SyntaxWriter,
	) -> Result<()> {
		self.write_type_header("interface", entity, writer)?;
		self.write_type_body(entity, true, false, writer);
		Ok(())
	}

	fn write_delegate_syntax(
		&self,
		entity: &EntityNode,
		writer: &mut dyn SyntaxWriter,
	) -> Result<()> {
		let notation = self.notation();
		write_declaration_attributes(&notation, entity, writer)?;
		notation.write_visibility(entity.visibility, writer);
		writer.write_string(" ");
		writer.write_keyword("delegate");
		writer.write_string(" ");
		self.write_result_type(entity, writer);
		writer.write_string(" ");
		writer.write_identifier(&entity.name);
		notation.write_generic_parameters(&entity.generic_parameters, true, writer);
		notation.write_parameters(&entity.parameters, false, writer)?;
		notation.write_constraint_clauses(&entity.generic_parameters, writer);
		Ok(())
	}

	fn write_enumeration_syntax(
		&self,
		entity: &EntityNode,
		writer: &mut dyn SyntaxWriter,
	) -> Result<()> {
		self.write_type_header("enum", entity, writer)
	}

	fn write_constructor_syntax(
		&self,
		entity: &EntityNode,
		writer: &mut dyn SyntaxWriter,
	) -> Result<()> {
		let notation = self.notation();
		write_declaration_attributes(&notation, entity, writer)?;
		if entity.has(Modifiers::STATIC) {
			writer.write_keyword("static");
			writer.write_string(" ");
		} else {
			notation.write_visibility(entity.visibility, writer);
			writer.write_string(" ");
		}
		writer.write_identifier(constructor_name(entity));
		notation.write_parameters(&entity.parameters, false, writer)
	}

	fn write_normal_method_syntax(
		&self,
		entity: &EntityNode,
		writer: &mut dyn SyntaxWriter,
	) -> Result<()> {
		let notation = self.notation();
		write_declaration_attributes(&notation, entity, writer)?;
		self.write_procedure_prefix(entity, writer);
		self.write_result_type(entity, writer);
		writer.write_string(" ");
		self.write_member_name(entity, writer)?;
		notation.write_generic_parameters(&entity.generic_parameters, false, writer);
		notation.write_parameters(&entity.parameters, entity.has(Modifiers::EXTENSION), writer)?;
		notation.write_constraint_clauses(&entity.generic_parameters, writer);
		Ok(())
	}

	fn write_operator_syntax(
		&self,
		entity: &EntityNode,
		writer: &mut dyn SyntaxWriter,
	) -> Result<()> {
		let Some(symbol) = DIALECT.operator_symbol(&entity.name) else {
			tracing::trace!(name = %entity.name, "no C# operator token");
			writer.write_message(&unsupported_key("Operator", LANGUAGE));
			return Ok(());
		};
		let notation = self.notation();
		write_declaration_attributes(&notation, entity, writer)?;
		self.write_procedure_prefix(entity, writer);
		self.write_result_type(entity, writer);
		writer.write_string(" ");
		writer.write_keyword("operator");
		writer.write_string(" ");
		notation.write_symbol(symbol, writer);
		notation.write_parameters(&entity.parameters, false, writer)
	}

	fn write_cast_syntax(&self, entity: &EntityNode, writer: &mut dyn SyntaxWriter) -> Result<()> {
		let direction = match cast_kind(entity)? {
			CastKind::Implicit => "implicit",
			CastKind::Explicit => "explicit",
		};
		let notation = self.notation();
		write_declaration_attributes(&notation, entity, writer)?;
		self.write_procedure_prefix(entity, writer);
		writer.write_keyword(direction);
		writer.write_string(" ");
		writer.write_keyword("operator");
		writer.write_string(" ");
		self.write_result_type(entity, writer);
		notation.write_parameters(&entity.parameters, false, writer)
	}

	fn write_property_syntax(
		&self,
		entity: &EntityNode,
		writer: &mut dyn SyntaxWriter,
	) -> Result<()> {
		let notation = self.notation();
		write_declaration_attributes(&notation, entity, writer)?;
		self.write_procedure_prefix(entity, writer);
		self.write_result_type(entity, writer);
		writer.write_string(" ");
		if entity.is_indexer() {
			if entity.has(Modifiers::EXPLICIT_IMPLEMENTATION) {
				let member = &implemented_members(entity)?[0];
				notation.write_type_reference(&member.declaring_type, writer);
				writer.write_string(".");
			}
			writer.write_keyword("this");
			notation.write_bracketed_parameters(&entity.parameters, false, ("[", "]"), writer)?;
		} else {
			self.write_member_name(entity, writer)?;
		}

		writer.write_string(" {");
		for (accessor, keyword) in [(&entity.getter, "get"), (&entity.setter, "set")] {
			let Some(accessor) = accessor else {
				continue;
			};
			writer.write_string(" ");
			notation.write_inline_attributes(&accessor.attributes, writer)?;
			if !entity.has(Modifiers::EXPLICIT_IMPLEMENTATION) {
				write_accessor_visibility(&notation, entity, accessor, writer);
			}
			writer.write_keyword(keyword);
			writer.write_string(";");
		}
		writer.write_string(" }");
		Ok(())
	}

	fn write_field_syntax(&self, entity: &EntityNode, writer: &mut dyn SyntaxWriter) -> Result<()> {
		let notation = self.notation();
		write_declaration_attributes(&notation, entity, writer)?;
		write_member_visibility(&notation, entity, writer);
		let is_literal = entity.has(Modifiers::LITERAL);
		let keywords = [
			(is_literal, "const"),
			(!is_literal && entity.has(Modifiers::STATIC), "static"),
			(!is_literal && entity.has(Modifiers::READ_ONLY), "readonly"),
			(entity.has(Modifiers::VOLATILE), "volatile"),
		];
		for (_, keyword) in keywords.iter().filter(|(present, _)| *present) {
			writer.write_keyword(keyword);
			writer.write_string(" ");
		}
		self.write_result_type(entity, writer);
		writer.write_string(" ");
		writer.write_identifier(&entity.name);
		if is_literal && let Some(value) = &entity.value {
			writer.write_string(" = ");
			notation.write_value(value, writer)?;
		}
		Ok(())
	}

	fn write_event_syntax(&self, entity: &EntityNode, writer: &mut dyn SyntaxWriter) -> Result<()> {
		let notation = self.notation();
		write_declaration_attributes(&notation, entity, writer)?;
		self.write_procedure_prefix(entity, writer);
		writer.write_keyword("event");
		writer.write_string(" ");
		if let Some(handler) = &entity.event_handler_type {
			notation.write_type_reference(handler, writer);
			writer.write_string(" ");
		}
		self.write_member_name(entity, writer)
	}
}
