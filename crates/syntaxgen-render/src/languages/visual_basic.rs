use syntaxgen_model::{EntityNode, Modifiers, TypeReference, Visibility};

use super::{
	ProcedureInheritance, TypeInheritance, write_accessor_visibility, write_declaration_attributes,
	write_member_visibility,
};
use crate::error::Result;
use crate::generator::{
	CastKind, SyntaxGenerator, cast_kind, explicit_base_type, implemented_members, result_type,
	unsupported_key,
};
use crate::syntax::{
	ArrayPlaceholder, CharNotation, ConstraintStyle, DEFAULT_WRAP_COLUMN, Dialect, Notation,
	ParameterNotation, StringEscape, Token, TypeAnnotation, clr,
};
use crate::writer::SyntaxWriter;

/// Language id.
pub const LANGUAGE: &str = "VisualBasic";

/// Visual Basic tables.
pub static DIALECT: Dialect = Dialect {
	language: LANGUAGE,
	null_keyword: "Nothing",
	true_keyword: "True",
	false_keyword: "False",
	or_operator: "Or",
	typeof_keyword: Some("GetType"),
	float_suffix: "F",
	string_escape: StringEscape::DoubledQuote,
	char_notation: CharNotation::QuotedWithSuffix("c"),
	array_placeholder: ArrayPlaceholder::Constructed {
		keyword: "New",
		tail: "() { ... }",
	},
	named_argument_separator: " := ",
	attribute_brackets: ("<", ">"),
	generic_brackets: ("(Of ", ")"),
	array_brackets: ("(", ")"),
	pointer_suffix: None,
	line_continuation: Some(" _"),
	type_annotation: TypeAnnotation::Keyword("As"),
	constraint_style: ConstraintStyle::Inline("As"),
	constraint_keywords: ["Structure", "Class", "New"],
	variance_keywords: ("In", "Out"),
	parameters: ParameterNotation {
		open: " (",
		close: ")",
		omit_when_empty: true,
		separator: ",",
		out: &[
			Token::Attribute(clr::OUT_ATTRIBUTE),
			Token::Keyword("ByRef"),
		],
		in_: &[Token::Attribute(clr::IN_ATTRIBUTE), Token::Keyword("ByRef")],
		by_ref: &[Token::Keyword("ByRef")],
		params_array: &[Token::Keyword("ParamArray")],
		optional: &[Token::Attribute(clr::OPTIONAL_ATTRIBUTE)],
		optional_with_default: &[Token::Keyword("Optional")],
		receiver: &[],
		default_values: true,
	},
	builtin_types: &[
		(clr::OBJECT, "Object"),
		(clr::STRING, "String"),
		(clr::BOOLEAN, "Boolean"),
		(clr::CHAR, "Char"),
		("T:System.SByte", "SByte"),
		("T:System.Byte", "Byte"),
		("T:System.Int16", "Short"),
		("T:System.UInt16", "UShort"),
		("T:System.Int32", "Integer"),
		("T:System.UInt32", "UInteger"),
		("T:System.Int64", "Long"),
		("T:System.UInt64", "ULong"),
		(clr::SINGLE, "Single"),
		("T:System.Double", "Double"),
		("T:System.Decimal", "Decimal"),
		("T:System.DateTime", "Date"),
	],
	// Increment and decrement have no Visual Basic form.
	operators: &[
		("Addition", "+"),
		("Subtraction", "-"),
		("Multiply", "*"),
		("Division", "/"),
		("IntegerDivision", "\\"),
		("Modulus", "Mod"),
		("Exponent", "^"),
		("Concatenate", "&"),
		("Like", "Like"),
		("ExclusiveOr", "Xor"),
		("BitwiseAnd", "And"),
		("BitwiseOr", "Or"),
		("LogicalNot", "Not"),
		("OnesComplement", "Not"),
		("LeftShift", "<<"),
		("RightShift", ">>"),
		("Equality", "="),
		("Inequality", "<>"),
		("LessThan", "<"),
		("GreaterThan", ">"),
		("LessThanOrEqual", "<="),
		("GreaterThanOrEqual", ">="),
		("UnaryNegation", "-"),
		("UnaryPlus", "+"),
		("True", "IsTrue"),
		("False", "IsFalse"),
	],
	visibility: visibility_keyword,
};

fn visibility_keyword(visibility: Visibility) -> &'static str {
	match visibility {
		Visibility::Public => "Public",
		Visibility::Family => "Protected",
		Visibility::FamilyOrAssembly => "Protected Friend",
		Visibility::FamilyAndAssembly | Visibility::Assembly => "Friend",
		Visibility::Private => "Private",
	}
}

/// Renders Visual Basic declarations.
#[derive(Debug, Clone, Copy)]
pub struct VisualBasicGenerator {
	wrap_column: usize,
}

impl Default for VisualBasicGenerator {
	fn default() -> Self {
		Self::new(DEFAULT_WRAP_COLUMN)
	}
}

impl VisualBasicGenerator {
	/// A generator wrapping at `wrap_column`.
	pub fn new(wrap_column: usize) -> Self {
		Self { wrap_column }
	}

	fn write_procedure_prefix(&self, entity: &EntityNode, writer: &mut dyn SyntaxWriter) {
		write_member_visibility(&self.notation(), entity, writer);
		let keyword = match ProcedureInheritance::of(entity) {
			ProcedureInheritance::Static => "Shared",
			ProcedureInheritance::Abstract => "MustOverride",
			ProcedureInheritance::SealedOverride => "NotOverridable Overrides",
			ProcedureInheritance::Override => "Overrides",
			ProcedureInheritance::Virtual => "Overridable",
			ProcedureInheritance::None => return,
		};
		writer.write_keyword(keyword);
		writer.write_string(" ");
	}

	/// ` As Type`, omitted when there is no type.
	fn write_as_clause(&self, ty: Option<&TypeReference>, writer: &mut dyn SyntaxWriter) {
		if let Some(ty) = ty {
			let notation = self.notation();
			notation.write_type_annotation(writer);
			notation.write_type_reference(ty, writer);
		}
	}

	/// ` Implements IBox.Value, ...` for explicit implementations.
	fn write_implements_clause(
		&self,
		entity: &EntityNode,
		writer: &mut dyn SyntaxWriter,
	) -> Result<()> {
		if !entity.has(Modifiers::EXPLICIT_IMPLEMENTATION) {
			return Ok(());
		}
		let notation = self.notation();
		writer.write_string(" ");
		writer.write_keyword("Implements");
		writer.write_string(" ");
		for (index, member) in implemented_members(entity)?.iter().enumerate() {
			if index > 0 {
				notation.write_list_separator(writer);
			}
			notation.write_type_reference(&member.declaring_type, writer);
			writer.write_string(".");
			writer.write_identifier(&member.name);
		}
		Ok(())
	}

	fn write_type_header(
		&self,
		keyword: &str,
		entity: &EntityNode,
		with_variance: bool,
		writer: &mut dyn SyntaxWriter,
	) -> Result<()> {
		let notation = self.notation();
		write_declaration_attributes(&notation, entity, writer)?;
		notation.write_visibility(entity.visibility, writer);
		writer.write_string(" ");
		if keyword == "Class" {
			let modifier = match TypeInheritance::of(entity) {
				TypeInheritance::Static | TypeInheritance::Sealed => Some("NotInheritable"),
				TypeInheritance::Abstract => Some("MustInherit"),
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
		notation.write_generic_parameters(&entity.generic_parameters, with_variance, writer);
		Ok(())
	}

	/// A continuation line such as `Inherits Base` or `Implements IA, IB`.
	fn write_type_clause(
		&self,
		keyword: &str,
		types: &[TypeReference],
		writer: &mut dyn SyntaxWriter,
	) {
		if types.is_empty() {
			return;
		}
		let notation = self.notation();
		notation.write_wrap(writer);
		writer.write_keyword(keyword);
		writer.write_string(" ");
		notation.write_type_list(types, writer);
	}

	fn write_procedure_keyword(&self, entity: &EntityNode, writer: &mut dyn SyntaxWriter) {
		let keyword = if result_type(entity).is_some() {
			"Function"
		} else {
			"Sub"
		};
		writer.write_keyword(keyword);
		writer.write_string(" ");
	}
}

impl SyntaxGenerator for VisualBasicGenerator {
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
		writer.write_keyword("Namespace");
		writer.write_string(" ");
		writer.write_identifier(&entity.name);
		Ok(())
	}

	fn write_class_syntax(&self, entity: &EntityNode, writer: &mut dyn SyntaxWriter) -> Result<()> {
		self.write_type_header("Class", entity, false, writer)?;
		let base: Vec<TypeReference> = explicit_base_type(entity).into_iter().cloned().collect();
		self.write_type_clause("Inherits", &base, writer);
		self.write_type_clause("Implements", &entity.implemented_interfaces, writer);
		Ok(())
	}

	fn write_structure_syntax(
		&self,
		entity: &EntityNode,
		writer: &mut dyn SyntaxWriter,
	) -> Result<()> {
		self.write_type_header("Structure", entity, false, writer)?;
		self.write_type_clause("Implements", &entity.implemented_interfaces, writer);
		Ok(())
	}

	fn write_interface_syntax(
		&self,
		entity: &EntityNode,
		writer: &mut dyn SyntaxWriter,
	) -> Result<()> {
		self.write_type_header("Interface", entity, true, writer)?;
		self.write_type_clause("Inherits", &entity.implemented_interfaces, writer);
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
		writer.write_keyword("Delegate");
		writer.write_string(" ");
		self.write_procedure_keyword(entity, writer);
		writer.write_identifier(&entity.name);
		notation.write_generic_parameters(&entity.generic_parameters, true, writer);
		notation.write_parameters(&entity.parameters, false, writer)?;
		self.write_as_clause(result_type(entity), writer);
		Ok(())
	}

	fn write_enumeration_syntax(
		&self,
		entity: &EntityNode,
		writer: &mut dyn SyntaxWriter,
	) -> Result<()> {
		self.write_type_header("Enum", entity, false, writer)
	}

	fn write_constructor_syntax(
		&self,
		entity: &EntityNode,
		writer: &mut dyn SyntaxWriter,
	) -> Result<()> {
		let notation = self.notation();
		write_declaration_attributes(&notation, entity, writer)?;
		if entity.has(Modifiers::STATIC) {
			writer.write_keyword("Shared");
		} else {
			notation.write_visibility(entity.visibility, writer);
		}
		writer.write_string(" ");
		writer.write_keyword("Sub New");
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
		self.write_procedure_keyword(entity, writer);
		writer.write_identifier(&entity.name);
		notation.write_generic_parameters(&entity.generic_parameters, false, writer);
		notation.write_parameters(&entity.parameters, entity.has(Modifiers::EXTENSION), writer)?;
		self.write_as_clause(result_type(entity), writer);
		self.write_implements_clause(entity, writer)
	}

	fn write_operator_syntax(
		&self,
		entity: &EntityNode,
		writer: &mut dyn SyntaxWriter,
	) -> Result<()> {
		let Some(symbol) = DIALECT.operator_symbol(&entity.name) else {
			tracing::trace!(name = %entity.name, "no Visual Basic operator token");
			writer.write_message(&unsupported_key("Operator", LANGUAGE));
			return Ok(());
		};
		let notation = self.notation();
		write_declaration_attributes(&notation, entity, writer)?;
		self.write_procedure_prefix(entity, writer);
		writer.write_keyword("Operator");
		writer.write_string(" ");
		notation.write_symbol(symbol, writer);
		notation.write_parameters(&entity.parameters, false, writer)?;
		self.write_as_clause(result_type(entity), writer);
		Ok(())
	}

	fn write_cast_syntax(&self, entity: &EntityNode, writer: &mut dyn SyntaxWriter) -> Result<()> {
		let direction = match cast_kind(entity)? {
			CastKind::Implicit => "Widening",
			CastKind::Explicit => "Narrowing",
		};
		let notation = self.notation();
		write_declaration_attributes(&notation, entity, writer)?;
		self.write_procedure_prefix(entity, writer);
		writer.write_keyword(direction);
		writer.write_string(" ");
		writer.write_keyword("Operator CType");
		notation.write_parameters(&entity.parameters, false, writer)?;
		self.write_as_clause(result_type(entity), writer);
		Ok(())
	}

	fn write_property_syntax(
		&self,
		entity: &EntityNode,
		writer: &mut dyn SyntaxWriter,
	) -> Result<()> {
		let notation = self.notation();
		write_declaration_attributes(&notation, entity, writer)?;
		if entity.has(Modifiers::DEFAULT_INDEXER) {
			writer.write_keyword("Default");
			writer.write_string(" ");
		}
		self.write_procedure_prefix(entity, writer);
		match (&entity.getter, &entity.setter) {
			(Some(_), None) => {
				writer.write_keyword("ReadOnly");
				writer.write_string(" ");
			}
			(None, Some(_)) => {
				writer.write_keyword("WriteOnly");
				writer.write_string(" ");
			}
			_ => {}
		}
		writer.write_keyword("Property");
		writer.write_string(" ");
		writer.write_identifier(&entity.name);
		notation.write_parameters(&entity.parameters, false, writer)?;
		self.write_as_clause(entity.return_type.as_ref(), writer);
		self.write_implements_clause(entity, writer)?;

		// Interface properties declare no accessor blocks.
		if entity.is_interface_member() {
			return Ok(());
		}
		for (accessor, class, keyword) in [
			(&entity.getter, "getter", "Get"),
			(&entity.setter, "setter", "Set"),
		] {
			let Some(accessor) = accessor else {
				continue;
			};
			writer.write_line();
			writer.write_start_sub_block(class);
			writer.write_string("\t");
			write_accessor_visibility(&notation, entity, accessor, writer);
			writer.write_keyword(keyword);
			writer.write_end_sub_block();
		}
		Ok(())
	}

	fn write_field_syntax(&self, entity: &EntityNode, writer: &mut dyn SyntaxWriter) -> Result<()> {
		let notation = self.notation();
		write_declaration_attributes(&notation, entity, writer)?;
		write_member_visibility(&notation, entity, writer);
		let is_literal = entity.has(Modifiers::LITERAL);
		let keywords = [
			(is_literal, "Const"),
			(!is_literal && entity.has(Modifiers::STATIC), "Shared"),
			(!is_literal && entity.has(Modifiers::READ_ONLY), "ReadOnly"),
		];
		for (_, keyword) in keywords.iter().filter(|(present, _)| *present) {
			writer.write_keyword(keyword);
			writer.write_string(" ");
		}
		writer.write_identifier(&entity.name);
		self.write_as_clause(entity.return_type.as_ref(), writer);
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
		writer.write_keyword("Event");
		writer.write_string(" ");
		writer.write_identifier(&entity.name);
		self.write_as_clause(entity.event_handler_type.as_ref(), writer);
		self.write_implements_clause(entity, writer)
	}
}
