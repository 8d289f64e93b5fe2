use syntaxgen_model::{Accessor, EntityNode, Modifiers, Parameter, TypeReference, Visibility};

use super::{
	ProcedureInheritance, TypeInheritance, write_declaration_attributes, write_member_visibility,
};
use crate::error::Result;
use crate::generator::{
	SyntaxGenerator, Unsupported, constructor_name, explicit_base_type, result_type,
	unsupported_key,
};
use crate::syntax::{
	ArrayPlaceholder, CharNotation, ConstraintStyle, DEFAULT_WRAP_COLUMN, Dialect, Notation,
	ParameterNotation, StringEscape, Token, TypeAnnotation, clr,
};
use crate::writer::SyntaxWriter;

/// Language id.
pub const LANGUAGE: &str = "JScript";

/// JScript tables.
pub static DIALECT: Dialect = Dialect {
	language: LANGUAGE,
	null_keyword: "null",
	true_keyword: "true",
	false_keyword: "false",
	or_operator: "|",
	typeof_keyword: None,
	float_suffix: "",
	string_escape: StringEscape::Backslash,
	char_notation: CharNotation::SingleQuoted,
	array_placeholder: ArrayPlaceholder::Literal("[ ... ]"),
	named_argument_separator: " = ",
	attribute_brackets: ("", ""),
	generic_brackets: ("<", ">"),
	array_brackets: ("[", "]"),
	pointer_suffix: None,
	line_continuation: None,
	type_annotation: TypeAnnotation::Punctuation(":"),
	constraint_style: ConstraintStyle::Omitted,
	constraint_keywords: ["", "", ""],
	variance_keywords: ("", ""),
	parameters: ParameterNotation {
		open: "(",
		close: ")",
		omit_when_empty: false,
		separator: ",",
		out: &[],
		in_: &[],
		by_ref: &[],
		params_array: &[Token::Text("...")],
		optional: &[],
		optional_with_default: &[],
		receiver: &[],
		default_values: false,
	},
	builtin_types: &[
		(clr::OBJECT, "Object"),
		(clr::STRING, "String"),
		(clr::BOOLEAN, "boolean"),
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
	operators: &[],
	visibility: visibility_keyword,
};

fn visibility_keyword(visibility: Visibility) -> &'static str {
	match visibility {
		Visibility::Public => "public",
		Visibility::Family => "protected",
		Visibility::FamilyOrAssembly => "protected internal",
		Visibility::FamilyAndAssembly | Visibility::Assembly => "internal",
		Visibility::Private => "private",
	}
}

/// Renders JScript declarations.
#[derive(Debug, Clone, Copy)]
pub struct JScriptGenerator {
	wrap_column: usize,
}

impl Default for JScriptGenerator {
	fn default() -> Self {
		Self::new(DEFAULT_WRAP_COLUMN)
	}
}

impl JScriptGenerator {
	/// A generator wrapping at `wrap_column`.
	pub fn new(wrap_column: usize) -> Self {
		Self { wrap_column }
	}

	fn write_unsupported(&self, feature: &str, writer: &mut dyn SyntaxWriter) -> Result<()> {
		writer.write_message(&unsupported_key(feature, LANGUAGE));
		Ok(())
	}

	fn write_procedure_prefix(&self, entity: &EntityNode, writer: &mut dyn SyntaxWriter) {
		write_member_visibility(&self.notation(), entity, writer);
		self.write_inheritance(entity, writer);
	}

	fn write_inheritance(&self, entity: &EntityNode, writer: &mut dyn SyntaxWriter) {
		// Methods are virtual unless marked otherwise, so `Virtual` writes nothing.
		let keyword = match ProcedureInheritance::of(entity) {
			ProcedureInheritance::Static => "static",
			ProcedureInheritance::Abstract => "abstract",
			ProcedureInheritance::SealedOverride => "final override",
			ProcedureInheritance::Override => "override",
			ProcedureInheritance::Virtual | ProcedureInheritance::None => return,
		};
		writer.write_keyword(keyword);
		writer.write_string(" ");
	}

	fn write_type_annotation(&self, ty: &TypeReference, writer: &mut dyn SyntaxWriter) {
		let notation = self.notation();
		notation.write_type_annotation(writer);
		notation.write_type_reference(ty, writer);
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
		writer.write_keyword(keyword);
		writer.write_string(" ");
		writer.write_identifier(&entity.name);
		Ok(())
	}

	/// ` extends Base` or ` implements IA, IB`.
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
		notation.write_space_or_wrap(writer);
		writer.write_keyword(keyword);
		writer.write_string(" ");
		notation.write_type_list(types, writer);
	}

	/// One `function get`/`function set` line inside its own sub-block.
	fn write_accessor(
		&self,
		entity: &EntityNode,
		accessor: &Accessor,
		class: &str,
		writer: &mut dyn SyntaxWriter,
	) -> Result<()> {
		let notation = self.notation();
		writer.write_start_sub_block(class);
		notation.write_inline_attributes(&accessor.attributes, writer)?;
		match accessor.visibility {
			Some(visibility) if !entity.is_interface_member() => {
				notation.write_visibility(visibility, writer);
				writer.write_string(" ");
			}
			_ => write_member_visibility(&notation, entity, writer),
		}
		self.write_inheritance(entity, writer);
		writer.write_keyword("function");
		writer.write_string(" ");
		let is_getter = class == "getter";
		writer.write_keyword(if is_getter { "get" } else { "set" });
		writer.write_string(" ");
		writer.write_identifier(&entity.name);

		match (&entity.return_type, is_getter) {
			(Some(ty), true) => {
				notation.write_parameters(&entity.parameters, false, writer)?;
				self.write_type_annotation(ty, writer);
			}
			(Some(ty), false) => {
				let mut parameters = entity.parameters.clone();
				parameters.push(Parameter::new("value", ty.clone()));
				notation.write_parameters(&parameters, false, writer)?;
			}
			(None, _) => notation.write_parameters(&entity.parameters, false, writer)?,
		}
		writer.write_end_sub_block();
		Ok(())
	}
}

impl SyntaxGenerator for JScriptGenerator {
	fn language(&self) -> &'static str {
		LANGUAGE
	}

	fn notation(&self) -> Notation<'_> {
		Notation::new(&DIALECT, self.wrap_column)
	}

	fn guarded_features(&self) -> Unsupported {
		Unsupported::all()
	}

	fn write_namespace_syntax(
		&self,
		entity: &EntityNode,
		writer: &mut dyn SyntaxWriter,
	) -> Result<()> {
		writer.write_keyword("package");
		writer.write_string(" ");
		writer.write_identifier(&entity.name);
		Ok(())
	}

	fn write_class_syntax(&self, entity: &EntityNode, writer: &mut dyn SyntaxWriter) -> Result<()> {
		let notation = self.notation();
		write_declaration_attributes(&notation, entity, writer)?;
		notation.write_visibility(entity.visibility, writer);
		writer.write_string(" ");
		let modifier = match TypeInheritance::of(entity) {
			TypeInheritance::Static => Some("static"),
			TypeInheritance::Abstract => Some("abstract"),
			TypeInheritance::Sealed => Some("final"),
			TypeInheritance::None => None,
		};
		if let Some(modifier) = modifier {
			writer.write_keyword(modifier);
			writer.write_string(" ");
		}
		writer.write_keyword("class");
		writer.write_string(" ");
		writer.write_identifier(&entity.name);
		let base: Vec<TypeReference> = explicit_base_type(entity).into_iter().cloned().collect();
		self.write_type_clause("extends", &base, writer);
		self.write_type_clause("implements", &entity.implemented_interfaces, writer);
		Ok(())
	}

	fn write_structure_syntax(
		&self,
		_entity: &EntityNode,
		writer: &mut dyn SyntaxWriter,
	) -> Result<()> {
		self.write_unsupported("Structure", writer)
	}

	fn write_interface_syntax(
		&self,
		entity: &EntityNode,
		writer: &mut dyn SyntaxWriter,
	) -> Result<()> {
		self.write_type_header("interface", entity, writer)?;
		self.write_type_clause("implements", &entity.implemented_interfaces, writer);
		Ok(())
	}

	fn write_delegate_syntax(
		&self,
		_entity: &EntityNode,
		writer: &mut dyn SyntaxWriter,
	) -> Result<()> {
		self.write_unsupported("Delegate", writer)
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
		} else {
			notation.write_visibility(entity.visibility, writer);
		}
		writer.write_string(" ");
		writer.write_keyword("function");
		writer.write_string(" ");
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
		writer.write_keyword("function");
		writer.write_string(" ");
		writer.write_identifier(&entity.name);
		notation.write_parameters(&entity.parameters, false, writer)?;
		if let Some(ty) = result_type(entity) {
			self.write_type_annotation(ty, writer);
		}
		Ok(())
	}

	fn write_operator_syntax(
		&self,
		_entity: &EntityNode,
		writer: &mut dyn SyntaxWriter,
	) -> Result<()> {
		self.write_unsupported("Operator", writer)
	}

	fn write_cast_syntax(&self, _entity: &EntityNode, writer: &mut dyn SyntaxWriter) -> Result<()> {
		self.write_unsupported("Cast", writer)
	}

	fn write_property_syntax(
		&self,
		entity: &EntityNode,
		writer: &mut dyn SyntaxWriter,
	) -> Result<()> {
		let notation = self.notation();
		write_declaration_attributes(&notation, entity, writer)?;
		if let Some(getter) = &entity.getter {
			self.write_accessor(entity, getter, "getter", writer)?;
		}
		if let Some(setter) = &entity.setter {
			if entity.getter.is_some() {
				writer.write_line();
			}
			self.write_accessor(entity, setter, "setter", writer)?;
		}
		Ok(())
	}

	fn write_field_syntax(&self, entity: &EntityNode, writer: &mut dyn SyntaxWriter) -> Result<()> {
		let notation = self.notation();
		write_declaration_attributes(&notation, entity, writer)?;
		write_member_visibility(&notation, entity, writer);
		let is_literal = entity.has(Modifiers::LITERAL);
		if is_literal || entity.has(Modifiers::STATIC) {
			writer.write_keyword("static");
			writer.write_string(" ");
		}
		let storage = if is_literal || entity.has(Modifiers::READ_ONLY) {
			"const"
		} else {
			"var"
		};
		writer.write_keyword(storage);
		writer.write_string(" ");
		writer.write_identifier(&entity.name);
		if let Some(ty) = &entity.return_type {
			self.write_type_annotation(ty, writer);
		}
		if is_literal && let Some(value) = &entity.value {
			writer.write_string(" = ");
			notation.write_value(value, writer)?;
		}
		Ok(())
	}

	fn write_event_syntax(&self, _entity: &EntityNode, writer: &mut dyn SyntaxWriter) -> Result<()> {
		self.write_unsupported("Event", writer)
	}
}
