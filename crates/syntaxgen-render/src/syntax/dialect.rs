use syntaxgen_model::Visibility;

/// A prefix token written before a parameter or declaration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Token {
	/// A keyword such as `out` or `ByRef`.
	Keyword(&'static str),
	/// An attribute usage, written with the language's attribute brackets.
	Attribute(&'static str),
	/// Unstyled text such as `...`.
	Text(&'static str),
}

/// How a type annotation separates a name from its type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TypeAnnotation {
	/// The type precedes the name (`int x`).
	Leading,
	/// The type follows a keyword (`x As Integer`).
	Keyword(&'static str),
	/// The type follows punctuation (`x : int`).
	Punctuation(&'static str),
}

/// How generic constraints are attached to the parameter list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConstraintStyle {
	/// One clause per constrained parameter after the signature (`where T : class`).
	Clause(&'static str),
	/// Inline after the parameter name (`T As {Class, New}`), braced when more than one.
	Inline(&'static str),
	/// Constraints have no surface form.
	Omitted,
}

/// Escaping convention for string literals.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StringEscape {
	/// `\"` and `\\`.
	Backslash,
	/// `""`.
	DoubledQuote,
}

/// Convention for character literals.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CharNotation {
	/// `'c'`.
	SingleQuoted,
	/// `"c"c`.
	QuotedWithSuffix(&'static str),
}

/// Placeholder for array values whose elements are not available.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArrayPlaceholder {
	/// `new T[] { ... }`: keyword, element type, then the given tail.
	Constructed {
		/// Construction keyword.
		keyword: &'static str,
		/// Text after the element type.
		tail: &'static str,
	},
	/// A bare array literal.
	Literal(&'static str),
}

/// Parameter-list conventions of a language.
#[derive(Debug, Clone, Copy)]
pub struct ParameterNotation {
	/// Opening bracket, including any leading space.
	pub open: &'static str,
	/// Closing bracket.
	pub close: &'static str,
	/// Omit the brackets entirely when there are no parameters.
	pub omit_when_empty: bool,
	/// Separator written after every parameter except the last.
	pub separator: &'static str,
	/// Prefix of `out` parameters.
	pub out: &'static [Token],
	/// Prefix of by-ref parameters marked `[In]`.
	pub in_: &'static [Token],
	/// Prefix of other by-ref parameters.
	pub by_ref: &'static [Token],
	/// Prefix of variadic parameter arrays.
	pub params_array: &'static [Token],
	/// Prefix of optional parameters without a default value.
	pub optional: &'static [Token],
	/// Prefix of optional parameters with a default value.
	pub optional_with_default: &'static [Token],
	/// Prefix of the receiver of an extension method.
	pub receiver: &'static [Token],
	/// Whether default values are written after the type.
	pub default_values: bool,
}

/// Keyword, symbol and punctuation tables of one target language.
#[derive(Debug, Clone, Copy)]
pub struct Dialect {
	/// Language id used in block tags and message keys.
	pub language: &'static str,
	/// Null reference keyword.
	pub null_keyword: &'static str,
	/// Boolean true keyword.
	pub true_keyword: &'static str,
	/// Boolean false keyword.
	pub false_keyword: &'static str,
	/// Bitwise-or operator joining enumeration flags.
	pub or_operator: &'static str,
	/// Operator wrapping a type to produce a type object.
	pub typeof_keyword: Option<&'static str>,
	/// Suffix of single-precision literals.
	pub float_suffix: &'static str,
	/// String literal escaping.
	pub string_escape: StringEscape,
	/// Character literal convention.
	pub char_notation: CharNotation,
	/// Array value placeholder.
	pub array_placeholder: ArrayPlaceholder,
	/// Separator between a named attribute argument and its value.
	pub named_argument_separator: &'static str,
	/// Attribute usage brackets.
	pub attribute_brackets: (&'static str, &'static str),
	/// Generic argument and parameter brackets.
	pub generic_brackets: (&'static str, &'static str),
	/// Array rank brackets.
	pub array_brackets: (&'static str, &'static str),
	/// Suffix written after a pointee, if pointers have a surface form.
	pub pointer_suffix: Option<&'static str>,
	/// Marker required before a line break inside a statement.
	pub line_continuation: Option<&'static str>,
	/// Type annotation convention.
	pub type_annotation: TypeAnnotation,
	/// Constraint placement.
	pub constraint_style: ConstraintStyle,
	/// Keywords for value-type, reference-type and constructor constraints.
	pub constraint_keywords: [&'static str; 3],
	/// Keywords for contravariant and covariant parameters.
	pub variance_keywords: (&'static str, &'static str),
	/// Parameter-list conventions.
	pub parameters: ParameterNotation,
	/// Built-in types written as keywords, by type id.
	pub builtin_types: &'static [(&'static str, &'static str)],
	/// Operator tokens, by canonical operator name.
	pub operators: &'static [(&'static str, &'static str)],
	/// Visibility keyword mapping.
	pub visibility: fn(Visibility) -> &'static str,
}

impl Dialect {
	/// The keyword standing in for a built-in type, if the language has one.
	pub fn builtin_keyword(&self, type_id: &str) -> Option<&'static str> {
		lookup(self.builtin_types, type_id)
	}

	/// The token of a canonical operator name, if the language can declare it.
	pub fn operator_symbol(&self, name: &str) -> Option<&'static str> {
		lookup(self.operators, name)
	}
}

fn lookup(table: &'static [(&'static str, &'static str)], key: &str) -> Option<&'static str> {
	table
		.iter()
		.find(|(candidate, _)| *candidate == key)
		.map(|(_, value)| *value)
}

/// CLR type ids shared by the built-in tables.
pub mod clr {
	/// `System.Object`.
	pub const OBJECT: &str = "T:System.Object";
	/// `System.String`.
	pub const STRING: &str = "T:System.String";
	/// `System.Boolean`.
	pub const BOOLEAN: &str = "T:System.Boolean";
	/// `System.Char`.
	pub const CHAR: &str = "T:System.Char";
	/// `System.Single`.
	pub const SINGLE: &str = "T:System.Single";
	/// `System.Void`.
	pub const VOID: &str = "T:System.Void";
	/// `System.Runtime.InteropServices.OutAttribute`.
	pub const OUT_ATTRIBUTE: &str = "T:System.Runtime.InteropServices.OutAttribute";
	/// `System.Runtime.InteropServices.InAttribute`.
	pub const IN_ATTRIBUTE: &str = "T:System.Runtime.InteropServices.InAttribute";
	/// `System.Runtime.InteropServices.OptionalAttribute`.
	pub const OPTIONAL_ATTRIBUTE: &str = "T:System.Runtime.InteropServices.OptionalAttribute";
	/// `System.SerializableAttribute`.
	pub const SERIALIZABLE_ATTRIBUTE: &str = "T:System.SerializableAttribute";
	/// `System.Runtime.CompilerServices.ExtensionAttribute`.
	pub const EXTENSION_ATTRIBUTE: &str = "T:System.Runtime.CompilerServices.ExtensionAttribute";
	/// `System.Runtime.CompilerServices.FixedBufferAttribute`.
	pub const FIXED_BUFFER_ATTRIBUTE: &str =
		"T:System.Runtime.CompilerServices.FixedBufferAttribute";
}
