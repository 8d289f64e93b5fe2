//! Integration tests for C# declaration syntax.
mod utils;
use pretty_assertions::assert_eq;
use syntaxgen_model::{
	Attribute, Constraints, EntityNode, GenericParameter, MethodTag, Modifiers, Parameter,
	TypeReference, TypeSubkind, Value, Variance, Visibility,
};
use syntaxgen_render::{Language, RenderError, RenderFormat, Renderer};
use utils::*;

const CSHARP: Language = Language::CSharp;

fn add() -> EntityNode {
	method("Add")
		.with_parameter(param("x", INT))
		.with_parameter(param("y", INT))
		.with_return_type(named(INT))
}

render_tests!(CSHARP, {
	namespace_declaration: namespace("Widgets") => "namespace Widgets";
	class_without_base: class("Box") => "public class Box";
	class_with_base_and_interfaces: class("Box")
		.with_base_type(named("T:Widgets.Shape"))
		.with_interface(named("T:System.IDisposable"))
		=> "public class Box : Shape, IDisposable";
	static_class: class("Tools").with_modifiers(Modifiers::ABSTRACT | Modifiers::SEALED)
		=> "public static class Tools";
	sealed_internal_class: class("Cache")
		.with_visibility(Visibility::Assembly)
		.with_modifiers(Modifiers::SEALED)
		=> "internal sealed class Cache";
	serializable_marker: class("Box").with_modifiers(Modifiers::SERIALIZABLE)
		=> "[SerializableAttribute]\npublic class Box";
	structure_ignores_base: type_entity(TypeSubkind::Structure, "Point")
		.with_base_type(named("T:System.ValueType"))
		.with_interface(named("T:System.IEquatable"))
		=> "public struct Point : IEquatable";
	interface_with_variance: type_entity(TypeSubkind::Interface, "IProducer")
		.with_generic_parameter(GenericParameter::new("T").with_variance(Variance::Covariant))
		.with_interface(named("T:System.IDisposable"))
		=> "public interface IProducer<out T> : IDisposable";
	enumeration: type_entity(TypeSubkind::Enumeration, "Color") => "public enum Color";
	delegate_declaration: type_entity(TypeSubkind::Delegate, "Handler")
		.with_parameter(param("sender", OBJECT))
		.with_return_type(named(BOOLEAN))
		=> "public delegate bool Handler(\n\tobject sender\n)";
	constructor_uses_type_name: constructor().with_parameter(param("size", INT))
		=> "public Box(\n\tint size\n)";
	static_constructor: constructor().with_modifiers(Modifiers::STATIC) => "static Box()";
	void_method: method("Close") => "public void Close()";
	virtual_method: method("Draw").with_modifiers(Modifiers::VIRTUAL) => "public virtual void Draw()";
	sealed_override: method("Draw").with_modifiers(Modifiers::VIRTUAL | Modifiers::OVERRIDE | Modifiers::FINAL)
		=> "public sealed override void Draw()";
	protected_abstract: method("Draw")
		.with_visibility(Visibility::Family)
		.with_modifiers(Modifiers::ABSTRACT | Modifiers::VIRTUAL)
		=> "protected abstract void Draw()";
	interface_member_has_no_modifiers: method("Open")
		.with_modifiers(Modifiers::ABSTRACT | Modifiers::VIRTUAL)
		.with_containing_type(declaring(TypeSubkind::Interface, "IBox"))
		=> "void Open()";
	extension_method: method("IsEmpty")
		.with_modifiers(Modifiers::STATIC | Modifiers::EXTENSION)
		.with_attribute(Attribute::new("T:System.Runtime.CompilerServices.ExtensionAttribute"))
		.with_parameter(param("value", STRING))
		.with_return_type(named(BOOLEAN))
		=> "public static bool IsEmpty(\n\tthis string value\n)";
	out_and_ref_parameters: method("TryParse")
		.with_modifiers(Modifiers::STATIC)
		.with_parameter(param("text", STRING))
		.with_parameter(param("result", INT).out())
		.with_parameter(param("total", INT).by_ref())
		.with_return_type(named(BOOLEAN))
		=> "public static bool TryParse(\n\tstring text,\n\tout int result,\n\tref int total\n)";
	optional_and_params_parameters: method("Sum")
		.with_parameter(param("count", INT).optional(Some(Value::literal(INT, "3"))))
		.with_parameter(Parameter::new("rest", TypeReference::array_of(1, named(INT))).params_array())
		.with_return_type(named(INT))
		=> "public int Sum(\n\tint count = 3,\n\tparams int[] rest\n)";
	generic_method_constraints: method("Find")
		.with_generic_parameter(GenericParameter::new("T").with_constraints(Constraints {
			is_reference_type: true,
			requires_parameterless_constructor: true,
			..Constraints::default()
		}))
		.with_return_type(TypeReference::template("T"))
		=> "public T Find<T>()\nwhere T : class, new()";
	value_type_constraint_implies_constructor: method("Default")
		.with_generic_parameter(GenericParameter::new("T").with_constraints(Constraints {
			is_value_type: true,
			requires_parameterless_constructor: true,
			..Constraints::default()
		}))
		.with_return_type(TypeReference::template("T"))
		=> "public T Default<T>()\nwhere T : struct";
	operator_symbol: tagged_method(MethodTag::Operator, "Addition")
		.with_modifiers(Modifiers::STATIC)
		.with_parameter(param("a", "T:Widgets.Vector"))
		.with_parameter(param("b", "T:Widgets.Vector"))
		.with_return_type(named("T:Widgets.Vector"))
		=> "public static Vector operator +(\n\tVector a,\n\tVector b\n)";
	unknown_operator: tagged_method(MethodTag::Operator, "Exponent").with_modifiers(Modifiers::STATIC)
		=> "UnsupportedOperator_CSharp";
	implicit_cast: tagged_method(MethodTag::Cast, "Implicit")
		.with_modifiers(Modifiers::STATIC)
		.with_parameter(param("value", INT))
		.with_return_type(named("T:Widgets.Vector"))
		=> "public static implicit operator Vector(\n\tint value\n)";
	special_name_accessor: tagged_method(MethodTag::Special, "get_Count").with_return_type(named(INT))
		=> "public int get_Count()";
	special_name_operator: tagged_method(MethodTag::Special, "Equality")
		.with_modifiers(Modifiers::STATIC)
		.with_parameter(param("a", INT))
		.with_parameter(param("b", INT))
		.with_return_type(named(BOOLEAN))
		=> "public static bool operator ==(\n\tint a,\n\tint b\n)";
	const_field: field("MaxSize", INT)
		.with_modifiers(Modifiers::STATIC | Modifiers::LITERAL)
		.with_value(Value::literal(INT, "10"))
		=> "public const int MaxSize = 10";
	static_readonly_field: field("Empty", STRING).with_modifiers(Modifiers::STATIC | Modifiers::READ_ONLY)
		=> "public static readonly string Empty";
	string_const_escapes_quotes: field("Greeting", STRING)
		.with_modifiers(Modifiers::LITERAL)
		.with_value(Value::literal(STRING, "say \"hi\""))
		=> "public const string Greeting = \"say \\\"hi\\\"\"";
	event_declaration: event("Closed") => "public event EventHandler Closed";
	pointer_parameter_is_unsafe: method("Copy")
		.with_parameter(Parameter::new("source", TypeReference::pointer_to(named("T:System.Byte"))))
		=> "UnsupportedUnsafe_CSharp";
	varargs_method: method("Print").with_modifiers(Modifiers::VARARGS) => "UnsupportedVarargs_CSharp";
	unsafe_wins_over_varargs: method("Print").with_modifiers(Modifiers::VARARGS | Modifiers::UNSAFE)
		=> "UnsupportedUnsafe_CSharp";
});

#[test]
fn add_method_reads_as_one_declaration() {
	assert_eq!(normalized(&render(&add(), CSHARP)), "public int Add( int x, int y )");
}

#[test]
fn attribute_arguments_render_inside_brackets() {
	let entity = method("Close").with_attribute(
		Attribute::new("T:System.ObsoleteAttribute")
			.with_positional(Value::literal(STRING, "Use Dispose"))
			.with_named("IsError", Value::literal(BOOLEAN, "true")),
	);
	assert_eq!(
		render(&entity, CSHARP),
		"[ObsoleteAttribute(\"Use Dispose\", IsError = true)]\npublic void Close()"
	);
}

#[test]
fn enum_flags_join_with_one_operator_between_fields() {
	let entity = class("MarkerAttribute").with_attribute(
		Attribute::new("T:System.AttributeUsageAttribute").with_positional(Value::enum_flags(
			"T:System.AttributeTargets",
			["Class", "Method", "Property"],
		)),
	);
	let text = render(&entity, CSHARP);
	assert_eq!(text.matches(" | ").count(), 2);
	assert!(text.starts_with(
		"[AttributeUsageAttribute(AttributeTargets.Class | AttributeTargets.Method | AttributeTargets.Property)]\n"
	));
}

#[test]
fn empty_enum_flags_fail_the_render() {
	let entity = class("MarkerAttribute").with_attribute(
		Attribute::new("T:System.AttributeUsageAttribute")
			.with_positional(Value::enum_flags("T:System.AttributeTargets", Vec::<String>::new())),
	);
	assert!(matches!(
		Renderer::new().render_text(&entity, CSHARP),
		Err(RenderError::EmptyEnumFlags { .. })
	));
}

#[test]
fn explicit_implementation_names_the_interface() {
	let entity = method("Open")
		.with_visibility(Visibility::Private)
		.with_modifiers(Modifiers::VIRTUAL | Modifiers::FINAL)
		.with_implemented_member(box_member('M', "Open"));
	assert_eq!(render(&entity, CSHARP), "void IBox.Open()");
}

#[test]
fn malformed_cast_is_an_error() {
	let entity = tagged_method(MethodTag::Cast, "Convert").with_return_type(named(INT));
	assert_eq!(
		Renderer::new().render_text(&entity, CSHARP),
		Err(RenderError::MalformedCast {
			name: "Convert".into()
		})
	);
}

#[test]
fn generic_class_constraint_clauses() {
	let entity = class("Cache")
		.with_generic_parameter(GenericParameter::new("TKey").with_constraints(Constraints {
			is_reference_type: true,
			requires_parameterless_constructor: true,
			type_constraints: vec![named("T:System.IComparable")],
			..Constraints::default()
		}))
		.with_generic_parameter(GenericParameter::new("TValue"));
	assert_eq!(
		render(&entity, CSHARP),
		"public class Cache<TKey, TValue>\nwhere TKey : class, new(), IComparable"
	);
}

#[test]
fn specialized_base_type() {
	let entity = class("Names").with_base_type(TypeReference::specialization(
		"T:System.Collections.Generic.List`1",
		vec![named(STRING)],
	));
	assert_eq!(render(&entity, CSHARP), "public class Names : List<string>");
}

#[test]
fn markup_keeps_styles_and_reference_targets() {
	let text = Renderer::new()
		.with_format(RenderFormat::Markup)
		.render_text(&add(), CSHARP)
		.unwrap();
	assert!(text.starts_with("<div codeLanguage=\"CSharp\">"));
	assert!(text.contains("<span class=\"keyword\">public</span>"));
	assert!(text.contains("<referenceLink target=\"T:System.Int32\">int</referenceLink>"));
	assert!(text.contains("<span class=\"identifier\">Add</span>"));
	assert!(text.contains("<span class=\"parameter\">x</span>"));
	assert!(text.ends_with(")</div>"));
}

#[test]
fn fixture_renders_like_the_builder() {
	let entity = load_fixture("add_method");
	assert_eq!(render(&entity, CSHARP), render(&add(), CSHARP));
}
