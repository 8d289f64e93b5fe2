//! Integration tests for properties and indexers across languages.
mod utils;
use pretty_assertions::assert_eq;
use syntaxgen_model::{Accessor, Attribute, EntityNode, Modifiers, TypeSubkind, Visibility};
use syntaxgen_render::{Language, RenderError, Renderer};
use utils::*;

fn count_with_private_setter() -> EntityNode {
	property("Count", INT, false).with_setter(Accessor {
		visibility: Some(Visibility::Private),
		attributes: Vec::new(),
	})
}

fn default_indexer() -> EntityNode {
	property("Item", STRING, true)
		.with_modifiers(Modifiers::DEFAULT_INDEXER)
		.with_parameter(param("index", INT))
}

fn interface_count() -> EntityNode {
	property("Count", INT, false)
		.with_modifiers(Modifiers::ABSTRACT | Modifiers::VIRTUAL)
		.with_containing_type(declaring(TypeSubkind::Interface, "IBox"))
}

fn boxed_value() -> EntityNode {
	property("Value", INT, false)
		.with_visibility(Visibility::Private)
		.with_modifiers(Modifiers::VIRTUAL | Modifiers::FINAL)
		.with_implemented_member(box_member('P', "Value"))
}

mod csharp {
	use super::*;

	render_tests!(Language::CSharp, {
		accessor_visibility_differs: count_with_private_setter()
			=> "public int Count { get; private set; }";
		read_only: property("Count", INT, false) => "public int Count { get; }";
		static_property: property("Current", "T:Widgets.Settings", false).with_modifiers(Modifiers::STATIC)
			=> "public static Settings Current { get; }";
		indexer_uses_this: default_indexer()
			=> "public string this[\n\tint index\n] { get; set; }";
		interface_property: interface_count() => "int Count { get; }";
		explicit_implementation: boxed_value() => "int IBox.Value { get; }";
		explicit_indexer: property("Item", STRING, false)
			.with_parameter(param("index", INT))
			.with_implemented_member(box_member('P', "Item"))
			=> "string IBox.this[\n\tint index\n] { get; }";
		accessor_attributes_are_inline: property("Count", INT, false).with_getter(Accessor {
			visibility: None,
			attributes: vec![Attribute::new("T:System.Diagnostics.DebuggerStepThroughAttribute")],
		}) => "public int Count { [DebuggerStepThroughAttribute] get; }";
	});
}

mod visual_basic {
	use super::*;

	render_tests!(Language::VisualBasic, {
		accessor_visibility_differs: count_with_private_setter()
			=> "Public Property Count As Integer\n\tGet\n\tPrivate Set";
		read_only: property("Count", INT, false) => "Public ReadOnly Property Count As Integer\n\tGet";
		shared_property: property("Current", "T:Widgets.Settings", false).with_modifiers(Modifiers::STATIC)
			=> "Public Shared ReadOnly Property Current As Settings\n\tGet";
		default_indexer: super::default_indexer()
			=> "Default Public Property Item ( _\n\tindex As Integer _\n) As String\n\tGet\n\tSet";
		interface_property_has_no_accessor_lines: interface_count()
			=> "ReadOnly Property Count As Integer";
		explicit_implementation: boxed_value()
			=> "Private ReadOnly Property Value As Integer Implements IBox.Value\n\tGet";
	});
}

mod jscript {
	use super::*;

	render_tests!(Language::JScript, {
		accessor_functions: count_with_private_setter()
			=> "public function get Count() : int\nprivate function set Count(\n\tvalue : int\n)";
		read_only: property("Count", INT, false) => "public function get Count() : int";
		static_property: property("Current", "T:Widgets.Settings", false).with_modifiers(Modifiers::STATIC)
			=> "public static function get Current() : Settings";
		indexer_parameters_precede_value: default_indexer()
			=> "public function get Item(\n\tindex : int\n) : String\npublic function set Item(\n\tindex : int,\n\tvalue : String\n)";
		interface_property: interface_count() => "function get Count() : int";
		abstract_property: property("Count", INT, false).with_modifiers(Modifiers::ABSTRACT | Modifiers::VIRTUAL)
			=> "public abstract function get Count() : int";
		override_property: property("Count", INT, false).with_modifiers(Modifiers::OVERRIDE | Modifiers::VIRTUAL)
			=> "public override function get Count() : int";
		sealed_override_on_both_accessors: property("Count", INT, true)
			.with_modifiers(Modifiers::OVERRIDE | Modifiers::FINAL)
			=> "public final override function get Count() : int\npublic final override function set Count(\n\tvalue : int\n)";
	});
}

#[test]
fn write_only_property() {
	let entity = EntityNode {
		getter: None,
		..property("Secret", STRING, true)
	};
	assert_eq!(
		render(&entity, Language::VisualBasic),
		"Public WriteOnly Property Secret As String\n\tSet"
	);
	assert_eq!(render(&entity, Language::CSharp), "public string Secret { set; }");
}

#[test]
fn accessors_are_separate_sub_blocks() {
	let block = Renderer::new()
		.render_block(&count_with_private_setter(), Language::VisualBasic)
		.unwrap();
	let classes: Vec<&str> = block
		.elements
		.iter()
		.filter_map(|element| match element {
			syntaxgen_render::SyntaxElement::SubBlock { class, .. } => Some(class.as_str()),
			_ => None,
		})
		.collect();
	assert_eq!(classes, vec!["getter", "setter"]);
}

#[test]
fn explicit_implementation_fixture() {
	let entity = load_fixture("boxed_value");
	assert_eq!(render(&entity, Language::CSharp), "int IBox.Value { get; }");
	assert_eq!(
		render(&entity, Language::JScript),
		"UnsupportedExplicitImplementation_JScript"
	);
	assert_eq!(render(&entity, Language::CSharp), render(&boxed_value(), Language::CSharp));
}

#[test]
fn explicit_implementation_without_members_fails() {
	let entity = EntityNode {
		modifiers: Modifiers::EXPLICIT_IMPLEMENTATION,
		..property("Value", INT, false)
	};
	for language in [Language::CSharp, Language::VisualBasic] {
		assert!(matches!(
			Renderer::new().render_text(&entity, language),
			Err(RenderError::MissingImplementedMember { .. })
		));
	}
}
