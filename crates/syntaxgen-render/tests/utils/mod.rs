//! Entity builders and assertion helpers shared by the backend tests.
#![allow(dead_code)]

use std::path::PathBuf;

use syntaxgen_model::{
	Accessor, ContainingType, EntityKind, EntityNode, MemberReference, MemberSubkind, MethodTag,
	Parameter, TypeReference, TypeSubkind,
};
use syntaxgen_render::{Language, Renderer};

pub const INT: &str = "T:System.Int32";
pub const STRING: &str = "T:System.String";
pub const BOOLEAN: &str = "T:System.Boolean";
pub const OBJECT: &str = "T:System.Object";
pub const FRAMEWORK_ELEMENT: &str = "T:System.Windows.FrameworkElement";

/// Render `entity` as plain text, failing the test on a render error.
pub fn render(entity: &EntityNode, language: Language) -> String {
	Renderer::new()
		.render_text(entity, language)
		.unwrap_or_else(|e| panic!("{language} failed to render {}: {e}", entity.id))
}

/// Collapse every run of whitespace to one space.
pub fn normalized(text: &str) -> String {
	text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Load an entity node from `tests/fixtures/<name>.json`.
pub fn load_fixture(name: &str) -> EntityNode {
	let fixture_path = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
		.join("tests")
		.join("fixtures")
		.join(format!("{name}.json"));

	let json = std::fs::read_to_string(&fixture_path)
		.unwrap_or_else(|_| panic!("Failed to read fixture at {}", fixture_path.display()));

	serde_json::from_str(&json).unwrap_or_else(|e| panic!("Failed to parse fixture JSON: {}", e))
}

pub fn named(id: &str) -> TypeReference {
	TypeReference::named(id)
}

pub fn param(name: &str, type_id: &str) -> Parameter {
	Parameter::new(name, named(type_id))
}

pub fn namespace(name: &str) -> EntityNode {
	EntityNode::new(format!("N:{name}"), EntityKind::Namespace, name)
}

pub fn type_entity(subkind: TypeSubkind, name: &str) -> EntityNode {
	EntityNode::new(format!("T:Widgets.{name}"), EntityKind::Type(subkind), name)
}

pub fn class(name: &str) -> EntityNode {
	type_entity(TypeSubkind::Class, name).with_base_type(named(OBJECT))
}

/// The declaring type used by member builders.
pub fn declaring(subkind: TypeSubkind, name: &str) -> ContainingType {
	ContainingType {
		id: format!("T:Widgets.{name}").into(),
		name: name.into(),
		subkind,
		ancestors: vec![OBJECT.into()],
	}
}

/// A declaring type that derives from the UI base.
pub fn ui_declaring(name: &str) -> ContainingType {
	ContainingType {
		id: format!("T:Widgets.{name}").into(),
		name: name.into(),
		subkind: TypeSubkind::Class,
		ancestors: vec![
			"T:System.Windows.Controls.Control".into(),
			FRAMEWORK_ELEMENT.into(),
			OBJECT.into(),
		],
	}
}

pub fn member(subkind: MemberSubkind, sigil: char, name: &str) -> EntityNode {
	EntityNode::new(
		format!("{sigil}:Widgets.Box.{name}"),
		EntityKind::Member(subkind),
		name,
	)
	.with_containing_type(declaring(TypeSubkind::Class, "Box"))
}

pub fn method(name: &str) -> EntityNode {
	member(MemberSubkind::Method(MethodTag::Normal), 'M', name)
}

pub fn tagged_method(tag: MethodTag, name: &str) -> EntityNode {
	member(MemberSubkind::Method(tag), 'M', name)
}

pub fn constructor() -> EntityNode {
	EntityNode::new(
		"M:Widgets.Box.#ctor",
		EntityKind::Member(MemberSubkind::Constructor),
		".ctor",
	)
	.with_containing_type(declaring(TypeSubkind::Class, "Box"))
}

/// A property of `type_id` with a getter and, when `settable`, a setter.
pub fn property(name: &str, type_id: &str, settable: bool) -> EntityNode {
	let property = member(MemberSubkind::Property, 'P', name)
		.with_return_type(named(type_id))
		.with_getter(Accessor::default());
	if settable {
		property.with_setter(Accessor::default())
	} else {
		property
	}
}

pub fn field(name: &str, type_id: &str) -> EntityNode {
	member(MemberSubkind::Field, 'F', name).with_return_type(named(type_id))
}

pub fn event(name: &str) -> EntityNode {
	member(MemberSubkind::Event, 'E', name)
		.with_event_handler_type(named("T:System.EventHandler"))
}

/// The interface member `IBox.<name>` for explicit implementations.
pub fn box_member(sigil: char, name: &str) -> MemberReference {
	MemberReference {
		id: format!("{sigil}:Widgets.IBox.{name}").into(),
		name: name.into(),
		declaring_type: named("T:Widgets.IBox"),
	}
}

/// Generate one test per case, asserting the plain rendering in `$language`.
macro_rules! render_tests {
	($language:expr, { $($name:ident: $entity:expr => $expected:expr;)* }) => {
		$(
			#[test]
			fn $name() {
				pretty_assertions::assert_eq!($crate::utils::render(&$entity, $language), $expected);
			}
		)*
	};
}

pub(crate) use render_tests;
