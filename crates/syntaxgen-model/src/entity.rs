use serde::{Deserialize, Serialize};

use crate::id::ApiId;
use crate::modifiers::{Modifiers, Variance, Visibility};
use crate::types::TypeReference;
use crate::value::Value;

/// Type declaration kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TypeSubkind {
	/// Reference type.
	Class,
	/// Value type.
	Structure,
	/// Interface.
	Interface,
	/// Delegate type.
	Delegate,
	/// Enumeration.
	Enumeration,
}

/// Further classification of methods.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MethodTag {
	/// Ordinary method.
	#[default]
	Normal,
	/// User-defined operator.
	Operator,
	/// User-defined conversion.
	Cast,
	/// Special-name method whose role is decided by its name.
	Special,
}

/// Member declaration kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MemberSubkind {
	/// Instance or static constructor.
	Constructor,
	/// Method, operator or conversion.
	Method(MethodTag),
	/// Property or indexer.
	Property,
	/// Field.
	Field,
	/// Event.
	Event,
}

/// Top-level discriminator of an entity node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntityKind {
	/// A namespace.
	Namespace,
	/// A type declaration.
	Type(TypeSubkind),
	/// A member declaration.
	Member(MemberSubkind),
}

/// Constraints placed on a generic parameter.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Constraints {
	/// Requires a value type.
	pub is_value_type: bool,
	/// Requires a reference type.
	pub is_reference_type: bool,
	/// Requires a public parameterless constructor.
	pub requires_parameterless_constructor: bool,
	/// Required base types and interfaces.
	pub type_constraints: Vec<TypeReference>,
}

impl Constraints {
	/// Whether no constraint of any kind is present.
	pub fn is_empty(&self) -> bool {
		!self.is_value_type
			&& !self.is_reference_type
			&& !self.requires_parameterless_constructor
			&& self.type_constraints.is_empty()
	}

	/// Number of individual constraints.
	pub fn len(&self) -> usize {
		usize::from(self.is_value_type)
			+ usize::from(self.is_reference_type)
			+ usize::from(self.requires_parameterless_constructor)
			+ self.type_constraints.len()
	}
}

/// A generic parameter declared by a type or method.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenericParameter {
	/// Parameter name.
	pub name: String,
	/// Declared variance.
	#[serde(default)]
	pub variance: Variance,
	/// Declared constraints.
	#[serde(default)]
	pub constraints: Constraints,
}

impl GenericParameter {
	/// An unconstrained, invariant parameter.
	pub fn new(name: impl Into<String>) -> Self {
		Self {
			name: name.into(),
			variance: Variance::None,
			constraints: Constraints::default(),
		}
	}

	/// Set the variance.
	pub fn with_variance(mut self, variance: Variance) -> Self {
		self.variance = variance;
		self
	}

	/// Set the constraints.
	pub fn with_constraints(mut self, constraints: Constraints) -> Self {
		self.constraints = constraints;
		self
	}
}

/// A named attribute argument.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NamedArgument {
	/// Field or property name.
	pub name: String,
	/// Assigned value.
	pub value: Value,
}

/// A custom attribute applied to an entity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attribute {
	/// The attribute class.
	pub attribute_type: TypeReference,
	/// Constructor arguments in order.
	#[serde(default)]
	pub positional_arguments: Vec<Value>,
	/// Field and property assignments in order.
	#[serde(default)]
	pub named_arguments: Vec<NamedArgument>,
}

impl Attribute {
	/// An attribute of type `type_id` without arguments.
	pub fn new(type_id: &str) -> Self {
		Self {
			attribute_type: TypeReference::named(type_id),
			positional_arguments: Vec::new(),
			named_arguments: Vec::new(),
		}
	}

	/// Append a positional argument.
	pub fn with_positional(mut self, value: Value) -> Self {
		self.positional_arguments.push(value);
		self
	}

	/// Append a named argument.
	pub fn with_named(mut self, name: impl Into<String>, value: Value) -> Self {
		self.named_arguments.push(NamedArgument {
			name: name.into(),
			value,
		});
		self
	}

	/// Whether this attribute's type is `type_id`.
	pub fn is(&self, type_id: &str) -> bool {
		self.attribute_type.is_type(type_id)
	}
}

/// A method, indexer or delegate parameter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Parameter {
	/// Parameter name.
	pub name: String,
	/// Parameter type; by-ref parameters usually wrap it in a reference.
	#[serde(rename = "type")]
	pub type_: TypeReference,
	/// Marked `[In]`.
	#[serde(default)]
	pub is_in: bool,
	/// Marked `[Out]`.
	#[serde(default)]
	pub is_out: bool,
	/// Passed by reference.
	#[serde(default)]
	pub is_by_ref: bool,
	/// Variadic parameter array.
	#[serde(default)]
	pub is_params_array: bool,
	/// Marked optional.
	#[serde(default)]
	pub is_optional: bool,
	/// Explicit default value.
	#[serde(default)]
	pub default_value: Option<Value>,
}

impl Parameter {
	/// A plain by-value parameter.
	pub fn new(name: impl Into<String>, type_: TypeReference) -> Self {
		Self {
			name: name.into(),
			type_,
			is_in: false,
			is_out: false,
			is_by_ref: false,
			is_params_array: false,
			is_optional: false,
			default_value: None,
		}
	}

	/// Mark as an `out` parameter; the type is wrapped in a reference.
	pub fn out(mut self) -> Self {
		self.is_out = true;
		self.by_ref()
	}

	/// Mark as passed by reference; the type is wrapped in a reference.
	pub fn by_ref(mut self) -> Self {
		self.is_by_ref = true;
		if !matches!(self.type_, TypeReference::Reference { .. }) {
			self.type_ = TypeReference::reference_to(self.type_);
		}
		self
	}

	/// Mark as a variadic parameter array.
	pub fn params_array(mut self) -> Self {
		self.is_params_array = true;
		self
	}

	/// Mark as optional, with an optional explicit default.
	pub fn optional(mut self, default_value: Option<Value>) -> Self {
		self.is_optional = true;
		self.default_value = default_value;
		self
	}
}

/// A member implemented explicitly by an entity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemberReference {
	/// Member id.
	pub id: ApiId,
	/// Member display name.
	pub name: String,
	/// The interface that declares it.
	pub declaring_type: TypeReference,
}

/// The type that declares a member.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContainingType {
	/// Type id.
	pub id: ApiId,
	/// Type display name.
	pub name: String,
	/// Declaration kind of the containing type.
	pub subkind: TypeSubkind,
	/// Ancestor chain of the containing type, nearest first.
	#[serde(default)]
	pub ancestors: Vec<ApiId>,
}

/// Back-references used for name qualification only.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Containers {
	/// Declaring assembly name.
	pub assembly: Option<String>,
	/// Declaring namespace id.
	pub namespace: Option<ApiId>,
	/// Declaring type, for members and nested types.
	#[serde(rename = "type")]
	pub type_: Option<ContainingType>,
}

/// A property accessor.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Accessor {
	/// Accessor visibility, when it is recorded separately from the property.
	pub visibility: Option<Visibility>,
	/// Attributes applied to the accessor itself.
	pub attributes: Vec<Attribute>,
}

/// The free-function pair that backs an attached property or event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Attachment {
	/// `GetX`/`SetX` pair.
	Property {
		/// Getter method id.
		#[serde(default)]
		getter: Option<ApiId>,
		/// Setter method id.
		#[serde(default)]
		setter: Option<ApiId>,
	},
	/// `AddXHandler`/`RemoveXHandler` pair.
	Event {
		/// Adder method id.
		#[serde(default)]
		adder: Option<ApiId>,
		/// Remover method id.
		#[serde(default)]
		remover: Option<ApiId>,
	},
}

/// Read-only description of one documented API element.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntityNode {
	/// Stable entity id.
	pub id: ApiId,
	/// Kind and subkind.
	pub kind: EntityKind,
	/// Unqualified display name.
	pub name: String,
	/// Declared accessibility.
	#[serde(default)]
	pub visibility: Visibility,
	/// Declaration modifiers.
	#[serde(default)]
	pub modifiers: Modifiers,
	/// Declared generic parameters.
	#[serde(default)]
	pub generic_parameters: Vec<GenericParameter>,
	/// Base class, for classes.
	#[serde(default)]
	pub base_type: Option<TypeReference>,
	/// Directly implemented interfaces.
	#[serde(default)]
	pub implemented_interfaces: Vec<TypeReference>,
	/// Custom attributes.
	#[serde(default)]
	pub attributes: Vec<Attribute>,
	/// Parameters of methods, indexers and delegates.
	#[serde(default)]
	pub parameters: Vec<Parameter>,
	/// Return type of methods and delegates, or the type of properties and fields.
	/// Absent means `void`.
	#[serde(default)]
	pub return_type: Option<TypeReference>,
	/// Handler type of events.
	#[serde(default)]
	pub event_handler_type: Option<TypeReference>,
	/// Argument type of events.
	#[serde(default)]
	pub event_args_type: Option<TypeReference>,
	/// Members implemented explicitly.
	#[serde(default)]
	pub implemented_members: Vec<MemberReference>,
	/// Declaring assembly, namespace and type.
	#[serde(default)]
	pub containers: Containers,
	/// Property getter.
	#[serde(default)]
	pub getter: Option<Accessor>,
	/// Property setter.
	#[serde(default)]
	pub setter: Option<Accessor>,
	/// Ancestor chain of a type entity, nearest first.
	#[serde(default)]
	pub ancestors: Vec<ApiId>,
	/// Value of a literal field.
	#[serde(default)]
	pub value: Option<Value>,
	/// Accessor pair of an attached property or event.
	#[serde(default)]
	pub attachment: Option<Attachment>,
}

impl EntityNode {
	/// A public node of the given kind with every optional field empty.
	pub fn new(id: impl Into<ApiId>, kind: EntityKind, name: impl Into<String>) -> Self {
		Self {
			id: id.into(),
			kind,
			name: name.into(),
			visibility: Visibility::Public,
			modifiers: Modifiers::empty(),
			generic_parameters: Vec::new(),
			base_type: None,
			implemented_interfaces: Vec::new(),
			attributes: Vec::new(),
			parameters: Vec::new(),
			return_type: None,
			event_handler_type: None,
			event_args_type: None,
			implemented_members: Vec::new(),
			containers: Containers::default(),
			getter: None,
			setter: None,
			ancestors: Vec::new(),
			value: None,
			attachment: None,
		}
	}

	/// Set the visibility.
	pub fn with_visibility(mut self, visibility: Visibility) -> Self {
		self.visibility = visibility;
		self
	}

	/// Add modifiers.
	pub fn with_modifiers(mut self, modifiers: Modifiers) -> Self {
		self.modifiers |= modifiers;
		self
	}

	/// Append a generic parameter.
	pub fn with_generic_parameter(mut self, parameter: GenericParameter) -> Self {
		self.generic_parameters.push(parameter);
		self
	}

	/// Set the base class.
	pub fn with_base_type(mut self, base_type: TypeReference) -> Self {
		self.base_type = Some(base_type);
		self
	}

	/// Append an implemented interface.
	pub fn with_interface(mut self, interface: TypeReference) -> Self {
		self.implemented_interfaces.push(interface);
		self
	}

	/// Append an attribute.
	pub fn with_attribute(mut self, attribute: Attribute) -> Self {
		self.attributes.push(attribute);
		self
	}

	/// Append a parameter.
	pub fn with_parameter(mut self, parameter: Parameter) -> Self {
		self.parameters.push(parameter);
		self
	}

	/// Set the return (or property/field) type.
	pub fn with_return_type(mut self, return_type: TypeReference) -> Self {
		self.return_type = Some(return_type);
		self
	}

	/// Set the event handler type.
	pub fn with_event_handler_type(mut self, handler: TypeReference) -> Self {
		self.event_handler_type = Some(handler);
		self
	}

	/// Record an explicitly implemented member and set `EXPLICIT_IMPLEMENTATION`.
	pub fn with_implemented_member(mut self, member: MemberReference) -> Self {
		self.modifiers |= Modifiers::EXPLICIT_IMPLEMENTATION;
		self.implemented_members.push(member);
		self
	}

	/// Set the containing type.
	pub fn with_containing_type(mut self, containing: ContainingType) -> Self {
		self.containers.type_ = Some(containing);
		self
	}

	/// Set the containing namespace.
	pub fn with_namespace(mut self, namespace: impl Into<ApiId>) -> Self {
		self.containers.namespace = Some(namespace.into());
		self
	}

	/// Set the getter accessor.
	pub fn with_getter(mut self, getter: Accessor) -> Self {
		self.getter = Some(getter);
		self
	}

	/// Set the setter accessor.
	pub fn with_setter(mut self, setter: Accessor) -> Self {
		self.setter = Some(setter);
		self
	}

	/// Set the ancestor chain.
	pub fn with_ancestors<I, S>(mut self, ancestors: I) -> Self
	where
		I: IntoIterator<Item = S>,
		S: Into<ApiId>,
	{
		self.ancestors = ancestors.into_iter().map(Into::into).collect();
		self
	}

	/// Set the literal value.
	pub fn with_value(mut self, value: Value) -> Self {
		self.value = Some(value);
		self
	}

	/// Set the attached accessor pair.
	pub fn with_attachment(mut self, attachment: Attachment) -> Self {
		self.attachment = Some(attachment);
		self
	}

	/// Whether any of `modifiers` is set.
	pub fn has(&self, modifiers: Modifiers) -> bool {
		self.modifiers.intersects(modifiers)
	}

	/// The declaring type, if any.
	pub fn containing_type(&self) -> Option<&ContainingType> {
		self.containers.type_.as_ref()
	}

	/// Whether this member is declared by an interface.
	pub fn is_interface_member(&self) -> bool {
		self.containing_type()
			.is_some_and(|ty| ty.subkind == TypeSubkind::Interface)
	}

	/// Whether this property is an indexer.
	pub fn is_indexer(&self) -> bool {
		!self.parameters.is_empty() || self.has(Modifiers::DEFAULT_INDEXER)
	}

	/// Every type reference that appears in the entity's own signature.
	pub fn signature_types(&self) -> impl Iterator<Item = &TypeReference> {
		self.parameters
			.iter()
			.map(|parameter| &parameter.type_)
			.chain(self.return_type.iter())
			.chain(self.event_handler_type.iter())
	}
}
