//! Structural descriptions of resolved types.

/// What a resolved type is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TypeKind {
	/// Interface or protocol. Its `interfaces` are the interfaces it extends.
	Interface,
	/// Concrete or abstract class.
	Class,
	/// Composable unit of behavior (trait, mixin, module).
	Mixin,
}

/// Kind, supertype, implemented interfaces and composed mixins of a type.
///
/// Only direct relationships are listed; transitive ones are walked by
/// [`crate::Hierarchy`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeDescriptor {
	pub name: String,
	pub kind: TypeKind,
	pub is_abstract: bool,
	/// Direct supertype; `None` at the top of the chain.
	pub supertype: Option<String>,
	pub interfaces: Vec<String>,
	pub mixins: Vec<String>,
}

impl TypeDescriptor {
	pub fn new(name: impl Into<String>, kind: TypeKind) -> Self {
		Self {
			name: name.into(),
			kind,
			is_abstract: false,
			supertype: None,
			interfaces: Vec::new(),
			mixins: Vec::new(),
		}
	}

	pub fn class(name: impl Into<String>) -> Self {
		Self::new(name, TypeKind::Class)
	}

	pub fn abstract_class(name: impl Into<String>) -> Self {
		Self {
			is_abstract: true,
			..Self::class(name)
		}
	}

	pub fn interface(name: impl Into<String>) -> Self {
		Self::new(name, TypeKind::Interface)
	}

	pub fn mixin(name: impl Into<String>) -> Self {
		Self::new(name, TypeKind::Mixin)
	}

	/// Sets the direct supertype.
	pub fn extends(mut self, supertype: impl Into<String>) -> Self {
		self.supertype = Some(supertype.into());
		self
	}

	/// Adds directly implemented (or, for interfaces, extended) interfaces.
	pub fn implements<I, S>(mut self, interfaces: I) -> Self
	where
		I: IntoIterator<Item = S>,
		S: Into<String>,
	{
		self.interfaces.extend(interfaces.into_iter().map(Into::into));
		self
	}

	/// Adds directly composed mixins.
	pub fn uses<I, S>(mut self, mixins: I) -> Self
	where
		I: IntoIterator<Item = S>,
		S: Into<String>,
	{
		self.mixins.extend(mixins.into_iter().map(Into::into));
		self
	}

	#[inline]
	pub fn is_interface(&self) -> bool {
		self.kind == TypeKind::Interface
	}

	#[inline]
	pub fn is_mixin(&self) -> bool {
		self.kind == TypeKind::Mixin
	}
}
