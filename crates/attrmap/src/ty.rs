//! Type descriptors.
//!
//! The engine never inspects program types directly. Whatever owns the types
//! (generated code, a registry assembled at startup, a test fixture) exposes
//! them through [`TypeDescriptor`]: a name and an ordered list of members for
//! each [`TypeId`].

mod registry;
pub use registry::TypeRegistry;

use std::fmt;

/// Uniquely identifies a type within a [`TypeDescriptor`].
#[derive(Copy, Clone, Eq, PartialEq, Hash, PartialOrd, Ord)]
pub struct TypeId(pub usize);

impl fmt::Debug for TypeId {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(fmt, "TypeId({})", self.0)
    }
}

/// The declared type of a member.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Ty {
    /// A leaf value, named for diagnostics only (`i64`, `String`, ...).
    Primitive(String),

    /// A type with members of its own.
    Model(TypeId),

    /// A collection of the inner type.
    List(Box<Ty>),
}

impl Ty {
    pub fn primitive(name: impl Into<String>) -> Ty {
        Ty::Primitive(name.into())
    }

    pub fn list(ty: impl Into<Ty>) -> Ty {
        Ty::List(Box::new(ty.into()))
    }

    /// Unwraps one level of collection; any other type is its own element.
    pub fn element(&self) -> &Ty {
        match self {
            Ty::List(inner) => inner,
            ty => ty,
        }
    }

    pub fn is_list(&self) -> bool {
        matches!(self, Ty::List(_))
    }

    pub fn as_model(&self) -> Option<TypeId> {
        match self {
            Ty::Model(id) => Some(*id),
            _ => None,
        }
    }
}

impl From<TypeId> for Ty {
    fn from(value: TypeId) -> Self {
        Ty::Model(value)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Visibility {
    #[default]
    Public,
    Private,
}

/// A member (field or property) declared on a type.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Member {
    /// Declared spelling of the member name.
    pub name: String,

    /// Declared type of the member.
    pub ty: Ty,

    pub visibility: Visibility,
}

impl Member {
    pub fn new(name: impl Into<String>, ty: impl Into<Ty>) -> Member {
        Member {
            name: name.into(),
            ty: ty.into(),
            visibility: Visibility::Public,
        }
    }

    pub fn private(mut self) -> Member {
        self.visibility = Visibility::Private;
        self
    }

    pub fn is_public(&self) -> bool {
        self.visibility == Visibility::Public
    }
}

/// Read-only access to the types a mapping resolves members against.
pub trait TypeDescriptor: Send + Sync {
    /// Name of the type, used in diagnostics and as the fallback table
    /// identifier.
    ///
    /// # Panics
    ///
    /// Implementations may panic if `ty` was not issued by this descriptor.
    fn type_name(&self, ty: TypeId) -> &str;

    /// Instance members of the type, public and private, in declaration
    /// order.
    fn members(&self, ty: TypeId) -> &[Member];

    /// Finds a member by name, ignoring ASCII case. The first declared match
    /// wins.
    fn find_member(&self, ty: TypeId, name: &str) -> Option<&Member> {
        self.members(ty)
            .iter()
            .find(|member| std_util::str::eq_ignore_case(&member.name, name))
    }
}

impl<T: TypeDescriptor + ?Sized> TypeDescriptor for std::sync::Arc<T> {
    fn type_name(&self, ty: TypeId) -> &str {
        (**self).type_name(ty)
    }

    fn members(&self, ty: TypeId) -> &[Member] {
        (**self).members(ty)
    }

    fn find_member(&self, ty: TypeId, name: &str) -> Option<&Member> {
        (**self).find_member(ty, name)
    }
}
