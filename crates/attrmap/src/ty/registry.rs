use super::{Member, TypeDescriptor, TypeId};

/// A [`TypeDescriptor`] assembled explicitly by the caller.
///
/// Types can refer to each other in any order: [`declare`](Self::declare)
/// reserves an id up front and [`define`](Self::define) fills in the members
/// once every referenced id exists.
#[derive(Debug, Default, Clone)]
pub struct TypeRegistry {
    types: Vec<TypeDef>,
}

#[derive(Debug, Clone)]
struct TypeDef {
    name: String,
    members: Vec<Member>,
}

impl TypeRegistry {
    pub fn new() -> TypeRegistry {
        TypeRegistry::default()
    }

    /// Reserves an id for a type named `name` with no members yet.
    pub fn declare(&mut self, name: impl Into<String>) -> TypeId {
        let id = TypeId(self.types.len());
        self.types.push(TypeDef {
            name: name.into(),
            members: vec![],
        });
        id
    }

    /// Sets the members of a previously declared type.
    ///
    /// # Panics
    ///
    /// Panics if `id` was not issued by this registry.
    pub fn define(&mut self, id: TypeId, members: impl IntoIterator<Item = Member>) -> &mut Self {
        let def = self.types.get_mut(id.0).expect("invalid type ID");
        def.members = members.into_iter().collect();
        self
    }

    /// Declares and defines a type in one step.
    pub fn register(
        &mut self,
        name: impl Into<String>,
        members: impl IntoIterator<Item = Member>,
    ) -> TypeId {
        let id = self.declare(name);
        self.define(id, members);
        id
    }

    pub fn len(&self) -> usize {
        self.types.len()
    }

    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }

    fn def(&self, id: TypeId) -> &TypeDef {
        self.types.get(id.0).expect("invalid type ID")
    }
}

impl TypeDescriptor for TypeRegistry {
    fn type_name(&self, ty: TypeId) -> &str {
        &self.def(ty).name
    }

    fn members(&self, ty: TypeId) -> &[Member] {
        &self.def(ty).members
    }
}
