use crate::ty::TypeId;

/// Declares a relationship from a member to another mapped entity.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Association {
    pub name: Option<String>,

    /// Members of the owning entity that hold the key, separated by spaces,
    /// commas or pipes.
    pub key_members: String,

    /// Table identifier of the related entity. When unset it is derived from
    /// the member's element type.
    pub related_entity_id: Option<String>,

    /// Overrides the related entity type.
    pub related_entity_ty: Option<TypeId>,

    /// Members of the related entity matching `key_members`, in the same
    /// order.
    pub related_key_members: String,

    /// The owning entity stores the key (the member is the referencing side).
    pub foreign_key: bool,
}

impl Association {
    pub fn new(key_members: impl Into<String>, related_key_members: impl Into<String>) -> Association {
        Association {
            key_members: key_members.into(),
            related_key_members: related_key_members.into(),
            ..Association::default()
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Association {
        self.name = Some(name.into());
        self
    }

    pub fn related_entity_id(mut self, id: impl Into<String>) -> Association {
        self.related_entity_id = Some(id.into());
        self
    }

    pub fn related_entity_ty(mut self, ty: TypeId) -> Association {
        self.related_entity_ty = Some(ty);
        self
    }

    pub fn foreign_key(mut self) -> Association {
        self.foreign_key = true;
        self
    }
}
