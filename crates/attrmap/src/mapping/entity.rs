use super::{MappingId, Table};
use crate::{
    annotation::{Association, Column},
    ty::{Member, TypeId},
};

use indexmap::IndexMap;
use std::sync::Arc;

/// Resolved mapping metadata for one table identifier.
///
/// Built once by the owning [`Mapping`](super::Mapping) and immutable
/// afterwards. Entities are handed out as `Arc<Entity>`; nested entities are
/// shared with the cache rather than copied into their parent.
#[derive(Debug)]
pub struct Entity {
    pub(super) mapping: MappingId,

    /// Table identifier the entity is cached under.
    pub(super) table_id: String,

    /// Row shape of the context member.
    pub(super) element_ty: TypeId,

    /// Concrete type members are resolved against. Differs from
    /// `element_ty` when a table annotation overrides it.
    pub(super) entity_ty: TypeId,

    /// Table annotations in name order.
    pub(super) tables: Vec<Table>,

    /// Mapped members keyed by declared member name, in annotation order.
    pub(super) members: IndexMap<String, MappingMember>,
}

/// The mapping fact recorded for one member of an entity.
#[derive(Debug)]
pub struct MappingMember {
    /// The resolved member descriptor.
    pub member: Member,

    pub kind: MappingKind,
}

#[derive(Debug)]
pub enum MappingKind {
    Column(Column),
    Association(Association),

    /// A compound member mapped through its own entity.
    Nested(Arc<Entity>),
}

impl Entity {
    pub fn table_id(&self) -> &str {
        &self.table_id
    }

    pub fn element_ty(&self) -> TypeId {
        self.element_ty
    }

    pub fn entity_ty(&self) -> TypeId {
        self.entity_ty
    }

    pub fn tables(&self) -> &[Table] {
        &self.tables
    }

    /// Name of the single backing table, or the table identifier when the
    /// entity has no table, several tables or an unnamed one.
    pub fn display_name(&self) -> &str {
        match &self.tables[..] {
            [table] => table.annotation.name.as_deref().unwrap_or(&self.table_id),
            _ => &self.table_id,
        }
    }

    /// Looks up a mapped member by its declared name.
    pub fn member(&self, name: &str) -> Option<&MappingMember> {
        self.members.get(name)
    }

    /// Looks up a mapped member, preferring an exact match and falling back
    /// to an ASCII case-insensitive one.
    pub fn member_ignore_case(&self, name: &str) -> Option<&MappingMember> {
        self.members.get(name).or_else(|| {
            self.members
                .values()
                .find(|mm| std_util::str::eq_ignore_case(&mm.member.name, name))
        })
    }

    /// Mapped members in mapping order.
    pub fn members(&self) -> impl ExactSizeIterator<Item = &MappingMember> + '_ {
        self.members.values()
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }
}

impl MappingMember {
    pub fn name(&self) -> &str {
        &self.member.name
    }

    pub fn as_column(&self) -> Option<&Column> {
        match &self.kind {
            MappingKind::Column(column) => Some(column),
            _ => None,
        }
    }

    pub fn as_association(&self) -> Option<&Association> {
        match &self.kind {
            MappingKind::Association(association) => Some(association),
            _ => None,
        }
    }

    pub fn as_nested(&self) -> Option<&Arc<Entity>> {
        match &self.kind {
            MappingKind::Nested(entity) => Some(entity),
            _ => None,
        }
    }
}
