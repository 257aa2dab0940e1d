use super::{resolve, Entity, Mapping, MappingKind};
use crate::{annotation::Association, ty::Member, Error, Result};

use std::sync::Arc;

const KEY_MEMBERS: &str = "Association.KeyMembers";
const RELATED_KEY_MEMBERS: &str = "Association.RelatedKeyMembers";
const RELATED_ENTITY_ID: &str = "Association.RelatedEntityID";
const RELATIONSHIP: &str = "an association or nested mapping";

/// Splits a key list on spaces, commas and pipes, dropping empty fragments.
pub(super) fn split_names(list: &str) -> impl Iterator<Item = &str> {
    list.split([' ', ',', '|']).filter(|name| !name.is_empty())
}

impl Mapping {
    pub fn is_association(&self, entity: &Entity, member: &str) -> Result<bool> {
        Ok(self
            .mapping_member(entity, member)?
            .is_some_and(|mm| mm.as_association().is_some()))
    }

    /// A member is the source of a relationship when it holds the foreign
    /// key to a single related entity.
    pub fn is_relationship_source(&self, entity: &Entity, member: &str) -> Result<bool> {
        Ok(match self.mapping_member(entity, member)? {
            Some(mm) => mm
                .as_association()
                .is_some_and(|association| association.foreign_key && !mm.member.ty.is_list()),
            None => false,
        })
    }

    /// A member is the target of a relationship when it is the inverse side:
    /// a collection, or a reference that does not hold the foreign key.
    pub fn is_relationship_target(&self, entity: &Entity, member: &str) -> Result<bool> {
        Ok(match self.mapping_member(entity, member)? {
            Some(mm) => mm
                .as_association()
                .is_some_and(|association| !association.foreign_key || mm.member.ty.is_list()),
            None => false,
        })
    }

    /// The entity on the other side of an association, or the child entity
    /// of a nested member.
    pub fn related_entity(&self, entity: &Entity, member: &str) -> Result<Arc<Entity>> {
        let owner = self.type_name(entity);
        let Some(mm) = self.mapping_member(entity, member)? else {
            return Err(Error::unresolvable_related_entity(member, RELATIONSHIP, owner));
        };

        match &mm.kind {
            MappingKind::Association(association) => {
                self.association_target(&mm.member, association, owner)
            }
            MappingKind::Nested(nested) => Ok(nested.clone()),
            MappingKind::Column(_) => Err(Error::unresolvable_related_entity(
                &mm.member.name,
                RELATIONSHIP,
                owner,
            )),
        }
    }

    /// Members of `entity` holding the association key, in declaration
    /// order.
    pub fn association_key_members(&self, entity: &Entity, member: &str) -> Result<Vec<Member>> {
        let association = self.association(entity, member)?;
        self.referenced_members(entity, &association.key_members, KEY_MEMBERS, entity)
    }

    /// Members of the related entity matching
    /// [`association_key_members`](Self::association_key_members).
    pub fn association_related_key_members(
        &self,
        entity: &Entity,
        member: &str,
    ) -> Result<Vec<Member>> {
        let association = self.association(entity, member)?;
        let related = self.related_entity(entity, member)?;
        self.referenced_members(
            &related,
            &association.related_key_members,
            RELATED_KEY_MEMBERS,
            entity,
        )
    }

    fn association<'a>(&self, entity: &'a Entity, member: &str) -> Result<&'a Association> {
        match self.mapping_member(entity, member)? {
            Some(mm) => match mm.as_association() {
                Some(association) => Ok(association),
                None => crate::bail!(
                    "member `{}` of `{}` is not an association",
                    mm.member.name,
                    self.type_name(entity)
                ),
            },
            None => crate::bail!(
                "member `{}` of `{}` is not mapped",
                member,
                self.type_name(entity)
            ),
        }
    }

    fn association_target(
        &self,
        member: &Member,
        association: &Association,
        owner: &str,
    ) -> Result<Arc<Entity>> {
        let name = || {
            association
                .related_entity_id
                .clone()
                .unwrap_or_else(|| resolve::ty_name(&*self.types, member.ty.element()))
        };

        let Some(element_ty) = member.ty.element().as_model() else {
            return Err(Error::unresolvable_related_entity(name(), RELATED_ENTITY_ID, owner));
        };
        let entity_ty = association.related_entity_ty.unwrap_or(element_ty);

        self.entity_with(element_ty, association.related_entity_id.as_deref(), entity_ty)
            .map_err(|cause| {
                cause.context(Error::unresolvable_related_entity(
                    name(),
                    RELATED_ENTITY_ID,
                    owner,
                ))
            })
    }

    /// Resolves every name in `names` against the mapped members of
    /// `entity`.
    fn referenced_members(
        &self,
        entity: &Entity,
        names: &str,
        source: &str,
        owner: &Entity,
    ) -> Result<Vec<Member>> {
        split_names(names)
            .map(|name| match entity.member_ignore_case(name) {
                Some(mm) => Ok(mm.member.clone()),
                None => Err(Error::unresolvable_association_reference(
                    self.type_name(entity),
                    name,
                    source,
                    self.type_name(owner),
                )),
            })
            .collect()
    }

    fn type_name(&self, entity: &Entity) -> &str {
        self.types.type_name(entity.entity_ty)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn split_on_every_separator() {
        let names: Vec<_> = split_names("OrderId CustomerId,RegionId|Code").collect();
        assert_eq!(names, ["OrderId", "CustomerId", "RegionId", "Code"]);
    }

    #[test]
    fn split_drops_empty_fragments() {
        let names: Vec<_> = split_names(" OrderId, CustomerId ||").collect();
        assert_eq!(names, ["OrderId", "CustomerId"]);
        assert_eq!(split_names("").count(), 0);
    }
}
