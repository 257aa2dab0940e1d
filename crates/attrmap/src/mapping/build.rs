use super::{resolve, Entity, Mapping, MappingKind, MappingMember, Table};
use crate::{
    annotation::{MemberAnnotation, MemberKind, TableAnnotation},
    ty::TypeId,
    Error, Result,
};

use indexmap::IndexMap;
use std::collections::HashSet;

/// Annotations of one root table identifier, split by level.
struct Partitioned {
    /// Ordered by name, unnamed tables first.
    tables: Vec<TableAnnotation>,

    /// Annotations under the nesting path, ordered by member path.
    members: Vec<MemberAnnotation>,
}

impl Mapping {
    /// Builds the entity for `table_id` from the annotations of its root.
    ///
    /// Nested members discovered along the way are obtained through the
    /// entity cache, so they are built (and cached) before their parent.
    pub(super) fn build_entity(
        &self,
        element_ty: TypeId,
        table_id: &str,
        mut entity_ty: TypeId,
    ) -> Result<Entity> {
        let (root_id, path) = split_table_id(table_id);
        let Partitioned { tables, members } = self.partitioned_annotations(root_id, path)?;

        if entity_ty == element_ty {
            if let Some(ty) = tables
                .iter()
                .find(|table| !table.is_extension())
                .and_then(TableAnnotation::entity_ty_override)
            {
                entity_ty = ty;
            }
        }

        let types = &*self.types;
        let mut seen = HashSet::new();
        let mut mapped = IndexMap::new();

        for annotation in &members {
            if annotation.member.is_empty() {
                continue;
            }

            let name = relative_name(&annotation.member, path);

            let (member, kind) = if let Some((nested_member, rest)) = name.split_once('.') {
                // Only the first segment is discovered here. Deeper segments
                // are picked up when the nested entity itself is built.
                if !seen.insert(nested_member) {
                    continue;
                }

                let member = resolve::find_member(types, entity_ty, nested_member)?;
                let nested_id = format!("{table_id}.{nested_member}");
                let Some(nested_ty) = member.ty.element().as_model() else {
                    let segment = rest.split('.').next().unwrap_or(rest);
                    return Err(Error::unresolvable_member(
                        segment,
                        resolve::ty_name(types, &member.ty),
                    ));
                };

                tracing::trace!(table_id, nested = %nested_id, "discovered nested entity");
                let nested = self.entity_with(nested_ty, Some(&nested_id), nested_ty)?;
                (member, MappingKind::Nested(nested))
            } else {
                if !seen.insert(name) {
                    return Err(Error::duplicate_member_mapping(
                        name,
                        types.type_name(entity_ty),
                    ));
                }

                let member = resolve::find_member(types, entity_ty, name)?;
                let kind = match &annotation.kind {
                    MemberKind::Column(column) => MappingKind::Column(column.clone()),
                    MemberKind::Association(association) => {
                        MappingKind::Association(association.clone())
                    }
                };
                (member, kind)
            };

            // Two spellings of the same member resolve to one declared name.
            if mapped.contains_key(&member.name) {
                return Err(Error::duplicate_member_mapping(
                    &member.name,
                    types.type_name(entity_ty),
                ));
            }

            mapped.insert(
                member.name.clone(),
                MappingMember {
                    member: member.clone(),
                    kind,
                },
            );
        }

        let tables = tables
            .into_iter()
            .map(|annotation| Table {
                mapping: self.id,
                entity: table_id.to_string(),
                annotation,
            })
            .collect::<Vec<_>>();

        tracing::debug!(
            table_id,
            entity = types.type_name(entity_ty),
            tables = tables.len(),
            members = mapped.len(),
            "built entity"
        );

        Ok(Entity {
            mapping: self.id,
            table_id: table_id.to_string(),
            element_ty,
            entity_ty,
            tables,
            members: mapped,
        })
    }

    fn partitioned_annotations(&self, root_id: &str, path: &str) -> Result<Partitioned> {
        let mut tables = vec![];
        let mut members = vec![];

        for annotation in self.root_annotations(root_id)? {
            match annotation {
                crate::Annotation::Table(table) => tables.push(table),
                crate::Annotation::Member(member) if is_under(&member.member, path) => {
                    members.push(member)
                }
                crate::Annotation::Member(_) => {}
            }
        }

        tables.sort_by(|a, b| a.name.cmp(&b.name));
        members.sort_by(|a, b| a.member.cmp(&b.member));

        Ok(Partitioned { tables, members })
    }
}

/// Splits a table identifier at its first dot into the root identifier and
/// the nesting path below it.
fn split_table_id(table_id: &str) -> (&str, &str) {
    match table_id.find('.') {
        Some(dot) if dot > 0 => (&table_id[..dot], &table_id[dot + 1..]),
        _ => (table_id, ""),
    }
}

/// Whether the member path `member` lies under the nesting path `path`.
fn is_under(member: &str, path: &str) -> bool {
    path.is_empty()
        || member
            .strip_prefix(path)
            .is_some_and(|rest| rest.starts_with('.'))
}

fn relative_name<'a>(member: &'a str, path: &str) -> &'a str {
    if path.is_empty() {
        member
    } else {
        &member[path.len() + 1..]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn split_root_and_path() {
        assert_eq!(split_table_id("Orders"), ("Orders", ""));
        assert_eq!(split_table_id("Orders.Customer"), ("Orders", "Customer"));
        assert_eq!(
            split_table_id("Orders.Customer.Address"),
            ("Orders", "Customer.Address")
        );
        assert_eq!(split_table_id(".Orders"), (".Orders", ""));
    }

    #[test]
    fn members_under_path() {
        assert!(is_under("Name", ""));
        assert!(is_under("Address.City", "Address"));
        assert!(!is_under("Address", "Address"));
        assert!(!is_under("AddressLine.City", "Address"));
        assert!(is_under("Address.Geo.Lat", "Address.Geo"));
    }

    #[test]
    fn names_relative_to_path() {
        assert_eq!(relative_name("Name", ""), "Name");
        assert_eq!(relative_name("Address.City", "Address"), "City");
        assert_eq!(relative_name("Address.Geo.Lat", "Address"), "Geo.Lat");
    }
}
