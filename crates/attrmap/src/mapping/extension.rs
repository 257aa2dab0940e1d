use super::{association::split_names, Entity, Mapping, MappingKind, Table};
use crate::{ty::Member, Error, Result};

const RELATED_KEY_COLUMNS: &str = "ExtensionTable.RelatedKeyColumns";

impl Mapping {
    pub fn is_extension_table(&self, table: &Table) -> Result<bool> {
        self.check_table(table)?;
        Ok(table.is_extension())
    }

    /// Alias of the table an extension table joins to. `None` for primary
    /// tables.
    pub fn extension_related_alias<'a>(&self, table: &'a Table) -> Result<Option<&'a str>> {
        self.check_table(table)?;
        Ok(table
            .extension()
            .and_then(|extension| extension.related_alias.as_deref()))
    }

    /// Key columns of an extension table. Empty for primary tables.
    pub fn extension_key_column_names<'a>(&self, table: &'a Table) -> Result<Vec<&'a str>> {
        self.check_table(table)?;
        Ok(match table.extension() {
            Some(extension) => split_names(&extension.key_columns).collect(),
            None => vec![],
        })
    }

    /// Members of the owning entity that supply the related key columns of an
    /// extension table, in key column order. Empty for primary tables.
    pub fn extension_related_members(&self, table: &Table) -> Result<Vec<Member>> {
        self.check_table(table)?;
        let Some(extension) = table.extension() else {
            return Ok(vec![]);
        };

        let entity = self
            .entities
            .get(&table.entity)
            .ok_or_else(|| Error::unknown_entity(&table.entity))?;

        split_names(&extension.related_key_columns)
            .map(|column| match self.member_for_column(&entity, column) {
                Some(member) => Ok(member.clone()),
                None => {
                    let ty = self.types.type_name(entity.entity_ty);
                    Err(Error::unresolvable_association_reference(
                        ty,
                        column,
                        RELATED_KEY_COLUMNS,
                        ty,
                    ))
                }
            })
            .collect()
    }

    /// Depth-first search for the mapped member whose column is named
    /// `column`, ignoring case. Nested entities are searched in place of
    /// their member; the first match wins.
    fn member_for_column<'a>(&self, entity: &'a Entity, column: &str) -> Option<&'a Member> {
        entity.members().find_map(|mm| match &mm.kind {
            MappingKind::Nested(nested) => self.member_for_column(nested, column),
            MappingKind::Column(_) => {
                let name = self.column_name_of(entity, &mm.member.name);
                std_util::str::eq_ignore_case(&name, column).then_some(&mm.member)
            }
            MappingKind::Association(_) => None,
        })
    }
}
