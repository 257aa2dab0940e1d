mod association;

mod build;

mod builder;
pub use builder::{Builder, ColumnNaming};
use builder::Config;

mod cache;
use cache::EntityCache;

mod entity;
pub use entity::{Entity, MappingKind, MappingMember};

mod extension;

mod resolve;

mod table;
pub use table::Table;

use crate::{
    annotation::Annotation,
    source::AnnotationSource,
    ty::{Member, Ty, TypeDescriptor, TypeId},
    Error, Result,
};

use std::{
    borrow::Cow,
    sync::{
        atomic::{AtomicUsize, Ordering},
        Arc,
    },
};

/// Resolves mapping annotations of a context type into entities.
///
/// The mapping is the entry point used by query translation: it answers what
/// table, columns and keys a member maps to. Entities are built the first
/// time a table identifier is requested and cached for the lifetime of the
/// mapping; a `Mapping` can be shared freely between threads.
///
/// Every query that takes an [`Entity`] or [`Table`] fails with an unknown
/// entity error when handed one produced by a different mapping. Members are
/// named by string and resolved case-insensitively against the entity type.
pub struct Mapping {
    id: MappingId,

    types: Arc<dyn TypeDescriptor>,

    annotations: Arc<dyn AnnotationSource>,

    /// The type whose members declare the mapped collections.
    context: TypeId,

    config: Config,

    entities: EntityCache,
}

/// Distinguishes the entities of one mapping from those of another.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) struct MappingId(usize);

impl MappingId {
    fn next() -> MappingId {
        static NEXT: AtomicUsize = AtomicUsize::new(0);
        MappingId(NEXT.fetch_add(1, Ordering::Relaxed))
    }
}

impl Mapping {
    pub fn builder() -> Builder {
        Builder::default()
    }

    pub fn context_ty(&self) -> TypeId {
        self.context
    }

    pub fn types(&self) -> &dyn TypeDescriptor {
        &*self.types
    }

    /// Number of entities built and cached so far.
    pub fn cached_entities(&self) -> usize {
        self.entities.len()
    }

    /// Returns the entity for `element_ty` under its derived table
    /// identifier.
    pub fn entity(&self, element_ty: TypeId) -> Result<Arc<Entity>> {
        self.entity_with(element_ty, None, element_ty)
    }

    /// Returns the entity for `element_ty` under `table_id`.
    pub fn entity_for(&self, element_ty: TypeId, table_id: &str) -> Result<Arc<Entity>> {
        self.entity_with(element_ty, Some(table_id), element_ty)
    }

    /// Returns the entity mapped by the context member `name`.
    pub fn entity_for_context_member(&self, name: &str) -> Result<Arc<Entity>> {
        let member = resolve::find_member(&*self.types, self.context, name)?;
        let Some(element_ty) = member.ty.element().as_model() else {
            crate::bail!(
                "context member `{}` of type `{}` does not hold a mapped type",
                member.name,
                resolve::ty_name(&*self.types, &member.ty)
            );
        };
        let table_id = member.name.clone();
        self.entity_with(element_ty, Some(&table_id), element_ty)
    }

    /// Returns the entity cached under `table_id`, building it on first use.
    ///
    /// When `table_id` is `None` it is derived with
    /// [`table_id_for`](Self::table_id_for). `entity_ty` is the type members
    /// are resolved against; passing `element_ty` lets a table annotation
    /// override it.
    pub fn entity_with(
        &self,
        element_ty: TypeId,
        table_id: Option<&str>,
        entity_ty: TypeId,
    ) -> Result<Arc<Entity>> {
        let table_id = match table_id {
            Some(table_id) => Cow::Borrowed(table_id),
            None => Cow::Owned(self.table_id_for(element_ty)),
        };

        self.entities.get_or_build(&table_id, || {
            self.build_entity(element_ty, &table_id, entity_ty)
        })
    }

    /// The table identifier of `ty`: the first public context member whose
    /// element type is `ty`, else the type's name.
    pub fn table_id_for(&self, ty: TypeId) -> String {
        let target = Ty::Model(ty);
        self.types
            .members(self.context)
            .iter()
            .find(|member| member.is_public() && *member.ty.element() == target)
            .map(|member| member.name.clone())
            .unwrap_or_else(|| self.types.type_name(ty).to_string())
    }

    /// Resolves a dot-separated member path starting at `ty`, for example
    /// `"Customer.Address.City"`.
    pub fn resolve_member(&self, ty: TypeId, path: &str) -> Result<&Member> {
        resolve::resolve_path(&*self.types, ty, path)
    }

    /// Annotations declared on the context member named by `root_id`.
    fn root_annotations(&self, root_id: &str) -> Result<Vec<Annotation>> {
        let member = resolve::find_member(&*self.types, self.context, root_id)?;
        self.annotations.annotations(&member.name)
    }

    pub fn tables<'a>(&self, entity: &'a Entity) -> Result<&'a [Table]> {
        self.check_entity(entity)?;
        Ok(entity.tables())
    }

    /// Name of the entity's primary table: the first non-extension table,
    /// else the first table, else the table identifier.
    pub fn table_name(&self, entity: &Entity) -> Result<String> {
        self.check_entity(entity)?;
        let name = entity
            .tables
            .iter()
            .find(|table| !table.is_extension())
            .or_else(|| entity.tables.first())
            .map(Table::name)
            .unwrap_or(entity.table_id.as_str());
        Ok(self.prefixed(name))
    }

    pub fn table_name_of(&self, table: &Table) -> Result<String> {
        self.check_table(table)?;
        Ok(self.prefixed(table.name()))
    }

    pub fn table_alias<'a>(&self, table: &'a Table) -> Result<Option<&'a str>> {
        self.check_table(table)?;
        Ok(table.alias())
    }

    /// Members of the entity that carry a mapping, in mapping order.
    pub fn mapped_members<'a>(&self, entity: &'a Entity) -> Result<Vec<&'a Member>> {
        self.check_entity(entity)?;
        Ok(entity.members().map(|mm| &mm.member).collect())
    }

    pub fn is_mapped(&self, entity: &Entity, member: &str) -> Result<bool> {
        Ok(self.mapping_member(entity, member)?.is_some())
    }

    pub fn is_column(&self, entity: &Entity, member: &str) -> Result<bool> {
        Ok(self
            .mapping_member(entity, member)?
            .is_some_and(|mm| mm.as_column().is_some()))
    }

    pub fn is_computed(&self, entity: &Entity, member: &str) -> Result<bool> {
        Ok(self
            .mapping_member(entity, member)?
            .and_then(MappingMember::as_column)
            .is_some_and(|column| column.computed))
    }

    pub fn is_generated(&self, entity: &Entity, member: &str) -> Result<bool> {
        Ok(self
            .mapping_member(entity, member)?
            .and_then(MappingMember::as_column)
            .is_some_and(|column| column.generated))
    }

    pub fn is_primary_key(&self, entity: &Entity, member: &str) -> Result<bool> {
        Ok(self
            .mapping_member(entity, member)?
            .and_then(MappingMember::as_column)
            .is_some_and(|column| column.primary_key))
    }

    pub fn is_nested_entity(&self, entity: &Entity, member: &str) -> Result<bool> {
        Ok(self
            .mapping_member(entity, member)?
            .is_some_and(|mm| mm.as_nested().is_some()))
    }

    /// Column name of `member`: the annotated name when present, else the
    /// member name passed through the configured [`ColumnNaming`].
    pub fn column_name(&self, entity: &Entity, member: &str) -> Result<String> {
        let declared = self.declared_member(entity, member)?;
        Ok(self.column_name_of(entity, &declared.name))
    }

    pub fn column_db_type<'a>(&self, entity: &'a Entity, member: &str) -> Result<Option<&'a str>> {
        Ok(self
            .mapping_member(entity, member)?
            .and_then(MappingMember::as_column)
            .and_then(|column| column.db_ty.as_deref()))
    }

    pub fn column_alias<'a>(&self, entity: &'a Entity, member: &str) -> Result<Option<&'a str>> {
        Ok(self
            .mapping_member(entity, member)?
            .and_then(MappingMember::as_column)
            .and_then(|column| column.alias.as_deref()))
    }

    /// Column name for a member already known by its declared name.
    fn column_name_of(&self, entity: &Entity, declared: &str) -> String {
        entity
            .member(declared)
            .and_then(MappingMember::as_column)
            .and_then(|column| column.name.as_deref())
            .filter(|name| !name.is_empty())
            .map(str::to_string)
            .unwrap_or_else(|| self.config.column_naming.apply(declared))
    }

    fn prefixed(&self, name: &str) -> String {
        match &self.config.table_name_prefix {
            Some(prefix) => format!("{prefix}{name}"),
            None => name.to_string(),
        }
    }

    fn check_entity(&self, entity: &Entity) -> Result<()> {
        if entity.mapping == self.id {
            Ok(())
        } else {
            Err(Error::unknown_entity(&entity.table_id))
        }
    }

    fn check_table(&self, table: &Table) -> Result<()> {
        if table.mapping == self.id {
            Ok(())
        } else {
            Err(Error::unknown_entity(&table.entity))
        }
    }

    /// Resolves `member` against the entity type.
    fn declared_member<'a>(&'a self, entity: &Entity, member: &str) -> Result<&'a Member> {
        self.check_entity(entity)?;
        resolve::find_member(&*self.types, entity.entity_ty, member)
    }

    /// The mapping recorded for `member`, if any.
    fn mapping_member<'a>(
        &self,
        entity: &'a Entity,
        member: &str,
    ) -> Result<Option<&'a MappingMember>> {
        let declared = self.declared_member(entity, member)?;
        Ok(entity.member(&declared.name))
    }
}

impl core::fmt::Debug for Mapping {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Mapping")
            .field("context", &self.types.type_name(self.context))
            .field("config", &self.config)
            .field("cached_entities", &self.entities.len())
            .finish()
    }
}
