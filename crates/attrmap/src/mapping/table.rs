use super::MappingId;
use crate::annotation::{Extension, TableAnnotation};

/// One physical table backing (part of) an entity.
#[derive(Debug)]
pub struct Table {
    pub(super) mapping: MappingId,

    /// Table identifier of the owning entity.
    pub(super) entity: String,

    pub(super) annotation: TableAnnotation,
}

impl Table {
    /// The declared name, defaulting to the owning entity's table
    /// identifier.
    pub fn name(&self) -> &str {
        self.annotation.name.as_deref().unwrap_or(&self.entity)
    }

    pub fn alias(&self) -> Option<&str> {
        self.annotation.alias.as_deref()
    }

    /// Table identifier of the entity this table belongs to.
    pub fn entity_id(&self) -> &str {
        &self.entity
    }

    pub fn annotation(&self) -> &TableAnnotation {
        &self.annotation
    }

    pub fn is_extension(&self) -> bool {
        self.annotation.is_extension()
    }

    pub fn extension(&self) -> Option<&Extension> {
        self.annotation.as_extension()
    }
}
