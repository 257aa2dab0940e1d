use crate::ty::TypeId;

/// Declares a physical table backing the annotated context member.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TableAnnotation {
    /// Table name. Defaults to the table identifier.
    pub name: Option<String>,

    pub alias: Option<String>,

    pub kind: TableKind,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TableKind {
    Primary {
        /// Concrete type rows are mapped onto, when it differs from the
        /// element type of the context member.
        entity_ty: Option<TypeId>,
    },

    /// A secondary table joined to the primary one.
    Extension(Extension),
}

/// Join metadata for an extension table.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Extension {
    /// Key columns of the extension table, separated by spaces, commas or
    /// pipes.
    pub key_columns: String,

    /// Alias of the table the extension joins to.
    pub related_alias: Option<String>,

    /// Columns of the related table matching `key_columns`, in the same
    /// order.
    pub related_key_columns: String,
}

impl Default for TableKind {
    fn default() -> Self {
        TableKind::Primary { entity_ty: None }
    }
}

impl TableAnnotation {
    pub fn new(name: impl Into<String>) -> TableAnnotation {
        TableAnnotation {
            name: Some(name.into()),
            ..TableAnnotation::default()
        }
    }

    /// An extension table named `name`.
    pub fn extension(name: impl Into<String>, extension: Extension) -> TableAnnotation {
        TableAnnotation {
            name: Some(name.into()),
            alias: None,
            kind: TableKind::Extension(extension),
        }
    }

    pub fn alias(mut self, alias: impl Into<String>) -> TableAnnotation {
        self.alias = Some(alias.into());
        self
    }

    /// # Panics
    ///
    /// Panics when called on an extension table.
    pub fn entity_ty(mut self, ty: TypeId) -> TableAnnotation {
        match &mut self.kind {
            TableKind::Primary { entity_ty } => *entity_ty = Some(ty),
            TableKind::Extension(_) => panic!("extension tables cannot override the entity type"),
        }
        self
    }

    pub fn is_extension(&self) -> bool {
        matches!(self.kind, TableKind::Extension(_))
    }

    pub fn as_extension(&self) -> Option<&Extension> {
        match &self.kind {
            TableKind::Extension(extension) => Some(extension),
            TableKind::Primary { .. } => None,
        }
    }

    /// The overriding entity type of a primary table.
    pub fn entity_ty_override(&self) -> Option<TypeId> {
        match self.kind {
            TableKind::Primary { entity_ty } => entity_ty,
            TableKind::Extension(_) => None,
        }
    }
}

impl Extension {
    pub fn new(key_columns: impl Into<String>, related_key_columns: impl Into<String>) -> Extension {
        Extension {
            key_columns: key_columns.into(),
            related_alias: None,
            related_key_columns: related_key_columns.into(),
        }
    }

    pub fn related_alias(mut self, alias: impl Into<String>) -> Extension {
        self.related_alias = Some(alias.into());
        self
    }
}
