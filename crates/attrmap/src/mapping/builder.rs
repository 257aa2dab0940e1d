use super::{cache::EntityCache, Mapping, MappingId};
use crate::{source::AnnotationSource, ty::TypeDescriptor, TypeId};

use std::sync::Arc;

#[derive(Debug, Clone, Default)]
pub struct Builder {
    /// If set, prefix all table names with this string
    table_name_prefix: Option<String>,

    /// Naming convention for columns without an explicit name
    column_naming: ColumnNaming,
}

/// Derives a column name from a member name when the column annotation does
/// not supply one.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ColumnNaming {
    /// Use the member name as declared.
    #[default]
    AsDeclared,

    /// `CustomerId` becomes `customer_id`.
    SnakeCase,

    /// `CustomerId` becomes `CUSTOMER_ID`.
    UpperSnakeCase,

    /// `CustomerId` becomes `customerId`.
    CamelCase,
}

/// Options shared by every entity of one mapping.
#[derive(Debug, Clone, Default)]
pub(super) struct Config {
    pub(super) table_name_prefix: Option<String>,
    pub(super) column_naming: ColumnNaming,
}

impl Builder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn table_name_prefix(&mut self, prefix: &str) -> &mut Self {
        self.table_name_prefix = Some(prefix.to_string());
        self
    }

    pub fn column_naming(&mut self, naming: ColumnNaming) -> &mut Self {
        self.column_naming = naming;
        self
    }

    /// Creates a mapping for the context type `context`.
    ///
    /// Nothing is resolved yet; entities are built and cached on first use.
    pub fn build(
        &self,
        types: impl TypeDescriptor + 'static,
        annotations: impl AnnotationSource + 'static,
        context: TypeId,
    ) -> Mapping {
        let mapping = Mapping {
            id: MappingId::next(),
            types: Arc::new(types),
            annotations: Arc::new(annotations),
            context,
            config: Config {
                table_name_prefix: self.table_name_prefix.clone(),
                column_naming: self.column_naming,
            },
            entities: EntityCache::default(),
        };

        tracing::debug!(
            context = mapping.types.type_name(context),
            "created attribute mapping"
        );

        mapping
    }
}

impl ColumnNaming {
    pub fn apply(self, member: &str) -> String {
        use std_util::str;

        match self {
            ColumnNaming::AsDeclared => member.to_string(),
            ColumnNaming::SnakeCase => str::snake_case(member),
            ColumnNaming::UpperSnakeCase => str::upper_snake_case(member),
            ColumnNaming::CamelCase => str::camel_case(member),
        }
    }
}
