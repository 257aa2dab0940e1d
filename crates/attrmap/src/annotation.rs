//! Declarative mapping annotations.
//!
//! Annotations are attached to members of the context type. Each one states
//! a single mapping fact: the member declares a table (or an extension
//! table), or a path below the member maps to a column or an association.

mod association;
pub use association::Association;

mod column;
pub use column::Column;

mod table;
pub use table::{Extension, TableAnnotation, TableKind};

use crate::ty::TypeId;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Annotation {
    Table(TableAnnotation),
    Member(MemberAnnotation),
}

/// Maps the member at a dotted path to a column or an association.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemberAnnotation {
    /// Path of the member, relative to the element type of the annotated
    /// context member (`Name`, `Address.City`, ...).
    pub member: String,

    pub kind: MemberKind,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MemberKind {
    Column(Column),
    Association(Association),
}

impl Annotation {
    /// A primary table named `name`.
    pub fn table(name: impl Into<String>) -> Annotation {
        Annotation::Table(TableAnnotation::new(name))
    }

    /// A primary table that maps rows onto `entity_ty` instead of the element
    /// type.
    pub fn table_of(name: impl Into<String>, entity_ty: TypeId) -> Annotation {
        Annotation::Table(TableAnnotation::new(name).entity_ty(entity_ty))
    }

    pub fn column(member: impl Into<String>, column: Column) -> Annotation {
        Annotation::Member(MemberAnnotation {
            member: member.into(),
            kind: MemberKind::Column(column),
        })
    }

    pub fn association(member: impl Into<String>, association: Association) -> Annotation {
        Annotation::Member(MemberAnnotation {
            member: member.into(),
            kind: MemberKind::Association(association),
        })
    }

    pub fn as_table(&self) -> Option<&TableAnnotation> {
        match self {
            Annotation::Table(table) => Some(table),
            Annotation::Member(_) => None,
        }
    }

    pub fn as_member(&self) -> Option<&MemberAnnotation> {
        match self {
            Annotation::Member(member) => Some(member),
            Annotation::Table(_) => None,
        }
    }
}

impl From<TableAnnotation> for Annotation {
    fn from(value: TableAnnotation) -> Self {
        Annotation::Table(value)
    }
}

impl From<MemberAnnotation> for Annotation {
    fn from(value: MemberAnnotation) -> Self {
        Annotation::Member(value)
    }
}

impl MemberKind {
    pub fn as_column(&self) -> Option<&Column> {
        match self {
            MemberKind::Column(column) => Some(column),
            MemberKind::Association(_) => None,
        }
    }

    pub fn as_association(&self) -> Option<&Association> {
        match self {
            MemberKind::Association(association) => Some(association),
            MemberKind::Column(_) => None,
        }
    }
}
