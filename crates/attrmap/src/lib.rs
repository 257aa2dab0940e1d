//! Resolves declarative mapping annotations into a runtime model of how
//! program types correspond to tables, columns, associations and nested
//! sub-structures.
//!
//! A [`Mapping`] is created once per context type and shared by every query
//! translation in the process. Entities are built on first use and cached
//! for the lifetime of the mapping.

mod error;
pub use error::{Error, IntoError};

pub mod annotation;
pub use annotation::Annotation;

pub mod mapping;
pub use mapping::{Builder, ColumnNaming, Entity, Mapping};

mod source;
pub use source::{AnnotationSource, Annotations};

pub mod ty;
pub use ty::{TypeDescriptor, TypeId, TypeRegistry};

/// A Result type alias that uses the crate's [`Error`] type.
pub type Result<T> = core::result::Result<T, Error>;
