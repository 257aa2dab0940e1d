use super::Error;

/// Error when the entity an association points at cannot be constructed.
///
/// Usually carries the construction failure as its cause.
#[derive(Debug)]
pub(super) struct UnresolvableRelatedEntity {
    name: Box<str>,
    source: Box<str>,
    entity_ty: Box<str>,
}

impl std::error::Error for UnresolvableRelatedEntity {}

impl core::fmt::Display for UnresolvableRelatedEntity {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(
            f,
            "entity `{}` referenced in {} of `{}` does not exist",
            self.name, self.source, self.entity_ty
        )
    }
}

impl Error {
    pub fn unresolvable_related_entity(
        name: impl Into<String>,
        source: impl Into<String>,
        entity_ty: impl Into<String>,
    ) -> Error {
        Error::from(super::ErrorKind::UnresolvableRelatedEntity(
            UnresolvableRelatedEntity {
                name: name.into().into(),
                source: source.into().into(),
                entity_ty: entity_ty.into().into(),
            },
        ))
    }

    /// Returns `true` if this error or one of its causes is an unresolvable
    /// related entity error.
    pub fn is_unresolvable_related_entity(&self) -> bool {
        self.any_kind(|kind| matches!(kind, super::ErrorKind::UnresolvableRelatedEntity(_)))
    }
}
