use super::Error;

/// Error when a key name listed by an association (or an extension table)
/// does not name a mapped member of the entity it refers to.
#[derive(Debug)]
pub(super) struct UnresolvableAssociationReference {
    /// Type of the entity the name was looked up on.
    entity_ty: Box<str>,

    /// The offending name, as written in the annotation.
    member: Box<str>,

    /// Annotation field the name was read from, e.g. `Association.KeyMembers`.
    source: Box<str>,

    /// Type owning the annotation.
    owner_ty: Box<str>,
}

impl std::error::Error for UnresolvableAssociationReference {}

impl core::fmt::Display for UnresolvableAssociationReference {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(
            f,
            "member `{}.{}` referenced in {} for `{}` is not mapped or does not exist",
            self.entity_ty, self.member, self.source, self.owner_ty
        )
    }
}

impl Error {
    pub fn unresolvable_association_reference(
        entity_ty: impl Into<String>,
        member: impl Into<String>,
        source: impl Into<String>,
        owner_ty: impl Into<String>,
    ) -> Error {
        Error::from(super::ErrorKind::UnresolvableAssociationReference(
            UnresolvableAssociationReference {
                entity_ty: entity_ty.into().into(),
                member: member.into().into(),
                source: source.into().into(),
                owner_ty: owner_ty.into().into(),
            },
        ))
    }

    /// Returns `true` if this error or one of its causes is an unresolvable
    /// association reference.
    pub fn is_unresolvable_association_reference(&self) -> bool {
        self.any_kind(|kind| {
            matches!(kind, super::ErrorKind::UnresolvableAssociationReference(_))
        })
    }
}
