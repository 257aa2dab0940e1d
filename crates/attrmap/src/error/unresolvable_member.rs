use super::Error;

/// Error when a member path segment does not exist on the type it is looked
/// up on.
///
/// Raised by member path resolution, which backs every place a name from an
/// annotation or a facade call is turned into a member descriptor: root
/// table identifiers on the context type, member annotations on the entity
/// type and segments of nested paths.
#[derive(Debug)]
pub(super) struct UnresolvableMember {
    member: Box<str>,
    ty: Box<str>,
}

impl std::error::Error for UnresolvableMember {}

impl core::fmt::Display for UnresolvableMember {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(
            f,
            "member `{}` does not exist on type `{}`",
            self.member, self.ty
        )
    }
}

impl Error {
    /// Creates an unresolvable member error for the segment `member` on the
    /// type named `ty`.
    pub fn unresolvable_member(member: impl Into<String>, ty: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::UnresolvableMember(UnresolvableMember {
            member: member.into().into(),
            ty: ty.into().into(),
        }))
    }

    /// Returns `true` if this error or one of its causes is an unresolvable
    /// member error.
    pub fn is_unresolvable_member(&self) -> bool {
        self.any_kind(|kind| matches!(kind, super::ErrorKind::UnresolvableMember(_)))
    }
}
