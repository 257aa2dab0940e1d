use super::Error;

/// Error when two non-nested member annotations target the same member of
/// one entity.
#[derive(Debug)]
pub(super) struct DuplicateMemberMapping {
    member: Box<str>,
    ty: Box<str>,
}

impl std::error::Error for DuplicateMemberMapping {}

impl core::fmt::Display for DuplicateMemberMapping {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(
            f,
            "more than one mapping annotation specified for member `{}` on type `{}`",
            self.member, self.ty
        )
    }
}

impl Error {
    pub fn duplicate_member_mapping(member: impl Into<String>, ty: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::DuplicateMemberMapping(
            DuplicateMemberMapping {
                member: member.into().into(),
                ty: ty.into().into(),
            },
        ))
    }

    /// Returns `true` if this error or one of its causes is a duplicate
    /// member mapping error.
    pub fn is_duplicate_member_mapping(&self) -> bool {
        self.any_kind(|kind| matches!(kind, super::ErrorKind::DuplicateMemberMapping(_)))
    }
}
