use super::Error;

/// Error when an entity or table handed to a mapping was produced by a
/// different mapping.
#[derive(Debug)]
pub(super) struct UnknownEntity {
    table_id: Box<str>,
}

impl std::error::Error for UnknownEntity {}

impl core::fmt::Display for UnknownEntity {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(
            f,
            "entity `{}` does not belong to this mapping",
            self.table_id
        )
    }
}

impl Error {
    pub fn unknown_entity(table_id: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::UnknownEntity(UnknownEntity {
            table_id: table_id.into().into(),
        }))
    }

    pub fn is_unknown_entity(&self) -> bool {
        self.any_kind(|kind| matches!(kind, super::ErrorKind::UnknownEntity(_)))
    }
}
