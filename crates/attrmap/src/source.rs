use crate::{annotation::Annotation, Result};

use std::collections::HashMap;

/// Supplies the annotations declared on members of the context type.
///
/// Implementations are read-only inputs; the mapping asks for the
/// annotations of a root table identifier the first time an entity under
/// that root is built.
pub trait AnnotationSource: Send + Sync {
    /// Returns every annotation declared on the context member `member`, in
    /// any order.
    ///
    /// `member` is the declared spelling of the member; it has already been
    /// resolved against the context type.
    fn annotations(&self, member: &str) -> Result<Vec<Annotation>>;
}

/// An explicit table of annotations keyed by context member name.
#[derive(Debug, Default, Clone)]
pub struct Annotations {
    by_member: HashMap<String, Vec<Annotation>>,
}

impl Annotations {
    pub fn new() -> Annotations {
        Annotations::default()
    }

    /// Attaches `annotation` to the context member `member`.
    pub fn declare(&mut self, member: impl Into<String>, annotation: impl Into<Annotation>) -> &mut Self {
        self.by_member
            .entry(member.into())
            .or_default()
            .push(annotation.into());
        self
    }

    /// Attaches every annotation in `annotations` to `member`.
    pub fn declare_all(
        &mut self,
        member: impl Into<String>,
        annotations: impl IntoIterator<Item = Annotation>,
    ) -> &mut Self {
        self.by_member
            .entry(member.into())
            .or_default()
            .extend(annotations);
        self
    }
}

impl AnnotationSource for Annotations {
    fn annotations(&self, member: &str) -> Result<Vec<Annotation>> {
        Ok(self.by_member.get(member).cloned().unwrap_or_default())
    }
}

impl<T: AnnotationSource + ?Sized> AnnotationSource for std::sync::Arc<T> {
    fn annotations(&self, member: &str) -> Result<Vec<Annotation>> {
        (**self).annotations(member)
    }
}
