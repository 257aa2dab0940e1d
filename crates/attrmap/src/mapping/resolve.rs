use crate::{
    ty::{Member, Ty, TypeDescriptor, TypeId},
    Error, Result,
};

/// Resolves a dot-separated member path starting at `ty`.
///
/// Each segment is matched case-insensitively against the current type's
/// public and private members. Between segments the member's declared type
/// is unwrapped from a collection to its element type.
pub(crate) fn resolve_path<'a>(
    types: &'a dyn TypeDescriptor,
    ty: TypeId,
    path: &str,
) -> Result<&'a Member> {
    let mut segments = path.split('.');
    let first = segments.next().unwrap_or_default();
    let mut member = find_member(types, ty, first)?;

    for segment in segments {
        let next = match member.ty.element() {
            Ty::Model(next) => *next,
            other => return Err(Error::unresolvable_member(segment, ty_name(types, other))),
        };
        member = find_member(types, next, segment)?;
    }

    Ok(member)
}

/// Resolves a single member name on `ty`.
pub(crate) fn find_member<'a>(
    types: &'a dyn TypeDescriptor,
    ty: TypeId,
    name: &str,
) -> Result<&'a Member> {
    types
        .find_member(ty, name)
        .ok_or_else(|| Error::unresolvable_member(name, types.type_name(ty)))
}

/// Human readable name of a declared type.
pub(crate) fn ty_name(types: &dyn TypeDescriptor, ty: &Ty) -> String {
    match ty {
        Ty::Primitive(name) => name.clone(),
        Ty::Model(id) => types.type_name(*id).to_string(),
        Ty::List(inner) => format!("[{}]", ty_name(types, inner)),
    }
}
