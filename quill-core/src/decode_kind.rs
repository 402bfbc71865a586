use crate::{ValueKind, matches_path};
use syn::{GenericArgument, PathArguments, Type, TypePath, TypeReference};

/// Value kind of a field type, as seen by the derive macro.
///
/// Wrappers are looked through (`Option<Vec<i32>>` is a collection), text types are strings and
/// every type not recognized as a collection is a scalar.
pub fn decode_kind(ty: &Type) -> ValueKind {
    match ty {
        Type::Path(TypePath { path, .. }) => {
            if path.is_ident("str")
                || matches_path(path, &["std", "string", "String"])
                || matches_path(path, &["alloc", "string", "String"])
            {
                return ValueKind::String;
            }
            let is_collection = matches_path(path, &["std", "vec", "Vec"])
                || matches_path(path, &["std", "collections", "VecDeque"])
                || matches_path(path, &["std", "collections", "LinkedList"])
                || matches_path(path, &["std", "collections", "HashSet"])
                || matches_path(path, &["std", "collections", "BTreeSet"])
                || matches_path(path, &["std", "collections", "HashMap"])
                || matches_path(path, &["std", "collections", "BTreeMap"])
                || matches_path(path, &["std", "collections", "BinaryHeap"]);
            if is_collection {
                return ValueKind::Collection;
            }
            let is_cow = matches_path(path, &["std", "borrow", "Cow"]);
            let is_wrapper = is_cow
                || matches_path(path, &["std", "option", "Option"])
                || matches_path(path, &["std", "boxed", "Box"])
                || matches_path(path, &["std", "cell", "Cell"])
                || matches_path(path, &["std", "cell", "RefCell"])
                || matches_path(path, &["std", "rc", "Rc"])
                || matches_path(path, &["std", "sync", "Arc"])
                || matches_path(path, &["std", "sync", "Mutex"])
                || matches_path(path, &["std", "sync", "RwLock"]);
            if !is_wrapper {
                return ValueKind::Scalar;
            }
            let Some(PathArguments::AngleBracketed(arguments)) =
                path.segments.last().map(|v| &v.arguments)
            else {
                return ValueKind::Scalar;
            };
            // Cow<'a, T> carries a lifetime first
            arguments
                .args
                .iter()
                .find_map(|arg| match arg {
                    GenericArgument::Type(ty) => Some(decode_kind(ty)),
                    _ => None,
                })
                .unwrap_or_default()
        }
        Type::Reference(TypeReference { elem, .. }) => decode_kind(elem),
        Type::Paren(paren) => decode_kind(&paren.elem),
        Type::Group(group) => decode_kind(&group.elem),
        Type::Array(..) | Type::Slice(..) => ValueKind::Collection,
        _ => ValueKind::Scalar,
    }
}
