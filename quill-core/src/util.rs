use std::cmp::min;
use syn::Path;

/// Checks the trailing segments of `path` against `expect`, so `Vec`, `vec::Vec` and
/// `::std::vec::Vec` all match `["std", "vec", "Vec"]`.
pub fn matches_path(path: &Path, expect: &[&str]) -> bool {
    let len = min(path.segments.len(), expect.len());
    path.segments
        .iter()
        .rev()
        .take(len)
        .map(|v| &v.ident)
        .eq(expect.iter().rev().take(len))
}

pub fn separated_by<T, F>(
    out: &mut String,
    values: impl IntoIterator<Item = T>,
    mut f: F,
    separator: &str,
) where
    F: FnMut(&mut String, T),
{
    let mut len = out.len();
    for v in values {
        if out.len() > len {
            out.push_str(separator);
        }
        len = out.len();
        f(out, v);
    }
}

/// Like [`separated_by`], but the separator is written between every pair of values, also
/// when `f` writes nothing.
pub fn joined_by<T, F>(
    out: &mut String,
    values: impl IntoIterator<Item = T>,
    mut f: F,
    separator: &str,
) where
    F: FnMut(&mut String, T),
{
    for (i, v) in values.into_iter().enumerate() {
        if i > 0 {
            out.push_str(separator);
        }
        f(out, v);
    }
}

/// Longest prefix of `value` not exceeding `max` bytes that ends on a char boundary.
pub fn truncated(value: &str, max: usize) -> &str {
    let mut end = min(value.len(), max);
    while !value.is_char_boundary(end) {
        end -= 1;
    }
    &value[..end]
}

#[macro_export]
macro_rules! truncate_long {
    ($query:expr) => {
        format_args!(
            "{}{}",
            $crate::truncated(&$query, 497).trim_end(),
            if $query.len() > 497 { "..." } else { "" },
        )
    };
}
