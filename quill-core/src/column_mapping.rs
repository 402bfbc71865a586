use crate::{MappingError, RecordDescriptor, Result};
use std::{borrow::Cow, collections::HashSet};

/// Property name to column name renames, kept in insertion order.
///
/// Keys are unique, inserting an existing property replaces its column in place.
#[derive(Default, Debug, Clone, PartialEq, Eq)]
pub struct ColumnOverrides {
    entries: Vec<(Cow<'static, str>, Cow<'static, str>)>,
}

impl ColumnOverrides {
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }
    pub fn insert(
        &mut self,
        property: impl Into<Cow<'static, str>>,
        column: impl Into<Cow<'static, str>>,
    ) -> &mut Self {
        let property = property.into();
        let column = column.into();
        match self.entries.iter_mut().find(|(k, _)| *k == property) {
            Some(entry) => entry.1 = column,
            None => self.entries.push((property, column)),
        }
        self
    }
    pub fn with(
        mut self,
        property: impl Into<Cow<'static, str>>,
        column: impl Into<Cow<'static, str>>,
    ) -> Self {
        self.insert(property, column);
        self
    }
    /// Column name for `property`, if renamed.
    pub fn get(&self, property: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(k, _)| k == property)
            .map(|(_, v)| v.as_ref())
    }
    pub fn contains(&self, property: &str) -> bool {
        self.get(property).is_some()
    }
    /// `(property, column)` pairs.
    pub fn iter(&self) -> impl ExactSizeIterator<Item = (&str, &str)> + Clone {
        self.entries.iter().map(|(k, v)| (k.as_ref(), v.as_ref()))
    }
    pub fn len(&self) -> usize {
        self.entries.len()
    }
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<K, V> FromIterator<(K, V)> for ColumnOverrides
where
    K: Into<Cow<'static, str>>,
    V: Into<Cow<'static, str>>,
{
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        let mut result = Self::new();
        for (k, v) in iter {
            result.insert(k, v);
        }
        result
    }
}

impl<K, V, const N: usize> From<[(K, V); N]> for ColumnOverrides
where
    K: Into<Cow<'static, str>>,
    V: Into<Cow<'static, str>>,
{
    fn from(value: [(K, V); N]) -> Self {
        value.into_iter().collect()
    }
}

/// One resolved column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnEntry<'a> {
    /// Name emitted as the SQL column.
    pub column: &'a str,
    /// Record property, emitted as the placeholder name.
    pub property: &'a str,
}

/// Ordered column to property association, in property declaration order.
///
/// This is a list rather than a map: colliding overrides produce two entries with the same
/// column, use [`ColumnMapping::check_unique_columns`] to reject them.
#[derive(Default, Debug, Clone, PartialEq, Eq)]
pub struct ColumnMapping<'a> {
    entries: Vec<ColumnEntry<'a>>,
}

impl<'a> ColumnMapping<'a> {
    pub fn iter(&self) -> std::slice::Iter<'_, ColumnEntry<'a>> {
        self.entries.iter()
    }
    pub fn len(&self) -> usize {
        self.entries.len()
    }
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
    pub fn columns(&self) -> impl ExactSizeIterator<Item = &'a str> + Clone {
        self.entries.iter().map(|v| v.column)
    }
    pub fn properties(&self) -> impl ExactSizeIterator<Item = &'a str> + Clone {
        self.entries.iter().map(|v| v.property)
    }
    /// First entry mapped to `property`.
    pub fn get_by_property(&self, property: &str) -> Option<&ColumnEntry<'a>> {
        self.entries.iter().find(|v| v.property == property)
    }

    /// Fails with [`MappingError::DuplicateColumn`] when two properties emit the same column.
    pub fn check_unique_columns(&self) -> Result<()> {
        let mut seen = HashSet::with_capacity(self.entries.len());
        for entry in &self.entries {
            if !seen.insert(entry.column) {
                let error = MappingError::DuplicateColumn {
                    column: entry.column.to_string(),
                    properties: self
                        .entries
                        .iter()
                        .filter(|v| v.column == entry.column)
                        .map(|v| v.property.to_string())
                        .collect(),
                };
                log::error!("{}", error);
                return Err(error.into());
            }
        }
        Ok(())
    }

    /// Entry of the identity property, fails with [`MappingError::IdentityNotFound`] if missing.
    pub fn identity(&self, id_property: &str) -> Result<&ColumnEntry<'a>> {
        self.get_by_property(id_property).ok_or_else(|| {
            let error = MappingError::IdentityNotFound {
                id_property: id_property.to_string(),
            };
            log::error!("{}", error);
            error.into()
        })
    }
}

impl<'a> IntoIterator for ColumnMapping<'a> {
    type Item = ColumnEntry<'a>;
    type IntoIter = std::vec::IntoIter<ColumnEntry<'a>>;
    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl<'a, 'b> IntoIterator for &'b ColumnMapping<'a> {
    type Item = &'b ColumnEntry<'a>;
    type IntoIter = std::slice::Iter<'b, ColumnEntry<'a>>;
    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

/// Maps every eligible property of `descriptor` to its column.
///
/// Properties listed in `overrides` emit the override as column name, the others use their own
/// name. Collection valued and non readable properties are skipped.
pub fn resolve_columns<'a>(
    descriptor: &'a RecordDescriptor,
    overrides: &'a ColumnOverrides,
) -> ColumnMapping<'a> {
    let entries = descriptor
        .eligible()
        .map(|property| {
            let property = property.name();
            ColumnEntry {
                column: overrides.get(property).unwrap_or(property),
                property,
            }
        })
        .collect::<Vec<_>>();
    if log::log_enabled!(log::Level::Debug) {
        for (property, _) in overrides.iter() {
            if !entries.iter().any(|v| v.property == property) {
                log::debug!(
                    "Column override for `{}` does not match any eligible property",
                    property
                );
            }
        }
    }
    ColumnMapping { entries }
}
