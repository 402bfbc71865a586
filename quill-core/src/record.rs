use crate::{ColumnOverrides, SqlWriter};
use proc_macro2::TokenStream;
use quote::{ToTokens, TokenStreamExt, quote};
use std::borrow::Cow;

/// Shape of a property value, as far as column selection is concerned.
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueKind {
    /// Text, never treated as a collection even though it is iterable.
    String,
    /// Any single value (numbers, booleans, dates, identifiers...).
    #[default]
    Scalar,
    /// Lists, sets, maps, arrays: never mapped to a column.
    Collection,
}

impl ToTokens for ValueKind {
    fn to_tokens(&self, tokens: &mut TokenStream) {
        tokens.append_all(match self {
            ValueKind::String => quote!(::quill::ValueKind::String),
            ValueKind::Scalar => quote!(::quill::ValueKind::Scalar),
            ValueKind::Collection => quote!(::quill::ValueKind::Collection),
        });
    }
}

/// A declared property of a record type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PropertyDef {
    /// Property name, also used as the placeholder name.
    pub name: Cow<'static, str>,
    /// Value kind.
    pub kind: ValueKind,
    /// Write-only or inaccessible properties are not readable.
    pub readable: bool,
}

impl PropertyDef {
    pub fn new(name: impl Into<Cow<'static, str>>, kind: ValueKind) -> Self {
        Self {
            name: name.into(),
            kind,
            readable: true,
        }
    }
    pub fn write_only(name: impl Into<Cow<'static, str>>, kind: ValueKind) -> Self {
        Self {
            name: name.into(),
            kind,
            readable: false,
        }
    }
    pub fn name(&self) -> &str {
        &self.name
    }
    /// Readable and either text or not a collection.
    pub fn is_eligible(&self) -> bool {
        self.readable && matches!(self.kind, ValueKind::String | ValueKind::Scalar)
    }
}

/// Structural description of a record type: its properties in declaration order.
#[derive(Default, Debug, Clone, PartialEq, Eq)]
pub struct RecordDescriptor {
    properties: Box<[PropertyDef]>,
}

impl RecordDescriptor {
    pub fn new(properties: impl IntoIterator<Item = PropertyDef>) -> Self {
        Self {
            properties: properties.into_iter().collect(),
        }
    }
    /// Every declared property, readable or not.
    pub fn properties(&self) -> &[PropertyDef] {
        &self.properties
    }
    /// Readable properties, in declaration order.
    pub fn readable(&self) -> impl Iterator<Item = &PropertyDef> + Clone {
        self.properties.iter().filter(|v| v.readable)
    }
    /// Properties that can become a column, in declaration order.
    pub fn eligible(&self) -> impl Iterator<Item = &PropertyDef> + Clone {
        self.properties.iter().filter(|v| v.is_eligible())
    }
    pub fn property(&self, name: &str) -> Option<&PropertyDef> {
        self.properties.iter().find(|v| v.name == name)
    }
}

impl FromIterator<PropertyDef> for RecordDescriptor {
    fn from_iter<T: IntoIterator<Item = PropertyDef>>(iter: T) -> Self {
        Self::new(iter)
    }
}

/// A record type whose shape is known ahead of time, usually through `#[derive(Record)]`.
///
/// The table, identity and override defaults come from the `#[quill(..)]` attributes and are
/// only used by the provided `*_sql` methods, the writer methods take them explicitly.
pub trait Record {
    fn descriptor() -> &'static RecordDescriptor;

    /// Table name, `#[quill(table = "..")]` or the snake case type name.
    fn table_name() -> &'static str;

    /// Identity property, `#[quill(id = "..")]` or `"id"` when absent.
    fn id_property() -> &'static str;

    /// Columns renamed through `#[quill(column = "..")]`.
    fn column_overrides() -> &'static ColumnOverrides;

    fn insert_sql<W: SqlWriter + ?Sized>(writer: &W) -> String {
        writer.sql_insert(
            Self::descriptor(),
            Self::table_name(),
            Self::id_property(),
            Self::column_overrides(),
        )
    }

    fn update_sql<W: SqlWriter + ?Sized>(writer: &W) -> String {
        writer.sql_update(
            Self::descriptor(),
            Self::table_name(),
            Self::id_property(),
            Self::column_overrides(),
        )
    }

    fn delete_sql<W: SqlWriter + ?Sized>(writer: &W) -> String {
        writer.sql_delete(Self::table_name(), Self::id_property())
    }

    fn select_by_id_sql<W: SqlWriter + ?Sized>(writer: &W, id: i64) -> String {
        writer.sql_select_by_id(
            id,
            Self::descriptor(),
            Self::table_name(),
            Self::id_property(),
            Self::column_overrides(),
        )
    }
}
