use crate::decode_property::{PropertyMetadata, decode_property};
use convert_case::{Case, Casing};
use quote::ToTokens;
use quill_core::ValueKind;
use syn::{Fields, ItemStruct, LitStr, parse::ParseBuffer};

pub(crate) struct RecordMetadata {
    pub(crate) item: ItemStruct,
    pub(crate) properties: Vec<PropertyMetadata>,
    pub(crate) table: String,
    pub(crate) id: String,
}

pub(crate) fn decode_record(item: ItemStruct) -> RecordMetadata {
    let Fields::Named(..) = &item.fields else {
        panic!(
            "Record `{}` must be a struct with named fields",
            item.ident
        );
    };
    let properties: Vec<_> = item.fields.iter().map(decode_property).collect();
    let mut table = item.ident.to_string().to_case(Case::Snake);
    let mut id = None;
    if table.starts_with('_') {
        table.remove(0);
    }
    for attr in &item.attrs {
        let meta = &attr.meta;
        if meta.path().is_ident("quill") {
            let Ok(list) = meta.require_list() else {
                panic!("Error while parsing `quill`, use it like: `#[quill(attribute = value, ..)]`",);
            };
            let _ = list.parse_nested_meta(|arg| {
                if arg.path.is_ident("table") {
                    let Ok(value) = arg.value().and_then(ParseBuffer::parse::<LitStr>) else {
                        panic!(
                            "Error while parsing `table`, use it like: `#[quill(table = \"Users\")]`"
                        );
                    };
                    table = value.value();
                } else if arg.path.is_ident("id") {
                    let Ok(value) = arg.value().and_then(ParseBuffer::parse::<LitStr>) else {
                        panic!("Error while parsing `id`, use it like: `#[quill(id = \"Id\")]`");
                    };
                    if id.is_some() {
                        panic!("Identity attribute can appear just once on a record");
                    }
                    id = Some(value.value());
                } else {
                    panic!("Unknown attribute `{}` inside quill macro", arg.path.to_token_stream());
                }
                Ok(())
            });
        }
    }
    let id = match id {
        Some(id) => {
            let Some(property) = properties.iter().find(|v| v.name == id) else {
                panic!(
                    "Identity property `{}` does not exist in the record `{}`",
                    id, item.ident
                );
            };
            if !property.readable || property.kind == ValueKind::Collection {
                panic!(
                    "Identity property `{}` of the record `{}` cannot be skipped or a collection",
                    id, item.ident
                );
            }
            id
        }
        None => "id".to_string(),
    };
    RecordMetadata {
        item,
        properties,
        table,
        id,
    }
}
