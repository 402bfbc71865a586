use quote::ToTokens;
use quill_core::{ValueKind, decode_kind};
use syn::{Field, LitStr, ext::IdentExt, parse::ParseBuffer};

pub(crate) struct PropertyMetadata {
    pub(crate) name: String,
    pub(crate) kind: ValueKind,
    pub(crate) readable: bool,
    pub(crate) column: Option<String>,
}

pub(crate) fn decode_property(field: &Field) -> PropertyMetadata {
    let ident = field
        .ident
        .clone()
        .expect("Field is expected to have a name");
    let mut metadata = PropertyMetadata {
        name: ident.unraw().to_string(),
        kind: decode_kind(&field.ty),
        readable: true,
        column: None,
    };
    if metadata.name.starts_with('_') {
        metadata.name.remove(0);
    }
    for attr in &field.attrs {
        let meta = &attr.meta;
        if meta.path().is_ident("quill") {
            let Ok(list) = meta.require_list() else {
                panic!(
                    "Error while parsing `quill`, use it like: `#[quill(attribute = value, ...)]`",
                );
            };
            let _ = list.parse_nested_meta(|arg| {
                if arg.path.is_ident("name") {
                    let Ok(v) = arg.value().and_then(ParseBuffer::parse::<LitStr>) else {
                        panic!("Error while parsing `name`, use it like: `#[quill(name = \"Email\")]`");
                    };
                    metadata.name = v.value();
                } else if arg.path.is_ident("column") {
                    let Ok(v) = arg.value().and_then(ParseBuffer::parse::<LitStr>) else {
                        panic!("Error while parsing `column`, use it like: `#[quill(column = \"email_address\")]`");
                    };
                    metadata.column = Some(v.value());
                } else if arg.path.is_ident("kind") {
                    let Ok(v) = arg.value().and_then(ParseBuffer::parse::<LitStr>) else {
                        panic!("Error while parsing `kind`, use it like: `#[quill(kind = \"scalar\")]`");
                    };
                    metadata.kind = match v.value().as_str() {
                        "string" => ValueKind::String,
                        "scalar" => ValueKind::Scalar,
                        "collection" => ValueKind::Collection,
                        other => panic!(
                            "Unknown kind `{}`, expected one of: \"string\", \"scalar\", \"collection\"",
                            other
                        ),
                    };
                } else if arg.path.is_ident("skip") {
                    let Err(..) = arg.value() else {
                        // value() is Err for Meta::Path
                        panic!("Error while parsing `skip`, use it like: `#[quill(skip)]`");
                    };
                    metadata.readable = false;
                } else {
                    panic!("Unknown attribute `{}` inside quill macro", arg.path.to_token_stream());
                }
                Ok(())
            });
        }
    }
    if metadata.name.is_empty() {
        panic!("Field `{}` has an empty property name", ident);
    }
    metadata
}
