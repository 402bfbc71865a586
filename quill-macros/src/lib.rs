mod decode_property;
mod decode_record;
mod encode_property_def;

use decode_record::decode_record;
use encode_property_def::encode_property_def;
use proc_macro::TokenStream;
use quote::quote;
use syn::{ItemStruct, parse_macro_input};

#[proc_macro_derive(Record, attributes(quill))]
pub fn derive_record(input: TokenStream) -> TokenStream {
    let record = decode_record(parse_macro_input!(input as ItemStruct));
    let name = &record.item.ident;
    let (impl_generics, ty_generics, where_clause) = record.item.generics.split_for_impl();
    let table = &record.table;
    let id = &record.id;
    let properties = record.properties.iter().map(encode_property_def);
    let overrides = record.properties.iter().filter_map(|v| {
        let property = &v.name;
        v.column
            .as_ref()
            .map(|column| quote!(.with(#property, #column)))
    });
    quote! {
        impl #impl_generics ::quill::Record for #name #ty_generics #where_clause {
            fn descriptor() -> &'static ::quill::RecordDescriptor {
                static RESULT: ::std::sync::LazyLock<::quill::RecordDescriptor> =
                    ::std::sync::LazyLock::new(|| ::quill::RecordDescriptor::new([#(#properties),*]));
                &RESULT
            }

            fn table_name() -> &'static str {
                #table
            }

            fn id_property() -> &'static str {
                #id
            }

            fn column_overrides() -> &'static ::quill::ColumnOverrides {
                static RESULT: ::std::sync::LazyLock<::quill::ColumnOverrides> =
                    ::std::sync::LazyLock::new(|| ::quill::ColumnOverrides::new() #(#overrides)*);
                &RESULT
            }
        }
    }
    .into()
}
