use crate::decode_property::PropertyMetadata;
use proc_macro2::TokenStream;
use quote::quote;

pub(crate) fn encode_property_def(metadata: &PropertyMetadata) -> TokenStream {
    let name = &metadata.name;
    let kind = &metadata.kind;
    let readable = &metadata.readable;
    quote! {
        ::quill::PropertyDef {
            name: ::std::borrow::Cow::Borrowed(#name),
            kind: #kind,
            readable: #readable,
        }
    }
}
