//! `#[derive(Payload)]`.

use proc_macro::TokenStream;
use quote::quote;
use syn::{DeriveInput, LitStr, Path, parse_macro_input, parse_quote};

/// Implementation of `#[derive(Payload)]`.
pub fn derive_payload_impl(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    let name = &input.ident;
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    let mut describe = None;
    let mut krate: Path = parse_quote!(::tidings);
    for attr in input.attrs.iter().filter(|a| a.path().is_ident("payload")) {
        let parsed = attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("describe") {
                let lit: LitStr = meta.value()?.parse()?;
                describe = Some(lit.value());
                Ok(())
            } else if meta.path.is_ident("crate") {
                let lit: LitStr = meta.value()?.parse()?;
                krate = lit.parse()?;
                Ok(())
            } else {
                Err(meta.error("unknown payload attribute, expected `describe` or `crate`"))
            }
        });
        if let Err(err) = parsed {
            return err.to_compile_error().into();
        }
    }

    let describe = describe.unwrap_or_else(|| name.to_string());

    let expanded = quote! {
        impl #impl_generics #krate::Payload for #name #ty_generics #where_clause {
            fn describe(&self) -> ::std::borrow::Cow<'_, str> {
                ::std::borrow::Cow::Borrowed(#describe)
            }
        }
    };

    TokenStream::from(expanded)
}
