//! `#[subscriber]`.

use proc_macro::TokenStream;
use quote::quote;
use syn::{
    Expr, FnArg, Ident, ItemFn, LitStr, ReturnType, Token, Type,
    parse::{Parse, ParseStream},
    parse_macro_input,
};

/// Arguments for the `#[subscriber]` macro.
pub(crate) struct SubscriberArgs {
    pub event: Option<LitStr>,
    pub priority: Option<Expr>,
    pub name: Option<String>,
}

impl Parse for SubscriberArgs {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        let mut event = None;
        let mut priority = None;
        let mut name = None;

        while !input.is_empty() {
            let ident: Ident = input.parse()?;
            input.parse::<Token![=]>()?;

            match ident.to_string().as_str() {
                "event" => {
                    event = Some(input.parse()?);
                }
                "priority" => {
                    priority = Some(input.parse()?);
                }
                "name" => {
                    let lit: LitStr = input.parse()?;
                    name = Some(lit.value());
                }
                other => {
                    return Err(syn::Error::new(
                        ident.span(),
                        format!("unknown attribute: {}", other),
                    ));
                }
            }

            if input.peek(Token![,]) {
                input.parse::<Token![,]>()?;
            }
        }

        Ok(SubscriberArgs {
            event,
            priority,
            name,
        })
    }
}

/// Implementation of the `#[subscriber]` attribute macro.
pub fn subscriber_impl(attr: TokenStream, item: TokenStream) -> TokenStream {
    let args = parse_macro_input!(attr as SubscriberArgs);
    let input = parse_macro_input!(item as ItemFn);

    let fn_name = &input.sig.ident;
    let fn_vis = &input.vis;
    let fn_block = &input.block;

    if let Some(asyncness) = &input.sig.asyncness {
        return syn::Error::new_spanned(asyncness, "Subscriber functions run synchronously")
            .to_compile_error()
            .into();
    }

    if let ReturnType::Type(_, ty) = &input.sig.output {
        return syn::Error::new_spanned(ty, "Subscriber functions must return `()`")
            .to_compile_error()
            .into();
    }

    let Some(event) = args.event else {
        return syn::Error::new_spanned(
            fn_name,
            "missing event name: #[subscriber(event = \"Name\")]",
        )
        .to_compile_error()
        .into();
    };

    let inputs = &input.sig.inputs;
    let (event_pat, event_type) = match (inputs.len(), inputs.first()) {
        (1, Some(FnArg::Typed(pat_type))) => {
            if let Type::Reference(type_ref) = &*pat_type.ty {
                (&pat_type.pat, &type_ref.elem)
            } else {
                return syn::Error::new_spanned(
                    &pat_type.ty,
                    "Subscriber event argument must be a reference (&Event)",
                )
                .to_compile_error()
                .into();
            }
        }
        _ => {
            return syn::Error::new_spanned(
                inputs,
                "Subscriber function must take exactly one argument: fn(event: &Event)",
            )
            .to_compile_error()
            .into();
        }
    };

    let struct_name = if let Some(ref custom_name) = args.name {
        Ident::new(custom_name, fn_name.span())
    } else {
        fn_name.clone()
    };

    let priority = args
        .priority
        .map(|p| quote! { #p })
        .unwrap_or_else(|| quote! { ::tidings::priority::NORMAL });

    let expanded = quote! {
        #[allow(non_camel_case_types)]
        #[derive(Clone, Copy, Debug, Default)]
        #[doc = concat!("Auto-generated subscriber from `#[tidings::subscriber]` on `", stringify!(#fn_name), "`")]
        #fn_vis struct #struct_name;

        impl #struct_name {
            /// The event-type name this subscriber listens to.
            pub const EVENT: &'static str = #event;

            /// The handler priority. Higher values run first.
            pub const PRIORITY: i32 = #priority;

            /// Run the subscriber body.
            pub fn call(#event_pat: &#event_type) #fn_block

            /// Register this subscriber, returning the key needed to remove it.
            pub fn register(dispatcher: &::tidings::Dispatcher) -> ::tidings::HandlerKey {
                dispatcher.subscribe(Self::EVENT, Self::PRIORITY, Self::call)
            }
        }
    };

    TokenStream::from(expanded)
}
