//! Procedural macros for Tidings.
//!
//! - `#[derive(Payload)]` implements `Payload` for a component type
//! - `#[subscriber]` turns a plain function into a registrable handler

use proc_macro::TokenStream;

mod payload;
mod subscriber;

/// Derive macro for implementing the `Payload` trait.
///
/// The description defaults to the type name and can be overridden with
/// `#[payload(describe = "...")]`.
///
/// The generated impl names `::tidings::Payload`. Crates that depend on
/// `tidings-core` alone pass the path to use with
/// `#[payload(crate = "::tidings_core")]`.
#[proc_macro_derive(Payload, attributes(payload))]
pub fn derive_payload(input: TokenStream) -> TokenStream {
    payload::derive_payload_impl(input)
}

/// Turns `fn name(event: &Event)` into a unit struct that knows how to
/// register itself.
///
/// Arguments: `event = "Name"` (required), `priority = N` (defaults to
/// `priority::NORMAL`), `name = "StructName"` (defaults to the function name).
#[proc_macro_attribute]
pub fn subscriber(attr: TokenStream, item: TokenStream) -> TokenStream {
    subscriber::subscriber_impl(attr, item)
}
