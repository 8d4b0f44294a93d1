mod error_kind;

use error_kind::ErrorKindTarget;
use proc_macro::TokenStream;
use quote::quote;
use syn::parse_macro_input;

/// Derives the [`ErrorKind`] trait for the given struct.
///
/// The report built for the error is customized using the `error` attribute by adding the
/// corresponding tags to it:
///
/// ```
/// use tarn_attrs::ErrorKind;
///
/// #[derive(Debug, ErrorKind)]
/// #[error(
///     message = "unexpected end of file",
///     labels = ["add something here"],
/// )]
/// pub struct UnexpectedEof;
/// ```
///
/// The following tags are available:
///
/// | Tag       | Description                                                                  |
/// | --------- | ---------------------------------------------------------------------------- |
/// | `message` | The message displayed at the top of the error when it is displayed.          |
/// | `labels`  | The labels pointing at the error's spans, paired with the spans in order. An |
/// |           | empty string produces a label with no message.                               |
/// | `help`    | Optional help text for the error, describing what the user can do to fix it. |
///
/// `message` and `help` accept an expression evaluating to a [`String`]; `labels` accepts an
/// expression evaluating to an [`IntoIterator`] of them, and `spans` is in scope within it. For
/// structs with named fields, the expressions are evaluated with the members of the struct in
/// scope, so they can be used directly (tuple structs are not supported).
#[proc_macro_derive(ErrorKind, attributes(error))]
pub fn error_kind(item: TokenStream) -> TokenStream {
    let target = parse_macro_input!(item as ErrorKindTarget);
    let name = &target.name;
    quote! {
        impl tarn_error::ErrorKind for #name {
            #target
        }
    }.into()
}
