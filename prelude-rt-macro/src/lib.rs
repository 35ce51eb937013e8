mod error;
mod error_code;

use syn::{parse_macro_input, DeriveInput};

/// Gives every variant of an error enum a stable negative code for C callers.
///
/// For `enum Foo` this generates a C-visible `#[repr(i32)] enum FooCode` with one variant per
/// variant of `Foo`, numbered -1, -2, ... in declaration order, plus `From<&Foo>` for `FooCode`
/// and for `i32`. Zero is never used so it can mean success.
#[proc_macro_derive(ErrorCode)]
pub fn derive_error_code(input: proc_macro::TokenStream) -> proc_macro::TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    error_code::expand(&input)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}
