use crate::error::ErrorReason;
use proc_macro2::{Literal, TokenStream};
use quote::{format_ident, quote};
use syn::{Data, DeriveInput};

pub fn expand(input: &DeriveInput) -> syn::Result<TokenStream> {
    let name = &input.ident;

    let Data::Enum(data) = &input.data else {
        return Err(ErrorReason::NotAnEnum.at(name));
    };

    if data.variants.is_empty() {
        return Err(ErrorReason::NoVariants.at(name));
    }

    let variants = data.variants.iter().map(|v| &v.ident).collect::<Vec<_>>();
    let magnitudes = (1..=variants.len())
        .map(|n| {
            i32::try_from(n)
                .map(Literal::i32_unsuffixed)
                .map_err(|_| ErrorReason::TooManyVariants.at(name))
        })
        .collect::<syn::Result<Vec<_>>>()?;

    let code_enum = format_ident!("{name}Code");
    let visibility = &input.vis;
    let non_exhaustive = input
        .attrs
        .iter()
        .any(|attr| attr.path().is_ident("non_exhaustive"))
        .then(|| quote! { #[non_exhaustive] });
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    Ok(quote! {
        #[::prelude_rt::safer_ffi::derive_ReprC]
        #[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
        #[repr(i32)]
        #non_exhaustive
        #visibility enum #code_enum {
            #(#variants = -#magnitudes,)*
        }

        impl #impl_generics ::core::convert::From<&#name #ty_generics> for #code_enum #where_clause {
            fn from(error: &#name #ty_generics) -> Self {
                match error {
                    #(#name::#variants { .. } => Self::#variants,)*
                }
            }
        }

        impl #impl_generics ::core::convert::From<&#name #ty_generics> for i32 #where_clause {
            fn from(error: &#name #ty_generics) -> i32 {
                #code_enum::from(error) as i32
            }
        }
    })
}
