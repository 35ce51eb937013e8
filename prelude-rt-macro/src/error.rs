use quote::ToTokens;
use thiserror::Error;

/// Why a derive input was rejected
#[derive(Clone, Copy, Debug, Eq, Error, PartialEq)]
pub enum ErrorReason {
    #[error("`ErrorCode` can only be derived for enums")]
    NotAnEnum,
    #[error("`ErrorCode` needs at least one variant")]
    NoVariants,
    #[error("too many variants to give each one a negative `i32` code")]
    TooManyVariants,
}

impl ErrorReason {
    /// Turns the reason into a compile error pointing at `tokens`
    pub fn at<T>(self, tokens: T) -> syn::Error
    where
        T: ToTokens,
    {
        syn::Error::new_spanned(tokens, self)
    }
}
