use thiserror::Error;

/// Errors raised while validating or computing a bill.
#[derive(Debug, Error, PartialEq)]
pub(crate) enum BillError {
    #[error("Please provide a principal amount or list of items to split for the bill")]
    MissingInput,

    #[error("parsing principal {value:?}: {reason}")]
    InvalidPrincipal { value: String, reason: &'static str },
}
