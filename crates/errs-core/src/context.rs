//! Lookup through `anyhow::Error`, including values attached as context

use crate::inspect::{Classified, INTERNAL_MESSAGE, MAX_CHAIN_DEPTH};
use crate::{Code, Error};

/// Find the first application [`Error`] held by an `anyhow::Error`
///
/// Context values are checked outermost first, then the wrapped error, then
/// each `source()` link of the chain. An error attached with
/// `result.context(errorf!(..))` is found here even though it never appears
/// as a `source()` link.
pub fn find_anyhow(err: &anyhow::Error) -> Option<&Error> {
    err.downcast_ref::<Error>().or_else(|| {
        err.chain()
            .take(MAX_CHAIN_DEPTH)
            .find_map(|e| e.downcast_ref::<Error>())
    })
}

/// Code of the first application error held by `err`, else [`Code::Internal`]
pub fn error_code_anyhow(err: &anyhow::Error) -> Code {
    find_anyhow(err).map_or(Code::Internal, Error::code)
}

/// Message of the first application error held by `err`, else [`INTERNAL_MESSAGE`]
pub fn error_message_anyhow(err: &anyhow::Error) -> String {
    find_anyhow(err).map_or_else(|| INTERNAL_MESSAGE.to_owned(), |e| e.message().to_owned())
}

/// Like [`classify`](crate::classify), for an `anyhow::Error`
pub fn classify_anyhow(err: &anyhow::Error) -> Classified {
    Classified::from_found(find_anyhow(err))
}
