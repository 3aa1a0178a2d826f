use std::error::Error as StdError;

use crate::{Code, Error};

/// Message used whenever an error is, or is treated as, internal
pub const INTERNAL_MESSAGE: &str = "internal error";

/// Maximum number of errors inspected along a `source()` chain
pub const MAX_CHAIN_DEPTH: usize = 64;

/// Find the first application [`Error`] in `err` or its `source()` chain
///
/// The error itself is checked first, then each source in turn. Traversal
/// stops after [`MAX_CHAIN_DEPTH`] links so a cyclic `source()` cannot hang.
///
/// Only `source()` links are visited, which leaves two blind spots:
///
/// - A value attached with `anyhow::Context::context` is not a `source()`
///   link of its wrapper. Use [`find_anyhow`](crate::find_anyhow) (feature
///   `anyhow`) on the `anyhow::Error` instead.
/// - A field marked `#[error(transparent)]` forwards `source()` past itself,
///   so the wrapped value is skipped. Use `#[source]` or `#[from]`.
pub fn find<'a>(err: &'a (dyn StdError + 'static)) -> Option<&'a Error> {
    std::iter::successors(Some(err), |&e| e.source())
        .take(MAX_CHAIN_DEPTH)
        .find_map(|e| e.downcast_ref::<Error>())
}

/// Code of the first application error in the chain, else [`Code::Internal`]
pub fn error_code(err: &(dyn StdError + 'static)) -> Code {
    find(err).map_or(Code::Internal, Error::code)
}

/// Message of the first application error in the chain, else [`INTERNAL_MESSAGE`]
pub fn error_message(err: &(dyn StdError + 'static)) -> String {
    find(err).map_or_else(|| INTERNAL_MESSAGE.to_owned(), |e| e.message().to_owned())
}

/// Like [`error_code`], treating an absent error as internal
pub fn error_code_opt(err: Option<&(dyn StdError + 'static)>) -> Code {
    err.map_or(Code::Internal, error_code)
}

/// Like [`error_message`], treating an absent error as internal
pub fn error_message_opt(err: Option<&(dyn StdError + 'static)>) -> String {
    err.map_or_else(|| INTERNAL_MESSAGE.to_owned(), error_message)
}

/// Code and caller-safe message of an error, as seen at a transport boundary
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Classified {
    code: Code,
    message: String,
}

impl Classified {
    /// The classification of anything unrecognized
    pub fn internal() -> Self {
        Self {
            code: Code::Internal,
            message: INTERNAL_MESSAGE.to_owned(),
        }
    }

    pub(crate) fn from_found(found: Option<&Error>) -> Self {
        match found {
            Some(found) if found.code() != Code::Internal => Self {
                code: found.code(),
                message: found.message().to_owned(),
            },
            _ => Self::internal(),
        }
    }

    /// Semantic code
    pub const fn code(&self) -> Code {
        self.code
    }

    /// Message safe to send to callers
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Whether the error was internal and its message redacted
    pub fn is_internal(&self) -> bool {
        self.code == Code::Internal
    }
}

/// Classify an error for a transport boundary
///
/// Internal errors, including everything that is not an application error,
/// always carry [`INTERNAL_MESSAGE`] regardless of their original text.
pub fn classify(err: &(dyn StdError + 'static)) -> Classified {
    Classified::from_found(find(err))
}
