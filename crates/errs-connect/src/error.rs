use std::error::Error as StdError;
use std::fmt;

use errs_core::{Classified, classify};
use serde::Serialize;

use crate::Code;

/// Error returned to Connect clients
///
/// Carries only a code and a message. Serializes to the Connect unary error
/// body, `{"code":"<code>","message":"<message>"}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, thiserror::Error)]
#[error("{code}: {message}")]
pub struct ConnectError {
    code: Code,
    message: String,
}

impl ConnectError {
    /// Create an error from a Connect code and message
    pub fn new(code: Code, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    /// Connect code
    pub const fn code(&self) -> Code {
        self.code
    }

    /// Message sent to the client
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Render the unary error body
    ///
    /// # Errors
    ///
    /// Returns an error if JSON serialization fails
    pub fn to_json(&self) -> serde_json::Result<Vec<u8>> {
        serde_json::to_vec(self)
    }
}

/// Connect code for an application error code
pub const fn code_for(code: errs_core::Code) -> Code {
    match code {
        errs_core::Code::Invalid => Code::InvalidArgument,
        errs_core::Code::Unauthorized => Code::Unauthenticated,
        errs_core::Code::PermissionDenied => Code::PermissionDenied,
        errs_core::Code::NotFound => Code::NotFound,
        errs_core::Code::Conflict => Code::AlreadyExists,
        errs_core::Code::Internal => Code::Internal,
    }
}

/// Build a Connect error from any error, redacting internal messages
pub fn from_error(err: &(dyn StdError + 'static)) -> ConnectError {
    from_classified(&classify(err), err)
}

/// Build a Connect error from an `anyhow::Error`
///
/// Also finds application errors attached with `.context(..)`.
#[cfg(feature = "anyhow")]
pub fn from_anyhow(err: &anyhow::Error) -> ConnectError {
    from_classified(&errs_core::classify_anyhow(err), err)
}

fn from_classified(classified: &Classified, err: &dyn fmt::Display) -> ConnectError {
    if classified.is_internal() {
        tracing::error!(error = %err, "internal error redacted from Connect error");
    } else {
        tracing::debug!(code = %classified.code(), "mapped application error to Connect error");
    }

    ConnectError::new(code_for(classified.code()), classified.message())
}
