//! gRPC status mapping for application errors
//!
//! Converts any error into a [`tonic::Status`] whose code is derived from the
//! first [`errs_core::Error`] in the error's source chain. Internal errors
//! never expose their message to the caller.

#![allow(clippy::must_use_candidate)]

use std::error::Error as StdError;
use std::fmt;

use errs_core::{Classified, Code, classify};
use tonic::Status;

/// gRPC code for an application error code
///
/// [`Code::Conflict`] has no dedicated gRPC mapping and falls through to
/// [`tonic::Code::Internal`].
pub const fn code_for(code: Code) -> tonic::Code {
    match code {
        Code::Invalid => tonic::Code::InvalidArgument,
        Code::Unauthorized => tonic::Code::Unauthenticated,
        Code::PermissionDenied => tonic::Code::PermissionDenied,
        Code::NotFound => tonic::Code::NotFound,
        Code::Internal | Code::Conflict => tonic::Code::Internal,
    }
}

/// Build a gRPC status from any error
///
/// The status carries only a code and message, no details or metadata.
pub fn status_from_error(err: &(dyn StdError + 'static)) -> Status {
    status_from_classified(&classify(err), err)
}

/// Build a gRPC status from an `anyhow::Error`
///
/// Also finds application errors attached with `.context(..)`.
#[cfg(feature = "anyhow")]
pub fn status_from_anyhow(err: &anyhow::Error) -> Status {
    status_from_classified(&errs_core::classify_anyhow(err), err)
}

fn status_from_classified(classified: &Classified, err: &dyn fmt::Display) -> Status {
    if classified.is_internal() {
        tracing::error!(error = %err, "internal error redacted from gRPC status");
    } else {
        tracing::debug!(code = %classified.code(), "mapped application error to gRPC status");
    }

    Status::new(code_for(classified.code()), classified.message())
}

/// Build a gRPC error value from any error
///
/// [`Status`] is itself the error type tonic services return, so this is
/// [`status_from_error`] under the name callers reach for in handlers.
pub fn grpc_error_from_error(err: &(dyn StdError + 'static)) -> Status {
    status_from_error(err)
}

/// Conversion into a gRPC [`Status`] for use with `map_err`
///
/// ```
/// use errs_core::{Code, errorf};
/// use errs_grpc::IntoStatus;
///
/// let result: Result<(), errs_core::Error> = Err(errorf!(Code::NotFound, "no thing with id: {}", 7));
/// let status = result.map_err(IntoStatus::into_status).unwrap_err();
/// assert_eq!(status.code(), tonic::Code::NotFound);
/// ```
pub trait IntoStatus {
    /// Convert into a status, redacting internal errors
    fn into_status(self) -> Status;
}

impl<E> IntoStatus for E
where
    E: StdError + 'static,
{
    fn into_status(self) -> Status {
        status_from_error(&self)
    }
}
