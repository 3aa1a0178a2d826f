//! JSON HTTP error responses for application errors
//!
//! [`render_error`] turns any error into a response with a mapped status and
//! a `{"code": ..., "message": ...}` body. Internal errors, including every
//! error that is not an [`errs_core::Error`], are rendered as
//! `500 {"code":"internal","message":"internal error"}`.

#![allow(clippy::must_use_candidate)]

mod body;
#[cfg(feature = "axum")]
mod response;

use std::error::Error as StdError;
use std::fmt;

use bytes::Bytes;
use errs_core::{Classified, Code, classify};
use http::header::{CONTENT_TYPE, HeaderValue, X_CONTENT_TYPE_OPTIONS};
use http::{Response, StatusCode};

pub use body::ErrorResponse;
#[cfg(feature = "axum")]
pub use response::HttpError;

/// Content type of rendered error bodies
pub const JSON_CONTENT_TYPE: &str = "application/json; charset=utf-8";

/// HTTP status for an application error code
///
/// [`Code::Conflict`] has no dedicated HTTP mapping and falls through to
/// `500 Internal Server Error`.
pub const fn status_for(code: Code) -> StatusCode {
    match code {
        Code::Invalid => StatusCode::BAD_REQUEST,
        Code::Unauthorized => StatusCode::UNAUTHORIZED,
        Code::PermissionDenied => StatusCode::FORBIDDEN,
        Code::NotFound => StatusCode::NOT_FOUND,
        Code::Internal | Code::Conflict => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

/// Render any error as a JSON error response
pub fn render_error(err: &(dyn StdError + 'static)) -> Response<Bytes> {
    render_classified(&classify(err), err)
}

/// Render an `anyhow::Error` as a JSON error response
///
/// Also finds application errors attached with `.context(..)`.
#[cfg(feature = "anyhow")]
pub fn render_anyhow(err: &anyhow::Error) -> Response<Bytes> {
    render_classified(&errs_core::classify_anyhow(err), err)
}

fn render_classified(classified: &Classified, err: &dyn fmt::Display) -> Response<Bytes> {
    if classified.is_internal() {
        tracing::error!(error = %err, "internal error redacted from HTTP response");
    } else {
        tracing::debug!(code = %classified.code(), "mapped application error to HTTP response");
    }

    let body = ErrorResponse::new(classified.code(), classified.message());
    match body.encode() {
        Ok(bytes) => {
            let mut response = Response::new(Bytes::from(bytes));
            *response.status_mut() = status_for(classified.code());
            response
                .headers_mut()
                .insert(CONTENT_TYPE, HeaderValue::from_static(JSON_CONTENT_TYPE));
            response
        }
        Err(e) => encoding_failure(&e),
    }
}

/// Plain-text 500 carrying the encoder's own message
fn encoding_failure(err: &serde_json::Error) -> Response<Bytes> {
    tracing::error!(error = %err, "failed to encode error response");

    let mut response = Response::new(Bytes::from(format!("{err}\n")));
    *response.status_mut() = StatusCode::INTERNAL_SERVER_ERROR;
    let headers = response.headers_mut();
    headers.insert(CONTENT_TYPE, HeaderValue::from_static("text/plain; charset=utf-8"));
    headers.insert(X_CONTENT_TYPE_OPTIONS, HeaderValue::from_static("nosniff"));
    response
}

#[cfg(test)]
mod tests {
    use anyhow::Context;
    use errs_core::errorf;

    use super::*;

    #[derive(Debug, thiserror::Error)]
    #[error("another super secret error message")]
    struct Foreign;

    fn body_of(response: &Response<Bytes>) -> ErrorResponse {
        serde_json::from_slice(response.body()).unwrap()
    }

    #[test]
    fn maps_every_code() {
        let expected = [
            (Code::Internal, 500),
            (Code::NotFound, 404),
            (Code::Invalid, 400),
            (Code::Unauthorized, 401),
            (Code::PermissionDenied, 403),
            (Code::Conflict, 500),
        ];

        for (code, status) in expected {
            assert_eq!(status_for(code).as_u16(), status, "code {code}");
        }
    }

    #[test]
    fn invalid() {
        let response = render_error(&errorf!(Code::Invalid, "bad request: {}", "cheese is required"));
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(response.headers()[CONTENT_TYPE], JSON_CONTENT_TYPE);
        assert_eq!(
            &response.body()[..],
            br#"{"code":"invalid","message":"bad request: cheese is required"}"#
        );
    }

    #[test]
    fn unauthorized() {
        let response = render_error(&errorf!(Code::Unauthorized, "invalid jwt: {}", "expired"));
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
        assert_eq!(body_of(&response), ErrorResponse::new(Code::Unauthorized, "invalid jwt: expired"));
    }

    #[test]
    fn permission_denied() {
        let response = render_error(&errorf!(
            Code::PermissionDenied,
            "only spongebob or patrick can use the conch"
        ));
        assert_eq!(response.status(), StatusCode::FORBIDDEN);
        assert_eq!(
            body_of(&response),
            ErrorResponse::new(Code::PermissionDenied, "only spongebob or patrick can use the conch")
        );
    }

    #[test]
    fn not_found() {
        let response = render_error(&errorf!(Code::NotFound, "no thing with id: {}", "0"));
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(body_of(&response), ErrorResponse::new(Code::NotFound, "no thing with id: 0"));
    }

    #[test]
    fn conflict_falls_back_to_internal_status() {
        let response = render_error(&errorf!(Code::Conflict, "thing already exists"));
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body_of(&response), ErrorResponse::new(Code::Conflict, "thing already exists"));
    }

    #[test]
    fn internal_message_is_redacted() {
        let response = render_error(&errorf!(Code::Internal, "super secret error message"));
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(&response.body()[..], br#"{"code":"internal","message":"internal error"}"#);
    }

    #[test]
    fn foreign_error_is_internal() {
        let response = render_error(&Foreign);
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body_of(&response), ErrorResponse::new(Code::Internal, "internal error"));
        assert!(!String::from_utf8_lossy(response.body()).contains("secret"));
    }

    #[test]
    fn wrapped_error_keeps_code() {
        let err = Err::<(), _>(errorf!(Code::NotFound, "no thing with id: {}", 7))
            .context("loading thing")
            .context("handling request")
            .unwrap_err();
        let response = render_error(&*err);
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(body_of(&response), ErrorResponse::new(Code::NotFound, "no thing with id: 7"));
    }

    #[cfg(feature = "anyhow")]
    #[test]
    fn context_value_keeps_code() {
        let err = Err::<(), _>(std::io::Error::other("row missing"))
            .context(errorf!(Code::NotFound, "no thing with id: {}", 7))
            .context("handling request")
            .unwrap_err();

        let response = render_anyhow(&err);
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(
            &response.body()[..],
            br#"{"code":"not_found","message":"no thing with id: 7"}"#
        );
    }

    #[test]
    fn encoding_failure_is_plain_text() {
        let err = <serde_json::Error as serde::ser::Error>::custom("boom");
        let response = encoding_failure(&err);
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(response.headers()[CONTENT_TYPE], "text/plain; charset=utf-8");
        assert_eq!(response.headers()[X_CONTENT_TYPE_OPTIONS], "nosniff");
        assert_eq!(&response.body()[..], b"boom\n");
    }
}
