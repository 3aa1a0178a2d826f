use std::error::Error as StdError;

use axum::body::Body;
use axum::response::{IntoResponse, Response};

use crate::render_anyhow;

/// Error wrapper that renders through [`render_anyhow`] when returned from a handler
///
/// Any `std::error::Error` converts with `?`. For `anyhow::Error` use
/// `.map_err(HttpError::new)`; application errors attached with
/// `.context(..)` keep their code.
#[derive(Debug)]
pub struct HttpError(anyhow::Error);

impl HttpError {
    /// Wrap an error for rendering
    pub fn new(err: impl Into<anyhow::Error>) -> Self {
        Self(err.into())
    }
}

impl<E> From<E> for HttpError
where
    E: StdError + Send + Sync + 'static,
{
    fn from(err: E) -> Self {
        Self(anyhow::Error::new(err))
    }
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        let (parts, body) = render_anyhow(&self.0).into_parts();
        Response::from_parts(parts, Body::from(body))
    }
}
