use axum::Json;
use axum::response::{IntoResponse, Response};

use crate::ConnectError;

impl IntoResponse for ConnectError {
    fn into_response(self) -> Response {
        let status = self.code().http_status();
        (status, Json(self)).into_response()
    }
}
