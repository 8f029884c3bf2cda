//! Bridge from the envelope writer to axum responses.
//!
//! Envelopes are written into an `http::Response<Vec<u8>>` and the buffered
//! body is then handed to axum. If the writer fails, the client gets a
//! plain-text 500 instead of a half-written envelope.

use axum::{
    body::Body,
    http::{Response, StatusCode},
    response::IntoResponse,
};
use serde::Serialize;
use tracing::error;

use jsend::WriteError;

/// A handler result written as a `success` envelope with the default status.
#[derive(Debug, Clone)]
pub struct Success<T>(pub T);

impl<T: Serialize> IntoResponse for Success<T> {
    fn into_response(self) -> axum::response::Response {
        let mut sink: Response<Vec<u8>> = Response::new(Vec::new());
        let written = jsend::success(&mut sink, self.0, None);
        finish(sink, written)
    }
}

pub(crate) fn finish(
    sink: Response<Vec<u8>>,
    written: Result<(), WriteError>,
) -> axum::response::Response {
    match written {
        Ok(()) => sink.map(Body::from),
        Err(err) => {
            error!(error = %err, "failed to write envelope");
            (StatusCode::INTERNAL_SERVER_ERROR, err.to_string()).into_response()
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    #[test]
    fn success_keeps_default_status() {
        let response = Success(vec!["foo@example.com"]).into_response();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers()[axum::http::header::CONTENT_TYPE],
            jsend::CONTENT_TYPE
        );
    }

    #[test]
    fn unserializable_success_falls_back_to_plain_500() {
        let mut data = HashMap::new();
        data.insert(vec![1u8], "bytes are not keys");

        let response = Success(data).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_ne!(
            response
                .headers()
                .get(axum::http::header::CONTENT_TYPE)
                .map(|v| v.as_bytes()),
            Some(jsend::CONTENT_TYPE.as_bytes())
        );
    }
}
