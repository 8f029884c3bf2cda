//! Envelope writer: serialize a [`Body`] and hand it to a [`Sink`].
//!
//! # Design
//! Every helper builds a body and delegates to [`write`]. `write` serializes
//! first, so a payload with no JSON form fails before the sink is touched.
//! Once the bytes exist the sink sees the content type, then the optional
//! status, then the body. Headers and status must precede body bytes on
//! every HTTP sink, and this order is fixed for all helpers.
//!
//! The status argument is `None` to keep the sink's default (200 for a fresh
//! response). There is no retry; each call is one synchronous write.

use http::{header, HeaderValue, StatusCode};
use serde::Serialize;
use tracing::trace;

use crate::envelope::Body;
use crate::error::WriteError;
use crate::sink::Sink;

/// Content type set on every envelope response.
pub const CONTENT_TYPE: &str = "application/json; charset=utf-8";

/// Write `body` to `sink`, optionally overriding the HTTP status.
pub fn write<S, T>(
    sink: &mut S,
    body: &Body<T>,
    status: Option<StatusCode>,
) -> Result<(), WriteError>
where
    S: Sink + ?Sized,
    T: Serialize,
{
    let bytes = serde_json::to_vec(body)?;

    sink.set_header(header::CONTENT_TYPE, HeaderValue::from_static(CONTENT_TYPE));
    if let Some(status) = status {
        sink.set_status(status);
    }

    trace!(
        status = %body.status,
        http_status = status.map(|s| s.as_u16()),
        bytes = bytes.len(),
        "writing envelope"
    );
    sink.write_body(&bytes)?;
    Ok(())
}

/// Write a `success` envelope carrying `data`.
pub fn success<S, T>(sink: &mut S, data: T, status: Option<StatusCode>) -> Result<(), WriteError>
where
    S: Sink + ?Sized,
    T: Serialize,
{
    write(sink, &Body::success(data), status)
}

/// Write a `fail` envelope carrying `data`, usually a map from field name to
/// what is wrong with it.
pub fn fail<S, T>(sink: &mut S, data: T, status: Option<StatusCode>) -> Result<(), WriteError>
where
    S: Sink + ?Sized,
    T: Serialize,
{
    write(sink, &Body::fail(data), status)
}

/// Write an `error` envelope with only a message.
pub fn error<S>(
    sink: &mut S,
    message: impl Into<String>,
    status: Option<StatusCode>,
) -> Result<(), WriteError>
where
    S: Sink + ?Sized,
{
    write(sink, &Body::<()>::error(message), status)
}

/// Write an `error` envelope with a message and application code.
pub fn error_code<S>(
    sink: &mut S,
    message: impl Into<String>,
    code: i64,
    status: Option<StatusCode>,
) -> Result<(), WriteError>
where
    S: Sink + ?Sized,
{
    write(sink, &Body::<()>::error(message).with_code(code), status)
}

/// Write an `error` envelope with a message, application code and optional
/// data. `None` leaves `data` off the wire; a zero `code` is omitted too.
pub fn error_code_data<S, T>(
    sink: &mut S,
    message: impl Into<String>,
    code: i64,
    data: Option<T>,
    status: Option<StatusCode>,
) -> Result<(), WriteError>
where
    S: Sink + ?Sized,
    T: Serialize,
{
    write(sink, &Body::error_with(message, code, data), status)
}
