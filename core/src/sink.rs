//! The response sink the envelope writer targets.
//!
//! # Design
//! A sink is anything that accepts a header, a status line and body bytes,
//! in that order. Header names, values and status codes come from the `http`
//! crate so they are valid by construction; only the body write can fail.
//!
//! `http::Response<Vec<u8>>` is the built-in sink. It doubles as an in-memory
//! recorder in tests and converts into any framework's response type with
//! `Response::map`.

use std::io;

use http::{HeaderName, HeaderValue, Response, StatusCode};

/// Output side of an HTTP response.
pub trait Sink {
    /// Set a header, replacing any previous value under the same name.
    fn set_header(&mut self, name: HeaderName, value: HeaderValue);

    fn set_status(&mut self, status: StatusCode);

    /// Append bytes to the response body.
    fn write_body(&mut self, bytes: &[u8]) -> io::Result<()>;
}

impl Sink for Response<Vec<u8>> {
    fn set_header(&mut self, name: HeaderName, value: HeaderValue) {
        self.headers_mut().insert(name, value);
    }

    fn set_status(&mut self, status: StatusCode) {
        *self.status_mut() = status;
    }

    fn write_body(&mut self, bytes: &[u8]) -> io::Result<()> {
        self.body_mut().extend_from_slice(bytes);
        Ok(())
    }
}

impl<S: Sink + ?Sized> Sink for &mut S {
    fn set_header(&mut self, name: HeaderName, value: HeaderValue) {
        (**self).set_header(name, value);
    }

    fn set_status(&mut self, status: StatusCode) {
        (**self).set_status(status);
    }

    fn write_body(&mut self, bytes: &[u8]) -> io::Result<()> {
        (**self).write_body(bytes)
    }
}
