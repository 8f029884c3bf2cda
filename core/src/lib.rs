//! JSend-style response envelopes for HTTP APIs.
//!
//! # Overview
//! A response body is wrapped in an envelope whose `status` is one of
//! `success`, `fail` or `error`:
//!
//! ```json
//! {"status":"success","data":{"id":"foo","email":"foo@example.com"}}
//! {"status":"fail","data":{"email":"email can not be blank"}}
//! {"status":"error","message":"User Not Found","code":404}
//! ```
//!
//! # Design
//! - [`Body`] is the envelope as plain data; it holds no I/O.
//! - [`Sink`] abstracts the response output. `http::Response<Vec<u8>>`
//!   implements it, so the writer stays framework-agnostic.
//! - [`write`] and its helpers serialize, then set the content type, then the
//!   optional status, then the body. A payload that cannot be serialized
//!   leaves the sink untouched.
//!
//! ```
//! use http::{Response, StatusCode};
//!
//! let mut response: Response<Vec<u8>> = Response::new(Vec::new());
//! jsend::success(&mut response, ["foo@example.com"], None).unwrap();
//!
//! assert_eq!(response.status(), StatusCode::OK);
//! assert_eq!(
//!     response.body().as_slice(),
//!     br#"{"status":"success","data":["foo@example.com"]}"#
//! );
//! ```

pub mod envelope;
pub mod error;
pub mod sink;
pub mod writer;

pub use envelope::{Body, Status, STATUS_ERROR, STATUS_FAIL, STATUS_SUCCESS};
pub use error::WriteError;
pub use sink::Sink;
pub use writer::{error, error_code, error_code_data, fail, success, write, CONTENT_TYPE};
