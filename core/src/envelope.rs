//! The tri-state response envelope.
//!
//! # Design
//! `Body` mirrors the wire shape field for field. Optional parts are skipped
//! on serialization when they hold their zero value (`None`, `""`, `0`) and
//! default to that zero value on deserialization, so a body read back from
//! the wire compares equal to the one that was written.
//!
//! A success or fail body built through its constructor always holds
//! `Some(data)`, which keeps the `data` key on the wire even when the payload
//! itself serializes to `null`. On the way back in, a present `data` key is
//! always `Some`, including `"data":null`; only a missing key reads as `None`.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

pub const STATUS_SUCCESS: &str = "success";
pub const STATUS_FAIL: &str = "fail";
pub const STATUS_ERROR: &str = "error";

/// Outcome of a request as reported in the envelope's `status` field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    /// The request was handled and `data` holds the result.
    Success,
    /// The request was rejected; `data` explains what the caller must fix.
    Fail,
    /// The server could not handle the request; `message` says why.
    Error,
}

impl Status {
    pub fn as_str(self) -> &'static str {
        match self {
            Status::Success => STATUS_SUCCESS,
            Status::Fail => STATUS_FAIL,
            Status::Error => STATUS_ERROR,
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A response envelope.
///
/// `message` and `code` only carry meaning for [`Status::Error`]; nothing
/// stops a caller from setting them on other statuses.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
pub struct Body<T = Value> {
    pub status: Status,
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "present")]
    pub data: Option<T>,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub message: String,
    #[serde(default, skip_serializing_if = "is_zero")]
    pub code: i64,
}

fn is_zero(code: &i64) -> bool {
    *code == 0
}

/// Reads a key that is on the wire as `Some`, even when its value is `null`.
fn present<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    T::deserialize(deserializer).map(Some)
}

impl<T> Body<T> {
    pub fn success(data: T) -> Self {
        Self {
            status: Status::Success,
            data: Some(data),
            message: String::new(),
            code: 0,
        }
    }

    pub fn fail(data: T) -> Self {
        Self {
            status: Status::Fail,
            data: Some(data),
            message: String::new(),
            code: 0,
        }
    }

    /// An error body with only a message.
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            status: Status::Error,
            data: None,
            message: message.into(),
            code: 0,
        }
    }

    /// An error body with every optional part spelled out. A `code` of zero
    /// is left off the wire.
    pub fn error_with(message: impl Into<String>, code: i64, data: Option<T>) -> Self {
        Self {
            status: Status::Error,
            data,
            message: message.into(),
            code,
        }
    }

    pub fn with_code(mut self, code: i64) -> Self {
        self.code = code;
        self
    }

    pub fn with_data(mut self, data: T) -> Self {
        self.data = Some(data);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn status_serializes_lowercase() {
        assert_eq!(serde_json::to_value(Status::Success).unwrap(), json!("success"));
        assert_eq!(serde_json::to_value(Status::Fail).unwrap(), json!("fail"));
        assert_eq!(serde_json::to_value(Status::Error).unwrap(), json!("error"));
    }

    #[test]
    fn status_display_matches_wire_string() {
        assert_eq!(Status::Success.to_string(), STATUS_SUCCESS);
        assert_eq!(Status::Fail.to_string(), STATUS_FAIL);
        assert_eq!(Status::Error.to_string(), STATUS_ERROR);
    }

    #[test]
    fn unknown_status_is_rejected() {
        let result: Result<Body, _> = serde_json::from_str(r#"{"status":"ok"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn success_body_has_only_status_and_data() {
        let json = serde_json::to_value(Body::success(vec!["foo@example.com"])).unwrap();
        assert_eq!(json, json!({"status": "success", "data": ["foo@example.com"]}));
    }

    #[test]
    fn success_with_unit_keeps_null_data() {
        let json = serde_json::to_string(&Body::success(())).unwrap();
        assert_eq!(json, r#"{"status":"success","data":null}"#);
    }

    #[test]
    fn fail_body_has_only_status_and_data() {
        let json = serde_json::to_value(Body::fail(json!({"id": "id can not be blank"}))).unwrap();
        assert_eq!(
            json,
            json!({"status": "fail", "data": {"id": "id can not be blank"}})
        );
    }

    #[test]
    fn error_body_omits_code_and_data() {
        let json = serde_json::to_value(Body::<Value>::error("m")).unwrap();
        assert_eq!(json, json!({"status": "error", "message": "m"}));
    }

    #[test]
    fn error_body_with_code() {
        let json = serde_json::to_value(Body::<Value>::error("m").with_code(42)).unwrap();
        assert_eq!(json, json!({"status": "error", "message": "m", "code": 42}));
    }

    #[test]
    fn error_with_zero_code_omits_code() {
        let body = Body::error_with("m", 0, Some(json!("details")));
        let json = serde_json::to_value(body).unwrap();
        assert_eq!(json, json!({"status": "error", "message": "m", "data": "details"}));
    }

    #[test]
    fn error_with_empty_message_omits_message() {
        let json = serde_json::to_value(Body::<Value>::error("")).unwrap();
        assert_eq!(json, json!({"status": "error"}));
    }

    #[test]
    fn minimal_body_deserializes_to_zero_values() {
        let body: Body = serde_json::from_str(r#"{"status":"error"}"#).unwrap();
        assert_eq!(body.status, Status::Error);
        assert!(body.data.is_none());
        assert!(body.message.is_empty());
        assert_eq!(body.code, 0);
    }

    #[test]
    fn full_error_body_roundtrips() {
        let body = Body::error_with("error", 10001, Some(json!("error data")));
        let json = serde_json::to_string(&body).unwrap();
        let back: Body = serde_json::from_str(&json).unwrap();
        assert_eq!(back, body);
    }

    #[test]
    fn typed_payload_roundtrips() {
        #[derive(Debug, PartialEq, Serialize, Deserialize)]
        struct User {
            id: String,
            email: String,
        }

        let body = Body::success(User {
            id: "foo".to_string(),
            email: "foo@example.com".to_string(),
        });
        let json = serde_json::to_string(&body).unwrap();
        let back: Body<User> = serde_json::from_str(&json).unwrap();
        assert_eq!(back, body);
    }

    #[test]
    fn null_data_reads_back_as_present() {
        let body: Body = serde_json::from_str(r#"{"status":"success","data":null}"#).unwrap();
        assert_eq!(body.status, Status::Success);
        assert_eq!(body.data, Some(Value::Null));
    }

    #[test]
    fn null_data_survives_a_second_write() {
        let first = serde_json::to_string(&Body::success(Value::Null)).unwrap();
        let back: Body = serde_json::from_str(&first).unwrap();
        let again = serde_json::to_string(&back).unwrap();
        assert_eq!(again, r#"{"status":"success","data":null}"#);
        assert_eq!(back, Body::success(Value::Null));
    }

    #[test]
    fn unit_payload_roundtrips() {
        let json = serde_json::to_string(&Body::fail(())).unwrap();
        let back: Body<()> = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Body::fail(()));
    }
}
