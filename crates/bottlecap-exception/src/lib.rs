//! # BottleCap Exceptions
//!
//! The error taxonomy shared across the negotiation pipeline.
//!
//! Client errors (4xx) cover everything negotiation can reject about a
//! request: malformed `Accept`/`Content-Type` headers, an unacceptable
//! response format, an unsupported request content type, and a body the
//! selected parser cannot decode. Server errors (5xx) are reserved for
//! handler and rendering failures. Handler-raised responses travel as
//! [`Error::Http`] so their status and payload survive rendering untouched.

use hyper::StatusCode;
use serde::Serialize;
use serde_json::Value;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Clone, Error)]
pub enum Error {
	#[error("The request header '{header}' was malformed")]
	MalformedHeader { header: &'static str },

	#[error("The server could not negotiate response content based on the 'Accept-*' request headers")]
	NotAcceptable,

	#[error("The specified content type for request body is unsupported")]
	UnsupportedMediaType,

	#[error("There was an error parsing the request body")]
	UnparsableBody { detail: String },

	#[error("There was a server error, please try again later")]
	Server { detail: String },

	/// A response-shaped error raised by a handler. Rendered like any other
	/// response, never re-wrapped.
	#[error("HTTP {status}")]
	Http {
		status: StatusCode,
		body: Option<Value>,
	},
}

/// Structured error body, serialized onto the wire as
/// `{"error_code", "error_desc", "status_code", "error_detail"}`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ErrorPayload {
	pub error_code: String,
	pub error_desc: String,
	pub status_code: u16,
	pub error_detail: Option<String>,
}

impl Error {
	pub fn malformed_header(header: &'static str) -> Self {
		Error::MalformedHeader { header }
	}

	pub fn unparsable_body(detail: impl Into<String>) -> Self {
		Error::UnparsableBody {
			detail: detail.into(),
		}
	}

	pub fn server(detail: impl Into<String>) -> Self {
		Error::Server {
			detail: detail.into(),
		}
	}

	pub fn http(status: StatusCode, body: Option<Value>) -> Self {
		Error::Http { status, body }
	}

	pub fn status(&self) -> StatusCode {
		match self {
			Error::MalformedHeader { .. } => StatusCode::BAD_REQUEST,
			Error::NotAcceptable => StatusCode::NOT_ACCEPTABLE,
			Error::UnsupportedMediaType => StatusCode::UNSUPPORTED_MEDIA_TYPE,
			Error::UnparsableBody { .. } => StatusCode::BAD_REQUEST,
			Error::Server { .. } => StatusCode::INTERNAL_SERVER_ERROR,
			Error::Http { status, .. } => *status,
		}
	}

	pub fn error_code(&self) -> &'static str {
		match self {
			Error::MalformedHeader { .. } | Error::UnparsableBody { .. } => "bad_request",
			Error::NotAcceptable => "not_acceptable",
			Error::UnsupportedMediaType => "unsupported_media_type",
			Error::Server { .. } => "server_error",
			Error::Http { .. } => "http_error",
		}
	}

	pub fn detail(&self) -> Option<&str> {
		match self {
			Error::UnparsableBody { detail } | Error::Server { detail } => Some(detail),
			_ => None,
		}
	}

	pub fn is_client_error(&self) -> bool {
		self.status().is_client_error()
	}

	pub fn is_server_error(&self) -> bool {
		self.status().is_server_error()
	}

	/// The structured response body for this error.
	pub fn to_payload(&self) -> ErrorPayload {
		ErrorPayload {
			error_code: self.error_code().to_string(),
			error_desc: self.to_string(),
			status_code: self.status().as_u16(),
			error_detail: self.detail().map(str::to_string),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_error_descriptions() {
		let err = Error::malformed_header("Accept");
		assert_eq!(err.to_string(), "The request header 'Accept' was malformed");

		let err = Error::malformed_header("Content-Type");
		assert_eq!(
			err.to_string(),
			"The request header 'Content-Type' was malformed"
		);

		assert_eq!(
			Error::NotAcceptable.to_string(),
			"The server could not negotiate response content based on the 'Accept-*' request headers"
		);
		assert_eq!(
			Error::UnsupportedMediaType.to_string(),
			"The specified content type for request body is unsupported"
		);
	}

	#[test]
	fn test_status_mapping() {
		assert_eq!(
			Error::malformed_header("Accept").status(),
			StatusCode::BAD_REQUEST
		);
		assert_eq!(Error::NotAcceptable.status(), StatusCode::NOT_ACCEPTABLE);
		assert_eq!(
			Error::UnsupportedMediaType.status(),
			StatusCode::UNSUPPORTED_MEDIA_TYPE
		);
		assert_eq!(
			Error::unparsable_body("broken").status(),
			StatusCode::BAD_REQUEST
		);
		assert_eq!(
			Error::server("boom").status(),
			StatusCode::INTERNAL_SERVER_ERROR
		);
		assert_eq!(
			Error::http(StatusCode::IM_A_TEAPOT, None).status(),
			StatusCode::IM_A_TEAPOT
		);
	}

	#[test]
	fn test_client_server_split() {
		assert!(Error::NotAcceptable.is_client_error());
		assert!(Error::unparsable_body("broken").is_client_error());
		assert!(Error::server("boom").is_server_error());
	}

	#[test]
	fn test_payload_wire_shape() {
		let payload = Error::unparsable_body("expected value at line 1").to_payload();
		let value = serde_json::to_value(&payload).unwrap();
		assert_eq!(value["error_code"], "bad_request");
		assert_eq!(value["error_desc"], "There was an error parsing the request body");
		assert_eq!(value["status_code"], 400);
		assert_eq!(value["error_detail"], "expected value at line 1");

		let payload = Error::NotAcceptable.to_payload();
		let value = serde_json::to_value(&payload).unwrap();
		assert_eq!(value["status_code"], 406);
		assert_eq!(value["error_detail"], Value::Null);
	}
}
