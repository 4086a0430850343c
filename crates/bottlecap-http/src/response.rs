//! HTTP response representation with a renderable body.

use bytes::Bytes;
use hyper::header::{self, HeaderName, HeaderValue};
use hyper::{HeaderMap, StatusCode};
use serde_json::Value;

/// Response body in one of three states.
///
/// `Value` bodies are structured data waiting for a negotiated renderer;
/// `Raw` bodies are already encoded and pass through rendering untouched.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum Body {
	#[default]
	Empty,
	Value(Value),
	Raw(Bytes),
}

impl Body {
	pub fn is_empty(&self) -> bool {
		matches!(self, Body::Empty)
	}

	pub fn as_value(&self) -> Option<&Value> {
		match self {
			Body::Value(value) => Some(value),
			_ => None,
		}
	}
}

/// HTTP response handed back through the negotiation pipeline.
///
/// # Examples
///
/// ```
/// use bottlecap_http::Response;
/// use hyper::StatusCode;
/// use serde_json::json;
///
/// let response = Response::ok().with_value(json!([1, 2, 3]));
/// assert_eq!(response.status, StatusCode::OK);
/// assert_eq!(&response.body_bytes()[..], b"[1,2,3]");
/// ```
#[derive(Debug, Clone)]
pub struct Response {
	pub status: StatusCode,
	pub headers: HeaderMap,
	pub body: Body,
}

impl Response {
	pub fn new(status: StatusCode) -> Self {
		Self {
			status,
			headers: HeaderMap::new(),
			body: Body::Empty,
		}
	}

	pub fn ok() -> Self {
		Self::new(StatusCode::OK)
	}

	/// Set a structured body for a negotiated renderer to encode.
	pub fn with_value(mut self, value: Value) -> Self {
		self.body = Body::Value(value);
		self
	}

	/// Set an already-encoded body.
	pub fn with_raw(mut self, body: impl Into<Bytes>) -> Self {
		self.body = Body::Raw(body.into());
		self
	}

	pub fn with_header(mut self, name: &str, value: &str) -> Self {
		if let Ok(header_name) = HeaderName::from_bytes(name.as_bytes()) {
			if let Ok(header_value) = HeaderValue::from_str(value) {
				self.headers.insert(header_name, header_value);
			}
		}
		self
	}

	pub fn content_type(&self) -> Option<&str> {
		self.headers
			.get(header::CONTENT_TYPE)
			.and_then(|value| value.to_str().ok())
	}

	/// The body as wire bytes: `Raw` verbatim, `Value` as compact JSON,
	/// `Empty` as nothing.
	pub fn body_bytes(&self) -> Bytes {
		match &self.body {
			Body::Empty => Bytes::new(),
			Body::Raw(bytes) => bytes.clone(),
			Body::Value(value) => Bytes::from(serde_json::to_vec(value).unwrap_or_default()),
		}
	}
}

impl Default for Response {
	fn default() -> Self {
		Self::ok()
	}
}

impl From<Value> for Response {
	fn from(value: Value) -> Self {
		Response::ok().with_value(value)
	}
}

impl From<bottlecap_exception::Error> for Response {
	fn from(error: bottlecap_exception::Error) -> Self {
		use bottlecap_exception::Error;

		match error {
			Error::Http { status, body } => {
				let response = Response::new(status);
				match body {
					Some(value) => response.with_value(value),
					None => response,
				}
			}
			other => {
				let payload =
					serde_json::to_value(other.to_payload()).unwrap_or(Value::Null);
				Response::new(other.status())
					.with_value(payload)
					.with_header("Content-Type", "application/json")
			}
		}
	}
}
