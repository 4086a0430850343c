//! Buffered HTTP request representation.

use std::sync::atomic::{AtomicBool, Ordering};

use bytes::Bytes;
use hyper::header::{HeaderName, HeaderValue};
use hyper::{HeaderMap, Method, Uri};

use crate::{Error, Result};

/// An already-buffered HTTP request.
///
/// The transport layer builds one per incoming request and hands it to the
/// negotiation pipeline; the body is fully read before negotiation starts.
///
/// # Examples
///
/// ```
/// use bottlecap_http::Request;
/// use hyper::Method;
///
/// let request = Request::builder()
///     .method(Method::POST)
///     .uri("/echo")
///     .header("Accept", "application/json")
///     .body("{}")
///     .build()
///     .unwrap();
///
/// assert_eq!(request.header("accept"), Some("application/json"));
/// assert_eq!(&request.body[..], b"{}");
/// ```
#[derive(Debug)]
pub struct Request {
	pub method: Method,
	pub uri: Uri,
	pub headers: HeaderMap,
	pub body: Bytes,
	negotiated: AtomicBool,
}

impl Request {
	pub fn builder() -> RequestBuilder {
		RequestBuilder::new()
	}

	/// Header value as a string, if the header is present and valid UTF-8.
	pub fn header(&self, name: &str) -> Option<&str> {
		self.headers.get(name).and_then(|value| value.to_str().ok())
	}

	pub fn path(&self) -> &str {
		self.uri.path()
	}

	/// Claim this request for content negotiation.
	///
	/// Returns `true` on the first call and `false` afterwards; negotiation
	/// must run at most once per request.
	pub fn begin_negotiation(&self) -> bool {
		!self.negotiated.swap(true, Ordering::SeqCst)
	}
}

/// Builder for [`Request`], following the transport-layer convention of
/// collecting raw parts before validation.
#[derive(Debug, Default)]
pub struct RequestBuilder {
	method: Method,
	uri: String,
	headers: Vec<(String, String)>,
	body: Bytes,
}

impl RequestBuilder {
	pub fn new() -> Self {
		Self {
			method: Method::GET,
			uri: "/".to_string(),
			headers: Vec::new(),
			body: Bytes::new(),
		}
	}

	pub fn method(mut self, method: Method) -> Self {
		self.method = method;
		self
	}

	pub fn uri(mut self, uri: impl Into<String>) -> Self {
		self.uri = uri.into();
		self
	}

	pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
		self.headers.push((name.into(), value.into()));
		self
	}

	pub fn body(mut self, body: impl Into<Bytes>) -> Self {
		self.body = body.into();
		self
	}

	pub fn build(self) -> Result<Request> {
		let uri: Uri = self
			.uri
			.parse()
			.map_err(|_| Error::InvalidUri(self.uri.clone()))?;

		let mut headers = HeaderMap::new();
		for (name, value) in self.headers {
			let header_name = HeaderName::from_bytes(name.as_bytes())
				.map_err(|_| Error::InvalidHeader(name.clone()))?;
			let header_value =
				HeaderValue::from_str(&value).map_err(|_| Error::InvalidHeader(name.clone()))?;
			headers.append(header_name, header_value);
		}

		Ok(Request {
			method: self.method,
			uri,
			headers,
			body: self.body,
			negotiated: AtomicBool::new(false),
		})
	}
}
