//! # BottleCap HTTP
//!
//! The transport boundary the negotiation core works against: a buffered
//! [`Request`] carrying raw header strings and a raw body, and a [`Response`]
//! whose [`Body`] distinguishes renderable structured values from
//! pre-encoded bytes.
//!
//! The surrounding server owns connections, routing and timeouts; nothing in
//! this crate performs I/O.

use thiserror::Error;

pub mod request;
pub mod response;

pub use request::{Request, RequestBuilder};
pub use response::{Body, Response};

pub type Result<T> = std::result::Result<T, Error>;

/// Failure to assemble a request from raw parts.
#[derive(Debug, Clone, Error)]
pub enum Error {
	#[error("invalid URI: {0}")]
	InvalidUri(String),

	#[error("invalid header name or value: {0}")]
	InvalidHeader(String),
}
