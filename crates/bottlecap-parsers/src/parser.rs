//! The parser strategy trait and its result types.

use std::collections::HashMap;

use async_trait::async_trait;
use bytes::Bytes;
use serde_json::Value;
use thiserror::Error;

use bottlecap_mediatype::MediaTypeList;

/// Failure to decode a request body.
#[derive(Debug, Clone, Error)]
pub enum ParseError {
	#[error("invalid JSON: {0}")]
	InvalidJson(String),

	#[error("invalid form body: {0}")]
	InvalidForm(String),
}

pub type ParseResult<T> = std::result::Result<T, ParseError>;

/// A decoded request body.
#[derive(Debug, Clone, PartialEq)]
pub enum ParsedBody {
	Json(Value),
	Form(HashMap<String, String>),
	Raw(Bytes),
}

impl ParsedBody {
	pub fn as_json(&self) -> Option<&Value> {
		match self {
			ParsedBody::Json(value) => Some(value),
			_ => None,
		}
	}

	pub fn as_form(&self) -> Option<&HashMap<String, String>> {
		match self {
			ParsedBody::Form(fields) => Some(fields),
			_ => None,
		}
	}

	pub fn as_raw(&self) -> Option<&Bytes> {
		match self {
			ParsedBody::Raw(bytes) => Some(bytes),
			_ => None,
		}
	}
}

/// A request body decoding strategy.
///
/// Parsers are stateless and shared across requests; their declared media
/// types are normalized once at construction and never change afterwards.
#[async_trait]
pub trait Parser: Send + Sync {
	/// Media types this parser accepts.
	fn media_types(&self) -> &MediaTypeList;

	/// Decode the raw request body.
	async fn parse(&self, body: &Bytes) -> ParseResult<ParsedBody>;
}
