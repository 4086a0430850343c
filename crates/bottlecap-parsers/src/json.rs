use async_trait::async_trait;
use bytes::Bytes;
use serde_json::Value;

use bottlecap_mediatype::{MediaType, MediaTypeList};

use crate::parser::{ParseError, ParseResult, ParsedBody, Parser};

/// JSON parser for `application/json` request bodies.
///
/// An empty body decodes to [`Value::Null`]; anything else must be valid
/// JSON, and the decoder's message is preserved for the error detail.
#[derive(Debug, Clone)]
pub struct JSONParser {
	media_types: MediaTypeList,
}

impl JSONParser {
	pub fn new() -> Self {
		Self {
			media_types: MediaTypeList::from(MediaType::new("application", "json")),
		}
	}
}

impl Default for JSONParser {
	fn default() -> Self {
		Self::new()
	}
}

#[async_trait]
impl Parser for JSONParser {
	fn media_types(&self) -> &MediaTypeList {
		&self.media_types
	}

	async fn parse(&self, body: &Bytes) -> ParseResult<ParsedBody> {
		if body.is_empty() {
			return Ok(ParsedBody::Json(Value::Null));
		}
		serde_json::from_slice::<Value>(body)
			.map(ParsedBody::Json)
			.map_err(|e| ParseError::InvalidJson(e.to_string()))
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[tokio::test]
	async fn test_valid_body() {
		let parser = JSONParser::new();
		let body = Bytes::from(r#"{"name": "test", "value": 123}"#);

		let result = parser.parse(&body).await.unwrap();
		let value = result.as_json().unwrap();
		assert_eq!(value["name"], "test");
		assert_eq!(value["value"], 123);
	}

	#[tokio::test]
	async fn test_invalid_body() {
		let parser = JSONParser::new();
		let result = parser.parse(&Bytes::from("{001010101")).await;
		assert!(matches!(result, Err(ParseError::InvalidJson(_))));
	}

	#[tokio::test]
	async fn test_empty_body_is_null() {
		let parser = JSONParser::new();
		let result = parser.parse(&Bytes::new()).await.unwrap();
		assert_eq!(result, ParsedBody::Json(Value::Null));
	}

	#[test]
	fn test_media_types() {
		let parser = JSONParser::new();
		assert_eq!(parser.media_types()[0], "application/json");
	}
}
