use async_trait::async_trait;
#[cfg(test)]
use std::collections::HashMap;
use bytes::Bytes;

use bottlecap_mediatype::{MediaType, MediaTypeList};

use crate::parser::{ParseError, ParseResult, ParsedBody, Parser};

/// Parser for HTML form submissions.
///
/// Declares both `application/x-www-form-urlencoded` and
/// `multipart/form-data`; decoding delegates to the transport-level form
/// codec (`serde_urlencoded`).
#[derive(Debug, Clone)]
pub struct FormParser {
	media_types: MediaTypeList,
}

impl FormParser {
	pub fn new() -> Self {
		Self {
			media_types: MediaTypeList::from(vec![
				MediaType::new("application", "x-www-form-urlencoded"),
				MediaType::new("multipart", "form-data"),
			]),
		}
	}
}

impl Default for FormParser {
	fn default() -> Self {
		Self::new()
	}
}

#[async_trait]
impl Parser for FormParser {
	fn media_types(&self) -> &MediaTypeList {
		&self.media_types
	}

	async fn parse(&self, body: &Bytes) -> ParseResult<ParsedBody> {
		let fields: Vec<(String, String)> = serde_urlencoded::from_bytes(body)
			.map_err(|e| ParseError::InvalidForm(e.to_string()))?;
		Ok(ParsedBody::Form(fields.into_iter().collect()))
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[tokio::test]
	async fn test_parse_fields() {
		let parser = FormParser::new();
		let body = Bytes::from("a=b&hello=world");

		let result = parser.parse(&body).await.unwrap();
		let fields = result.as_form().unwrap();
		assert_eq!(fields.get("a"), Some(&"b".to_string()));
		assert_eq!(fields.get("hello"), Some(&"world".to_string()));
	}

	#[tokio::test]
	async fn test_empty_body() {
		let parser = FormParser::new();
		let result = parser.parse(&Bytes::new()).await.unwrap();
		assert_eq!(result.as_form().map(HashMap::len), Some(0));
	}

	#[test]
	fn test_media_types() {
		let parser = FormParser::new();
		assert_eq!(parser.media_types()[0], "application/x-www-form-urlencoded");
		assert_eq!(parser.media_types()[1], "multipart/form-data");
	}
}
