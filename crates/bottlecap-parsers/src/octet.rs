use async_trait::async_trait;
use bytes::Bytes;

use bottlecap_mediatype::{MediaType, MediaTypeList};

use crate::parser::{ParseResult, ParsedBody, Parser};

/// Byte passthrough parser for `application/octet-stream`.
///
/// Also the parser of last resort when a request carries a body but no
/// `Content-Type` and the pipeline falls back to guessing octet-stream.
#[derive(Debug, Clone)]
pub struct OctetStreamParser {
	media_types: MediaTypeList,
}

impl OctetStreamParser {
	pub fn new() -> Self {
		Self {
			media_types: MediaTypeList::from(MediaType::new("application", "octet-stream")),
		}
	}
}

impl Default for OctetStreamParser {
	fn default() -> Self {
		Self::new()
	}
}

#[async_trait]
impl Parser for OctetStreamParser {
	fn media_types(&self) -> &MediaTypeList {
		&self.media_types
	}

	async fn parse(&self, body: &Bytes) -> ParseResult<ParsedBody> {
		Ok(ParsedBody::Raw(body.clone()))
	}
}
