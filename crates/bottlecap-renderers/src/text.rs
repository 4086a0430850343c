use async_trait::async_trait;
use bytes::Bytes;
use serde_json::Value;

use bottlecap_mediatype::{MediaType, MediaTypeList};

use crate::renderer::{RenderResult, Renderer};

/// Plain text renderer for `text/plain` responses.
///
/// String values render as the bare string; any other value renders via its
/// JSON text form.
#[derive(Debug, Clone)]
pub struct PlainTextRenderer {
	media_types: MediaTypeList,
}

impl PlainTextRenderer {
	pub fn new() -> Self {
		Self {
			media_types: MediaTypeList::from(MediaType::new("text", "plain")),
		}
	}
}

impl Default for PlainTextRenderer {
	fn default() -> Self {
		Self::new()
	}
}

pub(crate) fn text_bytes(value: &Value) -> Bytes {
	match value {
		Value::String(text) => Bytes::from(text.clone().into_bytes()),
		other => Bytes::from(other.to_string().into_bytes()),
	}
}

#[async_trait]
impl Renderer for PlainTextRenderer {
	fn media_types(&self) -> &MediaTypeList {
		&self.media_types
	}

	fn charset(&self) -> Option<&str> {
		Some("utf-8")
	}

	async fn render(&self, body: Option<&Value>) -> RenderResult<Option<Bytes>> {
		Ok(body.map(text_bytes))
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use serde_json::json;

	#[tokio::test]
	async fn test_render_string_without_quotes() {
		let renderer = PlainTextRenderer::new();
		let rendered = renderer.render(Some(&json!("hello"))).await.unwrap();
		assert_eq!(&rendered.unwrap()[..], b"hello");
	}

	#[tokio::test]
	async fn test_render_non_string_as_json_text() {
		let renderer = PlainTextRenderer::new();
		let rendered = renderer.render(Some(&json!(42))).await.unwrap();
		assert_eq!(&rendered.unwrap()[..], b"42");
	}

	#[test]
	fn test_declared_media_types() {
		let renderer = PlainTextRenderer::new();
		assert_eq!(renderer.media_types()[0], "text/plain");
	}
}
