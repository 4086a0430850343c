use async_trait::async_trait;
use bytes::Bytes;
use serde_json::Value;

use bottlecap_mediatype::{MediaType, MediaTypeList};

use crate::renderer::{RenderResult, Renderer};
use crate::text::text_bytes;

/// HTML renderer for `text/html` responses.
///
/// The markup is the handler's to produce; this renderer only encodes it.
/// An absent body stays absent.
#[derive(Debug, Clone)]
pub struct HTMLRenderer {
	media_types: MediaTypeList,
}

impl HTMLRenderer {
	pub fn new() -> Self {
		Self {
			media_types: MediaTypeList::from(MediaType::new("text", "html")),
		}
	}
}

impl Default for HTMLRenderer {
	fn default() -> Self {
		Self::new()
	}
}

#[async_trait]
impl Renderer for HTMLRenderer {
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
	async fn test_render_markup() {
		let renderer = HTMLRenderer::new();
		let rendered = renderer
			.render(Some(&json!("<p>hello</p>")))
			.await
			.unwrap();
		assert_eq!(&rendered.unwrap()[..], b"<p>hello</p>");
	}

	#[tokio::test]
	async fn test_absent_body_stays_absent() {
		let renderer = HTMLRenderer::new();
		assert_eq!(renderer.render(None).await.unwrap(), None);
	}

	#[test]
	fn test_declared_media_types() {
		let renderer = HTMLRenderer::new();
		assert_eq!(renderer.media_types()[0], "text/html");
	}
}
