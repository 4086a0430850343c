use async_trait::async_trait;
use bytes::Bytes;
use serde_json::Value;

use bottlecap_mediatype::{MediaType, MediaTypeList};

use crate::renderer::{RenderError, RenderResult, Renderer};

/// JSON renderer for `application/json` responses.
#[derive(Debug, Clone)]
pub struct JSONRenderer {
	media_types: MediaTypeList,
}

impl JSONRenderer {
	pub fn new() -> Self {
		Self {
			media_types: MediaTypeList::from(MediaType::new("application", "json")),
		}
	}
}

impl Default for JSONRenderer {
	fn default() -> Self {
		Self::new()
	}
}

#[async_trait]
impl Renderer for JSONRenderer {
	fn media_types(&self) -> &MediaTypeList {
		&self.media_types
	}

	fn charset(&self) -> Option<&str> {
		Some("utf-8")
	}

	async fn render(&self, body: Option<&Value>) -> RenderResult<Option<Bytes>> {
		match body {
			None => Ok(None),
			Some(value) => serde_json::to_vec(value)
				.map(|encoded| Some(Bytes::from(encoded)))
				.map_err(|e| RenderError::Json(e.to_string())),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use serde_json::json;

	#[tokio::test]
	async fn test_render_list() {
		let renderer = JSONRenderer::new();
		let rendered = renderer.render(Some(&json!([1, 2, 3]))).await.unwrap();
		assert_eq!(&rendered.unwrap()[..], b"[1,2,3]");
	}

	#[tokio::test]
	async fn test_absent_body() {
		let renderer = JSONRenderer::new();
		assert_eq!(renderer.render(None).await.unwrap(), None);
	}

	#[test]
	fn test_declared_media_types() {
		let renderer = JSONRenderer::new();
		assert_eq!(renderer.media_types()[0], "application/json");
		assert_eq!(
			renderer.default_media_type().map(ToString::to_string),
			Some("application/json".to_string())
		);
		assert_eq!(renderer.charset(), Some("utf-8"));
	}
}
