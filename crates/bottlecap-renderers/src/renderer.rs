//! The renderer strategy trait.

use async_trait::async_trait;
use bytes::Bytes;
use serde_json::Value;
use thiserror::Error;

use bottlecap_mediatype::{MediaType, MediaTypeList};

/// Failure to encode a response body.
#[derive(Debug, Clone, Error)]
pub enum RenderError {
	#[error("failed to encode response body as JSON: {0}")]
	Json(String),
}

pub type RenderResult<T> = std::result::Result<T, RenderError>;

/// A response body encoding strategy.
///
/// Renderers are stateless and shared across requests; their declared media
/// types are normalized once at construction and never change afterwards.
#[async_trait]
pub trait Renderer: Send + Sync {
	/// Media types this renderer can produce.
	fn media_types(&self) -> &MediaTypeList;

	/// The media type answered when the client expressed no usable
	/// preference: the first declared one.
	fn default_media_type(&self) -> Option<&MediaType> {
		self.media_types().first()
	}

	/// Charset appended to the outgoing `Content-Type` header, if any.
	fn charset(&self) -> Option<&str> {
		None
	}

	/// Encode the structured body. `None` means the response carried no
	/// body; renderers may answer `None` to leave it absent.
	async fn render(&self, body: Option<&Value>) -> RenderResult<Option<Bytes>>;
}
