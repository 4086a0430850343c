//! The default negotiation strategy.

use std::sync::Arc;

use tracing::debug;

use bottlecap_mediatype::{MediaType, MediaTypeList};
use bottlecap_parsers::Parser;
use bottlecap_renderers::Renderer;

/// Default content negotiation strategy.
///
/// Selection is purely by declared media type overlap; request bodies and
/// handler results are never inspected.
#[derive(Debug, Clone, Copy, Default)]
pub struct ContentNegotiation;

impl ContentNegotiation {
	pub fn new() -> Self {
		Self
	}

	/// Guess the content type of a request that did not declare one.
	///
	/// Per RFC 7231 section 3.1.1.5 a body of unknown type is assumed to be
	/// `application/octet-stream`; an absent body yields no guess.
	pub fn guess_content_type(&self, body: &[u8]) -> Option<MediaType> {
		if body.is_empty() {
			None
		} else {
			Some(MediaType::new("application", "octet-stream"))
		}
	}

	/// First declared parser whose media types overlap the request's
	/// content type.
	pub fn select_parser(
		&self,
		media_type: &MediaType,
		parsers: &[Arc<dyn Parser>],
	) -> Option<Arc<dyn Parser>> {
		let target = MediaTypeList::from(media_type.clone());
		parsers
			.iter()
			.find(|parser| parser.media_types().first_match(&target).is_some())
			.cloned()
	}

	/// First declared renderer with a media type acceptable to the client,
	/// paired with the renderer's own matched media type.
	///
	/// The matched type is the renderer's declaration, not the client's
	/// expression, so it is what the response's `Content-Type` should carry.
	pub fn select_renderer(
		&self,
		accept: &MediaTypeList,
		renderers: &[Arc<dyn Renderer>],
	) -> Option<(Arc<dyn Renderer>, MediaType)> {
		for renderer in renderers {
			if let Some((_, own)) = renderer.media_types().first_match(accept) {
				debug!(media_type = %own, "renderer matched accept header");
				return Some((Arc::clone(renderer), own));
			}
		}
		None
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use bottlecap_parsers::JSONParser;
	use bottlecap_renderers::JSONRenderer;

	fn media_type(value: &str) -> MediaType {
		MediaType::parse(value).unwrap()
	}

	#[test]
	fn test_guess_content_type() {
		let negotiation = ContentNegotiation::new();
		assert_eq!(
			negotiation.guess_content_type(b"hello"),
			Some(media_type("application/octet-stream"))
		);
		assert_eq!(negotiation.guess_content_type(b""), None);
	}

	#[test]
	fn test_select_parser() {
		let negotiation = ContentNegotiation::new();
		let parsers: Vec<Arc<dyn Parser>> = vec![Arc::new(JSONParser::new())];

		let selected = negotiation.select_parser(&media_type("application/json"), &parsers);
		assert!(selected.is_some());

		let selected = negotiation.select_parser(&media_type("application/json"), &[]);
		assert!(selected.is_none());
	}

	#[test]
	fn test_select_renderer() {
		let negotiation = ContentNegotiation::new();
		let renderers: Vec<Arc<dyn Renderer>> = vec![Arc::new(JSONRenderer::new())];
		let accept = MediaTypeList::from(media_type("application/json"));

		let (_, content_type) = negotiation.select_renderer(&accept, &renderers).unwrap();
		assert_eq!(content_type, "application/json");

		let accept = MediaTypeList::from(media_type("vnd/invalid"));
		assert!(negotiation.select_renderer(&accept, &renderers).is_none());
	}
}
