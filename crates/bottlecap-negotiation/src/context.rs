//! Per-request negotiation state.

use std::fmt;
use std::sync::Arc;

use bottlecap_http::Request;
use bottlecap_mediatype::{MediaType, MediaTypeList};
use bottlecap_parsers::{ParsedBody, Parser};
use bottlecap_renderers::Renderer;

use crate::negotiation::ContentNegotiation;

/// Everything negotiation decided about one request.
///
/// Created exactly once per request and handed to the handler by reference;
/// discarded when the request ends. Creating a second context for the same
/// request is a programming error and panics.
pub struct NegotiationContext {
	/// Parser selected from the request's content type, if any.
	pub parser: Option<Arc<dyn Parser>>,
	/// Renderer selected from the `Accept` header, if any.
	pub renderer: Option<Arc<dyn Renderer>>,
	/// Parsed (or guessed) request `Content-Type`.
	pub request_content_type: Option<MediaType>,
	/// Parsed `Accept` header, defaulting to `*/*`.
	pub request_accept: MediaTypeList,
	/// Media type the response will be served as.
	pub response_content_type: Option<MediaType>,
	/// Decoded request body, when a parser ran.
	pub parsed_body: Option<ParsedBody>,
	/// The strategy that produced this context.
	pub negotiation: Arc<ContentNegotiation>,
}

impl NegotiationContext {
	/// Claim `request` for negotiation and return a fresh context.
	///
	/// # Panics
	///
	/// Panics if negotiation already ran for this request.
	pub fn begin(request: &Request, negotiation: Arc<ContentNegotiation>) -> Self {
		assert!(
			request.begin_negotiation(),
			"content negotiation already ran for this request"
		);
		Self {
			parser: None,
			renderer: None,
			request_content_type: None,
			request_accept: MediaTypeList::new(),
			response_content_type: None,
			parsed_body: None,
			negotiation,
		}
	}
}

impl fmt::Debug for NegotiationContext {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("NegotiationContext")
			.field("parser", &self.parser.is_some())
			.field("renderer", &self.renderer.is_some())
			.field("request_content_type", &self.request_content_type)
			.field("request_accept", &self.request_accept)
			.field("response_content_type", &self.response_content_type)
			.field("parsed_body", &self.parsed_body)
			.finish()
	}
}
