//! The dispatch pipeline wiring negotiation around a handler.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::{debug, warn};

use bottlecap_exception::{Error, Result};
use bottlecap_http::{Body, Request, Response};
use bottlecap_mediatype::{MediaType, MediaTypeList};

use crate::config::NegotiationConfig;
use crate::context::NegotiationContext;
use crate::negotiation::ContentNegotiation;

/// A request handler dispatched through the negotiation pipeline.
///
/// The context argument carries everything negotiation decided: the parsed
/// body, the selected parser and renderer, and the response content type.
#[async_trait]
pub trait Handler: Send + Sync {
	async fn handle(&self, request: &Request, context: &NegotiationContext) -> Result<Response>;
}

/// Runs content negotiation before and after a handler.
///
/// One negotiator is built per route from its [`NegotiationConfig`] and shared
/// by every request dispatched through that route; all per-request state lives
/// in the [`NegotiationContext`] created by [`Negotiator::dispatch`].
pub struct Negotiator {
	config: NegotiationConfig,
	negotiation: Arc<ContentNegotiation>,
}

impl Negotiator {
	pub fn new(config: NegotiationConfig) -> Self {
		Self {
			config,
			negotiation: Arc::new(ContentNegotiation::new()),
		}
	}

	pub fn config(&self) -> &NegotiationConfig {
		&self.config
	}

	/// Negotiate, dispatch and render one request.
	///
	/// Every failure funnels through [`Negotiator::handle_exception`], so the
	/// returned response is always fully formed.
	///
	/// # Panics
	///
	/// Panics if negotiation already ran for this request.
	pub async fn dispatch(&self, request: &Request, handler: &dyn Handler) -> Response {
		let mut context = NegotiationContext::begin(request, Arc::clone(&self.negotiation));

		let result = match self.process_request(request, &mut context).await {
			Ok(()) => handler.handle(request, &context).await,
			Err(error) => Err(error),
		};

		match result {
			Ok(response) => match self.render_response(&context, response).await {
				Ok(rendered) => rendered,
				Err(error) => self.handle_exception(&context, error).await,
			},
			Err(error) => self.handle_exception(&context, error).await,
		}
	}

	/// Run the pre-handler half of negotiation, filling `context` in place.
	///
	/// Parses the `Accept` and `Content-Type` headers, selects a renderer and
	/// a parser from the configured strategy sets, and decodes the request
	/// body. The context keeps whatever was decided before a failure, so an
	/// error response can still go through an already-selected renderer.
	pub async fn process_request(
		&self,
		request: &Request,
		context: &mut NegotiationContext,
	) -> Result<()> {
		// which content types are acceptable to the client
		let raw_accept = request.header("accept").unwrap_or("*/*");
		context.request_accept = MediaTypeList::parse(raw_accept)
			.map_err(|_| Error::malformed_header("Accept"))?;

		// which content type the request body claims to be; an empty header
		// counts as absent
		if let Some(raw) = request.header("content-type").filter(|raw| !raw.is_empty()) {
			context.request_content_type =
				Some(MediaType::parse(raw).map_err(|_| Error::malformed_header("Content-Type"))?);
		}

		self.select_renderer(context)?;

		// RFC 7231 section 3.1.1.5 fallback for untyped bodies
		if context.request_content_type.is_none() {
			context.request_content_type = self.negotiation.guess_content_type(&request.body);
		}

		if let Some(content_type) = &context.request_content_type {
			context.parser = self
				.negotiation
				.select_parser(content_type, &self.config.parser_classes);
			if context.parser.is_none() {
				return Err(Error::UnsupportedMediaType);
			}
			debug!(content_type = %content_type, "parser selected");
		}

		if let Some(parser) = &context.parser {
			let parsed = parser
				.parse(&request.body)
				.await
				.map_err(|error| Error::unparsable_body(error.to_string()))?;
			context.parsed_body = Some(parsed);
		}

		Ok(())
	}

	/// A mismatch renderer is the tentative default; any declared renderer
	/// acceptable to the client overrides it. Nothing selected while renderers
	/// were declared is a 406.
	fn select_renderer(&self, context: &mut NegotiationContext) -> Result<()> {
		if let Some(mismatch) = &self.config.mismatch_renderer_class {
			context.renderer = Some(Arc::clone(mismatch));
			context.response_content_type = mismatch.default_media_type().cloned();
		}

		match self
			.negotiation
			.select_renderer(&context.request_accept, &self.config.renderer_classes)
		{
			Some((renderer, content_type)) => {
				context.renderer = Some(renderer);
				context.response_content_type = Some(content_type);
			}
			None => {
				if !self.config.renderer_classes.is_empty() && context.renderer.is_none() {
					return Err(Error::NotAcceptable);
				}
			}
		}

		Ok(())
	}

	/// Run the post-handler half of negotiation.
	///
	/// Without a negotiated renderer the response passes through unchanged.
	/// Otherwise structured bodies are encoded by the renderer, already-encoded
	/// bodies pass through, and the negotiated content type is stamped on the
	/// response with the renderer's charset appended uppercased.
	pub async fn render_response(
		&self,
		context: &NegotiationContext,
		response: Response,
	) -> Result<Response> {
		let Some(renderer) = &context.renderer else {
			return Ok(response);
		};

		let mut response = response;
		match std::mem::take(&mut response.body) {
			Body::Raw(bytes) => response.body = Body::Raw(bytes),
			Body::Value(value) => {
				let rendered = renderer
					.render(Some(&value))
					.await
					.map_err(|error| Error::server(error.to_string()))?;
				response.body = rendered.map_or(Body::Empty, Body::Raw);
			}
			Body::Empty => {
				let rendered = renderer
					.render(None)
					.await
					.map_err(|error| Error::server(error.to_string()))?;
				response.body = rendered.map_or(Body::Empty, Body::Raw);
			}
		}

		if let Some(content_type) = &context.response_content_type {
			let header = match renderer.charset() {
				Some(charset) => {
					format!("{}; charset={}", content_type, charset.to_uppercase())
				}
				None => content_type.to_string(),
			};
			response = response.with_header("Content-Type", &header);
		}

		Ok(response)
	}

	/// Convert a pipeline error into a response.
	///
	/// Handler-raised [`Error::Http`] values keep their status and payload;
	/// negotiation errors carry their structured payload. Either goes through
	/// the selected renderer when one exists and error rendering is on,
	/// falling back to the plain structured response if rendering itself
	/// fails.
	pub async fn handle_exception(&self, context: &NegotiationContext, error: Error) -> Response {
		warn!(status = %error.status(), error = %error, "request failed");
		let response = Response::from(error);

		if !self.config.render_errors || context.renderer.is_none() {
			return response;
		}

		match self.render_response(context, response.clone()).await {
			Ok(rendered) => rendered,
			Err(render_error) => {
				warn!(error = %render_error, "error response could not be rendered");
				response
			}
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use bottlecap_renderers::JSONRenderer;
	use serde_json::json;

	#[tokio::test]
	async fn test_render_response_without_renderer_is_identity() {
		let negotiator = Negotiator::new(NegotiationConfig::new());
		let request = Request::builder().build().unwrap();
		let context = NegotiationContext::begin(&request, Arc::new(ContentNegotiation::new()));

		let response = Response::ok().with_raw("hello");
		let rendered = negotiator.render_response(&context, response).await.unwrap();
		assert_eq!(&rendered.body_bytes()[..], b"hello");
		assert_eq!(rendered.content_type(), None);
	}

	#[tokio::test]
	async fn test_render_response_stamps_content_type() {
		let negotiator = Negotiator::new(NegotiationConfig::new());
		let request = Request::builder().build().unwrap();
		let mut context =
			NegotiationContext::begin(&request, Arc::new(ContentNegotiation::new()));
		context.renderer = Some(Arc::new(JSONRenderer::new()));
		context.response_content_type = Some(MediaType::new("application", "json"));

		let response = Response::ok().with_value(json!({"a": 1}));
		let rendered = negotiator.render_response(&context, response).await.unwrap();
		assert_eq!(&rendered.body_bytes()[..], br#"{"a":1}"#);
		assert_eq!(
			rendered.content_type(),
			Some("application/json; charset=UTF-8")
		);
	}

	#[tokio::test]
	async fn test_handle_exception_unrendered_without_renderer() {
		let negotiator = Negotiator::new(NegotiationConfig::new());
		let request = Request::builder().build().unwrap();
		let context = NegotiationContext::begin(&request, Arc::new(ContentNegotiation::new()));

		let response = negotiator
			.handle_exception(&context, Error::NotAcceptable)
			.await;
		assert_eq!(response.status.as_u16(), 406);
		let value = response.body.as_value().unwrap();
		assert_eq!(value["error_code"], "not_acceptable");
	}
}
