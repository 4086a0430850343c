//! # BottleCap
//!
//! Content negotiation for Rust web services.
//!
//! BottleCap models `type/subtype;param=value` media type expressions, ranks
//! them by RFC 7231 precedence, and wraps request handlers in a pipeline that
//! selects a body parser from `Content-Type` and a response renderer from
//! `Accept` out of each route's declared strategy sets.
//!
//! The crate is a facade over the workspace members:
//!
//! - [`mediatype`] — [`MediaType`], [`MediaTypeList`], precedence and matching
//! - [`exception`] — the error taxonomy and its wire payload
//! - [`http`] — the transport boundary: buffered [`Request`] and [`Response`]
//! - [`parsers`] — request body parsers (JSON, form, octet-stream)
//! - [`renderers`] — response body renderers (JSON, plain text, HTML)
//! - [`negotiation`] — the per-request pipeline tying them together
//!
//! ## Example
//!
//! ```
//! use async_trait::async_trait;
//! use bottlecap::{
//! 	Handler, JSONParser, JSONRenderer, NegotiationConfig, NegotiationContext, Negotiator,
//! 	Request, Response, Result,
//! };
//! use serde_json::json;
//!
//! struct EchoParsed;
//!
//! #[async_trait]
//! impl Handler for EchoParsed {
//! 	async fn handle(&self, _: &Request, context: &NegotiationContext) -> Result<Response> {
//! 		let body = context.parsed_body.as_ref().and_then(|body| body.as_json());
//! 		Ok(Response::ok().with_value(json!({ "received": body })))
//! 	}
//! }
//!
//! # tokio_test::block_on(async {
//! let negotiator = Negotiator::new(
//! 	NegotiationConfig::new()
//! 		.parser(JSONParser::new())
//! 		.renderer(JSONRenderer::new()),
//! );
//!
//! let request = Request::builder()
//! 	.header("Accept", "application/json")
//! 	.header("Content-Type", "application/json")
//! 	.body(r#"{"hello":"world"}"#)
//! 	.build()
//! 	.unwrap();
//!
//! let response = negotiator.dispatch(&request, &EchoParsed).await;
//! assert_eq!(response.status.as_u16(), 200);
//! assert_eq!(
//! 	response.content_type(),
//! 	Some("application/json; charset=UTF-8")
//! );
//! # });
//! ```

pub use bottlecap_exception as exception;
pub use bottlecap_http as http;
pub use bottlecap_mediatype as mediatype;
pub use bottlecap_negotiation as negotiation;
pub use bottlecap_parsers as parsers;
pub use bottlecap_renderers as renderers;

pub use bottlecap_exception::{Error, ErrorPayload, Result};
pub use bottlecap_http::{Body, Request, Response};
pub use bottlecap_mediatype::{MatchOptions, MediaType, MediaTypeList, ParamValue, ParseError};
pub use bottlecap_negotiation::{
	ContentNegotiation, Handler, NegotiationConfig, NegotiationContext, Negotiator,
};
pub use bottlecap_parsers::{FormParser, JSONParser, OctetStreamParser, ParsedBody, Parser};
pub use bottlecap_renderers::{HTMLRenderer, JSONRenderer, PlainTextRenderer, Renderer};
