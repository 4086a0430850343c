//! # BottleCap Negotiation
//!
//! The per-request content negotiation pipeline.
//!
//! Before a handler runs, [`Negotiator::process_request`] parses the
//! `Accept` and `Content-Type` headers, selects a renderer and a parser from
//! the route's declared strategy sets, and decodes the request body. After
//! the handler returns, [`Negotiator::render_response`] encodes the result
//! through the selected renderer and stamps the negotiated content type.
//! Failures on either side funnel through [`Negotiator::handle_exception`].
//!
//! All per-request state lives in an explicit [`NegotiationContext`] threaded
//! through the pipeline; strategy objects are immutable and shared.
//!
//! ## Example
//!
//! ```
//! use async_trait::async_trait;
//! use bottlecap_exception::Result;
//! use bottlecap_http::{Request, Response};
//! use bottlecap_negotiation::{Handler, NegotiationConfig, NegotiationContext, Negotiator};
//! use bottlecap_renderers::JSONRenderer;
//! use serde_json::json;
//!
//! struct Numbers;
//!
//! #[async_trait]
//! impl Handler for Numbers {
//! 	async fn handle(&self, _: &Request, _: &NegotiationContext) -> Result<Response> {
//! 		Ok(Response::ok().with_value(json!([1, 2, 3])))
//! 	}
//! }
//!
//! # tokio_test::block_on(async {
//! let negotiator = Negotiator::new(NegotiationConfig::new().renderer(JSONRenderer::new()));
//! let request = Request::builder()
//! 	.header("Accept", "application/json")
//! 	.build()
//! 	.unwrap();
//!
//! let response = negotiator.dispatch(&request, &Numbers).await;
//! assert_eq!(&response.body_bytes()[..], b"[1,2,3]");
//! assert_eq!(response.content_type(), Some("application/json; charset=UTF-8"));
//! # });
//! ```

pub mod config;
pub mod context;
pub mod negotiation;
pub mod pipeline;

pub use config::NegotiationConfig;
pub use context::NegotiationContext;
pub use negotiation::ContentNegotiation;
pub use pipeline::{Handler, Negotiator};
