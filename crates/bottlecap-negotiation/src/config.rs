//! Per-route negotiation configuration.

use std::sync::Arc;

use bottlecap_parsers::Parser;
use bottlecap_renderers::Renderer;

/// The strategy sets a route declares, resolved once at registration time.
///
/// Configuration, not per-request state: a single config is shared by every
/// request dispatched through the route.
///
/// # Examples
///
/// ```
/// use bottlecap_negotiation::NegotiationConfig;
/// use bottlecap_parsers::JSONParser;
/// use bottlecap_renderers::JSONRenderer;
///
/// let config = NegotiationConfig::new()
/// 	.parser(JSONParser::new())
/// 	.renderer(JSONRenderer::new());
///
/// assert_eq!(config.parser_classes.len(), 1);
/// assert!(config.render_errors);
/// ```
#[derive(Clone)]
pub struct NegotiationConfig {
	/// Parsers to choose from; no match for the request content type means
	/// `415 Unsupported Media Type`.
	pub parser_classes: Vec<Arc<dyn Parser>>,
	/// Renderers to choose from; no match for the `Accept` header means
	/// `406 Not Acceptable` unless a mismatch renderer is set.
	pub renderer_classes: Vec<Arc<dyn Renderer>>,
	/// Fallback renderer used when the `Accept` header matches none of the
	/// declared renderers, avoiding a hard 406.
	pub mismatch_renderer_class: Option<Arc<dyn Renderer>>,
	/// Render error responses through the negotiated renderer instead of
	/// returning them as plain structured payloads.
	pub render_errors: bool,
}

impl Default for NegotiationConfig {
	fn default() -> Self {
		Self::new()
	}
}

impl NegotiationConfig {
	pub fn new() -> Self {
		Self {
			parser_classes: Vec::new(),
			renderer_classes: Vec::new(),
			mismatch_renderer_class: None,
			render_errors: true,
		}
	}

	pub fn parser(mut self, parser: impl Parser + 'static) -> Self {
		self.parser_classes.push(Arc::new(parser));
		self
	}

	pub fn renderer(mut self, renderer: impl Renderer + 'static) -> Self {
		self.renderer_classes.push(Arc::new(renderer));
		self
	}

	pub fn mismatch_renderer(mut self, renderer: impl Renderer + 'static) -> Self {
		self.mismatch_renderer_class = Some(Arc::new(renderer));
		self
	}

	pub fn render_errors(mut self, render_errors: bool) -> Self {
		self.render_errors = render_errors;
		self
	}
}
