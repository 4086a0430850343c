//! # BottleCap Renderers
//!
//! Response body renderers for the BottleCap negotiation pipeline.
//!
//! A renderer declares the media types it can produce; the pipeline matches
//! them against the client's `Accept` header and encodes the handler's
//! structured result through whichever renderer wins.
//!
//! ## Renderers
//!
//! - **JSONRenderer**: `application/json`
//! - **PlainTextRenderer**: `text/plain`
//! - **HTMLRenderer**: `text/html`

pub mod html;
pub mod json;
pub mod renderer;
pub mod text;

pub use html::HTMLRenderer;
pub use json::JSONRenderer;
pub use renderer::{RenderError, RenderResult, Renderer};
pub use text::PlainTextRenderer;
