//! # BottleCap Media Types
//!
//! Structured media type expressions and RFC 7231 content negotiation
//! primitives for the BottleCap framework.
//!
//! A [`MediaType`] is the parsed form of a single `type/subtype;param=value`
//! expression. A [`MediaTypeList`] is an ordered collection of them, usually
//! built from an `Accept` header, with precedence sorting and best-match
//! search across two lists.
//!
//! ## Example
//!
//! ```
//! use bottlecap_mediatype::{MediaType, MediaTypeList};
//!
//! let accept = MediaTypeList::parse("text/html;q=0.8,application/json").unwrap();
//! let offered = MediaTypeList::parse("application/json").unwrap();
//!
//! let (matched, against) = offered.first_match(&accept).unwrap();
//! assert_eq!(matched, "application/json");
//! assert_eq!(against, "application/json");
//! ```

pub mod list;
pub mod mediatype;

pub use list::MediaTypeList;
pub use mediatype::{MatchOptions, MediaType, ParamValue, ParseError};
