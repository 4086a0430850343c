//! Parsing and comparison of single media type expressions.

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

use indexmap::IndexMap;
use rust_decimal::Decimal;
use thiserror::Error;

/// Failure to parse a media type expression.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
	#[error("media type {0:?} is missing a type/subtype separator")]
	MissingSeparator(String),

	#[error("media type {0:?} has an empty type or subtype")]
	EmptyComponent(String),

	#[error("media type {0:?} uses a wildcard type with a concrete subtype")]
	WildcardMismatch(String),

	#[error("malformed media type parameter {0:?}")]
	MalformedParameter(String),

	#[error("invalid quality value {0:?}")]
	InvalidQuality(String),
}

/// A media type parameter value.
///
/// Values made up entirely of digits are stored as integers so that they
/// round-trip in their native form (`q=1` stays `q=1`); everything else is
/// kept as the raw string.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ParamValue {
	Int(i64),
	Str(String),
}

impl ParamValue {
	fn from_raw(raw: &str) -> Self {
		if !raw.is_empty() && raw.bytes().all(|b| b.is_ascii_digit()) {
			if let Ok(value) = raw.parse::<i64>() {
				return ParamValue::Int(value);
			}
		}
		ParamValue::Str(raw.to_string())
	}

	/// The raw string form, for string-valued parameters.
	pub fn as_str(&self) -> Option<&str> {
		match self {
			ParamValue::Str(value) => Some(value),
			ParamValue::Int(_) => None,
		}
	}

	fn as_decimal(&self) -> Option<Decimal> {
		match self {
			ParamValue::Int(value) => Some(Decimal::from(*value)),
			ParamValue::Str(value) => Decimal::from_str(value).ok(),
		}
	}
}

impl fmt::Display for ParamValue {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			ParamValue::Int(value) => write!(f, "{}", value),
			ParamValue::Str(value) => f.write_str(value),
		}
	}
}

/// Knobs for [`MediaType::compare_with`] and [`MediaType::is_match_with`].
///
/// RFC 7231 treats parameter matching as optional, and callers ranking
/// server-declared types against each other often want quality weights left
/// out of the ordering.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MatchOptions {
	pub ignore_quality: bool,
	pub ignore_parameters: bool,
}

/// A parsed `type/subtype;param=value` media type expression.
///
/// Immutable after construction; formatting a successfully parsed value
/// reproduces the input byte-for-byte, including parameter order.
///
/// # Examples
///
/// ```
/// use bottlecap_mediatype::MediaType;
///
/// let html = MediaType::parse("text/html;level=1;q=0.8").unwrap();
/// assert_eq!(html.type_(), "text");
/// assert_eq!(html.subtype(), "html");
/// assert_eq!(html.to_string(), "text/html;level=1;q=0.8");
/// ```
#[derive(Debug, Clone)]
pub struct MediaType {
	type_: String,
	subtype: String,
	parameters: IndexMap<String, ParamValue>,
}

impl MediaType {
	/// Build a bare media type with no parameters.
	///
	/// The wildcard invariant (`*` type implies `*` subtype) is the caller's
	/// to keep; [`MediaType::parse`] enforces it for untrusted input.
	pub fn new(type_: impl Into<String>, subtype: impl Into<String>) -> Self {
		Self {
			type_: type_.into(),
			subtype: subtype.into(),
			parameters: IndexMap::new(),
		}
	}

	/// Parse a media type expression such as `text/html;level=2;q=0.4`.
	///
	/// A bare `*` is normalized to `*/*`. A wildcard type with a concrete
	/// subtype, a missing type or subtype, and parameters without a key,
	/// `=` or value are all rejected.
	///
	/// # Examples
	///
	/// ```
	/// use bottlecap_mediatype::MediaType;
	///
	/// assert!(MediaType::parse("*/text").is_err());
	/// assert!(MediaType::parse("text").is_err());
	/// assert!(MediaType::parse("text/html;q").is_err());
	/// assert_eq!(MediaType::parse("*").unwrap(), "*/*");
	/// ```
	pub fn parse(value: &str) -> Result<Self, ParseError> {
		let trimmed = value.trim();
		let (full_type, tail) = match trimmed.split_once(';') {
			Some((full_type, tail)) => (full_type, Some(tail)),
			None => (trimmed, None),
		};
		let full_type = if full_type == "*" { "*/*" } else { full_type };

		let (type_, subtype) = full_type
			.split_once('/')
			.ok_or_else(|| ParseError::MissingSeparator(value.to_string()))?;
		if type_.is_empty() || subtype.is_empty() {
			return Err(ParseError::EmptyComponent(value.to_string()));
		}
		// type can only be a wildcard together with subtype
		if type_ == "*" && subtype != "*" {
			return Err(ParseError::WildcardMismatch(value.to_string()));
		}

		let mut parameters = IndexMap::new();
		if let Some(tail) = tail.filter(|tail| !tail.is_empty()) {
			for pair in tail.split(';') {
				let (key, raw) = pair
					.split_once('=')
					.ok_or_else(|| ParseError::MalformedParameter(pair.to_string()))?;
				if key.is_empty() || raw.is_empty() {
					return Err(ParseError::MalformedParameter(pair.to_string()));
				}
				let parsed = ParamValue::from_raw(raw);
				if key == "q" && parsed.as_decimal().is_none() {
					return Err(ParseError::InvalidQuality(raw.to_string()));
				}
				parameters.insert(key.to_string(), parsed);
			}
		}

		Ok(Self {
			type_: type_.to_string(),
			subtype: subtype.to_string(),
			parameters,
		})
	}

	pub fn type_(&self) -> &str {
		&self.type_
	}

	pub fn subtype(&self) -> &str {
		&self.subtype
	}

	/// Parameters in their original insertion order.
	pub fn parameters(&self) -> &IndexMap<String, ParamValue> {
		&self.parameters
	}

	/// The structured syntax suffix of the subtype, per RFC 6839: the text
	/// after the last `+`, e.g. `json` for `vnd/example.v2+json`.
	pub fn suffix(&self) -> Option<&str> {
		self.subtype.rsplit_once('+').map(|(_, suffix)| suffix)
	}

	/// The quality weight carried by the `q` parameter, defaulting to `1`.
	///
	/// Returned as an exact decimal so client-supplied values like `0.7`
	/// order and compare without binary float rounding.
	pub fn quality(&self) -> Decimal {
		self.parameters
			.get("q")
			// the q parameter is validated during parse
			.and_then(ParamValue::as_decimal)
			.unwrap_or(Decimal::ONE)
	}

	/// Well-known codec name for this media type, if any.
	///
	/// # Examples
	///
	/// ```
	/// use bottlecap_mediatype::MediaType;
	///
	/// assert_eq!(MediaType::parse("application/json").unwrap().format(), Some("json"));
	/// assert_eq!(MediaType::parse("vnd/special+json").unwrap().format(), Some("json"));
	/// assert_eq!(MediaType::parse("wtf/world").unwrap().format(), None);
	/// ```
	pub fn format(&self) -> Option<&'static str> {
		let full_type = (self.type_.as_str(), self.subtype.as_str());
		if full_type == ("application", "json") || self.suffix() == Some("json") {
			Some("json")
		} else if full_type == ("application", "xml") || self.suffix() == Some("xml") {
			Some("xml")
		} else if full_type == ("text", "html") {
			Some("html")
		} else if full_type == ("text", "plain") {
			Some("plain")
		} else {
			None
		}
	}

	fn non_q_parameter_count(&self) -> usize {
		self.parameters.keys().filter(|key| key.as_str() != "q").count()
	}

	fn parameters_match(&self, other: &MediaType) -> bool {
		self.non_q_parameter_count() == other.non_q_parameter_count()
			&& self
				.parameters
				.iter()
				.filter(|(key, _)| key.as_str() != "q")
				.all(|(key, value)| other.parameters.get(key) == Some(value))
	}

	/// Rank `self` against `other` by RFC 7231 precedence.
	///
	/// Ascending specificity: a wildcard type loses to a concrete one, then a
	/// wildcard subtype, then whichever side carries fewer non-`q`
	/// parameters, then the lower quality weight. `Greater` means `self` is
	/// the more specific (preferred) of the two.
	pub fn compare(&self, other: &MediaType) -> Ordering {
		self.compare_with(other, MatchOptions::default())
	}

	pub fn compare_with(&self, other: &MediaType, options: MatchOptions) -> Ordering {
		if self.type_ == "*" && other.type_ != "*" {
			return Ordering::Less;
		}
		if self.type_ != "*" && other.type_ == "*" {
			return Ordering::Greater;
		}
		if self.subtype == "*" && other.subtype != "*" {
			return Ordering::Less;
		}
		if self.subtype != "*" && other.subtype == "*" {
			return Ordering::Greater;
		}

		if !options.ignore_parameters {
			match self.non_q_parameter_count().cmp(&other.non_q_parameter_count()) {
				Ordering::Equal => {}
				ordering => return ordering,
			}
		}

		if !options.ignore_quality {
			match self.quality().cmp(&other.quality()) {
				Ordering::Equal => {}
				ordering => return ordering,
			}
		}

		Ordering::Equal
	}

	/// Symmetric compatibility check between two media types.
	///
	/// Types and subtypes must agree or be wildcards on either side. A
	/// quality of `0` on either side never matches, and `self` carrying a
	/// higher quality than `other` is a non-match: when `self` is a
	/// server-declared type, the client's weight must meet it. Non-`q`
	/// parameters must be exactly equal unless ignored.
	pub fn is_match(&self, other: &MediaType) -> bool {
		self.is_match_with(other, MatchOptions::default())
	}

	pub fn is_match_with(&self, other: &MediaType, options: MatchOptions) -> bool {
		if self.type_ != "*" && other.type_ != "*" && self.type_ != other.type_ {
			return false;
		}
		if self.subtype != "*" && other.subtype != "*" && self.subtype != other.subtype {
			return false;
		}

		// q=0 means "not acceptable", per RFC 7231
		if !options.ignore_quality {
			let (own, theirs) = (self.quality(), other.quality());
			if own.is_zero() || theirs.is_zero() || own > theirs {
				return false;
			}
		}

		if !options.ignore_parameters && !self.parameters_match(other) {
			return false;
		}

		true
	}
}

impl fmt::Display for MediaType {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}/{}", self.type_, self.subtype)?;
		for (key, value) in &self.parameters {
			write!(f, ";{}={}", key, value)?;
		}
		Ok(())
	}
}

impl FromStr for MediaType {
	type Err = ParseError;

	fn from_str(value: &str) -> Result<Self, Self::Err> {
		Self::parse(value)
	}
}

impl PartialEq for MediaType {
	fn eq(&self, other: &Self) -> bool {
		self.to_string() == other.to_string()
	}
}

impl Eq for MediaType {}

impl Hash for MediaType {
	fn hash<H: Hasher>(&self, state: &mut H) {
		self.to_string().hash(state);
	}
}

impl PartialEq<str> for MediaType {
	fn eq(&self, other: &str) -> bool {
		self.to_string() == other
	}
}

impl PartialEq<&str> for MediaType {
	fn eq(&self, other: &&str) -> bool {
		self.to_string() == *other
	}
}

impl PartialEq<MediaType> for str {
	fn eq(&self, other: &MediaType) -> bool {
		other == self
	}
}

impl PartialEq<MediaType> for &str {
	fn eq(&self, other: &MediaType) -> bool {
		other == *self
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_bare_wildcard_normalized() {
		let any = MediaType::parse("*").unwrap();
		assert_eq!(any.type_(), "*");
		assert_eq!(any.subtype(), "*");
		assert_eq!(any.to_string(), "*/*");
	}

	#[test]
	fn test_empty_components_rejected() {
		assert!(matches!(
			MediaType::parse("text/"),
			Err(ParseError::EmptyComponent(_))
		));
		assert!(matches!(
			MediaType::parse("/html"),
			Err(ParseError::EmptyComponent(_))
		));
	}

	#[test]
	fn test_numeric_parameters_keep_native_form() {
		let parsed = MediaType::parse("text/html;level=1;name=draft").unwrap();
		assert_eq!(parsed.parameters().get("level"), Some(&ParamValue::Int(1)));
		assert_eq!(
			parsed.parameters().get("name"),
			Some(&ParamValue::Str("draft".to_string()))
		);
		assert_eq!(parsed.to_string(), "text/html;level=1;name=draft");
	}

	#[test]
	fn test_invalid_quality_rejected() {
		assert!(matches!(
			MediaType::parse("text/html;q=abc"),
			Err(ParseError::InvalidQuality(_))
		));
	}

	#[test]
	fn test_quality_defaults_to_one() {
		let plain = MediaType::parse("text/plain").unwrap();
		assert_eq!(plain.quality(), Decimal::ONE);

		let weighted = MediaType::parse("text/plain;q=0.7").unwrap();
		assert_eq!(weighted.quality(), Decimal::from_str("0.7").unwrap());
	}

	#[test]
	fn test_format_detection() {
		let format = |value: &str| MediaType::parse(value).unwrap().format();
		assert_eq!(format("application/json"), Some("json"));
		assert_eq!(format("vnd/special+json"), Some("json"));
		assert_eq!(format("application/xml"), Some("xml"));
		assert_eq!(format("vnd/special+xml"), Some("xml"));
		assert_eq!(format("text/html"), Some("html"));
		assert_eq!(format("text/plain"), Some("plain"));
		assert_eq!(format("wtf/world"), None);
	}

	#[test]
	fn test_suffix_after_last_plus() {
		let versioned = MediaType::parse("vnd/example.v2+json").unwrap();
		assert_eq!(versioned.suffix(), Some("json"));
		assert_eq!(MediaType::parse("text/html").unwrap().suffix(), None);
	}

	#[test]
	fn test_string_equality_uses_canonical_form() {
		let html = MediaType::parse("text/html").unwrap();
		assert_eq!(html, "text/html");
		assert_ne!(html, "text/xml");
		assert!("text/html" == html);
	}
}
