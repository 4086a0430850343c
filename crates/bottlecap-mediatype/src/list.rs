//! Ordered collections of media types with precedence-aware matching.

use std::fmt;
use std::ops::Deref;

use tracing::trace;

use crate::mediatype::{MatchOptions, MediaType, ParseError};

/// An ordered sequence of [`MediaType`] values, usually built from a
/// comma-separated `Accept` header.
///
/// # Examples
///
/// ```
/// use bottlecap_mediatype::MediaTypeList;
///
/// let accept = MediaTypeList::parse("text/html,application/xml;q=0.9").unwrap();
/// assert_eq!(accept.len(), 2);
/// assert_eq!(accept[0], "text/html");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MediaTypeList {
	items: Vec<MediaType>,
}

impl MediaTypeList {
	pub fn new() -> Self {
		Self::default()
	}

	/// Parse a comma-separated list of media type expressions.
	///
	/// Any element failing to parse fails the whole list.
	pub fn parse(header: &str) -> Result<Self, ParseError> {
		header
			.split(',')
			.map(MediaType::parse)
			.collect::<Result<Vec<_>, _>>()
			.map(|items| Self { items })
	}

	pub fn push(&mut self, media_type: MediaType) {
		self.items.push(media_type);
	}

	/// Elements ordered by RFC 7231 precedence, most preferred first.
	///
	/// The sort is stable: entries of equal precedence keep their relative
	/// input order, so repeated calls over shuffled-but-equivalent inputs
	/// agree on the order of ties.
	pub fn sorted_by_precedence(&self) -> Vec<MediaType> {
		self.sorted_by_precedence_with(MatchOptions::default())
	}

	pub fn sorted_by_precedence_with(&self, options: MatchOptions) -> Vec<MediaType> {
		let mut sorted = self.items.clone();
		sorted.sort_by(|a, b| b.compare_with(a, options));
		sorted
	}

	/// True if any element, visited in precedence order, matches `candidate`.
	pub fn is_match(&self, candidate: &MediaType) -> bool {
		self.is_match_with(candidate, MatchOptions::default())
	}

	pub fn is_match_with(&self, candidate: &MediaType, options: MatchOptions) -> bool {
		self.sorted_by_precedence_with(options)
			.iter()
			.any(|own| own.is_match_with(candidate, options))
	}

	/// Greedy RFC 7231 pairing of `other`'s elements against this list.
	///
	/// Walks `self` in precedence order; each entry claims every not yet
	/// matched element of `other` it is compatible with, and the walk stops
	/// once nothing remains. Pairs are `(candidate, matched_against)` with
	/// candidates taken from `other`. The assignment is deliberately greedy
	/// rather than a globally optimal pairing: the specificity of this
	/// list's entries takes priority over the specificity of `other`'s.
	pub fn best_match(&self, other: &MediaTypeList) -> Vec<(MediaType, MediaType)> {
		self.best_match_with(other, MatchOptions::default())
	}

	pub fn best_match_with(
		&self,
		other: &MediaTypeList,
		options: MatchOptions,
	) -> Vec<(MediaType, MediaType)> {
		let mut matched = Vec::new();
		let mut remaining: Vec<MediaType> = other.items.clone();
		for own in self.sorted_by_precedence_with(options) {
			if remaining.is_empty() {
				break;
			}
			let (hits, misses): (Vec<_>, Vec<_>) = remaining
				.into_iter()
				.partition(|candidate| own.is_match_with(candidate, options));
			for candidate in hits {
				trace!(candidate = %candidate, against = %own, "media type matched");
				matched.push((candidate, own.clone()));
			}
			remaining = misses;
		}
		matched
	}

	/// The first pair from [`MediaTypeList::best_match`], if any.
	pub fn first_match(&self, other: &MediaTypeList) -> Option<(MediaType, MediaType)> {
		self.first_match_with(other, MatchOptions::default())
	}

	pub fn first_match_with(
		&self,
		other: &MediaTypeList,
		options: MatchOptions,
	) -> Option<(MediaType, MediaType)> {
		self.best_match_with(other, options).into_iter().next()
	}
}

impl Deref for MediaTypeList {
	type Target = [MediaType];

	fn deref(&self) -> &Self::Target {
		&self.items
	}
}

impl fmt::Display for MediaTypeList {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		for (index, item) in self.items.iter().enumerate() {
			if index > 0 {
				f.write_str(",")?;
			}
			write!(f, "{}", item)?;
		}
		Ok(())
	}
}

impl From<Vec<MediaType>> for MediaTypeList {
	fn from(items: Vec<MediaType>) -> Self {
		Self { items }
	}
}

impl From<MediaType> for MediaTypeList {
	fn from(item: MediaType) -> Self {
		Self { items: vec![item] }
	}
}

impl FromIterator<MediaType> for MediaTypeList {
	fn from_iter<I: IntoIterator<Item = MediaType>>(iter: I) -> Self {
		Self {
			items: iter.into_iter().collect(),
		}
	}
}

impl IntoIterator for MediaTypeList {
	type Item = MediaType;
	type IntoIter = std::vec::IntoIter<MediaType>;

	fn into_iter(self) -> Self::IntoIter {
		self.items.into_iter()
	}
}

impl<'a> IntoIterator for &'a MediaTypeList {
	type Item = &'a MediaType;
	type IntoIter = std::slice::Iter<'a, MediaType>;

	fn into_iter(self) -> Self::IntoIter {
		self.items.iter()
	}
}
