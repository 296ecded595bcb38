//! Comma-separated search expressions with `-` exclusions.
//!
//! A query such as `"strand, -boss, +union"` becomes three terms: `strand`
//! and `union` must appear in a candidate's search text, `boss` must not.
//! Every `+` and `-` inside a token is dropped from its value; only a leading
//! `-` marks the term as negated.

use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

const TERM_SEPARATOR: char = ',';
const JOINED_SEPARATOR: &str = ", ";
const NEGATION: char = '-';
const INCLUSION: char = '+';

/// A single lower-cased search token.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SearchTerm {
    /// Token text without sign characters.
    pub value: String,
    /// Whether matching candidates are excluded.
    pub neg: bool,
}

impl SearchTerm {
    /// Term that must be present.
    pub fn include(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            neg: false,
        }
    }

    /// Term that must be absent.
    pub fn exclude(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            neg: true,
        }
    }

    fn parse(token: &str) -> Self {
        Self {
            value: token.replace([INCLUSION, NEGATION], ""),
            neg: token.starts_with(NEGATION),
        }
    }

    /// Check the term against lower-cased text.
    ///
    /// An empty value occurs in every text, so a bare `-` rejects everything.
    fn accepts(&self, haystack: &str) -> bool {
        haystack.contains(self.value.as_str()) != self.neg
    }
}

impl fmt::Display for SearchTerm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.neg {
            write!(f, "{NEGATION}")?;
        }
        f.write_str(&self.value)
    }
}

/// An ordered list of search terms.
///
/// # Examples
/// ```
/// use atlas_core::SearchQuery;
///
/// let query = SearchQuery::parse("Strand, -BOSS");
/// assert!(query.matches("strand\nlinear"));
/// assert!(!query.matches("strand\nboss rush"));
/// assert_eq!(query.to_string(), "strand, -boss");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SearchQuery {
    terms: Vec<SearchTerm>,
}

impl SearchQuery {
    /// Parse free text into terms, dropping empty tokens.
    pub fn parse(raw: &str) -> Self {
        let terms = raw
            .split(TERM_SEPARATOR)
            .map(|token| token.trim().to_lowercase())
            .filter(|token| !token.is_empty())
            .map(|token| SearchTerm::parse(&token))
            .collect();
        Self { terms }
    }

    /// Wrap already-built terms.
    pub const fn from_terms(terms: Vec<SearchTerm>) -> Self {
        Self { terms }
    }

    /// Terms in query order.
    pub fn terms(&self) -> &[SearchTerm] {
        &self.terms
    }

    /// Report whether the query has no terms.
    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// Decide whether lower-cased `haystack` satisfies every term.
    ///
    /// An empty query matches everything.
    pub fn matches(&self, haystack: &str) -> bool {
        self.terms.iter().all(|term| term.accepts(haystack))
    }

    /// Set the polarity of `value`, appending it when absent.
    ///
    /// # Examples
    /// ```
    /// use atlas_core::SearchQuery;
    ///
    /// let mut query = SearchQuery::parse("strand");
    /// query.toggle("linear", false);
    /// query.toggle("strand", true);
    /// assert_eq!(query.to_string(), "-strand, linear");
    /// ```
    pub fn toggle(&mut self, value: &str, neg: bool) {
        match self.terms.iter_mut().find(|term| term.value == value) {
            Some(term) => term.neg = neg,
            None => self.terms.push(SearchTerm {
                value: value.to_owned(),
                neg,
            }),
        }
    }

    /// Remove every term whose value equals `value`.
    pub fn remove(&mut self, value: &str) {
        self.terms.retain(|term| term.value != value);
    }
}

impl fmt::Display for SearchQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, term) in self.terms.iter().enumerate() {
            if index > 0 {
                f.write_str(JOINED_SEPARATOR)?;
            }
            write!(f, "{term}")?;
        }
        Ok(())
    }
}

impl FromStr for SearchQuery {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::parse(s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("", &[] as &[(&str, bool)])]
    #[case(" , ,", &[] as &[(&str, bool)])]
    #[case("Strand", &[("strand", false)])]
    #[case("-boss, +linear", &[("boss", true), ("linear", false)])]
    #[case("  The-Doctor ,x", &[("thedoctor", false), ("x", false)])]
    #[case("+-union", &[("union", false)])]
    #[case("-+union", &[("union", true)])]
    fn parses_terms(#[case] raw: &str, #[case] expected: &[(&str, bool)]) {
        let query = SearchQuery::parse(raw);
        let actual: Vec<(&str, bool)> = query
            .terms()
            .iter()
            .map(|term| (term.value.as_str(), term.neg))
            .collect();
        assert_eq!(actual, expected);
    }

    #[rstest]
    #[case("", "anything", true)]
    #[case("cem", "cemetery", true)]
    #[case("cem, tower", "cemetery", false)]
    #[case("-boss", "boss rush", false)]
    #[case("-boss", "cemetery", true)]
    #[case("-", "cemetery", false)]
    #[case("+", "cemetery", true)]
    fn matching(#[case] raw: &str, #[case] haystack: &str, #[case] expected: bool) {
        assert_eq!(SearchQuery::parse(raw).matches(haystack), expected);
    }

    #[test]
    fn builds_comma_separated_text() {
        let query = SearchQuery::from_terms(vec![
            SearchTerm::include("union"),
            SearchTerm::exclude("boss"),
        ]);
        assert_eq!(query.to_string(), "union, -boss");
    }

    #[test]
    fn remove_drops_term() {
        let mut query = SearchQuery::parse("a, -b, c");
        query.remove("b");
        assert_eq!(query.to_string(), "a, c");
    }

    #[test]
    fn toggle_keeps_position() {
        let mut query = SearchQuery::parse("a, b");
        query.toggle("a", true);
        assert_eq!(query.to_string(), "-a, b");
    }
}
