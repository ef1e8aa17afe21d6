//! Term compilation and read-only traversal.
//!
//! A [`TermSet`] compiles its terms into a single case-insensitive alternation
//! bounded by word boundaries. At any position the first listed term that
//! matches wins, and matches never overlap.

use regex::{Regex, RegexBuilder};
use serde_json::Value;

use crate::{
    error::{Error, Result},
    terms::DEFAULT_FORBIDDEN_TERMS,
};

/// An immutable, compiled list of forbidden terms.
///
/// Terms are stored lowercase in the order given. Cloning is cheap; the
/// compiled pattern is shared.
#[derive(Clone, Debug)]
pub struct TermSet {
    terms: Vec<String>,
    pattern: Option<Regex>,
}

/// One occurrence of a term inside a string.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct TermMatch {
    /// Position of the matched term in the term list.
    pub(crate) index: usize,
    /// Byte range of the occurrence.
    pub(crate) start: usize,
    pub(crate) end: usize,
}

impl TermSet {
    /// Compiles a custom term list.
    ///
    /// Empty terms are rejected. An empty list is allowed and never matches.
    pub fn new<I, S>(terms: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let terms = terms
            .into_iter()
            .enumerate()
            .map(|(index, term)| {
                let term = term.as_ref().trim();
                if term.is_empty() {
                    Err(Error::EmptyTerm { index })
                } else {
                    Ok(term.to_lowercase())
                }
            })
            .collect::<Result<Vec<_>>>()?;

        if terms.is_empty() {
            return Ok(Self {
                terms,
                pattern: None,
            });
        }

        // One capture group per term, so the winning alternative identifies the term.
        let alternation = terms
            .iter()
            .map(|term| format!("({})", regex::escape(term)))
            .collect::<Vec<_>>()
            .join("|");
        let pattern = RegexBuilder::new(&format!(r"\b(?:{alternation})\b"))
            .case_insensitive(true)
            .build()?;

        Ok(Self {
            terms,
            pattern: Some(pattern),
        })
    }

    /// Compiles [`DEFAULT_FORBIDDEN_TERMS`].
    pub fn defaults() -> Result<Self> {
        Self::new(DEFAULT_FORBIDDEN_TERMS)
    }

    /// Returns the terms in configured order.
    pub fn terms(&self) -> &[String] {
        &self.terms
    }

    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// Returns the term at `index`.
    pub(crate) fn term(&self, index: usize) -> &str {
        &self.terms[index]
    }

    /// Finds every occurrence in `text`, left to right.
    pub(crate) fn find_iter<'t>(&'t self, text: &'t str) -> impl Iterator<Item = TermMatch> + 't {
        self.pattern
            .iter()
            .flat_map(move |pattern| pattern.captures_iter(text))
            .filter_map(|captures| {
                let whole = captures.get(0)?;
                let index = captures
                    .iter()
                    .skip(1)
                    .position(|group| group.is_some())?;
                Some(TermMatch {
                    index,
                    start: whole.start(),
                    end: whole.end(),
                })
            })
    }

    /// Returns `true` if `text` contains any term.
    pub fn is_match(&self, text: &str) -> bool {
        self.pattern
            .as_ref()
            .is_some_and(|pattern| pattern.is_match(text))
    }
}

/// Collects every forbidden term in `value`, in traversal order.
///
/// Record values are visited in key order and sequence elements by index, at
/// any depth. Duplicates are kept. Values that are neither text, sequences nor
/// records contribute nothing.
pub fn scan(value: &Value, terms: &TermSet) -> Vec<String> {
    let mut found = Vec::new();
    scan_into(value, terms, &mut found);
    found
}

fn scan_into(value: &Value, terms: &TermSet, found: &mut Vec<String>) {
    match value {
        Value::String(text) => {
            found.extend(
                terms
                    .find_iter(text)
                    .map(|m| terms.term(m.index).to_owned()),
            );
        }
        Value::Array(items) => {
            for item in items {
                scan_into(item, terms, found);
            }
        }
        Value::Object(record) => {
            for item in record.values() {
                scan_into(item, terms, found);
            }
        }
        Value::Null | Value::Bool(_) | Value::Number(_) => {}
    }
}
