//! Structural rewriting of values.
//!
//! The purifier never mutates its input: it builds a copy with the same shape,
//! rewriting each match inside text leaves and passing every other leaf
//! through unchanged.

use serde_json::Value;

use super::{
    scanner::TermSet,
    strategy::{RewriteStrategy, Rewriter},
};

/// A rewritten value together with the terms that were found in it.
#[derive(Clone, Debug, PartialEq)]
pub struct Purified<T> {
    /// The rewritten copy.
    pub value: T,
    /// Matched terms in discovery order, duplicates included.
    pub matches: Vec<String>,
}

impl<T> Purified<T> {
    /// Returns `true` if nothing was rewritten.
    pub fn is_clean(&self) -> bool {
        self.matches.is_empty()
    }

    /// Consumes the result, returning the value and matches.
    pub fn into_parts(self) -> (T, Vec<String>) {
        (self.value, self.matches)
    }
}

/// Rewrites every forbidden term in `value` using `strategy`.
///
/// Matches are reported in the order [`crate::scan`] would report them.
pub fn purify(value: &Value, terms: &TermSet, strategy: &RewriteStrategy) -> Purified<Value> {
    let mut pass = Pass::new(terms, strategy);
    let value = pass.value(value);
    Purified {
        value,
        matches: pass.finish(),
    }
}

/// A single purification run.
///
/// Several values can be fed through one pass; replacement pools advance
/// across all of them and matches accumulate in feed order.
#[derive(Debug)]
pub(crate) struct Pass<'a> {
    terms: &'a TermSet,
    rewriter: Rewriter<'a>,
    matches: Vec<String>,
}

impl<'a> Pass<'a> {
    pub(crate) fn new(terms: &'a TermSet, strategy: &'a RewriteStrategy) -> Self {
        Self {
            terms,
            rewriter: strategy.rewriter(),
            matches: Vec::new(),
        }
    }

    /// Returns a purified copy of `value`.
    pub(crate) fn value(&mut self, value: &Value) -> Value {
        match value {
            Value::String(text) => Value::String(self.text(text)),
            Value::Array(items) => Value::Array(items.iter().map(|item| self.value(item)).collect()),
            Value::Object(record) => Value::Object(
                record
                    .iter()
                    .map(|(key, item)| (key.clone(), self.value(item)))
                    .collect(),
            ),
            other => other.clone(),
        }
    }

    fn text(&mut self, text: &str) -> String {
        let mut out = String::with_capacity(text.len());
        let mut last = 0;
        for found in self.terms.find_iter(text) {
            out.push_str(&text[last..found.start]);
            out.push_str(
                &self
                    .rewriter
                    .rewrite(found.index, &text[found.start..found.end]),
            );
            self.matches.push(self.terms.term(found.index).to_owned());
            last = found.end;
        }
        out.push_str(&text[last..]);
        out
    }

    /// Ends the pass, returning all matches seen.
    pub(crate) fn finish(self) -> Vec<String> {
        self.matches
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::purify;
    use crate::engine::{scan, ReplaceConfig, RewriteStrategy, TermSet};

    fn terms() -> TermSet {
        TermSet::defaults().unwrap()
    }

    #[test]
    fn obscures_each_match_in_place() {
        let result = purify(
            &json!("boob damn something poo"),
            &terms(),
            &RewriteStrategy::default(),
        );
        assert_eq!(result.value, json!("b**b d**n something p*o"));
        assert_eq!(result.matches, vec!["boob", "damn", "poo"]);
    }

    #[test]
    fn preserves_case_of_outer_characters() {
        let result = purify(&json!("Damn"), &terms(), &RewriteStrategy::default());
        assert_eq!(result.value, json!("D**n"));
    }

    #[test]
    fn clean_input_is_returned_unchanged() {
        let input = json!({ "a": ["fine", 1, null], "b": { "c": "all good" } });
        let result = purify(&input, &terms(), &RewriteStrategy::default());
        assert!(result.is_clean());
        assert_eq!(result.value, input);
    }

    #[test]
    fn input_is_not_mutated() {
        let input = json!({ "text": "crap" });
        let result = purify(&input, &terms(), &RewriteStrategy::default());
        assert_eq!(input, json!({ "text": "crap" }));
        assert_eq!(result.value, json!({ "text": "c**p" }));
    }

    #[test]
    fn pool_cycles_across_leaves_in_discovery_order() {
        let strategy = RewriteStrategy::Replace(ReplaceConfig::pool(["one", "two"]).unwrap());
        let result = purify(&json!(["damn", { "x": "crap poo" }]), &terms(), &strategy);
        assert_eq!(result.value, json!(["one", { "x": "two one" }]));
    }

    #[test]
    fn matches_agree_with_scan() {
        let input = json!({
            "bar": { "foo": "something boob", "bar": { "foo": "test poo" } },
            "test": "something damn"
        });
        let result = purify(&input, &terms(), &RewriteStrategy::default());
        assert_eq!(result.matches, scan(&input, &terms()));
        assert_eq!(result.matches, vec!["boob", "poo", "damn"]);
    }
}
