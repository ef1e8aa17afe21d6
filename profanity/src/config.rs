//! Engine configuration.
//!
//! [`Options`] mirrors the option object accepted by the persistence hook:
//!
//! | option | effect |
//! |--------|--------|
//! | `fields` | restrict the document policy to named fields, or one `[parent, child]` pair |
//! | `maxFlags` | enables flag/blacklist bookkeeping |
//! | `obscureSymbol` | masking symbol for the obscure strategy |
//! | `forbiddenList` | overrides the default term list |
//! | `replacementsList` | enables the replace strategy |
//! | `replace` | selects the replace strategy explicitly |
//!
//! Options are validated once by [`Options::build`]; the resulting
//! [`Profanity`] handle is immutable.

use serde::{de::Error as _, Deserialize, Deserializer};
use serde_json::Value;

use crate::{
    engine::{self, ObscureConfig, Pass, Purified, ReplaceConfig, RewriteStrategy, TermSet},
    error::{Error, Result},
    terms::DEFAULT_REPLACEMENTS,
};

/// Which part of a record the document policy may read and rewrite.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum FieldSelector {
    /// Every field of the record.
    #[default]
    Whole,
    /// The named top-level fields.
    Named(Vec<String>),
    /// `record[parent][child]` only.
    Nested { parent: String, child: String },
}

impl FieldSelector {
    /// Builds a selector from a list of names; an empty list selects everything.
    pub fn named<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let names: Vec<String> = names.into_iter().map(Into::into).collect();
        if names.is_empty() {
            Self::Whole
        } else {
            Self::Named(names)
        }
    }

    /// Selects `record[parent][child]`.
    pub fn nested(parent: impl Into<String>, child: impl Into<String>) -> Self {
        Self::Nested {
            parent: parent.into(),
            child: child.into(),
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum FieldsOption {
    One(String),
    Many(Vec<FieldEntry>),
}

#[derive(Deserialize)]
#[serde(untagged)]
enum FieldEntry {
    Name(String),
    Pair(String, String),
}

/// Splits `"parent.child"` into a pair.
fn dotted_pair(name: &str) -> Option<FieldSelector> {
    let (parent, child) = name.split_once('.')?;
    Some(FieldSelector::nested(parent, child))
}

/// Accepts `"name"`, `"parent.child"`, `["a", "b", ...]` (top-level names),
/// `["parent.child"]` and `[["parent", "child"]]`.
///
/// A pair must be the only entry; mixing it with other names is an error.
fn deserialize_fields<'de, D>(deserializer: D) -> std::result::Result<FieldSelector, D::Error>
where
    D: Deserializer<'de>,
{
    let entries = match Option::<FieldsOption>::deserialize(deserializer)? {
        None => return Ok(FieldSelector::Whole),
        Some(FieldsOption::One(name)) => vec![FieldEntry::Name(name)],
        Some(FieldsOption::Many(entries)) => entries,
    };

    match entries.as_slice() {
        [FieldEntry::Pair(parent, child)] => return Ok(FieldSelector::nested(parent, child)),
        [FieldEntry::Name(name)] => {
            if let Some(pair) = dotted_pair(name) {
                return Ok(pair);
            }
        }
        _ => {}
    }

    let mut names = Vec::with_capacity(entries.len());
    for entry in entries {
        match entry {
            FieldEntry::Name(name) if !name.contains('.') => names.push(name),
            FieldEntry::Name(name) => {
                return Err(D::Error::custom(format!(
                    "nested field `{name}` must be the only entry in `fields`"
                )))
            }
            FieldEntry::Pair(parent, child) => {
                return Err(D::Error::custom(format!(
                    "nested field `{parent}.{child}` must be the only entry in `fields`"
                )))
            }
        }
    }
    Ok(FieldSelector::named(names))
}

/// Caller-facing configuration, deserializable from the hook's option object.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct Options {
    #[serde(default, deserialize_with = "deserialize_fields")]
    fields: FieldSelector,
    #[serde(default)]
    max_flags: Option<u32>,
    #[serde(default)]
    obscure_symbol: Option<char>,
    #[serde(default)]
    forbidden_list: Option<Vec<String>>,
    #[serde(default)]
    replacements_list: Option<Vec<String>>,
    #[serde(default)]
    replace: bool,
}

impl Options {
    /// Default options: whole-record scope, default terms, obscure with `*`,
    /// no bookkeeping.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses a JSON option object.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Parses an already-decoded option object.
    pub fn from_value(value: Value) -> Result<Self> {
        Ok(serde_json::from_value(value)?)
    }

    #[must_use]
    pub fn with_fields(mut self, fields: FieldSelector) -> Self {
        self.fields = fields;
        self
    }

    /// Enables bookkeeping; `0` disables it again.
    #[must_use]
    pub fn with_max_flags(mut self, max_flags: u32) -> Self {
        self.max_flags = Some(max_flags);
        self
    }

    #[must_use]
    pub fn with_obscure_symbol(mut self, symbol: char) -> Self {
        self.obscure_symbol = Some(symbol);
        self
    }

    #[must_use]
    pub fn with_forbidden_list<I, S>(mut self, terms: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.forbidden_list = Some(terms.into_iter().map(Into::into).collect());
        self
    }

    /// Sets a replacements list, which also selects the replace strategy.
    #[must_use]
    pub fn with_replacements_list<I, S>(mut self, replacements: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.replacements_list = Some(replacements.into_iter().map(Into::into).collect());
        self
    }

    #[must_use]
    pub fn with_replace(mut self, replace: bool) -> Self {
        self.replace = replace;
        self
    }

    pub fn fields(&self) -> &FieldSelector {
        &self.fields
    }

    /// Returns the bookkeeping threshold, or `None` when bookkeeping is off.
    pub fn max_flags(&self) -> Option<u32> {
        self.max_flags.filter(|max| *max > 0)
    }

    /// Validates the options and compiles an engine.
    pub fn build(&self) -> Result<Profanity> {
        let terms = match &self.forbidden_list {
            Some(list) => TermSet::new(list)?,
            None => TermSet::defaults()?,
        };

        let strategy = if self.replace || self.replacements_list.is_some() {
            let config = match (&self.forbidden_list, &self.replacements_list) {
                (Some(_), Some(replacements)) => {
                    ReplaceConfig::paired(&terms, replacements.iter().cloned())?
                }
                (None, Some(pool)) => ReplaceConfig::pool(pool.iter().cloned())?,
                (_, None) => ReplaceConfig::pool(DEFAULT_REPLACEMENTS.iter().copied())?,
            };
            RewriteStrategy::Replace(config)
        } else {
            let symbol = self.obscure_symbol.unwrap_or(ObscureConfig::DEFAULT_SYMBOL);
            if is_word_char(symbol) {
                return Err(Error::InvalidObscureSymbol { symbol });
            }
            RewriteStrategy::Obscure(ObscureConfig::new().with_symbol(symbol))
        };

        Ok(Profanity::new(terms, strategy))
    }

    /// Validates the options and builds a document policy from them.
    #[cfg(feature = "document")]
    pub fn into_policy(self) -> Result<crate::document::DocumentPolicy> {
        let engine = self.build()?;
        Ok(crate::document::DocumentPolicy::new(
            engine,
            self.fields,
            self.max_flags,
        ))
    }
}

/// Characters that join words under Unicode `\b`. Masking with one would let
/// the masked word match again.
fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

/// A configured engine: a term list plus one rewrite strategy.
///
/// The handle is immutable and `Send + Sync`; share it freely.
#[derive(Clone, Debug)]
pub struct Profanity {
    terms: TermSet,
    strategy: RewriteStrategy,
}

impl Profanity {
    pub fn new(terms: TermSet, strategy: RewriteStrategy) -> Self {
        Self { terms, strategy }
    }

    /// Engine with the default term list and the obscure strategy.
    pub fn with_defaults() -> Result<Self> {
        Options::new().build()
    }

    pub fn terms(&self) -> &TermSet {
        &self.terms
    }

    pub fn strategy(&self) -> &RewriteStrategy {
        &self.strategy
    }

    /// See [`engine::scan`].
    pub fn scan(&self, value: &Value) -> Vec<String> {
        engine::scan(value, &self.terms)
    }

    /// Scans a single string.
    pub fn scan_str(&self, text: &str) -> Vec<String> {
        self.scan(&Value::String(text.to_owned()))
    }

    /// See [`engine::purify`].
    pub fn purify(&self, value: &Value) -> Purified<Value> {
        engine::purify(value, &self.terms, &self.strategy)
    }

    /// Purifies a single string.
    pub fn purify_str(&self, text: &str) -> Purified<String> {
        let (value, matches) = self.purify(&Value::String(text.to_owned())).into_parts();
        let value = match value {
            Value::String(text) => text,
            other => other.to_string(),
        };
        Purified { value, matches }
    }

    pub(crate) fn pass(&self) -> Pass<'_> {
        Pass::new(&self.terms, &self.strategy)
    }
}
