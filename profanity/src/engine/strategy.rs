//! Rewrite strategies for a single matched word.
//!
//! Strategies are pure string transformations. They do not search text or
//! traverse structures; the purifier hands them one match at a time.

use super::scanner::TermSet;
use crate::error::{Error, Result};

/// Configuration that keeps the first and last character of a match and masks
/// everything in between.
///
/// The mask operates on Unicode scalar values, so the output has as many
/// scalars as the input. Words of one or two scalars are masked entirely.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ObscureConfig {
    symbol: char,
}

impl ObscureConfig {
    /// Default masking symbol.
    pub const DEFAULT_SYMBOL: char = '*';

    /// Constructs a configuration masking with [`ObscureConfig::DEFAULT_SYMBOL`].
    #[must_use]
    pub fn new() -> Self {
        Self {
            symbol: Self::DEFAULT_SYMBOL,
        }
    }

    /// Uses a specific masking symbol.
    #[must_use]
    pub fn with_symbol(mut self, symbol: char) -> Self {
        self.symbol = symbol;
        self
    }

    /// Returns the masking symbol.
    pub fn symbol(&self) -> char {
        self.symbol
    }

    /// Applies the mask to a matched word.
    pub fn apply_to(&self, word: &str) -> String {
        let mut chars: Vec<char> = word.chars().collect();
        let total = chars.len();
        if total <= 2 {
            chars.fill(self.symbol);
            return chars.into_iter().collect();
        }

        for ch in &mut chars[1..total - 1] {
            *ch = self.symbol;
        }
        chars.into_iter().collect()
    }
}

impl Default for ObscureConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// How replacement words are chosen for the replace strategy.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ReplaceConfig {
    /// `replacements[i]` substitutes a match of term `i`.
    Paired(Vec<String>),
    /// Matches take entries from the pool in turn, starting over at the
    /// beginning of every purify call.
    Pool(Vec<String>),
}

impl ReplaceConfig {
    /// Pairs `replacements` with `terms` by position.
    ///
    /// Both lists must have the same length.
    pub fn paired<I, S>(terms: &TermSet, replacements: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let replacements: Vec<String> = replacements.into_iter().map(Into::into).collect();
        if replacements.len() != terms.len() {
            return Err(Error::MismatchedReplacements {
                terms: terms.len(),
                replacements: replacements.len(),
            });
        }
        Ok(Self::Paired(replacements))
    }

    /// Draws replacements from `pool` in discovery order, cycling when exhausted.
    pub fn pool<I, S>(pool: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let pool: Vec<String> = pool.into_iter().map(Into::into).collect();
        if pool.is_empty() {
            return Err(Error::EmptyReplacementPool);
        }
        Ok(Self::Pool(pool))
    }

    fn entries(&self) -> &[String] {
        match self {
            ReplaceConfig::Paired(entries) | ReplaceConfig::Pool(entries) => entries,
        }
    }
}

/// A rewrite strategy for matched words.
///
/// The two strategies are mutually exclusive; an engine uses exactly one.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RewriteStrategy {
    /// Keep the outer characters and mask the interior.
    Obscure(ObscureConfig),
    /// Substitute the whole word.
    Replace(ReplaceConfig),
}

impl RewriteStrategy {
    /// Obscure strategy with the given masking symbol.
    #[must_use]
    pub fn obscure_with(symbol: char) -> Self {
        Self::Obscure(ObscureConfig::new().with_symbol(symbol))
    }

    /// Starts a rewriting session. Pool cursors live in the session, so every
    /// session begins at the first pool entry.
    pub(crate) fn rewriter(&self) -> Rewriter<'_> {
        Rewriter {
            strategy: self,
            cursor: 0,
        }
    }
}

impl Default for RewriteStrategy {
    fn default() -> Self {
        Self::Obscure(ObscureConfig::default())
    }
}

/// Per-call rewriting state.
#[derive(Debug)]
pub(crate) struct Rewriter<'a> {
    strategy: &'a RewriteStrategy,
    cursor: usize,
}

impl Rewriter<'_> {
    /// Rewrites `word`, a match of the term at `term_index`.
    pub(crate) fn rewrite(&mut self, term_index: usize, word: &str) -> String {
        match self.strategy {
            RewriteStrategy::Obscure(config) => config.apply_to(word),
            RewriteStrategy::Replace(config) => {
                let entries = config.entries();
                if entries.is_empty() {
                    return ObscureConfig::default().apply_to(word);
                }
                let slot = match config {
                    ReplaceConfig::Paired(_) => term_index,
                    ReplaceConfig::Pool(_) => {
                        let slot = self.cursor;
                        self.cursor += 1;
                        slot
                    }
                };
                entries[slot % entries.len()].clone()
            }
        }
    }
}
