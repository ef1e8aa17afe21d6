//! Adapters for emitting purified values through `slog`.
//!
//! This module connects [`crate::Profanity`] with `slog` by providing a
//! `slog::Value` that serializes the purified form of a value as structured
//! JSON via `slog`'s nested-value support.
//!
//! It is responsible for:
//! - Ensuring the logged representation is the output of `Profanity::purify`,
//!   never the original value.
//! - Avoiding fallible logging APIs: serialization failures are represented as
//!   placeholder strings rather than propagated as errors.
//!
//! It does not configure `slog` or decide which values should be logged.

use serde::Serialize;
use serde_json::Value as JsonValue;
use slog::{Key, Record, Result as SlogResult, Serializer, Value as SlogValue};

use crate::config::Profanity;

/// Placeholder logged when a value cannot be converted to JSON.
pub const SERIALIZATION_FAILED: &str = "Failed to serialize purified value";

/// A `slog::Value` that emits an owned purified payload as structured JSON.
pub struct PurifiedJson {
    value: JsonValue,
    matches: usize,
}

impl PurifiedJson {
    /// Purifies `value` with `engine` and keeps only the rewritten copy.
    pub fn new(engine: &Profanity, value: &JsonValue) -> Self {
        let purified = engine.purify(value);
        Self {
            value: purified.value,
            matches: purified.matches.len(),
        }
    }

    /// Number of matches rewritten before logging.
    pub fn matches(&self) -> usize {
        self.matches
    }
}

impl SlogValue for PurifiedJson {
    fn serialize(
        &self,
        record: &Record<'_>,
        key: Key,
        serializer: &mut dyn Serializer,
    ) -> SlogResult {
        let nested = slog::Serde(self.value.clone());
        SlogValue::serialize(&nested, record, key, serializer)
    }
}

/// Converts values into a `slog::Value` that logs their purified form as JSON.
///
/// ## Example
/// ```ignore
/// use profanity::slog::IntoPurifiedJson;
///
/// info!(logger, "comment posted"; "comment" => comment.into_purified_json(&engine));
/// ```
pub trait IntoPurifiedJson: Serialize + Sized {
    /// Serializes `self`, purifies the result and wraps it for logging.
    ///
    /// If `self` cannot be converted into `serde_json::Value`, the logged value
    /// is the string [`SERIALIZATION_FAILED`].
    fn into_purified_json(self, engine: &Profanity) -> PurifiedJson {
        match serde_json::to_value(&self) {
            Ok(value) => PurifiedJson::new(engine, &value),
            Err(_) => PurifiedJson {
                value: JsonValue::String(SERIALIZATION_FAILED.to_owned()),
                matches: 0,
            },
        }
    }
}

impl<T> IntoPurifiedJson for T where T: Serialize {}
