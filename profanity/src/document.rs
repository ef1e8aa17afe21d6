//! Per-record policy applied by the persistence layer before every write.
//!
//! The policy narrows a record to the configured fields, runs them through
//! the engine, and (when `maxFlags` is set) appends one [`Flag`] per match and
//! derives the `blackListed` state. It is the only part of the crate meant to
//! be called from write hooks; see [`WriteInterceptor`].
//!
//! It does not persist anything or remember previous writes. Flags that
//! already exist are read from the record being written (or, for updates,
//! from the stored record) and extended.

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use slog::{debug, info, o, warn, Discard, Logger};

use crate::{
    config::{FieldSelector, Profanity},
    error::{Error, Result},
};

/// Record field holding the flag collection.
pub const FLAGS_FIELD: &str = "flags";
/// Record field holding the blacklist state.
pub const BLACKLISTED_FIELD: &str = "blackListed";
/// Reason attached to every flag raised by the policy.
pub const FLAG_REASON: &str = "Inappropriate language";

/// One flag raised against a record.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Flag {
    /// Who raised the flag; unset for flags raised by the policy.
    #[serde(default)]
    pub author: Option<Value>,
    pub reason: String,
}

impl Flag {
    /// The flag raised for each forbidden-term match.
    pub fn inappropriate() -> Self {
        Self {
            author: None,
            reason: FLAG_REASON.to_owned(),
        }
    }

    #[must_use]
    pub fn attributed_to(mut self, author: impl Into<Value>) -> Self {
        self.author = Some(author.into());
        self
    }

    /// Reads the flag collection of `record`. Malformed entries are skipped.
    pub fn read_from(record: &Map<String, Value>) -> Vec<Flag> {
        record
            .get(FLAGS_FIELD)
            .and_then(Value::as_array)
            .map(|flags| {
                flags
                    .iter()
                    .filter_map(|flag| serde_json::from_value(flag.clone()).ok())
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Encodes the flag the way it is stored in the flag collection.
    pub fn to_value(&self) -> Result<Value> {
        serde_json::to_value(self).map_err(Error::FlagEncoding)
    }
}

/// Result of running a record through the policy.
#[derive(Clone, Debug, PartialEq)]
pub struct WriteOutcome {
    /// The record to write, with in-scope fields rewritten.
    pub record: Map<String, Value>,
    /// Terms matched in this write, in discovery order.
    pub matches: Vec<String>,
    /// Number of flags appended by this write.
    pub flags_added: usize,
    /// Blacklist state after this write, or `None` when bookkeeping is off.
    pub blacklisted: Option<bool>,
}

/// Hooks a persistence layer calls synchronously before committing a write.
///
/// An `Err` must abort the write.
pub trait WriteInterceptor {
    /// Called before a record is first created.
    fn before_create(&self, record: Map<String, Value>) -> Result<WriteOutcome>;

    /// Called before `changes` are applied to the already `stored` record.
    ///
    /// Only fields present in `changes` are purified.
    fn before_update(
        &self,
        stored: &Map<String, Value>,
        changes: Map<String, Value>,
    ) -> Result<WriteOutcome>;
}

/// A field addressed by the selector, resolved against one record.
#[derive(Clone, Debug, PartialEq, Eq)]
enum Target {
    Field(String),
    Nested { parent: String, child: String },
}

impl Target {
    fn label(&self) -> String {
        match self {
            Target::Field(name) => name.clone(),
            Target::Nested { parent, child } => format!("{parent}.{child}"),
        }
    }

    fn get<'r>(&self, record: &'r Map<String, Value>) -> Option<&'r Value> {
        match self {
            Target::Field(name) => record.get(name),
            Target::Nested { parent, child } => record.get(parent)?.as_object()?.get(child),
        }
    }

    fn get_mut<'r>(&self, record: &'r mut Map<String, Value>) -> Option<&'r mut Value> {
        match self {
            Target::Field(name) => record.get_mut(name),
            Target::Nested { parent, child } => {
                record.get_mut(parent)?.as_object_mut()?.get_mut(child)
            }
        }
    }

    /// Fails if the target holds an array of records.
    fn check(&self, record: &Map<String, Value>) -> Result<()> {
        let offending = match self {
            Target::Field(_) => self.get(record).filter(|value| is_record_array(value)),
            Target::Nested { parent, .. } => record
                .get(parent)
                .filter(|value| is_record_array(value))
                .or_else(|| self.get(record).filter(|value| is_record_array(value))),
        };
        match offending {
            Some(_) => Err(Error::NestedRecordArray {
                field: self.label(),
            }),
            None => Ok(()),
        }
    }
}

fn is_record_array(value: &Value) -> bool {
    value
        .as_array()
        .is_some_and(|items| items.iter().any(Value::is_object))
}

fn is_bookkeeping_field(name: &str) -> bool {
    name == FLAGS_FIELD || name == BLACKLISTED_FIELD
}

/// Field-scoped purification with optional flag/blacklist bookkeeping.
#[derive(Clone)]
pub struct DocumentPolicy {
    engine: Profanity,
    fields: FieldSelector,
    max_flags: Option<u32>,
    logger: Logger,
}

impl fmt::Debug for DocumentPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DocumentPolicy")
            .field("engine", &self.engine)
            .field("fields", &self.fields)
            .field("max_flags", &self.max_flags)
            .finish_non_exhaustive()
    }
}

impl DocumentPolicy {
    /// `max_flags` of `None` or `Some(0)` disables bookkeeping.
    pub fn new(engine: Profanity, fields: FieldSelector, max_flags: Option<u32>) -> Self {
        Self {
            engine,
            fields,
            max_flags: max_flags.filter(|max| *max > 0),
            logger: Logger::root(Discard, o!()),
        }
    }

    /// Routes policy events to `logger`.
    #[must_use]
    pub fn with_logger(mut self, logger: Logger) -> Self {
        self.logger = logger.new(o!("component" => "profanity"));
        self
    }

    pub fn engine(&self) -> &Profanity {
        &self.engine
    }

    pub fn fields(&self) -> &FieldSelector {
        &self.fields
    }

    pub fn max_flags(&self) -> Option<u32> {
        self.max_flags
    }

    fn targets(&self, record: &Map<String, Value>) -> Result<Vec<Target>> {
        let targets = match &self.fields {
            FieldSelector::Whole => record
                .keys()
                .filter(|name| !is_bookkeeping_field(name))
                .map(|name| Target::Field(name.clone()))
                .collect(),
            FieldSelector::Named(names) => names.iter().cloned().map(Target::Field).collect(),
            FieldSelector::Nested { parent, child } => vec![Target::Nested {
                parent: parent.clone(),
                child: child.clone(),
            }],
        };

        for target in &targets {
            target.check(record)?;
        }
        Ok(targets)
    }

    fn apply(
        &self,
        operation: &'static str,
        mut record: Map<String, Value>,
        stored: Option<&Map<String, Value>>,
    ) -> Result<WriteOutcome> {
        let targets = match self.targets(&record) {
            Ok(targets) => targets,
            Err(err) => {
                warn!(self.logger, "write rejected";
                    "operation" => operation, "error" => %err);
                return Err(err);
            }
        };

        let mut pass = self.engine.pass();
        for target in &targets {
            if let Some(slot) = target.get_mut(&mut record) {
                *slot = pass.value(slot);
            }
        }
        let matches = pass.finish();

        debug!(self.logger, "purified record";
            "operation" => operation,
            "targets" => targets.len(),
            "matches" => matches.len(),
            "terms" => ?matches);

        let (flags_added, blacklisted) = match self.max_flags {
            Some(max) => {
                let blacklisted =
                    self.record_flags(operation, &mut record, stored, &matches, max)?;
                (matches.len(), Some(blacklisted))
            }
            None => (0, None),
        };

        Ok(WriteOutcome {
            record,
            matches,
            flags_added,
            blacklisted,
        })
    }

    /// Appends one flag per match and updates the blacklist state.
    fn record_flags(
        &self,
        operation: &'static str,
        record: &mut Map<String, Value>,
        stored: Option<&Map<String, Value>>,
        matches: &[String],
        max: u32,
    ) -> Result<bool> {
        let existing = |field: &str| {
            record
                .get(field)
                .or_else(|| stored.and_then(|stored| stored.get(field)))
        };

        let mut flags = existing(FLAGS_FIELD)
            .and_then(Value::as_array)
            .cloned()
            .unwrap_or_default();
        let was_blacklisted = existing(BLACKLISTED_FIELD)
            .and_then(Value::as_bool)
            .unwrap_or(false);

        let raised = Flag::inappropriate().to_value()?;
        flags.extend(std::iter::repeat(raised).take(matches.len()));
        let total = flags.len();
        let blacklisted = was_blacklisted || total >= max as usize;

        if blacklisted && !was_blacklisted {
            info!(self.logger, "record blacklisted";
                "operation" => operation, "flags" => total, "max_flags" => max);
        }

        record.insert(FLAGS_FIELD.to_owned(), Value::Array(flags));
        record.insert(BLACKLISTED_FIELD.to_owned(), Value::Bool(blacklisted));
        Ok(blacklisted)
    }
}

impl WriteInterceptor for DocumentPolicy {
    fn before_create(&self, record: Map<String, Value>) -> Result<WriteOutcome> {
        self.apply("create", record, None)
    }

    fn before_update(
        &self,
        stored: &Map<String, Value>,
        changes: Map<String, Value>,
    ) -> Result<WriteOutcome> {
        self.apply("update", changes, Some(stored))
    }
}
