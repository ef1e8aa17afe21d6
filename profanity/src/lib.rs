//! Forbidden-term detection and purification for nested data.
//!
//! This crate separates:
//! - **Engine**: finding forbidden terms in strings, sequences and records
//!   ([`scan`]) and producing a rewritten copy ([`purify`]).
//! - **Document policy**: deciding which fields of a record the engine may
//!   touch and turning match counts into flags and a blacklist state.
//!
//! Key rules:
//! - Terms match whole words only, case-insensitively.
//! - Matches are reported in discovery order, duplicates included.
//! - Record keys are visited in insertion order; keys themselves are never rewritten.
//! - Non-text leaves (numbers, booleans, null) pass through unchanged.
//! - Arrays of nested records cannot be narrowed by a field selector and are
//!   rejected by the document policy.
//!
//! What this crate does:
//! - ships a default term list and replacement pool
//! - parses the `fields` / `maxFlags` / `obscureSymbol` / `forbiddenList` /
//!   `replacementsList` / `replace` option set
//! - exposes pre-create and pre-update hooks through [`WriteInterceptor`]
//!
//! What it does not do:
//! - perform I/O or own a persistence layer
//! - normalize leetspeak, phonetics or other languages

// <https://doc.rust-lang.org/rustc/lints/listing/allowed-by-default.html>
#![warn(
    anonymous_parameters,
    bare_trait_objects,
    elided_lifetimes_in_paths,
    missing_copy_implementations,
    rust_2018_idioms,
    trivial_casts,
    trivial_numeric_casts,
    unreachable_pub,
    unsafe_code,
    unused_extern_crates,
    unused_import_braces
)]
// <https://rust-lang.github.io/rust-clippy/stable>
#![warn(
    clippy::all,
    clippy::cargo,
    clippy::dbg_macro,
    clippy::float_cmp_const,
    clippy::get_unwrap,
    clippy::mem_forget,
    clippy::nursery,
    clippy::pedantic,
    clippy::todo,
    clippy::unwrap_used,
    clippy::uninlined_format_args
)]
// Allow some clippy lints
#![allow(
    clippy::default_trait_access,
    clippy::doc_markdown,
    clippy::if_not_else,
    clippy::module_name_repetitions,
    clippy::multiple_crate_versions,
    clippy::must_use_candidate,
    clippy::needless_pass_by_value,
    clippy::use_self,
    clippy::cargo_common_metadata,
    clippy::missing_errors_doc,
    clippy::enum_glob_use,
    clippy::missing_const_for_fn,
    clippy::redundant_pub_crate,
    clippy::result_large_err,
    clippy::option_if_let_else
)]
// Allow some lints while testing
#![cfg_attr(test, allow(clippy::non_ascii_literal, clippy::unwrap_used))]

// Module declarations
mod config;
#[cfg(feature = "document")]
mod document;
mod engine;
mod error;
pub mod slog;
mod terms;

// Re-exports
pub use config::{FieldSelector, Options, Profanity};
#[cfg(feature = "document")]
pub use document::{
    DocumentPolicy, Flag, WriteInterceptor, WriteOutcome, BLACKLISTED_FIELD, FLAGS_FIELD,
    FLAG_REASON,
};
pub use engine::{purify, scan, ObscureConfig, Purified, ReplaceConfig, RewriteStrategy, TermSet};
pub use error::{Error, Result};
pub use terms::{DEFAULT_FORBIDDEN_TERMS, DEFAULT_REPLACEMENTS, DEFAULT_TERMS_VERSION};
