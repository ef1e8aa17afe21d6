//! Scanning, rewriting and the entrypoints that tie them together.
//!
//! - **`scanner`**: which terms are forbidden and where they occur (`TermSet`, `scan`)
//! - **`strategy`**: how a single match is rewritten (`RewriteStrategy`)
//! - **`purifier`**: structural copy of a value with every match rewritten (`purify`)

mod purifier;
mod scanner;
mod strategy;

pub(crate) use purifier::Pass;
pub use purifier::{purify, Purified};
pub use scanner::{scan, TermSet};
pub use strategy::{ObscureConfig, ReplaceConfig, RewriteStrategy};
