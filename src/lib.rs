//! Dependency-gated lint configuration composer.
//!
//! Assembles an ordered sequence of flat-config fragments: the base rule
//! group always, plus optional groups keyed on which packages the project's
//! `package.json` declares (`vitest`, `react`, `@testing-library/react`).
//! The composed sequence is handed to an external lint engine; later
//! fragments override earlier ones by position, and this crate never
//! interprets the rules it concatenates.
//!
//! Composition is best-effort by design: a missing or malformed manifest
//! means every optional group is treated as absent, never an error.

mod compose;
pub mod manifest;
mod presets;
pub mod schema;

pub use compose::{compose, compose_in, compose_json};
pub use schema::{ConfigFragment, GlobalAccess, LanguageOptions, RuleEntry, Severity};
