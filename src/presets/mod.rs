//! Static rule-group definitions, one module per group.
//!
//! Each group is an ordered sequence of fragments built fresh per call; the
//! composer decides which groups make it into the final sequence.

pub(crate) mod base;
pub(crate) mod react;
pub(crate) mod testing_library;
pub(crate) mod vitest;

use crate::schema::{GlobalAccess, RuleEntry};
use std::collections::BTreeMap;

/// Test-file globs shared by the test-runner and ui-testing groups.
pub(crate) const TEST_FILES: &[&str] = &[
    "**/__tests__/**/*.[jt]s?(x)",
    "**/?(*.)+(spec|test).[jt]s?(x)",
];

pub(crate) fn patterns(globs: &[&str]) -> Vec<String> {
    globs.iter().map(|glob| (*glob).to_string()).collect()
}

pub(crate) fn rule_map(entries: Vec<(&str, RuleEntry)>) -> BTreeMap<String, RuleEntry> {
    entries
        .into_iter()
        .map(|(name, entry)| (name.to_string(), entry))
        .collect()
}

pub(crate) fn plugin_map(entries: &[(&str, &str)]) -> BTreeMap<String, String> {
    entries
        .iter()
        .map(|(key, package)| ((*key).to_string(), (*package).to_string()))
        .collect()
}

pub(crate) fn global_map(entries: &[(&str, GlobalAccess)]) -> BTreeMap<String, GlobalAccess> {
    entries
        .iter()
        .map(|(name, access)| ((*name).to_string(), *access))
        .collect()
}
