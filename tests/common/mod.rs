//! Shared test infrastructure for composition tests.

use lint_compose::ConfigFragment;
use std::fs;
use tempfile::TempDir;

/// Temporary project root with an optional `package.json`.
pub struct TestProject {
    dir: TempDir,
}

impl TestProject {
    pub fn empty() -> Self {
        Self {
            dir: TempDir::new().expect("create temp project"),
        }
    }

    pub fn with_manifest(manifest: &str) -> Self {
        let project = Self::empty();
        project.write("package.json", manifest);
        project
    }

    pub fn write(&self, name: &str, contents: &str) {
        fs::write(self.dir.path().join(name), contents).expect("write fixture file");
    }

    pub fn path(&self) -> &std::path::Path {
        self.dir.path()
    }

    pub fn compose(&self) -> Vec<ConfigFragment> {
        lint_compose::compose_in(self.path())
    }
}

/// Plugin keys across all fragments, in sequence order. Each optional rule
/// group registers a distinct plugin, so this doubles as a group marker.
pub fn plugin_keys(fragments: &[ConfigFragment]) -> Vec<String> {
    fragments
        .iter()
        .flat_map(|fragment| fragment.plugins.keys().cloned())
        .collect()
}

pub fn has_plugin(fragments: &[ConfigFragment], key: &str) -> bool {
    plugin_keys(fragments).iter().any(|name| name == key)
}

/// Position of the first fragment registering `key`, if any.
pub fn group_position(fragments: &[ConfigFragment], key: &str) -> Option<usize> {
    fragments
        .iter()
        .position(|fragment| fragment.plugins.contains_key(key))
}
