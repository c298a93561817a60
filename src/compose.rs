//! Dependency-gated assembly of the final fragment sequence.

use crate::manifest::has_dependency;
use crate::presets;
use crate::schema::ConfigFragment;
use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

/// Compose the lint configuration for the current working directory.
///
/// Convenience wrapper over [`compose_in`]; an unreadable working directory
/// degrades to a relative lookup, which in turn degrades to base-only output.
pub fn compose() -> Vec<ConfigFragment> {
    let root = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    compose_in(&root)
}

/// Compose the lint configuration for the project at `project_root`.
///
/// Starts from the base group, then appends optional groups keyed on the
/// project's declared dependencies. Output order is the contract: base,
/// test-runner, ui-framework, ui-testing-helpers. The ui-testing-helpers
/// check is nested because those rules are meaningless without the framework
/// they target.
///
/// Never fails; manifest problems are absorbed as "package absent".
pub fn compose_in(project_root: &Path) -> Vec<ConfigFragment> {
    let mut fragments = presets::base::fragments(project_root);

    if has_dependency("vitest", project_root) {
        tracing::debug!("vitest declared, appending test-runner group");
        fragments.extend(presets::vitest::fragments());
    }

    if has_dependency("react", project_root) {
        tracing::debug!("react declared, appending ui-framework group");
        fragments.extend(presets::react::fragments());

        if has_dependency("@testing-library/react", project_root) {
            tracing::debug!("@testing-library/react declared, appending ui-testing-helpers group");
            fragments.extend(presets::testing_library::fragments());
        }
    }

    fragments
}

/// Render the composed configuration as pretty-printed JSON for an external
/// engine to consume.
pub fn compose_json(project_root: &Path) -> Result<String> {
    let fragments = compose_in(project_root);
    serde_json::to_string_pretty(&fragments).context("serialize composed lint config")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn project(manifest: Option<&str>) -> TempDir {
        let dir = TempDir::new().expect("create temp project");
        if let Some(contents) = manifest {
            fs::write(dir.path().join("package.json"), contents).expect("write manifest");
        }
        dir
    }

    fn plugin_keys(fragments: &[ConfigFragment]) -> Vec<String> {
        fragments
            .iter()
            .flat_map(|fragment| fragment.plugins.keys().cloned())
            .collect()
    }

    #[test]
    fn no_manifest_yields_base_only() {
        let dir = project(None);
        let fragments = compose_in(dir.path());
        assert_eq!(fragments.len(), 3);
        let keys = plugin_keys(&fragments);
        assert!(!keys.contains(&"vitest".to_string()));
        assert!(!keys.contains(&"react".to_string()));
        assert!(!keys.contains(&"testing-library".to_string()));
    }

    #[test]
    fn malformed_manifest_matches_no_manifest() {
        let valid = project(None);
        let broken = project(Some("{ this is not json"));
        assert_eq!(compose_in(valid.path()), compose_in(broken.path()));
    }

    #[test]
    fn testing_library_without_react_short_circuits() {
        let dir = project(Some(
            r#"{"devDependencies": {"@testing-library/react": "14.0.0"}}"#,
        ));
        let fragments = compose_in(dir.path());
        assert_eq!(fragments.len(), 3);
        assert!(!plugin_keys(&fragments).contains(&"testing-library".to_string()));
    }

    #[test]
    fn compose_json_is_a_fragment_array() {
        let dir = project(Some(r#"{"dependencies": {"react": "18.0.0"}}"#));
        let text = compose_json(dir.path()).unwrap();
        let parsed: Vec<ConfigFragment> = serde_json::from_str(&text).unwrap();
        assert_eq!(parsed, compose_in(dir.path()));
    }
}
