//! Read-only dependency queries against a project's package manifest.

use serde::Deserialize;
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

pub const MANIFEST_FILE: &str = "package.json";

#[derive(Debug, Default, Deserialize)]
struct PackageManifest {
    #[serde(default)]
    dependencies: BTreeMap<String, serde_json::Value>,
    #[serde(default, rename = "devDependencies")]
    dev_dependencies: BTreeMap<String, serde_json::Value>,
}

/// Whether `name` is declared as a direct dependency (production or dev) in
/// `<project_root>/package.json`.
///
/// This is a total function: a missing, unreadable, or malformed manifest
/// means "not declared", never an error. Callers are building a best-effort
/// default configuration and a broken manifest must not abort composition.
pub fn has_dependency(name: &str, project_root: &Path) -> bool {
    let path = project_root.join(MANIFEST_FILE);
    let bytes = match fs::read(&path) {
        Ok(bytes) => bytes,
        Err(err) => {
            tracing::debug!(path = %path.display(), %err, "manifest unreadable, treating package as absent");
            return false;
        }
    };
    let manifest: PackageManifest = match serde_json::from_slice(&bytes) {
        Ok(manifest) => manifest,
        Err(err) => {
            tracing::debug!(path = %path.display(), %err, "manifest unparseable, treating package as absent");
            return false;
        }
    };
    manifest.dependencies.contains_key(name) || manifest.dev_dependencies.contains_key(name)
}
