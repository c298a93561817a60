//! Base rule group: ignores, general JS/TS rules, and TypeScript overrides.
//!
//! Always included, regardless of what the project declares.

use super::{global_map, patterns, plugin_map, rule_map};
use crate::schema::{ConfigFragment, GlobalAccess, LanguageOptions, RuleEntry};
use serde_json::json;
use std::fs;
use std::path::Path;

const SOURCE_FILES: &[&str] = &[
    "**/*.js",
    "**/*.jsx",
    "**/*.ts",
    "**/*.tsx",
    "**/*.mjs",
    "**/*.cjs",
];

const TYPESCRIPT_FILES: &[&str] = &["**/*.ts", "**/*.tsx"];

const IGNORES: &[&str] = &[
    "node_modules/**",
    "dist/**",
    "build/**",
    "coverage/**",
    ".next/**",
];

pub(crate) fn fragments(project_root: &Path) -> Vec<ConfigFragment> {
    vec![
        ignores_fragment(),
        general_fragment(),
        typescript_fragment(project_root),
    ]
}

fn ignores_fragment() -> ConfigFragment {
    ConfigFragment {
        ignores: patterns(IGNORES),
        ..ConfigFragment::default()
    }
}

fn general_fragment() -> ConfigFragment {
    ConfigFragment {
        files: patterns(SOURCE_FILES),
        language_options: Some(LanguageOptions {
            ecma_version: Some(2022),
            source_type: Some("module".to_string()),
            globals: global_map(&[
                ("console", GlobalAccess::Readonly),
                ("process", GlobalAccess::Readonly),
                ("Buffer", GlobalAccess::Readonly),
                ("__dirname", GlobalAccess::Readonly),
                ("__filename", GlobalAccess::Readonly),
                ("exports", GlobalAccess::Writable),
                ("module", GlobalAccess::Writable),
                ("require", GlobalAccess::Readonly),
                ("global", GlobalAccess::Readonly),
            ]),
            parser_options: Some(json!({ "ecmaFeatures": { "jsx": true } })),
            ..LanguageOptions::default()
        }),
        plugins: plugin_map(&[
            ("prettier", "eslint-plugin-prettier"),
            ("@typescript-eslint", "@typescript-eslint/eslint-plugin"),
        ]),
        rules: rule_map(vec![
            // Prettier integration
            ("prettier/prettier", RuleEntry::error()),
            // Import rules
            ("no-duplicate-imports", RuleEntry::error()),
            // Error prevention
            (
                "no-console",
                RuleEntry::error_with(vec![json!({ "allow": ["warn", "error"] })]),
            ),
            ("no-debugger", RuleEntry::error()),
            ("no-alert", RuleEntry::warn()),
            ("no-var", RuleEntry::error()),
            ("prefer-const", RuleEntry::error()),
            ("prefer-arrow-callback", RuleEntry::error()),
            ("prefer-template", RuleEntry::warn()),
            // Code quality
            (
                "no-unused-vars",
                RuleEntry::error_with(vec![json!({
                    "args": "after-used",
                    "argsIgnorePattern": "^_",
                    "ignoreRestSiblings": true,
                    "varsIgnorePattern": "^_",
                })]),
            ),
            ("no-shadow", RuleEntry::error()),
            (
                "no-use-before-define",
                RuleEntry::error_with(vec![json!({
                    "functions": false,
                    "classes": true,
                    "variables": true,
                })]),
            ),
            (
                "no-param-reassign",
                RuleEntry::error_with(vec![json!({ "props": false })]),
            ),
            (
                "no-unused-expressions",
                RuleEntry::error_with(vec![json!({
                    "allowShortCircuit": true,
                    "allowTernary": true,
                })]),
            ),
            // Best practices
            (
                "eqeqeq",
                RuleEntry::error_with(vec![json!("always"), json!({ "null": "ignore" })]),
            ),
            ("no-eval", RuleEntry::error()),
            ("no-implied-eval", RuleEntry::error()),
            ("no-new-func", RuleEntry::error()),
            ("no-return-await", RuleEntry::error()),
            ("require-await", RuleEntry::warn()),
            ("curly", RuleEntry::error_with(vec![json!("all")])),
            // Style
            (
                "prefer-destructuring",
                RuleEntry::warn_with(vec![json!({ "object": true, "array": false })]),
            ),
        ]),
        ..ConfigFragment::default()
    }
}

fn typescript_fragment(project_root: &Path) -> ConfigFragment {
    let mut parser_options = json!({
        "ecmaVersion": 2022,
        "sourceType": "module",
        "warnOnUnsupportedTypeScriptVersion": true,
    });
    if let Some(ts_config) = type_config_path(project_root) {
        parser_options["project"] = json!(ts_config);
    }

    ConfigFragment {
        files: patterns(TYPESCRIPT_FILES),
        language_options: Some(LanguageOptions {
            parser: Some("@typescript-eslint/parser".to_string()),
            parser_options: Some(parser_options),
            ..LanguageOptions::default()
        }),
        plugins: plugin_map(&[("@typescript-eslint", "@typescript-eslint/eslint-plugin")]),
        rules: rule_map(vec![
            // Disable base rules that are superseded by TypeScript rules
            ("no-shadow", RuleEntry::off()),
            ("@typescript-eslint/no-shadow", RuleEntry::error()),
            ("no-use-before-define", RuleEntry::off()),
            (
                "@typescript-eslint/no-use-before-define",
                RuleEntry::error_with(vec![json!({
                    "functions": false,
                    "classes": true,
                    "variables": true,
                })]),
            ),
            ("no-unused-expressions", RuleEntry::off()),
            (
                "@typescript-eslint/no-unused-expressions",
                RuleEntry::error_with(vec![json!({
                    "allowShortCircuit": true,
                    "allowTernary": true,
                })]),
            ),
            ("no-unused-vars", RuleEntry::off()),
            (
                "@typescript-eslint/no-unused-vars",
                RuleEntry::error_with(vec![json!({
                    "args": "after-used",
                    "argsIgnorePattern": "^_",
                    "ignoreRestSiblings": true,
                    "varsIgnorePattern": "^_",
                    "caughtErrorsIgnorePattern": "^_",
                })]),
            ),
            // TypeScript specific rules
            ("@typescript-eslint/no-explicit-any", RuleEntry::off()),
            ("@typescript-eslint/no-empty-object-type", RuleEntry::off()),
            (
                "@typescript-eslint/explicit-module-boundary-types",
                RuleEntry::off(),
            ),
            ("@typescript-eslint/no-non-null-assertion", RuleEntry::warn()),
            ("@typescript-eslint/prefer-optional-chain", RuleEntry::warn()),
            (
                "@typescript-eslint/prefer-nullish-coalescing",
                RuleEntry::warn(),
            ),
        ]),
        ..ConfigFragment::default()
    }
}

/// Absolute path to `tsconfig.json` when the project has one; presence alone
/// decides whether the type-aware parser gets a project reference.
fn type_config_path(project_root: &Path) -> Option<String> {
    let candidate = project_root.join("tsconfig.json");
    if !candidate.exists() {
        return None;
    }
    let resolved = fs::canonicalize(&candidate).unwrap_or(candidate);
    Some(resolved.to_string_lossy().into_owned())
}
