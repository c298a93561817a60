//! UI-framework rule group, included when the project declares `react`.

use super::{patterns, plugin_map, rule_map};
use crate::schema::{ConfigFragment, RuleEntry};
use serde_json::json;
use std::collections::BTreeMap;

const JSX_FILES: &[&str] = &["**/*.js", "**/*.jsx", "**/*.ts", "**/*.tsx"];

pub(crate) fn fragments() -> Vec<ConfigFragment> {
    let mut settings = BTreeMap::new();
    settings.insert(
        "react".to_string(),
        json!({ "version": "detect" }),
    );

    vec![ConfigFragment {
        files: patterns(JSX_FILES),
        plugins: plugin_map(&[
            ("react", "eslint-plugin-react"),
            ("react-hooks", "eslint-plugin-react-hooks"),
        ]),
        settings,
        rules: rule_map(vec![
            // Correctness
            ("react/jsx-key", RuleEntry::error()),
            ("react/jsx-no-duplicate-props", RuleEntry::error()),
            ("react/jsx-no-undef", RuleEntry::error()),
            ("react/jsx-uses-react", RuleEntry::error()),
            ("react/jsx-uses-vars", RuleEntry::error()),
            ("react/no-children-prop", RuleEntry::error()),
            ("react/no-danger-with-children", RuleEntry::error()),
            ("react/no-deprecated", RuleEntry::warn()),
            ("react/no-direct-mutation-state", RuleEntry::error()),
            ("react/no-find-dom-node", RuleEntry::warn()),
            ("react/no-is-mounted", RuleEntry::error()),
            ("react/no-render-return-value", RuleEntry::error()),
            ("react/no-string-refs", RuleEntry::error()),
            ("react/no-unescaped-entities", RuleEntry::warn()),
            (
                "react/no-unknown-property",
                RuleEntry::error_with(vec![json!({ "ignore": ["css"] })]),
            ),
            ("react/require-render-return", RuleEntry::error()),
            // Not needed with the automatic JSX runtime / TypeScript
            ("react/react-in-jsx-scope", RuleEntry::off()),
            ("react/prop-types", RuleEntry::off()),
            ("react/display-name", RuleEntry::off()),
            // Hooks
            ("react-hooks/rules-of-hooks", RuleEntry::error()),
            ("react-hooks/exhaustive-deps", RuleEntry::warn()),
        ]),
        ..ConfigFragment::default()
    }]
}
