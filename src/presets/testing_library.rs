//! UI-testing-helpers rule group, included only when both `react` and
//! `@testing-library/react` are declared.

use super::{patterns, plugin_map, rule_map, TEST_FILES};
use crate::schema::{ConfigFragment, RuleEntry};

pub(crate) fn fragments() -> Vec<ConfigFragment> {
    vec![ConfigFragment {
        files: patterns(TEST_FILES),
        plugins: plugin_map(&[("testing-library", "eslint-plugin-testing-library")]),
        rules: rule_map(vec![
            ("testing-library/await-async-events", RuleEntry::error()),
            ("testing-library/await-async-queries", RuleEntry::error()),
            ("testing-library/await-async-utils", RuleEntry::error()),
            ("testing-library/no-await-sync-events", RuleEntry::error()),
            ("testing-library/no-await-sync-queries", RuleEntry::error()),
            ("testing-library/no-container", RuleEntry::warn()),
            ("testing-library/no-debugging-utils", RuleEntry::warn()),
            ("testing-library/no-dom-import", RuleEntry::off()),
            ("testing-library/no-node-access", RuleEntry::warn()),
            (
                "testing-library/no-promise-in-fire-event",
                RuleEntry::error(),
            ),
            (
                "testing-library/no-render-in-lifecycle",
                RuleEntry::error(),
            ),
            ("testing-library/no-unnecessary-act", RuleEntry::error()),
            (
                "testing-library/no-wait-for-multiple-assertions",
                RuleEntry::error(),
            ),
            (
                "testing-library/no-wait-for-side-effects",
                RuleEntry::error(),
            ),
            ("testing-library/no-wait-for-snapshot", RuleEntry::error()),
            ("testing-library/prefer-find-by", RuleEntry::warn()),
            (
                "testing-library/prefer-presence-queries",
                RuleEntry::warn(),
            ),
            ("testing-library/prefer-screen-queries", RuleEntry::warn()),
            (
                "testing-library/render-result-naming-convention",
                RuleEntry::warn(),
            ),
        ]),
        ..ConfigFragment::default()
    }]
}
