//! Test-runner rule group, included when the project declares `vitest`.

use super::{global_map, patterns, plugin_map, rule_map, TEST_FILES};
use crate::schema::{ConfigFragment, GlobalAccess, LanguageOptions, RuleEntry};

pub(crate) fn fragments() -> Vec<ConfigFragment> {
    vec![ConfigFragment {
        files: patterns(TEST_FILES),
        plugins: plugin_map(&[("vitest", "eslint-plugin-vitest")]),
        language_options: Some(LanguageOptions {
            globals: global_map(&[
                ("suite", GlobalAccess::Readonly),
                ("test", GlobalAccess::Readonly),
                ("describe", GlobalAccess::Readonly),
                ("it", GlobalAccess::Readonly),
                ("expect", GlobalAccess::Readonly),
                ("assert", GlobalAccess::Readonly),
                ("vitest", GlobalAccess::Readonly),
                ("vi", GlobalAccess::Readonly),
                ("beforeAll", GlobalAccess::Readonly),
                ("afterAll", GlobalAccess::Readonly),
                ("beforeEach", GlobalAccess::Readonly),
                ("afterEach", GlobalAccess::Readonly),
            ]),
            ..LanguageOptions::default()
        }),
        rules: rule_map(vec![
            // Plugin-recommended rules the group opts out of
            ("vitest/expect-expect", RuleEntry::off()),
            ("vitest/prefer-expect-assertions", RuleEntry::off()),
            ("vitest/prefer-lowercase-title", RuleEntry::off()),
            ("vitest/max-expects", RuleEntry::off()),
            ("vitest/no-hooks", RuleEntry::off()),
            ("vitest/prefer-spy-on", RuleEntry::off()),
            ("vitest/consistent-test-it", RuleEntry::off()),
            ("vitest/no-conditional-expect", RuleEntry::error()),
            ("vitest/no-conditional-in-test", RuleEntry::error()),
            ("vitest/no-disabled-tests", RuleEntry::warn()),
            ("vitest/no-focused-tests", RuleEntry::error()),
            ("vitest/no-identical-title", RuleEntry::error()),
            ("vitest/prefer-to-be", RuleEntry::warn()),
            ("vitest/prefer-to-contain", RuleEntry::warn()),
            ("vitest/prefer-to-have-length", RuleEntry::warn()),
            ("vitest/valid-expect", RuleEntry::error()),
            ("vitest/valid-title", RuleEntry::warn()),
        ]),
        ..ConfigFragment::default()
    }]
}
