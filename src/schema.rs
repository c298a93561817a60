//! Configuration fragment types consumed by the lint engine.
//!
//! Fragments are opaque to the composer: it only concatenates them. The types
//! serialize to the flat-config document shape the engine expects, so a
//! composed sequence can be handed over as JSON unchanged.

use serde::de::{self, SeqAccess, Visitor};
use serde::ser::SerializeSeq;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::collections::BTreeMap;
use std::fmt;

/// One unit of lint configuration: applicability patterns, settings, and rule
/// severities. Later fragments in a composed sequence override earlier ones
/// for overlapping keys; resolving that overlap is the engine's job.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigFragment {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub files: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub ignores: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language_options: Option<LanguageOptions>,
    /// Plugin key to package specifier, e.g. `"prettier" -> "eslint-plugin-prettier"`.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub plugins: BTreeMap<String, String>,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub settings: BTreeMap<String, serde_json::Value>,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub rules: BTreeMap<String, RuleEntry>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LanguageOptions {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ecma_version: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_type: Option<String>,
    /// Parser package specifier, e.g. `@typescript-eslint/parser`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parser: Option<String>,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub globals: BTreeMap<String, GlobalAccess>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parser_options: Option<serde_json::Value>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GlobalAccess {
    Readonly,
    Writable,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Off,
    Warn,
    Error,
}

/// A rule severity plus optional rule-specific options.
///
/// Serializes as a bare severity string when there are no options and as a
/// `[severity, option, ...]` array otherwise, matching the engine's rule
/// entry format.
#[derive(Debug, Clone, PartialEq)]
pub struct RuleEntry {
    pub severity: Severity,
    pub options: Vec<serde_json::Value>,
}

impl RuleEntry {
    pub fn new(severity: Severity) -> Self {
        Self {
            severity,
            options: Vec::new(),
        }
    }

    pub fn with_options(severity: Severity, options: Vec<serde_json::Value>) -> Self {
        Self { severity, options }
    }

    pub fn off() -> Self {
        Self::new(Severity::Off)
    }

    pub fn warn() -> Self {
        Self::new(Severity::Warn)
    }

    pub fn error() -> Self {
        Self::new(Severity::Error)
    }

    pub fn warn_with(options: Vec<serde_json::Value>) -> Self {
        Self::with_options(Severity::Warn, options)
    }

    pub fn error_with(options: Vec<serde_json::Value>) -> Self {
        Self::with_options(Severity::Error, options)
    }
}

impl Serialize for RuleEntry {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        if self.options.is_empty() {
            return self.severity.serialize(serializer);
        }
        let mut seq = serializer.serialize_seq(Some(self.options.len() + 1))?;
        seq.serialize_element(&self.severity)?;
        for option in &self.options {
            seq.serialize_element(option)?;
        }
        seq.end()
    }
}

impl<'de> Deserialize<'de> for Severity {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct SeverityVisitor;

        impl Visitor<'_> for SeverityVisitor {
            type Value = Severity;

            fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
                formatter.write_str("\"off\", \"warn\", \"error\", or 0..=2")
            }

            fn visit_str<E: de::Error>(self, value: &str) -> Result<Severity, E> {
                match value {
                    "off" => Ok(Severity::Off),
                    "warn" => Ok(Severity::Warn),
                    "error" => Ok(Severity::Error),
                    other => Err(E::unknown_variant(other, &["off", "warn", "error"])),
                }
            }

            fn visit_u64<E: de::Error>(self, value: u64) -> Result<Severity, E> {
                match value {
                    0 => Ok(Severity::Off),
                    1 => Ok(Severity::Warn),
                    2 => Ok(Severity::Error),
                    other => Err(E::custom(format!("severity out of range: {other}"))),
                }
            }
        }

        deserializer.deserialize_any(SeverityVisitor)
    }
}

impl<'de> Deserialize<'de> for RuleEntry {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct RuleEntryVisitor;

        impl<'de> Visitor<'de> for RuleEntryVisitor {
            type Value = RuleEntry;

            fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
                formatter.write_str("a severity or a [severity, option, ...] array")
            }

            fn visit_str<E: de::Error>(self, value: &str) -> Result<RuleEntry, E> {
                let severity = Severity::deserialize(de::value::StrDeserializer::new(value))?;
                Ok(RuleEntry::new(severity))
            }

            fn visit_u64<E: de::Error>(self, value: u64) -> Result<RuleEntry, E> {
                let severity = Severity::deserialize(de::value::U64Deserializer::new(value))?;
                Ok(RuleEntry::new(severity))
            }

            fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<RuleEntry, A::Error> {
                let severity: Severity = seq
                    .next_element()?
                    .ok_or_else(|| de::Error::invalid_length(0, &self))?;
                let mut options = Vec::new();
                while let Some(option) = seq.next_element::<serde_json::Value>()? {
                    options.push(option);
                }
                Ok(RuleEntry { severity, options })
            }
        }

        deserializer.deserialize_any(RuleEntryVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn bare_severity_serializes_as_string() {
        let entry = RuleEntry::error();
        assert_eq!(serde_json::to_value(&entry).unwrap(), json!("error"));
    }

    #[test]
    fn options_serialize_as_flat_array() {
        let entry = RuleEntry::error_with(vec![json!("always"), json!({ "null": "ignore" })]);
        assert_eq!(
            serde_json::to_value(&entry).unwrap(),
            json!(["error", "always", { "null": "ignore" }])
        );
    }

    #[test]
    fn rule_entry_round_trips() {
        let entries = vec![
            RuleEntry::off(),
            RuleEntry::warn_with(vec![json!({ "object": true, "array": false })]),
        ];
        let text = serde_json::to_string(&entries).unwrap();
        let parsed: Vec<RuleEntry> = serde_json::from_str(&text).unwrap();
        assert_eq!(parsed, entries);
    }

    #[test]
    fn numeric_severity_accepted() {
        let entry: RuleEntry = serde_json::from_str("2").unwrap();
        assert_eq!(entry, RuleEntry::error());
        let entry: RuleEntry = serde_json::from_str("[1, \"all\"]").unwrap();
        assert_eq!(entry, RuleEntry::warn_with(vec![json!("all")]));
    }

    #[test]
    fn empty_fragment_serializes_to_empty_object() {
        let fragment = ConfigFragment::default();
        assert_eq!(serde_json::to_value(&fragment).unwrap(), json!({}));
    }

    #[test]
    fn fragment_keys_are_camel_case() {
        let fragment = ConfigFragment {
            language_options: Some(LanguageOptions {
                ecma_version: Some(2022),
                source_type: Some("module".to_string()),
                ..LanguageOptions::default()
            }),
            ..ConfigFragment::default()
        };
        let value = serde_json::to_value(&fragment).unwrap();
        assert_eq!(value["languageOptions"]["ecmaVersion"], json!(2022));
        assert_eq!(value["languageOptions"]["sourceType"], json!("module"));
    }
}
