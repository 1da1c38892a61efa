//! # Business Rules
//!
//! Cross-field constraints that a per-field type table cannot express.
//! Rules run over the typed [`SpaceApi`] document, after structural
//! validation and decoding have both succeeded, and report
//! [`ViolationKind::BusinessRule`] violations at the offending path.
//!
//! Each rule has a stable [`RuleId`] and a scope: the schema path of the
//! object it inspects (`*` stands for any field name).

use std::fmt;

use serde::Serialize;
use spaceapi_core::{IssueReportChannel, SpaceApi};

use crate::violation::{FieldPath, Violation, ViolationKind};

/// Stable identifier of a business rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum RuleId {
    /// Every keymaster lists irc_nick, phone, email or twitter.
    KeymasterContact,
    /// `contact` populates at least one issue report channel field.
    ReportChannelContact,
    /// Radiation readings in `cpm` carry `dead_time` and `conversion_factor`.
    RadiationCountParameters,
}

impl RuleId {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::KeymasterContact => "keymaster-contact",
            Self::ReportChannelContact => "report-channel-contact",
            Self::RadiationCountParameters => "radiation-count-parameters",
        }
    }
}

impl fmt::Display for RuleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A cross-field check over a decoded document.
pub trait DocumentRule: Send + Sync + fmt::Debug {
    fn id(&self) -> RuleId;

    /// Schema path of the object this rule inspects.
    fn scope(&self) -> &'static str;

    /// Append one violation per offending object to `out`.
    fn check(&self, doc: &SpaceApi, out: &mut Vec<Violation>);
}

/// At least one of irc_nick, phone, email or twitter per keymaster.
#[derive(Debug, Clone, Copy, Default)]
pub struct KeymasterContact;

impl DocumentRule for KeymasterContact {
    fn id(&self) -> RuleId {
        RuleId::KeymasterContact
    }

    fn scope(&self) -> &'static str {
        "contact.keymasters[]"
    }

    fn check(&self, doc: &SpaceApi, out: &mut Vec<Violation>) {
        let Some(keymasters) = &doc.contact.keymasters else {
            return;
        };
        let base = FieldPath::root().field("contact").field("keymasters");
        for (i, keymaster) in keymasters.iter().enumerate() {
            if !keymaster.has_contact_method() {
                out.push(Violation::new(
                    base.index(i),
                    ViolationKind::BusinessRule(self.id()),
                    "keymaster must specify at least one of irc_nick, phone, email, twitter",
                ));
            }
        }
    }
}

/// `contact` must populate a field usable as an issue report channel.
#[derive(Debug, Clone, Copy, Default)]
pub struct ReportChannelContact;

impl DocumentRule for ReportChannelContact {
    fn id(&self) -> RuleId {
        RuleId::ReportChannelContact
    }

    fn scope(&self) -> &'static str {
        "contact"
    }

    fn check(&self, doc: &SpaceApi, out: &mut Vec<Violation>) {
        let populated = IssueReportChannel::ALL
            .iter()
            .any(|&channel| doc.contact.channel(channel).is_some());
        if !populated {
            out.push(Violation::new(
                FieldPath::root().field("contact"),
                ViolationKind::BusinessRule(self.id()),
                format!(
                    "contact must define at least one of: {}",
                    IssueReportChannel::literals().join(", ")
                ),
            ));
        }
    }
}

/// Observed counts are meaningless without the tube parameters.
#[derive(Debug, Clone, Copy, Default)]
pub struct RadiationCountParameters;

impl DocumentRule for RadiationCountParameters {
    fn id(&self) -> RuleId {
        RuleId::RadiationCountParameters
    }

    fn scope(&self) -> &'static str {
        "sensors.radiation.*[]"
    }

    fn check(&self, doc: &SpaceApi, out: &mut Vec<Violation>) {
        let Some(radiation) = doc.sensors.as_ref().and_then(|s| s.radiation.as_ref()) else {
            return;
        };
        let base = FieldPath::root().field("sensors").field("radiation");
        for &kind in spaceapi_core::RadiationKind::ALL {
            for (i, sensor) in radiation.kind(kind).unwrap_or_default().iter().enumerate() {
                if !sensor.has_count_parameters() {
                    out.push(Violation::new(
                        base.field(kind.as_str()).index(i),
                        ViolationKind::BusinessRule(self.id()),
                        "a cpm reading requires both dead_time and conversion_factor",
                    ));
                }
            }
        }
    }
}

/// An ordered set of rules evaluated together.
#[derive(Debug)]
pub struct RuleSet {
    rules: Vec<Box<dyn DocumentRule>>,
}

impl RuleSet {
    pub fn empty() -> Self {
        Self { rules: Vec::new() }
    }

    /// The rules of the SpaceAPI 0.13 format.
    pub fn space_api() -> Self {
        Self::empty()
            .with(KeymasterContact)
            .with(ReportChannelContact)
            .with(RadiationCountParameters)
    }

    pub fn with(mut self, rule: impl DocumentRule + 'static) -> Self {
        self.rules.push(Box::new(rule));
        self
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    pub fn ids(&self) -> Vec<RuleId> {
        self.rules.iter().map(|r| r.id()).collect()
    }

    /// Run every rule in order. With `fail_fast`, only the first violation
    /// is kept.
    pub fn evaluate(&self, doc: &SpaceApi, fail_fast: bool) -> Vec<Violation> {
        let mut out = Vec::new();
        for rule in &self.rules {
            rule.check(doc, &mut out);
            tracing::trace!(
                rule = %rule.id(),
                scope = rule.scope(),
                found = out.len(),
                "rule evaluated"
            );
            if fail_fast && !out.is_empty() {
                out.truncate(1);
                break;
            }
        }
        out
    }
}

impl Default for RuleSet {
    fn default() -> Self {
        Self::space_api()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn doc(overrides: serde_json::Value) -> SpaceApi {
        let mut base = json!({
            "api": "0.13",
            "space": "Example",
            "logo": "https://example.org/logo.png",
            "url": "https://example.org",
            "location": { "lat": 0.0, "lon": 0.0 },
            "state": { "open": true },
            "contact": { "email": "hello@example.org" },
            "issue_report_channels": ["email"]
        });
        if let (Some(base), Some(extra)) = (base.as_object_mut(), overrides.as_object()) {
            for (k, v) in extra {
                base.insert(k.clone(), v.clone());
            }
        }
        serde_json::from_value(base).unwrap()
    }

    #[test]
    fn test_clean_document_passes_all_rules() {
        assert!(RuleSet::space_api().evaluate(&doc(json!({})), false).is_empty());
    }

    #[test]
    fn test_keymaster_without_contact_method() {
        let d = doc(json!({
            "contact": {
                "email": "hello@example.org",
                "keymasters": [
                    { "name": "Alice", "phone": "+1 800 555 4567" },
                    { "name": "Bob" }
                ]
            }
        }));
        let out = RuleSet::space_api().evaluate(&d, false);
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].path.to_string(), "contact.keymasters[1]");
        assert_eq!(out[0].kind, ViolationKind::BusinessRule(RuleId::KeymasterContact));
    }

    #[test]
    fn test_blank_keymaster_fields_do_not_count() {
        let d = doc(json!({
            "contact": {
                "email": "hello@example.org",
                "keymasters": [{ "name": "Alice", "irc_nick": "", "email": " " }]
            }
        }));
        let out = RuleSet::space_api().evaluate(&d, false);
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].path.to_string(), "contact.keymasters[0]");
        assert_eq!(out[0].kind, ViolationKind::BusinessRule(RuleId::KeymasterContact));
    }

    #[test]
    fn test_empty_rule_set_debug_lists_nothing() {
        assert_eq!(format!("{:?}", RuleSet::empty()), "RuleSet { rules: [] }");
    }

    #[test]
    fn test_contact_without_report_channel() {
        let d = doc(json!({ "contact": { "phone": "+49 228 1234" } }));
        let out = RuleSet::space_api().evaluate(&d, false);
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].path.to_string(), "contact");
        assert!(out[0].message.contains("issue_mail"));
    }

    #[test]
    fn test_cpm_reading_requires_parameters() {
        let d = doc(json!({
            "sensors": {
                "radiation": {
                    "beta_gamma": [
                        { "value": 0.2, "unit": "µSv/h" },
                        { "value": 31, "unit": "cpm", "dead_time": 1.2 }
                    ]
                }
            }
        }));
        let out = RuleSet::space_api().evaluate(&d, false);
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].path.to_string(), "sensors.radiation.beta_gamma[1]");
    }

    #[test]
    fn test_fail_fast_keeps_first_violation() {
        let d = doc(json!({
            "contact": {
                "keymasters": [{ "name": "Alice" }, { "name": "Bob" }]
            }
        }));
        assert_eq!(RuleSet::space_api().evaluate(&d, false).len(), 3);
        let out = RuleSet::space_api().evaluate(&d, true);
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].path.to_string(), "contact.keymasters[0]");
    }

    #[test]
    fn test_empty_rule_set() {
        let d = doc(json!({ "contact": {} }));
        assert!(RuleSet::empty().evaluate(&d, false).is_empty());
        assert_eq!(
            RuleSet::default().ids(),
            vec![
                RuleId::KeymasterContact,
                RuleId::ReportChannelContact,
                RuleId::RadiationCountParameters
            ]
        );
    }
}
