//! Rubric presets and the rubric aggregate.
//!
//! A [`Rubric`] maps each [`Objective`] to at most one [`GradingCriteria`].
//! It can start empty, from a [`RubricType`] preset, or from a flat
//! `label -> weight` payload received over the wire.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::criteria::GradingCriteria;
use crate::error::ValidationError;
use crate::objective::Objective;

// ---------------------------------------------------------------------------
// Presets
// ---------------------------------------------------------------------------

/// Named rubric presets. `Custom` tags any rubric not built from a preset.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RubricType {
    Factual,
    Analytical,
    Creative,
    Application,
    Comprehensive,
    Communication,
    #[default]
    Custom,
}

const FACTUAL_DEFAULTS: &[(Objective, f64)] = &[
    // Accuracy and supporting evidence
    (Objective::Factual, 1.0),
    (Objective::Evidence, 1.0),
    (Objective::Clarity, 1.0),
];

const ANALYTICAL_DEFAULTS: &[(Objective, f64)] = &[
    (Objective::Analysis, 1.0),
    (Objective::Evidence, 1.0),
    (Objective::Reflection, 1.0),
];

const CREATIVE_DEFAULTS: &[(Objective, f64)] = &[
    (Objective::Creativity, 1.0),
    (Objective::Clarity, 1.0),
    (Objective::Reflection, 1.0),
];

const APPLICATION_DEFAULTS: &[(Objective, f64)] = &[
    (Objective::Application, 1.0),
    (Objective::Analysis, 1.0),
    (Objective::Factual, 1.0),
];

const COMPREHENSIVE_DEFAULTS: &[(Objective, f64)] = &[
    (Objective::Factual, 1.0),
    (Objective::Analysis, 1.0),
    (Objective::Application, 1.0),
    (Objective::Creativity, 1.0),
];

const COMMUNICATION_DEFAULTS: &[(Objective, f64)] = &[
    (Objective::Clarity, 1.0),
    (Objective::Reflection, 1.0),
    (Objective::Creativity, 1.0),
];

impl RubricType {
    /// Every preset, `Custom` last.
    pub const ALL: [RubricType; 7] = [
        RubricType::Factual,
        RubricType::Analytical,
        RubricType::Creative,
        RubricType::Application,
        RubricType::Comprehensive,
        RubricType::Communication,
        RubricType::Custom,
    ];

    /// Human-readable label, e.g. "Factual Rubric".
    pub const fn label(self) -> &'static str {
        match self {
            RubricType::Factual => "Factual Rubric",
            RubricType::Analytical => "Analytical Rubric",
            RubricType::Creative => "Creative Rubric",
            RubricType::Application => "Application Rubric",
            RubricType::Comprehensive => "Comprehensive Rubric",
            RubricType::Communication => "Communication Rubric",
            RubricType::Custom => "Custom Rubric",
        }
    }

    /// Short name used in question files and on the command line.
    pub const fn name(self) -> &'static str {
        match self {
            RubricType::Factual => "factual",
            RubricType::Analytical => "analytical",
            RubricType::Creative => "creative",
            RubricType::Application => "application",
            RubricType::Comprehensive => "comprehensive",
            RubricType::Communication => "communication",
            RubricType::Custom => "custom",
        }
    }

    /// The ordered `(objective, weight)` defaults this preset starts with.
    pub const fn defaults(self) -> &'static [(Objective, f64)] {
        match self {
            RubricType::Factual => FACTUAL_DEFAULTS,
            RubricType::Analytical => ANALYTICAL_DEFAULTS,
            RubricType::Creative => CREATIVE_DEFAULTS,
            RubricType::Application => APPLICATION_DEFAULTS,
            RubricType::Comprehensive => COMPREHENSIVE_DEFAULTS,
            RubricType::Communication => COMMUNICATION_DEFAULTS,
            RubricType::Custom => &[],
        }
    }
}

impl fmt::Display for RubricType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for RubricType {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        Self::ALL
            .into_iter()
            .find(|t| t.name() == wanted || t.label().to_lowercase() == wanted)
            .ok_or_else(|| ValidationError::UnknownRubricType(s.to_string()))
    }
}

// ---------------------------------------------------------------------------
// Rubric
// ---------------------------------------------------------------------------

/// A set of weighted objectives used to grade a question.
///
/// On the wire a rubric is a flat `label -> weight` mapping; the preset tag
/// is not transmitted, so a deserialized rubric is always `Custom`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(into = "BTreeMap<String, f64>", try_from = "serde_json::Value")]
pub struct Rubric {
    criteria: BTreeMap<Objective, GradingCriteria>,
    rubric_type: RubricType,
}

impl Rubric {
    /// A rubric with no criteria, tagged `Custom`.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Materialize one criteria per default pair of `rubric_type`.
    pub fn from_rubric_type(rubric_type: RubricType) -> Self {
        let criteria = rubric_type
            .defaults()
            .iter()
            .map(|&(objective, weight)| {
                (objective, GradingCriteria::preset(objective, weight))
            })
            .collect();
        Self {
            criteria,
            rubric_type,
        }
    }

    /// Rebuild a rubric from a flat `label -> weight` JSON payload.
    ///
    /// Fails if the payload is not an object, a weight is not a number, a
    /// label is not a known objective, or a weight is invalid.
    pub fn from_payload(payload: &serde_json::Value) -> Result<Self, ValidationError> {
        let entries = payload.as_object().ok_or_else(|| {
            ValidationError::MalformedRubric(
                "Invalid payload provided. Must be a dictionary.".to_string(),
            )
        })?;

        let mut rubric = Self::empty();
        for (label, value) in entries {
            let weight = value.as_f64().ok_or_else(|| {
                ValidationError::MalformedRubric(format!(
                    "weight for {label:?} must be a number, got {value}"
                ))
            })?;
            rubric.add_criteria_by_label(label, weight)?;
        }
        Ok(rubric)
    }

    /// Rebuild a rubric from already-typed `label -> weight` entries.
    pub fn from_weights<I, K>(entries: I) -> Result<Self, ValidationError>
    where
        I: IntoIterator<Item = (K, f64)>,
        K: AsRef<str>,
    {
        let mut rubric = Self::empty();
        for (label, weight) in entries {
            rubric.add_criteria_by_label(label.as_ref(), weight)?;
        }
        Ok(rubric)
    }

    /// Set the criteria for `objective`, replacing any existing one.
    pub fn add_criteria(
        &mut self,
        objective: Objective,
        weight: f64,
    ) -> Result<(), ValidationError> {
        let criteria = GradingCriteria::new(objective, weight)?;
        if let Some(previous) = self.criteria.insert(objective, criteria) {
            debug!(
                objective = %objective,
                old_weight = previous.weight(),
                new_weight = weight,
                "replaced criteria"
            );
        }
        Ok(())
    }

    /// Like [`Rubric::add_criteria`], resolving the objective from its wire label.
    pub fn add_criteria_by_label(
        &mut self,
        label: &str,
        weight: f64,
    ) -> Result<(), ValidationError> {
        let objective = Objective::from_label(label)?;
        self.add_criteria(objective, weight)
    }

    /// Number of distinct objectives in the rubric.
    pub fn size(&self) -> usize {
        self.criteria.len()
    }

    pub fn is_empty(&self) -> bool {
        self.criteria.is_empty()
    }

    /// The preset this rubric was built from, or `Custom`.
    pub fn rubric_type(&self) -> RubricType {
        self.rubric_type
    }

    pub fn get(&self, objective: Objective) -> Option<&GradingCriteria> {
        self.criteria.get(&objective)
    }

    pub fn criteria(&self) -> impl Iterator<Item = &GradingCriteria> {
        self.criteria.values()
    }

    /// Flatten to the wire format: one `label -> weight` entry per criteria.
    pub fn serialize(&self) -> BTreeMap<String, f64> {
        self.criteria
            .values()
            .map(|c| (c.objective().label().to_string(), c.weight()))
            .collect()
    }
}

impl From<Rubric> for BTreeMap<String, f64> {
    fn from(rubric: Rubric) -> Self {
        rubric.serialize()
    }
}

impl TryFrom<serde_json::Value> for Rubric {
    type Error = ValidationError;

    fn try_from(payload: serde_json::Value) -> Result<Self, Self::Error> {
        Self::from_payload(&payload)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn presets() -> impl Iterator<Item = RubricType> {
        RubricType::ALL
            .into_iter()
            .filter(|t| *t != RubricType::Custom)
    }

    #[test]
    fn rubric_type_labels() {
        assert_eq!(RubricType::Factual.label(), "Factual Rubric");
        assert_eq!(RubricType::Analytical.label(), "Analytical Rubric");
        assert_eq!(RubricType::Creative.label(), "Creative Rubric");
        assert_eq!(RubricType::Application.label(), "Application Rubric");
        assert_eq!(RubricType::Comprehensive.label(), "Comprehensive Rubric");
        assert_eq!(RubricType::Communication.label(), "Communication Rubric");
        assert_eq!(RubricType::Custom.label(), "Custom Rubric");
    }

    #[test]
    fn rubric_type_parse() {
        assert_eq!("factual".parse::<RubricType>().unwrap(), RubricType::Factual);
        assert_eq!(
            "Comprehensive Rubric".parse::<RubricType>().unwrap(),
            RubricType::Comprehensive
        );
        assert_eq!(" CUSTOM ".parse::<RubricType>().unwrap(), RubricType::Custom);
        assert_eq!(
            "holistic".parse::<RubricType>().unwrap_err(),
            ValidationError::UnknownRubricType("holistic".into())
        );
    }

    #[test]
    fn preset_defaults_all_weigh_one() {
        for t in presets() {
            assert!(!t.defaults().is_empty(), "{t} has no defaults");
            assert!(t.defaults().iter().all(|(_, w)| *w == 1.0));
        }
        assert!(RubricType::Custom.defaults().is_empty());
    }

    #[test]
    fn empty_rubric() {
        let rubric = Rubric::empty();
        assert_eq!(rubric.size(), 0);
        assert!(rubric.is_empty());
        assert_eq!(rubric.rubric_type(), RubricType::Custom);
        assert!(rubric.serialize().is_empty());
    }

    #[test]
    fn from_rubric_type_materializes_defaults() {
        for t in presets() {
            let rubric = Rubric::from_rubric_type(t);
            assert_eq!(rubric.size(), t.defaults().len());
            assert_eq!(rubric.rubric_type(), t);
            for &(objective, weight) in t.defaults() {
                let criteria = rubric.get(objective).expect("default objective present");
                assert_eq!(criteria.weight(), weight);
            }
        }
    }

    #[test]
    fn add_criteria_replaces_existing_objective() {
        let mut rubric = Rubric::from_rubric_type(RubricType::Factual);
        let before = rubric.get(Objective::Factual).cloned().unwrap();

        rubric.add_criteria(Objective::Factual, 2.5).unwrap();

        assert_eq!(rubric.size(), 3);
        let after = rubric.get(Objective::Factual).unwrap();
        assert_eq!(after.weight(), 2.5);
        assert_ne!(&before, after);
        assert_eq!(before.weight(), 1.0);
    }

    #[test]
    fn add_criteria_twice_keeps_size() {
        let mut rubric = Rubric::empty();
        rubric.add_criteria(Objective::Creativity, 1.0).unwrap();
        rubric.add_criteria(Objective::Creativity, 3.0).unwrap();
        assert_eq!(rubric.size(), 1);
        assert_eq!(rubric.get(Objective::Creativity).unwrap().weight(), 3.0);
    }

    #[test]
    fn add_criteria_with_bad_weight_leaves_rubric_untouched() {
        let mut rubric = Rubric::from_rubric_type(RubricType::Creative);
        let err = rubric.add_criteria(Objective::Creativity, 0.3).unwrap_err();
        assert!(matches!(err, ValidationError::InvalidWeight { .. }));
        assert_eq!(rubric.get(Objective::Creativity).unwrap().weight(), 1.0);
    }

    #[test]
    fn add_criteria_by_unknown_label_fails() {
        let mut rubric = Rubric::empty();
        let err = rubric.add_criteria_by_label("spelling", 1.0).unwrap_err();
        assert_eq!(err, ValidationError::UnknownObjective("spelling".into()));
        assert!(rubric.is_empty());
    }

    #[test]
    fn serialize_uses_labels_and_floats() {
        let mut rubric = Rubric::empty();
        rubric.add_criteria(Objective::Analysis, 2.0).unwrap();
        rubric.add_criteria(Objective::Reflection, 0.5).unwrap();

        let wire = serde_json::to_value(rubric.serialize()).unwrap();
        assert_eq!(
            wire,
            json!({"analytical skills": 2.0, "self reflection": 0.5})
        );
    }

    #[test]
    fn payload_round_trip_drops_preset_tag() {
        for t in presets() {
            let rubric = Rubric::from_rubric_type(t);
            let payload = serde_json::to_value(rubric.serialize()).unwrap();
            let rebuilt = Rubric::from_payload(&payload).unwrap();

            assert_eq!(rebuilt.size(), rubric.size());
            assert_eq!(rebuilt.rubric_type(), RubricType::Custom);
            for criteria in rubric.criteria() {
                let other = rebuilt.get(criteria.objective()).unwrap();
                assert_eq!(other.weight(), criteria.weight());
            }
        }
    }

    #[test]
    fn from_payload_accepts_integer_weights() {
        let rubric = Rubric::from_payload(&json!({"creativity": 2})).unwrap();
        assert_eq!(rubric.get(Objective::Creativity).unwrap().weight(), 2.0);
    }

    #[test]
    fn from_payload_rejects_unknown_label() {
        let err = Rubric::from_payload(&json!({"handwriting": 1.0})).unwrap_err();
        assert!(matches!(err, ValidationError::UnknownObjective(_)));
    }

    #[test]
    fn from_payload_rejects_wrong_shape() {
        for payload in [json!(["factual understanding", 1.0]), json!("rubric"), json!(3)] {
            let err = Rubric::from_payload(&payload).unwrap_err();
            assert!(
                err.to_string().contains("Must be a dictionary"),
                "unexpected error: {err}"
            );
        }
        let err = Rubric::from_payload(&json!({"creativity": "high"})).unwrap_err();
        assert!(matches!(err, ValidationError::MalformedRubric(_)));
    }

    #[test]
    fn from_payload_propagates_weight_errors() {
        let err = Rubric::from_payload(&json!({"creativity": -1.0})).unwrap_err();
        assert!(matches!(err, ValidationError::InvalidWeight { .. }));
    }

    #[test]
    fn from_weights_builds_custom_rubric() {
        let rubric =
            Rubric::from_weights([("use of evidence", 1.5), ("clarity of writing", 1.0)]).unwrap();
        assert_eq!(rubric.size(), 2);
        assert_eq!(rubric.rubric_type(), RubricType::Custom);
    }

    #[test]
    fn serde_goes_through_wire_format() {
        let rubric = Rubric::from_rubric_type(RubricType::Communication);
        let json = serde_json::to_string(&rubric).unwrap();
        let back: Rubric = serde_json::from_str(&json).unwrap();
        assert_eq!(back.serialize(), rubric.serialize());

        let bad: Result<Rubric, _> = serde_json::from_str(r#"{"tone": 1.0}"#);
        assert!(bad.unwrap_err().to_string().contains("unknown objective"));
    }
}
