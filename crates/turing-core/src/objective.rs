//! The fixed vocabulary of grading objectives.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ValidationError;

/// A grading dimension that an answer is evaluated on.
///
/// Each objective has a fixed label that doubles as its key in the wire format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Objective {
    /// How well the answer provides correct information.
    #[serde(rename = "factual understanding")]
    Factual,
    /// Clarity of the writing.
    #[serde(rename = "clarity of writing")]
    Clarity,
    #[serde(rename = "creativity")]
    Creativity,
    /// Ability to dissect or interpret the information.
    #[serde(rename = "analytical skills")]
    Analysis,
    /// Ability to apply learned concepts to new scenarios.
    #[serde(rename = "application of knowledge")]
    Application,
    /// Backing up the answer with relevant data or examples.
    #[serde(rename = "use of evidence")]
    Evidence,
    /// Self-awareness or connections to personal experience.
    #[serde(rename = "self reflection")]
    Reflection,
}

impl Objective {
    /// Every objective, in declaration order.
    pub const ALL: [Objective; 7] = [
        Objective::Factual,
        Objective::Clarity,
        Objective::Creativity,
        Objective::Analysis,
        Objective::Application,
        Objective::Evidence,
        Objective::Reflection,
    ];

    /// The wire label for this objective.
    pub const fn label(self) -> &'static str {
        match self {
            Objective::Factual => "factual understanding",
            Objective::Clarity => "clarity of writing",
            Objective::Creativity => "creativity",
            Objective::Analysis => "analytical skills",
            Objective::Application => "application of knowledge",
            Objective::Evidence => "use of evidence",
            Objective::Reflection => "self reflection",
        }
    }

    /// Resolve a wire label back to its objective.
    pub fn from_label(label: &str) -> Result<Self, ValidationError> {
        Self::ALL
            .into_iter()
            .find(|objective| objective.label() == label)
            .ok_or_else(|| ValidationError::UnknownObjective(label.to_string()))
    }
}

impl fmt::Display for Objective {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Objective {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_label(s)
    }
}
