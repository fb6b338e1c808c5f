//! A single weighted objective inside a rubric.

use crate::error::ValidationError;
use crate::objective::Objective;

/// One `(objective, weight)` pairing.
///
/// The weight is always positive and a multiple of 0.5. A criteria never
/// changes after construction; a rubric replaces it wholesale instead.
#[derive(Debug, Clone, PartialEq)]
pub struct GradingCriteria {
    objective: Objective,
    weight: f64,
}

impl GradingCriteria {
    pub fn new(objective: Objective, weight: f64) -> Result<Self, ValidationError> {
        validate_weight(weight)?;
        Ok(Self { objective, weight })
    }

    /// Build a criteria from a preset default. Preset weights are constants
    /// that already satisfy the weight rules.
    pub(crate) fn preset(objective: Objective, weight: f64) -> Self {
        debug_assert!(validate_weight(weight).is_ok());
        Self { objective, weight }
    }

    pub fn objective(&self) -> Objective {
        self.objective
    }

    pub fn weight(&self) -> f64 {
        self.weight
    }
}

/// Check the weight constraints: finite, greater than zero, and a multiple of 0.5.
pub fn validate_weight(weight: f64) -> Result<(), ValidationError> {
    if !weight.is_finite() {
        return Err(ValidationError::InvalidWeight {
            weight,
            reason: "Weight must be a finite number.",
        });
    }
    if weight <= 0.0 {
        return Err(ValidationError::InvalidWeight {
            weight,
            reason: "Weight must be greater than 0.",
        });
    }
    if (weight * 2.0).fract() != 0.0 {
        return Err(ValidationError::InvalidWeight {
            weight,
            reason: "Weight must be a multiple of 0.5",
        });
    }
    Ok(())
}
