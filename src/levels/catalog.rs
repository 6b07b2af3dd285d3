//! Level catalog
//!
//! Holds the validated level list. The built-in catalog is constructed once
//! per process and shared by reference; it is never mutated afterwards.

use std::sync::OnceLock;

use log::info;

use super::{ActivationInfo, Level, LevelFormula};
use crate::error::{Result, WeightlabError};

static BUILTIN: OnceLock<std::result::Result<LevelCatalog, String>> = OnceLock::new();

/// Ordered, validated set of levels
#[derive(Debug, Clone)]
pub struct LevelCatalog {
    levels: Vec<Level>,
}

impl LevelCatalog {
    /// Build a catalog, rejecting inconsistent level definitions.
    ///
    /// Ids must run 1..=N in order, input labels must match the formula's
    /// arity and canonical weights the formula's weight count.
    pub fn new(levels: Vec<Level>) -> Result<Self> {
        if levels.is_empty() {
            return Err(WeightlabError::InvalidCatalog {
                reason: "catalog has no levels".to_string(),
            });
        }

        for (position, level) in levels.iter().enumerate() {
            validate_level(position, level)?;
        }

        info!("Level catalog ready: {} levels", levels.len());
        Ok(Self { levels })
    }

    /// The three built-in levels
    pub fn builtin() -> Result<Self> {
        Self::new(builtin_levels())
    }

    /// Process-wide built-in catalog, constructed on first use
    pub fn global() -> Result<&'static LevelCatalog> {
        BUILTIN
            .get_or_init(|| Self::builtin().map_err(|e| e.to_string()))
            .as_ref()
            .map_err(|reason| WeightlabError::InvalidCatalog {
                reason: reason.clone(),
            })
    }

    /// All levels in display order
    pub fn levels(&self) -> &[Level] {
        &self.levels
    }

    /// Look up a level by id
    pub fn get(&self, id: u32) -> Result<&Level> {
        self.find(id)
            .ok_or(WeightlabError::LevelNotFound { level: id })
    }

    /// Look up a level by id, `None` when absent
    pub fn find(&self, id: u32) -> Option<&Level> {
        self.levels.iter().find(|l| l.id == id)
    }

    pub fn len(&self) -> usize {
        self.levels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.levels.is_empty()
    }
}

fn validate_level(position: usize, level: &Level) -> Result<()> {
    let invalid = |reason: String| WeightlabError::InvalidCatalog {
        reason: format!("level {}: {}", level.id, reason),
    };

    let expected_id = position as u32 + 1;
    if level.id != expected_id {
        return Err(invalid(format!(
            "out of sequence, expected id {}",
            expected_id
        )));
    }
    if level.input_labels.len() != level.formula.input_count() {
        return Err(invalid(format!(
            "{:?} reads {} inputs but {} labels are declared",
            level.formula,
            level.formula.input_count(),
            level.input_labels.len()
        )));
    }
    if level.canonical_weights.len() != level.formula.weight_count() {
        return Err(invalid(format!(
            "{:?} takes {} weights but {} canonical weights are declared",
            level.formula,
            level.formula.weight_count(),
            level.canonical_weights.len()
        )));
    }
    if !level.threshold.is_finite() || level.canonical_weights.iter().any(|w| !w.is_finite()) {
        return Err(invalid("threshold and weights must be finite".to_string()));
    }

    Ok(())
}

fn labels(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn builtin_levels() -> Vec<Level> {
    vec![
        Level {
            id: 1,
            title: "Level 1: Beginner".to_string(),
            description: "Two simple factors".to_string(),
            product_name: "New video game".to_string(),
            input_labels: labels(&["Enough money?", "Parents allowed it?"]),
            formula: LevelFormula::Difference,
            activation: ActivationInfo {
                name: "Factor balance function".to_string(),
                formula: "S = X₁·W₁ - X₂·W₂\ny = {1, if S ≥ 0; 0, if S < 0}".to_string(),
                description: "The function takes the difference between two weighted factors. \
                    If the balance leans towards buying (S ≥ 0), we buy the product."
                    .to_string(),
                scientific_name: "Difference Function".to_string(),
                explanation: "This function models a decision as a comparison of two factors. \
                    The first factor (X₁) pushes towards buying with weight W₁, the second (X₂) \
                    pushes against it with weight W₂. Subtracting the weighted second factor from \
                    the first gives the balance. A balance of zero or more means buy. Different \
                    factors can pull a decision in opposite directions."
                    .to_string(),
            },
            has_bias: false,
            bias: 0.0,
            threshold: 0.0,
            canonical_weights: vec![2.0, 1.0],
        },
        Level {
            id: 2,
            title: "Level 2: Intermediate".to_string(),
            description: "Three factors for the decision".to_string(),
            product_name: "Game console".to_string(),
            input_labels: labels(&["Enough money?", "Parents allowed it?", "Good game reviews?"]),
            formula: LevelFormula::Majority,
            activation: ActivationInfo {
                name: "Majority vote function".to_string(),
                formula: "S = X₁·W₁ + X₂·W₂ + X₃·W₃\ny = {1, if S ≥ 2; 0, if S < 2}".to_string(),
                description: "The function adds up three weighted factors. The product is bought \
                    when at least two of the three factors speak for it."
                    .to_string(),
                scientific_name: "Majority Function (threshold logic)".to_string(),
                explanation: "Each factor casts a weighted vote and the votes are summed. With a \
                    threshold of 2 the neuron answers \"buy\" only when the majority of factors \
                    agree. Majority gates are a classic example of what a single threshold \
                    neuron can compute."
                    .to_string(),
            },
            has_bias: false,
            bias: 0.0,
            threshold: 2.0,
            canonical_weights: vec![1.0, 1.0, 1.0],
        },
        Level {
            id: 3,
            title: "Level 3: Advanced".to_string(),
            description: "Four factors - a real challenge!".to_string(),
            product_name: "Gaming laptop".to_string(),
            input_labels: labels(&[
                "Enough money?",
                "Parents allowed it?",
                "Good reviews?",
                "Time to play?",
            ]),
            formula: LevelFormula::NonlinearLogic,
            activation: ActivationInfo {
                name: "Combined logic function".to_string(),
                formula: "A = X₁ XOR X₂, B = X₃ AND X₄\n\
                          S = A·W₁ + B·W₂\n\
                          y = {1, if S ≥ 1; 0, if S < 1}"
                    .to_string(),
                description: "The function first combines the inputs logically: A is 1 when \
                    exactly one of the first two factors holds, B is 1 when both of the last two \
                    hold. The weights apply to A and B, not to the raw inputs."
                    .to_string(),
                scientific_name: "Nonlinear Logic Function (XOR/AND features)".to_string(),
                explanation: "XOR cannot be computed by a single linear threshold neuron. Here \
                    the nonlinear work is done by hand-crafted features (XOR and AND), and the \
                    neuron only has to weigh them. Real networks learn such features in hidden \
                    layers."
                    .to_string(),
            },
            has_bias: false,
            bias: 0.0,
            threshold: 1.0,
            canonical_weights: vec![1.0, 1.0],
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_catalog_is_valid() {
        let catalog = LevelCatalog::builtin().unwrap();
        assert_eq!(catalog.len(), 3);

        let ids: Vec<u32> = catalog.levels().iter().map(|l| l.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[test]
    fn test_global_is_shared() {
        let a = LevelCatalog::global().unwrap();
        let b = LevelCatalog::global().unwrap();
        assert!(std::ptr::eq(a, b));
    }

    #[test]
    fn test_get_unknown_level() {
        let catalog = LevelCatalog::builtin().unwrap();
        assert!(catalog.get(2).is_ok());

        let err = catalog.get(4).unwrap_err();
        assert!(matches!(err, WeightlabError::LevelNotFound { level: 4 }));
        assert!(catalog.find(0).is_none());
    }

    #[test]
    fn test_level_three_weight_count() {
        let catalog = LevelCatalog::builtin().unwrap();
        let level = catalog.get(3).unwrap();
        assert_eq!(level.input_count(), 4);
        assert_eq!(level.weight_count(), 2);
        assert_eq!(level.zero_weights(), vec![0.0, 0.0]);
    }

    #[test]
    fn test_rejects_label_mismatch() {
        let mut levels = builtin_levels();
        levels[1].input_labels.pop();

        let err = LevelCatalog::new(levels).unwrap_err();
        assert_eq!(err.error_code(), "INVALID_CATALOG");
        assert!(err.to_string().contains("level 2"));
    }

    #[test]
    fn test_rejects_canonical_weight_mismatch() {
        let mut levels = builtin_levels();
        levels[2].canonical_weights = vec![1.0, 1.0, 1.0, 1.0];
        assert!(LevelCatalog::new(levels).is_err());
    }

    #[test]
    fn test_rejects_out_of_sequence_ids() {
        let mut levels = builtin_levels();
        levels.swap(0, 1);
        assert!(LevelCatalog::new(levels).is_err());

        assert!(LevelCatalog::new(Vec::new()).is_err());
    }
}
