//! Scoring by level id
//!
//! Entry point for callers holding a raw level id rather than a `Level`.

use crate::error::{Result, WeightlabError};
use crate::levels::LevelCatalog;

/// Weighted sum for `inputs` and `weights` under level `level_id`.
///
/// An id missing from the catalog is reported as `UnknownLevel`: request
/// handlers resolve ids before scoring, so reaching this is a caller defect.
pub fn score(
    catalog: &LevelCatalog,
    level_id: u32,
    inputs: &[u8],
    weights: &[f64],
) -> Result<f64> {
    let level = catalog
        .find(level_id)
        .ok_or(WeightlabError::UnknownLevel { level: level_id })?;
    level.score(inputs, weights)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_score_by_id() {
        let catalog = LevelCatalog::builtin().unwrap();
        let sum = score(&catalog, 1, &[1, 0], &[2.0, 1.0]).unwrap();
        assert_relative_eq!(sum, 2.0);
    }

    #[test]
    fn test_unknown_level() {
        let catalog = LevelCatalog::builtin().unwrap();
        let err = score(&catalog, 7, &[1, 0], &[2.0, 1.0]).unwrap_err();
        assert!(matches!(err, WeightlabError::UnknownLevel { level: 7 }));
    }

    #[test]
    fn test_non_binary_row() {
        let catalog = LevelCatalog::builtin().unwrap();
        let err = score(&catalog, 3, &[2, 1, 3, 5], &[1.0, 1.0]).unwrap_err();
        assert_eq!(err.error_code(), "INVALID_REQUEST");
    }

    #[test]
    fn test_wrong_weight_count() {
        let catalog = LevelCatalog::builtin().unwrap();
        let err = score(&catalog, 2, &[1, 0, 1], &[1.0, 1.0]).unwrap_err();
        assert_eq!(err.error_code(), "INVALID_WEIGHT_COUNT");
    }
}
