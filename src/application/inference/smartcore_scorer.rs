use super::scorer::DelayScorer;
use crate::domain::errors::{ArtifactError, InferenceError};
use smartcore::ensemble::random_forest_regressor::RandomForestRegressor;
use smartcore::linalg::basic::matrix::DenseMatrix;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use tracing::info;

/// Delay scorer backed by a smartcore tree ensemble fitted on the binary
/// delay label. The ensemble output is already an averaged 0/1 vote share;
/// it is pinned to the unit interval to honor the probability contract.
#[derive(Debug)]
pub struct SmartCoreScorer {
    model: RandomForestRegressor<f64, f64, DenseMatrix<f64>, Vec<f64>>,
}

impl SmartCoreScorer {
    /// Loads the serialized ensemble. Any failure here aborts startup.
    pub fn load(path: &Path) -> Result<Self, ArtifactError> {
        if !path.exists() {
            return Err(ArtifactError::NotFound {
                path: path.to_path_buf(),
            });
        }

        let file = File::open(path).map_err(|e| ArtifactError::Unreadable {
            path: path.to_path_buf(),
            source: e,
        })?;

        let model = serde_json::from_reader(BufReader::new(file)).map_err(|e| {
            ArtifactError::Malformed {
                path: path.to_path_buf(),
                reason: e.to_string(),
            }
        })?;

        info!("Loaded delay model from {:?}", path);
        Ok(Self { model })
    }
}

impl DelayScorer for SmartCoreScorer {
    fn score_probability(&self, features: &[f64]) -> Result<f64, InferenceError> {
        let matrix = DenseMatrix::from_2d_vec(&vec![features.to_vec()]).map_err(|e| {
            InferenceError::Scoring {
                reason: format!("Matrix creation failed: {}", e),
            }
        })?;

        let predictions = self
            .model
            .predict(&matrix)
            .map_err(|e| InferenceError::Scoring {
                reason: format!("Prediction failed: {}", e),
            })?;

        let raw = predictions
            .first()
            .copied()
            .ok_or_else(|| InferenceError::Scoring {
                reason: "No prediction returned".to_string(),
            })?;

        Ok(raw.clamp(0.0, 1.0))
    }

    fn name(&self) -> &str {
        "SmartCore Random Forest"
    }

    fn version(&self) -> &str {
        "v2"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use smartcore::ensemble::random_forest_regressor::RandomForestRegressorParameters;

    fn fit_toy_model() -> RandomForestRegressor<f64, f64, DenseMatrix<f64>, Vec<f64>> {
        // Label tracks the second feature; enough rows for stable splits.
        let x = DenseMatrix::from_2d_vec(&vec![
            vec![0.1, 0.0],
            vec![0.9, 0.0],
            vec![0.2, 1.0],
            vec![0.8, 1.0],
            vec![0.3, 0.0],
            vec![0.7, 1.0],
            vec![0.4, 0.0],
            vec![0.6, 1.0],
        ])
        .unwrap();
        let y = vec![0.0, 0.0, 1.0, 1.0, 0.0, 1.0, 0.0, 1.0];

        let params = RandomForestRegressorParameters::default()
            .with_n_trees(16)
            .with_seed(42);
        RandomForestRegressor::fit(&x, &y, params).unwrap()
    }

    #[test]
    fn test_missing_model_file_fails_load() {
        let err = SmartCoreScorer::load(Path::new("does_not_exist/delay_model.json")).unwrap_err();
        assert!(matches!(err, ArtifactError::NotFound { .. }));
    }

    #[test]
    fn test_serialized_model_scores_deterministically() {
        let model = fit_toy_model();
        let path = std::env::temp_dir().join("delaycast_scorer_roundtrip.json");
        serde_json::to_writer(File::create(&path).unwrap(), &model).unwrap();

        let scorer = SmartCoreScorer::load(&path).unwrap();
        let p1 = scorer.score_probability(&[0.5, 1.0]).unwrap();
        let p2 = scorer.score_probability(&[0.5, 1.0]).unwrap();

        assert!((0.0..=1.0).contains(&p1));
        assert_eq!(p1, p2);

        let _ = std::fs::remove_file(&path);
    }
}
