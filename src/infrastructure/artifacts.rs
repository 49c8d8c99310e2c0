use crate::application::inference::scorer::FeatureTransformer;
use crate::domain::errors::{ArtifactError, InferenceError};
use crate::domain::ml::feature_registry;
use crate::domain::order::{OrderFeatures, RawValue};
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use tracing::info;

/// Fitted preprocessing artifact: the column order the model was trained on
/// plus per-column encoding tables for the categorical fields. Produced by
/// the external training process; read-only here.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FittedEncoder {
    columns: Vec<String>,
    encodings: HashMap<String, HashMap<String, f64>>,
}

impl FittedEncoder {
    /// Loads and schema-checks the encoder. Any failure aborts startup.
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

        let encoder: FittedEncoder =
            serde_json::from_reader(BufReader::new(file)).map_err(|e| ArtifactError::Malformed {
                path: path.to_path_buf(),
                reason: e.to_string(),
            })?;

        encoder.validate()?;
        info!(
            "Loaded feature encoder from {:?} ({} columns)",
            path,
            encoder.columns.len()
        );
        Ok(encoder)
    }

    /// A categorical column must carry a table covering its full closed
    /// domain; a numeric column must not carry one. Violations are fatal.
    fn validate(&self) -> Result<(), ArtifactError> {
        if self.columns.is_empty() {
            return Err(ArtifactError::SchemaMismatch {
                reason: "encoder declares no feature columns".to_string(),
            });
        }

        let mut seen = HashSet::new();
        for column in &self.columns {
            if !feature_registry::is_known_column(column) {
                return Err(ArtifactError::SchemaMismatch {
                    reason: format!("unknown column '{}'", column),
                });
            }
            if !seen.insert(column.as_str()) {
                return Err(ArtifactError::SchemaMismatch {
                    reason: format!("duplicate column '{}'", column),
                });
            }

            if feature_registry::is_categorical_column(column) {
                let table = self.encodings.get(column).ok_or_else(|| {
                    ArtifactError::SchemaMismatch {
                        reason: format!("missing encoding table for '{}'", column),
                    }
                })?;
                for level in feature_registry::levels_for(column).unwrap_or_default() {
                    if !table.contains_key(level) {
                        return Err(ArtifactError::SchemaMismatch {
                            reason: format!("encoding table for '{}' lacks level '{}'", column, level),
                        });
                    }
                }
            } else if self.encodings.contains_key(column) {
                return Err(ArtifactError::SchemaMismatch {
                    reason: format!("encoding table declared for numeric column '{}'", column),
                });
            }
        }

        Ok(())
    }
}

impl FeatureTransformer for FittedEncoder {
    fn transform(&self, record: &OrderFeatures) -> Result<Vec<f64>, InferenceError> {
        self.columns
            .iter()
            .map(|column| match record.value(column) {
                Some(RawValue::Numeric(v)) => Ok(v),
                Some(RawValue::Level(level)) => self
                    .encodings
                    .get(column)
                    .and_then(|table| table.get(level))
                    .copied()
                    .ok_or_else(|| InferenceError::Transform {
                        reason: format!("no fitted encoding for {}={}", column, level),
                    }),
                None => Err(InferenceError::Transform {
                    reason: format!("record does not provide column '{}'", column),
                }),
            })
            .collect()
    }

    fn columns(&self) -> &[String] {
        &self.columns
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::order::{
        AgentAge, AgentRating, Area, Category, Traffic, Vehicle, Weather,
    };
    use serde_json::json;

    fn full_tables() -> serde_json::Value {
        json!({
            "Weather": {"Sunny": 0.18, "Cloudy": 0.24, "Stormy": 0.61, "Sandstorms": 0.55},
            "Traffic": {"Low": 0.2, "Medium": 0.35, "High": 0.5, "Jam": 0.7},
            "Vehicle": {"motorcycle": 0.3, "scooter": 0.4},
            "Area": {"Urban": 0.3, "Metropolitian": 0.45, "Rural": 0.5},
            "Category": {"Clothing": 0.3, "Electronics": 0.4, "Sports": 0.35, "Cosmetics": 0.3, "Toys": 0.38}
        })
    }

    fn encoder_from(value: serde_json::Value) -> Result<FittedEncoder, ArtifactError> {
        let encoder: FittedEncoder = serde_json::from_value(value).unwrap();
        encoder.validate()?;
        Ok(encoder)
    }

    fn sample_record() -> OrderFeatures {
        OrderFeatures {
            agent_age: AgentAge::new(30).unwrap(),
            agent_rating: AgentRating::new(4.5).unwrap(),
            weather: Weather::Stormy,
            traffic: Traffic::Jam,
            vehicle: Vehicle::Scooter,
            area: Area::Rural,
            category: Category::Toys,
            duration: None,
        }
    }

    #[test]
    fn test_transform_follows_column_order() {
        let encoder = encoder_from(json!({
            "columns": ["Traffic", "Agent_Age", "Weather", "Agent_Rating", "Vehicle", "Area", "Category"],
            "encodings": full_tables()
        }))
        .unwrap();

        let vector = encoder.transform(&sample_record()).unwrap();
        assert_eq!(vector, vec![0.7, 30.0, 0.61, 4.5, 0.4, 0.5, 0.38]);
    }

    #[test]
    fn test_unknown_column_is_rejected() {
        let err = encoder_from(json!({
            "columns": ["Agent_Age", "Distance"],
            "encodings": {}
        }))
        .unwrap_err();
        assert!(matches!(err, ArtifactError::SchemaMismatch { .. }));
        assert!(err.to_string().contains("Distance"));
    }

    #[test]
    fn test_incomplete_encoding_table_is_rejected() {
        let err = encoder_from(json!({
            "columns": ["Weather"],
            "encodings": {"Weather": {"Sunny": 0.2, "Cloudy": 0.3}}
        }))
        .unwrap_err();
        assert!(err.to_string().contains("Stormy") || err.to_string().contains("Sandstorms"));
    }

    #[test]
    fn test_duplicate_column_is_rejected() {
        let err = encoder_from(json!({
            "columns": ["Agent_Age", "Agent_Age"],
            "encodings": {}
        }))
        .unwrap_err();
        assert!(err.to_string().contains("duplicate"));
    }

    #[test]
    fn test_numeric_column_with_table_is_rejected() {
        let err = encoder_from(json!({
            "columns": ["Agent_Age"],
            "encodings": {"Agent_Age": {"18": 0.1}}
        }))
        .unwrap_err();
        assert!(err.to_string().contains("numeric"));
    }

    #[test]
    fn test_duration_column_without_value_fails_transform() {
        let encoder = encoder_from(json!({
            "columns": ["Agent_Age", "Duration"],
            "encodings": {}
        }))
        .unwrap();

        let err = encoder.transform(&sample_record()).unwrap_err();
        assert!(matches!(err, InferenceError::Transform { .. }));
    }
}
