use super::scorer::{DelayScorer, FeatureTransformer};
use crate::domain::errors::InferenceError;
use crate::domain::order::OrderFeatures;
use crate::domain::outcome::ScoredOutcome;
use std::sync::Arc;

/// Stateless inference boundary: transform the record, score it, apply the
/// fixed decision threshold. One record in, one outcome out, no retries.
pub struct InferenceAdapter {
    transformer: Arc<dyn FeatureTransformer>,
    scorer: Arc<dyn DelayScorer>,
}

impl InferenceAdapter {
    pub fn new(transformer: Arc<dyn FeatureTransformer>, scorer: Arc<dyn DelayScorer>) -> Self {
        Self {
            transformer,
            scorer,
        }
    }

    /// Whether the loaded encoder was fitted with the Duration column.
    /// Drives whether the form shows a duration control at all.
    pub fn wants_duration(&self) -> bool {
        self.transformer.columns().iter().any(|c| c == "Duration")
    }

    pub fn model_name(&self) -> &str {
        self.scorer.name()
    }

    pub fn column_count(&self) -> usize {
        self.transformer.columns().len()
    }

    pub fn score(&self, record: &OrderFeatures) -> Result<ScoredOutcome, InferenceError> {
        let features = self.transformer.transform(record)?;
        let probability = self.scorer.score_probability(&features)?;
        Ok(ScoredOutcome::new(probability))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::order::{
        AgentAge, AgentRating, Area, Category, Traffic, Vehicle, Weather,
    };
    use crate::domain::outcome::DelayLabel;

    struct StubTransformer {
        columns: Vec<String>,
    }

    impl FeatureTransformer for StubTransformer {
        fn transform(&self, record: &OrderFeatures) -> Result<Vec<f64>, InferenceError> {
            Ok(vec![record.agent_age.years() as f64])
        }

        fn columns(&self) -> &[String] {
            &self.columns
        }
    }

    struct FixedScorer {
        probability: f64,
    }

    impl DelayScorer for FixedScorer {
        fn score_probability(&self, _features: &[f64]) -> Result<f64, InferenceError> {
            Ok(self.probability)
        }

        fn name(&self) -> &str {
            "fixed"
        }

        fn version(&self) -> &str {
            "test"
        }
    }

    fn sample_record() -> OrderFeatures {
        OrderFeatures {
            agent_age: AgentAge::new(30).unwrap(),
            agent_rating: AgentRating::new(4.5).unwrap(),
            weather: Weather::Sunny,
            traffic: Traffic::Low,
            vehicle: Vehicle::Motorcycle,
            area: Area::Urban,
            category: Category::Clothing,
            duration: None,
        }
    }

    fn adapter_with(probability: f64, columns: Vec<String>) -> InferenceAdapter {
        InferenceAdapter::new(
            Arc::new(StubTransformer { columns }),
            Arc::new(FixedScorer { probability }),
        )
    }

    #[test]
    fn test_boundary_probability_labels_delayed() {
        let adapter = adapter_with(0.5, vec!["Agent_Age".to_string()]);
        let outcome = adapter.score(&sample_record()).unwrap();
        assert_eq!(outcome.label, DelayLabel::Delayed);
        assert_eq!(outcome.probability, 0.5);
    }

    #[test]
    fn test_low_probability_labels_on_time() {
        let adapter = adapter_with(0.12, vec!["Agent_Age".to_string()]);
        let outcome = adapter.score(&sample_record()).unwrap();
        assert_eq!(outcome.label, DelayLabel::OnTime);
    }

    #[test]
    fn test_scoring_is_deterministic_for_identical_records() {
        let adapter = adapter_with(0.73, vec!["Agent_Age".to_string()]);
        let record = sample_record();
        let first = adapter.score(&record).unwrap();
        let second = adapter.score(&record).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_duration_requirement_follows_encoder_columns() {
        let without = adapter_with(0.5, vec!["Agent_Age".to_string()]);
        assert!(!without.wants_duration());

        let with = adapter_with(0.5, vec!["Agent_Age".to_string(), "Duration".to_string()]);
        assert!(with.wants_duration());
    }
}
