use crate::domain::errors::InferenceError;
use crate::domain::order::OrderFeatures;

/// Interface for the trained delay classifier.
pub trait DelayScorer: Send + Sync {
    /// Probability of the positive (delayed) class, 0.0..=1.0.
    fn score_probability(&self, features: &[f64]) -> Result<f64, InferenceError>;

    /// Get model name/type
    fn name(&self) -> &str;

    /// Get model version/id
    fn version(&self) -> &str;
}

/// Interface for the fitted preprocessing step that turns a raw record into
/// the numeric vector the scorer was trained on.
pub trait FeatureTransformer: Send + Sync {
    /// Numeric feature vector in the fitted column order.
    fn transform(&self, record: &OrderFeatures) -> Result<Vec<f64>, InferenceError>;

    /// Fitted column order.
    fn columns(&self) -> &[String];
}
