/// Fixed cutoff separating "on time" from "delayed". Not configurable;
/// the boundary itself resolves to Delayed.
pub const DECISION_THRESHOLD: f64 = 0.5;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DelayLabel {
    OnTime,
    Delayed,
}

impl DelayLabel {
    pub fn from_probability(p: f64) -> Self {
        if p >= DECISION_THRESHOLD {
            Self::Delayed
        } else {
            Self::OnTime
        }
    }
}

/// Result of one scoring pass. Exists only for rendering; never stored.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoredOutcome {
    pub probability: f64,
    pub label: DelayLabel,
}

impl ScoredOutcome {
    pub fn new(probability: f64) -> Self {
        Self {
            probability,
            label: DelayLabel::from_probability(probability),
        }
    }

    /// Delay probability as a two-decimal percentage, e.g. "73.42%".
    pub fn probability_percent(&self) -> String {
        format!("{:.2}%", self.probability * 100.0)
    }
}
