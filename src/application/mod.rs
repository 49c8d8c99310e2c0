// Inference boundary: transformer + scorer + threshold rule
pub mod inference;
