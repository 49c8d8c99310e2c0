// Domain-specific error types
pub mod errors;

// Feature registry (artifact column contract)
pub mod ml;

// Order record and bounded input domains
pub mod order;

// Scored outcome and decision threshold
pub mod outcome;
