pub mod adapter;
pub mod scorer;
pub mod smartcore_scorer;
