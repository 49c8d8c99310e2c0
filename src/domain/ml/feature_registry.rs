/// Canonical column names the encoder/model artifacts may reference.
/// Names MUST match exactly with the columns used when the artifacts were
/// fitted. Any change here is a breaking change for deployed artifacts.
pub const FEATURE_NAMES: &[&str] = &[
    "Agent_Age",
    "Agent_Rating",
    "Weather",
    "Traffic",
    "Vehicle",
    "Area",
    "Category",
    "Duration",
];

/// Columns carrying a closed string domain rather than a number.
pub const CATEGORICAL_NAMES: &[&str] = &["Weather", "Traffic", "Vehicle", "Area", "Category"];

pub fn is_known_column(name: &str) -> bool {
    FEATURE_NAMES.contains(&name)
}

pub fn is_categorical_column(name: &str) -> bool {
    CATEGORICAL_NAMES.contains(&name)
}

/// Full level set for a categorical column. Used at artifact-load time to
/// verify a fitted encoding table covers every reachable level.
pub fn levels_for(column: &str) -> Option<Vec<&'static str>> {
    use crate::domain::order::{Area, Category, Traffic, Vehicle, Weather};

    match column {
        "Weather" => Some(Weather::ALL.iter().map(|v| v.as_str()).collect()),
        "Traffic" => Some(Traffic::ALL.iter().map(|v| v.as_str()).collect()),
        "Vehicle" => Some(Vehicle::ALL.iter().map(|v| v.as_str()).collect()),
        "Area" => Some(Area::ALL.iter().map(|v| v.as_str()).collect()),
        "Category" => Some(Category::ALL.iter().map(|v| v.as_str()).collect()),
        _ => None,
    }
}
