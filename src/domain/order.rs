use anyhow::{Result, bail};

/// Value object for the courier's age in years.
///
/// Valid range is 18..=70, matching the slider on the order form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AgentAge(u32);

impl AgentAge {
    pub fn new(years: u32) -> Result<Self> {
        if !(18..=70).contains(&years) {
            bail!("Agent age must be between 18 and 70, got: {}", years);
        }
        Ok(Self(years))
    }

    pub fn years(&self) -> u32 {
        self.0
    }
}

/// Value object for the courier's star rating (1.0..=5.0).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AgentRating(f64);

impl AgentRating {
    pub fn new(stars: f64) -> Result<Self> {
        if !(1.0..=5.0).contains(&stars) || !stars.is_finite() {
            bail!("Agent rating must be between 1.0 and 5.0, got: {}", stars);
        }
        Ok(Self(stars))
    }

    pub fn stars(&self) -> f64 {
        self.0
    }
}

/// Estimated delivery duration in minutes (10..=300).
///
/// Only collected when the loaded encoder was fitted with the duration
/// column; older artifacts ignore it entirely.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeliveryDuration(u32);

impl DeliveryDuration {
    pub fn new(minutes: u32) -> Result<Self> {
        if !(10..=300).contains(&minutes) {
            bail!(
                "Delivery duration must be between 10 and 300 minutes, got: {}",
                minutes
            );
        }
        Ok(Self(minutes))
    }

    pub fn minutes(&self) -> u32 {
        self.0
    }
}

/// Spellings below (including "Metropolitian" and the lowercase vehicle
/// levels) must stay byte-identical to the levels the encoder was fitted on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Weather {
    Sunny,
    Cloudy,
    Stormy,
    Sandstorms,
}

impl Weather {
    pub const ALL: &[Self] = &[Self::Sunny, Self::Cloudy, Self::Stormy, Self::Sandstorms];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Sunny => "Sunny",
            Self::Cloudy => "Cloudy",
            Self::Stormy => "Stormy",
            Self::Sandstorms => "Sandstorms",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Traffic {
    Low,
    Medium,
    High,
    Jam,
}

impl Traffic {
    pub const ALL: &[Self] = &[Self::Low, Self::Medium, Self::High, Self::Jam];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Low => "Low",
            Self::Medium => "Medium",
            Self::High => "High",
            Self::Jam => "Jam",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Vehicle {
    Motorcycle,
    Scooter,
}

impl Vehicle {
    pub const ALL: &[Self] = &[Self::Motorcycle, Self::Scooter];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Motorcycle => "motorcycle",
            Self::Scooter => "scooter",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Area {
    Urban,
    Metropolitian,
    Rural,
}

impl Area {
    pub const ALL: &[Self] = &[Self::Urban, Self::Metropolitian, Self::Rural];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Urban => "Urban",
            Self::Metropolitian => "Metropolitian",
            Self::Rural => "Rural",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    Clothing,
    Electronics,
    Sports,
    Cosmetics,
    Toys,
}

impl Category {
    pub const ALL: &[Self] = &[
        Self::Clothing,
        Self::Electronics,
        Self::Sports,
        Self::Cosmetics,
        Self::Toys,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Clothing => "Clothing",
            Self::Electronics => "Electronics",
            Self::Sports => "Sports",
            Self::Cosmetics => "Cosmetics",
            Self::Toys => "Toys",
        }
    }
}

/// One fully populated prediction request. Built fresh per predict action,
/// immutable, discarded after scoring.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderFeatures {
    pub agent_age: AgentAge,
    pub agent_rating: AgentRating,
    pub weather: Weather,
    pub traffic: Traffic,
    pub vehicle: Vehicle,
    pub area: Area,
    pub category: Category,
    pub duration: Option<DeliveryDuration>,
}

/// Raw value of a single record column, before encoding.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RawValue {
    Numeric(f64),
    Level(&'static str),
}

impl OrderFeatures {
    /// Looks up a column by its registry name. `None` for unknown columns
    /// and for a duration column on a record collected without one.
    pub fn value(&self, column: &str) -> Option<RawValue> {
        match column {
            "Agent_Age" => Some(RawValue::Numeric(self.agent_age.years() as f64)),
            "Agent_Rating" => Some(RawValue::Numeric(self.agent_rating.stars())),
            "Weather" => Some(RawValue::Level(self.weather.as_str())),
            "Traffic" => Some(RawValue::Level(self.traffic.as_str())),
            "Vehicle" => Some(RawValue::Level(self.vehicle.as_str())),
            "Area" => Some(RawValue::Level(self.area.as_str())),
            "Category" => Some(RawValue::Level(self.category.as_str())),
            "Duration" => self
                .duration
                .map(|d| RawValue::Numeric(d.minutes() as f64)),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_agent_age_bounds() {
        assert!(AgentAge::new(17).is_err());
        assert!(AgentAge::new(18).is_ok());
        assert!(AgentAge::new(70).is_ok());
        assert!(AgentAge::new(71).is_err());
    }

    #[test]
    fn test_agent_rating_bounds() {
        assert!(AgentRating::new(0.9).is_err());
        assert!(AgentRating::new(1.0).is_ok());
        assert!(AgentRating::new(5.0).is_ok());
        assert!(AgentRating::new(5.1).is_err());
        assert!(AgentRating::new(f64::NAN).is_err());
    }

    #[test]
    fn test_duration_bounds() {
        assert!(DeliveryDuration::new(9).is_err());
        assert!(DeliveryDuration::new(10).is_ok());
        assert!(DeliveryDuration::new(300).is_ok());
        assert!(DeliveryDuration::new(301).is_err());
    }

    #[test]
    fn test_record_column_lookup() {
        let record = OrderFeatures {
            agent_age: AgentAge::new(30).unwrap(),
            agent_rating: AgentRating::new(4.5).unwrap(),
            weather: Weather::Sunny,
            traffic: Traffic::Low,
            vehicle: Vehicle::Motorcycle,
            area: Area::Urban,
            category: Category::Clothing,
            duration: None,
        };

        assert_eq!(record.value("Agent_Age"), Some(RawValue::Numeric(30.0)));
        assert_eq!(record.value("Vehicle"), Some(RawValue::Level("motorcycle")));
        assert_eq!(record.value("Duration"), None);
        assert_eq!(record.value("Unknown"), None);
    }
}
