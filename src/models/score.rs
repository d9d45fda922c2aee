use crate::constants::{DEFAULT_PREFERRED_TEMP_MAX, DEFAULT_PREFERRED_TEMP_MIN};
use serde::{Deserialize, Serialize, Serializer};

/// Caller's preferred temperature range (°C) used by the temperature sub-score.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ScorePreferences {
    pub temp_min: f64,
    pub temp_max: f64,
}

impl Default for ScorePreferences {
    fn default() -> Self {
        ScorePreferences {
            temp_min: DEFAULT_PREFERRED_TEMP_MIN,
            temp_max: DEFAULT_PREFERRED_TEMP_MAX,
        }
    }
}

impl ScorePreferences {
    /// Build from optional query values, filling gaps with the defaults
    pub fn from_bounds(temp_min: Option<f64>, temp_max: Option<f64>) -> Result<Self, String> {
        let defaults = Self::default();
        let prefs = ScorePreferences {
            temp_min: temp_min.unwrap_or(defaults.temp_min),
            temp_max: temp_max.unwrap_or(defaults.temp_max),
        };

        if !prefs.temp_min.is_finite() || !prefs.temp_max.is_finite() {
            return Err("tempMin and tempMax must be finite numbers".to_string());
        }
        if prefs.temp_min > prefs.temp_max {
            return Err(format!(
                "tempMin ({}) must not exceed tempMax ({})",
                prefs.temp_min, prefs.temp_max
            ));
        }
        Ok(prefs)
    }
}

/// Per-factor scores, each assigned from a fixed band table.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SubScores {
    pub temperature: u8,
    pub humidity: u8,
    pub wind_speed: u8,
    pub cloudiness: u8,
    pub precipitation: u8,
}

/// Discrete recommendation bands over the overall travel score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Recommendation {
    Perfect,
    Excellent,
    VeryGood,
    Good,
    Acceptable,
    Fair,
    BelowAverage,
    Poor,
}

impl Recommendation {
    pub fn for_score(score: f64) -> Self {
        if score >= 9.0 {
            Recommendation::Perfect
        } else if score >= 8.0 {
            Recommendation::Excellent
        } else if score >= 7.0 {
            Recommendation::VeryGood
        } else if score >= 6.0 {
            Recommendation::Good
        } else if score >= 5.0 {
            Recommendation::Acceptable
        } else if score >= 4.0 {
            Recommendation::Fair
        } else if score >= 3.0 {
            Recommendation::BelowAverage
        } else {
            Recommendation::Poor
        }
    }

    pub fn text(&self) -> &'static str {
        match self {
            Recommendation::Perfect => "Perfect conditions! Ideal time to visit.",
            Recommendation::Excellent => "Excellent conditions for travel.",
            Recommendation::VeryGood => "Very good weather conditions.",
            Recommendation::Good => "Good conditions for most activities.",
            Recommendation::Acceptable => "Acceptable conditions, plan accordingly.",
            Recommendation::Fair => "Fair conditions, some activities may be affected.",
            Recommendation::BelowAverage => "Below average conditions, consider alternatives.",
            Recommendation::Poor => "Poor conditions, not recommended for travel.",
        }
    }
}

impl Serialize for Recommendation {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.text())
    }
}

#[derive(Debug, Clone, Copy, Serialize, PartialEq)]
pub struct TravelScore {
    pub scores: SubScores,
    /// Unrounded weighted sum, always within [0, 10]
    pub overall: f64,
    /// `overall` rounded to one decimal
    pub rating: f64,
    pub recommendation: Recommendation,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recommendation_bands() {
        assert_eq!(Recommendation::for_score(10.0), Recommendation::Perfect);
        assert_eq!(Recommendation::for_score(9.0), Recommendation::Perfect);
        assert_eq!(Recommendation::for_score(8.99), Recommendation::Excellent);
        assert_eq!(Recommendation::for_score(7.0), Recommendation::VeryGood);
        assert_eq!(Recommendation::for_score(6.5), Recommendation::Good);
        assert_eq!(Recommendation::for_score(5.0), Recommendation::Acceptable);
        assert_eq!(Recommendation::for_score(4.2), Recommendation::Fair);
        assert_eq!(Recommendation::for_score(3.0), Recommendation::BelowAverage);
        assert_eq!(Recommendation::for_score(2.99), Recommendation::Poor);
        assert_eq!(Recommendation::for_score(0.0), Recommendation::Poor);
    }

    #[test]
    fn test_recommendation_serializes_as_text() {
        let json = serde_json::to_value(Recommendation::Poor).unwrap();
        assert_eq!(json, "Poor conditions, not recommended for travel.");
    }

    #[test]
    fn test_preferences_from_bounds() {
        let prefs = ScorePreferences::from_bounds(None, None).unwrap();
        assert_eq!(prefs, ScorePreferences::default());

        // An explicit zero is a real bound, not a missing one
        let prefs = ScorePreferences::from_bounds(Some(0.0), Some(10.0)).unwrap();
        assert_eq!(prefs.temp_min, 0.0);

        assert!(ScorePreferences::from_bounds(Some(30.0), Some(20.0)).is_err());
        assert!(ScorePreferences::from_bounds(Some(f64::NAN), None).is_err());
    }
}
