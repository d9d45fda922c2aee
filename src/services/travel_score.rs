use crate::constants::*;
use crate::models::{
    round1, Recommendation, ScorePreferences, SubScores, TravelScore, WeatherObservation,
};

/// Score how pleasant an observation is for travel, on a 0-10 scale.
///
/// Each factor gets a band score and the overall score is their weighted sum.
/// The weights sum to 1 and every band score lies in [1, 10], so `overall`
/// cannot leave [0, 10].
pub fn calculate_travel_score(
    observation: &WeatherObservation,
    preferences: &ScorePreferences,
) -> TravelScore {
    let scores = SubScores {
        temperature: temperature_score(observation.temperature, preferences),
        humidity: humidity_score(observation.humidity),
        wind_speed: wind_score(observation.wind_speed),
        cloudiness: cloudiness_score(observation.cloudiness),
        precipitation: precipitation_score(observation.precipitation_rate()),
    };

    let overall = f64::from(scores.temperature) * WEIGHT_TEMPERATURE
        + f64::from(scores.humidity) * WEIGHT_HUMIDITY
        + f64::from(scores.wind_speed) * WEIGHT_WIND
        + f64::from(scores.cloudiness) * WEIGHT_CLOUDINESS
        + f64::from(scores.precipitation) * WEIGHT_PRECIPITATION;
    let overall = overall.clamp(0.0, 10.0);

    TravelScore {
        scores,
        overall,
        rating: round1(overall),
        recommendation: Recommendation::for_score(overall),
    }
}

fn temperature_score(temp: f64, preferences: &ScorePreferences) -> u8 {
    let (min, max) = (preferences.temp_min, preferences.temp_max);
    if (min..=max).contains(&temp) {
        10
    } else if (min - 5.0..=max + 5.0).contains(&temp) {
        7
    } else if (min - 10.0..=max + 10.0).contains(&temp) {
        4
    } else {
        2
    }
}

fn humidity_score(humidity: f64) -> u8 {
    match humidity {
        h if h < 50.0 => 10,
        h if h < 65.0 => 8,
        h if h < 80.0 => 5,
        _ => 3,
    }
}

fn wind_score(speed: f64) -> u8 {
    match speed {
        s if s < 5.0 => 10,
        s if s < 10.0 => 7,
        s if s < 15.0 => 4,
        _ => 2,
    }
}

fn cloudiness_score(cover: f64) -> u8 {
    match cover {
        c if c < 20.0 => 10,
        c if c < 50.0 => 7,
        c if c < 80.0 => 5,
        _ => 3,
    }
}

/// `rate` is mm/h
fn precipitation_score(rate: f64) -> u8 {
    match rate {
        r if r <= 0.0 => 10,
        r if r < 1.0 => 6,
        r if r < 3.0 => 3,
        _ => 1,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Coordinates, Precipitation};

    fn observation(
        temp: f64,
        humidity: f64,
        wind: f64,
        clouds: f64,
        rain: Option<f64>,
    ) -> WeatherObservation {
        WeatherObservation {
            city: "Test".to_string(),
            country: None,
            coordinates: Coordinates::new(0.0, 0.0).unwrap(),
            temperature: temp,
            feels_like: temp,
            humidity,
            pressure: None,
            wind_speed: wind,
            cloudiness: clouds,
            rain: rain.map(|mm| Precipitation {
                one_hour: Some(mm),
                three_hour: None,
            }),
            description: "test".to_string(),
            icon: None,
            observed_at: 0,
        }
    }

    #[test]
    fn test_perfect_day() {
        let score = calculate_travel_score(
            &observation(22.0, 40.0, 3.0, 10.0, None),
            &ScorePreferences::default(),
        );
        assert!((score.overall - 10.0).abs() < 1e-9);
        assert_eq!(score.rating, 10.0);
        assert_eq!(score.recommendation, Recommendation::Perfect);
    }

    #[test]
    fn test_poor_day() {
        let score = calculate_travel_score(
            &observation(-5.0, 90.0, 20.0, 95.0, Some(5.0)),
            &ScorePreferences::default(),
        );
        assert_eq!(
            score.scores,
            SubScores {
                temperature: 2,
                humidity: 3,
                wind_speed: 2,
                cloudiness: 3,
                precipitation: 1,
            }
        );
        assert!((score.overall - 2.2).abs() < 1e-9);
        assert_eq!(score.rating, 2.2);
        assert_eq!(score.recommendation, Recommendation::Poor);
    }

    #[test]
    fn test_temperature_bands_relative_to_preferences() {
        let prefs = ScorePreferences {
            temp_min: 18.0,
            temp_max: 28.0,
        };
        assert_eq!(temperature_score(18.0, &prefs), 10);
        assert_eq!(temperature_score(28.0, &prefs), 10);
        assert_eq!(temperature_score(13.0, &prefs), 7);
        assert_eq!(temperature_score(33.0, &prefs), 7);
        assert_eq!(temperature_score(8.0, &prefs), 4);
        assert_eq!(temperature_score(38.5, &prefs), 2);
    }

    #[test]
    fn test_band_edges() {
        assert_eq!(humidity_score(49.9), 10);
        assert_eq!(humidity_score(50.0), 8);
        assert_eq!(humidity_score(80.0), 3);
        assert_eq!(wind_score(5.0), 7);
        assert_eq!(wind_score(15.0), 2);
        assert_eq!(cloudiness_score(20.0), 7);
        assert_eq!(cloudiness_score(80.0), 3);
        assert_eq!(precipitation_score(0.0), 10);
        assert_eq!(precipitation_score(0.2), 6);
        assert_eq!(precipitation_score(1.0), 3);
        assert_eq!(precipitation_score(3.0), 1);
    }

    #[test]
    fn test_light_drizzle_is_not_dry() {
        let dry = calculate_travel_score(
            &observation(22.0, 40.0, 3.0, 10.0, None),
            &ScorePreferences::default(),
        );
        let drizzle = calculate_travel_score(
            &observation(22.0, 40.0, 3.0, 10.0, Some(0.3)),
            &ScorePreferences::default(),
        );
        assert_eq!(drizzle.scores.precipitation, 6);
        assert!(drizzle.overall < dry.overall);
    }

    #[test]
    fn test_custom_range_changes_only_temperature() {
        // 10 °C sits between 5 and 10 degrees under the default minimum
        let obs = observation(10.0, 40.0, 3.0, 10.0, None);
        let winter = ScorePreferences {
            temp_min: 0.0,
            temp_max: 12.0,
        };
        let default = calculate_travel_score(&obs, &ScorePreferences::default());
        let custom = calculate_travel_score(&obs, &winter);
        assert_eq!(default.scores.temperature, 4);
        assert_eq!(custom.scores.temperature, 10);
        assert_eq!(default.scores.humidity, custom.scores.humidity);
    }
}
