use time::macros::datetime;
use travelcast::config::AnalyticsConfig;
use travelcast::models::{
    Coordinates, ForecastEntry, GeocodedCity, Precipitation, Recommendation, ScorePreferences,
    TempBand, TripDetails, WeatherObservation,
};
use travelcast::services::forecast_aggregator::{aggregate_forecast, best_day};
use travelcast::services::nearby::rank_provider_results;
use travelcast::services::packing::{generate_packing_list, minimal_mode};
use travelcast::services::travel_score::calculate_travel_score;

fn reading(
    temp: f64,
    humidity: f64,
    wind: f64,
    clouds: f64,
    rain: Option<f64>,
) -> WeatherObservation {
    WeatherObservation {
        city: "Test".to_string(),
        country: Some("NL".to_string()),
        coordinates: Coordinates::new(52.0, 5.0).unwrap(),
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
fn test_score_stays_in_range_over_a_grid() {
    let prefs = ScorePreferences::default();
    for temp in [-40.0, -5.0, 0.0, 13.0, 18.0, 23.0, 28.0, 33.0, 38.0, 55.0] {
        for humidity in [0.0, 49.9, 50.0, 64.9, 79.9, 80.0, 100.0] {
            for wind in [0.0, 4.9, 5.0, 14.9, 15.0, 40.0] {
                for clouds in [0.0, 19.9, 50.0, 80.0, 100.0] {
                    for rain in [None, Some(0.0), Some(0.5), Some(2.0), Some(10.0)] {
                        let observation = reading(temp, humidity, wind, clouds, rain);
                        let score = calculate_travel_score(&observation, &prefs);
                        assert!((0.0..=10.0).contains(&score.overall));
                        let s = score.scores;
                        let subs = [
                            s.temperature,
                            s.humidity,
                            s.wind_speed,
                            s.cloudiness,
                            s.precipitation,
                        ];
                        for sub in subs {
                            assert!((1..=10).contains(&sub));
                            assert_ne!(sub, 9);
                        }
                    }
                }
            }
        }
    }
}

#[test]
fn test_ideal_reading_scores_ten() {
    let score = calculate_travel_score(
        &reading(24.0, 40.0, 3.0, 10.0, None),
        &ScorePreferences::default(),
    );
    assert_eq!(score.rating, 10.0);
    assert_eq!(score.recommendation, Recommendation::Perfect);
}

#[test]
fn test_hot_stormy_reading_is_poor() {
    let score = calculate_travel_score(
        &reading(38.0, 90.0, 20.0, 95.0, Some(5.0)),
        &ScorePreferences::default(),
    );
    assert_eq!(score.scores.temperature, 4);
    assert_eq!(score.rating, 2.9);
    assert_eq!(score.recommendation, Recommendation::Poor);
}

#[test]
fn test_scoring_is_deterministic() {
    let observation = reading(17.3, 66.0, 7.5, 45.0, Some(0.2));
    let prefs = ScorePreferences::default();
    let first = serde_json::to_string(&calculate_travel_score(&observation, &prefs)).unwrap();
    let second = serde_json::to_string(&calculate_travel_score(&observation, &prefs)).unwrap();
    assert_eq!(first, second);
}

fn bucket(timestamp: &str, temp: f64) -> ForecastEntry {
    ForecastEntry {
        timestamp: timestamp.to_string(),
        observation: reading(temp, 40.0, 3.0, 10.0, None),
    }
}

#[test]
fn test_daily_average_and_tie_break() {
    let temps = [10.0, 12.0, 14.0, 16.0, 18.0, 16.0, 14.0, 12.0];
    let mut entries: Vec<ForecastEntry> = temps
        .iter()
        .enumerate()
        .map(|(i, t)| bucket(&format!("2026-10-17 {:02}:00:00", i * 3), *t))
        .collect();
    entries.extend(
        temps
            .iter()
            .enumerate()
            .map(|(i, t)| bucket(&format!("2026-10-18 {:02}:00:00", i * 3), *t)),
    );

    let days = aggregate_forecast(None, &entries, datetime!(2026-10-16 12:00 UTC));
    assert_eq!(days.len(), 2);
    assert_eq!(days[0].avg_temp, 14.0);
    assert_eq!(best_day(&days).unwrap().date, "2026-10-17");

    let live = reading(30.0, 40.0, 3.0, 10.0, None);
    let again = aggregate_forecast(Some(&live), &entries, datetime!(2026-10-16 12:00 UTC));
    assert_eq!(again, days);
}

#[test]
fn test_minimal_mode_bounds() {
    let trip = TripDetails {
        duration: 21,
        activities: vec!["hiking".to_string(), "skiing".to_string(), "beach".to_string()],
        style: "adventure".to_string(),
    };
    let full = generate_packing_list(&reading(-8.0, 85.0, 14.0, 95.0, Some(1.0)), &trip);
    assert_eq!(full.temp_band, TempBand::Cold);

    let minimal = minimal_mode(full.clone());
    assert!(minimal.clothing.len() <= 3);
    assert!(minimal.weather_gear.len() <= 1);
    assert!(minimal.activity_gear.len() <= 1);
    assert!(minimal.activity_gear.iter().all(|g| g.items.len() <= 3));
    assert!(minimal.essentials.documents.len() <= 3);
    assert!(minimal.essentials.toiletries.len() <= 3);
    assert!(minimal.essentials.electronics.len() <= 2);
    assert!(minimal.essentials.miscellaneous.len() <= 2);
    assert!(minimal.tips.len() <= 3);
    assert_eq!(minimal.quantities, full.quantities);
}

#[test]
fn test_nearby_ranking_excludes_origin_and_far_places() {
    let origin = GeocodedCity {
        name: "Utrecht".to_string(),
        country: Some("NL".to_string()),
        coordinates: Coordinates::new(52.0907, 5.1214).unwrap(),
    };
    let place = |name: &str, country: &str, lat: f64, lng: f64| {
        let mut observation = reading(20.0, 40.0, 3.0, 10.0, None);
        observation.city = name.to_string();
        observation.country = Some(country.to_string());
        observation.coordinates = Coordinates::new(lat, lng).unwrap();
        observation
    };
    let places = vec![
        place("UTRECHT", "NL", 52.09, 5.12),
        place("Groningen", "NL", 53.2194, 6.5665),
        place("Amsterdam", "NL", 52.3676, 4.9041),
        place("Cologne", "DE", 50.9375, 6.9603),
        place("Rotterdam", "NL", 51.9244, 4.4777),
    ];

    let config = AnalyticsConfig::default();
    let nearby = rank_provider_results(&places, "utrecht", &origin, &config);
    let names: Vec<&str> = nearby.iter().map(|c| c.name.as_str()).collect();

    assert_eq!(names, vec!["Amsterdam", "Rotterdam"]);
    assert!(nearby.iter().all(|c| c.distance_km <= config.nearby_max_distance_km));
    assert!(nearby.windows(2).all(|w| w[0].distance_km <= w[1].distance_km));
}
