use crate::catalog::DESTINATIONS;
use crate::constants::WEATHER_UNAVAILABLE_MESSAGE;
use crate::models::{
    round1, BestTimeAnalysis, CityComparison, ComparisonResponse, Destination,
    DestinationPreferences, DestinationRecommendation, ScorePreferences, Units,
    WeatherObservation, WeatherSnapshot,
};
use crate::services::travel_score::calculate_travel_score;
use crate::services::weather_provider::WeatherProvider;
use futures::future::join_all;

const CLIMATE_MATCH_POINTS: u32 = 3;
const ACTIVITY_MATCH_POINTS: u32 = 2;
const SEASON_MATCH_POINTS: u32 = 2;

/// How well a catalog entry fits the caller's preferences. Zero means no fit.
pub fn match_score(destination: &Destination, preferences: &DestinationPreferences) -> u32 {
    let mut score = 0;

    if let Some(climate) = preferences
        .climate
        .as_deref()
        .map(str::trim)
        .filter(|c| !c.is_empty())
    {
        if destination
            .climate
            .to_lowercase()
            .contains(&climate.to_lowercase())
        {
            score += CLIMATE_MATCH_POINTS;
        }
    }

    score += preferences
        .activities
        .iter()
        .filter(|activity| destination.has_activity(activity))
        .count() as u32
        * ACTIVITY_MATCH_POINTS;

    if destination.is_best_month(preferences.month) {
        score += SEASON_MATCH_POINTS;
    }

    score
}

/// Catalog entries with a positive match score, in catalog order, capped at `limit`.
pub fn candidate_destinations(
    preferences: &DestinationPreferences,
    limit: usize,
) -> Vec<(&'static Destination, u32)> {
    DESTINATIONS
        .iter()
        .map(|d| (d, match_score(d, preferences)))
        .filter(|(_, score)| *score > 0)
        .take(limit)
        .collect()
}

/// Match the catalog against the caller's preferences and rank the
/// candidates by their live travel score.
///
/// Weather for every candidate is fetched concurrently. A candidate whose
/// weather cannot be fetched is kept with a null score and sorts last.
pub async fn get_smart_recommendations(
    provider: &dyn WeatherProvider,
    preferences: &DestinationPreferences,
    limit: usize,
) -> Vec<DestinationRecommendation> {
    let candidates = candidate_destinations(preferences, limit);
    let score_prefs = ScorePreferences {
        temp_min: preferences.temp_min,
        temp_max: preferences.temp_max,
    };

    tracing::debug!(
        candidates = candidates.len(),
        month = preferences.month,
        "Enriching destination candidates with live weather"
    );

    let mut recommendations = join_all(candidates.into_iter().map(|(destination, points)| {
        let score_prefs = &score_prefs;
        async move {
            match provider.current_by_city(destination.city).await {
                Ok(observation) => {
                    let score = calculate_travel_score(&observation, score_prefs);
                    DestinationRecommendation {
                        destination: *destination,
                        match_score: points,
                        current_weather: Some(WeatherSnapshot::from(&observation)),
                        travel_score: Some(score.rating),
                        recommendation: score.recommendation.text().to_string(),
                    }
                }
                Err(e) => {
                    tracing::warn!(city = %destination.city, "Weather enrichment failed: {}", e);
                    DestinationRecommendation {
                        destination: *destination,
                        match_score: points,
                        current_weather: None,
                        travel_score: None,
                        recommendation: WEATHER_UNAVAILABLE_MESSAGE.to_string(),
                    }
                }
            }
        }
    }))
    .await;

    // Stable sort keeps catalog order among equal scores
    recommendations.sort_by(|a, b| {
        b.travel_score
            .unwrap_or(0.0)
            .total_cmp(&a.travel_score.unwrap_or(0.0))
    });
    recommendations
}

/// Score several cities side by side. Cities that cannot be fetched stay in
/// the result as unavailable rows ranked last.
pub async fn compare_destinations(
    provider: &dyn WeatherProvider,
    cities: &[String],
    units: Units,
) -> ComparisonResponse {
    let mut comparison = join_all(cities.iter().map(|city| async move {
        match provider.current_by_city(city).await {
            Ok(observation) => {
                let score = calculate_travel_score(&observation, &ScorePreferences::default());
                CityComparison::Scored {
                    city: city.clone(),
                    score: score.rating,
                    temp: round1(units.convert_temperature(observation.temperature)),
                    conditions: observation.description,
                    recommendation: score.recommendation.text().to_string(),
                }
            }
            Err(e) => {
                tracing::warn!(city = %city, "Comparison fetch failed: {}", e);
                CityComparison::Unavailable {
                    city: city.clone(),
                    error: "Data unavailable".to_string(),
                }
            }
        }
    }))
    .await;

    comparison.sort_by(|a, b| b.ranking_score().total_cmp(&a.ranking_score()));
    let winner = comparison.first().cloned();

    ComparisonResponse {
        units,
        comparison,
        winner,
    }
}

/// Score breakdown plus activity suggestions and hazard warnings for one reading.
pub fn analyze_best_travel_time(
    observation: &WeatherObservation,
    preferences: &ScorePreferences,
) -> BestTimeAnalysis {
    let score = calculate_travel_score(observation, preferences);
    BestTimeAnalysis {
        score: score.rating,
        recommendation: score.recommendation.text().to_string(),
        details: score.scores,
        best_for: best_activities(observation),
        warnings: weather_warnings(observation),
    }
}

fn best_activities(observation: &WeatherObservation) -> Vec<&'static str> {
    let temp = observation.temperature;
    let rain = observation.precipitation_rate();
    let clouds = observation.cloudiness;
    let dry = rain <= 0.0;

    let mut activities = Vec::new();
    if (20.0..=30.0).contains(&temp) && dry {
        activities.extend(["outdoor dining", "sightseeing", "beach"]);
    }
    if (15.0..=25.0).contains(&temp) {
        activities.extend(["hiking", "cycling", "photography"]);
    }
    if clouds < 30.0 && dry {
        activities.extend(["outdoor activities", "picnics"]);
    }
    if !dry || clouds > 70.0 {
        activities.extend(["museums", "indoor attractions", "shopping"]);
    }
    if temp < 10.0 {
        activities.extend(["winter sports", "cozy cafes", "indoor entertainment"]);
    }
    activities
}

fn weather_warnings(observation: &WeatherObservation) -> Vec<&'static str> {
    let mut warnings = Vec::new();
    if observation.temperature > 35.0 {
        warnings.push("Extreme heat - stay hydrated");
    }
    if observation.temperature < 0.0 {
        warnings.push("Freezing temperatures - dress warmly");
    }
    if observation.wind_speed > 15.0 {
        warnings.push("Strong winds - be cautious outdoors");
    }
    if observation.precipitation_rate() > 5.0 {
        warnings.push("Heavy rain - bring rain gear");
    }
    warnings
}
