use crate::catalog::{find_curated_city, CuratedCity, CURATED_CITIES};
use crate::config::AnalyticsConfig;
use crate::error::Result;
use crate::models::{
    round1, Coordinates, GeocodedCity, NearbyCities, NearbyCity, NearbySource, ScorePreferences,
    WeatherObservation, WeatherSnapshot,
};
use crate::services::travel_score::calculate_travel_score;
use crate::services::weather_provider::WeatherProvider;
use futures::future::join_all;

/// Locate the query city. Falls back to the curated list when the provider
/// cannot geocode it; if neither knows the city the provider's error wins.
pub async fn resolve_origin(provider: &dyn WeatherProvider, city: &str) -> Result<GeocodedCity> {
    match provider.geocode(city).await {
        Ok(origin) => Ok(origin),
        Err(e) => match find_curated_city(city) {
            Some(curated) => {
                tracing::warn!(city = %city, "Geocoding failed ({}), using curated coordinates", e);
                Ok(GeocodedCity {
                    name: curated.name.to_string(),
                    country: Some(curated.country.to_string()),
                    coordinates: curated.coordinates(),
                })
            }
            None => Err(e),
        },
    }
}

fn is_same_place(name: &str, query: &str, origin: &GeocodedCity) -> bool {
    let name = name.trim();
    name.eq_ignore_ascii_case(query.trim()) || name.eq_ignore_ascii_case(origin.name.trim())
}

fn same_country(country: Option<&str>, origin: &GeocodedCity) -> bool {
    match (country, origin.country.as_deref()) {
        (Some(a), Some(b)) => a.eq_ignore_ascii_case(b),
        _ => false,
    }
}

fn to_nearby(observation: &WeatherObservation, name: String, distance_km: f64) -> NearbyCity {
    let score = calculate_travel_score(observation, &ScorePreferences::default());
    NearbyCity {
        name,
        country: observation.country.clone(),
        coordinates: observation.coordinates,
        distance_km: round1(distance_km),
        current_weather: WeatherSnapshot::from(observation),
        travel_score: score.rating,
        recommendation: score.recommendation.text().to_string(),
    }
}

/// Rank the provider's "find" results around the origin: same country,
/// within range, never the query city itself, closest first.
pub fn rank_provider_results(
    places: &[WeatherObservation],
    query: &str,
    origin: &GeocodedCity,
    config: &AnalyticsConfig,
) -> Vec<NearbyCity> {
    let mut ranked: Vec<(f64, &WeatherObservation)> = places
        .iter()
        .filter(|p| same_country(p.country.as_deref(), origin))
        .filter(|p| !is_same_place(&p.city, query, origin))
        .map(|p| (origin.coordinates.distance_to(&p.coordinates), p))
        .filter(|(distance, _)| *distance <= config.nearby_max_distance_km)
        .collect();

    ranked.sort_by(|a, b| a.0.total_cmp(&b.0));

    ranked
        .into_iter()
        .take(config.nearby_result_limit)
        .map(|(distance, p)| to_nearby(p, p.city.clone(), distance))
        .collect()
}

/// Curated cities within range of the origin: same country by distance
/// first, then the rest by distance.
pub fn curated_candidates(
    query: &str,
    origin: &GeocodedCity,
    config: &AnalyticsConfig,
) -> Vec<(&'static str, Coordinates, f64)> {
    let mut candidates: Vec<(bool, f64, &CuratedCity)> = CURATED_CITIES
        .iter()
        .filter(|c| !is_same_place(c.name, query, origin))
        .map(|c| {
            (
                same_country(Some(c.country), origin),
                origin.coordinates.distance_to(&c.coordinates()),
                c,
            )
        })
        .filter(|(_, distance, _)| *distance <= config.nearby_max_distance_km)
        .collect();

    candidates.sort_by(|a, b| b.0.cmp(&a.0).then(a.1.total_cmp(&b.1)));

    candidates
        .into_iter()
        .take(config.nearby_result_limit)
        .map(|(_, distance, c)| (c.name, c.coordinates(), distance))
        .collect()
}

async fn curated_fallback(
    provider: &dyn WeatherProvider,
    query: &str,
    origin: &GeocodedCity,
    config: &AnalyticsConfig,
) -> Vec<NearbyCity> {
    let candidates = curated_candidates(query, origin, config);

    join_all(candidates.into_iter().map(|(name, coordinates, distance)| async move {
        match provider.current_by_coords(&coordinates).await {
            Ok(observation) => Some(to_nearby(&observation, name.to_string(), distance)),
            Err(e) => {
                tracing::warn!(city = %name, "Dropping curated city: {}", e);
                None
            }
        }
    }))
    .await
    .into_iter()
    .flatten()
    .collect()
}

/// Cities near `city` with their current travel score.
///
/// The provider's nearby search is tried first; when it fails or finds
/// nothing usable, the curated city list is searched instead.
pub async fn get_nearest_cities(
    provider: &dyn WeatherProvider,
    city: &str,
    config: &AnalyticsConfig,
) -> Result<NearbyCities> {
    let origin = resolve_origin(provider, city).await?;

    let primary = match provider
        .find_nearby(&origin.coordinates, config.nearby_search_count)
        .await
    {
        Ok(places) => rank_provider_results(&places, city, &origin, config),
        Err(e) => {
            tracing::warn!(city = %city, "Nearby search failed: {}", e);
            Vec::new()
        }
    };

    let (source, nearby) = if primary.is_empty() {
        tracing::info!(city = %city, "Falling back to curated nearby cities");
        (
            NearbySource::Curated,
            curated_fallback(provider, city, &origin, config).await,
        )
    } else {
        (NearbySource::Provider, primary)
    };

    Ok(NearbyCities {
        city: origin.name,
        country: origin.country,
        source,
        nearby,
    })
}
