use crate::models::{
    round1, DailyForecastSummary, ForecastEntry, ForecastSample, Recommendation, ScorePreferences,
    WeatherObservation,
};
use crate::services::clock::{utc_day_key, utc_timestamp};
use crate::services::travel_score::calculate_travel_score;
use time::OffsetDateTime;

fn sample_from(observation: &WeatherObservation, date: String, is_current: bool) -> ForecastSample {
    let score = calculate_travel_score(observation, &ScorePreferences::default());
    ForecastSample {
        date,
        temp: observation.temperature,
        description: observation.description.clone(),
        humidity: observation.humidity,
        wind_speed: observation.wind_speed,
        travel_score: score.rating,
        recommendation: score.recommendation,
        is_current,
    }
}

/// Collapse 3-hour forecast buckets into one summary per calendar day.
///
/// Days come out in the order they first appear in `entries`. When `current`
/// is given and a group for today's UTC date exists, that day leads with a
/// sample built from the live reading and reports its description.
pub fn aggregate_forecast(
    current: Option<&WeatherObservation>,
    entries: &[ForecastEntry],
    now: OffsetDateTime,
) -> Vec<DailyForecastSummary> {
    let mut groups: Vec<(String, Vec<ForecastSample>)> = Vec::new();

    for entry in entries {
        let day = entry.day_key();
        let sample = sample_from(&entry.observation, entry.timestamp.clone(), false);
        match groups.iter_mut().find(|(key, _)| key == day) {
            Some((_, samples)) => samples.push(sample),
            None => groups.push((day.to_string(), vec![sample])),
        }
    }

    let today = utc_day_key(now);

    groups
        .into_iter()
        .map(|(date, mut samples)| {
            let mut conditions = samples[samples.len() / 2].description.clone();

            if let Some(live) = current.filter(|_| date == today) {
                conditions = live.description.clone();
                samples.insert(0, sample_from(live, utc_timestamp(now), true));
            }

            let n = samples.len() as f64;
            let avg_temp = samples.iter().map(|s| s.temp).sum::<f64>() / n;
            let avg_score = round1(samples.iter().map(|s| s.travel_score).sum::<f64>() / n);

            DailyForecastSummary {
                date,
                avg_temp: round1(avg_temp),
                avg_travel_score: avg_score,
                conditions,
                recommendation: Recommendation::for_score(avg_score),
                hourly_data: samples,
            }
        })
        .collect()
}

/// First day with the strictly highest average score
pub fn best_day(days: &[DailyForecastSummary]) -> Option<&DailyForecastSummary> {
    let mut best: Option<&DailyForecastSummary> = None;
    for day in days {
        match best {
            Some(current) if day.avg_travel_score <= current.avg_travel_score => {}
            _ => best = Some(day),
        }
    }
    best
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Coordinates;
    use time::macros::datetime;

    fn entry(timestamp: &str, temp: f64, description: &str) -> ForecastEntry {
        ForecastEntry {
            timestamp: timestamp.to_string(),
            observation: WeatherObservation {
                city: "Lisbon".to_string(),
                country: Some("PT".to_string()),
                coordinates: Coordinates::new(38.7223, -9.1393).unwrap(),
                temperature: temp,
                feels_like: temp,
                humidity: 40.0,
                pressure: None,
                wind_speed: 3.0,
                cloudiness: 10.0,
                rain: None,
                description: description.to_string(),
                icon: None,
                observed_at: 0,
            },
        }
    }

    fn one_day(date: &str) -> Vec<ForecastEntry> {
        [10.0, 12.0, 14.0, 16.0, 18.0, 16.0, 14.0, 12.0]
            .iter()
            .enumerate()
            .map(|(i, t)| {
                entry(
                    &format!("{} {:02}:00:00", date, i * 3),
                    *t,
                    &format!("sample {}", i),
                )
            })
            .collect()
    }

    #[test]
    fn test_single_day_average_and_middle_condition() {
        let now = datetime!(2026-10-16 12:00 UTC);
        let days = aggregate_forecast(None, &one_day("2026-10-20"), now);
        assert_eq!(days.len(), 1);
        assert_eq!(days[0].date, "2026-10-20");
        assert_eq!(days[0].avg_temp, 14.0);
        assert_eq!(days[0].conditions, "sample 4");
        assert_eq!(days[0].hourly_data.len(), 8);
    }

    #[test]
    fn test_groups_keep_input_order() {
        let mut entries = one_day("2026-10-18");
        entries.extend(one_day("2026-10-17"));
        let days = aggregate_forecast(None, &entries, datetime!(2026-10-16 12:00 UTC));
        let dates: Vec<_> = days.iter().map(|d| d.date.as_str()).collect();
        assert_eq!(dates, vec!["2026-10-18", "2026-10-17"]);
    }

    #[test]
    fn test_today_uses_live_reading() {
        let entries = one_day("2026-10-16");
        let mut live = entry("", 30.0, "live sunshine").observation;
        live.humidity = 90.0;

        let days = aggregate_forecast(Some(&live), &entries, datetime!(2026-10-16 07:45:10 UTC));
        let today = &days[0];

        assert_eq!(today.conditions, "live sunshine");
        assert_eq!(today.hourly_data.len(), 9);
        assert!(today.hourly_data[0].is_current);
        assert_eq!(today.hourly_data[0].date, "2026-10-16 07:45:10");
        // (30 + 8 * 14) / 9
        assert_eq!(today.avg_temp, 15.8);
    }

    #[test]
    fn test_live_reading_ignored_without_today_group() {
        let entries = one_day("2026-10-17");
        let live = entry("", 30.0, "live sunshine").observation;

        let days = aggregate_forecast(Some(&live), &entries, datetime!(2026-10-16 22:00 UTC));
        assert_eq!(days.len(), 1);
        assert_eq!(days[0].hourly_data.len(), 8);
        assert_ne!(days[0].conditions, "live sunshine");
    }

    #[test]
    fn test_best_day_prefers_earlier_on_tie() {
        let mut entries = one_day("2026-10-17");
        entries.extend(one_day("2026-10-18"));
        let days = aggregate_forecast(None, &entries, datetime!(2026-10-16 12:00 UTC));
        assert_eq!(days[0].avg_travel_score, days[1].avg_travel_score);
        assert_eq!(best_day(&days).unwrap().date, "2026-10-17");
    }

    #[test]
    fn test_best_day_empty() {
        assert!(best_day(&[]).is_none());
        assert!(aggregate_forecast(None, &[], datetime!(2026-10-16 12:00 UTC)).is_empty());
    }
}
