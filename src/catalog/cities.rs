use crate::models::Coordinates;

/// A well-known city used when the provider cannot list nearby places.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CuratedCity {
    pub name: &'static str,
    /// ISO 3166-1 alpha-2 code, as reported by the provider
    pub country: &'static str,
    pub lat: f64,
    pub lng: f64,
}

impl CuratedCity {
    pub fn coordinates(&self) -> Coordinates {
        Coordinates {
            lat: self.lat,
            lng: self.lng,
        }
    }
}

const fn city(name: &'static str, country: &'static str, lat: f64, lng: f64) -> CuratedCity {
    CuratedCity {
        name,
        country,
        lat,
        lng,
    }
}

pub static CURATED_CITIES: &[CuratedCity] = &[
    // United Kingdom
    city("London", "GB", 51.5074, -0.1278),
    city("Reading", "GB", 51.4543, -0.9781),
    city("Oxford", "GB", 51.7520, -1.2577),
    city("Cambridge", "GB", 52.2053, 0.1218),
    city("Manchester", "GB", 53.4808, -2.2426),
    city("Liverpool", "GB", 53.4084, -2.9916),
    // Netherlands
    city("Amsterdam", "NL", 52.3676, 4.9041),
    city("Rotterdam", "NL", 51.9244, 4.4777),
    city("The Hague", "NL", 52.0705, 4.3007),
    city("Utrecht", "NL", 52.0907, 5.1214),
    // Belgium
    city("Brussels", "BE", 50.8503, 4.3517),
    city("Antwerp", "BE", 51.2194, 4.4025),
    // France
    city("Paris", "FR", 48.8566, 2.3522),
    city("Versailles", "FR", 48.8049, 2.1204),
    city("Lille", "FR", 50.6292, 3.0573),
    // Germany
    city("Berlin", "DE", 52.5200, 13.4050),
    city("Potsdam", "DE", 52.3906, 13.0645),
    city("Frankfurt", "DE", 50.1109, 8.6821),
    city("Mainz", "DE", 49.9929, 8.2473),
    city("Cologne", "DE", 50.9375, 6.9603),
    city("Dusseldorf", "DE", 51.2277, 6.7735),
    // United States
    city("New York", "US", 40.7128, -74.0060),
    city("Newark", "US", 40.7357, -74.1724),
    city("Los Angeles", "US", 34.0522, -118.2437),
    city("Long Beach", "US", 33.7701, -118.1937),
    city("San Francisco", "US", 37.7749, -122.4194),
    city("Oakland", "US", 37.8044, -122.2712),
    city("San Jose", "US", 37.3382, -121.8863),
    // Japan
    city("Tokyo", "JP", 35.6762, 139.6503),
    city("Yokohama", "JP", 35.4437, 139.6380),
];

/// Case-insensitive lookup by city name
pub fn find_curated_city(name: &str) -> Option<&'static CuratedCity> {
    let wanted = name.trim();
    CURATED_CITIES
        .iter()
        .find(|c| c.name.eq_ignore_ascii_case(wanted))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_curated_coordinates_are_valid() {
        assert_eq!(CURATED_CITIES.len(), 30);
        for c in CURATED_CITIES {
            assert!(Coordinates::new(c.lat, c.lng).is_ok(), "{}", c.name);
            assert_eq!(c.country.len(), 2);
        }
    }

    #[test]
    fn test_find_curated_city() {
        assert_eq!(find_curated_city("  amsterdam ").unwrap().country, "NL");
        assert!(find_curated_city("Atlantis").is_none());
    }
}
