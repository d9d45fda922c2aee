use serde::{Deserialize, Serialize};

/// Mean Earth radius used for great-circle distances.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// A WGS84 point. Construct through [`Coordinates::new`] to get range checks.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct Coordinates {
    pub lat: f64,
    pub lng: f64,
}

impl Coordinates {
    pub fn new(lat: f64, lng: f64) -> Result<Self, String> {
        let lat_ok = lat.is_finite() && lat.abs() <= 90.0;
        let lng_ok = lng.is_finite() && lng.abs() <= 180.0;

        match (lat_ok, lng_ok) {
            (true, true) => Ok(Coordinates { lat, lng }),
            (false, _) => Err(format!("latitude {} is outside [-90, 90]", lat)),
            (_, false) => Err(format!("longitude {} is outside [-180, 180]", lng)),
        }
    }

    /// Haversine distance in kilometres
    pub fn distance_to(&self, other: &Coordinates) -> f64 {
        let (phi1, phi2) = (self.lat.to_radians(), other.lat.to_radians());
        let half_dphi = (phi2 - phi1) / 2.0;
        let half_dlambda = (other.lng - self.lng).to_radians() / 2.0;

        let h = half_dphi.sin().powi(2) + phi1.cos() * phi2.cos() * half_dlambda.sin().powi(2);
        2.0 * EARTH_RADIUS_KM * h.sqrt().min(1.0).asin()
    }

    /// Snap to a grid of `decimals` places; used to share cache entries
    /// between readings taken a few metres apart.
    pub fn snapped(&self, decimals: u32) -> Self {
        let scale = 10_f64.powi(decimals as i32);
        let snap = |v: f64| (v * scale).round() / scale;
        Coordinates {
            lat: snap(self.lat),
            lng: snap(self.lng),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_range_checks() {
        assert!(Coordinates::new(38.7223, -9.1393).is_ok());
        assert!(Coordinates::new(-90.0, 180.0).is_ok());
        assert!(Coordinates::new(90.5, 0.0).unwrap_err().contains("latitude"));
        assert!(Coordinates::new(0.0, -180.5).unwrap_err().contains("longitude"));
        assert!(Coordinates::new(f64::NAN, 0.0).is_err());
    }

    #[test]
    fn test_distance_is_symmetric_and_zero_on_self() {
        let amsterdam = Coordinates::new(52.3676, 4.9041).unwrap();
        let rotterdam = Coordinates::new(51.9244, 4.4777).unwrap();

        assert_eq!(amsterdam.distance_to(&amsterdam), 0.0);
        let there = amsterdam.distance_to(&rotterdam);
        let back = rotterdam.distance_to(&amsterdam);
        assert!((there - back).abs() < 1e-9);
        // Roughly 57 km apart
        assert!((there - 57.0).abs() < 3.0);
    }

    #[test]
    fn test_long_haul_distance() {
        let lisbon = Coordinates::new(38.7223, -9.1393).unwrap();
        let tokyo = Coordinates::new(35.6762, 139.6503).unwrap();
        // About 11,140 km
        assert!((lisbon.distance_to(&tokyo) - 11_140.0).abs() < 60.0);
    }

    #[test]
    fn test_snapped() {
        let coords = Coordinates::new(52.367_649, 4.904_138).unwrap();
        let snapped = coords.snapped(3);
        assert_eq!(snapped.lat, 52.368);
        assert_eq!(snapped.lng, 4.904);
    }
}
