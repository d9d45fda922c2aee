use serde::Serialize;
use std::fmt;

/// Temperature band driving clothing suggestions.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum TempBand {
    Hot,
    Warm,
    Mild,
    Cool,
    Cold,
}

impl TempBand {
    pub fn from_celsius(temp: f64) -> Self {
        if temp >= 30.0 {
            TempBand::Hot
        } else if temp >= 20.0 {
            TempBand::Warm
        } else if temp >= 10.0 {
            TempBand::Mild
        } else if temp >= 0.0 {
            TempBand::Cool
        } else {
            TempBand::Cold
        }
    }
}

impl fmt::Display for TempBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            TempBand::Hot => "hot",
            TempBand::Warm => "warm",
            TempBand::Mild => "mild",
            TempBand::Cool => "cool",
            TempBand::Cold => "cold",
        };
        write!(f, "{}", s)
    }
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ActivityGear {
    pub activity: String,
    pub items: Vec<&'static str>,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Essentials {
    pub documents: Vec<&'static str>,
    pub toiletries: Vec<&'static str>,
    pub electronics: Vec<&'static str>,
    pub miscellaneous: Vec<&'static str>,
}

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct Quantities {
    pub underwear: u32,
    pub socks: u32,
    pub tops: u32,
    pub bottoms: u32,
    pub outerwear: u32,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PackingList {
    pub temp_band: TempBand,
    pub clothing: Vec<&'static str>,
    pub weather_gear: Vec<&'static str>,
    pub activity_gear: Vec<ActivityGear>,
    pub essentials: Essentials,
    pub tips: Vec<&'static str>,
    pub quantities: Quantities,
}

/// Carry-on list produced by the dedicated minimal generator.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MinimalPackingList {
    pub temp_band: TempBand,
    pub duration: u32,
    pub clothing: Vec<&'static str>,
    pub essentials: Essentials,
    pub tips: Vec<&'static str>,
    pub quantities: Quantities,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct TripDetails {
    pub duration: u32,
    pub activities: Vec<String>,
    pub style: String,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ChecklistItem {
    pub name: &'static str,
    pub checked: bool,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ChecklistSection {
    pub category: String,
    pub items: Vec<ChecklistItem>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_temp_band_edges() {
        assert_eq!(TempBand::from_celsius(30.0), TempBand::Hot);
        assert_eq!(TempBand::from_celsius(29.9), TempBand::Warm);
        assert_eq!(TempBand::from_celsius(20.0), TempBand::Warm);
        assert_eq!(TempBand::from_celsius(10.0), TempBand::Mild);
        assert_eq!(TempBand::from_celsius(0.0), TempBand::Cool);
        assert_eq!(TempBand::from_celsius(-0.1), TempBand::Cold);
    }
}
