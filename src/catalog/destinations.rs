use crate::models::{Destination, TemperatureRange};

const fn range(min: f64, max: f64) -> TemperatureRange {
    TemperatureRange { min, max }
}

/// Hand-curated destinations, in the order candidates are considered.
pub static DESTINATIONS: &[Destination] = &[
    Destination {
        city: "Miami",
        country: "USA",
        climate: "tropical",
        optimal_temp: range(24.0, 30.0),
        activities: &["beach", "water sports", "nightlife"],
        best_months: &[11, 12, 1, 2, 3, 4],
        tags: &["warm", "humid", "sunny"],
    },
    Destination {
        city: "Denver",
        country: "USA",
        climate: "continental",
        optimal_temp: range(15.0, 25.0),
        activities: &["hiking", "skiing", "mountains"],
        best_months: &[6, 7, 8, 9],
        tags: &["mild", "dry", "mountains"],
    },
    Destination {
        city: "Seattle",
        country: "USA",
        climate: "oceanic",
        optimal_temp: range(12.0, 22.0),
        activities: &["culture", "coffee", "nature"],
        best_months: &[6, 7, 8, 9],
        tags: &["cool", "rainy", "green"],
    },
    Destination {
        city: "Barcelona",
        country: "Spain",
        climate: "mediterranean",
        optimal_temp: range(18.0, 28.0),
        activities: &["beach", "culture", "food"],
        best_months: &[5, 6, 9, 10],
        tags: &["warm", "sunny", "coastal"],
    },
    Destination {
        city: "Tokyo",
        country: "Japan",
        climate: "humid subtropical",
        optimal_temp: range(15.0, 25.0),
        activities: &["culture", "food", "technology"],
        best_months: &[3, 4, 10, 11],
        tags: &["seasonal", "varied", "urban"],
    },
    Destination {
        city: "Reykjavik",
        country: "Iceland",
        climate: "subarctic",
        optimal_temp: range(8.0, 15.0),
        activities: &["northern lights", "geothermal", "nature"],
        best_months: &[6, 7, 8],
        tags: &["cold", "unique", "adventure"],
    },
    Destination {
        city: "Dubai",
        country: "UAE",
        climate: "desert",
        optimal_temp: range(20.0, 35.0),
        activities: &["luxury", "shopping", "desert"],
        best_months: &[11, 12, 1, 2, 3],
        tags: &["hot", "dry", "luxury"],
    },
    Destination {
        city: "Paris",
        country: "France",
        climate: "oceanic",
        optimal_temp: range(15.0, 25.0),
        activities: &["culture", "food", "romance"],
        best_months: &[4, 5, 6, 9, 10],
        tags: &["mild", "romantic", "cultural"],
    },
    Destination {
        city: "Lisbon",
        country: "Portugal",
        climate: "mediterranean",
        optimal_temp: range(17.0, 27.0),
        activities: &["culture", "food", "beach"],
        best_months: &[4, 5, 6, 9, 10],
        tags: &["sunny", "coastal", "hilly"],
    },
    Destination {
        city: "Cape Town",
        country: "South Africa",
        climate: "mediterranean",
        optimal_temp: range(18.0, 28.0),
        activities: &["hiking", "beach", "wine"],
        best_months: &[11, 12, 1, 2, 3],
        tags: &["coastal", "mountains", "sunny"],
    },
    Destination {
        city: "Vancouver",
        country: "Canada",
        climate: "oceanic",
        optimal_temp: range(14.0, 24.0),
        activities: &["hiking", "skiing", "nature"],
        best_months: &[6, 7, 8, 9],
        tags: &["green", "mountains", "coastal"],
    },
    Destination {
        city: "Bangkok",
        country: "Thailand",
        climate: "tropical",
        optimal_temp: range(24.0, 32.0),
        activities: &["food", "culture", "nightlife"],
        best_months: &[11, 12, 1, 2],
        tags: &["hot", "humid", "urban"],
    },
    Destination {
        city: "Marrakech",
        country: "Morocco",
        climate: "semi-arid",
        optimal_temp: range(18.0, 30.0),
        activities: &["culture", "shopping", "desert"],
        best_months: &[3, 4, 5, 10, 11],
        tags: &["warm", "dry", "exotic"],
    },
    Destination {
        city: "Queenstown",
        country: "New Zealand",
        climate: "oceanic",
        optimal_temp: range(10.0, 22.0),
        activities: &["adventure", "skiing", "hiking"],
        best_months: &[12, 1, 2, 3, 7, 8],
        tags: &["mountains", "adventure", "scenic"],
    },
    Destination {
        city: "Sydney",
        country: "Australia",
        climate: "humid subtropical",
        optimal_temp: range(18.0, 28.0),
        activities: &["beach", "water sports", "food"],
        best_months: &[10, 11, 12, 1, 2, 3],
        tags: &["sunny", "coastal", "urban"],
    },
    Destination {
        city: "Zermatt",
        country: "Switzerland",
        climate: "alpine",
        optimal_temp: range(-5.0, 20.0),
        activities: &["skiing", "hiking", "mountains"],
        best_months: &[1, 2, 3, 7, 8],
        tags: &["cold", "mountains", "scenic"],
    },
];
