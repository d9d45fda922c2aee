pub mod analysis;
pub mod coordinates;
pub mod destination;
pub mod forecast;
pub mod nearby;
pub mod packing;
pub mod score;
pub mod weather;

pub use analysis::{
    BestTimeAnalysis, CityAnalysis, CityComparison, ComparisonResponse, CurrentConditions,
};
pub use coordinates::Coordinates;
pub use destination::{
    Destination, DestinationPreferences, DestinationRecommendation, TemperatureRange,
};
pub use forecast::{DailyForecastSummary, ForecastResponse, ForecastSample};
pub use nearby::{NearbyCities, NearbyCity, NearbySource};
pub use packing::{
    ActivityGear, ChecklistItem, ChecklistSection, Essentials, MinimalPackingList, PackingList,
    Quantities, TempBand, TripDetails,
};
pub use score::{Recommendation, ScorePreferences, SubScores, TravelScore};
pub use weather::{
    round1, Forecast, ForecastEntry, GeocodedCity, Precipitation, Units, WeatherObservation,
    WeatherSnapshot,
};
