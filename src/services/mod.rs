pub mod clock;
pub mod forecast_aggregator;
pub mod nearby;
pub mod openweather;
pub mod packing;
pub mod recommendation;
pub mod travel_score;
pub mod weather_provider;

pub use clock::{Clock, FixedClock, SystemClock};
pub use openweather::OpenWeatherClient;
pub use weather_provider::WeatherProvider;
