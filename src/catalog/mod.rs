//! Static reference data compiled into the binary.

pub mod cities;
pub mod destinations;
pub mod packing;

pub use cities::{find_curated_city, CuratedCity, CURATED_CITIES};
pub use destinations::DESTINATIONS;
