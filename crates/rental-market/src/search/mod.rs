//! Location autocomplete: a static city catalog and the relevance ranker over it.

mod catalog;
mod directory;
mod ranking;
pub mod router;

pub use catalog::{City, CityCatalog};
pub use directory::{CityDirectory, Suggestions};
pub use ranking::{
    popular_cities, rank, search, MatchTier, RankedCity, MAX_RESULTS, MIN_QUERY_CHARS,
    POPULAR_BOOST,
};
pub use router::city_router;
