use super::catalog::{City, CityCatalog};
use super::ranking::{normalize_query, popular_cities, search};
use std::time::Duration;

/// What the autocomplete should show for a given input.
#[derive(Debug, Clone, PartialEq)]
pub enum Suggestions<'a> {
    /// Nothing typed yet; the largest popular cities.
    Popular(Vec<&'a City>),
    /// Ranked matches for a query long enough to search.
    Matches(Vec<&'a City>),
    /// Input present but too short to carry signal.
    TooShort,
}

impl<'a> Suggestions<'a> {
    pub fn into_cities(self) -> Vec<&'a City> {
        match self {
            Suggestions::Popular(cities) | Suggestions::Matches(cities) => cities,
            Suggestions::TooShort => Vec::new(),
        }
    }
}

/// The city catalog together with how the search endpoint serves it.
#[derive(Debug, Clone, Default)]
pub struct CityDirectory {
    catalog: CityCatalog,
    simulated_latency: Duration,
}

impl CityDirectory {
    pub fn new(catalog: CityCatalog) -> Self {
        Self {
            catalog,
            simulated_latency: Duration::ZERO,
        }
    }

    pub fn with_simulated_latency(mut self, latency: Duration) -> Self {
        self.simulated_latency = latency;
        self
    }

    pub fn catalog(&self) -> &CityCatalog {
        &self.catalog
    }

    pub fn simulated_latency(&self) -> Duration {
        self.simulated_latency
    }

    pub fn suggestions(&self, query: Option<&str>) -> Suggestions<'_> {
        let cities = self.catalog.cities();
        match query.map(str::trim) {
            None | Some("") => Suggestions::Popular(popular_cities(cities)),
            Some(raw) if normalize_query(raw).is_none() => Suggestions::TooShort,
            Some(raw) => Suggestions::Matches(search(raw, cities)),
        }
    }
}
