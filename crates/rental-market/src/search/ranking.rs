use super::catalog::City;
use serde::Serialize;
use tracing::debug;

/// Queries with fewer characters than this (after trimming) return nothing.
pub const MIN_QUERY_CHARS: usize = 2;
pub const MAX_RESULTS: usize = 5;
pub const POPULAR_BOOST: u32 = 10;

/// Which field of a city matched the query. Tiers are checked in declaration
/// order and the first hit wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchTier {
    ExactName,
    NamePrefix,
    NameContains,
    Alias,
    Country,
    Region,
}

impl MatchTier {
    pub const fn score(self) -> u32 {
        match self {
            Self::ExactName => 100,
            Self::NamePrefix => 75,
            Self::NameContains => 50,
            Self::Alias => 40,
            Self::Country => 25,
            Self::Region => 20,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::ExactName => "Exact name",
            Self::NamePrefix => "Name prefix",
            Self::NameContains => "Name contains",
            Self::Alias => "Alias",
            Self::Country => "Country",
            Self::Region => "Region",
        }
    }
}

/// A city paired with the relevance it earned for a query.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankedCity<'a> {
    pub city: &'a City,
    pub tier: MatchTier,
    pub score: u32,
}

pub(crate) fn normalize_query(query: &str) -> Option<String> {
    let normalized = query.trim().to_lowercase();
    if normalized.chars().count() < MIN_QUERY_CHARS {
        return None;
    }
    Some(normalized)
}

fn classify(city: &City, query: &str) -> Option<MatchTier> {
    let name = city.name.to_lowercase();

    if name == query {
        return Some(MatchTier::ExactName);
    }
    if name.starts_with(query) {
        return Some(MatchTier::NamePrefix);
    }
    if name.contains(query) {
        return Some(MatchTier::NameContains);
    }
    if city
        .aliases
        .iter()
        .any(|alias| alias.to_lowercase().contains(query))
    {
        return Some(MatchTier::Alias);
    }
    if city.country.to_lowercase().contains(query) {
        return Some(MatchTier::Country);
    }
    if city
        .region
        .as_deref()
        .is_some_and(|region| region.to_lowercase().contains(query))
    {
        return Some(MatchTier::Region);
    }

    None
}

/// Scores every city against `query`, keeping the best [`MAX_RESULTS`].
///
/// Ties keep the order of `cities`.
pub fn rank<'a>(query: &str, cities: &'a [City]) -> Vec<RankedCity<'a>> {
    let Some(query) = normalize_query(query) else {
        return Vec::new();
    };

    let mut ranked: Vec<RankedCity<'a>> = cities
        .iter()
        .filter_map(|city| {
            let tier = classify(city, &query)?;
            let mut score = tier.score();
            if city.is_popular {
                score += POPULAR_BOOST;
            }
            Some(RankedCity { city, tier, score })
        })
        .collect();

    ranked.sort_by(|left, right| right.score.cmp(&left.score));
    ranked.truncate(MAX_RESULTS);

    debug!(query = %query, matches = ranked.len(), "ranked city search");
    ranked
}

pub fn search<'a>(query: &str, cities: &'a [City]) -> Vec<&'a City> {
    rank(query, cities)
        .into_iter()
        .map(|ranked| ranked.city)
        .collect()
}

/// Default suggestions shown before the user types: the largest popular cities.
pub fn popular_cities(cities: &[City]) -> Vec<&City> {
    let mut popular: Vec<&City> = cities.iter().filter(|city| city.is_popular).collect();
    popular.sort_by(|left, right| {
        right
            .population
            .unwrap_or(0)
            .cmp(&left.population.unwrap_or(0))
    });
    popular.truncate(MAX_RESULTS);
    popular
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fixture() -> Vec<City> {
        vec![
            City::new("a", "Porto", "Portugal").with_population(230_000).popular(),
            City::new("b", "Portsmouth", "United Kingdom").with_population(208_000),
            City::new("c", "Oporto Norte", "Spain")
                .in_region("Galicia")
                .also_known_as(&["Spainport"]),
            City::new("d", "Vigo", "Spain").with_population(296_000).in_region("Galicia"),
            City::new("e", "Faro", "Portugal").in_region("Algarve").popular(),
        ]
    }

    #[test]
    fn short_queries_return_nothing() {
        let cities = fixture();
        assert!(search("", &cities).is_empty());
        assert!(search("p", &cities).is_empty());
        assert!(search("  p  ", &cities).is_empty());
    }

    #[test]
    fn tiers_follow_priority_order() {
        let cities = fixture();

        let exact = rank("PORTO", &cities);
        assert_eq!(exact[0].city.id, "a");
        assert_eq!(exact[0].tier, MatchTier::ExactName);
        assert_eq!(exact[0].score, 110);

        let prefix = rank("ports", &cities);
        assert_eq!(prefix.len(), 1);
        assert_eq!(prefix[0].tier, MatchTier::NamePrefix);
        assert_eq!(prefix[0].score, 75);

        let region = rank("galicia", &cities);
        assert!(region.iter().all(|ranked| ranked.tier == MatchTier::Region));
        assert_eq!(region.len(), 2);
    }

    #[test]
    fn alias_outranks_country_match() {
        let cities = fixture();
        let ranked = rank("spain", &cities);

        let oporto = ranked
            .iter()
            .find(|ranked| ranked.city.id == "c")
            .expect("oporto norte matched");
        assert_eq!(oporto.tier, MatchTier::Alias);
        assert_eq!(oporto.score, 40);

        let vigo = ranked
            .iter()
            .find(|ranked| ranked.city.id == "d")
            .expect("vigo matched");
        assert_eq!(vigo.tier, MatchTier::Country);
        assert_eq!(ranked[0].city.id, "c");
    }

    #[test]
    fn popular_boost_only_applies_to_matches() {
        let cities = fixture();
        let ranked = rank("algarve", &cities);
        assert_eq!(ranked.len(), 1);
        assert_eq!(ranked[0].score, MatchTier::Region.score() + POPULAR_BOOST);

        assert!(rank("lisbon", &cities).is_empty());
    }

    #[test]
    fn ties_keep_catalog_order() {
        let cities = fixture();
        let ranked = rank("portugal", &cities);
        let ids: Vec<&str> = ranked.iter().map(|ranked| ranked.city.id.as_str()).collect();
        assert_eq!(ids, vec!["a", "e"]);
    }

    #[test]
    fn popular_cities_sorted_by_population_with_missing_as_zero() {
        let cities = fixture();
        let popular = popular_cities(&cities);
        let ids: Vec<&str> = popular.iter().map(|city| city.id.as_str()).collect();
        assert_eq!(ids, vec!["a", "e"]);
    }
}
