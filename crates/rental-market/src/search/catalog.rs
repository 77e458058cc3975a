use serde::{Deserialize, Serialize};

/// A destination offered by the location autocomplete.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct City {
    pub id: String,
    pub name: String,
    pub country: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub population: Option<u64>,
    #[serde(default)]
    pub is_popular: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub aliases: Vec<String>,
}

impl City {
    pub fn new(id: impl Into<String>, name: impl Into<String>, country: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            country: country.into(),
            population: None,
            is_popular: false,
            region: None,
            aliases: Vec::new(),
        }
    }

    pub fn with_population(mut self, population: u64) -> Self {
        self.population = Some(population);
        self
    }

    pub fn popular(mut self) -> Self {
        self.is_popular = true;
        self
    }

    pub fn in_region(mut self, region: impl Into<String>) -> Self {
        self.region = Some(region.into());
        self
    }

    pub fn also_known_as(mut self, aliases: &[&str]) -> Self {
        self.aliases = aliases.iter().map(|alias| alias.to_string()).collect();
        self
    }
}

/// Immutable list of cities the ranker searches over.
#[derive(Debug, Clone, Default)]
pub struct CityCatalog {
    cities: Vec<City>,
}

impl CityCatalog {
    pub fn new(cities: Vec<City>) -> Self {
        Self { cities }
    }

    /// The European destinations served by the marketplace.
    pub fn standard() -> Self {
        let cities = vec![
            City::new("1", "Amsterdam", "Netherlands")
                .with_population(872_680)
                .popular()
                .in_region("North Holland"),
            City::new("2", "Barcelona", "Spain")
                .with_population(1_620_343)
                .popular()
                .in_region("Catalonia")
                .also_known_as(&["Barna", "BCN"]),
            City::new("3", "Berlin", "Germany")
                .with_population(3_669_491)
                .popular(),
            City::new("4", "Brussels", "Belgium")
                .with_population(1_208_542)
                .popular(),
            City::new("5", "Copenhagen", "Denmark")
                .with_population(794_128)
                .popular(),
            City::new("6", "Dublin", "Ireland")
                .with_population(554_554)
                .popular(),
            City::new("7", "Florence", "Italy")
                .with_population(382_258)
                .popular()
                .in_region("Tuscany"),
            City::new("8", "Lisbon", "Portugal")
                .with_population(505_526)
                .popular(),
            City::new("9", "London", "United Kingdom")
                .with_population(8_982_000)
                .popular(),
            City::new("10", "Madrid", "Spain")
                .with_population(3_223_334)
                .popular(),
            City::new("11", "Milan", "Italy")
                .with_population(1_396_059)
                .popular()
                .in_region("Lombardy"),
            City::new("12", "Munich", "Germany")
                .with_population(1_471_508)
                .popular()
                .in_region("Bavaria"),
            City::new("13", "Paris", "France")
                .with_population(2_161_000)
                .popular()
                .in_region("Île-de-France"),
            City::new("14", "Prague", "Czech Republic")
                .with_population(1_309_000)
                .popular(),
            City::new("15", "Rome", "Italy")
                .with_population(2_873_000)
                .popular()
                .in_region("Lazio"),
            City::new("16", "Rotterdam", "Netherlands")
                .with_population(651_446)
                .popular()
                .in_region("South Holland"),
            City::new("17", "Stockholm", "Sweden")
                .with_population(975_551)
                .popular(),
            City::new("18", "Valencia", "Spain")
                .with_population(791_413)
                .popular(),
            City::new("19", "Vienna", "Austria")
                .with_population(1_897_491)
                .popular(),
            City::new("20", "Warsaw", "Poland")
                .with_population(1_765_000)
                .popular(),
            City::new("21", "Zurich", "Switzerland")
                .with_population(402_762)
                .popular(),
            City::new("22", "Barcelos", "Portugal")
                .with_population(120_391)
                .in_region("Braga"),
            City::new("23", "Barcelonnette", "France")
                .with_population(2_851)
                .in_region("Provence-Alpes-Côte d'Azur"),
            City::new("24", "Bárcena Mayor", "Spain")
                .with_population(434)
                .in_region("Cantabria"),
            City::new("25", "Barcellona Pozzo di Gotto", "Italy")
                .with_population(41_583)
                .in_region("Sicily"),
            City::new("26", "Utrecht", "Netherlands")
                .with_population(357_597)
                .in_region("Utrecht"),
            City::new("27", "The Hague", "Netherlands")
                .with_population(545_838)
                .in_region("South Holland")
                .also_known_as(&["Den Haag"]),
            City::new("28", "Eindhoven", "Netherlands")
                .with_population(234_394)
                .in_region("North Brabant"),
            City::new("29", "Groningen", "Netherlands")
                .with_population(233_218)
                .in_region("Groningen"),
            City::new("30", "Maastricht", "Netherlands")
                .with_population(121_565)
                .in_region("Limburg"),
            City::new("31", "Seville", "Spain")
                .with_population(688_711)
                .in_region("Andalusia")
                .also_known_as(&["Sevilla"]),
            City::new("32", "Granada", "Spain")
                .with_population(232_462)
                .in_region("Andalusia"),
            City::new("33", "Malaga", "Spain")
                .with_population(574_654)
                .in_region("Andalusia")
                .also_known_as(&["Málaga"]),
            City::new("34", "Bilbao", "Spain")
                .with_population(345_821)
                .in_region("Basque Country"),
            City::new("35", "Alicante", "Spain")
                .with_population(334_887)
                .in_region("Valencia"),
        ];

        Self { cities }
    }

    pub fn cities(&self) -> &[City] {
        &self.cities
    }

    pub fn find(&self, id: &str) -> Option<&City> {
        self.cities.iter().find(|city| city.id == id)
    }

    pub fn len(&self) -> usize {
        self.cities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cities.is_empty()
    }
}
