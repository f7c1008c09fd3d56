//! The country catalog: every country the game can ask about or accept as a guess.

use serde::{Deserialize, Serialize};

use crate::geography::Point;

const OEC_PROFILE_BASE: &str = "https://oec.world/en/profile/country/";

/// A country as stored alongside a guess.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Country {
    /// ISO 3166-1 alpha-2 code.
    pub code: String,
    pub latitude: f64,
    pub longitude: f64,
    pub name: String,
}

/// A catalog row: codes, display name, and centroid.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CatalogEntry {
    pub code: &'static str,
    pub iso3: &'static str,
    pub name: &'static str,
    pub latitude: f64,
    pub longitude: f64,
}

impl CatalogEntry {
    pub fn point(&self) -> Point {
        Point::new(self.latitude, self.longitude)
    }

    pub fn to_country(self) -> Country {
        Country {
            code: self.code.to_string(),
            latitude: self.latitude,
            longitude: self.longitude,
            name: self.name.to_string(),
        }
    }
}

const fn entry(
    code: &'static str,
    iso3: &'static str,
    name: &'static str,
    latitude: f64,
    longitude: f64,
) -> CatalogEntry {
    CatalogEntry {
        code,
        iso3,
        name,
        latitude,
        longitude,
    }
}

#[rustfmt::skip]
#[allow(clippy::unreadable_literal)] // Centroids, copied as published.
const CATALOG: &[CatalogEntry] = &[
    entry("AR", "ARG", "Argentina", -38.416097, -63.616672),
    entry("AU", "AUS", "Australia", -25.274398, 133.775136),
    entry("AT", "AUT", "Austria", 47.516231, 14.550072),
    entry("BD", "BGD", "Bangladesh", 23.684994, 90.356331),
    entry("BE", "BEL", "Belgium", 50.503887, 4.469936),
    entry("BR", "BRA", "Brazil", -14.235004, -51.92528),
    entry("CA", "CAN", "Canada", 56.130366, -106.346771),
    entry("CL", "CHL", "Chile", -35.675147, -71.542969),
    entry("CN", "CHN", "China", 35.86166, 104.195397),
    entry("CO", "COL", "Colombia", 4.570868, -74.297333),
    entry("CZ", "CZE", "Czech Republic", 49.817492, 15.472962),
    entry("DK", "DNK", "Denmark", 56.26392, 9.501785),
    entry("DZ", "DZA", "Algeria", 28.033886, 1.659626),
    entry("EG", "EGY", "Egypt", 26.820553, 30.802498),
    entry("ES", "ESP", "Spain", 40.463667, -3.74922),
    entry("ET", "ETH", "Ethiopia", 9.145, 40.489673),
    entry("FI", "FIN", "Finland", 61.92411, 25.748151),
    entry("FR", "FRA", "France", 46.227638, 2.213749),
    entry("GB", "GBR", "United Kingdom", 55.378051, -3.435973),
    entry("GR", "GRC", "Greece", 39.074208, 21.824312),
    entry("HU", "HUN", "Hungary", 47.162494, 19.503304),
    entry("ID", "IDN", "Indonesia", -0.789275, 113.921327),
    entry("IE", "IRL", "Ireland", 53.41291, -8.24389),
    entry("IL", "ISR", "Israel", 31.046051, 34.851612),
    entry("IN", "IND", "India", 20.593684, 78.96288),
    entry("IR", "IRN", "Iran", 32.427908, 53.688046),
    entry("IS", "ISL", "Iceland", 64.963051, -19.020835),
    entry("IT", "ITA", "Italy", 41.87194, 12.56738),
    entry("JP", "JPN", "Japan", 36.204824, 138.252924),
    entry("KE", "KEN", "Kenya", -0.023559, 37.906193),
    entry("KR", "KOR", "South Korea", 35.907757, 127.766922),
    entry("KZ", "KAZ", "Kazakhstan", 48.019573, 66.923684),
    entry("MA", "MAR", "Morocco", 31.791702, -7.09262),
    entry("MN", "MNG", "Mongolia", 46.862496, 103.846656),
    entry("MX", "MEX", "Mexico", 23.634501, -102.552784),
    entry("MY", "MYS", "Malaysia", 4.210484, 101.975766),
    entry("NG", "NGA", "Nigeria", 9.081999, 8.675277),
    entry("NL", "NLD", "Netherlands", 52.132633, 5.291266),
    entry("NO", "NOR", "Norway", 60.472024, 8.468946),
    entry("NZ", "NZL", "New Zealand", -40.900557, 174.885971),
    entry("PE", "PER", "Peru", -9.189967, -75.015152),
    entry("PH", "PHL", "Philippines", 12.879721, 121.774017),
    entry("PK", "PAK", "Pakistan", 30.375321, 69.345116),
    entry("PL", "POL", "Poland", 51.919438, 19.145136),
    entry("PT", "PRT", "Portugal", 39.399872, -8.224454),
    entry("RO", "ROU", "Romania", 45.943161, 24.96676),
    entry("RU", "RUS", "Russia", 61.52401, 105.318756),
    entry("SA", "SAU", "Saudi Arabia", 23.885942, 45.079162),
    entry("SE", "SWE", "Sweden", 60.128161, 18.643501),
    entry("SG", "SGP", "Singapore", 1.352083, 103.819836),
    entry("TH", "THA", "Thailand", 15.870032, 100.992541),
    entry("TR", "TUR", "Turkey", 38.963745, 35.243322),
    entry("UA", "UKR", "Ukraine", 48.379433, 31.16558),
    entry("AE", "ARE", "United Arab Emirates", 23.424076, 53.847818),
    entry("US", "USA", "United States", 37.09024, -95.712891),
    entry("VE", "VEN", "Venezuela", 6.42375, -66.58973),
    entry("VN", "VNM", "Vietnam", 14.058324, 108.277199),
    entry("ZA", "ZAF", "South Africa", -30.559482, 22.937506),
    entry("CH", "CHE", "Switzerland", 46.818188, 8.227512),
    entry("CU", "CUB", "Cuba", 21.521757, -77.781167),
];

/// All countries, in a stable order.
pub fn catalog() -> &'static [CatalogEntry] {
    CATALOG
}

/// Look a country up by display name, ignoring case and surrounding whitespace.
pub fn find_by_name(name: &str) -> Option<&'static CatalogEntry> {
    let name = name.trim();
    CATALOG.iter().find(|c| c.name.eq_ignore_ascii_case(name))
}

/// Look a country up by its alpha-2 code, ignoring case.
pub fn find_by_code(code: &str) -> Option<&'static CatalogEntry> {
    CATALOG.iter().find(|c| c.code.eq_ignore_ascii_case(code))
}

/// Link to the country's trade profile on the OEC.
///
/// The last path segment is the lowercase alpha-3 code. A country with an
/// empty or unknown code gets an empty segment.
pub fn construct_oec_link(country: &Country) -> String {
    let iso3 = iso3_for_code(&country.code)
        .map(str::to_lowercase)
        .unwrap_or_default();
    format!("{OEC_PROFILE_BASE}{iso3}")
}

/// The alpha-3 code for an alpha-2 code, ignoring case.
pub fn iso3_for_code(code: &str) -> Option<&'static str> {
    if code.is_empty() {
        return None;
    }
    find_by_code(code).map(|c| c.iso3)
}
