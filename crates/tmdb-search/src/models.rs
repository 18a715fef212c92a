//! Search result models.

use serde::{Deserialize, Serialize};

/// Mixed result from `/search/multi`.
///
/// Which fields are filled depends on `media_type` (`movie`, `tv` or `person`).
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct MultiResult {
    /// Resource id
    pub id: u64,
    /// `movie`, `tv` or `person`
    pub media_type: String,
    /// Movie title
    pub title: Option<String>,
    /// Movie original title
    pub original_title: Option<String>,
    /// Series or person name
    pub name: Option<String>,
    /// Series or person original name
    pub original_name: Option<String>,
    /// Original language
    pub original_language: Option<String>,
    /// Plot summary
    pub overview: Option<String>,
    /// Movie release date
    pub release_date: Option<String>,
    /// Series first air date
    pub first_air_date: Option<String>,
    /// Poster image path
    pub poster_path: Option<String>,
    /// Backdrop image path
    pub backdrop_path: Option<String>,
    /// Person profile image path
    pub profile_path: Option<String>,
    /// Genre ids
    pub genre_ids: Vec<u64>,
    /// Series origin countries
    pub origin_country: Vec<String>,
    /// Person known-for department
    pub known_for_department: Option<String>,
    /// Person gender code
    pub gender: Option<u8>,
    /// Adult flag
    pub adult: Option<bool>,
    /// Popularity score
    pub popularity: f64,
    /// Average vote
    pub vote_average: Option<f64>,
    /// Number of votes
    pub vote_count: Option<u64>,
    /// Works a person is known for
    pub known_for: Vec<MultiResult>,
}

impl MultiResult {
    /// Whether this result is a person.
    #[must_use]
    pub fn is_person(&self) -> bool {
        self.media_type == "person"
    }
}

/// Company search result.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct CompanyResult {
    /// Company id
    pub id: u64,
    /// Company name
    pub name: String,
    /// Logo image path
    pub logo_path: Option<String>,
    /// Origin country
    pub origin_country: String,
}

/// Collection search result.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct CollectionResult {
    /// Collection id
    pub id: u64,
    /// Localized name
    pub name: String,
    /// Original name
    pub original_name: String,
    /// Original language
    pub original_language: String,
    /// Overview
    pub overview: String,
    /// Poster image path
    pub poster_path: Option<String>,
    /// Backdrop image path
    pub backdrop_path: Option<String>,
    /// Adult flag
    pub adult: bool,
}

/// Person search result.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct PersonResult {
    /// Person id
    pub id: u64,
    /// Name
    pub name: String,
    /// Original name
    pub original_name: String,
    /// Known-for department
    pub known_for_department: String,
    /// Gender code
    pub gender: Option<u8>,
    /// Popularity score
    pub popularity: f64,
    /// Profile image path
    pub profile_path: Option<String>,
    /// Adult flag
    pub adult: bool,
    /// Works the person is known for
    pub known_for: Vec<MultiResult>,
}
