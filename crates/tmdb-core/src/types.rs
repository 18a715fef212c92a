//! Response models shared across services.
//!
//! Nullable remote fields are `Option`, arrays default to empty so partial
//! payloads still decode.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use validator::Validate;

/// A page of results.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Paginated<T> {
    /// Current page (1-based)
    #[serde(default)]
    pub page: u32,
    /// Results on this page
    #[serde(default = "Vec::new")]
    pub results: Vec<T>,
    /// Total number of pages
    #[serde(default)]
    pub total_pages: u32,
    /// Total number of results
    #[serde(default)]
    pub total_results: u32,
}

impl<T> Default for Paginated<T> {
    fn default() -> Self {
        Self {
            page: 0,
            results: Vec::new(),
            total_pages: 0,
            total_results: 0,
        }
    }
}

impl<T> Paginated<T> {
    /// Whether a later page exists.
    #[must_use]
    pub fn has_next_page(&self) -> bool {
        self.page < self.total_pages
    }
}

/// Movie list entry as returned by list, search and discover endpoints.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct MovieListResult {
    /// Movie id
    pub id: u64,
    /// Localized title
    pub title: String,
    /// Original title
    pub original_title: String,
    /// Original language (ISO 639-1)
    pub original_language: String,
    /// Plot summary
    pub overview: String,
    /// Release date (`YYYY-MM-DD`, may be empty)
    pub release_date: String,
    /// Poster image path
    pub poster_path: Option<String>,
    /// Backdrop image path
    pub backdrop_path: Option<String>,
    /// Genre ids
    pub genre_ids: Vec<u64>,
    /// Adult flag
    pub adult: bool,
    /// Has a video release
    pub video: bool,
    /// Popularity score
    pub popularity: f64,
    /// Average vote
    pub vote_average: f64,
    /// Number of votes
    pub vote_count: u64,
}

/// TV list entry as returned by list, search and discover endpoints.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct TvListResult {
    /// Series id
    pub id: u64,
    /// Localized name
    pub name: String,
    /// Original name
    pub original_name: String,
    /// Original language (ISO 639-1)
    pub original_language: String,
    /// Plot summary
    pub overview: String,
    /// First air date (`YYYY-MM-DD`, may be empty)
    pub first_air_date: String,
    /// Origin countries
    pub origin_country: Vec<String>,
    /// Poster image path
    pub poster_path: Option<String>,
    /// Backdrop image path
    pub backdrop_path: Option<String>,
    /// Genre ids
    pub genre_ids: Vec<u64>,
    /// Adult flag
    pub adult: bool,
    /// Popularity score
    pub popularity: f64,
    /// Average vote
    pub vote_average: f64,
    /// Number of votes
    pub vote_count: u64,
}

/// A page of movies.
pub type MoviePage = Paginated<MovieListResult>;

/// A page of TV series.
pub type TvPage = Paginated<TvListResult>;

/// Genre.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Genre {
    /// Genre id
    pub id: u64,
    /// Genre name
    pub name: String,
}

/// Production company.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct ProductionCompany {
    /// Company id
    pub id: u64,
    /// Company name
    pub name: String,
    /// Logo image path
    pub logo_path: Option<String>,
    /// Origin country
    pub origin_country: String,
}

/// Production country.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct ProductionCountry {
    /// ISO 3166-1 code
    pub iso_3166_1: String,
    /// Country name
    pub name: String,
}

/// Spoken language.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct SpokenLanguage {
    /// ISO 639-1 code
    pub iso_639_1: String,
    /// English name
    pub english_name: String,
    /// Native name
    pub name: String,
}

/// Trailer, teaser or clip.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Video {
    /// Video id
    pub id: String,
    /// ISO 639-1 language
    pub iso_639_1: String,
    /// ISO 3166-1 country
    pub iso_3166_1: String,
    /// Title
    pub name: String,
    /// Site-specific key (YouTube id, ...)
    pub key: String,
    /// Hosting site
    pub site: String,
    /// Vertical resolution
    pub size: u32,
    /// `Trailer`, `Teaser`, `Clip`, ...
    #[serde(rename = "type")]
    pub kind: String,
    /// Official upload
    pub official: bool,
    /// Publication timestamp
    pub published_at: String,
}

/// Videos for a movie or series.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct VideoList {
    /// Owning resource id; absent when embedded via `append_to_response`
    pub id: Option<u64>,
    /// Videos
    pub results: Vec<Video>,
}

/// Image metadata.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Image {
    /// Aspect ratio
    pub aspect_ratio: f64,
    /// Image path
    pub file_path: String,
    /// Height
    pub height: u32,
    /// Width
    pub width: u32,
    /// Language, `None` for language-neutral images
    pub iso_639_1: Option<String>,
    /// Vote average
    pub vote_average: f64,
    /// Vote count
    pub vote_count: u64,
}

/// Images for a movie or series.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ImageList {
    /// Resource id
    pub id: Option<u64>,
    /// Backdrop images
    pub backdrops: Vec<Image>,
    /// Logo images
    pub logos: Vec<Image>,
    /// Poster images
    pub posters: Vec<Image>,
}

/// Cast credit.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct CastMember {
    /// Person id
    pub id: u64,
    /// Person name
    pub name: String,
    /// Original name
    pub original_name: String,
    /// Character played
    pub character: String,
    /// Credit id
    pub credit_id: String,
    /// Billing order
    pub order: u32,
    /// Gender code (0 unknown, 1 female, 2 male, 3 non-binary)
    pub gender: Option<u8>,
    /// Known for department
    pub known_for_department: String,
    /// Profile path
    pub profile_path: Option<String>,
    /// Popularity
    pub popularity: f64,
    /// Adult
    pub adult: bool,
}

/// Crew credit.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct CrewMember {
    /// Person id
    pub id: u64,
    /// Person name
    pub name: String,
    /// Original name
    pub original_name: String,
    /// Department
    pub department: String,
    /// Job
    pub job: String,
    /// Credit id
    pub credit_id: String,
    /// Gender code (0 unknown, 1 female, 2 male, 3 non-binary)
    pub gender: Option<u8>,
    /// Known for department
    pub known_for_department: String,
    /// Profile path
    pub profile_path: Option<String>,
    /// Popularity
    pub popularity: f64,
    /// Adult
    pub adult: bool,
}

/// Cast and crew.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Credits {
    /// Resource id
    pub id: Option<u64>,
    /// Cast
    pub cast: Vec<CastMember>,
    /// Crew
    pub crew: Vec<CrewMember>,
}

/// Identifiers on other sites.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct ExternalIds {
    /// Resource id
    pub id: Option<u64>,
    /// IMDb id
    pub imdb_id: Option<String>,
    /// TheTVDB id
    pub tvdb_id: Option<u64>,
    /// TVRage id
    pub tvrage_id: Option<u64>,
    /// Freebase machine id
    pub freebase_mid: Option<String>,
    /// Freebase id
    pub freebase_id: Option<String>,
    /// Wikidata id
    pub wikidata_id: Option<String>,
    /// Facebook handle
    pub facebook_id: Option<String>,
    /// Instagram handle
    pub instagram_id: Option<String>,
    /// Twitter handle
    pub twitter_id: Option<String>,
}

/// Keyword.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Keyword {
    /// Keyword id
    pub id: u64,
    /// Keyword text
    pub name: String,
}

/// Keywords for a movie or series.
///
/// Movies list them under `keywords`, series under `results`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct KeywordsResponse {
    /// Resource id
    pub id: Option<u64>,
    /// Movie keywords
    pub keywords: Vec<Keyword>,
    /// Series keywords
    pub results: Vec<Keyword>,
}

impl KeywordsResponse {
    /// All keywords regardless of which key carried them.
    pub fn all(&self) -> impl Iterator<Item = &Keyword> {
        self.keywords.iter().chain(self.results.iter())
    }
}

/// Review author.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct AuthorDetails {
    /// Name
    pub name: String,
    /// Username
    pub username: String,
    /// Avatar path
    pub avatar_path: Option<String>,
    /// Author's own rating
    pub rating: Option<f64>,
}

/// User review.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Review {
    /// Review id
    pub id: String,
    /// Author display name
    pub author: String,
    /// Author details
    pub author_details: AuthorDetails,
    /// Review text
    pub content: String,
    /// Created at
    pub created_at: String,
    /// Updated at
    pub updated_at: String,
    /// Review URL
    pub url: String,
}

/// Translated fields.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct TranslationData {
    /// Movie title
    pub title: Option<String>,
    /// Series name
    pub name: Option<String>,
    /// Overview
    pub overview: String,
    /// Homepage
    pub homepage: String,
    /// Tagline
    pub tagline: Option<String>,
    /// Runtime
    pub runtime: Option<u32>,
}

/// One translation.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Translation {
    /// ISO 3166-1 country
    pub iso_3166_1: String,
    /// ISO 639-1 language
    pub iso_639_1: String,
    /// Native language name
    pub name: String,
    /// English name
    pub english_name: String,
    /// Translated fields
    pub data: TranslationData,
}

/// Translations for a movie or series.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct TranslationsResponse {
    /// Resource id
    pub id: Option<u64>,
    /// Translations
    pub translations: Vec<Translation>,
}

/// Rating state in [`AccountState`]: `false` when unrated, else `{"value": x}`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum Rated {
    /// Rated with this value
    Value {
        /// Rating value
        value: f64,
    },
    /// Rating flag; TMDB sends `false` when unrated
    Flag(bool),
}

impl Default for Rated {
    fn default() -> Self {
        Self::Flag(false)
    }
}

impl Rated {
    /// The rating value, if rated.
    #[must_use]
    pub const fn value(&self) -> Option<f64> {
        match self {
            Self::Value { value } => Some(*value),
            Self::Flag(_) => None,
        }
    }
}

/// Account state for one movie or series.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct AccountState {
    /// Resource id
    pub id: u64,
    /// In the user's favorites
    pub favorite: bool,
    /// Rating state
    pub rated: Rated,
    /// On the user's watchlist
    pub watchlist: bool,
}

/// Generic write acknowledgment.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct StatusResponse {
    /// Operation succeeded
    pub success: Option<bool>,
    /// TMDB status code
    pub status_code: Option<i64>,
    /// TMDB status message
    pub status_message: Option<String>,
}

/// Body for rating endpoints.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Validate, PartialEq)]
pub struct RatingRequest {
    /// Rating between 0.5 and 10.0
    #[validate(range(min = 0.5, max = 10.0))]
    pub value: f64,
}

/// Alternative title.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct AlternativeTitle {
    /// ISO 3166-1 country
    pub iso_3166_1: String,
    /// Title
    pub title: String,
    /// Title type
    #[serde(rename = "type")]
    pub kind: String,
}

/// Alternative titles for a movie or series.
///
/// Movies list them under `titles`, series under `results`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct AlternativeTitlesResponse {
    /// Resource id
    pub id: Option<u64>,
    /// Movie titles
    pub titles: Vec<AlternativeTitle>,
    /// Series titles
    pub results: Vec<AlternativeTitle>,
}

/// One recorded change.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ChangeItemDetail {
    /// Resource id
    pub id: String,
    /// `added`, `updated`, `deleted`, ...
    pub action: String,
    /// Time
    pub time: String,
    /// ISO 639-1 language
    pub iso_639_1: Option<String>,
    /// ISO 3166-1 country
    pub iso_3166_1: Option<String>,
    /// New value, shape depends on the key
    pub value: Option<serde_json::Value>,
    /// Previous value, shape depends on the key
    pub original_value: Option<serde_json::Value>,
}

/// Changes grouped by field.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ChangeGroup {
    /// Changed field
    pub key: String,
    /// Individual changes
    pub items: Vec<ChangeItemDetail>,
}

/// Change log of one movie or series.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ItemChangesResponse {
    /// Change groups
    pub changes: Vec<ChangeGroup>,
}

/// Streaming or purchase provider.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct WatchProvider {
    /// Provider id
    pub provider_id: u64,
    /// Provider name
    pub provider_name: String,
    /// Logo path
    pub logo_path: Option<String>,
    /// Display priority
    pub display_priority: u32,
}

/// Providers available in one country.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct CountryWatchProviders {
    /// JustWatch link
    pub link: String,
    /// Subscription providers
    pub flatrate: Vec<WatchProvider>,
    /// Rental providers
    pub rent: Vec<WatchProvider>,
    /// Purchase providers
    pub buy: Vec<WatchProvider>,
    /// Ad-supported providers
    pub ads: Vec<WatchProvider>,
    /// Free providers
    pub free: Vec<WatchProvider>,
}

/// Watch providers keyed by ISO 3166-1 country.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct WatchProviderResponse {
    /// Resource id
    pub id: Option<u64>,
    /// Providers per country
    pub results: BTreeMap<String, CountryWatchProviders>,
}
