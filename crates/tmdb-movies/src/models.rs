//! Data models for the movie endpoints.

use serde::{Deserialize, Serialize};
use tmdb_core::types::{
    AccountState, AlternativeTitlesResponse, Credits, ExternalIds, Genre, ImageList,
    ItemChangesResponse, KeywordsResponse, MovieListResult, MoviePage, Paginated,
    ProductionCompany, ProductionCountry, Review, SpokenLanguage, TranslationsResponse, VideoList,
    WatchProviderResponse,
};

/// Collection a movie belongs to.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct BelongsToCollection {
    /// Collection id
    pub id: u64,
    /// Collection name
    pub name: String,
    /// Poster image path
    pub poster_path: Option<String>,
    /// Backdrop image path
    pub backdrop_path: Option<String>,
}

/// Primary information about a movie.
///
/// The trailing optional fields are only present when requested through
/// `append_to_response`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct MovieDetails {
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
    /// Tagline
    pub tagline: Option<String>,
    /// `Rumored`, `Planned`, `In Production`, `Post Production`, `Released` or `Canceled`
    pub status: String,
    /// Release date (`YYYY-MM-DD`)
    pub release_date: String,
    /// Runtime in minutes
    pub runtime: Option<u32>,
    /// Budget in USD
    pub budget: u64,
    /// Revenue in USD
    pub revenue: u64,
    /// Homepage URL
    pub homepage: Option<String>,
    /// IMDb id (`tt0137523`)
    pub imdb_id: Option<String>,
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
    /// Poster image path
    pub poster_path: Option<String>,
    /// Backdrop image path
    pub backdrop_path: Option<String>,
    /// Collection the movie belongs to
    pub belongs_to_collection: Option<BelongsToCollection>,
    /// Genres
    pub genres: Vec<Genre>,
    /// Origin countries
    pub origin_country: Vec<String>,
    /// Production companies
    pub production_companies: Vec<ProductionCompany>,
    /// Production countries
    pub production_countries: Vec<ProductionCountry>,
    /// Spoken languages
    pub spoken_languages: Vec<SpokenLanguage>,

    /// Appended `account_states`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub account_states: Option<AccountState>,
    /// Appended `alternative_titles`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alternative_titles: Option<AlternativeTitlesResponse>,
    /// Appended `changes`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub changes: Option<ItemChangesResponse>,
    /// Appended `credits`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub credits: Option<Credits>,
    /// Appended `external_ids`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub external_ids: Option<ExternalIds>,
    /// Appended `images`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub images: Option<ImageList>,
    /// Appended `keywords`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub keywords: Option<KeywordsResponse>,
    /// Appended `lists`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lists: Option<Paginated<MovieListSummary>>,
    /// Appended `recommendations`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recommendations: Option<MoviePage>,
    /// Appended `release_dates`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub release_dates: Option<ReleaseDatesResponse>,
    /// Appended `reviews`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reviews: Option<Paginated<Review>>,
    /// Appended `similar`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub similar: Option<MoviePage>,
    /// Appended `translations`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub translations: Option<TranslationsResponse>,
    /// Appended `videos`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub videos: Option<VideoList>,
    /// Appended `watch/providers`
    #[serde(rename = "watch/providers", skip_serializing_if = "Option::is_none")]
    pub watch_providers: Option<WatchProviderResponse>,
}

/// User list that contains a movie.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct MovieListSummary {
    /// List id
    pub id: u64,
    /// List name
    pub name: String,
    /// Description
    pub description: String,
    /// Times favorited
    pub favorite_count: u64,
    /// Number of items
    pub item_count: u64,
    /// List language
    pub iso_639_1: String,
    /// `movie` or `tv`
    pub list_type: String,
    /// Poster image path
    pub poster_path: Option<String>,
}

/// One dated release.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct ReleaseDate {
    /// Rating certification
    pub certification: String,
    /// Descriptors such as `Premiere`
    pub descriptors: Vec<String>,
    /// Language
    pub iso_639_1: Option<String>,
    /// Free-form note
    pub note: Option<String>,
    /// Release timestamp
    pub release_date: String,
    /// 1 premiere, 2 limited theatrical, 3 theatrical, 4 digital, 5 physical, 6 TV
    #[serde(rename = "type")]
    pub release_type: u8,
}

/// Releases in one country.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct CountryReleaseDates {
    /// ISO 3166-1 country
    pub iso_3166_1: String,
    /// Releases
    pub release_dates: Vec<ReleaseDate>,
}

/// Release dates grouped by country.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct ReleaseDatesResponse {
    /// Movie id
    pub id: Option<u64>,
    /// Per-country releases
    pub results: Vec<CountryReleaseDates>,
}

/// Date window of the now-playing and upcoming lists.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct DateRange {
    /// Latest date (`YYYY-MM-DD`)
    pub maximum: String,
    /// Earliest date (`YYYY-MM-DD`)
    pub minimum: String,
}

/// A page of movies with the date window it covers.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct DatedMoviePage {
    /// Date window
    #[serde(default)]
    pub dates: DateRange,
    /// Page of movies
    #[serde(flatten)]
    pub page: Paginated<MovieListResult>,
}
