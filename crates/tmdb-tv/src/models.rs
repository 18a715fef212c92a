//! Data models for the TV series endpoints.

use serde::{Deserialize, Serialize};
use tmdb_core::types::{
    AccountState, AlternativeTitlesResponse, Credits, ExternalIds, Genre, ImageList,
    ItemChangesResponse, KeywordsResponse, Paginated, ProductionCompany, ProductionCountry,
    Review, SpokenLanguage, TranslationsResponse, TvPage, VideoList, WatchProviderResponse,
};

/// Series creator.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Creator {
    /// Person id
    pub id: u64,
    /// Credit id
    pub credit_id: String,
    /// Name
    pub name: String,
    /// Gender code
    pub gender: u8,
    /// Profile image path
    pub profile_path: Option<String>,
}

/// TV network.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Network {
    /// Network id
    pub id: u64,
    /// Network name
    pub name: String,
    /// Logo image path
    pub logo_path: Option<String>,
    /// Origin country
    pub origin_country: String,
}

/// Last aired or next scheduled episode.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct EpisodeSummary {
    /// Episode id
    pub id: u64,
    /// Episode title
    pub name: String,
    /// Plot summary
    pub overview: String,
    /// Air date (`YYYY-MM-DD`)
    pub air_date: Option<String>,
    /// Episode number within the season
    pub episode_number: u32,
    /// Season number
    pub season_number: u32,
    /// Production code
    pub production_code: String,
    /// Runtime in minutes
    pub runtime: Option<u32>,
    /// Series id
    pub show_id: u64,
    /// Still image path
    pub still_path: Option<String>,
    /// Average vote, usually 0 before airing
    pub vote_average: f64,
    /// Number of votes
    pub vote_count: u64,
}

/// Season entry in [`TvDetails`].
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct SeasonSummary {
    /// Season id
    pub id: u64,
    /// Season name
    pub name: String,
    /// Plot summary
    pub overview: String,
    /// Premiere date
    pub air_date: Option<String>,
    /// Number of episodes
    pub episode_count: u32,
    /// Season number, 0 for specials
    pub season_number: u32,
    /// Poster image path
    pub poster_path: Option<String>,
    /// Average vote
    pub vote_average: f64,
}

/// Primary information about a TV series.
///
/// The trailing optional fields are only present when requested through
/// `append_to_response`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct TvDetails {
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
    /// Tagline
    pub tagline: Option<String>,
    /// `Returning Series`, `Ended`, `Canceled`, ...
    pub status: String,
    /// `Scripted`, `Reality`, `Documentary`, ...
    #[serde(rename = "type")]
    pub series_type: String,
    /// First air date
    pub first_air_date: String,
    /// Last air date
    pub last_air_date: Option<String>,
    /// Still producing episodes
    pub in_production: bool,
    /// Homepage URL
    pub homepage: Option<String>,
    /// Adult flag
    pub adult: bool,
    /// Typical episode runtimes in minutes
    pub episode_run_time: Vec<u32>,
    /// Languages (ISO 639-1)
    pub languages: Vec<String>,
    /// Origin countries (ISO 3166-1)
    pub origin_country: Vec<String>,
    /// Number of episodes
    pub number_of_episodes: u32,
    /// Number of seasons
    pub number_of_seasons: u32,
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
    /// Creators
    pub created_by: Vec<Creator>,
    /// Genres
    pub genres: Vec<Genre>,
    /// Networks
    pub networks: Vec<Network>,
    /// Production companies
    pub production_companies: Vec<ProductionCompany>,
    /// Production countries
    pub production_countries: Vec<ProductionCountry>,
    /// Spoken languages
    pub spoken_languages: Vec<SpokenLanguage>,
    /// Seasons
    pub seasons: Vec<SeasonSummary>,
    /// Most recently aired episode
    pub last_episode_to_air: Option<EpisodeSummary>,
    /// Next scheduled episode
    pub next_episode_to_air: Option<EpisodeSummary>,

    /// Appended `account_states`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub account_states: Option<AccountState>,
    /// Appended `aggregate_credits`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub aggregate_credits: Option<AggregateCredits>,
    /// Appended `alternative_titles`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alternative_titles: Option<AlternativeTitlesResponse>,
    /// Appended `changes`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub changes: Option<ItemChangesResponse>,
    /// Appended `content_ratings`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content_ratings: Option<ContentRatingsResponse>,
    /// Appended `credits`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub credits: Option<Credits>,
    /// Appended `episode_groups`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub episode_groups: Option<EpisodeGroupsResponse>,
    /// Appended `external_ids`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub external_ids: Option<ExternalIds>,
    /// Appended `images`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub images: Option<ImageList>,
    /// Appended `keywords`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub keywords: Option<KeywordsResponse>,
    /// Appended `recommendations`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recommendations: Option<TvPage>,
    /// Appended `reviews`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reviews: Option<Paginated<Review>>,
    /// Appended `screened_theatrically`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub screened_theatrically: Option<ScreenedTheatricallyResponse>,
    /// Appended `similar`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub similar: Option<TvPage>,
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

/// Character played across episodes.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Role {
    /// Credit id
    pub credit_id: String,
    /// Character
    pub character: String,
    /// Episodes with this role
    pub episode_count: u32,
}

/// Job held across episodes.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Job {
    /// Credit id
    pub credit_id: String,
    /// Job title
    pub job: String,
    /// Episodes with this job
    pub episode_count: u32,
}

/// Cast member aggregated over all seasons.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct AggregateCastMember {
    /// Person id
    pub id: u64,
    /// Name
    pub name: String,
    /// Original name
    pub original_name: String,
    /// Gender code
    pub gender: Option<u8>,
    /// Known-for department
    pub known_for_department: String,
    /// Popularity score
    pub popularity: f64,
    /// Profile image path
    pub profile_path: Option<String>,
    /// Roles
    pub roles: Vec<Role>,
    /// Episodes across all roles
    pub total_episode_count: u32,
    /// Billing order
    pub order: u32,
    /// Adult flag
    pub adult: bool,
}

/// Crew member aggregated over all seasons.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct AggregateCrewMember {
    /// Person id
    pub id: u64,
    /// Name
    pub name: String,
    /// Original name
    pub original_name: String,
    /// Gender code
    pub gender: Option<u8>,
    /// Known-for department
    pub known_for_department: String,
    /// Department
    pub department: String,
    /// Popularity score
    pub popularity: f64,
    /// Profile image path
    pub profile_path: Option<String>,
    /// Jobs
    pub jobs: Vec<Job>,
    /// Episodes across all jobs
    pub total_episode_count: u32,
    /// Adult flag
    pub adult: bool,
}

/// Cast and crew across all seasons.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct AggregateCredits {
    /// Series id
    pub id: Option<u64>,
    /// Cast
    pub cast: Vec<AggregateCastMember>,
    /// Crew
    pub crew: Vec<AggregateCrewMember>,
}

/// Content rating in one country.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct ContentRating {
    /// Descriptors
    pub descriptors: Vec<String>,
    /// ISO 3166-1 country
    pub iso_3166_1: String,
    /// Rating (`TV-MA`, ...)
    pub rating: String,
}

/// Content ratings by country.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct ContentRatingsResponse {
    /// Series id
    pub id: Option<u64>,
    /// Ratings
    pub results: Vec<ContentRating>,
}

/// Alternate episode ordering.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct EpisodeGroup {
    /// Group id
    pub id: String,
    /// Name
    pub name: String,
    /// Description
    pub description: String,
    /// Number of episodes
    pub episode_count: u32,
    /// Number of sub-groups
    pub group_count: u32,
    /// Network the ordering comes from
    pub network: Option<Network>,
    /// Group type (1 original air date, 2 absolute, 3 DVD, ...)
    #[serde(rename = "type")]
    pub group_type: u8,
}

/// Episode groups of a series.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct EpisodeGroupsResponse {
    /// Series id
    pub id: Option<u64>,
    /// Groups
    pub results: Vec<EpisodeGroup>,
}

/// Episode screened in theaters.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct ScreeningInfo {
    /// Episode id
    pub id: u64,
    /// Episode number
    pub episode_number: u32,
    /// Season number
    pub season_number: u32,
}

/// Episodes screened in theaters.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct ScreenedTheatricallyResponse {
    /// Series id
    pub id: Option<u64>,
    /// Screenings
    pub results: Vec<ScreeningInfo>,
}
