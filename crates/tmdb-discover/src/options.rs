//! Option records for the discover endpoints.
//!
//! The base record and the resource filters declare disjoint wire keys. They
//! are encoded separately and merged; a shared key is reported as an encoding
//! error rather than silently overwritten.

use chrono::NaiveDate;
use serde::Serialize;
use tmdb_core::{encode, Piped, QueryOptions, QueryParams, Result};

/// Filters shared by `/discover/movie` and `/discover/tv`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DiscoverBaseOptions {
    /// Response language
    pub language: Option<String>,
    /// Region
    pub region: Option<String>,
    /// Page number
    pub page: Option<u32>,
    /// Sort order (`popularity.desc`, `vote_average.asc`, ...)
    pub sort_by: Option<String>,
    /// Origin country
    pub with_origin_country: Option<String>,
    /// Original language
    pub with_original_language: Option<String>,
    /// Genre ids, comma-joined (AND)
    pub with_genres: Vec<String>,
    /// Excluded genre ids, comma-joined
    pub without_genres: Vec<String>,
    /// Keyword ids, pipe-joined (OR)
    pub with_keywords: Piped<Vec<String>>,
    /// Excluded keyword ids, pipe-joined
    pub without_keywords: Piped<Vec<String>>,
    /// Watch provider ids, pipe-joined; use with `watch_region`
    pub with_watch_providers: Piped<Vec<String>>,
    /// Company ids, pipe-joined
    pub with_companies: Piped<Vec<String>>,
    /// Excluded watch provider ids, pipe-joined
    pub without_watch_providers: Piped<Vec<String>>,
    /// Watch region
    pub watch_region: Option<String>,
    /// `flatrate`, `free`, `ads`, `rent`, `buy`; comma-joined
    pub with_watch_monetization_types: Vec<String>,
    /// Timezone
    pub timezone: Option<String>,
    /// Include adult titles
    pub include_adult: Option<bool>,
}

/// Filters specific to `/discover/movie`.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct MovieFilters {
    /// Any release year
    pub year: Option<u16>,
    /// Earliest release date
    #[serde(rename = "release_date.gte")]
    pub release_date_gte: Option<NaiveDate>,
    /// Latest release date
    #[serde(rename = "release_date.lte")]
    pub release_date_lte: Option<NaiveDate>,
    /// Primary release year
    pub primary_release_year: Option<u16>,
    /// Earliest primary release date
    #[serde(rename = "primary_release_date.gte")]
    pub primary_release_date_gte: Option<NaiveDate>,
    /// Latest primary release date
    #[serde(rename = "primary_release_date.lte")]
    pub primary_release_date_lte: Option<NaiveDate>,
    /// Certification (`R`, `PG-13`); use with `certification_country`
    pub certification: Option<String>,
    /// Minimum certification
    #[serde(rename = "certification.gte")]
    pub certification_gte: Option<String>,
    /// Maximum certification
    #[serde(rename = "certification.lte")]
    pub certification_lte: Option<String>,
    /// Country the certification filters apply to
    pub certification_country: Option<String>,
    /// Include titles with a video release
    pub include_video: Option<bool>,
    /// Excluded company ids, pipe-joined
    pub without_companies: Piped<Vec<String>>,
    /// Cast person ids, pipe-joined
    pub with_cast: Piped<Vec<String>>,
    /// Crew person ids, pipe-joined
    pub with_crew: Piped<Vec<String>>,
    /// Person ids in cast or crew, pipe-joined
    pub with_people: Piped<Vec<String>>,
    /// 1 premiere, 2 limited theatrical, 3 theatrical, 4 digital, 5 physical, 6 TV
    pub with_release_type: Option<u8>,
    /// Minimum average vote
    #[serde(rename = "vote_average.gte")]
    pub vote_average_gte: Option<f64>,
    /// Maximum average vote
    #[serde(rename = "vote_average.lte")]
    pub vote_average_lte: Option<f64>,
    /// Minimum vote count
    #[serde(rename = "vote_count.gte")]
    pub vote_count_gte: Option<u32>,
    /// Maximum vote count
    #[serde(rename = "vote_count.lte")]
    pub vote_count_lte: Option<u32>,
    /// Minimum runtime in minutes
    #[serde(rename = "with_runtime.gte")]
    pub with_runtime_gte: Option<u32>,
    /// Maximum runtime in minutes
    #[serde(rename = "with_runtime.lte")]
    pub with_runtime_lte: Option<u32>,
}

/// Filters specific to `/discover/tv`.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct TvFilters {
    /// First air date year
    pub first_air_date_year: Option<u16>,
    /// Earliest first air date
    #[serde(rename = "first_air_date.gte")]
    pub first_air_date_gte: Option<NaiveDate>,
    /// Latest first air date
    #[serde(rename = "first_air_date.lte")]
    pub first_air_date_lte: Option<NaiveDate>,
    /// Earliest episode air date
    #[serde(rename = "air_date.gte")]
    pub air_date_gte: Option<NaiveDate>,
    /// Latest episode air date
    #[serde(rename = "air_date.lte")]
    pub air_date_lte: Option<NaiveDate>,
    /// Include series without a first air date
    pub include_null_first_air_dates: Option<bool>,
    /// Network ids, pipe-joined
    pub with_networks: Piped<Vec<String>>,
    /// Status codes (0 returning, 1 planned, 2 in production, 3 ended, 4 canceled, 5 pilot)
    pub with_status: Option<String>,
    /// Type codes (0 documentary, 1 news, 2 miniseries, 3 reality, 4 scripted, 5 talk show, 6 video)
    pub with_type: Option<String>,
    /// Minimum average vote
    #[serde(rename = "vote_average.gte")]
    pub vote_average_gte: Option<f64>,
    /// Minimum vote count
    #[serde(rename = "vote_count.gte")]
    pub vote_count_gte: Option<u32>,
    /// Minimum runtime in minutes
    #[serde(rename = "with_runtime.gte")]
    pub with_runtime_gte: Option<u32>,
    /// Maximum runtime in minutes
    #[serde(rename = "with_runtime.lte")]
    pub with_runtime_lte: Option<u32>,
}

/// Base options plus resource filters.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct DiscoverOptions<F> {
    /// Shared filters
    pub base: DiscoverBaseOptions,
    /// Resource-specific filters
    pub filters: F,
}

impl<F: Serialize> QueryOptions for DiscoverOptions<F> {
    fn to_query_params(&self) -> Result<QueryParams> {
        let mut params = encode(&self.base)?;
        params.merge(encode(&self.filters)?)?;
        Ok(params)
    }
}
