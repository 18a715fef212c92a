//! Option records for the search endpoints.
//!
//! `query` is always sent, even when empty.

use serde::Serialize;
use tmdb_core::{QueryOptions, Required};

/// `/search/movie` options.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SearchMoviesOptions {
    /// Search text
    pub query: Required<String>,
    /// Include adult titles
    pub include_adult: Option<bool>,
    /// Response language
    pub language: Option<String>,
    /// Primary release year
    pub primary_release_year: Option<u16>,
    /// Page number
    pub page: Option<u32>,
    /// Region
    pub region: Option<String>,
    /// Any release year
    pub year: Option<u16>,
}

impl QueryOptions for SearchMoviesOptions {}

/// `/search/tv` options.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SearchTvOptions {
    /// Search text
    pub query: Required<String>,
    /// Include adult titles
    pub include_adult: Option<bool>,
    /// Response language
    pub language: Option<String>,
    /// First air date year
    pub first_air_date_year: Option<u16>,
    /// Page number
    pub page: Option<u32>,
    /// Any air date year
    pub year: Option<u16>,
}

impl QueryOptions for SearchTvOptions {}

/// `/search/multi` options.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SearchMultiOptions {
    /// Search text
    pub query: Required<String>,
    /// Include adult titles
    pub include_adult: Option<bool>,
    /// Response language
    pub language: Option<String>,
    /// Page number
    pub page: Option<u32>,
    /// Keep `person` results; sent as `include_people=true` and also
    /// applied to the decoded page
    pub include_people: bool,
}

impl QueryOptions for SearchMultiOptions {}

/// `/search/company` options.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SearchCompaniesOptions {
    /// Search text
    pub query: Required<String>,
    /// Page number
    pub page: Option<u32>,
}

impl QueryOptions for SearchCompaniesOptions {}

/// `/search/collection` options.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SearchCollectionsOptions {
    /// Search text
    pub query: Required<String>,
    /// Include adult collections
    pub include_adult: Option<bool>,
    /// Response language
    pub language: Option<String>,
    /// Page number
    pub page: Option<u32>,
    /// Region
    pub region: Option<String>,
}

impl QueryOptions for SearchCollectionsOptions {}

/// `/search/keyword` options.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SearchKeywordsOptions {
    /// Search text
    pub query: Required<String>,
    /// Page number
    pub page: Option<u32>,
}

impl QueryOptions for SearchKeywordsOptions {}

/// `/search/person` options.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SearchPeopleOptions {
    /// Search text
    pub query: Required<String>,
    /// Include adult profiles
    pub include_adult: Option<bool>,
    /// Response language
    pub language: Option<String>,
    /// Page number
    pub page: Option<u32>,
}

impl QueryOptions for SearchPeopleOptions {}
