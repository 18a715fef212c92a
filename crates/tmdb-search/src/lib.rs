//! Search endpoints for The Movie Database (TMDB).
//!
//! Each search takes a required query string and returns a builder with the
//! endpoint's own optional filters.

#![deny(missing_docs)]

pub mod client;
pub mod models;
pub mod options;

pub use client::{
    SearchCollectionsRequest, SearchCompaniesRequest, SearchKeywordsRequest, SearchMoviesRequest,
    SearchMultiRequest, SearchPeopleRequest, SearchService, SearchTvRequest,
};
pub use models::{CollectionResult, CompanyResult, MultiResult, PersonResult};

/// Convenient result alias that reuses the shared TMDB error type.
pub type Result<T> = tmdb_core::Result<T>;
