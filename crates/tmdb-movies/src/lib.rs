//! Movie endpoints for The Movie Database (TMDB).
//!
//! This crate provides typed models and request builders for the `/movie`
//! resource: details, credits, media, account-scoped ratings and the curated
//! movie lists.

#![deny(missing_docs)]

pub mod client;
pub mod models;

pub use client::MoviesService;
pub use models::{
    BelongsToCollection, CountryReleaseDates, DateRange, DatedMoviePage, MovieDetails,
    MovieListSummary, ReleaseDate, ReleaseDatesResponse,
};

/// Convenient result alias that reuses the shared TMDB error type.
pub type Result<T> = tmdb_core::Result<T>;
