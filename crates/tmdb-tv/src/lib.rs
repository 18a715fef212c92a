//! TV series endpoints for The Movie Database (TMDB).
//!
//! This crate provides typed models and request builders for the `/tv`
//! resource.

#![deny(missing_docs)]

pub mod client;
pub mod models;

pub use client::TvService;
pub use models::{
    AggregateCastMember, AggregateCredits, AggregateCrewMember, ContentRating,
    ContentRatingsResponse, Creator, EpisodeGroup, EpisodeGroupsResponse, EpisodeSummary, Network,
    ScreenedTheatricallyResponse, ScreeningInfo, SeasonSummary, TvDetails,
};

/// Convenient result alias that reuses the shared TMDB error type.
pub type Result<T> = tmdb_core::Result<T>;
