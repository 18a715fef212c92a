//! Discover endpoints for The Movie Database (TMDB).
//!
//! `/discover/movie` and `/discover/tv` share a large set of base filters and
//! each add their own. The shared setters live on the [`DiscoverBuilder`]
//! trait, so bring it into scope to use them:
//!
//! ```no_run
//! # async fn run(client: tmdb_core::TmdbClient) -> tmdb_core::Result<()> {
//! use tmdb_discover::{DiscoverBuilder, DiscoverService};
//!
//! let page = DiscoverService::new(client)
//!     .movies()
//!     .with_genres([28, 12])
//!     .sort_by("popularity.desc")
//!     .vote_count_gte(100)
//!     .send()
//!     .await?;
//! # let _ = page;
//! # Ok(())
//! # }
//! ```

#![deny(missing_docs)]

pub mod client;
pub mod options;

pub use client::{DiscoverBuilder, DiscoverMoviesRequest, DiscoverService, DiscoverTvRequest};
pub use options::{DiscoverBaseOptions, DiscoverOptions, MovieFilters, TvFilters};

/// Convenient result alias that reuses the shared TMDB error type.
pub type Result<T> = tmdb_core::Result<T>;
