//! Typed async client for The Movie Database (TMDB).
//!
//! [`Tmdb`] owns one shared [`TmdbClient`] and hands out a service per API
//! resource. Every service method returns a request builder; options are set
//! with chained setters and nothing is sent until `send` is awaited.
//!
//! ```no_run
//! # async fn run() -> tmdb::Result<()> {
//! use tmdb::{DiscoverBuilder, MovieId, Tmdb};
//!
//! let tmdb = Tmdb::new("your-api-key")?;
//!
//! let movie = tmdb
//!     .movies()
//!     .details(MovieId::new(550))
//!     .append_to_response(["credits", "videos"])
//!     .send()
//!     .await?;
//!
//! let results = tmdb.search().movies("fight club").year(1999).send().await?;
//!
//! let dramas = tmdb.discover().movies().with_genres([18]).send().await?;
//! # let _ = (movie, results, dramas);
//! # Ok(())
//! # }
//! ```
//!
//! The per-resource crates are re-exported as modules for their models and
//! builders: [`movies`], [`tv`], [`search`], [`discover`] and [`auth`].

#![deny(missing_docs)]

mod client;

pub use client::Tmdb;

pub use tmdb_core::ids::*;
pub use tmdb_core::options::{
    AppendToResponseOptions, AppendToResponseRequest, ChangesOptions, ChangesRequest,
    CountryOptions, CountryRequest, LanguageOptions, LanguageRequest, NoOptions,
    NoOptionsRequest, PagedOptions, PagedRequest, SessionOptions, SessionRequest,
};
pub use tmdb_core::{
    encode, types, ApiVersion, Error, HttpConfig, Method, Piped, QueryOptions, QueryParams,
    Request, Required, ReqwestTransport, Result, TmdbClient, TmdbClientBuilder, TmdbConfig,
    Transport,
};
pub use tmdb_discover::DiscoverBuilder;

pub use tmdb_auth as auth;
pub use tmdb_discover as discover;
pub use tmdb_movies as movies;
pub use tmdb_search as search;
pub use tmdb_tv as tv;
