//! # tmdb-core
//!
//! Core types and utilities for The Movie Database (TMDB) API clients.
//!
//! This crate provides the parameter encoder, the HTTP executor, the request
//! builder protocol and the models shared by the service crates.
//!
//! ## Modules
//!
//! - [`encode`] - Option records to query parameters
//! - [`query`] - Ordered query parameter map and query-string rendering
//! - [`request`] - Generic request builder and the [`QueryOptions`] trait
//! - [`options`] - Option records shared by many endpoints
//! - [`client`] - The executor ([`TmdbClient`])
//! - [`transport`] - Pluggable HTTP transport
//! - [`config`] - Client configuration
//! - [`error`] - Error taxonomy
//! - [`ids`] - Strongly-typed resource ids
//! - [`types`] - Shared response models

#![deny(missing_docs)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod client;
pub mod config;
pub mod encode;
pub mod error;
pub mod ids;
pub mod options;
pub mod query;
pub mod request;
pub mod transport;
pub mod types;

// Re-export commonly used types
pub use client::{TmdbClient, TmdbClientBuilder};
pub use config::{ApiVersion, TmdbConfig};
pub use encode::{encode, Piped, Required};
pub use error::{Error, Result};
pub use ids::{CompanyId, GenreId, KeywordId, MovieId, NetworkId, PersonId, SeriesId};
pub use options::{
    AppendToResponseRequest, ChangesRequest, CountryRequest, LanguageRequest, NoOptionsRequest,
    PagedRequest, SessionRequest,
};
pub use query::QueryParams;
pub use request::{QueryOptions, Request};
pub use transport::{HttpConfig, ReqwestTransport, Transport};

// Used by the service crates to name HTTP methods without a direct reqwest dependency.
pub use reqwest::Method;
