//! Authentication endpoints for The Movie Database (TMDB).
//!
//! A user session is obtained in three calls: create a request token, have
//! the user approve it (or validate it with a login), then exchange it for a
//! session id. Guest sessions need a single call.

#![deny(missing_docs)]

pub mod client;
pub mod models;

pub use client::AuthService;
pub use models::{DeleteSessionResponse, GuestSession, RequestToken, Session};

/// Convenient result alias that reuses the shared TMDB error type.
pub type Result<T> = tmdb_core::Result<T>;
