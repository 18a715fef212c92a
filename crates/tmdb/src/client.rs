use tmdb_auth::AuthService;
use tmdb_core::{Result, TmdbClient, TmdbConfig};
use tmdb_discover::DiscoverService;
use tmdb_movies::MoviesService;
use tmdb_search::SearchService;
use tmdb_tv::TvService;

/// Entry point owning one shared client and every resource service.
///
/// Cloning is cheap; all clones share the same connection pool.
#[derive(Debug, Clone)]
pub struct Tmdb {
    client: TmdbClient,
    movies: MoviesService,
    tv: TvService,
    search: SearchService,
    discover: DiscoverService,
    auth: AuthService,
}

impl Tmdb {
    /// Create a client for the v3 API with an API key.
    ///
    /// # Errors
    ///
    /// Returns a configuration error if the key is empty.
    pub fn new(api_key: impl Into<String>) -> Result<Self> {
        TmdbClient::new(api_key).map(Self::from_client)
    }

    /// Create a client from a full configuration.
    ///
    /// # Errors
    ///
    /// Returns a configuration error if the configuration is invalid.
    pub fn from_config(config: &TmdbConfig) -> Result<Self> {
        TmdbClient::from_config(config).map(Self::from_client)
    }

    /// Wrap an existing client, e.g. one built with a custom transport.
    #[must_use]
    pub fn from_client(client: TmdbClient) -> Self {
        Self {
            movies: MoviesService::new(client.clone()),
            tv: TvService::new(client.clone()),
            search: SearchService::new(client.clone()),
            discover: DiscoverService::new(client.clone()),
            auth: AuthService::new(client.clone()),
            client,
        }
    }

    /// The shared client.
    #[must_use]
    pub fn client(&self) -> &TmdbClient {
        &self.client
    }

    /// `/movie` endpoints.
    #[must_use]
    pub fn movies(&self) -> &MoviesService {
        &self.movies
    }

    /// `/tv` endpoints.
    #[must_use]
    pub fn tv(&self) -> &TvService {
        &self.tv
    }

    /// `/search` endpoints.
    #[must_use]
    pub fn search(&self) -> &SearchService {
        &self.search
    }

    /// `/discover` endpoints.
    #[must_use]
    pub fn discover(&self) -> &DiscoverService {
        &self.discover
    }

    /// `/authentication` endpoints.
    #[must_use]
    pub fn auth(&self) -> &AuthService {
        &self.auth
    }
}
