//! Request builders for the `/search` endpoints.

use crate::models::{CollectionResult, CompanyResult, MultiResult, PersonResult};
use crate::options::{
    SearchCollectionsOptions, SearchCompaniesOptions, SearchKeywordsOptions, SearchMoviesOptions,
    SearchMultiOptions, SearchPeopleOptions, SearchTvOptions,
};
use crate::Result;
use tmdb_core::types::{Keyword, MoviePage, Paginated, TvPage};
use tmdb_core::{Method, QueryParams, Request, Required, TmdbClient};
use tracing::debug;

/// Declares a search builder wrapping a [`Request`] by value.
macro_rules! search_request {
    ($(#[$meta:meta])* $name:ident, $options:ty, $response:ty, $path:literal) => {
        $(#[$meta])*
        #[derive(Debug, Clone)]
        pub struct $name(Request<$options, $response>);

        impl $name {
            fn new(client: TmdbClient, query: String) -> Self {
                let mut options = <$options>::default();
                options.query = Required(query);
                Self(Request::with_options(client, Method::GET, $path, options))
            }

            /// The accumulated option record.
            #[must_use]
            pub fn options(&self) -> &$options {
                self.0.options()
            }

            /// Validate and encode the options.
            ///
            /// # Errors
            ///
            /// Returns an encoding error if the options cannot be encoded.
            pub fn query_params(&self) -> Result<QueryParams> {
                self.0.query_params()
            }
        }
    };
}

/// Generates fluent setters that fill `Option` fields of the wrapped record.
macro_rules! option_setters {
    ($name:ident { $($(#[$doc:meta])* $field:ident: $ty:ty),* $(,)? }) => {
        impl $name {
            $(
                $(#[$doc])*
                #[must_use]
                pub fn $field(mut self, value: $ty) -> Self {
                    self.0.options_mut().$field = Some(value.into());
                    self
                }
            )*
        }
    };
}

/// Generates the plain terminal call.
macro_rules! plain_send {
    ($name:ident, $response:ty) => {
        impl $name {
            /// Perform the search.
            ///
            /// # Errors
            ///
            /// Propagates encoding, transport, API and decoding errors.
            pub async fn send(&self) -> Result<$response> {
                self.0.send().await
            }
        }
    };
}

search_request!(
    /// Builder for `GET /search/movie`.
    SearchMoviesRequest,
    SearchMoviesOptions,
    MoviePage,
    "/search/movie"
);
option_setters!(SearchMoviesRequest {
    /// Include adult titles.
    include_adult: bool,
    /// Set the response language.
    language: impl Into<String>,
    /// Filter by primary release year.
    primary_release_year: u16,
    /// Set the page number.
    page: u32,
    /// Set the region.
    region: impl Into<String>,
    /// Filter by any release year.
    year: u16,
});
plain_send!(SearchMoviesRequest, MoviePage);

search_request!(
    /// Builder for `GET /search/tv`.
    SearchTvRequest,
    SearchTvOptions,
    TvPage,
    "/search/tv"
);
option_setters!(SearchTvRequest {
    /// Include adult titles.
    include_adult: bool,
    /// Set the response language.
    language: impl Into<String>,
    /// Filter by first air date year.
    first_air_date_year: u16,
    /// Set the page number.
    page: u32,
    /// Filter by any air date year.
    year: u16,
});
plain_send!(SearchTvRequest, TvPage);

search_request!(
    /// Builder for `GET /search/multi`.
    ///
    /// Person results are removed from the response unless
    /// [`SearchMultiRequest::include_people`] is set.
    SearchMultiRequest,
    SearchMultiOptions,
    Paginated<MultiResult>,
    "/search/multi"
);
option_setters!(SearchMultiRequest {
    /// Include adult titles.
    include_adult: bool,
    /// Set the response language.
    language: impl Into<String>,
    /// Set the page number.
    page: u32,
});

impl SearchMultiRequest {
    /// Keep `person` results in the response.
    #[must_use]
    pub fn include_people(mut self, include: bool) -> Self {
        self.0.options_mut().include_people = include;
        self
    }

    /// Perform the search, dropping person results unless requested.
    ///
    /// # Errors
    ///
    /// Propagates encoding, transport, API and decoding errors.
    pub async fn send(&self) -> Result<Paginated<MultiResult>> {
        let mut page = self.0.send().await?;

        if !self.0.options().include_people {
            let before = page.results.len();
            page.results.retain(|result| !result.is_person());
            debug!(
                removed = before - page.results.len(),
                "Removed person results from multi search"
            );
        }

        Ok(page)
    }
}

search_request!(
    /// Builder for `GET /search/company`.
    SearchCompaniesRequest,
    SearchCompaniesOptions,
    Paginated<CompanyResult>,
    "/search/company"
);
option_setters!(SearchCompaniesRequest {
    /// Set the page number.
    page: u32,
});
plain_send!(SearchCompaniesRequest, Paginated<CompanyResult>);

search_request!(
    /// Builder for `GET /search/collection`.
    SearchCollectionsRequest,
    SearchCollectionsOptions,
    Paginated<CollectionResult>,
    "/search/collection"
);
option_setters!(SearchCollectionsRequest {
    /// Include adult collections.
    include_adult: bool,
    /// Set the response language.
    language: impl Into<String>,
    /// Set the page number.
    page: u32,
    /// Set the region.
    region: impl Into<String>,
});
plain_send!(SearchCollectionsRequest, Paginated<CollectionResult>);

search_request!(
    /// Builder for `GET /search/keyword`.
    SearchKeywordsRequest,
    SearchKeywordsOptions,
    Paginated<Keyword>,
    "/search/keyword"
);
option_setters!(SearchKeywordsRequest {
    /// Set the page number.
    page: u32,
});
plain_send!(SearchKeywordsRequest, Paginated<Keyword>);

search_request!(
    /// Builder for `GET /search/person`.
    SearchPeopleRequest,
    SearchPeopleOptions,
    Paginated<PersonResult>,
    "/search/person"
);
option_setters!(SearchPeopleRequest {
    /// Include adult profiles.
    include_adult: bool,
    /// Set the response language.
    language: impl Into<String>,
    /// Set the page number.
    page: u32,
});
plain_send!(SearchPeopleRequest, Paginated<PersonResult>);

/// Search endpoints.
#[derive(Debug, Clone)]
pub struct SearchService {
    client: TmdbClient,
}

impl SearchService {
    /// Create the service on a shared client.
    #[must_use]
    pub fn new(client: TmdbClient) -> Self {
        Self { client }
    }

    /// Search movies by title.
    #[must_use]
    pub fn movies(&self, query: impl Into<String>) -> SearchMoviesRequest {
        SearchMoviesRequest::new(self.client.clone(), query.into())
    }

    /// Search TV series by name.
    #[must_use]
    pub fn tv(&self, query: impl Into<String>) -> SearchTvRequest {
        SearchTvRequest::new(self.client.clone(), query.into())
    }

    /// Search movies, series and people at once.
    #[must_use]
    pub fn multi(&self, query: impl Into<String>) -> SearchMultiRequest {
        SearchMultiRequest::new(self.client.clone(), query.into())
    }

    /// Search companies.
    #[must_use]
    pub fn companies(&self, query: impl Into<String>) -> SearchCompaniesRequest {
        SearchCompaniesRequest::new(self.client.clone(), query.into())
    }

    /// Search collections.
    #[must_use]
    pub fn collections(&self, query: impl Into<String>) -> SearchCollectionsRequest {
        SearchCollectionsRequest::new(self.client.clone(), query.into())
    }

    /// Search keywords.
    #[must_use]
    pub fn keywords(&self, query: impl Into<String>) -> SearchKeywordsRequest {
        SearchKeywordsRequest::new(self.client.clone(), query.into())
    }

    /// Search people.
    #[must_use]
    pub fn people(&self, query: impl Into<String>) -> SearchPeopleRequest {
        SearchPeopleRequest::new(self.client.clone(), query.into())
    }
}
