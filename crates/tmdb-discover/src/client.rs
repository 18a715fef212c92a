//! Request builders for the `/discover` endpoints.

use crate::options::{DiscoverBaseOptions, DiscoverOptions, MovieFilters, TvFilters};
use crate::Result;
use chrono::NaiveDate;
use tmdb_core::types::{MoviePage, TvPage};
use tmdb_core::{Method, QueryParams, Request, TmdbClient};

fn extend<I, S>(list: &mut Vec<String>, values: I)
where
    I: IntoIterator<Item = S>,
    S: ToString,
{
    list.extend(values.into_iter().map(|value| value.to_string()));
}

/// Setters shared by every discover builder.
///
/// List setters accept anything displayable (`[28, 12]`, `["28"]`, typed ids)
/// and append on repeated calls.
pub trait DiscoverBuilder: Sized {
    /// The embedded base options.
    fn base_mut(&mut self) -> &mut DiscoverBaseOptions;

    /// Set the response language.
    #[must_use]
    fn language(mut self, language: impl Into<String>) -> Self {
        self.base_mut().language = Some(language.into());
        self
    }

    /// Set the region.
    #[must_use]
    fn region(mut self, region: impl Into<String>) -> Self {
        self.base_mut().region = Some(region.into());
        self
    }

    /// Set the page number.
    #[must_use]
    fn page(mut self, page: u32) -> Self {
        self.base_mut().page = Some(page);
        self
    }

    /// Set the sort order, e.g. `popularity.desc`.
    #[must_use]
    fn sort_by(mut self, sort_by: impl Into<String>) -> Self {
        self.base_mut().sort_by = Some(sort_by.into());
        self
    }

    /// Filter by origin country.
    #[must_use]
    fn with_origin_country(mut self, country: impl Into<String>) -> Self {
        self.base_mut().with_origin_country = Some(country.into());
        self
    }

    /// Filter by original language.
    #[must_use]
    fn with_original_language(mut self, language: impl Into<String>) -> Self {
        self.base_mut().with_original_language = Some(language.into());
        self
    }

    /// Require genres (comma-joined).
    #[must_use]
    fn with_genres<I, S>(mut self, genres: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: ToString,
    {
        extend(&mut self.base_mut().with_genres, genres);
        self
    }

    /// Exclude genres (comma-joined).
    #[must_use]
    fn without_genres<I, S>(mut self, genres: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: ToString,
    {
        extend(&mut self.base_mut().without_genres, genres);
        self
    }

    /// Match any of these keywords (pipe-joined).
    #[must_use]
    fn with_keywords<I, S>(mut self, keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: ToString,
    {
        extend(&mut self.base_mut().with_keywords.0, keywords);
        self
    }

    /// Exclude keywords (pipe-joined).
    #[must_use]
    fn without_keywords<I, S>(mut self, keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: ToString,
    {
        extend(&mut self.base_mut().without_keywords.0, keywords);
        self
    }

    /// Match any of these watch providers (pipe-joined). Use with
    /// [`DiscoverBuilder::watch_region`].
    #[must_use]
    fn with_watch_providers<I, S>(mut self, providers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: ToString,
    {
        extend(&mut self.base_mut().with_watch_providers.0, providers);
        self
    }

    /// Exclude watch providers (pipe-joined).
    #[must_use]
    fn without_watch_providers<I, S>(mut self, providers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: ToString,
    {
        extend(&mut self.base_mut().without_watch_providers.0, providers);
        self
    }

    /// Match any of these companies (pipe-joined).
    #[must_use]
    fn with_companies<I, S>(mut self, companies: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: ToString,
    {
        extend(&mut self.base_mut().with_companies.0, companies);
        self
    }

    /// Region for the watch provider filters.
    #[must_use]
    fn watch_region(mut self, region: impl Into<String>) -> Self {
        self.base_mut().watch_region = Some(region.into());
        self
    }

    /// Monetization types (`flatrate`, `free`, `ads`, `rent`, `buy`).
    #[must_use]
    fn with_watch_monetization_types<I, S>(mut self, types: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: ToString,
    {
        extend(&mut self.base_mut().with_watch_monetization_types, types);
        self
    }

    /// Set the timezone.
    #[must_use]
    fn timezone(mut self, timezone: impl Into<String>) -> Self {
        self.base_mut().timezone = Some(timezone.into());
        self
    }

    /// Include adult titles.
    #[must_use]
    fn include_adult(mut self, include: bool) -> Self {
        self.base_mut().include_adult = Some(include);
        self
    }
}

macro_rules! discover_request {
    ($(#[$meta:meta])* $name:ident, $filters:ty, $response:ty, $path:literal) => {
        $(#[$meta])*
        #[derive(Debug, Clone)]
        pub struct $name(Request<DiscoverOptions<$filters>, $response>);

        impl $name {
            fn new(client: TmdbClient) -> Self {
                Self(Request::new(client, Method::GET, $path))
            }

            fn filters_mut(&mut self) -> &mut $filters {
                &mut self.0.options_mut().filters
            }

            /// The accumulated options.
            #[must_use]
            pub fn options(&self) -> &DiscoverOptions<$filters> {
                self.0.options()
            }

            /// Encode base options and filters into one map.
            ///
            /// # Errors
            ///
            /// Returns an encoding error if the two parts share a key.
            pub fn query_params(&self) -> Result<QueryParams> {
                self.0.query_params()
            }

            /// Perform the request.
            ///
            /// # Errors
            ///
            /// Propagates encoding, transport, API and decoding errors.
            pub async fn send(&self) -> Result<$response> {
                self.0.send().await
            }
        }

        impl DiscoverBuilder for $name {
            fn base_mut(&mut self) -> &mut DiscoverBaseOptions {
                &mut self.0.options_mut().base
            }
        }
    };
}

discover_request!(
    /// Builder for `GET /discover/movie`.
    DiscoverMoviesRequest,
    MovieFilters,
    MoviePage,
    "/discover/movie"
);

discover_request!(
    /// Builder for `GET /discover/tv`.
    DiscoverTvRequest,
    TvFilters,
    TvPage,
    "/discover/tv"
);

impl DiscoverMoviesRequest {
    /// Filter by any release year.
    #[must_use]
    pub fn year(mut self, year: u16) -> Self {
        self.filters_mut().year = Some(year);
        self
    }

    /// Filter by primary release year.
    #[must_use]
    pub fn primary_release_year(mut self, year: u16) -> Self {
        self.filters_mut().primary_release_year = Some(year);
        self
    }

    /// Earliest release date.
    #[must_use]
    pub fn release_date_gte(mut self, date: NaiveDate) -> Self {
        self.filters_mut().release_date_gte = Some(date);
        self
    }

    /// Latest release date.
    #[must_use]
    pub fn release_date_lte(mut self, date: NaiveDate) -> Self {
        self.filters_mut().release_date_lte = Some(date);
        self
    }

    /// Earliest primary release date.
    #[must_use]
    pub fn primary_release_date_gte(mut self, date: NaiveDate) -> Self {
        self.filters_mut().primary_release_date_gte = Some(date);
        self
    }

    /// Latest primary release date.
    #[must_use]
    pub fn primary_release_date_lte(mut self, date: NaiveDate) -> Self {
        self.filters_mut().primary_release_date_lte = Some(date);
        self
    }

    /// Exact certification, e.g. `R`. Use with
    /// [`DiscoverMoviesRequest::certification_country`].
    #[must_use]
    pub fn certification(mut self, certification: impl Into<String>) -> Self {
        self.filters_mut().certification = Some(certification.into());
        self
    }

    /// Minimum certification.
    #[must_use]
    pub fn certification_gte(mut self, certification: impl Into<String>) -> Self {
        self.filters_mut().certification_gte = Some(certification.into());
        self
    }

    /// Maximum certification.
    #[must_use]
    pub fn certification_lte(mut self, certification: impl Into<String>) -> Self {
        self.filters_mut().certification_lte = Some(certification.into());
        self
    }

    /// Country of the certification filters.
    #[must_use]
    pub fn certification_country(mut self, country: impl Into<String>) -> Self {
        self.filters_mut().certification_country = Some(country.into());
        self
    }

    /// Include titles with a video release.
    #[must_use]
    pub fn include_video(mut self, include: bool) -> Self {
        self.filters_mut().include_video = Some(include);
        self
    }

    /// Exclude companies (pipe-joined).
    #[must_use]
    pub fn without_companies<I, S>(mut self, companies: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: ToString,
    {
        extend(&mut self.filters_mut().without_companies.0, companies);
        self
    }

    /// Require any of these cast members (pipe-joined).
    #[must_use]
    pub fn with_cast<I, S>(mut self, people: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: ToString,
    {
        extend(&mut self.filters_mut().with_cast.0, people);
        self
    }

    /// Require any of these crew members (pipe-joined).
    #[must_use]
    pub fn with_crew<I, S>(mut self, people: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: ToString,
    {
        extend(&mut self.filters_mut().with_crew.0, people);
        self
    }

    /// Require any of these people in cast or crew (pipe-joined).
    #[must_use]
    pub fn with_people<I, S>(mut self, people: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: ToString,
    {
        extend(&mut self.filters_mut().with_people.0, people);
        self
    }

    /// Filter by release type.
    #[must_use]
    pub fn with_release_type(mut self, release_type: u8) -> Self {
        self.filters_mut().with_release_type = Some(release_type);
        self
    }

    /// Minimum average vote.
    #[must_use]
    pub fn vote_average_gte(mut self, value: f64) -> Self {
        self.filters_mut().vote_average_gte = Some(value);
        self
    }

    /// Maximum average vote.
    #[must_use]
    pub fn vote_average_lte(mut self, value: f64) -> Self {
        self.filters_mut().vote_average_lte = Some(value);
        self
    }

    /// Minimum vote count.
    #[must_use]
    pub fn vote_count_gte(mut self, count: u32) -> Self {
        self.filters_mut().vote_count_gte = Some(count);
        self
    }

    /// Maximum vote count.
    #[must_use]
    pub fn vote_count_lte(mut self, count: u32) -> Self {
        self.filters_mut().vote_count_lte = Some(count);
        self
    }

    /// Minimum runtime in minutes.
    #[must_use]
    pub fn with_runtime_gte(mut self, minutes: u32) -> Self {
        self.filters_mut().with_runtime_gte = Some(minutes);
        self
    }

    /// Maximum runtime in minutes.
    #[must_use]
    pub fn with_runtime_lte(mut self, minutes: u32) -> Self {
        self.filters_mut().with_runtime_lte = Some(minutes);
        self
    }
}

impl DiscoverTvRequest {
    /// Filter by first air date year.
    #[must_use]
    pub fn first_air_date_year(mut self, year: u16) -> Self {
        self.filters_mut().first_air_date_year = Some(year);
        self
    }

    /// Earliest first air date.
    #[must_use]
    pub fn first_air_date_gte(mut self, date: NaiveDate) -> Self {
        self.filters_mut().first_air_date_gte = Some(date);
        self
    }

    /// Latest first air date.
    #[must_use]
    pub fn first_air_date_lte(mut self, date: NaiveDate) -> Self {
        self.filters_mut().first_air_date_lte = Some(date);
        self
    }

    /// Earliest episode air date.
    #[must_use]
    pub fn air_date_gte(mut self, date: NaiveDate) -> Self {
        self.filters_mut().air_date_gte = Some(date);
        self
    }

    /// Latest episode air date.
    #[must_use]
    pub fn air_date_lte(mut self, date: NaiveDate) -> Self {
        self.filters_mut().air_date_lte = Some(date);
        self
    }

    /// Include series without a first air date.
    #[must_use]
    pub fn include_null_first_air_dates(mut self, include: bool) -> Self {
        self.filters_mut().include_null_first_air_dates = Some(include);
        self
    }

    /// Match any of these networks (pipe-joined).
    #[must_use]
    pub fn with_networks<I, S>(mut self, networks: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: ToString,
    {
        extend(&mut self.filters_mut().with_networks.0, networks);
        self
    }

    /// Filter by status code.
    #[must_use]
    pub fn with_status(mut self, status: impl Into<String>) -> Self {
        self.filters_mut().with_status = Some(status.into());
        self
    }

    /// Filter by type code.
    #[must_use]
    pub fn with_type(mut self, series_type: impl Into<String>) -> Self {
        self.filters_mut().with_type = Some(series_type.into());
        self
    }

    /// Minimum average vote.
    #[must_use]
    pub fn vote_average_gte(mut self, value: f64) -> Self {
        self.filters_mut().vote_average_gte = Some(value);
        self
    }

    /// Minimum vote count.
    #[must_use]
    pub fn vote_count_gte(mut self, count: u32) -> Self {
        self.filters_mut().vote_count_gte = Some(count);
        self
    }

    /// Minimum runtime in minutes.
    #[must_use]
    pub fn with_runtime_gte(mut self, minutes: u32) -> Self {
        self.filters_mut().with_runtime_gte = Some(minutes);
        self
    }

    /// Maximum runtime in minutes.
    #[must_use]
    pub fn with_runtime_lte(mut self, minutes: u32) -> Self {
        self.filters_mut().with_runtime_lte = Some(minutes);
        self
    }
}

/// Discover endpoints.
#[derive(Debug, Clone)]
pub struct DiscoverService {
    client: TmdbClient,
}

impl DiscoverService {
    /// Create the service on a shared client.
    #[must_use]
    pub fn new(client: TmdbClient) -> Self {
        Self { client }
    }

    /// `GET /discover/movie`.
    #[must_use]
    pub fn movies(&self) -> DiscoverMoviesRequest {
        DiscoverMoviesRequest::new(self.client.clone())
    }

    /// `GET /discover/tv`.
    #[must_use]
    pub fn tv(&self) -> DiscoverTvRequest {
        DiscoverTvRequest::new(self.client.clone())
    }
}
