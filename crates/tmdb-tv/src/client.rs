//! Request builders for the `/tv` endpoints.

use crate::models::{
    AggregateCredits, ContentRatingsResponse, EpisodeGroupsResponse,
    ScreenedTheatricallyResponse, TvDetails,
};
use tmdb_core::ids::SeriesId;
use tmdb_core::options::{
    AppendToResponseRequest, ChangesRequest, LanguageRequest, NoOptionsRequest, PagedRequest,
    SessionRequest,
};
use tmdb_core::types::{
    AccountState, AlternativeTitlesResponse, Credits, ExternalIds, ImageList,
    ItemChangesResponse, KeywordsResponse, Paginated, RatingRequest, Review, StatusResponse,
    TranslationsResponse, TvPage, VideoList, WatchProviderResponse,
};
use tmdb_core::{Method, Request, TmdbClient};

/// TV series endpoints.
#[derive(Debug, Clone)]
pub struct TvService {
    client: TmdbClient,
}

impl TvService {
    /// Create the service on a shared client.
    #[must_use]
    pub fn new(client: TmdbClient) -> Self {
        Self { client }
    }

    fn get<O: Default, T>(&self, path: String) -> Request<O, T> {
        Request::new(self.client.clone(), Method::GET, path)
    }

    /// `GET /tv/{id}`. Supports `append_to_response`.
    #[must_use]
    pub fn details(&self, id: SeriesId) -> AppendToResponseRequest<TvDetails> {
        self.get(format!("/tv/{id}"))
    }

    /// `GET /tv/{id}/recommendations`.
    #[must_use]
    pub fn recommendations(&self, id: SeriesId) -> PagedRequest<TvPage> {
        self.get(format!("/tv/{id}/recommendations"))
    }

    /// `GET /tv/{id}/similar`.
    #[must_use]
    pub fn similar(&self, id: SeriesId) -> PagedRequest<TvPage> {
        self.get(format!("/tv/{id}/similar"))
    }

    /// `GET /tv/{id}/reviews`.
    #[must_use]
    pub fn reviews(&self, id: SeriesId) -> PagedRequest<Paginated<Review>> {
        self.get(format!("/tv/{id}/reviews"))
    }

    /// `GET /tv/popular`.
    #[must_use]
    pub fn popular(&self) -> PagedRequest<TvPage> {
        self.get("/tv/popular".to_string())
    }

    /// `GET /tv/on_the_air`: series with an episode in the next seven days.
    #[must_use]
    pub fn on_the_air(&self) -> PagedRequest<TvPage> {
        self.get("/tv/on_the_air".to_string())
    }

    /// `GET /tv/airing_today`. Pass `timezone` to shift the day boundary.
    #[must_use]
    pub fn airing_today(&self) -> PagedRequest<TvPage> {
        self.get("/tv/airing_today".to_string())
    }

    /// `GET /tv/top_rated`.
    #[must_use]
    pub fn top_rated(&self) -> PagedRequest<TvPage> {
        self.get("/tv/top_rated".to_string())
    }

    /// `GET /tv/{id}/account_states`.
    #[must_use]
    pub fn account_states(&self, id: SeriesId) -> SessionRequest<AccountState> {
        self.get(format!("/tv/{id}/account_states"))
    }

    /// `POST /tv/{id}/rating`. `value` must lie in `0.5..=10.0`.
    #[must_use]
    pub fn rate(&self, id: SeriesId, value: f64) -> SessionRequest<StatusResponse> {
        Request::new(self.client.clone(), Method::POST, format!("/tv/{id}/rating"))
            .with_validated_body(&RatingRequest { value })
    }

    /// `DELETE /tv/{id}/rating`.
    #[must_use]
    pub fn delete_rating(&self, id: SeriesId) -> SessionRequest<StatusResponse> {
        Request::new(self.client.clone(), Method::DELETE, format!("/tv/{id}/rating"))
    }

    /// `GET /tv/{id}/aggregate_credits`.
    #[must_use]
    pub fn aggregate_credits(&self, id: SeriesId) -> LanguageRequest<AggregateCredits> {
        self.get(format!("/tv/{id}/aggregate_credits"))
    }

    /// `GET /tv/{id}/alternative_titles`.
    #[must_use]
    pub fn alternative_titles(&self, id: SeriesId) -> LanguageRequest<AlternativeTitlesResponse> {
        self.get(format!("/tv/{id}/alternative_titles"))
    }

    /// `GET /tv/{id}/content_ratings`.
    #[must_use]
    pub fn content_ratings(&self, id: SeriesId) -> LanguageRequest<ContentRatingsResponse> {
        self.get(format!("/tv/{id}/content_ratings"))
    }

    /// `GET /tv/{id}/credits`: cast and crew of the latest season.
    #[must_use]
    pub fn credits(&self, id: SeriesId) -> LanguageRequest<Credits> {
        self.get(format!("/tv/{id}/credits"))
    }

    /// `GET /tv/{id}/episode_groups`.
    #[must_use]
    pub fn episode_groups(&self, id: SeriesId) -> LanguageRequest<EpisodeGroupsResponse> {
        self.get(format!("/tv/{id}/episode_groups"))
    }

    /// `GET /tv/{id}/external_ids`.
    #[must_use]
    pub fn external_ids(&self, id: SeriesId) -> LanguageRequest<ExternalIds> {
        self.get(format!("/tv/{id}/external_ids"))
    }

    /// `GET /tv/{id}/keywords`.
    #[must_use]
    pub fn keywords(&self, id: SeriesId) -> LanguageRequest<KeywordsResponse> {
        self.get(format!("/tv/{id}/keywords"))
    }

    /// `GET /tv/{id}/images`.
    #[must_use]
    pub fn images(&self, id: SeriesId) -> LanguageRequest<ImageList> {
        self.get(format!("/tv/{id}/images"))
    }

    /// `GET /tv/{id}/videos`.
    #[must_use]
    pub fn videos(&self, id: SeriesId) -> LanguageRequest<VideoList> {
        self.get(format!("/tv/{id}/videos"))
    }

    /// `GET /tv/{id}/screened_theatrically`.
    #[must_use]
    pub fn screened_theatrically(
        &self,
        id: SeriesId,
    ) -> NoOptionsRequest<ScreenedTheatricallyResponse> {
        self.get(format!("/tv/{id}/screened_theatrically"))
    }

    /// `GET /tv/{id}/translations`.
    #[must_use]
    pub fn translations(&self, id: SeriesId) -> NoOptionsRequest<TranslationsResponse> {
        self.get(format!("/tv/{id}/translations"))
    }

    /// `GET /tv/{id}/watch/providers`.
    #[must_use]
    pub fn watch_providers(&self, id: SeriesId) -> NoOptionsRequest<WatchProviderResponse> {
        self.get(format!("/tv/{id}/watch/providers"))
    }

    /// `GET /tv/{id}/changes`. Defaults to the last 24 hours; windows span at
    /// most 14 days.
    #[must_use]
    pub fn changes(&self, id: SeriesId) -> ChangesRequest<ItemChangesResponse> {
        self.get(format!("/tv/{id}/changes"))
    }
}
