//! Request builders for the `/movie` endpoints.

use crate::models::{DatedMoviePage, MovieDetails, MovieListSummary, ReleaseDatesResponse};
use tmdb_core::ids::MovieId;
use tmdb_core::options::{
    AppendToResponseRequest, ChangesRequest, CountryRequest, LanguageRequest, NoOptionsRequest,
    PagedRequest, SessionRequest,
};
use tmdb_core::types::{
    AccountState, AlternativeTitlesResponse, Credits, ExternalIds, ImageList,
    ItemChangesResponse, KeywordsResponse, MoviePage, Paginated, RatingRequest, Review,
    StatusResponse, TranslationsResponse, VideoList, WatchProviderResponse,
};
use tmdb_core::{Method, Request, TmdbClient};

/// Movie endpoints.
///
/// Every method returns a builder; nothing is sent until `send` is awaited.
#[derive(Debug, Clone)]
pub struct MoviesService {
    client: TmdbClient,
}

impl MoviesService {
    /// Create the service on a shared client.
    #[must_use]
    pub fn new(client: TmdbClient) -> Self {
        Self { client }
    }

    fn get<O: Default, T>(&self, path: String) -> Request<O, T> {
        Request::new(self.client.clone(), Method::GET, path)
    }

    /// `GET /movie/{id}`. Supports `append_to_response`.
    #[must_use]
    pub fn details(&self, id: MovieId) -> AppendToResponseRequest<MovieDetails> {
        self.get(format!("/movie/{id}"))
    }

    /// `GET /movie/{id}/account_states`.
    #[must_use]
    pub fn account_states(&self, id: MovieId) -> SessionRequest<AccountState> {
        self.get(format!("/movie/{id}/account_states"))
    }

    /// `GET /movie/{id}/alternative_titles`.
    #[must_use]
    pub fn alternative_titles(&self, id: MovieId) -> CountryRequest<AlternativeTitlesResponse> {
        self.get(format!("/movie/{id}/alternative_titles"))
    }

    /// `GET /movie/{id}/changes`.
    #[must_use]
    pub fn changes(&self, id: MovieId) -> ChangesRequest<ItemChangesResponse> {
        self.get(format!("/movie/{id}/changes"))
    }

    /// `GET /movie/{id}/credits`.
    #[must_use]
    pub fn credits(&self, id: MovieId) -> LanguageRequest<Credits> {
        self.get(format!("/movie/{id}/credits"))
    }

    /// `GET /movie/{id}/external_ids`.
    #[must_use]
    pub fn external_ids(&self, id: MovieId) -> NoOptionsRequest<ExternalIds> {
        self.get(format!("/movie/{id}/external_ids"))
    }

    /// `GET /movie/{id}/images`.
    #[must_use]
    pub fn images(&self, id: MovieId) -> LanguageRequest<ImageList> {
        self.get(format!("/movie/{id}/images"))
    }

    /// `GET /movie/{id}/keywords`.
    #[must_use]
    pub fn keywords(&self, id: MovieId) -> NoOptionsRequest<KeywordsResponse> {
        self.get(format!("/movie/{id}/keywords"))
    }

    /// `GET /movie/{id}/lists`: user lists containing the movie.
    #[must_use]
    pub fn lists(&self, id: MovieId) -> PagedRequest<Paginated<MovieListSummary>> {
        self.get(format!("/movie/{id}/lists"))
    }

    /// `GET /movie/{id}/recommendations`.
    #[must_use]
    pub fn recommendations(&self, id: MovieId) -> PagedRequest<MoviePage> {
        self.get(format!("/movie/{id}/recommendations"))
    }

    /// `GET /movie/{id}/release_dates`.
    #[must_use]
    pub fn release_dates(&self, id: MovieId) -> NoOptionsRequest<ReleaseDatesResponse> {
        self.get(format!("/movie/{id}/release_dates"))
    }

    /// `GET /movie/{id}/reviews`.
    #[must_use]
    pub fn reviews(&self, id: MovieId) -> PagedRequest<Paginated<Review>> {
        self.get(format!("/movie/{id}/reviews"))
    }

    /// `GET /movie/{id}/similar`.
    #[must_use]
    pub fn similar(&self, id: MovieId) -> PagedRequest<MoviePage> {
        self.get(format!("/movie/{id}/similar"))
    }

    /// `GET /movie/{id}/translations`.
    #[must_use]
    pub fn translations(&self, id: MovieId) -> NoOptionsRequest<TranslationsResponse> {
        self.get(format!("/movie/{id}/translations"))
    }

    /// `GET /movie/{id}/videos`.
    #[must_use]
    pub fn videos(&self, id: MovieId) -> LanguageRequest<VideoList> {
        self.get(format!("/movie/{id}/videos"))
    }

    /// `GET /movie/{id}/watch/providers`.
    #[must_use]
    pub fn watch_providers(&self, id: MovieId) -> NoOptionsRequest<WatchProviderResponse> {
        self.get(format!("/movie/{id}/watch/providers"))
    }

    /// `POST /movie/{id}/rating`.
    ///
    /// `value` must lie in `0.5..=10.0`; out-of-range values fail on `send`
    /// without a network call.
    #[must_use]
    pub fn rate(&self, id: MovieId, value: f64) -> SessionRequest<StatusResponse> {
        Request::new(self.client.clone(), Method::POST, format!("/movie/{id}/rating"))
            .with_validated_body(&RatingRequest { value })
    }

    /// `DELETE /movie/{id}/rating`.
    #[must_use]
    pub fn delete_rating(&self, id: MovieId) -> SessionRequest<StatusResponse> {
        Request::new(self.client.clone(), Method::DELETE, format!("/movie/{id}/rating"))
    }

    /// `GET /movie/latest`.
    #[must_use]
    pub fn latest(&self) -> NoOptionsRequest<MovieDetails> {
        self.get("/movie/latest".to_string())
    }

    /// `GET /movie/now_playing`.
    #[must_use]
    pub fn now_playing(&self) -> PagedRequest<DatedMoviePage> {
        self.get("/movie/now_playing".to_string())
    }

    /// `GET /movie/popular`.
    #[must_use]
    pub fn popular(&self) -> PagedRequest<MoviePage> {
        self.get("/movie/popular".to_string())
    }

    /// `GET /movie/top_rated`.
    #[must_use]
    pub fn top_rated(&self) -> PagedRequest<MoviePage> {
        self.get("/movie/top_rated".to_string())
    }

    /// `GET /movie/upcoming`.
    #[must_use]
    pub fn upcoming(&self) -> PagedRequest<DatedMoviePage> {
        self.get("/movie/upcoming".to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use tmdb_core::{Error, TmdbConfig};
    use wiremock::matchers::{body_json, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn service(server: &MockServer) -> MoviesService {
        let config = TmdbConfig::new("test-key")
            .unwrap()
            .with_base_url(server.uri());
        MoviesService::new(TmdbClient::from_config(&config).unwrap())
    }

    #[tokio::test]
    async fn test_details_with_append_to_response() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/movie/550"))
            .and(query_param("language", "en-US"))
            .and(query_param("append_to_response", "videos,images"))
            .and(query_param("api_key", "test-key"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "id": 550,
                "title": "Fight Club",
                "videos": {"results": []},
                "images": {"backdrops": [], "posters": []}
            })))
            .expect(1)
            .mount(&server)
            .await;

        let details = service(&server)
            .details(MovieId::new(550))
            .language("en-US")
            .append_to_response(["videos", "images"])
            .send()
            .await
            .unwrap();

        assert_eq!(details.title, "Fight Club");
        assert!(details.videos.is_some());
        assert!(details.images.is_some());
    }

    #[tokio::test]
    async fn test_popular_page() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/movie/popular"))
            .and(query_param("page", "2"))
            .and(query_param("region", "US"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "page": 2,
                "results": [{"id": 603, "title": "The Matrix"}],
                "total_pages": 10,
                "total_results": 200
            })))
            .mount(&server)
            .await;

        let page = service(&server)
            .popular()
            .page(2)
            .region("US")
            .send()
            .await
            .unwrap();

        assert_eq!(page.page, 2);
        assert_eq!(page.results[0].title, "The Matrix");
    }

    #[tokio::test]
    async fn test_now_playing_includes_dates() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/movie/now_playing"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "dates": {"maximum": "2024-03-10", "minimum": "2024-01-27"},
                "page": 1,
                "results": [],
                "total_pages": 0,
                "total_results": 0
            })))
            .mount(&server)
            .await;

        let page = service(&server).now_playing().send().await.unwrap();
        assert_eq!(page.dates.maximum, "2024-03-10");
    }

    #[tokio::test]
    async fn test_account_states_with_session() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/movie/550/account_states"))
            .and(query_param("session_id", "sess-1"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "id": 550,
                "favorite": true,
                "rated": {"value": 9.0},
                "watchlist": false
            })))
            .mount(&server)
            .await;

        let state = service(&server)
            .account_states(MovieId::new(550))
            .session_id("sess-1")
            .send()
            .await
            .unwrap();

        assert!(state.favorite);
        assert_eq!(state.rated.value(), Some(9.0));
    }

    #[tokio::test]
    async fn test_rate_posts_body_with_guest_session() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/movie/550/rating"))
            .and(query_param("guest_session_id", "guest-1"))
            .and(body_json(json!({"value": 8.5})))
            .respond_with(ResponseTemplate::new(201).set_body_json(json!({
                "success": true,
                "status_code": 1,
                "status_message": "Success."
            })))
            .expect(1)
            .mount(&server)
            .await;

        let status = service(&server)
            .rate(MovieId::new(550), 8.5)
            .for_guest()
            .guest_session_id("guest-1")
            .send()
            .await
            .unwrap();

        assert_eq!(status.success, Some(true));
        assert_eq!(status.status_code, Some(1));
    }

    #[tokio::test]
    async fn test_rate_rejects_out_of_range_value() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(201))
            .expect(0)
            .mount(&server)
            .await;

        let err = service(&server)
            .rate(MovieId::new(550), 11.0)
            .session_id("sess-1")
            .send()
            .await
            .unwrap_err();

        assert!(matches!(err, Error::ValidationError(_)));
    }

    #[tokio::test]
    async fn test_guest_rating_without_session_fails_early() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(201))
            .expect(0)
            .mount(&server)
            .await;

        let err = service(&server)
            .rate(MovieId::new(550), 7.0)
            .for_guest()
            .send()
            .await
            .unwrap_err();

        assert!(matches!(err, Error::ValidationError(_)));
    }

    #[tokio::test]
    async fn test_delete_rating() {
        let server = MockServer::start().await;
        Mock::given(method("DELETE"))
            .and(path("/movie/550/rating"))
            .and(query_param("session_id", "sess-1"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "success": true,
                "status_code": 13,
                "status_message": "The item/record was deleted successfully."
            })))
            .expect(1)
            .mount(&server)
            .await;

        let status = service(&server)
            .delete_rating(MovieId::new(550))
            .session_id("sess-1")
            .send()
            .await
            .unwrap();

        assert_eq!(status.status_code, Some(13));
    }

    #[tokio::test]
    async fn test_watch_providers_path() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/movie/550/watch/providers"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "id": 550,
                "results": {"DE": {"link": "https://example.test/de", "buy": [{"provider_id": 2}]}}
            })))
            .mount(&server)
            .await;

        let providers = service(&server)
            .watch_providers(MovieId::new(550))
            .send()
            .await
            .unwrap();

        assert_eq!(providers.results["DE"].buy[0].provider_id, 2);
    }

    #[tokio::test]
    async fn test_not_found_is_api_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/movie/0"))
            .respond_with(ResponseTemplate::new(404).set_body_json(json!({
                "status_code": 34,
                "status_message": "The resource you requested could not be found.",
                "success": false
            })))
            .mount(&server)
            .await;

        let err = service(&server)
            .details(MovieId::new(0))
            .send()
            .await
            .unwrap_err();

        assert_eq!(err.status(), Some(404));
        assert!(matches!(err, Error::ApiError { code: Some(34), .. }));
    }
}
