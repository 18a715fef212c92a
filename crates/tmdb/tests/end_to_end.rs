use chrono::NaiveDate;
use serde_json::json;
use tmdb::{DiscoverBuilder, Error, MovieId, SeriesId, Tmdb, TmdbConfig};
use wiremock::matchers::{header, method, path, query_param, query_param_is_missing};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn tmdb_v3(server: &MockServer) -> Tmdb {
    let config = TmdbConfig::new("test-key")
        .unwrap()
        .with_base_url(server.uri());
    Tmdb::from_config(&config).unwrap()
}

#[tokio::test]
async fn test_services_share_one_client() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/movie/550"))
        .and(query_param("api_key", "test-key"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": 550,
            "title": "Fight Club"
        })))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/search/multi"))
        .and(query_param("query", "nolan"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "page": 1,
            "results": [
                {"id": 525, "media_type": "person", "name": "Christopher Nolan"},
                {"id": 27205, "media_type": "movie", "title": "Inception"}
            ],
            "total_pages": 1,
            "total_results": 2
        })))
        .expect(1)
        .mount(&server)
        .await;

    let tmdb = tmdb_v3(&server);

    let movie = tmdb.movies().details(MovieId::new(550)).send().await.unwrap();
    assert_eq!(movie.title, "Fight Club");

    let page = tmdb.search().multi("nolan").send().await.unwrap();
    assert_eq!(page.results.len(), 1);
    assert_eq!(page.results[0].id, 27205);
}

#[tokio::test]
async fn test_v4_uses_bearer_only() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/4/discover/tv"))
        .and(header("authorization", "Bearer v4-token"))
        .and(query_param_is_missing("api_key"))
        .and(query_param("first_air_date.gte", "2020-01-01"))
        .and(query_param("with_genres", "18,10765"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "page": 1,
            "results": [{"id": 1399, "name": "Game of Thrones"}],
            "total_pages": 1,
            "total_results": 1
        })))
        .expect(1)
        .mount(&server)
        .await;

    let config = TmdbConfig::new("unused-key")
        .unwrap()
        .with_base_url(format!("{}/4", server.uri()))
        .with_bearer_token("v4-token");
    let tmdb = Tmdb::from_config(&config).unwrap();

    let page = tmdb
        .discover()
        .tv()
        .with_genres([18, 10765])
        .first_air_date_gte(NaiveDate::from_ymd_opt(2020, 1, 1).unwrap())
        .send()
        .await
        .unwrap();

    assert_eq!(page.results[0].name, "Game of Thrones");
}

#[tokio::test]
async fn test_api_error_surfaces_from_any_service() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/tv/0"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({
            "success": false,
            "status_code": 34,
            "status_message": "The resource you requested could not be found."
        })))
        .mount(&server)
        .await;

    let err = tmdb_v3(&server)
        .tv()
        .details(SeriesId::new(0))
        .send()
        .await
        .unwrap_err();

    assert_eq!(err.status(), Some(404));
    assert!(matches!(err, Error::ApiError { code: Some(34), .. }));
}

#[tokio::test]
async fn test_guest_rating_without_ids_never_sends() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(201))
        .expect(0)
        .mount(&server)
        .await;

    let err = tmdb_v3(&server)
        .movies()
        .rate(MovieId::new(550), 7.0)
        .for_guest()
        .send()
        .await
        .unwrap_err();

    assert!(matches!(err, Error::ValidationError(_)));
}
