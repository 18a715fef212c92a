//! Request executor for the TMDB API.
//!
//! [`TmdbClient`] owns the credentials, base URL and transport. It resolves the
//! URL, injects authentication, sends the request and decodes the response.
//! Cloning is cheap and clones share the same transport.

use crate::config::{ApiVersion, TmdbConfig};
use crate::error::{Error, Result};
use crate::query::QueryParams;
use crate::transport::{HttpConfig, HttpRequest, HttpResponse, ReqwestTransport, Transport};
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, AUTHORIZATION, CONTENT_TYPE, USER_AGENT};
use reqwest::Method;
use secrecy::{ExposeSecret, SecretString};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fmt;
use std::sync::Arc;
use tracing::debug;
use url::Url;

const APPLICATION_JSON: &str = "application/json";

/// Builder for [`TmdbClient`].
pub struct TmdbClientBuilder {
    config: TmdbConfig,
    http_config: HttpConfig,
    transport: Option<Arc<dyn Transport>>,
}

impl TmdbClientBuilder {
    /// Create a new builder from a [`TmdbConfig`].
    #[must_use]
    pub fn new(config: TmdbConfig) -> Self {
        Self {
            config,
            http_config: HttpConfig::new(),
            transport: None,
        }
    }

    /// Override the HTTP client configuration used for the default transport.
    ///
    /// The request timeout always comes from [`TmdbConfig`].
    #[must_use]
    pub fn with_http_config(mut self, http_config: HttpConfig) -> Self {
        self.http_config = http_config;
        self
    }

    /// Use a custom transport instead of the default `reqwest` one.
    #[must_use]
    pub fn with_transport(mut self, transport: Arc<dyn Transport>) -> Self {
        self.transport = Some(transport);
        self
    }

    /// Finalise the builder and create the [`TmdbClient`].
    ///
    /// # Errors
    ///
    /// Returns [`Error::ConfigError`] if the configuration is invalid or the
    /// HTTP client cannot be built.
    pub fn build(self) -> Result<TmdbClient> {
        self.config.validate_config()?;
        let base_url = self.config.parse_base_url()?;
        let api_version = ApiVersion::detect(&base_url);
        let timeout = self.config.timeout();

        let user_agent = HeaderValue::from_str(self.config.user_agent())
            .map_err(|err| Error::ConfigError(format!("Invalid user agent: {err}")))?;

        let bearer_token = self
            .config
            .bearer_token
            .filter(|token| !token.is_empty())
            .map(SecretString::from);
        if let Some(token) = &bearer_token {
            bearer_header(token)?;
        }

        let transport = match self.transport {
            Some(transport) => transport,
            None => {
                let http_config = self.http_config.with_timeout(timeout);
                Arc::new(ReqwestTransport::new(&http_config)?)
            }
        };

        debug!(base_url = %base_url, ?api_version, "Built TMDB client");

        Ok(TmdbClient {
            inner: Arc::new(ClientInner {
                transport,
                base_url,
                api_version,
                api_key: SecretString::from(self.config.api_key),
                bearer_token,
                user_agent,
            }),
        })
    }
}

struct ClientInner {
    transport: Arc<dyn Transport>,
    base_url: Url,
    api_version: ApiVersion,
    api_key: SecretString,
    bearer_token: Option<SecretString>,
    user_agent: HeaderValue,
}

/// Shared TMDB request executor.
#[derive(Clone)]
pub struct TmdbClient {
    inner: Arc<ClientInner>,
}

impl TmdbClient {
    /// Construct a v3 client with default settings.
    ///
    /// # Errors
    ///
    /// Returns an error if the key is empty or the HTTP client cannot be built.
    pub fn new(api_key: impl Into<String>) -> Result<Self> {
        Self::from_config(&TmdbConfig::new(api_key)?)
    }

    /// Construct a client directly from the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid.
    pub fn from_config(config: &TmdbConfig) -> Result<Self> {
        TmdbClientBuilder::new(config.clone()).build()
    }

    /// Start a builder pre-populated with the provided configuration.
    #[must_use]
    pub fn builder(config: TmdbConfig) -> TmdbClientBuilder {
        TmdbClientBuilder::new(config)
    }

    /// Return the base URL.
    #[must_use]
    pub fn base_url(&self) -> &Url {
        &self.inner.base_url
    }

    /// Authentication scheme in use.
    #[must_use]
    pub fn api_version(&self) -> ApiVersion {
        self.inner.api_version
    }

    /// Perform a request and decode the JSON response into `R`.
    ///
    /// # Errors
    ///
    /// - [`Error::Timeout`] / [`Error::TransportError`] if the exchange fails
    /// - [`Error::ApiError`] for non-2xx responses
    /// - [`Error::DecodingError`] if the body does not decode into `R`
    pub async fn execute<B, R>(
        &self,
        method: Method,
        path: &str,
        params: QueryParams,
        body: Option<&B>,
    ) -> Result<R>
    where
        B: Serialize + ?Sized,
        R: DeserializeOwned,
    {
        let response = self.dispatch(method, path, params, body).await?;

        serde_json::from_str(&response.body).map_err(|err| Error::DecodingError {
            type_name: std::any::type_name::<R>().to_string(),
            message: err.to_string(),
            body: response.body,
        })
    }

    /// Perform a request and discard the response body.
    ///
    /// # Errors
    ///
    /// Same as [`TmdbClient::execute`], minus decoding failures.
    pub async fn execute_unit<B>(
        &self,
        method: Method,
        path: &str,
        params: QueryParams,
        body: Option<&B>,
    ) -> Result<()>
    where
        B: Serialize + ?Sized,
    {
        self.dispatch(method, path, params, body).await.map(|_| ())
    }

    async fn dispatch<B>(
        &self,
        method: Method,
        path: &str,
        mut params: QueryParams,
        body: Option<&B>,
    ) -> Result<HttpResponse>
    where
        B: Serialize + ?Sized,
    {
        let inner = &self.inner;
        debug!(%method, path, params = ?params.redacted(), "Sending TMDB request");

        if inner.api_version == ApiVersion::V3 {
            params.set("api_key", inner.api_key.expose_secret());
        }
        let url = self.resolve_url(path, &params)?;

        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static(APPLICATION_JSON));
        headers.insert(USER_AGENT, inner.user_agent.clone());
        if let Some(token) = &inner.bearer_token {
            headers.insert(AUTHORIZATION, bearer_header(token)?);
        }

        let body = match body {
            Some(payload) => {
                headers.insert(CONTENT_TYPE, HeaderValue::from_static(APPLICATION_JSON));
                Some(serde_json::to_vec(payload)?)
            }
            None => None,
        };

        let response = inner
            .transport
            .send(HttpRequest {
                method: method.clone(),
                url,
                headers,
                body,
            })
            .await?;

        debug!(%method, path, status = response.status.as_u16(), "Received TMDB response");

        if !response.status.is_success() {
            return Err(Error::from_api_response(
                response.status.as_u16(),
                &response.body,
            ));
        }

        Ok(response)
    }

    fn resolve_url(&self, path: &str, params: &QueryParams) -> Result<Url> {
        let base = self.inner.base_url.as_str().trim_end_matches('/');
        let mut url = Url::parse(&format!("{base}{path}"))
            .map_err(|err| Error::InvalidEndpoint(format!("{path}: {err}")))?;

        if !params.is_empty() {
            url.set_query(Some(&params.to_query_string()));
        }

        Ok(url)
    }
}

impl fmt::Debug for TmdbClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TmdbClient")
            .field("base_url", &self.inner.base_url.as_str())
            .field("api_version", &self.inner.api_version)
            .field("bearer_token", &self.inner.bearer_token.is_some())
            .finish_non_exhaustive()
    }
}

fn bearer_header(token: &SecretString) -> Result<HeaderValue> {
    let mut value = HeaderValue::from_str(&format!("Bearer {}", token.expose_secret()))
        .map_err(|err| Error::ConfigError(format!("Invalid bearer token: {err}")))?;
    value.set_sensitive(true);
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DEFAULT_USER_AGENT;
    use crate::transport::MockTransport;
    use reqwest::StatusCode;
    use serde::Deserialize;
    use serde_json::json;
    use std::time::Duration;
    use wiremock::matchers::{body_json, header, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[derive(Debug, Deserialize, PartialEq)]
    struct Movie {
        id: u64,
        title: String,
    }

    fn test_config(server: &MockServer) -> TmdbConfig {
        TmdbConfig::new("test-key")
            .unwrap()
            .with_base_url(server.uri())
    }

    fn test_client(server: &MockServer) -> TmdbClient {
        TmdbClient::from_config(&test_config(server)).unwrap()
    }

    fn params(pairs: &[(&'static str, &str)]) -> QueryParams {
        let mut params = QueryParams::new();
        for (key, value) in pairs {
            params.set(*key, *value);
        }
        params
    }

    #[tokio::test]
    async fn v3_request_carries_api_key_and_standard_headers() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/movie/550"))
            .and(query_param("api_key", "test-key"))
            .and(query_param("language", "en-US"))
            .and(header("accept", "application/json"))
            .and(header("user-agent", DEFAULT_USER_AGENT))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(json!({"id": 550, "title": "Fight Club"})),
            )
            .expect(1)
            .mount(&server)
            .await;

        let client = test_client(&server);
        let movie: Movie = client
            .execute::<(), _>(
                Method::GET,
                "/movie/550",
                params(&[("language", "en-US")]),
                None,
            )
            .await
            .unwrap();

        assert_eq!(
            movie,
            Movie {
                id: 550,
                title: "Fight Club".to_string()
            }
        );

        let requests = server.received_requests().await.unwrap();
        assert!(requests[0].headers.get("authorization").is_none());
        assert!(requests[0].headers.get("content-type").is_none());
    }

    #[tokio::test]
    async fn bearer_header_is_sent_on_v3_when_configured() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/account"))
            .and(header("authorization", "Bearer read-token"))
            .and(query_param("api_key", "test-key"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
            .expect(1)
            .mount(&server)
            .await;

        let config = test_config(&server).with_bearer_token("read-token");
        let client = TmdbClient::from_config(&config).unwrap();
        let _: serde_json::Value = client
            .execute::<(), _>(Method::GET, "/account", QueryParams::new(), None)
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn v4_request_never_carries_api_key() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/4/list/1"))
            .and(header("authorization", "Bearer v4-token"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": 1})))
            .expect(1)
            .mount(&server)
            .await;

        let config = TmdbConfig::new("test-key")
            .unwrap()
            .with_base_url(format!("{}/4", server.uri()))
            .with_bearer_token("v4-token");
        let client = TmdbClient::from_config(&config).unwrap();
        assert_eq!(client.api_version(), ApiVersion::V4);

        let _: serde_json::Value = client
            .execute::<(), _>(Method::GET, "/list/1", params(&[("page", "1")]), None)
            .await
            .unwrap();

        let requests = server.received_requests().await.unwrap();
        assert!(requests[0].url.query_pairs().all(|(key, _)| key != "api_key"));
        assert_eq!(requests[0].url.query(), Some("page=1"));
    }

    #[tokio::test]
    async fn commas_stay_literal_in_the_query_string() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/movie/550"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
            .mount(&server)
            .await;

        let client = test_client(&server);
        let _: serde_json::Value = client
            .execute::<(), _>(
                Method::GET,
                "/movie/550",
                params(&[("append_to_response", "videos,images")]),
                None,
            )
            .await
            .unwrap();

        let requests = server.received_requests().await.unwrap();
        assert_eq!(
            requests[0].url.query(),
            Some("append_to_response=videos,images&api_key=test-key")
        );
    }

    #[tokio::test]
    async fn json_body_sets_content_type() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/movie/550/rating"))
            .and(header("content-type", "application/json"))
            .and(body_json(json!({"value": 8.5})))
            .respond_with(ResponseTemplate::new(201).set_body_json(json!({
                "status_code": 1,
                "status_message": "Success."
            })))
            .expect(1)
            .mount(&server)
            .await;

        let client = test_client(&server);
        let body = json!({"value": 8.5});
        let status: serde_json::Value = client
            .execute(Method::POST, "/movie/550/rating", QueryParams::new(), Some(&body))
            .await
            .unwrap();
        assert_eq!(status["status_code"], 1);
    }

    #[tokio::test]
    async fn structured_error_body_becomes_api_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/movie/550"))
            .respond_with(ResponseTemplate::new(401).set_body_json(json!({
                "status_code": 7,
                "status_message": "Invalid API key: You must be granted a valid key.",
                "success": false
            })))
            .mount(&server)
            .await;

        let client = test_client(&server);
        let err = client
            .execute::<(), Movie>(Method::GET, "/movie/550", QueryParams::new(), None)
            .await
            .unwrap_err();

        assert_eq!(
            err,
            Error::ApiError {
                status: 401,
                code: Some(7),
                message: "Invalid API key: You must be granted a valid key.".to_string(),
            }
        );
    }

    #[tokio::test]
    async fn unparseable_error_body_falls_back_to_raw_text() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/movie/550"))
            .respond_with(ResponseTemplate::new(503).set_body_string("upstream unavailable"))
            .mount(&server)
            .await;

        let client = test_client(&server);
        let err = client
            .execute::<(), Movie>(Method::GET, "/movie/550", QueryParams::new(), None)
            .await
            .unwrap_err();

        match err {
            Error::ApiError { status, message, .. } => {
                assert_eq!(status, 503);
                assert!(message.contains("503"));
                assert!(message.contains("upstream unavailable"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn decode_failure_reports_type_name_and_body() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/movie/550"))
            .respond_with(ResponseTemplate::new(200).set_body_string(r#"{"id":"not-a-number"}"#))
            .mount(&server)
            .await;

        let client = test_client(&server);
        let err = client
            .execute::<(), Movie>(Method::GET, "/movie/550", QueryParams::new(), None)
            .await
            .unwrap_err();

        match err {
            Error::DecodingError {
                type_name, body, ..
            } => {
                assert!(type_name.ends_with("Movie"), "type name was {type_name}");
                assert_eq!(body, r#"{"id":"not-a-number"}"#);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn execute_unit_ignores_empty_body() {
        let server = MockServer::start().await;
        Mock::given(method("DELETE"))
            .and(path("/movie/550/rating"))
            .respond_with(ResponseTemplate::new(204))
            .expect(1)
            .mount(&server)
            .await;

        let client = test_client(&server);
        client
            .execute_unit::<()>(Method::DELETE, "/movie/550/rating", QueryParams::new(), None)
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn slow_server_yields_timeout_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/movie/popular"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(json!({}))
                    .set_delay(Duration::from_secs(3)),
            )
            .mount(&server)
            .await;

        let config = test_config(&server).with_timeout(1);
        let client = TmdbClient::from_config(&config).unwrap();
        let err = client
            .execute::<(), serde_json::Value>(
                Method::GET,
                "/movie/popular",
                QueryParams::new(),
                None,
            )
            .await
            .unwrap_err();

        assert!(err.is_timeout(), "expected timeout, got {err:?}");
    }

    #[tokio::test]
    async fn base_path_is_preserved_when_joining() {
        let mut transport = MockTransport::new();
        transport
            .expect_send()
            .withf(|request| {
                request.url.as_str() == "https://api.themoviedb.org/3/movie/550?api_key=k"
            })
            .times(1)
            .returning(|_| {
                Ok(HttpResponse {
                    status: StatusCode::OK,
                    body: r#"{"id":550,"title":"Fight Club"}"#.to_string(),
                })
            });

        let client = TmdbClient::builder(TmdbConfig::new("k").unwrap())
            .with_transport(Arc::new(transport))
            .build()
            .unwrap();

        let movie: Movie = client
            .execute::<(), _>(Method::GET, "/movie/550", QueryParams::new(), None)
            .await
            .unwrap();
        assert_eq!(movie.id, 550);
    }

    #[test]
    fn invalid_config_is_rejected_at_build() {
        let config = TmdbConfig::new("k")
            .unwrap()
            .with_base_url("https://api.themoviedb.org/4");
        assert!(matches!(
            TmdbClient::from_config(&config),
            Err(Error::ConfigError(_))
        ));
    }

    #[test]
    fn debug_output_hides_credentials() {
        let config = TmdbConfig::new("super-secret")
            .unwrap()
            .with_bearer_token("also-secret");
        let client = TmdbClient::from_config(&config).unwrap();
        let debug = format!("{client:?}");

        assert!(!debug.contains("super-secret"));
        assert!(!debug.contains("also-secret"));
        assert!(debug.contains("api.themoviedb.org"));
    }
}
