//! Option records shared by many endpoints, and their fluent setters.
//!
//! Each record has a matching request alias (`PagedRequest<T>` and so on) whose
//! setters are defined here, so every service crate gets them for free.

use crate::error::{Error, Result};
use crate::request::{QueryOptions, Request};
use chrono::NaiveDate;
use serde::Serialize;

/// Endpoints that accept no query options.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct NoOptions {}

impl QueryOptions for NoOptions {}

/// Builder for endpoints without query options.
pub type NoOptionsRequest<T> = Request<NoOptions, T>;

/// Options for paginated list endpoints.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PagedOptions {
    /// ISO 639-1 language, optionally with region (`en-US`)
    pub language: Option<String>,
    /// 1-based page number
    pub page: Option<u32>,
    /// ISO 3166-1 region
    pub region: Option<String>,
    /// IANA timezone, used by the TV airing lists
    pub timezone: Option<String>,
}

impl QueryOptions for PagedOptions {}

/// Builder for paginated list endpoints.
pub type PagedRequest<T> = Request<PagedOptions, T>;

impl<T> Request<PagedOptions, T> {
    /// Set the response language.
    #[must_use]
    pub fn language(mut self, language: impl Into<String>) -> Self {
        self.options_mut().language = Some(language.into());
        self
    }

    /// Set the page number.
    #[must_use]
    pub fn page(mut self, page: u32) -> Self {
        self.options_mut().page = Some(page);
        self
    }

    /// Set the region.
    #[must_use]
    pub fn region(mut self, region: impl Into<String>) -> Self {
        self.options_mut().region = Some(region.into());
        self
    }

    /// Set the timezone.
    #[must_use]
    pub fn timezone(mut self, timezone: impl Into<String>) -> Self {
        self.options_mut().timezone = Some(timezone.into());
        self
    }
}

/// Options for image, video and credit endpoints.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct LanguageOptions {
    /// Response language
    pub language: Option<String>,
    /// Extra image languages, comma-joined (`en,null`)
    pub include_image_language: Vec<String>,
}

impl QueryOptions for LanguageOptions {}

/// Builder for endpoints taking a language and image languages.
pub type LanguageRequest<T> = Request<LanguageOptions, T>;

impl<T> Request<LanguageOptions, T> {
    /// Set the response language.
    #[must_use]
    pub fn language(mut self, language: impl Into<String>) -> Self {
        self.options_mut().language = Some(language.into());
        self
    }

    /// Append image languages. Repeated calls accumulate.
    #[must_use]
    pub fn include_image_language<I, S>(mut self, languages: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.options_mut()
            .include_image_language
            .extend(languages.into_iter().map(Into::into));
        self
    }
}

/// Options for details endpoints supporting `append_to_response`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct AppendToResponseOptions {
    /// Response language
    pub language: Option<String>,
    /// Sub-resources to embed in the response (`videos,images`)
    pub append_to_response: Vec<String>,
}

impl QueryOptions for AppendToResponseOptions {}

/// Builder for details endpoints.
pub type AppendToResponseRequest<T> = Request<AppendToResponseOptions, T>;

impl<T> Request<AppendToResponseOptions, T> {
    /// Set the response language.
    #[must_use]
    pub fn language(mut self, language: impl Into<String>) -> Self {
        self.options_mut().language = Some(language.into());
        self
    }

    /// Append sub-resources to embed. Repeated calls accumulate.
    #[must_use]
    pub fn append_to_response<I, S>(mut self, resources: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.options_mut()
            .append_to_response
            .extend(resources.into_iter().map(Into::into));
        self
    }
}

/// Options for change-log endpoints.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ChangesOptions {
    /// First day of the window
    pub start_date: Option<NaiveDate>,
    /// Last day of the window
    pub end_date: Option<NaiveDate>,
    /// Page number
    pub page: Option<u32>,
}

impl QueryOptions for ChangesOptions {}

/// Builder for change-log endpoints.
pub type ChangesRequest<T> = Request<ChangesOptions, T>;

impl<T> Request<ChangesOptions, T> {
    /// Set the start of the window.
    #[must_use]
    pub fn start_date(mut self, date: NaiveDate) -> Self {
        self.options_mut().start_date = Some(date);
        self
    }

    /// Set the end of the window.
    #[must_use]
    pub fn end_date(mut self, date: NaiveDate) -> Self {
        self.options_mut().end_date = Some(date);
        self
    }

    /// Set the page number.
    #[must_use]
    pub fn page(mut self, page: u32) -> Self {
        self.options_mut().page = Some(page);
        self
    }
}

/// Options for account-scoped endpoints (account states, ratings).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SessionOptions {
    /// User session id
    pub session_id: Option<String>,
    /// Guest session id
    pub guest_session_id: Option<String>,
    /// Request is made on behalf of a guest; never sent
    #[serde(skip)]
    pub for_guest: bool,
}

impl SessionOptions {
    fn has_identity(&self) -> bool {
        let set = |id: &Option<String>| id.as_deref().is_some_and(|id| !id.is_empty());
        set(&self.session_id) || set(&self.guest_session_id)
    }
}

impl QueryOptions for SessionOptions {
    fn validate(&self) -> Result<()> {
        if self.for_guest && !self.has_identity() {
            return Err(Error::ValidationError(
                "guest requests require a session_id or guest_session_id".to_string(),
            ));
        }
        Ok(())
    }
}

/// Builder for account-scoped endpoints.
pub type SessionRequest<T> = Request<SessionOptions, T>;

impl<T> Request<SessionOptions, T> {
    /// Set the user session id.
    #[must_use]
    pub fn session_id(mut self, session_id: impl Into<String>) -> Self {
        self.options_mut().session_id = Some(session_id.into());
        self
    }

    /// Set the guest session id.
    #[must_use]
    pub fn guest_session_id(mut self, guest_session_id: impl Into<String>) -> Self {
        self.options_mut().guest_session_id = Some(guest_session_id.into());
        self
    }

    /// Mark the request as made for a guest. A session id or guest session id
    /// must then be set before sending.
    #[must_use]
    pub fn for_guest(mut self) -> Self {
        self.options_mut().for_guest = true;
        self
    }
}

/// Options for endpoints filtered by country.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CountryOptions {
    /// ISO 3166-1 country
    pub country: Option<String>,
}

impl QueryOptions for CountryOptions {}

/// Builder for endpoints filtered by country.
pub type CountryRequest<T> = Request<CountryOptions, T>;

impl<T> Request<CountryOptions, T> {
    /// Set the country.
    #[must_use]
    pub fn country(mut self, country: impl Into<String>) -> Self {
        self.options_mut().country = Some(country.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::TmdbClient;
    use crate::config::TmdbConfig;
    use crate::transport::MockTransport;
    use crate::types::RatingRequest;
    use reqwest::Method;
    use std::sync::Arc;

    fn offline_client() -> TmdbClient {
        let mut transport = MockTransport::new();
        transport.expect_send().times(0);
        TmdbClient::builder(TmdbConfig::new("test-key").unwrap())
            .with_transport(Arc::new(transport))
            .build()
            .unwrap()
    }

    #[test]
    fn empty_paged_options_encode_to_nothing() {
        let params = PagedOptions::default().to_query_params().unwrap();
        assert!(params.is_empty());
    }

    #[test]
    fn zero_page_is_treated_as_absent() {
        let options = PagedOptions {
            page: Some(0),
            ..Default::default()
        };
        assert!(options.to_query_params().unwrap().is_empty());
    }

    #[test]
    fn paged_setters_overwrite() {
        let request = PagedRequest::<serde_json::Value>::new(
            offline_client(),
            Method::GET,
            "/movie/popular",
        )
        .language("en-US")
        .page(1)
        .page(2)
        .region("US");

        assert_eq!(
            request.query_params().unwrap().to_query_string(),
            "language=en-US&page=2&region=US"
        );
    }

    #[test]
    fn list_setters_accumulate() {
        let request = AppendToResponseRequest::<serde_json::Value>::new(
            offline_client(),
            Method::GET,
            "/movie/550",
        )
        .append_to_response(["videos"])
        .append_to_response(vec!["images".to_string(), "credits".to_string()]);

        assert_eq!(
            request.query_params().unwrap().to_query_string(),
            "append_to_response=videos,images,credits"
        );
    }

    #[test]
    fn image_languages_join_with_commas() {
        let request = LanguageRequest::<serde_json::Value>::new(
            offline_client(),
            Method::GET,
            "/movie/550/images",
        )
        .language("en")
        .include_image_language(["en", "null"]);

        let params = request.query_params().unwrap();
        assert_eq!(params.get("include_image_language"), Some("en,null"));
    }

    #[test]
    fn change_dates_use_iso_format() {
        let request = ChangesRequest::<serde_json::Value>::new(
            offline_client(),
            Method::GET,
            "/movie/550/changes",
        )
        .start_date(NaiveDate::from_ymd_opt(2024, 1, 5).unwrap())
        .end_date(NaiveDate::from_ymd_opt(2024, 1, 19).unwrap());

        assert_eq!(
            request.query_params().unwrap().to_query_string(),
            "start_date=2024-01-05&end_date=2024-01-19"
        );
    }

    #[test]
    fn for_guest_is_never_encoded() {
        let options = SessionOptions {
            guest_session_id: Some("g-1".to_string()),
            for_guest: true,
            ..Default::default()
        };
        let params = options.to_query_params().unwrap();

        assert_eq!(params.to_query_string(), "guest_session_id=g-1");
        assert!(!params.contains_key("for_guest"));
    }

    #[test]
    fn guest_validation_requires_an_identity() {
        let guest = SessionOptions {
            for_guest: true,
            ..Default::default()
        };
        assert!(matches!(guest.validate(), Err(Error::ValidationError(_))));

        let empty_ids = SessionOptions {
            session_id: Some(String::new()),
            guest_session_id: Some(String::new()),
            for_guest: true,
        };
        assert!(empty_ids.validate().is_err());

        let with_session = SessionOptions {
            session_id: Some("s-1".to_string()),
            for_guest: true,
            ..Default::default()
        };
        assert!(with_session.validate().is_ok());

        let with_guest = SessionOptions {
            guest_session_id: Some("g-1".to_string()),
            for_guest: true,
            ..Default::default()
        };
        assert!(with_guest.validate().is_ok());

        assert!(SessionOptions::default().validate().is_ok());
    }

    #[tokio::test]
    async fn guest_rating_without_identity_makes_no_call() {
        let request = SessionRequest::<serde_json::Value>::new(
            offline_client(),
            Method::POST,
            "/movie/550/rating",
        )
        .with_validated_body(&RatingRequest { value: 8.5 })
        .for_guest();

        let err = request.send().await.unwrap_err();
        assert!(matches!(err, Error::ValidationError(msg) if msg.contains("guest")));
    }

    #[test]
    fn country_option() {
        let request = CountryRequest::<serde_json::Value>::new(
            offline_client(),
            Method::GET,
            "/movie/550/alternative_titles",
        )
        .country("DE");

        assert_eq!(request.query_params().unwrap().to_query_string(), "country=DE");
    }

    #[test]
    fn no_options_encode_to_nothing() {
        assert!(NoOptions {}.to_query_params().unwrap().is_empty());
    }
}
