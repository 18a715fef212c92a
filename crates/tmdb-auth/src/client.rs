//! Request builders for the `/authentication` endpoints.

use crate::models::{DeleteSessionResponse, GuestSession, RequestToken, Session};
use secrecy::{ExposeSecret, SecretString};
use serde::Serialize;
use tmdb_core::options::NoOptionsRequest;
use tmdb_core::{Method, Request, TmdbClient};

#[derive(Serialize)]
struct RequestTokenBody<'a> {
    request_token: &'a str,
}

#[derive(Serialize)]
struct LoginBody<'a> {
    username: &'a str,
    password: &'a str,
    request_token: &'a str,
}

#[derive(Serialize)]
struct AccessTokenBody<'a> {
    access_token: &'a str,
}

#[derive(Serialize)]
struct SessionIdBody<'a> {
    session_id: &'a str,
}

/// Authentication endpoints.
#[derive(Debug, Clone)]
pub struct AuthService {
    client: TmdbClient,
}

impl AuthService {
    /// Create the service on a shared client.
    #[must_use]
    pub fn new(client: TmdbClient) -> Self {
        Self { client }
    }

    fn request<T>(&self, method: Method, path: &str) -> NoOptionsRequest<T> {
        Request::new(self.client.clone(), method, path)
    }

    /// `GET /authentication/token/new`.
    #[must_use]
    pub fn create_request_token(&self) -> NoOptionsRequest<RequestToken> {
        self.request(Method::GET, "/authentication/token/new")
    }

    /// `GET /authentication/guest_session/new`.
    #[must_use]
    pub fn create_guest_session(&self) -> NoOptionsRequest<GuestSession> {
        self.request(Method::GET, "/authentication/guest_session/new")
    }

    /// `POST /authentication/session/new` with an approved request token.
    #[must_use]
    pub fn create_session(&self, request_token: &str) -> NoOptionsRequest<Session> {
        self.request(Method::POST, "/authentication/session/new")
            .with_body(&RequestTokenBody { request_token })
    }

    /// `POST /authentication/token/validate_with_login`.
    ///
    /// Approves `request_token` with the user's credentials. The password is
    /// only exposed while the body is serialized.
    #[must_use]
    pub fn validate_with_login(
        &self,
        username: &str,
        password: &SecretString,
        request_token: &str,
    ) -> NoOptionsRequest<RequestToken> {
        self.request(Method::POST, "/authentication/token/validate_with_login")
            .with_body(&LoginBody {
                username,
                password: password.expose_secret(),
                request_token,
            })
    }

    /// `POST /authentication/session/convert/4`.
    #[must_use]
    pub fn create_session_from_v4(&self, access_token: &str) -> NoOptionsRequest<Session> {
        self.request(Method::POST, "/authentication/session/convert/4")
            .with_body(&AccessTokenBody { access_token })
    }

    /// `DELETE /authentication/session`.
    #[must_use]
    pub fn delete_session(&self, session_id: &str) -> NoOptionsRequest<DeleteSessionResponse> {
        self.request(Method::DELETE, "/authentication/session")
            .with_body(&SessionIdBody { session_id })
    }
}
