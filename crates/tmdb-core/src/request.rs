//! Request builders.
//!
//! A [`Request`] is created per call site by a service method. It accumulates
//! option values through chained setters and performs one network call per
//! [`Request::send`]. `send` borrows the builder, so calling it again issues
//! another independent request with the same options.

use crate::client::TmdbClient;
use crate::encode::encode;
use crate::error::{Error, Result};
use crate::query::QueryParams;
use reqwest::Method;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fmt;
use std::marker::PhantomData;
use tracing::debug;
use validator::Validate;

/// An option record that can be turned into query parameters.
///
/// Most records only need `impl QueryOptions for MyOptions {}`. Records that
/// compose several parts override [`QueryOptions::to_query_params`] to encode
/// each part and merge the results.
pub trait QueryOptions: Serialize {
    /// Check preconditions before any network call is made.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ValidationError`] when the record cannot be sent as is.
    fn validate(&self) -> Result<()> {
        Ok(())
    }

    /// Encode the record.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EncodingError`] if encoding fails.
    fn to_query_params(&self) -> Result<QueryParams> {
        encode(self)
    }
}

/// Builder for one call to one endpoint.
///
/// `O` is the option record and `T` the decoded response type.
pub struct Request<O, T> {
    client: TmdbClient,
    method: Method,
    path: String,
    options: O,
    body: Option<Result<serde_json::Value>>,
    response: PhantomData<fn() -> T>,
}

impl<O, T> Request<O, T> {
    /// Create a builder with an empty option record.
    #[must_use]
    pub fn new(client: TmdbClient, method: Method, path: impl Into<String>) -> Self
    where
        O: Default,
    {
        Self::with_options(client, method, path, O::default())
    }

    /// Create a builder with a pre-populated option record.
    #[must_use]
    pub fn with_options(
        client: TmdbClient,
        method: Method,
        path: impl Into<String>,
        options: O,
    ) -> Self {
        Self {
            client,
            method,
            path: path.into(),
            options,
            body: None,
            response: PhantomData,
        }
    }

    /// Attach a JSON body.
    ///
    /// Serialization errors are reported by [`Request::send`].
    #[must_use]
    pub fn with_body<B: Serialize + ?Sized>(mut self, body: &B) -> Self {
        self.body = Some(serde_json::to_value(body).map_err(Error::from));
        self
    }

    /// Attach a JSON body after running its `validator` rules.
    ///
    /// Validation errors are reported by [`Request::send`].
    #[must_use]
    pub fn with_validated_body<B: Serialize + Validate>(mut self, body: &B) -> Self {
        self.body = Some(
            body.validate()
                .map_err(Error::from)
                .and_then(|()| serde_json::to_value(body).map_err(Error::from)),
        );
        self
    }

    /// HTTP method of the request.
    #[must_use]
    pub fn method(&self) -> &Method {
        &self.method
    }

    /// Path relative to the base URL.
    #[must_use]
    pub fn path(&self) -> &str {
        &self.path
    }

    /// The accumulated option record.
    #[must_use]
    pub fn options(&self) -> &O {
        &self.options
    }

    /// Mutable access to the option record, for builders wrapping this one.
    pub fn options_mut(&mut self) -> &mut O {
        &mut self.options
    }
}

impl<O, T> Request<O, T>
where
    O: QueryOptions,
    T: DeserializeOwned,
{
    /// Validate and encode the option record.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ValidationError`] or [`Error::EncodingError`].
    pub fn query_params(&self) -> Result<QueryParams> {
        self.options.validate()?;
        self.options.to_query_params()
    }

    /// Perform the request.
    ///
    /// # Errors
    ///
    /// Validation and encoding errors are returned before any network call;
    /// otherwise see [`TmdbClient::execute`].
    pub async fn send(&self) -> Result<T> {
        let params = self.query_params()?;
        let body = self.prepared_body()?;
        self.client
            .execute(self.method.clone(), &self.path, params, body.as_ref())
            .await
    }

    fn prepared_body(&self) -> Result<Option<serde_json::Value>> {
        if self.method == Method::GET {
            if self.body.is_some() {
                debug!(path = %self.path, "Dropping request body on GET");
            }
            return Ok(None);
        }
        self.body.clone().transpose()
    }
}

impl<O: Clone, T> Clone for Request<O, T> {
    fn clone(&self) -> Self {
        Self {
            client: self.client.clone(),
            method: self.method.clone(),
            path: self.path.clone(),
            options: self.options.clone(),
            body: self.body.clone(),
            response: PhantomData,
        }
    }
}

impl<O: fmt::Debug, T> fmt::Debug for Request<O, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Request")
            .field("method", &self.method)
            .field("path", &self.path)
            .field("options", &self.options)
            .field("response", &std::any::type_name::<T>())
            .finish_non_exhaustive()
    }
}
