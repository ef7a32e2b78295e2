//! HTTP client for the Kroger public API.
//!
//! Wraps `reqwest` with the OAuth2 client-credentials exchange, parameter
//! validation, and typed decoding of the `locations` and `products` search
//! endpoints. Non-200 responses are turned into descriptive errors by
//! [`classify_response`].

use std::time::Duration;

use reqwest::header::ACCEPT;
use reqwest::{Client, Request, StatusCode};
use serde::de::DeserializeOwned;

use crate::classify::classify_response;
use crate::error::KrogerError;
use crate::types::{LocationsResponse, ProductsResponse, TokenResponse};
use crate::validate::{check_range, check_zip_code, require_non_empty};

/// Request timeout applied when none is given.
pub const DEFAULT_TIMEOUT_SECS: u64 = 180;

/// Largest `filter.limit` accepted by `GET /locations`.
pub const MAX_LOCATIONS_LIMIT: i32 = 200;
/// Largest `filter.start` accepted by `GET /products`.
pub const MAX_PRODUCTS_OFFSET: i32 = 1000;
/// Largest `filter.limit` accepted by `GET /products`.
pub const MAX_PRODUCTS_LIMIT: i32 = 50;

const TOKEN_SCOPE: &str = "product.compact";
const NO_TOKEN_MESSAGE: &str = "client has no OAuth2 token, call authenticate first";

/// Client for the Kroger public API.
///
/// Construct with [`KrogerClient::new`], call [`KrogerClient::authenticate`]
/// once, then issue any number of queries. Queries borrow the client shared;
/// authentication borrows it exclusively, so the token can never change under
/// an in-flight query.
pub struct KrogerClient {
    http: Client,
    base_url: String,
    client_id: String,
    client_secret: String,
    chain: String,
    token: Option<String>,
}

impl std::fmt::Debug for KrogerClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("KrogerClient")
            .field("base_url", &self.base_url)
            .field("client_id", &self.client_id)
            .field("client_secret", &"[redacted]")
            .field("chain", &self.chain)
            .field("token", &self.token.as_ref().map(|_| "[redacted]"))
            .finish_non_exhaustive()
    }
}

impl KrogerClient {
    /// Creates an unauthenticated client with the default request timeout.
    ///
    /// # Errors
    ///
    /// Returns [`KrogerError::Validation`] if any argument is empty, or
    /// [`KrogerError::Transport`] if the underlying `reqwest::Client` cannot
    /// be constructed.
    pub fn new(
        base_url: &str,
        client_id: &str,
        client_secret: &str,
        chain: &str,
    ) -> Result<Self, KrogerError> {
        Self::with_timeout(base_url, client_id, client_secret, chain, DEFAULT_TIMEOUT_SECS)
    }

    /// Creates an unauthenticated client with a custom request timeout.
    ///
    /// The base URL is not parsed here; a malformed one surfaces as
    /// [`KrogerError::Transport`] on the first request.
    ///
    /// # Errors
    ///
    /// Returns [`KrogerError::Validation`] if any string argument is empty, or
    /// [`KrogerError::Transport`] if the underlying `reqwest::Client` cannot
    /// be constructed.
    pub fn with_timeout(
        base_url: &str,
        client_id: &str,
        client_secret: &str,
        chain: &str,
        timeout_secs: u64,
    ) -> Result<Self, KrogerError> {
        require_non_empty("baseUrl", base_url)?;
        require_non_empty("id", client_id)?;
        require_non_empty("secret", client_secret)?;
        require_non_empty("chain", chain)?;

        let http = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent("grocery-data/0.1")
            .build()?;

        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_owned(),
            client_id: client_id.to_owned(),
            client_secret: client_secret.to_owned(),
            chain: chain.to_owned(),
            token: None,
        })
    }

    /// `true` once [`KrogerClient::authenticate`] has stored a token.
    #[must_use]
    pub fn has_token(&self) -> bool {
        self.token().is_ok()
    }

    /// Exchanges the client credentials for a bearer token and stores it.
    ///
    /// Calling this again fetches a fresh token and replaces the old one.
    ///
    /// # Errors
    ///
    /// - [`KrogerError::Transport`] on network failure or a malformed base URL.
    /// - [`KrogerError::Upstream`] if the token endpoint does not answer 200.
    /// - [`KrogerError::Decode`] if the token response is not valid JSON.
    pub async fn authenticate(&mut self) -> Result<(), KrogerError> {
        let request = self.token_request()?;
        let body = self.execute(request).await?;
        let token: TokenResponse = decode(&body, "oauth2 token")?;

        tracing::debug!(
            expires_in = token.expires_in,
            token_type = %token.token_type,
            "obtained Kroger OAuth2 token"
        );
        self.token = Some(token.access_token);
        Ok(())
    }

    /// Searches the configured chain's stores near a zip code.
    ///
    /// `filter_limit` of `0` leaves the page size to the API default.
    ///
    /// # Errors
    ///
    /// - [`KrogerError::Validation`] if the client has no token, the zip code
    ///   is not exactly five digits, or `filter_limit` is outside `0..=200`.
    /// - [`KrogerError::Transport`], [`KrogerError::Upstream`], or
    ///   [`KrogerError::Decode`] as for [`KrogerClient::authenticate`].
    pub async fn get_locations(
        &self,
        zip_code: &str,
        filter_limit: i32,
    ) -> Result<LocationsResponse, KrogerError> {
        let token = self.token()?;
        check_zip_code(zip_code)?;
        check_range("filterLimit", filter_limit, 0, MAX_LOCATIONS_LIMIT)?;

        let request = self.locations_request(token, zip_code, filter_limit)?;
        let body = self.execute(request).await?;
        decode(&body, &format!("locations(zipCode={zip_code})"))
    }

    /// Searches products by term, optionally scoped to one store.
    ///
    /// Pricing and inventory are only populated when `location_id` is given.
    /// `filter_offset` and `filter_limit` of `0` are left off the request.
    ///
    /// # Errors
    ///
    /// - [`KrogerError::Validation`] if the client has no token, `filter_term`
    ///   is empty, `filter_offset` is outside `0..=1000`, or `filter_limit` is
    ///   outside `0..=50`.
    /// - [`KrogerError::Transport`], [`KrogerError::Upstream`], or
    ///   [`KrogerError::Decode`] as for [`KrogerClient::authenticate`].
    pub async fn get_products(
        &self,
        filter_term: &str,
        location_id: Option<&str>,
        filter_offset: i32,
        filter_limit: i32,
    ) -> Result<ProductsResponse, KrogerError> {
        let token = self.token()?;
        require_non_empty("filterTerm", filter_term)?;
        check_range("filterOffset", filter_offset, 0, MAX_PRODUCTS_OFFSET)?;
        check_range("filterLimit", filter_limit, 0, MAX_PRODUCTS_LIMIT)?;

        let request =
            self.products_request(token, filter_term, location_id, filter_offset, filter_limit)?;
        let body = self.execute(request).await?;
        decode(&body, &format!("products(filterTerm={filter_term})"))
    }

    fn token(&self) -> Result<&str, KrogerError> {
        self.token
            .as_deref()
            .filter(|t| !t.is_empty())
            .ok_or_else(|| KrogerError::validation(NO_TOKEN_MESSAGE))
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/{path}", self.base_url)
    }

    /// Builds `POST /connect/oauth2/token` with Basic credentials and a
    /// form-encoded client-credentials grant.
    fn token_request(&self) -> Result<Request, KrogerError> {
        let request = self
            .http
            .post(self.endpoint("connect/oauth2/token"))
            .basic_auth(&self.client_id, Some(&self.client_secret))
            .form(&[("grant_type", "client_credentials"), ("scope", TOKEN_SCOPE)])
            .build()?;
        Ok(request)
    }

    fn locations_request(
        &self,
        token: &str,
        zip_code: &str,
        filter_limit: i32,
    ) -> Result<Request, KrogerError> {
        let mut query = vec![
            ("filter.chain", self.chain.clone()),
            ("filter.zipCode.near", zip_code.to_owned()),
        ];
        if filter_limit > 0 {
            query.push(("filter.limit", filter_limit.to_string()));
        }
        self.search_request("locations", token, &query)
    }

    fn products_request(
        &self,
        token: &str,
        filter_term: &str,
        location_id: Option<&str>,
        filter_offset: i32,
        filter_limit: i32,
    ) -> Result<Request, KrogerError> {
        let mut query = vec![("filter.term", filter_term.to_owned())];
        if let Some(id) = location_id.filter(|id| !id.is_empty()) {
            query.push(("filter.locationId", id.to_owned()));
        }
        if filter_offset > 0 {
            query.push(("filter.start", filter_offset.to_string()));
        }
        if filter_limit > 0 {
            query.push(("filter.limit", filter_limit.to_string()));
        }
        self.search_request("products", token, &query)
    }

    fn search_request(
        &self,
        path: &str,
        token: &str,
        query: &[(&str, String)],
    ) -> Result<Request, KrogerError> {
        let request = self
            .http
            .get(self.endpoint(path))
            .header(ACCEPT, "application/json")
            .bearer_auth(token)
            .query(query)
            .build()?;
        Ok(request)
    }

    /// Sends the request and returns the body of a `200 OK` response.
    ///
    /// # Errors
    ///
    /// Returns [`KrogerError::Transport`] if sending or reading the body fails
    /// and the classified [`KrogerError::Upstream`] for any other status.
    async fn execute(&self, request: Request) -> Result<String, KrogerError> {
        tracing::debug!(
            method = %request.method(),
            path = request.url().path(),
            "sending Kroger API request"
        );

        let response = self.http.execute(request).await?;
        let status = response.status();
        let body = response.text().await?;

        if status != StatusCode::OK {
            let err = classify_response(status, &body);
            tracing::warn!(status = status.as_u16(), error = %err, "Kroger API request failed");
            return Err(err);
        }
        Ok(body)
    }
}

fn decode<T: DeserializeOwned>(body: &str, context: &str) -> Result<T, KrogerError> {
    serde_json::from_str(body).map_err(|e| KrogerError::Decode {
        context: context.to_owned(),
        source: e,
    })
}

#[cfg(test)]
#[path = "client_test.rs"]
mod tests;
