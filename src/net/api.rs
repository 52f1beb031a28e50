//! REST client for the Activity API.
//!
//! Client-side (csr): real HTTP calls via `gloo-net`.
//! Native builds: `HttpActivityApi` answers every call with
//! [`ApiError::Unavailable`] so the controller and its tests build without a
//! browser.
//!
//! ERROR HANDLING
//! ==============
//! Only transport and decode failures are errors here. A non-2xx response is
//! an ordinary [`ApiReply`] whose body carries the server's `detail`; the
//! controller decides how to surface it.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};

use super::types::{ActivityMap, ReplyBody};

/// Transport-level failure talking to the Activity API.
#[derive(Clone, Debug, thiserror::Error, PartialEq, Eq)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Transport(String),
    #[error("malformed response: {0}")]
    Decode(String),
    #[error("not available outside the browser")]
    Unavailable,
}

/// Status plus decoded body of a signup or removal call.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ApiReply {
    pub status: u16,
    pub body: ReplyBody,
}

impl ApiReply {
    pub fn new(status: u16, body: ReplyBody) -> Self {
        Self { status, body }
    }

    /// True for 2xx statuses, like `Response.ok` in the browser.
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// The three Activity API operations. Enables mocking in tests.
#[async_trait::async_trait(?Send)]
pub trait ActivityApi {
    /// `GET /activities`.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on network failure or when the body is not an
    /// activity mapping.
    async fn list_activities(&self) -> Result<ActivityMap, ApiError>;

    /// `POST /activities/{name}/signup?email=...`.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on network failure or an undecodable body.
    async fn signup(&self, activity: &str, email: &str) -> Result<ApiReply, ApiError>;

    /// `DELETE /activities/{name}/signup?email=...`. The body is read
    /// leniently: an unreadable body yields an empty [`ReplyBody`].
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on network failure only.
    async fn unregister(&self, activity: &str, email: &str) -> Result<ApiReply, ApiError>;
}

/// `encodeURIComponent` leaves ASCII alphanumerics and `-_.!~*'()` alone.
const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Percent-encode a URI component with `encodeURIComponent` semantics.
pub fn encode_component(raw: &str) -> String {
    utf8_percent_encode(raw, URI_COMPONENT).to_string()
}

pub fn activities_endpoint(base: &str) -> String {
    format!("{base}/activities")
}

/// `{base}/activities/{name}/signup?email={email}` with both values encoded.
pub fn signup_endpoint(base: &str, activity: &str, email: &str) -> String {
    format!(
        "{base}/activities/{}/signup?email={}",
        encode_component(activity),
        encode_component(email)
    )
}

/// [`ActivityApi`] over `fetch`, rooted at a base path (empty = same origin).
#[derive(Clone, Debug, Default)]
pub struct HttpActivityApi {
    base: String,
}

impl HttpActivityApi {
    pub fn new(base: impl Into<String>) -> Self {
        Self { base: base.into() }
    }
}

#[async_trait::async_trait(?Send)]
#[cfg_attr(not(feature = "csr"), allow(unused_variables))]
impl ActivityApi for HttpActivityApi {
    async fn list_activities(&self) -> Result<ActivityMap, ApiError> {
        #[cfg(feature = "csr")]
        {
            let resp = gloo_net::http::Request::get(&activities_endpoint(&self.base))
                .send()
                .await
                .map_err(|e| ApiError::Transport(e.to_string()))?;
            resp.json::<ActivityMap>()
                .await
                .map_err(|e| ApiError::Decode(e.to_string()))
        }
        #[cfg(not(feature = "csr"))]
        {
            Err(ApiError::Unavailable)
        }
    }

    async fn signup(&self, activity: &str, email: &str) -> Result<ApiReply, ApiError> {
        #[cfg(feature = "csr")]
        {
            let url = signup_endpoint(&self.base, activity, email);
            let resp = gloo_net::http::Request::post(&url)
                .send()
                .await
                .map_err(|e| ApiError::Transport(e.to_string()))?;
            let body = resp
                .json::<ReplyBody>()
                .await
                .map_err(|e| ApiError::Decode(e.to_string()))?;
            Ok(ApiReply::new(resp.status(), body))
        }
        #[cfg(not(feature = "csr"))]
        {
            Err(ApiError::Unavailable)
        }
    }

    async fn unregister(&self, activity: &str, email: &str) -> Result<ApiReply, ApiError> {
        #[cfg(feature = "csr")]
        {
            let url = signup_endpoint(&self.base, activity, email);
            let resp = gloo_net::http::Request::delete(&url)
                .send()
                .await
                .map_err(|e| ApiError::Transport(e.to_string()))?;
            let body = resp.json::<ReplyBody>().await.unwrap_or_default();
            Ok(ApiReply::new(resp.status(), body))
        }
        #[cfg(not(feature = "csr"))]
        {
            Err(ApiError::Unavailable)
        }
    }
}
