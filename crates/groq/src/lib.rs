//! Groq LLM client.
//!
//! A thin client for the Groq chat completions API, which follows the
//! OpenAI wire format. One call is one HTTP exchange: the request is
//! serialized, posted with bearer authentication, and the reply is decoded
//! into [`Response`] or surfaced as an [`Error`].

pub use error::{Error, Result};
pub use message::{Message, Role};
pub use request::Request;
pub use reqwest::{self, Client};
pub use response::{Choice, FinishReason, Response, Usage};

mod error;
mod message;
mod provider;
mod request;
mod response;

use reqwest::header::{self, HeaderMap, HeaderValue};

/// Groq endpoint URLs.
pub mod endpoint {
    /// Groq OpenAI-compatible API base URL.
    pub const GROQ: &str = "https://api.groq.com/openai/v1";

    /// Path of the chat completions resource, relative to the base URL.
    pub const CHAT_COMPLETIONS: &str = "/chat/completions";
}

/// Groq chat completions client.
///
/// Cheap to clone; clones share the underlying connection pool of the
/// [`Client`].
#[derive(Clone)]
pub struct Groq {
    /// The HTTP client.
    pub client: Client,
    /// Static request headers (content-type, accept).
    headers: HeaderMap,
    /// API key sent as a bearer token.
    key: String,
    /// Chat completions endpoint URL.
    endpoint: String,
}

impl Groq {
    /// Create a client targeting the Groq API.
    pub fn api(client: Client, key: impl Into<String>) -> Self {
        Self::custom(client, key, endpoint::GROQ)
    }

    /// Create a client targeting a custom Groq-compatible base URL.
    ///
    /// `base_url` is the API root (e.g. `http://localhost:8080/v1`); the
    /// chat completions path is appended to it.
    pub fn custom(client: Client, key: impl Into<String>, base_url: &str) -> Self {
        let mut headers = HeaderMap::new();
        headers.insert(
            header::CONTENT_TYPE,
            HeaderValue::from_static("application/json"),
        );
        headers.insert(header::ACCEPT, HeaderValue::from_static("application/json"));
        Self {
            client,
            headers,
            key: key.into(),
            endpoint: format!(
                "{}{}",
                base_url.trim_end_matches('/'),
                endpoint::CHAT_COMPLETIONS
            ),
        }
    }

    /// Get the chat completions endpoint URL.
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Get a reference to the static headers.
    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }
}
