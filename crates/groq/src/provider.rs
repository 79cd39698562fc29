//! Chat completion call for the Groq client.

use crate::{Error, Groq, Request, Response, Result};
use reqwest::{Method, StatusCode};

impl Groq {
    /// Send a chat completion request and decode the reply.
    ///
    /// Performs exactly one POST to [`Groq::endpoint`]. Any status other than
    /// 200 is returned as [`Error::Api`] with the body verbatim. Nothing is
    /// validated locally: an empty model or message list is sent as is and
    /// the service's rejection is surfaced.
    pub async fn send(&self, request: &Request) -> Result<Response> {
        if request.stream == Some(true) {
            tracing::warn!("streaming is not supported, decoding a single response body");
        }

        let body = serde_json::to_vec(request).map_err(Error::Encoding)?;
        tracing::debug!(
            endpoint = %self.endpoint,
            model = %request.model,
            messages = request.messages.len(),
            "sending chat completion request"
        );
        tracing::trace!("request: {}", String::from_utf8_lossy(&body));

        let response = self
            .client
            .request(Method::POST, &self.endpoint)
            .headers(self.headers.clone())
            .bearer_auth(&self.key)
            .body(body)
            .send()
            .await?;

        let status = response.status();
        let text = response.text().await?;
        tracing::trace!("response ({status}): {text}");

        if status != StatusCode::OK {
            tracing::debug!(status = status.as_u16(), "chat completion rejected");
            return Err(Error::Api {
                status: status.as_u16(),
                body: text,
            });
        }

        serde_json::from_str(&text).map_err(|source| Error::Decoding { source, body: text })
    }
}
