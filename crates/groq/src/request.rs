//! Request body for Groq chat completions API.
//!
//! Optional fields use `Option` + `skip_serializing_if`, so an unset field is
//! absent from the payload while an explicit zero (e.g. `temperature: 0.0`)
//! is still sent. Non-finite floats are rejected at serialization time
//! instead of being written as `null`.

use crate::Message;
use serde::{Serialize, Serializer, ser::Error as _};

/// The request body for Groq chat completions API.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Request {
    /// The model identifier.
    pub model: String,
    /// The messages to send, in conversation order.
    pub messages: Vec<Message>,
    /// Sampling temperature.
    #[serde(skip_serializing_if = "Option::is_none", serialize_with = "finite")]
    pub temperature: Option<f64>,
    /// Maximum tokens to generate.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_tokens: Option<usize>,
    /// Top-p sampling.
    #[serde(skip_serializing_if = "Option::is_none", serialize_with = "finite")]
    pub top_p: Option<f64>,
    /// Whether to stream the response.
    ///
    /// The client only decodes a single JSON body, so `Some(true)` is not
    /// supported by [`Groq::send`](crate::Groq::send).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stream: Option<bool>,
    /// Stop sequences.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stop: Option<Vec<String>>,
    /// Presence penalty.
    #[serde(skip_serializing_if = "Option::is_none", serialize_with = "finite")]
    pub presence_penalty: Option<f64>,
    /// Frequency penalty.
    #[serde(skip_serializing_if = "Option::is_none", serialize_with = "finite")]
    pub frequency_penalty: Option<f64>,
}

impl Request {
    /// Create a request for the given model and messages.
    pub fn new(model: impl Into<String>, messages: Vec<Message>) -> Self {
        Self {
            model: model.into(),
            messages,
            ..Default::default()
        }
    }

    /// Clone the request with the given messages.
    pub fn messages(&self, messages: &[Message]) -> Self {
        Self {
            messages: messages.to_vec(),
            ..self.clone()
        }
    }

    /// Set the sampling temperature.
    pub fn with_temperature(self, temperature: f64) -> Self {
        Self {
            temperature: Some(temperature),
            ..self
        }
    }

    /// Set the maximum number of tokens to generate.
    pub fn with_max_tokens(self, max_tokens: usize) -> Self {
        Self {
            max_tokens: Some(max_tokens),
            ..self
        }
    }

    /// Set top-p sampling.
    pub fn with_top_p(self, top_p: f64) -> Self {
        Self {
            top_p: Some(top_p),
            ..self
        }
    }

    /// Set the stream flag.
    pub fn with_stream(self, stream: bool) -> Self {
        Self {
            stream: Some(stream),
            ..self
        }
    }

    /// Set the stop sequences. An empty list leaves the field unset.
    pub fn with_stop<I, S>(self, stop: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let stop = stop.into_iter().map(Into::into).collect::<Vec<_>>();
        Self {
            stop: (!stop.is_empty()).then_some(stop),
            ..self
        }
    }

    /// Set the presence penalty.
    pub fn with_presence_penalty(self, penalty: f64) -> Self {
        Self {
            presence_penalty: Some(penalty),
            ..self
        }
    }

    /// Set the frequency penalty.
    pub fn with_frequency_penalty(self, penalty: f64) -> Self {
        Self {
            frequency_penalty: Some(penalty),
            ..self
        }
    }
}

/// Serialize an optional float, failing on NaN and infinities.
fn finite<S: Serializer>(value: &Option<f64>, serializer: S) -> Result<S::Ok, S::Error> {
    match value {
        Some(v) if !v.is_finite() => Err(S::Error::custom(format!("unsupported value: {v}"))),
        _ => value.serialize(serializer),
    }
}
