//! Submission observations and payload decoding.
//!
//! The target form declares `action="#"`, so a submit may surface as a
//! network POST, a full navigation/reload, or nothing at all. The outcome
//! is modeled as an explicit tagged value rather than resolved to one
//! assumed behavior, and the payload encoding is detected at decode time
//! from the captured request itself.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::result::{ContatoError, ContatoResult};

/// What a submit attempt was observed to do
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum SubmissionObservation {
    /// A POST-method outbound request was captured
    PostRequest(CapturedPost),
    /// The main frame performed a full navigation/reload
    Navigation(NavigationEvent),
    /// Neither signal fired within the configured bound
    Quiescent,
}

impl SubmissionObservation {
    /// Short tag for logging
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::PostRequest(_) => "post-request",
            Self::Navigation(_) => "navigation",
            Self::Quiescent => "quiescent",
        }
    }

    /// Whether nothing was observed
    #[must_use]
    pub const fn is_quiescent(&self) -> bool {
        matches!(self, Self::Quiescent)
    }
}

impl std::fmt::Display for SubmissionObservation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.kind())
    }
}

/// A full main-frame navigation observed after a submit
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavigationEvent {
    /// URL of the document the frame navigated to
    pub url: String,
}

/// Payload encoding of a captured request body
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PayloadKind {
    /// JSON object body
    Json,
    /// `application/x-www-form-urlencoded` body
    UrlEncoded,
}

/// A captured POST request
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CapturedPost {
    /// Request URL
    pub url: String,
    /// HTTP method (always POST for qualifying requests)
    pub method: String,
    /// `Content-Type` header, when the request carried one
    pub content_type: Option<String>,
    /// Raw request body, when recoverable
    pub body: Option<String>,
}

impl CapturedPost {
    /// Detect the payload encoding.
    ///
    /// The `Content-Type` header is authoritative when present; otherwise
    /// the body shape decides. Returns `None` when there is no body or the
    /// shape matches neither encoding.
    #[must_use]
    pub fn payload_kind(&self) -> Option<PayloadKind> {
        if let Some(ct) = &self.content_type {
            let ct = ct.to_ascii_lowercase();
            if ct.contains("json") {
                return Some(PayloadKind::Json);
            }
            if ct.contains("x-www-form-urlencoded") {
                return Some(PayloadKind::UrlEncoded);
            }
        }
        let body = self.body.as_deref()?.trim();
        if body.is_empty() {
            return None;
        }
        if body.starts_with('{') || body.starts_with('[') {
            return Some(PayloadKind::Json);
        }
        if body
            .split('&')
            .all(|pair| !pair.is_empty() && pair.contains('='))
        {
            return Some(PayloadKind::UrlEncoded);
        }
        None
    }

    /// Decode the body into field name → value pairs, detecting the
    /// encoding from the request itself.
    pub fn form_fields(&self) -> ContatoResult<BTreeMap<String, String>> {
        let body = self.body.as_deref().ok_or_else(|| ContatoError::Decode {
            message: format!("captured POST to {} has no body", self.url),
        })?;
        match self.payload_kind() {
            Some(PayloadKind::Json) => decode_json(body),
            Some(PayloadKind::UrlEncoded) => Ok(decode_urlencoded(body)),
            None => Err(ContatoError::Decode {
                message: format!(
                    "unrecognized payload shape (content-type {:?}): {:?}",
                    self.content_type,
                    truncate(body, 80)
                ),
            }),
        }
    }
}

fn decode_json(body: &str) -> ContatoResult<BTreeMap<String, String>> {
    let value: serde_json::Value =
        serde_json::from_str(body).map_err(|e| ContatoError::Decode {
            message: format!("JSON body did not parse: {e}"),
        })?;
    let object = value.as_object().ok_or_else(|| ContatoError::Decode {
        message: "JSON body is not an object".to_string(),
    })?;
    Ok(object
        .iter()
        .map(|(k, v)| {
            let rendered = match v {
                serde_json::Value::String(s) => s.clone(),
                other => other.to_string(),
            };
            (k.clone(), rendered)
        })
        .collect())
}

fn decode_urlencoded(body: &str) -> BTreeMap<String, String> {
    url::form_urlencoded::parse(body.as_bytes())
        .map(|(k, v)| (k.into_owned(), v.into_owned()))
        .collect()
}

fn truncate(s: &str, max: usize) -> &str {
    match s.char_indices().nth(max) {
        Some((idx, _)) => &s[..idx],
        None => s,
    }
}
