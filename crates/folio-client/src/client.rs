//! HTTP client for the headless CMS query endpoint.
//!
//! One GET per call:
//!
//! ```text
//! GET {base_url}/v{api_version}/data/query/{dataset}?query=<fixed query>
//! Authorization: Bearer <token>        (only when a token is configured)
//!
//! 200 {"result": [ ...records... ]}
//! ```

use async_trait::async_trait;
use folio_core::{Award, Education, Experience, Project, Skill};
use serde::Deserialize;
use serde::de::DeserializeOwned;

use crate::config::CmsConfig;
use crate::queries::RecordKind;
use crate::source::ContentSource;
use crate::{Error, Result};

/// Longest response body excerpt carried in [`Error::Status`].
const BODY_EXCERPT_CHARS: usize = 200;

#[derive(Deserialize)]
struct Envelope {
    result: Option<Vec<serde_json::Value>>,
}

/// Client for the CMS query API.
#[derive(Debug, Clone)]
pub struct CmsClient {
    http: reqwest::Client,
    endpoint: String,
    token: Option<String>,
}

impl CmsClient {
    /// Build a client from the `[cms]` configuration.
    pub fn new(config: &CmsConfig) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(config.timeout())
            .user_agent(concat!("folio/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            http,
            endpoint: config.query_url(),
            token: config.token.clone().filter(|t| !t.is_empty()),
        })
    }

    /// The query endpoint this client talks to.
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Run the fixed query for `kind` and decode the result array.
    ///
    /// Records are decoded one at a time; a record that does not decode
    /// is logged and skipped. Non-success statuses, bodies that are not a
    /// result envelope, empty results, and results where no record
    /// decodes are errors.
    pub async fn query<T: DeserializeOwned>(&self, kind: RecordKind) -> Result<Vec<T>> {
        tracing::debug!(kind = %kind, endpoint = %self.endpoint, "Querying CMS");

        let mut request = self.http.get(&self.endpoint).query(&[("query", kind.query())]);
        if let Some(token) = &self.token {
            request = request.bearer_auth(token);
        }

        let response = request.send().await?;
        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            return Err(Error::Status {
                kind,
                status: status.as_u16(),
                body: excerpt(&body),
            });
        }

        let envelope: Envelope =
            serde_json::from_str(&body).map_err(|source| Error::Decode { kind, source })?;
        let raw = envelope.result.unwrap_or_default();
        if raw.is_empty() {
            return Err(Error::EmptyResult { kind });
        }

        let total = raw.len();
        let (records, last_error) = decode_records::<T>(kind, raw);
        if records.is_empty() {
            if let Some(source) = last_error {
                return Err(Error::Decode { kind, source });
            }
            return Err(Error::EmptyResult { kind });
        }

        tracing::debug!(
            kind = %kind,
            count = records.len(),
            skipped = total - records.len(),
            "CMS query succeeded"
        );
        Ok(records)
    }
}

/// Decode each record on its own, returning the records that decoded and
/// the last decode error seen.
fn decode_records<T: DeserializeOwned>(
    kind: RecordKind,
    raw: Vec<serde_json::Value>,
) -> (Vec<T>, Option<serde_json::Error>) {
    let mut records = Vec::with_capacity(raw.len());
    let mut last_error = None;
    for (index, value) in raw.into_iter().enumerate() {
        match serde_json::from_value::<T>(value) {
            Ok(record) => records.push(record),
            Err(e) => {
                tracing::warn!(kind = %kind, index, error = %e, "Skipping undecodable CMS record");
                last_error = Some(e);
            }
        }
    }
    (records, last_error)
}

fn excerpt(body: &str) -> String {
    let body = body.trim();
    match body.char_indices().nth(BODY_EXCERPT_CHARS) {
        Some((cut, _)) => format!("{}…", &body[..cut]),
        None => body.to_string(),
    }
}

#[async_trait]
impl ContentSource for CmsClient {
    fn name(&self) -> &str {
        "cms"
    }

    async fn fetch_projects(&self) -> Result<Vec<Project>> {
        self.query(RecordKind::Projects).await
    }

    async fn fetch_skills(&self) -> Result<Vec<Skill>> {
        self.query(RecordKind::Skills).await
    }

    async fn fetch_education(&self) -> Result<Vec<Education>> {
        self.query(RecordKind::Education).await
    }

    async fn fetch_experience(&self) -> Result<Vec<Experience>> {
        self.query(RecordKind::Experience).await
    }

    async fn fetch_awards(&self) -> Result<Vec<Award>> {
        self.query(RecordKind::Awards).await
    }
}
