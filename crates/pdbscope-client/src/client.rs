//! RCSB client implementation

use async_trait::async_trait;
use reqwest::{StatusCode, Url};
use serde_json::Value;
use tracing::debug;

use pdbscope_core::config::RcsbConfig;
use pdbscope_core::{Fetched, PdbId, StructureSource};

use crate::{Error, Result};

/// Client for the RCSB Data API and file server.
///
/// Cheap to clone; the inner `reqwest::Client` pools connections. No
/// timeouts, retries or extra headers are configured.
#[derive(Debug, Clone)]
pub struct RcsbClient {
    http: reqwest::Client,
    data_api_base: Url,
    files_base: Url,
}

impl RcsbClient {
    /// Create a client for the endpoints in `config`.
    pub fn new(config: &RcsbConfig) -> Result<Self> {
        Self::with_http_client(reqwest::Client::new(), config)
    }

    /// Create a client that shares an existing `reqwest::Client`.
    pub fn with_http_client(http: reqwest::Client, config: &RcsbConfig) -> Result<Self> {
        Ok(Self {
            http,
            data_api_base: parse_base(&config.data_api_base)?,
            files_base: parse_base(&config.files_base)?,
        })
    }

    /// URL of the entry record.
    pub fn entry_url(&self, id: &PdbId) -> Url {
        join(&self.data_api_base, &["entry", id.as_str()])
    }

    /// URL of a polymer-entity record.
    pub fn polymer_entity_url(&self, id: &PdbId, entity: u32) -> Url {
        join(
            &self.data_api_base,
            &["polymer_entity", id.as_str(), entity.to_string().as_str()],
        )
    }

    /// URL of the PDB-format structure file.
    pub fn structure_url(&self, id: &PdbId) -> Url {
        join(&self.files_base, &[format!("{id}.pdb").as_str()])
    }

    async fn get_json(&self, url: Url) -> Result<Fetched<Value>> {
        debug!(%url, "GET");
        let response = self.http.get(url).send().await?;
        if response.status() != StatusCode::OK {
            return Ok(Fetched::Status(response.status().as_u16()));
        }
        let body = response.bytes().await?;
        let value = serde_json::from_slice(&body).map_err(pdbscope_core::Error::from)?;
        Ok(Fetched::Found(value))
    }

    async fn get_text(&self, url: Url) -> Result<Fetched<String>> {
        debug!(%url, "GET");
        let response = self.http.get(url).send().await?;
        if response.status() != StatusCode::OK {
            return Ok(Fetched::Status(response.status().as_u16()));
        }
        Ok(Fetched::Found(response.text().await?))
    }
}

#[async_trait]
impl StructureSource for RcsbClient {
    async fn entry(&self, id: &PdbId) -> pdbscope_core::Result<Fetched<Value>> {
        Ok(self.get_json(self.entry_url(id)).await?)
    }

    async fn polymer_entity(
        &self,
        id: &PdbId,
        entity: u32,
    ) -> pdbscope_core::Result<Fetched<Value>> {
        Ok(self.get_json(self.polymer_entity_url(id, entity)).await?)
    }

    async fn structure_file(&self, id: &PdbId) -> pdbscope_core::Result<Fetched<String>> {
        Ok(self.get_text(self.structure_url(id)).await?)
    }
}

fn parse_base(raw: &str) -> Result<Url> {
    let url = Url::parse(raw).map_err(|e| Error::InvalidBaseUrl {
        url: raw.to_string(),
        reason: e.to_string(),
    })?;
    if url.cannot_be_a_base() {
        return Err(Error::InvalidBaseUrl {
            url: raw.to_string(),
            reason: "cannot be a base".to_string(),
        });
    }
    Ok(url)
}

/// Append percent-encoded path segments, so identifiers cannot alter the path.
fn join(base: &Url, segments: &[&str]) -> Url {
    let mut url = base.clone();
    if let Ok(mut path) = url.path_segments_mut() {
        path.pop_if_empty().extend(segments);
    }
    url
}
