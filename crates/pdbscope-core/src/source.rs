//! The seam between the render pipeline and the structure services.
//!
//! [`StructureSource`] is implemented over HTTP by `pdbscope-client`.
//! [`FixtureSource`] serves canned responses and counts calls; tests and
//! offline demos use it.

use async_trait::async_trait;
use serde_json::Value;
use std::collections::HashMap;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use crate::{Error, PdbId, Result};

/// Outcome of one upstream GET that completed at the transport level.
#[derive(Debug, Clone, PartialEq)]
pub enum Fetched<T> {
    /// HTTP 200 with a decoded body.
    Found(T),
    /// Any other status.
    Status(u16),
}

/// Read access to entry metadata, polymer-entity metadata, and structure files.
///
/// `Err` is reserved for transport failures and undecodable bodies; a
/// completed request with a non-200 status is `Ok(Fetched::Status(..))`.
#[async_trait]
pub trait StructureSource: Send + Sync {
    /// GET the entry record.
    async fn entry(&self, id: &PdbId) -> Result<Fetched<Value>>;

    /// GET the polymer-entity record for entity number `entity`.
    async fn polymer_entity(&self, id: &PdbId, entity: u32) -> Result<Fetched<Value>>;

    /// GET the PDB-format structure file as text.
    async fn structure_file(&self, id: &PdbId) -> Result<Fetched<String>>;
}

#[async_trait]
impl<S: StructureSource + ?Sized> StructureSource for std::sync::Arc<S> {
    async fn entry(&self, id: &PdbId) -> Result<Fetched<Value>> {
        (**self).entry(id).await
    }

    async fn polymer_entity(&self, id: &PdbId, entity: u32) -> Result<Fetched<Value>> {
        (**self).polymer_entity(id, entity).await
    }

    async fn structure_file(&self, id: &PdbId) -> Result<Fetched<String>> {
        (**self).structure_file(id).await
    }
}

/// Canned response for one endpoint of a [`FixtureSource`].
#[derive(Debug, Clone)]
pub enum Canned<T> {
    /// Respond 200 with this body.
    Ok(T),
    /// Respond with this non-200 status.
    Status(u16),
    /// Fail at the transport level with this message.
    Unreachable(String),
}

impl<T: Clone> Canned<T> {
    fn answer(&self) -> Result<Fetched<T>> {
        match self {
            Canned::Ok(body) => Ok(Fetched::Found(body.clone())),
            Canned::Status(status) => Ok(Fetched::Status(*status)),
            Canned::Unreachable(message) => Err(Error::upstream(message.clone())),
        }
    }
}

#[derive(Debug, Clone)]
struct FixtureEntry {
    entry: Canned<Value>,
    entity: Canned<Value>,
    structure: Canned<String>,
}

/// In-memory [`StructureSource`] keyed by identifier.
///
/// Unknown identifiers answer 404 on every endpoint, like RCSB does.
#[derive(Debug, Default)]
pub struct FixtureSource {
    entries: Mutex<HashMap<String, FixtureEntry>>,
    calls: AtomicUsize,
}

impl FixtureSource {
    /// Creates an empty fixture source.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers canned responses for `id`.
    pub fn with(
        self,
        id: &str,
        entry: Canned<Value>,
        entity: Canned<Value>,
        structure: Canned<String>,
    ) -> Self {
        if let Ok(mut entries) = self.entries.lock() {
            entries.insert(
                id.to_string(),
                FixtureEntry {
                    entry,
                    entity,
                    structure,
                },
            );
        }
        self
    }

    /// Total number of requests served so far.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    fn lookup(&self, id: &PdbId) -> Option<FixtureEntry> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.entries.lock().ok()?.get(id.as_str()).cloned()
    }
}

#[async_trait]
impl StructureSource for FixtureSource {
    async fn entry(&self, id: &PdbId) -> Result<Fetched<Value>> {
        match self.lookup(id) {
            Some(fixture) => fixture.entry.answer(),
            None => Ok(Fetched::Status(404)),
        }
    }

    async fn polymer_entity(&self, id: &PdbId, _entity: u32) -> Result<Fetched<Value>> {
        match self.lookup(id) {
            Some(fixture) => fixture.entity.answer(),
            None => Ok(Fetched::Status(404)),
        }
    }

    async fn structure_file(&self, id: &PdbId) -> Result<Fetched<String>> {
        match self.lookup(id) {
            Some(fixture) => fixture.structure.answer(),
            None => Ok(Fetched::Status(404)),
        }
    }
}
