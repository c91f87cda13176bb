//! One render pass: identifier in, summary and scene out.
//!
//! The pass is strictly sequential. The entry lookup comes first, then the
//! polymer-entity lookup (only when the entry answered 200), then the
//! structure file. The structure file is requested whatever happened to the
//! summary, so a failed metadata lookup still gets a 3D view when the file
//! exists.

use tracing::{debug, warn};

use crate::scene::{SceneDescription, Viewport};
use crate::source::{Fetched, StructureSource};
use crate::summary::ProteinSummary;
use crate::{Error, PdbId, Result};

/// What happened to the structure-file fetch.
#[derive(Debug)]
pub enum SceneOutcome {
    /// The file was retrieved and a scene built from it.
    Ready(SceneDescription),
    /// The file server answered with a non-200 status.
    Unavailable {
        /// HTTP status code
        status: u16,
    },
    /// The request itself failed.
    Failed(Error),
}

impl SceneOutcome {
    /// The scene, if one was built.
    pub fn scene(&self) -> Option<&SceneDescription> {
        match self {
            SceneOutcome::Ready(scene) => Some(scene),
            _ => None,
        }
    }
}

/// Result of rendering the dashboard for one input.
#[derive(Debug)]
pub enum DashboardView {
    /// No identifier: ask for one. No requests were made.
    Prompt,
    /// An identifier was given and looked up.
    Report(Report),
}

/// Everything shown for one identifier.
#[derive(Debug)]
pub struct Report {
    /// The identifier that was looked up.
    pub pdb_id: PdbId,
    /// Summary lookup outcome.
    pub summary: Result<ProteinSummary>,
    /// Structure fetch outcome.
    pub scene: SceneOutcome,
}

/// The render pipeline over some [`StructureSource`].
#[derive(Debug, Clone)]
pub struct Dashboard<S> {
    source: S,
    entity_id: u32,
    viewport: Viewport,
}

impl<S: StructureSource> Dashboard<S> {
    /// Creates a dashboard reading polymer entity 1 and using the default viewport.
    pub fn new(source: S) -> Self {
        Self {
            source,
            entity_id: 1,
            viewport: Viewport::default(),
        }
    }

    /// Read the organism from a different polymer entity.
    pub fn with_entity_id(mut self, entity_id: u32) -> Self {
        self.entity_id = entity_id;
        self
    }

    /// Use a different viewer size.
    pub fn with_viewport(mut self, viewport: Viewport) -> Self {
        self.viewport = viewport;
        self
    }

    /// The underlying source.
    pub fn source(&self) -> &S {
        &self.source
    }

    /// Look up the six summary fields.
    ///
    /// Fails when the entry request fails, answers non-200, or returns a
    /// body that is not JSON. Problems with the polymer-entity request only
    /// cost the organism field.
    #[tracing::instrument(skip_all, fields(pdb_id = %id))]
    pub async fn lookup_summary(&self, id: &PdbId) -> Result<ProteinSummary> {
        let entry = match self.source.entry(id).await? {
            Fetched::Found(entry) => entry,
            Fetched::Status(status) => return Err(Error::status("entry", status)),
        };

        let entity = match self.source.polymer_entity(id, self.entity_id).await {
            Ok(Fetched::Found(entity)) => Some(entity),
            Ok(Fetched::Status(status)) => {
                debug!(status, entity = self.entity_id, "polymer entity not available");
                None
            }
            Err(e) => {
                warn!(
                    error = %e,
                    retryable = e.is_retryable(),
                    "polymer entity lookup failed, organism left blank"
                );
                None
            }
        };

        Ok(ProteinSummary::from_records(&entry, entity.as_ref()))
    }

    /// Fetch the structure file and build its scene.
    #[tracing::instrument(skip_all, fields(pdb_id = %id))]
    pub async fn scene_outcome(&self, id: &PdbId) -> SceneOutcome {
        match self.source.structure_file(id).await {
            Ok(Fetched::Found(text)) => {
                debug!(bytes = text.len(), "structure file loaded");
                SceneOutcome::Ready(SceneDescription::from_pdb(text, self.viewport))
            }
            Ok(Fetched::Status(status)) => {
                debug!(status, "structure file not available");
                SceneOutcome::Unavailable { status }
            }
            Err(e) => {
                warn!(error = %e, retryable = e.is_retryable(), "structure file fetch failed");
                SceneOutcome::Failed(e)
            }
        }
    }

    /// Fetch the structure file and build its scene; `None` on a non-200 answer.
    pub async fn fetch_scene(&self, id: &PdbId) -> Result<Option<SceneDescription>> {
        match self.scene_outcome(id).await {
            SceneOutcome::Ready(scene) => Ok(Some(scene)),
            SceneOutcome::Unavailable { .. } => Ok(None),
            SceneOutcome::Failed(e) => Err(e),
        }
    }

    /// Run one full pass for raw side-panel input.
    pub async fn render(&self, input: &str) -> DashboardView {
        let Some(pdb_id) = PdbId::parse(input) else {
            return DashboardView::Prompt;
        };

        let summary = self.lookup_summary(&pdb_id).await;
        if let Err(e) = &summary {
            warn!(
                pdb_id = %pdb_id,
                error = %e,
                retryable = e.is_retryable(),
                "summary lookup failed"
            );
        }
        let scene = self.scene_outcome(&pdb_id).await;

        DashboardView::Report(Report {
            pdb_id,
            summary,
            scene,
        })
    }
}
