//! `serve`, `summary` and `scene` command handlers.

use pdbscope_api::Server;
use pdbscope_client::RcsbClient;
use pdbscope_core::summary::ProteinSummary;
use pdbscope_core::{Dashboard, PdbId, PdbScopeConfig, SceneOutcome, StructureSource};
use tracing::info;

use crate::{Error, Result};

/// Run the dashboard server until interrupted.
pub async fn cmd_serve(mut config: PdbScopeConfig, bind: Option<String>) -> Result<()> {
    if let Some(bind) = bind {
        config.server.bind = bind;
    }
    config.validate()?;
    info!(bind = %config.server.bind, "starting dashboard server");
    Server::from_config(config)?.serve().await?;
    Ok(())
}

/// Print the summary for one identifier.
pub async fn cmd_summary(config: &PdbScopeConfig, raw: &str, json: bool) -> Result<()> {
    let output = summary_output(&dashboard(config)?, raw, json).await?;
    println!("{output}");
    Ok(())
}

/// Print the scene description for one identifier.
pub async fn cmd_scene(config: &PdbScopeConfig, raw: &str, annotations_only: bool) -> Result<()> {
    let output = scene_output(&dashboard(config)?, raw, annotations_only).await?;
    println!("{output}");
    Ok(())
}

fn dashboard(config: &PdbScopeConfig) -> Result<Dashboard<RcsbClient>> {
    config.validate()?;
    let client = RcsbClient::new(&config.rcsb)?;
    Ok(Dashboard::new(client)
        .with_entity_id(config.rcsb.entity_id)
        .with_viewport(config.viewer.viewport()))
}

/// Look up `raw` and render the summary as aligned text or pretty JSON.
pub async fn summary_output<S: StructureSource>(
    dashboard: &Dashboard<S>,
    raw: &str,
    json: bool,
) -> Result<String> {
    let id = PdbId::parse(raw).ok_or(Error::MissingIdentifier)?;
    let summary = dashboard.lookup_summary(&id).await?;
    if json {
        Ok(serde_json::to_string_pretty(&summary)?)
    } else {
        Ok(format_summary(&id, &summary))
    }
}

/// Fetch the structure for `raw` and render its scene as pretty JSON.
pub async fn scene_output<S: StructureSource>(
    dashboard: &Dashboard<S>,
    raw: &str,
    annotations_only: bool,
) -> Result<String> {
    let id = PdbId::parse(raw).ok_or(Error::MissingIdentifier)?;
    match dashboard.scene_outcome(&id).await {
        SceneOutcome::Ready(scene) if annotations_only => {
            Ok(serde_json::to_string_pretty(&scene.annotations)?)
        }
        SceneOutcome::Ready(scene) => Ok(serde_json::to_string_pretty(&scene)?),
        SceneOutcome::Unavailable { status } => Err(Error::NoStructure {
            pdb_id: id.to_string(),
            status,
        }),
        SceneOutcome::Failed(e) => Err(e.into()),
    }
}

/// Labels padded to a common width, one field per line.
pub fn format_summary(id: &PdbId, summary: &ProteinSummary) -> String {
    let fields = summary.fields();
    let width = fields.iter().map(|(label, _)| label.len()).max().unwrap_or(0);
    let mut out = format!("{:<width$}  {id}\n", "PDB ID");
    for (label, value) in fields {
        out.push_str(&format!("{label:<width$}  {value}\n"));
    }
    out.pop();
    out
}
