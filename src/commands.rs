//! Subcommand implementations. Each returns the JSON value to print.

#[cfg(test)]
#[path = "commands_test.rs"]
mod commands_test;

use layout::config::{ConfigError, EngineConfig};
use layout::engine::{Engine, PersistError};
use layout::library::{self, LibraryError, SavedDesign};
use layout::render::label_feet;
use layout::snapshot::DesignSnapshot;
use layout::store::{KeyValueStore, StoreError, Workspace};
use serde_json::{Value, json};
use tracing::info;

#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("nothing stored under `{0}`")]
    NothingStored(&'static str),
    #[error("room dimensions must be positive numbers, got {width} x {length}")]
    InvalidRoom { width: f64, length: f64 },
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),
    #[error("store error: {0}")]
    Store(#[from] StoreError),
    #[error("library error: {0}")]
    Library(#[from] LibraryError),
    #[error("persist error: {0}")]
    Persist(#[from] PersistError),
    #[error("invalid JSON payload: {0}")]
    InvalidJson(#[from] serde_json::Error),
}

/// Decoded design stored for `workspace`, with per-wall length labels.
pub fn show<S: KeyValueStore>(store: &S, config: &EngineConfig, workspace: Workspace) -> Result<Value, CliError> {
    let key = workspace.key();
    let raw = store.get(key)?.ok_or(CliError::NothingStored(key))?;
    let snapshot = DesignSnapshot::from_json_lenient(&raw, &config.catalog);
    let labels: Vec<String> = snapshot
        .walls
        .iter()
        .map(|w| label_feet(w.length(), config.px_per_foot))
        .collect();
    Ok(json!({
        "key": key,
        "design": snapshot,
        "wallLengths": labels,
    }))
}

/// Saved designs without their previews.
pub fn designs<S: KeyValueStore>(store: &S) -> Result<Value, CliError> {
    let listed: Vec<Value> = library::list(store)?.iter().map(summarize).collect();
    Ok(Value::Array(listed))
}

pub fn open_design<S: KeyValueStore>(store: &mut S, id: &str) -> Result<Value, CliError> {
    let design = library::open(store, id)?;
    Ok(summarize(&design))
}

pub fn delete_design<S: KeyValueStore>(store: &mut S, id: &str) -> Result<Value, CliError> {
    let deleted = library::delete(store, id)?;
    Ok(json!({ "id": id, "deleted": deleted }))
}

/// Reset the stored 2D design's room to a `width` x `length` rectangle.
pub fn reset_room<S: KeyValueStore>(
    store: S,
    config: EngineConfig,
    width: f64,
    length: f64,
) -> Result<(Value, S), CliError> {
    if !(width.is_finite() && width > 0.0 && length.is_finite() && length > 0.0) {
        return Err(CliError::InvalidRoom { width, length });
    }
    let mut engine = Engine::open(config, store);
    engine.set_room_dimensions(width, length);
    engine.persist()?;
    let snapshot = engine.snapshot();
    info!(width, length, walls = snapshot.walls.len(), "room reset from cli");
    let out = json!({
        "roomWidth": snapshot.room_width,
        "roomLength": snapshot.room_length,
        "walls": snapshot.walls.len(),
        "furniture": snapshot.furniture.len(),
    });
    Ok((out, engine.into_store()))
}

/// Stage the stored 2D design for the 3D view.
pub fn handoff<S: KeyValueStore>(store: S, config: EngineConfig) -> Result<(Value, S), CliError> {
    let mut engine = Engine::open(config, store);
    let handoff = engine.switch_to_3d()?;
    let out = json!({
        "key": Workspace::ThreeD.key(),
        "walls": handoff.design.walls.len(),
        "wallVisibility": handoff.wall_visibility,
    });
    Ok((out, engine.into_store()))
}

fn summarize(design: &SavedDesign) -> Value {
    json!({
        "id": design.id,
        "name": design.name,
        "type": design.kind,
        "createdAt": design.created_at,
        "walls": design.data.walls.len(),
        "furniture": design.data.furniture.len(),
    })
}
