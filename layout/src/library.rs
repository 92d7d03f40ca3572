//! Saved designs library: named, timestamped design exports.
//!
//! DESIGN
//! ======
//! The library is a single JSON list under [`KEY_DESIGNS`]. Saving appends a
//! record holding the design snapshot and the renderer's raster preview;
//! nothing is ever updated in place. The list is shared with the 3D editor,
//! whose entries carry fields this crate does not model, so writes work on
//! the raw JSON entries and never re-encode anyone else's record. Only
//! `list` decodes, and it is lenient: entries that no longer decode are
//! skipped with a warning rather than hiding the rest.

#[cfg(test)]
#[path = "library_test.rs"]
mod library_test;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use time::OffsetDateTime;
use time::format_description::well_known::Rfc3339;
use tracing::{info, warn};

use crate::snapshot::DesignSnapshot;
use crate::store::{KEY_CURRENT_DESIGN, KEY_DESIGN_3D, KEY_DESIGNS, KeyValueStore, StoreError};

#[derive(Debug, thiserror::Error)]
pub enum LibraryError {
    #[error("design not found: {0}")]
    NotFound(String),
    #[error("store error: {0}")]
    Store(#[from] StoreError),
    #[error("saved designs list is unreadable: {0}")]
    Unreadable(#[source] serde_json::Error),
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("timestamp format error: {0}")]
    Timestamp(#[from] time::error::Format),
}

/// Which editor produced a saved design.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DesignKind {
    #[serde(rename = "2d")]
    TwoD,
    #[serde(rename = "3d")]
    ThreeD,
}

/// One entry in the saved designs list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SavedDesign {
    /// Creation time in unix milliseconds, as a string.
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: DesignKind,
    /// RFC 3339 creation timestamp.
    pub created_at: String,
    /// Raster preview as produced by the renderer (typically a data URL).
    pub preview: String,
    pub data: DesignSnapshot,
}

impl SavedDesign {
    /// Build a library record for `data` created at `now`.
    ///
    /// # Errors
    ///
    /// Returns an error if the timestamp cannot be formatted.
    pub fn new(
        data: DesignSnapshot,
        kind: DesignKind,
        preview: impl Into<String>,
        now: OffsetDateTime,
    ) -> Result<Self, LibraryError> {
        let millis = now.unix_timestamp_nanos() / 1_000_000;
        Ok(Self {
            id: millis.to_string(),
            name: format!("Room Design {}", now.date()),
            kind,
            created_at: now.format(&Rfc3339)?,
            preview: preview.into(),
            data,
        })
    }
}

/// All saved designs in insertion order.
///
/// # Errors
///
/// Returns an error if the store cannot be read. Undecodable content is
/// skipped, not reported.
pub fn list<S: KeyValueStore + ?Sized>(store: &S) -> Result<Vec<SavedDesign>, LibraryError> {
    let Some(raw) = store.get(KEY_DESIGNS)? else {
        return Ok(Vec::new());
    };
    let entries = match serde_json::from_str::<Vec<Value>>(&raw) {
        Ok(entries) => entries,
        Err(e) => {
            warn!(error = %e, "saved designs list is unreadable; treating as empty");
            return Ok(Vec::new());
        }
    };
    Ok(entries
        .into_iter()
        .enumerate()
        .filter_map(|(index, entry)| match serde_json::from_value::<SavedDesign>(entry) {
            Ok(design) => Some(design),
            Err(e) => {
                warn!(index, error = %e, "skipping undecodable saved design");
                None
            }
        })
        .collect())
}

/// Append `design` to the library. Existing entries are kept verbatim.
///
/// # Errors
///
/// Returns an error if the store cannot be read or written, or if the stored
/// list is unreadable (it is left untouched).
pub fn append<S: KeyValueStore + ?Sized>(store: &mut S, design: SavedDesign) -> Result<(), LibraryError> {
    let mut entries = read_entries(store)?;
    entries.push(serde_json::to_value(&design)?);
    write_entries(store, &entries)?;
    info!(id = %design.id, name = %design.name, "design saved to library");
    Ok(())
}

/// Remove the design with `id`. Returns whether anything was removed.
///
/// # Errors
///
/// Returns an error if the store cannot be read or written, or if the stored
/// list is unreadable.
pub fn delete<S: KeyValueStore + ?Sized>(store: &mut S, id: &str) -> Result<bool, LibraryError> {
    let mut entries = read_entries(store)?;
    let before = entries.len();
    entries.retain(|entry| entry_id(entry) != Some(id));
    if entries.len() == before {
        return Ok(false);
    }
    write_entries(store, &entries)?;
    info!(%id, "design deleted from library");
    Ok(true)
}

/// Open the design with `id`: record it as the current design and, for 3D
/// designs, stage its data for the 3D view. Both are written from the stored
/// entry as is.
///
/// # Errors
///
/// Returns `NotFound` if no design has `id`, an error if the entry does not
/// decode, or a store error.
pub fn open<S: KeyValueStore + ?Sized>(store: &mut S, id: &str) -> Result<SavedDesign, LibraryError> {
    let entry = read_entries(store)?
        .into_iter()
        .find(|entry| entry_id(entry) == Some(id))
        .ok_or_else(|| LibraryError::NotFound(id.to_string()))?;
    let design = serde_json::from_value::<SavedDesign>(entry.clone())?;

    store.set(KEY_CURRENT_DESIGN, &entry.to_string())?;
    if design.kind == DesignKind::ThreeD {
        let data = entry.get("data").unwrap_or(&Value::Null);
        store.set(KEY_DESIGN_3D, &data.to_string())?;
    }
    info!(%id, kind = ?design.kind, "design opened from library");
    Ok(design)
}

fn entry_id(entry: &Value) -> Option<&str> {
    entry.get("id").and_then(Value::as_str)
}

fn read_entries<S: KeyValueStore + ?Sized>(store: &S) -> Result<Vec<Value>, LibraryError> {
    match store.get(KEY_DESIGNS)? {
        Some(raw) => serde_json::from_str(&raw).map_err(LibraryError::Unreadable),
        None => Ok(Vec::new()),
    }
}

fn write_entries<S: KeyValueStore + ?Sized>(store: &mut S, entries: &[Value]) -> Result<(), LibraryError> {
    store.set(KEY_DESIGNS, &serde_json::to_string(entries)?)?;
    Ok(())
}
