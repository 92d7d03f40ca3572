//! Design snapshots: the unit of persistence and export.
//!
//! DESIGN
//! ======
//! A snapshot is written wholesale as camelCase JSON. Reading is lenient:
//! stored data may come from older builds or be hand-edited, so each field is
//! decoded on its own and falls back to its default instead of failing the
//! whole load. Every fallback is logged so recovery is visible.

#[cfg(test)]
#[path = "snapshot_test.rs"]
mod snapshot_test;

use std::collections::BTreeMap;

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use tracing::{debug, warn};
use uuid::Uuid;

use crate::camera::Point;
use crate::catalog::{Catalog, FurnitureKind};
use crate::consts::{DEFAULT_ROOM_LENGTH_FT, DEFAULT_ROOM_WIDTH_FT, FLOOR_COLOR, FURNITURE_COLOR, WALL_COLOR};
use crate::doc::{FurnitureItem, Wall, WallId, new_id};

/// Full serializable state of one design.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DesignSnapshot {
    /// Room width in feet.
    pub room_width: f64,
    /// Room length in feet.
    pub room_length: f64,
    pub floor_color: String,
    pub walls: Vec<Wall>,
    pub furniture: Vec<FurnitureItem>,
}

impl Default for DesignSnapshot {
    fn default() -> Self {
        Self {
            room_width: DEFAULT_ROOM_WIDTH_FT,
            room_length: DEFAULT_ROOM_LENGTH_FT,
            floor_color: FLOOR_COLOR.to_string(),
            walls: Vec::new(),
            furniture: Vec::new(),
        }
    }
}

impl<'de> Deserialize<'de> for DesignSnapshot {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        Ok(decode_lenient(&value, &Catalog::default()))
    }
}

impl DesignSnapshot {
    /// Encode as JSON.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// Decode stored JSON, falling back to defaults for anything unusable.
    #[must_use]
    pub fn from_json_lenient(raw: &str, catalog: &Catalog) -> Self {
        match serde_json::from_str::<Value>(raw) {
            Ok(value) => decode_lenient(&value, catalog),
            Err(e) => {
                warn!(error = %e, "stored design is not valid JSON; using defaults");
                Self::default()
            }
        }
    }

    /// Snapshot handed to the 3D view: furniture is reset and every wall
    /// starts visible.
    #[must_use]
    pub fn to_handoff(&self) -> HandoffSnapshot {
        HandoffSnapshot {
            design: Self { furniture: Vec::new(), ..self.clone() },
            wall_visibility: self.walls.iter().map(|w| (w.id(), true)).collect(),
        }
    }
}

/// Design data passed from the 2D editor to the 3D scene.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HandoffSnapshot {
    #[serde(flatten)]
    pub design: DesignSnapshot,
    pub wall_visibility: BTreeMap<WallId, bool>,
}

// =============================================================================
// LENIENT DECODING
// =============================================================================

/// Decode a snapshot field by field.
#[must_use]
pub fn decode_lenient(value: &Value, catalog: &Catalog) -> DesignSnapshot {
    let defaults = DesignSnapshot::default();
    if !value.is_object() {
        warn!("stored design is not an object; using defaults");
        return defaults;
    }

    let room_width = positive_field(value, "roomWidth", defaults.room_width);
    let room_length = positive_field(value, "roomLength", defaults.room_length);
    let floor_color = string_field(value, "floorColor", &defaults.floor_color);

    let walls = array_field(value, "walls")
        .iter()
        .enumerate()
        .filter_map(|(index, v)| decode_wall(index, v))
        .collect();
    let furniture = array_field(value, "furniture")
        .iter()
        .enumerate()
        .filter_map(|(index, v)| decode_item(index, v, catalog))
        .collect();

    DesignSnapshot { room_width, room_length, floor_color, walls, furniture }
}

fn positive_field(value: &Value, key: &str, default: f64) -> f64 {
    match value.get(key) {
        None | Some(Value::Null) => {
            debug!(field = key, default, "field missing; using default");
            default
        }
        Some(v) => match v.as_f64() {
            Some(n) if n.is_finite() && n > 0.0 => n,
            _ => {
                warn!(field = key, value = %v, default, "invalid number; using default");
                default
            }
        },
    }
}

fn string_field(value: &Value, key: &str, default: &str) -> String {
    match value.get(key) {
        Some(Value::String(s)) => s.clone(),
        None | Some(Value::Null) => default.to_string(),
        Some(v) => {
            warn!(field = key, value = %v, default, "invalid string; using default");
            default.to_string()
        }
    }
}

fn array_field<'a>(value: &'a Value, key: &str) -> &'a [Value] {
    match value.get(key) {
        Some(Value::Array(items)) => items,
        None | Some(Value::Null) => &[],
        Some(v) => {
            warn!(field = key, value = %v, "expected a list; treating as empty");
            &[]
        }
    }
}

fn decode_point(value: Option<&Value>) -> Option<Point> {
    let v = value?;
    let p = Point::new(v.get("x")?.as_f64()?, v.get("y")?.as_f64()?);
    p.is_finite().then_some(p)
}

/// Stored ids may be UUID strings or legacy numbers. Anything that isn't a
/// UUID gets a fresh id.
fn decode_id(value: Option<&Value>, index: usize, what: &'static str) -> Uuid {
    if let Some(id) = value.and_then(Value::as_str).and_then(|s| Uuid::parse_str(s).ok()) {
        return id;
    }
    warn!(index, what, raw = ?value, "missing or non-uuid id; assigning a new one");
    new_id()
}

fn decode_wall(index: usize, value: &Value) -> Option<Wall> {
    let (Some(start), Some(end)) = (decode_point(value.get("start")), decode_point(value.get("end"))) else {
        warn!(index, "dropping wall without valid endpoints");
        return None;
    };
    let id = decode_id(value.get("id"), index, "wall");
    let color = value.get("color").and_then(Value::as_str).unwrap_or(WALL_COLOR);
    let wall = Wall::with_id(id, start, end, color);
    if let Some(stored) = value.get("length").and_then(Value::as_f64) {
        if (stored - wall.length()).abs() > 1e-6 {
            debug!(index, stored, actual = wall.length(), "stale wall length recomputed");
        }
    }
    Some(wall)
}

fn decode_item(index: usize, value: &Value, catalog: &Catalog) -> Option<FurnitureItem> {
    let Some(kind) = value.get("type").and_then(Value::as_str).and_then(FurnitureKind::from_name) else {
        warn!(index, raw = ?value.get("type"), "dropping furniture item of unknown type");
        return None;
    };
    let (Some(x), Some(y)) = (finite(value.get("x")), finite(value.get("y"))) else {
        warn!(index, %kind, "dropping furniture item without a valid position");
        return None;
    };

    let defaults = catalog.dimensions(kind);
    let width = positive_or(value.get("width"), defaults.width, index, "width");
    let length = positive_or(value.get("length"), defaults.length, index, "length");

    Some(FurnitureItem {
        id: decode_id(value.get("id"), index, "furniture"),
        kind,
        x,
        y,
        width,
        length,
        color: value
            .get("color")
            .and_then(Value::as_str)
            .unwrap_or(FURNITURE_COLOR)
            .to_string(),
        rotation: finite(value.get("rotation")),
    })
}

fn finite(value: Option<&Value>) -> Option<f64> {
    value.and_then(Value::as_f64).filter(|n| n.is_finite())
}

fn positive_or(value: Option<&Value>, default: f64, index: usize, field: &'static str) -> f64 {
    match finite(value) {
        Some(n) if n > 0.0 => n,
        _ => {
            warn!(index, field, default, "invalid furniture size; using catalog default");
            default
        }
    }
}
