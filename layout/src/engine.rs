//! Layout engine: one editing session and its persisting wrapper.
//!
//! DESIGN
//! ======
//! `EngineCore` holds all session state and logic and has no I/O, so it is
//! tested directly. Handlers take canvas-local screen points, convert them
//! through the camera, and return the [`Action`]s that describe what changed.
//! `Engine` wraps a core together with a [`KeyValueStore`] and writes the
//! session back after every mutating action. Those writes are best effort:
//! a failed write is logged and editing continues.

#[cfg(test)]
#[path = "engine_test.rs"]
mod engine_test;

use time::OffsetDateTime;
use tracing::{debug, error, info, warn};

use crate::camera::{Camera, Point};
use crate::catalog::FurnitureKind;
use crate::config::{EngineConfig, ResizePolicy};
use crate::doc::{Bounds, FurnitureId, FurnitureItem, LayoutDoc, RoomDimensions, Wall, WallId, new_id, rectangle_walls};
use crate::hit::{Hit, hit_test, hit_wall};
use crate::input::{Direction, InputState, Key, Mode, UiState};
use crate::library::{self, DesignKind, LibraryError, SavedDesign};
use crate::render::{Scene, WallPreview, room_outline};
use crate::snap::snap_segment;
use crate::snapshot::{DesignSnapshot, HandoffSnapshot};
use crate::store::{KEY_DESIGN_2D, KEY_DESIGN_3D, KEY_WALL_CONFIG, KeyValueStore, StoreError};

/// What a handler changed, for the host to react to.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    WallAdded(Wall),
    WallUpdated(Wall),
    WallDeleted { id: WallId },
    FurnitureAdded(FurnitureItem),
    FurnitureUpdated(FurnitureItem),
    FurnitureDeleted { id: FurnitureId },
    /// Room dimensions, floor color, or the whole wall list changed.
    RoomChanged,
    SelectionChanged,
    ViewportChanged,
    /// Transient state (preview, mode) changed; redraw only.
    RenderNeeded,
}

impl Action {
    /// Whether this action changed persisted design state.
    #[must_use]
    pub fn is_mutation(&self) -> bool {
        matches!(
            self,
            Self::WallAdded(_)
                | Self::WallUpdated(_)
                | Self::WallDeleted { .. }
                | Self::FurnitureAdded(_)
                | Self::FurnitureUpdated(_)
                | Self::FurnitureDeleted { .. }
                | Self::RoomChanged
        )
    }
}

#[derive(Debug, thiserror::Error)]
pub enum PersistError {
    #[error("store error: {0}")]
    Store(#[from] StoreError),
    #[error("encode error: {0}")]
    Encode(#[from] serde_json::Error),
}

// =============================================================================
// CORE
// =============================================================================

/// Session state and logic for one design.
#[derive(Debug, Clone)]
pub struct EngineCore {
    pub doc: LayoutDoc,
    pub camera: Camera,
    pub ui: UiState,
    pub input: InputState,
    pub config: EngineConfig,
    /// Last accepted room dimensions, in feet.
    pub room: RoomDimensions,
    pub floor_color: String,
    /// Last pointer position in model space, for the wall preview.
    pointer: Option<Point>,
}

impl Default for EngineCore {
    fn default() -> Self {
        Self::new(EngineConfig::default())
    }
}

impl EngineCore {
    /// Fresh session: default room dimensions and their four walls.
    #[must_use]
    pub fn new(config: EngineConfig) -> Self {
        let room = RoomDimensions::default();
        let mut doc = LayoutDoc::new();
        doc.set_walls(room_walls(&config, room));
        let floor_color = config.floor_color.clone();
        Self {
            doc,
            camera: Camera::default(),
            ui: UiState::default(),
            input: InputState::default(),
            config,
            room,
            floor_color,
            pointer: None,
        }
    }

    /// Session restored from a snapshot. Walls and furniture are taken as
    /// stored, including an empty wall list.
    #[must_use]
    pub fn from_snapshot(config: EngineConfig, snapshot: DesignSnapshot) -> Self {
        let mut core = Self::new(config);
        core.room = RoomDimensions { width: snapshot.room_width, length: snapshot.room_length };
        core.floor_color = snapshot.floor_color;
        core.doc.set_walls(snapshot.walls);
        core.doc.set_furniture(snapshot.furniture);
        core
    }

    /// Current design as a snapshot.
    #[must_use]
    pub fn snapshot(&self) -> DesignSnapshot {
        DesignSnapshot {
            room_width: self.room.width,
            room_length: self.room.length,
            floor_color: self.floor_color.clone(),
            walls: self.doc.walls().to_vec(),
            furniture: self.doc.furniture().to_vec(),
        }
    }

    // --- Queries ---

    #[must_use]
    pub fn mode(&self) -> Mode {
        self.ui.mode
    }

    #[must_use]
    pub fn selected_wall(&self) -> Option<WallId> {
        self.ui.selected_wall
    }

    #[must_use]
    pub fn selected_furniture(&self) -> Option<FurnitureId> {
        self.ui.selected_furniture
    }

    #[must_use]
    pub fn camera(&self) -> Camera {
        self.camera
    }

    /// Room bounds used to contain furniture.
    #[must_use]
    pub fn bounds(&self) -> Bounds {
        self.doc.bounds(self.config.canvas_width, self.config.canvas_height)
    }

    /// Room size in feet as measured from the wall bounds.
    #[must_use]
    pub fn room_dimensions_from_walls(&self) -> RoomDimensions {
        let b = self.bounds();
        RoomDimensions { width: self.config.px_to_feet(b.width()), length: self.config.px_to_feet(b.height()) }
    }

    /// Snapped preview of the wall being added, if one is pending.
    #[must_use]
    pub fn preview_wall(&self) -> Option<WallPreview> {
        let InputState::PendingWall { start } = self.input else {
            return None;
        };
        let pointer = self.pointer?;
        Some(WallPreview::new(start, pointer, self.config.snap_tolerance_deg, self.config.px_per_foot))
    }

    /// Plain-data scene for the renderer.
    #[must_use]
    pub fn scene(&self) -> Scene {
        Scene {
            walls: self.doc.walls().clone(),
            furniture: self.doc.furniture().clone(),
            floor_color: self.floor_color.clone(),
            selected_wall: self.ui.selected_wall,
            selected_furniture: self.ui.selected_furniture,
            preview: self.preview_wall(),
            outline: room_outline(self.doc.walls()),
            bounds: self.bounds(),
            camera: self.camera,
            wall_thickness: self.config.wall_thickness_px,
            px_per_foot: self.config.px_per_foot,
        }
    }

    // --- Mode ---

    /// Switch editing mode. Any gesture in progress, including a pending
    /// wall, is abandoned.
    pub fn set_mode(&mut self, mode: Mode) -> Vec<Action> {
        if self.ui.mode == mode {
            return Vec::new();
        }
        debug!(from = ?self.ui.mode, to = ?mode, "mode changed");
        self.ui.mode = mode;
        self.input = InputState::Idle;
        self.pointer = None;
        vec![Action::RenderNeeded]
    }

    /// Abandon a pending wall.
    pub fn cancel(&mut self) -> Vec<Action> {
        if !matches!(self.input, InputState::PendingWall { .. }) {
            return Vec::new();
        }
        debug!("pending wall abandoned");
        self.input = InputState::Idle;
        self.pointer = None;
        vec![Action::RenderNeeded]
    }

    // --- Pointer input ---

    /// Click on the canvas. In `AddWalls` the first click records the wall
    /// start and the second finalizes the snapped wall.
    pub fn on_click(&mut self, screen_pt: Point) -> Vec<Action> {
        if self.ui.mode != Mode::AddWalls {
            return Vec::new();
        }
        if !screen_pt.is_finite() {
            warn!(x = screen_pt.x, y = screen_pt.y, "ignoring non-finite click");
            return Vec::new();
        }
        let world = self.camera.screen_to_world(screen_pt);
        self.pointer = Some(world);

        match self.input {
            InputState::PendingWall { start } => {
                let snapped = snap_segment(start, world, self.config.snap_tolerance_deg);
                let wall = Wall::new(start, snapped.end, self.config.wall_color.as_str());
                info!(id = %wall.id(), length = wall.length(), axis = ?snapped.axis, "wall added");
                self.doc.push_wall(wall.clone());
                self.input = InputState::Idle;
                vec![Action::WallAdded(wall)]
            }
            _ => {
                self.input = InputState::PendingWall { start: world };
                vec![Action::RenderNeeded]
            }
        }
    }

    pub fn on_pointer_down(&mut self, screen_pt: Point) -> Vec<Action> {
        if !screen_pt.is_finite() {
            warn!(x = screen_pt.x, y = screen_pt.y, "ignoring non-finite pointer down");
            return Vec::new();
        }
        let world = self.camera.screen_to_world(screen_pt);
        match self.ui.mode {
            Mode::AddWalls => Vec::new(),
            Mode::MoveWalls => self.begin_wall_drag(world),
            Mode::DeleteWalls => self.delete_wall_at(world),
            Mode::Furniture => self.furniture_pointer_down(world, screen_pt),
        }
    }

    pub fn on_pointer_move(&mut self, screen_pt: Point) -> Vec<Action> {
        if !screen_pt.is_finite() {
            return Vec::new();
        }
        let world = self.camera.screen_to_world(screen_pt);
        self.pointer = Some(world);

        match self.input {
            InputState::Idle => Vec::new(),
            InputState::PendingWall { .. } => vec![Action::RenderNeeded],
            InputState::DraggingWall { id, orig_start, orig_end } => self.drag_wall(id, orig_start, orig_end, world),
            InputState::Panning { last_screen } => {
                self.camera.pan_by_screen(screen_pt.x - last_screen.x, screen_pt.y - last_screen.y);
                self.input = InputState::Panning { last_screen: screen_pt };
                vec![Action::ViewportChanged]
            }
        }
    }

    /// End a wall drag or pan. A pending wall survives pointer-up.
    pub fn on_pointer_up(&mut self, _screen_pt: Point) -> Vec<Action> {
        match self.input {
            InputState::DraggingWall { .. } | InputState::Panning { .. } => {
                self.input = InputState::Idle;
                vec![Action::RenderNeeded]
            }
            InputState::Idle | InputState::PendingWall { .. } => Vec::new(),
        }
    }

    /// `Escape` abandons a pending wall. In `Furniture` mode, arrow keys step
    /// the selected item and `Delete`/`Backspace` remove it.
    pub fn on_key_down(&mut self, key: &Key) -> Vec<Action> {
        if key.is_escape() {
            return self.cancel();
        }
        if self.ui.mode != Mode::Furniture {
            return Vec::new();
        }
        if let Some(direction) = key.direction() {
            return self.move_selected(direction);
        }
        if key.is_delete() {
            return self.delete_selected();
        }
        Vec::new()
    }

    fn begin_wall_drag(&mut self, world: Point) -> Vec<Action> {
        let hit = hit_wall(world, &self.doc, &self.camera, self.config.wall_thickness_px);
        let Some(wall) = hit.and_then(|id| self.doc.wall(&id)) else {
            return self.clear_wall_selection();
        };
        let (id, orig_start, orig_end) = (wall.id(), wall.start(), wall.end());
        self.ui.selected_wall = Some(id);
        self.ui.selected_furniture = None;
        self.input = InputState::DraggingWall { id, orig_start, orig_end };
        debug!(%id, "wall drag started");
        vec![Action::SelectionChanged]
    }

    fn drag_wall(&mut self, id: WallId, orig_start: Point, orig_end: Point, world: Point) -> Vec<Action> {
        let mid = orig_start.midpoint(orig_end);
        let (dx, dy) = (world.x - mid.x, world.y - mid.y);
        let max_x = self.config.canvas_width / self.camera.zoom;
        let max_y = self.config.canvas_height / self.camera.zoom;
        let clamp = |p: Point| Point::new((p.x + dx).clamp(0.0, max_x), (p.y + dy).clamp(0.0, max_y));
        let (start, end) = (clamp(orig_start), clamp(orig_end));

        match self.doc.update_wall(&id, |w| w.set_endpoints(start, end)) {
            Some(wall) => vec![Action::WallUpdated(wall.clone())],
            None => {
                debug!(%id, "dragged wall no longer exists");
                self.input = InputState::Idle;
                Vec::new()
            }
        }
    }

    fn delete_wall_at(&mut self, world: Point) -> Vec<Action> {
        let hit = hit_wall(world, &self.doc, &self.camera, self.config.wall_thickness_px);
        let Some(wall) = hit.and_then(|id| self.doc.remove_wall(&id)) else {
            return self.clear_wall_selection();
        };
        let id = wall.id();
        info!(%id, "wall deleted");
        self.ui.selected_wall = None;
        vec![Action::WallDeleted { id }, Action::SelectionChanged]
    }

    fn clear_wall_selection(&mut self) -> Vec<Action> {
        if self.ui.selected_wall.take().is_some() {
            vec![Action::SelectionChanged]
        } else {
            Vec::new()
        }
    }

    fn furniture_pointer_down(&mut self, world: Point, screen_pt: Point) -> Vec<Action> {
        let hit = hit_test(world, &self.doc, &self.camera, self.config.px_per_foot, self.config.wall_thickness_px);
        match hit {
            Some(Hit::Furniture(id)) => self.select_furniture(id),
            // Walls are inert in furniture mode.
            Some(Hit::Wall(_)) => Vec::new(),
            None => {
                self.input = InputState::Panning { last_screen: screen_pt };
                Vec::new()
            }
        }
    }

    // --- Furniture ---

    /// Add a catalog item centred in the visible canvas. Selection is
    /// unchanged.
    pub fn add_furniture(&mut self, kind: FurnitureKind) -> Vec<Action> {
        let dims = self.config.catalog.dimensions(kind);
        let width_px = self.config.feet_to_px(dims.width);
        let length_px = self.config.feet_to_px(dims.length);
        let item = FurnitureItem {
            id: new_id(),
            kind,
            x: self.config.canvas_width / 2.0 / self.camera.zoom - self.camera.pan_x - width_px / 2.0,
            y: self.config.canvas_height / 2.0 / self.camera.zoom - self.camera.pan_y - length_px / 2.0,
            width: dims.width,
            length: dims.length,
            color: self.config.furniture_color.clone(),
            rotation: None,
        };
        info!(id = %item.id, %kind, x = item.x, y = item.y, "furniture added");
        self.doc.push_item(item.clone());
        vec![Action::FurnitureAdded(item)]
    }

    /// Select a furniture item, deselecting any wall.
    pub fn select_furniture(&mut self, id: FurnitureId) -> Vec<Action> {
        if self.doc.item(&id).is_none() {
            debug!(%id, "select: no such furniture item");
            return Vec::new();
        }
        if self.ui.selected_furniture == Some(id) && self.ui.selected_wall.is_none() {
            return Vec::new();
        }
        self.ui.selected_furniture = Some(id);
        self.ui.selected_wall = None;
        vec![Action::SelectionChanged]
    }

    /// Step the selected item one increment, then clamp it inside the room.
    pub fn move_selected(&mut self, direction: Direction) -> Vec<Action> {
        let Some(id) = self.ui.selected_furniture else {
            debug!(?direction, "move: nothing selected");
            return Vec::new();
        };
        let step = self.config.feet_to_px(self.config.step_feet);
        let (ux, uy) = direction.unit();
        let bounds = self.bounds();
        let px_per_foot = self.config.px_per_foot;

        let updated = self.doc.update_item(&id, |item| {
            let (x, y) = bounds.clamp_rect(
                item.x + ux * step,
                item.y + uy * step,
                item.width_px(px_per_foot),
                item.length_px(px_per_foot),
            );
            item.x = x;
            item.y = y;
        });
        match updated {
            Some(item) => {
                debug!(%id, ?direction, x = item.x, y = item.y, "furniture moved");
                vec![Action::FurnitureUpdated(item.clone())]
            }
            None => {
                debug!(%id, "move: selected item no longer exists");
                Vec::new()
            }
        }
    }

    /// Set the selected item's size in feet, subject to the resize policy.
    /// Non-finite or non-positive sizes are ignored.
    pub fn resize_selected(&mut self, width: f64, length: f64) -> Vec<Action> {
        if !(width.is_finite() && width > 0.0 && length.is_finite() && length > 0.0) {
            warn!(width, length, "resize: ignoring invalid size");
            return Vec::new();
        }
        let Some(id) = self.ui.selected_furniture else {
            debug!("resize: nothing selected");
            return Vec::new();
        };
        let Some(current) = self.doc.item(&id) else {
            debug!(%id, "resize: selected item no longer exists");
            return Vec::new();
        };

        let bounds = self.bounds();
        let width_px = self.config.feet_to_px(width);
        let length_px = self.config.feet_to_px(length);
        let policy = self.config.resize_policy;
        if policy == ResizePolicy::Reject && !bounds.contains_rect(current.x, current.y, width_px, length_px) {
            warn!(%id, width, length, "resize rejected: item would not fit the room");
            return Vec::new();
        }

        let updated = self.doc.update_item(&id, |item| {
            item.width = width;
            item.length = length;
            if policy == ResizePolicy::Clamp {
                let (x, y) = bounds.clamp_rect(item.x, item.y, width_px, length_px);
                item.x = x;
                item.y = y;
            }
        });
        updated.map_or_else(Vec::new, |item| {
            debug!(%id, width, length, ?policy, "furniture resized");
            vec![Action::FurnitureUpdated(item.clone())]
        })
    }

    /// Resize from operator text. Unparsable input is ignored.
    pub fn resize_selected_input(&mut self, width: &str, length: &str) -> Vec<Action> {
        self.resize_selected(parse_or_nan(width), parse_or_nan(length))
    }

    pub fn recolor_selected(&mut self, color: &str) -> Vec<Action> {
        let color = color.trim();
        if color.is_empty() {
            warn!("recolor: ignoring empty color");
            return Vec::new();
        }
        let Some(id) = self.ui.selected_furniture else {
            debug!("recolor: nothing selected");
            return Vec::new();
        };
        self.doc
            .update_item(&id, |item| item.color = color.to_string())
            .map_or_else(Vec::new, |item| vec![Action::FurnitureUpdated(item.clone())])
    }

    /// Remove the selected item and clear the selection.
    pub fn delete_selected(&mut self) -> Vec<Action> {
        let Some(id) = self.ui.selected_furniture.take() else {
            debug!("delete: nothing selected");
            return Vec::new();
        };
        if self.doc.remove_item(&id).is_none() {
            debug!(%id, "delete: selected item no longer exists");
            return vec![Action::SelectionChanged];
        }
        info!(%id, "furniture deleted");
        vec![Action::FurnitureDeleted { id }, Action::SelectionChanged]
    }

    // --- Viewport ---

    pub fn zoom_in(&mut self) -> Vec<Action> {
        let before = self.camera.zoom;
        self.camera.zoom_in();
        self.viewport_changed(before)
    }

    pub fn zoom_out(&mut self) -> Vec<Action> {
        let before = self.camera.zoom;
        self.camera.zoom_out();
        self.viewport_changed(before)
    }

    #[allow(clippy::float_cmp)]
    fn viewport_changed(&self, before: f64) -> Vec<Action> {
        if self.camera.zoom == before {
            Vec::new()
        } else {
            debug!(zoom = self.camera.zoom, "zoom changed");
            vec![Action::ViewportChanged]
        }
    }

    // --- Room ---

    /// Set the room size in feet and reset the walls to a rectangle of that
    /// size. An unusable value keeps the last accepted one for that side;
    /// when neither side is usable nothing changes.
    pub fn set_room_dimensions(&mut self, width: f64, length: f64) -> Vec<Action> {
        let width_ok = width.is_finite() && width > 0.0;
        let length_ok = length.is_finite() && length > 0.0;
        if !width_ok {
            warn!(width, kept = self.room.width, "room width invalid; keeping last value");
        }
        if !length_ok {
            warn!(length, kept = self.room.length, "room length invalid; keeping last value");
        }
        if !width_ok && !length_ok {
            return Vec::new();
        }
        if width_ok {
            self.room.width = width;
        }
        if length_ok {
            self.room.length = length;
        }

        self.doc.set_walls(room_walls(&self.config, self.room));
        self.ui.selected_wall = None;
        if matches!(self.input, InputState::DraggingWall { .. }) {
            self.input = InputState::Idle;
        }
        info!(width = self.room.width, length = self.room.length, "room reset");
        vec![Action::RoomChanged]
    }

    /// Set the room size from operator text.
    pub fn set_room_dimensions_input(&mut self, width: &str, length: &str) -> Vec<Action> {
        self.set_room_dimensions(parse_or_nan(width), parse_or_nan(length))
    }

    pub fn set_floor_color(&mut self, color: &str) -> Vec<Action> {
        let color = color.trim();
        if color.is_empty() || color == self.floor_color {
            return Vec::new();
        }
        self.floor_color = color.to_string();
        vec![Action::RoomChanged]
    }
}

fn room_walls(config: &EngineConfig, room: RoomDimensions) -> Vec<Wall> {
    rectangle_walls(
        config.feet_to_px(room.width),
        config.feet_to_px(room.length),
        config.canvas_width,
        config.canvas_height,
        &config.wall_color,
    )
}

fn parse_or_nan(raw: &str) -> f64 {
    raw.trim().parse::<f64>().unwrap_or(f64::NAN)
}

// =============================================================================
// PERSISTING ENGINE
// =============================================================================

/// An engine session bound to a key-value store.
pub struct Engine<S: KeyValueStore> {
    pub core: EngineCore,
    store: S,
}

impl<S: KeyValueStore> Engine<S> {
    /// Start a fresh session. Nothing is written until the first edit.
    pub fn new(config: EngineConfig, store: S) -> Self {
        Self { core: EngineCore::new(config), store }
    }

    /// Restore the session stored under the 2D key, or start fresh when
    /// there is none or it cannot be read.
    pub fn open(config: EngineConfig, store: S) -> Self {
        let stored = match store.get(KEY_DESIGN_2D) {
            Ok(stored) => stored,
            Err(e) => {
                warn!(error = %e, "could not read stored design; starting fresh");
                None
            }
        };
        let core = match stored {
            Some(raw) => {
                let snapshot = DesignSnapshot::from_json_lenient(&raw, &config.catalog);
                info!(walls = snapshot.walls.len(), furniture = snapshot.furniture.len(), "design restored");
                EngineCore::from_snapshot(config, snapshot)
            }
            None => EngineCore::new(config),
        };
        Self { core, store }
    }

    #[must_use]
    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn into_store(self) -> S {
        self.store
    }

    /// Write the 2D snapshot and the wall list.
    ///
    /// # Errors
    ///
    /// Returns an error if encoding or the store write fails.
    pub fn persist(&mut self) -> Result<(), PersistError> {
        let snapshot = self.core.snapshot();
        self.store.set(KEY_DESIGN_2D, &snapshot.to_json()?)?;
        self.store.set(KEY_WALL_CONFIG, &serde_json::to_string(&snapshot.walls)?)?;
        Ok(())
    }

    /// Stage the current design for the 3D view: furniture is dropped and
    /// every wall starts visible.
    ///
    /// # Errors
    ///
    /// Returns an error if encoding or the store write fails.
    pub fn switch_to_3d(&mut self) -> Result<HandoffSnapshot, PersistError> {
        let handoff = self.core.snapshot().to_handoff();
        self.store.set(KEY_DESIGN_3D, &serde_json::to_string(&handoff)?)?;
        info!(walls = handoff.design.walls.len(), "design handed off to 3D");
        Ok(handoff)
    }

    /// Append the current design to the saved designs library.
    ///
    /// # Errors
    ///
    /// Returns an error if the library cannot be read or written.
    pub fn save_design(&mut self, preview: &str) -> Result<SavedDesign, LibraryError> {
        self.save_design_at(preview, OffsetDateTime::now_utc())
    }

    /// [`Self::save_design`] with an explicit creation time.
    ///
    /// # Errors
    ///
    /// Returns an error if the library cannot be read or written.
    pub fn save_design_at(&mut self, preview: &str, now: OffsetDateTime) -> Result<SavedDesign, LibraryError> {
        let design = SavedDesign::new(self.core.snapshot(), DesignKind::TwoD, preview, now)?;
        library::append(&mut self.store, design.clone())?;
        Ok(design)
    }

    fn after(&mut self, actions: Vec<Action>) -> Vec<Action> {
        if actions.iter().any(Action::is_mutation) {
            if let Err(e) = self.persist() {
                error!(error = %e, "failed to persist design");
            }
        }
        actions
    }

    // --- Delegated handlers ---

    pub fn set_mode(&mut self, mode: Mode) -> Vec<Action> {
        self.core.set_mode(mode)
    }

    pub fn cancel(&mut self) -> Vec<Action> {
        self.core.cancel()
    }

    pub fn on_click(&mut self, screen_pt: Point) -> Vec<Action> {
        let actions = self.core.on_click(screen_pt);
        self.after(actions)
    }

    pub fn on_pointer_down(&mut self, screen_pt: Point) -> Vec<Action> {
        let actions = self.core.on_pointer_down(screen_pt);
        self.after(actions)
    }

    pub fn on_pointer_move(&mut self, screen_pt: Point) -> Vec<Action> {
        let actions = self.core.on_pointer_move(screen_pt);
        self.after(actions)
    }

    pub fn on_pointer_up(&mut self, screen_pt: Point) -> Vec<Action> {
        self.core.on_pointer_up(screen_pt)
    }

    pub fn on_key_down(&mut self, key: &Key) -> Vec<Action> {
        let actions = self.core.on_key_down(key);
        self.after(actions)
    }

    pub fn add_furniture(&mut self, kind: FurnitureKind) -> Vec<Action> {
        let actions = self.core.add_furniture(kind);
        self.after(actions)
    }

    pub fn select_furniture(&mut self, id: FurnitureId) -> Vec<Action> {
        self.core.select_furniture(id)
    }

    pub fn move_selected(&mut self, direction: Direction) -> Vec<Action> {
        let actions = self.core.move_selected(direction);
        self.after(actions)
    }

    pub fn resize_selected(&mut self, width: f64, length: f64) -> Vec<Action> {
        let actions = self.core.resize_selected(width, length);
        self.after(actions)
    }

    pub fn resize_selected_input(&mut self, width: &str, length: &str) -> Vec<Action> {
        let actions = self.core.resize_selected_input(width, length);
        self.after(actions)
    }

    pub fn recolor_selected(&mut self, color: &str) -> Vec<Action> {
        let actions = self.core.recolor_selected(color);
        self.after(actions)
    }

    pub fn delete_selected(&mut self) -> Vec<Action> {
        let actions = self.core.delete_selected();
        self.after(actions)
    }

    pub fn zoom_in(&mut self) -> Vec<Action> {
        self.core.zoom_in()
    }

    pub fn zoom_out(&mut self) -> Vec<Action> {
        self.core.zoom_out()
    }

    pub fn set_room_dimensions(&mut self, width: f64, length: f64) -> Vec<Action> {
        let actions = self.core.set_room_dimensions(width, length);
        self.after(actions)
    }

    pub fn set_room_dimensions_input(&mut self, width: &str, length: &str) -> Vec<Action> {
        let actions = self.core.set_room_dimensions_input(width, length);
        self.after(actions)
    }

    pub fn set_floor_color(&mut self, color: &str) -> Vec<Action> {
        let actions = self.core.set_floor_color(color);
        self.after(actions)
    }

    // --- Queries ---

    #[must_use]
    pub fn scene(&self) -> Scene {
        self.core.scene()
    }

    #[must_use]
    pub fn snapshot(&self) -> DesignSnapshot {
        self.core.snapshot()
    }
}
