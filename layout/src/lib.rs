//! Room layout engine for the furnispace 2D designer.
//!
//! The engine owns one editing session: room dimensions, the wall polyline,
//! placed furniture, the viewport transform, and the gesture state machine
//! that turns pointer input into wall and furniture edits. A rendering layer
//! forwards canvas-local pointer events and draws the plain-data
//! [`render::Scene`] the engine exposes. Persistence goes through the
//! [`store::KeyValueStore`] trait so the same engine runs against an
//! in-memory map, a directory of files, or browser local storage.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`engine`] | Testable [`engine::EngineCore`] and the persisting [`engine::Engine`] |
//! | [`doc`] | Walls, furniture items, and the copy-on-write document |
//! | [`camera`] | Points and the zoom/pan viewport transform |
//! | [`snap`] | Wall angle snapping |
//! | [`catalog`] | Furniture kinds and their default footprints |
//! | [`input`] | Editor modes, keys, and the gesture state machine |
//! | [`hit`] | Hit-testing walls and furniture |
//! | [`render`] | Plain-data scene handed to the renderer |
//! | [`snapshot`] | Design snapshots and lenient decoding |
//! | [`store`] | Key-value persistence backends |
//! | [`library`] | Saved designs list |
//! | [`config`] | Engine configuration |
//! | [`consts`] | Shared numeric and color defaults |

pub mod camera;
pub mod catalog;
pub mod config;
pub mod consts;
pub mod doc;
pub mod engine;
pub mod hit;
pub mod input;
pub mod library;
pub mod render;
pub mod snap;
pub mod snapshot;
pub mod store;
