//! Simulation core for a hexagonal territory-capture game.
//!
//! Mobile entities draw trails across unclaimed or enemy cells; closing a
//! trail against one's own territory converts the enclosed region, and
//! stepping on any live trail is fatal. The host owns movement, rendering
//! and timing; this crate owns the grid, the trails, the capture algorithm
//! and the collision state machine, driven one event at a time.

pub mod capture;
pub mod color;
pub mod config;
pub mod error;
pub mod game;
pub mod names;
pub mod rules;
pub mod score;
pub mod state;
pub mod trail;

pub use color::Color;
pub use config::{GridLayout, HexioConfig};
pub use error::HexioError;
pub use game::HexGame;
pub use rules::{CollisionEvent, Outcome};
pub use score::{ScoreEntry, ScoreboardSink};
pub use state::{Cell, CellCoord, Entity, EntityId, EntityKind, GameState, HexGrid};
pub use trail::TrailTracker;
