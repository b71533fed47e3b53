use crate::color::Color;
use crate::config::HexioConfig;
use crate::error::HexioError;
use crate::rules::{self, CollisionEvent, Outcome};
use crate::score::{self, ScoreEntry, ScoreboardSink};
use crate::state::{CellCoord, Entity, EntityId, EntityKind, GameState};

/// Owns the simulation state and is the host's single point of contact.
///
/// The host (movement/physics, rendering) feeds collision events in and
/// reads cell state and scoreboard out; all dependencies are passed in at
/// construction, there is no ambient global state.
pub struct HexGame {
    state: GameState,
    config: HexioConfig,
    next_entity_id: EntityId,
    sink: Option<Box<dyn ScoreboardSink>>,
}

impl HexGame {
    pub fn new() -> Self {
        Self::with_config(HexioConfig::default())
    }

    pub fn with_config(config: HexioConfig) -> Self {
        Self {
            state: GameState::new(config.grid_width, config.grid_height, config.layout),
            config,
            next_entity_id: 1,
            sink: None,
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut GameState {
        &mut self.state
    }

    pub fn config(&self) -> &HexioConfig {
        &self.config
    }

    /// Install the presentation hook notified on every ownership change.
    pub fn set_scoreboard_sink(&mut self, sink: Box<dyn ScoreboardSink>) {
        self.sink = Some(sink);
    }

    /// Register an entity and seed its starting area: the spawn cell plus
    /// its up-to-six neighbors become owned, captured territory.
    pub fn spawn_entity(
        &mut self,
        name: impl Into<String>,
        color: Color,
        kind: EntityKind,
        at: CellCoord,
    ) -> Result<EntityId, HexioError> {
        if !self.state.grid.in_bounds(at) {
            return Err(HexioError::InvalidCoordinate(at));
        }

        self.state.grid.claim(at, color);
        for neighbor in self.state.grid.neighbors(at) {
            self.state.grid.claim(neighbor, color);
        }

        let id = self.next_entity_id;
        self.next_entity_id += 1;
        let name = name.into();
        tracing::info!("entity {} ({}, {}) spawned at ({}, {})", id, name, color, at.x, at.y);
        self.state.entities.insert(id, Entity::new(id, name, color, kind));

        self.notify_scoreboard();
        Ok(id)
    }

    /// Resolve one collision event; the single entry point per event.
    pub fn handle_collision(&mut self, event: CollisionEvent) -> Outcome {
        let outcome = rules::handle(&mut self.state, &self.config, &event);
        if outcome.changed_ownership() {
            self.notify_scoreboard();
        }
        outcome
    }

    /// Resolve a tick's worth of simultaneous events, serialized by stable
    /// entity id so order-sensitive outcomes stay deterministic.
    pub fn handle_collisions(&mut self, mut events: Vec<CollisionEvent>) -> Vec<Outcome> {
        events.sort_by_key(|event| event.entity_id);
        events
            .into_iter()
            .map(|event| self.handle_collision(event))
            .collect()
    }

    /// Build the event for a registered entity crossing into `cell`.
    pub fn collision_event(&self, entity_id: EntityId, cell: CellCoord) -> Option<CollisionEvent> {
        let entity = self.state.get_entity(entity_id)?;
        Some(CollisionEvent {
            entity_id,
            color: entity.color,
            cell,
            kind: entity.kind,
        })
    }

    /// Remove a departing entity, forfeiting its trail and territory.
    pub fn remove_entity(&mut self, id: EntityId) -> Option<Entity> {
        let entity = self.state.entities.remove(&id)?;
        self.state.trails.clear(entity.color);
        let reverted = self.state.grid.revert_area(entity.color);
        tracing::info!(
            "entity {} ({}) removed, {} cells reverted",
            id,
            entity.name,
            reverted
        );
        if reverted > 0 {
            self.notify_scoreboard();
        }
        Some(entity)
    }

    pub fn scoreboard(&self) -> Vec<ScoreEntry> {
        score::report(&self.state.grid)
    }

    pub fn scoreboard_text(&self) -> String {
        score::format_report(&self.scoreboard())
    }

    fn notify_scoreboard(&mut self) {
        if let Some(sink) = self.sink.as_mut() {
            let entries = score::report(&self.state.grid);
            sink.scoreboard_changed(&entries);
        }
    }
}

impl Default for HexGame {
    fn default() -> Self {
        Self::new()
    }
}
