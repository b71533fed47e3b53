use crate::capture;
use crate::color::Color;
use crate::config::HexioConfig;
use crate::state::{CellCoord, EntityId, EntityKind, GameState};

/// The sole input event type: an entity's bounding volume crossed a cell.
///
/// The movement/physics layer produces these; the core only consumes them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CollisionEvent {
    pub entity_id: EntityId,
    pub color: Color,
    pub cell: CellCoord,
    pub kind: EntityKind,
}

/// Terminal result of one collision transition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Cell appended to the entity's trail and claimed
    TrailExtended { cell: CellCoord },
    /// Trail closed against own territory; the capture engine ran
    CaptureFinalized { enclosed: bool, cells_captured: usize },
    /// Entity stepped on an active trail; the host decides what death means
    Eliminated {
        entity_id: EntityId,
        kind: EntityKind,
        /// Territory forfeited (autonomous entities only)
        cells_reverted: usize,
    },
    /// Re-entering own non-trail territory, or an unusable event
    Ignored,
}

impl Outcome {
    /// Whether this transition changed cell ownership anywhere; the
    /// presentation layer refreshes its scoreboard exactly on these.
    pub fn changed_ownership(&self) -> bool {
        match self {
            Outcome::TrailExtended { .. } => true,
            Outcome::CaptureFinalized { cells_captured, .. } => *cells_captured > 0,
            Outcome::Eliminated { cells_reverted, .. } => *cells_reverted > 0,
            Outcome::Ignored => false,
        }
    }
}

/// Resolve one collision event to completion.
///
/// Predicates are evaluated once, at contact, and the first matching rule
/// wins: live trail contact eliminates, then closing onto own captured
/// territory finalizes, then any non-own cell extends the trail. Stepping on
/// a live trail is fatal regardless of the stepping entity's own state, which
/// is why that check runs first.
pub fn handle(state: &mut GameState, config: &HexioConfig, event: &CollisionEvent) -> Outcome {
    if let Some(entity) = state.get_entity(event.entity_id) {
        if !entity.alive {
            tracing::debug!("ignoring event from dead entity {}", event.entity_id);
            return Outcome::Ignored;
        }
    }
    let Some(cell) = state.grid.get(event.cell) else {
        tracing::debug!(
            "collision at out-of-bounds cell ({}, {})",
            event.cell.x,
            event.cell.y
        );
        return Outcome::Ignored;
    };

    let same_owner = cell.owner() == Some(event.color);
    let captured = cell.captured();
    let in_any_trail = state.trails.contains_in_any_trail(event.cell);
    let trail_non_empty = !state.trails.is_empty(event.color);

    if in_any_trail {
        return eliminate(state, event);
    }

    if captured && trail_non_empty && same_owner {
        let result =
            capture::close_trail(&mut state.grid, &mut state.trails, event.color, config.chunk_size);
        return Outcome::CaptureFinalized {
            enclosed: result.enclosed,
            cells_captured: result.cells_captured,
        };
    }

    if !same_owner {
        if let Err(err) = state.trails.append(event.color, event.cell) {
            // Benign: the cell is already queued in this trail
            tracing::debug!("{}", err);
            return Outcome::Ignored;
        }
        state.grid.claim(event.cell, event.color);
        return Outcome::TrailExtended { cell: event.cell };
    }

    Outcome::Ignored
}

fn eliminate(state: &mut GameState, event: &CollisionEvent) -> Outcome {
    let cells_reverted = match event.kind {
        // Bots forfeit their whole territory as the penalty
        EntityKind::Autonomous => state.grid.revert_area(event.color),
        EntityKind::Player => 0,
    };
    state.trails.clear(event.color);

    if let Some(entity) = state.get_entity_mut(event.entity_id) {
        entity.alive = false;
    }

    tracing::info!(
        "entity {} ({}) eliminated on a live trail, {} cells reverted",
        event.entity_id,
        event.color,
        cells_reverted
    );

    Outcome::Eliminated {
        entity_id: event.entity_id,
        kind: event.kind,
        cells_reverted,
    }
}

/// Process one tick's worth of simultaneous events in a deterministic order.
///
/// Outcomes are order-sensitive (eliminations, territory flips), so the host
/// must not dispatch same-tick events in arrival order; they are serialized
/// by stable entity id before dispatch.
pub fn handle_batch(
    state: &mut GameState,
    config: &HexioConfig,
    mut events: Vec<CollisionEvent>,
) -> Vec<Outcome> {
    events.sort_by_key(|event| event.entity_id);
    events
        .iter()
        .map(|event| handle(state, config, event))
        .collect()
}
