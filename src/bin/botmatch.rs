//! Headless demo host: random-walking bots driving the simulation core.
//!
//! Stands in for the movement/physics layer — it decides where entities go
//! and feeds the resulting cell-crossing events into the core, one tick at
//! a time.

use hexio::color::team_color;
use hexio::names::NameProvider;
use hexio::state::NEIGHBOR_OFFSETS;
use hexio::{CellCoord, EntityId, EntityKind, HexGame, HexioConfig, Outcome};
use rand::Rng;

struct Walker {
    id: EntityId,
    cell: CellCoord,
    direction: usize,
    alive: bool,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("hexio=info".parse().unwrap()),
        )
        .init();

    let mut rng = rand::thread_rng();
    let names = NameProvider::default();

    let config = HexioConfig::with_grid_size(32, 32);
    let mut game = HexGame::with_config(config);

    let spawns = [
        CellCoord::new(16, 16),
        CellCoord::new(6, 6),
        CellCoord::new(25, 6),
        CellCoord::new(6, 25),
        CellCoord::new(25, 25),
    ];

    let mut walkers: Vec<Walker> = Vec::new();
    for (i, &spawn) in spawns.iter().enumerate() {
        let kind = if i == 0 {
            EntityKind::Player
        } else {
            EntityKind::Autonomous
        };
        let name = if i == 0 {
            "QIX-Player".to_string()
        } else {
            names.pick(&mut rng).to_string()
        };
        let id = game
            .spawn_entity(name, team_color(i), kind, spawn)
            .expect("spawn position is on the grid");
        walkers.push(Walker {
            id,
            cell: spawn,
            direction: rng.gen_range(0..NEIGHBOR_OFFSETS.len()),
            alive: true,
        });
    }

    for tick in 0..400u32 {
        let mut events = Vec::new();

        for walker in walkers.iter_mut().filter(|w| w.alive) {
            // Wander like the original bots: occasionally veer one step
            // around the hex compass
            if rng.gen_bool(0.25) {
                let turn = if rng.gen_bool(0.5) { 1 } else { NEIGHBOR_OFFSETS.len() - 1 };
                walker.direction = (walker.direction + turn) % NEIGHBOR_OFFSETS.len();
            }

            let (dx, dy) = NEIGHBOR_OFFSETS[walker.direction];
            let next = walker.cell.offset(dx, dy);
            if !game.state().grid.in_bounds(next) {
                walker.direction = (walker.direction + 1) % NEIGHBOR_OFFSETS.len();
                continue;
            }

            walker.cell = next;
            if let Some(event) = game.collision_event(walker.id, next) {
                events.push(event);
            }
        }

        for outcome in game.handle_collisions(events) {
            if let Outcome::Eliminated { entity_id, .. } = outcome {
                if let Some(walker) = walkers.iter_mut().find(|w| w.id == entity_id) {
                    walker.alive = false;
                }
            }
        }

        if tick % 100 == 0 {
            println!("--- tick {tick} ---");
            print!("{}", game.scoreboard_text());
        }
    }

    println!("--- final standings ---");
    print!("{}", game.scoreboard_text());
    let survivors = walkers.iter().filter(|w| w.alive).count();
    println!("{survivors}/{} entities survived", walkers.len());
}
