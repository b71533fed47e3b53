use std::collections::HashMap;

use crate::color::Color;
use crate::config::GridLayout;
use crate::trail::TrailTracker;

pub type EntityId = u32;

/// A position on the hex grid
///
/// (0,0) is the bottom-left corner, x increases to the right, y increases
/// upward. Odd rows sit half a cell to the right in world space.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CellCoord {
    pub x: i32,
    pub y: i32,
}

impl CellCoord {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    pub fn offset(&self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }

    pub fn distance(&self, other: &CellCoord) -> u32 {
        ((self.x - other.x).abs() + (self.y - other.y).abs()) as u32
    }
}

impl std::ops::Add for CellCoord {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self {
            x: self.x + other.x,
            y: self.y + other.y,
        }
    }
}

impl std::ops::Sub for CellCoord {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Self {
            x: self.x - other.x,
            y: self.y - other.y,
        }
    }
}

/// The six neighbor offsets of the offset hex layout.
///
/// The set is closed under negation, so adjacency is symmetric without any
/// per-row parity cases.
pub const NEIGHBOR_OFFSETS: [(i32, i32); 6] = [
    (1, 0),
    (1, 1),
    (0, 1),
    (-1, 0),
    (0, -1),
    (-1, -1),
];

/// Per-cell ownership state.
///
/// `captured` marks a cell as claimed (trail or finalized territory) and is
/// only ever set together with an owner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Cell {
    owner: Option<Color>,
    captured: bool,
}

impl Cell {
    pub fn owner(&self) -> Option<Color> {
        self.owner
    }

    pub fn captured(&self) -> bool {
        self.captured
    }

    pub fn is_neutral(&self) -> bool {
        self.owner.is_none()
    }

    pub(crate) fn claim(&mut self, color: Color) {
        self.owner = Some(color);
        self.captured = true;
    }

    pub(crate) fn reset(&mut self) {
        self.owner = None;
        self.captured = false;
    }
}

/// Dense `width x height` collection of cells, shape fixed at creation.
pub struct HexGrid {
    width: u32,
    height: u32,
    layout: GridLayout,
    cells: Vec<Cell>,
}

impl HexGrid {
    pub fn new(width: u32, height: u32, layout: GridLayout) -> Self {
        Self {
            width,
            height,
            layout,
            cells: vec![Cell::default(); (width * height) as usize],
        }
    }

    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    pub fn total_cells(&self) -> usize {
        self.cells.len()
    }

    pub fn in_bounds(&self, coord: CellCoord) -> bool {
        coord.x >= 0
            && coord.y >= 0
            && (coord.x as u32) < self.width
            && (coord.y as u32) < self.height
    }

    fn index(&self, coord: CellCoord) -> Option<usize> {
        if self.in_bounds(coord) {
            Some((coord.y as u32 * self.width + coord.x as u32) as usize)
        } else {
            None
        }
    }

    pub fn get(&self, coord: CellCoord) -> Option<&Cell> {
        self.index(coord).map(|idx| &self.cells[idx])
    }

    pub fn owner(&self, coord: CellCoord) -> Option<Color> {
        self.get(coord).and_then(|cell| cell.owner())
    }

    pub fn is_captured(&self, coord: CellCoord) -> bool {
        self.get(coord).is_some_and(|cell| cell.captured())
    }

    /// Mark a cell as owned and captured by `color`. No-op out of bounds.
    pub fn claim(&mut self, coord: CellCoord, color: Color) {
        if let Some(idx) = self.index(coord) {
            self.cells[idx].claim(color);
        }
    }

    /// Return a cell to the neutral, uncaptured state. No-op out of bounds.
    pub fn reset(&mut self, coord: CellCoord) {
        if let Some(idx) = self.index(coord) {
            self.cells[idx].reset();
        }
    }

    /// In-bounds neighbors of a cell, up to six.
    pub fn neighbors(&self, coord: CellCoord) -> Vec<CellCoord> {
        NEIGHBOR_OFFSETS
            .iter()
            .map(|&(dx, dy)| coord.offset(dx, dy))
            .filter(|&n| self.in_bounds(n))
            .collect()
    }

    pub fn count_owned_by(&self, color: Color) -> usize {
        self.cells
            .iter()
            .filter(|cell| cell.owner() == Some(color))
            .count()
    }

    /// All cells currently owned by `color`, scan order.
    pub fn area_of(&self, color: Color) -> Vec<CellCoord> {
        self.iter_coords()
            .filter(|&c| self.owner(c) == Some(color))
            .collect()
    }

    /// Derived territory view: owner -> owned cells.
    pub fn areas(&self) -> HashMap<Color, Vec<CellCoord>> {
        let mut areas: HashMap<Color, Vec<CellCoord>> = HashMap::new();
        for coord in self.iter_coords() {
            if let Some(owner) = self.owner(coord) {
                areas.entry(owner).or_default().push(coord);
            }
        }
        areas
    }

    /// Revert every cell of `color` to neutral. Returns how many flipped.
    pub fn revert_area(&mut self, color: Color) -> usize {
        let mut reverted = 0;
        for cell in &mut self.cells {
            if cell.owner() == Some(color) {
                cell.reset();
                reverted += 1;
            }
        }
        reverted
    }

    pub fn iter_coords(&self) -> impl Iterator<Item = CellCoord> + '_ {
        let width = self.width;
        (0..self.cells.len()).map(move |idx| {
            CellCoord::new((idx as u32 % width) as i32, (idx as u32 / width) as i32)
        })
    }

    pub fn cells(&self) -> impl Iterator<Item = &Cell> {
        self.cells.iter()
    }

    /// World-space center of a cell under the grid layout.
    pub fn cell_to_world(&self, coord: CellCoord) -> (f32, f32) {
        let mut x = coord.x as f32 * self.layout.horizontal_spacing;
        if coord.y % 2 != 0 {
            x += self.layout.horizontal_spacing / 2.0;
        }
        let y = coord.y as f32 * self.layout.vertical_spacing;
        (x, y)
    }

    /// Nearest cell to a world-space point, `None` outside the grid.
    pub fn world_to_cell(&self, world: (f32, f32)) -> Option<CellCoord> {
        let row = (world.1 / self.layout.vertical_spacing).round() as i32;
        let row_offset = if row % 2 != 0 {
            self.layout.horizontal_spacing / 2.0
        } else {
            0.0
        };
        let col = ((world.0 - row_offset) / self.layout.horizontal_spacing).round() as i32;
        let coord = CellCoord::new(col, row);
        self.in_bounds(coord).then_some(coord)
    }

    /// Bounds check delegated from the presentation/movement layer.
    pub fn contains_point(&self, world: (f32, f32)) -> bool {
        self.world_to_cell(world).is_some()
    }
}

impl std::fmt::Debug for HexGrid {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HexGrid")
            .field("width", &self.width)
            .field("height", &self.height)
            .field(
                "claimed_cells",
                &self.cells.iter().filter(|c| c.owner().is_some()).count(),
            )
            .finish()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityKind {
    /// The primary, host-controlled entity; elimination is a terminal signal
    Player,
    /// A bot; elimination also forfeits its whole territory
    Autonomous,
}

#[derive(Debug, Clone)]
pub struct Entity {
    /// Unique entity identifier
    pub id: EntityId,
    /// Display name
    pub name: String,
    /// Team color keying this entity's trail and territory
    pub color: Color,
    pub kind: EntityKind,
    /// Cleared when the entity steps on an active trail
    pub alive: bool,
}

impl Entity {
    pub fn new(id: EntityId, name: String, color: Color, kind: EntityKind) -> Self {
        Self {
            id,
            name,
            color,
            kind,
            alive: true,
        }
    }
}

#[derive(Debug)]
pub struct GameState {
    /// Territory and cell ownership
    pub grid: HexGrid,
    /// Active, not-yet-finalized trails per color
    pub trails: TrailTracker,
    /// Entities known to the host
    pub entities: HashMap<EntityId, Entity>,
}

impl GameState {
    pub fn new(width: u32, height: u32, layout: GridLayout) -> Self {
        Self {
            grid: HexGrid::new(width, height, layout),
            trails: TrailTracker::new(),
            entities: HashMap::new(),
        }
    }

    pub fn get_entity(&self, id: EntityId) -> Option<&Entity> {
        self.entities.get(&id)
    }

    pub fn get_entity_mut(&mut self, id: EntityId) -> Option<&mut Entity> {
        self.entities.get_mut(&id)
    }

    pub fn alive_entities(&self) -> impl Iterator<Item = &Entity> {
        self.entities.values().filter(|e| e.alive)
    }
}
