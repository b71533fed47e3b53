use std::collections::HashMap;

use crate::color::Color;
use crate::error::HexioError;
use crate::state::CellCoord;

/// Per-color ordered sequences of cells currently being traced.
///
/// Insertion order is significant: the sequence is the polygon boundary the
/// capture engine closes against. Cells here are claimed but not yet
/// finalized into an area.
#[derive(Debug, Default)]
pub struct TrailTracker {
    trails: HashMap<Color, Vec<CellCoord>>,
}

impl TrailTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// The trail for `color`, creating an empty one on first use.
    pub fn get_or_create(&mut self, color: Color) -> &Vec<CellCoord> {
        self.trails.entry(color).or_default()
    }

    /// The trail for `color`, empty if the color has never traced.
    pub fn trail(&self, color: Color) -> &[CellCoord] {
        self.trails.get(&color).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn len(&self, color: Color) -> usize {
        self.trail(color).len()
    }

    pub fn is_empty(&self, color: Color) -> bool {
        self.trail(color).is_empty()
    }

    /// Append a cell to `color`'s trail.
    ///
    /// A cell already in that trail is rejected so a self-touching trail
    /// cannot corrupt the boundary test; callers log and carry on.
    pub fn append(&mut self, color: Color, cell: CellCoord) -> Result<(), HexioError> {
        let trail = self.trails.entry(color).or_default();
        if trail.contains(&cell) {
            return Err(HexioError::DuplicateTrailCell(cell, color));
        }
        trail.push(cell);
        Ok(())
    }

    /// Empty `color`'s trail; called once per capture cycle or elimination.
    pub fn clear(&mut self, color: Color) {
        if let Some(trail) = self.trails.get_mut(&color) {
            trail.clear();
        }
    }

    pub fn contains(&self, color: Color, cell: CellCoord) -> bool {
        self.trail(color).contains(&cell)
    }

    /// Whether any active trail, of any color, runs through this cell.
    pub fn contains_in_any_trail(&self, cell: CellCoord) -> bool {
        self.trails.values().any(|trail| trail.contains(&cell))
    }

    pub fn active_colors(&self) -> impl Iterator<Item = Color> + '_ {
        self.trails
            .iter()
            .filter(|(_, trail)| !trail.is_empty())
            .map(|(&color, _)| color)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_or_create_starts_empty() {
        let mut trails = TrailTracker::new();
        assert!(trails.get_or_create(Color::GREEN).is_empty());
        assert!(trails.is_empty(Color::GREEN));
        assert_eq!(trails.len(Color::GREEN), 0);
    }

    #[test]
    fn test_append_preserves_order() {
        let mut trails = TrailTracker::new();
        let cells = [
            CellCoord::new(0, 0),
            CellCoord::new(1, 0),
            CellCoord::new(1, 1),
        ];
        for cell in cells {
            trails.append(Color::GREEN, cell).unwrap();
        }
        assert_eq!(trails.trail(Color::GREEN), &cells);
    }

    #[test]
    fn test_duplicate_append_is_rejected_and_idempotent() {
        let mut trails = TrailTracker::new();
        let cell = CellCoord::new(2, 3);

        trails.append(Color::BLUE, cell).unwrap();
        let before = trails.trail(Color::BLUE).to_vec();

        let err = trails.append(Color::BLUE, cell).unwrap_err();
        assert_eq!(err, HexioError::DuplicateTrailCell(cell, Color::BLUE));
        assert_eq!(trails.trail(Color::BLUE), before.as_slice());
    }

    #[test]
    fn test_same_cell_allowed_in_different_trails() {
        let mut trails = TrailTracker::new();
        let cell = CellCoord::new(4, 4);

        trails.append(Color::GREEN, cell).unwrap();
        trails.append(Color::BLUE, cell).unwrap();

        assert!(trails.contains(Color::GREEN, cell));
        assert!(trails.contains(Color::BLUE, cell));
    }

    #[test]
    fn test_clear() {
        let mut trails = TrailTracker::new();
        trails.append(Color::GREEN, CellCoord::new(0, 0)).unwrap();
        trails.append(Color::GREEN, CellCoord::new(1, 0)).unwrap();

        trails.clear(Color::GREEN);
        assert!(trails.is_empty(Color::GREEN));

        // Clearing an unknown color is a no-op
        trails.clear(Color::RED);
    }

    #[test]
    fn test_contains_in_any_trail() {
        let mut trails = TrailTracker::new();
        let green_cell = CellCoord::new(1, 1);
        let blue_cell = CellCoord::new(2, 2);

        trails.append(Color::GREEN, green_cell).unwrap();
        trails.append(Color::BLUE, blue_cell).unwrap();

        assert!(trails.contains_in_any_trail(green_cell));
        assert!(trails.contains_in_any_trail(blue_cell));
        assert!(!trails.contains_in_any_trail(CellCoord::new(3, 3)));
    }

    #[test]
    fn test_active_colors_skips_cleared_trails() {
        let mut trails = TrailTracker::new();
        trails.append(Color::GREEN, CellCoord::new(0, 0)).unwrap();
        trails.append(Color::BLUE, CellCoord::new(1, 1)).unwrap();
        trails.clear(Color::BLUE);

        let active: Vec<Color> = trails.active_colors().collect();
        assert_eq!(active, vec![Color::GREEN]);
    }
}
