use std::collections::HashMap;

use crate::color::Color;
use crate::state::HexGrid;

/// One scoreboard row: a color and how many cells it owns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoreEntry {
    pub color: Color,
    pub cells: usize,
}

/// Ranked ownership report, purely derived from cell state.
///
/// Sorted by count descending; ties break on the packed color value so
/// repeated calls with unchanged state produce identical output.
pub fn report(grid: &HexGrid) -> Vec<ScoreEntry> {
    let mut counts: HashMap<Color, usize> = HashMap::new();
    for cell in grid.cells() {
        if let Some(owner) = cell.owner() {
            *counts.entry(owner).or_default() += 1;
        }
    }

    let mut entries: Vec<ScoreEntry> = counts
        .into_iter()
        .map(|(color, cells)| ScoreEntry { color, cells })
        .collect();
    entries.sort_by(|a, b| {
        b.cells
            .cmp(&a.cells)
            .then_with(|| a.color.packed().cmp(&b.color.packed()))
    });
    entries
}

/// Scoreboard text for UI rendering, one `[ColorName]: count` line per entry.
pub fn format_report(entries: &[ScoreEntry]) -> String {
    let mut out = String::new();
    for entry in entries {
        out.push_str(&format!("[{}]: {}\n", entry.color, entry.cells));
    }
    out
}

/// Presentation-layer hook, invoked whenever a transition changed ownership.
pub trait ScoreboardSink {
    fn scoreboard_changed(&mut self, report: &[ScoreEntry]);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GridLayout;
    use crate::state::CellCoord;

    fn grid(width: u32, height: u32) -> HexGrid {
        HexGrid::new(width, height, GridLayout::default())
    }

    #[test]
    fn test_empty_grid_reports_nothing() {
        assert!(report(&grid(5, 5)).is_empty());
    }

    #[test]
    fn test_report_sorted_by_count_descending() {
        let mut grid = grid(6, 6);
        for x in 0..4 {
            grid.claim(CellCoord::new(x, 0), Color::BLUE);
        }
        for x in 0..2 {
            grid.claim(CellCoord::new(x, 1), Color::GREEN);
        }

        let entries = report(&grid);
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0], ScoreEntry { color: Color::BLUE, cells: 4 });
        assert_eq!(entries[1], ScoreEntry { color: Color::GREEN, cells: 2 });
    }

    #[test]
    fn test_ties_break_on_color_key() {
        let mut grid = grid(6, 6);
        grid.claim(CellCoord::new(0, 0), Color::GREEN);
        grid.claim(CellCoord::new(1, 0), Color::YELLOW);

        let entries = report(&grid);
        assert_eq!(entries.len(), 2);
        // Equal counts: the smaller packed value ranks first, stably
        assert_eq!(entries[0].color, Color::GREEN);
        assert_eq!(entries[1].color, Color::YELLOW);
        assert_eq!(report(&grid), entries);
    }

    #[test]
    fn test_total_never_exceeds_grid_size() {
        let mut grid = grid(4, 4);
        for coord in grid.iter_coords().collect::<Vec<_>>() {
            grid.claim(coord, Color::RED);
        }
        grid.claim(CellCoord::new(0, 0), Color::BLUE);

        let entries = report(&grid);
        let total: usize = entries.iter().map(|e| e.cells).sum();
        assert!(total <= grid.total_cells());
        assert_eq!(total, 16);
    }

    #[test]
    fn test_format_report() {
        let entries = [
            ScoreEntry { color: Color::YELLOW, cells: 12 },
            ScoreEntry { color: Color::GREEN, cells: 7 },
        ];
        assert_eq!(format_report(&entries), "[Yellow]: 12\n[Green]: 7\n");
    }
}
