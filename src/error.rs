use thiserror::Error;

use crate::color::Color;
use crate::state::CellCoord;

/// Recoverable conditions raised by the simulation core.
///
/// None of these are fatal: out-of-bounds lookups surface as `None` on the
/// query interfaces, duplicate trail cells are logged no-ops, and a flood
/// fill that escapes its window just fails that capture attempt.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum HexioError {
    /// Coordinate outside the grid bounds
    #[error("coordinate ({x}, {y}) is outside the grid", x = .0.x, y = .0.y)]
    InvalidCoordinate(CellCoord),
    /// Cell is already queued in that color's trail
    #[error("cell ({x}, {y}) is already in the {color} trail", x = .0.x, y = .0.y, color = .1)]
    DuplicateTrailCell(CellCoord, Color),
    /// Flood fill grew past its bound, the trail does not enclose anything
    #[error("flood fill exceeded its bound of {0} cells")]
    FloodFillBoundExceeded(usize),
    /// Centroid or closure requested on an empty cell set
    #[error("area query on an empty cell set")]
    EmptyAreaQuery,
}
