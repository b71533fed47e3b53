use serde::Deserialize;

/// World-space layout of the offset hex grid.
///
/// Odd rows are shifted half a cell to the right; rows are packed at
/// `vertical_spacing` so the hexagons interlock.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct GridLayout {
    /// Scale of a single hexagon
    pub hex_size: f32,
    /// Horizontal distance between neighboring cell centers in a row
    pub horizontal_spacing: f32,
    /// Vertical distance between rows
    pub vertical_spacing: f32,
}

impl Default for GridLayout {
    fn default() -> Self {
        Self {
            hex_size: 1.0,
            horizontal_spacing: 1.732,
            vertical_spacing: 1.5,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct HexioConfig {
    /// Grid width in cells
    pub grid_width: u32,
    /// Grid height in cells
    pub grid_height: u32,
    /// Run length when the capture window is sliced into probe chunks
    pub chunk_size: usize,
    /// World-space layout of the grid
    pub layout: GridLayout,
}

impl HexioConfig {
    pub fn with_grid_size(width: u32, height: u32) -> Self {
        Self {
            grid_width: width,
            grid_height: height,
            ..Default::default()
        }
    }

    pub fn from_json_str(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

impl Default for HexioConfig {
    fn default() -> Self {
        Self {
            grid_width: 64,
            grid_height: 64,
            chunk_size: 5,
            layout: GridLayout::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = HexioConfig::default();
        assert_eq!(config.grid_width, 64);
        assert_eq!(config.grid_height, 64);
        assert_eq!(config.chunk_size, 5);
        assert!((config.layout.horizontal_spacing - 1.732).abs() < f32::EPSILON);
    }

    #[test]
    fn test_with_grid_size() {
        let config = HexioConfig::with_grid_size(5, 5);
        assert_eq!(config.grid_width, 5);
        assert_eq!(config.grid_height, 5);
        assert_eq!(config.chunk_size, 5);
    }

    #[test]
    fn test_from_json_partial() {
        let config = HexioConfig::from_json_str(r#"{ "grid_width": 20, "chunk_size": 3 }"#).unwrap();
        assert_eq!(config.grid_width, 20);
        assert_eq!(config.grid_height, 64);
        assert_eq!(config.chunk_size, 3);
    }
}
