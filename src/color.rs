/// An opaque team identity, packed as RGBA.
///
/// Equality keys trails and territory; the packed value is only ordered
/// for deterministic scoreboard tie-breaking.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Color(pub u32);

impl Color {
    pub const GREEN: Color = Color(0x33FF57FF);
    pub const YELLOW: Color = Color(0xFFFF33FF);
    pub const RED: Color = Color(0xDC143CFF);
    pub const BLUE: Color = Color(0x3357FFFF);
    pub const CYAN: Color = Color(0x00CED1FF);
    pub const MAGENTA: Color = Color(0xFF33FFFF);
    pub const ORANGE: Color = Color(0xFF5733FF);
    pub const VIOLET: Color = Color(0x8A2BE2FF);
    pub const GOLD: Color = Color(0xFFD700FF);
    pub const LIME: Color = Color(0x32CD32FF);

    pub fn packed(self) -> u32 {
        self.0
    }

    /// Display name for scoreboard text, `"Unknown"` for unlisted values.
    pub fn name(self) -> &'static str {
        for &(color, name) in COLOR_NAMES {
            if color == self {
                return name;
            }
        }
        "Unknown"
    }
}

const COLOR_NAMES: &[(Color, &str)] = &[
    (Color::GREEN, "Green"),
    (Color::YELLOW, "Yellow"),
    (Color::RED, "Red"),
    (Color::BLUE, "Blue"),
    (Color::CYAN, "Cyan"),
    (Color::MAGENTA, "Magenta"),
    (Color::ORANGE, "Orange"),
    (Color::VIOLET, "Violet"),
    (Color::GOLD, "Gold"),
    (Color::LIME, "Lime"),
];

/// Cycle of distinct team colors handed out to joining entities.
pub const TEAM_COLORS: [Color; 10] = [
    Color::YELLOW,
    Color::GREEN,
    Color::BLUE,
    Color::RED,
    Color::CYAN,
    Color::MAGENTA,
    Color::ORANGE,
    Color::VIOLET,
    Color::GOLD,
    Color::LIME,
];

pub fn team_color(index: usize) -> Color {
    TEAM_COLORS[index % TEAM_COLORS.len()]
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = self.name();
        if name == "Unknown" {
            write!(f, "#{:08X}", self.0)
        } else {
            f.write_str(name)
        }
    }
}

impl std::fmt::Debug for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Color({})", self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_color_names() {
        assert_eq!(Color::YELLOW.name(), "Yellow");
        assert_eq!(Color::GREEN.name(), "Green");
    }

    #[test]
    fn test_unknown_color_name() {
        let color = Color(0x12345678);
        assert_eq!(color.name(), "Unknown");
        assert_eq!(format!("{}", color), "#12345678");
    }

    #[test]
    fn test_team_colors_cycle() {
        // Colors should cycle
        assert_eq!(team_color(0), team_color(10));
        assert_eq!(team_color(1), team_color(11));
        // But adjacent should differ
        assert_ne!(team_color(0), team_color(1));
    }

    #[test]
    fn test_team_colors_distinct() {
        for i in 0..TEAM_COLORS.len() {
            for j in (i + 1)..TEAM_COLORS.len() {
                assert_ne!(TEAM_COLORS[i], TEAM_COLORS[j]);
            }
        }
    }
}
