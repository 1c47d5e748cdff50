use crossterm::style::Color;

/// Color theme for the TUI
#[derive(Debug, Clone)]
pub struct Theme {
    /// Theme name as accepted on the command line
    pub name: &'static str,
    /// Background color
    pub bg: Color,
    /// Default text color
    pub fg: Color,
    /// Grid frame color
    pub border: Color,
    /// Letter color for cells not yet part of a found word
    pub letter: Color,
    /// Keyboard cursor background
    pub cursor_bg: Color,
    /// Active selection background
    pub selection_bg: Color,
    /// Active selection letter color
    pub selection_fg: Color,
    /// Background of cells in found words
    pub found_bg: Color,
    /// Found words and letters
    pub found: Color,
    /// Success/complete color
    pub success: Color,
    /// Info text color
    pub info: Color,
    /// Key binding text color
    pub key: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self::dark()
    }
}

impl Theme {
    /// Names accepted by [`Theme::by_name`], in cycling order
    pub const NAMES: [&'static str; 3] = ["dark", "light", "high-contrast"];

    /// Look up a theme by name
    pub fn by_name(name: &str) -> Option<Self> {
        match name {
            "dark" => Some(Self::dark()),
            "light" => Some(Self::light()),
            "high-contrast" | "high_contrast" => Some(Self::high_contrast()),
            _ => None,
        }
    }

    /// The theme after this one in [`Theme::NAMES`]
    pub fn next(&self) -> Self {
        let idx = Self::NAMES.iter().position(|&n| n == self.name).unwrap_or(0);
        let next = Self::NAMES[(idx + 1) % Self::NAMES.len()];
        Self::by_name(next).unwrap_or_default()
    }

    /// Dark theme (default)
    pub fn dark() -> Self {
        Self {
            name: "dark",
            bg: Color::Rgb { r: 20, g: 22, b: 30 },
            fg: Color::Rgb { r: 230, g: 230, b: 240 },
            border: Color::Rgb { r: 90, g: 95, b: 115 },
            letter: Color::Rgb { r: 200, g: 205, b: 220 },
            cursor_bg: Color::Rgb { r: 70, g: 90, b: 140 },
            selection_bg: Color::Rgb { r: 200, g: 150, b: 40 },
            selection_fg: Color::Rgb { r: 20, g: 22, b: 30 },
            found_bg: Color::Rgb { r: 30, g: 70, b: 45 },
            found: Color::Rgb { r: 90, g: 255, b: 130 },
            success: Color::Rgb { r: 90, g: 255, b: 130 },
            info: Color::Rgb { r: 160, g: 165, b: 185 },
            key: Color::Rgb { r: 255, g: 210, b: 100 },
        }
    }

    /// Light theme
    pub fn light() -> Self {
        Self {
            name: "light",
            bg: Color::Rgb { r: 248, g: 248, b: 252 },
            fg: Color::Rgb { r: 30, g: 30, b: 40 },
            border: Color::Rgb { r: 150, g: 150, b: 170 },
            letter: Color::Rgb { r: 40, g: 40, b: 55 },
            cursor_bg: Color::Rgb { r: 180, g: 200, b: 255 },
            selection_bg: Color::Rgb { r: 255, g: 215, b: 120 },
            selection_fg: Color::Rgb { r: 30, g: 30, b: 40 },
            found_bg: Color::Rgb { r: 200, g: 240, b: 205 },
            found: Color::Rgb { r: 40, g: 140, b: 60 },
            success: Color::Rgb { r: 40, g: 160, b: 60 },
            info: Color::Rgb { r: 90, g: 90, b: 110 },
            key: Color::Rgb { r: 200, g: 120, b: 20 },
        }
    }

    /// High contrast theme
    pub fn high_contrast() -> Self {
        Self {
            name: "high-contrast",
            bg: Color::Black,
            fg: Color::White,
            border: Color::White,
            letter: Color::White,
            cursor_bg: Color::Blue,
            selection_bg: Color::Yellow,
            selection_fg: Color::Black,
            found_bg: Color::DarkGreen,
            found: Color::Green,
            success: Color::Green,
            info: Color::Grey,
            key: Color::Yellow,
        }
    }
}
