use crossterm::style::Color;

/// Color theme for printed puzzles
#[derive(Debug, Clone)]
pub struct Theme {
    /// Grid border color
    pub border: Color,
    /// Blocked (unused) cell color
    pub block: Color,
    /// Solution letter color
    pub letter: Color,
    /// Clue number color
    pub number: Color,
    /// Section heading color
    pub heading: Color,
    /// Clue text color
    pub clue: Color,
    /// Secondary info (date, seed) color
    pub info: Color,
    /// Solved message color
    pub success: Color,
    /// Not-solved message color
    pub error: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self::dark()
    }
}

impl Theme {
    /// Dark theme (default)
    pub fn dark() -> Self {
        Self {
            border: Color::Rgb { r: 70, g: 75, b: 90 },
            block: Color::Rgb { r: 45, g: 48, b: 60 },
            letter: Color::Rgb { r: 80, g: 180, b: 255 },
            number: Color::Rgb { r: 255, g: 210, b: 100 },
            heading: Color::Rgb { r: 130, g: 140, b: 170 },
            clue: Color::Rgb { r: 230, g: 230, b: 240 },
            info: Color::Rgb { r: 160, g: 165, b: 185 },
            success: Color::Rgb { r: 90, g: 255, b: 130 },
            error: Color::Rgb { r: 255, g: 90, b: 90 },
        }
    }

    pub fn light() -> Self {
        Self {
            border: Color::Rgb { r: 180, g: 180, b: 195 },
            block: Color::Rgb { r: 60, g: 60, b: 80 },
            letter: Color::Rgb { r: 30, g: 100, b: 200 },
            number: Color::Rgb { r: 200, g: 120, b: 20 },
            heading: Color::Rgb { r: 60, g: 60, b: 80 },
            clue: Color::Rgb { r: 30, g: 30, b: 40 },
            info: Color::Rgb { r: 90, g: 90, b: 110 },
            success: Color::Rgb { r: 40, g: 160, b: 60 },
            error: Color::Rgb { r: 220, g: 50, b: 50 },
        }
    }

    pub fn high_contrast() -> Self {
        Self {
            border: Color::Grey,
            block: Color::White,
            letter: Color::Cyan,
            number: Color::Yellow,
            heading: Color::White,
            clue: Color::White,
            info: Color::Grey,
            success: Color::Green,
            error: Color::Red,
        }
    }

    pub fn by_name(name: &str) -> Option<Self> {
        match name {
            "dark" => Some(Self::dark()),
            "light" => Some(Self::light()),
            "high-contrast" => Some(Self::high_contrast()),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_by_name() {
        assert_eq!(Theme::by_name("light").map(|t| t.letter), Some(Theme::light().letter));
        assert_eq!(Theme::by_name("high-contrast").map(|t| t.block), Some(Theme::high_contrast().block));
        assert!(Theme::by_name("neon").is_none());
    }
}
