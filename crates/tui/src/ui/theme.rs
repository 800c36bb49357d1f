use ratatui::style::Color;

/// The palette behind every widget; one instance per mode.
#[derive(Debug, Clone, Copy)]
pub struct Theme {
    pub background: Color,
    pub surface: Color,
    pub text: Color,
    pub dim: Color,
    pub accent: Color,
    pub positive: Color,
    pub negative: Color,
    pub error: Color,
    pub border: Color,
    pub border_focused: Color,
}

impl Theme {
    pub fn for_mode(dark: bool) -> Self {
        if dark { Self::dark() } else { Self::light() }
    }

    pub fn dark() -> Self {
        Self {
            background: Color::Rgb(8, 12, 16),
            surface: Color::Rgb(20, 26, 32),
            text: Color::Rgb(220, 220, 220),
            dim: Color::Rgb(140, 140, 140),
            accent: Color::Rgb(13, 110, 253),
            positive: Color::Rgb(76, 175, 80),
            negative: Color::Rgb(244, 67, 54),
            error: Color::Rgb(200, 80, 80),
            border: Color::Rgb(60, 70, 80),
            border_focused: Color::Rgb(13, 110, 253),
        }
    }

    pub fn light() -> Self {
        Self {
            background: Color::Rgb(245, 246, 248),
            surface: Color::Rgb(255, 255, 255),
            text: Color::Rgb(40, 44, 48),
            dim: Color::Rgb(130, 135, 140),
            accent: Color::Rgb(25, 118, 210),
            positive: Color::Rgb(46, 125, 50),
            negative: Color::Rgb(198, 40, 40),
            error: Color::Rgb(180, 40, 40),
            border: Color::Rgb(200, 204, 208),
            border_focused: Color::Rgb(25, 118, 210),
        }
    }
}
