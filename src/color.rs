use crossterm::style::Color as CrosstermColor;

const DARK_GREY: CrosstermColor = CrosstermColor::Rgb {
    r: 96,
    g: 96,
    b: 96,
};

const LIGHT_GREY: CrosstermColor = CrosstermColor::Rgb {
    r: 159,
    g: 159,
    b: 159,
};

pub enum Color {
    Highlight,
    ChipBackground,
    ChipSelectedBackground,
    ChipFlashBackground,
    ChipText,
    LightGrayyedText,
    InvertedText,
    InvertedBackground,
}

impl From<Color> for CrosstermColor {
    fn from(color: Color) -> CrosstermColor {
        match color {
            Color::Highlight => CrosstermColor::Yellow,
            Color::ChipBackground => DARK_GREY,
            Color::ChipSelectedBackground => CrosstermColor::Blue,
            Color::ChipFlashBackground => CrosstermColor::Cyan,
            Color::ChipText => CrosstermColor::White,
            Color::LightGrayyedText => LIGHT_GREY,
            Color::InvertedText => CrosstermColor::Black,
            Color::InvertedBackground => CrosstermColor::White,
        }
    }
}

impl Color {
    pub fn focus_or_important(focus: bool) -> Self {
        if focus {
            Self::Highlight
        } else {
            Self::InvertedBackground
        }
    }
}
