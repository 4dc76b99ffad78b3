// Per-character layout for the letter-by-letter title reveal.

pub const LETTER_STAGGER_SECS: f64 = 0.06;
pub const SPACE_WIDTH_CSS: &str = "0.4em";

#[derive(Clone, Debug, PartialEq)]
pub struct TitleGlyph {
    pub ch: char,
    pub index: usize,
    pub delay_secs: f64,
    pub is_space: bool,
}

impl TitleGlyph {
    /// Value for the CSS `animation-delay` property.
    pub fn animation_delay_css(&self) -> String {
        format!("{:.2}s", self.delay_secs)
    }

    /// Fixed width for spaces so word gaps survive; other glyphs size to
    /// their content.
    pub fn width_css(&self) -> Option<&'static str> {
        self.is_space.then_some(SPACE_WIDTH_CSS)
    }
}

/// One glyph per `char` of `text`, each delayed by its index.
pub fn layout_title(text: &str) -> Vec<TitleGlyph> {
    text.chars()
        .enumerate()
        .map(|(index, ch)| TitleGlyph {
            ch,
            index,
            delay_secs: LETTER_STAGGER_SECS * index as f64,
            is_space: ch == ' ',
        })
        .collect()
}
