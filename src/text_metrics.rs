/// Pluggable text-width measurement. The layout only ever asks "how wide
/// would this string render", so exact glyph metrics can be slotted in later
/// without touching the wrapper.
pub trait TextMeasure {
    fn width(&self, text: &str, font_size: f32) -> f32;
}

/// Estimates width as `chars * font_size * coefficient`. Approximate by
/// design (no font database); overflow is possible and accepted.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CharWidthHeuristic {
    pub coefficient: f32,
}

impl CharWidthHeuristic {
    pub fn new(coefficient: f32) -> Self {
        Self { coefficient }
    }
}

impl Default for CharWidthHeuristic {
    fn default() -> Self {
        Self { coefficient: 0.6 }
    }
}

impl TextMeasure for CharWidthHeuristic {
    fn width(&self, text: &str, font_size: f32) -> f32 {
        if text.is_empty() || font_size <= 0.0 {
            return 0.0;
        }
        text.chars().count() as f32 * font_size * self.coefficient
    }
}
