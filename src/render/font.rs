//! Glyph generation for display text.
//!
//! Uses the Spleen bitmap font family.

use spleen_font::{FONT_6X12, FONT_12X24, PSF2Font};

use crate::error::LinebarError;

/// Size of the display text beneath the bars.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TextSize {
    /// Spleen 6x12
    #[default]
    Small,
    /// Spleen 12x24
    Large,
}

impl TextSize {
    pub fn char_width(self) -> usize {
        match self {
            TextSize::Small => 6,
            TextSize::Large => 12,
        }
    }

    pub fn char_height(self) -> usize {
        match self {
            TextSize::Small => 12,
            TextSize::Large => 24,
        }
    }

    /// Rendered width of `text` in pixels.
    pub fn text_width(self, text: &str) -> usize {
        text.chars().count() * self.char_width()
    }
}

/// Rasterize `text` into a row-major bitmap (`true` = ink) of
/// `text_width x char_height` pixels.
///
/// Characters missing from the font are left blank.
pub fn rasterize(text: &str, size: TextSize) -> Result<Vec<bool>, LinebarError> {
    let mut font = match size {
        TextSize::Small => PSF2Font::new(FONT_6X12),
        TextSize::Large => PSF2Font::new(FONT_12X24),
    }
    .map_err(|e| LinebarError::Image(format!("Failed to load font: {:?}", e)))?;

    let char_width = size.char_width();
    let stride = size.text_width(text);
    let mut bitmap = vec![false; stride * size.char_height()];

    for (index, ch) in text.chars().enumerate() {
        let utf8_bytes = ch.to_string();
        let Some(glyph) = font.glyph_for_utf8(utf8_bytes.as_bytes()) else {
            continue;
        };
        for (row_y, row) in glyph.enumerate() {
            if row_y >= size.char_height() {
                break;
            }
            for (col_x, on) in row.enumerate() {
                if col_x < char_width && on {
                    bitmap[row_y * stride + index * char_width + col_x] = true;
                }
            }
        }
    }

    Ok(bitmap)
}
