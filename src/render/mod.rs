//! # Rendering Module
//!
//! Reference rasterizer for encoded barcodes. It consumes an
//! [`EncodeResult`] and draws one filled column per bar module, with the
//! display text centered beneath the bars.
//!
//! ## Layout
//!
//! ```text
//! +--------------------------------------+
//! |                margin                |
//! |  margin  ||| || |||| || |||  margin  |  bar_height
//! |             5901234123457            |  text band (optional)
//! |                margin                |
//! +--------------------------------------+
//! ```
//!
//! ## Usage Example
//!
//! ```
//! use linebar::{encode, Symbology};
//! use linebar::render::{self, RenderConfig};
//!
//! let result = encode("HELLO", Symbology::Code39)?;
//! let png = render::render_png(&result, &RenderConfig::default())?;
//! assert!(png.starts_with(b"\x89PNG"));
//! # Ok::<(), linebar::LinebarError>(())
//! ```

mod font;

pub use font::TextSize;

use image::{Rgb, RgbImage};
use std::io::Cursor;

use crate::encode::EncodeResult;
use crate::error::LinebarError;

/// Gap between the bars and the display text, in pixels.
const TEXT_GAP: u32 = 5;

/// Largest canvas side, in pixels.
pub const MAX_DIMENSION: u32 = 16_384;

/// Largest canvas area, in pixels.
pub const MAX_PIXELS: u64 = 16_777_216;

/// Raster settings for [`render`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderConfig {
    /// Pixels per module
    pub module_width: u32,
    /// Bar height in pixels
    pub bar_height: u32,
    /// Quiet zone on every side, in pixels
    pub margin: u32,
    /// Draw the display text beneath the bars
    pub show_text: bool,
    pub text_size: TextSize,
    pub foreground: Rgb<u8>,
    pub background: Rgb<u8>,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            module_width: 2,
            bar_height: 100,
            margin: 10,
            show_text: true,
            text_size: TextSize::Small,
            foreground: Rgb([0, 0, 0]),
            background: Rgb([255, 255, 255]),
        }
    }
}

impl RenderConfig {
    /// Check dimensions before allocating a canvas.
    pub fn validate(&self) -> Result<(), LinebarError> {
        if self.module_width == 0 {
            return Err(LinebarError::Config("module width must be at least 1".to_string()));
        }
        if self.bar_height == 0 {
            return Err(LinebarError::Config("bar height must be at least 1".to_string()));
        }
        for (name, value) in [
            ("module width", self.module_width),
            ("bar height", self.bar_height),
            ("margin", self.margin),
        ] {
            if value > MAX_DIMENSION {
                return Err(LinebarError::Config(format!(
                    "{} {} exceeds the {} pixel limit",
                    name, value, MAX_DIMENSION
                )));
            }
        }
        Ok(())
    }

    /// Height of the text band (zero when text is hidden).
    fn text_band(&self) -> u32 {
        if self.show_text {
            self.text_size.char_height() as u32 + 2 * TEXT_GAP
        } else {
            0
        }
    }
}

/// Canvas dimensions for a pattern of `modules` modules.
///
/// Fails with [`LinebarError::Config`] when either side exceeds
/// [`MAX_DIMENSION`] or the area exceeds [`MAX_PIXELS`].
pub fn dimensions(modules: usize, config: &RenderConfig) -> Result<(u32, u32), LinebarError> {
    let too_large = || {
        LinebarError::Config(format!(
            "canvas for {} modules exceeds {}x{} pixels",
            modules, MAX_DIMENSION, MAX_DIMENSION
        ))
    };
    let margins = config.margin.checked_mul(2).ok_or_else(too_large)?;
    let width = u32::try_from(modules)
        .ok()
        .and_then(|m| m.checked_mul(config.module_width))
        .and_then(|w| w.checked_add(margins))
        .ok_or_else(too_large)?;
    let height = config
        .bar_height
        .checked_add(config.text_band())
        .and_then(|h| h.checked_add(margins))
        .ok_or_else(too_large)?;

    if width > MAX_DIMENSION || height > MAX_DIMENSION {
        return Err(too_large());
    }
    if u64::from(width) * u64::from(height) > MAX_PIXELS {
        return Err(LinebarError::Config(format!(
            "canvas {}x{} exceeds {} pixels",
            width, height, MAX_PIXELS
        )));
    }
    Ok((width, height))
}

/// Draw an encoded barcode onto a new RGB canvas.
pub fn render(result: &EncodeResult, config: &RenderConfig) -> Result<RgbImage, LinebarError> {
    config.validate()?;

    let (width, height) = dimensions(result.pattern.len(), config)?;
    let mut img = RgbImage::from_pixel(width, height, config.background);

    for (index, is_bar) in result.pattern.modules().enumerate() {
        if !is_bar {
            continue;
        }
        let x0 = config.margin + index as u32 * config.module_width;
        for x in x0..x0 + config.module_width {
            for y in config.margin..config.margin + config.bar_height {
                img.put_pixel(x, y, config.foreground);
            }
        }
    }

    if config.show_text && !result.display_text.is_empty() {
        draw_text(&mut img, &result.display_text, config)?;
    }

    Ok(img)
}

/// Draw an encoded barcode and encode it as PNG bytes.
pub fn render_png(result: &EncodeResult, config: &RenderConfig) -> Result<Vec<u8>, LinebarError> {
    let img = render(result, config)?;
    let mut png_bytes = Vec::new();
    img.write_to(&mut Cursor::new(&mut png_bytes), image::ImageFormat::Png)
        .map_err(|e| LinebarError::Image(format!("PNG encoding failed: {}", e)))?;
    Ok(png_bytes)
}

/// Centered text below the bars, clipped to the canvas.
fn draw_text(img: &mut RgbImage, text: &str, config: &RenderConfig) -> Result<(), LinebarError> {
    let size = config.text_size;
    let bitmap = font::rasterize(text, size)?;
    let text_width = size.text_width(text) as i64;
    let left = (i64::from(img.width()) - text_width) / 2;
    let top = i64::from(config.margin + config.bar_height + TEXT_GAP);

    for row in 0..size.char_height() {
        for col in 0..text_width as usize {
            if !bitmap[row * text_width as usize + col] {
                continue;
            }
            let x = left + col as i64;
            let y = top + row as i64;
            if x >= 0 && y >= 0 && x < i64::from(img.width()) && y < i64::from(img.height()) {
                img.put_pixel(x as u32, y as u32, config.foreground);
            }
        }
    }
    Ok(())
}

/// Parse a `#rrggbb` (or `rrggbb`) hex color.
pub fn parse_color(s: &str) -> Result<Rgb<u8>, LinebarError> {
    let hex = s.trim().trim_start_matches('#');
    if hex.len() != 6 || !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(LinebarError::Config(format!("Invalid color '{}', expected #rrggbb", s)));
    }
    let channel = |i: usize| {
        u8::from_str_radix(&hex[i..i + 2], 16)
            .map_err(|e| LinebarError::Config(format!("Invalid color '{}': {}", s, e)))
    };
    Ok(Rgb([channel(0)?, channel(2)?, channel(4)?]))
}
