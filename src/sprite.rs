//! Sprite decoding and half-block rendering.
//!
//! PNG sprites are decoded with `image`, cropped to their opaque bounds and
//! scaled down to a small pixel grid. Each terminal cell shows two vertically
//! stacked pixels using `▀`/`▄` with foreground and background colors.

use image::imageops::{self, FilterType};
use image::RgbaImage;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Color;
use ratatui::widgets::Widget;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

const ALPHA_CUTOFF: u8 = 128;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct SpriteImage {
    pub width: u32,
    pub height: u32,
    /// Row-major RGBA pixels.
    pub pixels: Vec<[u8; 4]>,
}

impl SpriteImage {
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        self.pixels.get((y * self.width + x) as usize).copied()
    }

    /// Size in terminal cells.
    pub fn cell_size(&self) -> (u16, u16) {
        (self.width as u16, self.height.div_ceil(2) as u16)
    }

    fn from_rgba(image: &RgbaImage) -> Self {
        Self {
            width: image.width(),
            height: image.height(),
            pixels: image.pixels().map(|pixel| pixel.0).collect(),
        }
    }
}

/// Decode an encoded image and fit it inside `max_width` x `max_height` pixels.
pub fn decode_sprite(
    bytes: &[u8],
    max_width: u32,
    max_height: u32,
) -> Result<SpriteImage, image::ImageError> {
    let image = image::load_from_memory(bytes)?.to_rgba8();
    let cropped = crop_to_opaque(&image);
    let (width, height) = fit_within(cropped.width(), cropped.height(), max_width, max_height);
    let scaled = if (width, height) == cropped.dimensions() {
        cropped
    } else {
        imageops::resize(&cropped, width, height, FilterType::Nearest)
    };
    Ok(SpriteImage::from_rgba(&scaled))
}

fn crop_to_opaque(image: &RgbaImage) -> RgbaImage {
    let mut bounds: Option<(u32, u32, u32, u32)> = None;
    for (x, y, pixel) in image.enumerate_pixels() {
        if pixel.0[3] < ALPHA_CUTOFF {
            continue;
        }
        bounds = Some(match bounds {
            None => (x, y, x, y),
            Some((min_x, min_y, max_x, max_y)) => {
                (min_x.min(x), min_y.min(y), max_x.max(x), max_y.max(y))
            }
        });
    }
    match bounds {
        Some((min_x, min_y, max_x, max_y)) => {
            imageops::crop_imm(image, min_x, min_y, max_x - min_x + 1, max_y - min_y + 1)
                .to_image()
        }
        None => image.clone(),
    }
}

/// Largest size with the same aspect ratio that fits the bounds. Never upscales.
pub fn fit_within(width: u32, height: u32, max_width: u32, max_height: u32) -> (u32, u32) {
    if width == 0 || height == 0 {
        return (width, height);
    }
    if width <= max_width && height <= max_height {
        return (width, height);
    }
    let scale = (max_width as f32 / width as f32).min(max_height as f32 / height as f32);
    let scaled_width = ((width as f32 * scale).round() as u32).clamp(1, max_width.max(1));
    let scaled_height = ((height as f32 * scale).round() as u32).clamp(1, max_height.max(1));
    (scaled_width, scaled_height)
}

/// Renders a sprite centered in its area.
pub struct SpriteWidget<'a> {
    sprite: &'a SpriteImage,
}

impl<'a> SpriteWidget<'a> {
    pub fn new(sprite: &'a SpriteImage) -> Self {
        Self { sprite }
    }
}

impl Widget for SpriteWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let (cols, rows) = self.sprite.cell_size();
        let cols = cols.min(area.width);
        let rows = rows.min(area.height);
        let offset_x = area.x + (area.width - cols) / 2;
        let offset_y = area.y + (area.height - rows) / 2;

        for row in 0..rows {
            for col in 0..cols {
                let upper = opaque(self.sprite.pixel(col as u32, row as u32 * 2));
                let lower = opaque(self.sprite.pixel(col as u32, row as u32 * 2 + 1));
                let Some(cell) = buf.cell_mut((offset_x + col, offset_y + row)) else {
                    continue;
                };
                match (upper, lower) {
                    (Some(top), Some(bottom)) => {
                        cell.set_symbol("▀").set_fg(top).set_bg(bottom);
                    }
                    (Some(top), None) => {
                        cell.set_symbol("▀").set_fg(top);
                    }
                    (None, Some(bottom)) => {
                        cell.set_symbol("▄").set_fg(bottom);
                    }
                    (None, None) => {}
                }
            }
        }
    }
}

fn opaque(pixel: Option<[u8; 4]>) -> Option<Color> {
    let [r, g, b, a] = pixel?;
    (a >= ALPHA_CUTOFF).then_some(Color::Rgb(r, g, b))
}
