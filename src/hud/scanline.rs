//! CRT Scanline Overlay
//!
//! A screen-sized translucent texture of horizontal dark lines, copied
//! over the finished frame as the last draw pass so it tints every panel
//! beneath it. The texture is built exactly once at HUD construction and
//! reused every frame; it is rebuilt only when the screen metrics change.
//! Regenerating it per frame would be a performance defect, not a style
//! choice.

use sdl2::pixels::{Color, PixelFormatEnum};
use sdl2::render::{BlendMode, Canvas, Texture, TextureCreator};
use sdl2::video::{Window, WindowContext};

pub struct ScanlineOverlay<'a> {
    texture: Texture<'a>,
}

impl<'a> ScanlineOverlay<'a> {
    /// Renders the line pattern into a fresh alpha-enabled texture.
    ///
    /// Needs the canvas because SDL render-target drawing goes through it;
    /// the canvas state is restored before returning.
    pub fn new(
        canvas: &mut Canvas<Window>,
        texture_creator: &'a TextureCreator<WindowContext>,
        screen_width: u32,
        screen_height: u32,
        spacing: u32,
        alpha: u8,
    ) -> Result<Self, String> {
        let mut texture = texture_creator
            .create_texture_target(Some(PixelFormatEnum::RGBA8888), screen_width, screen_height)
            .map_err(|e| e.to_string())?;

        let mut draw_result: Result<(), String> = Ok(());
        canvas
            .with_texture_canvas(&mut texture, |tex_canvas| {
                // Write raw alpha values into the texture, no blending.
                tex_canvas.set_blend_mode(BlendMode::None);
                tex_canvas.set_draw_color(Color::RGBA(0, 0, 0, 0));
                tex_canvas.clear();

                tex_canvas.set_draw_color(Color::RGBA(0, 0, 0, alpha));
                for y in line_positions(screen_height, spacing) {
                    if let Err(e) =
                        tex_canvas.draw_line((0, y as i32), (screen_width as i32, y as i32))
                    {
                        draw_result = Err(e);
                        return;
                    }
                }
            })
            .map_err(|e| e.to_string())?;
        draw_result?;

        texture.set_blend_mode(BlendMode::Blend);
        Ok(ScanlineOverlay { texture })
    }

    /// Copies the overlay over the whole frame.
    pub fn render(&self, canvas: &mut Canvas<Window>) -> Result<(), String> {
        canvas.copy(&self.texture, None, None)
    }
}

/// Y coordinates of the scanlines for a given screen height and spacing.
fn line_positions(screen_height: u32, spacing: u32) -> impl Iterator<Item = u32> {
    (0..screen_height).step_by(spacing.max(1) as usize)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_positions_spacing() {
        let positions: Vec<u32> = line_positions(10, 3).collect();
        assert_eq!(positions, vec![0, 3, 6, 9]);
    }

    #[test]
    fn test_line_count_for_default_screen() {
        // 720 rows at spacing 3 -> 240 lines
        assert_eq!(line_positions(720, 3).count(), 240);
    }

    #[test]
    fn test_zero_spacing_does_not_hang() {
        // Validated away at config level, but the generator itself must
        // still terminate.
        assert_eq!(line_positions(6, 0).count(), 6);
    }
}
