//! Vitals Stat Model and Stats Panel
//!
//! Three normalized player stats (health, stamina, focus) with clamped
//! writes, plus the bottom-left STATUS panel that displays them as bars.
//!
//! The model is deliberately dumb: the host supplies all three values
//! together each time it wants them changed, values outside [0, 1] are
//! clamped silently (routine gameplay input, not an error), and the
//! compositor reads them once per frame.

use sdl2::rect::Rect;
use sdl2::render::Canvas;
use sdl2::video::Window;

use crate::hud::config::{rgb, HudConfig, Rgb};
use crate::text::draw_simple_text;

const BAR_INSET_X: i32 = 10;
const BAR_SPACING: i32 = 40;
const BAR_HEIGHT: u32 = 12;
const LABEL_TO_BAR: i32 = 16;

/// Normalized player stats, each in [0.0, 1.0]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Vitals {
    health: f32,
    stamina: f32,
    focus: f32,
}

impl Vitals {
    /// Creates vitals at full values.
    pub fn full() -> Self {
        Vitals {
            health: 1.0,
            stamina: 1.0,
            focus: 1.0,
        }
    }

    /// Replaces all three stats at once, clamping each to [0.0, 1.0].
    ///
    /// Partial updates are not supported: the display is a snapshot, and
    /// callers that want to change one stat re-supply the other two.
    pub fn set(&mut self, health: f32, stamina: f32, focus: f32) {
        self.health = health.clamp(0.0, 1.0);
        self.stamina = stamina.clamp(0.0, 1.0);
        self.focus = focus.clamp(0.0, 1.0);
    }

    #[allow(dead_code)] // Read back by the clamping tests
    pub fn health(&self) -> f32 {
        self.health
    }

    #[allow(dead_code)]
    pub fn stamina(&self) -> f32 {
        self.stamina
    }

    #[allow(dead_code)]
    pub fn focus(&self) -> f32 {
        self.focus
    }

    /// Draws the contents of the stats panel: STATUS label and the three
    /// bars. Panel background and frame are the compositor's job.
    pub fn render(
        &self,
        canvas: &mut Canvas<Window>,
        rect: Rect,
        config: &HudConfig,
    ) -> Result<(), String> {
        let pal = &config.palette;
        draw_simple_text(canvas, "STATUS", rect.x() + 4, rect.y() + 4, rgb(pal.orange), 1)?;

        let bar_x = rect.x() + BAR_INSET_X;
        let bar_width = rect.width() - 2 * BAR_INSET_X as u32;
        let top = rect.y() + 25;

        let bars = [
            ("HP", self.health, pal.orange, pal.orange_dim),
            ("ST", self.stamina, pal.cyan, pal.cyan_dim),
            ("FC", self.focus, pal.purple, pal.purple_dim),
        ];
        for (i, (label, value, color, color_dim)) in bars.into_iter().enumerate() {
            let y = top + i as i32 * BAR_SPACING;
            draw_stat_bar(canvas, bar_x, y, bar_width, label, value, color, color_dim, config)?;
        }

        Ok(())
    }
}

impl Default for Vitals {
    fn default() -> Self {
        Self::full()
    }
}

/// Draws one labeled stat bar: text line, dark background, dim fill with a
/// bright 1px glow line along the top of the fill, and a 1px border.
fn draw_stat_bar(
    canvas: &mut Canvas<Window>,
    x: i32,
    y: i32,
    width: u32,
    label: &str,
    value: f32,
    color: Rgb,
    color_dim: Rgb,
    config: &HudConfig,
) -> Result<(), String> {
    let pal = &config.palette;
    let text = format!("{}: {}", label, (value * 100.0) as i32);
    draw_simple_text(canvas, &text, x, y, rgb(pal.cyan), 1)?;

    let bar_y = y + LABEL_TO_BAR;
    let bar_bg = Rect::new(x, bar_y, width, BAR_HEIGHT);

    canvas.set_draw_color(rgb(pal.bar_bg));
    canvas.fill_rect(bar_bg)?;

    let filled_width = (width as f32 * value.clamp(0.0, 1.0)) as u32;
    if filled_width > 0 {
        canvas.set_draw_color(rgb(color_dim));
        canvas.fill_rect(Rect::new(x, bar_y, filled_width, BAR_HEIGHT))?;

        canvas.set_draw_color(rgb(color));
        canvas.draw_line((x, bar_y), (x + filled_width as i32, bar_y))?;
    }

    canvas.set_draw_color(rgb(pal.cyan_dark));
    canvas.draw_rect(bar_bg)?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_full() {
        let vitals = Vitals::full();
        assert_eq!(vitals.health(), 1.0);
        assert_eq!(vitals.stamina(), 1.0);
        assert_eq!(vitals.focus(), 1.0);
    }

    #[test]
    fn test_set_clamps_out_of_range() {
        let mut vitals = Vitals::full();
        vitals.set(-1.0, 2.0, 0.5);
        assert_eq!(vitals.health(), 0.0);
        assert_eq!(vitals.stamina(), 1.0);
        assert_eq!(vitals.focus(), 0.5);
    }

    #[test]
    fn test_set_is_idempotent() {
        let mut vitals = Vitals::full();
        vitals.set(0.3, 0.7, 0.9);
        let first = vitals;
        vitals.set(0.3, 0.7, 0.9);
        assert_eq!(vitals, first);
    }

    #[test]
    fn test_in_range_values_stored_exactly() {
        let mut vitals = Vitals::full();
        vitals.set(0.0, 0.25, 1.0);
        assert_eq!(vitals.health(), 0.0);
        assert_eq!(vitals.stamina(), 0.25);
        assert_eq!(vitals.focus(), 1.0);
    }
}
