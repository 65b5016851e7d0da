//! HUD Compositor
//!
//! `HudSystem` owns all HUD state and draws the four panels plus the
//! scanline overlay once per frame, in a fixed order. The order is an
//! invariant, not a convention: the overlay comes last so it tints every
//! panel beneath it, and the pass list below is the single source of truth
//! the render loop walks.

use sdl2::event::Event;
use sdl2::keyboard::Scancode;
use sdl2::rect::Rect;
use sdl2::render::{Canvas, TextureCreator};
use sdl2::video::{Window, WindowContext};

use crate::camera::CameraState;
use crate::hud::action_bar::ActionBar;
use crate::hud::config::{rgb, HudConfig};
use crate::hud::layout::{compute_layout, min_screen_size, PanelLayout};
use crate::hud::minimap::{render_minimap, MinimapGrid};
use crate::hud::scanline::ScanlineOverlay;
use crate::hud::vitals::Vitals;
use crate::text::draw_simple_text;

/// One step of the per-frame composition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DrawPass {
    Minimap,
    StatsPanel,
    ActionBar,
    InfoPanel,
    ScanlineOverlay,
}

/// Fixed composition order. The scanline overlay is always last.
pub const DRAW_ORDER: [DrawPass; 5] = [
    DrawPass::Minimap,
    DrawPass::StatsPanel,
    DrawPass::ActionBar,
    DrawPass::InfoPanel,
    DrawPass::ScanlineOverlay,
];

/// The HUD: panel layout, stat model, action bar, and scanline overlay
///
/// Single-threaded and frame-driven. Per frame the host calls, in order:
/// `begin_frame`, `handle_event` for each queued input event,
/// `poll_held`, then `render`. `update_stats` may be called whenever the
/// simulation changes them. `render` is idempotent; calling it twice in a
/// frame wastes work but draws nothing wrong.
pub struct HudSystem<'a> {
    texture_creator: &'a TextureCreator<WindowContext>,
    config: HudConfig,
    layout: PanelLayout,
    vitals: Vitals,
    action_bar: ActionBar,
    scanline: ScanlineOverlay<'a>,
}

impl<'a> HudSystem<'a> {
    /// Builds the HUD for the given screen size.
    ///
    /// Fails on structural configuration errors (invalid geometry,
    /// duplicate key bindings); a screen too small for the panels is only
    /// warned about, since the layout formulas still apply.
    pub fn new(
        canvas: &mut Canvas<Window>,
        texture_creator: &'a TextureCreator<WindowContext>,
        config: HudConfig,
        screen_width: u32,
        screen_height: u32,
    ) -> Result<Self, String> {
        config.validate()?;
        warn_if_undersized(&config, screen_width, screen_height);

        let scanline = ScanlineOverlay::new(
            canvas,
            texture_creator,
            screen_width,
            screen_height,
            config.scanline_spacing,
            config.scanline_alpha,
        )?;

        Ok(HudSystem {
            texture_creator,
            layout: compute_layout(screen_width, screen_height, &config),
            action_bar: ActionBar::new()?,
            vitals: Vitals::full(),
            scanline,
            config,
        })
    }

    /// Rebuilds layout and scanline overlay for a new screen size. The
    /// only path that regenerates the overlay after construction.
    #[allow(dead_code)] // The demo window is fixed-size
    pub fn resize(
        &mut self,
        canvas: &mut Canvas<Window>,
        screen_width: u32,
        screen_height: u32,
    ) -> Result<(), String> {
        warn_if_undersized(&self.config, screen_width, screen_height);
        self.scanline = ScanlineOverlay::new(
            canvas,
            self.texture_creator,
            screen_width,
            screen_height,
            self.config.scanline_spacing,
            self.config.scanline_alpha,
        )?;
        self.layout = compute_layout(screen_width, screen_height, &self.config);
        Ok(())
    }

    /// Clears per-frame action bar state. Call before feeding events.
    pub fn begin_frame(&mut self) {
        self.action_bar.begin_frame();
    }

    /// Forwards one raw input event to the action bar; returns the
    /// activated slot coordinate on a fresh key-down of a bound key.
    pub fn handle_event(&mut self, event: &Event) -> Option<(usize, usize)> {
        self.action_bar.handle_event(event)
    }

    /// Samples the keyboard for the action bar's held state. Once per
    /// frame, after events, before `render`.
    pub fn poll_held<F: Fn(Scancode) -> bool>(&mut self, is_pressed: F, shift_held: bool) {
        self.action_bar.poll_held(is_pressed, shift_held);
    }

    /// Replaces the displayed stats; out-of-range values clamp silently.
    pub fn update_stats(&mut self, health: f32, stamina: f32, focus: f32) {
        self.vitals.set(health, stamina, focus);
    }

    #[allow(dead_code)] // Reserved for host-side stat inspection
    pub fn vitals(&self) -> &Vitals {
        &self.vitals
    }

    /// Draws the full HUD over the current frame.
    pub fn render(
        &self,
        canvas: &mut Canvas<Window>,
        camera: &CameraState,
        grid: &impl MinimapGrid,
    ) -> Result<(), String> {
        for pass in DRAW_ORDER {
            match pass {
                DrawPass::Minimap => {
                    self.fill_panel(canvas, self.layout.minimap)?;
                    render_minimap(
                        canvas,
                        self.texture_creator,
                        self.layout.minimap,
                        camera,
                        grid,
                        &self.config,
                    )?;
                    self.frame_panel(canvas, self.layout.minimap, true)?;
                }
                DrawPass::StatsPanel => {
                    self.fill_panel(canvas, self.layout.stats)?;
                    self.vitals.render(canvas, self.layout.stats, &self.config)?;
                    self.frame_panel(canvas, self.layout.stats, true)?;
                }
                DrawPass::ActionBar => {
                    self.fill_panel(canvas, self.layout.action_bar)?;
                    self.action_bar
                        .render(canvas, self.layout.action_bar, &self.config)?;
                    // Border only, no corner accents on the bar.
                    self.frame_panel(canvas, self.layout.action_bar, false)?;
                }
                DrawPass::InfoPanel => {
                    self.fill_panel(canvas, self.layout.info)?;
                    self.draw_info_panel(canvas, self.layout.info, camera)?;
                    self.frame_panel(canvas, self.layout.info, true)?;
                }
                DrawPass::ScanlineOverlay => {
                    self.scanline.render(canvas)?;
                }
            }
        }
        Ok(())
    }

    fn fill_panel(&self, canvas: &mut Canvas<Window>, rect: Rect) -> Result<(), String> {
        canvas.set_draw_color(rgb(self.config.palette.panel_bg));
        canvas.fill_rect(rect)
    }

    /// 2px cyan border, optionally with orange corner accents.
    fn frame_panel(
        &self,
        canvas: &mut Canvas<Window>,
        rect: Rect,
        accents: bool,
    ) -> Result<(), String> {
        canvas.set_draw_color(rgb(self.config.palette.cyan));
        canvas.draw_rect(rect)?;
        canvas.draw_rect(Rect::new(
            rect.x() + 1,
            rect.y() + 1,
            rect.width() - 2,
            rect.height() - 2,
        ))?;

        if accents {
            self.draw_corner_accents(canvas, rect)?;
        }
        Ok(())
    }

    /// Orange L-shaped accents: two 2px-thick legs per corner.
    fn draw_corner_accents(&self, canvas: &mut Canvas<Window>, rect: Rect) -> Result<(), String> {
        let len = self.config.corner_size;
        let (left, top) = (rect.left(), rect.top());
        let (right, bottom) = (rect.right(), rect.bottom());

        canvas.set_draw_color(rgb(self.config.palette.orange));
        let legs = [
            Rect::new(left, top, len, 2),
            Rect::new(left, top, 2, len),
            Rect::new(right - len as i32, top, len, 2),
            Rect::new(right - 2, top, 2, len),
            Rect::new(left, bottom - 2, len, 2),
            Rect::new(left, bottom - len as i32, 2, len),
            Rect::new(right - len as i32, bottom - 2, len, 2),
            Rect::new(right - 2, bottom - len as i32, 2, len),
        ];
        for leg in legs {
            canvas.fill_rect(leg)?;
        }
        Ok(())
    }

    /// Telemetry readout: camera position, heading, zoom, link status.
    fn draw_info_panel(
        &self,
        canvas: &mut Canvas<Window>,
        rect: Rect,
        camera: &CameraState,
    ) -> Result<(), String> {
        let pal = &self.config.palette;
        draw_simple_text(canvas, "SYSTEM", rect.x() + 4, rect.y() + 4, rgb(pal.orange), 1)?;

        let x = rect.x() + 8;
        let mut y = rect.y() + 25;
        let line_height = 18;

        let heading = camera.heading_degrees.rem_euclid(360.0);
        let lines = [
            format!("X:{:+.1}", camera.x),
            format!("Y:{:+.1}", camera.y),
            format!("HDG:{:03.0}", heading),
            format!("ZM:{:.1}X", camera.zoom),
        ];
        for line in &lines {
            draw_simple_text(canvas, line, x, y, rgb(pal.cyan), 1)?;
            y += line_height;
        }

        let divider_y = rect.bottom() - 30;
        canvas.set_draw_color(rgb(pal.cyan_dark));
        canvas.draw_line((rect.x() + 8, divider_y), (rect.right() - 8, divider_y))?;

        draw_simple_text(canvas, "ONLINE", x, divider_y + 6, rgb(pal.green), 1)?;
        Ok(())
    }
}

fn warn_if_undersized(config: &HudConfig, screen_width: u32, screen_height: u32) {
    let (min_w, min_h) = min_screen_size(config);
    if screen_width < min_w || screen_height < min_h {
        eprintln!(
            "Warning: screen {}x{} is below the {}x{} needed for non-overlapping HUD panels",
            screen_width, screen_height, min_w, min_h
        );
    }
}

#[cfg(test)]
mod tests {
    // Draw calls need a live SDL canvas; what can be checked headlessly is
    // the composition order invariant.
    use super::*;

    #[test]
    fn test_scanline_overlay_is_last_pass() {
        assert_eq!(DRAW_ORDER.last(), Some(&DrawPass::ScanlineOverlay));
    }

    #[test]
    fn test_every_pass_appears_once() {
        for pass in [
            DrawPass::Minimap,
            DrawPass::StatsPanel,
            DrawPass::ActionBar,
            DrawPass::InfoPanel,
            DrawPass::ScanlineOverlay,
        ] {
            assert_eq!(DRAW_ORDER.iter().filter(|p| **p == pass).count(), 1);
        }
    }

    #[test]
    fn test_panels_draw_before_overlay() {
        let overlay_index = DRAW_ORDER
            .iter()
            .position(|p| *p == DrawPass::ScanlineOverlay)
            .unwrap();
        assert_eq!(overlay_index, DRAW_ORDER.len() - 1);
    }
}
