//! Flat-top hexagonal world grid
//!
//! Hexes are 1 meter vertex-to-vertex, laid out in offset columns (odd
//! columns shifted down half a row). The grid is unbounded; everything
//! that enumerates it works on a window around a center point, so cost
//! scales with the visible area, never with "the whole grid".

use sdl2::rect::Point;
use sdl2::render::Canvas;
use sdl2::video::Window;

use crate::camera::{world_to_screen, CameraState};
use crate::hud::config::{rgb, Rgb};
use crate::hud::MinimapGrid;

/// Center-to-vertex distance in meters.
pub const HEX_CIRCUMRADIUS: f32 = 0.5;

const HEX_OUTLINE_COLOR: Rgb = [70, 80, 100];

/// Extra hexes enumerated beyond the visible edge so partially visible
/// ones still draw.
const VIEW_PADDING_M: f32 = 2.0;

pub struct HexGrid {
    pub circumradius: f32,
    /// Horizontal center spacing: 3/4 of the vertex-to-vertex width
    pub horiz_spacing: f32,
    /// Vertical center spacing: the flat-to-flat height
    pub vert_spacing: f32,
}

impl HexGrid {
    pub fn new() -> Self {
        let width = 2.0 * HEX_CIRCUMRADIUS;
        let height = 3.0_f32.sqrt() * HEX_CIRCUMRADIUS;
        HexGrid {
            circumradius: HEX_CIRCUMRADIUS,
            horiz_spacing: width * 0.75,
            vert_spacing: height,
        }
    }

    /// Center of the hex at the given grid address.
    fn hex_center(&self, col: i32, row: i32) -> (f32, f32) {
        let cx = col as f32 * self.horiz_spacing;
        let mut cy = row as f32 * self.vert_spacing;
        if col.rem_euclid(2) == 1 {
            cy += self.vert_spacing / 2.0;
        }
        (cx, cy)
    }

    /// The 6 vertices of a flat-top hexagon centered at (cx, cy).
    fn hex_vertices(&self, cx: f32, cy: f32) -> [(f32, f32); 6] {
        let mut vertices = [(0.0, 0.0); 6];
        for (i, v) in vertices.iter_mut().enumerate() {
            let angle = (60.0 * i as f32).to_radians();
            *v = (
                cx + self.circumradius * angle.cos(),
                cy + self.circumradius * angle.sin(),
            );
        }
        vertices
    }

    /// Grid addresses whose centers fall inside a world-space box around
    /// the given center.
    fn addresses_in_box(&self, cx: f32, cy: f32, half_w: f32, half_h: f32) -> Vec<(i32, i32)> {
        let col_start = ((cx - half_w) / self.horiz_spacing).floor() as i32 - 1;
        let col_end = ((cx + half_w) / self.horiz_spacing).floor() as i32 + 2;
        let row_start = ((cy - half_h) / self.vert_spacing).floor() as i32 - 1;
        let row_end = ((cy + half_h) / self.vert_spacing).floor() as i32 + 2;

        let mut addresses = Vec::new();
        for col in col_start..=col_end {
            for row in row_start..=row_end {
                addresses.push((col, row));
            }
        }
        addresses
    }

    /// Draws the hexes visible in the camera's viewport as outlines.
    pub fn render(
        &self,
        canvas: &mut Canvas<Window>,
        camera: &CameraState,
        screen_width: u32,
        screen_height: u32,
    ) -> Result<(), String> {
        let ppm = camera.ppm();
        let half_w = screen_width as f32 / 2.0 / ppm + VIEW_PADDING_M;
        let half_h = screen_height as f32 / 2.0 / ppm + VIEW_PADDING_M;

        canvas.set_draw_color(rgb(HEX_OUTLINE_COLOR));
        for (col, row) in self.addresses_in_box(camera.x, camera.y, half_w, half_h) {
            let (cx, cy) = self.hex_center(col, row);
            let mut outline = [Point::new(0, 0); 7];
            for (i, (vx, vy)) in self.hex_vertices(cx, cy).iter().enumerate() {
                let (sx, sy) = world_to_screen(*vx, *vy, camera, screen_width, screen_height);
                outline[i] = Point::new(sx as i32, sy as i32);
            }
            outline[6] = outline[0]; // close the loop
            canvas.draw_lines(outline.as_slice())?;
        }
        Ok(())
    }
}

impl Default for HexGrid {
    fn default() -> Self {
        Self::new()
    }
}

impl MinimapGrid for HexGrid {
    /// Hex centers within `radius` meters of the given point. Iterates
    /// only the addresses inside the radius' bounding box.
    fn points_near(&self, center_x: f32, center_y: f32, radius: f32) -> Vec<(f32, f32)> {
        if radius <= 0.0 {
            return Vec::new();
        }
        let mut points = Vec::new();
        for (col, row) in self.addresses_in_box(center_x, center_y, radius, radius) {
            let (cx, cy) = self.hex_center(col, row);
            let dx = cx - center_x;
            let dy = cy - center_y;
            if (dx * dx + dy * dy).sqrt() <= radius {
                points.push((cx, cy));
            }
        }
        points
    }
}
