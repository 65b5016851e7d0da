//! Minimap Projector and Panel
//!
//! Projects world-space positions near the camera into the top-left SCAN
//! panel. Points beyond the coverage radius are culled outright (never
//! clipped to the edge), and everything inside the map area is drawn onto
//! an intermediate texture sized to that area, then copied to the screen.
//! The texture copy is what clips markers that project past the map edge;
//! without it they would bleed into the world viewport. The texture lives
//! for exactly one render call.

use sdl2::rect::Rect;
use sdl2::render::{Canvas, TextureCreator};
use sdl2::video::{Window, WindowContext};

use crate::camera::CameraState;
use crate::hud::config::{rgb, HudConfig};
use crate::text::draw_simple_text;

/// Height of the label strip above the map area. Validated against the
/// panel size in `HudConfig::validate`, so the map-area subtraction in
/// [`render_minimap`] cannot underflow.
pub const LABEL_STRIP: u32 = 12;

/// Length of the heading indicator segment in map pixels, independent of
/// zoom and radius.
const HEADING_SEGMENT_PX: f32 = 6.0;

/// Half side length of the player marker.
const PLAYER_MARKER_HALF: i32 = 2;

/// World-grid seam consumed by the minimap.
///
/// Implementations must return only points within `radius` of the center,
/// found by iterating the grid's addressable points near the center; the
/// cost of a call scales with the visible density, not the grid extent.
pub trait MinimapGrid {
    fn points_near(&self, center_x: f32, center_y: f32, radius: f32) -> Vec<(f32, f32)>;
}

/// Projects a world point into minimap pixel space.
///
/// Returns `None` when the point is at or beyond `radius` from the camera
/// (the boundary itself is out of range). In-range points map linearly,
/// `pixel_offset = world_offset * (half_size / radius)`, recentered on the
/// given rect's center. Non-positive radii cull everything.
pub fn project_to_minimap(
    camera: &CameraState,
    world_x: f32,
    world_y: f32,
    radius: f32,
    rect: Rect,
) -> Option<(f32, f32)> {
    if radius <= 0.0 {
        return None;
    }
    let dx = world_x - camera.x;
    let dy = world_y - camera.y;
    if (dx * dx + dy * dy).sqrt() >= radius {
        return None;
    }
    let half = rect.width().min(rect.height()) as f32 / 2.0;
    let scale = half / radius;
    Some((
        rect.x() as f32 + rect.width() as f32 / 2.0 + dx * scale,
        rect.y() as f32 + rect.height() as f32 / 2.0 + dy * scale,
    ))
}

/// Draws the minimap panel contents: SCAN label, map area, grid points,
/// and the player marker with heading indicator.
///
/// The panel background and frame are the compositor's job.
pub fn render_minimap(
    canvas: &mut Canvas<Window>,
    texture_creator: &TextureCreator<WindowContext>,
    rect: Rect,
    camera: &CameraState,
    grid: &impl MinimapGrid,
    config: &HudConfig,
) -> Result<(), String> {
    let pal = &config.palette;
    draw_simple_text(canvas, "SCAN", rect.x() + 4, rect.y() + 4, rgb(pal.orange), 1)?;

    let margin = config.minimap_inner_margin;
    let map_area = Rect::new(
        rect.x() + margin as i32,
        rect.y() + (margin + LABEL_STRIP) as i32,
        rect.width() - 2 * margin,
        rect.height() - 2 * margin - LABEL_STRIP,
    );

    // Offscreen buffer sized to the map area; scoped to this call.
    let mut map_texture = texture_creator
        .create_texture_target(None, map_area.width(), map_area.height())
        .map_err(|e| e.to_string())?;

    let mut draw_result: Result<(), String> = Ok(());
    canvas
        .with_texture_canvas(&mut map_texture, |map_canvas| {
            draw_result = draw_map_contents(
                map_canvas,
                Rect::new(0, 0, map_area.width(), map_area.height()),
                camera,
                grid,
                config,
            );
        })
        .map_err(|e| e.to_string())?;
    draw_result?;

    canvas.copy(&map_texture, None, Some(map_area))?;
    Ok(())
}

fn draw_map_contents(
    canvas: &mut Canvas<Window>,
    surface: Rect,
    camera: &CameraState,
    grid: &impl MinimapGrid,
    config: &HudConfig,
) -> Result<(), String> {
    let pal = &config.palette;
    let radius = config.minimap_radius.max(0.0);

    canvas.set_draw_color(rgb(pal.map_bg));
    canvas.clear();

    // Grid points: one pixel each, culled by radius before projection and
    // clipped by the texture edge after it.
    canvas.set_draw_color(rgb(pal.cyan_dark));
    for (wx, wy) in grid.points_near(camera.x, camera.y, radius) {
        if let Some((px, py)) = project_to_minimap(camera, wx, wy, radius, surface) {
            canvas.draw_point((px as i32, py as i32))?;
        }
    }

    // Player marker: camera is player-following, so always at center.
    let cx = surface.width() as i32 / 2;
    let cy = surface.height() as i32 / 2;
    canvas.set_draw_color(rgb(pal.orange));
    canvas.fill_rect(Rect::new(
        cx - PLAYER_MARKER_HALF,
        cy - PLAYER_MARKER_HALF,
        (PLAYER_MARKER_HALF * 2) as u32,
        (PLAYER_MARKER_HALF * 2) as u32,
    ))?;

    let heading = camera.heading_degrees.to_radians();
    let tip_x = cx + (HEADING_SEGMENT_PX * heading.cos()) as i32;
    let tip_y = cy + (HEADING_SEGMENT_PX * heading.sin()) as i32;
    canvas.draw_line((cx, cy), (tip_x, tip_y))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn camera_at(x: f32, y: f32) -> CameraState {
        CameraState {
            x,
            y,
            heading_degrees: 90.0,
            zoom: 1.0,
        }
    }

    fn map() -> Rect {
        Rect::new(0, 0, 160, 160)
    }

    #[test]
    fn test_known_projection() {
        // Point 10m east, radius 15, 160px map: offset = 10 * 80/15
        let camera = camera_at(0.0, 0.0);
        let (px, py) = project_to_minimap(&camera, 10.0, 0.0, 15.0, map()).unwrap();
        assert!((px - 80.0 - 53.333).abs() < 0.01);
        assert!((py - 80.0).abs() < 0.01);
    }

    #[test]
    fn test_boundary_is_exclusive() {
        let camera = camera_at(0.0, 0.0);
        assert_eq!(project_to_minimap(&camera, 15.0, 0.0, 15.0, map()), None);

        let inside = project_to_minimap(&camera, 15.0 - 1e-3, 0.0, 15.0, map()).unwrap();
        assert!(inside.0 > 0.0 && inside.0 < 160.0);
        assert!(inside.1 > 0.0 && inside.1 < 160.0);
    }

    #[test]
    fn test_camera_offset_recenters() {
        let camera = camera_at(100.0, -40.0);
        let (px, py) = project_to_minimap(&camera, 100.0, -40.0, 15.0, map()).unwrap();
        assert_eq!((px, py), (80.0, 80.0));
    }

    #[test]
    fn test_non_positive_radius_culls_everything() {
        let camera = camera_at(0.0, 0.0);
        assert_eq!(project_to_minimap(&camera, 0.0, 0.0, 0.0, map()), None);
        assert_eq!(project_to_minimap(&camera, 1.0, 0.0, -5.0, map()), None);
    }

    #[test]
    fn test_rect_origin_offsets_projection() {
        let camera = camera_at(0.0, 0.0);
        let shifted = Rect::new(40, 20, 160, 160);
        let (px, py) = project_to_minimap(&camera, 0.0, 0.0, 15.0, shifted).unwrap();
        assert_eq!((px, py), (120.0, 100.0));
    }
}
