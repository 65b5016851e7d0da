//! Camera and world/screen coordinate transforms
//!
//! World units are meters; the camera converts them to pixels at
//! `PIXELS_PER_METER * zoom` with the camera position at screen center.

/// Base scale: pixels per world meter at zoom 1.0.
pub const PIXELS_PER_METER: f32 = 100.0;

pub const DEFAULT_ZOOM: f32 = 0.5;
pub const MIN_ZOOM: f32 = 0.15;
pub const MAX_ZOOM: f32 = 2.0;
/// Zoom multiplier per mouse wheel notch.
pub const ZOOM_SPEED: f32 = 1.1;

/// Camera snapshot consumed by the renderer and the HUD each frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraState {
    /// Position in world meters
    pub x: f32,
    pub y: f32,
    /// Facing direction in degrees, not normalized (consumers normalize)
    pub heading_degrees: f32,
    pub zoom: f32,
}

impl CameraState {
    pub fn new() -> Self {
        CameraState {
            x: 0.0,
            y: 0.0,
            heading_degrees: 0.0,
            zoom: DEFAULT_ZOOM,
        }
    }

    /// Snaps the camera to a followed entity.
    pub fn follow(&mut self, x: f32, y: f32, heading_degrees: f32) {
        self.x = x;
        self.y = y;
        self.heading_degrees = heading_degrees;
    }

    /// Current pixels-per-meter scale.
    pub fn ppm(&self) -> f32 {
        PIXELS_PER_METER * self.zoom
    }

    pub fn zoom_in(&mut self) {
        self.zoom = (self.zoom * ZOOM_SPEED).min(MAX_ZOOM);
    }

    pub fn zoom_out(&mut self) {
        self.zoom = (self.zoom / ZOOM_SPEED).max(MIN_ZOOM);
    }
}

impl Default for CameraState {
    fn default() -> Self {
        Self::new()
    }
}

/// World meters to screen pixels, camera-centered.
pub fn world_to_screen(
    world_x: f32,
    world_y: f32,
    camera: &CameraState,
    screen_width: u32,
    screen_height: u32,
) -> (f32, f32) {
    let ppm = camera.ppm();
    (
        (world_x - camera.x) * ppm + screen_width as f32 / 2.0,
        (world_y - camera.y) * ppm + screen_height as f32 / 2.0,
    )
}

/// Screen pixels back to world meters.
pub fn screen_to_world(
    screen_x: f32,
    screen_y: f32,
    camera: &CameraState,
    screen_width: u32,
    screen_height: u32,
) -> (f32, f32) {
    let ppm = camera.ppm();
    (
        (screen_x - screen_width as f32 / 2.0) / ppm + camera.x,
        (screen_y - screen_height as f32 / 2.0) / ppm + camera.y,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_camera_position_maps_to_screen_center() {
        let camera = CameraState {
            x: 12.0,
            y: -3.0,
            heading_degrees: 0.0,
            zoom: 1.0,
        };
        let (sx, sy) = world_to_screen(12.0, -3.0, &camera, 1280, 720);
        assert_eq!((sx, sy), (640.0, 360.0));
    }

    #[test]
    fn test_round_trip() {
        let camera = CameraState {
            x: 5.0,
            y: 7.0,
            heading_degrees: 90.0,
            zoom: 0.5,
        };
        let (sx, sy) = world_to_screen(8.5, 2.25, &camera, 1280, 720);
        let (wx, wy) = screen_to_world(sx, sy, &camera, 1280, 720);
        assert!((wx - 8.5).abs() < 1e-4);
        assert!((wy - 2.25).abs() < 1e-4);
    }

    #[test]
    fn test_zoom_clamps_at_both_ends() {
        let mut camera = CameraState::new();
        for _ in 0..100 {
            camera.zoom_in();
        }
        assert_eq!(camera.zoom, MAX_ZOOM);

        for _ in 0..100 {
            camera.zoom_out();
        }
        assert_eq!(camera.zoom, MIN_ZOOM);
    }

    #[test]
    fn test_zoom_steps_stay_in_range() {
        let mut camera = CameraState::new();
        camera.zoom_in();
        assert!(camera.zoom > DEFAULT_ZOOM && camera.zoom <= MAX_ZOOM);
        camera.zoom_out();
        camera.zoom_out();
        assert!(camera.zoom < DEFAULT_ZOOM && camera.zoom >= MIN_ZOOM);
    }
}
