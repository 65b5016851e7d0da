//! Player entity
//!
//! A rectangle in world meters that faces the mouse cursor and strafes
//! with WASD relative to its facing direction. The camera follows it, so
//! the HUD's minimap marker stays centered.

use sdl2::keyboard::{KeyboardState, Scancode};
use sdl2::rect::Point;
use sdl2::render::Canvas;
use sdl2::video::Window;

use crate::camera::{world_to_screen, CameraState};
use crate::hud::config::{rgb, Rgb};

const PLAYER_LENGTH_M: f32 = 0.25; // front to back
const PLAYER_WIDTH_M: f32 = 0.5; // side to side
const PLAYER_SPEED_MPS: f32 = 1.5;

const BODY_COLOR: Rgb = [80, 180, 80];
const FRONT_COLOR: Rgb = [255, 255, 255];

pub struct Player {
    /// Position in world meters
    pub x: f32,
    pub y: f32,
    /// Facing angle in radians, 0 = east
    pub angle: f32,
    speed: f32,
}

impl Player {
    pub fn new(x: f32, y: f32) -> Self {
        Player {
            x,
            y,
            angle: 0.0,
            speed: PLAYER_SPEED_MPS,
        }
    }

    /// Facing direction in degrees, normalized to [0, 360).
    pub fn heading_degrees(&self) -> f32 {
        self.angle.to_degrees().rem_euclid(360.0)
    }

    /// Rotates to face a world-space target (typically the mouse cursor).
    pub fn face_towards(&mut self, target_x: f32, target_y: f32) {
        let dx = target_x - self.x;
        let dy = target_y - self.y;
        if dx != 0.0 || dy != 0.0 {
            self.angle = dy.atan2(dx);
        }
    }

    /// Moves by WASD relative to the facing direction. Diagonal input is
    /// normalized so net speed stays constant.
    pub fn update(&mut self, keyboard: &KeyboardState, dt: f32) {
        let mut forward = 0.0;
        let mut strafe = 0.0;
        if keyboard.is_scancode_pressed(Scancode::W) {
            forward += 1.0;
        }
        if keyboard.is_scancode_pressed(Scancode::S) {
            forward -= 1.0;
        }
        if keyboard.is_scancode_pressed(Scancode::D) {
            strafe += 1.0;
        }
        if keyboard.is_scancode_pressed(Scancode::A) {
            strafe -= 1.0;
        }
        self.apply_movement(forward, strafe, dt);
    }

    fn apply_movement(&mut self, forward: f32, strafe: f32, dt: f32) {
        let (fx, fy) = (self.angle.cos(), self.angle.sin());
        let right_angle = self.angle + std::f32::consts::FRAC_PI_2;
        let (rx, ry) = (right_angle.cos(), right_angle.sin());

        let move_x = forward * fx + strafe * rx;
        let move_y = forward * fy + strafe * ry;
        let magnitude = (move_x * move_x + move_y * move_y).sqrt();
        if magnitude > 0.0 {
            self.x += move_x / magnitude * self.speed * dt;
            self.y += move_y / magnitude * self.speed * dt;
        }
    }

    /// The 4 corners of the player rectangle in world meters, rotated by
    /// the facing angle. Order: front-right, front-left, back-left,
    /// back-right.
    fn corners(&self) -> [(f32, f32); 4] {
        let hl = PLAYER_LENGTH_M / 2.0;
        let hw = PLAYER_WIDTH_M / 2.0;
        let local = [(hl, -hw), (hl, hw), (-hl, hw), (-hl, -hw)];

        let (sin_a, cos_a) = self.angle.sin_cos();
        local.map(|(lx, ly)| {
            (
                self.x + lx * cos_a - ly * sin_a,
                self.y + lx * sin_a + ly * cos_a,
            )
        })
    }

    pub fn render(
        &self,
        canvas: &mut Canvas<Window>,
        camera: &CameraState,
        screen_width: u32,
        screen_height: u32,
    ) -> Result<(), String> {
        let corners = self.corners();
        let mut outline = [Point::new(0, 0); 5];
        for (i, (wx, wy)) in corners.iter().enumerate() {
            let (sx, sy) = world_to_screen(*wx, *wy, camera, screen_width, screen_height);
            outline[i] = Point::new(sx as i32, sy as i32);
        }
        outline[4] = outline[0];

        canvas.set_draw_color(rgb(BODY_COLOR));
        canvas.draw_lines(outline.as_slice())?;

        // Highlight the front edge (front-right to front-left)
        canvas.set_draw_color(rgb(FRONT_COLOR));
        canvas.draw_line(outline[0], outline[1])?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_face_towards_sets_heading() {
        let mut player = Player::new(0.0, 0.0);
        player.face_towards(0.0, 5.0); // +y is screen-down "south"
        assert!((player.heading_degrees() - 90.0).abs() < 1e-4);

        player.face_towards(-3.0, 0.0);
        assert!((player.heading_degrees() - 180.0).abs() < 1e-4);
    }

    #[test]
    fn test_face_towards_own_position_keeps_heading() {
        let mut player = Player::new(2.0, 2.0);
        player.face_towards(5.0, 2.0);
        let before = player.angle;
        player.face_towards(2.0, 2.0);
        assert_eq!(player.angle, before);
    }

    #[test]
    fn test_forward_movement_follows_heading() {
        let mut player = Player::new(0.0, 0.0);
        player.angle = 0.0; // facing east
        player.apply_movement(1.0, 0.0, 1.0);
        assert!((player.x - PLAYER_SPEED_MPS).abs() < 1e-4);
        assert!(player.y.abs() < 1e-4);
    }

    #[test]
    fn test_diagonal_movement_is_normalized() {
        let mut player = Player::new(0.0, 0.0);
        player.angle = 0.0;
        player.apply_movement(1.0, 1.0, 1.0);
        let distance = (player.x * player.x + player.y * player.y).sqrt();
        assert!((distance - PLAYER_SPEED_MPS).abs() < 1e-4);
    }

    #[test]
    fn test_corners_centered_on_position() {
        let player = Player::new(4.0, -1.0);
        let corners = player.corners();
        let mean_x: f32 = corners.iter().map(|c| c.0).sum::<f32>() / 4.0;
        let mean_y: f32 = corners.iter().map(|c| c.1).sum::<f32>() / 4.0;
        assert!((mean_x - 4.0).abs() < 1e-5);
        assert!((mean_y + 1.0).abs() < 1e-5);
    }
}
