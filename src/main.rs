use sdl2::event::Event;
use sdl2::keyboard::Scancode;
use std::time::Instant;

mod camera;
mod hex_grid;
mod hud;
mod input_system;
mod player;
mod text;

use camera::{screen_to_world, CameraState, MAX_ZOOM, MIN_ZOOM};
use hex_grid::HexGrid;
use hud::config::{rgb, Rgb};
use hud::{HudConfig, HudSystem};
use input_system::{translate_event, GameAction};
use player::Player;

const SCREEN_WIDTH: u32 = 1280;
const SCREEN_HEIGHT: u32 = 720;
const BG_COLOR: Rgb = [20, 20, 30];

/// Stamina drain while moving / regen while resting, per second.
const STAMINA_DRAIN: f32 = 0.25;
const STAMINA_REGEN: f32 = 0.15;

/// Optional HUD config overrides, read once at startup. A missing file
/// means defaults; a malformed one is a startup error.
fn load_hud_config() -> Result<HudConfig, String> {
    match std::fs::read_to_string("hud.json") {
        Ok(json) => HudConfig::from_json(&json),
        Err(_) => Ok(HudConfig::default()),
    }
}

fn main() -> Result<(), String> {
    let sdl_context = sdl2::init()?;
    let video_subsystem = sdl_context.video()?;

    let window = video_subsystem
        .window("Decoherence", SCREEN_WIDTH, SCREEN_HEIGHT)
        .position_centered()
        .build()
        .map_err(|e| e.to_string())?;

    // target_texture: the HUD renders its minimap and scanline overlay
    // through offscreen render targets.
    let mut canvas = window
        .into_canvas()
        .accelerated()
        .present_vsync()
        .target_texture()
        .build()
        .map_err(|e| e.to_string())?;
    let texture_creator = canvas.texture_creator();

    let config = load_hud_config()?;
    let mut hud = HudSystem::new(
        &mut canvas,
        &texture_creator,
        config,
        SCREEN_WIDTH,
        SCREEN_HEIGHT,
    )?;

    let grid = HexGrid::new();
    let mut player = Player::new(0.0, 0.0);
    let mut camera = CameraState::new();
    let mut stamina: f32 = 1.0;

    let mut event_pump = sdl_context.event_pump()?;
    let mut last_frame = Instant::now();
    let mut running = true;

    while running {
        let now = Instant::now();
        let dt = now.duration_since(last_frame).as_secs_f32();
        last_frame = now;

        // Events first: the HUD claims its bound keys, the rest map to
        // host actions.
        hud.begin_frame();
        let events: Vec<Event> = event_pump.poll_iter().collect();
        for event in &events {
            if let Some((row, col)) = hud.handle_event(event) {
                println!("Action slot activated: ({}, {})", row, col);
                continue;
            }
            match translate_event(event) {
                Some(GameAction::Quit) => running = false,
                Some(GameAction::ZoomIn) => camera.zoom_in(),
                Some(GameAction::ZoomOut) => camera.zoom_out(),
                None => {}
            }
        }

        let keyboard = event_pump.keyboard_state();
        let shift_held = keyboard.is_scancode_pressed(Scancode::LShift)
            || keyboard.is_scancode_pressed(Scancode::RShift);
        hud.poll_held(|sc| keyboard.is_scancode_pressed(sc), shift_held);

        let mouse = event_pump.mouse_state();
        let (target_x, target_y) = screen_to_world(
            mouse.x() as f32,
            mouse.y() as f32,
            &camera,
            SCREEN_WIDTH,
            SCREEN_HEIGHT,
        );
        player.face_towards(target_x, target_y);
        player.update(&keyboard, dt);
        camera.follow(player.x, player.y, player.heading_degrees());

        // Demo stat feed: stamina tracks movement, focus tracks zoom.
        let moving = [Scancode::W, Scancode::A, Scancode::S, Scancode::D]
            .iter()
            .any(|&sc| keyboard.is_scancode_pressed(sc));
        stamina = if moving {
            (stamina - STAMINA_DRAIN * dt).max(0.0)
        } else {
            (stamina + STAMINA_REGEN * dt).min(1.0)
        };
        let focus = (camera.zoom - MIN_ZOOM) / (MAX_ZOOM - MIN_ZOOM);
        hud.update_stats(1.0, stamina, focus);

        canvas.set_draw_color(rgb(BG_COLOR));
        canvas.clear();
        grid.render(&mut canvas, &camera, SCREEN_WIDTH, SCREEN_HEIGHT)?;
        player.render(&mut canvas, &camera, SCREEN_WIDTH, SCREEN_HEIGHT)?;
        hud.render(&mut canvas, &camera, &grid)?;
        canvas.present();
    }

    Ok(())
}
