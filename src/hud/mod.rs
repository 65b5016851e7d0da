//! Retro HUD Overlay
//!
//! Fixed screen-space HUD drawn over the world viewport every frame: a
//! minimap (top-left), stat bars (bottom-left), a 24-slot keyboard-mapped
//! action bar (bottom, right of the stats panel), a telemetry readout
//! (bottom-right), and a translucent CRT scanline overlay on top of
//! everything.
//!
//! # Architecture
//!
//! The HUD is stateless per frame apart from input and stat state:
//! - [`config`]: one immutable `HudConfig` (geometry + palette) passed to
//!   every component; no module globals, so multiple HUD instances stay
//!   independent.
//! - [`layout`]: pure screen-size to panel-rect mapping.
//! - [`vitals`]: the clamped stat model and its bar rendering.
//! - [`action_bar`]: the key-bound slot state machine (edge-triggered
//!   activation, level-triggered held state).
//! - [`minimap`]: world to minimap projection with radius culling and
//!   intermediate-texture clipping.
//! - [`scanline`]: the overlay texture, built once per screen size.
//! - [`compositor`]: `HudSystem`, which owns all of the above and walks
//!   the fixed draw-pass order each frame.
//!
//! # Example Usage
//!
//! ```rust
//! let mut hud = HudSystem::new(&mut canvas, &texture_creator,
//!                              HudConfig::default(), 1280, 720)?;
//!
//! // Each frame:
//! hud.begin_frame();
//! for event in &events {
//!     if let Some((row, col)) = hud.handle_event(event) {
//!         // slot activated exactly once per physical press
//!     }
//! }
//! hud.poll_held(|sc| keyboard.is_scancode_pressed(sc), shift_held);
//! hud.update_stats(health, stamina, focus);
//! hud.render(&mut canvas, &camera, &grid)?;
//! ```

pub mod action_bar;
pub mod compositor;
pub mod config;
pub mod layout;
pub mod minimap;
pub mod scanline;
pub mod vitals;

pub use compositor::HudSystem;
pub use config::HudConfig;
pub use minimap::MinimapGrid;
