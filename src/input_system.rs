//! Host input translation
//!
//! Converts raw SDL2 events into high-level `GameAction`s for the game
//! loop, decoupling input handling from action execution. Action bar keys
//! are not handled here: the main loop offers every event to the HUD
//! first, and the HUD claims the ones bound to its slots.

use sdl2::event::Event;
use sdl2::keyboard::Keycode;

/// High-level actions the host game loop executes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    Quit,
    ZoomIn,
    ZoomOut,
}

/// Translates one SDL2 event into a host action, if it maps to one.
///
/// Movement (WASD) and mouse aim are intentionally absent: those are
/// level-triggered and read from the keyboard/mouse state each frame, not
/// from the event queue.
pub fn translate_event(event: &Event) -> Option<GameAction> {
    match event {
        Event::Quit { .. } => Some(GameAction::Quit),
        Event::KeyDown {
            keycode: Some(Keycode::Escape),
            ..
        } => Some(GameAction::Quit),
        Event::MouseWheel { y, .. } if *y > 0 => Some(GameAction::ZoomIn),
        Event::MouseWheel { y, .. } if *y < 0 => Some(GameAction::ZoomOut),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sdl2::keyboard::Mod;
    use sdl2::mouse::MouseWheelDirection;

    fn wheel(y: i32) -> Event {
        Event::MouseWheel {
            timestamp: 0,
            window_id: 0,
            which: 0,
            x: 0,
            y,
            direction: MouseWheelDirection::Normal,
            precise_x: 0.0,
            precise_y: y as f32,
            mouse_x: 0,
            mouse_y: 0,
        }
    }

    #[test]
    fn test_escape_quits() {
        let event = Event::KeyDown {
            timestamp: 0,
            window_id: 0,
            keycode: Some(Keycode::Escape),
            scancode: None,
            keymod: Mod::NOMOD,
            repeat: false,
        };
        assert_eq!(translate_event(&event), Some(GameAction::Quit));
    }

    #[test]
    fn test_wheel_maps_to_zoom() {
        assert_eq!(translate_event(&wheel(1)), Some(GameAction::ZoomIn));
        assert_eq!(translate_event(&wheel(-2)), Some(GameAction::ZoomOut));
        assert_eq!(translate_event(&wheel(0)), None);
    }

    #[test]
    fn test_unrelated_keys_ignored() {
        let event = Event::KeyDown {
            timestamp: 0,
            window_id: 0,
            keycode: Some(Keycode::W),
            scancode: None,
            keymod: Mod::NOMOD,
            repeat: false,
        };
        assert_eq!(translate_event(&event), None);
    }
}
