//! Action Bar Input State Machine
//!
//! A 2x12 grid of 24 slots statically bound to physical keys: row 0 to the
//! digit-row keys (`1..9 0 - =`), row 1 to the same physical keys with
//! shift (`! @ # $ % ^ & * ( ) _ +`). Bindings are fixed at construction
//! and validated for duplicates (fatal configuration error).
//!
//! Two orthogonal views over the same binding table, kept separate so
//! neither can double-fire or miss a release:
//!
//! - **Edge-triggered activation**: [`ActionBar::handle_event`] returns a
//!   slot coordinate exactly once per physical key press. OS key repeats
//!   are suppressed.
//! - **Level-triggered held state**: [`ActionBar::poll_held`] samples the
//!   physical keyboard once per frame, independent of the event queue, so
//!   `held` is true for every frame the key is down regardless of frame
//!   rate.
//!
//! A slot renders with a brighter background and an orange border while
//! held; releasing the key reverts it. There is no latched "selected"
//! slot.

use sdl2::event::Event;
use sdl2::keyboard::{Mod, Scancode};
use sdl2::rect::Rect;
use sdl2::render::Canvas;
use sdl2::video::Window;

use crate::hud::config::{rgb, HudConfig};
use crate::text::draw_simple_text;

/// Rows in the fixed key binding table.
pub const BINDING_ROWS: usize = 2;

/// Columns in the fixed key binding table.
pub const BINDING_COLS: usize = 12;

/// Physical digit-row keys, left to right. Both rows bind to these; row 1
/// adds the shift modifier.
const DIGIT_ROW_SCANCODES: [Scancode; BINDING_COLS] = [
    Scancode::Num1,
    Scancode::Num2,
    Scancode::Num3,
    Scancode::Num4,
    Scancode::Num5,
    Scancode::Num6,
    Scancode::Num7,
    Scancode::Num8,
    Scancode::Num9,
    Scancode::Num0,
    Scancode::Minus,
    Scancode::Equals,
];

const TOP_ROW_LABELS: [&str; BINDING_COLS] =
    ["1", "2", "3", "4", "5", "6", "7", "8", "9", "0", "-", "="];

const BOTTOM_ROW_LABELS: [&str; BINDING_COLS] =
    ["!", "@", "#", "$", "%", "^", "&", "*", "(", ")", "_", "+"];

/// One action bar slot: a static binding plus per-frame input state
#[derive(Debug, Clone)]
pub struct ActionSlot {
    /// Physical key this slot is bound to
    pub scancode: Scancode,
    /// Whether the binding requires shift (row 1)
    pub shifted: bool,
    /// Key cap label shown in the cell
    pub label: &'static str,
    /// True for every frame the bound key reports pressed
    pub held: bool,
    /// True if this slot fired an activation since `begin_frame`. The
    /// host consumes activations through `handle_event`'s return value;
    /// this flag is the per-frame record of the same edge.
    #[allow(dead_code)]
    pub activated_this_frame: bool,
}

/// The 24-slot keyboard-driven control surface
pub struct ActionBar {
    // Flat row-major table, index = row * BINDING_COLS + col.
    slots: Vec<ActionSlot>,
}

impl ActionBar {
    /// Builds the slot table from the fixed bindings.
    ///
    /// Fails if any two slots share a (key, shift) binding. With the
    /// built-in table that cannot happen, but the check is the contract:
    /// a HUD with ambiguous bindings must refuse to start.
    pub fn new() -> Result<Self, String> {
        let mut slots = Vec::with_capacity(BINDING_ROWS * BINDING_COLS);
        for row in 0..BINDING_ROWS {
            for col in 0..BINDING_COLS {
                slots.push(ActionSlot {
                    scancode: DIGIT_ROW_SCANCODES[col],
                    shifted: row == 1,
                    label: if row == 0 {
                        TOP_ROW_LABELS[col]
                    } else {
                        BOTTOM_ROW_LABELS[col]
                    },
                    held: false,
                    activated_this_frame: false,
                });
            }
        }
        validate_bindings(&slots)?;
        Ok(ActionBar { slots })
    }

    /// Clears per-frame activation flags. Call once at the top of each
    /// frame, before feeding events.
    pub fn begin_frame(&mut self) {
        for slot in &mut self.slots {
            slot.activated_this_frame = false;
        }
    }

    /// Processes one raw input event.
    ///
    /// Returns `Some((row, col))` only for a non-repeat key-down of a
    /// bound physical key; key-ups, OS repeats, and unrelated events
    /// return `None` and touch no slot state. Shift at the time of the
    /// press selects the row.
    pub fn handle_event(&mut self, event: &Event) -> Option<(usize, usize)> {
        if let Event::KeyDown {
            scancode: Some(scancode),
            keymod,
            repeat,
            ..
        } = event
        {
            if *repeat {
                return None;
            }
            let col = DIGIT_ROW_SCANCODES.iter().position(|s| s == scancode)?;
            let row = if keymod.intersects(Mod::LSHIFTMOD | Mod::RSHIFTMOD) {
                1
            } else {
                0
            };
            self.slots[row * BINDING_COLS + col].activated_this_frame = true;
            return Some((row, col));
        }
        None
    }

    /// Samples the physical keyboard state for every slot.
    ///
    /// `is_pressed` reports whether a scancode is currently down (the host
    /// passes `KeyboardState::is_scancode_pressed`); `shift_held` is the
    /// current shift modifier. A slot is held only when its key is down
    /// *and* the shift state matches its row, so the two rows are mutually
    /// exclusive per physical key.
    pub fn poll_held<F: Fn(Scancode) -> bool>(&mut self, is_pressed: F, shift_held: bool) {
        for slot in &mut self.slots {
            slot.held = is_pressed(slot.scancode) && slot.shifted == shift_held;
        }
    }

    /// Slot lookup by grid coordinate.
    pub fn slot(&self, row: usize, col: usize) -> &ActionSlot {
        &self.slots[row * BINDING_COLS + col]
    }

    /// Draws the action bar grid into its panel rect. The 2px outer
    /// border is the compositor's job, shared with the other panels.
    pub fn render(
        &self,
        canvas: &mut Canvas<Window>,
        rect: Rect,
        config: &HudConfig,
    ) -> Result<(), String> {
        let pal = &config.palette;
        let cell = config.cell_size;

        for row in 0..BINDING_ROWS {
            for col in 0..BINDING_COLS {
                let slot = self.slot(row, col);
                let cell_rect = Rect::new(
                    rect.x() + (col as u32 * cell) as i32,
                    rect.y() + (row as u32 * cell) as i32,
                    cell,
                    cell,
                );

                let bg = if slot.held { pal.slot_bg_pressed } else { pal.slot_bg };
                canvas.set_draw_color(rgb(bg));
                canvas.fill_rect(cell_rect)?;

                let border = if slot.held { pal.orange } else { pal.cyan_dark };
                canvas.set_draw_color(rgb(border));
                canvas.draw_rect(cell_rect)?;

                draw_simple_text(
                    canvas,
                    slot.label,
                    cell_rect.x() + 3,
                    cell_rect.y() + 3,
                    rgb(pal.cyan_dim),
                    1,
                )?;
            }
        }

        Ok(())
    }
}

/// Rejects slot tables where two slots share a (key, shift) binding.
fn validate_bindings(slots: &[ActionSlot]) -> Result<(), String> {
    for (i, a) in slots.iter().enumerate() {
        for b in &slots[i + 1..] {
            if a.scancode == b.scancode && a.shifted == b.shifted {
                return Err(format!(
                    "duplicate action bar binding: {:?} (shift: {})",
                    a.scancode, a.shifted
                ));
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key_down(scancode: Scancode, keymod: Mod, repeat: bool) -> Event {
        Event::KeyDown {
            timestamp: 0,
            window_id: 0,
            keycode: None,
            scancode: Some(scancode),
            keymod,
            repeat,
        }
    }

    fn key_up(scancode: Scancode) -> Event {
        Event::KeyUp {
            timestamp: 0,
            window_id: 0,
            keycode: None,
            scancode: Some(scancode),
            keymod: Mod::NOMOD,
            repeat: false,
        }
    }

    #[test]
    fn test_builds_24_uniquely_bound_slots() {
        let bar = ActionBar::new().unwrap();
        assert_eq!(bar.slots.len(), 24);
        assert_eq!(bar.slot(0, 0).label, "1");
        assert_eq!(bar.slot(0, 11).label, "=");
        assert_eq!(bar.slot(1, 0).label, "!");
        assert_eq!(bar.slot(1, 11).label, "+");
        // Rows share physical keys but differ in shift
        assert_eq!(bar.slot(0, 4).scancode, bar.slot(1, 4).scancode);
        assert!(!bar.slot(0, 4).shifted);
        assert!(bar.slot(1, 4).shifted);
    }

    #[test]
    fn test_duplicate_binding_is_fatal() {
        let mut slots = ActionBar::new().unwrap().slots;
        slots[1].scancode = slots[0].scancode;
        slots[1].shifted = slots[0].shifted;
        assert!(validate_bindings(&slots).is_err());
    }

    #[test]
    fn test_key_down_activates_exactly_once() {
        let mut bar = ActionBar::new().unwrap();
        bar.begin_frame();

        let slot = bar.handle_event(&key_down(Scancode::Num3, Mod::NOMOD, false));
        assert_eq!(slot, Some((0, 2)));
        assert!(bar.slot(0, 2).activated_this_frame);

        // Holding across N frames with no new key-down: zero further
        // activations, held stays true.
        for _ in 0..5 {
            bar.begin_frame();
            bar.poll_held(|s| s == Scancode::Num3, false);
            assert!(bar.slot(0, 2).held);
            assert!(!bar.slot(0, 2).activated_this_frame);
        }

        bar.handle_event(&key_up(Scancode::Num3));
        bar.poll_held(|_| false, false);
        assert!(!bar.slot(0, 2).held);
    }

    #[test]
    fn test_os_repeat_suppressed() {
        let mut bar = ActionBar::new().unwrap();
        bar.begin_frame();
        assert_eq!(
            bar.handle_event(&key_down(Scancode::Num1, Mod::NOMOD, true)),
            None
        );
        assert!(!bar.slot(0, 0).activated_this_frame);
    }

    #[test]
    fn test_shift_selects_bottom_row() {
        let mut bar = ActionBar::new().unwrap();
        assert_eq!(
            bar.handle_event(&key_down(Scancode::Equals, Mod::LSHIFTMOD, false)),
            Some((1, 11))
        );
        assert_eq!(
            bar.handle_event(&key_down(Scancode::Equals, Mod::NOMOD, false)),
            Some((0, 11))
        );
    }

    #[test]
    fn test_key_up_and_unbound_keys_return_none() {
        let mut bar = ActionBar::new().unwrap();
        assert_eq!(bar.handle_event(&key_up(Scancode::Num1)), None);
        assert_eq!(
            bar.handle_event(&key_down(Scancode::W, Mod::NOMOD, false)),
            None
        );
        for slot in &bar.slots {
            assert!(!slot.held && !slot.activated_this_frame);
        }
    }

    #[test]
    fn test_held_rows_are_shift_exclusive() {
        let mut bar = ActionBar::new().unwrap();

        // Key down without shift: only the top-row slot is held
        bar.poll_held(|s| s == Scancode::Num5, false);
        assert!(bar.slot(0, 4).held);
        assert!(!bar.slot(1, 4).held);

        // Same key with shift: only the bottom-row slot is held
        bar.poll_held(|s| s == Scancode::Num5, true);
        assert!(!bar.slot(0, 4).held);
        assert!(bar.slot(1, 4).held);
    }

    #[test]
    fn test_release_reverts_held_without_latch() {
        let mut bar = ActionBar::new().unwrap();
        bar.begin_frame();
        bar.handle_event(&key_down(Scancode::Num7, Mod::NOMOD, false));
        bar.poll_held(|s| s == Scancode::Num7, false);
        assert!(bar.slot(0, 6).held);

        // After release nothing stays selected
        bar.begin_frame();
        bar.poll_held(|_| false, false);
        assert!(!bar.slot(0, 6).held);
        assert!(!bar.slot(0, 6).activated_this_frame);
    }
}
