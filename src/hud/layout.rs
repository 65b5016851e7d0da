//! Panel Layout Engine
//!
//! Pure mapping from screen dimensions to the four fixed HUD panel
//! rectangles. No state, no clamping: callers that hand in an undersized
//! screen get overlapping panels back (warned about at HUD construction,
//! see `compositor.rs`), because silently moving panels would break the
//! fixed-anchor contract the rest of the HUD is built on.

use sdl2::rect::Rect;

use crate::hud::config::HudConfig;

/// The four HUD panel rectangles for one screen size
///
/// Anchors (all flush to screen edges):
/// - minimap: top-left
/// - stats: bottom-left
/// - action bar: bottom, immediately right of the stats panel
/// - info: bottom-right
///
/// The action bar is deliberately *not* centered; it sits at
/// `x = panel_size`. This matches the shipped layout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PanelLayout {
    pub minimap: Rect,
    pub stats: Rect,
    pub action_bar: Rect,
    pub info: Rect,
}

impl PanelLayout {
    /// All four rects in draw order, for iteration.
    #[allow(dead_code)] // Used by the overlap/containment tests
    pub fn panels(&self) -> [Rect; 4] {
        [self.minimap, self.stats, self.action_bar, self.info]
    }
}

/// Computes panel placement for the given screen size.
///
/// Deterministic and side-effect free. For screens smaller than
/// [`min_screen_size`] the returned rects overlap or leave the screen;
/// formulas are applied unchanged either way.
pub fn compute_layout(screen_width: u32, screen_height: u32, config: &HudConfig) -> PanelLayout {
    let ps = config.panel_size;
    let bar_w = config.action_bar_width();
    let bar_h = config.action_bar_height;

    PanelLayout {
        minimap: Rect::new(0, 0, ps, ps),
        stats: Rect::new(0, screen_height as i32 - ps as i32, ps, ps),
        action_bar: Rect::new(
            ps as i32,
            screen_height as i32 - bar_h as i32,
            bar_w,
            bar_h,
        ),
        info: Rect::new(
            screen_width as i32 - ps as i32,
            screen_height as i32 - ps as i32,
            ps,
            ps,
        ),
    }
}

/// Smallest screen (width, height) at which the four panels fit without
/// overlapping. Used only for the construction-time warning.
pub fn min_screen_size(config: &HudConfig) -> (u32, u32) {
    (
        config.panel_size * 2 + config.action_bar_width(),
        config.action_bar_height,
    )
}
