//! HUD Configuration
//!
//! All geometry and palette constants for the HUD live in a single
//! `HudConfig` value passed to every component at construction. Nothing in
//! the HUD reads module-level globals, so two HUD instances (split-screen)
//! cannot contaminate each other.
//!
//! Defaults reproduce the retro cyan/orange theme. Overrides can be loaded
//! from JSON at startup; the config is immutable afterwards.

use sdl2::pixels::Color;
use serde::Deserialize;

/// RGB triple as stored in config files. Converted to an SDL color at the
/// draw site via [`rgb`].
pub type Rgb = [u8; 3];

/// Converts a config color triple to an SDL draw color.
pub fn rgb(c: Rgb) -> Color {
    Color::RGB(c[0], c[1], c[2])
}

/// Retro cyan/orange color palette
///
/// Every color the HUD draws with. Field names follow the theme roles, not
/// the panels, so panels can share entries.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Palette {
    pub cyan: Rgb,
    pub cyan_dim: Rgb,
    pub cyan_dark: Rgb,
    pub orange: Rgb,
    pub orange_dim: Rgb,
    pub purple: Rgb,
    pub purple_dim: Rgb,
    pub green: Rgb,
    pub panel_bg: Rgb,
    pub slot_bg: Rgb,
    pub slot_bg_pressed: Rgb,
    pub map_bg: Rgb,
    pub bar_bg: Rgb,
}

impl Default for Palette {
    fn default() -> Self {
        Palette {
            cyan: [0, 255, 255],
            cyan_dim: [0, 128, 128],
            cyan_dark: [0, 64, 64],
            orange: [255, 140, 0],
            orange_dim: [128, 70, 0],
            purple: [180, 100, 255],
            purple_dim: [90, 50, 128],
            green: [0, 255, 100],
            panel_bg: [8, 8, 16],
            slot_bg: [14, 16, 28],
            slot_bg_pressed: [20, 24, 40],
            map_bg: [4, 4, 8],
            bar_bg: [2, 2, 4],
        }
    }
}

/// Immutable HUD configuration
///
/// Validated once at construction ([`HudConfig::validate`]); a HUD refuses
/// to start with a config that would produce a corrupted layout.
///
/// # Example
///
/// ```rust
/// let config = HudConfig {
///     minimap_radius: 25.0,
///     ..Default::default()
/// };
/// config.validate()?;
/// ```
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct HudConfig {
    /// Side length of the three square panels (minimap, stats, info)
    pub panel_size: u32,

    /// Action bar grid columns (must match the key binding table)
    pub action_bar_cols: u32,

    /// Action bar grid rows (must match the key binding table)
    pub action_bar_rows: u32,

    /// Side length of one action bar cell
    pub cell_size: u32,

    /// Total action bar height (must equal rows * cell_size)
    pub action_bar_height: u32,

    /// Minimap coverage radius in world meters around the camera
    pub minimap_radius: f32,

    /// Inset from the minimap panel edge to the map area
    pub minimap_inner_margin: u32,

    /// Vertical distance between scanlines
    pub scanline_spacing: u32,

    /// Scanline opacity (0 = invisible)
    pub scanline_alpha: u8,

    /// Leg length of the L-shaped corner accents
    pub corner_size: u32,

    pub palette: Palette,
}

impl Default for HudConfig {
    fn default() -> Self {
        HudConfig {
            panel_size: 160,
            action_bar_cols: 12,
            action_bar_rows: 2,
            cell_size: 80,
            action_bar_height: 160,
            minimap_radius: 15.0,
            minimap_inner_margin: 8,
            scanline_spacing: 3,
            scanline_alpha: 20,
            corner_size: 8,
            palette: Palette::default(),
        }
    }
}

impl HudConfig {
    /// Total action bar width, derived from the cell grid.
    pub fn action_bar_width(&self) -> u32 {
        self.action_bar_cols * self.cell_size
    }

    /// Checks the config for values that would corrupt the layout.
    ///
    /// Returns a description of the first problem found. Out-of-range
    /// *numeric inputs* (stat values, radius) are clamped at use sites
    /// instead; validation only covers structural geometry. The minimums
    /// here are what the draw code subtracts from panel and cell rects
    /// (frame borders, margins, the minimap label strip), so geometry that
    /// validates can never underflow at render time.
    pub fn validate(&self) -> Result<(), String> {
        let minimap_overhead = 2 * self.minimap_inner_margin + crate::hud::minimap::LABEL_STRIP;
        if self.panel_size <= minimap_overhead {
            return Err(format!(
                "panel_size {} leaves no minimap map area (margins and label strip take {})",
                self.panel_size, minimap_overhead
            ));
        }
        // 1px slot border, 3px inset, 5px key label glyph
        if self.cell_size < 12 {
            return Err(format!(
                "cell_size {} is too small for the slot border and key label",
                self.cell_size
            ));
        }
        if self.action_bar_rows != crate::hud::action_bar::BINDING_ROWS as u32 {
            return Err(format!(
                "action_bar_rows is {} but the key binding table has {} rows",
                self.action_bar_rows,
                crate::hud::action_bar::BINDING_ROWS
            ));
        }
        if self.action_bar_cols != crate::hud::action_bar::BINDING_COLS as u32 {
            return Err(format!(
                "action_bar_cols is {} but the key binding table has {} columns",
                self.action_bar_cols,
                crate::hud::action_bar::BINDING_COLS
            ));
        }
        if self.action_bar_height != self.action_bar_rows * self.cell_size {
            return Err(format!(
                "action_bar_height {} does not equal rows * cell_size ({})",
                self.action_bar_height,
                self.action_bar_rows * self.cell_size
            ));
        }
        if self.scanline_spacing == 0 {
            return Err("scanline_spacing must be positive".to_string());
        }
        Ok(())
    }

    /// Loads config overrides from a JSON string and validates the result.
    ///
    /// Absent fields keep their defaults, so a file like
    /// `{"minimap_radius": 25.0}` is a complete override.
    pub fn from_json(json: &str) -> Result<Self, String> {
        let config: HudConfig = serde_json::from_str(json)
            .map_err(|e| format!("Failed to parse HUD config: {}", e))?;
        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(HudConfig::default().validate().is_ok());
    }

    #[test]
    fn test_default_geometry_matches_theme() {
        let config = HudConfig::default();
        assert_eq!(config.panel_size, 160);
        assert_eq!(config.action_bar_width(), 960);
        assert_eq!(config.action_bar_height, 160);
    }

    #[test]
    fn test_zero_panel_size_rejected() {
        let config = HudConfig {
            panel_size: 0,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_panel_too_small_for_map_area_rejected() {
        // Margins (2 * 8) plus the label strip (12) exceed the panel; the
        // map-area height subtraction must never get to underflow.
        let result = HudConfig::from_json(r#"{"panel_size": 20}"#);
        assert!(result.is_err());

        // Smallest panel that leaves a map area passes.
        let config = HudConfig {
            panel_size: 29,
            ..Default::default()
        };
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_tiny_cell_size_rejected() {
        let config = HudConfig {
            cell_size: 4,
            action_bar_height: 8,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_cell_grid_height_mismatch_rejected() {
        let config = HudConfig {
            action_bar_height: 100, // rows * cell_size = 160
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_row_count_must_match_binding_table() {
        let config = HudConfig {
            action_bar_rows: 3,
            action_bar_height: 240,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_json_partial_override() {
        let config = HudConfig::from_json(r#"{"minimap_radius": 25.0}"#).unwrap();
        assert_eq!(config.minimap_radius, 25.0);
        assert_eq!(config.panel_size, 160); // default preserved
    }

    #[test]
    fn test_json_invalid_geometry_rejected() {
        // Parses fine, fails structural validation
        let result = HudConfig::from_json(r#"{"cell_size": 64}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_rgb_conversion() {
        let c = rgb([255, 140, 0]);
        assert_eq!(c, Color::RGB(255, 140, 0));
    }
}
