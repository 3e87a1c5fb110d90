//! Theme support for the pinout viewer.
//!
//! Provides color palettes (Light, Dark, Nord) and a centralized manager.
//! Marker fills are derived from the semantic colors through the
//! presentation layer; the palette here only defines the raw colors.
//!
//! # Examples
//!
//! ```
//! use pinscope::theme::ThemeManager;
//!
//! let manager = ThemeManager::new();
//! let nord = manager.get_theme("Nord").unwrap();
//! println!("Nord background: {:?}", nord.colors.background);
//! ```

use egui::Color32;
use std::collections::HashMap;

/// Complete color palette for a theme.
#[derive(Debug, Clone)]
pub struct ThemeColors {
    // Background colors
    pub background: Color32,
    pub panel_background: Color32,
    pub extreme_background: Color32,

    // Foreground colors
    pub text: Color32,
    pub text_dim: Color32,

    // Interactive colors
    pub selection: Color32,
    pub hover: Color32,
    pub border: Color32,

    // Semantic colors (pin categories, marker adornments)
    pub red: Color32,
    pub orange: Color32,
    pub yellow: Color32,
    pub green: Color32,
    pub cyan: Color32,
    pub blue: Color32,
    pub purple: Color32,
    pub gray: Color32,
}

/// A complete theme definition with metadata and color palette.
#[derive(Debug, Clone)]
pub struct Theme {
    pub name: String,
    pub description: String,
    pub colors: ThemeColors,
}

/// Centralized theme manager providing access to all available themes.
pub struct ThemeManager {
    themes: HashMap<String, Theme>,
}

impl ThemeManager {
    /// Creates a new ThemeManager initialized with all built-in themes.
    pub fn new() -> Self {
        let mut themes = HashMap::new();

        themes.insert("Light".to_string(), light_theme());
        themes.insert("Dark".to_string(), dark_theme());
        themes.insert("Nord".to_string(), nord_theme());

        Self { themes }
    }

    /// Retrieves a theme by name.
    pub fn get_theme(&self, name: &str) -> Option<&Theme> {
        self.themes.get(name)
    }

    /// Returns a sorted list of all available theme names.
    pub fn list_themes(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.themes.keys().map(|s| s.as_str()).collect();
        names.sort();
        names
    }

    /// Applies a theme's colors to egui visuals.
    pub fn apply_theme(&self, theme: &Theme, visuals: &mut egui::Visuals) {
        let colors = &theme.colors;

        visuals.panel_fill = colors.panel_background;
        visuals.extreme_bg_color = colors.extreme_background;
        visuals.faint_bg_color = colors.hover;

        visuals.override_text_color = Some(colors.text);

        visuals.selection.bg_fill = colors.selection;
        visuals.selection.stroke.color = colors.blue;

        visuals.widgets.noninteractive.bg_fill = colors.panel_background;
        visuals.widgets.inactive.bg_fill = colors.hover;
        visuals.widgets.hovered.bg_fill = colors.hover;
        visuals.widgets.active.bg_fill = colors.selection;

        visuals.hyperlink_color = colors.cyan;

        visuals.error_fg_color = colors.red;
        visuals.warn_fg_color = colors.orange;
    }
}

impl Default for ThemeManager {
    fn default() -> Self {
        Self::new()
    }
}

fn light_theme() -> Theme {
    Theme {
        name: "Light".to_string(),
        description: "Light theme for printed-page-like reading".to_string(),
        colors: ThemeColors {
            background: Color32::from_rgb(250, 250, 249),
            panel_background: Color32::from_rgb(250, 250, 249),
            extreme_background: Color32::from_rgb(255, 255, 255),

            text: Color32::from_rgb(20, 20, 20),
            text_dim: Color32::from_rgb(125, 125, 125),

            selection: Color32::from_rgb(186, 205, 252),
            hover: Color32::from_rgb(225, 225, 223),
            border: Color32::from_rgb(165, 165, 160),

            red: Color32::from_rgb(196, 44, 38),
            orange: Color32::from_rgb(226, 118, 26),
            yellow: Color32::from_rgb(176, 138, 8),
            green: Color32::from_rgb(44, 154, 48),
            cyan: Color32::from_rgb(8, 152, 170),
            blue: Color32::from_rgb(46, 98, 196),
            purple: Color32::from_rgb(134, 62, 176),
            gray: Color32::from_rgb(118, 118, 118),
        },
    }
}

fn dark_theme() -> Theme {
    Theme {
        name: "Dark".to_string(),
        description: "Default dark theme".to_string(),
        colors: ThemeColors {
            background: Color32::from_rgb(37, 38, 41),
            panel_background: Color32::from_rgb(37, 38, 41),
            extreme_background: Color32::from_rgb(18, 18, 20),

            text: Color32::from_rgb(240, 240, 240),
            text_dim: Color32::from_rgb(158, 158, 162),

            selection: Color32::from_rgb(54, 82, 125),
            hover: Color32::from_rgb(66, 68, 72),
            border: Color32::from_rgb(104, 104, 108),

            red: Color32::from_rgb(224, 82, 70),
            orange: Color32::from_rgb(240, 152, 28),
            yellow: Color32::from_rgb(238, 198, 36),
            green: Color32::from_rgb(64, 198, 118),
            cyan: Color32::from_rgb(44, 186, 162),
            blue: Color32::from_rgb(74, 158, 222),
            purple: Color32::from_rgb(162, 98, 188),
            gray: Color32::from_rgb(146, 158, 160),
        },
    }
}

/// Official colors from: https://www.nordtheme.com/docs/colors-and-palettes
fn nord_theme() -> Theme {
    Theme {
        name: "Nord".to_string(),
        description: "Arctic, north-bluish Nord palette".to_string(),
        colors: ThemeColors {
            background: hex_to_color32("#2e3440"),
            panel_background: hex_to_color32("#2e3440"),
            extreme_background: hex_to_color32("#272c36"),

            text: hex_to_color32("#eceff4"),
            text_dim: hex_to_color32("#7b88a1"),

            selection: hex_to_color32("#434c5e"),
            hover: hex_to_color32("#3b4252"),
            border: hex_to_color32("#4c566a"),

            red: hex_to_color32("#bf616a"),
            orange: hex_to_color32("#d08770"),
            yellow: hex_to_color32("#ebcb8b"),
            green: hex_to_color32("#a3be8c"),
            cyan: hex_to_color32("#88c0d0"),
            blue: hex_to_color32("#81a1c1"),
            purple: hex_to_color32("#b48ead"),
            gray: hex_to_color32("#4c566a"),
        },
    }
}

/// Converts a hex color string (like "#2e3440") to Color32.
pub fn hex_to_color32(hex: &str) -> Color32 {
    let hex = hex.trim_start_matches('#');

    if hex.len() == 6 {
        let r = u8::from_str_radix(&hex[0..2], 16).unwrap_or(0);
        let g = u8::from_str_radix(&hex[2..4], 16).unwrap_or(0);
        let b = u8::from_str_radix(&hex[4..6], 16).unwrap_or(0);
        Color32::from_rgb(r, g, b)
    } else {
        Color32::from_rgb(0, 0, 0) // Fallback to black
    }
}

/// Adjusts the brightness of a color by a factor (1.0 = no change, >1.0 = brighter, <1.0 = darker)
pub fn adjust_brightness(color: Color32, factor: f32) -> Color32 {
    let r = (color.r() as f32 * factor).min(255.0) as u8;
    let g = (color.g() as f32 * factor).min(255.0) as u8;
    let b = (color.b() as f32 * factor).min(255.0) as u8;
    Color32::from_rgb(r, g, b)
}

/// Sets the alpha channel of a color
pub fn with_alpha(color: Color32, alpha: u8) -> Color32 {
    Color32::from_rgba_premultiplied(color.r(), color.g(), color.b(), alpha)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_themes_present() {
        let manager = ThemeManager::new();
        assert_eq!(manager.list_themes(), vec!["Dark", "Light", "Nord"]);
        assert!(manager.get_theme("Nord").is_some());
        assert!(manager.get_theme("Solarized").is_none());
    }

    #[test]
    fn test_hex_parsing() {
        assert_eq!(hex_to_color32("#2e3440"), Color32::from_rgb(0x2e, 0x34, 0x40));
        assert_eq!(hex_to_color32("ffffff"), Color32::from_rgb(255, 255, 255));
        assert_eq!(hex_to_color32("#bad"), Color32::from_rgb(0, 0, 0));
    }
}
