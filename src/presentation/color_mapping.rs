//! Color mapping for pin markers and table cells based on pin types.
//!
//! Color assignment is deterministic based on the pin's type string.

use egui::Color32;
use pinscope::{ThemeColors, ThemeManager};

/// Returns a reference to the current theme's color palette.
///
/// Falls back to the Dark theme colors when the requested theme does not
/// exist.
pub fn theme_colors<'a>(
    theme_manager: &'a ThemeManager,
    current_theme_name: &str,
) -> &'a ThemeColors {
    theme_manager
        .get_theme(current_theme_name)
        .map(|t| &t.colors)
        .unwrap_or_else(|| &theme_manager.get_theme("Dark").unwrap().colors)
}

/// Returns a color for a pin based on its type string.
///
/// Types are free-form author text; matching is by common substrings so
/// that variants like "12v", "12V supply" or "gnd (power)" land in the
/// same bucket. Unknown and absent types use the dim text color.
pub fn pin_type_color(pin_type: Option<&str>, colors: &ThemeColors) -> Color32 {
    let lowered = pin_type.unwrap_or("").to_ascii_lowercase();
    match lowered.as_str() {
        t if t.contains("12v") || t.contains("5v") || t.contains("vbat") || t.contains("power") => {
            colors.red
        }
        t if t.contains("gnd") || t.contains("ground") => colors.gray,
        t if t.contains("can") || t.contains("lin") || t.contains("usb") => colors.cyan,
        t if t.contains("ign") => colors.purple,
        t if t.contains("inj") => colors.green,
        t if t.contains("ain") || t.contains("analog") => colors.yellow,
        t if t.contains("din") || t.contains("hall") || t.contains("vr") => colors.blue,
        t if t.contains("pwm") || t.contains("out") => colors.orange,
        _ => colors.text_dim,
    }
}
