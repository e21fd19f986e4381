//! Rendering configuration: color palettes, icon choice, and resolution from config.
//!
//! A [`RenderConfig`] is built once at startup and handed to the renderer by
//! reference; nothing here is global, so several render targets can use
//! different palettes side by side.

use ratatui::style::Color;

use crate::config::{AppConfig, ThemeColorsConfig, ThemeConfig};

// ── Runtime theme colors ─────────────────────────────────────────────────────

/// All colors used by the browser screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThemeColors {
    // Header
    pub title_bg: Color,
    pub title_fg: Color,
    pub hint_fg: Color,
    pub path_fg: Color,

    // Listing
    pub dir_fg: Color,
    pub file_fg: Color,
    pub symlink_fg: Color,
    pub hidden_fg: Color,
    pub selected_fg: Color,
    pub count_fg: Color,

    // Info bar
    pub info_bg: Color,
    pub info_fg: Color,

    // Signals
    pub error_fg: Color,
    pub warning_fg: Color,
}

/// Immutable configuration passed to the renderer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderConfig {
    pub colors: ThemeColors,
    /// Emoji icons; `false` falls back to ASCII markers.
    pub use_icons: bool,
    /// Show the key hint line in the header.
    pub show_hints: bool,
}

impl RenderConfig {
    pub fn from_config(config: &AppConfig) -> Self {
        Self {
            colors: resolve_theme(&config.theme),
            use_icons: config.use_icons(),
            show_hints: config.show_hints(),
        }
    }
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            colors: dark_theme(),
            use_icons: true,
            show_hints: true,
        }
    }
}

// ── Built-in palettes ────────────────────────────────────────────────────────

/// Dark theme: violet title, cyan directories, pink selection.
pub fn dark_theme() -> ThemeColors {
    ThemeColors {
        title_bg: Color::Rgb(125, 86, 244),  // #7d56f4
        title_fg: Color::Rgb(255, 253, 245), // #fffdf5
        hint_fg: Color::Rgb(170, 170, 170),  // #aaaaaa
        path_fg: Color::Rgb(119, 119, 119),  // #777777

        dir_fg: Color::Rgb(18, 181, 229),      // #12b5e5
        file_fg: Color::Rgb(250, 250, 250),    // #fafafa
        symlink_fg: Color::Rgb(166, 227, 161), // #a6e3a1
        hidden_fg: Color::Rgb(108, 112, 134),  // #6c7086
        selected_fg: Color::Rgb(255, 76, 148), // #ff4c94
        count_fg: Color::Rgb(119, 119, 119),

        info_bg: Color::Rgb(53, 53, 53),    // #353535
        info_fg: Color::Rgb(170, 170, 170), // #aaaaaa

        error_fg: Color::Rgb(243, 139, 168),   // #f38ba8
        warning_fg: Color::Rgb(249, 226, 175), // #f9e2af
    }
}

/// Light theme for bright terminal backgrounds.
pub fn light_theme() -> ThemeColors {
    ThemeColors {
        title_bg: Color::Rgb(136, 57, 239),  // #8839ef
        title_fg: Color::Rgb(239, 241, 245), // #eff1f5
        hint_fg: Color::Rgb(108, 111, 133),  // #6c6f85
        path_fg: Color::Rgb(140, 143, 161),  // #8c8fa1

        dir_fg: Color::Rgb(30, 102, 245),     // #1e66f5
        file_fg: Color::Rgb(76, 79, 105),     // #4c4f69
        symlink_fg: Color::Rgb(64, 160, 43),  // #40a02b
        hidden_fg: Color::Rgb(156, 160, 176), // #9ca0b0
        selected_fg: Color::Rgb(234, 118, 203), // #ea76cb
        count_fg: Color::Rgb(140, 143, 161),

        info_bg: Color::Rgb(220, 224, 232), // #dce0e8
        info_fg: Color::Rgb(76, 79, 105),

        error_fg: Color::Rgb(210, 15, 57),    // #d20f39
        warning_fg: Color::Rgb(223, 142, 29), // #df8e1d
    }
}

// ── Color parsing ────────────────────────────────────────────────────────────

/// Parse a hex color string like `"#aabbcc"` into a `ratatui::style::Color`.
/// Returns `None` for malformed input.
pub fn parse_hex_color(hex: &str) -> Option<Color> {
    let hex = hex.strip_prefix('#').unwrap_or(hex);
    if hex.len() != 6 || !hex.is_ascii() {
        return None;
    }
    let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
    let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
    let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
    Some(Color::Rgb(r, g, b))
}

fn override_color(slot: &mut Color, hex: Option<&str>) {
    if let Some(color) = hex.and_then(parse_hex_color) {
        *slot = color;
    }
}

// ── Theme resolution ─────────────────────────────────────────────────────────

/// Resolve the final `ThemeColors` from config.
///
/// - `"dark"` (default): dark palette
/// - `"light"`: light palette
/// - `"custom"`: dark palette with custom hex overrides
pub fn resolve_theme(config: &ThemeConfig) -> ThemeColors {
    match config.scheme.as_deref().unwrap_or("dark") {
        "light" => light_theme(),
        "custom" => {
            let mut theme = dark_theme();
            if let Some(custom) = &config.custom {
                apply_custom_colors(&mut theme, custom);
            }
            theme
        }
        _ => dark_theme(),
    }
}

/// Apply custom hex color overrides; malformed values keep the base color.
fn apply_custom_colors(theme: &mut ThemeColors, custom: &ThemeColorsConfig) {
    override_color(&mut theme.title_bg, custom.title_bg.as_deref());
    override_color(&mut theme.title_fg, custom.title_fg.as_deref());
    override_color(&mut theme.path_fg, custom.path_fg.as_deref());
    override_color(&mut theme.dir_fg, custom.dir_fg.as_deref());
    override_color(&mut theme.file_fg, custom.file_fg.as_deref());
    override_color(&mut theme.selected_fg, custom.selected_fg.as_deref());
    override_color(&mut theme.info_bg, custom.info_bg.as_deref());
    override_color(&mut theme.info_fg, custom.info_fg.as_deref());
}

// ── Tests ────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_hex_color_valid() {
        assert_eq!(parse_hex_color("#ff0000"), Some(Color::Rgb(255, 0, 0)));
        assert_eq!(parse_hex_color("#12B5E5"), Some(Color::Rgb(18, 181, 229)));
        assert_eq!(parse_hex_color("7d56f4"), Some(Color::Rgb(125, 86, 244)));
    }

    #[test]
    fn test_parse_hex_color_invalid() {
        assert_eq!(parse_hex_color("#zzzzzz"), None);
        assert_eq!(parse_hex_color("#fff"), None);
        assert_eq!(parse_hex_color(""), None);
        assert_eq!(parse_hex_color("#ééé"), None);
    }

    #[test]
    fn test_resolve_default_is_dark() {
        let theme = resolve_theme(&ThemeConfig::default());
        assert_eq!(theme, dark_theme());
    }

    #[test]
    fn test_resolve_light_theme() {
        let config = ThemeConfig {
            scheme: Some("light".to_string()),
            custom: None,
        };
        assert_eq!(resolve_theme(&config).dir_fg, Color::Rgb(30, 102, 245));
    }

    #[test]
    fn test_resolve_custom_overrides() {
        let config = ThemeConfig {
            scheme: Some("custom".to_string()),
            custom: Some(ThemeColorsConfig {
                dir_fg: Some("#00ff00".to_string()),
                selected_fg: Some("not-a-color".to_string()),
                ..Default::default()
            }),
        };
        let theme = resolve_theme(&config);
        assert_eq!(theme.dir_fg, Color::Rgb(0, 255, 0));
        assert_eq!(theme.selected_fg, dark_theme().selected_fg);
        assert_eq!(theme.file_fg, dark_theme().file_fg);
    }

    #[test]
    fn test_unknown_scheme_falls_back_to_dark() {
        let config = ThemeConfig {
            scheme: Some("neon".to_string()),
            custom: None,
        };
        assert_eq!(resolve_theme(&config), dark_theme());
    }

    #[test]
    fn test_render_config_from_app_config() {
        let mut config = AppConfig::default();
        config.ui.use_icons = Some(false);
        config.theme.scheme = Some("light".to_string());
        let render = RenderConfig::from_config(&config);
        assert!(!render.use_icons);
        assert!(render.show_hints);
        assert_eq!(render.colors, light_theme());
    }

    #[test]
    fn test_dark_and_light_different() {
        let dark = dark_theme();
        let light = light_theme();
        assert_ne!(dark.file_fg, light.file_fg);
        assert_ne!(dark.dir_fg, light.dir_fg);
        assert_ne!(dark.info_bg, light.info_bg);
    }
}
