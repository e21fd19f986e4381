//! Application configuration: TOML file loading, CLI overrides, and defaults.
//!
//! Configuration only affects presentation and logging, never navigation.
//!
//! Resolution order (first found wins, values merge/override):
//! 1. CLI flags (`--config`, `--theme`, `--no-icons`, `--log-file`)
//! 2. `$FB_TUI_CONFIG` environment variable (path to config file)
//! 3. Project-local `.fb-tui.toml` in the current working directory
//! 4. Global `~/.config/fb-tui/config.toml`
//! 5. Built-in defaults

use std::path::{Path, PathBuf};

use serde::Deserialize;
use simplelog::LevelFilter;

// ── Section configs ──────────────────────────────────────────────────────────

/// Screen layout settings.
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct UiConfig {
    /// Use emoji icons (false = ASCII markers).
    pub use_icons: Option<bool>,
    /// Show key hints in the header.
    pub show_hints: Option<bool>,
}

/// Custom colors, as `#rrggbb` strings.
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct ThemeColorsConfig {
    pub title_bg: Option<String>,
    pub title_fg: Option<String>,
    pub path_fg: Option<String>,
    pub dir_fg: Option<String>,
    pub file_fg: Option<String>,
    pub selected_fg: Option<String>,
    pub info_bg: Option<String>,
    pub info_fg: Option<String>,
}

/// Theme configuration section.
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct ThemeConfig {
    /// Color scheme: "dark", "light", "custom".
    pub scheme: Option<String>,
    /// Custom color overrides.
    pub custom: Option<ThemeColorsConfig>,
}

/// Log file settings.
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct LogConfig {
    /// "off", "error", "warn", "info", "debug", "trace".
    pub level: Option<String>,
    /// Log file path.
    pub file: Option<PathBuf>,
}

// ── Top-level config ─────────────────────────────────────────────────────────

/// Top-level application configuration.
///
/// All fields are optional so that partial configs from different sources
/// can be merged together (CLI overrides file, file overrides defaults).
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct AppConfig {
    pub ui: UiConfig,
    pub theme: ThemeConfig,
    pub log: LogConfig,
}

/// Name of the per-user config and cache directory.
pub const APP_DIR: &str = "fb-tui";
/// Default log file name inside the cache directory.
pub const DEFAULT_LOG_FILE: &str = "fb.log";

// ── Config file locator ──────────────────────────────────────────────────────

/// Return the list of candidate config file paths in priority order.
///
/// Does NOT include the CLI `--config` path; that is handled separately.
fn candidate_paths() -> Vec<PathBuf> {
    let mut paths = Vec::new();

    if let Ok(env_path) = std::env::var("FB_TUI_CONFIG") {
        paths.push(PathBuf::from(env_path));
    }

    if let Ok(cwd) = std::env::current_dir() {
        paths.push(cwd.join(".fb-tui.toml"));
    }

    if let Some(config_dir) = dirs::config_dir() {
        paths.push(config_dir.join(APP_DIR).join("config.toml"));
    }

    paths
}

/// Try to read and parse a TOML config file. Returns `None` if the file
/// doesn't exist or can't be parsed.
fn load_file(path: &Path) -> Option<AppConfig> {
    let content = std::fs::read_to_string(path).ok()?;
    match toml::from_str::<AppConfig>(&content) {
        Ok(cfg) => {
            log::debug!("loaded config from {}", path.display());
            Some(cfg)
        }
        Err(e) => {
            eprintln!(
                "Warning: failed to parse config file {}: {}",
                path.display(),
                e
            );
            None
        }
    }
}

// ── Merge logic ──────────────────────────────────────────────────────────────

impl AppConfig {
    /// Merge `other` on top of `self`; `other`'s `Some` values win.
    pub fn merge(self, other: &AppConfig) -> AppConfig {
        AppConfig {
            ui: UiConfig {
                use_icons: other.ui.use_icons.or(self.ui.use_icons),
                show_hints: other.ui.show_hints.or(self.ui.show_hints),
            },
            theme: ThemeConfig {
                scheme: other.theme.scheme.clone().or(self.theme.scheme),
                custom: other.theme.custom.clone().or(self.theme.custom),
            },
            log: LogConfig {
                level: other.log.level.clone().or(self.log.level),
                file: other.log.file.clone().or(self.log.file),
            },
        }
    }

    /// Load the final merged configuration.
    ///
    /// `cli_config_path` is an explicit config file path from `--config`.
    /// `cli_overrides` are partial overrides derived from CLI flags.
    pub fn load(cli_config_path: Option<&Path>, cli_overrides: Option<&AppConfig>) -> AppConfig {
        let mut config = AppConfig::default();

        // Lowest priority first so higher-priority files overwrite.
        for path in candidate_paths().iter().rev() {
            if let Some(file_cfg) = load_file(path) {
                config = config.merge(&file_cfg);
            }
        }

        if let Some(cli_path) = cli_config_path {
            match load_file(cli_path) {
                Some(file_cfg) => config = config.merge(&file_cfg),
                None => eprintln!("Warning: config file {} not loaded", cli_path.display()),
            }
        }

        if let Some(overrides) = cli_overrides {
            config = config.merge(overrides);
        }

        config
    }

    // ── Convenience getters with built-in defaults ──────────────────────────

    /// Whether to use emoji icons.
    pub fn use_icons(&self) -> bool {
        self.ui.use_icons.unwrap_or(true)
    }

    /// Whether to show key hints.
    pub fn show_hints(&self) -> bool {
        self.ui.show_hints.unwrap_or(true)
    }

    /// Log level; unrecognized values fall back to `Info`.
    pub fn log_level(&self) -> LevelFilter {
        match self.log.level.as_deref().map(str::to_ascii_lowercase).as_deref() {
            Some("off") => LevelFilter::Off,
            Some("error") => LevelFilter::Error,
            Some("warn") => LevelFilter::Warn,
            Some("debug") => LevelFilter::Debug,
            Some("trace") => LevelFilter::Trace,
            _ => LevelFilter::Info,
        }
    }

    /// Log file path: configured path, else `<cache dir>/fb-tui/fb.log`.
    pub fn log_file(&self) -> Option<PathBuf> {
        self.log.file.clone().or_else(|| {
            dirs::cache_dir().map(|dir| dir.join(APP_DIR).join(DEFAULT_LOG_FILE))
        })
    }
}

// ── Tests ────────────────────────────────────────────────────────────────────
