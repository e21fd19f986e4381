mod app;
mod components;
mod config;
mod error;
mod event;
mod fs;
mod handler;
mod keymap;
mod nav;
mod theme;
mod tui;
mod ui;

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::Parser;
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};

use crate::app::App;
use crate::config::{AppConfig, LogConfig, ThemeConfig, UiConfig};
use crate::error::AppError;
use crate::event::TerminalEvents;
use crate::fs::reader::{DirectoryReader, FsReader};
use crate::nav::state::NavigationState;
use crate::theme::RenderConfig;
use crate::tui::{install_panic_hook, Tui};
use crate::ui::TerminalRenderer;

/// A terminal directory browser.
#[derive(Parser, Debug)]
#[command(name = "fb", version, about)]
struct Cli {
    /// Directory to browse (defaults to the current directory)
    path: Option<PathBuf>,

    /// Config file to load on top of the default locations
    #[arg(long)]
    config: Option<PathBuf>,

    /// Color scheme
    #[arg(long, value_parser = ["dark", "light", "custom"])]
    theme: Option<String>,

    /// Use ASCII markers instead of emoji icons
    #[arg(long)]
    no_icons: bool,

    /// Write the log to this file
    #[arg(long)]
    log_file: Option<PathBuf>,
}

impl Cli {
    /// Config values set on the command line.
    fn overrides(&self) -> AppConfig {
        AppConfig {
            ui: UiConfig {
                use_icons: self.no_icons.then_some(false),
                show_hints: None,
            },
            theme: ThemeConfig {
                scheme: self.theme.clone(),
                custom: None,
            },
            log: LogConfig {
                level: None,
                file: self.log_file.clone(),
            },
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{}", e);
            eprintln!("fb: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> error::Result<()> {
    let config = AppConfig::load(cli.config.as_deref(), Some(&cli.overrides()));
    init_logging(&config);

    let start = resolve_start_path(cli.path.as_deref())?;
    log::info!("starting in {}", start.display());

    // Read before touching the terminal so a failure prints normally.
    let reader = FsReader;
    let nav = open_start_directory(&start, &reader)?;
    let mut app = App::new(nav, &reader);

    install_panic_hook();
    let mut renderer = TerminalRenderer::new(Tui::new()?, RenderConfig::from_config(&config));
    let result = app.run(&mut TerminalEvents, &reader, &mut renderer);
    let restored = renderer.restore();

    log::info!("exiting in {}", app.nav.current_path().display());
    first_error(result, restored)
}

/// The loop's own error wins over a failure to restore the terminal.
fn first_error(result: error::Result<()>, restored: error::Result<()>) -> error::Result<()> {
    result.and(restored)
}

/// Resolve the directory to browse at startup.
///
/// An argument that does not name an existing directory falls back to the
/// working directory.
fn resolve_start_path(arg: Option<&Path>) -> error::Result<PathBuf> {
    let cwd = std::env::current_dir().map_err(|e| {
        AppError::InvalidPath(format!("cannot determine working directory: {e}"))
    })?;
    let Some(arg) = arg else {
        return Ok(cwd);
    };

    match arg.canonicalize() {
        Ok(path) if path.is_dir() => Ok(path),
        Ok(path) => {
            log::warn!(
                "{} is not a directory, browsing {} instead",
                path.display(),
                cwd.display()
            );
            Ok(cwd)
        }
        Err(e) => {
            log::warn!(
                "cannot resolve {}: {}, browsing {} instead",
                arg.display(),
                e,
                cwd.display()
            );
            Ok(cwd)
        }
    }
}

/// Read the startup directory; failure here is the only fatal navigation error.
fn open_start_directory<R: DirectoryReader>(
    start: &Path,
    reader: &R,
) -> error::Result<NavigationState> {
    NavigationState::open(start, reader).map_err(|source| {
        AppError::StartupDirectoryUnreadable {
            path: start.to_path_buf(),
            source,
        }
    })
}

/// Send `log` output to a file; the terminal itself is busy drawing.
fn init_logging(config: &AppConfig) {
    let level = config.log_level();
    if level == LevelFilter::Off {
        return;
    }
    let Some(path) = config.log_file() else {
        return;
    };
    if let Some(parent) = path.parent() {
        let _ = std::fs::create_dir_all(parent);
    }

    let log_config = ConfigBuilder::new().set_time_format_rfc3339().build();
    if let Ok(log_file) = std::fs::File::create(&path) {
        let _ = WriteLogger::init(level, log_config, log_file);
    }
}
