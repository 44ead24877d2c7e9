use std::io::IsTerminal;
use std::sync::OnceLock;

use crate::cli::{ColorMode, GlobalFlags, OutputFormat};

/// Terminal-dependent rendering choices, fixed once per process.
#[derive(Clone, Copy, Debug, Default)]
pub struct UiPrefs {
    pub table_color: bool,
    pub progress: bool,
    pub term_width: Option<usize>,
}

static UI_PREFS: OnceLock<UiPrefs> = OnceLock::new();

pub fn init(flags: &GlobalFlags) {
    let no_color = std::env::var_os("NO_COLOR").is_some();
    let table_color = wants_color(flags, std::io::stdout().is_terminal(), no_color);
    let progress = wants_progress(flags, std::io::stderr().is_terminal());
    let term_width = std::env::var("COLUMNS")
        .ok()
        .and_then(|value| value.parse::<usize>().ok())
        .filter(|width| *width >= 40);

    let _ = UI_PREFS.set(UiPrefs {
        table_color,
        progress,
        term_width,
    });
}

#[must_use]
pub fn prefs() -> UiPrefs {
    UI_PREFS.get().copied().unwrap_or_default()
}

fn wants_color(flags: &GlobalFlags, stdout_tty: bool, no_color: bool) -> bool {
    if flags.format != OutputFormat::Table {
        return false;
    }
    match flags.color {
        ColorMode::Always => true,
        ColorMode::Never => false,
        ColorMode::Auto => stdout_tty && !flags.quiet && !no_color,
    }
}

// The spinner draws on stderr, so piping stdout keeps it visible.
fn wants_progress(flags: &GlobalFlags, stderr_tty: bool) -> bool {
    stderr_tty && !flags.quiet && !matches!(flags.format, OutputFormat::Json | OutputFormat::Raw)
}
