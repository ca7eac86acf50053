use std::io::IsTerminal;
use std::sync::OnceLock;

use crate::cli::{ColorMode, GlobalFlags, OutputFormat};

/// Terminals narrower than this are ignored; tables render unconstrained.
const MIN_TERM_WIDTH: usize = 40;

/// Presentation settings resolved once per process.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct UiPrefs {
    pub table_color: bool,
    pub term_width: Option<usize>,
}

impl UiPrefs {
    /// Colour only ever applies to table output; `auto` also needs a terminal and no `NO_COLOR`.
    fn resolve(flags: &GlobalFlags, stdout_tty: bool, no_color: bool, columns: Option<&str>) -> Self {
        let table_color = flags.format == OutputFormat::Table
            && match flags.color {
                ColorMode::Always => true,
                ColorMode::Never => false,
                ColorMode::Auto => stdout_tty && !no_color && !flags.quiet,
            };
        let term_width = columns
            .and_then(|value| value.trim().parse::<usize>().ok())
            .filter(|width| *width >= MIN_TERM_WIDTH);
        Self {
            table_color,
            term_width,
        }
    }
}

static UI_PREFS: OnceLock<UiPrefs> = OnceLock::new();

pub fn init(flags: &GlobalFlags) {
    let columns = std::env::var("COLUMNS").ok();
    let prefs = UiPrefs::resolve(
        flags,
        std::io::stdout().is_terminal(),
        std::env::var_os("NO_COLOR").is_some(),
        columns.as_deref(),
    );
    if UI_PREFS.set(prefs).is_err() {
        tracing::debug!("ui preferences already initialized");
    }
}

/// Resolved preferences; plain output when [`init`] has not run.
#[must_use]
pub fn prefs() -> UiPrefs {
    UI_PREFS.get().copied().unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::UiPrefs;
    use crate::cli::{ColorMode, GlobalFlags, OutputFormat};

    fn flags(format: OutputFormat, color: ColorMode) -> GlobalFlags {
        GlobalFlags {
            format,
            limit: None,
            quiet: false,
            verbose: false,
            color,
        }
    }

    #[test]
    fn json_output_is_never_coloured() {
        let prefs = UiPrefs::resolve(&flags(OutputFormat::Json, ColorMode::Always), true, false, None);
        assert!(!prefs.table_color);
    }

    #[test]
    fn auto_colour_needs_a_terminal_and_no_opt_out() {
        let table = flags(OutputFormat::Table, ColorMode::Auto);
        assert!(UiPrefs::resolve(&table, true, false, None).table_color);
        assert!(!UiPrefs::resolve(&table, false, false, None).table_color);
        assert!(!UiPrefs::resolve(&table, true, true, None).table_color);
    }

    #[test]
    fn narrow_or_garbage_columns_are_ignored() {
        let table = flags(OutputFormat::Table, ColorMode::Never);
        assert_eq!(UiPrefs::resolve(&table, false, false, Some("120")).term_width, Some(120));
        assert_eq!(UiPrefs::resolve(&table, false, false, Some("20")).term_width, None);
        assert_eq!(UiPrefs::resolve(&table, false, false, Some("wide")).term_width, None);
    }
}
