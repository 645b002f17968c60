//! `--log` rendering of the request log.

use netcfg_core::{DebugLog, LogEntry, LogFilter, LogKind};
use owo_colors::Style;

use crate::cli::{ColorMode, LogLevel};
use crate::output;

impl From<LogLevel> for LogFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::All => Self::All,
            LogLevel::Info => Self::Info,
            LogLevel::Success => Self::Success,
            LogLevel::Error => Self::Error,
        }
    }
}

fn kind_style(kind: LogKind) -> Style {
    match kind {
        LogKind::Error => Style::new().red().bold(),
        LogKind::Success => Style::new().green(),
        LogKind::Info => Style::new().cyan(),
    }
}

fn format_entry(entry: &LogEntry, color: bool) -> String {
    let kind = format!("{:<7}", entry.kind.to_string().to_uppercase());
    let mut out = format!(
        "{} {} {}",
        output::paint(&entry.timestamp, Style::new().dimmed(), color),
        output::paint(&kind, kind_style(entry.kind), color),
        entry.message
    );
    for line in entry.content.lines() {
        out.push_str("\n    ");
        out.push_str(line);
    }
    out
}

/// Print entries matching `level` to stderr, oldest first.
pub fn print(log: &DebugLog, level: LogLevel, color: &ColorMode) {
    log.set_filter(level.into());
    let color = output::stderr_color(color);
    for entry in log.filtered_view() {
        eprintln!("{}", format_entry(&entry, color));
    }
}
