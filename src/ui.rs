//! Terminal presentation: mode detection, tables, spinners, styled messages.

use color_print::cformat;
use indicatif::{ProgressBar, ProgressStyle};
use std::io::IsTerminal;
use std::time::Duration;

pub const MAX_CELL_WIDTH: usize = 60;

/// How output should be presented. Interactive mode gets spinners and
/// colored status lines; plain mode emits unadorned text suitable for
/// pipes and CI logs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    Interactive,
    Plain,
}

impl OutputMode {
    pub fn is_interactive(&self) -> bool {
        matches!(self, OutputMode::Interactive)
    }
}

/// Resolve the presentation mode. An explicit flag always wins, then the
/// environment: a non-terminal stdout, a CI environment variable, or
/// NO_COLOR all force plain output.
pub fn detect_mode(no_interactive: bool) -> OutputMode {
    if no_interactive {
        return OutputMode::Plain;
    }
    if !std::io::stdout().is_terminal() {
        return OutputMode::Plain;
    }
    if std::env::var_os("CI").is_some() || std::env::var_os("NO_COLOR").is_some() {
        return OutputMode::Plain;
    }
    OutputMode::Interactive
}

/// Render rows as aligned columns with upper-cased headers, kubectl style.
/// Cells longer than [`MAX_CELL_WIDTH`] are truncated with an ellipsis.
pub fn render_table(headers: &[&str], rows: &[Vec<String>]) -> String {
    let mut widths: Vec<usize> = headers.iter().map(|h| h.len()).collect();
    let rows: Vec<Vec<String>> = rows
        .iter()
        .map(|row| row.iter().map(|cell| truncate(cell, MAX_CELL_WIDTH)).collect())
        .collect();
    for row in &rows {
        for (i, cell) in row.iter().enumerate() {
            if i < widths.len() && cell.chars().count() > widths[i] {
                widths[i] = cell.chars().count();
            }
        }
    }

    let mut out = String::new();
    for (i, header) in headers.iter().enumerate() {
        if i > 0 {
            out.push_str("  ");
        }
        let upper = header.to_uppercase();
        out.push_str(&upper);
        if i + 1 < headers.len() {
            out.extend(std::iter::repeat(' ').take(widths[i] - header.len()));
        }
    }
    out.push('\n');
    for row in &rows {
        for (i, cell) in row.iter().enumerate() {
            if i > 0 {
                out.push_str("  ");
            }
            out.push_str(cell);
            if i + 1 < row.len() {
                let width = widths.get(i).copied().unwrap_or(0);
                let pad = width.saturating_sub(cell.chars().count());
                out.extend(std::iter::repeat(' ').take(pad));
            }
        }
        out.push('\n');
    }
    out
}

/// Truncate to `max` characters, reserving three for an ellipsis.
pub fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        return s.to_string();
    }
    let cut: String = s.chars().take(max.saturating_sub(3)).collect();
    format!("{}...", cut)
}

/// Key/value detail block with aligned keys, used by the `get <resource> <id>`
/// views.
pub fn render_detail(fields: &[(&str, String)]) -> String {
    let width = fields.iter().map(|(k, _)| k.len()).max().unwrap_or(0);
    let mut out = String::new();
    for (key, value) in fields {
        out.push_str(&format!("{:<width$}  {}\n", key, value, width = width));
    }
    out
}

/// Symbol column for run status tables.
pub fn status_symbol(status: &str) -> &'static str {
    match status {
        "completed" | "succeeded" => "✓",
        "failed" => "✗",
        "running" => "⟳",
        "pending" | "queued" => "…",
        "cancelled" => "-",
        _ => "?",
    }
}

/// Spinner shown while a request is in flight; interactive mode only.
pub fn spinner(mode: OutputMode, message: &str) -> Option<ProgressBar> {
    if !mode.is_interactive() {
        return None;
    }
    let pb = ProgressBar::new_spinner();
    if let Ok(style) = ProgressStyle::default_spinner().template("{spinner:.green} {msg}") {
        pb.set_style(style);
    }
    pb.set_message(message.to_string());
    pb.enable_steady_tick(Duration::from_millis(100));
    Some(pb)
}

pub fn finish_spinner(spinner: Option<ProgressBar>) {
    if let Some(pb) = spinner {
        pb.finish_and_clear();
    }
}

pub fn success_line(mode: OutputMode, message: &str) -> String {
    if mode.is_interactive() {
        cformat!("<g>✓</g> {}", message)
    } else {
        message.to_string()
    }
}

pub fn error_line(mode: OutputMode, message: &str) -> String {
    if mode.is_interactive() {
        cformat!("<r>✗</r> {}", message)
    } else {
        format!("Error: {}", message)
    }
}
