//! CLI output helpers for consistent formatting.

use colored::Colorize;
use sqlchat_core::QueryOutput;

pub fn heading(text: &str) -> String {
    format!("{}", text.bright_cyan())
}

pub fn label(text: &str) -> String {
    format!("{}", text.bright_blue())
}

pub fn muted(text: &str) -> String {
    format!("{}", text.bright_black())
}

pub fn success(text: &str) -> String {
    format!("{}", text.bright_green())
}

pub fn warning(text: &str) -> String {
    format!("{}", text.yellow())
}

pub fn error(text: &str) -> String {
    format!("{}", text.red())
}

pub fn sql(text: &str) -> String {
    format!("{}", text.bright_white().bold())
}

pub fn status_ok() -> String {
    format!("{}", "OK".green())
}

pub fn status_error() -> String {
    format!("{}", "ERROR".red())
}

/// Longest cell shown before truncation
const MAX_CELL_WIDTH: usize = 48;

/// Render a result set as a plain-text grid
///
/// ```text
/// id | name
/// ---+-----
/// 1  | ada
/// (1 row)
/// ```
pub fn table(out: &QueryOutput) -> String {
    let rows: Vec<Vec<String>> = out
        .rows
        .iter()
        .map(|row| row.iter().map(|cell| clip(&cell.to_string())).collect())
        .collect();

    let columns = out.columns.len().max(rows.iter().map(Vec::len).max().unwrap_or(0));
    let mut widths = vec![0usize; columns];
    for (idx, name) in out.columns.iter().enumerate() {
        widths[idx] = name.chars().count();
    }
    for row in &rows {
        for (idx, cell) in row.iter().enumerate() {
            widths[idx] = widths[idx].max(cell.chars().count());
        }
    }

    let line = |cells: &[String]| -> String {
        widths
            .iter()
            .enumerate()
            .map(|(idx, &w)| {
                let cell = cells.get(idx).map(String::as_str).unwrap_or("");
                format!("{cell:<w$}")
            })
            .collect::<Vec<_>>()
            .join(" | ")
            .trim_end()
            .to_string()
    };

    let mut lines = Vec::with_capacity(rows.len() + 3);
    if !out.columns.is_empty() {
        lines.push(line(&out.columns));
        lines.push(
            widths
                .iter()
                .map(|w| "-".repeat(*w))
                .collect::<Vec<_>>()
                .join("-+-"),
        );
    }
    lines.extend(rows.iter().map(|row| line(row)));

    let count = rows.len();
    lines.push(format!("({count} row{})", if count == 1 { "" } else { "s" }));
    lines.join("\n")
}

fn clip(text: &str) -> String {
    let flat = text.replace(['\n', '\r'], " ");
    if flat.chars().count() <= MAX_CELL_WIDTH {
        return flat;
    }
    let mut clipped: String = flat.chars().take(MAX_CELL_WIDTH - 1).collect();
    clipped.push('…');
    clipped
}
