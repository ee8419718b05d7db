//! Terminal output formatting.

use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use lexis_core::{BusyCounter, BusyIndicator, KeywordRow};
use std::sync::{Arc, Mutex};
use std::time::Duration;
use unicode_width::UnicodeWidthStr;

/// Busy indicator drawn as a spinner on stderr.
#[derive(Default)]
pub struct SpinnerIndicator {
    bar: Mutex<Option<ProgressBar>>,
}

impl BusyIndicator for SpinnerIndicator {
    fn show(&self) {
        let bar = ProgressBar::new_spinner();
        if let Ok(style) = ProgressStyle::with_template("{spinner:.cyan} {msg}") {
            bar.set_style(style);
        }
        bar.set_message("Loading...");
        bar.enable_steady_tick(Duration::from_millis(100));

        if let Ok(mut slot) = self.bar.lock() {
            *slot = Some(bar);
        }
    }

    fn hide(&self) {
        if let Ok(mut slot) = self.bar.lock() {
            if let Some(bar) = slot.take() {
                bar.finish_and_clear();
            }
        }
    }
}

/// Busy counter driving a terminal spinner.
pub fn spinner_counter() -> BusyCounter {
    BusyCounter::new(Arc::new(SpinnerIndicator::default()))
}

/// Print a scalar result exactly as received.
pub fn print_field(value: &str) {
    if value.is_empty() {
        eprintln!("{}", "No result returned.".dimmed());
        return;
    }
    println!("{}", value);
}

/// Print keyword rows as a two-column table, in received order.
pub fn print_keywords_table(rows: &[KeywordRow]) {
    if rows.is_empty() {
        println!("{}", "No keywords found.".dimmed());
        return;
    }

    let scores: Vec<String> = rows.iter().map(KeywordRow::score_label).collect();
    let score_width = scores
        .iter()
        .map(|s| UnicodeWidthStr::width(s.as_str()))
        .max()
        .unwrap_or(0)
        .max("Score".len());
    let text_width = keyword_column_width(rows, score_width);

    println!(
        "{} {}",
        pad_right("Keyword", text_width).bold(),
        format!("{:>width$}", "Score", width = score_width).bold()
    );
    println!("{}", "─".repeat(text_width + 1 + score_width));

    for (row, score) in rows.iter().zip(&scores) {
        println!("{}", keyword_line(&row.text, score, text_width, score_width));
    }

    println!();
    println!("{} keyword(s)", rows.len());
}

/// One table row. Keywords wider than the column are printed whole and push
/// the score to the right.
fn keyword_line(text: &str, score: &str, text_width: usize, score_width: usize) -> String {
    format!("{} {:>width$}", pad_right(text, text_width), score, width = score_width)
}

/// Width of the keyword column: widest keyword, capped by the terminal.
fn keyword_column_width(rows: &[KeywordRow], score_width: usize) -> usize {
    let widest = rows
        .iter()
        .map(|r| UnicodeWidthStr::width(r.text.as_str()))
        .max()
        .unwrap_or(0)
        .max("Keyword".len());
    let available = term_width().saturating_sub(score_width + 1).max(10);
    widest.min(available)
}

/// Get terminal width, defaulting to 80.
fn term_width() -> usize {
    terminal_size::terminal_size()
        .map(|(w, _)| w.0 as usize)
        .unwrap_or(80)
}

/// Pad a plain string to a given visual width (right-padded).
fn pad_right(s: &str, width: usize) -> String {
    let visual = UnicodeWidthStr::width(s);
    if visual >= width {
        s.to_string()
    } else {
        format!("{}{}", s, " ".repeat(width - visual))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pad_right_uses_visual_width() {
        assert_eq!(pad_right("ab", 4), "ab  ");
        assert_eq!(pad_right("日本", 5), "日本 ");
        assert_eq!(pad_right("toolong", 3), "toolong");
    }

    #[test]
    fn test_keyword_line_aligns_score() {
        assert_eq!(keyword_line("iPhone", "0.92", 8, 5), "iPhone    0.92");
    }

    #[test]
    fn test_long_keyword_is_printed_whole() {
        let line = keyword_line("successful emergency landing", "0.05", 10, 5);
        assert_eq!(line, "successful emergency landing  0.05");
    }

    #[test]
    fn test_spinner_hide_without_show() {
        let indicator = SpinnerIndicator::default();
        indicator.hide();
        indicator.show();
        indicator.hide();
        assert!(indicator.bar.lock().unwrap().is_none());
    }
}
