//! Report formatting utilities for terminal output
//!
//! Small helpers shared by the analysis and listing views.

use crate::models::{CurrencyFormat, Money};

/// Format a money amount with color hints for terminal display
pub fn format_money_colored(amount: Money, format: &CurrencyFormat) -> String {
    let text = amount.format_with(format);
    if amount.is_negative() {
        format!("\x1b[31m{}\x1b[0m", text)
    } else if amount.is_zero() {
        text
    } else {
        format!("\x1b[32m{}\x1b[0m", text)
    }
}

/// Format a percentage with one decimal place
pub fn format_percentage(pct: f64) -> String {
    format!("{:.1}%", pct)
}

/// Create a simple bar chart representation
pub fn format_bar(value: f64, max_value: f64, width: usize) -> String {
    if max_value <= 0.0 || value <= 0.0 {
        return "░".repeat(width);
    }

    let filled = ((value / max_value) * width as f64).round() as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Medal for the first three ranks, `#n` afterwards
pub fn rank_marker(rank: usize) -> String {
    match rank {
        1 => "🥇".to_string(),
        2 => "🥈".to_string(),
        3 => "🥉".to_string(),
        n => format!("#{}", n),
    }
}

/// Format a section title with an underline
pub fn section(title: &str) -> String {
    format!("{}\n{}\n", title, separator(title.chars().count().max(40)))
}

/// Format a separator line
pub fn separator(width: usize) -> String {
    "─".repeat(width)
}

/// Format a double separator line
pub fn double_separator(width: usize) -> String {
    "═".repeat(width)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_bar() {
        assert_eq!(format_bar(50.0, 100.0, 10), "█████░░░░░");
        assert_eq!(format_bar(100.0, 100.0, 4), "████");
        assert_eq!(format_bar(0.0, 100.0, 3), "░░░");
        assert_eq!(format_bar(5.0, 0.0, 2), "░░");
    }

    #[test]
    fn test_rank_marker() {
        assert_eq!(rank_marker(1), "🥇");
        assert_eq!(rank_marker(3), "🥉");
        assert_eq!(rank_marker(4), "#4");
    }

    #[test]
    fn test_format_percentage() {
        assert_eq!(format_percentage(76.923), "76.9%");
        assert_eq!(format_percentage(0.0), "0.0%");
    }

    #[test]
    fn test_colored_money() {
        let us = CurrencyFormat::en_us();
        let negative = Money::zero().subtract(Money::new(5.0).unwrap());
        assert_eq!(format_money_colored(negative, &us), "\x1b[31m-$5.00\x1b[0m");
        assert_eq!(format_money_colored(Money::zero(), &us), "$0.00");
    }
}
