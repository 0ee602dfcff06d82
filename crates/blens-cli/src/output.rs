//! Terminal output formatting.

use colored::{ColoredString, Colorize};
use unicode_width::UnicodeWidthStr;

use blens_core::analysis::model::{Rating, Verdict};

/// Print a full verdict: rating, explanation, scripture panel.
pub fn print_verdict(verdict: &Verdict) {
    println!(
        "{} {}",
        paint(verdict.rating, "●").bold(),
        paint(verdict.rating, verdict.rating.label()).bold()
    );
    println!();

    println!("{}", verdict.explanation);
    println!();

    print_verse(&verdict.verse_reference, &verdict.verse_text);
}

/// Print the three-row rating legend.
pub fn print_rating_legend() {
    println!("{}", "Rating System".bold());
    println!(
        "  {} {} Aligns with Biblical values",
        "●".green(),
        "Green:".bold()
    );
    println!(
        "  {} {} Neutral or needs discernment",
        "●".yellow(),
        "Yellow:".bold()
    );
    println!(
        "  {} {} Conflicts with Biblical principles",
        "●".red(),
        "Red:".bold()
    );
}

/// Print the scripture citation as a bordered panel: the quoted verse,
/// then the reference right-aligned in the NIV attribution style.
fn print_verse(reference: &str, text: &str) {
    let width = panel_width();
    let inner = width.saturating_sub(4);

    println!("{}", format!("┌{}┐", "─".repeat(width - 2)).dimmed());

    for line in wrap_text(&format!("\"{}\"", text), inner) {
        let pad = inner.saturating_sub(UnicodeWidthStr::width(line.as_str()));
        println!(
            "{} {}{} {}",
            "│".dimmed(),
            line.italic(),
            " ".repeat(pad),
            "│".dimmed()
        );
    }

    let attribution = format!("— {} (NIV)", reference);
    let pad = inner.saturating_sub(UnicodeWidthStr::width(attribution.as_str()));
    println!(
        "{} {}{} {}",
        "│".dimmed(),
        " ".repeat(pad),
        attribution.cyan().bold(),
        "│".dimmed()
    );

    println!("{}", format!("└{}┘", "─".repeat(width - 2)).dimmed());
}

/// Apply a rating's color to a display string.
fn paint(rating: Rating, s: &str) -> ColoredString {
    match rating {
        Rating::Green => s.green(),
        Rating::Yellow => s.yellow(),
        Rating::Red => s.red(),
    }
}

fn term_width() -> usize {
    terminal_size::terminal_size()
        .map(|(w, _)| w.0 as usize)
        .unwrap_or(80)
}

fn panel_width() -> usize {
    term_width().saturating_sub(2).clamp(30, 70)
}

/// Word-wrap text to a maximum visual width. A single word wider than
/// the limit gets its own line rather than being split.
fn wrap_text(text: &str, max_width: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();

    for word in text.split_whitespace() {
        if current.is_empty() {
            current.push_str(word);
            continue;
        }

        let fits = UnicodeWidthStr::width(current.as_str())
            + 1
            + UnicodeWidthStr::width(word)
            <= max_width;

        if fits {
            current.push(' ');
            current.push_str(word);
        } else {
            lines.push(std::mem::take(&mut current));
            current.push_str(word);
        }
    }

    if !current.is_empty() {
        lines.push(current);
    }
    lines
}
