//! Mismatch report rendering.
//!
//! Renders the four-column drift table (Module, Environment-version,
//! Declared-version, Found-in) with box-drawing borders. Column widths grow
//! to fit the longest cell.

use crate::reconcile::Mismatch;
use console::style;

const HEADERS: [&str; 4] = ["Module", "Environment-version", "Declared-version", "Found-in"];

/// Render the mismatch table as a string.
pub fn render(mismatches: &[Mismatch]) -> String {
    let mut widths: [usize; 4] = [
        HEADERS[0].len(),
        HEADERS[1].len(),
        HEADERS[2].len(),
        HEADERS[3].len(),
    ];
    for m in mismatches {
        widths[0] = widths[0].max(m.name.len());
        widths[1] = widths[1].max(m.installed.len());
        widths[2] = widths[2].max(m.declared.len());
        widths[3] = widths[3].max(m.source.len());
    }

    let mut output = String::new();
    output.push_str(&border(&widths, '┌', '┬', '┐'));
    output.push('\n');
    output.push_str(&row(&widths, &HEADERS));
    output.push('\n');
    output.push_str(&border(&widths, '├', '┼', '┤'));
    output.push('\n');
    for m in mismatches {
        output.push_str(&row(
            &widths,
            &[&m.name, &m.installed, &m.declared, &m.source],
        ));
        output.push('\n');
    }
    output.push_str(&border(&widths, '└', '┴', '┘'));
    output
}

/// One-line styled summary for the end of a failing run.
pub fn summary(count: usize) -> String {
    let noun = if count == 1 { "mismatch" } else { "mismatches" };
    format!("{} {} {} found", style("✗").red().bold(), count, noun)
}

fn border(widths: &[usize; 4], left: char, mid: char, right: char) -> String {
    let mut s = String::new();
    s.push(left);
    for (i, width) in widths.iter().enumerate() {
        s.push_str(&"─".repeat(width + 2));
        if i < widths.len() - 1 {
            s.push(mid);
        }
    }
    s.push(right);
    s
}

fn row(widths: &[usize; 4], cells: &[&str; 4]) -> String {
    let mut s = String::from("│");
    for (cell, width) in cells.iter().zip(widths) {
        s.push_str(&format!(" {:width$} │", cell, width = width));
    }
    s
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mismatch(name: &str, installed: &str, declared: &str, source: &str) -> Mismatch {
        Mismatch {
            name: name.into(),
            installed: installed.into(),
            declared: declared.into(),
            source: source.into(),
        }
    }

    #[test]
    fn table_has_all_four_headers() {
        let output = render(&[]);
        for header in HEADERS {
            assert!(output.contains(header));
        }
    }

    #[test]
    fn table_shows_mismatch_row() {
        let output = render(&[mismatch("foo", "1.2.4", "1.2.3", "requirements.txt")]);
        assert!(output.contains("foo"));
        assert!(output.contains("1.2.4"));
        assert!(output.contains("1.2.3"));
        assert!(output.contains("requirements.txt"));
    }

    #[test]
    fn table_uses_box_drawing() {
        let output = render(&[mismatch("foo", "Missing", "1.2.3", "requirements.txt")]);
        assert!(output.contains("┌"));
        assert!(output.contains("┼"));
        assert!(output.contains("┘"));
        assert!(output.contains("│"));
    }

    #[test]
    fn table_line_count_is_rows_plus_borders() {
        let output = render(&[
            mismatch("a", "1.0", "1.1", "requirements.txt"),
            mismatch("b", "2.0", "2.1", "requirements.txt"),
        ]);
        // Top border, header, separator, 2 rows, bottom border.
        assert_eq!(output.lines().count(), 6);
    }

    #[test]
    fn column_widens_for_long_names() {
        let long = "a-package-with-a-very-long-name";
        let output = render(&[mismatch(long, "1.0", "1.0.0", "requirements.txt")]);
        assert!(output.contains(long));
        // All rows are the same width.
        let widths: Vec<_> = output.lines().map(|l| l.chars().count()).collect();
        assert!(widths.windows(2).all(|w| w[0] == w[1]));
    }

    #[test]
    fn summary_pluralizes() {
        assert!(summary(1).contains("1 mismatch found"));
        assert!(summary(3).contains("3 mismatches found"));
    }
}
