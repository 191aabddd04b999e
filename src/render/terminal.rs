//! Terminal output: the page header through termimad and the grid as a
//! box-drawn table.

use owo_colors::{OwoColorize, Style};

use crate::cell::{Cell, StyleBundle};
use crate::page::Page;
use crate::schedule::{Row, Schedule};

/// Width of the time column, in characters.
pub const TIME_WIDTH: usize = 7;
/// Width of each day column, in characters.
pub const DAY_WIDTH: usize = 9;

/// Box-drawing junction for a point on a separator line.
///
/// `up`/`down` say whether a vertical border continues above/below the point;
/// `left`/`right` whether the horizontal line extends to either side.
/// Uses rounded corners.
pub fn junction(up: bool, down: bool, left: bool, right: bool) -> char {
    match (up, down, left, right) {
        (true, true, true, true) => '┼',
        (true, true, false, true) => '├',
        (true, true, true, false) => '┤',
        (false, true, true, true) => '┬',
        (true, false, true, true) => '┴',
        (false, true, false, true) => '╭',
        (false, true, true, false) => '╮',
        (true, false, false, true) => '╰',
        (true, false, true, false) => '╯',
        (true, true, false, false) => '│',
        (false, false, _, _) => '─',
        (true, false, false, false) => '╵',
        (false, true, false, false) => '╷',
    }
}

/// Render the page header followed by the grid.
pub fn render_page(page: &Page, color: bool) -> String {
    let mut output = render_header(page, color);
    output.push('\n');
    output.push_str(&render_grid(&page.schedule, color));
    output
}

fn render_header(page: &Page, color: bool) -> String {
    if !color {
        return format!("{}\n{}\n", page.title, page.subtitle);
    }

    let mut skin = termimad::MadSkin::default();
    skin.headers[0].align = termimad::Alignment::Left;
    skin.headers[1].align = termimad::Alignment::Left;

    let markdown = format!("# {}\n*{}*\n", page.title, page.subtitle);
    skin.term_text(&markdown).to_string()
}

/// Render the schedule as a table, one text line per row.
pub fn render_grid(schedule: &Schedule, color: bool) -> String {
    let widths = track_widths(schedule);
    let rows = schedule.rows();
    let mut output = String::new();

    output.push_str(&separator(None, rows.first(), &widths));
    for (i, row) in rows.iter().enumerate() {
        output.push_str(&content_line(row, &widths, color));
        output.push_str(&separator(Some(row), rows.get(i + 1), &widths));
    }

    output
}

fn track_widths(schedule: &Schedule) -> Vec<usize> {
    let mut widths = vec![TIME_WIDTH];
    widths.extend(std::iter::repeat_n(DAY_WIDTH, schedule.template.day_columns as usize));
    widths
}

/// Track indices at which a vertical border sits for this row.
///
/// Index `k` means the border to the left of track `k`; the right edge is
/// `widths.len()`.
fn borders(row: &Row, tracks: usize) -> Vec<bool> {
    let mut at = vec![false; tracks + 1];
    let mut pos = 0;
    at[0] = true;
    for cell in row.cells() {
        pos += cell.span() as usize;
        if pos <= tracks {
            at[pos] = true;
        }
    }
    at
}

fn separator(above: Option<&Row>, below: Option<&Row>, widths: &[usize]) -> String {
    let tracks = widths.len();
    let up = above.map(|r| borders(r, tracks));
    let down = below.map(|r| borders(r, tracks));
    let has = |side: &Option<Vec<bool>>, k: usize| side.as_ref().is_some_and(|b| b[k]);

    let mut line = String::new();
    for k in 0..=tracks {
        line.push(junction(has(&up, k), has(&down, k), k > 0, k < tracks));
        if let Some(width) = widths.get(k) {
            line.extend(std::iter::repeat_n('─', *width));
        }
    }
    line.push('\n');
    line
}

fn content_line(row: &Row, widths: &[usize], color: bool) -> String {
    let mut line = String::from("│");
    let mut track = 0;

    for cell in row.cells() {
        let span = cell.span() as usize;
        let end = (track + span).min(widths.len());
        // Merged cells absorb the borders between their tracks.
        let width = widths[track..end].iter().sum::<usize>() + end.saturating_sub(track + 1);
        line.push_str(&paint(cell, width, color));
        line.push('│');
        track = end;
    }

    line.push('\n');
    line
}

/// Text as the bundle displays it: uppercased and letter-spaced when asked.
fn display_text(cell: &Cell) -> String {
    let bundle = cell.bundle();
    let text = if bundle.uppercase {
        cell.text().to_uppercase()
    } else {
        cell.text().to_string()
    };

    if bundle.spaced {
        text.chars()
            .map(|c| c.to_string())
            .collect::<Vec<_>>()
            .join(" ")
    } else {
        text
    }
}

fn fit(text: &str, width: usize) -> String {
    let len = text.chars().count();
    if len <= width {
        let left = (width - len) / 2;
        let right = width - len - left;
        return format!("{}{}{}", " ".repeat(left), text, " ".repeat(right));
    }
    if width == 0 {
        return String::new();
    }
    let truncated: String = text.chars().take(width - 1).collect();
    format!("{}…", truncated)
}

fn style_for(bundle: &StyleBundle) -> Style {
    let mut style = Style::new();
    if bundle.bold {
        style = style.bold();
    }
    if bundle.italic {
        style = style.italic();
    }
    if bundle.dimmed {
        style = style.dimmed();
    }
    if bundle.shaded {
        style = style.on_bright_black();
    }
    style
}

fn paint(cell: &Cell, width: usize, color: bool) -> String {
    let text = fit(&display_text(cell), width);
    if color {
        text.style(style_for(cell.bundle())).to_string()
    } else {
        text
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cell::CellType;

    fn plain_grid() -> Vec<String> {
        render_grid(&Schedule::week(), false)
            .lines()
            .map(str::to_string)
            .collect()
    }

    #[test]
    fn test_corners_and_edges() {
        assert_eq!(junction(false, true, false, true), '╭');
        assert_eq!(junction(false, true, true, false), '╮');
        assert_eq!(junction(true, false, false, true), '╰');
        assert_eq!(junction(true, false, true, false), '╯');
        assert_eq!(junction(true, true, false, true), '├');
        assert_eq!(junction(true, true, true, false), '┤');
    }

    #[test]
    fn test_inner_junctions() {
        assert_eq!(junction(true, true, true, true), '┼');
        assert_eq!(junction(false, true, true, true), '┬');
        assert_eq!(junction(true, false, true, true), '┴');
        assert_eq!(junction(false, false, true, true), '─');
    }

    #[test]
    fn test_grid_line_count() {
        // One content line per row plus a separator above, between and below.
        assert_eq!(plain_grid().len(), 10 * 2 + 1);
    }

    #[test]
    fn test_lines_have_equal_width() {
        let lines = plain_grid();
        let width = TIME_WIDTH + 5 * DAY_WIDTH + 7;
        for line in &lines {
            assert_eq!(line.chars().count(), width, "{line}");
        }
    }

    #[test]
    fn test_header_line_is_uppercase() {
        let lines = plain_grid();
        assert_eq!(
            lines[1],
            "│ TIME  │   MON   │   TUE   │   WED   │   THU   │   FRI   │"
        );
    }

    #[test]
    fn test_regular_row_is_blank() {
        let lines = plain_grid();
        assert_eq!(
            lines[3],
            "│ 9:00  │         │         │         │         │         │"
        );
    }

    #[test]
    fn test_lunch_row_is_merged() {
        let lines = plain_grid();
        let lunch = lines.iter().find(|l| l.contains("L U N C H")).unwrap();
        assert!(lunch.starts_with("│ 1:00  │"));
        assert_eq!(lunch.matches('│').count(), 3);

        // Only the time column border crosses the separators around the merged row.
        let idx = lines.iter().position(|l| l == lunch).unwrap();
        assert_eq!(lines[idx - 1].matches('┼').count(), 1);
        assert_eq!(lines[idx - 1].matches('┴').count(), 4);
        assert_eq!(lines[idx + 1].matches('┼').count(), 1);
        assert_eq!(lines[idx + 1].matches('┬').count(), 4);
    }

    #[test]
    fn test_frame_uses_rounded_corners() {
        let lines = plain_grid();
        assert!(lines[0].starts_with('╭') && lines[0].ends_with('╮'));
        let last = lines.last().unwrap();
        assert!(last.starts_with('╰') && last.ends_with('╯'));
    }

    #[test]
    fn test_fit_centers_and_truncates() {
        assert_eq!(fit("ab", 6), "  ab  ");
        assert_eq!(fit("abc", 6), " abc  ");
        assert_eq!(fit("abcdefgh", 4), "abc…");
        assert_eq!(fit("abc", 0), "");
    }

    #[test]
    fn test_display_text_follows_bundle() {
        assert_eq!(display_text(&Cell::typed(CellType::Header, "Mon")), "MON");
        assert_eq!(display_text(&Cell::typed(CellType::Break, "Lunch")), "L U N C H");
        assert_eq!(display_text(&Cell::typed(CellType::Time, "9:00")), "9:00");
        assert_eq!(display_text(&Cell::new()), "");
    }

    #[test]
    fn test_plain_output_has_no_ansi() {
        let output = render_page(&Page::new(), false);
        assert!(!output.contains('\x1b'));
        assert!(output.starts_with("Week Schedule\nSpring / 3rd / DSAI / 2025\n"));
    }

    #[test]
    fn test_color_output_styles_header_cells() {
        let output = render_grid(&Schedule::week(), true);
        assert!(output.contains('\x1b'));
        assert!(output.contains("MON"));
    }
}
