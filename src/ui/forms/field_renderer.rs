//! Field rendering utilities for forms

use crate::state::FormField;
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};
use unicode_width::UnicodeWidthStr;

/// Draw a form field using FormField from the domain layer
pub fn draw_field(frame: &mut Frame, area: Rect, field: &FormField, is_active: bool) {
    let style = if is_active {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let display_value = field.display_value();
    let display_str = if display_value.is_empty() && !is_active {
        "(empty)"
    } else {
        display_value
    };

    let cursor = if is_active { "▌" } else { "" };

    let block = Block::default()
        .title(format!(" {} ", field.label))
        .borders(Borders::ALL)
        .border_style(style);

    if field.is_multiline {
        // `lines()` drops a trailing empty line; keep it so the cursor follows Enter
        let text_lines: Vec<&str> = display_str.split('\n').collect();
        let inner = block.inner(area);
        let offset = scroll_offset(&text_lines, inner.width, inner.height, is_active);

        let mut lines: Vec<Line> = text_lines
            .iter()
            .map(|l| Line::from(Span::styled(l.to_string(), style)))
            .collect();
        if is_active {
            if let Some(last) = lines.last_mut() {
                last.spans
                    .push(Span::styled(cursor, Style::default().fg(Color::Cyan)));
            }
        }

        let content = Paragraph::new(lines)
            .wrap(Wrap { trim: false })
            .scroll((offset, 0))
            .block(block);
        frame.render_widget(content, area);
    } else {
        let content = Paragraph::new(Line::from(vec![
            Span::styled(display_str, style),
            Span::styled(cursor, Style::default().fg(Color::Cyan)),
        ]))
        .wrap(Wrap { trim: false })
        .block(block);
        frame.render_widget(content, area);
    }
}

/// Rows to scroll so the last line (and the cursor after it) stays visible
fn scroll_offset(lines: &[&str], width: u16, height: u16, with_cursor: bool) -> u16 {
    let width = usize::from(width.max(1));
    let rows: usize = lines
        .iter()
        .enumerate()
        .map(|(i, line)| {
            let mut cells = line.width();
            if with_cursor && i + 1 == lines.len() {
                cells += 1;
            }
            cells.div_ceil(width).max(1)
        })
        .sum();
    u16::try_from(rows.saturating_sub(usize::from(height))).unwrap_or(u16::MAX)
}

/// Draw the validation label under a field
pub fn draw_error_label(frame: &mut Frame, area: Rect, message: &str) {
    let label = Paragraph::new(Span::styled(
        format!(" {message}"),
        Style::default().fg(Color::Red),
    ));
    frame.render_widget(label, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::{backend::TestBackend, Terminal};

    #[test]
    fn test_scroll_offset_zero_when_content_fits() {
        assert_eq!(scroll_offset(&["a", "b"], 10, 4, true), 0);
        assert_eq!(scroll_offset(&[""], 10, 1, true), 0);
    }

    #[test]
    fn test_scroll_offset_keeps_last_line_visible() {
        let lines = ["1", "2", "3", "4", "5", "6"];
        assert_eq!(scroll_offset(&lines, 10, 4, true), 2);
    }

    #[test]
    fn test_scroll_offset_counts_wrapped_rows() {
        // 12 cells in a 5-cell row wrap to 3 rows; the cursor fits on the last
        assert_eq!(scroll_offset(&["abcdefghijkl"], 5, 2, true), 1);
        // CJK characters are two cells each
        assert_eq!(scroll_offset(&["日本語"], 4, 1, false), 1);
    }

    #[test]
    fn test_multiline_shows_last_line_and_style() {
        let mut field = FormField::text("Detail", true);
        for c in "1\n2\n3\n4\n5\n6".chars() {
            field.push_char(c);
        }

        let backend = TestBackend::new(12, 6);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|frame| draw_field(frame, frame.area(), &field, true))
            .unwrap();

        let buffer = terminal.backend().buffer();
        // Inner rows 1..=4 show lines 3 to 6
        assert_eq!(buffer[(1, 1)].symbol(), "3");
        assert_eq!(buffer[(1, 4)].symbol(), "6");
        assert_eq!(buffer[(2, 4)].symbol(), "▌");
        assert_eq!(buffer[(1, 1)].fg, Color::Cyan);
    }
}
