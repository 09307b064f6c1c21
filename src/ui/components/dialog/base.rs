//! Base dialog component

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};
use unicode_width::UnicodeWidthStr;

/// Configuration for rendering a dialog
pub struct DialogConfig<'a> {
    /// Dialog title
    pub title: &'a str,
    /// Title color
    pub title_color: Color,
    /// Border color
    pub border_color: Color,
    /// Hint text shown at the bottom (e.g., "Press Enter to dismiss")
    pub hint: Option<Vec<Span<'a>>>,
    /// Maximum width of the dialog
    pub max_width: u16,
}

impl<'a> Default for DialogConfig<'a> {
    fn default() -> Self {
        Self {
            title: "Dialog",
            title_color: Color::White,
            border_color: Color::White,
            hint: None,
            max_width: 60,
        }
    }
}

/// Render a centered dialog overlay
pub fn render_dialog(frame: &mut Frame, config: DialogConfig) {
    let area = frame.area();
    let padding = 4u16; // 2 cells padding on each side

    // Widths are terminal cells, so CJK text counts double
    let hint_width = config
        .hint
        .as_ref()
        .map(|spans| spans.iter().map(|s| s.content.width()).sum::<usize>())
        .unwrap_or(0);
    let content_width = config.title.width().max(hint_width) as u16;
    let dialog_width = (content_width + padding + 2).min(config.max_width); // +2 for borders

    // Height: title + blank + hint + borders
    let hint_lines = if config.hint.is_some() { 2 } else { 0 };
    let dialog_height = (1 + hint_lines + 2).max(5);

    let dialog_area = centered(area, dialog_width, dialog_height);

    // Clear the area behind the dialog
    frame.render_widget(Clear, dialog_area);

    let mut content = vec![Line::from(Span::styled(
        config.title,
        Style::default()
            .fg(config.title_color)
            .add_modifier(Modifier::BOLD),
    ))];

    if let Some(hint_spans) = config.hint {
        content.push(Line::from(""));
        content.push(Line::from(hint_spans));
    }

    let dialog = Paragraph::new(content)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(config.border_color))
                .style(Style::default().bg(Color::Black)),
        )
        .style(Style::default().bg(Color::Black));

    frame.render_widget(dialog, dialog_area);
}

/// Center a `width` x `height` box inside `area`
fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dialog_fits_double_width_title() {
        use ratatui::{backend::TestBackend, Terminal};

        let backend = TestBackend::new(40, 10);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|frame| {
                render_dialog(
                    frame,
                    DialogConfig {
                        title: "登録が完了しました。",
                        ..Default::default()
                    },
                )
            })
            .unwrap();

        // 20 cells of title + 4 padding + 2 borders, centered in 40
        let buffer = terminal.backend().buffer();
        assert_eq!(buffer[(7, 2)].symbol(), "┌");
        assert_eq!(buffer[(32, 2)].symbol(), "┐");
    }

    #[test]
    fn test_centered_fits_inside_area() {
        let area = Rect::new(0, 0, 10, 4);
        let rect = centered(area, 20, 8);
        assert_eq!(rect, Rect::new(0, 0, 10, 4));
        assert_eq!(centered(Rect::new(0, 0, 80, 24), 20, 6), Rect::new(30, 9, 20, 6));
    }
}
