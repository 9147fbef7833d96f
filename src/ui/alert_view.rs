use crate::ui::app::STUDENT_ADDED;
use crate::ui::layout::centered_rect_by_size;
use crate::ui::theme::{HEADER_TEXT, PLACEHOLDER_TEXT, POPUP_BORDER, STATUS_ERROR, STATUS_OK};
use ratatui::layout::{Alignment, Rect};
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};
use ratatui::Frame;

pub fn render_alert(frame: &mut Frame<'_>, area: Rect, message: &str) {
    let accent = if message == STUDENT_ADDED {
        STATUS_OK
    } else {
        STATUS_ERROR
    };
    let lines = vec![
        Line::from(""),
        Line::styled(message.to_string(), Style::default().fg(HEADER_TEXT)),
        Line::from(""),
        Line::styled("Enter: OK", Style::default().fg(PLACEHOLDER_TEXT)),
    ];

    let content_width = lines.iter().map(Line::width).max().unwrap_or(0) as u16;
    let width = content_width.saturating_add(8).max(32);
    let height = lines.len() as u16 + 2;
    let popup_area = centered_rect_by_size(area, width, height);

    frame.render_widget(Clear, popup_area);
    let popup = Block::default()
        .title(Span::styled(" Alert ", Style::default().fg(accent)))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(POPUP_BORDER));
    frame.render_widget(
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .block(popup),
        popup_area,
    );
}
