use crate::ui::theme::{ACCENT, GLOBAL_BORDER, HEADER_SEPARATOR, HEADER_TEXT, STATUS_ERROR};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

pub struct Header<'a> {
    row_count: usize,
    unreadable: usize,
    location: &'a str,
}

impl<'a> Header<'a> {
    pub fn new(row_count: usize, unreadable: usize, location: &'a str) -> Self {
        Self {
            row_count,
            unreadable,
            location,
        }
    }

    pub fn widget(&self) -> Paragraph<'static> {
        let text_style = Style::default().fg(HEADER_TEXT);
        let separator_style = Style::default().fg(HEADER_SEPARATOR);
        let title_style = Style::default().fg(ACCENT).add_modifier(Modifier::BOLD);
        let students = match self.row_count {
            1 => "1 student".to_string(),
            n => format!("{n} students"),
        };
        let mut spans = vec![
            Span::styled("  ", text_style),
            Span::styled("Student Form", title_style),
            Span::styled("  │  ", separator_style),
            Span::styled(students, text_style),
        ];
        if self.unreadable > 0 {
            spans.push(Span::styled(
                format!(" (+{} unreadable, kept)", self.unreadable),
                Style::default().fg(STATUS_ERROR),
            ));
        }
        spans.push(Span::styled("  │  ", separator_style));
        spans.push(Span::styled(self.location.to_string(), text_style));
        let line = Line::from(spans);

        Paragraph::new(line).block(
            Block::default()
                .borders(Borders::TOP | Borders::BOTTOM)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        )
    }
}
