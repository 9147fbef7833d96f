use crate::student::StudentRecord;
use crate::ui::theme::{
    ACCENT, ACTIVE_HIGHLIGHT, GLOBAL_BORDER, HEADER_TEXT, PLACEHOLDER_TEXT, STATUS_ERROR,
    TABLE_HEADER_BG,
};
use ratatui::layout::{Alignment, Constraint, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Cell, Paragraph, Row, Table, TableState};
use ratatui::Frame;

const WIDTHS: [Constraint; 6] = [
    Constraint::Min(16),
    Constraint::Length(5),
    Constraint::Length(9),
    Constraint::Length(11),
    Constraint::Length(8),
    Constraint::Length(18),
];

/// Results table, or "No data found" when there are no rows.
pub fn render_table(
    frame: &mut Frame<'_>,
    area: Rect,
    rows: &[StudentRecord],
    selected: Option<usize>,
    active: bool,
) {
    let border = if active { ACCENT } else { GLOBAL_BORDER };
    let block = Block::default()
        .title(" Students ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border));

    if rows.is_empty() {
        let inner_height = area.height.saturating_sub(2);
        let mut lines = vec![Line::from(""); usize::from(inner_height / 2)];
        lines.push(Line::styled(
            "No data found",
            Style::default()
                .fg(PLACEHOLDER_TEXT)
                .add_modifier(Modifier::BOLD),
        ));
        let empty = Paragraph::new(lines)
            .alignment(Alignment::Center)
            .block(block);
        frame.render_widget(empty, area);
        return;
    }

    let header_style = Style::default()
        .fg(HEADER_TEXT)
        .bg(TABLE_HEADER_BG)
        .add_modifier(Modifier::BOLD);
    let header = Row::new(["Name", "Age", "Standard", "Disibility", "Gender", ""])
        .style(header_style);

    let body = rows.iter().enumerate().map(|(index, record)| {
        let is_selected = active && selected == Some(index);
        Row::new(vec![
            Cell::from(record.name.clone()),
            Cell::from(record.age.to_string()),
            Cell::from(record.standard.number().to_string()),
            Cell::from(if record.disability { "Yes" } else { "No" }),
            Cell::from(record.gender.as_str()),
            Cell::from(actions(is_selected)),
        ])
        .style(Style::default().fg(HEADER_TEXT))
    });

    let table = Table::new(body, WIDTHS)
        .header(header)
        .block(block)
        .row_highlight_style(Style::default().bg(ACTIVE_HIGHLIGHT))
        .highlight_symbol("> ");

    let mut state = TableState::default().with_selected(if active { selected } else { None });
    frame.render_stateful_widget(table, area, &mut state);
}

fn actions(selected: bool) -> Line<'static> {
    if selected {
        Line::from(vec![
            Span::styled("[e] Edit", Style::default().fg(ACCENT)),
            Span::raw("  "),
            Span::styled("[d] Delete", Style::default().fg(STATUS_ERROR)),
        ])
    } else {
        Line::styled("Edit  Delete", Style::default().fg(PLACEHOLDER_TEXT))
    }
}
