use crate::student::{Gender, Standard};
use crate::ui::form::{FormField, FormState};
use crate::ui::theme::{
    ACCENT, ACTIVE_HIGHLIGHT, GLOBAL_BORDER, HEADER_TEXT, PLACEHOLDER_TEXT, STATUS_ERROR,
};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

/// Form panel. `active` is false while the table has focus.
pub fn form_widget(state: &FormState, active: bool) -> Paragraph<'static> {
    let focused = active.then_some(state.focused);
    let label_style = Style::default().fg(HEADER_TEXT);
    let age_label_style = if state.age_error {
        Style::default().fg(STATUS_ERROR)
    } else {
        label_style
    };

    let lines = vec![
        Line::styled("Students full name", label_style),
        text_input(&state.name, "Students full name", focused == Some(FormField::Name)),
        Line::from(""),
        Line::styled("Age", age_label_style),
        text_input(&state.age, "Students age", focused == Some(FormField::Age))
            .patch_style(if state.age_error {
                Style::default().fg(STATUS_ERROR)
            } else {
                Style::default()
            }),
        Line::from(""),
        Line::styled("Standard", label_style),
        standard_select(state.standard, focused == Some(FormField::Standard)),
        Line::from(""),
        Line::styled("Gender", label_style),
        gender_radio(state.gender, focused == Some(FormField::Gender)),
        Line::from(""),
        checkbox(
            state.disability,
            "Has any disabilities ?",
            focused == Some(FormField::Disability),
        ),
        Line::from(""),
        submit_button(state.submit_label(), focused == Some(FormField::Submit)),
    ];

    let border = if active { ACCENT } else { GLOBAL_BORDER };
    Paragraph::new(lines).block(
        Block::default()
            .title(" Student ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border)),
    )
}

fn marker(focused: bool) -> Span<'static> {
    if focused {
        Span::styled("> ", Style::default().fg(ACCENT))
    } else {
        Span::raw("  ")
    }
}

fn field_style(focused: bool) -> Style {
    if focused {
        Style::default().fg(HEADER_TEXT).bg(ACTIVE_HIGHLIGHT)
    } else {
        Style::default().fg(HEADER_TEXT)
    }
}

fn text_input(value: &str, placeholder: &str, focused: bool) -> Line<'static> {
    let mut spans = vec![marker(focused)];
    if value.is_empty() {
        spans.push(Span::styled(
            placeholder.to_string(),
            field_style(focused).fg(PLACEHOLDER_TEXT),
        ));
    } else {
        spans.push(Span::styled(value.to_string(), field_style(focused)));
    }
    if focused {
        spans.push(Span::styled(
            "█",
            Style::default().fg(ACCENT).add_modifier(Modifier::SLOW_BLINK),
        ));
    }
    Line::from(spans)
}

fn standard_select(standard: Standard, focused: bool) -> Line<'static> {
    let arrow = Style::default().fg(if focused { ACCENT } else { PLACEHOLDER_TEXT });
    Line::from(vec![
        marker(focused),
        Span::styled("◀ ", arrow),
        Span::styled(format!("{:<6}", standard.label()), field_style(focused)),
        Span::styled(" ▶", arrow),
    ])
}

fn gender_radio(selected: Gender, focused: bool) -> Line<'static> {
    let mut spans = vec![marker(focused)];
    for gender in Gender::ALL {
        let dot = if gender == selected { "(•) " } else { "( ) " };
        let style = if gender == selected {
            field_style(focused).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(HEADER_TEXT)
        };
        spans.push(Span::styled(format!("{dot}{}", gender.label()), style));
        spans.push(Span::raw("  "));
    }
    Line::from(spans)
}

fn checkbox(checked: bool, label: &str, focused: bool) -> Line<'static> {
    let mark = if checked { "[x] " } else { "[ ] " };
    Line::from(vec![
        marker(focused),
        Span::styled(format!("{mark}{label}"), field_style(focused)),
    ])
}

fn submit_button(label: &str, focused: bool) -> Line<'static> {
    let style = if focused {
        Style::default()
            .fg(HEADER_TEXT)
            .bg(ACCENT)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(ACCENT).add_modifier(Modifier::BOLD)
    };
    Line::from(vec![
        marker(focused),
        Span::styled(format!("[ {label} ]"), style),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(line: &Line<'_>) -> String {
        line.spans.iter().map(|span| span.content.as_ref()).collect()
    }

    #[test]
    fn submit_button_shows_label_as_written() {
        assert!(text(&submit_button("Create student", false)).ends_with("[ Create student ]"));
        assert!(text(&submit_button("Edit student data", true)).ends_with("[ Edit student data ]"));
    }
}
