use crate::ui::alert_view::render_alert;
use crate::ui::app::{App, Focus};
use crate::ui::footer::Footer;
use crate::ui::form_view::form_widget;
use crate::ui::header::Header;
use crate::ui::layout::{body_columns, layout_regions};
use crate::ui::table_view::render_table;
use ratatui::widgets::Clear;
use ratatui::Frame;

/// Redraw the whole screen from the current app state.
pub fn draw(frame: &mut Frame<'_>, app: &App) {
    let area = frame.area();
    let (header, body, footer) = layout_regions(area);

    let location = app.store().storage_location();
    let store = app.store();
    frame.render_widget(
        Header::new(store.len(), store.unreadable_len(), &location).widget(),
        header,
    );

    frame.render_widget(Clear, body);
    let (form_area, table_area) = body_columns(body);
    frame.render_widget(
        form_widget(app.form(), app.focus() == Focus::Form),
        form_area,
    );
    render_table(
        frame,
        table_area,
        app.store().rows(),
        app.selection().selected,
        app.focus() == Focus::Table,
    );

    frame.render_widget(Footer::new(app.focus()).widget(footer), footer);

    if let Some(message) = app.alert().message() {
        render_alert(frame, body, message);
    }
}
