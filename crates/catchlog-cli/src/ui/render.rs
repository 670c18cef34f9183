use super::app::{App, FilterField, Mode};
use crate::presentation::{format_timestamp, summary_line};
use catchlog_engine::{CatchSummary, Field, SortDirection, SortKey};
use catchlog_types::FishType;
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Row, Table},
};

pub fn draw(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Title + key hints
            Constraint::Length(3), // Filter bar
            Constraint::Min(0),    // Catch table
            Constraint::Length(2), // Summary + status
        ])
        .split(f.area());

    draw_header(f, chunks[0], app);
    draw_filter_bar(f, chunks[1], app);

    let records = app.visible_records();
    draw_table(f, chunks[2], app, &records);
    draw_footer(f, chunks[3], app, &records);

    if app.mode == Mode::Modal {
        draw_modal(f, app);
    }
}

fn draw_header(f: &mut Frame, area: Rect, app: &App) {
    let hints = match app.mode {
        Mode::Browse => "a add  f filters  1-5 sort  q quit",
        Mode::Filter => "Tab next field  \u{2190}\u{2192} type  Esc done",
        Mode::Modal => "Tab next field  Enter save  Esc cancel",
    };
    let line = Line::from(vec![
        Span::styled("Catchlog", Style::default().add_modifier(Modifier::BOLD)),
        Span::raw("  "),
        Span::styled(hints, Style::default().fg(Color::DarkGray)),
    ]);
    f.render_widget(Paragraph::new(line), area);
}

fn draw_filter_bar(f: &mut Frame, area: Rect, app: &App) {
    let focused = |field: FilterField| -> Style {
        if app.mode == Mode::Filter && app.filters.focus == field {
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
        } else {
            Style::default()
        }
    };

    let type_value = app
        .filters
        .fish_type
        .map(|ft| ft.as_str().to_string())
        .unwrap_or_else(|| "All".to_string());

    let field = |label: &str, value: &str, which: FilterField| -> Vec<Span<'static>> {
        vec![
            Span::styled(format!("{}: ", label), Style::default().fg(Color::DarkGray)),
            Span::styled(format!("[{}]", value), focused(which)),
            Span::raw("  "),
        ]
    };

    let mut spans = Vec::new();
    spans.extend(field("Type", &type_value, FilterField::FishType));
    spans.extend(field("Location", &app.filters.location, FilterField::Location));
    spans.extend(field("Lure", &app.filters.lure, FilterField::Lure));
    spans.extend(field("Min", &app.filters.min_size, FilterField::MinSize));
    spans.extend(field("Max", &app.filters.max_size, FilterField::MaxSize));

    let widget = Paragraph::new(Line::from(spans))
        .block(Block::default().borders(Borders::ALL).title("Filters"));
    f.render_widget(widget, area);
}

fn draw_table(f: &mut Frame, area: Rect, app: &App, records: &[catchlog_types::CatchRecord]) {
    if records.is_empty() {
        let placeholder = Paragraph::new(vec![
            Line::raw(""),
            Line::raw("No fish caught yet!"),
            Line::raw("Press 'a' to log your first catch."),
        ])
        .centered()
        .block(Block::default().borders(Borders::ALL));
        f.render_widget(placeholder, area);
        return;
    }

    let header = Row::new(vec![
        column_title(app, "Fish Type", SortKey::FishType, '1'),
        column_title(app, "Size", SortKey::Size, '2'),
        column_title(app, "Lure Used", SortKey::Lure, '3'),
        column_title(app, "Location", SortKey::Location, '4'),
        column_title(app, "Date & Time", SortKey::Timestamp, '5'),
    ])
    .style(Style::default().add_modifier(Modifier::BOLD));

    let rows: Vec<Row> = records
        .iter()
        .map(|record| {
            Row::new(vec![
                record.fish_type.as_str().to_string(),
                format!("{}\"", record.size),
                record.lure.clone(),
                record.location.clone(),
                format_timestamp(&record.timestamp),
            ])
            .style(Style::default().fg(fish_color(record.fish_type)))
        })
        .collect();

    let table = Table::new(
        rows,
        [
            Constraint::Length(18),
            Constraint::Length(8),
            Constraint::Length(20),
            Constraint::Length(22),
            Constraint::Length(17),
        ],
    )
    .header(header)
    .block(Block::default().borders(Borders::ALL));

    f.render_widget(table, area);
}

fn column_title(app: &App, title: &str, key: SortKey, hint: char) -> String {
    let arrow = if app.sort.key == key {
        match app.sort.direction {
            SortDirection::Ascending => " \u{2191}",
            SortDirection::Descending => " \u{2193}",
        }
    } else {
        ""
    };
    format!("[{}] {}{}", hint, title, arrow)
}

fn fish_color(fish_type: FishType) -> Color {
    match fish_type {
        FishType::LargemouthBass => Color::Green,
        FishType::SmallmouthBass => Color::Blue,
        FishType::RockBass => Color::Yellow,
        FishType::Pike => Color::Red,
    }
}

fn draw_footer(f: &mut Frame, area: Rect, app: &App, records: &[catchlog_types::CatchRecord]) {
    let summary = CatchSummary::compute(records);
    let mut lines = vec![Line::from(Span::styled(
        summary_line(&summary),
        Style::default().add_modifier(Modifier::BOLD),
    ))];
    if let Some(status) = &app.status {
        lines.push(Line::from(Span::styled(
            status.clone(),
            Style::default().fg(Color::Green),
        )));
    }
    f.render_widget(Paragraph::new(lines), area);
}

fn draw_modal(f: &mut Frame, app: &App) {
    let Some(modal) = app.modal.as_ref() else {
        return;
    };

    let area = centered_rect(46, 16, f.area());
    f.render_widget(Clear, area);

    let focused = |field: Field| -> Style {
        if modal.focus == field {
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
        } else {
            Style::default()
        }
    };

    let type_value = modal
        .form
        .fish_type()
        .map(|ft| ft.as_str().to_string())
        .unwrap_or_else(|| "Select fish type...".to_string());

    let mut lines = Vec::new();
    let mut push_field = |field: Field, value: String| {
        lines.push(Line::from(vec![
            Span::styled(format!("{}: ", field.label()), Style::default().fg(Color::DarkGray)),
            Span::styled(value, focused(field)),
        ]));
        if let Some(error) = modal.form.error(field) {
            lines.push(Line::from(Span::styled(
                format!("  {}", error),
                Style::default().fg(Color::Red),
            )));
        }
        lines.push(Line::raw(""));
    };

    push_field(Field::FishType, format!("\u{2190} {} \u{2192}", type_value));
    push_field(Field::Size, modal.form.size().to_string());
    push_field(Field::Lure, modal.form.lure().to_string());
    push_field(Field::Location, modal.form.location().to_string());

    let widget = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .title("Add New Fish"),
    );
    f.render_widget(widget, area);
}

fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let x = area.x + area.width.saturating_sub(width) / 2;
    let y = area.y + area.height.saturating_sub(height) / 2;
    Rect {
        x,
        y,
        width: width.min(area.width),
        height: height.min(area.height),
    }
}
