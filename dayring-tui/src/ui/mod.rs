use crate::app::{App, View};
use crate::time_utils::format_hhmm;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Padding, Paragraph},
    Frame,
};

mod clock_view;
mod schedule_view;
mod settings_view;
mod theme_view;
pub(super) mod utils;

pub fn render(frame: &mut Frame, app: &mut App) {
    let root = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(2), Constraint::Min(0)])
        .split(frame.area());

    render_header(frame, root[0], app);

    let body = root[1];
    match app.current_view {
        View::Clock => clock_view::render_clock_view(frame, app, body),
        View::Schedule => schedule_view::render_schedule_view(frame, app, body),
        View::Settings => settings_view::render_settings_view(frame, app, body),
        View::ThemePicker => theme_view::render_theme_picker(frame, app, body),
    }

    // Task prompt overlay — renders on top of any view
    if app.task_overlay.is_some() {
        render_task_overlay(frame, app);
    }
}

fn render_header(frame: &mut Frame, area: Rect, app: &mut App) {
    let theme = app.theme;

    let mut spans = vec![
        Span::styled(
            format_hhmm(app.now),
            Style::default()
                .fg(theme.text)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw("  "),
    ];

    if let Some(phase) = app.phase {
        spans.push(Span::styled(
            phase.label(),
            Style::default().fg(theme.accent),
        ));
    }

    if app.focus.is_focusing() {
        spans.push(Span::raw("  "));
        spans.push(Span::styled(
            "● focus",
            Style::default().fg(theme.accent),
        ));
    }

    if app.cue_muted {
        spans.push(Span::raw("  "));
        spans.push(Span::styled("muted", Style::default().fg(theme.muted)));
    }

    if app.is_loading {
        spans.push(Span::raw("  "));
        let throbber = throbber_widgets_tui::Throbber::default();
        let line = Line::from(spans);
        let chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Min(0), Constraint::Length(2)])
            .split(area);
        frame.render_widget(Paragraph::new(line).alignment(Alignment::Left), chunks[0]);
        frame.render_stateful_widget(throbber, chunks[1], &mut app.throbber_state);
        return;
    }

    frame.render_widget(
        Paragraph::new(Line::from(spans)).alignment(Alignment::Left),
        area,
    );
}

fn render_task_overlay(frame: &mut Frame, app: &App) {
    let overlay = match &app.task_overlay {
        Some(o) => o,
        None => return,
    };
    let theme = app.theme;

    let area = utils::centered_rect(54, 9, frame.area());
    frame.render_widget(Clear, area);

    let (before, after) = overlay.input.split_at_cursor();
    let mut lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            "What are you focusing on?",
            Style::default().fg(theme.text),
        )),
        Line::from(""),
        Line::from(vec![
            Span::styled("> ", Style::default().fg(theme.accent)),
            Span::raw(before.to_string()),
            Span::styled("|", Style::default().fg(theme.accent)),
            Span::raw(after.to_string()),
        ]),
        Line::from(""),
    ];

    if let Some(err) = &overlay.error {
        lines.push(Line::from(Span::styled(
            err.as_str(),
            Style::default().fg(Color::Red),
        )));
    } else {
        lines.push(Line::from(vec![
            Span::styled("Enter", Style::default().fg(theme.accent)),
            Span::raw(": Start  "),
            Span::styled("Esc", Style::default().fg(theme.accent)),
            Span::raw(": Cancel"),
        ]));
    }

    let paragraph = Paragraph::new(lines)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(theme.accent))
                .title(Span::styled(
                    " Focus Session ",
                    Style::default().fg(theme.accent),
                ))
                .padding(Padding::horizontal(2)),
        )
        .alignment(Alignment::Left);

    frame.render_widget(paragraph, area);
}
