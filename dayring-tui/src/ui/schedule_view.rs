use crate::app::App;
use crate::schedule::Phase;
use crate::time_utils::format_hhmm;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Padding, Paragraph},
    Frame,
};

/// Today's full cycle, one row per phase, the active one highlighted.
pub fn render_schedule_view(frame: &mut Frame, app: &mut App, body: Rect) {
    let theme = app.theme;
    let milestones = app.resolver.milestones();

    let mut lines = vec![Line::from("")];
    for phase in Phase::ALL {
        let span = milestones.phase_span(phase);
        let active = app.phase == Some(phase);

        let marker = if active { "▶ " } else { "  " };
        let style = if active {
            Style::default()
                .fg(theme.accent)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(theme.text)
        };

        lines.push(Line::from(vec![
            Span::styled(marker, Style::default().fg(theme.accent)),
            Span::styled(format!("{:<10}", phase.label()), style),
            Span::styled(
                format!("{} – {}", format_hhmm(span.start), format_hhmm(span.end)),
                Style::default().fg(theme.muted),
            ),
        ]));
    }

    lines.push(Line::from(""));
    lines.push(Line::from(vec![
        Span::styled("Esc", Style::default().fg(theme.accent)),
        Span::raw(": Back  "),
        Span::styled("Space", Style::default().fg(theme.accent)),
        Span::raw(": Focus  "),
        Span::styled("Q", Style::default().fg(theme.accent)),
        Span::raw(": Quit"),
    ]));

    let widget = Paragraph::new(lines).alignment(Alignment::Left).block(
        Block::default()
            .borders(Borders::ALL)
            .title(" Schedule ")
            .border_style(Style::default().fg(theme.muted))
            .padding(Padding::horizontal(2)),
    );
    frame.render_widget(widget, body);
}
