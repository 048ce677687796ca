use crate::app::App;
use crate::rings::{RingFrame, SEGMENTS};
use crate::theme::Theme;
use crate::time_utils::format_hhmm;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    symbols::Marker,
    text::{Line, Span},
    widgets::{
        canvas::{Canvas, Points},
        Block, Borders, Padding, Paragraph,
    },
    Frame,
};

// Ring radii in canvas units; the canvas is bounded to [-1.2, 1.2].
const HOUR_RADIUS: f64 = 1.0;
const PART_RADIUS: f64 = 0.72;
const INNER_RADIUS: f64 = 0.45;

// Each discrete segment spans 72 degrees minus a visual gap.
const SEGMENT_SWEEP: f64 = 360.0 / SEGMENTS as f64;
const SEGMENT_GAP: f64 = 8.0;
const ARC_STEP: f64 = 1.5;

pub fn render_clock_view(frame: &mut Frame, app: &mut App, body: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .margin(1)
        .constraints([Constraint::Min(30), Constraint::Length(36)])
        .split(body);

    render_rings(frame, chunks[0], app);

    let side = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4), // Phase
            Constraint::Length(5), // Block position
            Constraint::Length(4), // Focus
            Constraint::Min(0),
            Constraint::Length(3), // Status
            Constraint::Length(4), // Controls
        ])
        .split(chunks[1]);

    render_phase_box(frame, side[0], app);
    render_position_box(frame, side[1], app);
    render_focus_box(frame, side[2], app);
    render_status(frame, side[4], app);
    render_controls(frame, side[5], app.theme);
}

fn render_rings(frame: &mut Frame, area: Rect, app: &App) {
    let theme = app.theme;
    let ring_frame = app.ring_frame;
    let in_block = app.block_progress.is_some();

    let canvas = Canvas::default()
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Day Clock ")
                .border_style(Style::default().fg(theme.muted)),
        )
        .marker(Marker::Braille)
        .x_bounds([-1.2, 1.2])
        .y_bounds([-1.2, 1.2])
        .paint(move |ctx| {
            paint_segment_ring(
                ctx,
                HOUR_RADIUS,
                ring_frame.hour_segments,
                theme.hour_ring,
                theme.ring_empty,
                in_block,
            );
            paint_segment_ring(
                ctx,
                PART_RADIUS,
                ring_frame.part_segments,
                theme.part_ring,
                theme.ring_empty,
                in_block,
            );
            paint_inner_ring(ctx, &ring_frame, theme);
        });

    frame.render_widget(canvas, area);
}

/// One of the two discrete gauges: five segments, filled clockwise from the
/// top. Outside a block the whole ring renders empty.
fn paint_segment_ring(
    ctx: &mut ratatui::widgets::canvas::Context,
    radius: f64,
    filled: u8,
    fill_color: Color,
    empty_color: Color,
    in_block: bool,
) {
    for segment in 0..SEGMENTS {
        let start = segment as f64 * SEGMENT_SWEEP + SEGMENT_GAP / 2.0;
        let end = (segment + 1) as f64 * SEGMENT_SWEEP - SEGMENT_GAP / 2.0;
        let color = if in_block && segment < filled {
            fill_color
        } else {
            empty_color
        };
        let coords = arc_points(radius, start, end);
        ctx.draw(&Points {
            coords: &coords,
            color,
        });
    }
}

/// The continuous inner ring: an unbroken arc growing clockwise with the
/// current fraction, over a faint full-circle track.
fn paint_inner_ring(ctx: &mut ratatui::widgets::canvas::Context, frame: &RingFrame, theme: Theme) {
    let track = arc_points(INNER_RADIUS, 0.0, 360.0);
    ctx.draw(&Points {
        coords: &track,
        color: theme.ring_empty,
    });

    let sweep = 360.0 * frame.inner_fraction;
    if sweep > 0.0 {
        let fill = arc_points(INNER_RADIUS, 0.0, sweep);
        ctx.draw(&Points {
            coords: &fill,
            color: theme.inner_ring,
        });
    }
}

/// Sample an arc into points. Angles are degrees clockwise from twelve
/// o'clock, matching how the gauges read.
fn arc_points(radius: f64, start_deg: f64, end_deg: f64) -> Vec<(f64, f64)> {
    let mut coords = Vec::new();
    let mut angle = start_deg;
    while angle <= end_deg {
        let rad = angle.to_radians();
        coords.push((radius * rad.sin(), radius * rad.cos()));
        angle += ARC_STEP;
    }
    coords
}

fn render_phase_box(frame: &mut Frame, area: Rect, app: &App) {
    let theme = app.theme;
    let span = app.phase_span;

    let mut lines = Vec::new();
    if let Some(phase) = app.phase {
        lines.push(Line::from(Span::styled(
            phase.label(),
            Style::default()
                .fg(theme.accent)
                .add_modifier(Modifier::BOLD),
        )));
    }
    if let Some(span) = span {
        let remaining = span.end - app.now;
        let hours = remaining.whole_hours().max(0);
        let minutes = remaining.whole_minutes().max(0) % 60;
        lines.push(Line::from(Span::styled(
            format!(
                "{} – {}  ({hours}h {minutes:02}m left)",
                format_hhmm(span.start),
                format_hhmm(span.end)
            ),
            Style::default().fg(theme.muted),
        )));
    }

    let widget = Paragraph::new(lines).alignment(Alignment::Left).block(
        Block::default()
            .borders(Borders::ALL)
            .title(" Phase ")
            .border_style(Style::default().fg(theme.muted))
            .padding(Padding::horizontal(1)),
    );
    frame.render_widget(widget, area);
}

fn render_position_box(frame: &mut Frame, area: Rect, app: &App) {
    let theme = app.theme;

    let lines = match &app.block_progress {
        Some(p) => vec![
            Line::from(vec![
                Span::styled("Block ", Style::default().fg(theme.muted)),
                Span::styled(
                    p.block.to_string(),
                    Style::default().fg(theme.text).add_modifier(Modifier::BOLD),
                ),
                Span::styled("   Hour ", Style::default().fg(theme.muted)),
                Span::styled(
                    format!("{}/5", p.hour),
                    Style::default().fg(theme.hour_ring),
                ),
                Span::styled("   Part ", Style::default().fg(theme.muted)),
                Span::styled(
                    format!("{}/5", p.part),
                    Style::default().fg(theme.part_ring),
                ),
            ]),
            Line::from(Span::styled(
                format!("part {:>3.0}% elapsed", p.part_progress * 100.0),
                Style::default().fg(theme.muted),
            )),
        ],
        None => vec![Line::from(Span::styled(
            "outside work blocks",
            Style::default().fg(theme.muted),
        ))],
    };

    let widget = Paragraph::new(lines).alignment(Alignment::Left).block(
        Block::default()
            .borders(Borders::ALL)
            .title(" Position ")
            .border_style(Style::default().fg(theme.muted))
            .padding(Padding::horizontal(1)),
    );
    frame.render_widget(widget, area);
}

fn render_focus_box(frame: &mut Frame, area: Rect, app: &App) {
    let theme = app.theme;

    let (border_style, lines) = match app.focus.task() {
        Some(task) => (
            Style::default().fg(theme.accent),
            vec![
                Line::from(Span::styled(
                    "● focusing",
                    Style::default()
                        .fg(theme.accent)
                        .add_modifier(Modifier::BOLD),
                )),
                Line::from(Span::styled(
                    task.to_string(),
                    Style::default().fg(theme.text),
                )),
            ],
        ),
        None => (
            Style::default().fg(theme.muted),
            vec![Line::from(Span::styled(
                "idle (Space to start)",
                Style::default().fg(theme.muted),
            ))],
        ),
    };

    let widget = Paragraph::new(lines).alignment(Alignment::Left).block(
        Block::default()
            .borders(Borders::ALL)
            .title(" Focus ")
            .border_style(border_style)
            .padding(Padding::horizontal(1)),
    );
    frame.render_widget(widget, area);
}

fn render_status(frame: &mut Frame, area: Rect, app: &App) {
    let theme = app.theme;
    let text = app.status_message.clone().unwrap_or_default();

    let widget = Paragraph::new(text)
        .style(Style::default().fg(theme.text))
        .alignment(Alignment::Left)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Status ")
                .border_style(Style::default().fg(theme.muted))
                .padding(Padding::horizontal(1)),
        );
    frame.render_widget(widget, area);
}

fn render_controls(frame: &mut Frame, area: Rect, theme: Theme) {
    let key = Style::default().fg(theme.accent);
    let lines = vec![
        Line::from(vec![
            Span::styled("Space", key),
            Span::raw(": Focus  "),
            Span::styled("O", key),
            Span::raw(": Schedule  "),
            Span::styled("S", key),
            Span::raw(": Settings"),
        ]),
        Line::from(vec![
            Span::styled("T", key),
            Span::raw(": Theme  "),
            Span::styled("M", key),
            Span::raw(": Mute  "),
            Span::styled("Q", key),
            Span::raw(": Quit"),
        ]),
    ];

    let widget = Paragraph::new(lines).alignment(Alignment::Left).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.muted))
            .padding(Padding::horizontal(1)),
    );
    frame.render_widget(widget, area);
}
