use crate::app::{App, SettingsField, TextInput};
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Padding, Paragraph},
    Frame,
};

pub fn render_settings_view(frame: &mut Frame, app: &mut App, body: Rect) {
    let theme = app.theme;
    let form = match &app.settings_form {
        Some(f) => f,
        None => return,
    };

    let mut lines = vec![Line::from("")];
    lines.push(field_line(
        "Bedtime (HH:MM)",
        &form.bedtime,
        form.focused_field == SettingsField::Bedtime,
        false,
        theme.accent,
    ));
    lines.push(field_line(
        "Endpoint URL   ",
        &form.endpoint_url,
        form.focused_field == SettingsField::EndpointUrl,
        false,
        theme.accent,
    ));
    lines.push(field_line(
        "Access token   ",
        &form.access_token,
        form.focused_field == SettingsField::AccessToken,
        true,
        theme.accent,
    ));
    lines.push(Line::from(""));

    if let Some(err) = &form.error {
        lines.push(Line::from(Span::styled(
            err.as_str(),
            Style::default().fg(Color::Red),
        )));
        lines.push(Line::from(""));
    }

    lines.push(Line::from(vec![
        Span::styled("Tab", Style::default().fg(theme.accent)),
        Span::raw(": Next field  "),
        Span::styled("Enter", Style::default().fg(theme.accent)),
        Span::raw(": Save  "),
        Span::styled("Ctrl+T", Style::default().fg(theme.accent)),
        Span::raw(": Test endpoint  "),
        Span::styled("Esc", Style::default().fg(theme.accent)),
        Span::raw(": Cancel"),
    ]));

    let widget = Paragraph::new(lines).alignment(Alignment::Left).block(
        Block::default()
            .borders(Borders::ALL)
            .title(" Settings ")
            .border_style(Style::default().fg(theme.muted))
            .padding(Padding::horizontal(2)),
    );
    frame.render_widget(widget, body);
}

fn field_line(
    label: &str,
    input: &TextInput,
    focused: bool,
    masked: bool,
    accent: Color,
) -> Line<'static> {
    let label_style = if focused {
        Style::default().fg(accent)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    let value_style = if focused {
        Style::default().fg(Color::White).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::White)
    };

    let mut spans = vec![Span::styled(format!("{label}: "), label_style)];
    if masked {
        let masked_value = "•".repeat(input.value.chars().count());
        spans.push(Span::styled(masked_value, value_style));
        if focused {
            spans.push(Span::styled("|", Style::default().fg(accent)));
        }
    } else if focused {
        let (before, after) = input.split_at_cursor();
        spans.push(Span::styled(before.to_string(), value_style));
        spans.push(Span::styled("|", Style::default().fg(accent)));
        spans.push(Span::styled(after.to_string(), value_style));
    } else {
        spans.push(Span::styled(input.value.clone(), value_style));
    }

    Line::from(spans)
}
