use crate::app::App;
use crate::theme::THEMES;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Padding},
    Frame,
};

pub fn render_theme_picker(frame: &mut Frame, app: &mut App, body: Rect) {
    let theme = app.theme;

    let items: Vec<ListItem> = THEMES
        .iter()
        .map(|t| {
            let current = t.name == app.config.theme;
            let suffix = if current { "  (current)" } else { "" };
            ListItem::new(Line::from(vec![
                Span::styled("■ ", Style::default().fg(t.accent)),
                Span::raw(format!("{}{}", t.name, suffix)),
            ]))
        })
        .collect();

    let mut state = ListState::default();
    state.select(Some(app.theme_index));

    let list = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Theme ")
                .border_style(Style::default().fg(theme.muted))
                .padding(Padding::horizontal(2)),
        )
        .highlight_style(
            Style::default()
                .fg(theme.accent)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("▶ ");

    frame.render_stateful_widget(list, body, &mut state);
}
