//! Status bar rendering with keybindings and state indicators

use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Render the status bar at the bottom
pub fn render_status_bar(
    frame: &mut Frame,
    area: Rect,
    message: &str,
    construct: &str,
    step_count: usize,
    is_playing: bool,
    is_done: bool,
) {
    let layout = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    let badge_bg = if is_done {
        DEFAULT_THEME.success
    } else if is_playing {
        DEFAULT_THEME.secondary
    } else {
        DEFAULT_THEME.primary
    };

    let left_spans = vec![
        Span::styled(
            format!(" {} · step {} ", construct, step_count),
            Style::default()
                .bg(badge_bg)
                .fg(DEFAULT_THEME.bg)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(" | ", Style::default().fg(DEFAULT_THEME.comment)),
        Span::styled(message, Style::default().fg(DEFAULT_THEME.fg)),
    ];

    let right_spans = vec![Span::styled(
        "→/n step · space play · r reset · 1-9 multi-step · tab focus · q quit ",
        Style::default().fg(DEFAULT_THEME.comment),
    )];

    frame.render_widget(Paragraph::new(Line::from(left_spans)), layout[0]);
    frame.render_widget(
        Paragraph::new(Line::from(right_spans)).alignment(Alignment::Right),
        layout[1],
    );
}
