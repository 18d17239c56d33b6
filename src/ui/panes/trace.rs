//! Trace pane rendering
//!
//! Shows where the trace currently sits: the phase's label, its code
//! fragment and one-line description from the construct table, the live
//! variable values, and the completed-iteration count.

use crate::constructs::ConstructSpec;
use crate::trace::state::TraceState;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Render the trace pane
pub fn render_trace_pane(
    frame: &mut Frame,
    area: Rect,
    spec: &ConstructSpec,
    state: &TraceState,
    is_focused: bool,
    scroll_offset: &mut usize,
) {
    let border_style = if is_focused {
        Style::default()
            .fg(DEFAULT_THEME.border_focused)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(DEFAULT_THEME.border_normal)
    };

    let block = Block::default()
        .title(" Trace ")
        .borders(Borders::ALL)
        .border_style(border_style);

    let mut lines: Vec<Line> = Vec::new();

    match spec.phase(state.phase) {
        Some(descriptor) => {
            lines.push(Line::from(vec![
                Span::styled("Phase: ", Style::default().fg(DEFAULT_THEME.comment)),
                Span::styled(
                    descriptor.label,
                    Style::default()
                        .fg(DEFAULT_THEME.primary)
                        .add_modifier(Modifier::BOLD),
                ),
            ]));
            lines.push(Line::from(vec![
                Span::styled("Code:  ", Style::default().fg(DEFAULT_THEME.comment)),
                Span::styled(descriptor.code, Style::default().fg(DEFAULT_THEME.function)),
            ]));
            lines.push(Line::from(Span::styled(
                descriptor.description,
                Style::default().fg(DEFAULT_THEME.fg),
            )));
        }
        None => {
            lines.push(Line::from(Span::styled(
                format!("Unknown phase: {}", state.phase),
                Style::default().fg(DEFAULT_THEME.error),
            )));
        }
    }

    lines.push(Line::default());

    for (name, value) in state.sorted_variables() {
        lines.push(Line::from(vec![
            Span::styled(
                format!("{} ", name),
                Style::default().fg(DEFAULT_THEME.type_name),
            ),
            Span::styled("= ", Style::default().fg(DEFAULT_THEME.comment)),
            Span::styled(value.to_string(), Style::default().fg(DEFAULT_THEME.number)),
        ]));
    }

    lines.push(Line::default());
    lines.push(Line::from(vec![
        Span::styled("Iterations: ", Style::default().fg(DEFAULT_THEME.comment)),
        Span::styled(
            state.iterations.to_string(),
            Style::default().fg(DEFAULT_THEME.fg),
        ),
    ]));

    if state.done {
        lines.push(Line::from(Span::styled(
            "Done",
            Style::default()
                .fg(DEFAULT_THEME.success)
                .add_modifier(Modifier::BOLD),
        )));
    }

    // Clamp scroll to the content height
    let visible_height = area.height.saturating_sub(2).max(1) as usize;
    if lines.len() > visible_height {
        *scroll_offset = (*scroll_offset).min(lines.len() - visible_height);
    } else {
        *scroll_offset = 0;
    }

    let paragraph = Paragraph::new(lines)
        .block(block)
        .scroll((*scroll_offset as u16, 0));
    frame.render_widget(paragraph, area);
}
