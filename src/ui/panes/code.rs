//! Code listing pane with phase highlighting
//!
//! Renders the construct's listing (already parameterized with the user's
//! inputs) with basic JavaScript syntax highlighting. The lines named by the
//! highlight resolver get an arrow indicator and a raised background, the
//! way a debugger marks the current statement.

use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Simple syntax highlighting for the JavaScript-flavored listings
fn highlight_source_line(line: &str) -> Vec<Span<'_>> {
    let mut spans = Vec::new();
    let mut current_word = String::new();

    let chars: Vec<char> = line.chars().collect();
    let mut i = 0;

    while i < chars.len() {
        let c = chars[i];

        // Handle comments
        if c == '/' && i + 1 < chars.len() && chars[i + 1] == '/' {
            if !current_word.is_empty() {
                spans.push(Span::raw(current_word.clone()));
                current_word.clear();
            }
            spans.push(Span::styled(
                line[i..].to_string(),
                Style::default().fg(DEFAULT_THEME.comment),
            ));
            break;
        }

        // Handle strings
        if c == '"' {
            if !current_word.is_empty() {
                spans.push(Span::raw(current_word.clone()));
                current_word.clear();
            }
            let mut end = i + 1;
            while end < chars.len() && chars[end] != '"' {
                if chars[end] == '\\' {
                    end += 2;
                } else {
                    end += 1;
                }
            }
            if end < chars.len() {
                end += 1;
            }
            spans.push(Span::styled(
                line[i..end.min(line.len())].to_string(),
                Style::default().fg(DEFAULT_THEME.string),
            ));
            i = end;
            continue;
        }

        // Handle non-alphanumeric (delimiters)
        if !c.is_alphanumeric() && c != '_' {
            if !current_word.is_empty() {
                let is_func = c == '(';
                let style = get_keyword_style(&current_word, is_func);
                spans.push(Span::styled(current_word.clone(), style));
                current_word.clear();
            }

            let style = match c {
                '{' | '}' | '(' | ')' | '[' | ']' => Style::default().fg(DEFAULT_THEME.primary),
                _ => Style::default().fg(DEFAULT_THEME.fg),
            };

            spans.push(Span::styled(c.to_string(), style));
            i += 1;
            continue;
        }

        current_word.push(c);
        i += 1;
    }

    if !current_word.is_empty() {
        let style = get_keyword_style(&current_word, false);
        spans.push(Span::styled(current_word, style));
    }

    spans
}

fn get_keyword_style(word: &str, is_function: bool) -> Style {
    match word {
        "let" | "const" | "var" => Style::default().fg(DEFAULT_THEME.type_name),
        "for" | "of" | "do" | "while" | "if" | "else" | "break" | "continue" | "return" => {
            Style::default()
                .fg(DEFAULT_THEME.keyword)
                .add_modifier(Modifier::BOLD)
        }
        "true" | "false" | "null" | "undefined" => Style::default().fg(DEFAULT_THEME.number),
        _ => {
            if word.chars().all(|c| c.is_ascii_digit()) {
                Style::default().fg(DEFAULT_THEME.number)
            } else if is_function {
                Style::default().fg(DEFAULT_THEME.function)
            } else {
                Style::default().fg(DEFAULT_THEME.fg)
            }
        }
    }
}

/// Render the code pane.
///
/// `highlights` holds the 0-based listing lines the current phase touches.
pub fn render_code_pane(
    frame: &mut Frame,
    area: Rect,
    title: &str,
    listing: &[String],
    highlights: &[usize],
    is_focused: bool,
) {
    let border_style = if is_focused {
        Style::default()
            .fg(DEFAULT_THEME.border_focused)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(DEFAULT_THEME.border_normal)
    };

    let block = Block::default()
        .title(format!(" {} ", title))
        .borders(Borders::ALL)
        .border_style(border_style);

    let number_width = listing.len().to_string().len().max(2);

    let lines: Vec<Line> = listing
        .iter()
        .enumerate()
        .map(|(index, text)| {
            let is_current = highlights.contains(&index);

            let marker = if is_current { "→ " } else { "  " };
            let mut spans = vec![
                Span::styled(
                    marker,
                    Style::default()
                        .fg(DEFAULT_THEME.secondary)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::styled(
                    format!("{:>width$} ", index + 1, width = number_width),
                    Style::default().fg(DEFAULT_THEME.comment),
                ),
            ];
            spans.extend(highlight_source_line(text));

            let line = Line::from(spans);
            if is_current {
                line.style(Style::default().bg(DEFAULT_THEME.current_line_bg))
            } else {
                line
            }
        })
        .collect();

    let paragraph = Paragraph::new(lines).block(block);
    frame.render_widget(paragraph, area);
}
