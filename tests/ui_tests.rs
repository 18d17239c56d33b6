// Rendering tests for the pane functions, drawn into an in-memory backend

use ratatui::backend::TestBackend;
use ratatui::Terminal;

use steptty::ui::panes::{render_code_pane, render_status_bar};
use steptty::ui::theme::DEFAULT_THEME;

#[test]
fn status_badge_draws_in_theme_colors() {
    let backend = TestBackend::new(80, 1);
    let mut terminal = Terminal::new(backend).unwrap();

    terminal
        .draw(|frame| {
            render_status_bar(frame, frame.area(), "Ready!", "for", 0, false, false)
        })
        .unwrap();

    // The badge starts at the left edge; every cell of it carries the theme
    // base color as text on the primary background
    let cell = &terminal.backend().buffer()[(1, 0)];
    assert_eq!(cell.fg, DEFAULT_THEME.bg);
    assert_eq!(cell.bg, DEFAULT_THEME.primary);
}

#[test]
fn status_badge_background_tracks_play_state() {
    let cases = [
        (true, false, DEFAULT_THEME.secondary), // playing
        (false, true, DEFAULT_THEME.success),   // done
    ];

    for (is_playing, is_done, expected_bg) in cases {
        let backend = TestBackend::new(80, 1);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|frame| {
                render_status_bar(frame, frame.area(), "", "for", 3, is_playing, is_done)
            })
            .unwrap();

        let cell = &terminal.backend().buffer()[(1, 0)];
        assert_eq!(cell.bg, expected_bg);
        assert_eq!(cell.fg, DEFAULT_THEME.bg);
    }
}

#[test]
fn code_pane_marks_only_highlighted_lines() {
    let backend = TestBackend::new(40, 6);
    let mut terminal = Terminal::new(backend).unwrap();

    let listing = vec![
        "let i = 0;".to_string(),
        "console.log(i);".to_string(),
        "i++;".to_string(),
    ];
    terminal
        .draw(|frame| render_code_pane(frame, frame.area(), "for loop", &listing, &[1], true))
        .unwrap();

    let buffer = terminal.backend().buffer();
    // Row 0 is the border; listing line N renders on row N + 1, with the
    // arrow marker in the first column inside the border
    assert_eq!(buffer[(1, 1)].symbol(), " ");
    assert_eq!(buffer[(1, 2)].symbol(), "→");
    assert_eq!(buffer[(1, 3)].symbol(), " ");
    assert_eq!(buffer[(1, 2)].bg, DEFAULT_THEME.current_line_bg);
}
