//! Main rendering logic for TUI.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout};
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::fmt::render_report;
use crate::model::Snapshot;

/// Draws the report with a one-line key hint at the bottom.
pub fn render(frame: &mut Frame, snapshot: &Snapshot) {
    let chunks = Layout::vertical([
        Constraint::Min(0),    // Report
        Constraint::Length(1), // Footer
    ])
    .split(frame.area());

    frame.render_widget(Paragraph::new(render_report(snapshot)), chunks[0]);

    let footer = Line::from(vec![
        Span::styled("    q", Style::default().fg(Color::Yellow)),
        Span::styled(" or ", Style::default().fg(Color::DarkGray)),
        Span::styled("Ctrl+C", Style::default().fg(Color::Yellow)),
        Span::styled(" quit, any other key refreshes", Style::default().fg(Color::DarkGray)),
    ]);
    frame.render_widget(Paragraph::new(footer), chunks[1]);
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;
    use ratatui::buffer::Buffer;

    fn line_string(buf: &Buffer, y: u16) -> String {
        let mut line = String::new();
        for x in 0..buf.area.width {
            line.push_str(buf[(x, y)].symbol());
        }
        line
    }

    fn draw(snapshot: &Snapshot, width: u16, height: u16) -> Vec<String> {
        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        terminal.draw(|frame| render(frame, snapshot)).unwrap();
        let buf = terminal.backend().buffer();
        (0..height).map(|y| line_string(buf, y)).collect()
    }

    #[test]
    fn test_render_report_lines() {
        let snapshot = Snapshot {
            hostname: "devbox".to_string(),
            username: "alice".to_string(),
            ..Snapshot::default()
        };
        let lines = draw(&snapshot, 60, 20);

        assert_eq!(lines[0].trim_end(), "");
        assert_eq!(lines[1].trim_end(), "    alice@devbox");
        assert_eq!(lines[2].trim_end(), "    ------------");
        assert!(lines[3].starts_with("    OS: Invalid Invalid"));
        assert!(lines[19].contains("q or Ctrl+C quit"));
    }

    #[test]
    fn test_render_small_terminal() {
        // The footer keeps its row even when the report is clipped
        let lines = draw(&Snapshot::default(), 40, 4);
        assert!(lines[3].contains("quit"));
    }
}
