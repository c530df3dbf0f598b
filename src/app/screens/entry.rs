//! Entry modal implementation
//!
//! The single shared data-entry popup. The same modal serves all three
//! entry kinds; only the prompt differs. Rendered over the overview with
//! a cleared background.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::app::state::{EntryKind, TrackerState};
use crate::util::Labels;

/// Render the entry modal over the current frame
pub fn render(f: &mut Frame, kind: EntryKind, state: &TrackerState, labels: &Labels) {
    let area = centered_rect(50, 9, f.size());
    f.render_widget(Clear, area);

    let block = Block::default()
        .title(kind.prompt(labels))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(3), // Input field
            Constraint::Length(1), // Error line
            Constraint::Length(1), // Hints
        ])
        .split(inner);

    let input = Paragraph::new(format!("{}_", state.input_buffer()))
        .style(Style::default().fg(Color::Yellow))
        .block(Block::default().title(labels.amount).borders(Borders::ALL));
    f.render_widget(input, chunks[0]);

    if state.has_input_error() {
        let error = Paragraph::new(labels.invalid_amount)
            .style(Style::default().fg(Color::Red).add_modifier(Modifier::BOLD));
        f.render_widget(error, chunks[1]);
    }

    let hints = Line::from(vec![
        Span::styled("Enter", Style::default().fg(Color::Cyan)),
        Span::raw(format!(" {}  ", labels.submit)),
        Span::styled("Esc", Style::default().fg(Color::Cyan)),
        Span::raw(format!(" {}", labels.cancel)),
    ]);
    f.render_widget(
        Paragraph::new(hints).style(Style::default().fg(Color::Gray)),
        chunks[2],
    );
}

fn centered_rect(percent_x: u16, height: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),
            Constraint::Length(height),
            Constraint::Min(0),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_centered_rect_is_inside_parent() {
        let parent = Rect::new(0, 0, 100, 40);
        let popup = centered_rect(50, 9, parent);

        assert_eq!(popup.width, 50);
        assert_eq!(popup.height, 9);
        assert!(popup.x >= parent.x && popup.right() <= parent.right());
        assert!(popup.y >= parent.y && popup.bottom() <= parent.bottom());
    }
}
