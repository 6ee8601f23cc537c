use ratatui::{
    Frame,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
};

use crate::event::{AppKeyEvent, KeyCode};
use crate::state::ConfirmModal;

use super::{ModalResult, centered_rect};

const MODAL_WIDTH: u16 = 50;
const MODAL_HEIGHT: u16 = 7;

fn answer_line() -> Line<'static> {
    Line::from(vec![
        Span::styled("[y]", Style::default().fg(Color::Red)),
        Span::raw(" Leave  "),
        Span::styled("[n/Esc]", Style::default().fg(Color::Green)),
        Span::raw(" Stay"),
    ])
}

/// Render the confirm modal centred over the current screen
pub fn render_confirm_modal(frame: &mut Frame, modal: &ConfirmModal) {
    let area = centered_rect(MODAL_WIDTH, MODAL_HEIGHT, frame.area());
    frame.render_widget(Clear, area);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Yellow))
        .title(format!(" {} ", modal.title));

    let body = Paragraph::new(vec![
        Line::default(),
        Line::styled(
            modal.message.as_str(),
            Style::default().add_modifier(Modifier::BOLD),
        ),
        Line::default(),
        answer_line(),
    ])
    .block(block)
    .wrap(Wrap { trim: true });

    frame.render_widget(body, area);
}

/// Handle key events for confirm modal
pub fn handle_confirm_key(key: &AppKeyEvent, modal: &ConfirmModal) -> ModalResult {
    match key.code {
        KeyCode::Char('y') | KeyCode::Char('Y') => ModalResult::Confirmed(modal.action),
        KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => ModalResult::Cancelled,
        _ => ModalResult::Continue,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::ModalAction;

    #[test]
    fn test_confirm_keys() {
        let modal = ConfirmModal::new("Leave", "Leave?", ModalAction::Leave);

        let result = handle_confirm_key(&AppKeyEvent::plain(KeyCode::Char('y')), &modal);
        assert_eq!(result, ModalResult::Confirmed(ModalAction::Leave));

        let result = handle_confirm_key(&AppKeyEvent::plain(KeyCode::Esc), &modal);
        assert_eq!(result, ModalResult::Cancelled);

        let result = handle_confirm_key(&AppKeyEvent::plain(KeyCode::Char('x')), &modal);
        assert_eq!(result, ModalResult::Continue);
    }

    #[test]
    fn test_answer_line_names_both_choices() {
        let text: String = answer_line()
            .spans
            .iter()
            .map(|span| span.content.to_string())
            .collect();
        assert_eq!(text, "[y] Leave  [n/Esc] Stay");
    }
}
